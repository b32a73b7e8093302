// tests/sort_engine.rs
//
// Header-click behaviour of the sort engine on plain in-memory rows.
//
use totalscrobbles::sort::{
    attach, make_compare, reorder, Column, Direction, Registry, RowContainer, SortOrder, TableRow,
    TableSorter,
};
use totalscrobbles::table::{Cell, Row, Tbody};

fn row(id: usize, class: &str, text: &str) -> Row {
    Row::new(id, vec![Cell::new(class, text)])
}

fn body(class: &str, texts: &[&str]) -> Tbody {
    Tbody::new(texts.iter().enumerate().map(|(i, t)| row(i, class, t)).collect())
}

fn texts(tb: &Tbody, class: &str) -> Vec<String> {
    tb.rows().iter().map(|r| r.cell_text(class).unwrap_or("").to_string()).collect()
}

fn sorter() -> TableSorter {
    TableSorter::initialize(Registry::standard(), Column::Track)
}

#[test]
fn durations_sort_ascending_on_first_click() {
    let mut tb = body("durationCell", &["3:05", "2:00", "4:10"]);
    let mut s = sorter();
    attach(&mut tb, Column::Duration).fire(&mut s);

    assert_eq!(texts(&tb, "durationCell"), vec!["2:00", "3:05", "4:10"]);
    let reg = Registry::standard();
    let keys: Vec<i64> = tb.rows().iter().map(|r| reg.get(Column::Duration).extract(r)).collect();
    assert_eq!(keys, vec![120, 185, 250]);
}

#[test]
fn plays_click_then_click_again() {
    let mut tb = body("playCount", &["10", "50", "30"]);
    let mut s = sorter();

    let mut handler = attach(&mut tb, Column::Plays);
    handler.fire(&mut s);
    drop(handler);
    assert_eq!(texts(&tb, "playCount"), vec!["50", "30", "10"]);

    attach(&mut tb, Column::Plays).fire(&mut s);
    assert_eq!(texts(&tb, "playCount"), vec!["10", "30", "50"]);
    assert_eq!(s.current(), (Column::Plays, Direction::Ascending));
}

#[test]
fn handler_rereads_rows_on_every_fire() {
    let mut tb = body("playCount", &["1", "3", "2"]);
    let mut s = sorter();
    {
        let mut h = attach(&mut tb, Column::Plays);
        h.fire(&mut s);
        h.fire(&mut s);
    }
    assert_eq!(texts(&tb, "playCount"), vec!["1", "2", "3"]);
}

#[test]
fn listener_text_with_separators() {
    let r = row(0, "reachCell", "1,234 listeners");
    assert_eq!(Registry::standard().get(Column::Listeners).extract(&r), 1234);
}

#[test]
fn malformed_and_missing_cells_sort_as_zero() {
    let mut tb = Tbody::new(vec![
        row(0, "durationCell", "1:00"),
        row(1, "durationCell", "live"),
        row(2, "reachCell", "9"),
        row(3, "durationCell", "0:30"),
    ]);
    let mut s = sorter();
    attach(&mut tb, Column::Duration).fire(&mut s);
    assert_eq!(tb.ids(), vec![1, 2, 3, 0]);
}

#[test]
fn ties_keep_input_order_both_directions() {
    let mut tb = body("playCount", &["5", "7", "5", "7", "5"]);
    let mut s = sorter();

    attach(&mut tb, Column::Plays).fire(&mut s); // descending
    assert_eq!(tb.ids(), vec![1, 3, 0, 2, 4]);

    attach(&mut tb, Column::Plays).fire(&mut s); // ascending
    assert_eq!(tb.ids(), vec![0, 2, 4, 1, 3]);
}

#[test]
fn resorting_with_same_comparator_is_identity() {
    let reg = Registry::standard();
    let def = reg.get(Column::Listeners);
    let mut tb = body("reachCell", &["3", "1", "2", "1", "3"]);

    reorder(&mut tb, make_compare::<Row>(def, Direction::Descending));
    let once = tb.ids();
    reorder(&mut tb, make_compare::<Row>(def, Direction::Descending));
    assert_eq!(tb.ids(), once);
}

#[test]
fn empty_body_is_a_no_op() {
    let mut tb = Tbody::default();
    let mut s = sorter();
    attach(&mut tb, Column::Plays).fire(&mut s);
    assert!(tb.is_empty());
    assert_eq!(s.current(), (Column::Plays, Direction::Descending));
}

#[test]
fn restore_law_across_columns() {
    let reg = Registry::standard();
    for c1 in Column::ALL {
        for c2 in Column::ALL {
            if c1 == c2 { continue; }
            let mut order = SortOrder::seeded(&reg, Column::Track);
            let first = order.next_direction(&reg, c1);
            order.next_direction(&reg, c2);
            assert_eq!(order.next_direction(&reg, c1), first, "{c1} after {c2}");
        }
    }
}

#[test]
fn toggle_law_for_every_column() {
    let reg = Registry::standard();
    for c in Column::ALL {
        let mut order = SortOrder::seeded(&reg, Column::Track);
        let a = order.next_direction(&reg, c);
        let b = order.next_direction(&reg, c);
        assert_eq!(b, a.flipped(), "{c}");
    }
}

#[test]
fn stripes_follow_the_new_order() {
    let mut tb = body("playCount", &["1", "2", "3", "4"]);
    let mut s = sorter();
    attach(&mut tb, Column::Plays).fire(&mut s);

    let stripes: Vec<String> = tb.rows().iter().map(|r| r.stripes()).collect();
    assert_eq!(stripes, vec!["first odd", "", "odd", "last"]);
}

#[test]
fn rows_keep_their_data_through_a_sort() {
    let mut tb = body("playCount", &["1", "2"]);
    tb.rows_mut()[0].link = Some("/music/A/_/One".into());
    let mut s = sorter();
    attach(&mut tb, Column::Plays).fire(&mut s);

    let moved = &tb.rows()[1];
    assert_eq!(moved.id, 0);
    assert_eq!(moved.link.as_deref(), Some("/music/A/_/One"));
}
