// tests/scrobble_pool.rs
//
// Worker pool behaviour with a fake fetch (no network).
//
use totalscrobbles::progress::Progress;
use totalscrobbles::scrape;

#[derive(Default)]
struct Tally {
    total: usize,
    done: Vec<usize>,
    failed: Vec<usize>,
    finished: bool,
}

impl Progress for Tally {
    fn begin(&mut self, total: usize) { self.total = total; }
    fn item_done(&mut self, id: usize, _label: &str) { self.done.push(id); }
    fn item_failed(&mut self, id: usize, _label: &str) { self.failed.push(id); }
    fn finish(&mut self) { self.finished = true; }
}

fn links(n: usize) -> Vec<(usize, String)> {
    (0..n).map(|i| (i * 10, format!("/music/Band/_/T{}", i))).collect()
}

#[test]
fn collects_counts_and_skips_failures() {
    let mut tally = Tally::default();
    let got = scrape::collect_with(
        &links(6),
        |link| {
            if link.ends_with("T3") { Err("HTTP error: 404".to_string()) }
            else { Ok(format!("{}", link.len())) }
        },
        Some(&mut tally),
    );

    let ids: Vec<usize> = got.iter().map(|(id, _)| *id).collect();
    assert_eq!(ids, vec![0, 10, 20, 40, 50]);
    assert_eq!(got[0].1, "16");

    assert_eq!(tally.total, 6);
    assert_eq!(tally.done.len(), 5);
    assert_eq!(tally.failed, vec![30]);
    assert!(tally.finished);
}

#[test]
fn empty_input_finishes_immediately() {
    let mut tally = Tally::default();
    let got = scrape::collect_with(&[], |_| Ok(String::new()), Some(&mut tally));
    assert!(got.is_empty());
    assert!(tally.finished);
    assert_eq!(tally.total, 0);
}
