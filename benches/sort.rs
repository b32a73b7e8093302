// benches/sort.rs
use criterion::{criterion_group, criterion_main, BatchSize, Criterion, black_box};

use totalscrobbles::sort::{attach, Column, Registry, TableSorter};
use totalscrobbles::table::{Cell, Row, Tbody};

/// Synthetic chart: pseudo-random counts and durations, lots of ties.
fn sample_body(n: usize) -> Tbody {
    let mut x: u64 = 0x2545_F491_4F6C_DD1D;
    let rows = (0..n)
        .map(|i| {
            x ^= x << 13; x ^= x >> 7; x ^= x << 17;
            let plays = x % 50_000;
            let secs = 60 + (x >> 20) % 540;
            Row::new(i, vec![
                Cell::hidden("positionCell", &(i + 1).to_string()),
                Cell::new("subjectCell", &format!("Track {}", i + 1)),
                Cell::new("durationCell", &format!("{}:{:02}", secs / 60, secs % 60)),
                Cell::new("reachCell", &format!("{} listeners", plays / 3)),
                Cell::new("playCount", &plays.to_string()),
            ])
        })
        .collect();
    Tbody::new(rows)
}

fn bench_sort(c: &mut Criterion) {
    let body = sample_body(1_000);

    for column in [Column::Plays, Column::Duration, Column::Listeners] {
        c.bench_function(&format!("sort_1000_{}", column), |b| {
            b.iter_batched(
                || (body.clone(), TableSorter::initialize(Registry::standard(), Column::Track)),
                |(mut tb, mut sorter)| {
                    attach(&mut tb, column).fire(&mut sorter);
                    black_box(tb.len())
                },
                BatchSize::SmallInput,
            )
        });
    }

    c.bench_function("toggle_plays_1000", |b| {
        let mut tb = body.clone();
        let mut sorter = TableSorter::initialize(Registry::standard(), Column::Track);
        b.iter(|| {
            attach(&mut tb, Column::Plays).fire(&mut sorter);
            black_box(tb.len())
        })
    });
}

criterion_group!(benches, bench_sort);
criterion_main!(benches);
