// tests/cli_args.rs
//
// Argument parsing and an offline end-to-end run from a saved page.
//
use std::fs;
use std::path::PathBuf;

use totalscrobbles::cli;
use totalscrobbles::config::options::{ExportFormat, Source};
use totalscrobbles::sort::{Column, Registry, TableSorter};
use totalscrobbles::specs::tracklist;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn tmp(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(name);
    p
}

#[test]
fn parses_sources_sorts_and_output() {
    let o = cli::parse_args(args(&[
        "--in", "page.html", "--sort", "plays", "--sort", "Plays", "--sort", "track",
        "--format", "tsv", "-o", "out/sorted.tsv", "--include-headers", "--stripes", "--scrobbles",
    ]))
    .unwrap();

    assert_eq!(o.source, Some(Source::File(PathBuf::from("page.html"))));
    assert_eq!(o.sorts, vec![Column::Plays, Column::Plays, Column::Track]);
    assert_eq!(o.export.format, ExportFormat::Tsv);
    assert_eq!(o.export.out_path, Some(PathBuf::from("out/sorted.tsv")));
    assert!(o.export.include_headers && o.export.show_stripes && o.fetch_scrobbles);

    let o = cli::parse_args(args(&["--url", "/music/Cher/+tracks"])).unwrap();
    assert_eq!(o.source, Some(Source::Remote("/music/Cher/+tracks".into())));
    assert!(o.sorts.is_empty());
    assert_eq!(o.export.format, ExportFormat::Csv);
}

#[test]
fn rejects_bad_input() {
    assert!(cli::parse_args(args(&["--sort", "rating"])).is_err());
    assert!(cli::parse_args(args(&["--sort"])).is_err());
    assert!(cli::parse_args(args(&["--format", "json"])).is_err());
    assert!(cli::parse_args(args(&["--bogus"])).is_err());
}

#[test]
fn run_needs_a_source() {
    let o = cli::parse_args(args(&["--sort", "plays"])).unwrap();
    assert!(cli::run(&o).is_err());
}

#[test]
fn run_sorts_saved_page_into_file() {
    let page = tmp("totalscrobbles_cli_page.html");
    fs::write(&page, r#"
        <table class="tracklist">
        <thead><tr><td class="subjectCell">Track</td><td class="playCount">Plays</td></tr></thead>
        <tbody>
          <tr><td class="subjectCell">One</td><td class="playCount">10</td></tr>
          <tr><td class="subjectCell">Two</td><td class="playCount">50</td></tr>
          <tr><td class="subjectCell">Three</td><td class="playCount">30</td></tr>
        </tbody></table>"#).unwrap();
    let out = tmp("totalscrobbles_cli_out.csv");

    let o = cli::parse_args(args(&[
        "--in", page.to_str().unwrap(), "--sort", "plays", "-o", out.to_str().unwrap(),
    ]))
    .unwrap();
    cli::run(&o).unwrap();

    let text = fs::read_to_string(&out).unwrap();
    assert_eq!(text, "Two,50\nThree,30\nOne,10\n");
}

#[test]
fn sorts_without_a_header_are_skipped() {
    // chart layout: Track, Listeners and Scrobbles headers, no Duration
    let mut tl = tracklist::parse(r#"
        <section><span id="trackChart"></span><table><tbody>
          <tr><td class="positionCell">1</td><td class="subjectCell">A</td>
            <td class="durationCell">9:00</td><td class="reachCell">10</td></tr>
          <tr><td class="positionCell">2</td><td class="subjectCell">B</td>
            <td class="durationCell">1:00</td><td class="reachCell">30</td></tr>
        </tbody></table></section>"#).unwrap();
    let mut sorter = TableSorter::initialize(Registry::standard(), Column::Track);

    let fired = cli::replay_sorts(&mut tl, &mut sorter, &[Column::Duration]);
    assert_eq!(fired, 0);
    assert_eq!(tl.body.ids(), vec![0, 1]);

    let fired = cli::replay_sorts(&mut tl, &mut sorter, &[Column::Duration, Column::Listeners]);
    assert_eq!(fired, 1);
    assert_eq!(tl.body.ids(), vec![1, 0]);
}
