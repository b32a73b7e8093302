// src/cli.rs
use std::{error::Error, fs, io::{self, BufWriter}, path::PathBuf};

use crate::{
    config::{
        consts::INITIAL_SORTED_COLUMN,
        options::{ExportFormat, Options, Source},
    },
    csv,
    progress::Progress,
    scrape,
    sort::{attach, Column, Registry, TableSorter},
    specs::tracklist,
    table::Tracklist,
};

/// Parse `std::env::args()` and run.
pub fn run_from_env() -> Result<(), Box<dyn Error>> {
    let opts = parse_args(std::env::args().skip(1))?;
    run(&opts)
}

pub fn run(opts: &Options) -> Result<(), Box<dyn Error>> {
    let registry = Registry::standard();

    if opts.list_columns {
        for def in registry.iter() {
            println!("{},{:?}", def.column, def.initial);
        }
        return Ok(());
    }

    let source = opts.source.as_ref().ok_or("Specify --in <file> or --url <path>")?;
    let mut tl = tracklist::load(source)?;

    if opts.fetch_scrobbles {
        let links = tl.scrobble_links();
        let mut progress = CliProgress::default();
        let counts = scrape::collect_scrobbles(&links, Some(&mut progress));
        let n = tl.apply_scrobbles(&counts);
        logf!("CLI: applied {} of {} scrobble counts", n, links.len());
    }

    let mut sorter = TableSorter::initialize(registry, INITIAL_SORTED_COLUMN);
    replay_sorts(&mut tl, &mut sorter, &opts.sorts);

    match &opts.export.out_path {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            let file = fs::File::create(path)?;
            csv::write_tracklist(BufWriter::new(file), &tl, &opts.export)?;
            eprintln!("Wrote {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            csv::write_tracklist(stdout.lock(), &tl, &opts.export)?;
        }
    }
    Ok(())
}

/// Replay header clicks in order. A column the page has no header for is
/// skipped. Returns how many clicks fired.
pub fn replay_sorts(tl: &mut Tracklist, sorter: &mut TableSorter, sorts: &[Column]) -> usize {
    let headers = tl.sortable_columns(sorter.registry());
    let mut fired = 0;
    for &column in sorts {
        if !headers.contains(&column) {
            logd!("CLI: no {} header on this page, click skipped", column);
            eprintln!("No {column} column on this page, --sort {column} skipped");
            continue;
        }
        attach(&mut tl.body, column).fire(sorter);
        fired += 1;
    }
    fired
}

pub fn parse_args<I>(args: I) -> Result<Options, Box<dyn Error>>
where
    I: IntoIterator<Item = String>,
{
    let mut opts = Options::default();
    let mut args = args.into_iter();

    while let Some(a) = args.next() {
        match a.as_str()
        {
            "--in" => {
                let v = args.next().ok_or("Missing value for --in")?;
                opts.source = Some(Source::File(PathBuf::from(v)));}
            "--url" => {
                let v = args.next().ok_or("Missing value for --url")?;
                opts.source = Some(Source::Remote(v));}
            "--sort" => {
                let v = args.next().ok_or("Missing value for --sort")?;
                opts.sorts.push(v.parse::<Column>()?);}
            "--scrobbles" => opts.fetch_scrobbles = true,
            "--list-columns" => opts.list_columns = true,
            "-o" | "--out" => opts.export.out_path = Some(PathBuf::from(args.next().ok_or("Missing output path")?)),
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                opts.export.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => ExportFormat::Csv,
                    "tsv" => ExportFormat::Tsv,
                    other => return Err(format!("Unknown format: {}", other).into()),
                };}
            "--include-headers" => opts.export.include_headers = true,
            "--stripes" => opts.export.show_stripes = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(opts)
}

/// Prints fetch progress to stderr so stdout stays clean for the table.
#[derive(Default)]
struct CliProgress {
    done: usize,
    failed: usize,
    total: usize,
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn item_done(&mut self, _id: usize, label: &str) {
        self.done += 1;
        eprintln!("[{}/{}] {}", self.done + self.failed, self.total, label);
    }
    fn item_failed(&mut self, _id: usize, label: &str) {
        self.failed += 1;
        eprintln!("[{}/{}] {} (failed)", self.done + self.failed, self.total, label);
    }
    fn finish(&mut self) {
        eprintln!("Fetched {} play counts, {} failed", self.done, self.failed);
    }
}
