// src/cli.rs
use std::env;

use color_eyre::eyre::{WrapErr, bail};

use crate::config::options::RunOptions;
use crate::progress::Progress;
use crate::runner::{self, RunSummary, TableReport};
use crate::store::MergeOutcome;

const HELP: &str = include_str!("cli_help.txt");

pub enum Mode {
    Help,
    Run,
}

/// Entry point of the `rvdss_scrape` binary.
pub fn run() -> color_eyre::Result<()> {
    match parse_args(env::args().skip(1))? {
        Mode::Help => {
            println!("{HELP}");
            Ok(())
        }
        Mode::Run => {
            crate::log::init();
            let options = RunOptions::default();
            let mut progress = PrintProgress::default();
            let summary = runner::run(&options, Some(&mut progress))
                .inspect_err(|e| loge!("run failed: {e}"))
                .wrap_err("Dashboard update failed")?;
            print_summary(&summary);
            Ok(())
        }
    }
}

/// The binary takes no options; everything comes from `config::consts`.
pub fn parse_args<I>(args: I) -> color_eyre::Result<Mode>
where
    I: IntoIterator<Item = String>,
{
    let mut mode = Mode::Run;
    for a in args {
        match a.as_str() {
            "-h" | "--help" => mode = Mode::Help,
            _ => bail!("Unknown arg: {a} (try --help)"),
        }
    }
    Ok(mode)
}

/// Prints one status line per event on stderr.
#[derive(Default)]
struct PrintProgress {
    total: usize,
    done: usize,
}

impl Progress for PrintProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }

    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }

    fn item_done(&mut self, table: &str) {
        self.done += 1;
        eprintln!("[{}/{}] {table}", self.done, self.total);
    }
}

fn print_summary(summary: &RunSummary) {
    println!("issue {} ({})", summary.issue, summary.season);
    for report in [&summary.detections, &summary.positive] {
        println!("{}", describe(report));
    }
}

fn describe(report: &TableReport) -> String {
    let what = match report.outcome {
        MergeOutcome::Created { rows } => format!("created with {rows} rows"),
        MergeOutcome::Appended { rows } => format!("appended {rows} rows"),
        MergeOutcome::Unchanged => s!("unchanged, snapshot already stored"),
    };
    format!("{}: {what}", report.path.display())
}
