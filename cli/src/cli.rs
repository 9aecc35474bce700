pub(crate) mod value;

use self::value::{LogLevel, TimestampArg};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Track countdown and age items from the command line.
#[derive(Parser, Debug)]
#[command(name = "tempo", version, about, arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) commands: Commands,
    /// Verbosity of diagnostic output on stderr
    #[arg(long, global = true, value_enum, default_value_t)]
    pub(crate) log_level: LogLevel,
}

impl Cli {
    pub fn init_logger(&self) -> anyhow::Result<()> {
        fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!("[{}] {message}", record.level()))
            })
            .level(self.log_level.as_level_filter())
            .chain(std::io::stderr())
            .apply()?;
        Ok(())
    }

    pub fn execute(self) -> anyhow::Result<()> {
        crate::command::entry(self)
    }
}

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Evaluate items once and print their current state
    Show(ShowArgs),
    /// Re-evaluate items on a fixed tick and print one line per item
    Watch(WatchArgs),
}

#[derive(Args, Debug)]
pub(crate) struct ShowArgs {
    /// JSON file holding the item list
    pub(crate) items: PathBuf,
    /// Evaluate against this instant instead of the wall clock
    #[arg(long)]
    pub(crate) now: Option<TimestampArg>,
}

#[derive(Args, Debug)]
pub(crate) struct WatchArgs {
    /// JSON file holding the item list
    pub(crate) items: PathBuf,
    /// Seconds between re-evaluations
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    pub(crate) interval: u64,
    /// Stop after this many ticks instead of running until interrupted
    #[arg(long)]
    pub(crate) ticks: Option<u64>,
}
