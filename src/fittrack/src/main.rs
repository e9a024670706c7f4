#[macro_use]
extern crate log;

use std::io;

use anyhow::bail;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use dotenv::dotenv;
use fittrack::{BatchMode, Driver, OutputFormat, sample_packages};
use fittrack_codec::WorkoutPackage;
use fittrack_types::WorkoutKind;
use strum::IntoEnumIterator as _;

#[derive(Parser)]
#[command(version, about = "Workout distance, speed and calorie summaries")]
pub struct FitTrackCli {
    #[arg(long, env = "FITTRACK_FORMAT", value_enum, default_value_t, global = true)]
    pub format: OutputFormat,
    #[arg(
        long,
        env = "FITTRACK_CONTINUE_ON_ERROR",
        value_parser = clap::builder::BoolishValueParser::new(),
        global = true
    )]
    pub continue_on_error: bool,
    #[clap(subcommand)]
    pub subcommand: FitTrackCommand,
}

#[derive(Subcommand)]
pub enum FitTrackCommand {
    ///
    /// Summarize the built-in sample packages
    ///
    Demo,
    ///
    /// Summarize packages given as CODE:reading,reading,...
    /// e.g. `RUN:15000,1,75`
    ///
    Summarize {
        #[arg(required = true)]
        packages: Vec<WorkoutPackage>,
    },
    ///
    /// List workout codes and their reading layout
    ///
    Kinds,
    ///
    /// Print shell completions
    ///
    Completions { shell: Shell },
}

fn main() -> anyhow::Result<()> {
    let env_file = dotenv();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(error) = env_file {
        debug!(".env not loaded: {}", error);
    }

    let cli = FitTrackCli::parse();
    let mode = if cli.continue_on_error {
        BatchMode::ContinueOnError
    } else {
        BatchMode::StopOnError
    };

    match cli.subcommand {
        FitTrackCommand::Demo => summarize(sample_packages(), mode, cli.format),
        FitTrackCommand::Summarize { packages } => summarize(packages, mode, cli.format),
        FitTrackCommand::Kinds => {
            for kind in WorkoutKind::iter() {
                println!("{}\t{}\t{}", kind.code(), kind, kind.fields().join(","));
            }
            Ok(())
        }
        FitTrackCommand::Completions { shell } => {
            clap_complete::generate(shell, &mut FitTrackCli::command(), "fittrack", &mut io::stdout());
            Ok(())
        }
    }
}

fn summarize(
    packages: Vec<WorkoutPackage>,
    mode: BatchMode,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let mut driver = Driver::new(io::stdout().lock())
        .with_mode(mode)
        .with_format(format);

    let report = driver.run(&packages)?;
    if !report.is_success() {
        bail!(
            "{} of {} packages rejected",
            report.failures.len(),
            packages.len()
        );
    }

    Ok(())
}
