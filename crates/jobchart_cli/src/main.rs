//! `jobchart` terminal host.
//!
//! # Responsibility
//! - Map CLI flags and env vars onto a job chart session.
//! - Print notices, saved rosters and the job board to stdout.
//!
//! Roster inputs start from the saved rosters; `--third` / `--second` files
//! replace an input before the action runs.

mod terminal;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use jobchart_core::db::open_db;
use jobchart_core::{
    default_log_level, init_logging, AssignOutcome, AssignmentService, Grade, JobChartService,
    RosterInputs, RosterStore, SlotBoard, SqliteKeyValueStore,
};
use log::info;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use terminal::{render_inputs, TerminalNotifier};

const DEFAULT_DB_FILE_NAME: &str = "jobchart.sqlite3";
const EXIT_OK: u8 = 0;
/// Assign was refused because both rosters are empty.
const EXIT_EMPTY_ROSTERS: u8 = 1;

#[derive(Debug, Parser)]
#[command(
    name = "jobchart",
    version,
    about = "Randomly assign classroom jobs from a 3rd grade and a 2nd grade roster"
)]
struct Cli {
    /// SQLite file holding the saved rosters.
    #[arg(long, global = true, env = "JOBCHART_DB_PATH", default_value = DEFAULT_DB_FILE_NAME)]
    db: PathBuf,

    /// Directory for rolling log files; logging is off when unset.
    #[arg(long, global = true, env = "JOBCHART_LOG_DIR")]
    log_dir: Option<PathBuf>,

    /// trace|debug|info|warn|error
    #[arg(long, global = true, env = "JOBCHART_LOG_LEVEL")]
    log_level: Option<String>,

    /// Seed for reproducible assignments.
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the saved rosters.
    Show,
    /// Save the rosters.
    Save(RosterFiles),
    /// Assign jobs and print the board. Also saves the rosters.
    Assign(RosterFiles),
    /// Delete the saved rosters and reset the board.
    Clear,
}

/// Files replacing a roster input, one name per line.
#[derive(Debug, Args)]
struct RosterFiles {
    #[arg(long, value_name = "FILE")]
    third: Option<PathBuf>,

    #[arg(long, value_name = "FILE")]
    second: Option<PathBuf>,
}

impl RosterFiles {
    fn apply(&self, inputs: &mut RosterInputs) -> Result<()> {
        for (grade, file) in [(Grade::Third, &self.third), (Grade::Second, &self.second)] {
            if let Some(path) = file {
                let text = std::fs::read_to_string(path).with_context(|| {
                    format!("failed to read {} roster `{}`", grade.label(), path.display())
                })?;
                inputs.set_text(grade, text);
            }
        }
        Ok(())
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(status) => ExitCode::from(status),
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<u8> {
    if let Some(log_dir) = &cli.log_dir {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        let log_dir = absolute(log_dir)?;
        init_logging(level, &log_dir.to_string_lossy()).map_err(anyhow::Error::msg)?;
    }

    let conn = open_db(&cli.db)
        .with_context(|| format!("failed to open roster database `{}`", cli.db.display()))?;
    let store = RosterStore::new(SqliteKeyValueStore::try_new(&conn)?);
    let assigner = match cli.seed {
        Some(seed) => AssignmentService::with_seed(store, seed),
        None => AssignmentService::with_entropy(store),
    };
    let mut session =
        JobChartService::open(assigner, SlotBoard::job_chart(), TerminalNotifier::stdout())?;
    info!("event=cli_command module=cli status=start command={:?}", cli.command);

    match &cli.command {
        Command::Show => print!("{}", render_inputs(session.inputs())),
        Command::Save(files) => {
            files.apply(session.inputs_mut())?;
            session.save()?;
        }
        Command::Assign(files) => {
            files.apply(session.inputs_mut())?;
            if session.assign()? == AssignOutcome::EmptyRosters {
                return Ok(EXIT_EMPTY_ROSTERS);
            }
            print!("{}", session.target().render_text());
        }
        Command::Clear => {
            session.clear()?;
            print!("{}", session.target().render_text());
        }
    }
    Ok(EXIT_OK)
}

fn absolute(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().context("failed to resolve current directory")?;
    Ok(cwd.join(path))
}
