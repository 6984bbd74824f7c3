mod commands;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "conflictcal")]
#[command(about = "Register your courses and see where they clash")]
struct Cli {
    /// Course file to use instead of the configured one
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    /// Show debug logs
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only show errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all courses
    List,
    /// Add a course
    Add {
        name: String,

        /// Start time (HH:MM)
        #[arg(short, long)]
        start: String,

        /// End time (HH:MM)
        #[arg(short, long)]
        end: String,

        /// Days the course meets on (e.g. "Monday,Wednesday")
        #[arg(short, long, value_delimiter = ',', required = true)]
        days: Vec<String>,
    },
    /// Change fields of an existing course
    Update {
        id: String,

        #[arg(short, long)]
        name: Option<String>,

        /// Start time (HH:MM)
        #[arg(short, long)]
        start: Option<String>,

        /// End time (HH:MM)
        #[arg(short, long)]
        end: Option<String>,

        /// Days the course meets on (e.g. "Tuesday,Thursday")
        #[arg(short, long, value_delimiter = ',')]
        days: Option<Vec<String>>,
    },
    /// Remove a course
    Remove { id: String },
    /// Show which courses clash
    Conflicts {
        /// Print the conflicting course ids as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the weekly calendar
    Week {
        /// Any date in the week to show (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}", render::render_error(&e));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    init_tracing(cli.quiet, cli.verbose)?;

    let store = commands::CourseStore::open(cli.file)?;

    match cli.command {
        Commands::List => commands::list::run(&store),
        Commands::Add {
            name,
            start,
            end,
            days,
        } => commands::add::run(&store, name, &start, &end, days),
        Commands::Update {
            id,
            name,
            start,
            end,
            days,
        } => commands::update::run(
            &store,
            &id,
            name,
            start.as_deref(),
            end.as_deref(),
            days,
        ),
        Commands::Remove { id } => commands::remove::run(&store, &id),
        Commands::Conflicts { json } => commands::conflicts::run(&store, json),
        Commands::Week { date } => {
            let anchor = match date {
                Some(s) => parse_date(&s)?,
                None => chrono::Local::now().date_naive(),
            };
            commands::week::run(&store, anchor)
        }
    }
}

fn init_tracing(quiet: bool, verbose: bool) -> Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("CONFLICTCAL_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| anyhow::anyhow!("Invalid date format '{}'. Expected YYYY-MM-DD", s))
}
