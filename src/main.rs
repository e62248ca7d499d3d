use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use practice_report_pdf::{AnalyticsSummary, load_analytics, load_sessions};

#[derive(Parser, Debug)]
#[command(name = "practice-report")]
#[command(version, about = "Render interview practice history as a PDF report")]
struct Args {
    /// Sessions JSON: the history API response or a bare array of sessions
    sessions: PathBuf,

    /// Analytics JSON shown as summary tiles on the first page
    #[arg(short, long)]
    analytics: Option<PathBuf>,

    /// Display name printed in the report title
    #[arg(short, long, default_value = "User")]
    user: String,

    /// Directory the dated report file is written to
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let sessions = match load_sessions(&args.sessions) {
        Ok(sessions) => sessions,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };
    let analytics: Option<AnalyticsSummary> = match args.analytics.as_deref().map(load_analytics) {
        Some(Ok(analytics)) => Some(analytics),
        Some(Err(e)) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
        None => None,
    };

    if practice_report_pdf::export_report(&sessions, analytics.as_ref(), &args.user, &args.out_dir) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
