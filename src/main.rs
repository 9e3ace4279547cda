use std::process::ExitCode;

use founder_readiness_lib::utils::logger::init_logging;
use founder_readiness_lib::{AppError, EngineConfig, ReadinessEngine};

const USAGE: &str = "usage: readiness-report <summary|recommendations> <user_id>";

enum Report {
    Summary,
    Recommendations,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<(Report, String), AppError> {
    let report = match args.next().as_deref() {
        Some("summary") => Report::Summary,
        Some("recommendations") => Report::Recommendations,
        _ => return Err(AppError::validation(USAGE)),
    };
    let user_id = args
        .next()
        .filter(|id| !id.trim().is_empty())
        .ok_or_else(|| AppError::validation(USAGE))?;
    Ok((report, user_id))
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let (report, user_id) = parse_args(std::env::args().skip(1))?;
    let config = EngineConfig::from_env()?;

    if let Some(log_dir) = &config.log_dir {
        init_logging(log_dir)?;
    }

    let engine = ReadinessEngine::from_config(&config)?;
    let json = match report {
        Report::Summary => {
            serde_json::to_string_pretty(&engine.dashboard().generate_executive_summary(&user_id))?
        }
        Report::Recommendations => serde_json::to_string_pretty(
            &engine.recommendations().generate_recommendations(&user_id),
        )?,
    };

    println!("{json}");
    Ok(())
}

fn main() -> ExitCode {
    match try_run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("readiness-report: {error}");
            ExitCode::FAILURE
        }
    }
}
