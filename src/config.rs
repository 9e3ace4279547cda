use std::path::PathBuf;
use std::str::FromStr;

use chrono::Duration;

use crate::error::{AppError, AppResult};

const DEFAULT_DB_PATH: &str = "readiness.sqlite";
const DEFAULT_CACHE_TTL_SECS: i64 = 300;
const DEFAULT_CACHE_CAPACITY: usize = 256;

/// Engine configuration loaded from `READINESS_*` environment variables.
///
/// Optional:
/// - `READINESS_DB_PATH`: SQLite file backing the assessment gateway
/// - `READINESS_LOG_DIR`: directory for rolling log files (omit to skip file logging)
/// - `READINESS_RANDOM_SEED`: fixed seed for score perturbation and narrative selection
/// - `READINESS_CACHE_TTL_SECS`: lifetime of memoized summaries
/// - `READINESS_CACHE_CAPACITY`: maximum memoized entries
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub db_path: PathBuf,
    pub log_dir: Option<PathBuf>,
    pub random_seed: Option<u64>,
    pub cache_ttl: Duration,
    pub cache_capacity: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            log_dir: None,
            random_seed: None,
            cache_ttl: Duration::seconds(DEFAULT_CACHE_TTL_SECS),
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

impl EngineConfig {
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let db_path = lookup("READINESS_DB_PATH")
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.db_path);

        let log_dir = lookup("READINESS_LOG_DIR")
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        let random_seed = parse_optional::<u64>(&lookup, "READINESS_RANDOM_SEED")?;

        let cache_ttl = match parse_optional::<i64>(&lookup, "READINESS_CACHE_TTL_SECS")? {
            Some(secs) if secs < 0 => {
                return Err(AppError::config(
                    "READINESS_CACHE_TTL_SECS must not be negative",
                ))
            }
            Some(secs) => Duration::seconds(secs),
            None => defaults.cache_ttl,
        };

        let cache_capacity = match parse_optional::<usize>(&lookup, "READINESS_CACHE_CAPACITY")? {
            Some(0) => {
                return Err(AppError::config(
                    "READINESS_CACHE_CAPACITY must be at least 1",
                ))
            }
            Some(capacity) => capacity,
            None => defaults.cache_capacity,
        };

        Ok(Self {
            db_path,
            log_dir,
            random_seed,
            cache_ttl,
            cache_capacity,
        })
    }
}

fn parse_optional<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> AppResult<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|err| AppError::config(format!("{key} is invalid ({raw}): {err}"))),
        _ => Ok(None),
    }
}
