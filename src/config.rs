//! Process configuration from the environment.

use crate::error::AppError;
use std::{env, fmt::Display, net::SocketAddr, path::PathBuf, str::FromStr};

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub db_path: PathBuf,
    pub pdf_dir: PathBuf,
}

impl Config {
    pub fn load() -> Result<Self, AppError> {
        Ok(Self {
            addr: try_load("ICU_EDU_ADDR", "127.0.0.1:5000")?,
            db_path: try_load("ICU_EDU_DB_PATH", "icu_education.db")?,
            pdf_dir: try_load("ICU_EDU_PDF_DIR", "static/pdfs")?,
        })
    }
}

/// Read on its own so logging can be set up before the rest is loaded.
pub fn debug_enabled() -> bool {
    env_bool("ICU_EDU_DEBUG", false)
}

fn try_load<T: FromStr>(key: &str, default: &str) -> Result<T, AppError>
where
    T::Err: Display,
{
    let raw = env::var(key).unwrap_or_else(|_| {
        log::info!("{key} not set, using default: {default}");
        default.to_string()
    });
    raw.parse()
        .map_err(|e| AppError::Internal(format!("invalid {key} value {raw:?}: {e}")))
}

fn env_bool(key: &str, default: bool) -> bool {
    env::var(key)
        .ok()
        .and_then(|v| match v.as_str() {
            "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
            "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
            _ => {
                log::warn!("invalid {key} value {v:?}, using default: {default}");
                None
            }
        })
        .unwrap_or(default)
}
