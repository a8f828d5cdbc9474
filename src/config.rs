//! Build-time Configuration
//!
//! A wasm bundle has no process environment, so everything is read with
//! `option_env!` when the crate is compiled.

use log::LevelFilter;
use std::str::FromStr;

use crate::todos::IdStrategy;

const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub todos_url: &'static str,
    pub log_level: LevelFilter,
    pub id_strategy: IdStrategy,
}

impl AppConfig {
    pub fn from_build_env() -> Self {
        Self {
            todos_url: todos_client::config::todos_url(),
            log_level: parse_log_level(option_env!("TODOS_LOG")),
            id_strategy: parse_id_strategy(option_env!("TODOS_ID_STRATEGY")),
        }
    }
}

/// Unset or unrecognised values fall back to `info`.
pub fn parse_log_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| LevelFilter::from_str(v.trim()).ok())
        .unwrap_or(DEFAULT_LOG_LEVEL)
}

pub fn parse_id_strategy(value: Option<&str>) -> IdStrategy {
    value.and_then(IdStrategy::parse).unwrap_or_default()
}
