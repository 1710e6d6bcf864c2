//! Runtime configuration: environment variables plus an optional JSON file.
//!
//! - `WAYFINDER_CONFIG`: path to a JSON file
//!   (`defaults`, `current_query`, `log_format`, `route_list`)
//! - `WAYFINDER_LOG_FORMAT`: `json` or `pretty`, overrides the file
//! - `WAYFINDER_ROUTE_LIST`: default input of `wayfinder check`, overrides the file
//! - `RUST_LOG`: log filter

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

use wayfinder_observability::LogFormat;
use wayfinder_routes::{ParamValue, UrlContext};

pub const CONFIG_ENV: &str = "WAYFINDER_CONFIG";
pub const LOG_FORMAT_ENV: &str = "WAYFINDER_LOG_FORMAT";
pub const ROUTE_LIST_ENV: &str = "WAYFINDER_ROUTE_LIST";

/// Shape of the `WAYFINDER_CONFIG` file.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub defaults: BTreeMap<String, ParamValue>,
    pub current_query: String,
    pub log_format: Option<LogFormat>,
    pub route_list: Option<PathBuf>,
}

#[derive(Debug)]
pub struct Config {
    pub log_format: LogFormat,
    pub context: UrlContext,
    pub route_list: Option<PathBuf>,
    /// Problems found before logging was up; logged right after init.
    pub warnings: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let file = match std::env::var_os(CONFIG_ENV) {
            Some(path) => load_file(PathBuf::from(path))?,
            None => FileConfig::default(),
        };
        Ok(Self::resolve(
            file,
            std::env::var(LOG_FORMAT_ENV).ok(),
            std::env::var_os(ROUTE_LIST_ENV).map(PathBuf::from),
        ))
    }

    fn resolve(
        file: FileConfig,
        log_format_env: Option<String>,
        route_list_env: Option<PathBuf>,
    ) -> Self {
        let mut warnings = Vec::new();

        let log_format = match log_format_env {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                warnings.push(format!("{LOG_FORMAT_ENV}: {e}; using json"));
                LogFormat::Json
            }),
            None => file.log_format.unwrap_or_default(),
        };

        Self {
            log_format,
            context: UrlContext {
                defaults: file.defaults,
                current_query: file.current_query,
            },
            route_list: route_list_env.or(file.route_list),
            warnings,
        }
    }
}

fn load_file(path: PathBuf) -> Result<FileConfig> {
    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("reading {CONFIG_ENV} file {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfinder_routes::Scalar;

    #[test]
    fn file_supplies_context() {
        let file: FileConfig = serde_json::from_str(
            r#"{
                "defaults": { "almacene": 3, "cliente": { "id": 7, "documento": "20481234567" } },
                "current_query": "?page=2",
                "log_format": "pretty"
            }"#,
        )
        .unwrap();

        let config = Config::resolve(file, None, None);
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert_eq!(config.context.current_query, "?page=2");
        assert_eq!(
            config.context.defaults.get("almacene"),
            Some(&ParamValue::Scalar(Scalar::Int(3)))
        );
        assert_eq!(
            config.context.defaults["cliente"].resolve("documento"),
            Some(&Scalar::from("20481234567"))
        );
        assert!(config.warnings.is_empty());
    }

    #[test]
    fn environment_overrides_file() {
        let file = FileConfig {
            log_format: Some(LogFormat::Pretty),
            route_list: Some(PathBuf::from("a.json")),
            ..FileConfig::default()
        };
        let config = Config::resolve(file, Some("json".to_string()), Some(PathBuf::from("b.json")));
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.route_list, Some(PathBuf::from("b.json")));
    }

    #[test]
    fn bad_log_format_falls_back_with_warning() {
        let config = Config::resolve(FileConfig::default(), Some("xml".to_string()), None);
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.warnings.len(), 1);
    }

    #[test]
    fn unknown_file_keys_are_rejected() {
        assert!(serde_json::from_str::<FileConfig>(r#"{ "defualts": {} }"#).is_err());
    }
}
