//! Environment lookup for configuration
//!
//! Settings come from the process environment layered over an optional
//! dotenv file. Process variables always win over file values.

use crate::error::Result;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, instrument};

/// Variable naming the dotenv file to read
pub const ENV_FILE_VAR: &str = "ECSAPI_ENV_FILE";

/// Dotenv file read when `ECSAPI_ENV_FILE` is unset
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Snapshot of the variables visible to configuration
#[derive(Debug, Clone, Default)]
pub struct Env {
    vars: HashMap<String, String>,
}

impl Env {
    /// Process environment over the dotenv file named by `ECSAPI_ENV_FILE`
    pub fn load() -> Result<Self> {
        let path = std::env::var(ENV_FILE_VAR).unwrap_or_else(|_| DEFAULT_ENV_FILE.to_string());
        let mut env = Self::from_file(Path::new(&path))?;
        env.vars.extend(process_vars());
        Ok(env)
    }

    /// Process environment only
    pub fn from_process() -> Self {
        Self {
            vars: process_vars().collect(),
        }
    }

    /// Variables of a dotenv file; a missing file yields an empty set
    #[instrument(skip(path), fields(env_file = %path.display()))]
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(env_file = %path.display(), "Env file not found, skipping");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let vars = parse_env_file(&content);
        debug!(
            env_file = %path.display(),
            variable_count = vars.len(),
            "Loaded variables from env file"
        );
        Ok(Self { vars })
    }

    /// Explicit variables, independent of the real environment
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }
}

/// Process variables whose name and value are both valid UTF-8
fn process_vars() -> impl Iterator<Item = (String, String)> {
    std::env::vars_os()
        .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
}

/// Parse `KEY=VALUE` lines, skipping blanks and `#` comments
fn parse_env_file(content: &str) -> HashMap<String, String> {
    let mut vars = HashMap::new();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let line = line.strip_prefix("export ").unwrap_or(line);
        if let Some((key, value)) = line.split_once('=') {
            let key = key.trim();
            if key.is_empty() {
                continue;
            }
            vars.insert(key.to_string(), strip_quotes(value.trim()).to_string());
        }
    }

    vars
}

fn strip_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}
