//! Access key sources for rate providers

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::error::{RateError, Result};

pub const DEFAULT_KEY_STORE_PATH: &str = "etc/access_keys.properties";
pub const DEFAULT_KEY_NAME: &str = "fixer_io";

/// Supplies the secret a provider sends with every request.
pub trait AccessKeyProvider: Send + Sync {
    fn access_key(&self) -> Result<String>;
}

/// An access key held in memory.
#[derive(Clone)]
pub struct StaticAccessKey(String);

impl StaticAccessKey {
    pub fn new(key: impl Into<String>) -> Self {
        StaticAccessKey(key.into())
    }
}

impl AccessKeyProvider for StaticAccessKey {
    fn access_key(&self) -> Result<String> {
        Ok(self.0.clone())
    }
}

impl std::fmt::Debug for StaticAccessKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("StaticAccessKey(***)")
    }
}

/// Reads a named entry from a properties file (`name=value` lines).
#[derive(Debug, Clone)]
pub struct PropertiesKeyStore {
    path: PathBuf,
    key_name: String,
}

impl PropertiesKeyStore {
    pub fn new<P: AsRef<Path>>(path: P, key_name: &str) -> Self {
        PropertiesKeyStore {
            path: path.as_ref().to_path_buf(),
            key_name: key_name.to_string(),
        }
    }
}

impl Default for PropertiesKeyStore {
    fn default() -> Self {
        Self::new(DEFAULT_KEY_STORE_PATH, DEFAULT_KEY_NAME)
    }
}

impl AccessKeyProvider for PropertiesKeyStore {
    fn access_key(&self) -> Result<String> {
        debug!("Reading access key from {}", self.path.display());
        let content = fs::read_to_string(&self.path).map_err(|source| {
            RateError::KeyStoreUnavailable {
                path: self.path.clone(),
                source,
            }
        })?;

        parse_properties(&content)
            .remove(&self.key_name)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| RateError::MissingAccessKey {
                name: self.key_name.clone(),
                path: self.path.clone(),
            })
    }
}

/// Parses simple properties content. Supports `=`, `:` and whitespace
/// separators and `#`/`!` comment lines; line continuations and escapes are
/// not supported. Later entries override earlier ones.
pub fn parse_properties(content: &str) -> HashMap<String, String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('!'))
        .map(|line| {
            let split_at = line
                .find(|c: char| c == '=' || c == ':' || c.is_whitespace())
                .unwrap_or(line.len());
            let (key, rest) = line.split_at(split_at);
            let value = rest
                .trim_start()
                .strip_prefix(['=', ':'])
                .unwrap_or(rest.trim_start());
            (key.to_string(), value.trim().to_string())
        })
        .collect()
}
