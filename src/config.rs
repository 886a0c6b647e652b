// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{bail, Result};
use std::env;
use std::path::PathBuf;

pub const STORAGE_PATH_VAR: &str = "MACHINE_STORAGE_PATH";
pub const INSECURE_VAR: &str = "ADDONCTL_INSECURE_SKIP_TLS_VERIFY";

/// CLI configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Root of the machine store used to resolve host references
    pub storage_path: PathBuf,
    /// Skip verification of the cluster API certificate
    pub insecure_skip_tls_verify: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let storage_path = match (lookup(STORAGE_PATH_VAR), lookup("HOME")) {
            (Some(path), _) if !path.is_empty() => PathBuf::from(path),
            (_, Some(home)) if !home.is_empty() => PathBuf::from(home).join(".docker").join("machine"),
            _ => bail!("Neither {} nor HOME environment variable is set", STORAGE_PATH_VAR),
        };
        let insecure_skip_tls_verify = lookup(INSECURE_VAR)
            .and_then(|v| v.parse().ok())
            .unwrap_or(false);

        Ok(Config {
            storage_path,
            insecure_skip_tls_verify,
        })
    }
}
