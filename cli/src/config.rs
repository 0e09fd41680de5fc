// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf};

use evdesk_core::{APP_NAME, Config};
use tokio::fs;

const EVDESK_CONFIG_ENV: &str = "EVDESK_CONFIG";
const EVDESK_DEV_ENV: &str = "EVDESK_DEV";
const EVDESK_EVENTS_API_ENV: &str = "EVDESK_EVENTS_API";

const EVDESK_DEV_VALID_TRUE: &[&str] = &["1", "true", "yes"];
const EVDESK_DEV_VALID_FALSE: &[&str] = &["0", "false", "no"];

/// Environment variables applied over the file: `(variable, section, key)`.
const ENV_OVERRIDES: &[(&str, &str, &str)] = &[
    (EVDESK_EVENTS_API_ENV, "api", "base_url"),
    ("EVDESK_GOOGLE_API_KEY", "google", "api_key"),
    ("EVDESK_GOOGLE_CLIENT_ID", "google", "client_id"),
    ("EVDESK_GOOGLE_CLIENT_SECRET", "google", "client_secret"),
];

/// Loads the configuration.
///
/// The file comes from `path`, else `EVDESK_CONFIG`, else the user's config directory.
/// It may be left out when `EVDESK_EVENTS_API` provides the API address.
#[tracing::instrument]
pub async fn parse_config(path: Option<PathBuf>) -> Result<Config, Box<dyn Error>> {
    let mut table = match find_config(path)? {
        Some(path) => {
            let content = fs::read_to_string(&path).await.map_err(|e| {
                format!("Failed to read config file at {}: {}", path.display(), e)
            })?;
            toml::from_str::<toml::Table>(&content)
                .map_err(|e| format!("Invalid config file at {}: {}", path.display(), e))?
        }
        None => toml::Table::new(),
    };

    apply_env_overrides(&mut table);
    if !table.contains_key("api") {
        return Err(format!(
            "The events API is not configured: set [api] base_url in the config file or {EVDESK_EVENTS_API_ENV}"
        )
        .into());
    }

    let config: Config = toml::Value::Table(table).try_into()?;
    tracing::debug!(base_url = %config.api.base_url, google = config.google.is_some(), "configuration loaded");
    Ok(config)
}

fn find_config(path: Option<PathBuf>) -> Result<Option<PathBuf>, Box<dyn Error>> {
    if let Some(path) = path {
        return Ok(Some(path));
    } else if let Ok(env_path) = std::env::var(EVDESK_CONFIG_ENV) {
        return Ok(Some(PathBuf::from(env_path)));
    }

    let api_from_env = std::env::var_os(EVDESK_EVENTS_API_ENV).is_some();
    if let Some(true) = is_dev_mode() {
        if api_from_env {
            return Ok(None);
        }
        return Err(format!(
            "Development environment detected ({EVDESK_DEV_ENV} is set): config must be explicitly specified via --config or {EVDESK_CONFIG_ENV} environment variable",
        )
        .into());
    }

    let config = get_config_dir()?.join(format!("{APP_NAME}/config.toml"));
    if config.exists() {
        Ok(Some(config))
    } else if api_from_env {
        Ok(None)
    } else {
        Err(format!("No config found at: {}", config.display()).into())
    }
}

fn apply_env_overrides(table: &mut toml::Table) {
    for (env, section, key) in ENV_OVERRIDES {
        let Ok(value) = std::env::var(env) else {
            continue;
        };

        let section = table
            .entry(*section)
            .or_insert(toml::Value::Table(toml::Table::new()));
        match section.as_table_mut() {
            Some(section) => {
                section.insert(key.to_string(), toml::Value::String(value));
            }
            None => tracing::warn!(env, "config section is not a table, ignoring override"),
        }
    }
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific home directory not found".into())
}

fn is_dev_mode() -> Option<bool> {
    let val = std::env::var(EVDESK_DEV_ENV).ok()?;
    let lower = val.to_lowercase();
    if EVDESK_DEV_VALID_TRUE.contains(&lower.as_str()) {
        Some(true)
    } else if EVDESK_DEV_VALID_FALSE.contains(&lower.as_str()) {
        Some(false)
    } else {
        tracing::warn!(
            "Unrecognized value for {}: '{}'. Expected one of: true: {}, false: {}. Treating as unset.",
            EVDESK_DEV_ENV,
            val,
            EVDESK_DEV_VALID_TRUE.join(", "),
            EVDESK_DEV_VALID_FALSE.join(", "),
        );
        None
    }
}
