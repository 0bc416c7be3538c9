//! Config command handler

use std::str::FromStr;

use crate::application::ports::ConfigStore;
use crate::domain::error::ConfigError;
use crate::infrastructure::notification::NotifierToolPreference;

use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    // Validate key
    if !is_valid_config_key(key) {
        return Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
        });
    }

    // Validate value based on key type
    validate_config_value(key, value)?;

    // Load existing config
    let mut config = store.load().await?;

    // Update the appropriate field
    match key {
        "api_key" => config.api_key = Some(value.to_string()),
        "project_id" => config.project_id = Some(value.to_string()),
        "sender_id" => config.sender_id = Some(value.to_string()),
        "app_id" => config.app_id = Some(value.to_string()),
        "service_url" => config.service_url = Some(value.to_string()),
        "icon" => config.icon = Some(value.to_string()),
        "notifier" => config.notifier = Some(value.to_string()),
        _ => unreachable!(), // Already validated
    }

    // Save config
    store.save(&config).await?;
    presenter.success(&format!("{} = {}", key, value));

    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    // Validate key
    if !is_valid_config_key(key) {
        return Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
        });
    }

    let config = store.load().await?;

    let value = match key {
        "api_key" => config.api_key.map(|s| mask_api_key(&s)),
        "project_id" => config.project_id,
        "sender_id" => config.sender_id,
        "app_id" => config.app_id,
        "service_url" => config.service_url,
        "icon" => config.icon,
        "notifier" => config.notifier,
        _ => unreachable!(),
    };

    match value {
        Some(v) => presenter.output(&v),
        None => presenter.output("(not set)"),
    }

    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;

    presenter.key_value(
        "api_key",
        &config
            .api_key
            .map(|s| mask_api_key(&s))
            .unwrap_or_else(|| "(not set)".to_string()),
    );
    presenter.key_value(
        "project_id",
        config.project_id.as_deref().unwrap_or("(not set)"),
    );
    presenter.key_value(
        "sender_id",
        config.sender_id.as_deref().unwrap_or("(not set)"),
    );
    presenter.key_value("app_id", config.app_id.as_deref().unwrap_or("(not set)"));
    presenter.key_value(
        "service_url",
        config.service_url.as_deref().unwrap_or("(not set)"),
    );
    presenter.key_value("icon", config.icon.as_deref().unwrap_or("(not set)"));
    presenter.key_value("notifier", config.notifier.as_deref().unwrap_or("(not set)"));

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

/// Validate a config value based on key type
fn validate_config_value(key: &str, value: &str) -> Result<(), ConfigError> {
    match key {
        "notifier" => {
            NotifierToolPreference::from_str(value).map_err(|e| ConfigError::ValidationError {
                key: key.to_string(),
                message: e.to_string(),
            })?;
        }
        "service_url" => {
            if !value.starts_with("http://") && !value.starts_with("https://") {
                return Err(ConfigError::ValidationError {
                    key: key.to_string(),
                    message: format!("Invalid URL '{}'. Must start with http:// or https://", value),
                });
            }
        }
        _ => {} // Remaining keys accept any string
    }
    Ok(())
}

/// Mask API key for display (show first 4 and last 4 chars)
fn mask_api_key(key: &str) -> String {
    // Count chars, not bytes: keys are not guaranteed to be ASCII
    let len = key.chars().count();
    if len <= 8 {
        "*".repeat(len)
    } else {
        let head: String = key.chars().take(4).collect();
        let tail: String = key.chars().skip(len - 4).collect();
        format!("{}...{}", head, tail)
    }
}
