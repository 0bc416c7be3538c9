//! Shared CLI plumbing: config resolution and the one-shot send command

use std::env;
use std::process::ExitCode;

use crate::application::ports::ConfigStore;
use crate::domain::config::AppConfig;
use crate::domain::push::ServiceCredentials;
use crate::infrastructure::notification::{create_notifier, NotifierToolPreference};
use crate::infrastructure::XdgConfigStore;

use super::args::BridgeOptions;
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Environment variable consulted for the push-service API key
pub const API_KEY_ENV: &str = "PUSH_BRIDGE_API_KEY";

/// Load and merge configuration from file, env, and CLI
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = store.load().await.unwrap_or_else(|_| AppConfig::empty());

    // Build env config
    let env_config = AppConfig {
        api_key: env::var(API_KEY_ENV).ok().filter(|s| !s.is_empty()),
        ..Default::default()
    };

    // Merge: defaults < file < env < cli
    AppConfig::defaults()
        .merge(file_config)
        .merge(env_config)
        .merge(cli_config)
}

/// Resolve the bridge runtime options from a merged config
pub fn bridge_options(config: &AppConfig) -> Result<BridgeOptions, String> {
    let notifier = config
        .notifier_or_default()
        .parse::<NotifierToolPreference>()
        .map_err(|e| e.to_string())?;

    Ok(BridgeOptions {
        icon: config.icon_or_default().to_string(),
        notifier,
        service_url: config.service_url.clone(),
    })
}

/// Resolve the full push-service credential set from a merged config
pub fn resolve_credentials(config: &AppConfig) -> Result<ServiceCredentials, String> {
    let api_key = require(config.api_key.as_deref(), || {
        format!(
            "Missing API key. Set {} or run 'push-bridge config set api_key <key>'",
            API_KEY_ENV
        )
    })?;
    let project_id = require(config.project_id.as_deref(), || {
        "Missing project ID. Run 'push-bridge config set project_id <id>'".to_string()
    })?;
    let sender_id = require(config.sender_id.as_deref(), || {
        "Missing sender ID. Run 'push-bridge config set sender_id <id>'".to_string()
    })?;
    let app_id = require(config.app_id.as_deref(), || {
        "Missing app ID. Run 'push-bridge config set app_id <id>'".to_string()
    })?;

    Ok(ServiceCredentials::new(project_id, api_key, sender_id, app_id))
}

fn require<'a>(value: Option<&'a str>, missing: impl FnOnce() -> String) -> Result<&'a str, String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(missing()),
    }
}

/// Run the one-shot send command: display a single notification and exit
pub async fn run_send(title: &str, body: &str, options: &BridgeOptions) -> ExitCode {
    let presenter = Presenter::new();

    let (notifier, tool) = match create_notifier(options.notifier).await {
        Ok(pair) => pair,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };

    match notifier.display(title, body, &options.icon).await {
        Ok(()) => {
            presenter.success(&format!("Notification sent via {}", tool));
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}
