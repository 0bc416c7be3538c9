//! PushBridge CLI entry point

use std::process::ExitCode;

use clap::Parser;

use push_bridge::cli::{
    app::{
        bridge_options, load_merged_config, resolve_credentials, run_send, EXIT_ERROR,
        EXIT_USAGE_ERROR,
    },
    args::{Cli, Commands},
    bridge_app::run_bridge,
    config_cmd::handle_config_command,
    presenter::Presenter,
};
use push_bridge::domain::config::AppConfig;
use push_bridge::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let presenter = Presenter::new();

    // Build CLI config from flags before the args are consumed below
    let cli_config = AppConfig {
        api_key: None, // API key comes from env/file only
        icon: cli.icon.clone(),
        notifier: cli.notifier.clone(),
        service_url: cli.service_url.clone(),
        ..Default::default()
    };

    match cli.command {
        Some(Commands::Config { action }) => {
            let store = XdgConfigStore::new();
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            ExitCode::SUCCESS
        }
        Some(Commands::Send { title, body }) => {
            let config = load_merged_config(cli_config).await;
            let options = match bridge_options(&config) {
                Ok(o) => o,
                Err(e) => {
                    presenter.error(&e);
                    return ExitCode::from(EXIT_USAGE_ERROR);
                }
            };

            run_send(&title, &body, &options).await
        }
        None => {
            let config = load_merged_config(cli_config).await;
            let options = match bridge_options(&config) {
                Ok(o) => o,
                Err(e) => {
                    presenter.error(&e);
                    return ExitCode::from(EXIT_USAGE_ERROR);
                }
            };

            // Credentials are required before the worker touches anything
            let credentials = match resolve_credentials(&config) {
                Ok(c) => c,
                Err(e) => {
                    presenter.error(&e);
                    return ExitCode::from(EXIT_ERROR);
                }
            };

            run_bridge(credentials, options).await
        }
    }
}
