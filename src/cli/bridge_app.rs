//! Bridge worker runner

use std::process::ExitCode;
use std::time::Duration;

use crate::application::ports::{Notifier, PushSource, ReceiveError};
use crate::application::{BridgeConfig, HandleOutcome, NotificationBridge};
use crate::domain::push::ServiceCredentials;
use crate::infrastructure::notification::create_notifier;
use crate::infrastructure::HostedPushSource;

use super::app::{EXIT_ERROR, EXIT_SUCCESS};
use super::args::BridgeOptions;
use super::pid_file::{PidFile, PidFileError};
use super::presenter::Presenter;
use super::signals::ShutdownSignals;

/// Pause before re-polling after a delivery error
const RETRY_DELAY: Duration = Duration::from_secs(5);

/// Run the bridge worker until a shutdown signal arrives
pub async fn run_bridge(credentials: ServiceCredentials, options: BridgeOptions) -> ExitCode {
    let mut presenter = Presenter::new();

    // Acquire PID file
    let mut pid_file = PidFile::new();
    if let Err(e) = pid_file.acquire() {
        match e {
            PidFileError::AlreadyRunning(pid) => {
                presenter.error(&format!(
                    "Another bridge worker is already running (PID: {})",
                    pid
                ));
            }
            _ => {
                presenter.error(&e.to_string());
            }
        }
        return ExitCode::from(EXIT_ERROR);
    }

    // Create adapters
    let (notifier, tool) = match create_notifier(options.notifier).await {
        Ok(pair) => pair,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let source = match options.service_url.as_deref() {
        Some(url) => HostedPushSource::with_base_url(credentials, url),
        None => HostedPushSource::new(credentials),
    };

    let config = BridgeConfig {
        icon: options.icon.clone(),
    };
    let bridge = NotificationBridge::new(source, notifier, config);

    // Setup signal handler before registering so an early Ctrl+C still works
    let mut signals = match ShutdownSignals::new().await {
        Ok(s) => s,
        Err(e) => {
            presenter.error(&format!("Failed to setup signal handler: {}", e));
            return ExitCode::from(EXIT_ERROR);
        }
    };

    // Register with the push service
    presenter.start_spinner("Connecting to push service...");
    if let Err(e) = bridge.connect().await {
        presenter.spinner_fail(&format!("Registration failed: {}", e));
        return ExitCode::from(EXIT_ERROR);
    }
    presenter.spinner_success("Registered with push service");

    presenter.bridge_status("Listening for push messages...");
    presenter.info(&format!(
        "PID: {} | Notifier: {} | SIGINT: exit",
        std::process::id(),
        tool
    ));

    // Main delivery loop
    let graceful = bridge_loop(&bridge, &mut signals, &presenter).await;

    let handled = bridge.handled().await;
    presenter.info(&format!("Stopped after {} message(s)", handled));

    let _ = pid_file.release();

    if graceful {
        ExitCode::from(EXIT_SUCCESS)
    } else {
        ExitCode::from(EXIT_ERROR)
    }
}

async fn bridge_loop<S, N>(
    bridge: &NotificationBridge<S, N>,
    signals: &mut ShutdownSignals,
    presenter: &Presenter,
) -> bool
where
    S: PushSource,
    N: Notifier,
{
    loop {
        tokio::select! {
            signal = signals.recv() => {
                match signal {
                    Some(()) => {
                        presenter.bridge_status("Shutting down...");
                        return true;
                    }
                    None => {
                        // Handler tasks went away, nothing left to wait on
                        return false;
                    }
                }
            }
            result = bridge.poll_once() => {
                match result {
                    Ok(Some(HandleOutcome::Dispatched { heading })) => {
                        presenter.info(&format!(
                            "Message received, notification dispatched: {}",
                            heading
                        ));
                    }
                    Ok(Some(HandleOutcome::Skipped(reason))) => {
                        presenter.warn(&format!("Skipped malformed message: {}", reason));
                    }
                    Ok(None) => {
                        // Empty delivery window, poll again
                    }
                    Err(e @ ReceiveError::Unauthorized) => {
                        // A rejected key will not fix itself; stop instead of spamming
                        presenter.error(&format!("Push service rejected credentials: {}", e));
                        return false;
                    }
                    Err(e) => {
                        presenter.error(&format!("Delivery poll failed: {}", e));
                        tokio::time::sleep(RETRY_DELAY).await;
                    }
                }
            }
        }
    }
}
