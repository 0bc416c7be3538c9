//! Signal handling for the bridge worker

use colored::Colorize;
use tokio::signal::unix::{signal, SignalKind};
use tokio::sync::mpsc;

/// Shutdown signal listener for the bridge worker.
///
/// Listens for SIGINT and SIGTERM and forwards them through a channel so
/// the worker loop can select on shutdown alongside delivery polls.
pub struct ShutdownSignals {
    receiver: mpsc::Receiver<()>,
}

impl ShutdownSignals {
    /// Install the signal handlers and start listening
    pub async fn new() -> Result<Self, std::io::Error> {
        let (tx, rx) = mpsc::channel(4);

        // SIGINT (Ctrl+C)
        let tx_int = tx.clone();
        let mut sigint = signal(SignalKind::interrupt())?;
        tokio::spawn(async move {
            sigint.recv().await;
            eprintln!("{} Received SIGINT (shutdown)", "↓".cyan());
            let _ = tx_int.send(()).await;
        });

        // SIGTERM
        let mut sigterm = signal(SignalKind::terminate())?;
        tokio::spawn(async move {
            sigterm.recv().await;
            eprintln!("{} Received SIGTERM (shutdown)", "↓".cyan());
            let _ = tx.send(()).await;
        });

        Ok(Self { receiver: rx })
    }

    /// Wait for the next shutdown request.
    ///
    /// Returns `None` only if all handler tasks have gone away.
    pub async fn recv(&mut self) -> Option<()> {
        self.receiver.recv().await
    }
}
