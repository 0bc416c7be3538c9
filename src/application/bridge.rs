//! Background notification bridge use case

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::bridge::{BridgeSession, BridgeState};
use crate::domain::config::DEFAULT_ICON;
use crate::domain::push::{MalformedReason, PushPayload};

use super::ports::{Notifier, PushSource, ReceiveError};

/// Configuration for the notification bridge
#[derive(Debug, Clone)]
pub struct BridgeConfig {
    /// Icon reference attached to every notification request
    pub icon: String,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            icon: DEFAULT_ICON.to_string(),
        }
    }
}

/// Result of handling one delivered message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandleOutcome {
    /// A notification display request was handed to the platform
    Dispatched {
        /// The heading the notification was requested with
        heading: String,
    },
    /// The message could not produce a notification and was dropped
    Skipped(MalformedReason),
}

/// Background notification bridge use case.
///
/// Sits between the push source and the desktop notifier: each message
/// the source delivers is parsed and, when well-formed, turned into one
/// notification display request. The hand-off is fire-and-forget; the
/// bridge never waits for, confirms, or retries the actual display.
pub struct NotificationBridge<S, N>
where
    S: PushSource,
    N: Notifier,
{
    source: S,
    notifier: N,
    session: Arc<Mutex<BridgeSession>>,
    connected: Mutex<bool>,
    config: BridgeConfig,
}

impl<S, N> NotificationBridge<S, N>
where
    S: PushSource,
    N: Notifier,
{
    /// Create a new bridge instance
    pub fn new(source: S, notifier: N, config: BridgeConfig) -> Self {
        Self {
            source,
            notifier,
            session: Arc::new(Mutex::new(BridgeSession::new())),
            connected: Mutex::new(false),
            config,
        }
    }

    /// Get current session state
    pub async fn state(&self) -> BridgeState {
        self.session.lock().await.state()
    }

    /// Number of messages handled so far
    pub async fn handled(&self) -> u64 {
        self.session.lock().await.handled()
    }

    /// Register with the push service.
    ///
    /// Idempotent: once a connect succeeds, repeat calls return
    /// immediately without touching the source again.
    pub async fn connect(&self) -> Result<(), ReceiveError> {
        let mut connected = self.connected.lock().await;
        if *connected {
            return Ok(());
        }

        self.source.register().await?;
        *connected = true;
        Ok(())
    }

    /// Wait for the next delivery and handle it.
    ///
    /// # Returns
    /// The handle outcome, or `None` when the delivery window closed
    /// without a message.
    pub async fn poll_once(&self) -> Result<Option<HandleOutcome>, ReceiveError> {
        match self.source.next_message().await? {
            Some(envelope) => Ok(Some(self.handle_message(envelope).await)),
            None => Ok(None),
        }
    }

    /// Handle one delivered message.
    ///
    /// Never fails: a malformed payload yields a `Skipped` outcome, and a
    /// failed display hand-off is dropped without retry. The session
    /// cycles idle -> handling -> idle around every message.
    pub async fn handle_message(&self, envelope: serde_json::Value) -> HandleOutcome {
        {
            let mut session = self.session.lock().await;
            session.begin_handling();
        }

        let outcome = match PushPayload::from_envelope(&envelope) {
            PushPayload::WellFormed { title, body } => {
                let detail = body.unwrap_or_default();

                // Fire-and-forget: the platform owns the request after hand-off
                let _ = self
                    .notifier
                    .display(&title, &detail, &self.config.icon)
                    .await;

                HandleOutcome::Dispatched { heading: title }
            }
            PushPayload::Malformed(reason) => HandleOutcome::Skipped(reason),
        };

        {
            let mut session = self.session.lock().await;
            session.finish_handling();
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::NotificationError;
    use async_trait::async_trait;
    use serde_json::json;
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex as StdMutex;

    #[derive(Clone, Default)]
    struct QueueSource {
        queue: Arc<StdMutex<VecDeque<serde_json::Value>>>,
        registrations: Arc<AtomicUsize>,
    }

    impl QueueSource {
        fn with_messages(messages: Vec<serde_json::Value>) -> Self {
            Self {
                queue: Arc::new(StdMutex::new(messages.into())),
                registrations: Arc::new(AtomicUsize::new(0)),
            }
        }

        fn registrations(&self) -> usize {
            self.registrations.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl PushSource for QueueSource {
        async fn register(&self) -> Result<(), ReceiveError> {
            self.registrations.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        async fn next_message(&self) -> Result<Option<serde_json::Value>, ReceiveError> {
            Ok(self.queue.lock().unwrap().pop_front())
        }
    }

    #[derive(Clone, Default)]
    struct RecordingNotifier {
        calls: Arc<StdMutex<Vec<(String, String, String)>>>,
    }

    impl RecordingNotifier {
        fn calls(&self) -> Vec<(String, String, String)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Notifier for RecordingNotifier {
        async fn display(
            &self,
            heading: &str,
            detail: &str,
            icon: &str,
        ) -> Result<(), NotificationError> {
            self.calls
                .lock()
                .unwrap()
                .push((heading.to_string(), detail.to_string(), icon.to_string()));
            Ok(())
        }
    }

    struct FailingNotifier;

    #[async_trait]
    impl Notifier for FailingNotifier {
        async fn display(
            &self,
            _heading: &str,
            _detail: &str,
            _icon: &str,
        ) -> Result<(), NotificationError> {
            Err(NotificationError::DisplayFailed("no display".to_string()))
        }
    }

    fn bridge(
        source: &QueueSource,
        notifier: &RecordingNotifier,
    ) -> NotificationBridge<QueueSource, RecordingNotifier> {
        NotificationBridge::new(source.clone(), notifier.clone(), BridgeConfig::default())
    }

    #[tokio::test]
    async fn connect_registers_once() {
        let source = QueueSource::default();
        let notifier = RecordingNotifier::default();
        let bridge = bridge(&source, &notifier);

        bridge.connect().await.unwrap();
        bridge.connect().await.unwrap();
        bridge.connect().await.unwrap();

        assert_eq!(source.registrations(), 1);
    }

    #[tokio::test]
    async fn connect_retries_after_failure() {
        struct FlakySource {
            attempts: AtomicUsize,
        }

        #[async_trait]
        impl PushSource for FlakySource {
            async fn register(&self) -> Result<(), ReceiveError> {
                if self.attempts.fetch_add(1, Ordering::SeqCst) == 0 {
                    Err(ReceiveError::RequestFailed("connection refused".into()))
                } else {
                    Ok(())
                }
            }

            async fn next_message(&self) -> Result<Option<serde_json::Value>, ReceiveError> {
                Ok(None)
            }
        }

        let source = FlakySource {
            attempts: AtomicUsize::new(0),
        };
        let notifier = RecordingNotifier::default();
        let bridge = NotificationBridge::new(source, notifier, BridgeConfig::default());

        assert!(bridge.connect().await.is_err());
        assert!(bridge.connect().await.is_ok());
    }

    #[tokio::test]
    async fn well_formed_message_is_dispatched() {
        let source = QueueSource::default();
        let notifier = RecordingNotifier::default();
        let bridge = bridge(&source, &notifier);

        let outcome = bridge
            .handle_message(json!({
                "notification": { "title": "New Interview", "body": "Starting soon" }
            }))
            .await;

        assert_eq!(
            outcome,
            HandleOutcome::Dispatched {
                heading: "New Interview".to_string()
            }
        );
        assert_eq!(
            notifier.calls(),
            vec![(
                "New Interview".to_string(),
                "Starting soon".to_string(),
                "/icons/Icon-192.png".to_string()
            )]
        );
    }

    #[tokio::test]
    async fn missing_body_dispatches_empty_detail() {
        let source = QueueSource::default();
        let notifier = RecordingNotifier::default();
        let bridge = bridge(&source, &notifier);

        bridge
            .handle_message(json!({ "notification": { "title": "Ping" } }))
            .await;

        assert_eq!(
            notifier.calls(),
            vec![(
                "Ping".to_string(),
                String::new(),
                "/icons/Icon-192.png".to_string()
            )]
        );
    }

    #[tokio::test]
    async fn malformed_message_is_skipped_without_notifying() {
        let source = QueueSource::default();
        let notifier = RecordingNotifier::default();
        let bridge = bridge(&source, &notifier);

        let outcome = bridge
            .handle_message(json!({ "data": { "silent": true } }))
            .await;

        assert_eq!(
            outcome,
            HandleOutcome::Skipped(MalformedReason::MissingNotification)
        );
        assert!(notifier.calls().is_empty());
        assert_eq!(bridge.state().await, BridgeState::Idle);
    }

    #[tokio::test]
    async fn display_failure_still_counts_as_dispatched() {
        let source = QueueSource::default();
        let bridge = NotificationBridge::new(source, FailingNotifier, BridgeConfig::default());

        let outcome = bridge
            .handle_message(json!({ "notification": { "title": "Ping" } }))
            .await;

        assert_eq!(
            outcome,
            HandleOutcome::Dispatched {
                heading: "Ping".to_string()
            }
        );
        assert_eq!(bridge.state().await, BridgeState::Idle);
        assert_eq!(bridge.handled().await, 1);
    }

    #[tokio::test]
    async fn poll_once_drains_queue_in_order() {
        let source = QueueSource::with_messages(vec![
            json!({ "notification": { "title": "first" } }),
            json!({ "notification": { "title": "second" } }),
        ]);
        let notifier = RecordingNotifier::default();
        let bridge = bridge(&source, &notifier);

        let first = bridge.poll_once().await.unwrap();
        let second = bridge.poll_once().await.unwrap();
        let third = bridge.poll_once().await.unwrap();

        assert_eq!(
            first,
            Some(HandleOutcome::Dispatched {
                heading: "first".to_string()
            })
        );
        assert_eq!(
            second,
            Some(HandleOutcome::Dispatched {
                heading: "second".to_string()
            })
        );
        assert_eq!(third, None);
        assert_eq!(bridge.handled().await, 2);
    }

    #[tokio::test]
    async fn session_returns_to_idle_after_each_message() {
        let source = QueueSource::default();
        let notifier = RecordingNotifier::default();
        let bridge = bridge(&source, &notifier);

        assert_eq!(bridge.state().await, BridgeState::Idle);

        bridge
            .handle_message(json!({ "notification": { "title": "one" } }))
            .await;
        assert_eq!(bridge.state().await, BridgeState::Idle);

        bridge.handle_message(json!({ "bad": true })).await;
        assert_eq!(bridge.state().await, BridgeState::Idle);

        assert_eq!(bridge.handled().await, 2);
    }

    #[tokio::test]
    async fn custom_icon_is_used_for_every_dispatch() {
        let source = QueueSource::default();
        let notifier = RecordingNotifier::default();
        let bridge = NotificationBridge::new(
            source.clone(),
            notifier.clone(),
            BridgeConfig {
                icon: "/opt/bridge/icon.png".to_string(),
            },
        );

        bridge
            .handle_message(json!({ "notification": { "title": "a" } }))
            .await;
        bridge
            .handle_message(json!({ "notification": { "title": "b", "icon": "/evil.png" } }))
            .await;

        let calls = notifier.calls();
        assert_eq!(calls.len(), 2);
        assert!(calls.iter().all(|(_, _, icon)| icon == "/opt/bridge/icon.png"));
    }
}
