//! Push service credentials value object

/// Identifiers the bridge presents to the hosted push-delivery service.
///
/// Built once at process start from merged configuration and handed to the
/// delivery adapter; immutable for the life of the worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceCredentials {
    project_id: String,
    api_key: String,
    sender_id: String,
    app_id: String,
}

impl ServiceCredentials {
    /// Create credentials from the four service identifiers
    pub fn new(
        project_id: impl Into<String>,
        api_key: impl Into<String>,
        sender_id: impl Into<String>,
        app_id: impl Into<String>,
    ) -> Self {
        Self {
            project_id: project_id.into(),
            api_key: api_key.into(),
            sender_id: sender_id.into(),
            app_id: app_id.into(),
        }
    }

    /// Get the project identifier
    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// Get the API key
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Get the sender identifier
    pub fn sender_id(&self) -> &str {
        &self.sender_id
    }

    /// Get the application identifier
    pub fn app_id(&self) -> &str {
        &self.app_id
    }
}
