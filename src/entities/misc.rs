use std::sync::OnceLock;

use chrono::{DateTime, Utc};

use crate::client::SmiteClient;
use crate::serde_helpers::parse_datetime;
use crate::types::ServerState;
use crate::types::response::{DataUsedModel, PatchInfoModel, ServerStatusModel};

/// One server's health entry from
/// [`server_status`](SmiteClient::server_status).
#[derive(Debug)]
pub struct ServerStatus {
    client: SmiteClient,
    model: ServerStatusModel,
    entry_time: OnceLock<Option<DateTime<Utc>>>,
}

impl ServerStatus {
    pub(crate) fn new(client: SmiteClient, model: ServerStatusModel) -> Self {
        Self {
            client,
            model,
            entry_time: OnceLock::new(),
        }
    }

    /// The client that produced this entity.
    #[must_use]
    pub fn client(&self) -> &SmiteClient {
        &self.client
    }

    /// The raw model this entity wraps.
    #[must_use]
    pub fn model(&self) -> &ServerStatusModel {
        &self.model
    }

    /// The server's reported health.
    #[must_use]
    pub fn state(&self) -> ServerState {
        self.model
            .status
            .as_deref()
            .map_or(ServerState::Unknown, ServerState::from_status)
    }

    /// Whether the servers are in limited access mode.
    #[must_use]
    pub fn is_limited_access(&self) -> bool {
        self.model.limited_access
    }

    /// The platform this entry covers, as the API reports it (e.g. `pc`).
    #[must_use]
    pub fn platform(&self) -> Option<&str> {
        self.model.platform.as_deref()
    }

    /// The environment this entry covers, e.g. `live`.
    #[must_use]
    pub fn environment(&self) -> Option<&str> {
        self.model.environment.as_deref()
    }

    /// The game version the servers are running.
    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.model.version.as_deref()
    }

    /// When this entry was recorded.
    #[must_use]
    pub fn entry_time(&self) -> Option<DateTime<Utc>> {
        *self.entry_time.get_or_init(|| {
            self.model
                .entry_datetime
                .as_deref()
                .and_then(parse_datetime)
        })
    }
}

/// Daily API quota usage from [`data_used`](SmiteClient::data_used).
#[derive(Debug)]
pub struct DataUsed {
    client: SmiteClient,
    model: DataUsedModel,
}

impl DataUsed {
    pub(crate) fn new(client: SmiteClient, model: DataUsedModel) -> Self {
        Self { client, model }
    }

    /// The client that produced this entity.
    #[must_use]
    pub fn client(&self) -> &SmiteClient {
        &self.client
    }

    /// The raw model this entity wraps.
    #[must_use]
    pub fn model(&self) -> &DataUsedModel {
        &self.model
    }

    #[must_use]
    pub fn active_sessions(&self) -> i32 {
        self.model.active_sessions
    }

    #[must_use]
    pub fn concurrent_sessions(&self) -> i32 {
        self.model.concurrent_sessions
    }

    #[must_use]
    pub fn request_limit_daily(&self) -> i32 {
        self.model.request_limit_daily
    }

    #[must_use]
    pub fn session_cap(&self) -> i32 {
        self.model.session_cap
    }

    /// How long a session lives, in minutes.
    #[must_use]
    pub fn session_time_limit(&self) -> i32 {
        self.model.session_time_limit
    }

    #[must_use]
    pub fn total_requests_today(&self) -> i32 {
        self.model.total_requests_today
    }

    #[must_use]
    pub fn total_sessions_today(&self) -> i32 {
        self.model.total_sessions_today
    }

    /// How many requests remain in today's quota. Saturates at zero.
    #[must_use]
    pub fn requests_remaining_today(&self) -> i32 {
        (self.model.request_limit_daily - self.model.total_requests_today).max(0)
    }
}

/// The current game version from [`patch_info`](SmiteClient::patch_info).
#[derive(Debug)]
pub struct PatchInfo {
    client: SmiteClient,
    model: PatchInfoModel,
}

impl PatchInfo {
    pub(crate) fn new(client: SmiteClient, model: PatchInfoModel) -> Self {
        Self { client, model }
    }

    /// The client that produced this entity.
    #[must_use]
    pub fn client(&self) -> &SmiteClient {
        &self.client
    }

    /// The raw model this entity wraps.
    #[must_use]
    pub fn model(&self) -> &PatchInfoModel {
        &self.model
    }

    /// The live game version, e.g. `10.11`.
    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.model.version_string.as_deref()
    }
}
