//! Request signing and session state for the Hi-Rez API.
//!
//! Every signed call carries the developer id, an MD5 signature of
//! `devId + method + authKey + timestamp`, the current session id, and the
//! timestamp itself (UTC, `yyyyMMddHHmmss`). Sessions are created on demand
//! via `createsession` and expire server-side after 15 minutes.

use std::fmt::Write as _;

use chrono::{DateTime, TimeDelta, Utc};
use md5::{Digest as _, Md5};
/// Secret string type that redacts values in debug output for security.
pub use secrecy::{ExposeSecret, SecretString};

use crate::error::Error;

/// How long a session is trusted locally. The server cuts sessions off at
/// fifteen minutes; expiring one minute early avoids racing that cutoff
/// mid-request.
pub(crate) const SESSION_TTL: TimeDelta = TimeDelta::minutes(14);

/// The timestamp layout the Hi-Rez API expects in signatures and URLs.
const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// Developer credentials issued by Hi-Rez. Used to sign every request and to
/// create sessions. The auth key is held as a [`SecretString`] so it never
/// appears in debug output.
#[derive(Clone, Debug)]
pub struct Credentials {
    pub(crate) dev_id: u32,
    pub(crate) auth_key: SecretString,
}

impl Credentials {
    #[must_use]
    pub fn new(dev_id: u32, auth_key: String) -> Self {
        Self {
            dev_id,
            auth_key: SecretString::from(auth_key),
        }
    }

    /// Reads credentials from the [`DEV_ID_VAR`](crate::DEV_ID_VAR) and
    /// [`AUTH_KEY_VAR`](crate::AUTH_KEY_VAR) environment variables.
    ///
    /// # Errors
    ///
    /// Returns a validation error when either variable is unset or the
    /// developer id is not a number.
    pub fn from_env() -> crate::Result<Self> {
        let dev_id = std::env::var(crate::DEV_ID_VAR)
            .ok()
            .and_then(|raw| raw.parse().ok())
            .ok_or_else(|| {
                Error::validation(format!(
                    "{} must be set to a numeric developer id",
                    crate::DEV_ID_VAR
                ))
            })?;
        let auth_key = std::env::var(crate::AUTH_KEY_VAR)
            .ok()
            .ok_or_else(|| Error::validation(format!("{} must be set", crate::AUTH_KEY_VAR)))?;

        Ok(Self::new(dev_id, auth_key))
    }

    /// Returns the developer id.
    #[must_use]
    pub fn dev_id(&self) -> u32 {
        self.dev_id
    }

    /// Returns the auth key.
    #[must_use]
    pub fn auth_key(&self) -> &SecretString {
        &self.auth_key
    }
}

/// An active API session. Obtained from `createsession` and cached by the
/// client until [`Session::is_expired`] reports true.
#[derive(Clone, Debug)]
pub(crate) struct Session {
    pub(crate) id: String,
    pub(crate) created_at: DateTime<Utc>,
}

impl Session {
    pub(crate) fn new(id: String, created_at: DateTime<Utc>) -> Self {
        Self { id, created_at }
    }

    pub(crate) fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now - self.created_at >= SESSION_TTL
    }
}

/// Formats `when` the way the API expects timestamps: UTC `yyyyMMddHHmmss`.
#[must_use]
pub(crate) fn timestamp(when: DateTime<Utc>) -> String {
    when.format(TIMESTAMP_FORMAT).to_string()
}

/// Computes the per-request signature: lowercase hex MD5 of
/// `devId + method + authKey + timestamp`.
#[must_use]
pub(crate) fn signature(credentials: &Credentials, method: &str, timestamp: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(credentials.dev_id.to_string().as_bytes());
    hasher.update(method.as_bytes());
    hasher.update(credentials.auth_key.expose_secret().as_bytes());
    hasher.update(timestamp.as_bytes());

    hasher
        .finalize()
        .iter()
        .fold(String::with_capacity(32), |mut out, byte| {
            let _ = write!(out, "{byte:02x}");
            out
        })
}
