#![cfg_attr(doc, doc = include_str!("../README.md"))]

pub mod auth;
pub mod client;
pub mod entities;
pub mod error;
pub(crate) mod serde_helpers;
pub mod types;

use phf::phf_map;
use reqwest::Request;
use serde::de::DeserializeOwned;
use serde_json::Value;

pub use crate::auth::Credentials;
pub use crate::client::{Config, SmiteClient};
use crate::error::Error;
use crate::types::ApiPlatform;

pub type Result<T> = std::result::Result<T, Error>;

/// Environment variable conventionally holding the developer auth key.
pub const AUTH_KEY_VAR: &str = "SMITE_AUTH_KEY";

/// Environment variable conventionally holding the developer id.
pub const DEV_ID_VAR: &str = "SMITE_DEV_ID";

static PLATFORM_HOSTS: phf::Map<u8, &'static str> = phf_map! {
    1_u8 => "https://api.smitegame.com/smiteapi.svc",
    9_u8 => "https://api.ps4.smitegame.com/smiteapi.svc",
    10_u8 => "https://api.xbox.smitegame.com/smiteapi.svc",
};

/// Returns the base URL of the API host serving the given `platform`.
#[must_use]
pub fn platform_host(platform: ApiPlatform) -> Option<&'static str> {
    PLATFORM_HOSTS.get(&platform.code()).copied()
}

/// The `ret_msg` all successful envelopes carry on session creation.
const RET_MSG_APPROVED: &str = "Approved";

/// Extracts a populated error envelope from an object response, if any.
///
/// The API reports failures with HTTP 200 and a non-null `ret_msg`; array
/// responses carry `ret_msg: null` per element and pass through untouched.
fn envelope_error(value: &Value) -> Option<&str> {
    let ret_msg = value.as_object()?.get("ret_msg")?.as_str()?.trim();

    (!ret_msg.is_empty() && ret_msg != RET_MSG_APPROVED).then_some(ret_msg)
}

#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        level = "debug",
        skip(client, request),
        fields(
            method = %request.method(),
            path = request.url().path(),
            status_code
        )
    )
)]
pub(crate) async fn request<Response: DeserializeOwned>(
    client: &reqwest::Client,
    request: Request,
    operation: &str,
) -> Result<Response> {
    let method = request.method().clone();
    let path = request.url().path().to_owned();

    let response = client.execute(request).await?;
    let status_code = response.status();

    #[cfg(feature = "tracing")]
    tracing::Span::current().record("status_code", status_code.as_u16());

    if !status_code.is_success() {
        let message = response.text().await.unwrap_or_default();

        #[cfg(feature = "tracing")]
        tracing::warn!(
            status = %status_code,
            method = %method,
            path = %path,
            message = %message,
            "API request failed"
        );

        return Err(Error::status(status_code, method, path, message));
    }

    let json_value = response.json::<Value>().await?;

    if let Some(ret_msg) = envelope_error(&json_value) {
        #[cfg(feature = "tracing")]
        tracing::warn!(
            operation = %operation,
            ret_msg = %ret_msg,
            "API reported an error envelope"
        );

        return Err(Error::api(operation, ret_msg));
    }

    serde_helpers::deserialize_with_warnings(json_value)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn platform_hosts_cover_all_platforms() {
        assert_eq!(
            platform_host(ApiPlatform::Pc),
            Some("https://api.smitegame.com/smiteapi.svc")
        );
        assert_eq!(
            platform_host(ApiPlatform::Xbox),
            Some("https://api.xbox.smitegame.com/smiteapi.svc")
        );
        assert_eq!(
            platform_host(ApiPlatform::Ps4),
            Some("https://api.ps4.smitegame.com/smiteapi.svc")
        );
    }

    #[test]
    fn envelope_error_flags_populated_ret_msg() {
        let value = json!({ "ret_msg": "Invalid session id.", "session_id": null });

        assert_eq!(envelope_error(&value), Some("Invalid session id."));
    }

    #[test]
    fn envelope_error_passes_approved_and_null() {
        assert_eq!(
            envelope_error(&json!({ "ret_msg": "Approved", "session_id": "abc" })),
            None
        );
        assert_eq!(envelope_error(&json!({ "ret_msg": null, "Wins": 3 })), None);
        assert_eq!(envelope_error(&json!({ "Wins": 3 })), None);
    }

    #[test]
    fn envelope_error_ignores_arrays_and_scalars() {
        assert_eq!(envelope_error(&json!([{ "ret_msg": "whatever" }])), None);
        assert_eq!(envelope_error(&json!("pong")), None);
    }
}
