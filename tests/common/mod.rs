#![allow(
    clippy::unwrap_used,
    clippy::missing_panics_doc,
    reason = "Do not need additional syntax for setting up tests, and https://github.com/rust-lang/rust-clippy/issues/13981"
)]
#![allow(
    unused,
    reason = "Not every test binary uses every helper"
)]

use httpmock::Method::GET;
use httpmock::{Mock, MockServer};
use reqwest::StatusCode;
use serde_json::json;
use smite_client_sdk::{Config, Credentials, SmiteClient};

// sample credentials from the official API documentation
pub const DEV_ID: u32 = 1004;
pub const AUTH_KEY: &str = "23DF3C7E9BD14D84BFE73955738B6F";

pub const SESSION_ID: &str = "8E1B8B1BD54B4C4E8E1B8B1BD54B4C4E";

/// Builds a client pointed at the mock server instead of a live platform
/// host.
pub fn create_client(server: &MockServer) -> anyhow::Result<SmiteClient> {
    let credentials = Credentials::new(DEV_ID, AUTH_KEY.to_owned());
    let config = Config::builder().host(server.base_url()).build();

    Ok(SmiteClient::new(credentials, config)?)
}

/// Mocks a successful `createsession` exchange. Signed calls trigger this
/// exactly once per client; `mock.hits()` exposes the actual count.
pub fn mock_session(server: &MockServer) -> Mock<'_> {
    server.mock(|when, then| {
        when.method(GET).path_includes("/createsessionjson/");
        then.status(StatusCode::OK).json_body(json!({
            "ret_msg": "Approved",
            "session_id": SESSION_ID,
            "timestamp": "9/27/2012 6:31:45 PM"
        }));
    })
}
