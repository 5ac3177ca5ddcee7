//! The client facade for the Hi-Rez Smite API.
//!
//! One method per remote operation. Every method validates its arguments
//! locally before touching the network, signs the call (creating or renewing
//! the session as needed), and wraps the deserialized models in the matching
//! entity types from [`crate::entities`].
//!
//! # Example
//!
//! ```no_run
//! use smite_client_sdk::types::Portal;
//! use smite_client_sdk::{Config, Credentials, Result, SmiteClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let credentials = Credentials::new(1004, "my-auth-key".to_owned());
//!     let client = SmiteClient::new(credentials, Config::default())?;
//!
//!     for player in client.players_by_name("Weak3n", Portal::HiRez).await? {
//!         println!("{} (level {})", player, player.level());
//!     }
//!
//!     Ok(())
//! }
//! ```

use std::sync::{Arc, PoisonError, RwLock};

use bon::Builder;
use chrono::Utc;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client as ReqwestClient, Method};
use serde::de::DeserializeOwned;
use url::Url;

use crate::auth::{self, Credentials, Session};
use crate::entities::{
    DataUsed, Friend, God, GodStats, PatchInfo, Player, PlayerAccolades, PlayerCurrentStatus,
    PlayerNameSearchResult, ServerStatus,
};
use crate::error::Error;
use crate::types::response::{
    DataUsedModel, FriendModel, GodModel, GodStatsModel, PatchInfoModel, PingResponse,
    PlayerAccoladesModel, PlayerIdByNameModel, PlayerModel, PlayerStatusModel, ServerStatusModel,
    SessionModel,
};
use crate::types::{ApiPlatform, Language, Portal};
use crate::{Result, platform_host};

/// Configuration for [`SmiteClient`].
#[derive(Clone, Debug, Default, Builder)]
pub struct Config {
    /// Which platform-specific API host to target. Defaults to
    /// [`ApiPlatform::Pc`].
    #[builder(default = ApiPlatform::Pc)]
    platform: ApiPlatform,
    /// The language god lore and ability text is localized into.
    #[builder(default)]
    language: Language,
    /// Override for the API host. Defaults to the host for `platform`.
    /// This is primarily useful for testing.
    #[builder(into)]
    host: Option<String>,
}

/// The main way for API users to interact with the Smite API.
///
/// A [`SmiteClient`] holds the developer [`Credentials`] (set once at
/// construction, read-only thereafter) and a cached session that is created
/// on demand and renewed transparently when it expires.
///
/// Cloning is cheap: clones share the same connection pool and session.
///
/// # Concurrency
///
/// Concurrent calls through one client are not coordinated beyond the shared
/// session slot. Two calls racing an expired session may each create one;
/// both calls succeed and the last session written is reused afterwards.
/// Callers needing strict single-session behavior must serialize their calls.
#[derive(Clone, Debug)]
pub struct SmiteClient {
    inner: Arc<ClientInner>,
}

#[derive(Debug)]
struct ClientInner {
    config: Config,
    credentials: Credentials,
    /// The [`Url`] against which `client` is making requests.
    host: Url,
    /// The inner [`ReqwestClient`] used to make requests to `host`.
    client: ReqwestClient,
    /// The cached session, created on first signed call.
    session: RwLock<Option<Session>>,
}

impl SmiteClient {
    /// Creates a new client for the given developer credentials.
    ///
    /// # Errors
    ///
    /// Returns an error if the host URL is invalid or the HTTP client cannot
    /// be created.
    pub fn new(credentials: Credentials, config: Config) -> Result<SmiteClient> {
        let mut headers = HeaderMap::new();

        headers.insert("User-Agent", HeaderValue::from_static("smite_client_sdk"));
        headers.insert("Accept", HeaderValue::from_static("*/*"));
        headers.insert("Connection", HeaderValue::from_static("keep-alive"));
        let client = ReqwestClient::builder().default_headers(headers).build()?;

        let host = match config.host.as_deref() {
            Some(host) => host,
            None => platform_host(config.platform)
                .ok_or_else(|| Error::validation("no API host known for the configured platform"))?,
        };

        Ok(Self {
            inner: Arc::new(ClientInner {
                host: Url::parse(host)?,
                config,
                credentials,
                client,
                session: RwLock::new(None),
            }),
        })
    }

    /// Returns the base URL of the API host.
    #[must_use]
    pub fn host(&self) -> &Url {
        &self.inner.host
    }

    /// Returns the developer id these requests are signed with.
    #[must_use]
    pub fn dev_id(&self) -> u32 {
        self.inner.credentials.dev_id()
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{path}",
            self.inner.host.as_str().trim_end_matches('/')
        )
    }

    async fn get<Res: DeserializeOwned>(&self, operation: &str, url: String) -> Result<Res> {
        let request = self
            .inner
            .client
            .request(Method::GET, Url::parse(&url)?)
            .build()?;

        crate::request(&self.inner.client, request, operation).await
    }

    /// Creates a fresh session via `createsession` and validates the
    /// `Approved` envelope.
    async fn create_session(&self) -> Result<Session> {
        const OPERATION: &str = "createsession";

        let now = Utc::now();
        let timestamp = auth::timestamp(now);
        let signature = auth::signature(&self.inner.credentials, OPERATION, &timestamp);
        let url = self.endpoint(&format!(
            "{OPERATION}json/{}/{signature}/{timestamp}",
            self.dev_id()
        ));

        let model: SessionModel = self.get(OPERATION, url).await?;

        match model.ret_msg.as_deref() {
            Some(crate::RET_MSG_APPROVED) => {}
            Some(other) => return Err(Error::api(OPERATION, other)),
            None => return Err(Error::api(OPERATION, "missing ret_msg in session envelope")),
        }

        let id = model
            .session_id
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| Error::api(OPERATION, "missing session_id in session envelope"))?;

        Ok(Session::new(id, now))
    }

    /// Returns a session id that is valid right now, creating a session when
    /// none is cached or the cached one has expired.
    async fn ensure_session(&self) -> Result<String> {
        let now = Utc::now();

        {
            let guard = self
                .inner
                .session
                .read()
                .unwrap_or_else(PoisonError::into_inner);
            if let Some(session) = guard.as_ref()
                && !session.is_expired(now)
            {
                return Ok(session.id.clone());
            }
        }

        let session = self.create_session().await?;
        let id = session.id.clone();

        let mut guard = self
            .inner
            .session
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *guard = Some(session);

        Ok(id)
    }

    /// Issues a signed call to `operation` with the given ordered path
    /// parameters and deserializes the response.
    async fn call<Res: DeserializeOwned>(&self, operation: &str, params: &[String]) -> Result<Res> {
        let session = self.ensure_session().await?;
        let timestamp = auth::timestamp(Utc::now());
        let signature = auth::signature(&self.inner.credentials, operation, &timestamp);

        let mut path = format!(
            "{operation}json/{}/{signature}/{session}/{timestamp}",
            self.dev_id()
        );
        for param in params {
            path.push('/');
            path.push_str(param);
        }

        self.get(operation, self.endpoint(&path)).await
    }

    /// Checks that the API is reachable. This is the only operation that is
    /// neither signed nor session-bound.
    ///
    /// # Errors
    ///
    /// Returns an error if the API is unreachable or returns a non-success
    /// status code.
    pub async fn ping(&self) -> Result<PingResponse> {
        self.get("ping", self.endpoint("pingjson")).await
    }

    /// Confirms that the current session is valid, creating one if needed.
    /// Returns the API's confirmation message.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the session is rejected.
    pub async fn test_session(&self) -> Result<String> {
        self.call("testsession", &[]).await
    }

    /// Retrieves today's API quota usage for these credentials.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn data_used(&self) -> Result<DataUsed> {
        let response: Vec<DataUsedModel> = self.call("getdataused", &[]).await?;

        // The API wraps this single record in a one-element array.
        response
            .into_iter()
            .next()
            .map(|model| DataUsed::new(self.clone(), model))
            .ok_or_else(|| Error::api("getdataused", "empty response"))
    }

    /// Retrieves the health of the game servers, one entry per platform and
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn server_status(&self) -> Result<Vec<ServerStatus>> {
        let response: Vec<ServerStatusModel> = self.call("gethirezserverstatus", &[]).await?;

        Ok(self.wrap(response, ServerStatus::new))
    }

    /// Retrieves the version of the live game.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn patch_info(&self) -> Result<PatchInfo> {
        let response: PatchInfoModel = self.call("getpatchinfo", &[]).await?;

        Ok(PatchInfo::new(self.clone(), response))
    }

    /// Searches for player ids matching the given name exactly.
    ///
    /// Returns zero entries when the name does not exist, one on a unique
    /// match, and several when the name exists on multiple portals.
    ///
    /// # Errors
    ///
    /// Returns a validation error when `name` is blank; otherwise errors when
    /// the request fails.
    pub async fn player_ids_by_name(&self, name: &str) -> Result<Vec<PlayerNameSearchResult>> {
        let name = validated_name(name)?;

        let response: Vec<PlayerIdByNameModel> =
            self.call("getplayeridbyname", &[name.to_owned()]).await?;

        Ok(self.wrap(response, PlayerNameSearchResult::new))
    }

    /// Retrieves the full profiles for players with the given name on the
    /// given portal.
    ///
    /// Returns zero entities when the name does not exist on that portal, one
    /// on a unique match, and several when the API reports merged or renamed
    /// accounts.
    ///
    /// # Errors
    ///
    /// Returns a validation error when `name` is blank or `portal` is
    /// [`Portal::Unknown`]; otherwise errors when the request fails.
    pub async fn players_by_name(&self, name: &str, portal: Portal) -> Result<Vec<Player>> {
        let name = validated_name(name)?;
        let portal = validated_portal(portal)?;

        let response: Vec<PlayerModel> = self
            .call("getplayer", &[name.to_owned(), portal.to_string()])
            .await?;

        Ok(self.wrap(response, Player::new))
    }

    /// Searches for player ids matching a console gamertag on the given
    /// portal.
    ///
    /// # Errors
    ///
    /// Returns a validation error when `gamertag` is blank or `portal` is
    /// [`Portal::Unknown`]; otherwise errors when the request fails.
    pub async fn player_ids_by_gamertag(
        &self,
        gamertag: &str,
        portal: Portal,
    ) -> Result<Vec<PlayerNameSearchResult>> {
        let gamertag = validated_name(gamertag)?;
        let portal = validated_portal(portal)?;

        let response: Vec<PlayerIdByNameModel> = self
            .call(
                "getplayeridsbygamertag",
                &[portal.to_string(), gamertag.to_owned()],
            )
            .await?;

        Ok(self.wrap(response, PlayerNameSearchResult::new))
    }

    /// Searches for player ids by the platform-native account id of the
    /// given portal (e.g. a Steam id64).
    ///
    /// # Errors
    ///
    /// Returns a validation error when `portal_user_id` is negative or
    /// `portal` is [`Portal::Unknown`]; otherwise errors when the request
    /// fails.
    pub async fn player_ids_by_portal_user_id(
        &self,
        portal: Portal,
        portal_user_id: i64,
    ) -> Result<Vec<PlayerNameSearchResult>> {
        let portal = validated_portal(portal)?;
        validated_id(portal_user_id, "portal_user_id")?;

        let response: Vec<PlayerIdByNameModel> = self
            .call(
                "getplayeridbyportaluserid",
                &[portal.to_string(), portal_user_id.to_string()],
            )
            .await?;

        Ok(self.wrap(response, PlayerNameSearchResult::new))
    }

    /// Retrieves the friends of the given player.
    ///
    /// # Errors
    ///
    /// Returns a validation error when `player_id` is negative; otherwise
    /// errors when the request fails.
    pub async fn friends(&self, player_id: i64) -> Result<Vec<Friend>> {
        validated_id(player_id, "player_id")?;

        let response: Vec<FriendModel> =
            self.call("getfriends", &[player_id.to_string()]).await?;

        Ok(self.wrap(response, Friend::new))
    }

    /// Retrieves the given player's performance with every god they have
    /// played.
    ///
    /// # Errors
    ///
    /// Returns a validation error when `player_id` is negative; otherwise
    /// errors when the request fails.
    pub async fn god_ranks(&self, player_id: i64) -> Result<Vec<GodStats>> {
        validated_id(player_id, "player_id")?;

        let response: Vec<GodStatsModel> =
            self.call("getgodranks", &[player_id.to_string()]).await?;

        Ok(self.wrap(response, GodStats::new))
    }

    /// Retrieves the given player's lifetime combat accolades.
    ///
    /// # Errors
    ///
    /// Returns a validation error when `player_id` is negative; otherwise
    /// errors when the request fails.
    pub async fn player_accolades(&self, player_id: i64) -> Result<PlayerAccolades> {
        validated_id(player_id, "player_id")?;

        let response: PlayerAccoladesModel = self
            .call("getplayerachievements", &[player_id.to_string()])
            .await?;

        Ok(PlayerAccolades::new(self.clone(), response))
    }

    /// Retrieves what the given player is doing right now.
    ///
    /// # Errors
    ///
    /// Returns a validation error when `player_id` is negative; otherwise
    /// errors when the request fails.
    pub async fn player_status(&self, player_id: i64) -> Result<Vec<PlayerCurrentStatus>> {
        validated_id(player_id, "player_id")?;

        let response: Vec<PlayerStatusModel> =
            self.call("getplayerstatus", &[player_id.to_string()]).await?;

        Ok(self.wrap(response, PlayerCurrentStatus::new))
    }

    /// Retrieves all playable gods, with lore localized per the configured
    /// [`Language`].
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn gods(&self) -> Result<Vec<God>> {
        let language = self.inner.config.language;

        let response: Vec<GodModel> =
            self.call("getgods", &[language.to_string()]).await?;

        Ok(self.wrap(response, God::new))
    }

    /// Wraps each model in its entity, preserving response order.
    fn wrap<M, E>(&self, models: Vec<M>, make: fn(SmiteClient, M) -> E) -> Vec<E> {
        models
            .into_iter()
            .map(|model| make(self.clone(), model))
            .collect()
    }
}

fn validated_name(name: &str) -> Result<&str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(Error::validation("name must not be blank"));
    }
    Ok(trimmed)
}

fn validated_id(id: i64, field: &str) -> Result<()> {
    if id < 0 {
        return Err(Error::validation(format!("{field} must not be negative")));
    }
    Ok(())
}

fn validated_portal(portal: Portal) -> Result<u8> {
    portal
        .code()
        .ok_or_else(|| Error::validation("portal must be a concrete portal, not Unknown"))
}
