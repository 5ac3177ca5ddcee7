//! Enumerations for the closed code sets the API uses.
//!
//! Conversions from remote codes are total: any code outside the documented
//! set maps to the `Unknown` variant instead of failing, so a new tier or
//! portal added server-side never breaks deserialized data.

use std::fmt;

pub mod response;

/// The platform-specific API endpoints. Each platform hosts its own copy of
/// the service with an identical surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, strum_macros::Display)]
#[non_exhaustive]
pub enum ApiPlatform {
    #[default]
    #[strum(serialize = "PC")]
    Pc,
    Xbox,
    #[strum(serialize = "PS4")]
    Ps4,
}

impl ApiPlatform {
    /// The numeric code Hi-Rez assigns this platform.
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            ApiPlatform::Pc => 1,
            ApiPlatform::Ps4 => 9,
            ApiPlatform::Xbox => 10,
        }
    }
}

/// The distribution platforms ("portals") a player account can live on.
///
/// Portal codes appear as path parameters on lookups like `getplayer` and as
/// string-encoded integers in responses like `getfriends`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display)]
#[non_exhaustive]
pub enum Portal {
    HiRez,
    Steam,
    #[strum(serialize = "PSN")]
    Psn,
    Xbox,
    Switch,
    Discord,
    Epic,
    /// A portal code this crate does not know about.
    Unknown,
}

impl Portal {
    /// The numeric code the API uses for this portal, or `None` for
    /// [`Portal::Unknown`], which cannot be sent in a request.
    #[must_use]
    pub fn code(self) -> Option<u8> {
        match self {
            Portal::HiRez => Some(1),
            Portal::Steam => Some(5),
            Portal::Psn => Some(9),
            Portal::Xbox => Some(10),
            Portal::Switch => Some(22),
            Portal::Discord => Some(25),
            Portal::Epic => Some(28),
            Portal::Unknown => None,
        }
    }

    #[must_use]
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => Portal::HiRez,
            5 => Portal::Steam,
            9 => Portal::Psn,
            10 => Portal::Xbox,
            22 => Portal::Switch,
            25 => Portal::Discord,
            28 => Portal::Epic,
            _ => Portal::Unknown,
        }
    }
}

/// Ranked league tiers. Tier codes run from 1 (Bronze V) through 27
/// (Grandmasters); 0 means the player has not placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display)]
#[non_exhaustive]
pub enum Rank {
    Unranked,
    Bronze5,
    Bronze4,
    Bronze3,
    Bronze2,
    Bronze1,
    Silver5,
    Silver4,
    Silver3,
    Silver2,
    Silver1,
    Gold5,
    Gold4,
    Gold3,
    Gold2,
    Gold1,
    Platinum5,
    Platinum4,
    Platinum3,
    Platinum2,
    Platinum1,
    Diamond5,
    Diamond4,
    Diamond3,
    Diamond2,
    Diamond1,
    Masters,
    Grandmasters,
    /// A tier code this crate does not know about.
    Unknown,
}

impl Rank {
    #[must_use]
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => Rank::Unranked,
            1 => Rank::Bronze5,
            2 => Rank::Bronze4,
            3 => Rank::Bronze3,
            4 => Rank::Bronze2,
            5 => Rank::Bronze1,
            6 => Rank::Silver5,
            7 => Rank::Silver4,
            8 => Rank::Silver3,
            9 => Rank::Silver2,
            10 => Rank::Silver1,
            11 => Rank::Gold5,
            12 => Rank::Gold4,
            13 => Rank::Gold3,
            14 => Rank::Gold2,
            15 => Rank::Gold1,
            16 => Rank::Platinum5,
            17 => Rank::Platinum4,
            18 => Rank::Platinum3,
            19 => Rank::Platinum2,
            20 => Rank::Platinum1,
            21 => Rank::Diamond5,
            22 => Rank::Diamond4,
            23 => Rank::Diamond3,
            24 => Rank::Diamond2,
            25 => Rank::Diamond1,
            26 => Rank::Masters,
            27 => Rank::Grandmasters,
            _ => Rank::Unknown,
        }
    }
}

/// What a player is doing right now, per `getplayerstatus`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display)]
#[non_exhaustive]
pub enum PlayerStatus {
    Offline,
    InLobby,
    GodSelection,
    InGame,
    Online,
    /// A status code this crate does not know about.
    Unknown,
}

impl PlayerStatus {
    #[must_use]
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => PlayerStatus::Offline,
            1 => PlayerStatus::InLobby,
            2 => PlayerStatus::GodSelection,
            3 => PlayerStatus::InGame,
            4 => PlayerStatus::Online,
            _ => PlayerStatus::Unknown,
        }
    }
}

/// The reported health of a game server, per `gethirezserverstatus`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display)]
#[non_exhaustive]
pub enum ServerState {
    Up,
    Down,
    /// A status string this crate does not know about.
    Unknown,
}

impl ServerState {
    #[must_use]
    pub fn from_status(status: &str) -> Self {
        match status.to_ascii_uppercase().as_str() {
            "UP" => ServerState::Up,
            "DOWN" => ServerState::Down,
            _ => ServerState::Unknown,
        }
    }
}

/// Languages `getgods` can localize god lore and ability text into.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Language {
    #[default]
    English,
    German,
    French,
    Spanish,
    SpanishLatinAmerica,
    Portuguese,
    Russian,
    Polish,
    Turkish,
}

impl Language {
    /// The numeric language code the API expects.
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            Language::English => 1,
            Language::German => 2,
            Language::French => 3,
            Language::Spanish => 7,
            Language::SpanishLatinAmerica => 9,
            Language::Portuguese => 10,
            Language::Russian => 11,
            Language::Polish => 12,
            Language::Turkish => 13,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
