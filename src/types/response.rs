#![allow(
    clippy::module_name_repetitions,
    reason = "Model suffix is intentional for clarity"
)]

//! Raw response models mirroring the remote JSON schema field-for-field.
//!
//! Field names follow the API's historical casing quirks (`Avatar_URL`,
//! `hz_gamer_tag`, `Rank_Stat_Conquest`) through serde renames; the typed view
//! over these models lives in [`crate::entities`]. Models are plain data
//! holders and are never mutated after deserialization.
//!
//! The API encodes several numeric fields as strings on some endpoints and as
//! numbers on others; those fields go through
//! [`StringFromAny`](crate::serde_helpers::StringFromAny).

use bon::Builder;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

use crate::serde_helpers::StringFromAny;

/// Response to `ping` and `testsession`: a bare status string.
pub type PingResponse = String;

/// Envelope returned by `createsession`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct SessionModel {
    pub ret_msg: Option<String>,
    pub session_id: Option<String>,
    pub timestamp: Option<String>,
}

/// Daily API quota usage, from `getdataused`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct DataUsedModel {
    #[serde(rename = "Active_Sessions")]
    pub active_sessions: i32,
    #[serde(rename = "Concurrent_Sessions")]
    pub concurrent_sessions: i32,
    #[serde(rename = "Request_Limit_Daily")]
    pub request_limit_daily: i32,
    #[serde(rename = "Session_Cap")]
    pub session_cap: i32,
    #[serde(rename = "Session_Time_Limit")]
    pub session_time_limit: i32,
    #[serde(rename = "Total_Requests_Today")]
    pub total_requests_today: i32,
    #[serde(rename = "Total_Sessions_Today")]
    pub total_sessions_today: i32,
    pub ret_msg: Option<String>,
}

/// One server's health entry, from `gethirezserverstatus`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct ServerStatusModel {
    pub entry_datetime: Option<String>,
    pub environment: Option<String>,
    pub limited_access: bool,
    pub platform: Option<String>,
    pub status: Option<String>,
    pub version: Option<String>,
    pub ret_msg: Option<String>,
}

/// Current game version, from `getpatchinfo`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct PatchInfoModel {
    pub ret_msg: Option<String>,
    pub version_string: Option<String>,
}

/// One hit from the player-id search operations (`getplayeridbyname`,
/// `getplayeridsbygamertag`, `getplayeridbyportaluserid`).
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct PlayerIdByNameModel {
    pub player_id: i64,
    pub portal: Option<String>,
    #[serde_as(as = "Option<StringFromAny>")]
    pub portal_id: Option<String>,
    pub privacy_flag: Option<String>,
    pub ret_msg: Option<String>,
}

/// A record of an account that was merged into another, embedded in
/// [`PlayerModel`].
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct MergedPlayerModel {
    pub merge_datetime: Option<String>,
    #[serde_as(as = "Option<StringFromAny>")]
    #[serde(rename = "playerId")]
    pub player_id: Option<String>,
    #[serde_as(as = "Option<StringFromAny>")]
    #[serde(rename = "portalId")]
    pub portal_id: Option<String>,
}

/// Per-queue ranked statistics embedded in [`PlayerModel`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct RankedStatsModel {
    pub leaves: i32,
    pub losses: i32,
    pub name: Option<String>,
    pub points: i32,
    pub prev_rank: i32,
    pub rank: i32,
    pub season: i32,
    pub tier: i32,
    pub trend: i32,
    pub wins: i32,
    #[serde(rename = "player_id")]
    pub player_id: Option<String>,
    #[serde(rename = "ret_msg")]
    pub ret_msg: Option<String>,
}

/// A full player profile, from `getplayer`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct PlayerModel {
    pub active_player_id: i64,
    #[serde(rename = "Avatar_URL")]
    pub avatar_url: Option<String>,
    #[serde(rename = "Created_Datetime")]
    pub created_datetime: Option<String>,
    pub hours_played: i32,
    pub id: i64,
    #[serde(rename = "Last_Login_Datetime")]
    pub last_login_datetime: Option<String>,
    pub leaves: i32,
    pub level: i32,
    pub losses: i32,
    pub mastery_level: i32,
    pub merged_players: Option<Vec<MergedPlayerModel>>,
    pub name: Option<String>,
    #[serde(rename = "Personal_Status_Message")]
    pub personal_status_message: Option<String>,
    #[serde(rename = "Rank_Stat_Conquest")]
    pub rank_stat_conquest: f64,
    #[serde(rename = "Rank_Stat_Conquest_Controller")]
    pub rank_stat_conquest_controller: f64,
    #[serde(rename = "Rank_Stat_Duel")]
    pub rank_stat_duel: f64,
    #[serde(rename = "Rank_Stat_Duel_Controller")]
    pub rank_stat_duel_controller: f64,
    #[serde(rename = "Rank_Stat_Joust")]
    pub rank_stat_joust: f64,
    #[serde(rename = "Rank_Stat_Joust_Controller")]
    pub rank_stat_joust_controller: f64,
    pub ranked_conquest: RankedStatsModel,
    pub ranked_conquest_controller: RankedStatsModel,
    pub ranked_duel: RankedStatsModel,
    pub ranked_duel_controller: RankedStatsModel,
    pub ranked_joust: RankedStatsModel,
    pub ranked_joust_controller: RankedStatsModel,
    pub region: Option<String>,
    pub team_id: i64,
    #[serde(rename = "Team_Name")]
    pub team_name: Option<String>,
    #[serde(rename = "Tier_Conquest")]
    pub tier_conquest: i32,
    #[serde(rename = "Tier_Duel")]
    pub tier_duel: i32,
    #[serde(rename = "Tier_Joust")]
    pub tier_joust: i32,
    #[serde(rename = "Total_Achievements")]
    pub total_achievements: i32,
    #[serde(rename = "Total_Worshippers")]
    pub total_worshippers: i32,
    pub wins: i32,
    #[serde(rename = "hz_gamer_tag")]
    pub hz_gamer_tag: Option<String>,
    #[serde(rename = "hz_player_name")]
    pub hz_player_name: Option<String>,
    #[serde(rename = "ret_msg")]
    pub ret_msg: Option<String>,
}

/// One friend entry, from `getfriends`. All identifiers arrive
/// string-encoded on this endpoint.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct FriendModel {
    #[serde_as(as = "Option<StringFromAny>")]
    pub account_id: Option<String>,
    pub avatar_url: Option<String>,
    pub friend_flags: Option<String>,
    pub name: Option<String>,
    #[serde_as(as = "Option<StringFromAny>")]
    pub player_id: Option<String>,
    #[serde_as(as = "Option<StringFromAny>")]
    pub portal_id: Option<String>,
    pub status: Option<String>,
    pub ret_msg: Option<String>,
}

/// Per-god performance for one player, from `getgodranks`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct GodStatsModel {
    pub assists: i32,
    pub deaths: i32,
    pub kills: i32,
    pub losses: i32,
    pub minion_kills: i32,
    pub rank: i32,
    pub wins: i32,
    pub worshippers: i32,
    #[serde(rename = "god")]
    pub god: Option<String>,
    #[serde(rename = "god_id")]
    pub god_id: i64,
    #[serde(rename = "player_id")]
    pub player_id: i64,
    #[serde(rename = "ret_msg")]
    pub ret_msg: Option<String>,
}

/// Lifetime combat accolades, from `getplayerachievements`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct PlayerAccoladesModel {
    pub assisted_kills: i32,
    pub camps_cleared: i32,
    pub deaths: i32,
    pub divine_spree: i32,
    pub double_kills: i32,
    pub fire_giant_kills: i32,
    pub first_bloods: i32,
    pub god_like_spree: i32,
    pub gold_fury_kills: i32,
    pub id: i64,
    pub immortal_spree: i32,
    pub killing_spree: i32,
    pub minion_kills: i32,
    pub name: Option<String>,
    pub penta_kills: i32,
    pub phoenix_kills: i32,
    pub player_kills: i32,
    pub quadra_kills: i32,
    pub rampage_spree: i32,
    pub shutdown_spree: i32,
    pub siege_juggernaut_kills: i32,
    pub tower_kills: i32,
    pub triple_kills: i32,
    pub unstoppable_spree: i32,
    pub wild_juggernaut_kills: i32,
    pub worshippers: i32,
    #[serde(rename = "ret_msg")]
    pub ret_msg: Option<String>,
}

/// A player's live status, from `getplayerstatus`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct PlayerStatusModel {
    #[serde(rename = "Match")]
    pub match_id: i64,
    pub match_queue_id: i64,
    pub personal_status_message: Option<String>,
    pub status: i32,
    pub status_string: Option<String>,
    pub ret_msg: Option<String>,
}

/// One god's static data, from `getgods`. The ability sub-objects the API
/// also returns are not modeled here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct GodModel {
    pub attack_speed: f64,
    pub health: i32,
    pub lore: Option<String>,
    pub magic_protection: i32,
    pub magical_power: i32,
    pub mana: i32,
    pub name: Option<String>,
    pub on_free_rotation: Option<String>,
    pub pantheon: Option<String>,
    pub physical_power: i32,
    pub physical_protection: i32,
    pub roles: Option<String>,
    pub speed: i32,
    pub title: Option<String>,
    #[serde(rename = "Type")]
    pub god_type: Option<String>,
    #[serde(rename = "godCard_URL")]
    pub god_card_url: Option<String>,
    #[serde(rename = "godIcon_URL")]
    pub god_icon_url: Option<String>,
    #[serde(rename = "latestGod")]
    pub latest_god: Option<String>,
    #[serde(rename = "id")]
    pub id: i64,
    #[serde(rename = "ret_msg")]
    pub ret_msg: Option<String>,
}
