use std::fmt;
use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use url::Url;

use super::parse_url;
use crate::client::SmiteClient;
use crate::serde_helpers::parse_datetime;
use crate::types::response::{
    FriendModel, MergedPlayerModel, PlayerAccoladesModel, PlayerIdByNameModel, PlayerModel,
    PlayerStatusModel, RankedStatsModel,
};
use crate::types::{PlayerStatus, Portal, Rank};

/// A full player profile returned by
/// [`players_by_name`](SmiteClient::players_by_name).
#[derive(Debug)]
pub struct Player {
    client: SmiteClient,
    model: PlayerModel,
    avatar_url: OnceLock<Option<Url>>,
    created_at: OnceLock<Option<DateTime<Utc>>>,
    last_login: OnceLock<Option<DateTime<Utc>>>,
    merged_players: OnceLock<Vec<MergedPlayer>>,
    ranked_conquest: OnceLock<PlayerRankedStats>,
    ranked_conquest_controller: OnceLock<PlayerRankedStats>,
    ranked_duel: OnceLock<PlayerRankedStats>,
    ranked_duel_controller: OnceLock<PlayerRankedStats>,
    ranked_joust: OnceLock<PlayerRankedStats>,
    ranked_joust_controller: OnceLock<PlayerRankedStats>,
}

impl Player {
    pub(crate) fn new(client: SmiteClient, model: PlayerModel) -> Self {
        Self {
            client,
            model,
            avatar_url: OnceLock::new(),
            created_at: OnceLock::new(),
            last_login: OnceLock::new(),
            merged_players: OnceLock::new(),
            ranked_conquest: OnceLock::new(),
            ranked_conquest_controller: OnceLock::new(),
            ranked_duel: OnceLock::new(),
            ranked_duel_controller: OnceLock::new(),
            ranked_joust: OnceLock::new(),
            ranked_joust_controller: OnceLock::new(),
        }
    }

    /// The client that produced this entity.
    #[must_use]
    pub fn client(&self) -> &SmiteClient {
        &self.client
    }

    /// The raw model this entity wraps.
    #[must_use]
    pub fn model(&self) -> &PlayerModel {
        &self.model
    }

    /// The player's name.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.model.name.as_deref()
    }

    /// The player's status message.
    #[must_use]
    pub fn status_message(&self) -> Option<&str> {
        self.model.personal_status_message.as_deref()
    }

    /// The player's region.
    #[must_use]
    pub fn region(&self) -> Option<&str> {
        self.model.region.as_deref()
    }

    /// The name of the player's clan.
    #[must_use]
    pub fn clan_name(&self) -> Option<&str> {
        self.model.team_name.as_deref()
    }

    /// The player's Hi-Rez gamertag.
    #[must_use]
    pub fn hirez_gamertag(&self) -> Option<&str> {
        self.model.hz_gamer_tag.as_deref()
    }

    /// The player's Hi-Rez name.
    #[must_use]
    pub fn hirez_player_name(&self) -> Option<&str> {
        self.model.hz_player_name.as_deref()
    }

    /// The player's active account id.
    #[must_use]
    pub fn active_player_id(&self) -> i64 {
        self.model.active_player_id
    }

    /// The player's id.
    #[must_use]
    pub fn player_id(&self) -> i64 {
        self.model.id
    }

    /// The number of games this player has left early.
    #[must_use]
    pub fn leaves(&self) -> i32 {
        self.model.leaves
    }

    /// The player's account level.
    #[must_use]
    pub fn level(&self) -> i32 {
        self.model.level
    }

    #[must_use]
    pub fn losses(&self) -> i32 {
        self.model.losses
    }

    #[must_use]
    pub fn wins(&self) -> i32 {
        self.model.wins
    }

    /// The player's overall mastery level.
    #[must_use]
    pub fn mastery_level(&self) -> i32 {
        self.model.mastery_level
    }

    /// The id of the player's clan.
    #[must_use]
    pub fn clan_id(&self) -> i64 {
        self.model.team_id
    }

    /// The number of achievements this player has unlocked.
    #[must_use]
    pub fn achievement_count(&self) -> i32 {
        self.model.total_achievements
    }

    /// The total number of worshippers across all gods.
    #[must_use]
    pub fn total_worshippers(&self) -> i32 {
        self.model.total_worshippers
    }

    /// Total hours played.
    #[must_use]
    pub fn hours_played(&self) -> i32 {
        self.model.hours_played
    }

    /// Ranked conquest MMR.
    #[must_use]
    pub fn ranked_conquest_mmr(&self) -> f64 {
        self.model.rank_stat_conquest
    }

    /// Ranked conquest MMR on controller.
    #[must_use]
    pub fn console_ranked_conquest_mmr(&self) -> f64 {
        self.model.rank_stat_conquest_controller
    }

    /// Duel MMR.
    #[must_use]
    pub fn duel_mmr(&self) -> f64 {
        self.model.rank_stat_duel
    }

    /// Duel MMR on controller.
    #[must_use]
    pub fn console_duel_mmr(&self) -> f64 {
        self.model.rank_stat_duel_controller
    }

    /// Ranked joust MMR.
    #[must_use]
    pub fn ranked_joust_mmr(&self) -> f64 {
        self.model.rank_stat_joust
    }

    /// Ranked joust MMR on controller.
    #[must_use]
    pub fn console_ranked_joust_mmr(&self) -> f64 {
        self.model.rank_stat_joust_controller
    }

    /// The player's conquest tier.
    #[must_use]
    pub fn conquest_rank(&self) -> Rank {
        Rank::from_code(i64::from(self.model.tier_conquest))
    }

    /// The player's duel tier.
    #[must_use]
    pub fn duel_rank(&self) -> Rank {
        Rank::from_code(i64::from(self.model.tier_duel))
    }

    /// The player's joust tier.
    #[must_use]
    pub fn joust_rank(&self) -> Rank {
        Rank::from_code(i64::from(self.model.tier_joust))
    }

    /// The player's avatar URL, or `None` when the profile has no avatar.
    #[must_use]
    pub fn avatar_url(&self) -> Option<&Url> {
        self.avatar_url
            .get_or_init(|| parse_url(self.model.avatar_url.as_deref()))
            .as_ref()
    }

    /// When this account was created.
    #[must_use]
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        *self.created_at.get_or_init(|| {
            self.model
                .created_datetime
                .as_deref()
                .and_then(parse_datetime)
        })
    }

    /// When the player last logged in.
    #[must_use]
    pub fn last_login(&self) -> Option<DateTime<Utc>> {
        *self.last_login.get_or_init(|| {
            self.model
                .last_login_datetime
                .as_deref()
                .and_then(parse_datetime)
        })
    }

    /// Accounts that were merged into this one.
    #[must_use]
    pub fn merged_players(&self) -> &[MergedPlayer] {
        self.merged_players.get_or_init(|| {
            self.model
                .merged_players
                .iter()
                .flatten()
                .cloned()
                .map(MergedPlayer::new)
                .collect()
        })
    }

    /// The player's ranked conquest stats.
    #[must_use]
    pub fn ranked_conquest(&self) -> &PlayerRankedStats {
        self.ranked_conquest.get_or_init(|| {
            PlayerRankedStats::new(self.client.clone(), self.model.ranked_conquest.clone())
        })
    }

    /// The player's ranked conquest stats on controller.
    #[must_use]
    pub fn console_ranked_conquest(&self) -> &PlayerRankedStats {
        self.ranked_conquest_controller.get_or_init(|| {
            PlayerRankedStats::new(
                self.client.clone(),
                self.model.ranked_conquest_controller.clone(),
            )
        })
    }

    /// The player's duel stats.
    #[must_use]
    pub fn ranked_duel(&self) -> &PlayerRankedStats {
        self.ranked_duel.get_or_init(|| {
            PlayerRankedStats::new(self.client.clone(), self.model.ranked_duel.clone())
        })
    }

    /// The player's duel stats on controller.
    #[must_use]
    pub fn console_ranked_duel(&self) -> &PlayerRankedStats {
        self.ranked_duel_controller.get_or_init(|| {
            PlayerRankedStats::new(
                self.client.clone(),
                self.model.ranked_duel_controller.clone(),
            )
        })
    }

    /// The player's ranked joust stats.
    #[must_use]
    pub fn ranked_joust(&self) -> &PlayerRankedStats {
        self.ranked_joust.get_or_init(|| {
            PlayerRankedStats::new(self.client.clone(), self.model.ranked_joust.clone())
        })
    }

    /// The player's ranked joust stats on controller.
    #[must_use]
    pub fn console_ranked_joust(&self) -> &PlayerRankedStats {
        self.ranked_joust_controller.get_or_init(|| {
            PlayerRankedStats::new(
                self.client.clone(),
                self.model.ranked_joust_controller.clone(),
            )
        })
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self
            .hirez_gamertag()
            .or_else(|| self.hirez_player_name())
            .or_else(|| self.name())
            .unwrap_or_default();
        write!(f, "{name}")
    }
}

/// Per-queue ranked statistics, embedded in a [`Player`] profile.
#[derive(Debug)]
pub struct PlayerRankedStats {
    client: SmiteClient,
    model: RankedStatsModel,
}

impl PlayerRankedStats {
    pub(crate) fn new(client: SmiteClient, model: RankedStatsModel) -> Self {
        Self { client, model }
    }

    /// The client that produced this entity.
    #[must_use]
    pub fn client(&self) -> &SmiteClient {
        &self.client
    }

    /// The raw model this entity wraps.
    #[must_use]
    pub fn model(&self) -> &RankedStatsModel {
        &self.model
    }

    /// The queue this entry is for, e.g. `Conquest`.
    #[must_use]
    pub fn queue_name(&self) -> Option<&str> {
        self.model.name.as_deref()
    }

    #[must_use]
    pub fn wins(&self) -> i32 {
        self.model.wins
    }

    #[must_use]
    pub fn losses(&self) -> i32 {
        self.model.losses
    }

    #[must_use]
    pub fn leaves(&self) -> i32 {
        self.model.leaves
    }

    /// League points within the current tier.
    #[must_use]
    pub fn points(&self) -> i32 {
        self.model.points
    }

    /// The ranked season this entry covers.
    #[must_use]
    pub fn season(&self) -> i32 {
        self.model.season
    }

    /// Whether the player is trending up or down the ladder.
    #[must_use]
    pub fn trend(&self) -> i32 {
        self.model.trend
    }

    /// The current tier.
    #[must_use]
    pub fn tier(&self) -> Rank {
        Rank::from_code(i64::from(self.model.tier))
    }

    /// The tier held before the last update.
    #[must_use]
    pub fn previous_tier(&self) -> Rank {
        Rank::from_code(i64::from(self.model.prev_rank))
    }
}

/// An account that was merged into a [`Player`].
#[derive(Debug)]
pub struct MergedPlayer {
    model: MergedPlayerModel,
    merged_at: OnceLock<Option<DateTime<Utc>>>,
}

impl MergedPlayer {
    pub(crate) fn new(model: MergedPlayerModel) -> Self {
        Self {
            model,
            merged_at: OnceLock::new(),
        }
    }

    /// The raw model this entity wraps.
    #[must_use]
    pub fn model(&self) -> &MergedPlayerModel {
        &self.model
    }

    /// The id the merged account had.
    #[must_use]
    pub fn player_id(&self) -> Option<&str> {
        self.model.player_id.as_deref()
    }

    /// The portal the merged account came from.
    #[must_use]
    pub fn portal(&self) -> Portal {
        portal_from_field(self.model.portal_id.as_deref())
    }

    /// When the merge happened.
    #[must_use]
    pub fn merged_at(&self) -> Option<DateTime<Utc>> {
        *self.merged_at.get_or_init(|| {
            self.model
                .merge_datetime
                .as_deref()
                .and_then(parse_datetime)
        })
    }
}

/// One hit from a player-id search
/// ([`player_ids_by_name`](SmiteClient::player_ids_by_name) and friends).
#[derive(Debug)]
pub struct PlayerNameSearchResult {
    client: SmiteClient,
    model: PlayerIdByNameModel,
}

impl PlayerNameSearchResult {
    pub(crate) fn new(client: SmiteClient, model: PlayerIdByNameModel) -> Self {
        Self { client, model }
    }

    /// The client that produced this entity.
    #[must_use]
    pub fn client(&self) -> &SmiteClient {
        &self.client
    }

    /// The raw model this entity wraps.
    #[must_use]
    pub fn model(&self) -> &PlayerIdByNameModel {
        &self.model
    }

    /// The matched player's id.
    #[must_use]
    pub fn player_id(&self) -> i64 {
        self.model.player_id
    }

    /// The portal name as reported by the API, e.g. `Steam`.
    #[must_use]
    pub fn portal_name(&self) -> Option<&str> {
        self.model.portal.as_deref()
    }

    /// The portal this account lives on.
    #[must_use]
    pub fn portal(&self) -> Portal {
        portal_from_field(self.model.portal_id.as_deref())
    }

    /// Whether the matched profile is hidden.
    #[must_use]
    pub fn is_private(&self) -> bool {
        self.model
            .privacy_flag
            .as_deref()
            .is_some_and(|flag| flag.eq_ignore_ascii_case("y"))
    }
}

/// A friend entry from [`friends`](SmiteClient::friends).
#[derive(Debug)]
pub struct Friend {
    client: SmiteClient,
    model: FriendModel,
    avatar_url: OnceLock<Option<Url>>,
}

impl Friend {
    pub(crate) fn new(client: SmiteClient, model: FriendModel) -> Self {
        Self {
            client,
            model,
            avatar_url: OnceLock::new(),
        }
    }

    /// The client that produced this entity.
    #[must_use]
    pub fn client(&self) -> &SmiteClient {
        &self.client
    }

    /// The raw model this entity wraps.
    #[must_use]
    pub fn model(&self) -> &FriendModel {
        &self.model
    }

    /// The friend's name.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.model.name.as_deref()
    }

    /// The friend's player id. The API string-encodes this field.
    #[must_use]
    pub fn player_id(&self) -> Option<i64> {
        self.model.player_id.as_deref()?.parse().ok()
    }

    /// The friend's account id. The API string-encodes this field.
    #[must_use]
    pub fn account_id(&self) -> Option<i64> {
        self.model.account_id.as_deref()?.parse().ok()
    }

    /// The portal the friend plays on.
    #[must_use]
    pub fn portal(&self) -> Portal {
        portal_from_field(self.model.portal_id.as_deref())
    }

    /// The relationship status, e.g. `Friend` or `Blocked`.
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.model.status.as_deref()
    }

    /// The friend's avatar URL, or `None` when unset.
    #[must_use]
    pub fn avatar_url(&self) -> Option<&Url> {
        self.avatar_url
            .get_or_init(|| parse_url(self.model.avatar_url.as_deref()))
            .as_ref()
    }
}

/// Lifetime combat accolades from
/// [`player_accolades`](SmiteClient::player_accolades).
#[derive(Debug)]
pub struct PlayerAccolades {
    client: SmiteClient,
    model: PlayerAccoladesModel,
}

impl PlayerAccolades {
    pub(crate) fn new(client: SmiteClient, model: PlayerAccoladesModel) -> Self {
        Self { client, model }
    }

    /// The client that produced this entity.
    #[must_use]
    pub fn client(&self) -> &SmiteClient {
        &self.client
    }

    /// The raw model this entity wraps.
    #[must_use]
    pub fn model(&self) -> &PlayerAccoladesModel {
        &self.model
    }

    /// The player's id.
    #[must_use]
    pub fn player_id(&self) -> i64 {
        self.model.id
    }

    /// The player's name.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.model.name.as_deref()
    }

    #[must_use]
    pub fn player_kills(&self) -> i32 {
        self.model.player_kills
    }

    #[must_use]
    pub fn assisted_kills(&self) -> i32 {
        self.model.assisted_kills
    }

    #[must_use]
    pub fn deaths(&self) -> i32 {
        self.model.deaths
    }

    #[must_use]
    pub fn minion_kills(&self) -> i32 {
        self.model.minion_kills
    }

    #[must_use]
    pub fn camps_cleared(&self) -> i32 {
        self.model.camps_cleared
    }

    #[must_use]
    pub fn first_bloods(&self) -> i32 {
        self.model.first_bloods
    }

    #[must_use]
    pub fn double_kills(&self) -> i32 {
        self.model.double_kills
    }

    #[must_use]
    pub fn triple_kills(&self) -> i32 {
        self.model.triple_kills
    }

    #[must_use]
    pub fn quadra_kills(&self) -> i32 {
        self.model.quadra_kills
    }

    #[must_use]
    pub fn penta_kills(&self) -> i32 {
        self.model.penta_kills
    }

    #[must_use]
    pub fn killing_sprees(&self) -> i32 {
        self.model.killing_spree
    }

    #[must_use]
    pub fn rampage_sprees(&self) -> i32 {
        self.model.rampage_spree
    }

    #[must_use]
    pub fn unstoppable_sprees(&self) -> i32 {
        self.model.unstoppable_spree
    }

    #[must_use]
    pub fn divine_sprees(&self) -> i32 {
        self.model.divine_spree
    }

    #[must_use]
    pub fn immortal_sprees(&self) -> i32 {
        self.model.immortal_spree
    }

    #[must_use]
    pub fn god_like_sprees(&self) -> i32 {
        self.model.god_like_spree
    }

    #[must_use]
    pub fn shutdown_sprees(&self) -> i32 {
        self.model.shutdown_spree
    }

    #[must_use]
    pub fn tower_kills(&self) -> i32 {
        self.model.tower_kills
    }

    #[must_use]
    pub fn phoenix_kills(&self) -> i32 {
        self.model.phoenix_kills
    }

    #[must_use]
    pub fn fire_giant_kills(&self) -> i32 {
        self.model.fire_giant_kills
    }

    #[must_use]
    pub fn gold_fury_kills(&self) -> i32 {
        self.model.gold_fury_kills
    }

    #[must_use]
    pub fn siege_juggernaut_kills(&self) -> i32 {
        self.model.siege_juggernaut_kills
    }

    #[must_use]
    pub fn wild_juggernaut_kills(&self) -> i32 {
        self.model.wild_juggernaut_kills
    }

    #[must_use]
    pub fn worshippers(&self) -> i32 {
        self.model.worshippers
    }
}

/// A player's live status from [`player_status`](SmiteClient::player_status).
#[derive(Debug)]
pub struct PlayerCurrentStatus {
    client: SmiteClient,
    model: PlayerStatusModel,
}

impl PlayerCurrentStatus {
    pub(crate) fn new(client: SmiteClient, model: PlayerStatusModel) -> Self {
        Self { client, model }
    }

    /// The client that produced this entity.
    #[must_use]
    pub fn client(&self) -> &SmiteClient {
        &self.client
    }

    /// The raw model this entity wraps.
    #[must_use]
    pub fn model(&self) -> &PlayerStatusModel {
        &self.model
    }

    /// What the player is doing right now.
    #[must_use]
    pub fn status(&self) -> PlayerStatus {
        PlayerStatus::from_code(i64::from(self.model.status))
    }

    /// The human-readable status as reported by the API.
    #[must_use]
    pub fn status_text(&self) -> Option<&str> {
        self.model.status_string.as_deref()
    }

    /// The player's status message.
    #[must_use]
    pub fn status_message(&self) -> Option<&str> {
        self.model.personal_status_message.as_deref()
    }

    /// The match the player is in, or `None` when not in a match. The API
    /// reports zero for "no match".
    #[must_use]
    pub fn match_id(&self) -> Option<i64> {
        (self.model.match_id != 0).then_some(self.model.match_id)
    }

    /// The queue of the current match, or `None` when not in a match.
    #[must_use]
    pub fn match_queue_id(&self) -> Option<i64> {
        (self.model.match_queue_id != 0).then_some(self.model.match_queue_id)
    }
}

fn portal_from_field(portal_id: Option<&str>) -> Portal {
    portal_id
        .and_then(|raw| raw.trim().parse::<i64>().ok())
        .map_or(Portal::Unknown, Portal::from_code)
}
