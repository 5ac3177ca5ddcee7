use std::sync::OnceLock;

use url::Url;

use super::parse_url;
use crate::client::SmiteClient;
use crate::types::response::{GodModel, GodStatsModel};

fn flag_set(value: Option<&str>) -> bool {
    value.is_some_and(|flag| flag.eq_ignore_ascii_case("y") || flag.eq_ignore_ascii_case("true"))
}

/// A playable god from [`gods`](SmiteClient::gods).
#[derive(Debug)]
pub struct God {
    client: SmiteClient,
    model: GodModel,
    icon_url: OnceLock<Option<Url>>,
    card_url: OnceLock<Option<Url>>,
}

impl God {
    pub(crate) fn new(client: SmiteClient, model: GodModel) -> Self {
        Self {
            client,
            model,
            icon_url: OnceLock::new(),
            card_url: OnceLock::new(),
        }
    }

    /// The client that produced this entity.
    #[must_use]
    pub fn client(&self) -> &SmiteClient {
        &self.client
    }

    /// The raw model this entity wraps.
    #[must_use]
    pub fn model(&self) -> &GodModel {
        &self.model
    }

    /// The god's id.
    #[must_use]
    pub fn god_id(&self) -> i64 {
        self.model.id
    }

    /// The god's name.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.model.name.as_deref()
    }

    /// The god's title, e.g. `Goddess of Beauty`.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.model.title.as_deref()
    }

    /// The pantheon the god belongs to.
    #[must_use]
    pub fn pantheon(&self) -> Option<&str> {
        self.model.pantheon.as_deref()
    }

    /// The roles the god can fill, comma-separated as the API sends them.
    #[must_use]
    pub fn roles(&self) -> Option<&str> {
        self.model.roles.as_deref()
    }

    /// The god's damage type, `Magical` or `Physical` plus range.
    #[must_use]
    pub fn god_type(&self) -> Option<&str> {
        self.model.god_type.as_deref()
    }

    /// The god's lore text, localized per the request's language.
    #[must_use]
    pub fn lore(&self) -> Option<&str> {
        self.model.lore.as_deref()
    }

    #[must_use]
    pub fn health(&self) -> i32 {
        self.model.health
    }

    #[must_use]
    pub fn mana(&self) -> i32 {
        self.model.mana
    }

    #[must_use]
    pub fn speed(&self) -> i32 {
        self.model.speed
    }

    #[must_use]
    pub fn attack_speed(&self) -> f64 {
        self.model.attack_speed
    }

    #[must_use]
    pub fn physical_power(&self) -> i32 {
        self.model.physical_power
    }

    #[must_use]
    pub fn magical_power(&self) -> i32 {
        self.model.magical_power
    }

    #[must_use]
    pub fn physical_protection(&self) -> i32 {
        self.model.physical_protection
    }

    #[must_use]
    pub fn magic_protection(&self) -> i32 {
        self.model.magic_protection
    }

    /// Whether the god is on the current free rotation.
    #[must_use]
    pub fn is_on_free_rotation(&self) -> bool {
        flag_set(self.model.on_free_rotation.as_deref())
    }

    /// Whether this is the most recently released god.
    #[must_use]
    pub fn is_latest(&self) -> bool {
        flag_set(self.model.latest_god.as_deref())
    }

    /// The god's icon image URL, or `None` when unset.
    #[must_use]
    pub fn icon_url(&self) -> Option<&Url> {
        self.icon_url
            .get_or_init(|| parse_url(self.model.god_icon_url.as_deref()))
            .as_ref()
    }

    /// The god's card-art image URL, or `None` when unset.
    #[must_use]
    pub fn card_url(&self) -> Option<&Url> {
        self.card_url
            .get_or_init(|| parse_url(self.model.god_card_url.as_deref()))
            .as_ref()
    }
}

/// One player's performance with one god, from
/// [`god_ranks`](SmiteClient::god_ranks).
#[derive(Debug)]
pub struct GodStats {
    client: SmiteClient,
    model: GodStatsModel,
}

impl GodStats {
    pub(crate) fn new(client: SmiteClient, model: GodStatsModel) -> Self {
        Self { client, model }
    }

    /// The client that produced this entity.
    #[must_use]
    pub fn client(&self) -> &SmiteClient {
        &self.client
    }

    /// The raw model this entity wraps.
    #[must_use]
    pub fn model(&self) -> &GodStatsModel {
        &self.model
    }

    /// The god's id.
    #[must_use]
    pub fn god_id(&self) -> i64 {
        self.model.god_id
    }

    /// The god's name.
    #[must_use]
    pub fn god_name(&self) -> Option<&str> {
        self.model.god.as_deref()
    }

    /// The player's id.
    #[must_use]
    pub fn player_id(&self) -> i64 {
        self.model.player_id
    }

    #[must_use]
    pub fn kills(&self) -> i32 {
        self.model.kills
    }

    #[must_use]
    pub fn deaths(&self) -> i32 {
        self.model.deaths
    }

    #[must_use]
    pub fn assists(&self) -> i32 {
        self.model.assists
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
    pub fn minion_kills(&self) -> i32 {
        self.model.minion_kills
    }

    /// The mastery level with this god.
    #[must_use]
    pub fn mastery_level(&self) -> i32 {
        self.model.rank
    }

    /// The number of worshippers earned with this god.
    #[must_use]
    pub fn worshippers(&self) -> i32 {
        self.model.worshippers
    }
}
