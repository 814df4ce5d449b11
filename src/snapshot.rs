use serde::{Deserialize, Serialize};

use crate::error::SnapshotError;
use crate::types::{PriceChange, PriceTrend};
use crate::wire::WireItem;

/// Point-in-time market data for one Grand Exchange item.
///
/// Only obtainable through [`ItemSnapshot::builder`] (or by deserializing
/// catalogue JSON, which goes through the same builder), so every instance
/// has a non-negative id and both required price trends.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "WireItem", into = "WireItem")]
pub struct ItemSnapshot {
    id: u32,
    name: String,
    description: String,
    item_type: String,
    type_icon: String,
    icon: String,
    icon_large: String,
    members_only: bool,
    current_price: PriceTrend,
    todays_price: PriceTrend,
    day30: Option<PriceChange>,
    day90: Option<PriceChange>,
    day180: Option<PriceChange>,
}

impl ItemSnapshot {
    pub fn builder(id: i64) -> SnapshotBuilder {
        SnapshotBuilder::new(id)
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Catalogue category, e.g. "Melee weapons - high level".
    pub fn item_type(&self) -> &str {
        &self.item_type
    }

    /// URL of the category icon.
    pub fn type_icon(&self) -> &str {
        &self.type_icon
    }

    /// URL of the inventory sprite.
    pub fn icon(&self) -> &str {
        &self.icon
    }

    /// URL of the large sprite.
    pub fn icon_large(&self) -> &str {
        &self.icon_large
    }

    pub fn is_members_only(&self) -> bool {
        self.members_only
    }

    pub fn current_price(&self) -> &PriceTrend {
        &self.current_price
    }

    pub fn todays_price(&self) -> &PriceTrend {
        &self.todays_price
    }

    /// Change over the last 30 days. `None` means the catalogue did not
    /// report this window, not that the price stayed flat.
    pub fn day30(&self) -> Option<&PriceChange> {
        self.day30.as_ref()
    }

    pub fn day90(&self) -> Option<&PriceChange> {
        self.day90.as_ref()
    }

    pub fn day180(&self) -> Option<&PriceChange> {
        self.day180.as_ref()
    }
}

impl std::fmt::Display for ItemSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (#{}): {} {}",
            self.name,
            self.id,
            self.current_price.price(),
            self.current_price.trend()
        )
    }
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Accumulates fields for one [`ItemSnapshot`].
///
/// Setters overwrite earlier values. Nothing is validated until
/// [`build`](SnapshotBuilder::build), which borrows the builder so it can be
/// reused after either outcome.
#[derive(Debug, Clone)]
pub struct SnapshotBuilder {
    id: i64,
    icon: String,
    icon_large: String,
    item_type: String,
    type_icon: String,
    name: String,
    description: String,
    current_price: Option<PriceTrend>,
    todays_price: Option<PriceTrend>,
    members_only: bool,
    day30: Option<PriceChange>,
    day90: Option<PriceChange>,
    day180: Option<PriceChange>,
}

impl SnapshotBuilder {
    fn new(id: i64) -> Self {
        Self {
            id,
            icon: String::new(),
            icon_large: String::new(),
            item_type: String::new(),
            type_icon: String::new(),
            name: String::new(),
            description: String::new(),
            current_price: None,
            todays_price: None,
            members_only: false,
            day30: None,
            day90: None,
            day180: None,
        }
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    pub fn large_icon(mut self, icon_large: impl Into<String>) -> Self {
        self.icon_large = icon_large.into();
        self
    }

    pub fn item_type(mut self, item_type: impl Into<String>) -> Self {
        self.item_type = item_type.into();
        self
    }

    pub fn type_icon(mut self, type_icon: impl Into<String>) -> Self {
        self.type_icon = type_icon.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Required; checked by `build()`.
    pub fn current_price(mut self, current: PriceTrend) -> Self {
        self.current_price = Some(current);
        self
    }

    /// Required; checked by `build()`.
    pub fn todays_price(mut self, today: PriceTrend) -> Self {
        self.todays_price = Some(today);
        self
    }

    /// Marks the item as members-only. There is no way back to `false`.
    pub fn members_only(mut self) -> Self {
        self.members_only = true;
        self
    }

    pub fn price_change_30_days(mut self, change: PriceChange) -> Self {
        self.day30 = Some(change);
        self
    }

    pub fn price_change_90_days(mut self, change: PriceChange) -> Self {
        self.day90 = Some(change);
        self
    }

    pub fn price_change_180_days(mut self, change: PriceChange) -> Self {
        self.day180 = Some(change);
        self
    }

    /// Validates the id and the required price trends, in that order.
    pub fn build(&self) -> Result<ItemSnapshot, SnapshotError> {
        if self.id < 0 {
            return Err(SnapshotError::NegativeId(self.id));
        }
        let id = u32::try_from(self.id).map_err(|_| SnapshotError::IdOutOfRange(self.id))?;
        let current_price = self
            .current_price
            .ok_or(SnapshotError::MissingField("currentPrice"))?;
        let todays_price = self
            .todays_price
            .ok_or(SnapshotError::MissingField("todaysPrice"))?;

        Ok(ItemSnapshot {
            id,
            name: self.name.clone(),
            description: self.description.clone(),
            item_type: self.item_type.clone(),
            type_icon: self.type_icon.clone(),
            icon: self.icon.clone(),
            icon_large: self.icon_large.clone(),
            members_only: self.members_only,
            current_price,
            todays_price,
            day30: self.day30,
            day90: self.day90,
            day180: self.day180,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
