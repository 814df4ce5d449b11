//! JSON layout of the Grand Exchange catalogue.
//!
//! `WireItem` mirrors the `item` object of `catalogue/detail.json` key for
//! key. [`ItemSnapshot`] (de)serializes through it, so wire input always
//! passes the snapshot builder's checks.

pub mod price_text;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::SnapshotError;
use crate::snapshot::ItemSnapshot;
use crate::types::{PriceChange, PriceTrend};

/// Envelope returned by `catalogue/detail.json?item=<id>`.
#[derive(Debug, Clone, Deserialize)]
pub struct DetailResponse {
    pub item: WireItem,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireItem {
    pub id: i64,
    #[serde(default)]
    pub icon: String,
    /// The live catalogue spells this `icon_large`; both are accepted.
    #[serde(rename = "icon_Large", alias = "icon_large", default)]
    pub icon_large: String,
    #[serde(rename = "type", default)]
    pub item_type: String,
    #[serde(rename = "typeIcon", default)]
    pub type_icon: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Left optional here so a missing trend reaches the builder and is
    /// reported as a missing field rather than a generic parse error.
    pub current: Option<PriceTrend>,
    pub today: Option<PriceTrend>,
    #[serde(default, deserialize_with = "deserialize_members")]
    pub members: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day30: Option<PriceChange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day90: Option<PriceChange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day180: Option<PriceChange>,
}

impl TryFrom<WireItem> for ItemSnapshot {
    type Error = SnapshotError;

    fn try_from(wire: WireItem) -> Result<Self, Self::Error> {
        let mut builder = ItemSnapshot::builder(wire.id)
            .icon(wire.icon)
            .large_icon(wire.icon_large)
            .item_type(wire.item_type)
            .type_icon(wire.type_icon)
            .name(wire.name)
            .description(wire.description);

        if let Some(current) = wire.current {
            builder = builder.current_price(current);
        }
        if let Some(today) = wire.today {
            builder = builder.todays_price(today);
        }
        if wire.members {
            builder = builder.members_only();
        }
        if let Some(change) = wire.day30 {
            builder = builder.price_change_30_days(change);
        }
        if let Some(change) = wire.day90 {
            builder = builder.price_change_90_days(change);
        }
        if let Some(change) = wire.day180 {
            builder = builder.price_change_180_days(change);
        }

        builder.build()
    }
}

impl From<ItemSnapshot> for WireItem {
    fn from(snapshot: ItemSnapshot) -> Self {
        Self {
            id: i64::from(snapshot.id()),
            icon: snapshot.icon().to_string(),
            icon_large: snapshot.icon_large().to_string(),
            item_type: snapshot.item_type().to_string(),
            type_icon: snapshot.type_icon().to_string(),
            name: snapshot.name().to_string(),
            description: snapshot.description().to_string(),
            current: Some(*snapshot.current_price()),
            today: Some(*snapshot.todays_price()),
            members: snapshot.is_members_only(),
            day30: snapshot.day30().copied(),
            day90: snapshot.day90().copied(),
            day180: snapshot.day180().copied(),
        }
    }
}

/// The catalogue sends `"members": "true"`; accept that as well as a bool.
fn deserialize_members<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawFlag {
        Bool(bool),
        Text(String),
    }

    match RawFlag::deserialize(deserializer)? {
        RawFlag::Bool(b) => Ok(b),
        RawFlag::Text(s) if s.eq_ignore_ascii_case("true") => Ok(true),
        RawFlag::Text(s) if s.eq_ignore_ascii_case("false") => Ok(false),
        RawFlag::Text(s) => Err(serde::de::Error::custom(format!("invalid members flag {s:?}"))),
    }
}
