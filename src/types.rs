use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::SnapshotError;
use crate::wire::price_text;

// ---------------------------------------------------------------------------
// Trend
// ---------------------------------------------------------------------------

/// Direction the catalogue reports for a price or a price change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trend {
    #[serde(rename = "positive", alias = "rising")]
    Rising,
    #[serde(rename = "negative", alias = "falling")]
    Falling,
    #[serde(rename = "neutral")]
    Neutral,
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Trend::Rising => "positive",
            Trend::Falling => "negative",
            Trend::Neutral => "neutral",
        };
        write!(f, "{s}")
    }
}

// ---------------------------------------------------------------------------
// PriceTrend
// ---------------------------------------------------------------------------

/// A traded price at a point in time, with the trend leading up to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PriceTrend {
    trend: Trend,
    /// Absolute price in coins. The catalogue sends abbreviated text
    /// ("71.7k"), which is expanded on the way in.
    #[serde(deserialize_with = "price_text::deserialize_price")]
    price: i64,
}

impl PriceTrend {
    pub fn new(trend: Trend, price: i64) -> Self {
        Self { trend, price }
    }

    pub fn builder() -> PriceTrendBuilder {
        PriceTrendBuilder::default()
    }

    pub fn trend(&self) -> Trend {
        self.trend
    }

    pub fn price(&self) -> i64 {
        self.price
    }
}

#[derive(Debug, Clone, Default)]
pub struct PriceTrendBuilder {
    trend: Option<Trend>,
    price: Option<i64>,
}

impl PriceTrendBuilder {
    pub fn trend(mut self, trend: Trend) -> Self {
        self.trend = Some(trend);
        self
    }

    pub fn price(mut self, price: i64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn build(&self) -> Result<PriceTrend, SnapshotError> {
        let trend = self.trend.ok_or(SnapshotError::MissingField("trend"))?;
        let price = self.price.ok_or(SnapshotError::MissingField("price"))?;
        Ok(PriceTrend::new(trend, price))
    }
}

// ---------------------------------------------------------------------------
// PriceChange
// ---------------------------------------------------------------------------

/// Price movement over one historical window (30, 90 or 180 days).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PriceChange {
    trend: Trend,
    /// Signed percentage, e.g. `-5.0` for "-5.0%".
    #[serde(
        serialize_with = "price_text::serialize_change",
        deserialize_with = "price_text::deserialize_change"
    )]
    change: Decimal,
}

impl PriceChange {
    pub fn new(trend: Trend, change: Decimal) -> Self {
        Self { trend, change }
    }

    pub fn builder() -> PriceChangeBuilder {
        PriceChangeBuilder::default()
    }

    pub fn trend(&self) -> Trend {
        self.trend
    }

    pub fn change(&self) -> Decimal {
        self.change
    }
}

#[derive(Debug, Clone, Default)]
pub struct PriceChangeBuilder {
    trend: Option<Trend>,
    change: Option<Decimal>,
}

impl PriceChangeBuilder {
    pub fn trend(mut self, trend: Trend) -> Self {
        self.trend = Some(trend);
        self
    }

    pub fn change(mut self, change: Decimal) -> Self {
        self.change = Some(change);
        self
    }

    pub fn build(&self) -> Result<PriceChange, SnapshotError> {
        let trend = self.trend.ok_or(SnapshotError::MissingField("trend"))?;
        let change = self.change.ok_or(SnapshotError::MissingField("change"))?;
        Ok(PriceChange::new(trend, change))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    use super::*;
    use crate::wire::price_text::parse_change;
    use rust_decimal_macros::dec;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn trend_uses_catalogue_words() {
        let t: Trend = serde_json::from_str(r#""positive""#).unwrap();
        assert_eq!(t, Trend::Rising);
        let t: Trend = serde_json::from_str(r#""falling""#).unwrap();
        assert_eq!(t, Trend::Falling);
        assert_eq!(serde_json::to_string(&Trend::Neutral).unwrap(), r#""neutral""#);
        assert_eq!(Trend::Falling.to_string(), "negative");
    }

    #[test]
    fn price_trend_builder_requires_both_fields() {
        assert_eq!(
            PriceTrend::builder().price(10).build(),
            Err(SnapshotError::MissingField("trend"))
        );
        assert_eq!(
            PriceTrend::builder().trend(Trend::Rising).build(),
            Err(SnapshotError::MissingField("price"))
        );

        let built = PriceTrend::builder().trend(Trend::Rising).price(10).build().unwrap();
        assert_eq!(built, PriceTrend::new(Trend::Rising, 10));
    }

    #[test]
    fn price_change_builder_requires_both_fields() {
        assert_eq!(
            PriceChange::builder().change(dec!(1.5)).build(),
            Err(SnapshotError::MissingField("trend"))
        );
        assert_eq!(
            PriceChange::builder().trend(Trend::Neutral).build(),
            Err(SnapshotError::MissingField("change"))
        );
    }

    #[test]
    fn price_trend_parses_abbreviated_price() {
        let raw = r#"{"trend":"neutral","price":"71.7k"}"#;
        let parsed: PriceTrend = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed, PriceTrend::new(Trend::Neutral, 71_700));
    }

    #[test]
    fn price_change_keeps_sign_and_scale_insensitive_equality() {
        let raw = r#"{"trend":"negative","change":"-5.0%"}"#;
        let parsed: PriceChange = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.trend(), Trend::Falling);
        assert_eq!(parsed, PriceChange::new(Trend::Falling, dec!(-5)));
        assert_eq!(
            serde_json::to_string(&parsed).unwrap(),
            r#"{"trend":"negative","change":"-5.0%"}"#
        );
    }

    #[test]
    fn equal_changes_hash_equal_across_scale() {
        let a = PriceChange::new(Trend::Falling, dec!(-5.0));
        let b = PriceChange::new(Trend::Falling, dec!(-5));
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn negative_zero_change_hashes_as_zero() {
        let neg_zero = parse_change("-0.0%").unwrap();
        assert_eq!(neg_zero, dec!(0));
        assert_eq!(hash_of(&neg_zero), hash_of(&dec!(0)));

        let a = PriceChange::new(Trend::Neutral, neg_zero);
        let b = PriceChange::new(Trend::Neutral, dec!(0));
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn zero_change_is_a_value() {
        let raw = r#"{"trend":"neutral","change":"0.0%"}"#;
        let parsed: PriceChange = serde_json::from_str(raw).unwrap();
        assert!(parsed.change().is_zero());
    }
}
