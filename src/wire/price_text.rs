use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serializer};

/// Prices and changes arrive either as JSON numbers or as display text.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Int(i64),
    Float(f64),
    Text(String),
}

/// Splits a leading `+`/`-` (optionally followed by a space, as in "- 120").
fn split_sign(s: &str) -> (bool, &str) {
    if let Some(rest) = s.strip_prefix('-') {
        (true, rest.trim_start())
    } else if let Some(rest) = s.strip_prefix('+') {
        (false, rest.trim_start())
    } else {
        (false, s)
    }
}

/// Parses catalogue price text such as "71.7k", "1.2m", "1,234" or "- 120".
/// Commas are only accepted as thousands separators in the whole part.
/// Fractions left after applying the suffix are truncated.
pub fn parse_price(raw: &str) -> Option<i64> {
    let (negative, s) = split_sign(raw.trim());

    let (digits, multiplier) = match s.chars().last()?.to_ascii_lowercase() {
        'k' => (&s[..s.len() - 1], 1_000i64),
        'm' => (&s[..s.len() - 1], 1_000_000),
        'b' => (&s[..s.len() - 1], 1_000_000_000),
        _ => (s, 1),
    };

    let digits = strip_grouping(digits.trim())?;
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return None;
    }

    let value = Decimal::from_str(&digits)
        .ok()?
        .checked_mul(Decimal::from(multiplier))?
        .trunc()
        .to_i64()?;

    Some(if negative { -value } else { value })
}

/// Removes `,` thousands separators, rejecting misplaced ones ("1,2,3", "12,34").
fn strip_grouping(s: &str) -> Option<String> {
    if !s.contains(',') {
        return Some(s.to_string());
    }

    let (whole, fraction) = match s.split_once('.') {
        Some((w, f)) => (w, Some(f)),
        None => (s, None),
    };
    if fraction.is_some_and(|f| f.contains(',')) {
        return None;
    }

    let mut groups = whole.split(',');
    let lead = groups.next()?;
    if lead.is_empty() || lead.len() > 3 {
        return None;
    }
    let mut out = lead.to_string();
    for group in groups {
        if group.len() != 3 {
            return None;
        }
        out.push_str(group);
    }
    if let Some(f) = fraction {
        out.push('.');
        out.push_str(f);
    }
    Some(out)
}

/// Parses a signed percentage such as "-5.0%" or "+12.3%".
pub fn parse_change(raw: &str) -> Option<Decimal> {
    let s = raw.trim();
    let s = s.strip_suffix('%').unwrap_or(s).trim_end();
    let (negative, digits) = split_sign(s);

    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return None;
    }

    let value = Decimal::from_str(digits).ok()?;
    Some(if negative { -value } else { value })
}

/// Formats a change the way the catalogue does: explicit `+` on gains, `%` suffix.
pub fn format_change(change: &Decimal) -> String {
    if change.is_sign_positive() && !change.is_zero() {
        format!("+{change}%")
    } else {
        format!("{change}%")
    }
}

pub fn deserialize_price<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match RawNumber::deserialize(deserializer)? {
        RawNumber::Int(v) => Ok(v),
        // Integers beyond i64 also land here; out-of-range values are rejected.
        RawNumber::Float(v) => Decimal::try_from(v)
            .ok()
            .and_then(|d| d.trunc().to_i64())
            .ok_or_else(|| serde::de::Error::custom(format!("price {v} out of range"))),
        RawNumber::Text(s) => parse_price(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid price text {s:?}"))),
    }
}

pub fn deserialize_change<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    match RawNumber::deserialize(deserializer)? {
        RawNumber::Int(v) => Ok(Decimal::from(v)),
        RawNumber::Float(v) => Decimal::try_from(v)
            .map_err(|_| serde::de::Error::custom(format!("invalid change {v}"))),
        RawNumber::Text(s) => parse_change(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid change text {s:?}"))),
    }
}

pub fn serialize_change<S>(change: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_change(change))
}
