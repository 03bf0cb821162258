//! Price normalization
//!
//! Pure transformation from exponent-scaled Hermes price updates into
//! decimal records with human-readable timestamps. Display times are fixed
//! to US Eastern, a business rule inherited from the product.

use crate::catalog::FeedDescriptor;
use crate::hermes::RawPricePoint;
use chrono::DateTime;
use chrono_tz::America::New_York;
use rust_decimal::Decimal;
use std::collections::HashMap;
use thiserror::Error;

/// Display format: "March 03, 2024 02:35 PM EST"
const DISPLAY_FORMAT: &str = "%B %d, %Y %I:%M %p %Z";

/// A normalized, presentable price
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceRecord {
    /// Feed identifier the price belongs to
    pub feed_id: String,
    /// Decimal price
    pub price: Decimal,
    /// Decimal confidence interval, same units as the price
    pub confidence_interval: Decimal,
    /// Feed description from the catalog
    pub description: String,
    /// Publish time rendered in US Eastern
    pub display_time: String,
}

/// Normalization failures
#[derive(Debug, Error)]
pub enum NormalizeError {
    /// The update names a feed absent from the resolved descriptor set
    #[error("no feed description found for id {0}")]
    UnknownFeed(String),
    /// Exponent outside the representable decimal range
    #[error("exponent {0} is out of range")]
    ExponentOutOfRange(i32),
    /// Publish time outside the representable date range
    #[error("publish time {0} is out of range")]
    InvalidTimestamp(i64),
}

/// Convert raw price points into presentable records.
///
/// Descriptions are joined strictly by feed id: a raw point whose id is not
/// in `feeds` fails the whole call rather than producing a record with a
/// blank description. Output preserves input order.
pub fn normalize(
    raw: &[RawPricePoint],
    feeds: &[FeedDescriptor],
) -> Result<Vec<PriceRecord>, NormalizeError> {
    let by_id: HashMap<&str, &FeedDescriptor> =
        feeds.iter().map(|f| (f.id.as_str(), f)).collect();

    raw.iter()
        .map(|point| {
            let feed = by_id
                .get(point.feed_id.as_str())
                .ok_or_else(|| NormalizeError::UnknownFeed(point.feed_id.clone()))?;

            Ok(PriceRecord {
                feed_id: point.feed_id.clone(),
                price: apply_exponent(point.price, point.expo)?,
                confidence_interval: apply_exponent(point.conf, point.expo)?,
                description: feed.description.clone(),
                display_time: format_display_time(point.publish_time)?,
            })
        })
        .collect()
}

/// Scale a mantissa by `10^expo` without precision loss
fn apply_exponent(mantissa: i64, expo: i32) -> Result<Decimal, NormalizeError> {
    let value = Decimal::from(mantissa);
    if expo >= 0 {
        let factor = 10i64
            .checked_pow(expo as u32)
            .ok_or(NormalizeError::ExponentOutOfRange(expo))?;
        value
            .checked_mul(Decimal::from(factor))
            .ok_or(NormalizeError::ExponentOutOfRange(expo))
    } else {
        let scale = expo.unsigned_abs();
        if scale > 28 {
            return Err(NormalizeError::ExponentOutOfRange(expo));
        }
        let mut scaled = value;
        scaled
            .set_scale(scale)
            .map_err(|_| NormalizeError::ExponentOutOfRange(expo))?;
        Ok(scaled)
    }
}

/// Render a Unix publish time as a long-form US Eastern timestamp
fn format_display_time(publish_time: i64) -> Result<String, NormalizeError> {
    let instant = DateTime::from_timestamp(publish_time, 0)
        .ok_or(NormalizeError::InvalidTimestamp(publish_time))?;
    Ok(instant
        .with_timezone(&New_York)
        .format(DISPLAY_FORMAT)
        .to_string())
}
