//! Hermes price types

/// A single exponent-scaled price update as returned by Hermes.
///
/// `price` and `conf` are integer mantissas; the real value is
/// `mantissa * 10^expo`. Scaling happens in [`crate::normalize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawPricePoint {
    /// Feed identifier the update belongs to
    pub feed_id: String,
    /// Price mantissa
    pub price: i64,
    /// Confidence interval mantissa
    pub conf: i64,
    /// Decimal exponent, typically negative
    pub expo: i32,
    /// Publish time in Unix seconds
    pub publish_time: i64,
}
