//! Custom serde helpers for request wire formats.

/// Serializes an `f64`, failing on NaN and infinities.
///
/// `serde_json` writes non-finite floats as `null`, which the order endpoints
/// would read as a missing price. Request bodies must fail to encode instead.
pub mod finite_f64 {
    use serde::{ser::Error, Serializer};

    pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else {
            Err(S::Error::custom(format!(
                "non-finite number {value} cannot be encoded as JSON"
            )))
        }
    }
}
