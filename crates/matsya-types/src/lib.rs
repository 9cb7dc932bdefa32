//! Validated value types shared across the matsya workspace.
//!
//! These newtypes guarantee their invariant at construction time so that the
//! rest of the system never has to re-check it: a pond name that exists is
//! never blank, an amount that exists is never zero or negative.

use serde::{Deserialize, Serialize};

/// Errors that can occur when creating validated text types.
#[derive(Debug, thiserror::Error)]
pub enum TextError {
    /// The input text was empty or contained only whitespace
    #[error("text cannot be empty")]
    Empty,
}

/// Errors that can occur when creating validated amount types.
#[derive(Debug, thiserror::Error)]
pub enum AmountError {
    #[error("amount must be a finite number, got {0}")]
    NotFinite(f64),
    #[error("amount must be greater than zero, got {0}")]
    NotPositive(f64),
}

/// A string type that guarantees non-empty content.
///
/// Input is trimmed of surrounding whitespace during construction; a trimmed
/// result of zero length is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NonEmptyText(String);

impl NonEmptyText {
    /// Creates a new `NonEmptyText` from the given input.
    ///
    /// # Errors
    ///
    /// Returns [`TextError::Empty`] if the trimmed input has no content.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TextError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for NonEmptyText {
    type Error = TextError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<NonEmptyText> for String {
    fn from(value: NonEmptyText) -> Self {
        value.0
    }
}

impl AsRef<str> for NonEmptyText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NonEmptyText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A monetary or quantity value that is finite and strictly positive.
///
/// Used for prices per kilogram, ledger amounts and stock quantities. The
/// serialized form is a plain JSON number, so records on disk and over the
/// wire look exactly like unvalidated floats.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct PositiveAmount(f64);

impl PositiveAmount {
    /// Creates a new `PositiveAmount`.
    ///
    /// # Errors
    ///
    /// Returns [`AmountError::NotFinite`] for NaN or infinite input, and
    /// [`AmountError::NotPositive`] for zero or negative input.
    pub fn new(value: f64) -> Result<Self, AmountError> {
        if !value.is_finite() {
            return Err(AmountError::NotFinite(value));
        }
        if value <= 0.0 {
            return Err(AmountError::NotPositive(value));
        }
        Ok(Self(value))
    }

    /// Returns the inner value.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for PositiveAmount {
    type Error = AmountError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PositiveAmount> for f64 {
    fn from(value: PositiveAmount) -> Self {
        value.0
    }
}

impl std::fmt::Display for PositiveAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_empty_text_trims_input() {
        let text = NonEmptyText::new("  বড় পুকুর  ").unwrap();
        assert_eq!(text.as_str(), "বড় পুকুর");
    }

    #[test]
    fn non_empty_text_rejects_whitespace_only() {
        assert!(NonEmptyText::new("   ").is_err());
        assert!(NonEmptyText::new("").is_err());
    }

    #[test]
    fn non_empty_text_roundtrips_through_json() {
        let text = NonEmptyText::new("Pukur 1").unwrap();
        let json = serde_json::to_string(&text).unwrap();
        assert_eq!(json, "\"Pukur 1\"");
        let back: NonEmptyText = serde_json::from_str(&json).unwrap();
        assert_eq!(back, text);
    }

    #[test]
    fn positive_amount_accepts_positive_values() {
        assert_eq!(PositiveAmount::new(250.5).unwrap().value(), 250.5);
    }

    #[test]
    fn positive_amount_rejects_zero_negative_and_nan() {
        assert!(matches!(
            PositiveAmount::new(0.0),
            Err(AmountError::NotPositive(_))
        ));
        assert!(matches!(
            PositiveAmount::new(-10.0),
            Err(AmountError::NotPositive(_))
        ));
        assert!(matches!(
            PositiveAmount::new(f64::NAN),
            Err(AmountError::NotFinite(_))
        ));
    }

    #[test]
    fn positive_amount_deserializes_from_plain_number() {
        let amount: PositiveAmount = serde_json::from_str("120.0").unwrap();
        assert_eq!(amount.value(), 120.0);
        assert!(serde_json::from_str::<PositiveAmount>("-5.0").is_err());
    }
}
