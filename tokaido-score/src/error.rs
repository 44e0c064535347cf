//! Error types raised by the ledger and the scoring rules.
use thiserror::Error;

/// Errors raised when a caller hands the ledger input outside its domain.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("invalid {field}: {value}")]
    InvalidArgument { field: &'static str, value: String },
    #[error("ledger snapshot could not be parsed: {0}")]
    Json(#[from] serde_json::Error),
}

impl LedgerError {
    pub(crate) fn invalid(field: &'static str, value: impl ToString) -> Self {
        Self::InvalidArgument {
            field,
            value: value.to_string(),
        }
    }

    /// Name of the rejected field, when the error is an `InvalidArgument`.
    #[must_use]
    pub const fn field(&self) -> Option<&'static str> {
        match self {
            Self::InvalidArgument { field, .. } => Some(*field),
            Self::Json(_) => None,
        }
    }
}

pub type LedgerResult<T> = Result<T, LedgerError>;

/// Errors raised when a scoring rule table violates its ordering invariants.
#[derive(Debug, Error)]
pub enum ScoringRulesError {
    #[error(
        "souvenir weight at position {position} ({weight}) is below the previous weight ({previous})"
    )]
    SouvenirWeightOrder {
        position: usize,
        weight: u32,
        previous: u32,
    },
    #[error("temple rank {rank} bonus ({bonus}) exceeds the bonus for rank {better_rank} ({previous})")]
    RankBonusOrder {
        rank: usize,
        bonus: u32,
        better_rank: usize,
        previous: u32,
    },
    #[error("scoring rules could not be parsed: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_message_names_field_and_value() {
        let err = LedgerError::invalid("meal count", -3);
        assert_eq!(err.to_string(), "invalid meal count: -3");
        assert_eq!(err.field(), Some("meal count"));
    }

    #[test]
    fn json_errors_carry_no_field() {
        let parse = serde_json::from_str::<u32>("nope").unwrap_err();
        let err = LedgerError::from(parse);
        assert!(err.field().is_none());
        assert!(err.to_string().starts_with("ledger snapshot could not be parsed"));
    }

    #[test]
    fn rules_json_error_keeps_its_source() {
        use std::error::Error as _;

        let parse = serde_json::from_str::<u32>("nope").unwrap_err();
        let err = ScoringRulesError::from(parse);
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("scoring rules could not be parsed"));
    }
}
