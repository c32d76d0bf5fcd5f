use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub title: String,
    pub description: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
pub enum LedgerError {
    /// Amount is zero, negative or not a finite number
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Expense lists no participants
    #[error("Expense has no participants")]
    EmptyParticipantSet,

    /// Payer is missing from the participants under the reject policy
    #[error("Payer {0} is not a participant")]
    PayerNotParticipant(String),

    /// Same user listed twice in one expense
    #[error("Participant {0} listed more than once")]
    DuplicateParticipant(String),

    /// No snapshot has been published for the group
    #[error("Group {0} not found")]
    GroupNotFound(String),

    #[error("Invalid input for field `{}`: {}", .0, .1.description)]
    InvalidInput(String, FieldError),

    #[error("Cache error: {0}")]
    CacheError(String),
}

impl LedgerError {
    /// Stable identifier exposed to callers in place of the message text.
    pub fn code(&self) -> &'static str {
        match self {
            LedgerError::InvalidAmount(_) => "INVALID_AMOUNT",
            LedgerError::EmptyParticipantSet => "EMPTY_PARTICIPANT_SET",
            LedgerError::PayerNotParticipant(_) => "PAYER_NOT_PARTICIPANT",
            LedgerError::DuplicateParticipant(_) => "DUPLICATE_PARTICIPANT",
            LedgerError::GroupNotFound(_) => "GROUP_NOT_FOUND",
            LedgerError::InvalidInput(_, _) => "INVALID_INPUT",
            LedgerError::CacheError(_) => "CACHE_ERROR",
        }
    }

    /// True for errors raised while validating a single expense.
    pub fn is_expense_error(&self) -> bool {
        matches!(
            self,
            LedgerError::InvalidAmount(_)
                | LedgerError::EmptyParticipantSet
                | LedgerError::PayerNotParticipant(_)
                | LedgerError::DuplicateParticipant(_)
        )
    }

    pub fn invalid_input(field: &str, title: &str, description: String) -> Self {
        LedgerError::InvalidInput(
            field.to_string(),
            FieldError {
                field: field.to_string(),
                title: title.to_string(),
                description,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_message_shows_the_description() {
        let err =
            LedgerError::invalid_input("paidBy", "Invalid paidBy", "paidBy cannot be empty".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid input for field `paidBy`: paidBy cannot be empty"
        );
    }

    #[test]
    fn expense_errors_are_flagged() {
        assert!(LedgerError::InvalidAmount("1e300 is out of range".to_string()).is_expense_error());
        assert!(!LedgerError::GroupNotFound("trip".to_string()).is_expense_error());
    }
}
