//! Error types for monetary construction and arithmetic.

use thiserror::Error;

/// Result type alias using `MoneyError`.
pub type MoneyResult<T> = Result<T, MoneyError>;

/// Errors raised by currency definitions, value construction and arithmetic.
///
/// Every failure is local and synchronous: it is returned from the operation
/// that received invalid input and is never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    // ========== Data Errors ==========
    /// Input could not be turned into an exact monetary value.
    #[error("Could not parse monetary value: {0}")]
    Parse(String),

    /// Currency granularity is not a power of ten.
    #[error("Invalid subunit {subunit}: sub-units per main unit must be a power of ten")]
    InvalidSubunit {
        /// The rejected granularity.
        subunit: u64,
    },

    /// An overdraft was constructed with a magnitude of zero.
    #[error(
        "Overdraft cannot be instantiated with a value of zero, the Money type should be used instead"
    )]
    InvalidOverdraftValue,

    /// A division was attempted with a zero divisor.
    #[error("Division by zero")]
    DivisionByZero,

    // ========== Type Errors ==========
    /// Operands are denominated in different currencies.
    #[error("Currency mismatch: cannot combine {left} with {right}")]
    CurrencyMismatch {
        /// Currency code of the left operand.
        left: String,
        /// Currency code of the right operand.
        right: String,
    },

    /// The operation is not defined for this pair of operand kinds.
    #[error("Unsupported operand type(s) for {op}: '{left}' and '{right}'")]
    UnsupportedOperand {
        /// Operator symbol.
        op: &'static str,
        /// Kind of the left operand.
        left: &'static str,
        /// Kind of the right operand.
        right: &'static str,
    },

    // ========== Lookup & Export Errors ==========
    /// No currency is registered under the given code.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    /// Value does not fit the requested export representation.
    #[error("Value out of range: {0}")]
    OutOfRange(String),
}

impl MoneyError {
    /// Shorthand for a [`MoneyError::Parse`] with the given message.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Returns the stable error code for this error, suitable for mapping to
    /// field-level validation messages.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Parse(_) => "PARSE_ERROR",
            Self::InvalidSubunit { .. } => "INVALID_SUBUNIT",
            Self::InvalidOverdraftValue => "INVALID_OVERDRAFT_VALUE",
            Self::DivisionByZero => "DIVISION_BY_ZERO",
            Self::CurrencyMismatch { .. } => "CURRENCY_MISMATCH",
            Self::UnsupportedOperand { .. } => "UNSUPPORTED_OPERAND",
            Self::UnknownCurrency(_) => "UNKNOWN_CURRENCY",
            Self::OutOfRange(_) => "OUT_OF_RANGE",
        }
    }

    /// Returns true if the error stems from combining incompatible operands
    /// rather than from invalid data.
    #[must_use]
    pub const fn is_type_error(&self) -> bool {
        matches!(
            self,
            Self::CurrencyMismatch { .. } | Self::UnsupportedOperand { .. }
        )
    }
}
