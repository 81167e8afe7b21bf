use model::Category;
use rust_decimal::Decimal;
use thiserror::Error;

/// Error types for the accounting module.
///
/// The module is pure computation, so the taxonomy is small: a bad activity
/// key at entry-creation time, or a non-positive goal at evaluation time.
/// Malformed stored records are deliberately not an error; the normalizer
/// degrades them to zeroed fields instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AccountingError {
    /// The (category, activity_type) pair has no emission factor. Raised at
    /// entry-creation time, never at aggregation time.
    #[error("no emission factor for activity `{activity_type}` in category `{category}`")]
    UnknownActivity {
        category: Category,
        activity_type: String,
    },

    /// The annual goal is zero or negative. Recoverable: callers substitute
    /// a positive default when no goal is configured.
    #[error("annual carbon goal must be positive, got {0} kg")]
    InvalidGoal(Decimal),
}

/// Type alias for Result with AccountingError
pub type Result<T> = std::result::Result<T, AccountingError>;
