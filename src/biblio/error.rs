use thiserror::Error;

/// Every way a catalog operation can fail.
///
/// Domain failures are ordinary outcomes: deterministic given the catalog
/// state, never fatal to the process. Callers match on the variant to decide
/// how to present them.
#[derive(Error, Debug)]
pub enum BiblioError {
    #[error("ISBN {0} is already in the catalog")]
    DuplicateIsbn(String),

    #[error("Card {0} is already registered")]
    DuplicateCard(String),

    #[error("Book not found: {0}")]
    BookNotFound(String),

    #[error("Patron not found: {0}")]
    PatronNotFound(String),

    #[error("Book is on loan: {0}")]
    BookOnLoan(String),

    #[error("Book is not on loan: {0}")]
    BookNotOnLoan(String),

    #[error("Card {card_id} has reached the borrow limit of {limit}")]
    LimitReached { card_id: String, limit: usize },

    #[error("Card {card_id} has not borrowed ISBN {isbn}")]
    NotHeld { card_id: String, isbn: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BiblioError>;
