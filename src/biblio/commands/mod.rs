use crate::catalog::Availability;
use crate::model::{BookStatus, LoanRecord};

pub mod add_book;
pub mod availability;
pub mod borrow;
pub mod holdings;
pub mod list;
pub mod register;
pub mod remove_book;
pub mod return_book;
pub mod search;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// One row of the patron roster listing.
#[derive(Debug, Clone)]
pub struct PatronSummary {
    pub name: String,
    pub card_id: String,
    pub held_count: usize,
}

/// Structured outcome of a command, for a front end to render.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub books: Vec<BookStatus>,
    pub patrons: Vec<PatronSummary>,
    pub records: Vec<LoanRecord>,
    pub availability: Option<Availability>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_books(mut self, books: Vec<BookStatus>) -> Self {
        self.books = books;
        self
    }

    pub fn with_patrons(mut self, patrons: Vec<PatronSummary>) -> Self {
        self.patrons = patrons;
        self
    }

    pub fn with_records(mut self, records: Vec<LoanRecord>) -> Self {
        self.records = records;
        self
    }

    pub fn with_availability(mut self, availability: Availability) -> Self {
        self.availability = Some(availability);
        self
    }
}
