use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub added_at: DateTime<Utc>,
    // Card id of the current borrower. The book is on loan iff this is set.
    pub holder: Option<String>,
}

impl Book {
    pub fn new(title: String, author: String, isbn: String) -> Self {
        Self {
            title,
            author,
            isbn,
            added_at: Utc::now(),
            holder: None,
        }
    }

    /// Hand the book to a borrower. Refuses (returns false, no mutation)
    /// when it is already checked out.
    pub fn check_out(&mut self, card_id: &str) -> bool {
        if self.holder.is_some() {
            return false;
        }
        self.holder = Some(card_id.to_string());
        true
    }

    /// Take the book back. Refuses when it is not checked out.
    pub fn check_in(&mut self) -> bool {
        if self.holder.is_none() {
            return false;
        }
        self.holder = None;
        true
    }

    pub fn is_available(&self) -> bool {
        self.holder.is_none()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patron {
    pub name: String,
    pub card_id: String,
    pub registered_at: DateTime<Utc>,
    // ISBNs in borrow order. A book appears at most once.
    pub held: Vec<String>,
    pub limit: usize,
}

impl Patron {
    pub fn new(name: String, card_id: String, limit: usize) -> Self {
        Self {
            name,
            card_id,
            registered_at: Utc::now(),
            held: Vec::new(),
            limit,
        }
    }

    pub fn can_borrow_more(&self) -> bool {
        self.held.len() < self.limit
    }

    pub fn holds(&self, isbn: &str) -> bool {
        self.held.iter().any(|held| held == isbn)
    }
}

/// One entry in the append-only loan log, written when a borrow succeeds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanRecord {
    pub id: Uuid,
    pub patron_name: String,
    pub card_id: String,
    pub book_title: String,
    pub isbn: String,
    pub borrowed_at: DateTime<Utc>,
}

impl LoanRecord {
    pub fn new(patron: &Patron, book: &Book) -> Self {
        Self {
            id: Uuid::new_v4(),
            patron_name: patron.name.clone(),
            card_id: patron.card_id.clone(),
            book_title: book.title.clone(),
            isbn: book.isbn.clone(),
            borrowed_at: Utc::now(),
        }
    }
}

/// Read-only snapshot of a book for presentation. Carries the borrower's
/// name rather than their card id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookStatus {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub holder: Option<String>,
}

impl BookStatus {
    pub fn is_available(&self) -> bool {
        self.holder.is_none()
    }

    pub fn label(&self) -> &'static str {
        if self.is_available() {
            "available"
        } else {
            "on loan"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_out_sets_holder_once() {
        let mut book = Book::new("Dune".into(), "Frank Herbert".into(), "9780441172719".into());
        assert!(book.is_available());

        assert!(book.check_out("A-001"));
        assert_eq!(book.holder.as_deref(), Some("A-001"));
        assert!(!book.is_available());

        // A second borrower bounces off without stealing the book.
        assert!(!book.check_out("A-002"));
        assert_eq!(book.holder.as_deref(), Some("A-001"));
    }

    #[test]
    fn check_in_requires_an_open_loan() {
        let mut book = Book::new("Dune".into(), "Frank Herbert".into(), "9780441172719".into());
        assert!(!book.check_in());

        book.check_out("A-001");
        assert!(book.check_in());
        assert!(book.is_available());
        assert!(book.holder.is_none());
    }

    #[test]
    fn patron_limit_gates_borrowing() {
        let mut patron = Patron::new("Ada".into(), "A-001".into(), 2);
        assert!(patron.can_borrow_more());

        patron.held.push("111".into());
        patron.held.push("222".into());
        assert!(!patron.can_borrow_more());
        assert!(patron.holds("111"));
        assert!(!patron.holds("333"));
    }
}
