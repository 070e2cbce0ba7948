//! The catalog aggregate: every book, every patron, and the loan log live
//! here, and every state change between a book and a patron goes through it.
//!
//! Books and patrons reference each other by key only: the book carries the
//! borrower's card id, the patron carries a list of ISBNs. Both sides of
//! that link change inside a single catalog operation or not at all, so the
//! pair can never drift apart.

use std::collections::HashMap;

use crate::error::{BiblioError, Result};
use crate::model::{Book, BookStatus, LoanRecord, Patron};

pub const DEFAULT_BORROW_LIMIT: usize = 5;

/// Three-valued answer to "can this ISBN be borrowed right now?".
///
/// `Unknown` (no such ISBN) is deliberately distinct from `OnLoan`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Available,
    OnLoan,
    Unknown,
}

#[derive(Debug)]
pub struct Catalog {
    name: String,
    borrow_limit: usize,
    books: HashMap<String, Book>,
    patrons: HashMap<String, Patron>,
    // The maps alone don't remember insertion order; listings do.
    shelf_order: Vec<String>,
    roster_order: Vec<String>,
    loans: Vec<LoanRecord>,
}

impl Catalog {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_limit(name, DEFAULT_BORROW_LIMIT)
    }

    pub fn with_limit(name: impl Into<String>, borrow_limit: usize) -> Self {
        Self {
            name: name.into(),
            borrow_limit,
            books: HashMap::new(),
            patrons: HashMap::new(),
            shelf_order: Vec::new(),
            roster_order: Vec::new(),
            loans: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn borrow_limit(&self) -> usize {
        self.borrow_limit
    }

    /// Insert a new book. The ISBN must not already be on the shelf.
    pub fn add_book(&mut self, title: String, author: String, isbn: String) -> Result<&Book> {
        if self.books.contains_key(&isbn) {
            return Err(BiblioError::DuplicateIsbn(isbn));
        }
        let book = Book::new(title, author, isbn.clone());
        self.shelf_order.push(isbn.clone());
        Ok(self.books.entry(isbn).or_insert(book))
    }

    /// Remove a book from the shelf. A lent book stays put until it comes back.
    pub fn remove_book(&mut self, isbn: &str) -> Result<Book> {
        match self.books.get(isbn) {
            None => return Err(BiblioError::BookNotFound(isbn.to_string())),
            Some(book) if !book.is_available() => {
                return Err(BiblioError::BookOnLoan(isbn.to_string()))
            }
            Some(_) => {}
        }
        self.shelf_order.retain(|key| key != isbn);
        self.books
            .remove(isbn)
            .ok_or_else(|| BiblioError::BookNotFound(isbn.to_string()))
    }

    /// Register a new patron. The card id must not already be taken.
    pub fn register_patron(&mut self, name: String, card_id: String) -> Result<&Patron> {
        if self.patrons.contains_key(&card_id) {
            return Err(BiblioError::DuplicateCard(card_id));
        }
        let patron = Patron::new(name, card_id.clone(), self.borrow_limit);
        self.roster_order.push(card_id.clone());
        Ok(self.patrons.entry(card_id).or_insert(patron))
    }

    /// Lend a book to a patron and log the loan.
    ///
    /// Checks run in a fixed order and short-circuit: unknown card, unknown
    /// ISBN, patron at their limit, book already lent. Any failure leaves
    /// the catalog untouched.
    pub fn borrow_book(&mut self, card_id: &str, isbn: &str) -> Result<LoanRecord> {
        let patron = self
            .patrons
            .get(card_id)
            .ok_or_else(|| BiblioError::PatronNotFound(card_id.to_string()))?;
        let book = self
            .books
            .get(isbn)
            .ok_or_else(|| BiblioError::BookNotFound(isbn.to_string()))?;

        if !patron.can_borrow_more() {
            return Err(BiblioError::LimitReached {
                card_id: card_id.to_string(),
                limit: patron.limit,
            });
        }
        if !book.is_available() {
            return Err(BiblioError::BookOnLoan(isbn.to_string()));
        }

        let record = LoanRecord::new(patron, book);

        // All checks passed: flip both sides of the link together.
        if let Some(book) = self.books.get_mut(isbn) {
            book.check_out(card_id);
        }
        if let Some(patron) = self.patrons.get_mut(card_id) {
            patron.held.push(isbn.to_string());
        }
        self.loans.push(record.clone());
        Ok(record)
    }

    /// Take a book back from a patron.
    ///
    /// Same key checks as [`Catalog::borrow_book`], then the patron must
    /// actually hold the ISBN. A held book that is somehow not checked out
    /// is refused without touching either side. Returns are not logged; the
    /// loan log records acquisitions only.
    pub fn return_book(&mut self, card_id: &str, isbn: &str) -> Result<()> {
        let patron = self
            .patrons
            .get(card_id)
            .ok_or_else(|| BiblioError::PatronNotFound(card_id.to_string()))?;
        if !self.books.contains_key(isbn) {
            return Err(BiblioError::BookNotFound(isbn.to_string()));
        }
        if !patron.holds(isbn) {
            return Err(BiblioError::NotHeld {
                card_id: card_id.to_string(),
                isbn: isbn.to_string(),
            });
        }

        let book = self
            .books
            .get_mut(isbn)
            .ok_or_else(|| BiblioError::BookNotFound(isbn.to_string()))?;
        if !book.check_in() {
            return Err(BiblioError::BookNotOnLoan(isbn.to_string()));
        }
        if let Some(patron) = self.patrons.get_mut(card_id) {
            patron.held.retain(|held| held != isbn);
        }
        Ok(())
    }

    pub fn availability(&self, isbn: &str) -> Availability {
        match self.books.get(isbn) {
            None => Availability::Unknown,
            Some(book) if book.is_available() => Availability::Available,
            Some(_) => Availability::OnLoan,
        }
    }

    /// Case-insensitive substring match over title, author, and ISBN, in
    /// shelf order. An empty keyword matches every book.
    pub fn search(&self, keyword: &str) -> Vec<&Book> {
        let needle = keyword.to_lowercase();
        self.books()
            .filter(|book| {
                book.title.to_lowercase().contains(&needle)
                    || book.author.to_lowercase().contains(&needle)
                    || book.isbn.to_lowercase().contains(&needle)
            })
            .collect()
    }

    pub fn book(&self, isbn: &str) -> Option<&Book> {
        self.books.get(isbn)
    }

    pub fn patron(&self, card_id: &str) -> Option<&Patron> {
        self.patrons.get(card_id)
    }

    /// Books in the order they were added.
    pub fn books(&self) -> impl Iterator<Item = &Book> {
        self.shelf_order.iter().filter_map(|isbn| self.books.get(isbn))
    }

    /// Patrons in the order they were registered.
    pub fn patrons(&self) -> impl Iterator<Item = &Patron> {
        self.roster_order
            .iter()
            .filter_map(|card_id| self.patrons.get(card_id))
    }

    pub fn loans(&self) -> &[LoanRecord] {
        &self.loans
    }

    /// Presentation snapshot of one book, with the borrower's card id
    /// resolved to their name.
    pub fn book_status(&self, book: &Book) -> BookStatus {
        let holder = book
            .holder
            .as_ref()
            .and_then(|card_id| self.patrons.get(card_id))
            .map(|patron| patron.name.clone());
        BookStatus {
            title: book.title.clone(),
            author: book.author.clone(),
            isbn: book.isbn.clone(),
            holder,
        }
    }

    pub fn status(&self, isbn: &str) -> Result<BookStatus> {
        self.books
            .get(isbn)
            .map(|book| self.book_status(book))
            .ok_or_else(|| BiblioError::BookNotFound(isbn.to_string()))
    }

    /// What a patron currently holds, in borrow order.
    pub fn holdings(&self, card_id: &str) -> Result<Vec<BookStatus>> {
        let patron = self
            .patrons
            .get(card_id)
            .ok_or_else(|| BiblioError::PatronNotFound(card_id.to_string()))?;
        Ok(patron
            .held
            .iter()
            .filter_map(|isbn| self.books.get(isbn))
            .map(|book| self.book_status(book))
            .collect())
    }
}
