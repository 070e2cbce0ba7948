//! # API Facade
//!
//! The single entry point for all catalog operations, regardless of the
//! front end driving them. A thin dispatch layer over `commands/*`:
//!
//! - **Dispatches** to the appropriate command function
//! - **Returns structured types** (`Result<CmdResult>`)
//! - No business logic, no I/O, no presentation concerns
//!
//! The interactive shell, the demo driver, and any future front end all go
//! through this type, so nothing above it needs to know how the catalog
//! works inside.

use crate::catalog::Catalog;
use crate::commands;
use crate::error::Result;

pub struct CatalogApi {
    catalog: Catalog,
}

impl CatalogApi {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn add_book(
        &mut self,
        title: String,
        author: String,
        isbn: String,
    ) -> Result<commands::CmdResult> {
        commands::add_book::run(&mut self.catalog, title, author, isbn)
    }

    pub fn remove_book(&mut self, isbn: &str) -> Result<commands::CmdResult> {
        commands::remove_book::run(&mut self.catalog, isbn)
    }

    pub fn register_patron(&mut self, name: String, card_id: String) -> Result<commands::CmdResult> {
        commands::register::run(&mut self.catalog, name, card_id)
    }

    pub fn borrow_book(&mut self, card_id: &str, isbn: &str) -> Result<commands::CmdResult> {
        commands::borrow::run(&mut self.catalog, card_id, isbn)
    }

    pub fn return_book(&mut self, card_id: &str, isbn: &str) -> Result<commands::CmdResult> {
        commands::return_book::run(&mut self.catalog, card_id, isbn)
    }

    pub fn check_availability(&self, isbn: &str) -> Result<commands::CmdResult> {
        commands::availability::run(&self.catalog, isbn)
    }

    pub fn search_books(&self, keyword: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.catalog, keyword)
    }

    pub fn list_books(&self) -> Result<commands::CmdResult> {
        commands::list::books(&self.catalog)
    }

    pub fn list_patrons(&self) -> Result<commands::CmdResult> {
        commands::list::patrons(&self.catalog)
    }

    pub fn list_records(&self) -> Result<commands::CmdResult> {
        commands::list::records(&self.catalog)
    }

    pub fn patron_holdings(&self, card_id: &str) -> Result<commands::CmdResult> {
        commands::holdings::run(&self.catalog, card_id)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel, PatronSummary};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatches_a_full_lending_round() {
        let mut api = CatalogApi::new(Catalog::new("Test Library"));
        api.add_book("Dune".into(), "Frank Herbert".into(), "A1".into())
            .unwrap();
        api.register_patron("Ada".into(), "P1".into()).unwrap();

        api.borrow_book("P1", "A1").unwrap();
        assert_eq!(api.list_records().unwrap().records.len(), 1);

        api.return_book("P1", "A1").unwrap();
        let listed = api.list_books().unwrap();
        assert!(listed.books[0].is_available());
    }
}
