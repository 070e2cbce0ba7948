use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult, PatronSummary};
use crate::error::Result;
use crate::model::BookStatus;

pub fn books(catalog: &Catalog) -> Result<CmdResult> {
    let listed: Vec<BookStatus> = catalog
        .books()
        .map(|book| catalog.book_status(book))
        .collect();

    let mut result = CmdResult::default();
    if listed.is_empty() {
        result.add_message(CmdMessage::info("The catalog has no books yet"));
    }
    Ok(result.with_books(listed))
}

pub fn patrons(catalog: &Catalog) -> Result<CmdResult> {
    let listed: Vec<PatronSummary> = catalog
        .patrons()
        .map(|patron| PatronSummary {
            name: patron.name.clone(),
            card_id: patron.card_id.clone(),
            held_count: patron.held.len(),
        })
        .collect();

    let mut result = CmdResult::default();
    if listed.is_empty() {
        result.add_message(CmdMessage::info("No patrons registered yet"));
    }
    Ok(result.with_patrons(listed))
}

pub fn records(catalog: &Catalog) -> Result<CmdResult> {
    let listed = catalog.loans().to_vec();

    let mut result = CmdResult::default();
    if listed.is_empty() {
        result.add_message(CmdMessage::info("No loans recorded yet"));
    }
    Ok(result.with_records(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add_book, borrow, register};

    #[test]
    fn empty_catalog_lists_with_a_note() {
        let catalog = Catalog::new("Test Library");
        let result = books(&catalog).unwrap();
        assert!(result.books.is_empty());
        assert!(!result.messages.is_empty());
    }

    #[test]
    fn books_come_back_in_insertion_order_with_holders() {
        let mut catalog = Catalog::new("Test Library");
        add_book::run(&mut catalog, "Dune".into(), "Frank Herbert".into(), "A1".into()).unwrap();
        add_book::run(&mut catalog, "Emma".into(), "Jane Austen".into(), "A2".into()).unwrap();
        register::run(&mut catalog, "Ada".into(), "P1".into()).unwrap();
        borrow::run(&mut catalog, "P1", "A2").unwrap();

        let result = books(&catalog).unwrap();
        assert_eq!(result.books.len(), 2);
        assert_eq!(result.books[0].title, "Dune");
        assert!(result.books[0].is_available());
        assert_eq!(result.books[1].holder.as_deref(), Some("Ada"));
    }

    #[test]
    fn patron_rows_carry_held_counts() {
        let mut catalog = Catalog::new("Test Library");
        add_book::run(&mut catalog, "Dune".into(), "Frank Herbert".into(), "A1".into()).unwrap();
        register::run(&mut catalog, "Ada".into(), "P1".into()).unwrap();
        borrow::run(&mut catalog, "P1", "A1").unwrap();

        let result = patrons(&catalog).unwrap();
        assert_eq!(result.patrons.len(), 1);
        assert_eq!(result.patrons[0].held_count, 1);
    }

    #[test]
    fn records_list_grows_only_on_borrow() {
        let mut catalog = Catalog::new("Test Library");
        add_book::run(&mut catalog, "Dune".into(), "Frank Herbert".into(), "A1".into()).unwrap();
        register::run(&mut catalog, "Ada".into(), "P1".into()).unwrap();

        assert!(records(&catalog).unwrap().records.is_empty());
        borrow::run(&mut catalog, "P1", "A1").unwrap();
        assert_eq!(records(&catalog).unwrap().records.len(), 1);
    }
}
