use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn run(catalog: &mut Catalog, isbn: &str) -> Result<CmdResult> {
    let removed = catalog.remove_book(isbn)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Removed \"{}\" (ISBN {})",
        removed.title, removed.isbn
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add_book, borrow, register};
    use crate::error::BiblioError;

    #[test]
    fn removes_an_available_book() {
        let mut catalog = Catalog::new("Test Library");
        add_book::run(&mut catalog, "Dune".into(), "Frank Herbert".into(), "A1".into()).unwrap();

        let result = run(&mut catalog, "A1").unwrap();
        assert!(result.messages[0].content.contains("Removed"));
        assert!(catalog.book("A1").is_none());
    }

    #[test]
    fn refuses_to_remove_a_lent_book() {
        let mut catalog = Catalog::new("Test Library");
        add_book::run(&mut catalog, "Dune".into(), "Frank Herbert".into(), "A1".into()).unwrap();
        register::run(&mut catalog, "Ada".into(), "P1".into()).unwrap();
        borrow::run(&mut catalog, "P1", "A1").unwrap();

        let err = run(&mut catalog, "A1").unwrap_err();
        assert!(matches!(err, BiblioError::BookOnLoan(_)));
        assert!(catalog.book("A1").is_some());
    }

    #[test]
    fn unknown_isbn_is_an_error() {
        let mut catalog = Catalog::new("Test Library");
        let err = run(&mut catalog, "nope").unwrap_err();
        assert!(matches!(err, BiblioError::BookNotFound(_)));
    }
}
