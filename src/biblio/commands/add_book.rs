use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn run(catalog: &mut Catalog, title: String, author: String, isbn: String) -> Result<CmdResult> {
    let book = catalog.add_book(title, author, isbn)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Added \"{}\" by {} (ISBN {})",
        book.title, book.author, book.isbn
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BiblioError;

    #[test]
    fn adds_a_book_with_a_success_message() {
        let mut catalog = Catalog::new("Test Library");
        let result = run(
            &mut catalog,
            "Dune".into(),
            "Frank Herbert".into(),
            "A1".into(),
        )
        .unwrap();

        assert_eq!(result.messages.len(), 1);
        assert!(result.messages[0].content.contains("Dune"));
        assert!(catalog.book("A1").is_some());
    }

    #[test]
    fn rejects_a_duplicate_isbn() {
        let mut catalog = Catalog::new("Test Library");
        run(&mut catalog, "Dune".into(), "Frank Herbert".into(), "A1".into()).unwrap();

        let err = run(&mut catalog, "Other".into(), "Someone".into(), "A1".into()).unwrap_err();
        assert!(matches!(err, BiblioError::DuplicateIsbn(_)));
        assert_eq!(catalog.books().count(), 1);
    }
}
