use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn run(catalog: &mut Catalog, card_id: &str, isbn: &str) -> Result<CmdResult> {
    catalog.return_book(card_id, isbn)?;

    // Both keys were just validated by the return.
    let name = catalog
        .patron(card_id)
        .map(|patron| patron.name.clone())
        .unwrap_or_default();
    let title = catalog
        .book(isbn)
        .map(|book| book.title.clone())
        .unwrap_or_default();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "{name} returned \"{title}\""
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add_book, borrow, register};
    use crate::error::BiblioError;

    fn seeded() -> Catalog {
        let mut catalog = Catalog::new("Test Library");
        add_book::run(&mut catalog, "Dune".into(), "Frank Herbert".into(), "A1".into()).unwrap();
        register::run(&mut catalog, "Ada".into(), "P1".into()).unwrap();
        register::run(&mut catalog, "Grace".into(), "P2".into()).unwrap();
        catalog
    }

    #[test]
    fn round_trip_frees_the_book() {
        let mut catalog = seeded();
        borrow::run(&mut catalog, "P1", "A1").unwrap();

        let result = run(&mut catalog, "P1", "A1").unwrap();
        assert!(result.messages[0].content.contains("returned"));
        assert!(catalog.book("A1").unwrap().is_available());
        assert!(catalog.patron("P1").unwrap().held.is_empty());
    }

    #[test]
    fn wrong_patron_cannot_return_it() {
        let mut catalog = seeded();
        borrow::run(&mut catalog, "P1", "A1").unwrap();

        let err = run(&mut catalog, "P2", "A1").unwrap_err();
        assert!(matches!(err, BiblioError::NotHeld { .. }));
        assert!(!catalog.book("A1").unwrap().is_available());
    }
}
