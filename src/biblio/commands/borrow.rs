use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn run(catalog: &mut Catalog, card_id: &str, isbn: &str) -> Result<CmdResult> {
    let record = catalog.borrow_book(card_id, isbn)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "{} borrowed \"{}\"",
        record.patron_name, record.book_title
    )));
    Ok(result)
}
