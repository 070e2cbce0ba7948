use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::BookStatus;

pub fn run(catalog: &Catalog, keyword: &str) -> Result<CmdResult> {
    let matches: Vec<BookStatus> = catalog
        .search(keyword)
        .into_iter()
        .map(|book| catalog.book_status(book))
        .collect();

    let mut result = CmdResult::default();
    if matches.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No books matching \"{keyword}\""
        )));
    } else {
        result.add_message(CmdMessage::info(format!(
            "{} book(s) matching \"{}\"",
            matches.len(),
            keyword
        )));
    }
    Ok(result.with_books(matches))
}
