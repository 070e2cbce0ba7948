use crate::catalog::{Availability, Catalog};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

/// An unknown ISBN is a verdict here, not an error; all three outcomes are
/// ordinary answers.
pub fn run(catalog: &Catalog, isbn: &str) -> Result<CmdResult> {
    let verdict = catalog.availability(isbn);
    let mut result = CmdResult::default().with_availability(verdict);

    match verdict {
        Availability::Unknown => {
            result.add_message(CmdMessage::warning(format!(
                "No book with ISBN {isbn} in the catalog"
            )));
        }
        Availability::Available => {
            let status = catalog.status(isbn)?;
            result.add_message(CmdMessage::success(format!(
                "\"{}\" is available",
                status.title
            )));
        }
        Availability::OnLoan => {
            let status = catalog.status(isbn)?;
            let holder = status.holder.unwrap_or_else(|| "unknown".to_string());
            result.add_message(CmdMessage::info(format!(
                "\"{}\" is on loan to {}",
                status.title, holder
            )));
        }
    }
    Ok(result)
}
