use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn run(catalog: &Catalog, card_id: &str) -> Result<CmdResult> {
    let held = catalog.holdings(card_id)?;
    let name = catalog
        .patron(card_id)
        .map(|patron| patron.name.clone())
        .unwrap_or_default();

    let mut result = CmdResult::default();
    if held.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "{name} has no books on loan"
        )));
    } else {
        result.add_message(CmdMessage::info(format!(
            "{} has {} book(s) on loan",
            name,
            held.len()
        )));
    }
    Ok(result.with_books(held))
}
