use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn run(catalog: &mut Catalog, name: String, card_id: String) -> Result<CmdResult> {
    let patron = catalog.register_patron(name, card_id)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Registered {} (card {})",
        patron.name, patron.card_id
    )));
    Ok(result)
}
