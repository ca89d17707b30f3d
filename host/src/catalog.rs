use std::io::{self, Write};

use dispatcher::ACTIONS;

/// Writes one line per form action: its name, trigger id, endpoint and field ids.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_catalog(out: &mut impl Write) -> io::Result<()> {
    for action in &ACTIONS {
        writeln!(
            out,
            "{:<16} #{:<16} {:<22} {}",
            action.kind.to_string(),
            action.trigger_id,
            action.endpoint.to_string(),
            action.field_ids.join(", ")
        )?;
    }

    Ok(())
}
