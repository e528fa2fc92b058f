use crate::error::Result;
use std::fs::OpenOptions;
use std::io::Write;
use tracing::info;

/// Appends one `Dolar: <value>` line to the output file, creating it on first
/// use. Earlier lines are preserved.
pub fn append_quote(path: &str, value: &str) -> Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "Dolar: {}", value)?;

    info!("Appended quote to {}", path);
    Ok(())
}
