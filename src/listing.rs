//! Grid listing of available command names.

use std::fmt;

const COLUMNS: usize = 3;
const COLUMN_WIDTH: usize = 12;
const COLUMN_SEPARATOR: &str = "\t\t";

/// Write `names` as a three-column grid under a header.
///
/// Names are printed in the order given; callers sort them. A final line
/// break is added when the last row is incomplete.
pub fn render_listing<S: AsRef<str>>(names: &[S], writer: &mut impl fmt::Write) -> fmt::Result {
    writeln!(writer, "📋 Comandos disponibles:")?;
    writeln!(writer)?;

    for (idx, name) in names.iter().enumerate() {
        write!(writer, "• {:<width$}", name.as_ref(), width = COLUMN_WIDTH)?;
        if (idx + 1) % COLUMNS == 0 {
            writeln!(writer)?;
        } else {
            writer.write_str(COLUMN_SEPARATOR)?;
        }
    }

    if names.len() % COLUMNS != 0 {
        writeln!(writer)?;
    }
    Ok(())
}
