//! Runtime effect selection over the firmware's control channel.
//!
//! The emitted firmware reads one ASCII decimal integer per line and makes
//! that row of its effect table active. Anything unparsable, negative or
//! past the end of the table is ignored and the previous selection stays.

use std::io::Write;

/// Line that selects table row `index`
pub fn select_command(index: usize) -> String {
    format!("{}\n", index)
}

/// Write a select command to the control channel
pub fn send_select<W: Write>(writer: &mut W, index: usize) -> std::io::Result<()> {
    writer.write_all(select_command(index).as_bytes())?;
    writer.flush()
}

/// Parse a received line the way `strtol` does in the firmware: leading
/// whitespace and a sign are allowed, trailing characters are not.
pub fn parse_select_line(line: &str) -> Option<i64> {
    line.trim_start().parse::<i64>().ok()
}

/// Range check against a table of `rows` entries
pub fn accept_selection(value: i64, rows: usize) -> Option<usize> {
    usize::try_from(value).ok().filter(|&index| index < rows)
}
