use std::io::Write;

use anyhow::Result;

use super::types::MatchTable;

/// Write the match visualization for a scanned string.
///
/// After a header naming the string, each position gets three lines: a
/// ruler underlining the matched region `[i, i + len)`, the string
/// itself, and a ruler starring the source region `[pos, pos + len)`.
pub fn render(out: &mut impl Write, text: &str, table: &MatchTable) -> Result<()> {
    writeln!(out, "String to scan: {text}")?;
    let width = text.len();
    for i in 0..table.len() {
        ruler(out, width, i, table.lengths[i], b'_')?;
        writeln!(out, "{text}")?;
        ruler(out, width, table.positions[i], table.lengths[i], b'*')?;
    }
    Ok(())
}

fn ruler(out: &mut impl Write, width: usize, start: usize, len: usize, mark: u8) -> Result<()> {
    let mut line = vec![b' '; width];
    for slot in line.iter_mut().skip(start).take(len) {
        *slot = mark;
    }
    out.write_all(&line)?;
    writeln!(out)?;
    Ok(())
}
