use std::io::{self, Write};

pub const DEFAULT_TOP: usize = 10;
pub const DEFAULT_SEPARATOR: &str = "    ";

/// Writes at most `top` ranked entries as `<tld><separator><count>` lines,
/// then one blank line closing the block.
pub fn write_top<W: Write>(
    out: &mut W,
    ranked: &[(&str, u64)],
    top: usize,
    separator: &str,
) -> io::Result<()> {
    for (tld, count) in ranked.iter().take(top) {
        writeln!(out, "{}{}{}", tld, separator, count)?;
    }
    writeln!(out)?;
    Ok(())
}

/// [`write_top`] with the standard ten rows and four-space separator.
pub fn display_top_ten<W: Write>(out: &mut W, ranked: &[(&str, u64)]) -> io::Result<()> {
    write_top(out, ranked, DEFAULT_TOP, DEFAULT_SEPARATOR)
}
