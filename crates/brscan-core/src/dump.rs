//! Hex dump rendering for manual inspection of raw file bytes.

const COLUMN_WIDTH: usize = 16;

/// Render `data` as offset/hex/ASCII rows bracketed by BEGIN/END lines.
///
/// Each row holds a zero-padded offset, sixteen hex slots (blank past the
/// end of the data), and an ASCII column where unprintable bytes show as
/// `.`. The result is a complete printable block; the caller decides where
/// it goes.
///
/// # Examples
/// ```
/// use brscan_core::hex_dump;
///
/// let dump = hex_dump("demo", b"BR-900");
/// assert!(dump.starts_with("===== BEGIN demo\n"));
/// assert!(dump.ends_with("===== END demo\n"));
/// assert!(dump.contains("|BR-900|"));
/// ```
pub fn hex_dump(label: &str, data: &[u8]) -> String {
    let mut out = String::new();
    out.push_str(&format!("===== BEGIN {label}\n"));
    for (row, chunk) in data.chunks(COLUMN_WIDTH).enumerate() {
        out.push_str(&dump_line(row * COLUMN_WIDTH, chunk));
    }
    out.push_str(&format!("===== END {label}\n"));
    out
}

fn dump_line(offset: usize, chunk: &[u8]) -> String {
    let mut line = format!("{offset:08x}  ");
    let mut ascii = String::new();
    for slot in 0..COLUMN_WIDTH {
        match chunk.get(slot) {
            Some(&byte) => {
                line.push_str(&format!("{byte:02x} "));
                ascii.push(if is_printable(byte) { byte as char } else { '.' });
            }
            None => line.push_str("   "),
        }
    }
    line.push_str(&format!(" |{ascii}|\n"));
    line
}

fn is_printable(byte: u8) -> bool {
    (0x20..=0x7e).contains(&byte)
}
