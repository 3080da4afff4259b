use alloc::string::String;
use core::fmt::Write as _;

const BYTES_PER_LINE: usize = 16;

/// Format bytes as uppercase hex, 16 per line, each followed by a space.
///
/// Meant for eyeballing header fields while debugging.
pub fn hexdump(data: &[u8]) -> String {
    let mut dump = String::with_capacity(data.len() * 3 + data.len() / BYTES_PER_LINE);
    for (i, byte) in data.iter().enumerate() {
        if i > 0 && i % BYTES_PER_LINE == 0 {
            dump.push('\n');
        }
        let _ = write!(dump, "{byte:02X} ");
    }
    dump
}
