/// Strip leading and trailing whitespace from a cell's text.
///
/// Covers Unicode whitespace (including non-breaking spaces) and the byte
/// order mark, which HTML exports sometimes leave at the start of a cell.
/// NEL (U+0085) is a control character here and is kept.
pub fn clean_cell(text: &str) -> String {
    text.trim_matches(is_trimmable).to_string()
}

fn is_trimmable(c: char) -> bool {
    match c {
        '\u{85}' => false,
        '\u{feff}' => true,
        _ => c.is_whitespace(),
    }
}
