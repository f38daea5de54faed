/// Splits trace text on `\n`, dropping a single trailing empty line.
///
/// Only one trailing empty entry is removed, so `"a\n\n"` keeps its blank
/// second line. Carriage returns are left in place.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = text.split('\n').collect();
    if lines.last() == Some(&"") {
        lines.pop();
    }
    lines
}
