/// Truncates `line` at a comment marker. `#` opens a comment only when it
/// is the first character or follows a space; anywhere else it is ordinary
/// text, so `a#b` stays intact.
pub fn strip_comment(line: &str) -> &str {
    let bytes = line.as_bytes();
    for (i, &byte) in bytes.iter().enumerate() {
        if byte == b'#' && (i == 0 || bytes[i - 1] == b' ') {
            return &line[..i];
        }
    }
    line
}

/// Prepares a raw line for tokenization: trim, drop any comment, trim again.
pub fn sanitize(raw: &str) -> &str {
    strip_comment(raw.trim()).trim()
}
