/// Delimiter set used for ordinary command lines.
pub const WHITESPACE: &str = " \t\n";

/// Splits `text` on any run of delimiter characters, in order, with no
/// empty tokens. Each token is an owned copy so it outlives the source
/// line. An empty or delimiter-only input yields an empty vector.
pub fn split(text: &str, delimiters: &str) -> Vec<String> {
    text.split(|c: char| delimiters.contains(c))
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
        .collect()
}
