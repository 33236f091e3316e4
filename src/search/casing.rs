/// Upper, lower and title-case forms of a query, in that order.
///
/// This is the whole of the "case-insensitive" matching: other mixed-case
/// spellings in the corpus are not found.
pub fn case_variants(query: &str) -> [String; 3] {
    let lower = query.to_lowercase();
    [query.to_uppercase(), title_case(&lower), lower]
}

/// Capitalises every letter that starts a word.
///
/// A word starts after a separator: ASCII characters other than letters,
/// digits and `_`, and non-ASCII whitespace. So `o'er` becomes `O'Er` while
/// `o’er` (typographic apostrophe) is left as `O’er`.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev = ' ';
    for c in text.chars() {
        if is_separator(prev) {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        prev = c;
    }
    out
}

fn is_separator(c: char) -> bool {
    if c.is_ascii() {
        return !(c.is_ascii_alphanumeric() || c == '_');
    }
    if c.is_alphanumeric() {
        return false;
    }
    c.is_whitespace()
}
