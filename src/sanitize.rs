//! Search key normalization

/// Word characters are Unicode alphanumerics plus underscore.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Strip everything that is neither a word character nor whitespace,
/// lowercase what remains and trim the ends.
///
/// `"Hello·World!"` becomes `"helloworld"`. The result may be empty.
pub fn sanitize_word(word: &str) -> String {
    // Lowercasing can emit combining marks (e.g. 'İ'), so filter afterwards.
    let kept: String = word
        .to_lowercase()
        .chars()
        .filter(|&c| is_word_char(c) || c.is_whitespace())
        .collect();

    kept.trim().to_string()
}
