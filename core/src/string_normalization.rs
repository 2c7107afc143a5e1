use unidecode::unidecode;

/// Folds an artist name for comparison: ASCII transliteration, lowercase,
/// collapsed whitespace.
pub fn clean_str(input: &str) -> String {
    unidecode(input)
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join(" ")
}
