//! Text formatting helpers.
//!
//! Lengths and positions are counted in `char`s (Unicode scalar values), never
//! bytes, so multi-byte input is never split mid-character. "Whitespace" is the
//! Unicode set recognized by [`char::is_whitespace`]; the ASCII separator
//! controls U+001C to U+001F are not in it and stay inside words.

/// Suffix appended by [`truncate_string_default`].
pub const DEFAULT_SUFFIX: &str = "...";

/// Capitalize every whitespace-delimited word and rejoin with single spaces.
///
/// The first character of each word is upper-cased and the rest lower-cased,
/// so `"hELLO   wORLD"` becomes `"Hello World"`. The first character takes its
/// full upper-case mapping rather than a title-case form: `"ß"` becomes `"SS"`
/// and `"ǆ"` becomes `"Ǆ"`.
pub fn capitalize_words(text: &str) -> String {
    text.split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Reverse `text` one `char` at a time.
pub fn reverse_string(text: &str) -> String {
    text.chars().rev().collect()
}

/// Truncate `text` to at most `max_length` chars, ending in `suffix`.
///
/// Text that already fits is returned unchanged. When `max_length` is shorter
/// than `suffix` there is no room for any of `text`, and the suffix itself is
/// cut to `max_length` chars.
pub fn truncate_string(text: &str, max_length: usize, suffix: &str) -> String {
    if text.chars().count() <= max_length {
        return text.to_string();
    }

    let suffix_len = suffix.chars().count();
    if max_length < suffix_len {
        return suffix.chars().take(max_length).collect();
    }

    let mut truncated: String = text.chars().take(max_length - suffix_len).collect();
    truncated.push_str(suffix);
    truncated
}

/// [`truncate_string`] with [`DEFAULT_SUFFIX`].
pub fn truncate_string_default(text: &str, max_length: usize) -> String {
    truncate_string(text, max_length, DEFAULT_SUFFIX)
}

/// Number of whitespace-delimited words in `text`.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Strip whitespace from `text`.
///
/// With `preserve_single_space`, every whitespace run collapses to one space
/// and the ends are trimmed. Otherwise all whitespace is dropped.
pub fn remove_whitespace(text: &str, preserve_single_space: bool) -> String {
    if preserve_single_space {
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    } else {
        text.chars().filter(|ch| !ch.is_whitespace()).collect()
    }
}

/// Whether the alphanumeric characters of `text` read the same both ways.
///
/// Punctuation and whitespace are ignored. Unless `case_sensitive` is set,
/// characters are lower-cased before comparing. Text with no alphanumeric
/// characters counts as a palindrome.
pub fn is_palindrome(text: &str, case_sensitive: bool) -> bool {
    let cleaned: Vec<char> = if case_sensitive {
        text.chars().filter(|ch| ch.is_alphanumeric()).collect()
    } else {
        text.chars()
            .flat_map(char::to_lowercase)
            .filter(|ch| ch.is_alphanumeric())
            .collect()
    };
    cleaned.iter().eq(cleaned.iter().rev())
}

/// Convert `snake_case` to `camelCase`.
///
/// The first segment is kept as-is; each later segment is capitalized the
/// same way as [`capitalize_words`], so `"a_ß_b"` becomes `"aSSB"`.
/// Empty segments from repeated underscores are skipped.
pub fn snake_to_camel(text: &str) -> String {
    let mut segments = text.split('_');
    let mut camel = segments.next().unwrap_or_default().to_string();
    for segment in segments.filter(|segment| !segment.is_empty()) {
        camel.push_str(&capitalize(segment));
    }
    camel
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
