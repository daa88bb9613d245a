//! Property-based tests for the string and random helpers.

use proptest::prelude::*;
use utilkit::random::{
    RandomStringOptions, generate_random_float, generate_random_number, generate_random_string,
    random_choice, seeded_rng, shuffle_list,
};
use utilkit::strings::{
    count_words, is_palindrome, remove_whitespace, reverse_string, truncate_string,
};

/// Text mixing ASCII, accented letters, symbols and assorted whitespace.
fn text_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9éßñ€ _.,!?\t\n\u{3000}]{0,40}"
}

proptest! {
    #[test]
    fn reverse_twice_is_identity(text in any::<String>()) {
        prop_assert_eq!(reverse_string(&reverse_string(&text)), text);
    }

    #[test]
    fn count_words_counts_word_starts(text in text_strategy()) {
        let (starts, _) = text.chars().fold((0usize, true), |(starts, after_space), ch| {
            if ch.is_whitespace() {
                (starts, true)
            } else if after_space {
                (starts + 1, false)
            } else {
                (starts, false)
            }
        });
        prop_assert_eq!(count_words(&text), starts);
    }

    #[test]
    fn collapsed_whitespace_keeps_word_count(text in text_strategy()) {
        let collapsed = remove_whitespace(&text, true);
        prop_assert_eq!(count_words(&collapsed), count_words(&text));
        prop_assert!(!collapsed.starts_with(' ') && !collapsed.ends_with(' '));
        prop_assert!(!collapsed.contains("  "));
    }

    #[test]
    fn truncate_never_exceeds_max_length(
        text in text_strategy(),
        max_length in 0usize..50,
        suffix in "[.~>]{0,5}",
    ) {
        let truncated = truncate_string(&text, max_length, &suffix);
        if text.chars().count() <= max_length {
            prop_assert_eq!(truncated, text);
        } else {
            prop_assert!(truncated.chars().count() <= max_length);
        }
    }

    #[test]
    fn mirrored_text_is_palindrome(half in "[a-zA-Z0-9 ,]{0,20}") {
        let mirrored = format!("{}{}", half, reverse_string(&half));
        prop_assert!(is_palindrome(&mirrored, true));
        prop_assert!(is_palindrome(&mirrored, false));
    }

    #[test]
    fn random_string_uses_requested_alphabet(
        seed in any::<u64>(),
        length in 0usize..64,
        include_digits in any::<bool>(),
        include_special in any::<bool>(),
    ) {
        let options = RandomStringOptions { length, include_digits, include_special };
        let alphabet = options.alphabet();
        let value = generate_random_string(&mut seeded_rng(seed), &options);
        prop_assert_eq!(value.chars().count(), length);
        prop_assert!(value.bytes().all(|byte| alphabet.contains(&byte)));
    }

    #[test]
    fn random_number_respects_bounds(seed in any::<u64>(), a in any::<i64>(), b in any::<i64>()) {
        let (min, max) = if a <= b { (a, b) } else { (b, a) };
        let value = generate_random_number(&mut seeded_rng(seed), min, max).expect("valid range");
        prop_assert!(min <= value && value <= max);
    }

    #[test]
    fn random_float_accepts_any_finite_range(
        seed in any::<u64>(),
        a in any::<f64>().prop_filter("finite", |v| v.is_finite()),
        b in any::<f64>().prop_filter("finite", |v| v.is_finite()),
    ) {
        let (min, max) = if a <= b { (a, b) } else { (b, a) };
        let value = generate_random_float(&mut seeded_rng(seed), min, max).expect("finite range");
        prop_assert!(min <= value && value <= max);
    }

    #[test]
    fn shuffle_is_permutation(seed in any::<u64>(), items in prop::collection::vec(any::<i32>(), 0..32)) {
        let mut shuffled = shuffle_list(&mut seeded_rng(seed), &items);
        prop_assert_eq!(shuffled.len(), items.len());
        let mut sorted = items.clone();
        sorted.sort_unstable();
        shuffled.sort_unstable();
        prop_assert_eq!(shuffled, sorted);
    }

    #[test]
    fn random_choice_is_member_or_none(seed in any::<u64>(), items in prop::collection::vec(any::<u8>(), 0..8)) {
        match random_choice(&mut seeded_rng(seed), &items) {
            Some(picked) => prop_assert!(items.contains(&picked)),
            None => prop_assert!(items.is_empty()),
        }
    }
}
