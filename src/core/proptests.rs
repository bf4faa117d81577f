use crate::core::processing::evaluate::evaluate;
use crate::core::processing::pipeline::{INVALID_INPUT_FORMAT, process};
use crate::core::processing::sanitize::sanitize;
use crate::core::processing::words::to_words;
use crate::types::Operator;
use proptest::prelude::*;

// Property: sanitizing twice is the same as sanitizing once
proptest! {
    #[test]
    fn prop_sanitize_idempotent(s in "\\PC*") {
        let once = sanitize(&s);
        prop_assert_eq!(sanitize(&once), once);
    }
}

// Property: subtraction never produces a negative value
proptest! {
    #[test]
    fn prop_subtraction_non_negative(a in any::<i64>(), b in any::<i64>()) {
        prop_assert!(evaluate(a, b, Operator::Sub) >= 0);
    }
}

proptest! {
    #[test]
    fn prop_division_by_zero_is_zero(a in any::<i64>()) {
        prop_assert_eq!(evaluate(a, 0, Operator::Div), 0);
    }
}

// Property: rendered words hold no digits and no "and" conjunction
proptest! {
    #[test]
    fn prop_words_are_digit_free(n in 1u64..=999_999_999) {
        let words = to_words(n);
        prop_assert!(!words.is_empty());
        prop_assert!(!words.chars().any(|c| c.is_ascii_digit()));
        prop_assert!(!words.split(' ').any(|w| w.eq_ignore_ascii_case("and")));
        prop_assert!(!words.contains("  "));
    }
}

// Property: the pipeline always yields a non-empty single line
proptest! {
    #[test]
    fn prop_process_never_empty(s in "\\PC*") {
        let out = process(&s);
        prop_assert!(!out.is_empty());
        prop_assert!(!out.contains('\n'));
        if sanitize(&s).split_whitespace().count() != 3 {
            prop_assert_eq!(out, INVALID_INPUT_FORMAT);
        }
    }
}
