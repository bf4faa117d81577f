const ONES: [&str; 10] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine",
];
const TEENS: [&str; 10] = [
    "Ten", "Eleven", "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen",
    "Eighteen", "Nineteen",
];
const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];
const MAGNITUDES: [&str; 4] = ["", "Thousand", "Million", "Billion"];

/// Render `n` as English words, e.g. `123` -> `"One Hundred Twenty Three"`.
///
/// Only the units, thousands, millions, and billions groups are rendered;
/// higher base-1000 groups are dropped. No "and" is ever inserted.
pub fn to_words(n: u64) -> String {
    let mut rest = n;
    let mut groups: Vec<String> = Vec::new();

    for magnitude in MAGNITUDES {
        let chunk = (rest % 1000) as usize;
        rest /= 1000;
        if chunk == 0 {
            continue;
        }
        let mut words = chunk_words(chunk);
        if !magnitude.is_empty() {
            words.push(magnitude);
        }
        groups.push(words.join(" "));
    }

    if groups.is_empty() {
        return "Zero".to_string();
    }
    groups.reverse();
    groups.join(" ")
}

/// Words for a single group in `1..=999`, without its magnitude.
fn chunk_words(chunk: usize) -> Vec<&'static str> {
    let mut words = Vec::with_capacity(4);
    let hundred = chunk / 100;
    let remainder = chunk % 100;

    if hundred > 0 {
        words.push(ONES[hundred]);
        words.push("Hundred");
    }

    if (10..=19).contains(&remainder) {
        words.push(TEENS[remainder - 10]);
    } else {
        let ten = remainder / 10;
        let one = remainder % 10;
        if ten > 0 {
            words.push(TENS[ten]);
        }
        if one > 0 {
            words.push(ONES[one]);
        }
    }
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero() {
        assert_eq!(to_words(0), "Zero");
    }

    #[test]
    fn small_numbers() {
        assert_eq!(to_words(6), "Six");
        assert_eq!(to_words(13), "Thirteen");
        assert_eq!(to_words(20), "Twenty");
        assert_eq!(to_words(23), "Twenty Three");
        assert_eq!(to_words(99), "Ninety Nine");
    }

    #[test]
    fn hundreds_have_no_conjunction() {
        assert_eq!(to_words(100), "One Hundred");
        assert_eq!(to_words(105), "One Hundred Five");
        assert_eq!(to_words(119), "One Hundred Nineteen");
        assert_eq!(to_words(123), "One Hundred Twenty Three");
    }

    #[test]
    fn magnitudes() {
        assert_eq!(to_words(1000), "One Thousand");
        assert_eq!(to_words(1994), "One Thousand Nine Hundred Ninety Four");
        assert_eq!(to_words(1_000_001), "One Million One");
        assert_eq!(
            to_words(12_345_678),
            "Twelve Million Three Hundred Forty Five Thousand Six Hundred Seventy Eight"
        );
        assert_eq!(
            to_words(2_000_500_000),
            "Two Billion Five Hundred Thousand"
        );
    }

    #[test]
    fn zero_groups_are_omitted() {
        assert_eq!(to_words(1_000_000), "One Million");
        assert_eq!(to_words(1_000_010), "One Million Ten");
    }

    #[test]
    fn groups_beyond_billions_are_dropped() {
        assert_eq!(to_words(1_000_000_000_007), "Seven");
        assert_eq!(to_words(5_000_000_000_000), "Zero");
        assert_eq!(to_words(999_999_999_999), to_words(999_999_999_999 + 3_000_000_000_000));
    }
}
