/// Value of a single Roman symbol; anything outside the classical seven is 0.
pub fn symbol_value(symbol: char) -> i64 {
    match symbol {
        'I' => 1,
        'V' => 5,
        'X' => 10,
        'L' => 50,
        'C' => 100,
        'D' => 500,
        'M' => 1000,
        _ => 0,
    }
}

/// Decode a Roman-numeral token.
///
/// Scans right to left: a symbol smaller than the one seen just before it is
/// subtracted, otherwise added. Malformed numerals such as `IIX` are not
/// rejected; they get whatever value the rule yields.
pub fn decode(token: &str) -> i64 {
    let mut total: i64 = 0;
    let mut prev = 0;
    for value in token.chars().rev().map(symbol_value) {
        if value < prev {
            total = total.saturating_sub(value);
        } else {
            total = total.saturating_add(value);
        }
        prev = value;
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_standard_numerals() {
        assert_eq!(decode("I"), 1);
        assert_eq!(decode("IX"), 9);
        assert_eq!(decode("XIV"), 14);
        assert_eq!(decode("XL"), 40);
        assert_eq!(decode("MCMXCIV"), 1994);
        assert_eq!(decode("MMMCMXCIX"), 3999);
    }

    #[test]
    fn empty_token_is_zero() {
        assert_eq!(decode(""), 0);
    }

    #[test]
    fn unknown_symbols_count_zero() {
        assert_eq!(decode("ABZ"), 0);
        assert_eq!(decode("xiv"), 0);
        assert_eq!(decode("X7V"), 15);
    }

    #[test]
    fn malformed_numerals_follow_the_scan_rule() {
        // X(+10) I(-1) I(+1)
        assert_eq!(decode("IIX"), 10);
        assert_eq!(decode("IIII"), 4);
        assert_eq!(decode("VX"), 5);
    }

    #[test]
    fn zero_symbol_resets_the_comparison() {
        // V(+5) ?(+0) I(+1)
        assert_eq!(decode("I?V"), 6);
    }
}
