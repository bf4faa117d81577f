use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::processing::evaluate::evaluate;
use crate::core::processing::roman::decode;
use crate::core::processing::sanitize::sanitize;
use crate::core::processing::words::to_words;
use crate::types::Operator;

/// Diagnostic emitted for lines that do not split into exactly three fields.
pub const INVALID_INPUT_FORMAT: &str = "Invalid input format";

/// A sanitized line split into `<token> <operator> <token>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine<'a> {
    pub left: &'a str,
    pub operator: Operator,
    pub right: &'a str,
}

impl<'a> ParsedLine<'a> {
    /// Split on whitespace; `None` unless there are exactly three fields.
    pub fn parse(sanitized: &'a str) -> Option<Self> {
        let mut fields = sanitized.split_whitespace();
        match (fields.next(), fields.next(), fields.next(), fields.next()) {
            (Some(left), Some(op), Some(right), None) => Some(Self {
                left,
                operator: Operator::from_token(op),
                right,
            }),
            _ => None,
        }
    }
}

/// Everything computed for one input line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineOutcome {
    pub input: String,
    pub sanitized: String,
    pub operands: Option<(i64, i64)>,
    pub operator: Option<Operator>,
    pub value: Option<i64>,
    pub words: String,
}

impl LineOutcome {
    pub fn is_valid(&self) -> bool {
        self.value.is_some()
    }
}

pub fn process_line(line: &str) -> LineOutcome {
    let sanitized = sanitize(line);

    let Some(parsed) = ParsedLine::parse(&sanitized) else {
        debug!("Rejected line shape: {:?}", line);
        return LineOutcome {
            input: line.to_string(),
            operands: None,
            operator: None,
            value: None,
            words: INVALID_INPUT_FORMAT.to_string(),
            sanitized,
        };
    };

    let a = decode(parsed.left);
    let b = decode(parsed.right);
    let value = evaluate(a, b, parsed.operator);
    debug!("{} {} {} = {}", a, parsed.operator, b, value);
    let words = to_words(u64::try_from(value).unwrap_or(0));
    let operator = parsed.operator;

    LineOutcome {
        input: line.to_string(),
        operands: Some((a, b)),
        operator: Some(operator),
        value: Some(value),
        words,
        sanitized,
    }
}

/// Evaluate one raw line to its output string.
pub fn process(line: &str) -> String {
    process_line(line).words
}

/// Evaluate every line in order, one output per input.
pub fn process_lines<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines.into_iter().map(|l| process(l.as_ref())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adds_two_numerals() {
        assert_eq!(process("XIV + IX"), "Twenty Three");
    }

    #[test]
    fn matches_the_composed_stages() {
        let expected = to_words(evaluate(decode("III"), decode("II"), Operator::Mul) as u64);
        assert_eq!(process("III * II"), expected);
        assert_eq!(expected, "Six");
    }

    #[test]
    fn subtraction_and_division() {
        assert_eq!(process("V - X"), "Five");
        assert_eq!(process("MCMXCIV / X"), "One Hundred Ninety Nine");
        assert_eq!(process("X / N"), "Zero");
    }

    #[test]
    fn noise_is_sanitized_away() {
        assert_eq!(process("  XIV + IX!\r\n"), "Twenty Three");
        assert_eq!(process("X, * X."), "One Hundred");
    }

    #[test]
    fn wrong_field_count_is_invalid() {
        assert_eq!(process("not three tokens here extra"), INVALID_INPUT_FORMAT);
        assert_eq!(process("XIV +"), INVALID_INPUT_FORMAT);
        assert_eq!(process("XIV+IX"), INVALID_INPUT_FORMAT);
        assert_eq!(process("   "), INVALID_INPUT_FORMAT);
        assert_eq!(process(""), INVALID_INPUT_FORMAT);
    }

    #[test]
    fn unknown_operator_renders_zero() {
        assert_eq!(process("X % V"), INVALID_INPUT_FORMAT);
        assert_eq!(process("X x V"), "Zero");
        assert_eq!(process("X ++ V"), "Zero");
    }

    #[test]
    fn outcome_exposes_intermediate_values() {
        let outcome = process_line("XIV - IX");
        assert!(outcome.is_valid());
        assert_eq!(outcome.sanitized, "XIV - IX");
        assert_eq!(outcome.operands, Some((14, 9)));
        assert_eq!(outcome.operator, Some(Operator::Sub));
        assert_eq!(outcome.value, Some(5));
        assert_eq!(outcome.words, "Five");
    }

    #[test]
    fn invalid_outcome_has_no_value() {
        let outcome = process_line("hello");
        assert!(!outcome.is_valid());
        assert_eq!(outcome.operands, None);
        assert_eq!(outcome.words, INVALID_INPUT_FORMAT);
    }

    #[test]
    fn processes_lines_in_order() {
        let out = process_lines(["I + I", "bad", "M * M"]);
        assert_eq!(out, vec!["Two", INVALID_INPUT_FORMAT, "One Million"]);
    }
}
