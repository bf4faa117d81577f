use crate::types::Operator;

/// Apply `op` to `a` and `b`.
///
/// Subtraction yields the absolute difference. Division truncates and a zero
/// divisor yields 0. Unknown operators and overflowing results also yield 0.
pub fn evaluate(a: i64, b: i64, op: Operator) -> i64 {
    let result = match op {
        Operator::Add => a.checked_add(b),
        Operator::Sub => a.checked_sub(b).and_then(i64::checked_abs),
        Operator::Mul => a.checked_mul(b),
        Operator::Div => a.checked_div(b),
        Operator::Unknown(_) => None,
    };
    result.unwrap_or(0)
}
