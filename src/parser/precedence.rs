use crate::util::BinaryOperator;

/// Loosest binary precedence level; where parsing of an expression
/// starts.
pub const MIN_PRECEDENCE: u8 = 1;

/// Tightest binary precedence level. Operands at this level are
/// primaries.
pub const MAX_PRECEDENCE: u8 = 2;

#[rustfmt::skip]
/// Return the binary precedence of the specified operator. Higher
/// binds tighter. All operators are left-associative.
pub fn get_binary_precedence(op: BinaryOperator) -> u8 {
    match op {
        BinaryOperator::Add                 // a + b
        | BinaryOperator::Sub => 1,         // a - b

        BinaryOperator::Mul                 // a * b
        | BinaryOperator::Div => 2,         // a / b
    }
}
