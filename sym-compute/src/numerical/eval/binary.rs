use sym_parser::ast::BinaryOp;

/// Applies a binary operation to evaluated operands, with IEEE 754 semantics.
pub(crate) fn eval_binary(op: BinaryOp, lhs: f64, rhs: f64) -> f64 {
    match op {
        BinaryOp::Add => lhs + rhs,
        BinaryOp::Subtract => lhs - rhs,
        BinaryOp::Multiply => lhs * rhs,
        BinaryOp::Divide => lhs / rhs,
        BinaryOp::Power => lhs.powf(rhs),
        BinaryOp::Modulo => lhs % rhs,
        BinaryOp::LogBase => lhs.ln() / rhs.ln(),
    }
}
