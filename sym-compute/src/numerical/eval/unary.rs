use crate::{
    funcs::{combinatoric::Factorial, miscellaneous::Sign},
    numerical::ctxt::IntegerMode,
};
use sym_error::Error;
use sym_parser::ast::UnaryOp;

/// Applies a unary operation to an evaluated operand.
pub(crate) fn eval_unary(op: UnaryOp, x: f64, mode: IntegerMode) -> Result<f64, Error> {
    Ok(match op {
        UnaryOp::Negate => -x,
        UnaryOp::Sin => x.sin(),
        UnaryOp::Cos => x.cos(),
        UnaryOp::Tan => x.tan(),
        UnaryOp::Asin => x.asin(),
        UnaryOp::Acos => x.acos(),
        UnaryOp::Atan => x.atan(),
        UnaryOp::Sinh => x.sinh(),
        UnaryOp::Cosh => x.cosh(),
        UnaryOp::Tanh => x.tanh(),
        UnaryOp::Exp => x.exp(),
        UnaryOp::Ln => x.ln(),
        UnaryOp::Log10 => x.log10(),
        UnaryOp::Sqrt => x.sqrt(),
        UnaryOp::Abs => x.abs(),
        UnaryOp::Floor => x.floor(),
        UnaryOp::Ceiling => x.ceil(),
        UnaryOp::Round => x.round(),
        UnaryOp::Sign => Sign::eval_static(x),
        UnaryOp::Factorial => return Factorial::eval_static(x, mode),
    })
}
