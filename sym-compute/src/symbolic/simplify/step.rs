/// Possible simplification steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// `2 + 3 = 5`
    /// `sin(0) = 0`
    FoldConstants,

    /// `-(-a) = a`
    DoubleNegation,

    /// `0+a = a`
    /// `a+0 = a`
    AddZero,

    /// `a-0 = a`
    SubtractZero,

    /// `a-a = 0`
    SubtractSelf,

    /// `0*a = 0`
    /// `a*0 = 0`
    MultiplyZero,

    /// `1*a = a`
    /// `a*1 = a`
    MultiplyOne,

    /// `0/a = 0`
    DivideZero,

    /// `a/1 = a`
    DivideOne,

    /// `a/a = 1`
    DivideSelf,

    /// `a+a = 2a`
    /// `2a+3a-a = 4a`
    /// etc.
    CombineLikeTerms,

    /// `a*a = a^2`
    /// `a*a^b = a^(b+1)`
    /// `a^b*a^c = a^(b+c)`
    CombineLikeFactors,

    /// `a^0 = 1`
    PowerZero,

    /// `a^1 = a`
    PowerOne,

    /// `0^a = 0`
    PowerZeroLeft,

    /// `1^a = 1`
    PowerOneLeft,
}
