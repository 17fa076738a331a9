/// Alias to a scalar floating type.
///
/// NOTE: Prefer `f64` as the default floating type: switching to `f32` costs
/// precision in the evaluation log without measurable performance benefits.
pub type Float = f64;
