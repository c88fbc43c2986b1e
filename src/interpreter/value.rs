/// Closure values.
///
/// Defines the `Closure` type pairing a function definition with the frame it
/// was defined in.
pub mod closure;

pub mod core;
