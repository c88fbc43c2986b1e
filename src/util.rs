/// Stack growth for deep recursion.
///
/// The evaluator recurses once per nested node and per call. This module keeps
/// enough native stack available so that the configured call depth, not the
/// host stack, bounds recursion.
pub mod stack;
