use std::{fmt, rc::Rc};

use crate::{ast::FunctionDef, interpreter::evaluator::environment::Frame};

/// A function definition paired with the frame active at its definition.
///
/// Calling a closure creates a frame whose access link is the captured frame,
/// which makes free variables resolve lexically. Holding a closure keeps the
/// captured frame alive.
#[derive(Clone)]
pub struct Closure {
    frame:    Frame,
    function: Rc<FunctionDef>,
}

impl Closure {
    /// Creates a closure over `frame`.
    #[must_use]
    pub const fn new(frame: Frame, function: Rc<FunctionDef>) -> Self {
        Self { frame, function }
    }

    /// The frame the function was defined in.
    #[must_use]
    pub const fn frame(&self) -> &Frame {
        &self.frame
    }

    /// The function definition.
    #[must_use]
    pub fn function(&self) -> &FunctionDef {
        &self.function
    }
}

impl PartialEq for Closure {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.function, &other.function) && self.frame.ptr_eq(&other.frame)
    }
}

impl fmt::Debug for Closure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Closure")
         .field("function", &self.function.name)
         .field("frame_depth", &self.frame.depth())
         .finish()
    }
}
