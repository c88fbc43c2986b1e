use std::{
    cell::RefCell,
    collections::HashMap,
    fmt,
    rc::Rc,
};

use crate::{ast::FunctionDef, interpreter::value::closure::Closure};

/// Error returned by [`Frame::assign`] when no frame declares the name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AssignError;

/// How a function name is bound inside a frame.
#[derive(Clone)]
enum FunctionBinding {
    /// Defined by a `Func` executed in this frame; closes over the frame
    /// itself.
    Local(Rc<FunctionDef>),
    /// Bound to a closure from elsewhere, e.g. a `FunName` parameter.
    Captured(Closure),
}

/// The bindings owned by one frame.
struct Scope {
    /// The lexically enclosing frame, `None` for the global frame.
    access_link: Option<Frame>,
    variables:   RefCell<HashMap<String, i64>>,
    functions:   RefCell<HashMap<String, FunctionBinding>>,
    depth:       usize,
}

/// An activation record.
///
/// Frames are shared handles: the call that created a frame holds one, and so
/// does every closure defined in it. The frame is freed when the last handle
/// drops.
///
/// Local function definitions are stored without a handle to their own frame
/// and turned into closures on lookup. Captured closures always point to
/// frames older than the one holding them, so the handles never form a cycle.
#[derive(Clone)]
pub struct Frame(Rc<Scope>);

impl Frame {
    /// Creates the outermost frame.
    #[must_use]
    pub fn global() -> Self {
        Self(Rc::new(Scope { access_link: None,
                             variables:   RefCell::new(HashMap::new()),
                             functions:   RefCell::new(HashMap::new()),
                             depth:       0, }))
    }

    /// Creates a frame whose access link is `access_link`.
    #[must_use]
    pub fn child(access_link: &Self) -> Self {
        Self(Rc::new(Scope { access_link: Some(access_link.clone()),
                             variables:   RefCell::new(HashMap::new()),
                             functions:   RefCell::new(HashMap::new()),
                             depth:       access_link.depth() + 1, }))
    }

    /// Number of access links between this frame and the global frame.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.0.depth
    }

    /// Returns the lexically enclosing frame.
    #[must_use]
    pub fn access_link(&self) -> Option<&Self> {
        self.0.access_link.as_ref()
    }

    /// Tests whether both handles refer to the same frame.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Iterates over this frame and every frame reachable by access links.
    pub fn chain(&self) -> impl Iterator<Item = &Self> {
        std::iter::successors(Some(self), |frame| frame.access_link())
    }

    /// Declares a variable in this frame with value 0.
    ///
    /// A name already declared in this frame keeps its current value.
    pub fn declare(&self, name: &str) {
        self.0.variables.borrow_mut().entry(name.to_string()).or_insert(0);
    }

    /// Declares a variable in this frame and sets it to `value`.
    pub fn bind(&self, name: &str, value: i64) {
        self.0.variables.borrow_mut().insert(name.to_string(), value);
    }

    /// Looks up a variable in the nearest frame that declares it.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<i64> {
        self.chain()
            .find_map(|frame| frame.0.variables.borrow().get(name).copied())
    }

    /// Assigns to the variable in the nearest frame that declares it.
    ///
    /// Assignment never creates a binding.
    ///
    /// # Errors
    /// Returns [`AssignError`] if no frame on the chain declares `name`.
    pub fn assign(&self, name: &str, value: i64) -> Result<(), AssignError> {
        for frame in self.chain() {
            if let Some(slot) = frame.0.variables.borrow_mut().get_mut(name) {
                *slot = value;
                return Ok(());
            }
        }
        Err(AssignError)
    }

    /// Registers a function defined in this frame, replacing any earlier
    /// function of the same name.
    pub fn define_function(&self, function: Rc<FunctionDef>) {
        self.0
            .functions
            .borrow_mut()
            .insert(function.name.clone(), FunctionBinding::Local(function));
    }

    /// Binds `name` in this frame to an existing closure.
    pub fn bind_closure(&self, name: &str, closure: Closure) {
        self.0
            .functions
            .borrow_mut()
            .insert(name.to_string(), FunctionBinding::Captured(closure));
    }

    /// Resolves a function name to a closure through the access links.
    #[must_use]
    pub fn lookup_function(&self, name: &str) -> Option<Closure> {
        self.chain().find_map(|frame| {
                        frame.0
                             .functions
                             .borrow()
                             .get(name)
                             .map(|binding| binding.to_closure(frame))
                    })
    }
}

impl FunctionBinding {
    /// Materialises the binding as a closure; `owner` is the frame holding it.
    fn to_closure(&self, owner: &Frame) -> Closure {
        match self {
            Self::Local(def) => Closure::new(owner.clone(), Rc::clone(def)),
            Self::Captured(closure) => closure.clone(),
        }
    }
}

impl fmt::Debug for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut variables = self.0
                                .variables
                                .borrow()
                                .iter()
                                .map(|(k, v)| (k.clone(), *v))
                                .collect::<Vec<_>>();
        variables.sort();
        let mut functions = self.0.functions.borrow().keys().cloned().collect::<Vec<_>>();
        functions.sort();

        f.debug_struct("Frame")
         .field("depth", &self.0.depth)
         .field("variables", &variables)
         .field("functions", &functions)
         .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn function(name: &str) -> Rc<FunctionDef> {
        Rc::new(FunctionDef { name:   name.to_string(),
                              params: Vec::new(),
                              body:   Vec::new(),
                              line:   1, })
    }

    #[test]
    fn lookup_walks_access_links() {
        let global = Frame::global();
        global.declare("x");
        global.assign("x", 7).unwrap();
        let inner = Frame::child(&Frame::child(&global));

        assert_eq!(inner.lookup("x"), Some(7));
        assert_eq!(inner.lookup("y"), None);
        assert_eq!(inner.depth(), 2);
    }

    #[test]
    fn inner_declaration_shadows_outer() {
        let global = Frame::global();
        global.bind("x", 1);
        let inner = Frame::child(&global);
        inner.declare("x");
        inner.assign("x", 2).unwrap();

        assert_eq!(inner.lookup("x"), Some(2));
        assert_eq!(global.lookup("x"), Some(1));
    }

    #[test]
    fn assign_updates_nearest_declaring_frame() {
        let global = Frame::global();
        global.declare("x");
        let inner = Frame::child(&global);
        inner.assign("x", 5).unwrap();

        assert_eq!(global.lookup("x"), Some(5));
        assert_eq!(inner.assign("missing", 1), Err(AssignError));
    }

    #[test]
    fn redeclaration_keeps_value() {
        let frame = Frame::global();
        frame.bind("x", 3);
        frame.declare("x");

        assert_eq!(frame.lookup("x"), Some(3));
    }

    #[test]
    fn local_function_closes_over_defining_frame() {
        let global = Frame::global();
        let inner = Frame::child(&global);
        global.define_function(function("f"));

        let closure = inner.lookup_function("f").unwrap();
        assert!(closure.frame().ptr_eq(&global));
        assert!(inner.lookup_function("g").is_none());
    }

    #[test]
    fn later_definition_overwrites_earlier() {
        let global = Frame::global();
        let first = function("f");
        global.define_function(Rc::clone(&first));
        global.define_function(function("f"));

        let closure = global.lookup_function("f").unwrap();
        assert_ne!(closure, Closure::new(global.clone(), first));
    }

    #[test]
    fn captured_closure_keeps_frame_alive() {
        let closure = {
            let global = Frame::global();
            let call = Frame::child(&global);
            call.bind("n", 4);
            call.define_function(function("inner"));
            call.lookup_function("inner").unwrap()
        };

        assert_eq!(closure.frame().lookup("n"), Some(4));
        assert_eq!(closure.frame().depth(), 1);
    }
}
