use std::{fmt, rc::Rc};

/// A construct keyword of the program notation.
///
/// Every composite construct in a Mini program is opened by one of these
/// keywords and closed by a matching `End`. The keyword decides which node the
/// tree builder produces when the `End` is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Construct {
    /// `Decl`: variable declaration list.
    Decl,
    /// `Para`: numeric function parameter.
    Para,
    /// `Num`: numeric literal.
    Num,
    /// `Id`: variable reference.
    Id,
    /// `AppFun`: function application.
    AppFun,
    /// `Plus`: addition.
    Plus,
    /// `Minus`: subtraction.
    Minus,
    /// `Mult`: multiplication.
    Mult,
    /// `List`: argument or parameter list.
    List,
    /// `Func`: function definition.
    Func,
    /// `LetBe`: assignment.
    LetBe,
    /// `RunFun`: named function invocation.
    RunFun,
    /// `Return`: return statement.
    Return,
    /// `Read`: read a number from the input stream.
    Read,
    /// `Print`: append a number to the output.
    Print,
    /// `Pro`: program or function body.
    Pro,
    /// `FunName`: a function name used as a value.
    FunName,
}

/// The broad category of a construct.
///
/// Derived from the tens digit of [`Construct::code`], never stored on its
/// own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Declarations (`Decl`).
    Declaration,
    /// Parameters (`Para`).
    Parameter,
    /// Expressions (`Num`, `Id`, `AppFun`, arithmetic).
    Expression,
    /// Argument and parameter lists (`List`).
    List,
    /// Function definitions (`Func`).
    Function,
    /// Statements (`LetBe`, `RunFun`, `Return`, `Read`, `Print`).
    Statement,
    /// Statement sequences (`Pro`).
    Program,
    /// Function names used as values (`FunName`).
    FunctionName,
}

impl Construct {
    /// All constructs, in code order.
    pub const ALL: [Self; 17] = [Self::Decl,
                                 Self::Para,
                                 Self::Num,
                                 Self::Id,
                                 Self::AppFun,
                                 Self::Plus,
                                 Self::Minus,
                                 Self::Mult,
                                 Self::List,
                                 Self::Func,
                                 Self::LetBe,
                                 Self::RunFun,
                                 Self::Return,
                                 Self::Read,
                                 Self::Print,
                                 Self::Pro,
                                 Self::FunName];

    /// Returns the keyword that opens this construct in source.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Decl => "Decl",
            Self::Para => "Para",
            Self::Num => "Num",
            Self::Id => "Id",
            Self::AppFun => "AppFun",
            Self::Plus => "Plus",
            Self::Minus => "Minus",
            Self::Mult => "Mult",
            Self::List => "List",
            Self::Func => "Func",
            Self::LetBe => "LetBe",
            Self::RunFun => "RunFun",
            Self::Return => "Return",
            Self::Read => "Read",
            Self::Print => "Print",
            Self::Pro => "Pro",
            Self::FunName => "FunName",
        }
    }

    /// Returns the stable numeric code of this construct.
    ///
    /// The tens digit of the code identifies the category; `FunName` uses 101
    /// so that its category is 10.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Decl => 11,
            Self::Para => 21,
            Self::Num => 31,
            Self::Id => 32,
            Self::AppFun => 33,
            Self::Plus => 34,
            Self::Minus => 35,
            Self::Mult => 36,
            Self::List => 41,
            Self::Func => 51,
            Self::LetBe => 61,
            Self::RunFun => 62,
            Self::Return => 63,
            Self::Read => 64,
            Self::Print => 65,
            Self::Pro => 71,
            Self::FunName => 101,
        }
    }

    /// Returns the category this construct belongs to.
    ///
    /// ## Example
    /// ```
    /// use mini::ast::{Category, Construct};
    ///
    /// assert_eq!(Construct::Plus.category(), Category::Expression);
    /// assert_eq!(Construct::FunName.category(), Category::FunctionName);
    /// ```
    #[must_use]
    pub const fn category(self) -> Category {
        match self.code() / 10 {
            1 => Category::Declaration,
            2 => Category::Parameter,
            3 => Category::Expression,
            4 => Category::List,
            5 => Category::Function,
            6 => Category::Statement,
            7 => Category::Program,
            _ => Category::FunctionName,
        }
    }
}

impl fmt::Display for Construct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `Plus`
    Add,
    /// `Minus`
    Subtract,
    /// `Mult`
    Multiply,
}

impl BinaryOperator {
    /// Returns the construct this operator is written with.
    #[must_use]
    pub const fn construct(self) -> Construct {
        match self {
            Self::Add => Construct::Plus,
            Self::Subtract => Construct::Minus,
            Self::Multiply => Construct::Mult,
        }
    }
}

/// Distinguishes the two call constructs.
///
/// Both evaluate identically; the distinction is kept so that the tree
/// reports the construct it was written with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallKind {
    /// `AppFun`, a call used as a value.
    Application,
    /// `RunFun`, a call used as a statement.
    Invocation,
}

/// A function parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Param {
    /// Bound to the evaluated number of its argument.
    Number {
        /// Parameter name.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// Bound to the closure of its argument (`FunName` parameter).
    Function {
        /// Parameter name.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
}

impl Param {
    /// Gets the parameter name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Number { name, .. } | Self::Function { name, .. } => name,
        }
    }
}

/// A function definition (`Func`).
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    /// Name the function is registered under.
    pub name:   String,
    /// Parameters, in declaration order.
    pub params: Vec<Param>,
    /// Statements of the body.
    pub body:   Vec<Node>,
    /// Line number in the source code.
    pub line:   usize,
}

/// A reduced node of the abstract syntax tree.
///
/// Nodes are built once by the tree builder and never mutated afterwards.
/// Values computed during evaluation are returned rather than cached on the
/// node, so evaluating a node twice cannot disturb its siblings.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Numeric literal (`Num n End`, or a bare number in expression position).
    Number {
        /// The constant value.
        value: i64,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name (`Id x End`).
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// Arithmetic on two operands.
    BinaryOp {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand, evaluated first.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// Function call (`AppFun` or `RunFun`).
    Call {
        /// Which construct the call was written with.
        kind:      CallKind,
        /// Name of the function being called.
        name:      String,
        /// Argument expressions.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// A function name used as a value (`FunName f End`).
    FunctionRef {
        /// Name of the function.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// Variable declarations (`Decl a b End`).
    Declaration {
        /// Declared names.
        names: Vec<String>,
        /// Line number in the source code.
        line:  usize,
    },
    /// Assignment to an already declared variable (`LetBe`).
    Assignment {
        /// Target variable.
        name:  String,
        /// Assigned expression.
        value: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reads the next input number into a variable.
    Read {
        /// Target variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// Appends a value to the output.
    Print {
        /// Printed expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// Ends the enclosing statement sequence with a result.
    Return {
        /// Returned expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// Function definition.
    Function(Rc<FunctionDef>),
    /// Statement sequence (`Pro`).
    Program {
        /// Statements, in execution order.
        statements: Vec<Self>,
        /// Line number in the source code.
        line:       usize,
    },
}

impl Node {
    /// Returns the construct this node was reduced from.
    ///
    /// Bare numbers in expression position report `Num`.
    #[must_use]
    pub const fn construct(&self) -> Construct {
        match self {
            Self::Number { .. } => Construct::Num,
            Self::Variable { .. } => Construct::Id,
            Self::BinaryOp { op, .. } => op.construct(),
            Self::Call { kind: CallKind::Application,
                         .. } => Construct::AppFun,
            Self::Call { kind: CallKind::Invocation,
                         .. } => Construct::RunFun,
            Self::FunctionRef { .. } => Construct::FunName,
            Self::Declaration { .. } => Construct::Decl,
            Self::Assignment { .. } => Construct::LetBe,
            Self::Read { .. } => Construct::Read,
            Self::Print { .. } => Construct::Print,
            Self::Return { .. } => Construct::Return,
            Self::Function(_) => Construct::Func,
            Self::Program { .. } => Construct::Pro,
        }
    }

    /// Returns the category of the node's construct.
    #[must_use]
    pub const fn category(&self) -> Category {
        self.construct().category()
    }

    /// Returns how many children the node was reduced from.
    ///
    /// Calls and function definitions count their `List` as one child, and
    /// a function body counts as one child.
    ///
    /// ## Example
    /// ```
    /// use mini::parse;
    ///
    /// let root = parse("Pro Decl x End Print Plus Num 3 End Num 4 End End End End").unwrap();
    /// assert_eq!(root.child_count(), 2);
    /// ```
    #[must_use]
    pub fn child_count(&self) -> usize {
        match self {
            Self::Number { .. }
            | Self::Variable { .. }
            | Self::FunctionRef { .. }
            | Self::Read { .. }
            | Self::Print { .. }
            | Self::Return { .. } => 1,
            Self::BinaryOp { .. } | Self::Call { .. } | Self::Assignment { .. } => 2,
            Self::Function(_) => 3,
            Self::Declaration { names, .. } => names.len(),
            Self::Program { statements, .. } => statements.len(),
        }
    }

    /// Gets the line number from `self`.
    #[must_use]
    pub fn line_number(&self) -> usize {
        match self {
            Self::Number { line, .. }
            | Self::Variable { line, .. }
            | Self::BinaryOp { line, .. }
            | Self::Call { line, .. }
            | Self::FunctionRef { line, .. }
            | Self::Declaration { line, .. }
            | Self::Assignment { line, .. }
            | Self::Read { line, .. }
            | Self::Print { line, .. }
            | Self::Return { line, .. }
            | Self::Program { line, .. } => *line,
            Self::Function(def) => def.line,
        }
    }

    /// Tests whether the node may appear where a value is expected.
    #[must_use]
    pub const fn is_expression(&self) -> bool {
        matches!(self,
                 Self::Number { .. }
                 | Self::Variable { .. }
                 | Self::BinaryOp { .. }
                 | Self::Call { .. }
                 | Self::FunctionRef { .. })
    }
}
