use std::rc::Rc;

use crate::{
    ast::{BinaryOperator, CallKind, Construct, FunctionDef, Node, Param},
    interpreter::parser::{
        core::ParseResult,
        utils::{
            Entry, exactly, expect_expression, expect_ident, expect_list, expect_param,
            expect_statement, malformed,
        },
    },
};

/// Reduces a construct and its children into a single stack entry.
///
/// This is called once per `End`, with the children in source order. The
/// construct decides the shape the children must have and the node that
/// replaces them.
///
/// # Parameters
/// - `construct`: The construct named by the popped marker.
/// - `line`: Line of the marker.
/// - `children`: Entries popped above the marker, in source order.
///
/// # Returns
/// The entry to push back onto the stack.
///
/// # Errors
/// Returns `MalformedConstruct` when the children do not fit the construct.
pub fn reduce(construct: Construct, line: usize, children: Vec<Entry>) -> ParseResult<Entry> {
    let node = match construct {
        Construct::Num => {
            let [value] = exactly::<1>(construct, line, children)?;
            match value {
                Entry::Number { value, .. } => Node::Number { value, line },
                other => {
                    return Err(malformed(construct,
                                         line,
                                         format!("expected number, found {}", other.describe())));
                },
            }
        },
        Construct::Id => {
            let [name] = exactly::<1>(construct, line, children)?;
            Node::Variable { name: expect_ident(construct, name)?,
                             line }
        },
        Construct::Plus | Construct::Minus | Construct::Mult => {
            reduce_binary(construct, line, children)?
        },
        Construct::AppFun | Construct::RunFun => reduce_call(construct, line, children)?,
        Construct::FunName => {
            let [name] = exactly::<1>(construct, line, children)?;
            Node::FunctionRef { name: expect_ident(construct, name)?,
                                line }
        },
        Construct::Decl => {
            let names = children.into_iter()
                                .map(|entry| expect_ident(construct, entry))
                                .collect::<ParseResult<Vec<_>>>()?;
            Node::Declaration { names, line }
        },
        Construct::LetBe => {
            let [name, value] = exactly::<2>(construct, line, children)?;
            Node::Assignment { name: expect_ident(construct, name)?,
                               value: Box::new(expect_expression(construct, value)?),
                               line }
        },
        Construct::Read => {
            let [name] = exactly::<1>(construct, line, children)?;
            Node::Read { name: expect_ident(construct, name)?,
                         line }
        },
        Construct::Print => {
            let [expr] = exactly::<1>(construct, line, children)?;
            Node::Print { expr: Box::new(expect_expression(construct, expr)?),
                          line }
        },
        Construct::Return => {
            let [expr] = exactly::<1>(construct, line, children)?;
            Node::Return { expr: Box::new(expect_expression(construct, expr)?),
                           line }
        },
        Construct::Func => Node::Function(Rc::new(reduce_function(line, children)?)),
        Construct::Pro => {
            let statements = children.into_iter()
                                     .map(|entry| expect_statement(construct, entry))
                                     .collect::<ParseResult<Vec<_>>>()?;
            Node::Program { statements, line }
        },
        Construct::List => {
            return Ok(Entry::List { items: children,
                                    line });
        },
        Construct::Para => {
            let [name] = exactly::<1>(construct, line, children)?;
            return Ok(Entry::Param(Param::Number { name: expect_ident(construct, name)?,
                                                   line }));
        },
    };

    Ok(Entry::Node(node))
}

/// Reduces `Plus`, `Minus`, and `Mult`.
fn reduce_binary(construct: Construct, line: usize, children: Vec<Entry>) -> ParseResult<Node> {
    let op = match construct {
        Construct::Plus => BinaryOperator::Add,
        Construct::Minus => BinaryOperator::Subtract,
        _ => BinaryOperator::Multiply,
    };
    let [left, right] = exactly::<2>(construct, line, children)?;

    Ok(Node::BinaryOp { op,
                        left: Box::new(expect_expression(construct, left)?),
                        right: Box::new(expect_expression(construct, right)?),
                        line })
}

/// Reduces `AppFun` and `RunFun`: a callee name followed by an argument list.
fn reduce_call(construct: Construct, line: usize, children: Vec<Entry>) -> ParseResult<Node> {
    let kind = if construct == Construct::AppFun {
        CallKind::Application
    } else {
        CallKind::Invocation
    };
    let [name, arguments] = exactly::<2>(construct, line, children)?;
    let name = expect_ident(construct, name)?;
    let arguments = expect_list(construct, arguments)?.into_iter()
                                                      .map(|entry| {
                                                          expect_expression(construct, entry)
                                                      })
                                                      .collect::<ParseResult<Vec<_>>>()?;

    Ok(Node::Call { kind,
                    name,
                    arguments,
                    line })
}

/// Reduces `Func`: a name, a parameter list, and a `Pro` body.
fn reduce_function(line: usize, children: Vec<Entry>) -> ParseResult<FunctionDef> {
    let construct = Construct::Func;
    let [name, params, body] = exactly::<3>(construct, line, children)?;
    let name = expect_ident(construct, name)?;
    let params = expect_list(construct, params)?.into_iter()
                                                .map(|entry| expect_param(construct, entry))
                                                .collect::<ParseResult<Vec<_>>>()?;
    let body = match body {
        Entry::Node(Node::Program { statements, .. }) => statements,
        other => {
            return Err(malformed(construct,
                                 other.line(),
                                 format!("expected 'Pro' body, found {}", other.describe())));
        },
    };

    Ok(FunctionDef { name,
                     params,
                     body,
                     line })
}
