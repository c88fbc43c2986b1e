use std::{fs, path::Path};

use mini::{
    Config, Error,
    ast::{Category, Construct, Node},
    error::{ParseError, RuntimeError},
    interpreter::evaluator::{core::Context, input::InputStream},
    parse, run, run_with_config,
};
use pretty_assertions::assert_eq;
use walkdir::WalkDir;

#[test]
fn program_fixtures_work() {
    let mut count = 0;

    for entry in WalkDir::new("tests/programs").into_iter()
                                               .filter_map(Result::ok)
                                               .filter(|e| {
                                                   e.path()
                                                    .extension()
                                                    .is_some_and(|ext| ext == "mini")
                                               })
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let input = read_sibling(path, "in").unwrap_or_default();
        let expected = read_sibling(path, "out").unwrap_or_else(|| {
                                                    panic!("Missing expected output for {path:?}")
                                                })
                                                .split_whitespace()
                                                .map(|v| v.parse::<i64>().unwrap())
                                                .collect::<Vec<_>>();

        count += 1;
        match run(&source, &input) {
            Ok(output) => assert_eq!(output, expected, "output of {path:?}"),
            Err(e) => panic!("Program {path:?} failed:\n{source}\nError: {e}"),
        }
    }

    assert!(count > 0, "No programs found in tests/programs");
}

fn read_sibling(path: &Path, extension: &str) -> Option<String> {
    fs::read_to_string(path.with_extension(extension)).ok()
}

fn assert_output(src: &str, input: &str, expected: &[i64]) {
    match run(src, input) {
        Ok(output) => assert_eq!(output, expected),
        Err(e) => panic!("Program failed: {e}"),
    }
}

fn runtime_error(src: &str, input: &str) -> RuntimeError {
    match run(src, input) {
        Err(Error::Runtime(e)) => e,
        Err(Error::Parse(e)) => panic!("Program failed to parse: {e}"),
        Ok(output) => panic!("Program succeeded with {output:?} but was expected to fail"),
    }
}

fn parse_error(src: &str) -> ParseError {
    match parse(src) {
        Err(e) => e,
        Ok(root) => panic!("Program parsed to {root:?} but was expected to fail"),
    }
}

#[test]
fn parsing_is_deterministic() {
    let src = fs::read_to_string("tests/programs/factorial_chain.mini").unwrap();
    let first = parse(&src).unwrap();
    let second = parse(&src).unwrap();

    assert_eq!(first.construct(), Construct::Pro);
    assert_eq!(first.child_count(), 7);
    assert_eq!(first, second);
}

#[test]
fn reduction_builds_typed_nodes() {
    let root = parse("Pro Decl a b End LetBe a Plus Num 1 End Id b End End End End").unwrap();
    let Node::Program { statements, .. } = &root else {
        panic!("expected a program, got {root:?}");
    };

    assert_eq!(statements[0],
               Node::Declaration { names: vec!["a".to_string(), "b".to_string()],
                                   line:  1, });
    assert_eq!(statements[1].construct(), Construct::LetBe);
    assert_eq!(statements[1].category(), Category::Statement);
    assert_eq!(statements[1].child_count(), 2);
}

#[test]
fn nodes_carry_source_lines() {
    let root = parse("Pro\n  Print Num 1 End End\n  Print\n    Id x End End\nEnd").unwrap();
    let Node::Program { statements, .. } = root else {
        panic!("expected a program");
    };

    assert_eq!(statements[0].line_number(), 2);
    assert_eq!(statements[1].line_number(), 3);
}

#[test]
fn keywords_need_exact_match() {
    let root = parse("Pro Decl Plusx 12ab End End").unwrap();
    let Node::Program { statements, .. } = root else {
        panic!("expected a program");
    };

    assert_eq!(statements[0],
               Node::Declaration { names: vec!["Plusx".to_string(), "12ab".to_string()],
                                   line:  1, });
}

#[test]
fn any_whitespace_separates_tokens() {
    assert_output("Pro\x0bPrint Num 1 End End End", "", &[1]);
    assert_output("Pro\u{a0}Print\u{2003}Num 2 End End End", "", &[2]);
    assert_output("Pro\r\n\tPrint Num 3 End\r\nEnd End", "", &[3]);
}

#[test]
fn every_keyword_opens_its_construct() {
    for construct in Construct::ALL {
        assert_eq!(parse_error(construct.keyword()),
                   ParseError::UnclosedConstruct { construct,
                                                   line: 1 });
    }
}

#[test]
fn categories_follow_construct_codes() {
    assert_eq!(Construct::Decl.category(), Category::Declaration);
    assert_eq!(Construct::Para.category(), Category::Parameter);
    assert_eq!(Construct::Mult.category(), Category::Expression);
    assert_eq!(Construct::List.category(), Category::List);
    assert_eq!(Construct::Func.category(), Category::Function);
    assert_eq!(Construct::Print.category(), Category::Statement);
    assert_eq!(Construct::Pro.category(), Category::Program);
    assert_eq!(Construct::FunName.code(), 101);
    assert_eq!(Construct::FunName.category(), Category::FunctionName);
}

#[test]
fn basic_arithmetic() {
    assert_output("Pro Print Plus Num 3 End Num 4 End End End End", "", &[7]);
    assert_output("Pro Print Mult Minus Num 5 End Num 2 End End Num 2 End End End End",
                  "",
                  &[6]);
    assert_output("Pro Print Minus Num 2 End Num 5 End End End End", "", &[-3]);
}

#[test]
fn operands_evaluate_left_to_right() {
    let src = "Pro
                 Func next List End Pro Decl t End Read t End Return Id t End End End End
                 Print Minus AppFun next List End End AppFun next List End End End End
               End";

    assert_output(src, "10 3", &[7]);
}

#[test]
fn arguments_evaluate_left_to_right_in_caller_frame() {
    let src = "Pro
                 Decl a End
                 Func next List End Pro Decl t End Read t End Return Id t End End End End
                 Func diff List x y End Pro Return Minus Id x End Id y End End End End End
                 LetBe a Num 100 End End
                 Print AppFun diff List AppFun next List End End Id a End End End End
                 Print AppFun diff List Id a End AppFun next List End End End End End
               End";

    assert_output(src, "1 2", &[-99, 98]);
}

#[test]
fn reads_bind_in_order() {
    let src = "Pro Decl a b c End Read a End Read b End Read c End
               Print Id c End End Print Id b End End Print Id a End End End";

    assert_output(src, "10 20 30", &[30, 20, 10]);
}

#[test]
fn negative_input_is_read() {
    assert_output("Pro Decl a End Read a End Print Id a End End End", "-12", &[-12]);
}

#[test]
fn prints_keep_call_order() {
    let src = "Pro
                 Func show List v End Pro Print Id v End End End End
                 RunFun show List Num 1 End End End
                 Print Num 2 End End
                 RunFun show List Num 3 End End End
               End";

    assert_output(src, "", &[1, 2, 3]);
}

#[test]
fn declarations_default_to_zero() {
    assert_output("Pro Decl a End Print Id a End End End", "", &[0]);
}

#[test]
fn redeclaration_keeps_value() {
    assert_output("Pro Decl a End LetBe a Num 4 End End Decl a End Print Id a End End End",
                  "",
                  &[4]);
}

#[test]
fn empty_lists_are_legal() {
    assert_output("Pro Func one List End Pro Return Num 1 End End End End
                   Print AppFun one List End End End End",
                  "",
                  &[1]);
}

#[test]
fn function_without_return_yields_zero() {
    assert_output("Pro Func f List End Pro Print Num 5 End End End End
                   Print AppFun f List End End End End",
                  "",
                  &[5, 0]);
}

#[test]
fn return_short_circuits_sequence() {
    assert_output("Pro Print Num 1 End End Return Num 2 End End Print Num 3 End End End",
                  "",
                  &[1]);
}

#[test]
fn nested_sequence_return_does_not_propagate() {
    assert_output("Pro Pro Return Num 1 End End Print Num 9 End End End Print Num 2 End End End",
                  "",
                  &[2]);
}

#[test]
fn later_definition_overwrites_earlier() {
    let src = "Pro
                 Func f List End Pro Return Num 1 End End End End
                 Print AppFun f List End End End
                 Func f List End Pro Return Num 2 End End End End
                 Print AppFun f List End End End
               End";

    assert_output(src, "", &[1, 2]);
}

#[test]
fn scoping_is_lexical() {
    let src = fs::read_to_string("tests/programs/lexical_scope.mini").unwrap();
    assert_output(&src, "", &[1, 5, 5]);
}

#[test]
fn function_values_are_passed_as_arguments() {
    let src = "Pro
                 Func twice List FunName g End v End
                 Pro Return AppFun g List AppFun g List Id v End End End End End End End End
                 Func inc List n End Pro Return Plus Id n End Num 1 End End End End End
                 Print AppFun twice List FunName inc End Num 5 End End End End
               End";

    assert_output(src, "", &[7]);
}

#[test]
fn recursion_through_function_values_terminates() {
    let src = fs::read_to_string("tests/programs/factorial_chain.mini").unwrap();
    assert_output(&src, "", &[120]);
}

#[test]
fn unbounded_recursion_hits_limit() {
    let src = "Pro Func spin List n End Pro Return AppFun spin List Id n End End End End End End
               Print AppFun spin List Num 1 End End End End End";
    let config = Config::default().with_max_call_depth(64);

    match run_with_config(src, "", config) {
        Err(Error::Runtime(RuntimeError::RecursionLimit { limit, .. })) => assert_eq!(limit, 64),
        other => panic!("expected recursion limit, got {other:?}"),
    }
}

#[test]
fn unbounded_recursion_hits_default_limit() {
    let src = "Pro Func spin List End Pro RunFun spin List End End End End
               RunFun spin List End End End";

    assert!(matches!(runtime_error(src, ""),
                     RuntimeError::RecursionLimit { limit: 10_000,
                                                    .. }));
}

#[test]
fn partial_output_survives_failure() {
    let root = parse("Pro Decl a End Print Num 1 End End Read a End Print Num 2 End End End").unwrap();
    let mut context = Context::new(InputStream::empty());

    assert!(matches!(context.run(&root), Err(RuntimeError::InputExhausted { line: 1 })));
    assert_eq!(context.output(), &[1]);
}

#[test]
fn unbound_variable_is_error() {
    assert!(matches!(runtime_error("Pro Print Id ghost End End End", ""),
                     RuntimeError::UnboundName { .. }));
}

#[test]
fn unbound_function_is_error() {
    assert!(matches!(runtime_error("Pro RunFun ghost List End End End", ""),
                     RuntimeError::UnboundFunction { .. }));
}

#[test]
fn callee_does_not_see_caller_locals() {
    let src = "Pro
                 Func peek List End Pro Return Id secret End End End End
                 Func caller List End Pro Decl secret End Return AppFun peek List End End End End End
                 Print AppFun caller List End End End
               End";

    assert!(matches!(runtime_error(src, ""), RuntimeError::UnboundName { .. }));
}

#[test]
fn assignment_to_undeclared_variable_is_error() {
    let e = runtime_error("Pro LetBe x Num 1 End End End", "");
    assert_eq!(e,
               RuntimeError::UndeclaredAssignment { name: "x".to_string(),
                                                    line: 1, });
}

#[test]
fn read_into_undeclared_variable_is_error() {
    assert!(matches!(runtime_error("Pro Read x End End", "5"),
                     RuntimeError::UndeclaredAssignment { .. }));
}

#[test]
fn exhausted_input_is_error() {
    assert!(matches!(runtime_error("Pro Decl a End Read a End Read a End End", "1"),
                     RuntimeError::InputExhausted { .. }));
}

#[test]
fn non_numeric_input_is_error() {
    assert!(matches!(runtime_error("Pro Decl a End Read a End End", "ten"),
                     RuntimeError::InvalidInput { .. }));
}

#[test]
fn wrong_function_arity_is_error() {
    let src = "Pro Func f List a b End Pro Return Id a End End End End
               Print AppFun f List Num 1 End End End End End";

    assert!(matches!(runtime_error(src, ""),
                     RuntimeError::ArgumentCountMismatch { expected: 2,
                                                           found: 1,
                                                           .. }));
}

#[test]
fn printing_a_function_is_error() {
    assert!(matches!(runtime_error("Pro Func f List End Pro End End Print FunName f End End End",
                                   ""),
                     RuntimeError::ExpectedNumber { .. }));
}

#[test]
fn number_for_function_parameter_is_error() {
    let src = "Pro Func call List FunName g End End Pro Return AppFun g List End End End End End
               Print AppFun call List Num 3 End End End End End";

    assert!(matches!(runtime_error(src, ""), RuntimeError::ExpectedFunction { .. }));
}

#[test]
fn overflow_is_error() {
    let src = "Pro Print Mult Num 9223372036854775807 End Num 2 End End End End";
    assert!(matches!(runtime_error(src, ""), RuntimeError::Overflow { .. }));
}

#[test]
fn unmatched_end_is_error() {
    assert_eq!(parse_error("Pro End End"), ParseError::UnmatchedEnd { line: 1 });
}

#[test]
fn unclosed_construct_is_error() {
    assert_eq!(parse_error("Pro Print Num 1 End End"),
               ParseError::UnclosedConstruct { construct: Construct::Pro,
                                               line:      1, });
}

#[test]
fn empty_program_is_error() {
    assert_eq!(parse_error("  \n "), ParseError::EmptyProgram);
}

#[test]
fn several_roots_is_error() {
    assert!(matches!(parse_error("Pro End Pro End"),
                     ParseError::TrailingNodes { count: 2, .. }));
}

#[test]
fn bare_identifier_root_is_error() {
    assert!(matches!(parse_error("x"), ParseError::InvalidRoot { .. }));
}

#[test]
fn wrong_child_count_is_error() {
    assert!(matches!(parse_error("Pro Print Plus Num 1 End End End End"),
                     ParseError::MalformedConstruct { construct: Construct::Plus,
                                                      .. }));
}

#[test]
fn statement_in_expression_position_is_error() {
    assert!(matches!(parse_error("Pro Print Print Num 1 End End End End"),
                     ParseError::MalformedConstruct { construct: Construct::Print,
                                                      .. }));
}

#[test]
fn function_body_must_be_program() {
    assert!(matches!(parse_error("Pro Func f List End Return Num 1 End End End End"),
                     ParseError::MalformedConstruct { construct: Construct::Func,
                                                      .. }));
}

#[test]
fn oversized_literal_is_error() {
    assert!(matches!(parse_error("Pro Print Num 99999999999999999999 End End End"),
                     ParseError::LiteralTooLarge { .. }));
}
