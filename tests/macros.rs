extern crate mdl_monkey_eval;

use mdl_monkey_eval::evaluator::{self, MacroError};
use mdl_monkey_eval::object::{Environment, Object, ObjectType};
use mdl_monkey_eval::{ast, lexer, parser};

use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn macros_define() {
    let mut prog = parse(
        "
let number = 1;
let function = fn(x, y) { x + y };
let mymacro = macro(x, y) { x + y; };
",
    );

    let env = Rc::new(RefCell::new(Environment::new()));
    evaluator::define_macros(&mut prog, &env);

    assert_eq!(2, prog.statements.len());
    assert_eq!(None, env.borrow().get("number"));
    assert_eq!(None, env.borrow().get("function"));

    let got = env.borrow().get("mymacro");
    let mac = if let Some(Object::Macro(mac)) = &got {
        mac
    } else {
        panic!("not a macro object");
    };

    assert_eq!(vec!["x", "y"], mac.parameters);
    assert_eq!("(x + y)", mac.body.to_string());
}

#[test]
fn macros_define_only_top_level() {
    let mut prog = parse("let f = fn() { let m = macro() { quote(1) }; m };");

    let env = Rc::new(RefCell::new(Environment::new()));
    evaluator::define_macros(&mut prog, &env);

    assert_eq!(1, prog.statements.len());
    assert_eq!(None, env.borrow().get("m"));
}

#[test]
fn macros_expand() {
    let tests = vec![
        (
            "
let infixExpression = macro() { quote(1 + 2); };

infixExpression();
",
            "(1 + 2)",
        ),
        (
            "
let reverse = macro(a, b) { quote(unquote(b) - unquote(a)); };

reverse(2 + 2, 10 - 5);
",
            "(10 - 5) - (2 + 2)",
        ),
        (
            r#"
let unless = macro(condition, consequence, alternative) {
    quote(if (!(unquote(condition))) {
        unquote(consequence);
    } else {
        unquote(alternative);
    });
};

unless(10 > 5, puts("not greater"), puts("greater"));
"#,
            r#"if (!(10 > 5)) { puts("not greater") } else { puts("greater") }"#,
        ),
        (
            "
let double = macro(x) { return quote(unquote(x) * 2); };

let a = double(3);
",
            "let a = 3 * 2;",
        ),
        (
            "
let inner = macro() { quote(1); };

fn() { inner() + inner() };
",
            "fn() { 1 + 1 };",
        ),
        (
            "
let ignore = macro(x) { quote(0); };

notAMacro(ignore(undefined + 1));
",
            "notAMacro(0);",
        ),
    ];

    for (input, want) in tests {
        let got = expand(input).expect("failed to expand macros");

        assert_eq!(parse(want).to_string(), got.to_string(), "input: {}", input);
    }
}

#[test]
fn macros_expand_errors() {
    let tests = vec![
        (
            "let m = macro() { 1 }; m();",
            MacroError::NotQuote {
                name: "m".to_string(),
                got: ObjectType::Integer,
            },
        ),
        (
            "let m = macro(x) { x + 1 }; m(1);",
            MacroError::Evaluation {
                name: "m".to_string(),
                err: evaluator::Error::TypeMismatch {
                    left: ObjectType::Quote,
                    operator: mdl_monkey_eval::token::Token::Plus,
                    right: ObjectType::Integer,
                },
            },
        ),
        (
            "let m = macro() { foo }; m();",
            MacroError::Evaluation {
                name: "m".to_string(),
                err: evaluator::Error::UnknownIdentifier("foo".to_string()),
            },
        ),
    ];

    for (input, want) in tests {
        assert_eq!(Err(want), expand(input), "input: {}", input);
    }
}

#[test]
fn macros_expand_error_messages() {
    let got = expand("let m = macro() { 1 }; m();").map(|prog| prog.to_string());

    assert_eq!(
        Err("macro m must return a quoted expression, got Integer".to_string()),
        got.map_err(|err| err.to_string())
    );
}

#[test]
fn macros_evaluate_expanded_program() {
    let tests = vec![
        (
            "
let unless = macro(condition, consequence, alternative) {
    quote(if (!(unquote(condition))) {
        unquote(consequence);
    } else {
        unquote(alternative);
    });
};

unless(10 > 5, 1, 2);
",
            Object::Integer(2),
        ),
        (
            "
let square = macro(x) { quote(unquote(x) * unquote(x)); };

let n = 3;
square(n + 1);
",
            Object::Integer(16),
        ),
    ];

    for (input, want) in tests {
        let prog = expand(input).expect("failed to expand macros");

        let env = Rc::new(RefCell::new(Environment::new()));
        let got = evaluator::eval(&ast::Node::Program(prog), &env);

        assert_eq!(want, got, "input: {}", input);
    }
}

fn expand(input: &str) -> Result<ast::Program, MacroError> {
    let mut prog = parse(input);

    let env = Rc::new(RefCell::new(Environment::new()));
    evaluator::define_macros(&mut prog, &env);
    evaluator::expand_macros(prog, &env)
}

fn parse(input: &str) -> ast::Program {
    parser::Parser::new(lexer::Lexer::new(input))
        .parse()
        .unwrap_or_else(|errs| panic!("failed to parse {:?}: {:?}", input, errs))
}
