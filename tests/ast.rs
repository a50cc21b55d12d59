extern crate mdl_monkey_eval;

use mdl_monkey_eval::ast;
use mdl_monkey_eval::token::Token;

fn ident(s: &str) -> ast::Expression {
    ast::Expression::Identifier(s.to_string())
}

fn int(v: i64) -> ast::Expression {
    ast::Expression::Integer(ast::Integer::from(v))
}

#[test]
fn ast_display() {
    let program = ast::Program {
        statements: vec![ast::Statement::Let(ast::LetStatement {
            name: "myVar".to_string(),
            value: ident("anotherVar"),
        })],
    };

    assert_eq!(format!("{}", program), "let myVar = anotherVar;")
}

#[test]
fn ast_display_expressions() {
    let tests = vec![
        (ident("x"), "x"),
        (int(5), "5"),
        (ast::Expression::String("hello world".to_string()), r#""hello world""#),
        (ast::Expression::Boolean(false), "false"),
        (
            ast::Expression::Prefix(ast::PrefixExpression {
                operator: Token::Minus,
                right: Box::new(int(5)),
            }),
            "(-5)",
        ),
        (
            ast::Expression::Infix(ast::InfixExpression {
                left: Box::new(ident("a")),
                operator: Token::Asterisk,
                right: Box::new(ident("b")),
            }),
            "(a * b)",
        ),
        (
            ast::Expression::If(ast::IfExpression {
                condition: Box::new(ident("x")),
                consequence: ast::BlockStatement {
                    statements: vec![ast::Statement::Expression(int(1))],
                },
                alternative: Some(ast::BlockStatement {
                    statements: vec![ast::Statement::Return(ast::ReturnStatement {
                        value: int(2),
                    })],
                }),
            }),
            "if x 1 else return 2;",
        ),
        (
            ast::Expression::Function(ast::FunctionLiteral {
                parameters: vec!["x".to_string(), "y".to_string()],
                body: ast::BlockStatement {
                    statements: vec![ast::Statement::Expression(ident("x"))],
                },
            }),
            "fn(x, y) x",
        ),
        (
            ast::Expression::Macro(ast::MacroLiteral {
                parameters: vec![],
                body: ast::BlockStatement::default(),
            }),
            "macro() ",
        ),
        (
            ast::Expression::Call(ast::CallExpression {
                function: Box::new(ident("add")),
                arguments: vec![int(1), ident("y")],
            }),
            "add(1, y)",
        ),
        (
            ast::Expression::Array(ast::ArrayLiteral {
                elements: vec![int(1), int(2)],
            }),
            "[1, 2]",
        ),
        (
            ast::Expression::Hash(ast::HashLiteral {
                pairs: vec![
                    (ast::Expression::String("one".to_string()), int(1)),
                    (ast::Expression::Boolean(true), int(2)),
                ],
            }),
            r#"{"one": 1, true: 2}"#,
        ),
        (
            ast::Expression::Index(ast::IndexExpression {
                left: Box::new(ident("arr")),
                index: Box::new(int(0)),
            }),
            "(arr[0])",
        ),
    ];

    for (expr, want) in tests {
        assert_eq!(want, expr.to_string());
    }
}

#[test]
fn ast_display_integer_radix() {
    let tests = vec![
        (ast::Radix::Decimal, 31, "31"),
        (ast::Radix::Hexadecimal, 31, "0x1f"),
        (ast::Radix::Octal, 8, "010"),
    ];

    for (radix, value, want) in tests {
        assert_eq!(want, ast::Integer { radix, value }.to_string());
    }
}

#[test]
fn ast_token_literal() {
    let tests = vec![
        (ast::Node::Program(ast::Program::new()), ""),
        (
            ast::Node::Statement(ast::Statement::Let(ast::LetStatement {
                name: "x".to_string(),
                value: int(1),
            })),
            "let",
        ),
        (
            ast::Node::Statement(ast::Statement::Return(ast::ReturnStatement {
                value: int(1),
            })),
            "return",
        ),
        (ast::Node::Expression(ident("quote")), "quote"),
        (ast::Node::Expression(int(10)), "10"),
        (
            ast::Node::Expression(ast::Expression::Infix(ast::InfixExpression {
                left: Box::new(int(1)),
                operator: Token::Plus,
                right: Box::new(int(2)),
            })),
            "+",
        ),
        (
            ast::Node::Expression(ast::Expression::Call(ast::CallExpression {
                function: Box::new(ident("f")),
                arguments: vec![],
            })),
            "(",
        ),
    ];

    for (node, want) in tests {
        assert_eq!(want, node.token_literal());
    }
}
