extern crate mdl_monkey_eval;

use mdl_monkey_eval::ast;
use mdl_monkey_eval::object::{self, Builtin, Environment, Object, ObjectType};

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

fn string(s: &str) -> Object {
    Object::String(s.to_string())
}

fn array(elements: Vec<Object>) -> Object {
    Object::Array(Rc::new(object::Array { elements }))
}

#[test]
fn object_inspect() {
    let mut pairs = BTreeMap::new();
    for (k, v) in vec![(string("a"), Object::Integer(1))] {
        let key = k.hash_key().expect("string must be hashable");
        pairs.insert(key, object::HashPair { key: k, value: v });
    }

    let body = ast::BlockStatement {
        statements: vec![ast::Statement::Expression(ast::Expression::Identifier(
            "x".to_string(),
        ))],
    };
    let env = Rc::new(RefCell::new(Environment::new()));

    let tests = vec![
        (object::NULL, "null"),
        (Object::Integer(-10), "-10"),
        (object::TRUE, "true"),
        (object::FALSE, "false"),
        (string("hello world"), "hello world"),
        (Object::ReturnValue(Box::new(Object::Integer(1))), "1"),
        (Object::Error("boom".to_string()), "ERROR: boom"),
        (Object::Builtin(Builtin::Len), "builtin function"),
        (
            array(vec![Object::Integer(1), string("two"), object::NULL]),
            "[1, two, null]",
        ),
        (array(vec![]), "[]"),
        (Object::Hash(Rc::new(object::Hash { pairs })), "{a: 1}"),
        (
            Object::Quote(Rc::new(ast::Expression::Boolean(true))),
            "QUOTE(true)",
        ),
        (
            Object::Function(Rc::new(object::Function {
                parameters: vec!["x".to_string(), "y".to_string()],
                body: body.clone(),
                env: Rc::clone(&env),
            })),
            "fn(x, y) {\nx\n}",
        ),
        (
            Object::Macro(Rc::new(object::Macro {
                parameters: vec!["x".to_string()],
                body,
                env,
            })),
            "macro(x) {\nx\n}",
        ),
    ];

    for (obj, want) in tests {
        assert_eq!(want, obj.inspect());
    }
}

#[test]
fn object_type_names() {
    let tests = vec![
        (Object::Integer(1), "Integer"),
        (object::TRUE, "Boolean"),
        (string(""), "String"),
        (object::NULL, "Null"),
        (Object::Error("e".to_string()), "Error"),
        (Object::Builtin(Builtin::Puts), "Builtin"),
        (array(vec![]), "Array"),
        (Object::Hash(Rc::new(object::Hash::default())), "Hash"),
        (
            Object::Quote(Rc::new(ast::Expression::Boolean(true))),
            "Quote",
        ),
    ];

    for (obj, want) in tests {
        assert_eq!(want, obj.object_type().to_string());
    }
}

#[test]
fn object_hash_key() {
    let hello1 = string("Hello World");
    let hello2 = string("Hello World");
    let diff1 = string("My name is johnny");
    let diff2 = string("My name is johnny");

    assert_eq!(hello1.hash_key(), hello2.hash_key());
    assert_eq!(diff1.hash_key(), diff2.hash_key());
    assert_ne!(hello1.hash_key(), diff1.hash_key());

    assert_eq!(Object::Integer(1).hash_key(), Object::Integer(1).hash_key());
    assert_ne!(Object::Integer(1).hash_key(), object::TRUE.hash_key());
    assert_ne!(object::TRUE.hash_key(), object::FALSE.hash_key());

    let key = Object::Integer(-1)
        .hash_key()
        .expect("integer must be hashable");
    assert_eq!(ObjectType::Integer, key.kind);
    assert_eq!(u64::max_value(), key.value);

    for obj in vec![
        object::NULL,
        array(vec![]),
        Object::Builtin(Builtin::Len),
        Object::Error("e".to_string()),
    ] {
        assert_eq!(None, obj.hash_key(), "object: {}", obj);
    }
}

#[test]
fn object_environment() {
    let outer = Rc::new(RefCell::new(Environment::new()));
    outer.borrow_mut().set("a".to_string(), Object::Integer(1));
    outer.borrow_mut().set("b".to_string(), Object::Integer(2));

    let mut inner = Environment::new_enclosed(Rc::clone(&outer));
    inner.set("b".to_string(), Object::Integer(3));

    assert_eq!(Some(Object::Integer(1)), inner.get("a"));
    assert_eq!(Some(Object::Integer(3)), inner.get("b"));
    assert_eq!(None, inner.get("c"));

    // Inner bindings never leak outward.
    assert_eq!(Some(Object::Integer(2)), outer.borrow().get("b"));
}

#[test]
fn object_builtin_lookup() {
    let tests = vec![
        ("len", Some(Builtin::Len)),
        ("puts", Some(Builtin::Puts)),
        ("first", Some(Builtin::First)),
        ("last", Some(Builtin::Last)),
        ("rest", Some(Builtin::Rest)),
        ("push", Some(Builtin::Push)),
        ("quote", None),
        ("foobar", None),
    ];

    for (input, want) in tests {
        assert_eq!(want, Builtin::lookup(input));

        if let Some(b) = want {
            assert_eq!(input, b.to_string());
        }
    }
}

#[test]
fn object_builtin_apply() {
    let tests = vec![
        (Builtin::Len, vec![string("")], Ok(Object::Integer(0))),
        (Builtin::Len, vec![string("four")], Ok(Object::Integer(4))),
        (
            Builtin::Len,
            vec![array(vec![object::NULL])],
            Ok(Object::Integer(1)),
        ),
        (
            Builtin::Len,
            vec![Object::Integer(1)],
            Err(object::Error::ArgumentNotSupported(
                Builtin::Len,
                ObjectType::Integer,
            )),
        ),
        (
            Builtin::Len,
            vec![string("one"), string("two")],
            Err(object::Error::WrongNumberArguments { got: 2, want: 1 }),
        ),
        (
            Builtin::First,
            vec![array(vec![Object::Integer(1), Object::Integer(2)])],
            Ok(Object::Integer(1)),
        ),
        (Builtin::First, vec![array(vec![])], Ok(object::NULL)),
        (
            Builtin::Last,
            vec![array(vec![Object::Integer(1), Object::Integer(2)])],
            Ok(Object::Integer(2)),
        ),
        (
            Builtin::Last,
            vec![string("x")],
            Err(object::Error::ArgumentNotArray(
                Builtin::Last,
                ObjectType::String,
            )),
        ),
        (
            Builtin::Rest,
            vec![array(vec![Object::Integer(1), Object::Integer(2)])],
            Ok(array(vec![Object::Integer(2)])),
        ),
        (Builtin::Rest, vec![array(vec![])], Ok(object::NULL)),
        (
            Builtin::Push,
            vec![array(vec![]), Object::Integer(1)],
            Ok(array(vec![Object::Integer(1)])),
        ),
        (
            Builtin::Push,
            vec![array(vec![])],
            Err(object::Error::WrongNumberArguments { got: 1, want: 2 }),
        ),
        (Builtin::Puts, vec![], Ok(object::NULL)),
    ];

    for (builtin, args, want) in tests {
        assert_eq!(want, builtin.apply(&args), "builtin: {}", builtin);
    }
}

#[test]
fn object_error_messages() {
    let tests = vec![
        (
            object::Error::WrongNumberArguments { got: 2, want: 1 },
            "wrong number of arguments. got=2, want=1",
        ),
        (
            object::Error::ArgumentNotSupported(Builtin::Len, ObjectType::Integer),
            "argument to `len` not supported, got Integer",
        ),
        (
            object::Error::ArgumentNotArray(Builtin::Push, ObjectType::Hash),
            "argument to `push` must be Array, got Hash",
        ),
    ];

    for (err, want) in tests {
        assert_eq!(want, err.to_string());
    }
}
