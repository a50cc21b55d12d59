//! An AST evaluator for the Monkey programming language from
//! <https://interpreterbook.com/>.

use crate::ast;
use crate::object::{self, Environment, Object, ObjectType};
use crate::token::Token;

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::convert::TryFrom;
use std::rc::Rc;

pub mod error;
pub use error::{Error, MacroError, Result};

mod macros;
pub use macros::{define_macros, expand_macros};

mod quote;

/// Evaluates an `ast::Node` within `env` and produces an `object::Object`.
///
/// Evaluation never fails outright: runtime errors stop evaluation and are
/// returned as an `Object::Error` carrying the error message.
pub fn eval(node: &ast::Node, env: &Rc<RefCell<Environment>>) -> Object {
    let res = match node {
        ast::Node::Program(prog) => eval_program(prog, env),
        ast::Node::Statement(stmt) => eval_statement(stmt, env),
        ast::Node::Expression(expr) => eval_expression(expr, env),
    };

    res.unwrap_or_else(|err| Object::Error(err.to_string()))
}

/// Evaluates a program and returns the result.
fn eval_program(prog: &ast::Program, env: &Rc<RefCell<Environment>>) -> Result<Object> {
    let mut result = Object::Null;

    for stmt in &prog.statements {
        result = eval_statement(stmt, env)?;

        // Handle early return statements if applicable, unwrapping the inner
        // value and terminating the program.
        if let Object::ReturnValue(value) = result {
            return Ok(*value);
        }
    }

    Ok(result)
}

/// Evaluates a block statement and returns the result.
fn eval_block_statement(
    block: &ast::BlockStatement,
    env: &Rc<RefCell<Environment>>,
) -> Result<Object> {
    let mut result = Object::Null;

    for stmt in &block.statements {
        result = eval_statement(stmt, env)?;

        // Handle early return statements if applicable, but do not unwrap the
        // inner value so that only this block statement terminates, and not
        // the entire program.
        if let Object::ReturnValue(_) = result {
            return Ok(result);
        }
    }

    Ok(result)
}

fn eval_statement(stmt: &ast::Statement, env: &Rc<RefCell<Environment>>) -> Result<Object> {
    match stmt {
        ast::Statement::Block(block) => eval_block_statement(block, env),
        ast::Statement::Expression(expr) => eval_expression(expr, env),
        ast::Statement::Let(stmt) => {
            let obj = eval_expression(&stmt.value, env)?;

            // eval succeeded; capture this binding in the innermost
            // environment only.
            env.borrow_mut().set(stmt.name.clone(), obj);
            Ok(Object::Null)
        }
        ast::Statement::Return(ret) => {
            let value = eval_expression(&ret.value, env)?;
            Ok(Object::ReturnValue(Box::new(value)))
        }
    }
}

fn eval_expression(expr: &ast::Expression, env: &Rc<RefCell<Environment>>) -> Result<Object> {
    match expr {
        ast::Expression::Integer(i) => Ok(Object::Integer(i.value)),
        ast::Expression::Boolean(b) => Ok(Object::Boolean(*b)),
        ast::Expression::String(s) => Ok(Object::String(s.clone())),
        ast::Expression::Array(a) => Ok(Object::Array(Rc::new(object::Array {
            elements: eval_expressions(&a.elements, env)?,
        }))),
        ast::Expression::Prefix(p) => {
            let right = eval_expression(&p.right, env)?;
            eval_prefix_expression(&p.operator, right)
        }
        ast::Expression::Infix(i) => {
            // Left is always evaluated first, and a failure there means right
            // is never evaluated.
            let left = eval_expression(&i.left, env)?;
            let right = eval_expression(&i.right, env)?;
            eval_infix_expression(&i.operator, left, right)
        }
        ast::Expression::If(stmt) => eval_if_expression(stmt, env),
        ast::Expression::Identifier(id) => eval_identifier(id, env),
        ast::Expression::Function(func) => Ok(Object::Function(Rc::new(object::Function {
            parameters: func.parameters.clone(),
            body: func.body.clone(),
            env: Rc::clone(env),
        }))),
        ast::Expression::Call(call) => {
            // quote is not a function: its argument must not be evaluated.
            if quote::is_quote_call(call) {
                return quote::quote(&call.arguments, env);
            }

            let function = eval_expression(&call.function, env)?;
            let args = eval_expressions(&call.arguments, env)?;

            apply_function(function, args)
        }
        ast::Expression::Index(i) => {
            let left = eval_expression(&i.left, env)?;
            let index = eval_expression(&i.index, env)?;
            eval_index_expression(left, index)
        }
        ast::Expression::Hash(h) => eval_hash_literal(h, env),
        // Macro literals are consumed by define_macros before evaluation.
        ast::Expression::Macro(_) => Err(Error::MacroLiteral),
    }
}

/// Evaluates a prefix expression to produce an Object.
fn eval_prefix_expression(operator: &Token, right: Object) -> Result<Object> {
    match operator {
        // Logical negation of any value's truthiness.
        Token::Bang => Ok(Object::Boolean(!is_truthy(&right))),
        // Negative numbers.
        Token::Minus => match right {
            Object::Integer(i) => Ok(Object::Integer(i.wrapping_neg())),

            _ => Err(Error::UnknownPrefixOperator {
                operator: operator.clone(),
                right: right.object_type(),
            }),
        },

        _ => Err(Error::UnknownPrefixOperator {
            operator: operator.clone(),
            right: right.object_type(),
        }),
    }
}

/// Evaluates an infix expression to produce an Object.
fn eval_infix_expression(operator: &Token, left: Object, right: Object) -> Result<Object> {
    match (&left, &right) {
        (Object::Integer(l), Object::Integer(r)) => {
            eval_integer_infix_expression(operator, *l, *r)
        }

        (Object::String(l), Object::String(r)) => match operator {
            Token::Plus => Ok(Object::String(l.clone() + r)),

            _ => Err(Error::UnknownInfixOperator {
                left: ObjectType::String,
                operator: operator.clone(),
                right: ObjectType::String,
            }),
        },

        _ => match operator {
            Token::Equal => Ok(Object::Boolean(is_identical(&left, &right))),
            Token::NotEqual => Ok(Object::Boolean(!is_identical(&left, &right))),

            _ if left.object_type() != right.object_type() => Err(Error::TypeMismatch {
                left: left.object_type(),
                operator: operator.clone(),
                right: right.object_type(),
            }),

            _ => Err(Error::UnknownInfixOperator {
                left: left.object_type(),
                operator: operator.clone(),
                right: right.object_type(),
            }),
        },
    }
}

// Evaluates `l (op) r` for two integers.
fn eval_integer_infix_expression(operator: &Token, l: i64, r: i64) -> Result<Object> {
    let obj = match operator {
        Token::Plus => Object::Integer(l.wrapping_add(r)),
        Token::Minus => Object::Integer(l.wrapping_sub(r)),
        Token::Asterisk => Object::Integer(l.wrapping_mul(r)),
        Token::Slash => {
            if r == 0 {
                return Err(Error::DivisionByZero);
            }

            Object::Integer(l.wrapping_div(r))
        }
        Token::LessThan => Object::Boolean(l < r),
        Token::GreaterThan => Object::Boolean(l > r),
        Token::Equal => Object::Boolean(l == r),
        Token::NotEqual => Object::Boolean(l != r),

        _ => {
            return Err(Error::UnknownInfixOperator {
                left: ObjectType::Integer,
                operator: operator.clone(),
                right: ObjectType::Integer,
            })
        }
    };

    Ok(obj)
}

/// Evaluates an if/else expression to produce an Object.
fn eval_if_expression(
    expr: &ast::IfExpression,
    env: &Rc<RefCell<Environment>>,
) -> Result<Object> {
    let condition = eval_expression(&expr.condition, env)?;

    if is_truthy(&condition) {
        eval_block_statement(&expr.consequence, env)
    } else if let Some(alt) = &expr.alternative {
        eval_block_statement(alt, env)
    } else {
        Ok(Object::Null)
    }
}

/// Evaluates an object bound to an identifier and returns the result.
fn eval_identifier(id: &str, env: &Rc<RefCell<Environment>>) -> Result<Object> {
    // User bindings shadow built-ins.
    if let Some(obj) = env.borrow().get(id) {
        return Ok(obj);
    }

    object::Builtin::lookup(id)
        .map(Object::Builtin)
        .ok_or_else(|| Error::UnknownIdentifier(id.to_string()))
}

/// Evaluates several expressions in order and produces objects for each of
/// them, stopping at the first error.
fn eval_expressions(
    exprs: &[ast::Expression],
    env: &Rc<RefCell<Environment>>,
) -> Result<Vec<Object>> {
    exprs.iter().map(|e| eval_expression(e, env)).collect()
}

/// Evaluates an index expression on an array or hash.
fn eval_index_expression(left: Object, index: Object) -> Result<Object> {
    match (&left, &index) {
        // Array with numeric index. Out of range indices produce null.
        (Object::Array(a), Object::Integer(i)) => Ok(usize::try_from(*i)
            .ok()
            .and_then(|i| a.elements.get(i))
            .cloned()
            .unwrap_or(Object::Null)),

        // Hash with some type of index. Missing keys produce null.
        (Object::Hash(h), _) => {
            let key = index
                .hash_key()
                .ok_or_else(|| Error::UnusableHashKey(index.object_type()))?;

            Ok(h.pairs
                .get(&key)
                .map(|pair| pair.value.clone())
                .unwrap_or(Object::Null))
        }

        _ => Err(Error::IndexNotSupported(left.object_type())),
    }
}

/// Evaluates a hash literal. Later pairs overwrite earlier pairs with an
/// equal key.
fn eval_hash_literal(hash: &ast::HashLiteral, env: &Rc<RefCell<Environment>>) -> Result<Object> {
    let mut pairs = BTreeMap::new();

    for (k, v) in &hash.pairs {
        let key = eval_expression(k, env)?;
        let hash_key = key
            .hash_key()
            .ok_or_else(|| Error::UnusableHashKey(key.object_type()))?;

        let value = eval_expression(v, env)?;
        pairs.insert(hash_key, object::HashPair { key, value });
    }

    Ok(Object::Hash(Rc::new(object::Hash { pairs })))
}

/// Applies a function with arguments to produce a result object.
fn apply_function(function: Object, args: Vec<Object>) -> Result<Object> {
    match function {
        Object::Function(func) => {
            let env = extend_env(&func.parameters, &func.env, args);
            let evaluated = eval_block_statement(&func.body, &env)?;

            // If the function had an early return, stop evaluation.
            Ok(unwrap_return_value(evaluated))
        }
        // Built-ins use their own execution logic.
        Object::Builtin(b) => Ok(b.apply(&args)?),

        _ => Err(Error::NotAFunction(function.object_type())),
    }
}

// Binds arguments to parameters in a new environment enclosed by `outer`.
// Arity is not checked: extra arguments are ignored and missing ones leave
// their parameter unbound.
fn extend_env(
    parameters: &[String],
    outer: &Rc<RefCell<Environment>>,
    args: Vec<Object>,
) -> Rc<RefCell<Environment>> {
    let mut env = Environment::new_enclosed(Rc::clone(outer));

    for (param, arg) in parameters.iter().zip(args) {
        env.set(param.clone(), arg);
    }

    Rc::new(RefCell::new(env))
}

fn unwrap_return_value(obj: Object) -> Object {
    match obj {
        Object::ReturnValue(ret) => *ret,
        obj => obj,
    }
}

/// Determines if an object is truthy in Monkey.
fn is_truthy(obj: &Object) -> bool {
    match obj {
        Object::Boolean(false) | Object::Null => false,
        _ => true,
    }
}

// Reports whether `==` considers two objects the same when they are not both
// integers or both strings. Booleans, null, and built-ins compare by value;
// everything else only equals itself.
fn is_identical(l: &Object, r: &Object) -> bool {
    match (l, r) {
        (Object::Null, Object::Null) => true,
        (Object::Boolean(l), Object::Boolean(r)) => l == r,
        (Object::Builtin(l), Object::Builtin(r)) => l == r,
        (Object::Function(l), Object::Function(r)) => Rc::ptr_eq(l, r),
        (Object::Array(l), Object::Array(r)) => Rc::ptr_eq(l, r),
        (Object::Hash(l), Object::Hash(r)) => Rc::ptr_eq(l, r),
        (Object::Quote(l), Object::Quote(r)) => Rc::ptr_eq(l, r),
        (Object::Macro(l), Object::Macro(r)) => Rc::ptr_eq(l, r),
        _ => false,
    }
}
