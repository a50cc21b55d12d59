//! Quoting defers evaluation of syntax; unquote evaluates pieces of it early.

use crate::ast;
use crate::evaluator::{eval_expression, Error, Result};
use crate::object::{Environment, Object};

use std::cell::RefCell;
use std::rc::Rc;

/// Reports whether `call` is a `quote(...)` pseudo-call.
pub(super) fn is_quote_call(call: &ast::CallExpression) -> bool {
    is_named(call, "quote")
}

/// Quotes the single unevaluated argument of a `quote` call, first replacing
/// every `unquote(x)` call within it by the syntax for `x`'s value in `env`.
pub(super) fn quote(
    arguments: &[ast::Expression],
    env: &Rc<RefCell<Environment>>,
) -> Result<Object> {
    let arg = match arguments {
        [arg] => arg.clone(),
        _ => return Err(Error::QuoteArguments(arguments.len())),
    };

    let quoted = ast::try_modify_expression(arg, &mut |node| -> Result<ast::Node> {
        match node {
            ast::Node::Expression(ast::Expression::Call(call)) if is_unquote_call(&call) => {
                let obj = eval_expression(&call.arguments[0], env)?;
                Ok(ast::Node::Expression(object_to_expression(obj)?))
            }
            node => Ok(node),
        }
    })?;

    Ok(Object::Quote(Rc::new(quoted)))
}

// Unquote calls that do not take exactly one argument are left alone.
fn is_unquote_call(call: &ast::CallExpression) -> bool {
    is_named(call, "unquote") && call.arguments.len() == 1
}

fn is_named(call: &ast::CallExpression, name: &str) -> bool {
    match &*call.function {
        ast::Expression::Identifier(id) => id == name,
        _ => false,
    }
}

// Converts the result of an unquote back into syntax.
fn object_to_expression(obj: Object) -> Result<ast::Expression> {
    match obj {
        Object::Integer(i) => Ok(ast::Expression::Integer(ast::Integer::from(i))),
        Object::Boolean(b) => Ok(ast::Expression::Boolean(b)),
        Object::Quote(q) => Ok(unwrap_quote(q)),

        _ => Err(Error::UnquoteUnsupported(obj.object_type())),
    }
}

/// Takes the expression out of a quote, cloning it only if the quote is
/// still shared.
pub(super) fn unwrap_quote(q: Rc<ast::Expression>) -> ast::Expression {
    Rc::try_unwrap(q).unwrap_or_else(|q| (*q).clone())
}
