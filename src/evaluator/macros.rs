//! Macro definition and expansion, run over a parsed program before it is
//! evaluated.

use crate::ast;
use crate::evaluator::{eval_block_statement, extend_env, quote, unwrap_return_value, MacroError};
use crate::object::{self, Environment, Object};

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;

/// Binds every top-level `let <name> = macro(...) { ... };` statement of
/// `program` as a macro in `env`, and removes those statements from the
/// program.
///
/// Macros defined anywhere other than the top level are left in place.
pub fn define_macros(program: &mut ast::Program, env: &Rc<RefCell<Environment>>) {
    program.statements.retain(|stmt| {
        let (name, mac) = match stmt {
            ast::Statement::Let(ast::LetStatement {
                name,
                value: ast::Expression::Macro(mac),
            }) => (name, mac),
            _ => return true,
        };

        debug!(%name, parameters = mac.parameters.len(), "defining macro");

        let obj = Object::Macro(Rc::new(object::Macro {
            parameters: mac.parameters.clone(),
            body: mac.body.clone(),
            env: Rc::clone(env),
        }));
        env.borrow_mut().set(name.clone(), obj);

        false
    });
}

/// Replaces every call to a macro bound in `env` with the syntax the macro
/// produces.
///
/// Each argument is passed to the macro unevaluated, as a quote. A macro that
/// fails to evaluate or does not produce a quote aborts the expansion.
pub fn expand_macros(
    program: ast::Program,
    env: &Rc<RefCell<Environment>>,
) -> Result<ast::Program, MacroError> {
    ast::try_modify_program(program, &mut |node| match node {
        ast::Node::Expression(ast::Expression::Call(call)) => match lookup_macro(&call, env) {
            Some((name, mac)) => Ok(ast::Node::Expression(expand_macro_call(
                &name,
                &mac,
                call.arguments,
            )?)),
            None => Ok(ast::Node::Expression(ast::Expression::Call(call))),
        },
        node => Ok(node),
    })
}

// Finds the macro named by the callee of `call`, if any.
fn lookup_macro(
    call: &ast::CallExpression,
    env: &Rc<RefCell<Environment>>,
) -> Option<(String, Rc<object::Macro>)> {
    let name = match &*call.function {
        ast::Expression::Identifier(id) => id,
        _ => return None,
    };

    let obj = env.borrow().get(name);
    match obj {
        Some(Object::Macro(mac)) => Some((name.clone(), mac)),
        _ => None,
    }
}

fn expand_macro_call(
    name: &str,
    mac: &object::Macro,
    arguments: Vec<ast::Expression>,
) -> Result<ast::Expression, MacroError> {
    debug!(%name, arguments = arguments.len(), "expanding macro call");

    let args = arguments
        .into_iter()
        .map(|arg| Object::Quote(Rc::new(arg)))
        .collect();

    let env = extend_env(&mac.parameters, &mac.env, args);
    let evaluated =
        eval_block_statement(&mac.body, &env).map_err(|err| MacroError::Evaluation {
            name: name.to_string(),
            err,
        })?;

    match unwrap_return_value(evaluated) {
        Object::Quote(q) => Ok(quote::unwrap_quote(q)),
        obj => Err(MacroError::NotQuote {
            name: name.to_string(),
            got: obj.object_type(),
        }),
    }
}
