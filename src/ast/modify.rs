//! A generic rewrite pass over Monkey syntax trees, shared by quote/unquote
//! and macro expansion.

use crate::ast::*;

use std::convert::Infallible;
use std::result;

/// Rewrites `node` bottom-up using the transform `f`.
///
/// Every child of a composite node is rewritten first, the node is rebuilt
/// from its rewritten children, and then `f` is applied to the rebuilt node.
/// Leaf nodes go straight to `f`. The result of `f` is what the parent sees.
///
/// `f` is called for every node in the tree, including the identifiers bound
/// as function and macro parameters, so it must return nodes it does not care
/// about unchanged. It must also preserve shape: an expression must be
/// replaced by an expression, a block by a block, and a parameter by an
/// identifier. Violating this is a bug in the transform and panics.
pub fn modify<F>(node: Node, f: &mut F) -> Node
where
    F: FnMut(Node) -> Node,
{
    let res: result::Result<Node, Infallible> = try_modify(node, &mut |n| Ok(f(n)));
    match res {
        Ok(node) => node,
        Err(never) => match never {},
    }
}

/// Like `modify`, but with a fallible transform. The first error returned by
/// `f` stops the rewrite and is returned to the caller.
pub fn try_modify<F, E>(node: Node, f: &mut F) -> result::Result<Node, E>
where
    F: FnMut(Node) -> result::Result<Node, E>,
{
    let node = match node {
        Node::Program(prog) => Node::Program(Program {
            statements: statements(prog.statements, f)?,
        }),
        Node::Statement(stmt) => Node::Statement(statement_children(stmt, f)?),
        Node::Expression(expr) => Node::Expression(expression_children(expr, f)?),
    };

    f(node)
}

/// Applies `try_modify` to a whole `Program`.
pub fn try_modify_program<F, E>(prog: Program, f: &mut F) -> result::Result<Program, E>
where
    F: FnMut(Node) -> result::Result<Node, E>,
{
    match try_modify(Node::Program(prog), f)? {
        Node::Program(prog) => Ok(prog),
        node => panic!("tree rewrite replaced a program with: {}", node),
    }
}

/// Applies `try_modify` to a single `Expression`.
pub fn try_modify_expression<F, E>(expr: Expression, f: &mut F) -> result::Result<Expression, E>
where
    F: FnMut(Node) -> result::Result<Node, E>,
{
    expression(expr, f)
}

// Rebuilds a statement from its rewritten children.
fn statement_children<F, E>(stmt: Statement, f: &mut F) -> result::Result<Statement, E>
where
    F: FnMut(Node) -> result::Result<Node, E>,
{
    Ok(match stmt {
        Statement::Block(block) => Statement::Block(BlockStatement {
            statements: statements(block.statements, f)?,
        }),
        Statement::Expression(expr) => Statement::Expression(expression(expr, f)?),
        Statement::Let(stmt) => Statement::Let(LetStatement {
            name: stmt.name,
            value: expression(stmt.value, f)?,
        }),
        Statement::Return(stmt) => Statement::Return(ReturnStatement {
            value: expression(stmt.value, f)?,
        }),
    })
}

// Rebuilds an expression from its rewritten children.
fn expression_children<F, E>(expr: Expression, f: &mut F) -> result::Result<Expression, E>
where
    F: FnMut(Node) -> result::Result<Node, E>,
{
    Ok(match expr {
        Expression::Prefix(pre) => Expression::Prefix(PrefixExpression {
            operator: pre.operator,
            right: boxed(pre.right, f)?,
        }),
        Expression::Infix(inf) => Expression::Infix(InfixExpression {
            left: boxed(inf.left, f)?,
            operator: inf.operator,
            right: boxed(inf.right, f)?,
        }),
        Expression::If(stmt) => Expression::If(IfExpression {
            condition: boxed(stmt.condition, f)?,
            consequence: block(stmt.consequence, f)?,
            alternative: match stmt.alternative {
                Some(alt) => Some(block(alt, f)?),
                None => None,
            },
        }),
        Expression::Function(func) => Expression::Function(FunctionLiteral {
            parameters: parameters(func.parameters, f)?,
            body: block(func.body, f)?,
        }),
        Expression::Macro(mac) => Expression::Macro(MacroLiteral {
            parameters: parameters(mac.parameters, f)?,
            body: block(mac.body, f)?,
        }),
        Expression::Call(call) => Expression::Call(CallExpression {
            function: boxed(call.function, f)?,
            arguments: expressions(call.arguments, f)?,
        }),
        Expression::Array(arr) => Expression::Array(ArrayLiteral {
            elements: expressions(arr.elements, f)?,
        }),
        Expression::Hash(hash) => {
            let mut pairs = Vec::with_capacity(hash.pairs.len());
            for (k, v) in hash.pairs {
                pairs.push((expression(k, f)?, expression(v, f)?));
            }

            Expression::Hash(HashLiteral { pairs })
        }
        Expression::Index(idx) => Expression::Index(IndexExpression {
            left: boxed(idx.left, f)?,
            index: boxed(idx.index, f)?,
        }),

        // Leaves have no children.
        leaf @ Expression::Identifier(_)
        | leaf @ Expression::Integer(_)
        | leaf @ Expression::String(_)
        | leaf @ Expression::Boolean(_) => leaf,
    })
}

fn statements<F, E>(stmts: Vec<Statement>, f: &mut F) -> result::Result<Vec<Statement>, E>
where
    F: FnMut(Node) -> result::Result<Node, E>,
{
    stmts.into_iter().map(|s| statement(s, f)).collect()
}

fn statement<F, E>(stmt: Statement, f: &mut F) -> result::Result<Statement, E>
where
    F: FnMut(Node) -> result::Result<Node, E>,
{
    match try_modify(Node::Statement(stmt), f)? {
        Node::Statement(stmt) => Ok(stmt),
        node => panic!("tree rewrite replaced a statement with: {}", node),
    }
}

fn block<F, E>(block: BlockStatement, f: &mut F) -> result::Result<BlockStatement, E>
where
    F: FnMut(Node) -> result::Result<Node, E>,
{
    match statement(Statement::Block(block), f)? {
        Statement::Block(block) => Ok(block),
        stmt => panic!("tree rewrite replaced a block with: {}", stmt),
    }
}

fn expressions<F, E>(exprs: Vec<Expression>, f: &mut F) -> result::Result<Vec<Expression>, E>
where
    F: FnMut(Node) -> result::Result<Node, E>,
{
    exprs.into_iter().map(|e| expression(e, f)).collect()
}

fn expression<F, E>(expr: Expression, f: &mut F) -> result::Result<Expression, E>
where
    F: FnMut(Node) -> result::Result<Node, E>,
{
    match try_modify(Node::Expression(expr), f)? {
        Node::Expression(expr) => Ok(expr),
        node => panic!("tree rewrite replaced an expression with: {}", node),
    }
}

fn boxed<F, E>(expr: Box<Expression>, f: &mut F) -> result::Result<Box<Expression>, E>
where
    F: FnMut(Node) -> result::Result<Node, E>,
{
    Ok(Box::new(expression(*expr, f)?))
}

fn parameters<F, E>(params: Vec<String>, f: &mut F) -> result::Result<Vec<String>, E>
where
    F: FnMut(Node) -> result::Result<Node, E>,
{
    params
        .into_iter()
        .map(|p| match expression(Expression::Identifier(p), f)? {
            Expression::Identifier(p) => Ok(p),
            expr => panic!("tree rewrite replaced a parameter with: {}", expr),
        })
        .collect()
}
