//! A parser for the Monkey programming language from <https://interpreterbook.com/>.

use crate::ast;
use crate::lexer::Lexer;
use crate::token::Token;

use std::mem;
use std::result;

use tracing::trace;

pub mod error;
pub use error::Error;

/// Operator precedence levels, from loosest to tightest binding.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
enum Precedence {
    Lowest,
    Equals,
    LessGreater,
    Sum,
    Product,
    Prefix,
    Call,
    Index,
}

impl Precedence {
    /// Determines the binding precedence of `tok` when it appears in infix
    /// position.
    fn of(tok: &Token) -> Self {
        match tok {
            Token::Equal | Token::NotEqual => Precedence::Equals,
            Token::LessThan | Token::GreaterThan => Precedence::LessGreater,
            Token::Plus | Token::Minus => Precedence::Sum,
            Token::Asterisk | Token::Slash => Precedence::Product,
            Token::LeftParen => Precedence::Call,
            Token::LeftBracket => Precedence::Index,
            _ => Precedence::Lowest,
        }
    }
}

/// Parses `Token`s and produces an `ast::Program` for the Monkey programming
/// language.
pub struct Parser<'a> {
    lexer: Lexer<'a>,

    current: Token,
    peek: Token,

    errors: Vec<Error>,
}

impl<'a> Parser<'a> {
    /// Creates a new `Parser` which consumes `Token`s from `lexer`.
    pub fn new(lexer: Lexer<'a>) -> Self {
        let mut p = Parser {
            lexer,

            current: Token::Eof,
            peek: Token::Eof,

            errors: vec![],
        };

        p.next_token();
        p.next_token();

        p
    }

    /// Parses the input `Token` stream and creates an `ast::Program`, along
    /// with every syntax error found along the way.
    ///
    /// Parsing continues past errors, so the returned `Program` must not be
    /// trusted unless the error list is empty.
    pub fn parse_program(&mut self) -> (ast::Program, Vec<Error>) {
        let mut prog = ast::Program::new();

        while !self.current_is(&Token::Eof) {
            if let Some(stmt) = self.parse_statement() {
                prog.statements.push(stmt);
            }

            self.next_token();
        }

        (prog, mem::take(&mut self.errors))
    }

    /// Parses the input `Token` stream and creates an `ast::Program`, or
    /// returns all syntax errors if any occurred.
    pub fn parse(&mut self) -> result::Result<ast::Program, Vec<Error>> {
        let (prog, errors) = self.parse_program();

        if errors.is_empty() {
            Ok(prog)
        } else {
            Err(errors)
        }
    }

    /// Looks at the current `Token` and determines if it is the same as `tok`.
    fn current_is(&self, tok: &Token) -> bool {
        self.current == *tok
    }

    /// Peeks at the next `Token` and determines if it is the same as `tok`.
    fn peek_is(&self, tok: &Token) -> bool {
        self.peek == *tok
    }

    /// Advances past the next `Token` if it is the same as `tok`, or records an
    /// error if not.
    fn expect_peek(&mut self, tok: Token) -> Option<()> {
        if self.peek_is(&tok) {
            self.next_token();
            Some(())
        } else {
            self.peek_error(tok.kind());
            None
        }
    }

    /// Advances past the next `Token` and extracts its name if it is a
    /// `Token::Identifier`, or records an error if not.
    fn expect_peek_identifier(&mut self) -> Option<String> {
        if let Token::Identifier(id) = &self.peek {
            let id = id.clone();
            self.next_token();
            Some(id)
        } else {
            self.peek_error("Identifier");
            None
        }
    }

    /// Consumes an optional trailing semicolon.
    fn skip_semicolon(&mut self) {
        if self.peek_is(&Token::Semicolon) {
            self.next_token();
        }
    }

    fn peek_error(&mut self, want: &'static str) {
        let got = self.peek.kind();
        self.error(Error::UnexpectedToken { want, got });
    }

    fn error(&mut self, err: Error) {
        trace!(%err, "recording syntax error");
        self.errors.push(err);
    }

    /// Advances the parser once in its `Token` stream.
    fn next_token(&mut self) {
        // current takes the value of peek, and peek is overwritten immediately
        // after by the next token.
        self.current = mem::replace(&mut self.peek, self.lexer.next_token());
    }

    /// Parses a let, return, or expression statement.
    fn parse_statement(&mut self) -> Option<ast::Statement> {
        match self.current {
            Token::Let => self.parse_let_statement(),
            Token::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    /// Parses a let statement.
    fn parse_let_statement(&mut self) -> Option<ast::Statement> {
        let name = self.expect_peek_identifier()?;
        self.expect_peek(Token::Assign)?;
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest);
        self.skip_semicolon();

        Some(ast::Statement::Let(ast::LetStatement { name, value: value? }))
    }

    /// Parses a return statement.
    fn parse_return_statement(&mut self) -> Option<ast::Statement> {
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest);
        self.skip_semicolon();

        Some(ast::Statement::Return(ast::ReturnStatement { value: value? }))
    }

    /// Parses an expression statement.
    fn parse_expression_statement(&mut self) -> Option<ast::Statement> {
        let expr = self.parse_expression(Precedence::Lowest);
        self.skip_semicolon();

        Some(ast::Statement::Expression(expr?))
    }

    /// Parses an expression, folding in infix operators which bind more
    /// tightly than `precedence`.
    fn parse_expression(&mut self, precedence: Precedence) -> Option<ast::Expression> {
        let mut left = self.parse_prefix()?;

        while !self.peek_is(&Token::Semicolon) && precedence < Precedence::of(&self.peek) {
            left = match self.peek {
                Token::Plus
                | Token::Minus
                | Token::Asterisk
                | Token::Slash
                | Token::Equal
                | Token::NotEqual
                | Token::LessThan
                | Token::GreaterThan => {
                    self.next_token();
                    self.parse_infix_expression(left)?
                }
                Token::LeftParen => {
                    self.next_token();
                    self.parse_call_expression(left)?
                }
                Token::LeftBracket => {
                    self.next_token();
                    self.parse_index_expression(left)?
                }
                _ => return Some(left),
            };
        }

        Some(left)
    }

    /// Parses the expression beginning at the current `Token`.
    fn parse_prefix(&mut self) -> Option<ast::Expression> {
        match self.current.clone() {
            Token::Identifier(id) => Some(ast::Expression::Identifier(id)),
            Token::Integer(raw) => self.parse_integer_literal(raw),
            Token::String(s) => Some(ast::Expression::String(s)),
            Token::Bang | Token::Minus => self.parse_prefix_expression(),
            Token::True => Some(ast::Expression::Boolean(true)),
            Token::False => Some(ast::Expression::Boolean(false)),
            Token::LeftParen => self.parse_grouped_expression(),
            Token::If => self.parse_if_expression(),
            Token::Function => self.parse_function_literal(),
            Token::LeftBracket => self.parse_array_literal(),
            Token::LeftBrace => self.parse_hash_literal(),
            Token::Macro => self.parse_macro_literal(),

            tok => {
                self.error(Error::NoPrefixParser(tok.kind()));
                None
            }
        }
    }

    /// Parses an integer literal from its raw text.
    fn parse_integer_literal(&mut self, raw: String) -> Option<ast::Expression> {
        match parse_integer(&raw) {
            Some(int) => Some(ast::Expression::Integer(int)),
            None => {
                self.error(Error::IllegalInteger(raw));
                None
            }
        }
    }

    /// Parses a prefix expression.
    fn parse_prefix_expression(&mut self) -> Option<ast::Expression> {
        let operator = self.current.clone();

        self.next_token();
        let right = self.parse_expression(Precedence::Prefix)?;

        Some(ast::Expression::Prefix(ast::PrefixExpression {
            operator,
            right: Box::new(right),
        }))
    }

    /// Parses an infix expression with `left` as its left operand.
    fn parse_infix_expression(&mut self, left: ast::Expression) -> Option<ast::Expression> {
        let operator = self.current.clone();
        let precedence = Precedence::of(&operator);

        self.next_token();
        let right = self.parse_expression(precedence)?;

        Some(ast::Expression::Infix(ast::InfixExpression {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }))
    }

    /// Parses a parenthesized expression.
    fn parse_grouped_expression(&mut self) -> Option<ast::Expression> {
        self.next_token();

        let expr = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(Token::RightParen)?;

        Some(expr)
    }

    /// Parses an if/else expression.
    fn parse_if_expression(&mut self) -> Option<ast::Expression> {
        self.expect_peek(Token::LeftParen)?;
        self.next_token();

        let condition = self.parse_expression(Precedence::Lowest)?;

        self.expect_peek(Token::RightParen)?;
        self.expect_peek(Token::LeftBrace)?;

        let consequence = self.parse_block_statement();

        let alternative = if self.peek_is(&Token::Else) {
            self.next_token();
            self.expect_peek(Token::LeftBrace)?;

            Some(self.parse_block_statement())
        } else {
            None
        };

        Some(ast::Expression::If(ast::IfExpression {
            condition: Box::new(condition),
            consequence,
            alternative,
        }))
    }

    /// Parses a block statement, starting on its opening brace.
    fn parse_block_statement(&mut self) -> ast::BlockStatement {
        let mut block = ast::BlockStatement::default();

        self.next_token();

        while !self.current_is(&Token::RightBrace) && !self.current_is(&Token::Eof) {
            if let Some(stmt) = self.parse_statement() {
                block.statements.push(stmt);
            }

            self.next_token();
        }

        block
    }

    /// Parses a function literal.
    fn parse_function_literal(&mut self) -> Option<ast::Expression> {
        let (parameters, body) = self.parse_parameters_and_body()?;

        Some(ast::Expression::Function(ast::FunctionLiteral {
            parameters,
            body,
        }))
    }

    /// Parses a macro literal.
    fn parse_macro_literal(&mut self) -> Option<ast::Expression> {
        let (parameters, body) = self.parse_parameters_and_body()?;

        Some(ast::Expression::Macro(ast::MacroLiteral { parameters, body }))
    }

    /// Parses the parameter list and body shared by function and macro
    /// literals.
    fn parse_parameters_and_body(&mut self) -> Option<(Vec<String>, ast::BlockStatement)> {
        self.expect_peek(Token::LeftParen)?;
        let parameters = self.parse_parameters()?;

        self.expect_peek(Token::LeftBrace)?;
        let body = self.parse_block_statement();

        Some((parameters, body))
    }

    /// Parses a possibly empty list of parameter names.
    fn parse_parameters(&mut self) -> Option<Vec<String>> {
        let mut params = vec![];

        if self.peek_is(&Token::RightParen) {
            self.next_token();
            return Some(params);
        }

        params.push(self.expect_peek_identifier()?);

        while self.peek_is(&Token::Comma) {
            self.next_token();
            params.push(self.expect_peek_identifier()?);
        }

        self.expect_peek(Token::RightParen)?;

        Some(params)
    }

    /// Parses a call expression which invokes `function`.
    fn parse_call_expression(&mut self, function: ast::Expression) -> Option<ast::Expression> {
        let arguments = self.parse_expression_list(Token::RightParen)?;

        Some(ast::Expression::Call(ast::CallExpression {
            function: Box::new(function),
            arguments,
        }))
    }

    /// Parses an array literal.
    fn parse_array_literal(&mut self) -> Option<ast::Expression> {
        let elements = self.parse_expression_list(Token::RightBracket)?;

        Some(ast::Expression::Array(ast::ArrayLiteral { elements }))
    }

    /// Parses a comma separated list of expressions terminated by `end`.
    fn parse_expression_list(&mut self, end: Token) -> Option<Vec<ast::Expression>> {
        let mut list = vec![];

        if self.peek_is(&end) {
            self.next_token();
            return Some(list);
        }

        self.next_token();
        list.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek_is(&Token::Comma) {
            self.next_token();
            self.next_token();
            list.push(self.parse_expression(Precedence::Lowest)?);
        }

        self.expect_peek(end)?;

        Some(list)
    }

    /// Parses an index expression into `left`.
    fn parse_index_expression(&mut self, left: ast::Expression) -> Option<ast::Expression> {
        self.next_token();
        let index = self.parse_expression(Precedence::Lowest)?;

        self.expect_peek(Token::RightBracket)?;

        Some(ast::Expression::Index(ast::IndexExpression {
            left: Box::new(left),
            index: Box::new(index),
        }))
    }

    /// Parses a hash literal of `key: value` pairs.
    fn parse_hash_literal(&mut self) -> Option<ast::Expression> {
        let mut hash = ast::HashLiteral::default();

        while !self.peek_is(&Token::RightBrace) {
            self.next_token();
            let key = self.parse_expression(Precedence::Lowest)?;

            self.expect_peek(Token::Colon)?;

            self.next_token();
            let value = self.parse_expression(Precedence::Lowest)?;

            hash.pairs.push((key, value));

            if !self.peek_is(&Token::RightBrace) {
                self.expect_peek(Token::Comma)?;
            }
        }

        self.expect_peek(Token::RightBrace)?;

        Some(ast::Expression::Hash(hash))
    }
}

/// Parses the raw text of an integer literal. A leading "0x" selects
/// hexadecimal and any other leading "0" selects octal, so "010" is 8.
fn parse_integer(raw: &str) -> Option<ast::Integer> {
    let (radix, digits, base) = if raw.starts_with("0x") {
        (ast::Radix::Hexadecimal, &raw[2..], 16)
    } else if raw.len() > 1 && raw.starts_with('0') {
        (ast::Radix::Octal, &raw[1..], 8)
    } else {
        (ast::Radix::Decimal, raw, 10)
    };

    i64::from_str_radix(digits, base)
        .ok()
        .map(|value| ast::Integer { radix, value })
}
