//! A lexer for the Monkey programming language from <https://interpreterbook.com/>.

use crate::token::{self, Token};

/// Lexes input and produces a stream of `Token`s for the Monkey programming
/// language.
pub struct Lexer<'a> {
    input: &'a str,
    // Byte offsets of the current character and the one after it.
    position: usize,
    read_position: usize,
    ch: char,
}

impl<'a> Lexer<'a> {
    /// Creates a new `Lexer` by accepting an input string.
    pub fn new(input: &'a str) -> Self {
        let mut l = Lexer {
            input,
            position: 0,
            read_position: 0,
            ch: 0 as char,
        };

        // Advance once to ready the Lexer.
        l.read_char();
        l
    }

    /// Lexes all tokens from an input string and produces a vector of `Token`s
    /// until an `Eof` token is encountered.
    pub fn lex(&mut self) -> Vec<Token> {
        let mut tokens = vec![];

        // Consume tokens from the stream until Eof.
        loop {
            let t = self.next_token();
            match t {
                Token::Eof => {
                    tokens.push(t);
                    return tokens;
                }
                _ => {
                    tokens.push(t);
                }
            }
        }
    }

    /// Advances the lexer once and produces a single Token. Once the input is
    /// exhausted, every call produces `Token::Eof`.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let t = match self.ch {
            '=' => {
                // Is this '==' or just '='?
                if self.peek_char() == '=' {
                    self.read_char();
                    Token::Equal
                } else {
                    Token::Assign
                }
            }
            '+' => Token::Plus,
            '-' => Token::Minus,
            '!' => {
                // Is this '!=' or just '!'?
                if self.peek_char() == '=' {
                    self.read_char();
                    Token::NotEqual
                } else {
                    Token::Bang
                }
            }
            '*' => Token::Asterisk,
            '/' => Token::Slash,
            '<' => Token::LessThan,
            '>' => Token::GreaterThan,
            ',' => Token::Comma,
            ':' => Token::Colon,
            ';' => Token::Semicolon,
            '(' => Token::LeftParen,
            ')' => Token::RightParen,
            '{' => Token::LeftBrace,
            '}' => Token::RightBrace,
            '[' => Token::LeftBracket,
            ']' => Token::RightBracket,
            '"' => Token::String(self.read_string()),
            '\u{0000}' => Token::Eof,

            _ => {
                if is_letter(self.ch) {
                    let ident = self.read_identifier();

                    // Determine if this identifier is actually a keyword, and
                    // return that keyword if so.
                    return token::lookup_keyword(&ident).unwrap_or(Token::Identifier(ident));
                } else if is_digit(self.ch) {
                    return Token::Integer(self.read_number());
                } else {
                    // No known tokens for this character, return Illegal.
                    Token::Illegal(self.ch)
                }
            }
        };

        // Advance to the next character in preparation for the next call.
        self.read_char();
        t
    }

    // Peeks at the next character in the input without advancing the Lexer.
    fn peek_char(&self) -> char {
        self.input[self.read_position..]
            .chars()
            .next()
            .unwrap_or(0 as char)
    }

    // Consumes the next character of input while advancing the Lexer.
    fn read_char(&mut self) {
        self.position = self.read_position;

        match self.input[self.read_position..].chars().next() {
            Some(ch) => {
                self.ch = ch;
                self.read_position += ch.len_utf8();
            }
            None => {
                // Stay parked at the end of input.
                self.ch = 0 as char;
            }
        }
    }

    // Reads an identifier or keyword string.
    fn read_identifier(&mut self) -> String {
        let pos = self.position;

        while is_letter(self.ch) {
            self.read_char();
        }

        self.input[pos..self.position].to_string()
    }

    // Reads the raw text of an integer literal.
    fn read_number(&mut self) -> String {
        let pos = self.position;

        while is_digit(self.ch) {
            self.read_char();
        }

        self.input[pos..self.position].to_string()
    }

    // Reads the contents of a string literal, leaving the lexer on the closing
    // quote. An unterminated string runs to the end of input.
    fn read_string(&mut self) -> String {
        let pos = self.position + 1;

        loop {
            self.read_char();
            if self.ch == '"' || self.ch == '\u{0000}' {
                break;
            }
        }

        self.input[pos..self.position].to_string()
    }

    // Advances the lexer until all contiguous whitespace is consumed.
    fn skip_whitespace(&mut self) {
        while matches!(self.ch, ' ' | '\t' | '\n' | '\r') {
            self.read_char();
        }
    }
}

// Determines if a character is considered a letter in Monkey.
fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

// Determines if a character is considered a number in Monkey.
fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}
