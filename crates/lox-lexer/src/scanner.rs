//! The Lox scanner.
//! Lox 扫描器。

use std::iter::Peekable;
use std::str::CharIndices;

use lox_diagnostic::{ErrorReporter, ScanError};

use crate::token::{Literal, Token, TokenKind};

/// Converts source text into tokens, one character at a time.
/// 逐字符地将源码转换为 token 序列。
///
/// A scanner is good for one pass over its source. Errors go to the
/// [`ErrorReporter`] and scanning carries on with the next character, so
/// [`Scanner::scan_tokens`] always returns a sequence ending in EOF.
pub struct Scanner<'src, 'r> {
    source: &'src str,
    chars: Peekable<CharIndices<'src>>,
    /// Byte offset where the token being scanned begins.
    start: usize,
    /// Byte offset of the next unconsumed character.
    pos: usize,
    /// Incremented for every newline consumed, wherever it appears.
    line: usize,
    tokens: Vec<Token>,
    reporter: &'r mut dyn ErrorReporter,
}

impl<'src, 'r> Scanner<'src, 'r> {
    pub fn new(source: &'src str, reporter: &'r mut dyn ErrorReporter) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            start: 0,
            pos: 0,
            line: 1,
            tokens: Vec::new(),
            reporter,
        }
    }

    /// Scan the rest of the source and return the tokens, terminated by EOF.
    /// 扫描剩余源码，返回以 EOF 结尾的 token 列表。
    ///
    /// Calling this again on an exhausted scanner returns just another EOF.
    pub fn scan_tokens(&mut self) -> Vec<Token> {
        while !self.is_at_end() {
            self.start = self.pos;
            self.scan_token();
        }

        self.tokens.push(Token::eof(self.line));
        std::mem::take(&mut self.tokens)
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Recognize at most one token starting at `self.start`.
    /// 从 `self.start` 开始识别至多一个 token。
    fn scan_token(&mut self) {
        let Some(ch) = self.advance() else {
            return;
        };

        match ch {
            '(' => self.add_token(TokenKind::LeftParen),
            ')' => self.add_token(TokenKind::RightParen),
            '{' => self.add_token(TokenKind::LeftBrace),
            '}' => self.add_token(TokenKind::RightBrace),
            ',' => self.add_token(TokenKind::Comma),
            '.' => self.add_token(TokenKind::Dot),
            '-' => self.add_token(TokenKind::Minus),
            '+' => self.add_token(TokenKind::Plus),
            ';' => self.add_token(TokenKind::Semicolon),
            '*' => self.add_token(TokenKind::Star),

            '!' => {
                let kind = if self.match_char('=') {
                    TokenKind::BangEqual
                } else {
                    TokenKind::Bang
                };
                self.add_token(kind);
            }
            '=' => {
                let kind = if self.match_char('=') {
                    TokenKind::EqualEqual
                } else {
                    TokenKind::Equal
                };
                self.add_token(kind);
            }
            '<' => {
                let kind = if self.match_char('=') {
                    TokenKind::LessEqual
                } else {
                    TokenKind::Less
                };
                self.add_token(kind);
            }
            '>' => {
                let kind = if self.match_char('=') {
                    TokenKind::GreaterEqual
                } else {
                    TokenKind::Greater
                };
                self.add_token(kind);
            }

            // Slash, line comment, or block comment - 斜杠、行注释或块注释
            '/' => {
                if self.match_char('/') {
                    self.skip_line_comment();
                } else if self.match_char('*') {
                    self.skip_block_comment();
                } else {
                    self.add_token(TokenKind::Slash);
                }
            }

            ' ' | '\r' | '\t' => {}
            '\n' => self.line += 1,

            '"' => self.string(),

            c if c.is_ascii_digit() => self.number(),
            c if c.is_ascii_alphabetic() => self.identifier(),

            // TODO: coalesce a run of unexpected characters into one report.
            _ => self.error(ScanError::UnexpectedCharacter {
                line: self.line,
                ch,
            }),
        }
    }

    /// Advance to the next character.
    /// 前进到下一个字符。
    fn advance(&mut self) -> Option<char> {
        let (pos, ch) = self.chars.next()?;
        self.pos = pos + ch.len_utf8();
        Some(ch)
    }

    /// Consume the next character only if it is `expected`.
    /// 仅当下一个字符为 `expected` 时才消耗它。
    fn match_char(&mut self, expected: char) -> bool {
        if self.peek_char() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().map(|&(_, ch)| ch)
    }

    /// Peek at the nth character ahead.
    /// 查看前方第 n 个字符。
    fn peek_nth(&self, n: usize) -> Option<char> {
        self.chars.clone().nth(n).map(|(_, ch)| ch)
    }

    fn lexeme(&self) -> &'src str {
        &self.source[self.start..self.pos]
    }

    fn add_token(&mut self, kind: TokenKind) {
        self.add_literal_token(kind, None);
    }

    fn add_literal_token(&mut self, kind: TokenKind, literal: Option<Literal>) {
        let token = Token::new(kind, self.lexeme(), literal, self.line);
        self.tokens.push(token);
    }

    fn error(&mut self, error: ScanError) {
        self.reporter.report_scan_error(&error);
    }

    /// Skip to the end of the line, leaving the newline for the main loop.
    /// 跳到行尾，换行符留给主循环处理。
    fn skip_line_comment(&mut self) {
        while let Some(ch) = self.peek_char() {
            if ch == '\n' {
                break;
            }
            self.advance();
        }
    }

    /// Skip a `/* ... */` comment. The opening `/*` is already consumed.
    /// 跳过 `/* ... */` 块注释（开头的 `/*` 已消耗）。
    ///
    /// Comments do not nest.
    fn skip_block_comment(&mut self) {
        loop {
            match (self.peek_char(), self.peek_nth(1)) {
                (Some('*'), Some('/')) => {
                    self.advance();
                    self.advance();
                    return;
                }
                (Some(ch), _) => {
                    if ch == '\n' {
                        self.line += 1;
                    }
                    self.advance();
                }
                (None, _) => {
                    self.error(ScanError::UnterminatedComment { line: self.line });
                    return;
                }
            }
        }
    }

    /// Scan a string literal. The opening quote is already consumed.
    /// 扫描字符串字面量（开头的引号已消耗）。
    ///
    /// Backslashes have no special meaning and newlines are kept verbatim.
    fn string(&mut self) {
        loop {
            match self.peek_char() {
                Some('"') => break,
                Some(ch) => {
                    if ch == '\n' {
                        self.line += 1;
                    }
                    self.advance();
                }
                None => {
                    self.error(ScanError::UnterminatedString { line: self.line });
                    return;
                }
            }
        }

        // Closing quote - 结束引号
        self.advance();

        let value = &self.source[self.start + 1..self.pos - 1];
        self.add_literal_token(TokenKind::String, Some(Literal::Str(value.to_owned())));
    }

    /// Scan a number: digits, optionally followed by `.` and more digits.
    /// 扫描数字：一串数字，可选地跟随 `.` 和更多数字。
    ///
    /// A `.` with no digit after it is left for the next token, so `111.`
    /// is a number followed by a dot.
    fn number(&mut self) {
        self.consume_digits();

        if self.peek_char() == Some('.') && self.peek_nth(1).is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
            self.consume_digits();
        }

        // ASCII digits with an optional fraction always parse.
        let Ok(value) = self.lexeme().parse::<f64>() else {
            return;
        };
        self.add_literal_token(TokenKind::Number, Some(Literal::Number(value)));
    }

    fn consume_digits(&mut self) {
        while self.peek_char().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
    }

    /// Scan an identifier or keyword.
    /// 扫描标识符或关键字。
    ///
    /// Only ASCII letters continue an identifier; digits and `_` do not.
    fn identifier(&mut self) {
        while self.peek_char().is_some_and(|c| c.is_ascii_alphabetic()) {
            self.advance();
        }

        let kind = TokenKind::keyword_from_str(self.lexeme()).unwrap_or(TokenKind::Identifier);
        self.add_token(kind);
    }
}

/// Scan `source` in one go.
/// 一次性扫描 `source`。
pub fn scan(source: &str, reporter: &mut dyn ErrorReporter) -> Vec<Token> {
    Scanner::new(source, reporter).scan_tokens()
}
