//! Lexical analysis for Lox.
//! Lox 词法分析模块。
//!
//! This crate provides the scanner that converts source text into tokens.
//! 本 crate 提供扫描器，将源代码转换为 token 序列。

mod scanner;
mod token;

pub use scanner::{Scanner, scan};
pub use token::{KEYWORDS, Literal, Token, TokenKind};
