//! Common source-position utilities for Lox.
//! Lox 的通用源码位置工具。
//!
//! The scanner reports errors by line number only; `LineIndex` maps those
//! lines back to byte ranges so a report can be drawn against the source.
//! 扫描器只按行号报告错误；`LineIndex` 将行号映射回字节范围，
//! 以便在源码上渲染报告。

mod line_index;

pub use line_index::LineIndex;
