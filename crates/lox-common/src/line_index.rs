//! Line lookup for diagnostics.
//! 用于诊断的行查找。

use std::ops::Range;

/// Start offsets of every line in a source text.
/// 源码中每一行的起始偏移量。
#[derive(Debug, Clone)]
pub struct LineIndex {
    /// `line_starts[n]` is the byte offset where line `n + 1` begins.
    line_starts: Vec<usize>,
    len: usize,
}

impl LineIndex {
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(
            source
                .bytes()
                .enumerate()
                .filter(|&(_, b)| b == b'\n')
                .map(|(i, _)| i + 1),
        );
        Self {
            line_starts,
            len: source.len(),
        }
    }

    /// Byte range of the 1-based `line`, excluding its terminating newline.
    /// 第 `line` 行（从 1 开始）的字节范围，不含换行符。
    ///
    /// Lines past the end clamp to an empty range at the end of the source,
    /// so a report for the final line counter of a scan always resolves.
    pub fn line_range(&self, line: usize) -> Range<usize> {
        let Some(&start) = line.checked_sub(1).and_then(|i| self.line_starts.get(i)) else {
            return self.len..self.len;
        };
        let end = match self.line_starts.get(line) {
            Some(&next) => next - 1,
            None => self.len,
        };
        start..end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_range_single_line() {
        let index = LineIndex::new("var a;");
        assert_eq!(index.line_range(1), 0..6);
    }

    #[test]
    fn test_line_range_excludes_newline() {
        let index = LineIndex::new("ab\ncd\n");
        assert_eq!(index.line_range(1), 0..2);
        assert_eq!(index.line_range(2), 3..5);
        assert_eq!(index.line_range(3), 6..6);
    }

    #[test]
    fn test_line_range_out_of_range_clamps() {
        let index = LineIndex::new("ab");
        assert_eq!(index.line_range(0), 2..2);
        assert_eq!(index.line_range(7), 2..2);
    }
}
