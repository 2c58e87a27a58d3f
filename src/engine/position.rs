/// Precomputed newline-offset index for one buffer.
///
/// Building is O(n); each `line_col` lookup is O(log n), which matters
/// when many findings land in the same buffer.
#[derive(Debug, Clone)]
pub struct LineIndex {
    line_starts: Vec<usize>,
}

impl LineIndex {
    #[must_use]
    pub fn new(buffer: &str) -> Self {
        let mut line_starts = vec![0];
        for (i, b) in buffer.bytes().enumerate() {
            if b == b'\n' {
                line_starts.push(i + 1);
            }
        }
        Self { line_starts }
    }

    /// Map a byte offset to a 1-based (line, column) pair.
    ///
    /// Line is 1 plus the count of newlines strictly before the offset;
    /// column is the byte distance from the start of that line, plus 1.
    /// An offset pointing at a newline byte therefore reports the line
    /// the newline terminates, with column = line length + 1.
    #[must_use]
    pub fn line_col(&self, offset: usize) -> (usize, usize) {
        let line = self.line_starts.partition_point(|&start| start <= offset);
        let line_start = self.line_starts[line - 1];
        (line, offset - line_start + 1)
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Text of a 1-based line, without its trailing newline.
    #[must_use]
    pub fn line_text<'a>(&self, buffer: &'a str, line: usize) -> Option<&'a str> {
        let start = *self.line_starts.get(line.checked_sub(1)?)?;
        let end = self
            .line_starts
            .get(line)
            .map_or(buffer.len(), |next| next - 1);
        buffer.get(start..end)
    }
}

#[cfg(test)]
#[path = "position_tests.rs"]
mod tests;
