/// Line-oriented text buffer that prefixes every line with the current
/// indentation depth.
#[derive(Debug, Clone)]
pub struct CodeWriter {
    buffer: String,
    unit: String,
    depth: usize,
}

impl CodeWriter {
    pub fn new(indent_width: usize) -> Self {
        Self {
            buffer: String::new(),
            unit: " ".repeat(indent_width),
            depth: 0,
        }
    }

    pub fn line(&mut self, text: impl AsRef<str>) {
        let text = text.as_ref();
        if !text.is_empty() {
            for _ in 0..self.depth {
                self.buffer.push_str(&self.unit);
            }
            self.buffer.push_str(text);
        }
        self.buffer.push('\n');
    }

    pub fn blank(&mut self) {
        self.buffer.push('\n');
    }

    pub fn indent(&mut self) {
        self.depth += 1;
    }

    pub fn dedent(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Write `open`, run `body` one level deeper, then write `close`.
    pub fn block(&mut self, open: impl AsRef<str>, close: &str, body: impl FnOnce(&mut Self)) {
        self.line(open);
        self.indent();
        body(self);
        self.dedent();
        self.line(close);
    }

    pub fn finish(self) -> String {
        self.buffer
    }
}
