const INDENT: &str = "    ";

///
/// SourceWriter
///
/// Line-oriented text buffer for generated sources. Lines end in `\n`,
/// blank lines carry no indentation, and `finish` drops trailing whitespace.
///

#[derive(Debug, Default)]
pub struct SourceWriter {
    out: String,
    depth: usize,
}

impl SourceWriter {
    pub const fn new() -> Self {
        Self {
            out: String::new(),
            depth: 0,
        }
    }

    pub fn line(&mut self, text: impl AsRef<str>) {
        let text = text.as_ref();
        if !text.is_empty() {
            for _ in 0..self.depth {
                self.out.push_str(INDENT);
            }
            self.out.push_str(text);
        }
        self.out.push('\n');
    }

    pub fn blank(&mut self) {
        self.out.push('\n');
    }

    /// Write `head`, then `{`, the body one level deeper, and `}`.
    pub fn block(&mut self, head: impl AsRef<str>, body: impl FnOnce(&mut Self)) {
        self.line(head);
        self.line("{");
        self.depth += 1;
        body(self);
        self.depth -= 1;
        self.line("}");
    }

    /// Write a fluent call chain, one call per continuation line, closed with
    /// a semicolon.
    pub fn chain(&mut self, head: impl AsRef<str>, calls: &[String]) {
        let Some((last, rest)) = calls.split_last() else {
            self.line(format!("{};", head.as_ref()));
            return;
        };

        self.line(head);
        self.depth += 1;
        for call in rest {
            self.line(call);
        }
        self.line(format!("{last};"));
        self.depth -= 1;
    }

    /// Import lines, each emitted once in the given order, then the optional
    /// file-scoped namespace.
    pub fn preamble<'a>(
        &mut self,
        usings: impl IntoIterator<Item = &'a str>,
        namespace: Option<&str>,
    ) {
        let mut written: Vec<&str> = Vec::new();
        for using in usings {
            if !written.contains(&using) {
                self.line(format!("using {using};"));
                written.push(using);
            }
        }
        if !written.is_empty() {
            self.blank();
        }

        if let Some(namespace) = namespace {
            self.line(format!("namespace {namespace};"));
            self.blank();
        }
    }

    /// Append text rendered by another writer at its own indentation.
    pub fn append(&mut self, other: Self) {
        self.out.push_str(&other.out);
    }

    pub fn finish(self) -> String {
        self.out.trim_end().to_string()
    }
}

/// Quote text as a string literal in the target language.
pub fn literal(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('"');

    out
}

///
/// TESTS
///
