use crate::facts::{EntryPoint, FunctionDefinition};

/// One rendered unit of context: a header naming the file and line range,
/// then the source text verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextBlock<'a> {
    pub file_path: &'a str,
    pub start_line: usize,
    pub end_line: usize,
    pub source: &'a str,
}

impl<'a> From<&'a FunctionDefinition> for ContextBlock<'a> {
    fn from(definition: &'a FunctionDefinition) -> Self {
        Self {
            file_path: &definition.file_path,
            start_line: definition.start_line,
            end_line: definition.end_line,
            source: &definition.source,
        }
    }
}

impl<'a> From<&'a EntryPoint> for ContextBlock<'a> {
    fn from(entry_point: &'a EntryPoint) -> Self {
        Self {
            file_path: &entry_point.file_path,
            start_line: entry_point.handler_start_line,
            end_line: entry_point.handler_end_line,
            source: &entry_point.handler_source,
        }
    }
}

/// Plain-text renderer for the context handed to the downstream analyzer.
pub struct ContextFormatter {
    comment_prefix: &'static str,
}

impl ContextFormatter {
    pub fn new() -> Self {
        Self {
            comment_prefix: "//",
        }
    }

    pub fn header(&self, block: &ContextBlock<'_>) -> String {
        format!(
            "{} File: {}, Lines {}-{}",
            self.comment_prefix, block.file_path, block.start_line, block.end_line
        )
    }

    /// Blocks in order, separated by a blank line, ending in a newline.
    pub fn render(&self, blocks: &[ContextBlock<'_>]) -> String {
        let parts: Vec<String> = blocks
            .iter()
            .map(|block| format!("{}\n{}", self.header(block), block.source))
            .collect();
        let mut out = parts.join("\n\n");
        out.push('\n');
        out
    }
}

impl Default for ContextFormatter {
    fn default() -> Self {
        Self::new()
    }
}
