use crate::section::content::CodeSnippet;

/// Options forwarded to a [`CodeDisplay`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct CodeDisplayOptions {
    /// Prefix each line with its number.
    pub show_line_numbers: bool,
}

/// Whatever a code display produced for one snippet.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct CodeView {
    /// Display name shown above the code.
    pub filename: String,
    /// Rendered lines.
    pub lines: Vec<String>,
}

/// External collaborator that turns code text into a visual element.
///
/// Syntax highlighting and line numbering are entirely its concern; sections only hand it the
/// text, the display name and the options.
pub trait CodeDisplay {
    /// Render `code` under `filename`.
    fn render(&self, code: &str, filename: &str, options: CodeDisplayOptions) -> CodeView;

    /// Render a [`CodeSnippet`].
    fn render_snippet(&self, snippet: &CodeSnippet) -> CodeView {
        self.render(
            &snippet.code,
            &snippet.filename,
            CodeDisplayOptions {
                show_line_numbers: snippet.show_line_numbers,
            },
        )
    }
}

/// Unhighlighted display: one entry per source line, optionally numbered.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlainCodeDisplay;

impl CodeDisplay for PlainCodeDisplay {
    fn render(&self, code: &str, filename: &str, options: CodeDisplayOptions) -> CodeView {
        let count = code.lines().count();
        let width = count.to_string().len();
        let lines = code
            .lines()
            .enumerate()
            .map(|(i, line)| {
                if options.show_line_numbers {
                    format!("{:>width$} | {line}", i + 1)
                } else {
                    line.to_string()
                }
            })
            .collect();
        CodeView {
            filename: filename.to_string(),
            lines,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/section/code.rs"]
mod tests;
