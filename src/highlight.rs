use syntect::highlighting::ThemeSet;
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

pub struct SnippetHighlighter {
    syntaxset: SyntaxSet,
    themeset: ThemeSet,
}

/// A highlighter that can be instantiated once and used many times for better performance.
impl SnippetHighlighter {
    pub fn new() -> SnippetHighlighter {
        let syntaxset = SyntaxSet::load_defaults_newlines();
        let themeset = ThemeSet::load_defaults();

        SnippetHighlighter {
            syntaxset,
            themeset,
        }
    }

    /// Render a code sample as highlighted HTML.
    ///
    /// `lang` is a syntax token such as a file extension; unknown tokens fall
    /// back to plain text rather than failing.
    pub fn highlight(&self, lang: &str, code: &str) -> Option<String> {
        let syntax = self
            .syntaxset
            .find_syntax_by_token(lang)
            .unwrap_or_else(|| self.syntaxset.find_syntax_plain_text());

        let theme = self
            .themeset
            .themes
            .get("base16-ocean.dark")
            .expect("Couldn't find theme");

        highlighted_html_for_string(code, &self.syntaxset, syntax, theme).ok()
    }
}

impl Default for SnippetHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

/// Render a code sample as highlighted HTML.
pub fn highlight(lang: &str, code: &str) -> Option<String> {
    use std::sync::LazyLock;
    static HIGHLIGHTER: LazyLock<SnippetHighlighter> = LazyLock::new(SnippetHighlighter::new);
    HIGHLIGHTER.highlight(lang, code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_python() {
        let html = highlight("py", "def f():\n    return 1\n").expect("should highlight");
        assert!(html.contains("<pre"));
        assert!(html.contains("def"));
    }

    #[test]
    fn test_unknown_lang_falls_back_to_plain_text() {
        let html = highlight("definitely-not-a-language", "plain words")
            .expect("should still highlight");
        assert!(html.contains("plain words"));
    }

    #[test]
    fn test_highlighter_reuse() {
        let highlighter = SnippetHighlighter::new();
        let first = highlighter.highlight("py", "x = 1").expect("should highlight");
        let second = highlighter.highlight("py", "x = 1").expect("should highlight");
        assert_eq!(first, second);
    }
}
