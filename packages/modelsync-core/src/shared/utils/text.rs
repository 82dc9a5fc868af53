//! Indentation helpers for the printer

/// Leading whitespace of the line containing byte `offset`
pub fn line_indent(text: &str, offset: usize) -> &str {
    let offset = offset.min(text.len());
    let line_start = text[..offset].rfind('\n').map(|p| p + 1).unwrap_or(0);
    let line = &text[line_start..];
    let width = line
        .bytes()
        .take_while(|b| *b == b' ' || *b == b'\t')
        .count();
    &line[..width]
}

/// Prefix every continuation line of `text` with `indent`
///
/// Line breaks are rewritten to `newline`. Empty lines stay empty.
pub fn reindent(text: &str, indent: &str, newline: &str) -> String {
    if !text.contains('\n') {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len() + indent.len() * 4);
    for (i, line) in text.split('\n').enumerate() {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if i > 0 {
            out.push_str(newline);
            if !line.is_empty() {
                out.push_str(indent);
            }
        }
        out.push_str(line);
    }
    out
}

/// Line break style of a file: `\r\n` when its first line ends that way
pub fn detect_newline(text: &str) -> &'static str {
    match text.find('\n') {
        Some(p) if text[..p].ends_with('\r') => "\r\n",
        _ => "\n",
    }
}

/// Whether text made of comments and whitespace ends inside a `//` comment
pub fn ends_in_line_comment(text: &str) -> bool {
    let last = text.rsplit('\n').next().unwrap_or_default();
    match last.find("//") {
        Some(p) => !last[p..].contains("*/"),
        None => false,
    }
}

/// Guess the indentation unit of a source file
///
/// Tabs win as soon as one indented line starts with a tab; otherwise the
/// smallest non-zero run of leading spaces. Block-comment continuation lines
/// (`   * text`) are ignored.
pub fn detect_indent_unit(text: &str) -> Option<String> {
    let mut smallest: Option<usize> = None;
    for line in text.lines() {
        let rest = line.trim_start_matches([' ', '\t']);
        if rest.is_empty() || rest.starts_with('*') {
            continue;
        }
        let lead = &line[..line.len() - rest.len()];
        if lead.starts_with('\t') {
            return Some("\t".to_string());
        }
        let width = lead.len();
        if width > 0 && smallest.map_or(true, |s| width < s) {
            smallest = Some(width);
        }
    }
    smallest.map(|w| " ".repeat(w))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_indent() {
        let text = "a\n    b: {}\n";
        assert_eq!(line_indent(text, 8), "    ");
        assert_eq!(line_indent(text, 0), "");
    }

    #[test]
    fn test_reindent_skips_first_and_empty_lines() {
        let text = "function (state) {\n\n  return state;\n}";
        assert_eq!(
            reindent(text, "    ", "\n"),
            "function (state) {\n\n      return state;\n    }"
        );
        assert_eq!(reindent("1", "  ", "\n"), "1");
    }

    #[test]
    fn test_reindent_rewrites_line_breaks() {
        assert_eq!(reindent("{\n  a: 1\r\n}", "", "\r\n"), "{\r\n  a: 1\r\n}");
        assert_eq!(reindent("{\r\n  a\r\n}", "  ", "\n"), "{\n    a\n  }");
    }

    #[test]
    fn test_detect_newline() {
        assert_eq!(detect_newline("a\r\nb\n"), "\r\n");
        assert_eq!(detect_newline("a\nb\r\n"), "\n");
        assert_eq!(detect_newline("single line"), "\n");
    }

    #[test]
    fn test_ends_in_line_comment() {
        assert!(ends_in_line_comment(" // note"));
        assert!(ends_in_line_comment("\n  /* a */ // b"));
        assert!(!ends_in_line_comment("// a\n  /* b */"));
        assert!(!ends_in_line_comment(" /* see // here */"));
        assert!(!ends_in_line_comment("\n  "));
    }

    #[test]
    fn test_detect_indent_unit() {
        assert_eq!(
            detect_indent_unit("x = {\n    a: 1,\n      b: 2\n}"),
            Some("    ".to_string())
        );
        assert_eq!(detect_indent_unit("/**\n * doc\n */\nx\n\ty"), Some("\t".to_string()));
        assert_eq!(detect_indent_unit("x;\ny;"), None);
    }
}
