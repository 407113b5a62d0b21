//! Flat formatter for assistant output.
//!
//! Deliberately lossy and non-recursive: blocks are split on blank lines,
//! triple-backtick fences become code blocks, and three inline span kinds
//! (inline code, bold, italic) are recognized by paired delimiters, one
//! level deep. This is display formatting, not a markdown document model.

/// Render model output as an HTML fragment.
pub fn render(content: &str) -> String {
    let mut out = String::new();

    for block in content.split("\n\n") {
        if block.trim().is_empty() {
            continue;
        }

        if block.contains("```") {
            // Odd-indexed parts are inside fences.
            for (i, part) in block.split("```").enumerate() {
                if i % 2 == 1 {
                    out.push_str("<pre><code>");
                    out.push_str(&escape(part.trim()));
                    out.push_str("</code></pre>");
                } else if !part.trim().is_empty() {
                    push_paragraph(&mut out, part.trim());
                }
            }
        } else {
            push_paragraph(&mut out, block.trim());
        }
    }

    out
}

fn push_paragraph(out: &mut String, text: &str) {
    out.push_str("<p>");
    out.push_str(&render_inline(text));
    out.push_str("</p>");
}

/// Apply the three inline span rules in a single left-to-right pass.
/// Span content is escaped but never re-scanned, so spans do not nest.
/// Unpaired or empty delimiters fall through as literal text.
fn render_inline(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::new();
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '`' => {
                if let Some(close) = find_delim(&chars, i + 1, '`') {
                    if close > i + 1 {
                        out.push_str("<code>");
                        push_escaped(&mut out, &chars[i + 1..close]);
                        out.push_str("</code>");
                        i = close + 1;
                        continue;
                    }
                }
                out.push('`');
                i += 1;
            }
            '*' => {
                if i + 1 < chars.len() && chars[i + 1] == '*' {
                    // Bold: closing pair after non-empty, asterisk-free content.
                    if let Some(close) = find_delim(&chars, i + 2, '*') {
                        if close > i + 2
                            && close + 1 < chars.len()
                            && chars[close + 1] == '*'
                        {
                            out.push_str("<strong>");
                            push_escaped(&mut out, &chars[i + 2..close]);
                            out.push_str("</strong>");
                            i = close + 2;
                            continue;
                        }
                    }
                    out.push_str("**");
                    i += 2;
                } else {
                    if let Some(close) = find_delim(&chars, i + 1, '*') {
                        if close > i + 1 {
                            out.push_str("<em>");
                            push_escaped(&mut out, &chars[i + 1..close]);
                            out.push_str("</em>");
                            i = close + 1;
                            continue;
                        }
                    }
                    out.push('*');
                    i += 1;
                }
            }
            '\n' => {
                out.push_str("<br>");
                i += 1;
            }
            c => {
                push_escaped_char(&mut out, c);
                i += 1;
            }
        }
    }

    out
}

fn find_delim(chars: &[char], from: usize, delim: char) -> Option<usize> {
    chars[from..]
        .iter()
        .position(|&c| c == delim)
        .map(|pos| from + pos)
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        push_escaped_char(&mut out, c);
    }
    out
}

fn push_escaped(out: &mut String, chars: &[char]) {
    for &c in chars {
        push_escaped_char(out, c);
    }
}

fn push_escaped_char(out: &mut String, c: char) {
    match c {
        '&' => out.push_str("&amp;"),
        '<' => out.push_str("&lt;"),
        '>' => out.push_str("&gt;"),
        '"' => out.push_str("&quot;"),
        '\'' => out.push_str("&#39;"),
        _ => out.push(c),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_fence_renders_code_block() {
        assert_eq!(render("```x=1```"), "<pre><code>x=1</code></pre>");
    }

    #[test]
    fn test_fence_with_surrounding_prose() {
        let html = render("Try this:\n```let n = 5;```\nand run it.");
        assert_eq!(
            html,
            "<p>Try this:</p><pre><code>let n = 5;</code></pre><p>and run it.</p>"
        );
    }

    #[test]
    fn test_paragraphs_split_on_blank_lines() {
        let html = render("First paragraph.\n\nSecond paragraph.");
        assert_eq!(html, "<p>First paragraph.</p><p>Second paragraph.</p>");
    }

    #[test]
    fn test_single_newline_becomes_break() {
        assert_eq!(render("line one\nline two"), "<p>line one<br>line two</p>");
    }

    #[test]
    fn test_inline_spans() {
        assert_eq!(render("use `map` here"), "<p>use <code>map</code> here</p>");
        assert_eq!(render("**important**"), "<p><strong>important</strong></p>");
        assert_eq!(render("an *aside*"), "<p>an <em>aside</em></p>");
    }

    #[test]
    fn test_spans_do_not_nest() {
        // Flat pass: the bold content is escaped, never re-scanned.
        assert_eq!(
            render("**has `code` inside**"),
            "<p><strong>has `code` inside</strong></p>"
        );
    }

    #[test]
    fn test_unpaired_delimiters_stay_literal() {
        assert_eq!(render("a * b"), "<p>a * b</p>");
        assert_eq!(render("2 ** 8"), "<p>2 ** 8</p>");
        assert_eq!(render("tick ` alone"), "<p>tick ` alone</p>");
    }

    #[test]
    fn test_html_is_escaped() {
        assert_eq!(
            render("<script>alert(1)</script>"),
            "<p>&lt;script&gt;alert(1)&lt;/script&gt;</p>"
        );
        assert_eq!(
            render("```a < b && c```"),
            "<pre><code>a &lt; b &amp;&amp; c</code></pre>"
        );
    }

    #[test]
    fn test_empty_and_whitespace_input() {
        assert_eq!(render(""), "");
        assert_eq!(render("\n\n  \n\n"), "");
    }

    #[test]
    fn test_code_block_trimmed() {
        assert_eq!(
            render("```\nfn main() {}\n```"),
            "<pre><code>fn main() {}</code></pre>"
        );
    }
}
