//! HTML instructions to markdown for each exercise's README.
//!
//! Covers the markup challenge instructions actually use: paragraphs,
//! headings, emphasis, inline code, `pre` blocks, lists, links and line
//! breaks. Unknown tags contribute their text.

use scraper::{ElementRef, Html, Node};

pub fn html_to_markdown(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    let mut out = String::new();
    render_children(fragment.root_element(), &mut out);
    normalize(&out)
}

fn render_children(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        if let Some(child_element) = ElementRef::wrap(child) {
            render_element(child_element, out);
        } else if let Node::Text(text) = child.value() {
            push_inline_text(out, text);
        }
    }
}

fn render_element(element: ElementRef<'_>, out: &mut String) {
    let name = element.value().name();
    match name {
        "p" | "div" | "blockquote" => {
            start_block(out);
            if name == "blockquote" {
                let mut inner = String::new();
                render_children(element, &mut inner);
                for line in normalize(&inner).lines() {
                    out.push_str("> ");
                    out.push_str(line);
                    out.push('\n');
                }
            } else {
                render_children(element, out);
            }
            end_block(out);
        }
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
            let level = name[1..].parse::<usize>().unwrap_or(1);
            start_block(out);
            out.push_str(&"#".repeat(level));
            out.push(' ');
            render_children(element, out);
            end_block(out);
        }
        "strong" | "b" => wrap_inline(element, out, "**"),
        "em" | "i" => wrap_inline(element, out, "_"),
        "code" => {
            out.push('`');
            out.extend(element.text());
            out.push('`');
        }
        "pre" => {
            start_block(out);
            let code: String = element.text().collect();
            out.push_str("```\n");
            out.push_str(code.trim_end_matches('\n'));
            out.push_str("\n```");
            end_block(out);
        }
        "ul" | "ol" => render_list(element, out, name == "ol"),
        "a" => match element.value().attr("href") {
            Some(href) => {
                out.push('[');
                render_children(element, out);
                out.push_str("](");
                out.push_str(href);
                out.push(')');
            }
            None => render_children(element, out),
        },
        "br" => {
            trim_trailing_spaces(out);
            out.push_str("  \n");
        }
        "script" | "style" => {}
        _ => render_children(element, out),
    }
}

fn wrap_inline(element: ElementRef<'_>, out: &mut String, marker: &str) {
    out.push_str(marker);
    render_children(element, out);
    trim_trailing_spaces(out);
    out.push_str(marker);
}

fn render_list(element: ElementRef<'_>, out: &mut String, ordered: bool) {
    start_block(out);
    let items = element
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|child| child.value().name() == "li");

    for (index, item) in items.enumerate() {
        let mut inner = String::new();
        render_children(item, &mut inner);
        let marker = if ordered {
            format!("{}. ", index + 1)
        } else {
            "- ".to_string()
        };
        let indent = " ".repeat(marker.len());

        for (line_number, line) in normalize(&inner).lines().enumerate() {
            if line_number == 0 {
                out.push_str(&marker);
            } else if !line.is_empty() {
                out.push_str(&indent);
            }
            out.push_str(line);
            out.push('\n');
        }
    }
    end_block(out);
}

/// Append text with HTML whitespace collapsing
fn push_inline_text(out: &mut String, text: &str) {
    let mut pending_space = text.starts_with(char::is_whitespace);
    for word in text.split_whitespace() {
        if pending_space {
            push_space(out);
        }
        out.push_str(word);
        pending_space = true;
    }
    if text.ends_with(char::is_whitespace) {
        push_space(out);
    }
}

fn push_space(out: &mut String) {
    if !out.is_empty() && !out.ends_with([' ', '\n']) {
        out.push(' ');
    }
}

fn trim_trailing_spaces(out: &mut String) {
    let trimmed = out.trim_end_matches(' ').len();
    out.truncate(trimmed);
}

fn start_block(out: &mut String) {
    trim_trailing_spaces(out);
    if out.is_empty() {
        return;
    }
    while !out.ends_with("\n\n") {
        out.push('\n');
    }
}

fn end_block(out: &mut String) {
    trim_trailing_spaces(out);
    out.push_str("\n\n");
}

/// Collapse runs of blank lines and end with exactly one newline
fn normalize(markdown: &str) -> String {
    let mut result = String::with_capacity(markdown.len());
    let mut blank_run = 0;
    for line in markdown.trim().lines() {
        if line.trim().is_empty() {
            blank_run += 1;
            if blank_run > 1 {
                continue;
            }
            result.push('\n');
        } else {
            blank_run = 0;
            result.push_str(line);
            result.push('\n');
        }
    }
    result
}
