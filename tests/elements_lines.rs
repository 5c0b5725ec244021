//! Unit tests for isolated line kinds
//!
//! Each test parses a small document and checks the accessor contract of the resulting
//! nodes: true type, core type, level, data, meta, prefix and canonical form.

use gmi::gemtext::parsing::parse_document;
use gmi::gemtext::testing::assert_lines;
use gmi::gemtext::LineType;

#[test]
fn test_text_lines() {
    let parser = parse_document("hello world\n\n  indented  \n*\n");

    assert_lines(parser.lines())
        .count(4)
        .line(0, |line| {
            line.line_type(LineType::Text)
                .data("hello world")
                .prefix("")
                .renders_as("hello world");
        })
        .line(1, |line| {
            line.line_type(LineType::Text).data("");
        })
        .line(2, |line| {
            line.line_type(LineType::Text).data("  indented");
        })
        .line(3, |line| {
            line.line_type(LineType::Text).data("*");
        });
}

#[test]
fn test_link_lines() {
    let parser = parse_document("=>\n=> target  Friendly Name\n=>gemini://example.org/\n");

    assert_lines(parser.lines())
        .count(3)
        .line(0, |line| {
            line.line_type(LineType::Link).data("").meta("");
        })
        .line(1, |line| {
            line.line_type(LineType::Link)
                .core_type(LineType::Link)
                .data("target")
                .meta("Friendly Name")
                .prefix("=>")
                .renders_as("=> target Friendly Name");
        })
        .line(2, |line| {
            line.data("gemini://example.org/")
                .meta("")
                .renders_as("=> gemini://example.org/");
        });
}

#[test]
fn test_heading_lines() {
    let parser = parse_document("# One\n## Two\n###Three\n####\n");

    assert_lines(parser.lines())
        .count(4)
        .line(0, |line| {
            line.heading(1)
                .core_type(LineType::Text)
                .data("One")
                .prefix("#")
                .renders_as("# One");
        })
        .line(1, |line| {
            line.heading(2).data("Two").prefix("##");
        })
        .line(2, |line| {
            line.heading(3).data("Three").prefix("###");
        })
        .line(3, |line| {
            line.heading(3).data("#");
        });
}

#[test]
fn test_list_and_quote_lines() {
    let parser = parse_document("* x\n*   spaced   \n>quote\n> \n");

    assert_lines(parser.lines())
        .types(&[
            LineType::UnorderedList,
            LineType::UnorderedList,
            LineType::Quote,
            LineType::Quote,
        ])
        .line(0, |line| {
            line.core_type(LineType::Text)
                .data("x")
                .prefix("*")
                .renders_as("* x");
        })
        .line(1, |line| {
            line.data("spaced");
        })
        .line(2, |line| {
            line.core_type(LineType::Text)
                .data("quote")
                .prefix(">")
                .renders_as("> quote");
        })
        .line(3, |line| {
            line.data("");
        });
}

#[test]
fn test_preformat_lines() {
    let parser = parse_document("``` rust \n  let x = 1;  \n# not a heading\n```\n");

    assert_lines(parser.lines())
        .types(&[
            LineType::PreformatToggle,
            LineType::Preformat,
            LineType::Preformat,
            LineType::PreformatToggle,
        ])
        .line(0, |line| {
            line.core_type(LineType::PreformatToggle)
                .data("rust")
                .prefix("```")
                .renders_as("rust");
        })
        .line(1, |line| {
            line.data("  let x = 1;  ")
                .prefix("")
                .renders_as("  let x = 1;  ");
        })
        .line(2, |line| {
            line.data("# not a heading");
        })
        .line(3, |line| {
            line.data("");
        });
}
