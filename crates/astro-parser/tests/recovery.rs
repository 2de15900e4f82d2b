//! Error recovery tests for the Astro parser.
//!
//! Half-typed editor content must always produce a tree; these tests pin
//! which errors are reported and which nodes survive.

use astro_parser::{parse, ParseErrorKind, TemplateNode};
use pretty_assertions::assert_eq;

fn error_report(source: &str) -> String {
    let result = parse(source).unwrap();
    result
        .errors
        .iter()
        .map(|e| {
            format!(
                "{}..{}: {}",
                u32::from(e.span.start),
                u32::from(e.span.end),
                e
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_unclosed_element_keeps_children() {
    let source = "<div><p>text</p>";
    let result = parse(source).unwrap();
    let TemplateNode::Element(div) = &result.document.fragment.nodes[0] else {
        panic!("expected element");
    };
    assert_eq!(div.children.len(), 1);
    assert!(div.end_tag.is_none());
    insta::assert_snapshot!(error_report(source), @"0..5: unclosed tag: <div>");
}

#[test]
fn test_mismatched_closing_tag() {
    let source = "<div><span></div>";
    insta::assert_snapshot!(
        error_report(source),
        @"11..17: mismatched closing tag: expected </span>, found </div>"
    );

    let result = parse(source).unwrap();
    let TemplateNode::Element(div) = &result.document.fragment.nodes[0] else {
        panic!("expected element");
    };
    assert!(div.end_tag.is_some());
    assert_eq!(div.span.slice(source), source);
}

#[test]
fn test_stray_closing_tag_is_skipped() {
    let source = "<p>a</p></span><p>b</p>";
    insta::assert_snapshot!(error_report(source), @"8..15: unexpected closing tag: </span>");
    let result = parse(source).unwrap();
    assert_eq!(result.document.fragment.nodes.len(), 2);
}

#[test]
fn test_unclosed_expression() {
    let source = "<p>{value</p>";
    let report = error_report(source);
    assert!(report.starts_with("3..13: unclosed expression"), "{report}");
}

#[test]
fn test_unclosed_comment() {
    insta::assert_snapshot!(error_report("<!-- note"), @"0..9: unclosed comment");
}

#[test]
fn test_dangling_member_access_tag() {
    let source = "---\nconst myMarkdown = await import('../content/post.md');\n---\n\n<myMarkdown.";
    let result = parse(source).unwrap();
    assert!(result.document.frontmatter.is_some());
    assert!(matches!(
        result.errors[0].kind,
        ParseErrorKind::UnclosedStartTag { .. }
    ));

    let element = result
        .document
        .fragment
        .nodes
        .iter()
        .find_map(|node| match node {
            TemplateNode::Element(el) => Some(el),
            _ => None,
        })
        .unwrap();
    assert_eq!(element.name, "myMarkdown.");
    assert_eq!(element.span.slice(source), "<myMarkdown.");
}

#[test]
fn test_start_tag_interrupted_by_next_tag() {
    let source = "<div class=\"a\"\n<p>hi</p>";
    let result = parse(source).unwrap();
    let nodes = &result.document.fragment.nodes;
    assert_eq!(nodes.len(), 3);
    let TemplateNode::Element(div) = &nodes[0] else {
        panic!("expected element");
    };
    assert!(!div.start_tag_closed);
    assert_eq!(div.attributes.len(), 1);
    let TemplateNode::Element(p) = &nodes[2] else {
        panic!("expected element");
    };
    assert_eq!(p.name, "p");
}

#[test]
fn test_unclosed_attribute_expression() {
    let source = "<button onclick={() => go(";
    let result = parse(source).unwrap();
    assert!(result
        .errors
        .iter()
        .any(|e| matches!(e.kind, ParseErrorKind::UnclosedExpression)));
    let TemplateNode::Element(button) = &result.document.fragment.nodes[0] else {
        panic!("expected element");
    };
    assert!(!button.start_tag_closed);
    assert_eq!(button.span.slice(source), source);
}

#[test]
fn test_expression_with_markup_inside() {
    let source = "<ul>{items.map((item) => <li>{item}</li>)}</ul>";
    let result = parse(source).unwrap();
    assert!(result.errors.is_empty(), "{:?}", result.errors);
    let TemplateNode::Element(ul) = &result.document.fragment.nodes[0] else {
        panic!("expected element");
    };
    match &ul.children[0] {
        TemplateNode::Expression(expr) => {
            assert_eq!(expr.expression, "items.map((item) => <li>{item}</li>)")
        }
        other => panic!("unexpected node {other:?}"),
    }
}

#[test]
fn test_apostrophe_in_markup_inside_expression() {
    let source = "<div>{show && <p>Don't</p>}</div>\n<span {title}></span>";
    let result = parse(source).unwrap();
    assert!(result.errors.is_empty(), "{:?}", result.errors);

    let nodes = &result.document.fragment.nodes;
    assert_eq!(nodes.len(), 3);
    let TemplateNode::Element(div) = &nodes[0] else {
        panic!("expected element");
    };
    match &div.children[0] {
        TemplateNode::Expression(expr) => assert_eq!(expr.expression, "show && <p>Don't</p>"),
        other => panic!("unexpected node {other:?}"),
    }
    let TemplateNode::Element(span) = &nodes[2] else {
        panic!("expected element");
    };
    assert_eq!(span.name, "span");
    assert_eq!(span.attributes.len(), 1);
}
