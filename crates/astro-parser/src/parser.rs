//! Error-tolerant recursive descent parser for Astro components.

use crate::ast::*;
use crate::error::{ParseError, ParseErrorKind};
use crate::lexer::{Lexer, Token, TokenKind};
use crate::scan;
use crate::{ParseOptions, ParseResult};
use smol_str::SmolStr;
use source_map::Span;

/// HTML void elements that never take children.
/// See: https://developer.mozilla.org/en-US/docs/Glossary/Void_element
const HTML_VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Elements whose content is raw text rather than markup.
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

/// Returns true if the given element name is an HTML void element.
pub(crate) fn is_void_element(name: &str) -> bool {
    HTML_VOID_ELEMENTS
        .iter()
        .any(|void| void.eq_ignore_ascii_case(name))
}

fn is_raw_text_element(name: &str) -> bool {
    RAW_TEXT_ELEMENTS
        .iter()
        .any(|raw| raw.eq_ignore_ascii_case(name))
}

/// The Astro parser.
pub struct Parser<'src> {
    /// The source being parsed.
    source: &'src str,
    /// Byte offset of the cursor.
    pos: usize,
    /// Parse errors collected during parsing.
    errors: Vec<ParseError>,
    /// Names of the currently open elements, outermost first.
    open_elements: Vec<SmolStr>,
    /// Parser options.
    options: ParseOptions,
}

impl<'src> Parser<'src> {
    /// Creates a new parser.
    pub fn new(source: &'src str, options: ParseOptions) -> Self {
        Self {
            source,
            pos: 0,
            errors: Vec::new(),
            open_elements: Vec::new(),
            options,
        }
    }

    /// Parses the source into an Astro document.
    pub fn parse(mut self) -> ParseResult {
        let document = self.parse_document();
        ParseResult {
            document,
            errors: self.errors,
        }
    }

    // === Cursor helpers ===

    /// Returns the next token at or after the cursor.
    fn peek(&self) -> Token {
        Lexer::at(self.source, self.pos)
            .next()
            .unwrap_or_else(|| self.eof_token())
    }

    fn eof_token(&self) -> Token {
        Token {
            kind: TokenKind::Eof,
            span: Span::empty(source_map::offset(self.source.len())),
        }
    }

    /// Moves the cursor past the given token.
    fn bump(&mut self, token: Token) {
        self.pos = token.span.end_usize();
    }

    fn bytes(&self) -> &'src [u8] {
        self.source.as_bytes()
    }

    fn slice(&self, start: usize, end: usize) -> &'src str {
        self.source.get(start..end).unwrap_or("")
    }

    fn span_from(&self, start: usize) -> Span {
        Span::from_usize(start, self.pos)
    }

    /// Reports an error at the given span.
    fn error(&mut self, kind: ParseErrorKind, span: Span) {
        if self.options.trace {
            tracing::trace!(error = %kind, ?span, "recovered from parse error");
        }
        self.errors.push(ParseError::new(kind, span));
    }

    /// Classifies a `<` at `at`. Returns `None` when it is plain text, as in
    /// `a < b`.
    fn markup_kind_at(&self, at: usize) -> Option<TokenKind> {
        let bytes = self.bytes();
        match bytes.get(at + 1) {
            Some(b'/') if scan::starts_tag_name(bytes.get(at + 2)) => {
                Some(TokenKind::LAngleSlash)
            }
            Some(b'!') if bytes[at..].starts_with(b"<!--") => Some(TokenKind::CommentOpen),
            Some(b'!') => Some(TokenKind::LAngleBang),
            next if scan::starts_tag_name(next) => Some(TokenKind::LAngle),
            _ => None,
        }
    }

    // === Document ===

    fn parse_document(&mut self) -> AstroDocument {
        let frontmatter = self.parse_frontmatter();
        let start = self.pos;
        let nodes = self.parse_nodes();
        AstroDocument {
            frontmatter,
            fragment: Fragment {
                nodes,
                span: Span::from_usize(start, self.source.len()),
            },
            span: Span::from_usize(0, self.source.len()),
        }
    }

    /// Parses the `---` fenced script block at the top of the document.
    ///
    /// Only whitespace may precede the opening fence, and each fence must
    /// start its own line.
    fn parse_frontmatter(&mut self) -> Option<Frontmatter> {
        let trimmed = self.source.trim_start();
        if !trimmed.starts_with("---") {
            return None;
        }
        let open = self.source.len() - trimmed.len();
        let content_start = open + 3;

        let opening_line_end = line_end(self.source, content_start);
        if !self.slice(content_start, opening_line_end).trim().is_empty() {
            return None;
        }

        let Some(close) = find_closing_fence(self.source, opening_line_end) else {
            self.error(
                ParseErrorKind::UnclosedFrontmatter,
                Span::from_usize(open, content_start),
            );
            return None;
        };

        // The rest of the closing fence's line belongs to the fence when blank.
        let mut end = close + 3;
        let close_line_end = line_end(self.source, end);
        if self.slice(end, close_line_end).trim().is_empty() {
            end = (close_line_end + 1).min(self.source.len());
        }
        self.pos = end;

        if self.options.trace {
            tracing::trace!(start = open, end, "parsed frontmatter");
        }

        Some(Frontmatter {
            span: Span::from_usize(open, end),
            content_span: Span::from_usize(content_start, close),
            content: self.slice(content_start, close).to_string(),
        })
    }

    // === Template ===

    /// Parses nodes until the end of input or a closing tag that belongs to
    /// an open element.
    fn parse_nodes(&mut self) -> Vec<TemplateNode> {
        let mut nodes = Vec::new();

        while let Some(&b) = self.bytes().get(self.pos) {
            let node = match b {
                b'{' => self.parse_expression_tag(),
                b'<' => match self.markup_kind_at(self.pos) {
                    Some(TokenKind::LAngleSlash) => {
                        if self.closes_open_element() {
                            break;
                        }
                        continue;
                    }
                    Some(TokenKind::CommentOpen) => self.parse_comment(),
                    Some(TokenKind::LAngleBang) => self.parse_doctype(),
                    Some(_) => self.parse_element(),
                    None => self.parse_text(),
                },
                _ => self.parse_text(),
            };

            if self.options.trace {
                tracing::trace!(span = ?node.span(), "parsed node");
            }
            nodes.push(node);
        }

        nodes
    }

    /// Handles a closing tag at the cursor.
    ///
    /// Returns true if it closes one of the open elements, leaving it
    /// unconsumed for that element. A closing tag with no open element is
    /// reported and skipped.
    fn closes_open_element(&mut self) -> bool {
        let found = self.closing_tag_name();
        match self.open_elements.iter().rposition(|name| *name == found) {
            Some(idx) => {
                if idx + 1 != self.open_elements.len() {
                    let expected = self
                        .open_elements
                        .last()
                        .map(ToString::to_string)
                        .unwrap_or_default();
                    let span = self.closing_tag_span();
                    self.error(
                        ParseErrorKind::MismatchedClosingTag {
                            expected,
                            found: found.to_string(),
                        },
                        span,
                    );
                }
                true
            }
            None => {
                let span = self.consume_closing_tag();
                self.error(
                    ParseErrorKind::StrayClosingTag {
                        tag_name: found.to_string(),
                    },
                    span,
                );
                false
            }
        }
    }

    /// Returns the name in the closing tag at the cursor.
    fn closing_tag_name(&self) -> &'src str {
        let name_start = self.pos + 2;
        match Lexer::at(self.source, name_start).next() {
            Some(token) if token.kind == TokenKind::Name && token.span.start_usize() == name_start => {
                token.span.slice(self.source)
            }
            _ => "",
        }
    }

    /// Returns the span the closing tag at the cursor would consume.
    fn closing_tag_span(&self) -> Span {
        let mut end = self.pos + 2 + self.closing_tag_name().len();
        if let Some(token) = Lexer::at(self.source, end).next() {
            if token.kind == TokenKind::RAngle {
                end = token.span.end_usize();
            }
        }
        Span::from_usize(self.pos, end)
    }

    /// Consumes the closing tag at the cursor and returns its span.
    fn consume_closing_tag(&mut self) -> Span {
        let span = self.closing_tag_span();
        self.pos = span.end_usize();
        span
    }

    /// Parses the closing tag of `element`, if the cursor is on it.
    fn parse_closing_tag(&mut self, element: &Element) -> Option<Span> {
        if self.pos >= self.source.len() {
            self.error(
                ParseErrorKind::UnclosedTag {
                    tag_name: element.name.to_string(),
                },
                element.start_tag_span,
            );
            return None;
        }
        // A closing tag for an ancestor was already reported as mismatched.
        if element.name != self.closing_tag_name() {
            return None;
        }
        Some(self.consume_closing_tag())
    }

    fn parse_element(&mut self) -> TemplateNode {
        let start = self.pos;
        self.pos += 1;

        let (name, name_span) = self.parse_tag_name();
        let attributes = self.parse_attributes();

        let mut element = Element {
            span: Span::empty(source_map::offset(start)),
            name,
            name_span,
            attributes,
            children: Vec::new(),
            self_closing: false,
            start_tag_closed: false,
            start_tag_span: Span::empty(source_map::offset(start)),
            end_tag: None,
            raw_content: None,
        };

        let close = self.peek();
        match close.kind {
            TokenKind::RAngle => self.bump(close),
            TokenKind::SlashRAngle => {
                self.bump(close);
                element.self_closing = true;
            }
            _ => {
                // Whatever followed the last attribute is left for the
                // enclosing fragment.
                self.pos = element
                    .attributes
                    .last()
                    .map_or(element.name_span, Attribute::span)
                    .end_usize();
                element.start_tag_span = self.span_from(start);
                element.span = element.start_tag_span;
                self.error(
                    ParseErrorKind::UnclosedStartTag {
                        tag_name: element.name.to_string(),
                    },
                    element.span,
                );
                return TemplateNode::Element(element);
            }
        }
        element.start_tag_closed = true;
        element.start_tag_span = self.span_from(start);

        if element.self_closing || element.is_void() {
            // A redundant `</br>` right after `<br>` belongs to the void element.
            if element.is_void()
                && self.bytes()[self.pos..].starts_with(b"</")
                && self.closing_tag_name().eq_ignore_ascii_case(&element.name)
            {
                element.end_tag = Some(self.consume_closing_tag());
            }
            element.span = self.span_from(start);
            return TemplateNode::Element(element);
        }

        if is_raw_text_element(&element.name) {
            self.parse_raw_text(&mut element);
        } else {
            self.open_elements.push(element.name.clone());
            element.children = self.parse_nodes();
            self.open_elements.pop();
            element.end_tag = self.parse_closing_tag(&element);
        }

        element.span = self.span_from(start);
        TemplateNode::Element(element)
    }

    /// Parses the tag name directly after `<`. Fragments (`<>`) have an
    /// empty name.
    fn parse_tag_name(&mut self) -> (SmolStr, Span) {
        let token = self.peek();
        if token.kind == TokenKind::Name && token.span.start_usize() == self.pos {
            self.bump(token);
            (SmolStr::new(token.span.slice(self.source)), token.span)
        } else {
            (SmolStr::default(), Span::empty(source_map::offset(self.pos)))
        }
    }

    /// Reads the content of a `script` or `style` element verbatim.
    fn parse_raw_text(&mut self, element: &mut Element) {
        let content_start = self.pos;
        let name = element.name.as_str();
        let close = self.source[content_start..]
            .match_indices("</")
            .map(|(idx, _)| content_start + idx)
            .find(|&idx| {
                self.source
                    .get(idx + 2..idx + 2 + name.len())
                    .is_some_and(|candidate| candidate.eq_ignore_ascii_case(name))
            });

        match close {
            Some(close) => {
                element.raw_content = Some(Span::from_usize(content_start, close));
                self.pos = close;
                let span = self.closing_tag_span();
                self.pos = span.end_usize();
                element.end_tag = Some(span);
            }
            None => {
                element.raw_content = Some(Span::from_usize(content_start, self.source.len()));
                self.pos = self.source.len();
                self.error(
                    ParseErrorKind::UnclosedTag {
                        tag_name: element.name.to_string(),
                    },
                    element.start_tag_span,
                );
            }
        }
    }

    fn parse_attributes(&mut self) -> Vec<Attribute> {
        let mut attributes = Vec::new();

        loop {
            let token = self.peek();
            match token.kind {
                TokenKind::Name => attributes.push(self.parse_attribute(token)),
                TokenKind::LBrace => match self.parse_brace_attribute(token) {
                    Some(attribute) => attributes.push(attribute),
                    None => break,
                },
                TokenKind::RAngle | TokenKind::SlashRAngle | TokenKind::Eof => break,
                // A tag that never closed; the next one starts here.
                kind if kind.starts_markup() => break,
                // Newlines and stray punctuation inside a tag.
                _ => self.bump(token),
            }
        }

        attributes
    }

    fn parse_attribute(&mut self, name_token: Token) -> Attribute {
        self.bump(name_token);
        let name_span = name_token.span;
        let name = SmolStr::new(name_span.slice(self.source));

        let eq = self.peek();
        let value = if eq.kind == TokenKind::Eq {
            self.bump(eq);
            self.parse_attribute_value()
        } else {
            AttributeValue::Empty
        };

        Attribute::Normal(NormalAttribute {
            span: Span::from_usize(name_span.start_usize(), self.pos),
            name,
            name_span,
            value,
        })
    }

    fn parse_attribute_value(&mut self) -> AttributeValue {
        let bytes = self.bytes();
        let start = self.pos
            + bytes[self.pos..]
                .iter()
                .take_while(|b| b.is_ascii_whitespace())
                .count();

        match bytes.get(start) {
            Some(&quote @ (b'"' | b'\'')) => {
                let close = bytes[start + 1..]
                    .iter()
                    .position(|&b| b == quote)
                    .map(|idx| start + 1 + idx);
                AttributeValue::Quoted(self.text_value(start, close, 1))
            }
            Some(b'`') => {
                let close = scan::skip_template_literal(bytes, start).map(|end| end - 1);
                AttributeValue::TemplateLiteral(self.text_value(start, close, 1))
            }
            Some(b'{') => {
                let close = scan::find_closing(bytes, start + 1, b'}');
                if close.is_none() {
                    self.error(
                        ParseErrorKind::UnclosedExpression,
                        Span::from_usize(start, self.source.len()),
                    );
                }
                let value = self.text_value(start, close, 1);
                AttributeValue::Expression(ExpressionValue {
                    span: value.span,
                    expression_span: Span::from_usize(
                        start + 1,
                        close.unwrap_or(self.source.len()),
                    ),
                    expression: value.value,
                    closed: value.closed,
                })
            }
            _ => {
                let len = bytes[start..]
                    .iter()
                    .enumerate()
                    .take_while(|&(idx, &b)| {
                        !b.is_ascii_whitespace()
                            && b != b'>'
                            && !(b == b'/' && bytes.get(start + idx + 1) == Some(&b'>'))
                    })
                    .count();
                self.pos = start + len;
                AttributeValue::Unquoted(TextValue {
                    span: Span::from_usize(start, self.pos),
                    value: self.slice(start, self.pos).to_string(),
                    closed: true,
                })
            }
        }
    }

    /// Builds a delimited value starting at `start` whose closing delimiter
    /// is at `close`, and moves the cursor past it. An unclosed value runs
    /// to the end of the input.
    fn text_value(&mut self, start: usize, close: Option<usize>, delimiter: usize) -> TextValue {
        let (value_end, end) = match close {
            Some(close) => (close, close + delimiter),
            None => (self.source.len(), self.source.len()),
        };
        self.pos = end;
        TextValue {
            span: Span::from_usize(start, end),
            value: self.slice(start + delimiter, value_end).to_string(),
            closed: close.is_some(),
        }
    }

    /// Parses `{...spread}` or `{shorthand}` inside a start tag.
    fn parse_brace_attribute(&mut self, token: Token) -> Option<Attribute> {
        let start = token.span.start_usize();
        let Some(close) = scan::find_closing(self.bytes(), start + 1, b'}') else {
            self.error(
                ParseErrorKind::UnclosedExpression,
                Span::from_usize(start, self.source.len()),
            );
            return None;
        };
        self.pos = close + 1;

        let inner = self.slice(start + 1, close);
        let inner_start = start + 1 + (inner.len() - inner.trim_start().len());
        let trimmed = inner.trim();
        let span = self.span_from(start);

        Some(match trimmed.strip_prefix("...") {
            Some(expression) => {
                let expression_start = inner_start + 3;
                Attribute::Spread(SpreadAttribute {
                    span,
                    expression_span: Span::from_usize(
                        expression_start,
                        expression_start + expression.len(),
                    ),
                    expression: expression.to_string(),
                })
            }
            None => Attribute::Shorthand(ShorthandAttribute {
                span,
                name: SmolStr::new(trimmed),
                name_span: Span::from_usize(inner_start, inner_start + trimmed.len()),
            }),
        })
    }

    fn parse_expression_tag(&mut self) -> TemplateNode {
        let start = self.pos;
        let close = scan::find_closing(self.bytes(), start + 1, b'}');
        let (expression_end, end) = match close {
            Some(close) => (close, close + 1),
            None => {
                self.error(
                    ParseErrorKind::UnclosedExpression,
                    Span::from_usize(start, self.source.len()),
                );
                (self.source.len(), self.source.len())
            }
        };
        self.pos = end;

        TemplateNode::Expression(ExpressionTag {
            span: Span::from_usize(start, end),
            expression_span: Span::from_usize(start + 1, expression_end),
            expression: self.slice(start + 1, expression_end).to_string(),
            closed: close.is_some(),
        })
    }

    fn parse_comment(&mut self) -> TemplateNode {
        let start = self.pos;
        let data_start = start + 4;
        let (data_end, end) = match self.source[data_start..].find("-->") {
            Some(idx) => (data_start + idx, data_start + idx + 3),
            None => {
                self.error(
                    ParseErrorKind::UnclosedComment,
                    Span::from_usize(start, self.source.len()),
                );
                (self.source.len(), self.source.len())
            }
        };
        self.pos = end;

        TemplateNode::Comment(Comment {
            span: Span::from_usize(start, end),
            data: self.slice(data_start, data_end).to_string(),
            data_span: Span::from_usize(data_start, data_end),
        })
    }

    fn parse_doctype(&mut self) -> TemplateNode {
        let start = self.pos;
        self.pos = self.source[start..]
            .find('>')
            .map_or(self.source.len(), |idx| start + idx + 1);
        TemplateNode::Doctype(Doctype {
            span: self.span_from(start),
        })
    }

    /// Parses text up to the next expression or markup.
    fn parse_text(&mut self) -> TemplateNode {
        let start = self.pos;
        let bytes = self.bytes();
        let end = (start + 1..bytes.len())
            .find(|&idx| match bytes[idx] {
                b'{' => true,
                b'<' => self.markup_kind_at(idx).is_some(),
                _ => false,
            })
            .unwrap_or(bytes.len());
        self.pos = end;

        let data = self.slice(start, end);
        TemplateNode::Text(Text {
            span: Span::from_usize(start, end),
            data: data.to_string(),
            is_whitespace: data.chars().all(char::is_whitespace),
        })
    }
}

/// Returns the offset of the line break at or after `from`, or the end of
/// the input.
fn line_end(source: &str, from: usize) -> usize {
    source
        .get(from..)
        .and_then(|rest| rest.find('\n'))
        .map_or(source.len(), |idx| from + idx)
}

/// Finds a line starting with `---` after the line break at `from`.
fn find_closing_fence(source: &str, from: usize) -> Option<usize> {
    let mut line_start = from + 1;
    while line_start <= source.len() {
        let line = &source[line_start..];
        if line.starts_with("---") {
            return Some(line_start);
        }
        line_start += line.find('\n')? + 1;
    }
    None
}

#[cfg(test)]
mod tests {
    use crate::{parse, Attribute, AttributeValue, ParseErrorKind, TemplateNode};
    use pretty_assertions::assert_eq;

    fn first_element(source: &str) -> crate::Element {
        let result = parse(source).unwrap();
        result
            .document
            .fragment
            .nodes
            .into_iter()
            .find_map(|node| match node {
                TemplateNode::Element(el) => Some(el),
                _ => None,
            })
            .unwrap()
    }

    #[test]
    fn test_parse_simple_element() {
        let result = parse("<div>hello</div>").unwrap();
        assert!(result.errors.is_empty());
        let el = first_element("<div>hello</div>");
        assert_eq!(el.name, "div");
        assert_eq!(el.children.len(), 1);
        assert!(el.end_tag.is_some());
    }

    #[test]
    fn test_parse_frontmatter() {
        let source = "\n---\nlet value = 'world';\n---\n\n<h1>{value}</h1>\n";
        let result = parse(source).unwrap();
        let frontmatter = result.document.frontmatter.unwrap();
        assert_eq!(frontmatter.content, "\nlet value = 'world';\n");
        assert_eq!(frontmatter.span.slice(source), "---\nlet value = 'world';\n---\n");
        assert_eq!(
            result.document.fragment.span.slice(source),
            "\n<h1>{value}</h1>\n"
        );
    }

    #[test]
    fn test_frontmatter_without_trailing_newline() {
        let result = parse("---\nconst a = 1;\n---").unwrap();
        let frontmatter = result.document.frontmatter.unwrap();
        assert_eq!(frontmatter.content, "\nconst a = 1;\n");
        assert!(result.document.fragment.nodes.is_empty());
    }

    #[test]
    fn test_unclosed_frontmatter_is_markup() {
        let result = parse("---\nconst a = 1;\n<div/>").unwrap();
        assert!(result.document.frontmatter.is_none());
        assert!(matches!(
            result.errors[0].kind,
            ParseErrorKind::UnclosedFrontmatter
        ));
    }

    #[test]
    fn test_fence_not_at_start_is_text() {
        let result = parse("<p/>\n---\nx\n---\n").unwrap();
        assert!(result.document.frontmatter.is_none());
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_parse_attribute_kinds() {
        let source = r#"<h1 name="value" empty {shorthand} expression={true} literal=`tags` bare=foo {...rest}>"#;
        let el = first_element(source);
        assert_eq!(el.attributes.len(), 7);

        let kinds: Vec<_> = el
            .attributes
            .iter()
            .map(|attr| match attr {
                Attribute::Normal(a) => match &a.value {
                    AttributeValue::Empty => "empty",
                    AttributeValue::Quoted(_) => "quoted",
                    AttributeValue::Unquoted(_) => "unquoted",
                    AttributeValue::Expression(_) => "expression",
                    AttributeValue::TemplateLiteral(_) => "template",
                },
                Attribute::Spread(_) => "spread",
                Attribute::Shorthand(_) => "shorthand",
            })
            .collect();
        assert_eq!(
            kinds,
            vec!["quoted", "empty", "shorthand", "expression", "template", "unquoted", "spread"]
        );

        match &el.attributes[0] {
            Attribute::Normal(a) => {
                assert_eq!(a.span.slice(source), r#"name="value""#);
                assert_eq!(a.value.span().unwrap().slice(source), r#""value""#);
            }
            other => panic!("unexpected attribute {other:?}"),
        }
        match &el.attributes[6] {
            Attribute::Spread(s) => assert_eq!(s.expression, "rest"),
            other => panic!("unexpected attribute {other:?}"),
        }
    }

    #[test]
    fn test_expression_attribute_with_braces() {
        let source = "<div @click={() => {}} name=\"value\"></div>";
        let el = first_element(source);
        match &el.attributes[0] {
            Attribute::Normal(a) => {
                assert_eq!(a.name, "@click");
                match &a.value {
                    AttributeValue::Expression(e) => assert_eq!(e.expression, "() => {}"),
                    other => panic!("unexpected value {other:?}"),
                }
            }
            other => panic!("unexpected attribute {other:?}"),
        }
    }

    #[test]
    fn test_template_literal_with_interpolation() {
        let el = first_element("<div class=`${hello}`></div>");
        match &el.attributes[0] {
            Attribute::Normal(a) => match &a.value {
                AttributeValue::TemplateLiteral(t) => assert_eq!(t.value, "${hello}"),
                other => panic!("unexpected value {other:?}"),
            },
            other => panic!("unexpected attribute {other:?}"),
        }
    }

    #[test]
    fn test_unclosed_start_tag() {
        let source = "<components.";
        let result = parse(source).unwrap();
        assert!(matches!(
            result.errors[0].kind,
            ParseErrorKind::UnclosedStartTag { .. }
        ));
        let el = first_element(source);
        assert!(!el.start_tag_closed);
        assert_eq!(el.span.slice(source), "<components.");
    }

    #[test]
    fn test_void_element_has_no_children() {
        let el = first_element("<input type=\"text\"><p>after</p>");
        assert!(el.is_void());
        assert!(el.children.is_empty());
        assert!(!el.self_closing);
    }

    #[test]
    fn test_void_element_absorbs_redundant_end_tag() {
        let source = "<br></BR><p>after</p>";
        let result = parse(source).unwrap();
        assert!(result.errors.is_empty(), "{:?}", result.errors);
        let TemplateNode::Element(br) = &result.document.fragment.nodes[0] else {
            panic!("expected element");
        };
        assert_eq!(br.span.slice(source), "<br></BR>");
        assert_eq!(br.end_tag.map(|tag| tag.slice(source)), Some("</BR>"));
        assert_eq!(result.document.fragment.nodes.len(), 2);
    }

    #[test]
    fn test_raw_text_element() {
        let source = "<script>if (a < b) { x(); }</script>";
        let el = first_element(source);
        assert_eq!(
            el.raw_content.unwrap().slice(source),
            "if (a < b) { x(); }"
        );
        assert_eq!(el.end_tag.unwrap().slice(source), "</script>");
    }

    #[test]
    fn test_less_than_in_text() {
        let result = parse("a < b").unwrap();
        assert!(result.errors.is_empty());
        assert_eq!(result.document.fragment.nodes.len(), 1);
    }

    #[test]
    fn test_fragment_shorthand() {
        let el = first_element("<><p/></>");
        assert_eq!(el.name, "");
        assert_eq!(el.children.len(), 1);
        assert!(el.end_tag.is_some());
    }

    #[test]
    fn test_comment_and_doctype() {
        let result = parse("<!DOCTYPE html><!-- note --><p/>").unwrap();
        let nodes = &result.document.fragment.nodes;
        assert!(matches!(nodes[0], TemplateNode::Doctype(_)));
        match &nodes[1] {
            TemplateNode::Comment(c) => assert_eq!(c.data, " note "),
            other => panic!("unexpected node {other:?}"),
        }
    }
}
