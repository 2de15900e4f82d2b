//! AST types for Astro components.
//!
//! The tree is fully owned: every node holds its children by value and
//! refers back into the source only through spans.

use smol_str::SmolStr;
use source_map::Span;

/// A complete Astro document.
#[derive(Debug, Clone, Default)]
pub struct AstroDocument {
    /// The frontmatter script block, if the document starts with one.
    pub frontmatter: Option<Frontmatter>,
    /// The markup that follows the frontmatter.
    pub fragment: Fragment,
    /// The span of the entire document.
    pub span: Span,
}

/// The `---` delimited script block at the top of a component.
#[derive(Debug, Clone)]
pub struct Frontmatter {
    /// The span of the block, both fences included.
    pub span: Span,
    /// The span of the script between the fences.
    pub content_span: Span,
    /// The raw script text.
    pub content: String,
}

/// A sequence of sibling template nodes.
#[derive(Debug, Clone, Default)]
pub struct Fragment {
    /// The nodes in document order.
    pub nodes: Vec<TemplateNode>,
    /// The span of the fragment.
    pub span: Span,
}

/// A node in the template.
#[derive(Debug, Clone)]
pub enum TemplateNode {
    /// An element or component.
    Element(Element),
    /// Text content.
    Text(Text),
    /// An expression `{expr}`.
    Expression(ExpressionTag),
    /// An HTML comment.
    Comment(Comment),
    /// A `<!DOCTYPE ...>` declaration.
    Doctype(Doctype),
}

impl TemplateNode {
    /// Returns the span of this node.
    pub fn span(&self) -> Span {
        match self {
            TemplateNode::Element(n) => n.span,
            TemplateNode::Text(n) => n.span,
            TemplateNode::Expression(n) => n.span,
            TemplateNode::Comment(n) => n.span,
            TemplateNode::Doctype(n) => n.span,
        }
    }
}

/// An element or component.
///
/// Elements whose start tag never closed are kept with
/// `start_tag_closed == false` and carry whatever attributes were read.
#[derive(Debug, Clone)]
pub struct Element {
    /// The span of the element, end tag included when present.
    pub span: Span,
    /// The tag name as written, e.g. `div`, `Card`, `components.Button`.
    pub name: SmolStr,
    /// The span of the tag name.
    pub name_span: Span,
    /// The attributes in source order.
    pub attributes: Vec<Attribute>,
    /// The child nodes.
    pub children: Vec<TemplateNode>,
    /// Whether the start tag ended with `/>`.
    pub self_closing: bool,
    /// Whether the start tag was terminated by `>` or `/>`.
    pub start_tag_closed: bool,
    /// The span of the start tag, `<` through `>`.
    pub start_tag_span: Span,
    /// The span of the end tag, if one was found.
    pub end_tag: Option<Span>,
    /// For raw-text elements (`script`, `style`), the span of the content.
    pub raw_content: Option<Span>,
}

impl Element {
    /// Returns true if this is an HTML void element.
    pub fn is_void(&self) -> bool {
        crate::parser::is_void_element(&self.name)
    }

    /// Returns the span between the end of the last attribute (or the tag
    /// name) and the end of the start tag.
    pub fn start_tag_tail(&self) -> Span {
        let after = self
            .attributes
            .last()
            .map_or(self.name_span.end, |attr| attr.span().end);
        Span::new(after, self.start_tag_span.end)
    }
}

/// Text content.
#[derive(Debug, Clone)]
pub struct Text {
    /// The span of the text.
    pub span: Span,
    /// The text content.
    pub data: String,
    /// Whether this text is only whitespace.
    pub is_whitespace: bool,
}

/// An HTML comment.
#[derive(Debug, Clone)]
pub struct Comment {
    /// The span of the comment, delimiters included.
    pub span: Span,
    /// The comment content (without `<!--` and `-->`).
    pub data: String,
    /// The span of the content.
    pub data_span: Span,
}

/// A `<!DOCTYPE ...>` declaration.
#[derive(Debug, Clone)]
pub struct Doctype {
    /// The span of the declaration.
    pub span: Span,
}

/// An expression tag `{expr}`.
#[derive(Debug, Clone)]
pub struct ExpressionTag {
    /// The span of the tag, braces included.
    pub span: Span,
    /// The span of just the expression.
    pub expression_span: Span,
    /// The raw expression text.
    pub expression: String,
    /// Whether the closing brace was found.
    pub closed: bool,
}

/// An attribute on an element.
#[derive(Debug, Clone)]
pub enum Attribute {
    /// A normal attribute `name`, `name="value"` or `name={expr}`.
    Normal(NormalAttribute),
    /// A spread attribute `{...obj}`.
    Spread(SpreadAttribute),
    /// A shorthand attribute `{value}`.
    Shorthand(ShorthandAttribute),
}

impl Attribute {
    /// Returns the span of this attribute.
    pub fn span(&self) -> Span {
        match self {
            Attribute::Normal(a) => a.span,
            Attribute::Spread(a) => a.span,
            Attribute::Shorthand(a) => a.span,
        }
    }
}

/// A normal attribute.
#[derive(Debug, Clone)]
pub struct NormalAttribute {
    /// The span of the attribute.
    pub span: Span,
    /// The attribute name exactly as written.
    pub name: SmolStr,
    /// The span of the name.
    pub name_span: Span,
    /// The attribute value.
    pub value: AttributeValue,
}

/// An attribute value.
#[derive(Debug, Clone)]
pub enum AttributeValue {
    /// No value (`disabled`).
    Empty,
    /// A quoted string, `"value"` or `'value'`.
    Quoted(TextValue),
    /// An unquoted string, `value`.
    Unquoted(TextValue),
    /// An expression container, `{expr}`.
    Expression(ExpressionValue),
    /// A template literal, `` `value` ``.
    TemplateLiteral(TextValue),
}

impl AttributeValue {
    /// Returns the span of the value as written, delimiters included.
    pub fn span(&self) -> Option<Span> {
        match self {
            AttributeValue::Empty => None,
            AttributeValue::Quoted(v)
            | AttributeValue::Unquoted(v)
            | AttributeValue::TemplateLiteral(v) => Some(v.span),
            AttributeValue::Expression(v) => Some(v.span),
        }
    }
}

/// A string-like attribute value.
#[derive(Debug, Clone)]
pub struct TextValue {
    /// The span of the value, quotes or backticks included.
    pub span: Span,
    /// The text between the delimiters.
    pub value: String,
    /// Whether the closing delimiter was found.
    pub closed: bool,
}

/// An expression value in an attribute.
#[derive(Debug, Clone)]
pub struct ExpressionValue {
    /// The span of the value, braces included.
    pub span: Span,
    /// The span of just the expression content.
    pub expression_span: Span,
    /// The raw expression text.
    pub expression: String,
    /// Whether the closing brace was found.
    pub closed: bool,
}

/// A spread attribute `{...obj}`.
#[derive(Debug, Clone)]
pub struct SpreadAttribute {
    /// The span of the attribute.
    pub span: Span,
    /// The span of the spread expression, without `...`.
    pub expression_span: Span,
    /// The expression being spread.
    pub expression: String,
}

/// A shorthand attribute `{value}`.
#[derive(Debug, Clone)]
pub struct ShorthandAttribute {
    /// The span of the attribute, braces included.
    pub span: Span,
    /// The name, trimmed of surrounding whitespace.
    pub name: SmolStr,
    /// The span of the name.
    pub name_span: Span,
}
