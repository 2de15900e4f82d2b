//! Attribute rewriting.
//!
//! Attributes that are legal JSX stay in place, normalized where Astro
//! syntax is not valid JSX. Everything else is moved into one trailing
//! spread object keyed by the raw attribute name:
//!
//! ```text
//! <div @click={go} name="value">   =>   <div name="value" {...{"@click":(go)}}>
//! ```

use crate::emitter::Emitter;
use crate::identifier::{classify_attribute_name, NameClass};
use astro_parser::{Attribute, AttributeValue, Element, NormalAttribute, ShorthandAttribute};
use source_map::Span;

/// An attribute moved into the spread object.
enum SpreadEntry<'a> {
    Normal(&'a NormalAttribute),
    Shorthand(&'a ShorthandAttribute),
}

/// Emits everything between the tag name and the start tag's tail.
///
/// Whitespace in front of an attribute is copied along with it, except for
/// attributes moved into the spread object and empty `{}` attributes, which
/// are dropped.
pub(crate) fn emit_attributes(out: &mut Emitter<'_>, element: &Element) {
    let mut cursor = element.name_span.end;
    let mut spread = Vec::new();

    for attribute in &element.attributes {
        let span = attribute.span();
        let gap = Span::new(cursor, span.start);
        cursor = span.end;

        match attribute {
            Attribute::Normal(attr) => match classify_attribute_name(&attr.name) {
                NameClass::Direct => {
                    out.source(gap);
                    emit_direct(out, attr);
                }
                NameClass::NeedsSpread => spread.push(SpreadEntry::Normal(attr)),
            },
            Attribute::Shorthand(attr) if attr.name.is_empty() => {}
            Attribute::Shorthand(attr) => match classify_attribute_name(&attr.name) {
                NameClass::Direct => {
                    out.source(gap);
                    out.source(attr.name_span);
                    out.generated("={");
                    out.source(attr.name_span);
                    out.generated("}");
                }
                NameClass::NeedsSpread => spread.push(SpreadEntry::Shorthand(attr)),
            },
            Attribute::Spread(attr) => {
                out.source(gap);
                out.source(attr.span);
            }
        }
    }

    if spread.is_empty() {
        return;
    }

    tracing::trace!(
        element = %element.name,
        entries = spread.len(),
        "collected attributes into spread object"
    );

    out.generated(" {...{");
    for (i, entry) in spread.iter().enumerate() {
        if i > 0 {
            out.generated(",");
        }
        emit_spread_entry(out, entry);
    }
    out.generated("}}");
}

fn emit_direct(out: &mut Emitter<'_>, attr: &NormalAttribute) {
    match &attr.value {
        AttributeValue::Empty => out.source(attr.name_span),
        AttributeValue::Quoted(_) | AttributeValue::Expression(_) => out.source(attr.span),
        AttributeValue::Unquoted(value) => {
            out.source(Span::new(attr.span.start, value.span.start));
            out.transformed(value.span, &jsx_string(&value.value));
        }
        AttributeValue::TemplateLiteral(value) => {
            out.source(Span::new(attr.span.start, value.span.start));
            out.generated("{");
            out.source(value.span);
            out.generated("}");
        }
    }
}

fn emit_spread_entry(out: &mut Emitter<'_>, entry: &SpreadEntry<'_>) {
    match entry {
        SpreadEntry::Normal(attr) => {
            out.transformed(attr.name_span, &object_key(&attr.name));
            out.generated(":");
            match &attr.value {
                AttributeValue::Empty => out.generated("true"),
                AttributeValue::Expression(value) => {
                    out.generated("(");
                    out.source(value.expression_span);
                    out.generated(")");
                }
                AttributeValue::TemplateLiteral(value) if value.closed => out.source(value.span),
                AttributeValue::Quoted(value)
                | AttributeValue::TemplateLiteral(value)
                | AttributeValue::Unquoted(value) => {
                    out.transformed(value.span, &object_key(&value.value));
                }
            }
        }
        SpreadEntry::Shorthand(attr) => {
            out.transformed(attr.name_span, &object_key(&attr.name));
            out.generated(":(");
            out.source(attr.name_span);
            out.generated(")");
        }
    }
}

/// Renders an unquoted value as a JSX attribute string. JSX strings have no
/// escapes, so a value holding both quote kinds becomes an expression.
fn jsx_string(value: &str) -> String {
    match (value.contains('"'), value.contains('\'')) {
        (false, _) => format!("\"{value}\""),
        (true, false) => format!("'{value}'"),
        (true, true) => format!("{{{}}}", object_key(value)),
    }
}

/// Renders `text` as a double-quoted JavaScript string.
fn object_key(text: &str) -> String {
    serde_json::Value::from(text).to_string()
}
