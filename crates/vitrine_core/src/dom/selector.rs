//! The selector subset the page markup relies on.
//!
//! Supported:
//! - type selectors: `img`
//! - classes and ids, compounded: `.slider-btn.prev`, `a#home`
//! - attribute presence, equality and prefix: `[data-tab]`, `[data-tab="x"]`, `a[href^="#"]`
//! - the descendant combinator: `.nav-menu a`
//!
//! Anything else is rejected at parse time.

use crate::dom::{Document, NodeId};
use crate::error::{DomError, DomResult};

/// How an attribute selector compares.
#[derive(Debug, Clone, PartialEq, Eq)]
enum AttrOp {
    Exists,
    Equals(String),
    Prefix(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct AttrMatch {
    name: String,
    op: AttrOp,
}

/// One compound selector: everything between two combinators.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<AttrMatch>,
}

/// A parsed selector: compounds joined by descendant combinators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    compounds: Vec<Compound>,
}

impl Selector {
    /// Parses a selector.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::UnsupportedSelector`] for empty input or syntax
    /// outside the supported subset.
    pub fn parse(source: &str) -> DomResult<Self> {
        let unsupported = || DomError::UnsupportedSelector(source.to_owned());

        let compounds = split_compounds(source)
            .ok_or_else(unsupported)?
            .into_iter()
            .map(|part| parse_compound(part).ok_or_else(unsupported))
            .collect::<DomResult<Vec<_>>>()?;

        if compounds.is_empty() {
            return Err(unsupported());
        }
        Ok(Self { compounds })
    }

    /// Returns true if the node matches, walking ancestors for descendant combinators.
    #[must_use]
    pub fn matches(&self, doc: &Document, node: NodeId) -> bool {
        let Some((last, rest)) = self.compounds.split_last() else {
            return false;
        };
        if !last.matches(doc, node) {
            return false;
        }

        // Nearest-ancestor matching is exact for descendant-only chains.
        let mut cursor = doc.parent(node);
        for compound in rest.iter().rev() {
            loop {
                let Some(ancestor) = cursor else {
                    return false;
                };
                cursor = doc.parent(ancestor);
                if compound.matches(doc, ancestor) {
                    break;
                }
            }
        }
        true
    }
}

impl Compound {
    fn matches(&self, doc: &Document, node: NodeId) -> bool {
        let Some(el) = doc.get(node) else {
            return false;
        };
        if self.tag.as_deref().is_some_and(|tag| tag != el.tag()) {
            return false;
        }
        if self.id.as_deref().is_some_and(|id| Some(id) != el.id()) {
            return false;
        }
        if !self.classes.iter().all(|class| el.has_class(class)) {
            return false;
        }
        self.attrs.iter().all(|attr| match (&attr.op, el.attr(&attr.name)) {
            (_, None) => false,
            (AttrOp::Exists, Some(_)) => true,
            (AttrOp::Equals(want), Some(have)) => want == have,
            (AttrOp::Prefix(want), Some(have)) => have.starts_with(want.as_str()),
        })
    }
}

/// Splits on whitespace outside brackets and quotes.
fn split_compounds(source: &str) -> Option<Vec<&str>> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut start = None;

    for (i, ch) in source.char_indices() {
        match (quote, ch) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(ch),
            (None, '[') => depth += 1,
            (None, ']') => depth = depth.checked_sub(1)?,
            (None, c) if c.is_whitespace() && depth == 0 => {
                if let Some(s) = start.take() {
                    parts.push(&source[s..i]);
                }
                continue;
            }
            _ => {}
        }
        if start.is_none() {
            start = Some(i);
        }
    }

    if depth != 0 || quote.is_some() {
        return None;
    }
    if let Some(s) = start {
        parts.push(&source[s..]);
    }
    Some(parts)
}

fn is_ident_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '-' || ch == '_'
}

/// Reads an identifier starting at `pos`, returning it and the next position.
fn read_ident(src: &str, pos: usize) -> Option<(&str, usize)> {
    let len = src[pos..]
        .char_indices()
        .find(|&(_, c)| !is_ident_char(c))
        .map_or(src.len() - pos, |(i, _)| i);
    (len > 0).then(|| (&src[pos..pos + len], pos + len))
}

fn parse_compound(src: &str) -> Option<Compound> {
    let mut compound = Compound::default();
    let mut pos = 0;

    if src.starts_with(is_ident_char) {
        let (tag, next) = read_ident(src, 0)?;
        compound.tag = Some(tag.to_ascii_lowercase());
        pos = next;
    }

    while pos < src.len() {
        let rest = &src[pos..];
        if let Some(after) = rest.strip_prefix('.') {
            let (class, next) = read_ident(src, src.len() - after.len())?;
            compound.classes.push(class.to_owned());
            pos = next;
        } else if let Some(after) = rest.strip_prefix('#') {
            let (id, next) = read_ident(src, src.len() - after.len())?;
            compound.id = Some(id.to_owned());
            pos = next;
        } else if let Some(after) = rest.strip_prefix('[') {
            let close = after.find(']')?;
            compound.attrs.push(parse_attr(&after[..close])?);
            pos = src.len() - after.len() + close + 1;
        } else {
            return None;
        }
    }

    Some(compound)
}

fn parse_attr(body: &str) -> Option<AttrMatch> {
    let body = body.trim();
    let (name, op) = if let Some((name, value)) = body.split_once("^=") {
        (name, AttrOp::Prefix(unquote(value)?))
    } else if let Some((name, value)) = body.split_once('=') {
        (name, AttrOp::Equals(unquote(value)?))
    } else {
        (body, AttrOp::Exists)
    };

    let name = name.trim();
    if name.is_empty() || !name.chars().all(is_ident_char) {
        return None;
    }
    Some(AttrMatch {
        name: name.to_ascii_lowercase(),
        op,
    })
}

fn unquote(value: &str) -> Option<String> {
    let value = value.trim();
    for q in ['"', '\''] {
        if let Some(inner) = value.strip_prefix(q) {
            return inner.strip_suffix(q).map(str::to_owned);
        }
    }
    (!value.is_empty() && value.chars().all(is_ident_char)).then(|| value.to_owned())
}
