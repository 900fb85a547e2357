use crate::block::{BlockTag, ConsumedBlock};
use crate::tokenizer::TokenType;
use std::fmt;

/// A parsed selector expression. The scanner only needs to know *what kind of
/// element* a rule targets, so the model is deliberately small: type, class
/// and id selectors, the universal selector, and compounds of those.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CssSelector {
    /// `*`
    Universal,
    /// A type selector such as `p` or `td` (stored lowercased)
    Tag(String),
    /// `.classname`
    Class(String),
    /// `#id`
    Id(String),
    /// A compound simple selector such as `p.footer#x`
    AllOf(Vec<CssSelector>),
}

impl fmt::Display for CssSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CssSelector::Universal => write!(f, "*"),
            CssSelector::Tag(name) => write!(f, "{}", name),
            CssSelector::Class(name) => write!(f, ".{}", name),
            CssSelector::Id(name) => write!(f, "#{}", name),
            CssSelector::AllOf(parts) => {
                for part in parts {
                    write!(f, "{}", part)?;
                }
                Ok(())
            }
        }
    }
}

fn has_element_part(parts: &[CssSelector]) -> bool {
    parts
        .iter()
        .any(|p| matches!(p, CssSelector::Tag(_) | CssSelector::Universal))
}

fn flush_compound(parts: &mut Vec<CssSelector>, selectors: &mut Vec<CssSelector>) {
    match parts.len() {
        0 => {}
        1 => selectors.push(parts.remove(0)),
        _ => selectors.push(CssSelector::AllOf(std::mem::take(parts))),
    }
}

/// Parse the selector preamble of a qualified rule. `next` pulls successive
/// preamble children; `None` ends the block.
///
/// Commas separate the selectors of a group. Whitespace never reaches this
/// layer (the block consumer drops it), so descendant combinators are not
/// representable; when a second type selector or an explicit combinator
/// (`>`, `+`, `~`) appears, the compound collected so far is discarded and
/// the rightmost one wins. Pseudo-classes, attribute blocks and functional
/// selectors are tolerated but not interpreted.
///
/// An empty result means the rule carries no selector the scanner can use and
/// should be dropped.
pub fn process_selector_blocks<'a, F>(mut next: F) -> Vec<CssSelector>
where
    F: FnMut() -> Option<&'a ConsumedBlock>,
{
    let mut selectors = Vec::new();
    let mut parts: Vec<CssSelector> = Vec::new();
    // a '.' delimiter was seen, the next ident is a class name
    let mut expect_class = false;
    // a ':' was seen, the next ident is a pseudo-class name
    let mut skip_pseudo = false;

    while let Some(block) = next() {
        if block.tag() != BlockTag::Component {
            // attribute blocks and functional pseudo-selectors: tolerated
            continue;
        }

        let Some(token) = block.token() else {
            continue;
        };

        match &token.token_type {
            TokenType::Comma => {
                flush_compound(&mut parts, &mut selectors);
                expect_class = false;
                skip_pseudo = false;
            }
            TokenType::Colon => {
                skip_pseudo = true;
                expect_class = false;
            }
            TokenType::Delim('.') => {
                expect_class = true;
                skip_pseudo = false;
            }
            TokenType::Delim('*') => {
                if has_element_part(&parts) {
                    parts.clear();
                }
                parts.push(CssSelector::Universal);
                expect_class = false;
                skip_pseudo = false;
            }
            TokenType::Delim('>') | TokenType::Delim('+') | TokenType::Delim('~') => {
                // combinator: the rightmost compound is the one that matters
                parts.clear();
                expect_class = false;
                skip_pseudo = false;
            }
            TokenType::Hash(value) => {
                parts.push(CssSelector::Id(value.clone()));
                expect_class = false;
                skip_pseudo = false;
            }
            TokenType::Ident(value) => {
                if skip_pseudo {
                    skip_pseudo = false;
                } else if expect_class {
                    parts.push(CssSelector::Class(value.clone()));
                    expect_class = false;
                } else {
                    if has_element_part(&parts) {
                        // two type selectors cannot share a compound; this is
                        // a descendant whose whitespace was dropped upstream
                        parts.clear();
                    }
                    parts.push(CssSelector::Tag(value.to_ascii_lowercase()));
                }
            }
            _ => {
                expect_class = false;
                skip_pseudo = false;
            }
        }
    }

    flush_compound(&mut parts, &mut selectors);

    selectors
}
