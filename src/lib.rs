//! Tolerant CSS parser for scanning style sheets embedded in HTML e-mail.
//!
//! Mail bodies hide text with CSS: zero-size fonts, off-screen positioning,
//! foreground colors matching the background. This crate turns the CSS found
//! in `<style>` elements and `style="…"` attributes into a [`StyleSheet`] of
//! selector→declaration associations that scanning logic can inspect.
//!
//! The input is adversarial, so the parser is maximally permissive: malformed
//! tokens are preserved as opaque components, unbalanced blocks run to the
//! end of the input, and only pathological nesting aborts a parse. The
//! pipeline is tokenizer → block consumer (a recursive-descent state machine
//! producing a tree of [`block::ConsumedBlock`]) → selector and declaration
//! parsers over slices of that tree.
//!
//! ```
//! let sheet = mailcss::parse_css("p { color: #fff; font-size: 0 }").unwrap();
//! assert_eq!(sheet.rules().len(), 1);
//! ```

pub mod block;
pub mod colors;
mod consumer;
pub mod declaration;
pub mod errors;
pub mod location;
pub mod selector;
pub mod stylesheet;
pub mod tokenizer;

use std::sync::Arc;

use crate::block::BlockTag;
use crate::declaration::process_declaration_blocks;
use crate::errors::CssParseError;
use crate::selector::process_selector_blocks;
use crate::stylesheet::StyleSheet;
use crate::tokenizer::Tokenizer;

/// Hard limit on structural nesting depth. Inputs needing deeper nesting are
/// rejected with [`CssParseError::BadNesting`], not silently truncated.
pub const MAX_NESTING: usize = 20;

/// The parser object shared by the five block consumers: the tokenizer, the
/// recursion counter, the eof flag and the error side channel. State is
/// per-instance; independent parsers may run concurrently on different
/// threads.
pub struct CssParser {
    pub(crate) tokenizer: Tokenizer,
    pub(crate) rec_level: usize,
    pub(crate) eof: bool,
    pub(crate) error: Option<CssParseError>,
}

impl CssParser {
    pub fn new(source: &str) -> Self {
        Self {
            tokenizer: Tokenizer::new(source),
            rec_level: 0,
            eof: false,
            error: None,
        }
    }

    /// The error recorded by the block consumer, if any. The consumer always
    /// returns a tree; a recorded error means the tree is partial.
    pub fn last_error(&self) -> Option<&CssParseError> {
        self.error.as_ref()
    }

    /// Consume the whole source and assemble the style sheet.
    ///
    /// Every top-level qualified rule whose children start with a component
    /// and contain a simple block is split at the first simple block: the
    /// prefix feeds the selector parser, the block's children feed the
    /// declaration parser, and each produced selector is associated with the
    /// (shared) declaration set. At-rules are consumed but ignored here.
    pub fn consume_input(&mut self) -> Result<StyleSheet, CssParseError> {
        let blocks = self.consume_css_blocks();
        log::debug!("consumed css: {{{}}}", blocks.debug_str());

        let rules = blocks.children_or_empty();
        if rules.is_empty() {
            return Err(match self.error.take() {
                Some(CssParseError::BadNesting) => CssParseError::BadNesting,
                _ => CssParseError::InvalidSyntax("cannot parse input".to_string()),
            });
        }

        let mut sheet = StyleSheet::new();

        for rule in rules {
            if rule.tag() != BlockTag::QualifiedRule {
                // at-rules carry nothing the scanner inspects
                continue;
            }

            let children = rule.children_or_empty();
            if children.len() < 2 || children[0].tag() != BlockTag::Component {
                continue;
            }

            let Some(split) = children
                .iter()
                .position(|block| block.tag() == BlockTag::SimpleBlock)
            else {
                continue;
            };

            let mut preamble = children[..split].iter();
            let selectors = process_selector_blocks(|| preamble.next());
            if selectors.is_empty() {
                continue;
            }
            log::debug!("processed {} selectors", selectors.len());

            let mut body = children[split].children_or_empty().iter();
            let Some(declarations) = process_declaration_blocks(|| body.next()) else {
                continue;
            };

            let declarations = Arc::new(declarations);
            for selector in selectors {
                sheet.add_selector_rule(selector, Arc::clone(&declarations));
            }
        }

        Ok(sheet)
    }
}

/// Parse a CSS source fragment into a style sheet.
///
/// Returns a fresh style sheet on success, even one without rules.
/// `InvalidSyntax` means nothing in the input was recognizable;
/// `BadNesting` means the recursion guard tripped with no partial sheet to
/// salvage.
pub fn parse_css(source: &str) -> Result<StyleSheet, CssParseError> {
    let mut parser = CssParser::new(source);
    parser.consume_input()
}
