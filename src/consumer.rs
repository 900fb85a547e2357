//! The block consumer: a recursive-descent state machine grouping the token
//! stream into a tree of consumed blocks. Five consumers cooperate, sharing
//! the parser's tokenizer, recursion counter and eof flag. The consumer never
//! aborts on malformed tokens; the only fatal condition is pathological
//! nesting.

use crate::block::{BlockTag, ConsumedBlock};
use crate::errors::CssParseError;
use crate::tokenizer::TokenType;
use crate::{CssParser, MAX_NESTING};

impl CssParser {
    fn enter_consumer(&mut self, what: &str, top: &ConsumedBlock) -> Result<(), CssParseError> {
        log::trace!(
            "consume {}; top block: {}, recursion level {}",
            what,
            top.tag_name(),
            self.rec_level
        );

        self.rec_level += 1;
        if self.rec_level > MAX_NESTING {
            log::error!("max nesting reached, ignore style");
            return Err(CssParseError::BadNesting);
        }

        Ok(())
    }

    /// Consume one function body: everything up to the closing `)` (or eof,
    /// tolerated). Whitespace, commas, delimiters and stray `(` are dropped;
    /// every other token becomes a function argument.
    ///
    /// A nested `function` token is attached as a plain argument rather than
    /// recursively built, so `calc(var(--x) + 1px)` loses structure. Known
    /// limitation, kept for compatibility with the consumers downstream.
    fn function_consumer(&mut self, func: &mut ConsumedBlock) -> Result<(), CssParseError> {
        self.enter_consumer("function block", func)?;

        let mut want_more = true;

        while want_more && !self.eof {
            let token = self.tokenizer.next_token();

            match &token.token_type {
                TokenType::Eof => {
                    self.eof = true;
                }
                TokenType::Whitespace => {
                    // Ignore whitespaces
                }
                TokenType::RParen => {
                    want_more = false;
                }
                TokenType::Comma | TokenType::Delim(_) | TokenType::LParen => {
                    // separators carry no meaning for the argument list
                }
                _ => {
                    func.add_function_argument(ConsumedBlock::new_function_arg(token));
                }
            }
        }

        self.rec_level -= 1;

        Ok(())
    }

    /// Consume a balanced bracket group. The same routine serves `{}`, `()`
    /// and `[]`, differentiated only by `expected_end`.
    ///
    /// With `consume_current` set, the caller already owns the target block
    /// and has accounted for the recursion frame: the group is written into
    /// `top` directly, nothing is attached and the counter is not bumped.
    fn simple_block_consumer(
        &mut self,
        top: &mut ConsumedBlock,
        expected_end: TokenType,
        consume_current: bool,
    ) -> Result<(), CssParseError> {
        if consume_current {
            log::trace!(
                "consume simple block; top block: {}, recursion level {}",
                top.tag_name(),
                self.rec_level
            );
        } else {
            self.enter_consumer("simple block", top)?;
        }

        let mut block = if consume_current {
            None
        } else {
            Some(ConsumedBlock::new_simple_block())
        };

        let mut ret = Ok(());

        while ret.is_ok() && !self.eof {
            let token = self.tokenizer.next_token();

            if token.token_type == expected_end {
                break;
            }

            match &token.token_type {
                TokenType::Eof => {
                    self.eof = true;
                }
                TokenType::Whitespace => {
                    // Ignore whitespaces
                }
                _ => {
                    self.tokenizer.pushback(token);
                    let target = match block.as_mut() {
                        Some(block) => block,
                        None => &mut *top,
                    };
                    ret = self.component_value_consumer(target);
                }
            }
        }

        if let Some(block) = block {
            if ret.is_ok() {
                log::debug!(
                    "attached node '{}'; length={}",
                    block.tag_name(),
                    block.size()
                );
                top.attach_block(block);
            }
            self.rec_level -= 1;
        }

        ret
    }

    /// Consume one qualified rule: prelude components followed by a `{…}`
    /// block. The completed rule is attached only when the caller is the top
    /// block; nested qualified rules arising from malformed input are dropped.
    fn qualified_rule_consumer(&mut self, top: &mut ConsumedBlock) -> Result<(), CssParseError> {
        self.enter_consumer("qualified block", top)?;

        let mut ret = Ok(());
        let mut want_more = true;
        let mut block = ConsumedBlock::new_qualified_rule();

        while ret.is_ok() && want_more && !self.eof {
            let token = self.tokenizer.next_token();

            match &token.token_type {
                TokenType::Eof => {
                    self.eof = true;
                }
                TokenType::Cdo | TokenType::Cdc => {
                    // html comment delimiters, discarded wherever they appear
                }
                TokenType::LCurly => {
                    ret = self.simple_block_consumer(&mut block, TokenType::RCurly, false);
                    want_more = false;
                }
                TokenType::Whitespace => {
                    // Ignore whitespaces
                }
                _ => {
                    self.tokenizer.pushback(token);
                    ret = self.component_value_consumer(&mut block);
                }
            }
        }

        if ret.is_ok() && top.tag() == BlockTag::Top {
            log::debug!(
                "attached node qualified rule {}; length={}",
                block.tag_name(),
                block.size()
            );
            top.attach_block(block);
        }

        self.rec_level -= 1;

        ret
    }

    /// Consume one at-rule. Identical to a qualified rule except that a `;`
    /// also terminates it (statement at-rules such as `@charset "x";`).
    fn at_rule_consumer(&mut self, top: &mut ConsumedBlock) -> Result<(), CssParseError> {
        self.enter_consumer("at-rule block", top)?;

        let mut ret = Ok(());
        let mut want_more = true;
        let mut block = ConsumedBlock::new_at_rule();

        while ret.is_ok() && want_more && !self.eof {
            let token = self.tokenizer.next_token();

            match &token.token_type {
                TokenType::Eof => {
                    self.eof = true;
                }
                TokenType::Cdo | TokenType::Cdc => {
                    // html comment delimiters, discarded wherever they appear
                }
                TokenType::LCurly => {
                    ret = self.simple_block_consumer(&mut block, TokenType::RCurly, false);
                    want_more = false;
                }
                TokenType::Whitespace => {
                    // Ignore whitespaces
                }
                TokenType::Semicolon => {
                    want_more = false;
                }
                _ => {
                    self.tokenizer.pushback(token);
                    ret = self.component_value_consumer(&mut block);
                }
            }
        }

        if ret.is_ok() && top.tag() == BlockTag::Top {
            log::debug!(
                "attached node at rule {}; length={}",
                block.tag_name(),
                block.size()
            );
            top.attach_block(block);
        }

        self.rec_level -= 1;

        ret
    }

    /// Consume exactly one component value and attach it to `top`: a balanced
    /// bracket group, a function call, or a single preserved token. Leading
    /// whitespace is skipped; whitespace followed by end-of-input attaches
    /// nothing.
    fn component_value_consumer(&mut self, top: &mut ConsumedBlock) -> Result<(), CssParseError> {
        self.enter_consumer("component block", top)?;

        let mut ret = Ok(());
        let mut need_more = true;
        let mut block: Option<ConsumedBlock> = None;

        while ret.is_ok() && need_more && !self.eof {
            let token = self.tokenizer.next_token();

            match &token.token_type {
                TokenType::Eof => {
                    self.eof = true;
                }
                TokenType::LCurly => {
                    let mut simple_block = ConsumedBlock::new_simple_block();
                    ret = self.simple_block_consumer(&mut simple_block, TokenType::RCurly, true);
                    block = Some(simple_block);
                    need_more = false;
                }
                TokenType::LParen => {
                    let mut simple_block = ConsumedBlock::new_simple_block();
                    ret = self.simple_block_consumer(&mut simple_block, TokenType::RParen, true);
                    block = Some(simple_block);
                    need_more = false;
                }
                TokenType::LBracket => {
                    let mut simple_block = ConsumedBlock::new_simple_block();
                    ret = self.simple_block_consumer(&mut simple_block, TokenType::RBracket, true);
                    block = Some(simple_block);
                    need_more = false;
                }
                TokenType::Whitespace => {
                    // Ignore whitespaces
                }
                TokenType::Function(_) => {
                    need_more = false;
                    let mut function = ConsumedBlock::new_function(token);
                    ret = self.function_consumer(&mut function);
                    block = Some(function);
                }
                _ => {
                    block = Some(ConsumedBlock::new_component(token));
                    need_more = false;
                }
            }
        }

        if ret.is_ok() {
            if let Some(block) = block {
                log::debug!(
                    "attached node component rule {}; length={}",
                    block.tag_name(),
                    block.size()
                );
                top.attach_block(block);
            }
        }

        self.rec_level -= 1;

        ret
    }

    /// Run the block consumer over the whole source and return the top block.
    ///
    /// Always returns a tree. When the recursion guard trips, the tree is
    /// partial (outer siblings are preserved, the offending subtree is
    /// dropped) and the error is recorded on the parser, observable via
    /// [`CssParser::last_error`].
    pub fn consume_css_blocks(&mut self) -> ConsumedBlock {
        let mut top = ConsumedBlock::new_top();
        let mut ret = Ok(());

        while ret.is_ok() && !self.eof {
            let token = self.tokenizer.next_token();

            match &token.token_type {
                TokenType::Whitespace => {
                    // Ignore whitespaces
                }
                TokenType::Cdo | TokenType::Cdc => {
                    // html comment delimiters are permitted between top-level rules
                }
                TokenType::Eof => {
                    self.eof = true;
                }
                TokenType::AtKeyword(_) => {
                    self.tokenizer.pushback(token);
                    ret = self.at_rule_consumer(&mut top);
                }
                _ => {
                    self.tokenizer.pushback(token);
                    ret = self.qualified_rule_consumer(&mut top);
                }
            }
        }

        if let Err(error) = ret {
            self.error = Some(error);
        }

        top
    }
}
