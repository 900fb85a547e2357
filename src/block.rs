use crate::tokenizer::Token;

/// Tag identifying which CSS production a consumed block came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockTag {
    Top,
    QualifiedRule,
    AtRule,
    SimpleBlock,
    Function,
    FunctionArg,
    Component,
    Eof,
}

/// A function header token together with its collected arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionBlock {
    /// The `ident(` token that opened the function
    pub function: Token,
    /// Arguments in source order; separators are not represented
    pub args: Vec<ConsumedBlock>,
}

/// Content payload of a consumed block. The shape is fixed by the block's tag:
/// child lists for `Top`/`QualifiedRule`/`AtRule`/`SimpleBlock`, a function
/// record for `Function`, a single token for `Component`/`FunctionArg`, and
/// nothing for `Eof`.
#[derive(Debug, Clone, PartialEq)]
pub enum BlockContent {
    Empty,
    Children(Vec<ConsumedBlock>),
    Token(Token),
    Function(FunctionBlock),
}

/// A node in the tree produced by the block consumer. The tree owns all of its
/// descendants; dropping the root drops everything below it.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsumedBlock {
    tag: BlockTag,
    content: BlockContent,
}

impl ConsumedBlock {
    pub fn new_top() -> Self {
        Self {
            tag: BlockTag::Top,
            content: BlockContent::Children(Vec::new()),
        }
    }

    pub fn new_qualified_rule() -> Self {
        Self {
            tag: BlockTag::QualifiedRule,
            content: BlockContent::Children(Vec::new()),
        }
    }

    pub fn new_at_rule() -> Self {
        Self {
            tag: BlockTag::AtRule,
            content: BlockContent::Children(Vec::new()),
        }
    }

    pub fn new_simple_block() -> Self {
        Self {
            tag: BlockTag::SimpleBlock,
            content: BlockContent::Children(Vec::new()),
        }
    }

    pub fn new_function(function: Token) -> Self {
        Self {
            tag: BlockTag::Function,
            content: BlockContent::Function(FunctionBlock {
                function,
                args: Vec::new(),
            }),
        }
    }

    pub fn new_function_arg(token: Token) -> Self {
        Self {
            tag: BlockTag::FunctionArg,
            content: BlockContent::Token(token),
        }
    }

    pub fn new_component(token: Token) -> Self {
        Self {
            tag: BlockTag::Component,
            content: BlockContent::Token(token),
        }
    }

    pub fn new_eof() -> Self {
        Self {
            tag: BlockTag::Eof,
            content: BlockContent::Empty,
        }
    }

    pub fn tag(&self) -> BlockTag {
        self.tag
    }

    pub fn content(&self) -> &BlockContent {
        &self.content
    }

    /// Attach a child block. Legal only on nodes holding a child list; on any
    /// other node the child is rejected and the node is left untouched.
    pub fn attach_block(&mut self, block: ConsumedBlock) -> bool {
        match &mut self.content {
            BlockContent::Children(children) => {
                children.push(block);
                true
            }
            _ => false,
        }
    }

    /// Attach a function argument. Legal only on `Function` nodes; on any
    /// other node the argument is rejected and the node is left untouched.
    pub fn add_function_argument(&mut self, block: ConsumedBlock) -> bool {
        match &mut self.content {
            BlockContent::Function(function) => {
                function.args.push(block);
                true
            }
            _ => false,
        }
    }

    /// Child blocks, or an empty slice for nodes that hold no child list.
    pub fn children_or_empty(&self) -> &[ConsumedBlock] {
        match &self.content {
            BlockContent::Children(children) => children,
            _ => &[],
        }
    }

    /// The terminal token of a `Component` or `FunctionArg` node.
    pub fn token(&self) -> Option<&Token> {
        match &self.content {
            BlockContent::Token(token) => Some(token),
            _ => None,
        }
    }

    /// The function record of a `Function` node.
    pub fn function_block(&self) -> Option<&FunctionBlock> {
        match &self.content {
            BlockContent::Function(function) => Some(function),
            _ => None,
        }
    }

    pub fn size(&self) -> usize {
        self.children_or_empty().len()
    }

    /// Human name of the tag, as used in the debug serialization.
    pub fn tag_name(&self) -> &'static str {
        match self.tag {
            BlockTag::Top => "top",
            BlockTag::QualifiedRule => "qualified rule",
            BlockTag::AtRule => "at rule",
            BlockTag::SimpleBlock => "simple block",
            BlockTag::Function => "function",
            BlockTag::FunctionArg => "function arg",
            BlockTag::Component => "component",
            BlockTag::Eof => "eof",
        }
    }

    /// JSON-shaped textual form of the node, used for diagnostic logging.
    pub fn debug_str(&self) -> String {
        let mut ret = format!(r#""type": "{}", "value": "#, self.tag_name());

        match &self.content {
            BlockContent::Children(children) => {
                ret.push_str(&children_debug_str(children));
            }
            BlockContent::Empty => {
                ret.push_str(r#""empty""#);
            }
            BlockContent::Token(token) => {
                ret.push('"');
                ret.push_str(&token.to_string());
                ret.push('"');
            }
            BlockContent::Function(function) => {
                ret.push_str(r#"{ "content": {"token": ""#);
                ret.push_str(&function.function.to_string());
                ret.push_str(r#"", "arguments": "#);
                ret.push_str(&children_debug_str(&function.args));
                ret.push_str("}}");
            }
        }

        ret
    }
}

fn children_debug_str(children: &[ConsumedBlock]) -> String {
    let mut ret = String::from("[");
    for (i, block) in children.iter().enumerate() {
        if i > 0 {
            ret.push_str(", ");
        }
        ret.push('{');
        ret.push_str(&block.debug_str());
        ret.push('}');
    }
    ret.push(']');

    ret
}
