//! Statement-position nodes: the template body, elements, blocks, and text.

use super::expr::{Expression, HashPair, PathExpression};
use crate::{Span, Spanned};

/// A block-param identifier bound by `as |a b|`.
#[derive(Clone, Debug)]
pub struct BlockParam {
    pub name: String,
    pub span: Span,
}

/// Raw text between mustaches/tags.
#[derive(Clone, Debug)]
pub struct TextNode {
    pub chars: String,
    pub span: Span,
}

/// `{{path arg1 arg2 named=value}}` in statement or attribute-value position.
#[derive(Clone, Debug)]
pub struct MustacheStatement {
    pub path: PathExpression,
    pub params: Vec<Expression>,
    pub hash: Vec<HashPair>,
    pub span: Span,
}

impl Spanned for MustacheStatement {
    fn span(&self) -> Span {
        self.span
    }
}

/// One segment of an interpolated attribute value: `class="a {{b}} c"`.
#[derive(Clone, Debug)]
pub enum ConcatPart {
    Text(String),
    Mustache(MustacheStatement),
}

/// An attribute value built from text interleaved with mustaches.
#[derive(Clone, Debug)]
pub struct ConcatStatement {
    pub parts: Vec<ConcatPart>,
    pub span: Span,
}

/// The value side of an [`AttrNode`].
#[derive(Clone, Debug)]
pub enum AttrValue {
    Text(String),
    Mustache(MustacheStatement),
    Concat(ConcatStatement),
}

/// `name="value"` on an element or component.
#[derive(Clone, Debug)]
pub struct AttrNode {
    pub name: String,
    pub value: AttrValue,
    pub span: Span,
}

/// `{{modifier arg named=value}}` attached to an element's open tag.
#[derive(Clone, Debug)]
pub struct ElementModifierStatement {
    pub path: PathExpression,
    pub params: Vec<Expression>,
    pub hash: Vec<HashPair>,
    pub span: Span,
}

/// `<tag ...>children</tag>` — a plain element, a component invocation, or a
/// named-block child, disambiguated by [`crate::classify_tag`] on `tag`.
#[derive(Clone, Debug)]
pub struct ElementNode {
    pub tag: String,
    pub tag_span: Span,
    pub attributes: Vec<AttrNode>,
    pub modifiers: Vec<ElementModifierStatement>,
    pub block_params: Vec<BlockParam>,
    pub children: Vec<Statement>,
    pub span: Span,
}

impl Spanned for ElementNode {
    fn span(&self) -> Span {
        self.span
    }
}

/// The body of a block invocation (default block or `{{else}}`).
#[derive(Clone, Debug)]
pub struct Block {
    pub block_params: Vec<BlockParam>,
    pub body: Vec<Statement>,
    pub span: Span,
}

/// The `{{else ...}}` arm of a block statement.
#[derive(Clone, Debug)]
pub enum Inverse {
    /// `{{else}} ... {{/x}}` — a plain inverse block, no re-invocation.
    Body(Block),
    /// `{{else if cond}}` or `{{else name as |p|}}` — the inverse re-nests a
    /// sibling block invocation (`if`, or an arbitrary named block helper).
    Chain(Box<BlockStatement>),
}

/// `{{#path arg named=value as |a b|}} body {{else}} inverse {{/path}}`.
#[derive(Clone, Debug)]
pub struct BlockStatement {
    pub path: PathExpression,
    pub params: Vec<Expression>,
    pub hash: Vec<HashPair>,
    pub program: Block,
    pub inverse: Option<Inverse>,
    pub span: Span,
}

impl Spanned for BlockStatement {
    fn span(&self) -> Span {
        self.span
    }
}

/// Any node that can appear in a template or block body.
///
/// `{{yield}}`, `{{if}}`, `{{array}}`, and `{{hash}}` have no dedicated node
/// type: like the upstream parser, this AST represents them as an ordinary
/// [`MustacheStatement`] (statement position) or [`SubExpression`](super::expr::SubExpression)
/// (expression position) whose path happens to be that bare name. The
/// special-form recognition happens in the expression/statement emitters,
/// which is also what lets the invariant checker catch `{{yield}}` used in
/// expression position (see `E-YIELD-POS`) — a dedicated AST node could never
/// appear there, which would make that check vacuous.
#[derive(Clone, Debug)]
pub enum Statement {
    Text(TextNode),
    Mustache(MustacheStatement),
    Block(BlockStatement),
    Element(ElementNode),
}

impl Spanned for Statement {
    fn span(&self) -> Span {
        match self {
            Statement::Text(t) => t.span,
            Statement::Mustache(m) => m.span,
            Statement::Block(b) => b.span,
            Statement::Element(e) => e.span,
        }
    }
}

/// The root of a parsed template.
#[derive(Clone, Debug)]
pub struct Template {
    pub body: Vec<Statement>,
    pub span: Span,
}

#[cfg(test)]
mod tests;
