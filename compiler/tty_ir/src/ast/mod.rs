//! Template AST types.
//!
//! These are plain owned Rust types describing the shapes a Handlebars-family
//! parser produces; this crate only consumes them (see crate root docs).
//!
//! # Module Structure
//!
//! - `expr`: paths, subexpressions, literals, hash pairs
//! - `stmt`: the template body — text, mustaches, blocks, elements

mod expr;
mod stmt;

pub use expr::{Expression, HashPair, Literal, PathExpression, PathHead, PathSegment, SubExpression};
pub use stmt::{
    AttrNode, AttrValue, Block, BlockParam, BlockStatement, ConcatPart, ConcatStatement,
    ElementModifierStatement, ElementNode, Inverse, MustacheStatement, Statement, Template,
    TextNode,
};

/// How an [`ElementNode`] is classified by the statement emitter.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum TagKind {
    /// An angle-bracket component invocation.
    Component,
    /// A named-block child of a component (`<:name as |p|>`).
    NamedBlock,
    /// An ordinary HTML element.
    Plain,
}

/// Classify an element tag: uppercase initial, a dotted head, an
/// `@`-head, or a `this.`-head all mean "component"; a leading `:` means
/// "named block"; anything else is a plain element.
#[must_use]
pub fn classify_tag(tag: &str) -> TagKind {
    if let Some(name) = tag.strip_prefix(':') {
        debug_assert!(!name.is_empty(), "named-block tag must have a name after ':'");
        return TagKind::NamedBlock;
    }
    let is_component = tag.starts_with('@')
        || tag.starts_with("this.")
        || tag.contains('.')
        || tag.chars().next().is_some_and(|c| c.is_ascii_uppercase());
    if is_component {
        TagKind::Component
    } else {
        TagKind::Plain
    }
}

/// Strip the leading `:` from a named-block tag, if present.
#[must_use]
pub fn named_block_name(tag: &str) -> Option<&str> {
    tag.strip_prefix(':')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_uppercase_as_component() {
        assert_eq!(classify_tag("MyComponent"), TagKind::Component);
    }

    #[test]
    fn classifies_dotted_head_as_component() {
        assert_eq!(classify_tag("this.foo"), TagKind::Component);
        assert_eq!(classify_tag("obj.Thing"), TagKind::Component);
    }

    #[test]
    fn classifies_at_head_as_component() {
        assert_eq!(classify_tag("@foo"), TagKind::Component);
    }

    #[test]
    fn classifies_named_block() {
        assert_eq!(classify_tag(":header"), TagKind::NamedBlock);
        assert_eq!(named_block_name(":header"), Some("header"));
    }

    #[test]
    fn classifies_plain_element() {
        assert_eq!(classify_tag("div"), TagKind::Plain);
        assert_eq!(classify_tag("my-element"), TagKind::Plain);
        assert_eq!(named_block_name("div"), None);
    }
}
