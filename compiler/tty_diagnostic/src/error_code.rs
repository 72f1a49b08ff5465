//! Structural error codes.
//!
//! Unlike a full compiler's numeric `E####` codes by phase, this transform
//! has a small, closed set of structural diagnostics — all produced by the
//! invariant checker rather than by type checking, which is the host
//! checker's job. Each carries a short mnemonic tag so callers can match on
//! kind without string-comparing messages.

use std::fmt;

/// One of the structural diagnostic kinds this transform can produce.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// `{{yield}}` used outside top-level statement position.
    YieldPos,
    /// `{{yield ... to=<non-literal>}}`.
    YieldDyn,
    /// `{{hash}}` given positional arguments.
    HashPos,
    /// `{{array}}` given named arguments.
    ArrayNamed,
    /// Inline `{{if}}` with fewer than two parameters.
    IfFew,
    /// Block `{{#if}}` with a parameter count other than one.
    IfBlockCond,
    /// Named-block children mixed with other content.
    Mix,
    /// A block param that is not a valid identifier.
    BpName,
}

impl ErrorCode {
    /// The stable mnemonic tag, e.g. `E-YIELD-POS`.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            ErrorCode::YieldPos => "E-YIELD-POS",
            ErrorCode::YieldDyn => "E-YIELD-DYN",
            ErrorCode::HashPos => "E-HASH-POS",
            ErrorCode::ArrayNamed => "E-ARRAY-NAMED",
            ErrorCode::IfFew => "E-IF-FEW",
            ErrorCode::IfBlockCond => "E-IF-BLOCK-COND",
            ErrorCode::Mix => "E-MIX",
            ErrorCode::BpName => "E-BP-NAME",
        }
    }

    /// The fixed, stable message text for this code.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            ErrorCode::YieldPos => "{{yield}} may only appear as a top-level statement",
            ErrorCode::YieldDyn => "Named block {{yield}}s must have a literal block name",
            ErrorCode::HashPos => "{{hash}} only accepts named parameters",
            ErrorCode::ArrayNamed => "{{array}} only accepts positional parameters",
            ErrorCode::IfFew => "{{if}} requires at least two parameters",
            ErrorCode::IfBlockCond => "{{#if}} requires exactly one condition",
            ErrorCode::Mix => "Named blocks may not be mixed with other content",
            ErrorCode::BpName => "Block params must be valid TypeScript identifiers",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}
