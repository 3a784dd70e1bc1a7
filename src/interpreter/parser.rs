/// Core Pratt-parsing machinery.
///
/// Declares the `Parser` itself, the operator-precedence ladder, token
/// lookahead, and error accumulation. The expression loop and the grammar
/// rules live in the sibling modules and hang off the same `Parser`.
pub mod core;
/// Expression parsing rules.
///
/// Prefix and infix parse rules for every expression form: literals,
/// identifiers, unary and binary operators, grouped expressions,
/// conditionals, function literals, and calls.
pub mod expression;
/// Statement parsing rules.
///
/// Dispatches on the current token to parse `let` statements, `return`
/// statements, expression statements, and brace-delimited blocks.
pub mod statement;

pub use self::core::{Parser, Precedence};
