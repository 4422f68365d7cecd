//! Coercion-routing family classification for `Value`.
//!
//! Domains use the family to decide whether a literal can be admitted at
//! all; ordering and rounding are the domain's business.

///
/// CoercionFamily
///
/// Coarse value classification used only for admission routing.
///
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CoercionFamily {
    Numeric, // Int, Uint, Decimal
    Textual, // Text
    Bool,
    Null, // Value::Null
}
