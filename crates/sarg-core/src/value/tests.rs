use crate::{
    types::Decimal,
    value::{CoercionFamily, Value, canonical_cmp},
};
use std::cmp::Ordering;

// ---- helpers -----------------------------------------------------------

fn v_i(x: i64) -> Value {
    Value::Int(x)
}
fn v_txt(s: &str) -> Value {
    Value::Text(s.to_string())
}

#[test]
fn canonical_cmp_orders_same_variant_by_value() {
    assert_eq!(canonical_cmp(&v_i(7), &v_i(490)), Ordering::Less);
    assert_eq!(canonical_cmp(&v_i(7), &v_i(7)), Ordering::Equal);
    assert_eq!(
        canonical_cmp(&v_txt("GEMINI"), &v_txt("ARIES")),
        Ordering::Greater
    );
}

#[test]
fn canonical_cmp_is_rank_only_across_variants() {
    assert_eq!(canonical_cmp(&Value::Null, &v_i(-1)), Ordering::Less);
    assert_eq!(canonical_cmp(&v_txt("a"), &v_i(100)), Ordering::Greater);
    assert_eq!(
        canonical_cmp(&Value::Decimal(Decimal::new(85, 1)), &v_i(1)),
        Ordering::Less
    );
}

#[test]
fn display_quotes_text_and_leaves_numbers_bare() {
    assert_eq!(v_txt("CAPRICORN").to_string(), "'CAPRICORN'");
    assert_eq!(v_txt("O'NEIL").to_string(), "'O''NEIL'");
    assert_eq!(v_i(-7).to_string(), "-7");
    assert_eq!(Value::Decimal(Decimal::new(85, 1)).to_string(), "8.5");
    assert_eq!(Value::Null.to_string(), "null");
}

#[test]
fn option_literals_map_none_to_null() {
    assert_eq!(Value::from(None::<i64>), Value::Null);
    assert_eq!(Value::from(Some(3i64)), v_i(3));
}

#[test]
fn coercion_family_groups_numeric_variants() {
    assert_eq!(v_i(1).coercion_family(), CoercionFamily::Numeric);
    assert_eq!(Value::Uint(1).coercion_family(), CoercionFamily::Numeric);
    assert_eq!(
        Value::Decimal(Decimal::ZERO).coercion_family(),
        CoercionFamily::Numeric
    );
    assert_eq!(v_txt("x").coercion_family(), CoercionFamily::Textual);
    assert_eq!(Value::Null.coercion_family(), CoercionFamily::Null);
}

#[test]
fn to_decimal_widens_integers() {
    assert_eq!(v_i(9).to_decimal(), Some(Decimal::from(9i64)));
    assert_eq!(Value::Uint(9).to_decimal(), Some(Decimal::from(9u64)));
    assert_eq!(v_txt("9").to_decimal(), None);
}
