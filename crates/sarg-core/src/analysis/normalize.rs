use crate::analysis::ast::{ComparePredicate, SargPredicate};

///
/// Push a negation through a predicate.
///
/// The result is TRUE exactly where the input is FALSE, and UNKNOWN where
/// the input is UNKNOWN:
/// - De Morgan over AND / OR
/// - comparison operators flip (`<` becomes `>=`)
/// - IN and NOT IN swap
/// - IS NULL and IS NOT NULL swap
/// - double negation cancels
///
#[must_use]
pub fn negate(predicate: &SargPredicate) -> SargPredicate {
    match predicate {
        SargPredicate::True => SargPredicate::False,
        SargPredicate::False => SargPredicate::True,

        SargPredicate::And(children) => SargPredicate::Or(children.iter().map(negate).collect()),
        SargPredicate::Or(children) => SargPredicate::And(children.iter().map(negate).collect()),
        SargPredicate::Not(inner) => inner.as_ref().clone(),

        SargPredicate::Compare(cmp) => SargPredicate::Compare(ComparePredicate {
            op: cmp.op.negate(),
            value: cmp.value.clone(),
        }),
        SargPredicate::In(values) => SargPredicate::NotIn(values.clone()),
        SargPredicate::NotIn(values) => SargPredicate::In(values.clone()),

        SargPredicate::IsNull => SargPredicate::IsNotNull,
        SargPredicate::IsNotNull => SargPredicate::IsNull,
    }
}
