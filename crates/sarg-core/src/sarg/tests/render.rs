use crate::{
    domain::{Admission, Domain},
    error::{ErrorOrigin, SargError},
    sarg::{
        BoundType, SargExpr, SargFactory, SetOperator, Strictness,
        tests::{evaluated, int_factory, lower, text_factory, upper},
    },
    types::Decimal,
    value::Value,
};
use std::cmp::Ordering;

///
/// RoundingContinuousDomain
///
/// Claims to be continuous yet rounds every literal up to 1.
///

struct RoundingContinuousDomain;

impl Domain for RoundingContinuousDomain {
    fn name(&self) -> &str {
        "rounding_continuous"
    }

    fn is_discrete(&self) -> bool {
        false
    }

    fn admit(&self, _literal: &Value) -> Result<Admission, SargError> {
        Ok(Admission::Ceiling(Value::Int(1)))
    }
}

fn eight_and_a_half() -> Value {
    Value::Decimal(Decimal::new(85, 1))
}

//
// ENDPOINTS
//

#[test]
fn endpoint_renders_infinities() {
    let factory = int_factory();
    let mut endpoint = factory.new_endpoint();
    assert_eq!(endpoint.to_string(), "-infinity");

    endpoint.set_positive_infinity();
    assert_eq!(endpoint.to_string(), "+infinity");

    endpoint.set_negative_infinity();
    assert_eq!(endpoint.to_string(), "-infinity");
}

#[test]
fn endpoint_renders_finite_bounds() {
    let factory = int_factory();
    let mut endpoint = factory.new_endpoint();
    let seven = factory.new_literal(7).expect("7 is an int");

    let cases = [
        (BoundType::Lower, Strictness::Open, "> 7"),
        (BoundType::Lower, Strictness::Closed, ">= 7"),
        (BoundType::Upper, Strictness::Open, "< 7"),
        (BoundType::Upper, Strictness::Closed, "<= 7"),
    ];
    for (bound, strictness, expected) in cases {
        endpoint
            .set_finite(bound, strictness, &seven)
            .expect("7 should be admitted");
        assert_eq!(endpoint.to_string(), expected);
    }
}

#[test]
fn endpoint_rounds_fractional_bounds_on_int_domain() {
    let factory = int_factory();
    let mut endpoint = factory.new_endpoint();
    let literal = factory
        .new_literal(eight_and_a_half())
        .expect("8.5 can bound an int range");

    let cases = [
        (BoundType::Lower, Strictness::Open, ">= 9"),
        (BoundType::Lower, Strictness::Closed, ">= 9"),
        (BoundType::Upper, Strictness::Open, "< 9"),
        (BoundType::Upper, Strictness::Closed, "< 9"),
    ];
    for (bound, strictness, expected) in cases {
        endpoint
            .set_finite(bound, strictness, &literal)
            .expect("8.5 should be admitted");
        assert_eq!(endpoint.to_string(), expected);
    }
}

#[test]
fn endpoint_renders_null_coordinate() {
    let factory = int_factory();
    let mut endpoint = factory.new_endpoint();

    endpoint
        .set_finite(
            BoundType::Lower,
            Strictness::Open,
            &factory.new_null_literal(),
        )
        .expect("null is always admitted");

    assert_eq!(endpoint.to_string(), "> null");
    assert!(endpoint.is_null());
}

#[test]
fn endpoint_rejects_literals_outside_the_domain() {
    let factory = int_factory();
    let mut endpoint = factory.new_endpoint();

    let err = endpoint
        .set_finite(BoundType::Lower, Strictness::Open, &Value::from("seven"))
        .expect_err("text cannot bound an int range");

    assert!(err.display_with_class().starts_with("domain:unsupported"));
    assert_eq!(endpoint.to_string(), "-infinity");
}

#[test]
fn endpoint_touching_and_ordering() {
    let factory = int_factory();
    let mut left = factory.new_endpoint();
    let mut right = factory.new_endpoint();
    let seven = Value::from(7);

    assert!(!left.is_touching(&right));
    assert_eq!(left.compare(&right), Ordering::Equal);

    left.set_finite(BoundType::Upper, Strictness::Open, &seven)
        .expect("7 is an int");
    right
        .set_finite(BoundType::Lower, Strictness::Open, &seven)
        .expect("7 is an int");
    assert!(!left.is_touching(&right));
    assert_eq!(left.compare(&right), Ordering::Less);

    right
        .set_finite(BoundType::Lower, Strictness::Closed, &seven)
        .expect("7 is an int");
    assert!(left.is_touching(&right));
    assert_eq!(left.compare(&right), Ordering::Less);

    left.set_finite(BoundType::Upper, Strictness::Closed, &seven)
        .expect("7 is an int");
    assert!(left.is_touching(&right));
    assert_eq!(left.compare(&right), Ordering::Equal);

    right
        .set_finite(BoundType::Lower, Strictness::Closed, &Value::from(490))
        .expect("490 is an int");
    assert!(!left.is_touching(&right));
    assert_eq!(left.compare(&right), Ordering::Less);
}

#[test]
fn null_endpoints_never_touch() {
    let factory = int_factory();
    let mut left = factory.new_endpoint();
    let mut right = factory.new_endpoint();

    left.set_finite(BoundType::Upper, Strictness::Closed, &Value::Null)
        .expect("null is always admitted");
    right
        .set_finite(BoundType::Lower, Strictness::Closed, &Value::Null)
        .expect("null is always admitted");

    assert!(!left.is_touching(&right));
    assert_eq!(left.compare(&right), Ordering::Equal);
}

//
// INTERVALS
//

#[test]
fn interval_renders_each_shape() {
    let factory = int_factory();
    let mut term = factory.new_interval_expr();
    assert_eq!(term.to_string(), "(-infinity, +infinity)");
    assert!(term.is_unconstrained());

    term.set_point(&Value::from(7)).expect("7 is an int");
    assert_eq!(term.to_string(), "[7]");
    assert!(term.is_point());

    term.set_lower(&Value::from(7), Strictness::Closed)
        .expect("7 is an int");
    term.set_upper(&Value::from(490), Strictness::Closed)
        .expect("490 is an int");
    assert_eq!(term.to_string(), "[7, 490]");
    assert!(term.is_range());

    term.unset_lower();
    assert_eq!(term.to_string(), "(-infinity, 490]");
    assert_eq!(term.evaluate().to_string(), "(null, 490]");

    term.set_lower(&Value::from(7), Strictness::Closed)
        .expect("7 is an int");
    term.unset_upper();
    assert_eq!(term.to_string(), "[7, +infinity)");

    term.set_upper(&Value::from(490), Strictness::Open)
        .expect("490 is an int");
    assert_eq!(term.to_string(), "[7, 490)");

    term.set_lower(&Value::from(7), Strictness::Open)
        .expect("7 is an int");
    assert_eq!(term.to_string(), "(7, 490)");
}

#[test]
fn interval_null_and_empty_states() {
    let factory = int_factory();
    let mut term = factory.new_interval_expr();

    term.set_null();
    assert_eq!(term.to_string(), "[null] NULL_MATCHES_NULL");
    assert!(term.is_null());
    assert_eq!(term.evaluate().to_string(), "[null]");

    term.set_empty();
    assert_eq!(term.to_string(), "()");
    assert!(term.is_empty());
    assert!(term.evaluate().is_empty());

    term.set_unconstrained();
    assert_eq!(term.to_string(), "(-infinity, +infinity)");
    assert!(!term.is_empty());
    assert_eq!(term.evaluate(), term);
}

#[test]
fn fractional_point_on_int_domain_is_empty() {
    let factory = int_factory();
    let mut term = factory.new_interval_expr();

    term.set_point(&eight_and_a_half())
        .expect("8.5 can bound an int range");

    assert!(!term.is_point());
    assert!(term.evaluate().is_empty());
}

#[test]
fn continuous_domain_cannot_round_bounds() {
    let factory = SargFactory::new(RoundingContinuousDomain);
    let mut term = factory.new_interval_expr();

    let err = term
        .set_lower(&eight_and_a_half(), Strictness::Open)
        .expect_err("a continuous domain has nothing to round onto");

    assert_eq!(err.origin, ErrorOrigin::Endpoint);
    assert!(err.message.contains("rounding_continuous"));
    assert!(term.is_unconstrained());
}

#[test]
fn lower_null_bound_reaching_infinity_is_unconstrained() {
    let factory = int_factory();
    let mut term = factory.new_interval_expr();
    term.set_lower(&Value::Null, Strictness::Closed)
        .expect("null is always admitted");
    assert_eq!(term.to_string(), "[null, +infinity)");

    let direct = term.evaluate();
    assert!(direct.is_unconstrained());
    assert_eq!(direct.to_string(), "(-infinity, +infinity)");
    assert_eq!(evaluated(term.clone()), direct.to_string());
    assert_eq!(SargExpr::from(term).evaluate(), Ok(SargExpr::from(direct)));
}

#[test]
fn crossed_bounds_evaluate_to_empty() {
    let factory = int_factory();
    let mut term = factory.new_interval_expr();

    term.set_lower(&Value::from(10), Strictness::Closed)
        .expect("10 is an int");
    term.set_upper(&Value::from(3), Strictness::Closed)
        .expect("3 is an int");

    assert_eq!(term.evaluate().to_string(), "()");
}

#[test]
fn caller_built_endpoints_must_match_their_side() {
    let factory = int_factory();
    let mut term = factory.new_interval_expr();
    let mut endpoint = factory.new_endpoint();

    endpoint
        .set_finite(BoundType::Upper, Strictness::Open, &Value::from(5))
        .expect("5 is an int");
    term.set_upper_endpoint(endpoint.clone())
        .expect("an upper endpoint fits the upper side");
    assert_eq!(term.to_string(), "(-infinity, 5)");

    let err = term
        .set_lower_endpoint(endpoint)
        .expect_err("an upper endpoint cannot bound from below");
    assert!(err.display_with_class().starts_with("endpoint:invariant_violation"));

    let text = text_factory();
    let foreign = text.new_endpoint();
    assert!(term.set_lower_endpoint(foreign).is_err());
}

//
// SETS
//

#[test]
fn set_expressions_render_and_evaluate() {
    let factory = int_factory();
    let above = lower(&factory, 7, Strictness::Open);
    let below = upper(&factory, 490, Strictness::Open);

    let intersection = factory
        .intersection([above.clone(), below.clone()])
        .expect("same domain");
    assert_eq!(
        intersection.to_string(),
        "INTERSECTION( (7, +infinity) (-infinity, 490) )"
    );
    assert_eq!(evaluated(intersection), "(7, 490)");

    let union = factory
        .union([above.clone(), below])
        .expect("same domain");
    assert_eq!(union.to_string(), "UNION( (7, +infinity) (-infinity, 490) )");
    assert_eq!(evaluated(union), "(null, +infinity)");

    let complement = factory.complement(above).expect("same domain");
    assert_eq!(complement.to_string(), "COMPLEMENT( (7, +infinity) )");
    assert_eq!(evaluated(complement), "(-infinity, 7]");
}

#[test]
fn complement_takes_exactly_one_child() {
    let factory = int_factory();
    let mut complement = factory.new_set_expr(SetOperator::Complement);

    let err = complement
        .evaluate()
        .expect_err("a childless complement cannot evaluate");
    assert!(err.display_with_class().starts_with("set_expr:invariant_violation"));

    complement
        .add_child(factory.new_interval_expr())
        .expect("first child is accepted");
    complement
        .add_child(factory.new_interval_expr())
        .expect_err("second child is rejected");
    assert_eq!(complement.children().len(), 1);
}

#[test]
fn set_rejects_children_from_another_domain() {
    let ints = int_factory();
    let texts = text_factory();
    let mut union = ints.new_set_expr(SetOperator::Union);

    let err = union
        .add_child(texts.new_interval_expr())
        .expect_err("text child cannot join an int union");

    assert!(err.message.contains("'int'"));
    assert!(union.children().is_empty());
}

#[test]
fn empty_sets_evaluate_to_their_identity() {
    let factory = int_factory();

    assert_eq!(evaluated(factory.new_set_expr(SetOperator::Union)), "()");
    assert_eq!(
        evaluated(factory.new_set_expr(SetOperator::Intersection)),
        "(-infinity, +infinity)"
    );
}
