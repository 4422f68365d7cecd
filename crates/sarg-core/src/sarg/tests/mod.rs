mod render;

use crate::{
    domain::ScalarDomain,
    sarg::{SargExpr, SargFactory, SargIntervalExpr, Strictness},
    value::Value,
};

fn int_factory() -> SargFactory<ScalarDomain> {
    SargFactory::new(ScalarDomain::Int)
}

fn text_factory() -> SargFactory<ScalarDomain> {
    SargFactory::new(ScalarDomain::Text)
}

fn text(s: &str) -> Value {
    Value::Text(s.to_string())
}

fn lower<'f>(
    factory: &'f SargFactory<ScalarDomain>,
    literal: impl Into<Value>,
    strictness: Strictness,
) -> SargIntervalExpr<'f> {
    let mut term = factory.new_interval_expr();
    term.set_lower(&literal.into(), strictness)
        .expect("lower bound should be admitted");

    term
}

fn upper<'f>(
    factory: &'f SargFactory<ScalarDomain>,
    literal: impl Into<Value>,
    strictness: Strictness,
) -> SargIntervalExpr<'f> {
    let mut term = factory.new_interval_expr();
    term.set_upper(&literal.into(), strictness)
        .expect("upper bound should be admitted");

    term
}

fn range<'f>(
    factory: &'f SargFactory<ScalarDomain>,
    lo: impl Into<Value>,
    lo_strictness: Strictness,
    hi: impl Into<Value>,
    hi_strictness: Strictness,
) -> SargIntervalExpr<'f> {
    let mut term = lower(factory, lo, lo_strictness);
    term.set_upper(&hi.into(), hi_strictness)
        .expect("upper bound should be admitted");

    term
}

fn evaluated<'a>(expr: impl Into<SargExpr<'a>>) -> String {
    expr.into()
        .evaluate()
        .expect("well-formed tree should evaluate")
        .to_string()
}
