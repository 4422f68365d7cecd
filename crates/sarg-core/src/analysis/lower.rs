use crate::{
    analysis::{
        ast::{CompareOp, ComparePredicate, SargPredicate},
        normalize::negate,
    },
    domain::Domain,
    error::SargError,
    sarg::{SargExpr, SargFactory, Strictness},
    value::Value,
};

///
/// Lower a predicate into an equivalent search-argument tree.
///
/// The tree matches a value exactly when the predicate is TRUE for it.
/// Literals the domain cannot admit are reported as errors; nothing is
/// evaluated here.
///
pub fn lower_predicate<'f, D: Domain>(
    factory: &'f SargFactory<D>,
    predicate: &SargPredicate,
) -> Result<SargExpr<'f>, SargError> {
    let expr: SargExpr<'f> = match predicate {
        SargPredicate::True => factory.new_interval_expr().into(),
        SargPredicate::False => factory.empty().into(),

        SargPredicate::And(children) => factory
            .intersection(lower_all(factory, children)?)?
            .into(),
        SargPredicate::Or(children) => factory.union(lower_all(factory, children)?)?.into(),
        SargPredicate::Not(inner) => lower_predicate(factory, &negate(inner))?,

        SargPredicate::Compare(cmp) => lower_compare(factory, cmp)?,
        SargPredicate::In(values) => lower_in(factory, values)?,
        SargPredicate::NotIn(values) => lower_not_in(factory, values)?,

        SargPredicate::IsNull => factory.null().into(),
        SargPredicate::IsNotNull => factory.complement(factory.null())?.into(),
    };

    Ok(expr)
}

fn lower_all<'f, D: Domain>(
    factory: &'f SargFactory<D>,
    children: &[SargPredicate],
) -> Result<Vec<SargExpr<'f>>, SargError> {
    children
        .iter()
        .map(|child| lower_predicate(factory, child))
        .collect()
}

// Comparisons against null are UNKNOWN for every row.
fn lower_compare<'f, D: Domain>(
    factory: &'f SargFactory<D>,
    cmp: &ComparePredicate,
) -> Result<SargExpr<'f>, SargError> {
    if cmp.value.is_null() {
        return Ok(factory.empty().into());
    }

    let mut term = factory.new_interval_expr();
    match cmp.op {
        CompareOp::Eq => term.set_point(&cmp.value)?,
        CompareOp::Ne => {
            let point = factory.point(cmp.value.clone())?;
            return Ok(factory.complement(point)?.into());
        }
        CompareOp::Lt => term.set_upper(&cmp.value, Strictness::Open)?,
        CompareOp::Lte => term.set_upper(&cmp.value, Strictness::Closed)?,
        CompareOp::Gt => term.set_lower(&cmp.value, Strictness::Open)?,
        CompareOp::Gte => term.set_lower(&cmp.value, Strictness::Closed)?,
    }

    Ok(term.into())
}

// Null list members never compare equal, so they contribute nothing.
fn lower_in<'f, D: Domain>(
    factory: &'f SargFactory<D>,
    values: &[Value],
) -> Result<SargExpr<'f>, SargError> {
    let points = values
        .iter()
        .filter(|value| !value.is_null())
        .map(|value| factory.point(value.clone()))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(factory.union(points)?.into())
}

// A null member makes NOT IN UNKNOWN for every value outside the list.
fn lower_not_in<'f, D: Domain>(
    factory: &'f SargFactory<D>,
    values: &[Value],
) -> Result<SargExpr<'f>, SargError> {
    if values.is_empty() {
        return Ok(factory.new_interval_expr().into());
    }
    if values.iter().any(Value::is_null) {
        // still validate the remaining literals
        lower_in(factory, values)?;
        return Ok(factory.empty().into());
    }

    Ok(factory.complement(lower_in(factory, values)?)?.into())
}
