use crate::{
    domain::DomainRef,
    error::SargError,
    obs::sink::{self, EvalKind, MetricsEvent},
    sarg::{
        BoundType, Coordinate, SargEndpoint, SargExpr, SargIntervalExpr, SargIntervalSequence,
        Strictness,
    },
};
use std::{cmp::Ordering, fmt};

///
/// SetOperator
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SetOperator {
    Union,
    Intersection,
    Complement,
}

impl SetOperator {
    const fn eval_kind(self) -> EvalKind {
        match self {
            Self::Union => EvalKind::Union,
            Self::Intersection => EvalKind::Intersection,
            Self::Complement => EvalKind::Complement,
        }
    }
}

impl fmt::Display for SetOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Union => "UNION",
            Self::Intersection => "INTERSECTION",
            Self::Complement => "COMPLEMENT",
        };
        write!(f, "{label}")
    }
}

///
/// SargSetExpr
///
/// Set operator over child expressions of one domain.
///
/// Union and intersection take any number of children; a complement takes
/// exactly one. Children are kept in insertion order until evaluation.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SargSetExpr<'a> {
    domain: DomainRef<'a>,
    op: SetOperator,
    children: Vec<SargExpr<'a>>,
}

impl<'a> SargSetExpr<'a> {
    #[must_use]
    pub(crate) const fn new(domain: DomainRef<'a>, op: SetOperator) -> Self {
        Self {
            domain,
            op,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub(crate) const fn from_children(
        domain: DomainRef<'a>,
        op: SetOperator,
        children: Vec<SargExpr<'a>>,
    ) -> Self {
        Self {
            domain,
            op,
            children,
        }
    }

    #[must_use]
    pub const fn domain(&self) -> DomainRef<'a> {
        self.domain
    }

    #[must_use]
    pub const fn operator(&self) -> SetOperator {
        self.op
    }

    #[must_use]
    pub fn children(&self) -> &[SargExpr<'a>] {
        &self.children
    }

    /// Append one child.
    ///
    /// Rejects children of another domain and a second complement child.
    pub fn add_child(&mut self, child: impl Into<SargExpr<'a>>) -> Result<(), SargError> {
        let child = child.into();

        if !child.domain().same_domain(&self.domain) {
            return Err(SargError::domain_mismatch(
                self.domain.name(),
                child.domain().name(),
            ));
        }
        if self.op == SetOperator::Complement && !self.children.is_empty() {
            return Err(SargError::set_invariant(
                "complement accepts exactly one child",
            ));
        }

        self.children.push(child);

        Ok(())
    }

    /// Evaluate into canonical form: the empty term, a single term, or a
    /// union of disjoint terms in ascending order.
    pub fn evaluate(&self) -> Result<SargExpr<'a>, SargError> {
        Ok(self.evaluate_sequence()?.into_expr())
    }

    /// Evaluate into the canonical interval sequence.
    pub fn evaluate_sequence(&self) -> Result<SargIntervalSequence<'a>, SargError> {
        sink::record(MetricsEvent::Evaluate {
            kind: self.op.eval_kind(),
        });

        let sequence = match self.op {
            SetOperator::Union => {
                let mut terms = Vec::new();
                self.collect_union_terms(&mut terms)?;

                SargIntervalSequence::from_terms(self.domain, terms)
            }
            SetOperator::Intersection => {
                let mut operands = Vec::new();
                self.collect_intersection_operands(&mut operands)?;

                intersect_sequences(self.domain, operands)
            }
            SetOperator::Complement => {
                let child = self.children.first().ok_or_else(|| {
                    SargError::set_invariant("complement evaluated without a child")
                })?;

                child.evaluate_sequence()?.complement()
            }
        };

        if sequence.is_empty() {
            sink::record(MetricsEvent::EmptyResult);
        }

        Ok(sequence)
    }

    // Nested unions contribute their terms directly.
    fn collect_union_terms(&self, out: &mut Vec<SargIntervalExpr<'a>>) -> Result<(), SargError> {
        for child in &self.children {
            match child {
                SargExpr::Interval(term) => out.push(term.evaluate()),
                SargExpr::Set(set) if set.op == SetOperator::Union => {
                    set.collect_union_terms(out)?;
                }
                SargExpr::Set(set) => out.extend(set.evaluate_sequence()?.into_intervals()),
            }
        }

        Ok(())
    }

    // Nested intersections contribute their operands directly.
    fn collect_intersection_operands(
        &self,
        out: &mut Vec<SargIntervalSequence<'a>>,
    ) -> Result<(), SargError> {
        for child in &self.children {
            match child {
                SargExpr::Set(set) if set.op == SetOperator::Intersection => {
                    set.collect_intersection_operands(out)?;
                }
                _ => out.push(child.evaluate_sequence()?),
            }
        }

        Ok(())
    }
}

impl fmt::Display for SargSetExpr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.op)?;
        for child in &self.children {
            write!(f, " {child}")?;
        }
        f.write_str(" )")
    }
}

//
// ALGORITHMS
//

/// Union-merge evaluated terms into ascending disjoint order.
///
/// Empty and inverted terms drop out; any unconstrained term absorbs the
/// rest.
pub(super) fn merge_union<'a>(
    domain: DomainRef<'a>,
    terms: Vec<SargIntervalExpr<'a>>,
) -> Vec<SargIntervalExpr<'a>> {
    let mut terms: Vec<_> = terms
        .into_iter()
        .filter(|term| !term.is_empty() && !term.is_inverted())
        .collect();

    if terms.iter().any(SargIntervalExpr::is_unconstrained) {
        return vec![SargIntervalExpr::new(domain)];
    }

    terms.sort_by(SargIntervalExpr::compare);

    let mut merged: Vec<SargIntervalExpr<'a>> = Vec::with_capacity(terms.len());
    let mut absorbed = 0u64;

    for term in terms {
        if let Some(running) = merged.last_mut()
            && joins(running.upper(), term.lower())
        {
            running.extend_upper(term.upper());
            absorbed += 1;
            continue;
        }

        merged.push(term);
    }

    if absorbed > 0 {
        sink::record(MetricsEvent::TermsMerged { merged: absorbed });
    }

    // no input term admitted null, so a merged "(-infinity, +infinity)"
    // still excludes it
    for term in &mut merged {
        if term.is_unconstrained() {
            *term = SargIntervalExpr::from_endpoints(
                SargEndpoint::null(domain, BoundType::Lower, Strictness::Open),
                SargEndpoint::positive_infinity(domain),
            );
        }
    }

    // "[null, +infinity)" covers everything
    if let [only] = merged.as_slice()
        && only.lower().is_null()
        && only.lower().is_closed()
        && matches!(only.upper().coordinate(), Coordinate::PositiveInfinity)
    {
        return vec![SargIntervalExpr::new(domain)];
    }

    merged
}

// Whether a term starting at `lower` continues one ending at `upper`.
fn joins(upper: &SargEndpoint<'_>, lower: &SargEndpoint<'_>) -> bool {
    if lower.compare(upper) != Ordering::Greater || upper.is_touching(lower) {
        return true;
    }

    // "[null" followed by "(null" or "(-infinity": nothing lies between
    upper.is_null()
        && upper.is_closed()
        && (matches!(lower.coordinate(), Coordinate::NegativeInfinity)
            || (lower.is_null() && !lower.is_closed()))
}

/// Intersect operand sequences; unconstrained operands are identities.
fn intersect_sequences<'a>(
    domain: DomainRef<'a>,
    operands: Vec<SargIntervalSequence<'a>>,
) -> SargIntervalSequence<'a> {
    let mut acc: Option<Vec<SargIntervalExpr<'a>>> = None;

    for operand in operands {
        if operand.is_unconstrained() {
            continue;
        }

        let terms = operand.into_intervals();
        let next = match acc {
            None => terms,
            Some(prev) => prev
                .iter()
                .flat_map(|left| terms.iter().filter_map(move |right| intersect_terms(left, right)))
                .collect(),
        };

        acc = Some(merge_union(domain, next));
    }

    match acc {
        Some(terms) => SargIntervalSequence::from_canonical(domain, terms),
        None => SargIntervalSequence::unconstrained(domain),
    }
}

// Greatest lower and least upper; None when they cross.
fn intersect_terms<'a>(
    left: &SargIntervalExpr<'a>,
    right: &SargIntervalExpr<'a>,
) -> Option<SargIntervalExpr<'a>> {
    let lower = if left.lower().compare(right.lower()) == Ordering::Less {
        right.lower()
    } else {
        left.lower()
    };
    let upper = if left.upper().compare(right.upper()) == Ordering::Greater {
        right.upper()
    } else {
        left.upper()
    };

    let term = SargIntervalExpr::from_endpoints(lower.clone(), upper.clone());

    (!term.is_inverted()).then_some(term)
}

/// Gaps of a canonical sequence over the non-null value line.
pub(super) fn complement_terms<'a>(
    domain: DomainRef<'a>,
    terms: &[SargIntervalExpr<'a>],
) -> Vec<SargIntervalExpr<'a>> {
    let (Some(first), Some(last)) = (terms.first(), terms.last()) else {
        return vec![SargIntervalExpr::from_endpoints(
            SargEndpoint::null(domain, BoundType::Lower, Strictness::Open),
            SargEndpoint::positive_infinity(domain),
        )];
    };

    if terms.iter().any(SargIntervalExpr::is_unconstrained) {
        return Vec::new();
    }

    let mut pieces = Vec::with_capacity(terms.len() + 1);

    if first.lower().coordinate().is_finite() {
        pieces.push(SargIntervalExpr::from_endpoints(
            SargEndpoint::negative_infinity(domain),
            first.lower().flipped(),
        ));
    }

    for pair in terms.windows(2) {
        pieces.push(SargIntervalExpr::from_endpoints(
            pair[0].upper().flipped(),
            pair[1].lower().flipped(),
        ));
    }

    if !matches!(last.upper().coordinate(), Coordinate::PositiveInfinity) {
        pieces.push(SargIntervalExpr::from_endpoints(
            last.upper().flipped(),
            SargEndpoint::positive_infinity(domain),
        ));
    }

    merge_union(domain, pieces)
}
