//! Property-based tests for the expression algebra.
//!
//! These verify invariants around:
//! - OR/AND truth tables over arbitrary outcome vectors
//! - short-circuit evaluation counts
//! - flattening behavior of chained operators
//! - NOT as logical complement

use crate::expr::Expr;
use crate::test_support::{anon_get, fixed, probe, view};
use proptest::prelude::*;

/// Strategy for a non-empty vector of fixed component outcomes.
fn arb_outcomes() -> impl Strategy<Value = Vec<bool>> {
    prop::collection::vec(any::<bool>(), 1..8)
}

proptest! {
    #[test]
    fn or_matches_any(outcomes in arb_outcomes()) {
        let expr = Expr::any_of(outcomes.iter().map(|&b| fixed(b)));
        let got = expr.check(&anon_get(), &view()).unwrap();
        prop_assert_eq!(got, outcomes.iter().any(|&b| b));
    }

    #[test]
    fn and_matches_all(outcomes in arb_outcomes()) {
        let expr = Expr::all_of(outcomes.iter().map(|&b| fixed(b)));
        let got = expr.check(&anon_get(), &view()).unwrap();
        prop_assert_eq!(got, outcomes.iter().all(|&b| b));
    }

    #[test]
    fn not_is_complement(outcome in any::<bool>()) {
        let expr = !fixed(outcome);
        prop_assert_eq!(expr.check(&anon_get(), &view()).unwrap(), !outcome);
    }

    #[test]
    fn or_chain_flattens(outcomes in arb_outcomes()) {
        let mut iter = outcomes.iter();
        let mut expr = fixed(*iter.next().unwrap());
        for &b in iter {
            expr = expr | fixed(b);
        }

        if outcomes.len() > 1 {
            match &expr {
                Expr::Any(children) => prop_assert_eq!(children.len(), outcomes.len()),
                other => prop_assert!(false, "expected Any, got {:?}", other),
            }
        }
        let got = expr.check(&anon_get(), &view()).unwrap();
        prop_assert_eq!(got, outcomes.iter().any(|&b| b));
    }

    #[test]
    fn and_chain_flattens(outcomes in arb_outcomes()) {
        let mut iter = outcomes.iter();
        let mut expr = fixed(*iter.next().unwrap());
        for &b in iter {
            expr = expr & fixed(b);
        }

        if outcomes.len() > 1 {
            match &expr {
                Expr::All(children) => prop_assert_eq!(children.len(), outcomes.len()),
                other => prop_assert!(false, "expected All, got {:?}", other),
            }
        }
        let got = expr.check(&anon_get(), &view()).unwrap();
        prop_assert_eq!(got, outcomes.iter().all(|&b| b));
    }

    #[test]
    fn or_evaluates_nothing_past_the_first_true(outcomes in arb_outcomes()) {
        let probes: Vec<_> = outcomes.iter().map(|&b| probe(b)).collect();
        let expr = Expr::any_of(probes.iter().map(|(e, _)| e.clone()));
        expr.check(&anon_get(), &view()).unwrap();

        let decisive = outcomes.iter().position(|&b| b);
        for (i, (_, hits)) in probes.iter().enumerate() {
            let hits = hits.load(std::sync::atomic::Ordering::SeqCst);
            match decisive {
                Some(d) if i > d => prop_assert_eq!(hits, 0),
                _ => prop_assert_eq!(hits, 1),
            }
        }
    }

    #[test]
    fn and_evaluates_nothing_past_the_first_false(outcomes in arb_outcomes()) {
        let probes: Vec<_> = outcomes.iter().map(|&b| probe(b)).collect();
        let expr = Expr::all_of(probes.iter().map(|(e, _)| e.clone()));
        expr.check(&anon_get(), &view()).unwrap();

        let decisive = outcomes.iter().position(|&b| !b);
        for (i, (_, hits)) in probes.iter().enumerate() {
            let hits = hits.load(std::sync::atomic::Ordering::SeqCst);
            match decisive {
                Some(d) if i > d => prop_assert_eq!(hits, 0),
                _ => prop_assert_eq!(hits, 1),
            }
        }
    }

    #[test]
    fn normalization_preserves_the_decision(outcomes in arb_outcomes()) {
        let raw = Expr::all_of(outcomes.iter().map(|&b| fixed(b)));
        let expected = raw.check(&anon_get(), &view()).unwrap();
        let normalized = crate::composed::normalize(raw).unwrap();
        prop_assert_eq!(normalized.check(&anon_get(), &view()).unwrap(), expected);
    }
}
