//! Attribute-overlap scoring and best-candidate selection.

use std::collections::BTreeMap;

use crate::dom::DomService;

/// A candidate element paired with how many of the anchor's attribute
/// key/value pairs it carries verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredCandidate<E> {
    pub element: E,
    pub matches: usize,
}

/// Scores every candidate against the anchor's attributes, in pool order.
/// An attribute the candidate lacks, or carries with a different value,
/// contributes zero; attributes the anchor lacks are ignored.
pub fn score_candidates<D: DomService>(
    dom: &D,
    doc: &D::Document,
    candidates: &[D::Element],
    anchor_attributes: &BTreeMap<String, String>,
) -> Vec<ScoredCandidate<D::Element>> {
    candidates
        .iter()
        .map(|&element| {
            let attributes = dom.attributes(doc, element);
            let matches = anchor_attributes
                .iter()
                .filter(|&(key, value)| attributes.get(key) == Some(value))
                .count();
            ScoredCandidate { element, matches }
        })
        .collect()
}

/// Picks the best-scoring candidate: a fold where a later candidate wins
/// only with a strictly greater score than the running best, which starts
/// at zero. Ties keep the earlier candidate; an all-zero pool selects
/// nothing.
pub fn best_match<E>(
    scored: impl IntoIterator<Item = ScoredCandidate<E>>,
) -> Option<ScoredCandidate<E>> {
    scored.into_iter().fold(None, |best, candidate| {
        let best_matches = best.as_ref().map_or(0, |best| best.matches);
        if candidate.matches > best_matches {
            Some(candidate)
        } else {
            best
        }
    })
}
