//! The element-correspondence core: finds where an element from an
//! original document ended up in a structurally modified copy.
//!
//! Pipeline, each stage a pure function of its inputs:
//!   1. Anchor: find the element by id, pick its enclosing container
//!   2. Candidates: re-query the container in the updated document and
//!      flatten a fixed number of child levels below every match
//!   3. Score: count attribute key/value pairs shared with the anchor
//!   4. Select: first strictly-greater score wins
//!   5. Path: render the winner's location root-to-leaf

mod anchor;
mod candidates;
mod matching;
mod path;

use crate::dom::{DomError, DomService};

pub use self::anchor::anchor_container;
pub use self::candidates::{collect_candidates, DEFAULT_DESCENT_DEPTH};
pub use self::matching::{best_match, score_candidates, ScoredCandidate};
pub use self::path::{element_path, render_path, PathSegment, SegmentLocation};

/// What a full pipeline run concluded. Every "nothing found" branch is a
/// variant of its own so callers have to handle it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocateOutcome {
    /// A best-scoring counterpart was found at the described location.
    Located { path: String, matches: usize },
    /// The original document has no element with the requested id.
    IdNotFound,
    /// The updated document has no container matching the anchor
    /// container's selector.
    NoContainerMatch,
    /// Candidates existed, but none shared a single attribute value with
    /// the anchor element.
    NoAttributeMatch,
}

/// Runs the pipeline against two already-parsed documents.
pub fn locate_element<D: DomService>(
    dom: &D,
    original: &D::Document,
    updated: &D::Document,
    element_id: &str,
    depth: usize,
) -> Result<LocateOutcome, DomError> {
    let Some(element) = dom.find_by_id(original, element_id) else {
        return Ok(LocateOutcome::IdNotFound);
    };

    let container = anchor_container(dom, original, element);
    let selector = dom.canonical_selector(original, container);
    log::debug!("Anchor container selector: {}", selector);

    let containers = dom.query(updated, &selector)?;
    if containers.is_empty() {
        return Ok(LocateOutcome::NoContainerMatch);
    }

    let candidates = collect_candidates(dom, updated, &containers, depth);
    log::debug!("Collected {} candidate element(s)", candidates.len());

    let attributes = dom.attributes(original, element);
    let scored = score_candidates(dom, updated, &candidates, &attributes);

    match best_match(scored) {
        Some(best) => {
            log::trace!("Best candidate matched {} attribute(s)", best.matches);
            let segments = element_path(dom, updated, best.element);
            Ok(LocateOutcome::Located {
                path: render_path(&segments),
                matches: best.matches,
            })
        }
        None => Ok(LocateOutcome::NoAttributeMatch),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::ScraperDom;
    use pretty_assertions::assert_eq;

    const ORIGINAL: &str = r#"
        <html><head></head><body>
        <div id="panel-holder">
            <div class="panel">
                <a id="target" class="btn" title="Go"></a>
                <a class="btn wide" title="Stop"></a>
            </div>
            <div class="footer"></div>
        </div>
        </body></html>
    "#;

    #[test]
    fn identical_documents_find_the_same_element() {
        let dom = ScraperDom;
        let original = dom.parse_document(ORIGINAL);
        let updated = dom.parse_document(ORIGINAL);

        let outcome = locate_element(&dom, &original, &updated, "target", 2).unwrap();
        // Every anchor attribute matches, and the path names the id.
        assert_eq!(
            outcome,
            LocateOutcome::Located {
                path: "html:0 -> body:1 -> div:0 -> div:0 -> a:#target".to_owned(),
                matches: 3,
            }
        );
    }

    #[test]
    fn modified_document_matches_by_attribute_overlap() {
        let dom = ScraperDom;
        let original = dom.parse_document(ORIGINAL);
        let updated = dom.parse_document(
            r#"
            <html><head></head><body>
            <div id="panel-holder">
                <div class="panel">
                    <span class="decoration"></span>
                    <a class="btn" title="Go" data-extra="1"></a>
                    <a class="btn wide" title="Stop"></a>
                </div>
                <div class="footer"><p class="note"></p></div>
            </div>
            </body></html>
        "#,
        );

        let outcome = locate_element(&dom, &original, &updated, "target", 2).unwrap();
        match outcome {
            LocateOutcome::Located { path, matches } => {
                // class and title survive; the id did not.
                assert_eq!(matches, 2);
                assert_eq!(
                    path,
                    "html:0 -> body:1 -> div:0 -> div:0 -> \
                     a:#panel-holder > div.panel > a.btn:nth-child(2)"
                );
            }
            other => panic!("expected a located element, got {:?}", other),
        }
    }

    #[test]
    fn missing_id_reports_id_not_found() {
        let dom = ScraperDom;
        let original = dom.parse_document(ORIGINAL);
        let updated = dom.parse_document(ORIGINAL);

        let outcome = locate_element(&dom, &original, &updated, "no-such-id", 2).unwrap();
        assert_eq!(outcome, LocateOutcome::IdNotFound);
    }

    #[test]
    fn missing_container_reports_no_container_match() {
        let dom = ScraperDom;
        let original = dom.parse_document(ORIGINAL);
        let updated = dom.parse_document("<html><head></head><body><p>gone</p></body></html>");

        let outcome = locate_element(&dom, &original, &updated, "target", 2).unwrap();
        assert_eq!(outcome, LocateOutcome::NoContainerMatch);
    }

    #[test]
    fn all_zero_scores_report_no_attribute_match() {
        let dom = ScraperDom;
        let original = dom.parse_document(ORIGINAL);
        let updated = dom.parse_document(
            r#"
            <html><head></head><body>
            <div id="panel-holder">
                <div class="panel"><i></i></div>
                <div class="footer"></div>
            </div>
            </body></html>
        "#,
        );

        let outcome = locate_element(&dom, &original, &updated, "target", 2).unwrap();
        assert_eq!(outcome, LocateOutcome::NoAttributeMatch);
    }

    #[test]
    fn shallow_nesting_is_reachable_at_depth_one() {
        let dom = ScraperDom;
        let markup = r#"<html><head></head><body><div><div id="ok" data-x="1"></div></div></body></html>"#;
        let original = dom.parse_document(markup);
        let updated = dom.parse_document(markup);

        let outcome = locate_element(&dom, &original, &updated, "ok", 1).unwrap();
        assert_eq!(
            outcome,
            LocateOutcome::Located {
                path: "html:0 -> body:1 -> div:0 -> div:#ok".to_owned(),
                matches: 2,
            }
        );
    }

    #[test]
    fn pipeline_is_idempotent() {
        let dom = ScraperDom;
        let original = dom.parse_document(ORIGINAL);
        let updated = dom.parse_document(ORIGINAL);

        let first = locate_element(&dom, &original, &updated, "target", 2).unwrap();
        let second = locate_element(&dom, &original, &updated, "target", 2).unwrap();
        assert_eq!(first, second);
    }
}
