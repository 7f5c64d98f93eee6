use crate::dom::DomService;

/// Levels of element children collected below each matched container.
/// Two levels (the containers' grandchildren) is the nesting shape the
/// original markup used; the level count is a structural heuristic, not
/// a guarantee, so callers can override it.
pub const DEFAULT_DESCENT_DEPTH: usize = 2;

/// Flattens `depth` successive levels of element children below every
/// container: candidates appear in document order, containers in the
/// order given.
pub fn collect_candidates<D: DomService>(
    dom: &D,
    doc: &D::Document,
    containers: &[D::Element],
    depth: usize,
) -> Vec<D::Element> {
    let mut pool: Vec<D::Element> = containers.to_vec();
    for _ in 0..depth {
        pool = pool
            .iter()
            .flat_map(|element| dom.children(doc, *element))
            .collect();
    }
    pool
}
