use crate::dom::DomService;

/// Tag name of the ancestor chosen to scope the search.
const CONTAINER_TAG: &str = "div";

/// Walks upward from `element` to the nearest `div` ancestor and applies
/// the widening rule: when that ancestor's parent has more than one
/// element child, the parent becomes the container instead, which widens
/// the search enough to keep the container structurally distinctive.
///
/// The walk is bounded by the document root. With no `div` ancestor the
/// topmost element reached scopes the search; an element with no parent
/// scopes it by itself.
pub fn anchor_container<D: DomService>(
    dom: &D,
    doc: &D::Document,
    element: D::Element,
) -> D::Element {
    let mut current = element;
    let container = loop {
        match dom.parent(doc, current) {
            Some(parent) if dom.tag_name(doc, parent) == CONTAINER_TAG => break parent,
            Some(parent) => current = parent,
            None => break current,
        }
    };

    match dom.parent(doc, container) {
        Some(parent) if dom.children(doc, parent).len() > 1 => parent,
        _ => container,
    }
}
