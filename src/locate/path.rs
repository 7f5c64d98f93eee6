//! Renders the location of an element as a root-to-leaf path.

use std::fmt;

use crate::dom::DomService;

/// How a path segment addresses its element: ancestors by element sibling
/// index, the matched element itself by its full canonical selector. The
/// mixed addressing is part of the output format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentLocation {
    Selector(String),
    ChildIndex(usize),
}

/// One step of the rendered path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSegment {
    pub tag: String,
    pub location: SegmentLocation,
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.location {
            SegmentLocation::Selector(selector) => write!(f, "{}:{}", self.tag, selector),
            SegmentLocation::ChildIndex(index) => write!(f, "{}:{}", self.tag, index),
        }
    }
}

/// Builds the segment sequence for `element`, root-most ancestor first.
/// The walk covers element ancestors only, so it stops below the
/// document root; the leaf is always the single selector-based segment.
pub fn element_path<D: DomService>(
    dom: &D,
    doc: &D::Document,
    element: D::Element,
) -> Vec<PathSegment> {
    let mut segments = vec![PathSegment {
        tag: dom.tag_name(doc, element),
        location: SegmentLocation::Selector(dom.canonical_selector(doc, element)),
    }];

    let mut current = element;
    while let Some(parent) = dom.parent(doc, current) {
        segments.push(PathSegment {
            tag: dom.tag_name(doc, parent),
            location: SegmentLocation::ChildIndex(dom.sibling_index(doc, parent)),
        });
        current = parent;
    }

    segments.reverse();
    segments
}

/// Joins segments into the final `html:0 -> body:1 -> tag:selector` form.
pub fn render_path(segments: &[PathSegment]) -> String {
    segments
        .iter()
        .map(|segment| segment.to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}
