//! Capability contract between the matching core and whichever library
//! actually parses and queries HTML.
//!
//! The core only ever sees opaque element handles and the operations
//! below, so swapping the parsing library means writing one new adapter,
//! not touching the pipeline.

mod scraper;

use std::collections::BTreeMap;
use std::fmt::Debug;

use thiserror::Error;

pub use self::scraper::ScraperDom;

/// Errors surfaced by a DOM service implementation.
#[derive(Debug, Error)]
pub enum DomError {
    #[error("invalid selector '{selector}': {message}")]
    InvalidSelector { selector: String, message: String },
}

/// The navigable-document capabilities the matching core needs.
///
/// Element handles are only meaningful together with the document they
/// were obtained from; mixing handles across documents is a contract
/// violation an implementation may panic on.
pub trait DomService {
    /// A parsed document tree.
    type Document;

    /// Opaque handle to an element node.
    type Element: Copy + Eq + Debug;

    /// Parses markup into a document. Parsing is error-recovering the way
    /// browsers are; malformed input yields a best-effort tree.
    fn parse_document(&self, markup: &str) -> Self::Document;

    /// The first element whose `id` attribute equals `id`, if any.
    fn find_by_id(&self, doc: &Self::Document, id: &str) -> Option<Self::Element>;

    /// Evaluates a CSS selector against the document, in document order.
    fn query(&self, doc: &Self::Document, selector: &str)
        -> Result<Vec<Self::Element>, DomError>;

    /// Element children, in document order. Text and comment nodes are not
    /// visible through this contract.
    fn children(&self, doc: &Self::Document, element: Self::Element) -> Vec<Self::Element>;

    /// Parent element, or `None` when `element` is the document's root
    /// element.
    fn parent(&self, doc: &Self::Document, element: Self::Element) -> Option<Self::Element>;

    /// Zero-based index of `element` among its parent's element children.
    /// The root element's index is 0.
    fn sibling_index(&self, doc: &Self::Document, element: Self::Element) -> usize;

    /// Lowercased tag name.
    fn tag_name(&self, doc: &Self::Document, element: Self::Element) -> String;

    /// The element's attributes, keyed by attribute name.
    fn attributes(&self, doc: &Self::Document, element: Self::Element)
        -> BTreeMap<String, String>;

    /// A selector string uniquely addressing the element from the document
    /// root. Structurally equivalent elements in two documents yield the
    /// same string, which is what lets a container found in one document
    /// be re-queried in another.
    fn canonical_selector(&self, doc: &Self::Document, element: Self::Element) -> String;
}
