pub mod cli;
pub mod dom;
pub mod locate;
pub mod logging;

pub use dom::{DomError, DomService, ScraperDom};
pub use locate::{
    locate_element, LocateOutcome, PathSegment, ScoredCandidate, SegmentLocation,
    DEFAULT_DESCENT_DEPTH,
};
