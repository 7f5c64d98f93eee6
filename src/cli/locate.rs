use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;

use crate::dom::{DomService, ScraperDom};
use crate::locate::{locate_element, LocateOutcome, DEFAULT_DESCENT_DEPTH};

use super::resolve_path;

/// Element id assumed when the invocation does not name one.
pub const DEFAULT_ELEMENT_ID: &str = "make-everything-ok-button";

/// Finds the element carrying the given id in the original document and
/// reports where its counterpart lives in the updated document.
///
/// The result is a single informational line: either a root-to-element
/// path, or a notice that the id or a matching container could not be
/// found. Both misses are expected outcomes, not errors.
#[derive(Debug, Parser)]
pub struct LocateCommand {
    /// Path to the original HTML document.
    pub original: PathBuf,

    /// Path to the updated HTML document to search.
    pub updated: PathBuf,

    /// id attribute of the element to re-locate.
    #[clap(default_value = DEFAULT_ELEMENT_ID)]
    pub element_id: String,

    /// How many levels of children below each matched container to collect
    /// as candidates.
    #[clap(long, default_value_t = DEFAULT_DESCENT_DEPTH)]
    pub depth: usize,
}

impl LocateCommand {
    pub fn run(self) -> anyhow::Result<()> {
        let original_markup = read_document(&self.original)?;
        let updated_markup = read_document(&self.updated)?;

        let dom = ScraperDom;
        log::trace!("Parsing {}", self.original.display());
        let original = dom.parse_document(&original_markup);
        log::trace!("Parsing {}", self.updated.display());
        let updated = dom.parse_document(&updated_markup);

        match locate_element(&dom, &original, &updated, &self.element_id, self.depth)? {
            LocateOutcome::Located { path, matches } => {
                log::debug!("Best candidate matched {} attribute(s)", matches);
                log::info!("Path to element: {}", path);
            }
            LocateOutcome::IdNotFound => {
                log::info!("element with id={} not found", self.element_id);
            }
            LocateOutcome::NoContainerMatch => {
                log::info!("no container match found in new document");
            }
            LocateOutcome::NoAttributeMatch => {
                log::info!("no attribute match among candidate elements");
            }
        }

        Ok(())
    }
}

fn read_document(path: &Path) -> anyhow::Result<String> {
    let path = resolve_path(path);
    fs_err::read_to_string(path.as_ref())
        .with_context(|| format!("Failed to read {}", path.display()))
}
