//! `DomService` adapter over the `scraper` crate (html5ever parsing plus
//! CSS selector evaluation).

use std::collections::{BTreeMap, HashSet};

use ego_tree::{NodeId, NodeRef};
use scraper::node::Element;
use scraper::{Html, Node, Selector};

use super::{DomError, DomService};

/// DOM service backed by `scraper`. Stateless; element handles are node
/// ids into the `Html` tree they came from.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScraperDom;

impl ScraperDom {
    fn node<'a>(&self, doc: &'a Html, id: NodeId) -> NodeRef<'a, Node> {
        doc.tree
            .get(id)
            .expect("element handle did not belong to this document")
    }

    fn element<'a>(&self, doc: &'a Html, id: NodeId) -> &'a Element {
        self.node(doc, id)
            .value()
            .as_element()
            .expect("element handle referred to a non-element node")
    }
}

impl DomService for ScraperDom {
    type Document = Html;
    type Element = NodeId;

    fn parse_document(&self, markup: &str) -> Html {
        Html::parse_document(markup)
    }

    fn find_by_id(&self, doc: &Html, id: &str) -> Option<Self::Element> {
        doc.root_element()
            .descendants()
            .find(|node| {
                node.value()
                    .as_element()
                    .and_then(|element| element.id())
                    == Some(id)
            })
            .map(|node| node.id())
    }

    fn query(&self, doc: &Html, selector: &str) -> Result<Vec<Self::Element>, DomError> {
        let parsed = Selector::parse(selector).map_err(|err| DomError::InvalidSelector {
            selector: selector.to_owned(),
            message: err.to_string(),
        })?;
        Ok(doc.select(&parsed).map(|element| element.id()).collect())
    }

    fn children(&self, doc: &Html, element: Self::Element) -> Vec<Self::Element> {
        self.node(doc, element)
            .children()
            .filter(|node| node.value().is_element())
            .map(|node| node.id())
            .collect()
    }

    fn parent(&self, doc: &Html, element: Self::Element) -> Option<Self::Element> {
        self.node(doc, element)
            .parent()
            .filter(|node| node.value().is_element())
            .map(|node| node.id())
    }

    fn sibling_index(&self, doc: &Html, element: Self::Element) -> usize {
        self.node(doc, element)
            .prev_siblings()
            .filter(|node| node.value().is_element())
            .count()
    }

    fn tag_name(&self, doc: &Html, element: Self::Element) -> String {
        self.element(doc, element).name().to_owned()
    }

    fn attributes(&self, doc: &Html, element: Self::Element) -> BTreeMap<String, String> {
        self.element(doc, element)
            .attrs()
            .map(|(name, value)| (name.to_owned(), value.to_owned()))
            .collect()
    }

    fn canonical_selector(&self, doc: &Html, element: Self::Element) -> String {
        let mut segments = Vec::new();
        let mut current = self.node(doc, element);

        loop {
            let value = current
                .value()
                .as_element()
                .expect("element handle referred to a non-element node");

            // An id addresses the element on its own.
            if let Some(id) = value.id().filter(|id| !id.is_empty()) {
                segments.push(format!("#{}", id));
                break;
            }

            let mut segment = value.name().to_owned();
            for class in value.classes() {
                segment.push('.');
                segment.push_str(class);
            }

            match current.parent().filter(|node| node.value().is_element()) {
                Some(parent) => {
                    if tag_and_classes_are_ambiguous(parent, value) {
                        let index = current
                            .prev_siblings()
                            .filter(|node| node.value().is_element())
                            .count();
                        segment.push_str(&format!(":nth-child({})", index + 1));
                    }
                    segments.push(segment);
                    current = parent;
                }
                None => {
                    segments.push(segment);
                    break;
                }
            }
        }

        segments.reverse();
        segments.join(" > ")
    }
}

/// Whether `tag.class1.class2` alone would match more than one of the
/// parent's element children, forcing an `:nth-child` disambiguator.
fn tag_and_classes_are_ambiguous(parent: NodeRef<'_, Node>, element: &Element) -> bool {
    let classes: HashSet<&str> = element.classes().collect();
    let matching = parent
        .children()
        .filter_map(|node| node.value().as_element())
        .filter(|sibling| {
            sibling.name() == element.name()
                && classes
                    .iter()
                    .all(|class| sibling.classes().any(|c| c == *class))
        })
        .count();
    matching > 1
}
