// File: ./src/surface.rs
//! The rendering collaborator: a list container that fragments are appended to.
//!
//! The disclosure logic only ever talks to [`ListSurface`], so it runs the same
//! against a browser DOM binding or the in-memory [`HtmlList`] used for page
//! snapshots and tests.

/// One top-level node of a list container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub class: &'static str,
    pub html: String,
}

impl Fragment {
    pub fn new(class: &'static str, html: String) -> Self {
        Self { class, html }
    }
}

pub trait ListSurface {
    /// Append a batch of nodes after the current last node.
    fn append(&mut self, fragments: Vec<Fragment>);
    /// Drop everything in the container and put `fragment` in its place.
    fn replace_content(&mut self, fragment: Fragment);
    /// Remove the last node. No-op on an empty container.
    fn remove_last(&mut self);
    /// Class of the last node, if any.
    fn peek_last_class(&self) -> Option<&str>;
}

/// In-memory list container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlList {
    nodes: Vec<Fragment>,
}

impl HtmlList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nodes(&self) -> &[Fragment] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of nodes carrying `class`.
    pub fn count_class(&self, class: &str) -> usize {
        self.nodes.iter().filter(|n| n.class == class).count()
    }

    /// Concatenated markup of all nodes, in order.
    pub fn inner_html(&self) -> String {
        self.nodes
            .iter()
            .map(|n| n.html.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl ListSurface for HtmlList {
    fn append(&mut self, fragments: Vec<Fragment>) {
        self.nodes.extend(fragments);
    }

    fn replace_content(&mut self, fragment: Fragment) {
        self.nodes.clear();
        self.nodes.push(fragment);
    }

    fn remove_last(&mut self) {
        self.nodes.pop();
    }

    fn peek_last_class(&self) -> Option<&str> {
        self.nodes.last().map(|n| n.class)
    }
}
