// src/core/tree.rs
//! Flat arena copy of the parsed document.
//!
//! `scraper` does the HTML5 parsing; we copy its tree into a `Vec` of nodes linked by
//! `NodeId` handles. Links only ever point at nodes appended earlier or later through
//! `append`, so a sibling chain cannot loop back on itself.

use scraper::{Html, Node as HtmlNode};

use super::decode::widen_bytes;

/// Handle to a node in the `DocumentTree` that minted it. Handles from another tree are
/// meaningless there and may point past its end.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeKind {
    Document,
    Element {
        name: String,
        attrs: Vec<(String, String)>,
    },
    /// Widened text, still in the legacy code page. See `core::decode`.
    Text(String),
    /// Comments, doctypes, processing instructions.
    Other,
}

#[derive(Clone, Debug)]
pub struct Node {
    pub kind: NodeKind,
    pub parent: Option<NodeId>,
    pub first_child: Option<NodeId>,
    pub next_sibling: Option<NodeId>,
    last_child: Option<NodeId>,
}

impl Node {
    pub fn tag(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Element { name, .. } => Some(name),
            _ => None,
        }
    }

    pub fn is_tag(&self, tag: &str) -> bool {
        self.tag() == Some(tag)
    }

    /// Attribute value by key. Position in the attribute list doesn't matter.
    pub fn attr(&self, key: &str) -> Option<&str> {
        match &self.kind {
            NodeKind::Element { attrs, .. } => attrs
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str()),
            _ => None,
        }
    }

    pub fn has_attr(&self, key: &str) -> bool {
        self.attr(key).is_some()
    }

    pub fn text(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Text(t) => Some(t),
            _ => None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct DocumentTree {
    nodes: Vec<Node>,
}

impl Default for DocumentTree {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentTree {
    /// Empty tree holding only the document root.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                kind: NodeKind::Document,
                parent: None,
                first_child: None,
                next_sibling: None,
                last_child: None,
            }],
        }
    }

    /// Parse raw report bytes (any single-byte code page) into a tree.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let html = Html::parse_document(&widen_bytes(bytes));
        Self::from_html(&html)
    }

    pub fn from_html(html: &Html) -> Self {
        let mut tree = Self::new();
        let root = tree.root();

        // (scraper node, parent in our arena); children pushed reversed so they pop in order
        let mut stack: Vec<_> = html.tree.root().children().rev().map(|c| (c, root)).collect();

        while let Some((src, parent)) = stack.pop() {
            let kind = match src.value() {
                HtmlNode::Element(el) => NodeKind::Element {
                    name: el.name().to_string(),
                    attrs: el
                        .attrs()
                        .map(|(k, v)| (k.to_string(), v.to_string()))
                        .collect(),
                },
                HtmlNode::Text(t) => {
                    let text: &str = t;
                    NodeKind::Text(text.to_string())
                }
                HtmlNode::Document | HtmlNode::Fragment => NodeKind::Document,
                _ => NodeKind::Other,
            };
            let id = tree.append(parent, kind);
            stack.extend(src.children().rev().map(|c| (c, id)));
        }
        tree
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// # Panics
    /// If `id` came from a larger tree. Use [`DocumentTree::try_get`] for foreign handles.
    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn try_get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Add `kind` as the last child of `parent`.
    pub fn append(&mut self, parent: NodeId, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            kind,
            parent: Some(parent),
            first_child: None,
            next_sibling: None,
            last_child: None,
        });

        match self.nodes[parent.0].last_child {
            Some(prev) => self.nodes[prev.0].next_sibling = Some(id),
            None => self.nodes[parent.0].first_child = Some(id),
        }
        self.nodes[parent.0].last_child = Some(id);
        id
    }

    pub fn append_element(&mut self, parent: NodeId, name: &str, attrs: &[(&str, &str)]) -> NodeId {
        let attrs = attrs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        self.append(parent, NodeKind::Element { name: name.to_string(), attrs })
    }

    pub fn append_text(&mut self, parent: NodeId, text: &str) -> NodeId {
        self.append(parent, NodeKind::Text(text.to_string()))
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).parent
    }

    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).first_child
    }

    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).next_sibling
    }

    pub fn children(&self, id: NodeId) -> Children<'_> {
        Children { tree: self, next: self.first_child(id) }
    }

    /// All text below `id` concatenated in document order, still widened.
    pub fn raw_text(&self, id: NodeId) -> String {
        let mut out = String::new();
        let mut stack = vec![id];
        while let Some(n) = stack.pop() {
            if let Some(t) = self.get(n).text() {
                out.push_str(t);
            }
            let kids: Vec<NodeId> = self.children(n).collect();
            stack.extend(kids.into_iter().rev());
        }
        out
    }
}

pub struct Children<'a> {
    tree: &'a DocumentTree,
    next: Option<NodeId>,
}

impl Iterator for Children<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let cur = self.next?;
        self.next = self.tree.next_sibling(cur);
        Some(cur)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parsed_links_follow_document_order() {
        let tree = DocumentTree::from_bytes(b"<body><p>a</p><div>b</div><h2>c</h2></body>");
        let body = (0..tree.len())
            .map(NodeId)
            .find(|&id| tree.get(id).is_tag("body"))
            .unwrap();

        let tags: Vec<_> = tree
            .children(body)
            .filter_map(|c| tree.get(c).tag().map(str::to_string))
            .collect();
        assert_eq!(tags, ["p", "div", "h2"]);

        for c in tree.children(body) {
            assert_eq!(tree.parent(c), Some(body));
        }
    }

    #[test]
    fn raw_text_concatenates_descendants() {
        let mut tree = DocumentTree::new();
        let td = tree.append_element(tree.root(), "td", &[]);
        tree.append_text(td, "12");
        let b = tree.append_element(td, "b", &[]);
        tree.append_text(b, ",5");
        assert_eq!(tree.raw_text(td), "12,5");
    }

    #[test]
    fn foreign_handles_are_caught_by_try_get() {
        let mut big = DocumentTree::new();
        let deep = big.append_element(big.root(), "p", &[]);
        let small = DocumentTree::new();
        assert!(small.try_get(deep).is_none());
        assert!(small.try_get(small.root()).is_some());
    }

    #[test]
    #[should_panic]
    fn foreign_handle_panics_on_get() {
        let mut big = DocumentTree::new();
        let deep = big.append_element(big.root(), "p", &[]);
        DocumentTree::new().get(deep);
    }

    #[test]
    fn attr_lookup_ignores_position() {
        let mut tree = DocumentTree::new();
        let t = tree.append_element(
            tree.root(),
            "table",
            &[("border", "1"), ("cellpadding", "4")],
        );
        assert_eq!(tree.get(t).attr("cellpadding"), Some("4"));
        assert!(!tree.get(t).has_attr("class"));

        let bare = tree.append_element(tree.root(), "table", &[]);
        assert_eq!(tree.get(bare).attr("cellpadding"), None);
    }
}
