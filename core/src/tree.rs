//! Live topic tree: the most recent value at every slash-delimited path,
//! plus the search-term index the fuzzy filter runs against.
//!
//! Nodes live in an arena (`Vec` indexed by [`NodeId`]); parents hold their
//! children through a sorted name map and children point back with a plain
//! id, so there are no ownership cycles and ancestor walks stay cheap.
//! The tree itself does no locking; callers serialize access (see
//! `zapper_search::TopicExplorer`).

use crate::sanitize::sanitize;
use crate::types::TopicEvent;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// Stable handle to a node in the tree arena. Nodes are never removed, so
/// an id stays valid for the lifetime of its tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// Row discriminator for renderers.
///
/// A path may receive its own value and also be a prefix of deeper paths;
/// such a node is `Both` and exposes its value and its children at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TopicKind {
    /// Has received a value and has no children.
    Leaf,
    /// Has children (or is the root) and no value of its own.
    Internal,
    /// Has received a value and has children.
    Both,
}

/// One segment of a hierarchical path.
#[derive(Debug)]
pub struct TopicNode {
    name: String,
    parent: Option<NodeId>,
    children: BTreeMap<String, NodeId>,
    last_event: Option<TopicEvent>,
    display_value: Option<String>,
}

impl TopicNode {
    /// The path segment this node represents; empty for the root.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Cached sanitized rendering of the last payload, if any value has
    /// ever arrived at this exact path.
    pub fn display_value(&self) -> Option<&str> {
        self.display_value.as_deref()
    }

    /// The most recent raw event for this exact path.
    pub fn last_event(&self) -> Option<&TopicEvent> {
        self.last_event.as_ref()
    }

    pub fn kind(&self) -> TopicKind {
        match (self.last_event.is_some(), self.children.is_empty()) {
            (true, true) => TopicKind::Leaf,
            (true, false) => TopicKind::Both,
            (false, _) => TopicKind::Internal,
        }
    }
}

/// The tree plus its search-term index. The index maps every valued node to
/// its current term (`"{path}={display_value}"`) and back; both maps are
/// rewritten in step with every update.
pub struct TopicTree {
    nodes: Vec<TopicNode>,
    terms: HashMap<NodeId, String>,
    nodes_by_term: HashMap<String, NodeId>,
}

impl Default for TopicTree {
    fn default() -> Self {
        Self::new()
    }
}

impl TopicTree {
    pub fn new() -> Self {
        let root = TopicNode {
            name: String::new(),
            parent: None,
            children: BTreeMap::new(),
            last_event: None,
            display_value: None,
        };
        Self {
            nodes: vec![root],
            terms: HashMap::new(),
            nodes_by_term: HashMap::new(),
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn node(&self, id: NodeId) -> &TopicNode {
        &self.nodes[id.0]
    }

    /// Total number of nodes, the root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

/// Write operations.
impl TopicTree {
    /// Applies one event: walks the path from the root, creating missing
    /// nodes lazily, and stores the payload at the terminal node.
    ///
    /// Applying the identical event twice leaves the tree in the same
    /// state as applying it once.
    pub fn update(&mut self, event: TopicEvent) {
        let segments: Vec<String> = event.path().segments().map(str::to_owned).collect();

        let mut current = self.root();
        for name in segments {
            current = self.child_or_insert(current, name);
        }
        self.store_value(current, event);
    }

    fn child_or_insert(&mut self, parent: NodeId, name: String) -> NodeId {
        if let Some(&child) = self.nodes[parent.0].children.get(&name) {
            return child;
        }

        let child = NodeId(self.nodes.len());
        self.nodes.push(TopicNode {
            name: name.clone(),
            parent: Some(parent),
            children: BTreeMap::new(),
            last_event: None,
            display_value: None,
        });
        self.nodes[parent.0].children.insert(name, child);
        child
    }

    fn store_value(&mut self, id: NodeId, event: TopicEvent) {
        // Drop the stale index entry before the value changes. The old term
        // comes from the node->term map, never reconstructed from current
        // state, so removal is exact.
        if let Some(old_term) = self.terms.remove(&id) {
            // Last-write-wins on colliding terms: only clear the inverse
            // entry if it still points at this node.
            if self.nodes_by_term.get(&old_term) == Some(&id) {
                self.nodes_by_term.remove(&old_term);
            }
        }

        let display = sanitize(event.payload());
        let term = format!("{}={}", event.path(), display);

        let node = &mut self.nodes[id.0];
        node.display_value = Some(display);
        node.last_event = Some(event);

        self.terms.insert(id, term.clone());
        self.nodes_by_term.insert(term, id);
    }
}

/// Read operations.
impl TopicTree {
    /// Children of `id` in ascending name order, for the unfiltered view.
    pub fn sorted_children(&self, id: NodeId) -> Vec<NodeId> {
        self.nodes[id.0].children.values().copied().collect()
    }

    /// Ancestors of `id` from the root's first-level child down to the
    /// immediate parent. Empty for the root and its direct children; the
    /// root itself is never included.
    pub fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        let mut chain = Vec::new();
        let mut current = self.nodes[id.0].parent;
        while let Some(parent) = current {
            if parent != self.root() {
                chain.push(parent);
            }
            current = self.nodes[parent.0].parent;
        }
        chain.reverse();
        chain
    }

    /// Snapshot view of the search index: one `(term, node)` pair per
    /// valued node, in unspecified order.
    pub fn terms(&self) -> impl Iterator<Item = (&str, NodeId)> + '_ {
        self.terms.iter().map(|(&id, term)| (term.as_str(), id))
    }

    /// Resolves a search term back to its node. Last writer wins when two
    /// nodes ever produced the same term.
    pub fn node_by_term(&self, term: &str) -> Option<NodeId> {
        self.nodes_by_term.get(term).copied()
    }
}
