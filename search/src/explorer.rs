use crate::config::SearchConfig;
use crate::filter;
use crate::results::TopicRow;
use nucleo::{Config as NucleoConfig, Matcher};
use std::collections::HashMap;
use std::sync::{Mutex, RwLock};
use zapper_core::tree::{NodeId, TopicTree};
use zapper_core::types::TopicEvent;

/// Query facade over the live topic tree.
///
/// The tree and its term index sit behind one reader/writer lock:
/// [`update`](Self::update) takes it exclusively for the whole mutation,
/// [`query`](Self::query) shares it while snapshotting rows. The Nucleo
/// matcher keeps scoring state and needs `&mut`, so it lives behind its own
/// mutex; it is only ever taken on the query path, never while writing.
pub struct TopicExplorer {
    tree: RwLock<TopicTree>,
    matcher: Mutex<Matcher>,
    config: SearchConfig,
}

impl Default for TopicExplorer {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl TopicExplorer {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            tree: RwLock::new(TopicTree::new()),
            matcher: Mutex::new(Matcher::new(NucleoConfig::DEFAULT)),
            config,
        }
    }
}

/// Write path.
impl TopicExplorer {
    /// Applies one event under the exclusive lock. Concurrent producers
    /// serialize here; a query sees the whole update or none of it.
    pub fn update(&self, event: TopicEvent) {
        self.tree.write().unwrap().update(event);
    }
}

/// Query path.
impl TopicExplorer {
    /// Current view of the tree, rooted at the root's children.
    ///
    /// An empty `term` yields the full tree in ascending name order with no
    /// scores. A non-empty `term` yields the relevance-ranked subtree of
    /// matches and their ancestors; no matches yields an empty vec.
    pub fn query(&self, term: &str) -> Vec<TopicRow> {
        let tree = self.tree.read().unwrap();

        if term.is_empty() {
            return tree
                .sorted_children(tree.root())
                .into_iter()
                .map(|child| unfiltered_row(&tree, child))
                .collect();
        }

        let pattern = filter::build_pattern(term, &self.config);
        let relevance = {
            let mut matcher = self.matcher.lock().unwrap();
            filter::rank(&tree, &pattern, &mut matcher)
        };

        filter::filtered_children(&tree, tree.root(), &relevance)
            .into_iter()
            .map(|child| filtered_row(&tree, child, &relevance))
            .collect()
    }
}

fn unfiltered_row(tree: &TopicTree, id: NodeId) -> TopicRow {
    let node = tree.node(id);
    TopicRow {
        name: node.name().to_string(),
        kind: node.kind(),
        value: node.display_value().map(str::to_owned),
        full_path: node.last_event().map(|event| event.path().to_string()),
        score: None,
        children: tree
            .sorted_children(id)
            .into_iter()
            .map(|child| unfiltered_row(tree, child))
            .collect(),
    }
}

fn filtered_row(tree: &TopicTree, id: NodeId, relevance: &HashMap<NodeId, u32>) -> TopicRow {
    let node = tree.node(id);
    TopicRow {
        name: node.name().to_string(),
        kind: node.kind(),
        value: node.display_value().map(str::to_owned),
        full_path: node.last_event().map(|event| event.path().to_string()),
        score: relevance.get(&id).copied(),
        children: filter::filtered_children(tree, id, relevance)
            .into_iter()
            .map(|child| filtered_row(tree, child, relevance))
            .collect(),
    }
}
