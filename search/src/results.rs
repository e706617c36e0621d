//! Query result types.

use serde::Serialize;
use zapper_core::tree::TopicKind;

/// Owned snapshot row handed to renderers.
///
/// Rows are built under the shared lock and own all their data, so a
/// renderer can keep them across frames with no lock held. `full_path` and
/// `value` back per-row actions such as copy-to-clipboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopicRow {
    /// Path segment name.
    pub name: String,
    pub kind: TopicKind,
    /// Sanitized display value; present once the node has received a value.
    pub value: Option<String>,
    /// Full topic path of the last event for this node.
    pub full_path: Option<String>,
    /// Fuzzy match score; absent in the unfiltered view.
    pub score: Option<u32>,
    pub children: Vec<TopicRow>,
}
