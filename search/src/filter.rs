//! Relevance ranking: term scoring plus ancestor closure over the tree.

use crate::config::{CaseMatching, SearchConfig};
use nucleo::pattern::{AtomKind, CaseMatching as NucleoCaseMatching, Normalization, Pattern};
use nucleo::{Matcher, Utf32Str};
use std::collections::HashMap;
use zapper_core::tree::{NodeId, TopicTree};

pub(crate) fn build_pattern(term: &str, config: &SearchConfig) -> Pattern {
    let case_matching = match config.case_matching {
        CaseMatching::Sensitive => NucleoCaseMatching::Respect,
        CaseMatching::Insensitive => NucleoCaseMatching::Ignore,
        CaseMatching::Smart => NucleoCaseMatching::Smart,
    };

    let normalization = if config.unicode_normalization {
        Normalization::Smart
    } else {
        Normalization::Never
    };

    Pattern::new(term, case_matching, normalization, AtomKind::Fuzzy)
}

/// Scores every indexed term against `pattern` and closes the matched set
/// over ancestors: each matched leaf propagates its score upward, an
/// ancestor keeping the highest score seen. Non-matching candidates are
/// omitted, so an empty map means nothing matched.
pub(crate) fn rank(
    tree: &TopicTree,
    pattern: &Pattern,
    matcher: &mut Matcher,
) -> HashMap<NodeId, u32> {
    let mut relevance = HashMap::new();
    let mut buf = Vec::new();

    for (term, leaf) in tree.terms() {
        let Some(score) = pattern.score(Utf32Str::new(term, &mut buf), matcher) else {
            continue;
        };

        raise(&mut relevance, leaf, score);
        for ancestor in tree.ancestors(leaf) {
            raise(&mut relevance, ancestor, score);
        }
    }

    relevance
}

fn raise(relevance: &mut HashMap<NodeId, u32>, id: NodeId, score: u32) {
    let entry = relevance.entry(id).or_insert(score);
    *entry = (*entry).max(score);
}

/// Children of `id` present in the relevance map, best score first; equal
/// scores order by descending name (the filtered view's deliberate
/// asymmetry from the ascending unfiltered sort).
pub(crate) fn filtered_children(
    tree: &TopicTree,
    id: NodeId,
    relevance: &HashMap<NodeId, u32>,
) -> Vec<NodeId> {
    let mut scored: Vec<(NodeId, u32)> = tree
        .sorted_children(id)
        .into_iter()
        .filter_map(|child| relevance.get(&child).map(|&score| (child, score)))
        .collect();

    scored.sort_by(|(a, score_a), (b, score_b)| {
        score_b
            .cmp(score_a)
            .then_with(|| tree.node(*b).name().cmp(tree.node(*a).name()))
    });

    scored.into_iter().map(|(child, _)| child).collect()
}
