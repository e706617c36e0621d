//! Fuzzy-filtered queries over the live topic tree.
//!
//! # Design
//!
//! - One writer stream feeds [`TopicExplorer::update`]; render threads call
//!   [`TopicExplorer::query`]. A single reader/writer lock guards the tree
//!   and its term index, so a query sees all of an update or none of it.
//! - An empty query term returns the whole tree, children sorted ascending
//!   by name.
//! - A non-empty term is scored with Nucleo against every indexed
//!   `path=value` term; matched leaves pull their ancestors into the result
//!   so no match renders without its path context. Children sort by score
//!   descending, equal scores by descending name.

mod config;
mod explorer;
mod filter;
mod results;

pub use config::{CaseMatching, SearchConfig};
pub use explorer::TopicExplorer;
pub use results::TopicRow;

#[cfg(test)]
mod tests;
