//! Tree and graph search configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for one run of the generic search loop.
///
/// # Examples
///
/// ```
/// use u_search::tree::SearchConfig;
///
/// let config = SearchConfig::default()
///     .with_graph_search(true)
///     .with_depth_limit(12);
/// assert_eq!(config.depth_limit, Some(12));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchConfig {
    /// Skip children whose state was already generated during this run.
    ///
    /// Avoids re-exploring repeated states and makes cyclic spaces finite.
    /// States are recorded when first generated, so on graphs where a
    /// cheaper path to a state is found later, cost-ordered searches may
    /// return a costlier solution than in tree mode.
    pub graph_search: bool,

    /// Nodes at this depth or deeper are goal-tested but not expanded.
    ///
    /// `None` disables the limit.
    pub depth_limit: Option<usize>,
}

impl SearchConfig {
    pub fn with_graph_search(mut self, graph_search: bool) -> Self {
        self.graph_search = graph_search;
        self
    }

    pub fn with_depth_limit(mut self, limit: usize) -> Self {
        self.depth_limit = Some(limit);
        self
    }
}

/// Configuration for iterative deepening.
///
/// With no `max_depth`, the driver keeps deepening until a goal is found;
/// in an infinite space with no reachable goal it never returns. Set
/// `max_depth` to bound it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IterativeConfig {
    /// Passed through to every depth-limited run.
    pub graph_search: bool,

    /// Deepest limit tried before giving up. `None` = unbounded.
    pub max_depth: Option<usize>,
}

impl IterativeConfig {
    pub fn with_graph_search(mut self, graph_search: bool) -> Self {
        self.graph_search = graph_search;
        self
    }

    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }
}
