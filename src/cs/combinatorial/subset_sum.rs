//! Exact subset-sum enumeration.
//!
//! Given a multiset of positive integers and a target, find every subset (by position)
//! whose elements add up to the target. The search is exhaustive backtracking with two
//! bounds, so the worst case is exponential in the number of values.
//!
//! # Examples
//! ```
//! use subset_sum::{Instance, SearchConfig};
//!
//! let instance = Instance::new(vec![3, 3, 2], 3).unwrap();
//! let solutions = instance.enumerate_with(&SearchConfig::default());
//!
//! // the two 3's are different positions, hence two solutions
//! assert_eq!(solutions.len(), 2);
//! ```

pub mod instance;
pub mod search;

pub use instance::Instance;
pub use search::{Solution, SolutionSet};

/// Default cap on the number of solutions kept in memory by one search.
pub const MAX_SOLUTIONS: usize = 10_000_000;

/// Default threshold under which solutions are listed rather than counted.
pub const DISPLAY_LIMIT: usize = 10;

/// Configuration for a search run and its report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Solutions found beyond this many are discarded.
    pub max_solutions: usize,
    /// Reports list solutions literally when fewer than this many were found.
    pub display_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_solutions: MAX_SOLUTIONS,
            display_limit: DISPLAY_LIMIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.max_solutions, MAX_SOLUTIONS);
        assert_eq!(MAX_SOLUTIONS, 10_000_000);
        assert_eq!(config.display_limit, DISPLAY_LIMIT);

        let solutions = Instance::new(vec![2, 1], 3).unwrap().enumerate();
        assert_eq!(solutions.cap(), MAX_SOLUTIONS);
    }
}
