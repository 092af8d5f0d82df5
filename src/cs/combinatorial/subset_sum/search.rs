//! Branch-and-prune enumeration of subset-sum solutions.
//!
//! The search walks the binary decision tree over the (descending) values, deciding
//! for each index whether it is excluded or included, excluded first. A branch is cut
//! as soon as its partial sum plus everything still undecided falls short of the
//! target, or its partial sum already exceeds it. A branch whose partial sum equals
//! the target is recorded immediately, without deciding the remaining indices.
//!
//! The traversal uses an explicit stack instead of recursion, so deep instances
//! cannot overflow the call stack. The inclusion vector is owned by the search and
//! `Mark`/`Unmark` frames carry the index needed to set and restore it.

use super::{Instance, SearchConfig};
use bitvec::prelude::*;
use log::{debug, warn};
use std::fmt;
use std::slice;

/// One subset summing to the target.
///
/// Subsets are identified by position, so equal values at different indices give
/// distinct solutions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    indices: Vec<usize>,
    values: Vec<i64>,
}

impl Solution {
    /// Indices into [`Instance::values`], increasing.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// The chosen values, in index order.
    pub fn values(&self) -> &[i64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn sum(&self) -> i64 {
        self.values.iter().sum()
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "]")
    }
}

/// All solutions found by one search, in enumeration order, up to a cap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionSet {
    solutions: Vec<Solution>,
    cap: usize,
    truncated: bool,
}

impl SolutionSet {
    fn with_cap(cap: usize) -> Self {
        Self {
            solutions: Vec::new(),
            cap,
            truncated: false,
        }
    }

    /// Records the values marked in `included`, unless the cap is reached.
    fn record(&mut self, values: &[i64], included: &BitSlice) {
        if self.solutions.len() >= self.cap {
            if !self.truncated {
                warn!(
                    "solution cap of {} reached, further solutions are discarded",
                    self.cap
                );
                self.truncated = true;
            }
            return;
        }
        let indices: Vec<usize> = included.iter_ones().collect();
        let values = indices.iter().map(|&i| values[i]).collect();
        self.solutions.push(Solution { indices, values });
    }

    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Solution> {
        self.solutions.iter()
    }

    pub fn as_slice(&self) -> &[Solution] {
        &self.solutions
    }

    /// Maximum number of solutions this set retains.
    pub fn cap(&self) -> usize {
        self.cap
    }

    /// True if at least one solution was found after the cap was reached.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }
}

impl<'a> IntoIterator for &'a SolutionSet {
    type Item = &'a Solution;
    type IntoIter = slice::Iter<'a, Solution>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for SolutionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, solution) in self.solutions.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{solution}")?;
        }
        write!(f, "]")
    }
}

enum Frame {
    Visit {
        index: usize,
        partial: i64,
        remaining: i64,
    },
    Mark(usize),
    Unmark(usize),
}

impl Instance {
    /// Enumerates every subset summing to the target, keeping at most
    /// [`MAX_SOLUTIONS`](super::MAX_SOLUTIONS) of them.
    ///
    /// # Example
    ///
    /// ```
    /// use subset_sum::Instance;
    ///
    /// let instance = Instance::new(vec![5, 4, 3, 2, 1], 5).unwrap();
    /// let solutions = instance.enumerate();
    /// assert_eq!(solutions.len(), 3);
    /// assert!(solutions.iter().all(|s| s.sum() == 5));
    /// ```
    pub fn enumerate(&self) -> SolutionSet {
        self.enumerate_with(&SearchConfig::default())
    }

    /// Enumerates every subset summing to the target, keeping at most
    /// `config.max_solutions` of them.
    ///
    /// Reaching the cap stops recording but not the traversal.
    pub fn enumerate_with(&self, config: &SearchConfig) -> SolutionSet {
        let values = self.values();
        let target = self.target();
        let n = values.len();
        debug!("enumerating subsets of {n} values summing to {target}");

        let mut included = bitvec![0; n];
        let mut solutions = SolutionSet::with_cap(config.max_solutions);
        let mut stack = vec![Frame::Visit {
            index: 0,
            partial: 0,
            remaining: self.total_sum(),
        }];

        while let Some(frame) = stack.pop() {
            match frame {
                Frame::Mark(index) => included.set(index, true),
                Frame::Unmark(index) => included.set(index, false),
                Frame::Visit {
                    index,
                    partial,
                    remaining,
                } => {
                    if partial + remaining < target || partial > target {
                        continue;
                    }
                    if partial == target {
                        solutions.record(values, &included[..index]);
                        continue;
                    }
                    if index == n {
                        continue;
                    }

                    let value = values[index];
                    let remaining = remaining - value;
                    // Pushed in reverse: exclude subtree, mark, include subtree, unmark.
                    stack.push(Frame::Unmark(index));
                    stack.push(Frame::Visit {
                        index: index + 1,
                        partial: partial + value,
                        remaining,
                    });
                    stack.push(Frame::Mark(index));
                    stack.push(Frame::Visit {
                        index: index + 1,
                        partial,
                        remaining,
                    });
                }
            }
        }

        debug!(
            "found {} solutions{}",
            solutions.len(),
            if solutions.is_truncated() {
                " (truncated)"
            } else {
                ""
            }
        );
        solutions
    }
}
