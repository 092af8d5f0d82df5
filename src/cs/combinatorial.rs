pub mod subset_sum;

pub use subset_sum::{Instance, SearchConfig, Solution, SolutionSet};
