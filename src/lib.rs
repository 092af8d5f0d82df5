pub mod cs;
pub mod driver;

pub use cs::combinatorial::subset_sum::{
    Instance, SearchConfig, Solution, SolutionSet, DISPLAY_LIMIT, MAX_SOLUTIONS,
};
pub use cs::error::{Error, Result};
