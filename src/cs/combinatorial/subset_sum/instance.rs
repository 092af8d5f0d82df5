//! Subset-sum problem instances.
//!
//! An [`Instance`] is a non-empty multiset of strictly positive integers together with
//! a target sum. Whatever the source (random generation, a problem file, or values
//! already in memory), the values are stored sorted in descending order, which lets the
//! search detect overshooting prefixes early.
//!
//! # Problem file format
//!
//! Whitespace-delimited integer tokens: the number of values, the target, then the values.
//!
//! ```text
//! 3
//! 6
//! 1 3 2
//! ```
//!
//! # Example
//!
//! ```
//! use subset_sum::Instance;
//!
//! let instance: Instance = "3 6 1 3 2".parse().unwrap();
//! assert_eq!(instance.values(), &[3, 2, 1]);
//! assert_eq!(instance.target(), 6);
//! assert_eq!(instance.total_sum(), 6);
//! ```

use crate::cs::error::{Error, Result};
use log::debug;
use rand::Rng;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;
use std::str::FromStr;

/// A validated subset-sum instance: values sorted descending and a target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    values: Vec<i64>,
    target: i64,
}

impl Instance {
    /// Builds an instance from in-memory values.
    ///
    /// The values are sorted in descending order. The target may be any integer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if `values` is empty, contains a non-positive
    /// entry, or sums beyond `i64::MAX`.
    pub fn new(values: Vec<i64>, target: i64) -> Result<Self> {
        Self::validated(values, target).map_err(Error::InvalidInput)
    }

    fn validated(mut values: Vec<i64>, target: i64) -> std::result::Result<Self, String> {
        if values.is_empty() {
            return Err("instance must contain at least one value".to_string());
        }
        if let Some(&value) = values.iter().find(|&&v| v <= 0) {
            return Err(format!("values must be strictly positive, found {value}"));
        }
        if values
            .iter()
            .try_fold(0i64, |acc, &v| acc.checked_add(v))
            .is_none()
        {
            return Err("sum of values overflows".to_string());
        }

        values.sort_unstable_by(|a, b| b.cmp(a));
        Ok(Self { values, target })
    }

    /// Generates a random instance of size `n` using the thread-local generator.
    ///
    /// See [`Instance::from_size_with_rng`].
    pub fn from_size(n: i64) -> Result<Self> {
        Self::from_size_with_rng(n, &mut rand::thread_rng())
    }

    /// Generates a random instance of size `n`.
    ///
    /// The values are `1, 2, ..., n`. The target starts at 1 and each value from 2 to
    /// `n` is added to it with probability one half, so the instance always has at
    /// least one solution.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] when `n <= 0` or `n <= 2`, or when the values
    /// would not fit in memory or their sum would overflow.
    pub fn from_size_with_rng<R: Rng + ?Sized>(n: i64, rng: &mut R) -> Result<Self> {
        if n <= 0 {
            return Err(Error::InvalidInput(
                "size cannot be nonpositive".to_string(),
            ));
        }
        if n <= 2 {
            return Err(Error::InvalidInput("size is too small".to_string()));
        }
        if n.checked_add(1).and_then(|m| n.checked_mul(m)).is_none() {
            return Err(Error::InvalidInput(format!("size {n} is too large")));
        }
        let len = usize::try_from(n)
            .map_err(|_| Error::InvalidInput(format!("size {n} is too large")))?;

        let mut values = Vec::with_capacity(len);
        values.push(1);
        let mut target = 1;
        for value in 2..=n {
            values.push(value);
            if rng.gen_bool(0.5) {
                target += value;
            }
        }
        // generated ascending
        values.reverse();

        debug!("generated random instance of size {n} with target {target}");
        Ok(Self { values, target })
    }

    /// Loads an instance from a problem file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] if the path does not exist or the content is malformed
    /// (including content that is not UTF-8), and [`Error::Io`] if the file exists but
    /// cannot be read.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::Parse(format!(
                "given path/file does not exist: {}",
                path.display()
            )));
        }
        let contents = fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::InvalidData => {
                Error::Parse(format!("{} is not valid UTF-8 text", path.display()))
            }
            _ => Error::Io(e),
        })?;
        let instance: Self = contents.parse()?;
        debug!(
            "loaded instance of size {} from {}",
            instance.size(),
            path.display()
        );
        Ok(instance)
    }

    /// The values, sorted in descending order.
    pub fn values(&self) -> &[i64] {
        &self.values
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    /// Number of values.
    pub fn size(&self) -> usize {
        self.values.len()
    }

    /// The value at `index` in descending order, if any.
    pub fn get(&self, index: usize) -> Option<i64> {
        self.values.get(index).copied()
    }

    /// Sum of all values, recomputed on every call.
    pub fn total_sum(&self) -> i64 {
        self.values.iter().sum()
    }

    /// Human readable target, e.g. `Target is 6`.
    pub fn show_target(&self) -> String {
        format!("Target is {}", self.target)
    }

    /// Human readable value list, e.g. `Original set = [3,2,1]`.
    pub fn show_integers(&self) -> String {
        let values: Vec<String> = self.values.iter().map(|v| v.to_string()).collect();
        format!("Original set = [{}]", values.join(","))
    }
}

fn parse_token(token: &str, what: &str) -> Result<i64> {
    token
        .parse()
        .map_err(|_| Error::Parse(format!("invalid {what} token '{token}'")))
}

impl FromStr for Instance {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut tokens = s.split_whitespace();
        let (size, target) = match (tokens.next(), tokens.next()) {
            (Some(size), Some(target)) => (size, target),
            _ => {
                return Err(Error::Parse(
                    "expected at least a size and a target".to_string(),
                ))
            }
        };

        let size = parse_token(size, "size")?;
        if size <= 0 {
            return Err(Error::Parse(format!(
                "size must be positive, found {size}"
            )));
        }
        let size = usize::try_from(size)
            .map_err(|_| Error::Parse(format!("size {size} is too large")))?;
        let target = parse_token(target, "target")?;

        let values = tokens
            .take(size)
            .map(|token| parse_token(token, "value"))
            .collect::<Result<Vec<_>>>()?;
        if values.len() < size {
            return Err(Error::Parse(format!(
                "expected {size} values, found {}",
                values.len()
            )));
        }

        Self::validated(values, target).map_err(Error::Parse)
    }
}

impl fmt::Display for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SSP(n = {}; target = {})", self.values.len(), self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_new_sorts_descending() {
        let instance = Instance::new(vec![2, 5, 1, 4, 3], 5).unwrap();
        assert_eq!(instance.values(), &[5, 4, 3, 2, 1]);
        assert_eq!(instance.size(), 5);
        assert_eq!(instance.get(0), Some(5));
        assert_eq!(instance.get(5), None);
        assert_eq!(instance.total_sum(), 15);
    }

    #[test]
    fn test_new_accepts_any_target() {
        for target in [-3, 0, 1, 100] {
            let instance = Instance::new(vec![1, 2], target).unwrap();
            assert_eq!(instance.target(), target);
        }
    }

    #[test]
    fn test_new_rejects_bad_values() {
        assert!(matches!(Instance::new(vec![], 1), Err(Error::InvalidInput(_))));
        assert!(matches!(Instance::new(vec![1, 0], 1), Err(Error::InvalidInput(_))));
        assert!(matches!(Instance::new(vec![3, -2], 1), Err(Error::InvalidInput(_))));
        assert!(matches!(
            Instance::new(vec![i64::MAX, 1], 1),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_parse_rejects_bad_values() {
        assert!(matches!("2 1 1 0".parse::<Instance>(), Err(Error::Parse(_))));
        assert!(matches!("2 1 3 -2".parse::<Instance>(), Err(Error::Parse(_))));
        let overflow = format!("2 1 {} 1", i64::MAX);
        assert!(matches!(overflow.parse::<Instance>(), Err(Error::Parse(_))));
    }

    #[test]
    fn test_from_size_rejects_small_sizes() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for n in [-5, 0] {
            match Instance::from_size_with_rng(n, &mut rng) {
                Err(Error::InvalidInput(msg)) => assert_eq!(msg, "size cannot be nonpositive"),
                other => panic!("unexpected result {other:?}"),
            }
        }
        for n in [1, 2] {
            match Instance::from_size_with_rng(n, &mut rng) {
                Err(Error::InvalidInput(msg)) => assert_eq!(msg, "size is too small"),
                other => panic!("unexpected result {other:?}"),
            }
        }
        assert!(matches!(
            Instance::from_size_with_rng(i64::MAX, &mut rng),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_from_size_shape() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let instance = Instance::from_size_with_rng(10, &mut rng).unwrap();
        assert_eq!(instance.values(), &[10, 9, 8, 7, 6, 5, 4, 3, 2, 1]);
        // 1 is always part of the target
        assert!(instance.target() >= 1);
        assert!(instance.target() <= instance.total_sum());
    }

    #[test]
    fn test_from_size_is_reproducible() {
        let a = Instance::from_size_with_rng(30, &mut ChaCha8Rng::seed_from_u64(7)).unwrap();
        let b = Instance::from_size_with_rng(30, &mut ChaCha8Rng::seed_from_u64(7)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_parse() {
        let instance: Instance = "3\n6\n3 2 1\n".parse().unwrap();
        assert_eq!(instance.values(), &[3, 2, 1]);
        assert_eq!(instance.target(), 6);

        // trailing tokens are ignored
        let instance: Instance = "2 -1 4 9 100".parse().unwrap();
        assert_eq!(instance.values(), &[9, 4]);
        assert_eq!(instance.target(), -1);
    }

    #[test]
    fn test_parse_errors() {
        for input in ["", "3", "0 5", "-2 5 1", "3 6 1 2", "x 6 1", "1 y 1", "2 3 1 z"] {
            assert!(
                matches!(input.parse::<Instance>(), Err(Error::Parse(_))),
                "input {input:?} should not parse"
            );
        }
    }

    #[test]
    fn test_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Instance::from_file(dir.path().join("missing.txt"));
        assert!(matches!(result, Err(Error::Parse(_))));
    }

    #[test]
    fn test_from_non_utf8_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("binary.txt");
        fs::write(&path, [0xff, 0xfe]).unwrap();
        assert!(matches!(Instance::from_file(&path), Err(Error::Parse(_))));
    }

    #[test]
    fn test_display() {
        let instance = Instance::new(vec![1, 3, 2], 4).unwrap();
        assert_eq!(instance.to_string(), "SSP(n = 3; target = 4)");
        assert_eq!(instance.show_target(), "Target is 4");
        assert_eq!(instance.show_integers(), "Original set = [3,2,1]");
    }
}
