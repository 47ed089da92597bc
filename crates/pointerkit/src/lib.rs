//! # pointerkit: classic two-pointer and hashing puzzles
//!
//! Each module solves one problem with several interchangeable strategies,
//! from a brute-force baseline to the optimized textbook technique:
//!
//! - [`pair_finder`] - two-sum (brute force, hash map, two pointers, binary search)
//! - [`color_sorter`] - sort colors (counting, Dutch national flag)
//! - [`max_area`] - container with most water (brute force, two pointers)
//! - [`unique_substring`] - longest substring without repeats (brute force,
//!   expanding set, sliding window)
//!
//! ## Key Principles
//!
//! - **No IO**: every strategy is a pure function over an in-memory slice
//! - **No surprises**: only the sort-colors strategies mutate their input,
//!   and only the slice they are given
//! - **No panics on empty input**: "no solution" is `None` or a zero result
//!
//! ## Example
//!
//! ```
//! use pointerkit::pair_finder::{self, IndexPair, PairStrategy};
//! use pointerkit::Strategy;
//!
//! for &strategy in PairStrategy::ALL {
//!     let pair = pair_finder::find(&[2, 7, 11, 15], 9, strategy);
//!     assert_eq!(pair, Some(IndexPair::new(0, 1)));
//! }
//! ```

pub mod color_sorter;
pub mod error;
pub mod max_area;
pub mod pair_finder;
pub mod strategy;
pub mod unique_substring;


// Re-export commonly used items
pub use color_sorter::{Color, ColorCounts, ColorPartitioner, ColorStrategy, parse_colors};
pub use error::{Result, ToolkitError};
pub use max_area::{AreaStrategy, Container, ContainerFinder};
pub use pair_finder::{IndexPair, IndexPairFinder, PairStrategy};
pub use strategy::{Complexity, Strategy, parse_sequence};
pub use unique_substring::{SubstringSpan, SubstringStrategy, UniqueRunFinder};
