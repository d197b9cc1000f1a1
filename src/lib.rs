//! An ordered map based on a red-black tree.
//!
//! [`OrderedMap`](map/struct.OrderedMap.html) keeps its nodes in an arena and rebalances on every
//! insert, so lookups, insertion and neighbor queries run in `O(log n)`. Besides the usual map
//! operations it answers ordered queries (`first`, `last`, `predecessor`, `successor`) and
//! substring searches over keys and values.
//!
//! # Examples
//!
//! ```
//! use rbmap::{OrderedMap, Saying};
//!
//! let mut sayings = OrderedMap::new();
//!
//! sayings.insert("La'i lua ke kai.", Saying::new("The sea is calm.", "All is at peace.")).unwrap();
//! sayings.insert("Ka'a ka pōhaku.", Saying::new("The stone rolls.", "Things are in motion.")).unwrap();
//!
//! assert_eq!(sayings.first(), Some(&"Ka'a ka pōhaku."));
//! assert_eq!(sayings.successor(&"Ka'a ka pōhaku."), Ok(&"La'i lua ke kai."));
//! assert_eq!(sayings.search_values("sea").collect::<Vec<_>>(), [&"La'i lua ke kai."]);
//! ```

#![warn(missing_docs)]

pub use error::{Error, Result};
pub use map::{OrderedMap, Searchable};
pub use saying::{Explanation, Saying};

mod error;
pub mod map;
pub mod saying;

#[cfg(feature = "ordered_iter")]
mod ordered_iter;
