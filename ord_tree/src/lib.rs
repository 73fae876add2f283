#![no_std]
// all links between nodes are arena indexes, there is no need for unsafe code
#![deny(unsafe_code)]

//! An ordered map backed by a plain (unbalanced) binary search tree whose
//! nodes are stored on an arena and linked to their parents.
//!
//! The order of keys comes from a [Compare] strategy and, optionally, keys
//! can be derived from values with a [KeyOf] strategy. Traversals in all three
//! depth first orders hand every pair to a [Visitor].
//!
//! ```
//! use ord_tree::{OrdTree, ReverseOrder};
//!
//! let mut tree = OrdTree::with_comparator(ReverseOrder);
//! for (k, v) in [(2u8, 'b'), (3, 'c'), (1, 'a')] {
//!     tree.insert(k, v);
//! }
//! assert_eq!(tree.keys().copied().collect::<Vec<_>>(), [3, 2, 1]);
//!
//! let mut post = vec![];
//! tree.post_order(&mut |k: &u8, _: &char| post.push(*k));
//! assert_eq!(post, [3, 1, 2]);
//! ```

extern crate alloc;

mod arena;
mod builder;
mod error;
pub mod iterators;
mod node;
mod traits;
mod tree;

pub use arena::NodeArena;
pub use builder::{BoxedCompare, BoxedKeyOf, OrdTreeBuilder};
pub use error::TreeError;
pub use node::Node;
pub use traits::{Compare, KeyOf, NaturalOrder, NoKeyOf, ReverseOrder, Visitor};
pub use tree::OrdTree;
