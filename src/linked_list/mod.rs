//! A singly linked list with head-only access.
//!
//! Every element lives in its own heap-allocated [`Node`], and each node owns
//! its successor. The [`LinkedList`] owns the head and caches the element count,
//! so `len` is O(1) while positional access walks the chain from the front.
//!
//! Indices are accepted through the [`ListIndex`] trait. Every primitive integer
//! type is a valid index; floating point values are rejected at runtime with
//! [`ListError::InvalidIndexType`].
//!
//! # Examples
//!
//! ```
//! use mola_linked_list::linked_list::{LinkedList, ListError};
//!
//! let mut list = LinkedList::from_sequence([1, 2, 3], false);
//! assert_eq!(list.len(), 3);
//! assert_eq!(list.first(), Ok(&1));
//! assert_eq!(list.last(), Ok(&3));
//!
//! list.insert(1, 99).unwrap();
//! assert_eq!(list.to_string(), "1, 99, 2, 3");
//!
//! list.reverse();
//! assert_eq!(list.pop_front(), Ok(3));
//! assert_eq!(list.pop_back(), Ok(1));
//!
//! assert!(matches!(list.get(2.5), Err(ListError::InvalidIndexType { .. })));
//!
//! let reversed = LinkedList::from_sequence(["a", "b", "c"], true);
//! assert_eq!(reversed.to_string(), "c, b, a");
//! ```
//!
//! Sources are taken as [`IntoIterator`], so a value that cannot be traversed
//! is rejected at compile time:
//!
//! ```compile_fail
//! use mola_linked_list::linked_list::LinkedList;
//!
//! let list = LinkedList::from_sequence(5, false);
//! ```

mod error;
mod index;
mod iter;
mod list;
mod node;

pub use error::{ListError, ListResult};
pub use index::ListIndex;
pub use iter::{IntoIter, Iter, IterMut};
pub use list::LinkedList;
pub use node::Node;

#[cfg(test)]
mod tests;
