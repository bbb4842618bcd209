//! A doubly linked list with indexed and value-based access, and a deque over the
//! same node chain that can only be mutated at its ends.
//!
//! ```
//! use linkseq::{Deque, LinkedList};
//!
//! let mut list: LinkedList = LinkedList::new();
//! for i in [1i64, 3, 5] {
//!     list.append(i);
//! }
//! list.insert(1, "two").unwrap();
//! assert_eq!(list.render(), "[1, 'two', 3, 5]");
//!
//! let mut deque: Deque = Deque::new();
//! deque.appendleft(1.5);
//! deque.append("end");
//! assert_eq!(deque.render(), "[1.5, 'end']");
//! ```

mod chain;
pub mod deque;
pub mod error;
pub mod list;
pub mod node;
pub mod render;
pub mod reverse;
pub mod value;

pub use chain::{IntoIter, Iter};
pub use deque::Deque;
pub use error::{Error, Result};
pub use list::LinkedList;
pub use node::{LinkedListNode, Node};
pub use render::Repr;
pub use reverse::{reverse_file, reverse_lines};
pub use value::Value;
