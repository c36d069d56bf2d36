mod cursor;
mod error;
mod linked_list;
mod node;

pub use cursor::{Cursor, CursorMut, Position};
pub use error::{ListError, Result};
pub use linked_list::{IntoIter, Iter, IterMut, LinkedList};
