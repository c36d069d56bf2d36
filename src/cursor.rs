use std::fmt;
use std::iter;
use std::ptr;

use log::debug;

use crate::error::{ListError, Result};
use crate::node::{release, Node};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    BeforeBegin,
    Element,
    End,
}

fn position_of<T>(node: Option<&Node<T>>) -> Position {
    match node {
        None => Position::End,
        Some(node) if node.is_sentinel() => Position::BeforeBegin,
        Some(_) => Position::Element,
    }
}

fn misuse(err: ListError) -> ListError {
    debug!("cursor misuse: {}", err);
    err
}

fn value_at<T>(node: Option<&Node<T>>) -> Result<&T> {
    node.ok_or(ListError::DereferenceInvalid)
        .and_then(|node| node.value().map_err(|_| ListError::DereferenceInvalid))
        .map_err(misuse)
}

pub struct Cursor<'a, T> {
    current: Option<&'a Node<T>>,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(current: Option<&'a Node<T>>) -> Self {
        Cursor { current }
    }

    pub fn position(&self) -> Position {
        position_of(self.current)
    }

    pub fn is_before_begin(&self) -> bool {
        self.position() == Position::BeforeBegin
    }

    pub fn is_end(&self) -> bool {
        self.current.is_none()
    }

    pub fn get(&self) -> Result<&'a T> {
        value_at(self.current)
    }

    pub fn peek_next(&self) -> Option<&'a T> {
        self.current?.next()?.value().ok()
    }

    pub fn move_next(&mut self) -> Result<()> {
        let node = self
            .current
            .ok_or_else(|| misuse(ListError::IncrementPastEnd))?;
        self.current = node.next();
        Ok(())
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        match (self.current, other.current) {
            (Some(a), Some(b)) => ptr::eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cursor").field(&self.position()).finish()
    }
}

/// ```
/// use forward_list::LinkedList;
///
/// let mut list = LinkedList::from([0, 1, 2, 3, 4, 5]);
/// let mut cursor = list.before_begin_mut();
/// while let Some(&value) = cursor.peek_next() {
///     if value % 2 == 1 {
///         cursor.erase_after();
///     } else {
///         cursor.move_next().unwrap();
///     }
/// }
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![0, 2, 4]);
/// ```
pub struct CursorMut<'a, T> {
    current: Option<&'a mut Node<T>>,
}

impl<'a, T> CursorMut<'a, T> {
    pub(crate) fn new(current: Option<&'a mut Node<T>>) -> Self {
        CursorMut { current }
    }

    pub(crate) fn into_node(self) -> Option<&'a mut Node<T>> {
        self.current
    }

    // Never lands on the end position.
    pub(crate) fn step_if_linked(&mut self) -> bool {
        let Some(node) = self.current.take() else {
            return false;
        };
        if node.next.is_none() {
            self.current = Some(node);
            return false;
        }
        self.current = node.next.as_deref_mut();
        true
    }

    pub fn position(&self) -> Position {
        position_of(self.current.as_deref())
    }

    pub fn is_before_begin(&self) -> bool {
        self.position() == Position::BeforeBegin
    }

    pub fn is_end(&self) -> bool {
        self.current.is_none()
    }

    pub fn get(&self) -> Result<&T> {
        value_at(self.current.as_deref())
    }

    pub fn get_mut(&mut self) -> Result<&mut T> {
        match self.current.as_deref_mut() {
            Some(node) => node
                .value_mut()
                .map_err(|_| misuse(ListError::DereferenceInvalid)),
            None => Err(misuse(ListError::DereferenceInvalid)),
        }
    }

    pub fn peek_next(&self) -> Option<&T> {
        self.current.as_deref()?.next()?.value().ok()
    }

    pub fn peek_next_mut(&mut self) -> Option<&mut T> {
        self.current
            .as_deref_mut()?
            .next
            .as_deref_mut()?
            .value_mut()
            .ok()
    }

    pub fn move_next(&mut self) -> Result<()> {
        let node = self
            .current
            .take()
            .ok_or_else(|| misuse(ListError::IncrementPastEnd))?;
        self.current = node.next.as_deref_mut();
        Ok(())
    }

    pub fn insert_after(&mut self, value: T) -> Result<()> {
        let node = self
            .current
            .take()
            .ok_or_else(|| misuse(ListError::InvalidIterator))?;
        self.current = Some(node.link_after(value));
        Ok(())
    }

    pub fn emplace_after<F>(&mut self, make: F) -> Result<()>
    where
        F: FnOnce() -> T,
    {
        if self.current.is_none() {
            return Err(misuse(ListError::InvalidIterator));
        }
        self.insert_after(make())
    }

    pub fn insert_n_after(&mut self, count: usize, value: &T) -> Result<()>
    where
        T: Clone,
    {
        self.extend_after(iter::repeat(value).take(count).cloned())
    }

    pub fn extend_after<I>(&mut self, values: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
    {
        let node = self
            .current
            .take()
            .ok_or_else(|| misuse(ListError::InvalidIterator))?;
        self.current = Some(node.link_all(values));
        Ok(())
    }

    /// Returns `None` at the end position or when there is no successor.
    pub fn erase_after(&mut self) -> Option<T> {
        self.current
            .as_deref_mut()?
            .unlink_next()?
            .into_value()
            .ok()
    }

    pub fn truncate_after(&mut self) -> usize {
        match self.current.as_deref_mut() {
            Some(node) => release(node.unlink_rest()),
            None => 0,
        }
    }

    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self.current.as_deref())
    }
}

impl<'a, T> From<CursorMut<'a, T>> for Cursor<'a, T> {
    fn from(cursor: CursorMut<'a, T>) -> Self {
        let current = match cursor.current {
            Some(node) => Some(&*node),
            None => None,
        };
        Cursor::new(current)
    }
}

impl<T> fmt::Debug for CursorMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CursorMut").field(&self.position()).finish()
    }
}
