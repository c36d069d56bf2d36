use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter;
use std::mem;

use log::debug;

use crate::cursor::{Cursor, CursorMut};
use crate::error::{ListError, Result};
use crate::node::{release, Node, Slot};

/// ```
/// use forward_list::LinkedList;
///
/// let mut list = LinkedList::new();
/// list.push_front(3);
/// list.push_front(2);
/// list.push_front(1);
///
/// let mut cursor = list.begin_mut();
/// cursor.insert_after(9).unwrap();
/// assert_eq!(cursor.get(), Ok(&9));
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 9, 2, 3]);
/// ```
pub struct LinkedList<T> {
    head: Node<T>,
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        LinkedList {
            head: Node::sentinel(),
        }
    }

    pub fn with_len(len: usize) -> Self
    where
        T: Default,
    {
        iter::repeat_with(T::default).take(len).collect()
    }

    pub fn from_elem(len: usize, value: T) -> Self
    where
        T: Clone,
    {
        iter::repeat(value).take(len).collect()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.head.next.is_none()
    }

    pub fn front(&self) -> Result<&T> {
        match self.head.next() {
            Some(node) => node.value(),
            None => Err(empty_list()),
        }
    }

    pub fn front_mut(&mut self) -> Result<&mut T> {
        match self.head.next.as_deref_mut() {
            Some(node) => node.value_mut(),
            None => Err(empty_list()),
        }
    }

    pub fn before_begin(&self) -> Cursor<'_, T> {
        Cursor::new(Some(&self.head))
    }

    pub fn begin(&self) -> Cursor<'_, T> {
        Cursor::new(self.head.next())
    }

    pub fn end(&self) -> Cursor<'_, T> {
        Cursor::new(None)
    }

    pub fn before_begin_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(Some(&mut self.head))
    }

    pub fn begin_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self.head.next.as_deref_mut())
    }

    pub fn push_front(&mut self, value: T) {
        self.head.link_after(value);
    }

    pub fn emplace_front<F>(&mut self, make: F)
    where
        F: FnOnce() -> T,
    {
        self.push_front(make());
    }

    pub fn pop_front(&mut self) -> Option<T> {
        self.head.unlink_next()?.into_value().ok()
    }

    pub fn clear(&mut self) {
        release(self.head.unlink_rest());
    }

    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.head.next, &mut other.head.next);
    }

    pub fn take(&mut self) -> Self {
        let mut taken = LinkedList::new();
        self.swap(&mut taken);
        taken
    }

    pub fn move_from(&mut self, other: &mut Self) {
        self.clear();
        self.swap(other);
    }

    pub fn assign(&mut self, len: usize, value: T)
    where
        T: Clone,
    {
        *self = LinkedList::from_elem(len, value);
    }

    pub fn assign_iter<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        *self = values.into_iter().collect();
    }

    pub fn resize(&mut self, len: usize, value: T)
    where
        T: Clone,
    {
        self.resize_with(len, || value.clone());
    }

    pub fn resize_default(&mut self, len: usize)
    where
        T: Default,
    {
        self.resize_with(len, T::default);
    }

    pub fn resize_with<F>(&mut self, len: usize, make: F)
    where
        F: FnMut() -> T,
    {
        let mut cursor = self.before_begin_mut();
        let mut kept = 0;
        while kept < len && cursor.step_if_linked() {
            kept += 1;
        }
        if let Some(tail) = cursor.into_node() {
            if kept == len {
                release(tail.unlink_rest());
            } else {
                tail.link_all(iter::repeat_with(make).take(len - kept));
            }
        }
    }

    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&T) -> bool,
    {
        let mut cursor = self.before_begin_mut();
        loop {
            let keep_next = match cursor.peek_next() {
                Some(value) => keep(value),
                None => break,
            };
            if keep_next {
                cursor.step_if_linked();
            } else {
                cursor.erase_after();
            }
        }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            current: self.head.next(),
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            current: self.head.next.as_deref_mut(),
        }
    }
}

fn empty_list() -> ListError {
    debug!("front on list with only the sentinel node");
    ListError::EmptyList
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    fn clone_from(&mut self, source: &Self) {
        let copy = source.clone();
        *self = copy;
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: Hash> Hash for LinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut len = 0;
        for value in self {
            value.hash(state);
            len += 1;
        }
        state.write_usize(len);
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(values: I) -> Self {
        let mut list = LinkedList::new();
        list.head.link_all(values);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, values: I) {
        let mut cursor = self.before_begin_mut();
        while cursor.step_if_linked() {}
        if let Some(tail) = cursor.into_node() {
            tail.link_all(values);
        }
    }
}

impl<T, const N: usize> From<[T; N]> for LinkedList<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T> From<Vec<T>> for LinkedList<T> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

pub struct Iter<'a, T> {
    current: Option<&'a Node<T>>,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            current: self.current,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.current?;
        self.current = node.next();
        node.value().ok()
    }
}

pub struct IterMut<'a, T> {
    current: Option<&'a mut Node<T>>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        let Node { slot, next } = self.current.take()?;
        self.current = next.as_deref_mut();
        match slot {
            Slot::Element(value) => Some(value),
            Slot::Sentinel => None,
        }
    }
}

pub struct IntoIter<T> {
    list: LinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut LinkedList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
