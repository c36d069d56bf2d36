use log::trace;

use crate::error::{ListError, Result};

pub(crate) type Link<T> = Option<Box<Node<T>>>;

pub(crate) enum Slot<T> {
    Sentinel,
    Element(T),
}

pub(crate) struct Node<T> {
    pub(crate) slot: Slot<T>,
    pub(crate) next: Link<T>,
}

impl<T> Node<T> {
    pub(crate) fn sentinel() -> Self {
        Node {
            slot: Slot::Sentinel,
            next: None,
        }
    }

    pub(crate) fn element(value: T, next: Link<T>) -> Self {
        Node {
            slot: Slot::Element(value),
            next,
        }
    }

    pub(crate) fn is_sentinel(&self) -> bool {
        matches!(self.slot, Slot::Sentinel)
    }

    pub(crate) fn value(&self) -> Result<&T> {
        match &self.slot {
            Slot::Element(value) => Ok(value),
            Slot::Sentinel => Err(ListError::InvalidNode),
        }
    }

    pub(crate) fn value_mut(&mut self) -> Result<&mut T> {
        match &mut self.slot {
            Slot::Element(value) => Ok(value),
            Slot::Sentinel => Err(ListError::InvalidNode),
        }
    }

    pub(crate) fn into_value(self: Box<Self>) -> Result<T> {
        let Node { slot, next } = *self;
        release(next);
        match slot {
            Slot::Element(value) => Ok(value),
            Slot::Sentinel => Err(ListError::InvalidNode),
        }
    }

    pub(crate) fn next(&self) -> Option<&Node<T>> {
        self.next.as_deref()
    }

    pub(crate) fn link_after(&mut self, value: T) -> &mut Node<T> {
        let rest = self.next.take();
        self.next.insert(Box::new(Node::element(value, rest)))
    }

    // Returns `self` when `values` is empty.
    pub(crate) fn link_all<I>(&mut self, values: I) -> &mut Node<T>
    where
        I: IntoIterator<Item = T>,
    {
        let mut tail = self;
        for value in values {
            tail = tail.link_after(value);
        }
        tail
    }

    pub(crate) fn unlink_next(&mut self) -> Option<Box<Node<T>>> {
        let mut removed = self.next.take()?;
        self.next = removed.next.take();
        Some(removed)
    }

    pub(crate) fn unlink_rest(&mut self) -> Link<T> {
        self.next.take()
    }
}

/// Frees a detached chain front to back, one node at a time.
pub(crate) fn release<T>(mut link: Link<T>) -> usize {
    let mut released = 0;
    while let Some(mut node) = link {
        link = node.next.take();
        released += 1;
    }
    if released > 0 {
        trace!("released {} node(s)", released);
    }
    released
}
