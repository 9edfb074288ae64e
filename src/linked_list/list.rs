use core::fmt;

use super::error::{ListError, ListResult};
use super::index::ListIndex;
use super::iter::{IntoIter, Iter, IterMut};
use super::node::{Link, Node};

/// A singly linked list that owns its nodes.
///
/// The list keeps a pointer to the head node and a cached element count.
/// Operations at the front are O(1); anything that touches the back or a
/// position walks the chain from the head.
pub struct LinkedList<T> {
    head: Link<T>,
    len: usize,
}

impl<T> LinkedList<T> {
    /// Creates a new, empty linked list.
    pub const fn new() -> Self {
        LinkedList { head: None, len: 0 }
    }

    /// Builds a list from the elements of `iterable`.
    ///
    /// With `reverse` unset the list holds the elements in iteration order;
    /// with `reverse` set every element is pushed to the front, so the list
    /// holds them in the opposite order.
    pub fn from_sequence<I>(iterable: I, reverse: bool) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut list = Self::new();
        list.convert(iterable, reverse);
        list
    }

    /// Adds every element of `iterable` to this list.
    ///
    /// Appends after the current tail, or prepends one element at a time when
    /// `reverse` is set.
    pub fn convert<I>(&mut self, iterable: I, reverse: bool)
    where
        I: IntoIterator<Item = T>,
    {
        let before = self.len;
        if reverse {
            for item in iterable {
                self.push_front(item);
            }
        } else {
            // Locate the tail once; each appended node becomes the new tail.
            let mut tail = tail_link(&mut self.head);
            for item in iterable {
                let node = tail.insert(Node::boxed(item, None));
                tail = &mut node.next;
                self.len += 1;
            }
        }
        log::trace!(
            "converted {} elements into linked list (reverse: {reverse})",
            self.len - before
        );
    }

    /// Check if the linked list is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Get the number of nodes in the linked list
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Get the head node of the linked list
    #[inline]
    pub fn head(&self) -> Option<&Node<T>> {
        self.head.as_deref()
    }

    /// Returns the value at the front of the list.
    ///
    /// Fails with [`ListError::IndexOutOfRange`] when the list is empty.
    pub fn first(&self) -> ListResult<&T> {
        self.get(0_usize).map(Node::value)
    }

    /// Returns the value at the back of the list. O(n).
    ///
    /// Fails with [`ListError::IndexOutOfRange`] when the list is empty.
    pub fn last(&self) -> ListResult<&T> {
        self.get(self.len as isize - 1).map(Node::value)
    }

    /// Whether any element compares equal to `key`.
    pub fn contains(&self, key: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|value| value == key)
    }

    /// Returns the node at `index`, counting from the head.
    ///
    /// # Errors
    ///
    /// [`ListError::InvalidIndexType`] when `index` is not an integer, and
    /// [`ListError::IndexOutOfRange`] when it is outside `[0, len)`.
    pub fn get<I: ListIndex>(&self, index: I) -> ListResult<&Node<T>> {
        let position = self.checked_position(index)?;
        let len = self.len;
        self.node_at(position).ok_or(ListError::IndexOutOfRange {
            index: position as isize,
            len,
        })
    }

    /// Returns the node at `index` with mutable access to its value.
    ///
    /// Fails under the same conditions as [`LinkedList::get`].
    pub fn get_mut<I: ListIndex>(&mut self, index: I) -> ListResult<&mut Node<T>> {
        let position = self.checked_position(index)?;
        let len = self.len;
        self.node_at_mut(position).ok_or(ListError::IndexOutOfRange {
            index: position as isize,
            len,
        })
    }

    /// Push a new value to the front of the linked list
    pub fn push_front(&mut self, item: T) {
        self.head = Some(Node::boxed(item, self.head.take()));
        self.len += 1;
    }

    /// Push a new value to the back of the linked list. O(n).
    pub fn push_back(&mut self, item: T) {
        *tail_link(&mut self.head) = Some(Node::boxed(item, None));
        self.len += 1;
    }

    /// Inserts `item` so that it ends up at position `index`.
    ///
    /// Out-of-range positions are clamped: `index <= 0` pushes to the front
    /// and `index >= len` pushes to the back. On an empty list the item
    /// becomes the only element whatever the index.
    ///
    /// # Errors
    ///
    /// [`ListError::InvalidIndexType`] when `index` is not an integer.
    pub fn insert<I: ListIndex>(&mut self, index: I, item: T) -> ListResult<()> {
        let index = index.to_position()?;
        if self.is_empty() || index <= 0 {
            self.push_front(item);
            return Ok(());
        }

        let position = index.unsigned_abs();
        if position >= self.len {
            self.push_back(item);
            return Ok(());
        }

        let len = self.len;
        let Some(prev) = self.node_at_mut(position - 1) else {
            return Err(ListError::IndexOutOfRange { index, len });
        };
        prev.next = Some(Node::boxed(item, prev.next.take()));
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the value at the front of the list.
    ///
    /// Fails with [`ListError::Empty`] when there is nothing to remove.
    pub fn pop_front(&mut self) -> ListResult<T> {
        self.take_front().ok_or_else(|| {
            log::debug!("pop_front on empty linked list");
            ListError::Empty
        })
    }

    /// Removes and returns the value at the back of the list. O(n).
    ///
    /// Fails with [`ListError::Empty`] when there is nothing to remove.
    pub fn pop_back(&mut self) -> ListResult<T> {
        match self.len {
            0 => {
                log::debug!("pop_back on empty linked list");
                Err(ListError::Empty)
            }
            1 => self.pop_front(),
            len => {
                let tail = self
                    .node_at_mut(len - 2)
                    .and_then(|prev| prev.next.take())
                    .expect("a list of len >= 2 links its second-to-last node to the tail");
                self.len -= 1;
                let Node { value, .. } = *tail;
                Ok(value)
            }
        }
    }

    /// Reverses the list in place by relinking its nodes.
    pub fn reverse(&mut self) {
        let mut reversed: Link<T> = None;
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
            node.next = reversed;
            reversed = Some(node);
        }
        self.head = reversed;
        log::trace!("reversed linked list of {} nodes", self.len);
    }

    /// Removes every element from the list.
    pub fn clear(&mut self) {
        let released = self.len;
        self.unlink_all();
        if released > 0 {
            log::trace!("cleared {released} nodes from linked list");
        }
    }

    /// Get an iterator over the values in the linked list
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.head.as_deref(), self.len)
    }

    /// Get an iterator over mutable references to the values in the linked list
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.head.as_deref_mut(), self.len)
    }

    pub(super) fn take_front(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            let Node { value, next } = *node;
            self.head = next;
            self.len -= 1;
            value
        })
    }

    fn checked_position<I: ListIndex>(&self, index: I) -> ListResult<usize> {
        let index = index.to_position()?;
        match usize::try_from(index) {
            Ok(position) if position < self.len => Ok(position),
            _ => {
                log::debug!("linked list index {index} out of range for length {}", self.len);
                Err(ListError::IndexOutOfRange {
                    index,
                    len: self.len,
                })
            }
        }
    }

    fn node_at(&self, position: usize) -> Option<&Node<T>> {
        let mut node = self.head.as_deref();
        for _ in 0..position {
            node = node?.next.as_deref();
        }
        node
    }

    fn node_at_mut(&mut self, position: usize) -> Option<&mut Node<T>> {
        let mut node = self.head.as_deref_mut();
        for _ in 0..position {
            node = node?.next.as_deref_mut();
        }
        node
    }

    // Unlinks nodes one at a time so dropping a long chain does not recurse.
    fn unlink_all(&mut self) {
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
        }
        self.len = 0;
    }

    /// Walks the chain and checks the structural invariants against `len`.
    #[cfg(test)]
    pub(crate) fn assert_invariants(&self) {
        assert_eq!(self.len == 0, self.head.is_none(), "empty list must have no head");

        let mut reachable = 0;
        let mut node = self.head.as_deref();
        while let Some(current) = node {
            reachable += 1;
            assert!(reachable <= self.len, "chain is longer than len {}", self.len);
            if reachable == self.len {
                assert!(current.next.is_none(), "tail must not link forward");
            }
            node = current.next.as_deref();
        }
        assert_eq!(reachable, self.len, "len must match reachable nodes");
    }
}

/// Follows `link` to the empty link after the last node.
fn tail_link<T>(mut link: &mut Link<T>) -> &mut Link<T> {
    while let Some(node) = link {
        link = &mut node.next;
    }
    link
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.unlink_all();
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("[]");
        }
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(value, f)?;
        }
        Ok(())
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_sequence(iter, false)
    }
}

impl<T, const N: usize> From<[T; N]> for LinkedList<T> {
    fn from(values: [T; N]) -> Self {
        Self::from_sequence(values, false)
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.convert(iter, false);
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.convert(iter.into_iter().copied(), false);
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
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
