use core::iter::FusedIterator;
use core::slice;

/// Iterator over the live slots of a `Vector` or `Stack`, in index order.
///
/// This iterator implements `Clone`.
#[derive(Debug)]
pub struct SlotIter<'a, T> {
    slots: slice::Iter<'a, Option<T>>,
}

impl<'a, T> SlotIter<'a, T> {
    pub(crate) fn new(slots: &'a [Option<T>]) -> Self {
        Self {
            slots: slots.iter(),
        }
    }
}

impl<T> Clone for SlotIter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
        }
    }
}

impl<'a, T> Iterator for SlotIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.slots.next()?.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<T> DoubleEndedIterator for SlotIter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.slots.next_back()?.as_ref()
    }
}

impl<T> ExactSizeIterator for SlotIter<'_, T> {}

impl<T> FusedIterator for SlotIter<'_, T> {}

/// Mutable iterator over the live slots of a `Vector`.
#[derive(Debug)]
pub struct SlotIterMut<'a, T> {
    slots: slice::IterMut<'a, Option<T>>,
}

impl<'a, T> SlotIterMut<'a, T> {
    pub(crate) fn new(slots: &'a mut [Option<T>]) -> Self {
        Self {
            slots: slots.iter_mut(),
        }
    }
}

impl<'a, T> Iterator for SlotIterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.slots.next()?.as_mut()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<T> DoubleEndedIterator for SlotIterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.slots.next_back()?.as_mut()
    }
}

impl<T> ExactSizeIterator for SlotIterMut<'_, T> {}

impl<T> FusedIterator for SlotIterMut<'_, T> {}

/// Iterator over a `Queue` from front to rear, wrapping around the end of
/// the buffer.
///
/// This iterator implements `Clone`.
#[derive(Debug)]
pub struct QueueIter<'a, T> {
    slots: &'a [Option<T>],
    position: usize,
    remaining: usize,
}

impl<'a, T> QueueIter<'a, T> {
    pub(crate) fn new(slots: &'a [Option<T>], front: usize, len: usize) -> Self {
        Self {
            slots,
            position: front,
            remaining: len,
        }
    }
}

impl<T> Clone for QueueIter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots,
            position: self.position,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for QueueIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let index = self.position;
        self.position = (self.position + 1) % self.slots.len();
        self.remaining -= 1;
        self.slots.get(index)?.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for QueueIter<'_, T> {}

impl<T> FusedIterator for QueueIter<'_, T> {}
