/* -------------------------------------------------------------------------- */
/*                                   Import                                   */
/* -------------------------------------------------------------------------- */

use std::fmt;
use std::iter::FusedIterator;

use crate::error::CircularBufferError;

/* -------------------------------------------------------------------------- */
/*                                  Constant                                  */
/* -------------------------------------------------------------------------- */
/// separator placed between two elements when the buffer is rendered
pub const SEPARATOR: &str = " --> ";

/// what gets rendered for a buffer holding nothing
pub const EMPTY_MESSAGE: &str = "Buffer is empty";

/* -------------------------------------------------------------------------- */
/*                                   Struct                                   */
/* -------------------------------------------------------------------------- */
/// fixed capacity FIFO storage, once full every insertion overwrites the
/// oldest element
#[derive(Debug, Clone)]
pub struct RingBuffer<T> {
    /// the backing store, its length is the capacity and never changes
    slots: Vec<Option<T>>,

    /// index of the oldest occupied slot, only meaningful when size > 0
    head: usize,

    /// index where the next element will be written
    tail: usize,

    /// number of occupied slots, a full buffer also has head == tail
    size: usize,
}

/// borrowing iterator going from the oldest to the newest element
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    buffer: &'a RingBuffer<T>,

    /// logical position of the next element yielded from the front
    front: usize,

    /// logical position one past the next element yielded from the back
    back: usize,
}

/* -------------------------------------------------------------------------- */
/*                            Struct Implementation                           */
/* -------------------------------------------------------------------------- */
impl<T> RingBuffer<T> {
    /// create an empty buffer able to hold `capacity` elements,
    /// a capacity of 0 is refused since every index is computed modulo the capacity
    pub fn new(capacity: usize) -> Result<Self, CircularBufferError> {
        if capacity == 0 {
            return Err(CircularBufferError::InvalidCapacity(0));
        }
        Ok(Self {
            slots: std::iter::repeat_with(|| None).take(capacity).collect(),
            head: 0,
            tail: 0,
            size: 0,
        })
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn is_full(&self) -> bool {
        self.size == self.capacity()
    }

    /// write the item at the tail, if the buffer was already full the oldest
    /// element is overwritten and the head moves forward with the tail
    pub fn add(&mut self, item: T) {
        self.slots[self.tail] = Some(item);
        self.tail = self.next_index(self.tail);

        if self.is_full() {
            self.head = self.next_index(self.head);
        } else {
            self.size += 1;
        }
    }

    /// remove the oldest element and hand it back, None if there is nothing to remove
    pub fn delete(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let item = self.slots[self.head].take();
        self.head = self.next_index(self.head);
        self.size -= 1;
        item
    }

    /// same as delete but report the empty buffer notice as an error
    pub fn try_delete(&mut self) -> Result<T, CircularBufferError> {
        self.delete().ok_or(CircularBufferError::Empty)
    }

    /// drop every element and reset both cursors
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
        self.head = 0;
        self.tail = 0;
        self.size = 0;
    }

    /// the oldest element
    pub fn peek_first(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.slots[self.head].as_ref()
    }

    /// the newest element, which sits right before the tail
    pub fn peek_last(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        let capacity = self.capacity();
        self.slots[(self.tail + capacity - 1) % capacity].as_ref()
    }

    /// return the element at the logical position `index`, 0 being the oldest
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.size {
            return None;
        }
        self.slots[self.physical_index(index)].as_ref()
    }

    /// iterate over the occupied slots only, from the oldest to the newest
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            buffer: self,
            front: 0,
            back: self.size,
        }
    }

    fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.capacity()
    }

    fn physical_index(&self, index: usize) -> usize {
        (self.head + index) % self.capacity()
    }
}

impl<T: PartialEq> RingBuffer<T> {
    /// return true if one of the occupied slots holds `item`,
    /// the scan is bounded by the size so unoccupied slots are never compared
    pub fn find(&self, item: &T) -> bool {
        self.iter().any(|value| value == item)
    }
}

impl<T: fmt::Display> RingBuffer<T> {
    /// render the elements from the oldest to the newest
    pub fn render(&self) -> String {
        self.render_with(SEPARATOR)
    }

    pub fn render_with(&self, separator: &str) -> String {
        if self.is_empty() {
            return EMPTY_MESSAGE.to_owned();
        }
        self.iter()
            .map(|item| item.to_string())
            .collect::<Vec<String>>()
            .join(separator)
    }
}

impl<T: fmt::Display> fmt::Display for RingBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

/* -------------------------------------------------------------------------- */
/*                           Iterator Implementation                          */
/* -------------------------------------------------------------------------- */
impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let item = self.buffer.get(self.front);
        self.front += 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        self.buffer.get(self.back)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a RingBuffer<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/* -------------------------------------------------------------------------- */
/*                                    Test                                    */
/* -------------------------------------------------------------------------- */
