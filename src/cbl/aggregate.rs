/* -------------------------------------------------------------------------- */
/*                                   Import                                   */
/* -------------------------------------------------------------------------- */

use std::iter::Sum;

use crate::ring_buffer::RingBuffer;

/* -------------------------------------------------------------------------- */
/*                            Struct Implementation                           */
/* -------------------------------------------------------------------------- */
impl<T: Copy + Sum> RingBuffer<T> {
    /// sum of every element currently held, the zero of T when empty
    pub fn total(&self) -> T {
        self.iter().copied().sum()
    }
}

impl RingBuffer<i64> {
    /// sum of every element, None when the result does not fit in an i64,
    /// intermediate sums are kept in an i128 so the order of the items does not matter
    pub fn checked_total(&self) -> Option<i64> {
        let total: i128 = self.iter().map(|item| i128::from(*item)).sum();
        i64::try_from(total).ok()
    }
}

impl<T: PartialOrd> RingBuffer<T> {
    /// the largest element, on a tie the oldest one wins
    pub fn largest(&self) -> Option<&T> {
        self.iter().fold(None, |best, item| match best {
            Some(best) if item > best => Some(item),
            Some(best) => Some(best),
            None => Some(item),
        })
    }

    /// the smallest element, on a tie the oldest one wins
    pub fn smallest(&self) -> Option<&T> {
        self.iter().fold(None, |best, item| match best {
            Some(best) if item < best => Some(item),
            Some(best) => Some(best),
            None => Some(item),
        })
    }
}

impl<T: PartialEq> RingBuffer<T> {
    /// logical position of the first occurrence of `item`, 0 being the oldest
    pub fn position_of(&self, item: &T) -> Option<usize> {
        self.iter().position(|value| value == item)
    }
}

/* -------------------------------------------------------------------------- */
/*                                    Test                                    */
/* -------------------------------------------------------------------------- */
#[cfg(test)]
mod tests {
    use crate::ring_buffer::RingBuffer;

    #[test]
    fn aggregates_only_see_live_elements() {
        let mut buffer = RingBuffer::new(3).unwrap();
        for item in [15, 5, 3, 26, 76, 105] {
            buffer.add(item);
        }
        assert_eq!(buffer.total(), 207);
        assert_eq!(buffer.largest(), Some(&105));
        assert_eq!(buffer.smallest(), Some(&26));
        assert_eq!(buffer.position_of(&76), Some(1));
        assert_eq!(buffer.position_of(&15), None);
    }

    #[test]
    fn checked_total_detects_overflow() {
        let mut buffer = RingBuffer::new(3).unwrap();
        buffer.add(i64::MAX);
        assert_eq!(buffer.checked_total(), Some(i64::MAX));
        buffer.add(1);
        assert_eq!(buffer.checked_total(), None);
        buffer.add(i64::MIN);
        assert_eq!(buffer.checked_total(), Some(0));
    }

    #[test]
    fn aggregates_of_empty_buffer() {
        let buffer: RingBuffer<i64> = RingBuffer::new(2).unwrap();
        assert_eq!(buffer.total(), 0);
        assert_eq!(buffer.checked_total(), Some(0));
        assert_eq!(buffer.largest(), None);
        assert_eq!(buffer.smallest(), None);
    }

    /// ordered on the value only, the tag tells which element was picked
    #[derive(Debug, PartialEq)]
    struct Tagged(i64, char);

    impl PartialOrd for Tagged {
        fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
            self.0.partial_cmp(&other.0)
        }
    }

    #[test]
    fn ties_keep_the_oldest() {
        let mut buffer = RingBuffer::new(4).unwrap();
        for (value, tag) in [(2, 'a'), (9, 'b'), (9, 'c'), (2, 'd')] {
            buffer.add(Tagged(value, tag));
        }
        assert_eq!(buffer.largest().map(|item| item.1), Some('b'));
        assert_eq!(buffer.smallest().map(|item| item.1), Some('a'));
    }

    #[test]
    fn floats_are_supported() {
        let mut buffer = RingBuffer::new(2).unwrap();
        buffer.add(1.5_f64);
        buffer.add(-0.5_f64);
        assert_eq!(buffer.total(), 1.0);
        assert_eq!(buffer.largest(), Some(&1.5));
    }
}
