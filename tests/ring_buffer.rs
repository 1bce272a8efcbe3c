use cbl::{config::parse_capacity, CircularBufferError, Operation, RingBuffer};

#[test]
fn invalid_capacity_is_reported() {
    assert!(matches!(
        RingBuffer::<i64>::new(0),
        Err(CircularBufferError::InvalidCapacity(0))
    ));
    assert!(matches!(
        parse_capacity("-1"),
        Err(CircularBufferError::InvalidCapacity(-1))
    ));
}

#[test]
fn capacity_is_never_exceeded() {
    let mut buffer = RingBuffer::new(5).unwrap();
    for item in 0..12 {
        buffer.add(item);
        assert!(buffer.len() <= 5);
    }
    assert_eq!(buffer.len(), 5);
    assert_eq!(buffer.iter().copied().collect::<Vec<_>>(), vec![7, 8, 9, 10, 11]);
}

#[test]
fn first_and_last_follow_insertion_order() {
    let mut buffer = RingBuffer::new(4).unwrap();
    for item in ["a", "b", "c"] {
        buffer.add(item.to_owned());
    }
    assert_eq!(buffer.peek_first().map(String::as_str), Some("a"));
    assert_eq!(buffer.peek_last().map(String::as_str), Some("c"));
}

#[test]
fn adding_past_capacity_overwrites_the_oldest() {
    let mut buffer = RingBuffer::new(3).unwrap();
    for item in [10, 20, 30, 40] {
        buffer.add(item);
    }
    assert!(!buffer.find(&10));
    assert_eq!(buffer.peek_first(), Some(&20));
    assert!(buffer.find(&40));
}

#[test]
fn clear_then_delete_gives_the_empty_notice() {
    let mut buffer = RingBuffer::new(2).unwrap();
    buffer.add(1);
    buffer.clear();
    assert!(buffer.is_empty());
    assert_eq!(buffer.delete(), None);
    let notice = buffer.try_delete().unwrap_err();
    assert_eq!(notice.to_string(), "Buffer is empty");
    buffer.clear();
    assert!(buffer.is_empty());
    assert_eq!(buffer.render(), "Buffer is empty");
}

#[test]
fn numeric_walkthrough_wraps_the_indices() {
    let mut buffer = RingBuffer::new(3).unwrap();
    let steps = [
        Operation::Add(15),
        Operation::Add(5),
        Operation::Delete,
        Operation::Add(3),
        Operation::Add(26),
        Operation::Delete,
        Operation::Add(76),
        Operation::Add(105),
    ];
    for step in steps {
        step.apply(&mut buffer, " --> ");
    }
    assert_eq!(buffer.iter().copied().collect::<Vec<_>>(), vec![26, 76, 105]);
    assert_eq!(buffer.render(), "26 --> 76 --> 105");
    assert!(!buffer.find(&48));
    assert!(!buffer.find(&3));
    assert_eq!(buffer.total(), 207);
}

#[test]
fn deleted_values_are_moved_out() {
    let mut buffer = RingBuffer::new(2).unwrap();
    buffer.add(vec![1, 2]);
    buffer.add(vec![3]);
    let first = buffer.delete().unwrap();
    assert_eq!(first, vec![1, 2]);
    assert_eq!(buffer.len(), 1);
    assert_eq!(buffer.peek_first(), Some(&vec![3]));
}
