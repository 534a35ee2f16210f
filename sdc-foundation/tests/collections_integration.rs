// Integration tests for the static containers
// Exercises each container through both the method and procedural surfaces

use sdc_error::{codes, ErrorCategory, Result};
use sdc_foundation::{
    api::{circular, fifo, list, priority},
    collections::{DefaultCircularQueue, DefaultFifoQueue, DefaultPriorityQueue},
    limits, CircularQueue, FifoQueue, IntrusiveList, Node, Priority, PriorityQueue,
};

/// Opaque handle standing in for a caller-owned object
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Handle(u32);

#[test]
fn test_fifo_queue_order() -> Result<()> {
    let mut queue = FifoQueue::<Handle, 10>::new();

    queue.enqueue(Handle(1))?;
    queue.enqueue(Handle(2))?;
    queue.enqueue(Handle(3))?;

    assert_eq!(queue.dequeue()?, Handle(1));
    assert_eq!(queue.dequeue()?, Handle(2));
    assert_eq!(queue.size(), 1);

    Ok(())
}

#[test]
fn test_fifo_queue_full_then_reject() -> Result<()> {
    let mut queue = FifoQueue::<u32, 4>::new();
    for i in 0..4 {
        queue.enqueue(i)?;
    }

    assert!(queue.is_full());
    let err = queue.enqueue(4).unwrap_err();
    assert_eq!(err.category, ErrorCategory::Capacity);
    assert_eq!(err.code, codes::CAPACITY_EXCEEDED);
    assert_eq!(queue.size(), 4);

    Ok(())
}

#[test]
fn test_circular_queue_full_flag() -> Result<()> {
    let mut ring = CircularQueue::<Handle, 2>::new();

    ring.enqueue(Handle(1))?;
    ring.enqueue(Handle(2))?;
    assert!(ring.is_full());
    assert_eq!(ring.size(), 2);

    assert_eq!(ring.dequeue()?, Handle(1));
    assert!(!ring.is_full());
    assert_eq!(ring.size(), 1);

    Ok(())
}

#[test]
fn test_priority_queue_order() -> Result<()> {
    let mut tasks = PriorityQueue::<&str, 10>::new();
    tasks.enqueue("low", 1)?;
    tasks.enqueue("high", 10)?;
    tasks.enqueue("medium", 5)?;

    assert_eq!(tasks.dequeue()?, ("high", 10));
    assert_eq!(tasks.dequeue()?, ("medium", 5));
    assert_eq!(tasks.dequeue()?, ("low", 1));
    assert!(tasks.is_empty());

    Ok(())
}

#[test]
fn test_intrusive_list_head_and_tail() -> Result<()> {
    let a = Node::empty();
    let b = Node::new('b');
    let c = Node::new('c');
    let d = Node::new('d');
    let mut chain = IntrusiveList::new();

    chain.init(&a)?;
    chain.insert_at_head(&b)?;
    chain.insert_at_head(&c)?;
    let order: Vec<_> = chain.iter().map(Node::data).collect();
    assert_eq!(order, [Some('c'), Some('b'), None]);

    chain.insert_at_tail(&d)?;
    chain.delete_at_head()?;
    let order: Vec<_> = chain.iter().map(Node::data).collect();
    assert_eq!(order, [Some('b'), None, Some('d')]);

    chain.delete_at_tail()?;
    let order: Vec<_> = chain.iter().map(Node::data).collect();
    assert_eq!(order, [Some('b'), None]);
    assert_eq!(chain.len(), 2);

    Ok(())
}

#[test]
fn test_empty_containers_reject_removal() {
    let mut queue = FifoQueue::<u32, 2>::new();
    let mut ring = CircularQueue::<u32, 2>::new();
    let mut tasks = PriorityQueue::<u32, 2>::new();
    let mut chain: IntrusiveList<'_, u32> = IntrusiveList::new();

    for err in [
        queue.dequeue().unwrap_err(),
        queue.peek().map(|_| 0).unwrap_err(),
        ring.dequeue().unwrap_err(),
        ring.peek().map(|_| 0).unwrap_err(),
        tasks.dequeue().map(|_| 0).unwrap_err(),
        tasks.peek().map(|_| 0).unwrap_err(),
        chain.delete_at_head().map(|_| 0).unwrap_err(),
        chain.delete_at_tail().map(|_| 0).unwrap_err(),
    ] {
        assert_eq!(err.category, ErrorCategory::State);
        assert_eq!(err.code, codes::CONTAINER_EMPTY);
    }

    assert!(queue.is_empty());
    assert!(ring.is_empty());
    assert!(tasks.is_empty());
    assert!(chain.is_empty());
}

#[test]
fn test_procedural_interface_matches_methods() -> Result<()> {
    let mut queue = FifoQueue::<u32, 3>::new();
    fifo::init(Some(&mut queue))?;
    fifo::enqueue(Some(&mut queue), 10)?;
    fifo::enqueue(Some(&mut queue), 20)?;

    let mut out = 0;
    fifo::peek(Some(&queue), Some(&mut out))?;
    assert_eq!(out, 10);
    fifo::dequeue(Some(&mut queue), Some(&mut out))?;
    assert_eq!(out, 10);
    assert_eq!(fifo::size(Some(&queue)), 1);

    let mut ring = CircularQueue::<u32, 1>::new();
    circular::enqueue(Some(&mut ring), 5)?;
    assert!(circular::is_full(Some(&ring)));
    assert!(circular::enqueue(Some(&mut ring), 6).is_err());

    let mut tasks = PriorityQueue::<u32, 3>::new();
    priority::enqueue(Some(&mut tasks), 1, -1)?;
    priority::enqueue(Some(&mut tasks), 2, 2)?;
    let mut element = 0;
    let mut prio: Priority = 0;
    priority::dequeue(Some(&mut tasks), Some(&mut element), Some(&mut prio))?;
    assert_eq!((element, prio), (2, 2));

    Ok(())
}

#[test]
fn test_procedural_interface_absent_references() {
    let mut out = 0u32;

    assert!(fifo::is_empty(None::<&FifoQueue<u32, 1>>));
    assert!(fifo::is_full(None::<&FifoQueue<u32, 1>>));
    assert_eq!(circular::size(None::<&CircularQueue<u32, 1>>), 0);

    let err = fifo::dequeue(None::<&mut FifoQueue<u32, 1>>, Some(&mut out)).unwrap_err();
    assert_eq!(err.code, codes::NULL_REFERENCE);
    assert_eq!(err.category, ErrorCategory::Parameter);

    let mut queue = FifoQueue::<u32, 1>::new();
    let err = fifo::peek(Some(&queue), None).unwrap_err();
    assert_eq!(err.code, codes::NULL_OUTPUT);
    assert!(fifo::enqueue(Some(&mut queue), 1).is_ok());

    let mut tasks = PriorityQueue::<u32, 1>::new();
    let err = priority::dequeue(Some(&mut tasks), Some(&mut out), None).unwrap_err();
    assert_eq!(err.code, codes::NULL_OUTPUT);

    let mut chain: IntrusiveList<'_, u32> = IntrusiveList::new();
    let err = list::insert_at_tail(Some(&mut chain), None).unwrap_err();
    assert_eq!(err.code, codes::NULL_NODE);
    assert!(chain.is_empty());
}

#[test]
fn test_default_capacity_aliases() {
    let queue = DefaultFifoQueue::<u8>::new();
    let ring = DefaultCircularQueue::<u8>::new();
    let tasks = DefaultPriorityQueue::<u8>::new();

    assert_eq!(queue.capacity(), limits::QUEUE_MAX_SIZE);
    assert_eq!(ring.capacity(), limits::CIRCULAR_QUEUE_MAX_SIZE);
    assert_eq!(tasks.capacity(), limits::PRIORITY_QUEUE_MAX_SIZE);
}

#[test]
fn test_error_display() {
    let mut queue = FifoQueue::<u8, 0>::new();
    let err = queue.enqueue(1).unwrap_err();
    assert_eq!(format!("{err}"), "[Capacity][E07D0] FifoQueue capacity exceeded");
}
