//! Property-based tests for the shared queue using proptest
//!
//! These tests drive the queue with arbitrary operation sequences and check
//! it against a plain `VecDeque` model.

use crate::queue::SharedQueue;
use proptest::prelude::*;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;

#[derive(Debug, Clone)]
enum Op {
    Add(Vec<String>),
    Get,
    Count,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => prop::collection::vec("[a-z]{1,6}", 0..5).prop_map(Op::Add),
        2 => Just(Op::Get),
        1 => Just(Op::Count),
    ]
}

proptest! {
    #[test]
    fn test_matches_vecdeque_model(ops in prop::collection::vec(op_strategy(), 1..100)) {
        let queue = SharedQueue::new();
        let mut model = VecDeque::new();
        let mut added = 0usize;
        let mut removed = 0usize;

        for op in ops {
            match op {
                Op::Add(items) => {
                    added += items.len();
                    model.extend(items.iter().cloned());
                    queue.add(items);
                }
                Op::Get => {
                    let expected = model.pop_front();
                    if expected.is_some() {
                        removed += 1;
                    }
                    prop_assert_eq!(queue.get(), expected);
                }
                Op::Count => {
                    prop_assert_eq!(queue.count(), model.len());
                }
            }

            // Count always equals adds minus successful removals
            prop_assert_eq!(queue.count(), added - removed);
        }
    }

    #[test]
    fn test_fifo_ordering_single_thread(
        batches in prop::collection::vec(
            prop::collection::vec(any::<u32>(), 0..10),
            1..5
        )
    ) {
        let queue = SharedQueue::new();
        let mut expected = Vec::new();

        for batch in &batches {
            queue.add(batch.iter().copied());
            expected.extend(batch.iter().copied());
        }

        for value in expected {
            prop_assert_eq!(queue.get(), Some(value));
        }
        prop_assert_eq!(queue.get(), None);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn test_concurrent_multiset_preserved(
        producers in 1usize..5,
        items_per_producer in 1usize..200,
        consumers in 1usize..5
    ) {
        let queue = Arc::new(SharedQueue::new());
        let producers_done = Arc::new(AtomicBool::new(false));
        let barrier = Arc::new(Barrier::new(producers + consumers));

        let producer_handles: Vec<_> = (0..producers)
            .map(|p| {
                let queue = Arc::clone(&queue);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    for i in 0..items_per_producer {
                        queue.add([p * items_per_producer + i]);
                    }
                })
            })
            .collect();

        // Consumers race the producers, polling until they are done and the queue drains
        let consumer_handles: Vec<_> = (0..consumers)
            .map(|_| {
                let queue = Arc::clone(&queue);
                let producers_done = Arc::clone(&producers_done);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    let mut retrieved = Vec::new();
                    while !producers_done.load(Ordering::Acquire) || !queue.is_empty() {
                        match queue.get() {
                            Some(value) => retrieved.push(value),
                            None => thread::yield_now(),
                        }
                    }
                    retrieved
                })
            })
            .collect();

        for handle in producer_handles {
            handle.join().unwrap();
        }
        producers_done.store(true, Ordering::Release);

        let mut retrieved: Vec<usize> = consumer_handles
            .into_iter()
            .flat_map(|handle| handle.join().unwrap())
            .collect();
        retrieved.sort_unstable();

        let expected: Vec<usize> = (0..producers * items_per_producer).collect();
        prop_assert_eq!(retrieved, expected);
        prop_assert_eq!(queue.count(), 0);
    }
}
