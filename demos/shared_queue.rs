//! Demonstration of the selector and the shared queue
//!
//! Runs the k-th largest selection on a sample input, then five producer
//! threads and five polling consumer threads against one `SharedQueue`, and
//! reports whether anything was lost or duplicated.
//!
//! ```text
//! RUST_LOG=debug cargo run --example shared_queue
//! ```

use ryanair::queue::{poll, SharedQueue};
use ryanair::select::kth_largest_divisible;
use ryanair::MetricsCollector;
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const ITEMS_PER_THREAD: usize = 100;
const THREAD_COUNT: usize = 5;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    demonstrate_selection()?;
    demonstrate_shared_queue();

    Ok(())
}

fn demonstrate_selection() -> ryanair::Result<()> {
    info!("=== Find k-th largest divisible by 12 and 16 ===");

    let numbers = [
        Some(48.0),
        Some(96.0),
        Some(144.0),
        Some(12.0),
        Some(16.0),
        Some(24.0),
        Some(192.0),
        Some(240.0),
        Some(288.0),
        Some(336.0),
        None,
        Some(0.0),
        Some(-48.0),
    ];
    let k = 3;

    let present: Vec<String> = numbers.iter().flatten().map(f64::to_string).collect();
    info!(input = %present.join(", "), k, "searching");

    match kth_largest_divisible(&numbers, k)? {
        Some(value) => info!(k, value, "found k-th largest multiple of 48"),
        None => warn!(k, "not enough values divisible by 12 and 16"),
    }

    Ok(())
}

fn demonstrate_shared_queue() {
    info!("=== SharedQueue: thread-safe FIFO ===");
    info!(
        producers = THREAD_COUNT,
        consumers = THREAD_COUNT,
        items_per_producer = ITEMS_PER_THREAD,
        "starting"
    );

    let queue = Arc::new(SharedQueue::new());
    let added = Arc::new(Mutex::new(HashSet::new()));
    let producers_done = Arc::new(AtomicBool::new(false));

    let producers: Vec<_> = (0..THREAD_COUNT)
        .map(|producer_id| {
            let queue = Arc::clone(&queue);
            let added = Arc::clone(&added);
            thread::spawn(move || {
                for i in 0..ITEMS_PER_THREAD {
                    let item = format!("Producer{producer_id}_Item{i}");
                    if let Ok(mut added) = added.lock() {
                        added.insert(item.clone());
                    }
                    queue.add([item]);
                }
            })
        })
        .collect();

    let consumers: Vec<_> = (0..THREAD_COUNT)
        .map(|_| {
            let queue = Arc::clone(&queue);
            let producers_done = Arc::clone(&producers_done);
            thread::spawn(move || {
                let mut retrieved = Vec::new();
                while !producers_done.load(Ordering::Acquire) || queue.count() > 0 {
                    if let Some(item) = poll::get_timeout(&queue, Duration::from_millis(1)) {
                        retrieved.push(item);
                    }
                }
                retrieved
            })
        })
        .collect();

    for producer in producers {
        if producer.join().is_err() {
            warn!("producer thread panicked");
        }
    }
    producers_done.store(true, Ordering::Release);

    let mut retrieved = Vec::new();
    for consumer in consumers {
        match consumer.join() {
            Ok(items) => retrieved.extend(items),
            Err(_) => warn!("consumer thread panicked"),
        }
    }

    let added = added.lock().map(|set| set.clone()).unwrap_or_default();
    let unique: HashSet<String> = retrieved.iter().cloned().collect();

    let no_data_loss = retrieved.len() == added.len();
    let no_duplicates = unique.len() == retrieved.len();
    let all_items_match = unique == added;
    let empty = queue.count() == 0;

    info!(
        added = added.len(),
        retrieved = retrieved.len(),
        unique = unique.len(),
        empty,
        no_data_loss,
        no_duplicates,
        all_items_match,
        "results"
    );

    let metrics = queue.metrics();
    info!(
        empty_polls = metrics.empty_polls,
        hit_rate = format_args!("{:.1}%", metrics.hit_rate()),
        peak_len = metrics.peak_len,
        "queue metrics"
    );

    if no_data_loss && no_duplicates && all_items_match && empty {
        info!("thread-safety VERIFIED");
    } else {
        warn!("thread-safety FAILED");
    }
}
