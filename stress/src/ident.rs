/*
    Identifier generation stress test.

    Spawns one worker per physical core, all generating trace and span
    identifiers through the scheme selected by TRACEKIT_ID_SCHEME, and
    prints a sliding-window throughput until Ctrl-C.
*/

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use tracekit_ident::Scheme;

const BATCH_SIZE: u64 = 1000;
const SLIDING_WINDOW_SIZE: u64 = 2; // In seconds

static STOP: AtomicBool = AtomicBool::new(false);

/// One counter per worker, padded onto its own cache line.
#[repr(align(64))]
#[derive(Default)]
struct WorkerCount(AtomicU64);

fn main() {
    ctrlc::set_handler(|| STOP.store(true, Ordering::SeqCst))
        .expect("Error setting Ctrl-C handler");

    let scheme = Scheme::from_env();
    let num_threads = num_cpus::get_physical();
    println!("Number threads: {num_threads}");

    let counts: Vec<WorkerCount> = (0..num_threads).map(|_| WorkerCount::default()).collect();

    thread::scope(|s| {
        for count in &counts {
            s.spawn(move || {
                while !STOP.load(Ordering::SeqCst) {
                    for _ in 0..BATCH_SIZE {
                        let trace_id = scheme.trace_id_factory.generate();
                        let span_id = scheme.span_id_factory.generate();
                        std::hint::black_box((trace_id, span_id));
                    }
                    count.0.fetch_add(BATCH_SIZE, Ordering::Relaxed);
                }
            });
        }

        s.spawn(|| {
            let mut total_count_old = 0u64;
            while !STOP.load(Ordering::SeqCst) {
                let window = Instant::now();
                thread::sleep(Duration::from_secs(SLIDING_WINDOW_SIZE));
                let total_count: u64 = counts
                    .iter()
                    .map(|count| count.0.load(Ordering::Relaxed))
                    .sum();
                let throughput =
                    (total_count - total_count_old) as f64 / window.elapsed().as_secs_f64();
                println!("Throughput: {throughput:.2} ids/sec");
                total_count_old = total_count;
            }
        });
    });
}
