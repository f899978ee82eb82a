//! Synthetic latency injection
//!
//! Simulates a slow or degraded backend for demos and fault-injection
//! testing. The routine burns a bounded amount of CPU interleaved with
//! short sleeps so it holds wall-clock time for about one second without
//! growing memory.

use std::hint::black_box;
use std::time::Duration;

const ITERATIONS: u64 = 1_000_000;
const SLEEP_EVERY: u64 = 100_000;
const SLEEP: Duration = Duration::from_millis(90);

/// Burn roughly one second of wall-clock time with O(1) memory.
pub async fn inject_synthetic_delay() {
    let mut acc = 0.0f64;
    for i in 0..ITERATIONS {
        if i % SLEEP_EVERY == 0 {
            tokio::time::sleep(SLEEP).await;
        }
        let x = i as f64;
        acc += (x % 1000.0).sqrt() * x.sin() * x.cos();
    }
    // keep the accumulator live so the loop is not optimized away
    black_box(acc);
}
