use std::time::Instant;

use tracing::debug;

pub fn run_blocking<F, T>(label: &str, f: F) -> T
where
    F: FnOnce() -> T,
{
    let started = Instant::now();
    let result = f();
    debug!(task = label, elapsed_ms = %started.elapsed().as_millis(), "blocking task finished");
    result
}
