//! Splits a fixed amount of work evenly across `OMP_NUM_THREADS` (or all
//! cores) with Rayon, drawing one bar per worker.

use rayon::prelude::*;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use threadbars::config::{self, MULTI_BAR_WIDTH};
use threadbars::{MultiBarDisplay, Worker};
use tracing_subscriber::EnvFilter;

const STEPS: usize = 5000;

fn main() -> threadbars::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    println!("\nPROGRESS MONITOR FOR EACH THREAD:\n");

    let n = config::num_workers();
    let chunk = STEPS / n;
    let display = Arc::new(Mutex::new(MultiBarDisplay::stdout(n, MULTI_BAR_WIDTH)));

    (0..n)
        .into_par_iter()
        .try_for_each_with(display.clone(), |d, id| {
            let worker: Worker = d.lock().unwrap().worker(id)?;

            // The first `STEPS % n` workers take one extra step, and so
            // briefly report a little over 100%.
            let mine = chunk + usize::from(id < STEPS % n);

            for j in 1..=mine {
                let percent = j as f64 / chunk as f64 * 100.0;
                d.lock().unwrap().update(&worker, percent)?;
                std::thread::sleep(Duration::from_millis(15));
            }

            Ok::<(), threadbars::Error>(())
        })?;

    let mut display = display.lock().unwrap();
    display.release()
}
