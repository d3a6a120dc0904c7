//! An example of a `MultiBarDisplay` with natively spawned threads and not
//! Rayon. Each thread progresses at its own random pace.

use rand::Rng;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use threadbars::MultiBarDisplay;
use tracing_subscriber::EnvFilter;

const THREADS: usize = 4;
const STEPS: u32 = 200;

fn main() -> std::thread::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    println!("Starting bars...");

    // Unlike with Rayon, we need to use an `Arc` here to allow the `move`s
    // below to work.
    let display = Arc::new(Mutex::new(MultiBarDisplay::stdout(THREADS, 50)));

    let children: Vec<_> = (0..THREADS)
        .map(|id| {
            let d = display.clone();
            std::thread::spawn(move || {
                let worker = d.lock().unwrap().worker(id).unwrap();

                // Determine how fast our thread progresses.
                let wait = rand::thread_rng().gen_range(5..=25);

                for step in 1..=STEPS {
                    let percent = f64::from(step) / f64::from(STEPS) * 100.0;
                    d.lock().unwrap().update(&worker, percent).unwrap();
                    std::thread::sleep(Duration::from_millis(wait));
                }
            })
        })
        .collect();

    for child in children {
        child.join()?;
    }

    display.lock().unwrap().release().unwrap();
    println!("Complete!");
    Ok(())
}
