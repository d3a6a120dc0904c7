use std::time::Duration;
use threadbars::config::SINGLE_BAR_WIDTH;
use threadbars::SingleBar;
use tracing_subscriber::EnvFilter;

const STEPS: u64 = 500;

fn main() -> threadbars::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    println!("\nSINGLE PROGRESS MONITOR TEST:\n");

    let mut single = SingleBar::stdout(SINGLE_BAR_WIDTH);

    for step in 0..=STEPS {
        single.update(step, STEPS)?;
        std::thread::sleep(Duration::from_millis(20));
    }

    single.release()
}
