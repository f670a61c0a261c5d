//! Reverses a sentence twice, then tries the same with bytes that are not
//! valid UTF-8 to show that they come back untouched.
//!
//! Run with
//!
//! ```bash
//! RUST_LOG=runeflip=debug cargo run -p runeflip --example reverse_demo
//! ```

use runeflip::report::RoundTrip;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}

fn main() {
    init_logging();

    let input = "The quick brown fox jumped over the lazy dog";
    print!("{}", RoundTrip::new(input));

    println!("--------------------------");

    // "ab" followed by the first two bytes of "日".
    let truncated: &[u8] = b"ab\xe6\x97";
    print!("{}", RoundTrip::new(truncated));
}
