use std::sync::Mutex;
use std::time::Instant;
use env_logger::{Builder, Env, Target};

/// Global timestamp for delta calculation
static LAST_LOG: Mutex<Option<Instant>> = Mutex::new(None);

#[cfg(debug_assertions)]
const DEFAULT_FILTER: &str = "debug";
#[cfg(not(debug_assertions))]
const DEFAULT_FILTER: &str = "info";

/// Initialize the logger with delta timestamps.
///
/// `RUST_LOG` overrides the default filter.
pub fn init() {
    Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER))
        .target(Target::Stdout)
        .format(|buf, record| {
            use std::io::Write;

            writeln!(
                buf,
                "{} [+{} ms] [{}] - {}",
                chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f"),
                delta_ms(Instant::now()),
                record.level(),
                record.args()
            )
        })
        .init();
}

/// Milliseconds since the previous log line, 0 for the first
fn delta_ms(now: Instant) -> u128 {
    let Ok(mut last) = LAST_LOG.lock() else {
        return 0;
    };
    let delta = last.map(|t| now.duration_since(t).as_millis()).unwrap_or(0);
    *last = Some(now);
    delta
}
