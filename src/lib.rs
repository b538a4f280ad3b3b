pub mod config;
pub mod models;
pub mod comparison; // Matcher + trend classifier + categorizer + aggregator
pub mod history; // Latest-pair selection and comparison records
pub mod export; // JSON / CSV export

use tracing_subscriber::EnvFilter;

pub use comparison::{ComparisonEngine, ComparisonReport, DefaultComparisonEngine, Summary};
pub use config::EngineSettings;
pub use models::{ComparisonResult, MeasuredValue, Measurement};

/// Install the global tracing subscriber. `RUST_LOG` overrides the default
/// filter. Calling it twice is a no-op.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .with_writer(std::io::stderr)
        .try_init();
}
