//! Tracing subscriber setup for binaries embedding the client

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is not set
pub const DEFAULT_FILTER: &str = "products_client=info";

/// Install a global fmt subscriber
///
/// `RUST_LOG` takes precedence over [`DEFAULT_FILTER`]. Returns an error
/// rather than panicking when a subscriber is already installed.
pub fn init_tracing(json: bool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    }
}
