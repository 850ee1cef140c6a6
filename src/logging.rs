use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global subscriber. `RUST_LOG` wins over `default_directive`;
/// a subscriber installed earlier is left in place.
pub fn init_tracing(default_directive: &str) {
    let default: Directive = default_directive
        .parse()
        .unwrap_or_else(|_| LevelFilter::INFO.into());
    let mut filter = EnvFilter::builder()
        .with_default_directive(default)
        .from_env_lossy();
    for directive in ["tao=warn", "wry=warn"] {
        if let Ok(directive) = directive.parse() {
            filter = filter.add_directive(directive);
        }
    }

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
