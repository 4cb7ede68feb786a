use std::sync::Once;

/// Logger configuration.
///
/// An explicit `filter` uses the `env_logger` filter grammar (e.g. "debug",
/// "shamash_engine=debug,wgpu=warn") and takes precedence over the `RUST_LOG`
/// environment variable.
#[derive(Debug, Clone, Default)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
}

static INIT: Once = Once::new();

/// Installs the global `env_logger` backend.
///
/// Safe to call more than once; only the first call takes effect. Call it
/// before any GPU or window setup so adapter selection and surface problems
/// are visible at the default info level.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder =
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));

        if let Some(filter) = &config.env_filter {
            builder.parse_filters(filter);
        }

        builder.init();
        log::debug!("logging initialized");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_twice_is_idempotent() {
        init_logging(LoggingConfig::default());
        // Second call must be a no-op rather than a double-init panic.
        init_logging(LoggingConfig {
            env_filter: Some("debug".to_string()),
        });
    }
}
