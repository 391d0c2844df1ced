use crate::primitives::*;
use std::sync::OnceLock;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Global logger instance - ensures single initialization
static GLOBAL_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Handle to the process-wide tracing subscriber
#[derive(Debug)]
pub struct Logger {
    config: LoggerConfig,
}

impl Logger {
    /// Install the global tracing subscriber
    pub fn init(config: LoggerConfig) -> Result<&'static Self, LoggerError> {
        if GLOBAL_LOGGER.get().is_some() {
            return Err(LoggerError::AlreadyInitialized);
        }

        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(Self::filter_directive(config.level)));

        let fmt_layer = match (config.output, config.format) {
            (LogOutput::Stderr, LogFormat::Text) => fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(config.ansi)
                .compact()
                .boxed(),
            (LogOutput::Stderr, LogFormat::Json) => fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .json()
                .boxed(),
            (LogOutput::Stderr, LogFormat::Yaml) => fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(config.ansi)
                .pretty()
                .boxed(),
            (LogOutput::Stdout, LogFormat::Text) => fmt::layer()
                .with_writer(std::io::stdout)
                .with_ansi(config.ansi)
                .compact()
                .boxed(),
            (LogOutput::Stdout, LogFormat::Json) => fmt::layer()
                .with_writer(std::io::stdout)
                .with_ansi(false)
                .json()
                .boxed(),
            (LogOutput::Stdout, LogFormat::Yaml) => fmt::layer()
                .with_writer(std::io::stdout)
                .with_ansi(config.ansi)
                .pretty()
                .boxed(),
        };

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
            .map_err(|e| LoggerError::InitializationFailed {
                reason: e.to_string(),
            })?;

        let level = config.level;
        let format = config.format;
        let output = config.output;

        GLOBAL_LOGGER
            .set(Logger { config })
            .map_err(|_| LoggerError::AlreadyInitialized)?;

        tracing::debug!(?level, ?format, ?output, "Logger initialized");

        GLOBAL_LOGGER.get().ok_or(LoggerError::AlreadyInitialized)
    }

    /// Default filter used when `RUST_LOG` is unset.
    ///
    /// Targets match by prefix, so `depgraph` also covers `depgraph_lib`.
    pub fn filter_directive(level: LogLevel) -> String {
        let level = level.as_filter();
        format!("depgraph={level},{level}")
    }

    /// Get reference to the global logger instance
    pub fn global() -> Option<&'static Self> {
        GLOBAL_LOGGER.get()
    }

    /// Check if logger is initialized
    pub fn is_initialized() -> bool {
        GLOBAL_LOGGER.get().is_some()
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}
