use crate::config::Config;
use log::LevelFilter;
use simplelog::{self, ConfigBuilder};

/// Dependency modules silenced unless running at Trace level. The HTTP server stack and
/// both outbound clients (Gemini over reqwest, SMTP over lettre) log every connection.
const FILTERED_MODULES: &[&str] = &[
    "hyper",
    "h2",
    "tower",
    "tower_http",
    "axum",
    "reqwest",
    "rustls",
    "lettre",
];

pub struct Logger {}

impl Logger {
    /// Initializes the global terminal logger from the configured level filter.
    ///
    /// Dependency logs are only shown at Trace level.
    pub fn init_logger(config: &Config) {
        let level = config.log_level_filter;
        let log_config = Self::build_log_config(Self::should_filter_dependencies(level));

        simplelog::TermLogger::init(
            level,
            log_config,
            simplelog::TerminalMode::Mixed,
            simplelog::ColorChoice::Auto,
        )
        .expect("Failed to start simplelog");
    }

    fn should_filter_dependencies(level: LevelFilter) -> bool {
        level != LevelFilter::Trace
    }

    fn build_log_config(apply_filters: bool) -> simplelog::Config {
        let mut builder = ConfigBuilder::new();
        builder.set_time_format_rfc3339();

        if apply_filters {
            for module in FILTERED_MODULES {
                builder.add_filter_ignore_str(module);
            }
        }

        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filtered_modules_contains_outbound_client_crates() {
        for module in ["hyper", "tower_http", "axum", "reqwest", "lettre"] {
            assert!(
                FILTERED_MODULES.contains(&module),
                "{module} should be filtered"
            );
        }
    }

    #[test]
    fn test_filtered_modules_does_not_hide_workspace_crates() {
        for module in ["domain", "web", "service", "meeting_summarizer"] {
            assert!(
                !FILTERED_MODULES.contains(&module),
                "{module} should never be filtered"
            );
        }
    }

    #[test]
    fn test_only_trace_shows_dependency_logs() {
        assert!(!Logger::should_filter_dependencies(LevelFilter::Trace));
        for level in [
            LevelFilter::Off,
            LevelFilter::Error,
            LevelFilter::Warn,
            LevelFilter::Info,
            LevelFilter::Debug,
        ] {
            assert!(
                Logger::should_filter_dependencies(level),
                "{level} should filter dependencies"
            );
        }
    }

    #[test]
    fn test_build_log_config_with_and_without_filters() {
        let _filtered = Logger::build_log_config(true);
        let _unfiltered = Logger::build_log_config(false);
    }
}
