/// Process-level configuration for Rosette.
#[derive(Debug, Clone)]
pub struct Config {
    /// Filter directive used when `RUST_LOG` is not set.
    pub log_filter: String,
    pub profiling: ProfilingMode,
}

impl Config {
    /// Default filter: Rosette crates at `debug`, everything else at `warn`.
    pub const DEFAULT_LOG_FILTER: &'static str =
        "warn,rosette_core=debug,rosette_dom=debug,rosette_host=debug";

    /// Replace the fallback log filter.
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Select the profiling mode.
    pub fn with_profiling(mut self, profiling: ProfilingMode) -> Self {
        self.profiling = profiling;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_filter: Self::DEFAULT_LOG_FILTER.to_string(),
            profiling: ProfilingMode::Off,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfilingMode {
    /// Profiling scopes are compiled in but not recorded
    Off,
    /// Scopes are recorded and can be read through `puffin::GlobalProfiler`
    On,
    /// Scopes are recorded and served to `puffin_viewer` on the given port
    /// (requires the `profiling-server` feature)
    WithServer { port: u16 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.log_filter, Config::DEFAULT_LOG_FILTER);
        assert_eq!(config.profiling, ProfilingMode::Off);
    }

    #[test]
    fn test_builder_overrides() {
        let config = Config::default()
            .with_log_filter("trace")
            .with_profiling(ProfilingMode::WithServer { port: 9000 });
        assert_eq!(config.log_filter, "trace");
        assert_eq!(config.profiling, ProfilingMode::WithServer { port: 9000 });
    }
}
