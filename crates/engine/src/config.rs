//! Engine configuration

use weft_sinks::SinkTarget;

use crate::queue::DEFAULT_QUEUE_THRESHOLD;

/// Environment variable consulted for the sink-selection string when no
/// explicit output is configured
pub const OUTPUT_ENV: &str = "WEFT_LOG";

/// Configuration for the trace engine
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Sink-selection string; `None` falls back to the `WEFT_LOG`
    /// environment variable (empty/unset selects the default file name)
    pub output: Option<String>,

    /// Queue depth at which producers stall
    pub queue_threshold: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            output: None,
            queue_threshold: DEFAULT_QUEUE_THRESHOLD,
        }
    }
}

impl EngineConfig {
    /// Set an explicit sink-selection string (overrides the environment)
    #[must_use]
    pub fn with_output(mut self, spec: impl Into<String>) -> Self {
        self.output = Some(spec.into());
        self
    }

    /// Set the backpressure threshold
    #[must_use]
    pub fn with_queue_threshold(mut self, threshold: usize) -> Self {
        self.queue_threshold = threshold;
        self
    }

    /// Resolve the sink target from explicit output or the environment
    pub fn resolve_target(&self) -> SinkTarget {
        let spec = match &self.output {
            Some(spec) => spec.clone(),
            None => std::env::var(OUTPUT_ENV).unwrap_or_default(),
        };
        SinkTarget::from_spec(&spec)
    }
}
