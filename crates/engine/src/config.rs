use derive_builder::Builder;

/// Default number of lines the work queue may hold before producers block.
pub const DEFAULT_QUEUE_CAPACITY: usize = 10_000;

/// Default number of ranked entries reported after a run.
pub const DEFAULT_TOP_K: usize = 10;

/// Worker-pool and ranking settings for a single run.
///
/// The pool is split roughly evenly between file readers (producers) and
/// tokenizer/counter workers (consumers), sized from the available hardware
/// parallelism unless overridden.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default = "default_producers()")]
    pub producers: usize,
    #[builder(default = "default_consumers()")]
    pub consumers: usize,
    #[builder(default = "DEFAULT_QUEUE_CAPACITY")]
    pub queue_capacity: usize,
    #[builder(default = "DEFAULT_TOP_K")]
    pub top_k: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            producers: default_producers(),
            consumers: default_consumers(),
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            top_k: DEFAULT_TOP_K,
        }
    }
}

impl Config {
    /// Reject settings the worker pool cannot run with.
    pub(crate) fn validate(&self) -> crate::error::Result<()> {
        if self.producers == 0 {
            return Err(crate::error::EngineError::Config(
                "at least one producer is required".into(),
            ));
        }
        if self.consumers == 0 {
            return Err(crate::error::EngineError::Config(
                "at least one consumer is required".into(),
            ));
        }
        if self.queue_capacity == 0 {
            return Err(crate::error::EngineError::Config(
                "queue capacity must be non-zero".into(),
            ));
        }
        Ok(())
    }
}

fn default_producers() -> usize {
    (num_cpus::get() / 2).max(1)
}

fn default_consumers() -> usize {
    let cores = num_cpus::get();
    (cores - cores / 2).max(1)
}
