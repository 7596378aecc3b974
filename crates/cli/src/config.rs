// crates/cli/src/config.rs
use crate::args::Args;
pub use wordfreq_engine::config::{Config, ConfigBuilder};

impl From<&Args> for Config {
    fn from(args: &Args) -> Self {
        let mut builder = ConfigBuilder::default();
        // Absent flags fall through to the hardware-derived defaults.
        if let Some(producers) = args.producers {
            builder.producers(producers);
        }
        if let Some(consumers) = args.consumers {
            builder.consumers(consumers);
        }
        builder
            .queue_capacity(args.queue_capacity)
            .top_k(args.top)
            .build()
            .expect("Failed to build config")
    }
}
