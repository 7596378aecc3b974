use crate::options::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

/// Count word frequencies across text files with a bounded-queue
/// producer/consumer worker pool.
#[derive(Debug, Parser)]
#[command(name = "wordfreq", version, about)]
pub struct Args {
    /// Directories or .txt files to count. Starts the interactive prompt
    /// when omitted.
    pub paths: Vec<PathBuf>,

    /// Number of file-reading workers (default: half the CPU cores)
    #[arg(long, value_name = "N")]
    pub producers: Option<usize>,

    /// Number of counting workers (default: the remaining CPU cores)
    #[arg(long, value_name = "N")]
    pub consumers: Option<usize>,

    /// Maximum number of lines buffered between readers and counters
    #[arg(
        long,
        value_name = "LINES",
        default_value_t = wordfreq_engine::config::DEFAULT_QUEUE_CAPACITY
    )]
    pub queue_capacity: usize,

    /// How many of the most frequent words to report
    #[arg(
        short = 'k',
        long = "top",
        value_name = "K",
        default_value_t = wordfreq_engine::config::DEFAULT_TOP_K
    )]
    pub top: usize,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_engine_constants() {
        let args = Args::try_parse_from(["wordfreq", "."]).unwrap();
        assert_eq!(args.paths, vec![PathBuf::from(".")]);
        assert_eq!(
            args.queue_capacity,
            wordfreq_engine::config::DEFAULT_QUEUE_CAPACITY
        );
        assert_eq!(args.top, wordfreq_engine::config::DEFAULT_TOP_K);
        assert_eq!(args.format, OutputFormat::Table);
        assert!(args.producers.is_none());
    }

    #[test]
    fn worker_overrides_parse() {
        let args =
            Args::try_parse_from(["wordfreq", "--producers", "2", "--consumers", "6", "-k", "5"])
                .unwrap();
        assert_eq!(args.producers, Some(2));
        assert_eq!(args.consumers, Some(6));
        assert_eq!(args.top, 5);
    }
}
