// crates/cli/src/app.rs
use crate::error::Result;
use crate::options::OutputFormat;
use crate::presentation;
use std::io::BufRead;
use std::path::Path;
use wordfreq_engine::config::Config;

const INSTRUCT: &str = "Enter the path of a directory or a .txt file, or type exit to quit";

/// Run the engine once over `path` and print the outcome.
///
/// Skipped files go to stderr before the table so the report is the last
/// thing on screen. Returns `false` when the run failed outright.
pub fn execute(path: &Path, config: &Config, format: OutputFormat) -> bool {
    match wordfreq_engine::run(path, config) {
        Ok(report) => {
            for (path, err) in &report.errors {
                eprintln!("Error processing {}: {err}", path.display());
            }
            presentation::print_report(&report, format);
            true
        }
        Err(e) => {
            eprintln!("Error: {e}");
            false
        }
    }
}

/// Interactive loop: one path per line until `exit`/`quit` or EOF.
///
/// Invalid paths are diagnosed and the loop keeps waiting for the next
/// input; every submitted path is a fresh run.
pub fn prompt_loop(config: &Config, format: OutputFormat) -> Result<()> {
    println!(
        "wordfreq v{} · {} concurrent threads are supported.",
        crate::VERSION,
        num_cpus::get()
    );
    println!("{INSTRUCT}");

    for line in std::io::stdin().lock().lines() {
        let line = line?;
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input == "exit" || input == "quit" {
            break;
        }

        execute(Path::new(input), config, format);
        println!();
        println!("{INSTRUCT}");
    }

    Ok(())
}
