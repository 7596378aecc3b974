// crates/cli/src/presentation.rs
use crate::options::OutputFormat;
use wordfreq_engine::report::RunReport;

pub fn print_report(report: &RunReport, format: OutputFormat) {
    match format {
        OutputFormat::Table => print_table(report),
        OutputFormat::Json => print_json(report),
    }
}

fn print_table(report: &RunReport) {
    println!("{:<10}{:<20}{:<10}", "RANK", "KEY WORDS", "FREQUENCY");
    for (rank, entry) in report.ranking.iter().enumerate() {
        println!("{:<10}{:<20}{:<10}", rank + 1, entry.word, entry.count);
    }

    println!();
    println!(
        "[wordfreq] Completed: {} files, {} words in {} ms.",
        report.files,
        report.total_words,
        report.elapsed.as_millis()
    );
}

fn print_json(report: &RunReport) {
    let skipped: Vec<String> = report
        .errors
        .iter()
        .map(|(path, _)| path.display().to_string())
        .collect();
    let value = serde_json::json!({
        "ranking": report.ranking,
        "files": report.files,
        "distinct_words": report.distinct_words,
        "total_words": report.total_words,
        "skipped": skipped,
        "elapsed_ms": report.elapsed.as_millis() as u64,
    });
    if let Ok(json) = serde_json::to_string_pretty(&value) {
        println!("{json}");
    }
}
