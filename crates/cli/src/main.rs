use clap::Parser;
use std::process::ExitCode;
use wordfreq_cli::app;
use wordfreq_cli::args::Args;
use wordfreq_cli::config::Config;

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    let config = Config::from(&args);
    let format = args.format;

    if args.paths.is_empty() {
        match app::prompt_loop(&config, format) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Application Error: {e}");
                ExitCode::FAILURE
            }
        }
    } else {
        let mut ok = true;
        for path in &args.paths {
            ok &= app::execute(path, &config, format);
        }
        if ok {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}
