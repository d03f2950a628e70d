use clap::Parser;
use log::LevelFilter;

use pic_to_ansi::app;
use pic_to_ansi::cli::Args;

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    match app::run(&args) {
        Ok(summary) => {
            if let Some(path) = summary.output {
                println!(
                    "Wrote output file: {} (format={})",
                    path.display(),
                    summary.format
                );
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
