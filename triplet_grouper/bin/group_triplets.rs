use std::path::PathBuf;

use ansi_term::Colour;
use clap::Parser;
use log::info;
use triplet_grouper::config::RunConfig;

#[derive(Parser, Debug)]
#[command(author, version, about = "Groups lines that share a field value", long_about = None)]
pub struct GroupTripletsArgs {
    /// Input file, one `"a";"b";"c"` record per line
    pub input: PathBuf,

    /// 1 if the empty value `""` should never connect lines
    pub empty_flag: String,

    /// Output file; the report goes to stdout when omitted
    pub output: Option<PathBuf>,

    /// Log debug messages, including every rejected line
    #[arg(short, long)]
    pub verbose: bool,
}

fn start(args: GroupTripletsArgs) -> anyhow::Result<()> {
    let config = RunConfig::new(args.input, &args.empty_flag, args.output);
    let summary = triplet_grouper::run(&config)?;
    // each failed write has already been logged by the report writer
    info!(
        "{} report lines written, {} writes failed",
        summary.written,
        summary.failures.len()
    );
    Ok(())
}

fn main() {
    let args = GroupTripletsArgs::parse();
    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::builder()
        .filter_level(log_level)
        .parse_default_env()
        .init();

    if let Err(e) = start(args) {
        eprintln!("{}", Colour::Red.paint(e.to_string()));
        std::process::exit(1);
    }
}
