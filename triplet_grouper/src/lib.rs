//! Groups lines of three quoted fields into sets of lines connected by equal
//! values in the same field position, and reports the groups largest first.

pub mod config;
pub mod grouping;
pub mod input;
pub mod record;
pub mod report;
pub mod utils;

use log::info;

use config::RunConfig;
use report::WriteSummary;
use utils::error::Error;

/// Loads the input, groups it and writes the report to the configured sink.
/// Failed report writes are returned in the summary rather than as an error.
pub fn run(config: &RunConfig) -> Result<WriteSummary, Error> {
    let loaded = input::load_records(&config.input)?;
    let grouping = grouping::group_records(&loaded.records, config.empty_policy);
    info!(
        "{} groups, {} with more than one line",
        grouping.num_groups(),
        grouping.num_multi_groups()
    );
    let mut sink = report::open_sink_or_console(&config.output);
    Ok(report::write_report(&grouping, &mut sink))
}
