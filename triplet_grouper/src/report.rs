//! Text rendering of a [`Grouping`] and the sinks it is written to.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};

use log::{error, warn};

use crate::config::OutputTarget;
use crate::grouping::Grouping;
use crate::utils::error::Error;

pub fn render_lines(grouping: &Grouping) -> Vec<String> {
    let mut lines = vec![
        format!("Total groups: {}", grouping.num_groups()),
        format!(
            "Total groups with size over 1: {}",
            grouping.num_multi_groups()
        ),
    ];
    for (i, group) in grouping.groups().iter().enumerate() {
        lines.push(format!("Group №{}", i + 1));
        lines.extend(group.iter().cloned());
    }
    lines
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WriteSummary {
    pub written: usize,
    pub failures: Vec<Error>,
}

/// Writes the report line by line. A failed line is logged and recorded, and
/// the remaining lines are still attempted.
pub fn write_report<W: Write>(grouping: &Grouping, writer: &mut W) -> WriteSummary {
    let mut summary = WriteSummary::default();
    for (i, line) in render_lines(grouping).iter().enumerate() {
        let mut buf = String::with_capacity(line.len() + 1);
        buf.push_str(line);
        buf.push('\n');
        match writer.write_all(buf.as_bytes()) {
            Ok(()) => summary.written += 1,
            Err(e) => {
                let e = Error::Write(e.to_string()).prepend(&format!("report line {}", i + 1));
                error!("{}", e);
                summary.failures.push(e);
            }
        }
    }
    if let Err(e) = writer.flush() {
        let e = Error::Write(e.to_string()).prepend("flush");
        error!("{}", e);
        summary.failures.push(e);
    }
    summary
}

pub enum Sink {
    Console(io::Stdout),
    File(File),
}

impl Write for Sink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Sink::Console(s) => s.write(buf),
            Sink::File(f) => f.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Sink::Console(s) => s.flush(),
            Sink::File(f) => f.flush(),
        }
    }
}

/// Opens the sink for `target`. A missing output file is created and an
/// existing one truncated.
pub fn open_sink(target: &OutputTarget) -> Result<Sink, Error> {
    match target {
        OutputTarget::Console => Ok(Sink::Console(io::stdout())),
        OutputTarget::File(path) => {
            let existed = path.exists();
            let file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(path)
                .map_err(|e| Error::OutputUnavailable {
                    path: path.clone(),
                    message: e.to_string(),
                })?;
            if !existed {
                if let Err(e) = writeln!(io::stdout(), "Created {}", path.display()) {
                    warn!("cannot print notice for {}: {}", path.display(), e);
                }
            }
            Ok(Sink::File(file))
        }
    }
}

/// Like [`open_sink`], but falls back to the console when the file cannot be
/// opened.
pub fn open_sink_or_console(target: &OutputTarget) -> Sink {
    match open_sink(target) {
        Ok(sink) => sink,
        Err(e) => {
            warn!("{}; writing to the console instead", e);
            Sink::Console(io::stdout())
        }
    }
}
