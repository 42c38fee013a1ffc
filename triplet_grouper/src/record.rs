//! Three-field records and the line parser that produces them.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

pub const NUM_FIELDS: usize = 3;

/// Separator placed between fields when a record is displayed.
pub const DISPLAY_SEPARATOR: char = ':';

static LINE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^(".*");(".*");(".*")$"#).expect("line pattern is valid"));

/// A parsed line. Fields keep their surrounding double quotes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Record {
    index: usize,
    fields: [String; NUM_FIELDS],
}

impl Record {
    pub fn new(index: usize, fields: [String; NUM_FIELDS]) -> Self {
        Record { index, fields }
    }

    /// Position of the record among the accepted lines, starting at 0.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn field(&self, p: usize) -> &str {
        &self.fields[p]
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{sep}{}{sep}{}",
            self.fields[0],
            self.fields[1],
            self.fields[2],
            sep = DISPLAY_SEPARATOR
        )
    }
}

/// Matches `line` against `"<f0>";"<f1>";"<f2>"`. The whole line has to be
/// consumed by the match, otherwise `None` is returned.
pub fn parse_line(line: &str, index: usize) -> Option<Record> {
    let caps = LINE_PATTERN.captures(line)?;
    let field = |i: usize| caps.get(i).map(|m| m.as_str().to_string());
    Some(Record::new(index, [field(1)?, field(2)?, field(3)?]))
}
