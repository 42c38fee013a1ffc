use std::path::PathBuf;

use crate::grouping::EmptyPolicy;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Console,
    File(PathBuf),
}

impl From<Option<PathBuf>> for OutputTarget {
    fn from(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => OutputTarget::File(path),
            None => OutputTarget::Console,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub input: PathBuf,
    pub empty_policy: EmptyPolicy,
    pub output: OutputTarget,
}

impl RunConfig {
    pub fn new(input: PathBuf, empty_flag: &str, output: Option<PathBuf>) -> Self {
        RunConfig {
            input,
            empty_policy: EmptyPolicy::from_flag(empty_flag),
            output: output.into(),
        }
    }
}
