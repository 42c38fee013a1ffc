use std::path::PathBuf;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    #[error("input file {} does not exist", .0.display())]
    InputUnavailable(PathBuf),

    #[error("error occurred during reading {}: {}", .path.display(), .message)]
    Read { path: PathBuf, message: String },

    #[error("cannot open output file {}: {}", .path.display(), .message)]
    OutputUnavailable { path: PathBuf, message: String },

    #[error("error occurred during writing: {0}")]
    Write(String),

    #[error("{0}")]
    UserError(String),
}

impl Error {
    pub fn prepend(&self, prefix: &str) -> Error {
        match self {
            Error::InputUnavailable(_) => self.clone(),
            Error::Read { path, message } => Error::Read {
                path: path.clone(),
                message: format!("{}: {}", prefix, message),
            },
            Error::OutputUnavailable { path, message } => Error::OutputUnavailable {
                path: path.clone(),
                message: format!("{}: {}", prefix, message),
            },
            Error::Write(s) => Error::Write(format!("{}: {}", prefix, s)),
            Error::UserError(s) => Error::UserError(format!("{}: {}", prefix, s)),
        }
    }
}
