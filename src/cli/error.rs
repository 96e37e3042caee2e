use skyarea::SkyAreaError;
use std::fmt;

#[derive(Debug)]
pub enum CliError {
    /// Print message to stdout and exit with code 0 (help/version).
    Exit(String),
    /// Print message to stderr and exit with code 1.
    Message(String),
}

pub type CliResult<T> = Result<T, CliError>;

impl From<String> for CliError {
    fn from(value: String) -> Self {
        Self::Message(value)
    }
}

impl From<&str> for CliError {
    fn from(value: &str) -> Self {
        Self::Message(value.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Message(value.to_string())
    }
}

impl From<SkyAreaError> for CliError {
    fn from(value: SkyAreaError) -> Self {
        Self::Message(value.to_string())
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Exit(msg) | CliError::Message(msg) => write!(f, "{}", msg),
        }
    }
}
