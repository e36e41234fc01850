use thiserror::Error;

#[derive(Debug, Error)]
pub enum FilterError {
    #[error("Failed to run {command}: {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },

    #[error("{command} exited with {status}")]
    CommandFailed {
        command: String,
        status: std::process::ExitStatus,
    },
}

pub type Result<T> = std::result::Result<T, FilterError>;
