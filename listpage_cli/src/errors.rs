use std::process::ExitCode;

/// Failures of a CLI command. Details are printed where they happen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliError {
    FileError,
    InputError,
    QueryError,
}

impl CliError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            CliError::FileError => ExitCode::from(2),
            CliError::InputError => ExitCode::from(3),
            CliError::QueryError => ExitCode::from(4),
        }
    }
}
