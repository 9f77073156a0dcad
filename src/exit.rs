use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    InvalidArgs,
    InputFailed,
    OutputFailed,
}

impl ExitCode {
    pub const fn as_i32(self) -> i32 {
        match self {
            ExitCode::InvalidArgs => 2,
            ExitCode::InputFailed => 10,
            ExitCode::OutputFailed => 20,
        }
    }
}

#[derive(Debug)]
pub struct ExitError {
    pub code: ExitCode,
    pub err: anyhow::Error,
}

impl ExitError {
    pub fn new(code: ExitCode, err: anyhow::Error) -> Self {
        Self { code, err }
    }
}

impl fmt::Display for ExitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.err.fmt(f)
    }
}

impl std::error::Error for ExitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.err.source()
    }
}

pub fn error_code(err: &anyhow::Error) -> ExitCode {
    match err.downcast_ref::<ExitError>() {
        Some(exit) => exit.code,
        None => ExitCode::InputFailed,
    }
}

pub fn exit_code(err: &anyhow::Error) -> i32 {
    error_code(err).as_i32()
}

pub fn invalid_args(message: impl Into<String>) -> anyhow::Error {
    ExitError::new(ExitCode::InvalidArgs, anyhow::anyhow!(message.into())).into()
}

pub fn input_err(err: anyhow::Error) -> anyhow::Error {
    ExitError::new(ExitCode::InputFailed, err).into()
}

pub fn output_err(err: anyhow::Error) -> anyhow::Error {
    ExitError::new(ExitCode::OutputFailed, err).into()
}
