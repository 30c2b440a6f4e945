use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    ArgMissing,
    FileUnreadable(String),
    NoInput,
    StrategyInit(String),
    DeviceError(String),
    BufferOverflow { found: usize, capacity: usize },
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::ArgMissing => write!(f, "usage: structureseedcracker <constraints-file>"),
            AppError::FileUnreadable(path) => write!(f, "could not read constraints file: {path}"),
            AppError::NoInput => write!(f, "no constraints or pillar seed parsed from input"),
            AppError::StrategyInit(reason) => write!(f, "could not initialize search strategy: {reason}"),
            AppError::DeviceError(reason) => write!(f, "device error: {reason}"),
            AppError::BufferOverflow { found, capacity } => write!(
                f,
                "found {found} seeds but the output buffer holds only {capacity}; truncating"
            ),
        }
    }
}

impl std::error::Error for AppError {}

impl AppError {
    /// `None` means "continue running" (a warning, not a fatal error).
    pub const fn exit_code(&self) -> Option<i32> {
        match self {
            AppError::ArgMissing
            | AppError::FileUnreadable(_)
            | AppError::NoInput
            | AppError::StrategyInit(_)
            | AppError::DeviceError(_) => Some(1),
            AppError::BufferOverflow { .. } => None,
        }
    }
}
