use std::fmt::Display;

#[derive(Debug)]
pub struct Error {
    pub message: String,
    pub kind: ErrorKind,
}

/// Terminal failures only; per-file copy problems are reported as
/// outcomes by the distributor and never surface here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Setup,
    Interrupted,
}

impl<T: Display> From<T> for Error {
    fn from(err: T) -> Self {
        Error {
            message: format!("{}", err),
            kind: ErrorKind::Setup,
        }
    }
}

impl Error {
    pub fn interrupted(message: &str) -> Error {
        Error {
            message: String::from(message),
            kind: ErrorKind::Interrupted,
        }
    }
}

#[macro_export]
macro_rules! setup_error {
    ($($arg:tt)*) => {{
        let message = format!($($arg)+);
        let error = $crate::error::Error::from(message);
        error
    }}
}
