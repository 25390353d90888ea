//! Application error type.
//!
//! One error type flows through every fallible path. The exit code encodes the
//! error class so scripts wrapping the `mmi` binary can distinguish bad input
//! files from bad model arguments:
//!
//! - `2` — I/O and malformed-input errors (files, GeoJSON schema)
//! - `3` — invalid model inputs (negative distance, missing Vs30, bad range)
//! - `4` — internal numeric failure (non-finite result where one was required)

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    /// An I/O or malformed-input error (exit code 2).
    pub fn input(message: impl Into<String>) -> Self {
        Self::new(2, message)
    }

    /// An invalid model argument (exit code 3).
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::new(3, message)
    }

    /// An internal numeric failure (exit code 4).
    pub fn numeric(message: impl Into<String>) -> Self {
        Self::new(4, message)
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
