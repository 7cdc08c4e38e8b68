/// Error raised by the numeric core when a dataset cannot support the
/// requested fit.
///
/// This is the only failure mode of the fitters: too few points for the
/// chosen method, or inputs for which the least-squares solver cannot
/// produce a finite solution. Ill-conditioned but finite systems do not
/// error; they are absorbed by the rank-tolerant solve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FitError {
    InvalidInput(String),
}

impl FitError {
    /// Dataset has fewer points than the method requires.
    pub fn too_few_points(method: &str, required: usize, actual: usize) -> Self {
        FitError::InvalidInput(format!(
            "{method} requires at least {required} point(s), got {actual}"
        ))
    }
}

impl std::fmt::Display for FitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FitError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl std::error::Error for FitError {}

/// Application-level error carrying a process exit code.
///
/// Exit codes:
/// - 2: I/O or file-format problems
/// - 3: unusable input data (empty file, dataset too small)
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

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl From<FitError> for AppError {
    fn from(err: FitError) -> Self {
        AppError::new(3, err.to_string())
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
