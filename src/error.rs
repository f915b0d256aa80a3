use crate::app::PrefsError;
use ggez::GameError;
use std::{
    error::Error,
    fmt,
    fmt::{Debug, Display, Formatter},
};

#[derive(Debug)]
pub enum AppErrorType {
    GameError(GameError),
    PrefsError(PrefsError),
}

impl Display for AppErrorType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorType::GameError(e) => write!(f, "ggez: {}", e),
            AppErrorType::PrefsError(e) => write!(f, "invalid preferences: {}", e),
        }
    }
}

/// The second member contains a trace in reverse order
#[must_use]
pub struct AppError(AppErrorType, Vec<String>);

impl From<GameError> for AppError {
    fn from(e: GameError) -> Self {
        Self(AppErrorType::GameError(e), vec![])
    }
}

impl From<PrefsError> for AppError {
    fn from(e: PrefsError) -> Self {
        Self(AppErrorType::PrefsError(e), vec![])
    }
}

impl AppError {
    pub fn with_trace_step<S: ToString>(mut self, s: S) -> Self {
        self.1.push(s.to_string());
        self
    }

    #[cfg(test)]
    pub fn kind(&self) -> &AppErrorType {
        &self.0
    }
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Error: {}\nTrace:", self.0)?;
        for t in (self.1).iter().rev() {
            writeln!(f, " in {}", t)?;
        }
        Ok(())
    }
}

// main() returning Err prints this
impl Debug for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(self, f)
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.0 {
            AppErrorType::GameError(e) => Some(e),
            AppErrorType::PrefsError(e) => Some(e),
        }
    }
}

pub type AppResult<T = ()> = Result<T, AppError>;

pub trait AppErrorConversion {
    fn with_trace_step<S: ToString>(self, s: S) -> Self;
}

impl<T> AppErrorConversion for AppResult<T> {
    fn with_trace_step<S: ToString>(self, s: S) -> Self {
        self.map_err(|e| e.with_trace_step(s.to_string()))
    }
}

#[test]
fn test_trace_is_printed_innermost_last() {
    let res: AppResult = Err(PrefsError::ZeroFps.into());
    let err = res
        .with_trace_step("Prefs::validate")
        .with_trace_step("main")
        .unwrap_err();

    assert!(matches!(err.kind(), AppErrorType::PrefsError(PrefsError::ZeroFps)));
    let printed = err.to_string();
    assert!(
        printed.starts_with("Error: invalid preferences: fps must be positive\n"),
        "{}",
        printed
    );
    assert_eq!(err.source().unwrap().to_string(), "fps must be positive");
    let main = printed.find(" in main").unwrap();
    let validate = printed.find(" in Prefs::validate").unwrap();
    assert!(main < validate, "{}", printed);
}
