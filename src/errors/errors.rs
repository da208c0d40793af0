use std::{fmt::Display, io, rc::Rc};

use thiserror::Error;

/// A run-aborting failure, tagged with the source it happened on.
#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    source_name: Rc<String>,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, source_name: Rc<String>) -> Self {
        Error {
            internal_error: error_impl,
            source_name,
        }
    }

    pub fn could_not_open(source_name: Rc<String>, error: &io::Error) -> Self {
        Error::new(
            ErrorImpl::CouldNotOpen {
                reason: error.to_string(),
                not_found: error.kind() == io::ErrorKind::NotFound,
            },
            source_name,
        )
    }

    pub fn could_not_read(source_name: Rc<String>, error: &io::Error) -> Self {
        Error::new(
            ErrorImpl::CouldNotRead {
                reason: error.to_string(),
            },
            source_name,
        )
    }

    pub fn get_source_name(&self) -> &str {
        &self.source_name
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::CouldNotOpen { .. } => "CouldNotOpen",
            ErrorImpl::CouldNotRead { .. } => "CouldNotRead",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::CouldNotOpen { not_found: true, .. } => ErrorTip::Suggestion(format!(
                "File `{}` does not exist, check the path",
                self.source_name
            )),
            ErrorImpl::CouldNotOpen { .. } => ErrorTip::None,
            ErrorImpl::CouldNotRead { .. } => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.source_name, self.internal_error)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("could not open source: {reason}")]
    CouldNotOpen { reason: String, not_found: bool },
    #[error("could not read source: {reason}")]
    CouldNotRead { reason: String },
}
