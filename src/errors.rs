#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCodes {
    IngestionError,
    SourceOpenError,
    SourceReadError,
    ValidationError,
}

impl ErrorCodes {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCodes::IngestionError => "Ingestion Error",
            ErrorCodes::SourceOpenError => "Source Open Error",
            ErrorCodes::SourceReadError => "Source Read Error",
            ErrorCodes::ValidationError => "Validation Error",
        }
    }
}

// Cloned once per caller attached to a failed load.
#[derive(Debug, Clone, PartialEq)]
pub struct Errors {
    pub code: ErrorCodes,
    pub message: Option<String>,
}

impl Errors {
    pub fn new(code: ErrorCodes) -> Self {
        Self {
            code,
            message: None,
        }
    }

    pub fn with_message(mut self, message: String) -> Self {
        self.message = Some(message);
        self
    }

    /// Detail text without the code prefix, used in HTTP error bodies.
    pub fn detail(&self) -> String {
        match &self.message {
            Some(message) => message.clone(),
            None => self.code.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for Errors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.message {
            Some(message) => write!(f, "{}: {}", self.code.as_str(), message),
            None => write!(f, "{}", self.code.as_str()),
        }
    }
}

impl std::error::Error for Errors {}

pub type Result<T> = std::result::Result<T, Errors>;

#[cfg(test)]
mod tests {
    use super::{ErrorCodes, Errors};

    #[test]
    fn test_display_with_and_without_message() {
        let bare = Errors::new(ErrorCodes::ValidationError);
        assert_eq!(bare.to_string(), "Validation Error");
        assert_eq!(bare.detail(), "Validation Error");

        let detailed = Errors::new(ErrorCodes::SourceOpenError)
            .with_message("No such file or directory (os error 2)".to_string());
        assert_eq!(
            detailed.to_string(),
            "Source Open Error: No such file or directory (os error 2)"
        );
        assert_eq!(detailed.detail(), "No such file or directory (os error 2)");
    }
}
