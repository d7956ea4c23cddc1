//! Error types for the demo widgets and the server binary

/// Errors raised by the simulated chat, lead finder and wizard flows
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DemoError {
    #[error("Input is empty")]
    EmptyInput,

    #[error("All questions have already been answered")]
    WizardComplete,

    #[error("Export failed: {0}")]
    ExportFailed(String),
}

/// Errors that abort server startup
#[cfg(feature = "ssr")]
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid site configuration: {0}")]
    Configuration(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_error_messages() {
        assert_eq!(DemoError::EmptyInput.to_string(), "Input is empty");
        assert_eq!(
            DemoError::ExportFailed("no document".to_string()).to_string(),
            "Export failed: no document"
        );
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_server_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::AddrInUse, "port taken");
        let err: ServerError = io.into();
        assert!(matches!(err, ServerError::Io(_)));
        assert_eq!(err.to_string(), "I/O error: port taken");
    }
}
