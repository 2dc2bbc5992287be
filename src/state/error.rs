//! State management-specific error types.

/// Errors that can occur during state operations.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// Checklist not loaded yet
    #[error("Checklist not loaded")]
    #[allow(dead_code)]
    ChecklistNotLoaded,

    /// Selected item out of bounds
    #[error("Selection out of bounds: {index}")]
    #[allow(dead_code)]
    SelectionOutOfBounds { index: usize },

    /// State lock timeout
    #[error("State lock timeout")]
    #[allow(dead_code)]
    LockTimeout,

    /// Generic state error
    #[error("State error: {0}")]
    #[allow(dead_code)]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_error_display() {
        let error = StateError::ChecklistNotLoaded;
        assert!(error.to_string().contains("not loaded"));

        let error = StateError::SelectionOutOfBounds { index: 42 };
        assert!(error.to_string().contains("42"));

        let error = StateError::LockTimeout;
        assert!(error.to_string().contains("State lock timeout"));

        let error = StateError::Other("Generic error".to_string());
        assert!(error.to_string().contains("State error"));
        assert!(error.to_string().contains("Generic error"));
    }
}
