use thiserror::Error;

/// An error reported by the host windowing system.
///
/// Carries the raw error code and the OS-provided, human-readable message
/// so it can be shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} (0x{code:08X})")]
pub struct OsError {
    pub code: i32,
    pub message: String,
}

impl OsError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into().trim_end().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_message_and_code() {
        // Arrange
        let err = OsError::new(0x8007_0578_u32 as i32, "Invalid window handle.\r\n");

        // Act
        let text = err.to_string();

        // Assert
        assert_eq!(text, "Invalid window handle. (0x80070578)");
    }
}
