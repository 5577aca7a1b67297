use thiserror::Error;

/// Why a new category was rejected. The `Display` text is shown to the user as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CategoryError {
    #[error("Please enter a category name")]
    Empty,

    #[error("Category already exists")]
    Duplicate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_match_toast_text() {
        assert_eq!(CategoryError::Empty.to_string(), "Please enter a category name");
        assert_eq!(CategoryError::Duplicate.to_string(), "Category already exists");
    }
}
