use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Common result type for Folio operations
pub type BoxResult<T> = Result<T, Box<dyn Error>>;

/// Error types for Folio operations
#[derive(Debug)]
pub enum FolioError {
    /// IO error wrapper
    Io(io::Error),
    /// Configuration error
    Config(String),
    /// Persisted document is missing or malformed
    Document(String),
    /// Expertise index or post id that does not exist
    NotFound(String),
    /// Page template parsing or rendering error
    Template(String),
    /// A write to a generated or persisted file failed
    Write {
        path: PathBuf,
        source: io::Error,
    },
    /// Generic error message
    Generic(String),
}

impl FolioError {
    /// Wrap an IO error with the path that was being written
    pub fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        FolioError::Write { path: path.into(), source }
    }

    /// True when the error reports a missing expertise entry or post
    pub fn is_not_found(&self) -> bool {
        matches!(self, FolioError::NotFound(_))
    }
}

impl fmt::Display for FolioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FolioError::Io(err) => write!(f, "IO error: {}", err),
            FolioError::Config(msg) => write!(f, "Configuration error: {}", msg),
            FolioError::Document(msg) => write!(f, "Document error: {}", msg),
            FolioError::NotFound(msg) => write!(f, "Not found: {}", msg),
            FolioError::Template(msg) => write!(f, "Template error: {}", msg),
            FolioError::Write { path, source } => {
                write!(f, "Failed to write {}: {}", path.display(), source)
            }
            FolioError::Generic(msg) => write!(f, "{}", msg),
        }
    }
}

impl Error for FolioError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            FolioError::Io(err) => Some(err),
            FolioError::Write { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<io::Error> for FolioError {
    fn from(err: io::Error) -> Self {
        FolioError::Io(err)
    }
}

impl From<String> for FolioError {
    fn from(msg: String) -> Self {
        FolioError::Generic(msg)
    }
}

impl From<&str> for FolioError {
    fn from(msg: &str) -> Self {
        FolioError::Generic(msg.to_string())
    }
}

/// Borrow the `FolioError` inside a boxed error, if that is what it holds
pub fn as_folio_error<'a>(err: &'a (dyn Error + 'static)) -> Option<&'a FolioError> {
    err.downcast_ref::<FolioError>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_error_names_path() {
        let err = FolioError::write(
            "public/blog/post.html",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        let message = err.to_string();
        assert!(message.contains("public/blog/post.html"));
        assert!(message.contains("denied"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_downcast_from_box() {
        let boxed: Box<dyn Error> = FolioError::NotFound("post 7".into()).into();
        let inner = as_folio_error(boxed.as_ref()).unwrap();
        assert!(inner.is_not_found());
    }
}
