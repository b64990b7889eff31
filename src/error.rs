pub(crate) type DynError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that may occur while talking to Open Library.
///
/// Views never show these to the user; they collapse every [`FetchError`] into
/// one fixed message and only the logs see the cause.
#[derive(Debug)]
pub struct FetchError {
    kind:    ErrorKind,
    message: Option<String>,
    source:  Option<DynError>,
}

/// Types of errors that make up a [`FetchError`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request could not be sent or the body could not be read.
    Request,
    /// The server answered with a non-success status code.
    Status,
    /// The body was not the JSON shape we expected.
    Deserialize,
    /// A request url could not be built.
    Url,
}

impl FetchError {
    pub fn new<S: Into<String>>(kind: ErrorKind, message: S) -> Self {
        Self {
            kind,
            message: Some(message.into()),
            source: None,
        }
    }

    /// Wraps an existing error as the source of [`FetchError`].
    pub fn wrap<E>(kind: ErrorKind, source: E) -> Self
    where
        E: Into<DynError>,
    {
        Self {
            kind,
            message: None,
            source: Some(source.into()),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            ErrorKind::Request => f.write_str("request error")?,
            ErrorKind::Status => f.write_str("status error")?,
            ErrorKind::Deserialize => f.write_str("deserialize error")?,
            ErrorKind::Url => f.write_str("url error")?,
        };

        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        }

        if let Some(cause) = &self.source {
            write!(f, ": caused by {cause}")?;
        }
        Ok(())
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|e| &**e as _)
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_status() {
            Self::wrap(ErrorKind::Status, e)
        } else if e.is_decode() {
            Self::wrap(ErrorKind::Deserialize, e)
        } else {
            Self::wrap(ErrorKind::Request, e)
        }
    }
}

impl From<serde_path_to_error::Error<serde_json::Error>> for FetchError {
    fn from(e: serde_path_to_error::Error<serde_json::Error>) -> Self {
        let path = e.path().to_string();
        Self {
            kind:    ErrorKind::Deserialize,
            message: Some(format!("at `{path}`")),
            source:  Some(Box::new(e.into_inner())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_message_and_cause() {
        let err = FetchError::new(ErrorKind::Status, "404 Not Found");
        assert_eq!(err.to_string(), "status error: 404 Not Found");
        assert_eq!(err.kind(), ErrorKind::Status);
    }

    #[test]
    fn path_is_kept_for_deserialize_errors() {
        let de = &mut serde_json::Deserializer::from_str(r#"{"works": [{"key": 3}]}"#);
        let res: Result<crate::openlib_schema::subject::Subject, _> =
            serde_path_to_error::deserialize(de);
        let err = FetchError::from(res.unwrap_err());
        assert_eq!(err.kind(), ErrorKind::Deserialize);
        assert!(err.to_string().contains("works[0].key"));
    }
}
