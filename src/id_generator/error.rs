use std::fmt::{Debug, Display, Formatter};

/// What was wrong with a uuid string.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// not 32, 36, 38 or 45 characters
    InvalidLength(usize),
    /// hyphens missing or misplaced
    InvalidGroups,
    /// a non hex character at the given position
    InvalidCharacter(char, usize),
}

impl Display for ParseErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseErrorKind::InvalidLength(n) => write!(f, "invalid length {n}"),
            ParseErrorKind::InvalidGroups => write!(f, "invalid group layout"),
            ParseErrorKind::InvalidCharacter(c, i) => {
                write!(f, "invalid character {c:?} at {i}")
            }
        }
    }
}
impl Debug for ParseErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}

#[derive(Clone, PartialEq, Eq)]
pub enum GuidError {
    UnsupportedAlgorithm(String),
    /// length of the namespace in bytes
    InvalidNamespace(usize),
    EncodingError(String),
    ParseError(ParseErrorKind),
}

impl GuidError {
    pub(crate) fn unsupported_algorithm(what: impl Display) -> Self {
        tracing::debug!(target: "named_guid", "unsupported hash algorithm: {what}");
        GuidError::UnsupportedAlgorithm(what.to_string())
    }

    pub(crate) fn invalid_namespace(len: usize) -> Self {
        tracing::debug!(target: "named_guid", len, "namespace is not 16 bytes");
        GuidError::InvalidNamespace(len)
    }

    pub(crate) fn encoding(what: impl Display) -> Self {
        tracing::debug!(target: "named_guid", "name encoding failed: {what}");
        GuidError::EncodingError(what.to_string())
    }

    pub(crate) fn parse(kind: ParseErrorKind) -> Self {
        tracing::debug!(target: "named_guid", "uuid parse failed: {kind}");
        GuidError::ParseError(kind)
    }
}

impl Display for GuidError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            GuidError::UnsupportedAlgorithm(a) => write!(f, "UnsupportedAlgorithm:{a}"),
            GuidError::InvalidNamespace(n) => {
                write!(f, "InvalidNamespace: expected 16 bytes, found {n}")
            }
            GuidError::EncodingError(e) => write!(f, "EncodingError:{e}"),
            GuidError::ParseError(k) => write!(f, "ParseError:{k}"),
        }
    }
}
impl Debug for GuidError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}
impl std::error::Error for GuidError {}

pub type GuidResult<T> = Result<T, GuidError>;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            "InvalidNamespace: expected 16 bytes, found 3",
            GuidError::invalid_namespace(3).to_string()
        );
        assert_eq!(
            "ParseError:invalid character 'g' at 4",
            GuidError::parse(ParseErrorKind::InvalidCharacter('g', 4)).to_string()
        );
        assert_eq!(
            "UnsupportedAlgorithm:sha256",
            GuidError::unsupported_algorithm("sha256").to_string()
        );
    }

    #[test]
    fn test_into_anyhow() {
        fn fails() -> anyhow::Result<()> {
            Err(GuidError::encoding("lone surrogate"))?;
            Ok(())
        }
        let err = fails().unwrap_err();
        assert!(err.downcast_ref::<GuidError>().is_some(), "{err}");
    }
}
