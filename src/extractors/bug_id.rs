//! Extract the numeric bug id from the `:id` path segment.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

/// Bug id from the path. Anything other than a plain base-10 integer is rejected as
/// "Bug not found", since no record can carry such an id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BugId(pub u64);

impl BugId {
    pub fn parse(segment: &str) -> Option<BugId> {
        if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        segment.parse().ok().map(BugId)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for BugId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(segment) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::bug_not_found())?;
        BugId::parse(&segment).ok_or_else(|| {
            tracing::debug!(%segment, "unparseable bug id");
            AppError::bug_not_found()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_integers_only() {
        assert_eq!(BugId::parse("1"), Some(BugId(1)));
        assert_eq!(BugId::parse("007"), Some(BugId(7)));
        assert_eq!(BugId::parse("abc"), None);
        assert_eq!(BugId::parse("1.5"), None);
        assert_eq!(BugId::parse("-1"), None);
        assert_eq!(BugId::parse("+1"), None);
        assert_eq!(BugId::parse(""), None);
        assert_eq!(BugId::parse("99999999999999999999999"), None);
    }
}
