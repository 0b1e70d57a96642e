//! Errors raised while validating or resolving the route table

use thiserror::Error;

/// Route table errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteTableError {
    #[error("route pattern `{path}` is malformed: {reason}")]
    MalformedPattern { path: &'static str, reason: &'static str },

    #[error("path `{path}` is declared more than once")]
    DuplicatePath { path: &'static str },

    #[error("route name `{name}` is declared more than once")]
    DuplicateName { name: &'static str },

    #[error("paths `{first}` and `{second}` match the same URLs")]
    OverlappingPaths {
        first: &'static str,
        second: &'static str,
    },

    #[error("no route matches `{url}`: {reason}")]
    Unmatched { url: String, reason: String },
}
