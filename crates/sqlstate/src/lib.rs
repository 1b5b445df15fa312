//! PostgreSQL SQLSTATE catalog and error classification.
//!
//! The wire layer hands over the code, message and diagnostic fields of an `ErrorResponse`;
//! [`classify`] turns them into a [`ClassifiedError`] which callers can test against codes
//! ("is this a `UniqueViolation`") and broader categories ("is this any integrity violation")
//! without matching on raw strings.
//!
//! ```
//! use rp_sqlstate::{DiagnosticFields, classify, is_class, is_kind};
//!
//! let err = classify("23505", "duplicate key value violates unique constraint", DiagnosticFields::default());
//! assert_eq!(err.kind, "UniqueViolation");
//! assert!(is_kind(&err, "UniqueViolation"));
//! assert!(is_class(&err, "IntegrityConstraintViolation"));
//! assert!(is_class(&err, "IntegrityError"));
//! assert!(!is_class(&err, "SyntaxErrorOrAccessRuleViolation"));
//! ```
//!
//! Classification never fails: a code missing from the catalog falls back to its class, and
//! an unknown class falls back to [`GENERIC_KIND`]. The reported SQLSTATE is always kept as is.

extern crate alloc;

mod catalog;
mod category;
mod classified;
mod error;
mod response;
mod taxonomy;

pub use catalog::{CATALOG, Catalog, Entry, ErrorClass, ErrorCode};
pub use category::{Category, ROOT};
pub use classified::{ClassifiedError, GENERIC_KIND, Resolution};
pub use error::{LookupError, RegistryError};
pub use response::{DiagnosticFields, ErrorResponse};
pub use taxonomy::{Taxonomy, TaxonomyBuilder};

/// Classifies a server-reported SQLSTATE against the global catalog.
pub fn classify(
    sqlstate: &str,
    message: impl Into<String>,
    fields: DiagnosticFields,
) -> ClassifiedError {
    ClassifiedError::new(sqlstate, message, fields)
}

/// Classifies an error or notice response as parsed by the wire layer.
#[must_use]
pub fn classify_response(resp: ErrorResponse) -> ClassifiedError {
    ClassifiedError::from(resp)
}

/// See [`Taxonomy::is_kind`].
#[must_use]
pub fn is_kind(err: &ClassifiedError, kind_name: &str) -> bool {
    Taxonomy::default_ref().is_kind(err, kind_name)
}

/// See [`Taxonomy::is_class`].
#[must_use]
pub fn is_class(err: &ClassifiedError, class_name: &str) -> bool {
    Taxonomy::default_ref().is_class(err, class_name)
}

/// Looks up a class code or SQLSTATE in the global catalog.
///
/// # Errors
///
/// [`LookupError::NotFound`] if `code` is neither.
pub fn lookup(code: &str) -> Result<Entry<'static>, LookupError> {
    CATALOG.lookup(code)
}
