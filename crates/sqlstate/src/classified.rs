use alloc::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::{CATALOG, Catalog, ErrorClass, ErrorCode, class_prefix};
use crate::category::Category;
use crate::response::{DiagnosticFields, ErrorResponse};
use crate::taxonomy::Taxonomy;

/// Kind given to errors whose SQLSTATE class is not cataloged.
pub const GENERIC_KIND: &str = "DatabaseError";

/// How far classification got for a given SQLSTATE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Resolution {
    /// The exact code is cataloged.
    Exact,
    /// Only the two character class is cataloged.
    ClassOnly,
    /// Neither the code nor its class is known.
    Unrecognized,
}

/// A server error or notice, classified against the SQLSTATE catalog.
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct ClassifiedError {
    /// The code as reported by the server, never normalised.
    pub sqlstate: String,
    /// First two characters of `sqlstate`, whether or not the class is cataloged.
    pub class_code: Option<String>,
    /// Most specific name found: code name, class name or [`GENERIC_KIND`].
    pub kind: &'static str,
    pub resolution: Resolution,
    pub category: Category,
    pub message: String,
    pub fields: DiagnosticFields,
}

impl ClassifiedError {
    /// Classifies against the global catalog. Never fails.
    pub fn new(
        sqlstate: impl Into<String>,
        message: impl Into<String>,
        fields: DiagnosticFields,
    ) -> Self {
        Self::with_catalog(&CATALOG, sqlstate.into(), message.into(), fields)
    }

    pub(crate) fn with_catalog(
        catalog: &Catalog,
        sqlstate: String,
        message: String,
        fields: DiagnosticFields,
    ) -> Self {
        let class_code = class_prefix(&sqlstate).map(str::to_owned);

        let (kind, resolution, category) = if let Some(code) = catalog.exact_of(&sqlstate) {
            (code.name, Resolution::Exact, code.category)
        } else if let Some(class) = catalog.class_of(&sqlstate) {
            tracing::debug!(
                sqlstate = %sqlstate,
                class = class.name,
                "SQLSTATE not cataloged, classified by its class"
            );
            (class.name, Resolution::ClassOnly, class.category)
        } else {
            tracing::debug!(sqlstate = %sqlstate, "unrecognized SQLSTATE class");
            (GENERIC_KIND, Resolution::Unrecognized, Category::DatabaseError)
        };

        Self {
            sqlstate,
            class_code,
            kind,
            resolution,
            category,
            message,
            fields,
        }
    }

    /// The catalog entry for the exact code, if there is one.
    #[must_use]
    pub fn error_code(&self) -> Option<&'static ErrorCode> {
        CATALOG.exact_of(&self.sqlstate)
    }

    /// The catalog entry for the class, if there is one.
    #[must_use]
    pub fn error_class(&self) -> Option<&'static ErrorClass> {
        self.class_code
            .as_deref()
            .and_then(|class_code| CATALOG.class_by_code(class_code))
    }

    /// See [`Taxonomy::is_kind`]. Uses the built-in taxonomy.
    #[must_use]
    pub fn is_kind(&self, name: &str) -> bool {
        Taxonomy::default_ref().is_kind(self, name)
    }

    /// See [`Taxonomy::is_class`]. Uses the built-in taxonomy.
    #[must_use]
    pub fn is_class(&self, name: &str) -> bool {
        Taxonomy::default_ref().is_class(self, name)
    }

    #[must_use]
    pub fn severity(&self) -> Option<&str> {
        self.fields.severity()
    }
}

impl From<ErrorResponse> for ClassifiedError {
    fn from(resp: ErrorResponse) -> Self {
        Self::new(resp.code, resp.message, resp.fields)
    }
}

impl core::fmt::Display for ClassifiedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]: {}", self.kind, self.sqlstate, self.message)?;
        if let Some(detail) = &self.fields.detail {
            write!(f, "\nDETAIL: {detail}")?;
        }
        if let Some(hint) = &self.fields.hint {
            write!(f, "\nHINT: {hint}")?;
        }
        Ok(())
    }
}

impl core::error::Error for ClassifiedError {}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("23505", "UniqueViolation", Resolution::Exact, Some("23"))]
    #[case("23000", "IntegrityConstraintViolation", Resolution::Exact, Some("23"))]
    #[case("23999", "IntegrityConstraintViolation", Resolution::ClassOnly, Some("23"))]
    #[case("23", "IntegrityConstraintViolation", Resolution::ClassOnly, Some("23"))]
    #[case("ZZ000", GENERIC_KIND, Resolution::Unrecognized, Some("ZZ"))]
    #[case("Z", GENERIC_KIND, Resolution::Unrecognized, None)]
    #[case("", GENERIC_KIND, Resolution::Unrecognized, None)]
    #[case("2350", "IntegrityConstraintViolation", Resolution::ClassOnly, Some("23"))]
    #[case("😀😀000", GENERIC_KIND, Resolution::Unrecognized, Some("😀😀"))]
    #[case("23505\0", "IntegrityConstraintViolation", Resolution::ClassOnly, Some("23"))]
    #[test_log::test]
    fn degrades_gracefully(
        #[case] sqlstate: &str,
        #[case] kind: &str,
        #[case] resolution: Resolution,
        #[case] class_code: Option<&str>,
    ) {
        let err = ClassifiedError::new(sqlstate, "boom", DiagnosticFields::default());
        assert_eq!(err.sqlstate, sqlstate);
        assert_eq!(err.kind, kind);
        assert_eq!(err.resolution, resolution);
        assert_eq!(err.class_code.as_deref(), class_code);
        assert_eq!(err.message, "boom");
    }

    #[test]
    fn category_follows_the_resolved_entry() {
        let canceled = ClassifiedError::new("57014", "", DiagnosticFields::default());
        assert_eq!(canceled.category, Category::QueryCanceledError);

        let other_57 = ClassifiedError::new("57999", "", DiagnosticFields::default());
        assert_eq!(other_57.category, Category::OperationalError);

        let unknown = ClassifiedError::new("ZZ000", "", DiagnosticFields::default());
        assert_eq!(unknown.category, Category::DatabaseError);
    }

    #[test]
    fn catalog_accessors() {
        let err = ClassifiedError::new("40P01", "deadlock detected", DiagnosticFields::default());
        assert_eq!(err.error_code().map(|code| code.name), Some("DeadlockDetected"));
        assert_eq!(
            err.error_class().map(|class| class.name),
            Some("TransactionRollback")
        );

        let err = ClassifiedError::new("40999", "", DiagnosticFields::default());
        assert_eq!(err.error_code(), None);
        assert_eq!(
            err.error_class().map(|class| class.name),
            Some("TransactionRollback")
        );
    }

    #[test]
    fn from_error_response() {
        let resp = ErrorResponse::builder()
            .code("23502")
            .message("null value in column \"id\" violates not-null constraint")
            .fields(DiagnosticFields {
                severity: Some("ERROR".to_owned()),
                column: Some("id".to_owned()),
                ..Default::default()
            })
            .build();
        let err = ClassifiedError::from(resp);

        assert_eq!(err.kind, "NotNullViolation");
        assert_eq!(err.severity(), Some("ERROR"));
        assert_eq!(err.fields.column.as_deref(), Some("id"));
    }

    #[test]
    fn display() {
        let err = ClassifiedError::new(
            "23505",
            "duplicate key value violates unique constraint \"users_pkey\"",
            DiagnosticFields {
                detail: Some("Key (id)=(1) already exists.".to_owned()),
                ..Default::default()
            },
        );
        assert_eq!(
            err.to_string(),
            "UniqueViolation [23505]: duplicate key value violates unique constraint \"users_pkey\"\nDETAIL: Key (id)=(1) already exists."
        );

        let err = ClassifiedError::new("", "no route matched", DiagnosticFields::default());
        let std_error: &dyn core::error::Error = &err;
        assert_eq!(std_error.to_string(), "DatabaseError []: no route matched");
    }

    #[test]
    fn serializes_to_json() {
        let err = ClassifiedError::new("40001", "could not serialize access", DiagnosticFields::default());
        let json = simd_json::to_string(&err).unwrap();
        assert_eq!(
            json,
            r#"{"sqlstate":"40001","class_code":"40","kind":"SerializationFailure","resolution":"exact","category":"TransactionRollbackError","message":"could not serialize access","fields":{}}"#
        );
    }
}
