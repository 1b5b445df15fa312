use serde::{Deserialize, Serialize};

/// Name of the node every classified error descends from.
pub const ROOT: &str = "Error";

/// Driver-level error category, the DB-API exception a SQLSTATE maps to.
///
/// Categories form a small tree under [`ROOT`]: `DatabaseError` is the parent of all the
/// others, except `TransactionRollbackError` and `QueryCanceledError` which refine
/// `OperationalError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
pub enum Category {
    DatabaseError,
    DataError,
    OperationalError,
    IntegrityError,
    InternalError,
    ProgrammingError,
    NotSupportedError,
    TransactionRollbackError,
    QueryCanceledError,
}

impl Category {
    pub const ALL: [Self; 9] = [
        Self::DatabaseError,
        Self::DataError,
        Self::OperationalError,
        Self::IntegrityError,
        Self::InternalError,
        Self::ProgrammingError,
        Self::NotSupportedError,
        Self::TransactionRollbackError,
        Self::QueryCanceledError,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::DatabaseError => "DatabaseError",
            Self::DataError => "DataError",
            Self::OperationalError => "OperationalError",
            Self::IntegrityError => "IntegrityError",
            Self::InternalError => "InternalError",
            Self::ProgrammingError => "ProgrammingError",
            Self::NotSupportedError => "NotSupportedError",
            Self::TransactionRollbackError => "TransactionRollbackError",
            Self::QueryCanceledError => "QueryCanceledError",
        }
    }

    /// The enclosing category, `None` for `DatabaseError` whose parent is [`ROOT`].
    #[must_use]
    pub const fn parent(self) -> Option<Self> {
        match self {
            Self::DatabaseError => None,
            Self::TransactionRollbackError | Self::QueryCanceledError => {
                Some(Self::OperationalError)
            }
            Self::DataError
            | Self::OperationalError
            | Self::IntegrityError
            | Self::InternalError
            | Self::ProgrammingError
            | Self::NotSupportedError => Some(Self::DatabaseError),
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.name() == name)
    }

    /// Iterates over `self` and then every enclosing category, innermost first.
    pub fn ancestry(self) -> impl Iterator<Item = Self> {
        core::iter::successors(Some(self), |category| category.parent())
    }

    /// Whether `self` is `other` or nested inside it.
    #[must_use]
    pub fn is_a(self, other: Self) -> bool {
        self.ancestry().any(|category| category == other)
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Category::QueryCanceledError, &["QueryCanceledError", "OperationalError", "DatabaseError"])]
    #[case(Category::TransactionRollbackError, &["TransactionRollbackError", "OperationalError", "DatabaseError"])]
    #[case(Category::IntegrityError, &["IntegrityError", "DatabaseError"])]
    #[case(Category::DatabaseError, &["DatabaseError"])]
    fn ancestry_walks_up_to_database_error(#[case] category: Category, #[case] expected: &[&str]) {
        let names = category.ancestry().map(Category::name).collect::<Vec<_>>();
        assert_eq!(names, expected);
    }

    #[test]
    fn names_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_name(category.name()), Some(category));
        }
        assert_eq!(Category::from_name(ROOT), None);
        assert_eq!(Category::from_name("databaseerror"), None);
    }

    #[test]
    fn is_a_is_not_symmetric() {
        assert!(Category::QueryCanceledError.is_a(Category::OperationalError));
        assert!(!Category::OperationalError.is_a(Category::QueryCanceledError));
        assert!(!Category::DataError.is_a(Category::OperationalError));
    }
}
