mod data;

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::Serialize;

use crate::category::Category;
use crate::error::LookupError;

/// The process-wide SQLSTATE catalog, built on first use.
pub static CATALOG: LazyLock<Catalog> = LazyLock::new(Catalog::build);

/// One SQLSTATE class, the first two characters of a code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ErrorClass {
    pub class_code: &'static str,
    pub name: &'static str,
    pub category: Category,
}

/// One fully specified SQLSTATE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ErrorCode {
    pub code: &'static str,
    pub name: &'static str,
    pub class_code: &'static str,
    pub category: Category,
}

impl ErrorCode {
    /// The class entry of this code in the global catalog.
    #[must_use]
    pub fn class(&self) -> Option<&'static ErrorClass> {
        CATALOG.class_by_code(self.class_code)
    }

    /// Alternative names bound to this code.
    #[must_use]
    pub fn aliases(&self) -> &'static [&'static str] {
        CATALOG.aliases_of(self.code)
    }
}

/// Result of [`Catalog::lookup`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry<'a> {
    Class(&'a ErrorClass),
    Code(&'a ErrorCode),
}

impl Entry<'_> {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Class(class) => class.name,
            Self::Code(code) => code.name,
        }
    }

    #[must_use]
    pub const fn category(&self) -> Category {
        match self {
            Self::Class(class) => class.category,
            Self::Code(code) => code.category,
        }
    }
}

/// Immutable index over the errcodes table.
#[derive(Debug)]
pub struct Catalog {
    classes: Vec<ErrorClass>,
    codes: Vec<ErrorCode>,
    classes_by_code: HashMap<&'static str, usize>,
    classes_by_name: HashMap<&'static str, usize>,
    codes_by_code: HashMap<&'static str, usize>,
    codes_by_name: HashMap<&'static str, usize>,
    aliases: HashMap<&'static str, Vec<&'static str>>,
}

impl Catalog {
    fn build() -> Self {
        let classes = data::CLASSES
            .iter()
            .map(|&(class_code, name, category)| ErrorClass {
                class_code,
                name,
                category,
            })
            .collect::<Vec<_>>();
        let classes_by_code = classes
            .iter()
            .enumerate()
            .map(|(idx, class)| (class.class_code, idx))
            .collect::<HashMap<_, _>>();
        let classes_by_name = classes
            .iter()
            .enumerate()
            .map(|(idx, class)| (class.name, idx))
            .collect();

        let codes = data::CODES
            .iter()
            .map(|&(code, name)| {
                let class_code = class_prefix(code).unwrap_or(code);
                let category = data::CATEGORY_OVERRIDES
                    .iter()
                    .find(|&&(overridden, _)| overridden == code)
                    .map(|&(_, category)| category)
                    .or_else(|| {
                        classes_by_code
                            .get(class_code)
                            .and_then(|&idx| classes.get(idx))
                            .map(|class| class.category)
                    })
                    .unwrap_or(Category::DatabaseError);
                ErrorCode {
                    code,
                    name,
                    class_code,
                    category,
                }
            })
            .collect::<Vec<_>>();
        let codes_by_code = codes
            .iter()
            .enumerate()
            .map(|(idx, code)| (code.code, idx))
            .collect::<HashMap<_, _>>();
        let mut codes_by_name = codes
            .iter()
            .enumerate()
            .map(|(idx, code)| (code.name, idx))
            .collect::<HashMap<_, _>>();

        let mut aliases = HashMap::<&'static str, Vec<&'static str>>::new();
        for &(alias, code) in data::ALIASES {
            let Some(&idx) = codes_by_code.get(code) else {
                tracing::error!(alias, code, "alias bound to an unknown SQLSTATE");
                continue;
            };
            codes_by_name.insert(alias, idx);
            aliases.entry(code).or_default().push(alias);
        }

        tracing::trace!(
            classes = classes.len(),
            codes = codes.len(),
            aliases = data::ALIASES.len(),
            "SQLSTATE catalog built"
        );

        Self {
            classes,
            codes,
            classes_by_code,
            classes_by_name,
            codes_by_code,
            codes_by_name,
            aliases,
        }
    }

    /// The class whose code is the first two characters of `code`.
    ///
    /// `None` if `code` is shorter than two characters or its class is not cataloged.
    #[must_use]
    pub fn class_of(&self, code: &str) -> Option<&ErrorClass> {
        class_prefix(code).and_then(|class_code| self.class_by_code(class_code))
    }

    /// The class with exactly this two character code.
    #[must_use]
    pub fn class_by_code(&self, class_code: &str) -> Option<&ErrorClass> {
        self.classes_by_code
            .get(class_code)
            .and_then(|&idx| self.classes.get(idx))
    }

    #[must_use]
    pub fn class_by_name(&self, name: &str) -> Option<&ErrorClass> {
        self.classes_by_name
            .get(name)
            .and_then(|&idx| self.classes.get(idx))
    }

    /// The entry for exactly this code. Class-level `xx000` codes resolve here as well.
    #[must_use]
    pub fn exact_of(&self, code: &str) -> Option<&ErrorCode> {
        self.codes_by_code
            .get(code)
            .and_then(|&idx| self.codes.get(idx))
    }

    /// The code entry bound to `name`, either its canonical name or an alias.
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&ErrorCode> {
        self.codes_by_name
            .get(name)
            .and_then(|&idx| self.codes.get(idx))
    }

    #[must_use]
    pub fn aliases_of(&self, code: &str) -> &[&'static str] {
        self.aliases.get(code).map(Vec::as_slice).unwrap_or_default()
    }

    /// Looks up either a class code or a full SQLSTATE.
    ///
    /// # Errors
    ///
    /// [`LookupError::NotFound`] if `code` is neither.
    pub fn lookup(&self, code: &str) -> Result<Entry<'_>, LookupError> {
        if let Some(entry) = self.exact_of(code) {
            return Ok(Entry::Code(entry));
        }
        self.class_by_code(code)
            .map(Entry::Class)
            .ok_or_else(|| LookupError::NotFound(code.to_owned()))
    }

    pub fn classes(&self) -> impl Iterator<Item = &ErrorClass> {
        self.classes.iter()
    }

    pub fn codes(&self) -> impl Iterator<Item = &ErrorCode> {
        self.codes.iter()
    }

    pub fn codes_in_class<'a>(&'a self, class_code: &'a str) -> impl Iterator<Item = &'a ErrorCode> {
        self.codes
            .iter()
            .filter(move |code| code.class_code == class_code)
    }
}

/// The first two characters of `code`, if it has that many.
pub(crate) fn class_prefix(code: &str) -> Option<&str> {
    let mut chars = code.char_indices();
    chars.nth(1)?;
    let end = chars.next().map_or(code.len(), |(idx, _)| idx);
    code.get(..end)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn class_codes_are_unique() {
        let mut seen = HashSet::new();
        for &(class_code, ..) in data::CLASSES {
            assert_eq!(class_code.len(), 2, "{class_code}");
            assert!(seen.insert(class_code), "duplicate class {class_code}");
        }
    }

    #[test]
    fn codes_are_unique_and_belong_to_a_class() {
        let mut seen = HashSet::new();
        for &(code, name) in data::CODES {
            assert_eq!(code.len(), 5, "{code}");
            assert!(
                code.bytes()
                    .all(|byte| byte.is_ascii_digit() || byte.is_ascii_uppercase()),
                "{code}"
            );
            assert!(seen.insert(code), "duplicate code {code}");
            assert!(
                CATALOG.class_of(code).is_some(),
                "{name} ({code}) has no class"
            );
        }
    }

    #[test]
    fn names_are_unique_including_aliases() {
        let mut seen = HashSet::new();
        for &(_, name) in data::CODES {
            assert!(seen.insert(name), "duplicate name {name}");
        }
        for &(alias, code) in data::ALIASES {
            assert!(seen.insert(alias), "alias {alias} shadows a name");
            assert!(CATALOG.exact_of(code).is_some(), "alias target {code}");
        }
    }

    #[test]
    fn every_class_has_a_generic_member() {
        for class in CATALOG.classes() {
            let generic = format!("{}000", class.class_code);
            let entry = CATALOG.exact_of(&generic);
            assert!(entry.is_some(), "{} lacks {generic}", class.name);
        }
    }

    #[test]
    fn index_sizes_match_the_table() {
        assert_eq!(CATALOG.classes().count(), data::CLASSES.len());
        assert_eq!(CATALOG.codes().count(), data::CODES.len());
        assert_eq!(
            CATALOG.codes_by_name.len(),
            data::CODES.len() + data::ALIASES.len()
        );
    }

    #[rstest]
    #[case("23505", Some("23"))]
    #[case("23", Some("23"))]
    #[case("2", None)]
    #[case("", None)]
    #[case("éé000", Some("éé"))]
    #[case("2é", Some("2é"))]
    fn class_prefix_takes_two_characters(#[case] code: &str, #[case] expected: Option<&str>) {
        assert_eq!(class_prefix(code), expected);
    }

    #[rstest]
    #[case("23505", "UniqueViolation", "23", Category::IntegrityError)]
    #[case("23000", "IntegrityConstraintViolation", "23", Category::IntegrityError)]
    #[case("42P01", "UndefinedTable", "42", Category::ProgrammingError)]
    #[case("40P01", "DeadlockDetected", "40", Category::TransactionRollbackError)]
    #[case("57014", "QueryCanceled", "57", Category::QueryCanceledError)]
    #[case("57P01", "AdminShutdown", "57", Category::OperationalError)]
    #[case("55P03", "LockNotAvailable", "55", Category::OperationalError)]
    #[case("0A000", "FeatureNotSupported", "0A", Category::NotSupportedError)]
    #[case("08006", "ConnectionFailure", "08", Category::DatabaseError)]
    fn exact_of_known_codes(
        #[case] code: &str,
        #[case] name: &str,
        #[case] class_code: &str,
        #[case] category: Category,
    ) {
        let entry = CATALOG.exact_of(code).unwrap();
        assert_eq!(entry.name, name);
        assert_eq!(entry.class_code, class_code);
        assert_eq!(entry.category, category);
        assert_eq!(entry.class().unwrap().class_code, class_code);
    }

    #[test]
    fn unknown_codes_and_classes() {
        assert_eq!(CATALOG.exact_of("23999"), None);
        assert_eq!(
            CATALOG.class_of("23999").map(|class| class.name),
            Some("IntegrityConstraintViolation")
        );
        assert_eq!(CATALOG.class_of("ZZ000"), None);
        assert_eq!(CATALOG.class_of("Z"), None);
        assert_eq!(CATALOG.exact_of(""), None);
    }

    #[test]
    fn class_of_uses_only_the_prefix() {
        // `class_by_code` wants the exact two characters
        assert!(CATALOG.class_by_code("23505").is_none());
        assert!(CATALOG.class_of("23505").is_some());
    }

    #[rstest]
    #[case("UndefinedPstatement", "26000", "InvalidSqlStatementName")]
    #[case("UndefinedCursor", "34000", "InvalidCursorName")]
    #[case("UndefinedDatabase", "3D000", "InvalidCatalogName")]
    #[case("UndefinedSchema", "3F000", "InvalidSchemaName")]
    fn aliases_share_the_entry(#[case] alias: &str, #[case] code: &str, #[case] canonical: &str) {
        let by_alias = CATALOG.by_name(alias).unwrap();
        let by_name = CATALOG.by_name(canonical).unwrap();
        assert!(core::ptr::eq(by_alias, by_name));
        assert_eq!(by_alias.code, code);
        assert_eq!(by_alias.name, canonical);
        assert_eq!(by_alias.aliases(), &[alias]);
    }

    #[test]
    fn codes_without_aliases() {
        assert!(CATALOG.aliases_of("23505").is_empty());
        assert!(CATALOG.aliases_of("nope").is_empty());
    }

    #[test]
    fn lookup_accepts_classes_and_codes() {
        assert_eq!(
            CATALOG.lookup("40").map(|entry| entry.name()),
            Ok("TransactionRollback")
        );
        assert!(matches!(CATALOG.lookup("40"), Ok(Entry::Class(_))));
        assert!(matches!(CATALOG.lookup("40001"), Ok(Entry::Code(_))));
        assert_eq!(
            CATALOG.lookup("40001").map(|entry| entry.category()),
            Ok(Category::TransactionRollbackError)
        );
        assert_eq!(
            CATALOG.lookup("4"),
            Err(LookupError::NotFound("4".to_owned()))
        );
        assert_eq!(
            CATALOG.lookup("40999"),
            Err(LookupError::NotFound("40999".to_owned()))
        );
    }

    #[test]
    fn codes_in_class() {
        let names = CATALOG
            .codes_in_class("40")
            .map(|code| code.name)
            .collect::<Vec<_>>();
        assert_eq!(
            names,
            [
                "TransactionRollback",
                "SerializationFailure",
                "TransactionIntegrityConstraintViolation",
                "StatementCompletionUnknown",
                "DeadlockDetected",
            ]
        );
    }
}
