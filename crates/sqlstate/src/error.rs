/// Returned by [`crate::Catalog::lookup`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("unknown SQLSTATE or class code `{0}`")]
    NotFound(String),
}

/// Returned while registering tags on a [`crate::TaxonomyBuilder`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("tag names must not be blank")]
    EmptyName,
    #[error("name `{0}` is already bound to a code, class, category or tag")]
    DuplicateName(String),
    #[error("parent `{0}` is not a class, category or tag")]
    UnknownParent(String),
    #[error("`{0}` does not name a code, class, category or tag")]
    UnknownMember(String),
    #[error("`{0}` is not a registered tag")]
    UnknownTag(String),
    #[error("attaching `{member}` to `{tag}` would make `{tag}` its own ancestor")]
    Cycle { member: String, tag: String },
}
