//! "Is-a" relations between classified errors and named categories.
//!
//! Every name an error can be matched against is a node in a small graph:
//!
//! ```text
//! Error
//! └── DatabaseError
//!     ├── DataError, IntegrityError, InternalError, ProgrammingError, NotSupportedError
//!     └── OperationalError
//!         ├── TransactionRollbackError
//!         └── QueryCanceledError
//! category ─▶ SQLSTATE class ─▶ SQLSTATE code (canonical name and aliases)
//! ```
//!
//! Registered tags hang off any category-level node and may have codes, classes, categories or
//! other tags attached to them, so one code can carry several semantic roles.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::catalog::{CATALOG, Catalog};
use crate::category::{Category, ROOT};
use crate::classified::{ClassifiedError, Resolution};
use crate::error::RegistryError;
use crate::response::DiagnosticFields;

static BUILTIN: LazyLock<Taxonomy> = LazyLock::new(Taxonomy::builtin);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Node {
    Root,
    Category(Category),
    Class(&'static str),
    Code(&'static str),
    Tag(usize),
}

impl Node {
    /// Codes are leaves, everything else can be matched by `is_class`.
    const fn is_category_level(self) -> bool {
        !matches!(self, Self::Code(_))
    }
}

#[derive(Debug, Clone)]
struct Tag {
    name: String,
    parents: Vec<Node>,
}

/// The ancestor table used by [`Taxonomy::is_kind`] and [`Taxonomy::is_class`].
///
/// Immutable once built; share it freely between threads.
#[derive(Debug, Clone)]
pub struct Taxonomy {
    catalog: &'static Catalog,
    tags: Vec<Tag>,
    tags_by_name: HashMap<String, usize>,
    attached: HashMap<Node, Vec<Node>>,
}

impl Taxonomy {
    fn builtin() -> Self {
        Self {
            catalog: &CATALOG,
            tags: Vec::new(),
            tags_by_name: HashMap::new(),
            attached: HashMap::new(),
        }
    }

    /// The process-wide taxonomy without registered tags.
    #[must_use]
    pub fn default_ref() -> &'static Self {
        &BUILTIN
    }

    #[must_use]
    pub fn builder() -> TaxonomyBuilder {
        TaxonomyBuilder::new()
    }

    #[must_use]
    pub const fn catalog(&self) -> &'static Catalog {
        self.catalog
    }

    pub fn classify(
        &self,
        sqlstate: impl Into<String>,
        message: impl Into<String>,
        fields: DiagnosticFields,
    ) -> ClassifiedError {
        ClassifiedError::with_catalog(self.catalog, sqlstate.into(), message.into(), fields)
    }

    /// Whether `name` is the error's own kind, one of its aliases, or anything it descends
    /// from: its class, category, a tag, `DatabaseError` or `Error`.
    ///
    /// Names shared between a code and a class (`TransactionRollback` is both `40000` and
    /// class `40`) match if either node does. Raw codes and class codes are accepted too.
    #[must_use]
    pub fn is_kind(&self, err: &ClassifiedError, name: &str) -> bool {
        let targets = self.nodes_named(name).collect::<Vec<_>>();
        self.reaches(self.node_of(err), |node| targets.contains(&node))
    }

    /// Like [`Self::is_kind`] but only matches category-level names (classes, categories,
    /// tags and the roots), never a specific code.
    #[must_use]
    pub fn is_class(&self, err: &ClassifiedError, name: &str) -> bool {
        let targets = self
            .nodes_named(name)
            .filter(|node| node.is_category_level())
            .collect::<Vec<_>>();
        self.reaches(self.node_of(err), |node| targets.contains(&node))
    }

    /// Names of the error's kind and all its ancestors, closest first.
    #[must_use]
    pub fn lineage(&self, err: &ClassifiedError) -> Vec<&str> {
        let mut order = vec![self.node_of(err)];
        let mut idx = 0;
        while let Some(&node) = order.get(idx) {
            for parent in self.parents(node) {
                if !order.contains(&parent) {
                    order.push(parent);
                }
            }
            idx += 1;
        }
        order.into_iter().map(|node| self.name_of(node)).collect()
    }

    fn node_of(&self, err: &ClassifiedError) -> Node {
        let fallback = Node::Category(err.category);
        match err.resolution {
            Resolution::Exact => self
                .catalog
                .exact_of(&err.sqlstate)
                .map_or(fallback, |code| Node::Code(code.code)),
            Resolution::ClassOnly => err
                .class_code
                .as_deref()
                .and_then(|class_code| self.catalog.class_by_code(class_code))
                .map_or(fallback, |class| Node::Class(class.class_code)),
            Resolution::Unrecognized => fallback,
        }
    }

    fn name_of(&self, node: Node) -> &str {
        match node {
            Node::Root => ROOT,
            Node::Category(category) => category.name(),
            Node::Class(class_code) => self
                .catalog
                .class_by_code(class_code)
                .map_or(class_code, |class| class.name),
            Node::Code(code) => self
                .catalog
                .exact_of(code)
                .map_or(code, |entry| entry.name),
            Node::Tag(idx) => self.tags.get(idx).map_or("", |tag| tag.name.as_str()),
        }
    }

    /// Every node `name` can refer to.
    fn nodes_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = Node> + 'a {
        let code = self
            .catalog
            .by_name(name)
            .or_else(|| self.catalog.exact_of(name))
            .map(|code| Node::Code(code.code));
        let class = self
            .catalog
            .class_by_name(name)
            .or_else(|| self.catalog.class_by_code(name))
            .map(|class| Node::Class(class.class_code));
        let category = Category::from_name(name).map(Node::Category);
        let tag = self.tags_by_name.get(name).map(|&idx| Node::Tag(idx));
        let root = (name == ROOT).then_some(Node::Root);

        code.into_iter()
            .chain(class)
            .chain(category)
            .chain(tag)
            .chain(root)
    }

    fn parents(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        let builtin = match node {
            Node::Root => [None, None],
            Node::Category(category) => [
                Some(category.parent().map_or(Node::Root, Node::Category)),
                None,
            ],
            Node::Class(class_code) => [
                self.catalog
                    .class_by_code(class_code)
                    .map(|class| Node::Category(class.category)),
                None,
            ],
            Node::Code(code) => self.catalog.exact_of(code).map_or([None, None], |entry| {
                [
                    Some(Node::Class(entry.class_code)),
                    Some(Node::Category(entry.category)),
                ]
            }),
            Node::Tag(_) => [None, None],
        };
        let declared: &[Node] = match node {
            Node::Tag(idx) => self
                .tags
                .get(idx)
                .map(|tag| tag.parents.as_slice())
                .unwrap_or_default(),
            Node::Root | Node::Category(_) | Node::Class(_) | Node::Code(_) => &[],
        };
        let attached = self
            .attached
            .get(&node)
            .map(Vec::as_slice)
            .unwrap_or_default();

        builtin
            .into_iter()
            .flatten()
            .chain(declared.iter().copied())
            .chain(attached.iter().copied())
    }

    /// Depth-first walk from `start` (inclusive) through all ancestors.
    fn reaches(&self, start: Node, mut is_target: impl FnMut(Node) -> bool) -> bool {
        let mut stack = vec![start];
        let mut seen = Vec::new();
        while let Some(node) = stack.pop() {
            if seen.contains(&node) {
                continue;
            }
            if is_target(node) {
                return true;
            }
            seen.push(node);
            stack.extend(self.parents(node));
        }
        false
    }
}

/// Registers additional named categories on top of the built-in taxonomy.
///
/// ```
/// use rp_sqlstate::{DiagnosticFields, Taxonomy};
///
/// let taxonomy = Taxonomy::builder()
///     .tag("Retryable", &["OperationalError"])?
///     .attach("SerializationFailure", "Retryable")?
///     .attach("40P01", "Retryable")?
///     .build();
///
/// let err = taxonomy.classify("40001", "could not serialize access", DiagnosticFields::default());
/// assert!(taxonomy.is_class(&err, "Retryable"));
/// # Ok::<(), rp_sqlstate::RegistryError>(())
/// ```
#[derive(Debug, Clone)]
pub struct TaxonomyBuilder {
    taxonomy: Taxonomy,
}

impl Default for TaxonomyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TaxonomyBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            taxonomy: Taxonomy::builtin(),
        }
    }

    /// Declares the tag `name`, nested in every category-level node the `parents` name.
    /// Without parents the tag sits directly under `Error`.
    ///
    /// # Errors
    ///
    /// [`RegistryError::EmptyName`] if `name` is blank,
    /// [`RegistryError::DuplicateName`] if `name` already means something,
    /// [`RegistryError::UnknownParent`] if a parent is not a class, category or tag.
    pub fn tag(mut self, name: impl Into<String>, parents: &[&str]) -> Result<Self, RegistryError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(RegistryError::EmptyName);
        }
        if self.taxonomy.nodes_named(&name).next().is_some() {
            return Err(RegistryError::DuplicateName(name));
        }

        let mut resolved = Vec::with_capacity(parents.len());
        for parent in parents {
            let before = resolved.len();
            resolved.extend(
                self.taxonomy
                    .nodes_named(parent)
                    .filter(|node| node.is_category_level()),
            );
            if resolved.len() == before {
                return Err(RegistryError::UnknownParent((*parent).to_owned()));
            }
        }
        if resolved.is_empty() {
            resolved.push(Node::Root);
        }

        tracing::trace!(tag = %name, ?parents, "registering error tag");
        let idx = self.taxonomy.tags.len();
        self.taxonomy.tags_by_name.insert(name.clone(), idx);
        self.taxonomy.tags.push(Tag {
            name,
            parents: resolved,
        });
        Ok(self)
    }

    /// Makes every node `member` names (code, code alias, class, category or tag) a member
    /// of `tag`.
    ///
    /// # Errors
    ///
    /// [`RegistryError::UnknownTag`], [`RegistryError::UnknownMember`], or
    /// [`RegistryError::Cycle`] if `tag` already descends from `member`.
    pub fn attach(mut self, member: &str, tag: &str) -> Result<Self, RegistryError> {
        let Some(&tag_idx) = self.taxonomy.tags_by_name.get(tag) else {
            return Err(RegistryError::UnknownTag(tag.to_owned()));
        };
        let tag_node = Node::Tag(tag_idx);

        let members = self
            .taxonomy
            .nodes_named(member)
            .filter(|node| *node != Node::Root)
            .collect::<Vec<_>>();
        if members.is_empty() {
            return Err(RegistryError::UnknownMember(member.to_owned()));
        }
        for &node in &members {
            if self.taxonomy.reaches(tag_node, |ancestor| ancestor == node) {
                return Err(RegistryError::Cycle {
                    member: member.to_owned(),
                    tag: tag.to_owned(),
                });
            }
        }

        tracing::trace!(member, tag, "attaching to error tag");
        for node in members {
            let parents = self.taxonomy.attached.entry(node).or_default();
            if !parents.contains(&tag_node) {
                parents.push(tag_node);
            }
        }
        Ok(self)
    }

    #[must_use]
    pub fn build(self) -> Taxonomy {
        self.taxonomy
    }
}
