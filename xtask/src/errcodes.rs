//! Compares the compiled SQLSTATE catalog with a server `errcodes.txt`.

use std::collections::BTreeMap;

use eyre::{WrapErr as _, bail};
use rp_sqlstate::CATALOG;

/// The parts of `errcodes.txt` the catalog mirrors.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Errcodes {
    pub classes: BTreeMap<String, String>,
    pub codes: BTreeMap<String, String>,
    /// Codes whose condition name is reused by a later code. The later code keeps the name.
    pub shadowed: Vec<String>,
}

impl Errcodes {
    pub fn parse(text: &str) -> eyre::Result<Self> {
        let mut parsed = Self::default();
        let mut code_of_name = BTreeMap::<String, String>::new();
        for (idx, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if let Some(section) = line.strip_prefix("Section:") {
                let Some((class_code, title)) = section
                    .trim()
                    .strip_prefix("Class ")
                    .and_then(|rest| rest.split_once(" - "))
                else {
                    bail!("line {}: malformed section `{line}`", idx + 1);
                };
                parsed
                    .classes
                    .insert(class_code.trim().to_owned(), class_name(title));
                continue;
            }

            let columns = line.split_whitespace().collect::<Vec<_>>();
            match columns.as_slice() {
                [code, _kind, _macro, condition, ..] => {
                    let name = camel_case(condition);
                    let earlier = code_of_name.insert(name.clone(), (*code).to_owned());
                    if let Some(earlier) = earlier {
                        parsed.codes.remove(&earlier);
                        parsed.shadowed.push(format!("{earlier} {name}"));
                    }
                    parsed.codes.insert((*code).to_owned(), name);
                }
                // no condition name, so no exception class of its own
                [_code, _kind, _macro] => {}
                _ => bail!("line {}: malformed entry `{line}`", idx + 1),
            }
        }
        Ok(parsed)
    }
}

/// `Foreign Data Wrapper Error (SQL/MED)` becomes `ForeignDataWrapperError`.
fn class_name(title: &str) -> String {
    let title = title.split_once(" (").map_or(title, |(head, _)| head);
    title
        .split(|ch: char| !ch.is_ascii_alphanumeric())
        .map(capitalize)
        .collect()
}

/// `unique_violation` becomes `UniqueViolation`.
fn camel_case(condition: &str) -> String {
    condition.split('_').map(capitalize).collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect()
    })
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Drift {
    pub missing: Vec<String>,
    pub renamed: Vec<String>,
    pub stale: Vec<String>,
}

impl Drift {
    pub fn is_empty(&self) -> bool {
        self.missing.is_empty() && self.renamed.is_empty() && self.stale.is_empty()
    }
}

pub fn diff(upstream: &Errcodes) -> Drift {
    let mut drift = Drift::default();

    for (class_code, name) in &upstream.classes {
        match CATALOG.class_by_code(class_code) {
            None => drift.missing.push(format!("class {class_code} {name}")),
            Some(class) if class.name != name => drift
                .renamed
                .push(format!("class {class_code}: {} -> {name}", class.name)),
            Some(_) => {}
        }
    }
    for (code, name) in &upstream.codes {
        match CATALOG.exact_of(code) {
            None => drift.missing.push(format!("{code} {name}")),
            Some(entry) if entry.name != name => drift
                .renamed
                .push(format!("{code}: {} -> {name}", entry.name)),
            Some(_) => {}
        }
    }
    for class in CATALOG.classes() {
        if !upstream.classes.contains_key(class.class_code) {
            drift
                .stale
                .push(format!("class {} {}", class.class_code, class.name));
        }
    }
    for code in CATALOG.codes() {
        if !upstream.codes.contains_key(code.code) {
            drift.stale.push(format!("{} {}", code.code, code.name));
        }
    }

    drift
}

pub fn run(path: &std::path::Path) -> eyre::Result<()> {
    let text = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("reading {}", path.display()))?;
    let upstream = Errcodes::parse(&text)?;
    let drift = diff(&upstream);

    println!(
        "{} classes, {} codes upstream",
        upstream.classes.len(),
        upstream.codes.len()
    );
    for (label, entries) in [
        ("name reused by a later code", &upstream.shadowed),
        ("missing from catalog", &drift.missing),
        ("named differently", &drift.renamed),
        ("no longer upstream", &drift.stale),
    ] {
        if entries.is_empty() {
            continue;
        }
        println!("{label}:");
        for entry in entries {
            println!("  {entry}");
        }
    }

    if !drift.is_empty() {
        bail!(
            "catalog drifted from {}: {} missing, {} renamed, {} stale",
            path.display(),
            drift.missing.len(),
            drift.renamed.len(),
            drift.stale.len()
        );
    }
    println!("catalog is up to date");
    Ok(())
}
