//! Default relation field naming
//!
//! `authorId` (or `author_id`) on a many-to-one relation becomes `author`;
//! on a one-to-many relation it becomes `authors`. Collisions with existing
//! columns are resolved by numbering, falling back to the untouched column
//! name.

use convert_case::{Case, Casing};
use tracing::warn;

use crate::model::{Entity, Relation};
use crate::util::{byte_before_suffix, strip_suffix_ci};

use super::NamingStrategy;

/// Strategy using the built-in rules for every axis
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultNamingStrategy;

impl NamingStrategy for DefaultNamingStrategy {}

/// Derive the relation field name for a column, resolving collisions
/// against the other columns of `entity`.
///
/// The field name is camelCased before any suffix is stripped.
pub fn derive_relation_name(column_name: &str, relation: &Relation, entity: &Entity) -> String {
    let camel = column_name.to_case(Case::Camel);
    let mut derived = strip_id_suffix(&camel);

    let without_digits = strip_trailing_digits(derived);
    if without_digits.len() != derived.len() {
        derived = strip_id_suffix(without_digits);
    }

    let mut name = derived.to_string();
    if relation.kind.is_to_many() {
        name.push('s');
    }

    resolve_collision(name, column_name, entity)
}

/// Make `candidate` unique among the columns of `entity`.
///
/// `original` is the current name of the column being renamed and is always
/// acceptable. Numbered variants `<candidate>2`, `<candidate>3`, ... are tried
/// up to the entity's column count; when all of them are taken the original
/// name is kept.
pub fn resolve_collision(candidate: String, original: &str, entity: &Entity) -> String {
    if candidate == original || !entity.has_column_named(&candidate) {
        return candidate;
    }

    for n in 2..=entity.columns.len() {
        let numbered = format!("{}{}", candidate, n);
        if numbered == original || !entity.has_column_named(&numbered) {
            return numbered;
        }
    }

    warn!(
        entity = %entity.name,
        column = original,
        candidate = %candidate,
        "no free numbered variant, keeping column name"
    );
    original.to_string()
}

/// Strip a trailing `uid`/`id` token.
///
/// `uuid` and `guid` are whole words and are left alone.
fn strip_id_suffix(name: &str) -> &str {
    if let Some(rest) = strip_suffix_ci(name, "uid") {
        if !rest.is_empty() && !matches!(byte_before_suffix(name, 3), Some(b'u' | b'g')) {
            return rest;
        }
    }

    if let Some(rest) = strip_suffix_ci(name, "id") {
        if !rest.is_empty() && byte_before_suffix(name, 2) != Some(b'u') {
            return rest;
        }
    }

    name
}

/// Drop at most two trailing digits, never emptying the name
fn strip_trailing_digits(name: &str) -> &str {
    let mut end = name.len();
    for _ in 0..2 {
        match name.as_bytes()[..end].last() {
            Some(b) if b.is_ascii_digit() && end > 1 => end -= 1,
            _ => break,
        }
    }
    &name[..end]
}
