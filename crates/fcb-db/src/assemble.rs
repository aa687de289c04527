//! Rebuild parent/child read models from flat join results.
//!
//! A `parent LEFT JOIN child` query returns one row per child, with the parent
//! columns repeated on every row and the child columns all `NULL` when the
//! parent has no children. The functions here fold such rows back into parents
//! that own an ordered list of children. They know nothing about the database,
//! so they can be exercised with plain structs.

use std::collections::HashSet;
use std::hash::Hash;

/// A parent read model that collects children from joined rows.
pub trait HasChildren {
    /// Child entry type
    type Child;

    /// Mutable access to the child list
    fn children_mut(&mut self) -> &mut Vec<Self::Child>;
}

/// One row of a parent/child left join.
pub trait JoinedRow {
    /// Identifies the parent a row belongs to
    type ParentKey: Eq + Hash + Clone;
    /// Identifies a child within its parent
    type ChildKey: Eq + Hash;
    /// The parent read model, built with an empty child list
    type Parent: HasChildren<Child = Self::Child>;
    /// The child entry
    type Child;

    /// Key of the parent this row belongs to
    fn parent_key(&self) -> Self::ParentKey;

    /// Build the parent from this row's parent columns.
    fn to_parent(&self) -> Self::Parent;

    /// Build the child from this row's child columns.
    ///
    /// Returns `None` when the join found no child for the parent.
    fn to_child(&self) -> Option<(Self::ChildKey, Self::Child)>;
}

/// Group rows into parents, in order of each parent's first row.
///
/// Children keep the row order of the input and are deduplicated per parent by
/// their key. Parent columns are only read from the first row of each parent.
pub fn assemble<R, I>(rows: I) -> Vec<R::Parent>
where
    R: JoinedRow,
    I: IntoIterator<Item = R>,
{
    let mut parents: Vec<(R::ParentKey, R::Parent, HashSet<R::ChildKey>)> = Vec::new();

    for row in rows {
        let key = row.parent_key();

        // Rows usually arrive grouped by parent, so check the last one first
        let index = match parents.iter().rposition(|(k, _, _)| *k == key) {
            Some(index) => index,
            None => {
                parents.push((key, row.to_parent(), HashSet::new()));
                parents.len() - 1
            }
        };

        if let Some((child_key, child)) = row.to_child() {
            let (_, parent, seen) = &mut parents[index];
            if seen.insert(child_key) {
                parent.children_mut().push(child);
            }
        }
    }

    parents.into_iter().map(|(_, parent, _)| parent).collect()
}

/// Fold the rows of a single-parent query into that parent.
///
/// `None` means the query returned no rows at all, i.e. the parent does not
/// exist. A parent without children comes back with an empty child list.
/// Only one parent is ever built; rows for any other key are ignored.
pub fn assemble_one<R, I>(rows: I) -> Option<R::Parent>
where
    R: JoinedRow,
    I: IntoIterator<Item = R>,
{
    let mut rows = rows.into_iter();
    let first = rows.next()?;
    let key = first.parent_key();

    assemble(std::iter::once(first).chain(rows.filter(|row| row.parent_key() == key)))
        .into_iter()
        .next()
}
