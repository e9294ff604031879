//! Fixed-size ordered vector tables.

use std::ops::Deref;
use std::slice;

use glam::DVec2;

/// A 2D vector with `f64` components.
pub type Vector2 = DVec2;

/// An immutable, ordered table of [`Vector2`] values.
///
/// Tables are created once by a generator and only read afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorTable {
    vectors: Box<[Vector2]>,
}

impl VectorTable {
    pub(crate) fn from_vec(vectors: Vec<Vector2>) -> Self {
        Self {
            vectors: vectors.into_boxed_slice(),
        }
    }

    /// Number of vectors in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    /// Always `false` for tables built by a generator.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Number of scalars once the table is flattened to `x0, y0, x1, y1, ...`.
    #[must_use]
    pub fn scalar_count(&self) -> usize {
        self.vectors.len() * 2
    }

    /// The vectors in table order.
    #[must_use]
    pub fn as_slice(&self) -> &[Vector2] {
        &self.vectors
    }

    /// Iterates the flattened scalars in table order.
    pub fn scalars(&self) -> impl Iterator<Item = f64> + '_ {
        self.vectors.iter().flat_map(|v| [v.x, v.y])
    }
}

impl Deref for VectorTable {
    type Target = [Vector2];

    fn deref(&self) -> &[Vector2] {
        &self.vectors
    }
}

impl<'a> IntoIterator for &'a VectorTable {
    type Item = &'a Vector2;
    type IntoIter = slice::Iter<'a, Vector2>;

    fn into_iter(self) -> Self::IntoIter {
        self.vectors.iter()
    }
}

/// A table paired with the label printed in its emission header.
#[derive(Debug, Clone, Copy)]
pub struct NamedTable<'a> {
    /// Header text, e.g. `Perlin noise gradients`.
    pub label: &'a str,
    /// The table data.
    pub table: &'a VectorTable,
}

impl<'a> NamedTable<'a> {
    /// Pairs a label with a table.
    #[must_use]
    pub const fn new(label: &'a str, table: &'a VectorTable) -> Self {
        Self { label, table }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalars_flatten_in_order() {
        let table = VectorTable::from_vec(vec![Vector2::new(1.0, 2.0), Vector2::new(3.0, 4.0)]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.scalar_count(), 4);
        assert_eq!(table.scalars().collect::<Vec<_>>(), [1.0, 2.0, 3.0, 4.0]);
    }
}
