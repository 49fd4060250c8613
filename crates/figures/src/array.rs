//! Growable array with an explicit doubling policy.
//!
//! Invariants
//! - `len() <= capacity()`.
//! - Capacity starts at `INITIAL_CAPACITY`, doubles only when a push finds the
//!   array full, and never shrinks (removal keeps the allocation).
//! - Removal shifts later elements left by one; order is preserved.
//!
//! Two instantiations are used for figures: `FigureArray<S>` owns its figures,
//! `SharedFigureArray<S>` holds `Rc` handles that callers may keep as well.
//! Aggregates (`areas`, `centers`, `total_surface`, reports) work for both
//! because `Rc<S>` is itself a `Shape`.

use std::fmt;
use std::rc::Rc;

use crate::figure::Shape;
use crate::point::Point;

pub const INITIAL_CAPACITY: usize = 4;

/// Access or removal at `index` while the array holds `len` elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndexOutOfRange {
    pub index: usize,
    pub len: usize,
}

impl fmt::Display for IndexOutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "index {} out of range for array of length {}",
            self.index, self.len
        )
    }
}

impl std::error::Error for IndexOutOfRange {}

#[derive(Clone, Debug)]
pub struct Array<E> {
    data: Vec<E>,
    capacity: usize,
}

/// Figures owned by value.
pub type FigureArray<S> = Array<S>;
/// Figures behind shared handles.
pub type SharedFigureArray<S> = Array<Rc<S>>;

impl<E> Default for Array<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Array<E> {
    pub fn new() -> Self {
        Self {
            data: Vec::with_capacity(INITIAL_CAPACITY),
            capacity: INITIAL_CAPACITY,
        }
    }

    /// Append; amortized O(1).
    pub fn push(&mut self, value: E) {
        if self.data.len() == self.capacity {
            self.capacity *= 2;
            self.data.reserve_exact(self.capacity - self.data.len());
        }
        self.data.push(value);
    }

    /// Remove and return the element at `index`, shifting the tail left.
    pub fn remove(&mut self, index: usize) -> Result<E, IndexOutOfRange> {
        self.check_index(index)?;
        Ok(self.data.remove(index))
    }

    pub fn get(&self, index: usize) -> Result<&E, IndexOutOfRange> {
        self.check_index(index)?;
        Ok(&self.data[index])
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut E, IndexOutOfRange> {
        self.check_index(index)?;
        Ok(&mut self.data[index])
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Logical capacity (the doubling schedule), not the allocator's.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.data.iter()
    }

    #[inline]
    fn check_index(&self, index: usize) -> Result<(), IndexOutOfRange> {
        if index < self.data.len() {
            Ok(())
        } else {
            Err(IndexOutOfRange {
                index,
                len: self.data.len(),
            })
        }
    }
}

impl<E: Shape> Array<E> {
    pub fn areas(&self) -> Vec<f64> {
        self.data.iter().map(Shape::surface).collect()
    }

    pub fn centers(&self) -> Vec<Point<E::Scalar>> {
        self.data.iter().map(Shape::center).collect()
    }

    /// Plain running sum of the areas.
    pub fn total_surface(&self) -> f64 {
        self.data.iter().map(Shape::surface).sum()
    }

    /// Center lines: `"i: center = (x, y)"`, two decimals.
    pub fn center_report(&self) -> String {
        self.data
            .iter()
            .enumerate()
            .map(|(i, e)| format!("{i}: center = {:.2}\n", e.center()))
            .collect()
    }
}

impl<E: Shape + fmt::Display> Array<E> {
    /// Area lines: `"i: <figure> | area = a"`, two decimals.
    pub fn surface_report(&self) -> String {
        self.data
            .iter()
            .enumerate()
            .map(|(i, e)| format!("{i}: {e} | area = {:.2}\n", e.surface()))
            .collect()
    }
}

impl<'a, E> IntoIterator for &'a Array<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<E> FromIterator<E> for Array<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut array = Array::new();
        for e in iter {
            array.push(e);
        }
        array
    }
}

/// One `"[i] element"` line per element.
impl<E: fmt::Display> fmt::Display for Array<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.data.iter().enumerate() {
            writeln!(f, "[{i}] {e}")?;
        }
        Ok(())
    }
}
