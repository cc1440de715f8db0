//! Layout of a square matrix stored in a flat vector.
//!
//! Directed graphs use the full `capacity x capacity` square in row-major
//! order. Undirected graphs store only the lower triangle including the
//! diagonal, so that an edge and its mirror share a single cell.

use crate::core::marker::EdgeType;

#[allow(clippy::len_without_is_empty)]
pub trait MatrixResize<E>: Default + IntoIterator<Item = Option<E>> {
    fn with_capacity(capacity: usize) -> Self;
    fn resize_with_none(&mut self, new_len: usize);
    fn push(&mut self, value: Option<E>);
    fn len(&self) -> usize;
}

pub fn size_of(edge_type: EdgeType, capacity: usize) -> usize {
    if edge_type.is_directed() {
        capacity * capacity
    } else {
        capacity * (capacity + 1) / 2
    }
}

/// Grows the matrix to the new capacity, keeping every present cell at the
/// same coordinates.
pub fn resize<E, M: MatrixResize<E>>(edge_type: EdgeType, prev: &mut M, capacity: usize) {
    let prev_len = prev.len();
    let len = size_of(edge_type, capacity);

    if len <= prev_len {
        return;
    }

    if edge_type.is_directed() {
        let mut next = M::with_capacity(len);
        let prev_capacity = (prev_len as f64).sqrt() as usize;

        for (i, value) in std::mem::take(prev).into_iter().enumerate() {
            next.push(value);

            // End of a row of the old square, pad it to the new width.
            if (i + 1) % prev_capacity == 0 {
                let padded = next.len() + capacity - prev_capacity;
                next.resize_with_none(padded);
            }
        }

        next.resize_with_none(len);
        *prev = next;
    } else {
        // Rows of the lower triangle only get appended.
        prev.resize_with_none(len);
    }
}

pub fn index(edge_type: EdgeType, row: usize, col: usize, capacity: usize) -> usize {
    if edge_type.is_directed() {
        row * capacity + col
    } else {
        let (row, col) = if row >= col { (row, col) } else { (col, row) };
        // Rows before `row` hold 1 + 2 + ... + row cells.
        row * (row + 1) / 2 + col
    }
}
