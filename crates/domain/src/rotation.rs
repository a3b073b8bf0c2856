// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Deterministic rotation order for the assignment scan.
//!
//! The base order sorts employees by employee code, then internal id, so
//! the result never depends on input order. An offset rotates the base
//! order left, giving a different starting employee from one scheduling
//! period to the next without changing relative order.

use crate::types::Employee;

/// Computes the rotation order of a set of employees.
///
/// # Arguments
///
/// * `employees` - The eligible employee pool
/// * `offset` - Left rotation applied to the sorted order, modulo the pool
///   size. Negative offsets rotate right.
#[must_use]
pub fn rotation_order(employees: &[Employee], offset: i64) -> Vec<&Employee> {
    let mut ordered: Vec<&Employee> = employees.iter().collect();
    ordered.sort_by(|a, b| {
        a.employee_code
            .cmp(&b.employee_code)
            .then_with(|| a.internal_id.cmp(&b.internal_id))
    });

    if ordered.len() > 1 {
        let shift: usize = rotation_shift(offset, ordered.len());
        ordered.rotate_left(shift);
    }

    ordered
}

/// Reduces an offset to a left-rotation amount for a pool of `len` employees.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss
)]
const fn rotation_shift(offset: i64, len: usize) -> usize {
    // Safe casts: len is a slice length and the remainder is in 0..len
    offset.rem_euclid(len as i64) as usize
}
