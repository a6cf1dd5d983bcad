use std::cmp::Ordering;

use crate::SortContext;

use super::common;

pub fn sort<T, E, F>(data: &mut [T], _ctx: &mut SortContext<T>, compare: &F) -> Result<(), E>
where
    T: Clone,
    F: Fn(&T, &T) -> Result<Ordering, E>,
{
    sort_recursive(data, compare)
}

/// Each call owns fresh copies of its two halves; they are dropped once merged
/// back into `data`, so live auxiliary space stays within `2 * data.len()`.
pub fn sort_recursive<T, E, F>(data: &mut [T], compare: &F) -> Result<(), E>
where
    T: Clone,
    F: Fn(&T, &T) -> Result<Ordering, E>,
{
    let len = data.len();
    if len < 2 {
        return Ok(());
    }

    let mid = len >> 1;
    let mut left = data[..mid].to_vec();
    let mut right = data[mid..].to_vec();

    sort_recursive(&mut left, compare)?;
    sort_recursive(&mut right, compare)?;

    common::merge_into(&left, &right, data, compare)
}
