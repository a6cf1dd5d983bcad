use std::cmp::Ordering;

use crate::{SortContext, TUNED_PARAMS};

use super::{common, merge_sort_top_down};

pub fn sort<T, E, F>(data: &mut [T], _ctx: &mut SortContext<T>, compare: &F) -> Result<(), E>
where
    T: Clone + Send + Sync,
    E: Send,
    F: Fn(&T, &T) -> Result<Ordering, E> + Sync,
{
    sort_recursive(data, compare)
}

fn sort_recursive<T, E, F>(data: &mut [T], compare: &F) -> Result<(), E>
where
    T: Clone + Send + Sync,
    E: Send,
    F: Fn(&T, &T) -> Result<Ordering, E> + Sync,
{
    let len = data.len();
    if len <= TUNED_PARAMS.parallel_threshold {
        return merge_sort_top_down::sort_recursive(data, compare);
    }

    let mid = len >> 1;
    let mut left = data[..mid].to_vec();
    let mut right = data[mid..].to_vec();

    // Both halves must finish before the merge reads them.
    let (left_result, right_result) = rayon::join(
        || sort_recursive(&mut left, compare),
        || sort_recursive(&mut right, compare),
    );
    left_result?;
    right_result?;

    common::merge_into(&left, &right, data, compare)
}
