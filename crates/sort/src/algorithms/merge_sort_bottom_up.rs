use std::cmp::Ordering;

use crate::SortContext;

use super::common;

/// Iterative merge sort: runs of width 1, 2, 4, ... are merged back and forth
/// between `data` and the context scratch buffer, so no recursion is involved.
pub fn sort<T, E, F>(data: &mut [T], ctx: &mut SortContext<T>, compare: &F) -> Result<(), E>
where
    T: Clone,
    F: Fn(&T, &T) -> Result<Ordering, E>,
{
    let len = data.len();
    if len < 2 {
        return Ok(());
    }
    if common::is_sorted_by(data, compare)? {
        return Ok(());
    }

    let buf = ctx.load_scratch(data);

    let mut width = 1usize;
    let mut src_is_buf = false;
    while width < len {
        if src_is_buf {
            merge_pass(buf, data, width, compare)?;
        } else {
            merge_pass(data, buf, width, compare)?;
        }
        src_is_buf = !src_is_buf;
        width <<= 1;
    }

    if src_is_buf {
        data.clone_from_slice(buf);
    }
    Ok(())
}

fn merge_pass<T, E, F>(src: &[T], dst: &mut [T], width: usize, compare: &F) -> Result<(), E>
where
    T: Clone,
    F: Fn(&T, &T) -> Result<Ordering, E>,
{
    let len = src.len();
    let mut left = 0usize;
    while left < len {
        let mid = (left + width).min(len);
        let right = (mid + width).min(len);

        if mid >= right || compare(&src[mid - 1], &src[mid])? != Ordering::Greater {
            dst[left..right].clone_from_slice(&src[left..right]);
        } else {
            common::merge_into(
                &src[left..mid],
                &src[mid..right],
                &mut dst[left..right],
                compare,
            )?;
        }

        left = right;
    }
    Ok(())
}
