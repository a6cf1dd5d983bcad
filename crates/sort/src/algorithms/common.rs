use std::cmp::Ordering;

/// Merges the sorted runs `left` and `right` into `dst`.
///
/// Three cursors walk `left`, `right` and `dst`. A right element is taken only
/// when it is strictly less than the current left element, so equal keys keep
/// their left-before-right order. Once either run is exhausted the rest of the
/// other run is copied in one pass.
///
/// A failed comparison returns before anything is written for that step.
#[inline]
pub fn merge_into<T, E, F>(left: &[T], right: &[T], dst: &mut [T], compare: &F) -> Result<(), E>
where
    T: Clone,
    F: Fn(&T, &T) -> Result<Ordering, E>,
{
    debug_assert_eq!(left.len() + right.len(), dst.len());

    let mut i = 0usize;
    let mut j = 0usize;
    let mut k = 0usize;

    while i < left.len() && j < right.len() {
        match compare(&left[i], &right[j])? {
            Ordering::Greater => {
                dst[k] = right[j].clone();
                j += 1;
            }
            Ordering::Less | Ordering::Equal => {
                dst[k] = left[i].clone();
                i += 1;
            }
        }
        k += 1;
    }

    if i < left.len() {
        dst[k..].clone_from_slice(&left[i..]);
    } else {
        dst[k..].clone_from_slice(&right[j..]);
    }
    Ok(())
}

#[inline]
pub fn is_sorted_by<T, E, F>(data: &[T], compare: &F) -> Result<bool, E>
where
    F: Fn(&T, &T) -> Result<Ordering, E>,
{
    for pair in data.windows(2) {
        if compare(&pair[0], &pair[1])? == Ordering::Greater {
            return Ok(false);
        }
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use std::convert::Infallible;

    use super::*;

    fn by_key(a: &(u8, char), b: &(u8, char)) -> Result<Ordering, Infallible> {
        Ok(a.0.cmp(&b.0))
    }

    #[test]
    fn merge_prefers_left_on_ties() {
        let left = [(1, 'a'), (3, 'b')];
        let right = [(1, 'c'), (3, 'd'), (4, 'e')];
        let mut dst = [(0, ' '); 5];

        let Ok(()) = merge_into(&left, &right, &mut dst, &by_key);

        assert_eq!(dst, [(1, 'a'), (1, 'c'), (3, 'b'), (3, 'd'), (4, 'e')]);
    }

    #[test]
    fn merge_with_empty_side_copies_other() {
        let left: [(u8, char); 0] = [];
        let right = [(2, 'x'), (5, 'y')];
        let mut dst = [(0, ' '); 2];

        let Ok(()) = merge_into(&left, &right, &mut dst, &by_key);
        assert_eq!(dst, right);

        let Ok(()) = merge_into(&right, &left, &mut dst, &by_key);
        assert_eq!(dst, right);
    }

    #[test]
    fn failed_comparison_leaves_step_uncommitted() {
        let left = [1.0, f64::NAN];
        let right = [2.0];
        let mut dst = [-1.0; 3];

        let result = merge_into(&left, &right, &mut dst, &|a: &f64, b: &f64| {
            a.partial_cmp(b).ok_or(())
        });

        assert_eq!(result, Err(()));
        assert_eq!(dst, [1.0, -1.0, -1.0]);
    }

    #[test]
    fn sortedness_check() {
        let Ok(sorted) = is_sorted_by(&[(1, 'z'), (1, 'a'), (2, 'b')], &by_key);
        assert!(sorted);
        let Ok(sorted) = is_sorted_by(&[(2, 'a'), (1, 'b')], &by_key);
        assert!(!sorted);
        let Ok(sorted) = is_sorted_by(&[], &by_key);
        assert!(sorted);
    }
}
