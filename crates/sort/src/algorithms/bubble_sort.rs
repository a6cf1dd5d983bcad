use std::cmp::Ordering;

use crate::SortContext;

/// Adjacent-swap passes. After pass `p` the last `p + 1` slots hold their final
/// values; a pass without swaps ends the sort early.
pub fn sort<T, E, F>(data: &mut [T], _ctx: &mut SortContext<T>, compare: &F) -> Result<(), E>
where
    F: Fn(&T, &T) -> Result<Ordering, E>,
{
    let len = data.len();
    for pass in 0..len {
        let mut swapped = false;
        for j in 0..(len - pass - 1) {
            if compare(&data[j], &data[j + 1])? == Ordering::Greater {
                data.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
    Ok(())
}
