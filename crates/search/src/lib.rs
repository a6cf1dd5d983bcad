use std::cmp::Ordering;
use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

use log::trace;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchError {
    /// There is nothing to search in.
    EmptyInput,

    /// A probed element and the target had no defined order.
    IncomparableElements { probe: String, target: String },
}

impl Display for SearchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "cannot search in an empty sequence"),
            Self::IncomparableElements { probe, target } => {
                write!(f, "element {probe} is not comparable with target {target}")
            }
        }
    }
}

impl Error for SearchError {}

/// Binary search over `sorted`, which must be in ascending order.
///
/// Returns `Ok(Some(index))` of a matching element, `Ok(None)` when the target is
/// absent. Unsorted input is not detected and gives an unspecified answer.
pub fn binary_search<T>(sorted: &[T], target: &T) -> Result<Option<usize>, SearchError>
where
    T: PartialOrd + Debug,
{
    if sorted.is_empty() {
        return Err(SearchError::EmptyInput);
    }

    let mut low = 0usize;
    let mut high = sorted.len() - 1;
    while low <= high {
        let mid = low + ((high - low) >> 1);
        let probe = &sorted[mid];
        trace!("probe index {mid} in [{low}, {high}]");

        match probe.partial_cmp(target) {
            Some(Ordering::Equal) => return Ok(Some(mid)),
            Some(Ordering::Less) => low = mid + 1,
            Some(Ordering::Greater) => {
                if mid == 0 {
                    break;
                }
                high = mid - 1;
            }
            None => {
                return Err(SearchError::IncomparableElements {
                    probe: format!("{probe:?}"),
                    target: format!("{target:?}"),
                });
            }
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    #[test]
    fn known_cases() {
        let cases: [(&[i64], i64, Option<usize>); 7] = [
            (&[2, 3, 4, 10, 40], 10, Some(3)),
            (&[2, 3, 4, 10, 40], 2, Some(0)),
            (&[2, 3, 4, 10, 40], 40, Some(4)),
            (&[2, 3, 4, 10, 40], 100, None),
            (&[1, 2, 3, 4, 5], 6, None),
            (&[1, 2, 3, 4, 5], 1, Some(0)),
            (&[7], -3, None),
        ];

        for (sorted, target, expected) in cases {
            assert_eq!(
                binary_search(sorted, &target),
                Ok(expected),
                "sorted={sorted:?} target={target}",
            );
        }
    }

    #[test]
    fn empty_input_is_an_error() {
        let empty: [u32; 0] = [];
        assert_eq!(binary_search(&empty, &1), Err(SearchError::EmptyInput));
    }

    #[test]
    fn incomparable_target() {
        let result = binary_search(&[1.0, 2.0, 3.0], &f64::NAN);
        assert_eq!(
            result,
            Err(SearchError::IncomparableElements {
                probe: "2.0".to_string(),
                target: "NaN".to_string(),
            })
        );
    }

    #[test]
    fn duplicates_return_a_matching_index() {
        let sorted = [1, 3, 3, 3, 3, 8];
        let Ok(Some(idx)) = binary_search(&sorted, &3) else {
            panic!("3 should be found");
        };
        assert_eq!(sorted[idx], 3);
    }

    #[test]
    fn agrees_with_std() {
        let mut rng = StdRng::seed_from_u64(0xB1_5EA7);
        for &size in &[1_usize, 2, 3, 16, 100, 1025] {
            let mut sorted = (0..size)
                .map(|_| rng.random_range(0..4 * size as u64))
                .collect::<Vec<_>>();
            sorted.sort();
            sorted.dedup();

            for target in 0..(4 * size as u64 + 2) {
                let expected = sorted.binary_search(&target).ok();
                assert_eq!(binary_search(&sorted, &target), Ok(expected), "target={target}");
            }
        }
    }
}
