use std::fmt::Display;
use std::str::FromStr;

use log::trace;

use crate::SortError;

/// Reads a bracketed, comma-separated sequence such as `"[38, 27, 43]"`.
///
/// Whitespace around items and a single trailing comma are accepted. Anything
/// that is not a sequence (a bare scalar, unbalanced brackets, an empty or
/// unparsable item) is rejected with [`SortError::InvalidArgument`].
pub fn parse_sequence<T>(text: &str) -> Result<Vec<T>, SortError>
where
    T: FromStr,
    T::Err: Display,
{
    let trimmed = text.trim();
    let inner = trimmed
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(|| {
            SortError::InvalidArgument(format!("expected a bracketed sequence, got `{trimmed}`"))
        })?
        .trim();

    if inner.is_empty() {
        trace!("parsed empty sequence");
        return Ok(Vec::new());
    }

    let inner = inner.strip_suffix(',').unwrap_or(inner);
    let items = inner
        .split(',')
        .enumerate()
        .map(|(idx, item)| {
            let item = item.trim();
            if item.is_empty() {
                return Err(SortError::InvalidArgument(format!(
                    "empty item at position {idx}"
                )));
            }
            item.parse::<T>().map_err(|err| {
                SortError::InvalidArgument(format!("item {idx} (`{item}`): {err}"))
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    trace!("parsed sequence of {} items", items.len());
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_bracketed_lists() {
        assert_eq!(
            parse_sequence::<i64>("[38, 27, 43, 3, 9, 82, 10]"),
            Ok(vec![38, 27, 43, 3, 9, 82, 10])
        );
        assert_eq!(parse_sequence::<i64>("  [ -1,2 ,3, ] "), Ok(vec![-1, 2, 3]));
        assert_eq!(parse_sequence::<i64>("[]"), Ok(vec![]));
        assert_eq!(parse_sequence::<i64>("[  ]"), Ok(vec![]));
        assert_eq!(parse_sequence::<f64>("[1.5, -0.25]"), Ok(vec![1.5, -0.25]));
    }

    #[test]
    fn rejects_non_sequences() {
        let cases = ["42", "", "[1, 2", "1, 2]", "[1,,2]", "[,]", "[1, x]", "[[1]]"];
        for case in cases {
            assert!(
                matches!(
                    parse_sequence::<i64>(case),
                    Err(SortError::InvalidArgument(_))
                ),
                "input={case:?}",
            );
        }
    }
}
