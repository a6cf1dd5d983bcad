mod algorithms;
mod error;
mod parse;

use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt::Debug;

use log::debug;

pub use error::SortError;
pub use parse::parse_sequence;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SortAlgorithm {
    MergeSortTopDown,
    MergeSortBottomUp,
    MergeSortParallel,
    BubbleSort,
}

pub const ALL_ALGORITHMS: [SortAlgorithm; 4] = [
    SortAlgorithm::MergeSortTopDown,
    SortAlgorithm::MergeSortBottomUp,
    SortAlgorithm::MergeSortParallel,
    SortAlgorithm::BubbleSort,
];

pub fn all_algorithms() -> &'static [SortAlgorithm] {
    &ALL_ALGORITHMS
}

pub fn algorithm_name(algo: SortAlgorithm) -> &'static str {
    match algo {
        SortAlgorithm::MergeSortTopDown => "merge_sort_top_down",
        SortAlgorithm::MergeSortBottomUp => "merge_sort_bottom_up",
        SortAlgorithm::MergeSortParallel => "merge_sort_parallel",
        SortAlgorithm::BubbleSort => "bubble_sort",
    }
}

#[derive(Clone, Copy, Debug)]
pub struct TunedParams {
    pub parallel_threshold: usize,
}

pub const TUNED_PARAMS: TunedParams = TunedParams {
    parallel_threshold: 4096,
};

#[derive(Clone, Debug)]
pub struct SortContext<T> {
    scratch: Vec<T>,
    staging: Vec<T>,
}

impl<T> Default for SortContext<T> {
    fn default() -> Self {
        Self {
            scratch: Vec::new(),
            staging: Vec::new(),
        }
    }
}

impl<T: Clone> SortContext<T> {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub(crate) fn load_scratch(&mut self, data: &[T]) -> &mut [T] {
        self.scratch.clear();
        self.scratch.extend_from_slice(data);
        &mut self.scratch
    }
}

/// Stable in-place merge sort (top-down, fresh halves per call).
///
/// Equal elements keep their input order.
pub fn merge_sort<T: Ord + Clone>(data: &mut [T]) {
    let Ok(()) = algorithms::merge_sort_top_down::sort_recursive(data, &total_order::<T>);
}

/// Returning form of [`merge_sort`].
pub fn merge_sorted<T, I>(items: I) -> Vec<T>
where
    T: Ord + Clone,
    I: IntoIterator<Item = T>,
{
    let mut data = items.into_iter().collect::<Vec<_>>();
    merge_sort(&mut data);
    data
}

/// Stable merge sort for partially ordered elements.
///
/// Fails with [`SortError::IncomparableElements`] when two elements have no
/// order. On failure `data` is left exactly as it was.
pub fn try_merge_sort<T>(data: &mut [T]) -> Result<(), SortError>
where
    T: PartialOrd + Clone + Debug,
{
    try_merge_sort_by(data, T::partial_cmp)
}

pub fn try_merge_sort_by<T, F>(data: &mut [T], compare: F) -> Result<(), SortError>
where
    T: Clone + Debug,
    F: Fn(&T, &T) -> Option<Ordering>,
{
    let mut staging = data.to_vec();
    algorithms::merge_sort_top_down::sort_recursive(&mut staging, &checked(compare))?;
    data.clone_from_slice(&staging);
    Ok(())
}

/// Returning form of [`try_merge_sort`].
pub fn try_merge_sorted<T, I>(items: I) -> Result<Vec<T>, SortError>
where
    T: PartialOrd + Clone + Debug,
    I: IntoIterator<Item = T>,
{
    let mut data = items.into_iter().collect::<Vec<_>>();
    algorithms::merge_sort_top_down::sort_recursive(&mut data, &checked(T::partial_cmp))?;
    Ok(data)
}

pub fn sort_with<T>(algo: SortAlgorithm, data: &mut [T])
where
    T: Ord + Clone + Send + Sync,
{
    let mut ctx = SortContext::default();
    sort_with_ctx(algo, data, &mut ctx);
}

pub fn sort_with_ctx<T>(algo: SortAlgorithm, data: &mut [T], ctx: &mut SortContext<T>)
where
    T: Ord + Clone + Send + Sync,
{
    debug!("{} on {} elements", algorithm_name(algo), data.len());
    let Ok(()) = run(algo, data, ctx, &total_order::<T>);
}

pub fn try_sort_with<T>(algo: SortAlgorithm, data: &mut [T]) -> Result<(), SortError>
where
    T: PartialOrd + Clone + Debug + Send + Sync,
{
    let mut ctx = SortContext::default();
    try_sort_with_ctx(algo, data, &mut ctx)
}

pub fn try_sort_with_ctx<T>(
    algo: SortAlgorithm,
    data: &mut [T],
    ctx: &mut SortContext<T>,
) -> Result<(), SortError>
where
    T: PartialOrd + Clone + Debug + Send + Sync,
{
    try_sort_by_with_ctx(algo, data, ctx, T::partial_cmp)
}

/// Sorts `data` with `algo`, ordering elements by `compare`.
///
/// `compare` returning `None` aborts the sort with
/// [`SortError::IncomparableElements`]; `data` is only written once the whole
/// sort has succeeded.
pub fn try_sort_by_with_ctx<T, F>(
    algo: SortAlgorithm,
    data: &mut [T],
    ctx: &mut SortContext<T>,
    compare: F,
) -> Result<(), SortError>
where
    T: Clone + Debug + Send + Sync,
    F: Fn(&T, &T) -> Option<Ordering> + Sync,
{
    debug!("{} (checked) on {} elements", algorithm_name(algo), data.len());

    let mut staging = std::mem::take(&mut ctx.staging);
    staging.clear();
    staging.extend_from_slice(data);

    let result = run(algo, &mut staging, ctx, &checked(compare));
    match &result {
        Ok(()) => data.clone_from_slice(&staging),
        Err(err) => debug!("{} aborted: {err}", algorithm_name(algo)),
    }

    ctx.staging = staging;
    result
}

fn run<T, E, F>(
    algo: SortAlgorithm,
    data: &mut [T],
    ctx: &mut SortContext<T>,
    compare: &F,
) -> Result<(), E>
where
    T: Clone + Send + Sync,
    E: Send,
    F: Fn(&T, &T) -> Result<Ordering, E> + Sync,
{
    match algo {
        SortAlgorithm::MergeSortTopDown => {
            algorithms::merge_sort_top_down::sort(data, ctx, compare)
        }
        SortAlgorithm::MergeSortBottomUp => {
            algorithms::merge_sort_bottom_up::sort(data, ctx, compare)
        }
        SortAlgorithm::MergeSortParallel => {
            algorithms::merge_sort_parallel::sort(data, ctx, compare)
        }
        SortAlgorithm::BubbleSort => algorithms::bubble_sort::sort(data, ctx, compare),
    }
}

fn total_order<T: Ord>(a: &T, b: &T) -> Result<Ordering, Infallible> {
    Ok(a.cmp(b))
}

fn checked<T, F>(compare: F) -> impl Fn(&T, &T) -> Result<Ordering, SortError>
where
    T: Debug,
    F: Fn(&T, &T) -> Option<Ordering>,
{
    move |a: &T, b: &T| compare(a, b).ok_or_else(|| SortError::incomparable(a, b))
}
