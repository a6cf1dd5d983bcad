pub(crate) mod bubble_sort;
pub(crate) mod common;
pub(crate) mod merge_sort_bottom_up;
pub(crate) mod merge_sort_parallel;
pub(crate) mod merge_sort_top_down;
