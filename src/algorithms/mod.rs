pub mod searching;
pub mod sorting;

pub use searching::{
    binary_search, binary_search_recursive, exponential_search, find_first, find_last,
    interpolation_search, jump_search, linear_search, ternary_search,
};
pub use sorting::{
    COUNTING_SORT_MAX_VALUE, bubble_sort, counting_sort, heap_sort, insertion_sort, merge_sort,
    quick_sort, selection_sort,
};
