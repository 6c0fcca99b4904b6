// Adjacent-swap bubble sort with early exit.
#[cfg(feature = "bubble_sort")]
pub mod rust_bubble;

// Shift-left insertion sort.
#[cfg(feature = "insertion_sort")]
pub mod rust_insertion;
