use std::cmp::Ordering;

sort_impl!("rust_insertion_stable");

/// Sorts the slice in ascending order using insertion sort.
///
/// This sort is stable (i.e., does not reorder equal elements), in-place
/// (i.e., does not allocate), and *O*(*n*^2) worst-case, *O*(*n*) for already sorted input.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    insertion_sort(v, |a, b| a.lt(b));
}

/// Sorts the slice with a comparator function using insertion sort.
///
/// Same properties as [`sort`]. If the comparator does not implement a total order the resulting
/// order is unspecified, but the slice always remains a permutation of its input.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    insertion_sort(v, |a, b| compare(a, b) == Ordering::Less);
}

// --- IMPL ---

fn insertion_sort<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    if v.len() >= 2 {
        insertion_sort_shift_left(v, 1, &mut is_less);
    }
}

/// Sort `v` assuming `v[..offset]` is already sorted.
///
/// # Panics
///
/// Panics if `offset` is zero or larger than `v.len()`.
pub fn insertion_sort_shift_left<T, F>(v: &mut [T], offset: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    assert!(
        offset != 0 && offset <= len,
        "offset {offset} out of range for slice of length {len}"
    );

    for i in offset..len {
        insert_tail(&mut v[..=i], is_less);
    }
}

/// Moves the last element of `v` leftwards past every strictly greater element, assuming
/// `v[..v.len() - 1]` is sorted.
fn insert_tail<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let tail = v.len() - 1;

    let mut hole = tail;
    while hole > 0 && is_less(&v[tail], &v[hole - 1]) {
        hole -= 1;
    }

    // A panicking comparison leaves `v` untouched, the rotation is the only write.
    v[hole..].rotate_right(1);
}
