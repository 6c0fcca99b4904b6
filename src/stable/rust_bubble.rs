use std::cmp::Ordering;

sort_impl!("rust_bubble_stable");

/// Sorts the slice in ascending order using bubble sort.
///
/// This sort is stable (i.e., does not reorder equal elements), in-place
/// (i.e., does not allocate), and *O*(*n*^2) worst-case. Already sorted input is detected after a
/// single pass.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    bubble_sort(v, |a, b| a.lt(b));
}

/// Sorts the slice with a comparator function using bubble sort.
///
/// Same properties as [`sort`]. If the comparator does not implement a total order the resulting
/// order is unspecified, but the slice always remains a permutation of its input.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    bubble_sort(v, |a, b| compare(a, b) == Ordering::Less);
}

// --- IMPL ---

fn bubble_sort<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    // After pass `i` the largest `i + 1` elements are in their final position, so at most
    // `len - 1` passes are needed.
    for pass in 0..(len - 1) {
        let mut swapped = false;

        for i in 0..(len - 1 - pass) {
            // Only strictly out of order pairs are swapped, equal elements keep their order.
            if is_less(&v[i + 1], &v[i]) {
                v.swap(i, i + 1);
                swapped = true;
            }
        }

        if !swapped {
            break;
        }
    }
}
