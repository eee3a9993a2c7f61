//! In-place QuickSort with the Lomuto partition scheme.
//!
//! The pivot is always the last element of the segment being partitioned, so
//! already sorted and reverse sorted input hit the O(n²) worst case with a
//! recursion depth equal to the input length. The result is not stable.

/// Sorts `seq` in ascending order, in place.
///
/// Sequences with fewer than two elements are left untouched.
pub fn sort<T: Ord>(seq: &mut [T]) {
    if seq.len() < 2 {
        return;
    }
    let high = seq.len() - 1;
    quicksort(seq, 0, high);
}

/// Sorts the inclusive segment `seq[low..=high]`.
///
/// Does nothing when `low >= high`. Panics if `high` is out of bounds and
/// the segment holds more than one element.
pub fn quicksort<T: Ord>(seq: &mut [T], low: usize, high: usize) {
    if low >= high {
        return;
    }

    let p = partition(seq, low, high);

    // p - 1 would underflow when the pivot lands on index 0.
    if p > low {
        quicksort(seq, low, p - 1);
    }
    quicksort(seq, p + 1, high);
}

/// Partitions `seq[low..=high]` around `seq[high]` and returns the pivot's
/// final index.
///
/// Everything left of the returned index is strictly smaller than the pivot,
/// everything right of it is greater or equal.
pub fn partition<T: Ord>(seq: &mut [T], low: usize, high: usize) -> usize {
    // The pivot stays at `high` for the whole scan.
    let mut i = low;
    for j in low..high {
        if seq[j] < seq[high] {
            seq.swap(i, j);
            i += 1;
        }
    }
    seq.swap(i, high);
    i
}

/// Returns a sorted copy of `seq`, leaving the original untouched.
pub fn sorted_copy<T: Ord + Clone>(seq: &[T]) -> Vec<T> {
    let mut copy = seq.to_vec();
    sort(&mut copy);
    copy
}

/// True when every adjacent pair is in non-descending order.
pub fn is_sorted<T: Ord>(seq: &[T]) -> bool {
    seq.windows(2).all(|pair| pair[0] <= pair[1])
}
