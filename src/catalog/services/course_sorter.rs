use crate::catalog::domain::Course;
use std::cmp::Ordering;

/// CourseSorter service producing the canonical catalog ordering
///
/// A stable top-down merge sort with guaranteed O(n log n) comparisons in
/// every case. The canonical listing must be deterministic for ties
/// (records sharing an identifier keep their input relative order) and
/// must stay bounded on pathological inputs, which rules out unstable
/// partition sorts and anything with a quadratic worst case.
pub struct CourseSorter;

impl CourseSorter {
    /// Sorts courses by their raw course number.
    ///
    /// The key is compared byte-wise, not case-folded: in ASCII, uppercase
    /// identifiers sort before lowercase ones. Normalization belongs to the
    /// keyed lookup structures, never to the presentation ordering.
    pub fn sort_by_number(courses: Vec<Course>) -> Vec<Course> {
        Self::sort_by(courses, |a, b| a.number().cmp(b.number()))
    }

    /// Stable merge sort with a caller-supplied comparator.
    ///
    /// Kept generic so ordering behavior (including comparison counts on
    /// adversarial inputs) can be exercised independently of the course
    /// key.
    pub fn sort_by<T, F>(mut items: Vec<T>, mut compare: F) -> Vec<T>
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
    {
        let len = items.len();
        if len > 1 {
            let mut scratch = items.clone();
            sort_range(&mut items, &mut scratch, 0, len, &mut compare);
        }
        items
    }
}

/// Recursively sorts `items[lo..hi]`, using `scratch` as the merge buffer
fn sort_range<T, F>(items: &mut [T], scratch: &mut [T], lo: usize, hi: usize, compare: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if hi - lo < 2 {
        return;
    }

    let mid = lo + (hi - lo) / 2;
    sort_range(items, scratch, lo, mid, compare);
    sort_range(items, scratch, mid, hi, compare);
    merge_runs(items, scratch, lo, mid, hi, compare);
}

/// Merges the sorted runs `items[lo..mid]` and `items[mid..hi]`.
///
/// Takes from the left run on ties, which is what makes the sort stable.
fn merge_runs<T, F>(
    items: &mut [T],
    scratch: &mut [T],
    lo: usize,
    mid: usize,
    hi: usize,
    compare: &mut F,
) where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    scratch[lo..hi].clone_from_slice(&items[lo..hi]);

    let mut left = lo;
    let mut right = mid;
    let mut out = lo;

    while left < mid && right < hi {
        if compare(&scratch[left], &scratch[right]) != Ordering::Greater {
            items[out] = scratch[left].clone();
            left += 1;
        } else {
            items[out] = scratch[right].clone();
            right += 1;
        }
        out += 1;
    }

    while left < mid {
        items[out] = scratch[left].clone();
        left += 1;
        out += 1;
    }

    while right < hi {
        items[out] = scratch[right].clone();
        right += 1;
        out += 1;
    }
}
