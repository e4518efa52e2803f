use core::cmp::Ordering;

/// Sorts `v` in place using quicksort with a Hoare partition.
///
/// The pivot of every range is the element sitting at its middle index when
/// partitioning starts. Not stable. Returns the first error produced by
/// `compare`, leaving `v` a permutation of its input.
pub(crate) fn quick_sort<T, E, F>(v: &mut [T], mut compare: F) -> Result<(), E>
where
    F: FnMut(&T, &T) -> Result<Ordering, E>,
{
    if v.len() < 2 {
        return Ok(());
    }
    // `len <= isize::MAX` for every slice the list can hand out.
    let high = v.len() as isize - 1;
    sort_range(v, 0, high, &mut compare)
}

fn sort_range<T, E, F>(v: &mut [T], mut low: isize, mut high: isize, compare: &mut F) -> Result<(), E>
where
    F: FnMut(&T, &T) -> Result<Ordering, E>,
{
    while low < high {
        let (l, r) = partition(v, low, high, compare)?;
        // `low..=r` and `l..=high` are disjoint. Recurse into the shorter one
        // and loop on the other, keeping the stack depth logarithmic.
        if r - low < high - l {
            if low < r {
                sort_range(v, low, r, compare)?;
            }
            low = l;
        } else {
            if l < high {
                sort_range(v, l, high, compare)?;
            }
            high = r;
        }
    }
    Ok(())
}

/// Partitions `v[low..=high]`, returning the crossed cursors `(l, r)`.
///
/// Everything in `low..=r` compares less than or equal to the pivot and
/// everything in `l..=high` greater than or equal to it.
fn partition<T, E, F>(v: &mut [T], low: isize, high: isize, compare: &mut F) -> Result<(isize, isize), E>
where
    F: FnMut(&T, &T) -> Result<Ordering, E>,
{
    // Follow the pivot element through swaps, so every comparison sees the
    // value that was in the middle when partitioning began.
    let mut pivot = (low + (high - low) / 2) as usize;
    let (mut l, mut r) = (low, high);

    while l <= r {
        while compare(&v[l as usize], &v[pivot])? == Ordering::Less {
            l += 1;
        }
        while compare(&v[r as usize], &v[pivot])? == Ordering::Greater {
            r -= 1;
        }
        if l <= r {
            let (i, j) = (l as usize, r as usize);
            v.swap(i, j);
            if pivot == i {
                pivot = j;
            } else if pivot == j {
                pivot = i;
            }
            l += 1;
            r -= 1;
        }
    }
    Ok((l, r))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    fn sort<T: Ord>(v: &mut [T]) {
        let _ = quick_sort(v, |a, b| Ok::<_, Infallible>(a.cmp(b)));
    }

    #[test]
    fn sorts_duplicates() {
        let mut v = [3, 1, 2, 1, 3, 0];
        sort(&mut v);
        assert_eq!(v, [0, 1, 1, 2, 3, 3]);
    }

    #[test]
    fn empty_and_single() {
        let mut empty: [i32; 0] = [];
        sort(&mut empty);
        assert_eq!(empty, []);

        let mut one = [7];
        sort(&mut one);
        assert_eq!(one, [7]);
    }

    #[test]
    fn sorted_and_reverse_sorted() {
        let mut v = [1, 2, 3, 4, 5, 6, 7];
        sort(&mut v);
        assert_eq!(v, [1, 2, 3, 4, 5, 6, 7]);

        let mut v = [7, 6, 5, 4, 3, 2, 1];
        sort(&mut v);
        assert_eq!(v, [1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn all_equal() {
        let mut v = [5; 33];
        sort(&mut v);
        assert_eq!(v, [5; 33]);
    }

    #[test]
    fn equal_keys_are_not_kept_in_order() {
        let mut v = [(1, 'a'), (0, 'b'), (1, 'c')];
        let _ = quick_sort(&mut v, |a, b| Ok::<_, Infallible>(a.0.cmp(&b.0)));
        assert_eq!(v, [(0, 'b'), (1, 'c'), (1, 'a')]);
    }

    #[test]
    fn comparator_error_is_returned() {
        let mut v = [Some(2), None, Some(1)];
        let res = quick_sort(&mut v, |a, b| match (a, b) {
            (Some(a), Some(b)) => Ok(a.cmp(b)),
            _ => Err("null operand"),
        });
        assert_eq!(res, Err("null operand"));

        v.sort();
        assert_eq!(v, [None, Some(1), Some(2)]);
    }

    #[test]
    fn comparator_calls_are_bounded() {
        let mut calls = 0usize;
        let mut v: Vec<u32> = (0..1000).rev().collect();
        let _ = quick_sort(&mut v, |a, b| {
            calls += 1;
            Ok::<_, Infallible>(a.cmp(b))
        });
        assert!(v.windows(2).all(|w| w[0] <= w[1]));
        assert!(calls < 1000 * 1000);
    }

    #[test]
    #[should_panic]
    fn inconsistent_comparator_panics() {
        let mut v = [3, 1, 2];
        let _ = quick_sort(&mut v, |_, _| Ok::<_, Infallible>(Ordering::Less));
    }

    /// Builds `0..n` arranged so the middle element of every range the
    /// partition visits is that range's maximum.
    fn middle_maximum(n: usize) -> Vec<u32> {
        let mut vals = vec![0u32; n];
        let mut idx: Vec<usize> = (0..n).collect();
        for k in (1..n).rev() {
            let m = k / 2;
            vals[idx[m]] = k as u32;
            idx.swap(m, k);
        }
        vals
    }

    #[test]
    fn middle_maximum_input_keeps_stack_shallow() {
        let n = 10_000;
        // Linear recursion over this input needs far more than 128 KiB.
        let sorted = std::thread::Builder::new()
            .stack_size(128 * 1024)
            .spawn(move || {
                let mut v = middle_maximum(n);
                sort(&mut v);
                v
            })
            .unwrap()
            .join()
            .unwrap();
        assert!(sorted.iter().copied().eq(0..n as u32));
    }
}
