//! A growable, array backed list.
//!
//! [`ArrayList`] maps the dense index range `0..len` to its elements, keeps
//! them in insertion order, and sorts them in place with a caller supplied
//! comparator.
//!
//! ```
//! use array_list::ArrayList;
//!
//! let mut list = ArrayList::new();
//! list.push(4);
//! list.push(1);
//! list.insert(1, 3)?;
//! assert_eq!(list.to_string(), "[4, 3, 1]");
//!
//! list.sort();
//! assert_eq!(list, [1, 3, 4]);
//! assert_eq!(list.remove(0)?, 1);
//! # Ok::<(), array_list::IndexOutOfRange>(())
//! ```

use std::{
    cmp::Ordering,
    convert::Infallible,
    fmt,
    mem::{replace, MaybeUninit},
    slice,
};

mod error;
mod partial_eq;
#[cfg(feature = "serde")]
mod serde_impl;
mod sort;

pub use error::{IndexOutOfRange, Result};

/// Capacity of a freshly created list.
pub const DEFAULT_CAPACITY: usize = 16;

/// Factor by which the buffer grows once it is full.
pub const MULTIPLIER: usize = 2;

/// Largest capacity a list will ever grow to.
pub const MAX_CAPACITY: usize = isize::MAX as usize;

/// SAFETY: Caller must ensure that `dest` is properly initialized.
unsafe fn take<T>(dest: &mut MaybeUninit<T>) -> T {
    replace(dest, MaybeUninit::uninit()).assume_init()
}

fn alloc_buf<T>(capacity: usize) -> Box<[MaybeUninit<T>]> {
    std::iter::repeat_with(MaybeUninit::uninit)
        .take(capacity)
        .collect()
}

/// A resizable list backed by a single contiguous buffer.
///
/// Slots `0..len` hold the elements, slots `len..capacity` are uninitialized.
/// The buffer doubles when full and is never shrunk.
pub struct ArrayList<T> {
    len: usize,
    buf: Box<[MaybeUninit<T>]>,
}

impl<T> ArrayList<T> {
    /// Creates an empty list with a capacity of [`DEFAULT_CAPACITY`].
    ///
    /// # Examples
    ///
    /// ```
    /// use array_list::ArrayList;
    ///
    /// let list: ArrayList<u8> = ArrayList::new();
    /// assert_eq!(list.capacity(), 16);
    /// ```
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty list able to hold `capacity` elements before growing.
    ///
    /// The capacity is never below [`DEFAULT_CAPACITY`].
    ///
    /// # Examples
    ///
    /// ```
    /// use array_list::ArrayList;
    ///
    /// let list: ArrayList<u8> = ArrayList::with_capacity(100);
    /// assert_eq!(list.capacity(), 100);
    ///
    /// let list: ArrayList<u8> = ArrayList::with_capacity(3);
    /// assert_eq!(list.capacity(), 16);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            len: 0,
            buf: alloc_buf(capacity.clamp(DEFAULT_CAPACITY, MAX_CAPACITY)),
        }
    }

    /// Returns the number of elements the list can hold without growing.
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Returns the number of elements in the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use array_list::ArrayList;
    ///
    /// let list = ArrayList::from([1, 2]);
    /// assert_eq!(list.len(), 2);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns an iterator over the elements in list order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Appends an element to the back of the list, growing the buffer if it is full.
    ///
    /// # Examples
    ///
    /// ```
    /// use array_list::ArrayList;
    ///
    /// let mut list = ArrayList::from([1]);
    /// list.push(2);
    /// list.push(3);
    /// assert_eq!(list, [1, 2, 3]);
    /// ```
    pub fn push(&mut self, val: T) {
        self.ensure_capacity(self.len + 1);
        self.buf[self.len] = MaybeUninit::new(val);
        self.len += 1;
    }

    /// Inserts an element at `index`, shifting all elements after it to the right.
    ///
    /// Inserting at `index == len` appends.
    ///
    /// # Errors
    ///
    /// Returns [`IndexOutOfRange`] if `index` is negative or greater than `len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use array_list::ArrayList;
    ///
    /// let mut list = ArrayList::from([3]);
    /// list.insert(0, 1)?;
    /// assert_eq!(list, [1, 3]);
    /// list.insert(1, 2)?;
    /// list.insert(3, 4)?;
    /// assert_eq!(list, [1, 2, 3, 4]);
    ///
    /// let err = list.insert(9, 0).unwrap_err();
    /// assert_eq!(err.to_string(), "Index: 9, Size: 4");
    /// # Ok::<(), array_list::IndexOutOfRange>(())
    /// ```
    pub fn insert(&mut self, index: isize, val: T) -> Result<()> {
        if usize::try_from(index) == Ok(self.len) {
            self.push(val);
            return Ok(());
        }
        let index = self.check_bounds(index)?;
        self.ensure_capacity(self.len + 1);
        // Slot `len` is uninitialized; rotating it to `index` shifts the tail right by one.
        self.buf[index..=self.len].rotate_right(1);
        self.buf[index] = MaybeUninit::new(val);
        self.len += 1;
        Ok(())
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`IndexOutOfRange`] unless `0 <= index < len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use array_list::ArrayList;
    ///
    /// let list = ArrayList::from(["a", "b"]);
    /// assert_eq!(list.get(1), Ok(&"b"));
    /// assert!(list.get(2).is_err());
    /// ```
    pub fn get(&self, index: isize) -> Result<&T> {
        let index = self.check_bounds(index)?;
        Ok(&self.as_slice()[index])
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`IndexOutOfRange`] unless `0 <= index < len`.
    pub fn get_mut(&mut self, index: isize) -> Result<&mut T> {
        let index = self.check_bounds(index)?;
        Ok(&mut self.as_mut_slice()[index])
    }

    /// Replaces the element at `index`, returning the previous one.
    ///
    /// # Errors
    ///
    /// Returns [`IndexOutOfRange`] unless `0 <= index < len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use array_list::ArrayList;
    ///
    /// let mut list = ArrayList::from([2, 1, -1]);
    /// assert_eq!(list.set(0, 0)?, 2);
    /// assert_eq!(list, [0, 1, -1]);
    /// # Ok::<(), array_list::IndexOutOfRange>(())
    /// ```
    pub fn set(&mut self, index: isize, val: T) -> Result<T> {
        let index = self.check_bounds(index)?;
        Ok(replace(&mut self.as_mut_slice()[index], val))
    }

    /// Removes the element at `index`, shifting all elements after it to the left.
    ///
    /// # Errors
    ///
    /// Returns [`IndexOutOfRange`] unless `0 <= index < len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use array_list::ArrayList;
    ///
    /// let mut list = ArrayList::from([1, 2, 3]);
    /// assert_eq!(list.remove(1)?, 2);
    /// assert_eq!(list, [1, 3]);
    /// # Ok::<(), array_list::IndexOutOfRange>(())
    /// ```
    pub fn remove(&mut self, index: isize) -> Result<T> {
        let index = self.check_bounds(index)?;
        // SAFETY: `index < len`, so the slot is initialized.
        let value = unsafe { take(&mut self.buf[index]) };
        // The emptied slot travels to `len - 1`, which then falls out of the occupied range.
        self.buf[index..self.len].rotate_left(1);
        self.len -= 1;
        Ok(value)
    }

    /// Clears the list, dropping all values. The capacity is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use array_list::ArrayList;
    ///
    /// let mut list = ArrayList::from([1, 2, 3]);
    /// list.clear();
    /// assert!(list.is_empty());
    /// assert_eq!(list.capacity(), 16);
    /// ```
    pub fn clear(&mut self) {
        // Reset `len` first: a panicking destructor then leaks instead of double dropping.
        let len = replace(&mut self.len, 0);
        for slot in &mut self.buf[..len] {
            // SAFETY: slots below the old `len` are initialized and no longer reachable.
            unsafe { slot.assume_init_drop() };
        }
    }

    /// Sorts the list in place with the given comparator.
    ///
    /// Quicksort with a Hoare partition around the middle element: in place,
    /// not stable, quadratic on adversarial input.
    ///
    /// # Panics
    ///
    /// May panic if `compare` does not implement a consistent total order,
    /// since the partition scans rely on it to stay inside the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use array_list::ArrayList;
    ///
    /// let mut list = ArrayList::from([4, 1, 2, 5, 3]);
    /// list.sort_by(|a, b| b.cmp(a));
    /// assert_eq!(list, [5, 4, 3, 2, 1]);
    /// ```
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let res = sort::quick_sort(self.as_mut_slice(), |a, b| Ok::<_, Infallible>(compare(a, b)));
        match res {
            Ok(()) => {}
            Err(never) => match never {},
        }
    }

    /// Sorts the list with a comparator that may fail.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `compare`, unchanged. The list then
    /// still holds all of its elements, in an unspecified order.
    ///
    /// # Panics
    ///
    /// May panic if `compare` does not implement a consistent total order,
    /// since the partition scans rely on it to stay inside the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use array_list::ArrayList;
    ///
    /// let mut list = ArrayList::from([Some(2), None, Some(1)]);
    /// let res = list.try_sort_by(|a, b| match (a, b) {
    ///     (Some(a), Some(b)) => Ok(a.cmp(b)),
    ///     _ => Err("cannot compare null"),
    /// });
    /// assert_eq!(res, Err("cannot compare null"));
    /// assert_eq!(list.len(), 3);
    /// ```
    pub fn try_sort_by<F, E>(&mut self, compare: F) -> core::result::Result<(), E>
    where
        F: FnMut(&T, &T) -> core::result::Result<Ordering, E>,
    {
        sort::quick_sort(self.as_mut_slice(), compare)
    }

    /// Sorts the list with a key extraction function.
    pub fn sort_by_key<K, F>(&mut self, mut key: F)
    where
        F: FnMut(&T) -> K,
        K: Ord,
    {
        self.sort_by(|a, b| key(a).cmp(&key(b)))
    }

    /// Sorts the list in natural order.
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        self.sort_by(Ord::cmp)
    }

    //============================================================

    fn check_bounds(&self, index: isize) -> Result<usize> {
        match usize::try_from(index) {
            Ok(i) if i < self.len => Ok(i),
            _ => Err(IndexOutOfRange {
                index,
                size: self.len,
            }),
        }
    }

    /// Grows the buffer once if `required` elements don't fit.
    fn ensure_capacity(&mut self, required: usize) {
        let capacity = self.capacity();
        if required <= capacity {
            return;
        }
        let new_capacity = capacity.saturating_mul(MULTIPLIER).min(MAX_CAPACITY);
        if new_capacity < required {
            panic!("capacity overflow, Max capacity: {MAX_CAPACITY}, But got: {required}");
        }
        if new_capacity == MAX_CAPACITY {
            log::debug!("array list capacity saturated at {MAX_CAPACITY}");
        }
        log::trace!("growing array list buffer: {capacity} -> {new_capacity}");

        let mut buf = alloc_buf(new_capacity);
        buf[..self.len].swap_with_slice(&mut self.buf[..self.len]);
        self.buf = buf;
    }

    fn as_slice(&self) -> &[T] {
        // SAFETY: `self.buf[..self.len]` is initialized.
        unsafe { &*(&self.buf[..self.len] as *const [MaybeUninit<T>] as *const [T]) }
    }

    fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: `self.buf[..self.len]` is initialized.
        unsafe { &mut *(&mut self.buf[..self.len] as *mut [MaybeUninit<T>] as *mut [T]) }
    }
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for ArrayList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for ArrayList<T> {
    fn clone(&self) -> Self {
        let mut list = Self::with_capacity(self.capacity());
        list.extend(self.iter().cloned());
        list
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders the elements as `[a, b, c]`.
impl<T: fmt::Display> fmt::Display for ArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, val) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(val, f)?;
        }
        f.write_str("]")
    }
}

impl<'a, T> IntoIterator for &'a ArrayList<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Extend<T> for ArrayList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for val in iter {
            self.push(val);
        }
    }
}

impl<T> FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T: Clone> From<&[T]> for ArrayList<T> {
    fn from(values: &[T]) -> Self {
        values.iter().cloned().collect()
    }
}

impl<T, const N: usize> From<[T; N]> for ArrayList<T> {
    fn from(values: [T; N]) -> Self {
        let mut list = Self::with_capacity(N);
        list.extend(values);
        list
    }
}
