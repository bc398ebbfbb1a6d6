use super::BlasScalar;
use std::ops::{Index, IndexMut};

// core strided vector type for borrowed and mutably borrowed data
#[derive(Debug, Clone, PartialEq)]
pub struct StridedStorageVector<S, T>
where
    S: AsRef<[T]>,
{
    /// logical number of elements
    len: usize,
    /// element distance between logically adjacent entries. Never zero.
    inc: isize,
    /// physical position of logical element 0
    base: usize,
    /// underlying buffer
    data: S,
    phantom: std::marker::PhantomData<T>,
}

/// Read-only strided view of a vector
pub type StridedVector<'a, T> = StridedStorageVector<&'a [T], T>;
/// Mutable strided view of a vector
pub type StridedVectorMut<'a, T> = StridedStorageVector<&'a mut [T], T>;

/// Minimum buffer length holding `len` elements at increment `inc`, or
/// `None` if that length is not addressable.
pub fn strided_len(len: usize, inc: isize) -> Option<usize> {
    if len == 0 {
        Some(0)
    } else {
        (len - 1).checked_mul(inc.unsigned_abs())?.checked_add(1)
    }
}

impl<S, T> StridedStorageVector<S, T>
where
    S: AsRef<[T]>,
{
    /// Wraps `data` as a strided vector.  A negative `inc` traverses the
    /// buffer from the high end, i.e. logical element 0 sits at the
    /// highest address used.
    ///
    /// # Panics
    /// Panics if `inc == 0` or the buffer is shorter than
    /// [`strided_len(len, inc)`](strided_len).  Kernels validate both
    /// before constructing views.
    pub fn new(data: S, len: usize, inc: isize) -> Self {
        assert!(inc != 0);
        let required = strided_len(len, inc);
        assert!(required.is_some_and(|r| data.as_ref().len() >= r));
        let base = if inc < 0 {
            required.unwrap_or(0).saturating_sub(1)
        } else {
            0
        };
        Self {
            len,
            inc,
            base,
            data,
            phantom: std::marker::PhantomData::<T>,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn inc(&self) -> isize {
        self.inc
    }

    #[inline]
    fn index_linear(&self, i: usize) -> usize {
        debug_assert!(i < self.len);
        let step = self.inc.unsigned_abs() * i;
        if self.inc > 0 {
            self.base + step
        } else {
            self.base - step
        }
    }

    /// iterate over the logical elements
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        (0..self.len).map(move |i| &self[i])
    }
}

impl<S, T> StridedStorageVector<S, T>
where
    S: AsRef<[T]> + AsMut<[T]>,
{
    fn data_mut(&mut self) -> &mut [T] {
        self.data.as_mut()
    }
}

impl<S, T> StridedStorageVector<S, T>
where
    S: AsRef<[T]> + AsMut<[T]>,
    T: BlasScalar,
{
    /// set every logical element to `c`
    pub fn fill(&mut self, c: T) -> &mut Self {
        for i in 0..self.len {
            self[i] = c;
        }
        self
    }

    /// elementwise scaling of the logical elements
    pub fn scale(&mut self, c: T) -> &mut Self {
        for i in 0..self.len {
            self[i] *= c;
        }
        self
    }
}

impl<S, T> Index<usize> for StridedStorageVector<S, T>
where
    S: AsRef<[T]>,
{
    type Output = T;
    fn index(&self, i: usize) -> &T {
        let lidx = self.index_linear(i);
        &self.data.as_ref()[lidx]
    }
}

impl<S, T> IndexMut<usize> for StridedStorageVector<S, T>
where
    S: AsRef<[T]> + AsMut<[T]>,
{
    fn index_mut(&mut self, i: usize) -> &mut T {
        let lidx = self.index_linear(i);
        &mut self.data_mut()[lidx]
    }
}
