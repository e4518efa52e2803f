use crate::ArrayList;

macro_rules! __impl_slice_eq1 {
    ([$($vars:tt)*] $lhs:ty, $rhs:ty) => {
        impl<T, U, $($vars)*> PartialEq<$rhs> for $lhs
        where
            T: PartialEq<U>,
        {
            #[inline]
            fn eq(&self, other: &$rhs) -> bool { self.as_slice() == &other[..] }
        }
    }
}

__impl_slice_eq1! { [] ArrayList<T>, [U] }
__impl_slice_eq1! { [] ArrayList<T>, &[U] }
__impl_slice_eq1! { [] ArrayList<T>, &mut [U] }
__impl_slice_eq1! { [const N: usize] ArrayList<T>, [U; N] }
__impl_slice_eq1! { [const N: usize] ArrayList<T>, &[U; N] }

impl<T, U> PartialEq<ArrayList<U>> for ArrayList<T>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &ArrayList<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for ArrayList<T> {}
