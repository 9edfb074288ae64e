use super::error::{ListError, ListResult};

/// A value that can address a position in a [`LinkedList`](super::LinkedList).
///
/// Integer types convert to a signed position; values outside the `isize`
/// range saturate. Floating point types are accepted by the signature but
/// always fail with [`ListError::InvalidIndexType`], even when the value is
/// integral.
pub trait ListIndex: Copy {
    /// Converts the index into a signed position.
    fn to_position(self) -> ListResult<isize>;
}

macro_rules! impl_signed_index {
    ($($t:ty),*) => {$(
        impl ListIndex for $t {
            #[inline]
            fn to_position(self) -> ListResult<isize> {
                Ok(isize::try_from(self).unwrap_or(if self < 0 { isize::MIN } else { isize::MAX }))
            }
        }
    )*};
}

macro_rules! impl_unsigned_index {
    ($($t:ty),*) => {$(
        impl ListIndex for $t {
            #[inline]
            fn to_position(self) -> ListResult<isize> {
                Ok(isize::try_from(self).unwrap_or(isize::MAX))
            }
        }
    )*};
}

macro_rules! impl_rejected_index {
    ($($t:ty),*) => {$(
        impl ListIndex for $t {
            #[inline]
            fn to_position(self) -> ListResult<isize> {
                log::debug!("rejected linked list index {self} of type {}", stringify!($t));
                Err(ListError::InvalidIndexType { found: stringify!($t) })
            }
        }
    )*};
}

impl_signed_index!(i8, i16, i32, i64, i128, isize);
impl_unsigned_index!(u8, u16, u32, u64, u128, usize);
impl_rejected_index!(f32, f64);
