/// A trait to convert from type `T` by `as`.
pub trait AsFrom<T: Copy>: Copy {
    /// Convert `value` from type `T` into `Self` by `as`.
    fn as_from(value: T) -> Self;
}

/// A trait to convert `self` into type `T` by `as`.
pub trait AsInto<T: Copy>: Copy {
    /// Convert `self` from type `Self` into `T` by `as`.
    fn as_into(self) -> T;
}

impl<T: Copy, U: Copy> AsInto<T> for U
where
    T: AsFrom<U>,
{
    #[inline]
    fn as_into(self) -> T {
        T::as_from(self)
    }
}

macro_rules! impl_as_from {
    ($T:ty => $($U:ty),*) => {
        $(
            impl AsFrom<$U> for $T {
                #[inline]
                fn as_from(value: $U) -> Self {
                    value as $T
                }
            }
        )*
    };
}

impl_as_from!(u8 => u8, u16, u32, u64, u128, usize);
impl_as_from!(u16 => u8, u16, u32, u64, u128, usize);
impl_as_from!(u32 => u8, u16, u32, u64, u128, usize);
impl_as_from!(u64 => u8, u16, u32, u64, u128, usize);
impl_as_from!(u128 => u8, u16, u32, u64, u128, usize);
impl_as_from!(usize => u8, u16, u32, u64, u128, usize);
