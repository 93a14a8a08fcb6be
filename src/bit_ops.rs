//! Bit twiddling over plain integers. Nothing here validates its input.

/// The value of the flag at bit position `index`. Treats least significant bit as index 0.
///
/// # Panics
/// In debug builds, if `index` is not below the bit width of `T`.
pub fn flag_at<T: num::PrimInt>(index: usize) -> T {
    T::one() << index
}

/// True iff every bit of `flag` is set in `current`.
pub fn has_flag<T: num::PrimInt>(current: T, flag: T) -> bool {
    current & flag == flag
}

pub fn add_flag<T: num::PrimInt>(current: T, flag: T) -> T {
    current | flag
}

pub fn remove_flag<T: num::PrimInt>(current: T, flag: T) -> T {
    current & !flag
}

/// Unions every value of `flags` into `current`.
pub fn add_flags<T, I>(current: T, flags: I) -> T
where
    T: num::PrimInt,
    I: IntoIterator<Item = T>,
{
    flags.into_iter().fold(current, add_flag)
}
