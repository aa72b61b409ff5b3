use core::fmt::{Debug, Display};
use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use num_traits::{Bounded, CheckedAdd, Zero};

/// A trait representing an edge capacity (and flow) type which is typically a signed integer.
///
/// Signedness is required: residual edges carry the negated flow of their twin.
pub trait Capacity:
    Copy
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + Ord
    + AddAssign
    + SubAssign
    + Zero
    + CheckedAdd
    + Bounded
    + Debug
    + Display
    + Default
{
}

impl Capacity for i32 {}

impl Capacity for i64 {}
