//! MAZECAST Project
//! `File` util/fixed/mod.rs
//! `Description` Fixed number family implementation module
//! `Author` TioT2
//! `Last changed` 19.10.2026

pub mod sin_cos;

/// Shift that accepts negative and out-of-range amounts
pub trait BidirectionalShift: Sized {
    /// Left shift, negative `amount` shifts right (arithmetically).
    /// Amounts `<= -digits` saturate to `0` or `-1` depending on sign,
    /// amounts `>= BITS` shift every bit out.
    fn shl_bidirectional(self, amount: i32) -> Self;

    /// Right shift counterpart of [`BidirectionalShift::shl_bidirectional`]
    fn shr_bidirectional(self, amount: i32) -> Self {
        self.shl_bidirectional(amount.wrapping_neg())
    } // fn shr_bidirectional
} // trait BidirectionalShift

macro_rules! impl_bidirectional_shift {
    ($($int:ty),*) => {$(
        impl BidirectionalShift for $int {
            fn shl_bidirectional(self, amount: i32) -> Self {
                let digits = <$int>::BITS as i32 - 1;

                if amount <= -digits {
                    if self < 0 { -1 } else { 0 }
                } else if amount < 0 {
                    self >> -amount
                } else {
                    self.checked_shl(amount as u32).unwrap_or(0)
                }
            }
        }
    )*};
}

impl_bidirectional_shift!(i8, i16, i32, i64);

macro_rules! impl_fixed {
    ($(#[$meta:meta])* $name:ident, $repr:ty, $wide:ty) => {
        $(#[$meta])*
        #[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        pub struct $name<const F: u32> {
            /// Fixed number bits
            value: $repr,
        } // struct $name

        impl<const F: u32> $name<F> {
            /// Value bits of representation (sign bit excluded)
            pub const DIGITS: u32 = <$repr>::BITS - 1;
            /// Fractional bit count
            pub const FRACTIONAL_BITS: u32 = F;
            /// Integral bit count
            pub const INTEGER_BITS: u32 = Self::DIGITS - F;
            /// Mask of fractional bits
            pub const FRACTION_MASK: $repr = ((1 as $repr) << F).wrapping_sub(1);
            /// Mask of integral bits
            pub const INTEGER_MASK: $repr = !Self::FRACTION_MASK;

            const VALID: () = assert!(F <= <$repr>::BITS - 1, "too many fractional bits for representation");

            pub const ZERO: Self = Self::from_bits(0);
            pub const ONE: Self = Self::from_bits((1 as $repr) << F);
            pub const HALF: Self = Self::from_bits(if F == 0 { 0 } else { (1 as $repr) << (F - 1) });
            /// Smallest positive value
            pub const EPSILON: Self = Self::from_bits(1);
            pub const MIN: Self = Self::from_bits(<$repr>::MIN);
            pub const MAX: Self = Self::from_bits(<$repr>::MAX);

            /// Fixed number from it's raw representation constructor
            /// * `bits` - raw bits
            /// * Returns fixed point number
            pub const fn from_bits(bits: $repr) -> Self {
                let () = Self::VALID;
                Self { value: bits }
            } // fn from_bits

            /// Number into raw bits conversion function
            /// * Returns number bits
            pub const fn to_bits(self) -> $repr {
                self.value
            } // fn to_bits

            /// Fixed-point number from integer constructor
            /// * `value` - integer to construct number from, wraps if it does not fit
            /// * Returns fixed that represents `value` number
            pub const fn from_int(value: $repr) -> Self {
                Self::from_bits(value << F)
            } // fn from_int

            /// Fixed-point number from f64 constructor, truncates toward zero
            /// * `value` - floating-point number to construct Fixed from
            /// * Returns fixed that represents `value` number
            pub const fn from_f64(value: f64) -> Self {
                Self::from_bits(((1u64 << F) as f64 * value) as $repr)
            } // fn from_f64

            /// Fixed-point number from f32 constructor, truncates toward zero
            /// * `value` - floating-point number to construct Fixed from
            /// * Returns fixed that represents `value` number
            pub const fn from_f32(value: f32) -> Self {
                Self::from_bits(((1u64 << F) as f32 * value) as $repr)
            } // fn from_f32

            /// Fixed to f64 conversion function
            /// * Returns exact f64 representation
            pub const fn to_f64(self) -> f64 {
                self.value as f64 * (1.0 / (1u64 << F) as f64)
            } // fn to_f64

            /// Fixed to f32 conversion function
            pub const fn to_f32(self) -> f32 {
                self.value as f32 * (1.0 / (1u64 << F) as f32)
            } // fn to_f32

            /// Integral part getting function, truncates toward zero
            pub const fn to_int(self) -> $repr {
                if self.value < 0 {
                    self.value.wrapping_add(Self::FRACTION_MASK) >> F
                } else {
                    self.value >> F
                }
            } // fn to_int

            pub const fn add_const(self, rhs: Self) -> Self {
                Self::from_bits(self.value.wrapping_add(rhs.value))
            } // fn add_const

            pub const fn sub_const(self, rhs: Self) -> Self {
                Self::from_bits(self.value.wrapping_sub(rhs.value))
            } // fn sub_const

            pub const fn neg_const(self) -> Self {
                Self::from_bits(self.value.wrapping_neg())
            } // fn neg_const

            /// Compile-time mul implementation function, rounds toward negative infinity
            pub const fn mul_const(self, rhs: Self) -> Self {
                Self::from_bits(((self.value as $wide).wrapping_mul(rhs.value as $wide) >> F) as $repr)
            } // fn mul_const

            /// Compile-time div implementation function, truncates toward zero
            ///
            /// # Panics
            /// Panics if `rhs` is zero.
            pub const fn div_const(self, rhs: Self) -> Self {
                Self::from_bits((((self.value as $wide) << F) / rhs.value as $wide) as $repr)
            } // fn div_const

            /// Addition that clamps to `MIN`/`MAX` instead of wrapping
            pub const fn saturating_add(self, rhs: Self) -> Self {
                Self::from_bits(self.value.saturating_add(rhs.value))
            } // fn saturating_add

            /// Division that clamps to `MIN`/`MAX` instead of wrapping
            ///
            /// # Panics
            /// Panics if `rhs` is zero.
            pub const fn saturating_div(self, rhs: Self) -> Self {
                let quotient = ((self.value as $wide) << F) / rhs.value as $wide;

                if quotient > <$repr>::MAX as $wide {
                    Self::MAX
                } else if quotient < <$repr>::MIN as $wide {
                    Self::MIN
                } else {
                    Self::from_bits(quotient as $repr)
                }
            } // fn saturating_div

            /// Floor function
            /// * Returns largest integral number not greater than self
            pub const fn floor(self) -> Self {
                Self::from_bits(self.value & Self::INTEGER_MASK)
            } // fn floor

            /// Ceil function
            /// * Returns smallest integral number not less than self
            pub const fn ceil(self) -> Self {
                Self::from_bits(self.value.wrapping_add(Self::FRACTION_MASK)).floor()
            } // fn ceil

            /// Rounding function, halves round up
            pub const fn round(self) -> Self {
                Self::from_bits(self.value.wrapping_add(Self::HALF.value)).floor()
            } // fn round

            /// Fractional part getting function
            /// * Returns fractional part, always in [0, 1) range
            pub const fn fract(self) -> Self {
                Self::from_bits(self.value & Self::FRACTION_MASK)
            } // fn fract

            pub const fn floor_int(self) -> $repr {
                self.value >> F
            } // fn floor_int

            pub const fn ceil_int(self) -> $repr {
                self.value.wrapping_add(Self::FRACTION_MASK) >> F
            } // fn ceil_int

            pub const fn round_int(self) -> $repr {
                self.value.wrapping_add(Self::HALF.value) >> F
            } // fn round_int

            /// Absolute value calculation function
            /// * Returns module, `MIN` stays `MIN`
            pub const fn abs(self) -> Self {
                if self.value < 0 {
                    self.neg_const()
                } else {
                    self
                }
            } // fn abs

            pub const fn is_zero(self) -> bool {
                self.value == 0
            } // fn is_zero

            pub const fn is_negative(self) -> bool {
                self.value < 0
            } // fn is_negative

            /// Square root calculation function
            ///
            /// Builds the root bit by bit, from the highest candidate bit down to
            /// the lowest fractional one. The running square is kept exact, with
            /// `2 * F` fractional bits, and is updated with shifts only.
            /// * Returns largest representable value whose square does not exceed self,
            ///   zero for non-positive numbers
            pub fn sqrt(self) -> Self {
                if self.value <= 0 {
                    return Self::ZERO;
                }

                let target = (self.value as $wide) << F;
                let mut root: $wide = 0;
                let mut root_squared: $wide = 0;
                let mut bit = (Self::INTEGER_BITS + 1) / 2 + F;

                loop {
                    // (r + 2^b)^2 = r^2 + r * 2^(b + 1) + 2^(2b)
                    let candidate_squared = root_squared + (root << (bit + 1)) + ((1 as $wide) << (2 * bit));

                    if candidate_squared <= target {
                        root += (1 as $wide) << bit;
                        root_squared = candidate_squared;

                        if root_squared == target {
                            break;
                        }
                    }

                    if bit == 0 {
                        break;
                    }
                    bit -= 1;
                }

                Self::from_bits(root as $repr)
            } // fn sqrt
        } // impl $name

        impl<const F: u32> core::ops::Add<$name<F>> for $name<F> {
            type Output = $name<F>;
            fn add(self, rhs: $name<F>) -> Self::Output {
                self.add_const(rhs)
            }
        }

        impl<const F: u32> core::ops::AddAssign<$name<F>> for $name<F> {
            fn add_assign(&mut self, rhs: $name<F>) {
                *self = *self + rhs;
            }
        }

        impl<const F: u32> core::ops::Sub<$name<F>> for $name<F> {
            type Output = $name<F>;
            fn sub(self, rhs: $name<F>) -> Self::Output {
                self.sub_const(rhs)
            }
        }

        impl<const F: u32> core::ops::SubAssign<$name<F>> for $name<F> {
            fn sub_assign(&mut self, rhs: $name<F>) {
                *self = *self - rhs;
            }
        }

        impl<const F: u32> core::ops::Mul<$name<F>> for $name<F> {
            type Output = $name<F>;
            fn mul(self, rhs: $name<F>) -> Self::Output {
                self.mul_const(rhs)
            }
        }

        impl<const F: u32> core::ops::MulAssign<$name<F>> for $name<F> {
            fn mul_assign(&mut self, rhs: $name<F>) {
                *self = *self * rhs;
            }
        }

        impl<const F: u32> core::ops::Div<$name<F>> for $name<F> {
            type Output = $name<F>;
            fn div(self, rhs: $name<F>) -> Self::Output {
                self.div_const(rhs)
            }
        }

        impl<const F: u32> core::ops::DivAssign<$name<F>> for $name<F> {
            fn div_assign(&mut self, rhs: $name<F>) {
                *self = *self / rhs;
            }
        }

        impl<const F: u32> core::ops::Neg for $name<F> {
            type Output = $name<F>;
            fn neg(self) -> Self::Output {
                self.neg_const()
            }
        }

        impl<const F: u32> core::fmt::Display for $name<F> {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.to_f64(), f)
            }
        }

        impl<const F: u32> core::fmt::Debug for $name<F> {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.debug_tuple(stringify!($name)).field(&self.to_f64()).finish()
            }
        }
    };
}

impl_fixed!(
    /// 8 bit fixed number with `F` fractional bits
    Fixed8, i8, i16
);

impl_fixed!(
    /// 16 bit fixed number with `F` fractional bits
    Fixed16, i16, i32
);

impl_fixed!(
    /// 32 bit fixed number with `F` fractional bits
    Fixed32, i32, i64
);

/// 16.16 fixed number, the one geometry is computed in
pub type Fixed = Fixed32<16>;


// file mod.rs
