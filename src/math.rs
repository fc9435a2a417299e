/// MAZECAST Project
/// `File` math.rs
/// `Description` Math utilities implementation module
/// `Author` TioT2
/// `Last changed` 19.10.2026

use crate::util::fixed::Fixed;

/// Two component vector
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Vec2<T> {
    pub x: T,
    pub y: T,
} // struct Vec2

/// Two component extent
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Ext2<T> {
    pub width: T,
    pub height: T,
} // struct Ext2

pub type Vec2fx = Vec2<Fixed>;
pub type Vec2si = Vec2<i32>;
pub type Ext2su = Ext2<usize>;

impl<T> Vec2<T> {
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
} // impl Vec2

impl<T: Copy> Vec2<T> {
    /// Vector with both components equal to `v`
    pub const fn splat(v: T) -> Self {
        Self { x: v, y: v }
    }
} // impl Vec2

impl Vec2fx {
    /// Grid cell containing the point
    pub const fn floor_int(self) -> Vec2si {
        Vec2si {
            x: self.x.floor_int(),
            y: self.y.floor_int(),
        }
    } // fn floor_int
} // impl Vec2fx

impl<T: core::fmt::Display> core::fmt::Display for Vec2<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_fmt(format_args!("<{}, {}>", self.x, self.y))
    }
} // impl core::fmt::Display for Vec2

impl<T: core::ops::Add<Output = T>> core::ops::Add for Vec2<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl<T: core::ops::Sub<Output = T>> core::ops::Sub for Vec2<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

impl<T: core::ops::Neg<Output = T>> core::ops::Neg for Vec2<T> {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self { x: -self.x, y: -self.y }
    }
}

impl<T: core::ops::Mul<Output = T> + Copy> core::ops::Mul<T> for Vec2<T> {
    type Output = Self;
    fn mul(self, rhs: T) -> Self::Output {
        Self { x: self.x * rhs, y: self.y * rhs }
    }
}

impl<T: core::ops::Div<Output = T> + Copy> core::ops::Div<T> for Vec2<T> {
    type Output = Self;
    fn div(self, rhs: T) -> Self::Output {
        Self { x: self.x / rhs, y: self.y / rhs }
    }
}

impl<T: core::ops::Add<Output = T> + Copy> core::ops::AddAssign for Vec2<T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: core::ops::Sub<Output = T> + Copy> core::ops::SubAssign for Vec2<T> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: core::ops::Mul<Output = T> + Copy> core::ops::MulAssign<T> for Vec2<T> {
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

impl<T: core::ops::Div<Output = T> + Copy> core::ops::DivAssign<T> for Vec2<T> {
    fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs;
    }
}


// file math.rs
