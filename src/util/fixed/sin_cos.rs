/// MAZECAST Project
/// `File` util/fixed/sin_cos.rs
/// `Description` Sine/cosine lookup table implementation module
/// `Author` TioT2
/// `Last changed` 19.10.2026

use super::Fixed;
use crate::math::Vec2;

/// Odd minimax polynomial coefficients of sin(2 pi x) on [0, 0.5], highest power first
const SIN2PI_COEFFICIENTS: [f64; 15] = [
    1.5873670538243229332222957023504872028033458258785e-8,
    -3.2649283479971170585768247133750680886632233028762e-7,
    5.8056524029499061679627827975252772363553363262495e-6,
    -8.8235335992430051344844841671401871742374913922057e-5,
    1.1309237482517961877702180414488525515732161905954e-3,
    -1.2031585942120627233202567845286556653885737182738e-2,
    1.0422916220813984117271044898760411097029995316417e-1,
    -7.1812230177850051223174027860686238053986168884284e-1,
    3.8199525848482821277337920673404661254406128731422,
    -1.5094642576822990391826616232531520514481435107371e1,
    4.205869394489765314498681114813355254161277992845e1,
    -7.6705859753061385841630641093893125889966539055122e1,
    8.1605249276075054203397682678249495061413521767487e1,
    -4.1341702240399760233968420089468526936300384754514e1,
    6.2831853071795864769252867665590057683943387987502,
];

/// Compile-time sine of full turns
/// * `x` - angle in rotations
/// * Returns sin(2 pi x), exact on quarter turns
pub const fn sin2pi(mut x: f64) -> f64 {
    x -= (x as i64) as f64;
    if x < 0.0 {
        x += 1.0;
    }

    if x == 0.0 || x == 0.5 {
        return 0.0;
    }
    if x == 0.25 {
        return 1.0;
    }
    if x == 0.75 {
        return -1.0;
    }
    if x > 0.5 {
        return -sin2pi(x - 0.5);
    }

    let x2 = x * x;
    let mut value = 0.0;
    let mut i = 0;
    while i < SIN2PI_COEFFICIENTS.len() {
        value = value * x2 + SIN2PI_COEFFICIENTS[i];
        i += 1;
    }

    x * value
} // fn sin2pi

/// Compile-time cosine of full turns
pub const fn cos2pi(x: f64) -> f64 {
    sin2pi(x - (x as i64) as f64 + 0.25)
} // fn cos2pi

/// Quarter turn sine table with interpolated full turn lookup
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SinCosTable<const N: usize = 65> {
    /// sin of i / (4 * (N - 1)) rotations
    sin_table: [Fixed; N],
} // struct SinCosTable

impl<const N: usize> SinCosTable<N> {
    const VALID: () = assert!(N > 1, "sine table requires at least two samples");

    /// Table construction function, meant for compile-time evaluation
    pub const fn new() -> Self {
        let () = Self::VALID;
        let mut sin_table = [Fixed::ZERO; N];

        let mut i = 0;
        while i < N {
            let rotations = i as f64 / (4.0 * (N - 1) as f64);
            sin_table[i] = Fixed::from_f64(sin2pi(rotations));
            i += 1;
        }

        Self { sin_table }
    } // fn new

    /// Sample count getting function
    pub const fn size(&self) -> usize {
        N
    } // fn size

    /// Raw samples getting function
    pub const fn samples(&self) -> &[Fixed; N] {
        &self.sin_table
    } // fn samples

    /// Sine and cosine calculation function
    /// * `rotations` - angle in full turns, only fractional part matters
    /// * Returns (sin, cos) pair
    pub fn get(&self, rotations: Fixed) -> (Fixed, Fixed) {
        let rotations = rotations.fract() * Fixed::from_int(4);
        let quadrant = rotations.floor_int();
        let rotations = Fixed::from_int(N as i32 - 1) * rotations.fract();

        let index = (rotations.floor_int() as usize).min(N - 2);
        let fraction = rotations.fract();
        let mirrored = N - 1 - index;

        let table = &self.sin_table;
        let sin_value = table[index] + fraction * (table[index + 1] - table[index]);
        let cos_value = table[mirrored] + fraction * (table[mirrored - 1] - table[mirrored]);

        match quadrant {
            1 => (cos_value, -sin_value),
            2 => (-sin_value, -cos_value),
            3 => (-cos_value, sin_value),
            _ => (sin_value, cos_value),
        }
    } // fn get

    pub fn get_sin(&self, rotations: Fixed) -> Fixed {
        self.get(rotations).0
    } // fn get_sin

    pub fn get_cos(&self, rotations: Fixed) -> Fixed {
        self.get(rotations).1
    } // fn get_cos

    /// Vector rotation function
    /// * `v` - vector to rotate
    /// * `rotations` - counter-clockwise angle in full turns
    /// * Returns rotated vector
    pub fn rotate(&self, v: Vec2<Fixed>, rotations: Fixed) -> Vec2<Fixed> {
        let (sin, cos) = self.get(rotations);

        Vec2 {
            x: v.x * cos - v.y * sin,
            y: v.x * sin + v.y * cos,
        }
    } // fn rotate
} // impl SinCosTable

impl<const N: usize> Default for SinCosTable<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Default table, evaluated during compilation
pub static SIN_COS_TABLE: SinCosTable = SinCosTable::new();

#[cfg(test)]
mod tests {
    use super::*;

    fn fx(value: f64) -> Fixed {
        Fixed::from_f64(value)
    }

    #[test]
    fn polynomial_matches_libm() {
        for i in 0..=1000 {
            let x = i as f64 / 1000.0;
            assert!((sin2pi(x) - (x * core::f64::consts::TAU).sin()).abs() < 1e-12, "x = {x}");
            assert!((cos2pi(x) - (x * core::f64::consts::TAU).cos()).abs() < 1e-12, "x = {x}");
        }
    }

    #[test]
    fn table_endpoints_are_exact() {
        let samples = SIN_COS_TABLE.samples();
        assert_eq!(SIN_COS_TABLE.size(), 65);
        assert_eq!(samples[0], Fixed::ZERO);
        assert_eq!(samples[64], Fixed::ONE);
    }

    #[test]
    fn quarter_turns_are_exact() {
        let table = &SIN_COS_TABLE;
        assert_eq!(table.get_sin(fx(0.0)), Fixed::ZERO);
        assert_eq!(table.get_sin(fx(0.25)), Fixed::ONE);
        assert_eq!(table.get_sin(fx(0.5)), Fixed::ZERO);
        assert_eq!(table.get_sin(fx(0.75)), -Fixed::ONE);
        assert_eq!(table.get_cos(fx(0.0)), Fixed::ONE);
        assert_eq!(table.get_cos(fx(0.25)), Fixed::ZERO);
        assert_eq!(table.get_cos(fx(0.5)), -Fixed::ONE);
        assert_eq!(table.get_cos(fx(0.75)), Fixed::ZERO);
    }

    #[test]
    fn negative_rotations_wrap() {
        let table = &SIN_COS_TABLE;
        assert_eq!(table.get(fx(-0.25)), table.get(fx(0.75)));
        assert_eq!(table.get_sin(fx(-0.25)), -Fixed::ONE);
    }

    #[test]
    fn lookup_is_close_to_real_sine() {
        let table = &SIN_COS_TABLE;
        for raw in (0..65536).step_by(97) {
            let rotations = Fixed::from_bits(raw);
            let (sin, cos) = table.get(rotations);
            let angle = rotations.to_f64() * core::f64::consts::TAU;

            assert!((sin.to_f64() - angle.sin()).abs() < 1.0 / 1024.0, "raw = {raw}");
            assert!((cos.to_f64() - angle.cos()).abs() < 1.0 / 1024.0, "raw = {raw}");
        }
    }

    #[test]
    fn first_quadrant_is_monotonic() {
        let table = &SIN_COS_TABLE;
        let mut previous = table.get(Fixed::ZERO);
        for raw in 1..16384 {
            let current = table.get(Fixed::from_bits(raw));
            assert!(current.0 >= previous.0);
            assert!(current.1 <= previous.1);
            previous = current;
        }
    }

    #[test]
    fn sin_and_cos_share_lookup() {
        let table = &SIN_COS_TABLE;
        for raw in (0..65536).step_by(331) {
            let rotations = Fixed::from_bits(raw);
            assert_eq!(table.get(rotations), (table.get_sin(rotations), table.get_cos(rotations)));
        }
    }

    #[test]
    fn rotate_quarter_turn_swaps_axes() {
        let v = Vec2::new(Fixed::ONE, fx(2.0));
        assert_eq!(SIN_COS_TABLE.rotate(v, fx(0.25)), Vec2::new(fx(-2.0), Fixed::ONE));
        assert_eq!(SIN_COS_TABLE.rotate(v, fx(0.5)), Vec2::new(-Fixed::ONE, fx(-2.0)));
        assert_eq!(SIN_COS_TABLE.rotate(v, Fixed::ZERO), v);
    }

    #[test]
    fn smaller_tables_keep_exact_endpoints() {
        let table = SinCosTable::<5>::new();
        assert_eq!(table.get_sin(fx(0.25)), Fixed::ONE);
        assert_eq!(table.get_cos(fx(0.5)), -Fixed::ONE);
    }
}

// file sin_cos.rs
