//! Steinhart-Hart evaluator domain service
//!
//! Relates a thermistor's resistance to absolute temperature through the
//! empirical polynomial
//!
//! ```text
//! 1/T = A + B·ln(R) + C·ln(R)³
//! ```
//!
//! with three per-part calibration coefficients.

use libm::logf;

/// Offset between the Kelvin and Celsius scales.
pub const KELVIN_OFFSET: f32 = 273.15;

/// Steinhart-Hart calibration coefficients.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SteinhartCoefficients {
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl SteinhartCoefficients {
    /// MF52AT 3590 NTC, 10 kΩ nominal.
    pub const MF52AT_3590: Self = Self {
        a: 0.001129148,
        b: 0.000234125,
        c: 8.76741e-8,
    };

    /// Create a coefficient set from a part's datasheet or a three-point
    /// calibration.
    pub const fn new(a: f32, b: f32, c: f32) -> Self {
        Self { a, b, c }
    }

    /// Absolute temperature in Kelvin for a resistance in ohms.
    ///
    /// Only defined for `resistance_ohms > 0`; callers guard the
    /// fault/zero case before getting here.
    #[inline]
    pub fn temperature_kelvin(&self, resistance_ohms: f32) -> f32 {
        // ln(R) feeds both the linear and the cubic term
        let lr = logf(resistance_ohms);
        1.0 / (self.a + self.b * lr + self.c * lr * lr * lr)
    }
}

impl Default for SteinhartCoefficients {
    fn default() -> Self {
        Self::MF52AT_3590
    }
}

/// Kelvin to Celsius.
#[inline]
pub fn kelvin_to_celsius(kelvin: f32) -> f32 {
    kelvin - KELVIN_OFFSET
}

/// Kelvin to Fahrenheit.
#[inline]
pub fn kelvin_to_fahrenheit(kelvin: f32) -> f32 {
    32.0 + (kelvin - KELVIN_OFFSET) * 9.0 / 5.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::divider::DividerModel;

    #[test]
    fn near_room_temperature_for_nominal_resistance() {
        let coefficients = SteinhartCoefficients::MF52AT_3590;
        // 9995.117 Ω is the divider result for a midpoint code of 2048
        let kelvin = coefficients.temperature_kelvin(9995.117);
        assert!((kelvin - 298.16).abs() < 0.05);
        assert!((kelvin_to_celsius(kelvin) - 25.0).abs() < 0.1);
    }

    #[test]
    fn kelvin_rises_as_resistance_falls() {
        let coefficients = SteinhartCoefficients::MF52AT_3590;
        let resistances = [20_000.0, 10_000.0, 5_000.0, 2_000.0];
        for pair in resistances.windows(2) {
            assert!(
                coefficients.temperature_kelvin(pair[0])
                    < coefficients.temperature_kelvin(pair[1])
            );
        }
    }

    #[test]
    fn kelvin_rises_with_adc_code() {
        let divider = DividerModel::DEFAULT;
        let coefficients = SteinhartCoefficients::MF52AT_3590;
        let mut previous = f32::MIN;
        for code in [512u16, 1024, 2048, 3000, 3900] {
            let r = divider.resistance_from_code(code).unwrap();
            let kelvin = coefficients.temperature_kelvin(r);
            assert!(kelvin > previous);
            previous = kelvin;
        }
    }

    #[test]
    fn conversion_identities() {
        for kelvin in [250.0f32, 273.15, 298.16, 373.15] {
            let celsius = kelvin_to_celsius(kelvin);
            let fahrenheit = kelvin_to_fahrenheit(kelvin);
            assert_eq!(celsius, kelvin - 273.15);
            assert_eq!(fahrenheit, 32.0 + celsius * 9.0 / 5.0);
        }
    }

    #[test]
    fn conversions_propagate_the_fault_sentinel() {
        // -1 K converts arithmetically, not specially
        let celsius = kelvin_to_celsius(-1.0);
        let fahrenheit = kelvin_to_fahrenheit(-1.0);
        assert!((celsius - -274.15).abs() < 1e-3);
        assert!((fahrenheit - -461.47).abs() < 1e-2);
    }
}
