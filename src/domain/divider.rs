//! Voltage divider domain service
//!
//! Maps a raw ADC code from the divider midpoint to the thermistor's
//! resistance:
//!
//! ```text
//! [Ground] ── [Pulldown] ──┬── [Thermistor] ── [Vcc]
//!                          │
//!                     Analog input
//! ```
//!
//! From `V_out/V_cc = R_pulldown/(R_pulldown + R_thermistor)` and
//! `code ≈ V_out/V_cc · ADC_FULL_SCALE`, solving for the thermistor leg
//! gives `R = R_pulldown · (ADC_FULL_SCALE/code − 1)`.

/// Full-scale code of the platform ADC (12 bit).
pub const ADC_FULL_SCALE: u16 = 4095;

/// Electrical parameters of the divider schematic.
///
/// Only the pulldown resistance participates in the resistance
/// computation. The nominal thermistor resistance and the supply voltage
/// exist for the diagnostic report, so set them to measured values if the
/// report should reflect the real board.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DividerModel {
    /// Fixed divider leg, in ohms
    pub pulldown_ohms: f32,
    /// Thermistor resistance at the reference temperature, in ohms
    pub nominal_ohms: f32,
    /// Divider supply voltage, in volts
    pub supply_volts: f32,
}

impl DividerModel {
    /// 10 kΩ pulldown, 10 kΩ nominal NTC, 5 V supply.
    pub const DEFAULT: Self = Self {
        pulldown_ohms: 10_000.0,
        nominal_ohms: 10_000.0,
        supply_volts: 5.0,
    };

    /// Create a divider model with measured board values.
    pub const fn new(pulldown_ohms: f32, nominal_ohms: f32, supply_volts: f32) -> Self {
        Self {
            pulldown_ohms,
            nominal_ohms,
            supply_volts,
        }
    }

    /// Thermistor resistance in ohms for a raw ADC code.
    ///
    /// Returns `None` for a code of 0: the schematic cannot produce it, so
    /// it marks an open or shorted divider and must not reach the
    /// resistance math (division by zero). Every other code passes through
    /// the divider equation unclamped, including codes above full scale;
    /// a nonsensical negative resistance in the diagnostic report is what
    /// surfaces a wiring error.
    #[inline]
    pub fn resistance_from_code(&self, code: u16) -> Option<f32> {
        if code == 0 {
            return None;
        }
        Some(self.pulldown_ohms * (ADC_FULL_SCALE as f32 / code as f32 - 1.0))
    }

    /// Voltage at the divider midpoint implied by a raw ADC code.
    #[inline]
    pub fn voltage_from_code(&self, code: u16) -> f32 {
        code as f32 * self.supply_volts / ADC_FULL_SCALE as f32
    }
}

impl Default for DividerModel {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_divider_equation() {
        let divider = DividerModel::DEFAULT;
        for code in [1u16, 10, 100, 1000, 2048, 4095] {
            let expected = 10_000.0 * (4095.0 / code as f32 - 1.0);
            let r = divider.resistance_from_code(code).unwrap();
            assert!((r - expected).abs() < 1e-3);
        }
    }

    #[test]
    fn midpoint_code_reads_near_pulldown() {
        let divider = DividerModel::DEFAULT;
        let r = divider.resistance_from_code(2048).unwrap();
        // 10 kΩ · (4095/2048 − 1) = 9995.117 Ω
        assert!((r - 9995.117).abs() < 0.1);
    }

    #[test]
    fn full_scale_code_reads_zero_ohms() {
        let divider = DividerModel::DEFAULT;
        assert_eq!(divider.resistance_from_code(ADC_FULL_SCALE), Some(0.0));
    }

    #[test]
    fn zero_code_is_a_fault_not_a_resistance() {
        let divider = DividerModel::DEFAULT;
        assert_eq!(divider.resistance_from_code(0), None);
    }

    #[test]
    fn out_of_range_code_passes_through_unclamped() {
        let divider = DividerModel::DEFAULT;
        let r = divider.resistance_from_code(4096).unwrap();
        assert!(r < 0.0);
    }

    #[test]
    fn midpoint_voltage() {
        let divider = DividerModel::DEFAULT;
        let v = divider.voltage_from_code(2048);
        assert!((v - 2.5006).abs() < 1e-3);
    }
}
