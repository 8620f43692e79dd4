//! Temperature sensor application service
//!
//! Composes the divider model and the Steinhart-Hart evaluator with the
//! three ports into the measurement pipeline:
//!
//! ```text
//! gate on → ADC sample → gate off → diagnostics → fault check → convert
//! ```
//!
//! The sensor owns its ports and every operation takes `&mut self`, so a
//! second measurement on the same instance cannot start while one is in
//! flight. There is no internal locking beyond that; multi-threaded hosts
//! serialize access themselves.

use core::fmt::Write;

use heapless::String;

use crate::domain::divider::DividerModel;
use crate::domain::measurement::Measurement;
use crate::domain::steinhart::{kelvin_to_celsius, kelvin_to_fahrenheit, SteinhartCoefficients};
use crate::ports::adc::{AnalogChannel, AnalogPort};
use crate::ports::console::ConsolePort;
use crate::ports::gpio::{DigitalChannel, DigitalPort, Level};

/// Longest line the diagnostic reporter renders.
const REPORT_LINE: usize = 96;

/// Sensor configuration.
///
/// Everything except `channel` may be rewritten between measurements; the
/// next pipeline run picks up the latest values. None of the fields are
/// validated: a zero pulldown resistance produces mathematically undefined
/// results, not a distinguishable fault.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorConfig {
    /// Analog input sampled on every measurement. Fixed at construction.
    pub channel: AnalogChannel,
    /// Digital output powering the divider; `None` when it is hard-wired.
    pub gate: Option<DigitalChannel>,
    /// Divider schematic parameters
    pub divider: DividerModel,
    /// Steinhart-Hart calibration
    pub coefficients: SteinhartCoefficients,
    /// Verbose per-measurement reporting
    pub diagnostics: bool,
}

impl SensorConfig {
    /// Default calibration on `channel`, no power gate, diagnostics off.
    pub const fn new(channel: AnalogChannel) -> Self {
        Self {
            channel,
            gate: None,
            divider: DividerModel::DEFAULT,
            coefficients: SteinhartCoefficients::MF52AT_3590,
            diagnostics: false,
        }
    }

    /// Default calibration with the divider powered from `gate`.
    pub const fn with_gate(channel: AnalogChannel, gate: DigitalChannel) -> Self {
        let mut config = Self::new(channel);
        config.gate = Some(gate);
        config
    }
}

/// NTC thermistor sensor over a resistor divider.
///
/// Generic over the three ports so the same pipeline runs against the
/// RP2350 adapters on target and against fakes on the host. Sensors
/// without a gate or a console plug in [`NoGate`] / [`NullConsole`].
///
/// [`NoGate`]: crate::ports::gpio::NoGate
/// [`NullConsole`]: crate::ports::console::NullConsole
pub struct TemperatureSensor<A, D, C> {
    adc: A,
    gpio: D,
    console: C,
    config: SensorConfig,
}

impl<A, D, C> TemperatureSensor<A, D, C>
where
    A: AnalogPort,
    D: DigitalPort,
    C: ConsolePort,
{
    /// Sensor on `channel` with default calibration and no power gate.
    pub fn new(adc: A, gpio: D, console: C, channel: AnalogChannel) -> Self {
        Self::from_config(adc, gpio, console, SensorConfig::new(channel))
    }

    /// Gated sensor on `channel`.
    ///
    /// The gate is driven low immediately so the divider stays unpowered
    /// until the first measurement.
    pub fn with_gate(
        adc: A,
        gpio: D,
        console: C,
        channel: AnalogChannel,
        gate: DigitalChannel,
    ) -> Self {
        Self::from_config(adc, gpio, console, SensorConfig::with_gate(channel, gate))
    }

    /// Sensor from an explicit configuration record.
    pub fn from_config(adc: A, gpio: D, console: C, config: SensorConfig) -> Self {
        let mut sensor = Self {
            adc,
            gpio,
            console,
            config,
        };
        if let Some(gate) = sensor.config.gate {
            sensor.gpio.write(gate, Level::Low);
        }
        sensor
    }

    /// Current configuration.
    pub fn config(&self) -> &SensorConfig {
        &self.config
    }

    /// Replace the divider schematic parameters.
    pub fn set_divider(&mut self, divider: DividerModel) {
        self.config.divider = divider;
    }

    /// Replace the Steinhart-Hart coefficients.
    ///
    /// Takes effect on the next measurement.
    pub fn set_coefficients(&mut self, coefficients: SteinhartCoefficients) {
        self.config.coefficients = coefficients;
    }

    /// Toggle the per-measurement diagnostic report.
    pub fn set_diagnostics(&mut self, enabled: bool) {
        self.config.diagnostics = enabled;
    }

    /// Run the pipeline once.
    ///
    /// Returns the raw code together with the Kelvin value, so callers
    /// who prefer [`Measurement::is_fault`] over the sign convention of
    /// the plain getters can use it.
    pub fn measure(&mut self) -> Measurement {
        if let Some(gate) = self.config.gate {
            self.gpio.write(gate, Level::High);
        }
        let code = self.adc.read(self.config.channel);
        // The gate goes low no matter what the sample looks like; a fault
        // must not leave the divider powered.
        if let Some(gate) = self.config.gate {
            self.gpio.write(gate, Level::Low);
        }
        if self.config.diagnostics {
            self.report(code);
        }
        match self.config.divider.resistance_from_code(code) {
            Some(resistance) => {
                Measurement::new(code, self.config.coefficients.temperature_kelvin(resistance))
            }
            None => Measurement::fault(code),
        }
    }

    /// Temperature in Kelvin, or the negative fault sentinel.
    pub fn temperature_kelvin(&mut self) -> f32 {
        self.measure().kelvin
    }

    /// Temperature in Celsius, from a fresh sample.
    pub fn temperature_celsius(&mut self) -> f32 {
        kelvin_to_celsius(self.measure().kelvin)
    }

    /// Temperature in Fahrenheit, from a fresh sample.
    pub fn temperature_fahrenheit(&mut self) -> f32 {
        kelvin_to_fahrenheit(self.measure().kelvin)
    }

    /// Render the diagnostic report for one captured code.
    ///
    /// Resistance and temperature are recomputed here rather than taken
    /// from the pipeline, so the report stays complete even for the codes
    /// the pipeline short-circuits to the fault sentinel.
    fn report(&mut self, code: u16) {
        let divider = self.config.divider;
        let mut line: String<REPORT_LINE> = String::new();

        let _ = write!(line, "thermistor nominal: {:.3} kOhm", divider.nominal_ohms / 1000.0);
        self.console.write_line(&line);

        line.clear();
        let _ = write!(line, "pulldown resistor: {:.3} kOhm", divider.pulldown_ohms / 1000.0);
        self.console.write_line(&line);

        line.clear();
        let _ = write!(line, "supply: {:.2} V", divider.supply_volts);
        self.console.write_line(&line);

        line.clear();
        let _ = write!(line, "adc code: {}", code);
        self.console.write_line(&line);

        line.clear();
        let _ = write!(line, "divider voltage: {:.3} V", divider.voltage_from_code(code));
        self.console.write_line(&line);

        line.clear();
        match divider.resistance_from_code(code) {
            Some(resistance) => {
                let kelvin = self.config.coefficients.temperature_kelvin(resistance);
                let _ = write!(line, "thermistor resistance: {:.1} Ohm", resistance);
                self.console.write_line(&line);

                line.clear();
                let _ = write!(
                    line,
                    "temperature: {:.1} K ({:.1} C)",
                    kelvin,
                    kelvin_to_celsius(kelvin)
                );
                self.console.write_line(&line);
            }
            None => {
                let _ = write!(line, "thermistor resistance: N/A");
                self.console.write_line(&line);

                line.clear();
                let _ = write!(
                    line,
                    "reading {} on analog channel {}, check your connections",
                    code,
                    self.config.channel.value()
                );
                self.console.write_line(&line);
            }
        }
    }
}
