//! Gated NTC divider on ADC channel 0, logged once a second.
//!
//! Wiring: thermistor from GPIO22 (the power gate) to GPIO26, 10 kΩ
//! pulldown from GPIO26 to ground, so the divider only draws current
//! while GPIO22 is high. The diagnostic report goes out on UART0 TX
//! (GPIO0) at the default baud rate; the derived temperature is also
//! logged over defmt.

#![no_std]
#![no_main]

use defmt::info;
use embassy_executor::Spawner;
use embassy_rp::adc::{self, Adc, Channel};
use embassy_rp::block::ImageDef;
use embassy_rp::gpio::{Level, Output, Pull};
use embassy_rp::uart::{self, UartTx};
use embassy_time::Timer;
use {defmt_rtt as _, panic_probe as _};

use thermistor::adapters::{RpAdc, RpGate, UartConsole};
use thermistor::domain::{kelvin_to_celsius, DividerModel};
use thermistor::ports::{AnalogChannel, DigitalChannel};
use thermistor::sensor::TemperatureSensor;

#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = ImageDef::secure_exe();

const NTC: AnalogChannel = AnalogChannel::new(0);
const GATE: DigitalChannel = DigitalChannel::new(22);

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());

    let mut adc = RpAdc::<1>::new(Adc::new_blocking(p.ADC, adc::Config::default()));
    let _ = adc.bind(NTC, Channel::new_pin(p.PIN_26, Pull::None));

    let mut gate = RpGate::<1>::new();
    let _ = gate.bind(GATE, Output::new(p.PIN_22, Level::Low));

    let console = UartConsole::new(UartTx::new_blocking(
        p.UART0,
        p.PIN_0,
        uart::Config::default(),
    ));

    let mut sensor = TemperatureSensor::with_gate(adc, gate, console, NTC, GATE);
    sensor.set_divider(DividerModel::new(10_000.0, 10_000.0, 3.3));
    sensor.set_diagnostics(true);

    loop {
        let measurement = sensor.measure();
        if measurement.is_fault() {
            info!("thermistor fault, check the divider wiring");
        } else {
            info!("thermistor: {} C", kelvin_to_celsius(measurement.kelvin));
        }
        Timer::after_secs(1).await;
    }
}
