//! UART console adapter
//!
//! Implements [`ConsolePort`] over a blocking embassy-rp UART
//! transmitter, one CRLF-terminated line per call.

use embassy_rp::uart::{Blocking, Instance, UartTx};

use crate::ports::console::ConsolePort;

/// Line console over a blocking UART transmitter.
///
/// Diagnostics are best-effort; transmit errors are dropped.
pub struct UartConsole<'a, T: Instance> {
    tx: UartTx<'a, T, Blocking>,
}

impl<'a, T: Instance> UartConsole<'a, T> {
    pub fn new(tx: UartTx<'a, T, Blocking>) -> Self {
        Self { tx }
    }
}

impl<'a, T: Instance> ConsolePort for UartConsole<'a, T> {
    fn write_line(&mut self, line: &str) {
        let _ = self.tx.blocking_write(line.as_bytes());
        let _ = self.tx.blocking_write(b"\r\n");
    }
}
