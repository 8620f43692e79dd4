//! Console port - abstraction for line-oriented diagnostic text

/// Port for human-readable diagnostic output.
///
/// The reporter hands over one rendered line at a time, without a line
/// ending; the implementation appends whatever its transport wants.
/// Diagnostics are side-effect only and best-effort, so there is nothing
/// to return.
pub trait ConsolePort {
    /// Append one line to the sink.
    fn write_line(&mut self, line: &str);
}

/// Console that discards everything.
///
/// For builds that leave diagnostics permanently off and have no sink to
/// wire up.
pub struct NullConsole;

impl ConsolePort for NullConsole {
    fn write_line(&mut self, _line: &str) {}
}
