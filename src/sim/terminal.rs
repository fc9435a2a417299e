/// MAZECAST Project
/// `File` sim/terminal.rs
/// `Description` Text terminal display module
/// `Author` TioT2
/// `Last changed` 19.10.2026

use std::io::Write;

use mazecast::device::{glyph, Buttons, Display, InputSource};

/// Code page 437 cell to UTF-8 mapping function
/// * `cell` - cell to map
/// * Returns Unicode shade block for shade cells, None for bytes written as is
pub fn shade_symbol(cell: u8) -> Option<&'static str> {
    match cell {
        glyph::SPARSE => Some("\u{2591}"),
        glyph::MEDIUM => Some("\u{2592}"),
        glyph::DENSE => Some("\u{2593}"),
        _ => None,
    }
} // fn shade_symbol

/// ANSI terminal display over a byte stream
pub struct TerminalDisplay<O: Write> {
    output: O,
    /// First write error, later cells are dropped
    error: Option<std::io::Error>,
} // struct TerminalDisplay

impl<O: Write> TerminalDisplay<O> {
    pub fn new(output: O) -> Self {
        Self { output, error: None }
    } // fn new

    /// Frame completion function
    /// * Returns first error since the last call
    pub fn flush(&mut self) -> std::io::Result<()> {
        if let Some(error) = self.error.take() {
            return Err(error);
        }
        self.output.flush()
    } // fn flush

    pub fn into_inner(self) -> O {
        self.output
    } // fn into_inner
} // impl TerminalDisplay

impl<O: Write> Display for TerminalDisplay<O> {
    fn put(&mut self, cell: u8) {
        if self.error.is_some() {
            return;
        }

        let result = match shade_symbol(cell) {
            Some(symbol) => self.output.write_all(symbol.as_bytes()),
            None => self.output.write_all(&[cell]),
        };

        if let Err(error) = result {
            self.error = Some(error);
        }
    }
} // impl Display for TerminalDisplay

/// Switches held for the whole run
#[derive(Copy, Clone, Debug)]
pub struct HeldButtons(pub Buttons);

impl InputSource for HeldButtons {
    fn read(&mut self) -> Buttons {
        self.0
    }
} // impl InputSource for HeldButtons


// file terminal.rs
