//! MAZECAST Project
//! `File` device.rs
//! `Description` Display, input and board register module
//! `Author` TioT2
//! `Last changed` 19.10.2026

bitflags::bitflags! {
    /// Switch state, bits match the board GPIO register
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct Buttons: u32 {
        /// Switch 2, turn while held
        const TURN = 0x200;
        /// Switch 3, walk forward while held
        const MOVE = 0x400;
    }
}

/// Code page 437 cells the renderer emits
pub mod glyph {
    pub const SPACE: u8 = b' ';
    /// Light shade, y-axis wall faces
    pub const SPARSE: u8 = 0xB0;
    /// Medium shade, x-axis wall faces
    pub const MEDIUM: u8 = 0xB1;
    /// Dark shade, floor
    pub const DENSE: u8 = 0xB2;
    /// Goal seen across a y-axis boundary
    pub const GOAL_FACE: u8 = b'#';
    /// Goal seen across an x-axis boundary
    pub const GOAL_SIDE: u8 = b'X';
} // mod glyph

/// Cursor home terminal sequence
pub const CURSOR_HOME: &[u8] = b"\x1B[H";

/// Character cell sink
pub trait Display {
    /// Next cell in row-major order
    fn put(&mut self, cell: u8);

    /// Frame start, moves the cursor back to the top left cell
    fn home(&mut self) {
        for &byte in CURSOR_HOME {
            self.put(byte);
        }
    } // fn home
} // trait Display

/// Switch state source, polled once per frame
pub trait InputSource {
    fn read(&mut self) -> Buttons;
} // trait InputSource

/// Character output register address
pub const CHARACTER_REGISTER: usize = 0x8000_0000;
/// GPIO register address
pub const GPIO_REGISTER: usize = 0x8000_0010;

/// Device register bus
pub trait Registers {
    fn read32(&self, address: usize) -> u32;
    fn write32(&mut self, address: usize, value: u32);

    /// Byte-wide register write
    fn write8(&mut self, address: usize, value: u8) {
        self.write32(address, value as u32);
    } // fn write8
} // trait Registers

/// Memory-mapped register bus
#[derive(Debug)]
pub struct MmioRegisters {
    _private: (),
} // struct MmioRegisters

impl MmioRegisters {
    /// # Safety
    /// Every address passed to the bus must be a valid, aligned device register.
    pub const unsafe fn new() -> Self {
        Self { _private: () }
    } // fn new
} // impl MmioRegisters

impl Registers for MmioRegisters {
    fn read32(&self, address: usize) -> u32 {
        // SAFETY: guaranteed by `MmioRegisters::new` contract
        unsafe { core::ptr::read_volatile(address as *const u32) }
    }

    fn write32(&mut self, address: usize, value: u32) {
        // SAFETY: guaranteed by `MmioRegisters::new` contract
        unsafe { core::ptr::write_volatile(address as *mut u32, value) }
    }

    fn write8(&mut self, address: usize, value: u8) {
        // SAFETY: guaranteed by `MmioRegisters::new` contract
        unsafe { core::ptr::write_volatile(address as *mut u8, value) }
    }
} // impl Registers for MmioRegisters

/// Board adapter: character register display and GPIO switches
#[derive(Debug)]
pub struct Board<R: Registers> {
    registers: R,
} // struct Board

impl<R: Registers> Board<R> {
    pub const fn new(registers: R) -> Self {
        Self { registers }
    } // fn new

    pub fn registers(&self) -> &R {
        &self.registers
    } // fn registers
} // impl Board

impl<R: Registers> Display for Board<R> {
    fn put(&mut self, cell: u8) {
        self.registers.write8(CHARACTER_REGISTER, cell);
    }
} // impl Display for Board

impl<R: Registers> InputSource for Board<R> {
    fn read(&mut self) -> Buttons {
        Buttons::from_bits_truncate(self.registers.read32(GPIO_REGISTER))
    }
} // impl InputSource for Board

/// In-memory `W` x `H` cell grid display
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellBuffer<const W: usize, const H: usize> {
    cells: [[u8; W]; H],
    cursor: usize,
} // struct CellBuffer

impl<const W: usize, const H: usize> CellBuffer<W, H> {
    pub const fn new() -> Self {
        Self {
            cells: [[glyph::SPACE; W]; H],
            cursor: 0,
        }
    } // fn new

    /// Cell getting function
    /// * `x` - column
    /// * `y` - row
    /// * Returns cell value, None if out of the grid
    pub fn cell(&self, x: usize, y: usize) -> Option<u8> {
        self.cells.get(y)?.get(x).copied()
    } // fn cell

    pub fn rows(&self) -> &[[u8; W]; H] {
        &self.cells
    } // fn rows

    /// Count of cells written since last home
    pub fn cursor(&self) -> usize {
        self.cursor
    } // fn cursor
} // impl CellBuffer

impl<const W: usize, const H: usize> Default for CellBuffer<W, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const W: usize, const H: usize> Display for CellBuffer<W, H> {
    fn put(&mut self, cell: u8) {
        if self.cursor < W * H {
            self.cells[self.cursor / W][self.cursor % W] = cell;
        }
        self.cursor += 1;
    }

    fn home(&mut self) {
        self.cursor = 0;
    }
} // impl Display for CellBuffer


// file device.rs
