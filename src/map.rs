/// MAZECAST Project
/// `File` map.rs
/// `Description` Grid world implementation module
/// `Author` TioT2
/// `Last changed` 19.10.2026

use crate::math::Vec2si;

/// Single grid cell kind
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Block {
    /// Walkable cell, rays pass through
    Empty = b' ',
    /// Solid wall
    Wall = b'|',
    /// Goal marker, solid and blinking
    Goal = b'X',
} // enum Block

impl Block {
    /// Block from map symbol construction function
    /// * `symbol` - ASCII map symbol
    /// * Returns block if symbol is known
    pub const fn from_symbol(symbol: u8) -> Option<Block> {
        match symbol {
            b' ' => Some(Block::Empty),
            b'|' => Some(Block::Wall),
            b'X' => Some(Block::Goal),
            _ => None,
        }
    } // fn from_symbol

    pub const fn symbol(self) -> u8 {
        self as u8
    } // fn symbol

    pub const fn is_empty(self) -> bool {
        matches!(self, Block::Empty)
    } // fn is_empty
} // impl Block

/// Immutable maze, `W` columns by `H` rows
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridWorld<const W: usize, const H: usize> {
    /// Cells, indexed by [row][column]
    rows: [[Block; W]; H],
} // struct GridWorld

impl<const W: usize, const H: usize> GridWorld<W, H> {
    pub const fn new(rows: [[Block; W]; H]) -> Self {
        Self { rows }
    } // fn new

    /// ASCII picture parsing function, row 0 first.
    /// Panics on unknown symbols, so const evaluation rejects broken maps.
    /// * `picture` - rows of ' ', '|' and 'X' symbols
    /// * Returns world
    pub const fn from_ascii(picture: &[&[u8; W]; H]) -> Self {
        let mut rows = [[Block::Empty; W]; H];

        let mut y = 0;
        while y < H {
            let mut x = 0;
            while x < W {
                rows[y][x] = match Block::from_symbol(picture[y][x]) {
                    Some(block) => block,
                    None => panic!("unknown map symbol"),
                };
                x += 1;
            }
            y += 1;
        }

        Self { rows }
    } // fn from_ascii

    pub const fn width(&self) -> usize {
        W
    } // fn width

    pub const fn height(&self) -> usize {
        H
    } // fn height

    /// Cell getting function
    /// * `cell` - (column, row) cell coordinates
    /// * Returns block or None if cell lies outside the world
    pub fn get(&self, cell: Vec2si) -> Option<Block> {
        let x = usize::try_from(cell.x).ok()?;
        let y = usize::try_from(cell.y).ok()?;

        self.rows.get(y)?.get(x).copied()
    } // fn get

    /// Cell getting function, everything outside of the world is solid
    pub fn block(&self, cell: Vec2si) -> Block {
        self.get(cell).unwrap_or(Block::Wall)
    } // fn block

    /// Border solidity check
    /// * Returns true if no border cell is empty
    pub fn is_enclosed(&self) -> bool {
        if W == 0 || H == 0 {
            return false;
        }

        let rows_closed = self.rows[0].iter().chain(self.rows[H - 1].iter()).all(|block| !block.is_empty());
        let columns_closed = self.rows.iter().all(|row| !row[0].is_empty() && !row[W - 1].is_empty());

        rows_closed && columns_closed
    } // fn is_enclosed
} // impl GridWorld

/// Sample maze, goal is in the top right corner
pub const SAMPLE_MAZE: GridWorld<16, 16> = GridWorld::from_ascii(&[
    b"||||||||||||||XX",
    b"|          |   X",
    b"| |||||||  |   X",
    b"|    |  |  | |XX",
    b"|    |  |  | |||",
    b"| |  |  |  |   |",
    b"| |  |  |  |   |",
    b"| |     |  ||| |",
    b"| |     |  |   |",
    b"| |||||||  |   |",
    b"|          |   |",
    b"|          |   |",
    b"| |||||||  |   |",
    b"|              |",
    b"|              |",
    b"||||||||||||||||",
]);


// file map.rs
