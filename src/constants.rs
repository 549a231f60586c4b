//! Board constants and bit-indexing helpers.
//!
//! The board is the side-3 triangular lattice: 10 points in rows of 1, 2, 3, 4,
//! joined by 18 unit edges that bound 9 unit triangles. A board state is an
//! 18-bit mask over edge ids; bit `e` set means edge `e` has been claimed by
//! either player.
//!
//! The edge and triangle tables are domain data. Input files name edges by
//! their endpoint vertex ids, so the numbering below must not change.

/// Board bitmask. Only the low [`EDGE_COUNT`] bits are meaningful.
pub type Board = u32;

/// Edge identifier in `0..EDGE_COUNT`.
pub type EdgeId = usize;

/// Number of lattice points. Vertex ids run from 1 to 10.
pub const VERTEX_COUNT: usize = 10;

/// Size of the vertex-pair lookup table along each axis.
///
/// Accepts any vertex id in `0..=11`; pairs that are not edges map to -1.
pub const VERTEX_SLOTS: usize = 12;

/// Number of edges on the board.
pub const EDGE_COUNT: usize = 18;

/// Number of triangular faces.
pub const TRIANGLE_COUNT: usize = 9;

/// An edge borders at most two faces.
pub const MAX_TRIANGLES_PER_EDGE: usize = 2;

/// Number of distinct board states: 2^18 = 262,144.
pub const NUM_BOARDS: usize = 1 << EDGE_COUNT;

/// Board with every edge claimed. It has no legal moves and value 0.
pub const FULL_BOARD: Board = (1 << EDGE_COUNT) - 1;

/// Empty board, the start of every game.
pub const EMPTY_BOARD: Board = 0;

/// Marks an uncomputed table entry.
///
/// True game values lie in `-9..=9`, so anything at or below -10 is safe.
pub const SENTINEL: i8 = i8::MIN;

/// Edge table as `(vertex, vertex, edge id)` triples.
pub const EDGE_TABLE: [(u8, u8, u8); EDGE_COUNT] = [
    (1, 2, 0),
    (1, 3, 1),
    (2, 3, 4),
    (2, 4, 2),
    (2, 5, 3),
    (3, 5, 5),
    (3, 6, 6),
    (4, 5, 9),
    (4, 7, 7),
    (4, 8, 8),
    (5, 6, 12),
    (5, 8, 10),
    (5, 9, 11),
    (6, 9, 13),
    (6, 10, 14),
    (7, 8, 15),
    (8, 9, 16),
    (9, 10, 17),
];

/// The three edge ids bounding each face.
pub const TRIANGLE_EDGES: [[u8; 3]; TRIANGLE_COUNT] = [
    [0, 1, 4],
    [2, 3, 9],
    [5, 6, 12],
    [7, 8, 15],
    [3, 4, 5],
    [10, 11, 16],
    [13, 14, 17],
    [8, 9, 10],
    [11, 12, 13],
];

/// Single-bit mask for edge `e`.
#[inline(always)]
pub fn edge_bit(e: EdgeId) -> Board {
    1 << e
}

/// Test whether edge `e` has been claimed (bit `e` is set).
#[inline(always)]
pub fn is_edge_claimed(board: Board, e: EdgeId) -> bool {
    (board & edge_bit(e)) != 0
}

/// Number of claimed edges. Successors of a board always sit one level higher.
#[inline(always)]
pub fn claimed_count(board: Board) -> usize {
    board.count_ones() as usize
}
