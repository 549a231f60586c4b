//! Core data structures: players, board topology, and the game context.
//!
//! The central type is [`GameContext`], which holds the compiled [`Topology`]
//! and the DP result table V[board]. Topology is filled once by
//! [`crate::topology::precompute_lookup_tables`]; the table is filled by
//! [`crate::state_computation`] and read-only afterwards.

use crate::constants::*;

/// One of the two players. `A` always makes the first move of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    A,
    B,
}

impl Player {
    /// The opponent.
    pub fn other(self) -> Self {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Player::A => "A",
            Player::B => "B",
        }
    }

    /// Winner implied by a game value taken from A's perspective.
    ///
    /// The board has an odd number of faces, so a finished game never ties.
    pub fn from_first_mover_value(value: i32) -> Self {
        if value < 0 {
            Player::B
        } else {
            Player::A
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Compiled board graph.
///
/// Layout:
/// - `endpoints[e]` — the two vertex ids of edge `e`, smaller first
/// - `edge_lookup[v1][v2]` — edge id joining `v1` and `v2`, or -1 (symmetric)
/// - `triangle_masks[t]` — 3-bit mask of the edges bounding face `t`
/// - `edge_triangles[e][0..edge_triangle_count[e]]` — masks of the faces edge `e` borders
pub struct Topology {
    pub endpoints: [(u8, u8); EDGE_COUNT],
    pub edge_lookup: [[i8; VERTEX_SLOTS]; VERTEX_SLOTS],
    pub triangle_masks: [Board; TRIANGLE_COUNT],
    pub edge_triangles: [[Board; MAX_TRIANGLES_PER_EDGE]; EDGE_COUNT],
    pub edge_triangle_count: [u8; EDGE_COUNT],
}

impl Default for Topology {
    fn default() -> Self {
        Self::new()
    }
}

impl Topology {
    /// Empty tables. Call [`crate::topology::compile_topology`] or use [`Topology::build`].
    pub fn new() -> Self {
        Self {
            endpoints: [(0, 0); EDGE_COUNT],
            edge_lookup: [[-1; VERTEX_SLOTS]; VERTEX_SLOTS],
            triangle_masks: [0; TRIANGLE_COUNT],
            edge_triangles: [[0; MAX_TRIANGLES_PER_EDGE]; EDGE_COUNT],
            edge_triangle_count: [0; EDGE_COUNT],
        }
    }

    /// Allocate and compile the fixed board.
    pub fn build() -> Self {
        let mut topology = Self::new();
        crate::topology::compile_topology(&mut topology);
        topology
    }

    /// Edge joining two vertices, in either order. `None` if they are not adjacent.
    pub fn edge_id(&self, v1: i64, v2: i64) -> Option<EdgeId> {
        let slot = |v: i64| usize::try_from(v).ok().filter(|&v| v < VERTEX_SLOTS);
        let (a, b) = (slot(v1)?, slot(v2)?);
        let e = self.edge_lookup[a][b];
        if e < 0 {
            None
        } else {
            Some(e as EdgeId)
        }
    }

    /// Vertex ids of edge `e`, smaller first.
    #[inline(always)]
    pub fn edge_endpoints(&self, e: EdgeId) -> (u8, u8) {
        self.endpoints[e]
    }

    /// Face masks that edge `e` borders (one or two of them).
    #[inline(always)]
    pub fn triangles_of_edge(&self, e: EdgeId) -> &[Board] {
        &self.edge_triangles[e][..self.edge_triangle_count[e] as usize]
    }
}

/// Topology plus the exhaustive value table V[board].
///
/// `board_values[b]` is the net score the player to move at `b` can guarantee
/// from there on. Entries hold [`SENTINEL`] until the DP pass has run.
/// Only the [`crate::state_computation`] passes write the table or the flag.
pub struct GameContext {
    pub topology: Topology,
    pub(crate) board_values: Vec<i8>,
    /// Set once every entry of `board_values` is final.
    pub(crate) values_computed: bool,
}

impl Default for GameContext {
    fn default() -> Self {
        Self::new()
    }
}

impl GameContext {
    pub fn new() -> Self {
        Self {
            topology: Topology::new(),
            board_values: vec![SENTINEL; NUM_BOARDS],
            values_computed: false,
        }
    }

    /// Allocate on the heap directly.
    pub fn new_boxed() -> Box<Self> {
        Box::new(Self::new())
    }

    /// Read-only view of V[board], indexed by board.
    pub fn board_values(&self) -> &[i8] {
        &self.board_values
    }

    /// True once a DP pass has finalized every entry.
    pub fn values_computed(&self) -> bool {
        self.values_computed
    }

    /// Value of `board` for the player to move, or `None` if not yet computed.
    #[inline(always)]
    pub fn board_value(&self, board: Board) -> Option<i32> {
        match self.board_values[board as usize] {
            SENTINEL => None,
            v => Some(v as i32),
        }
    }
}
