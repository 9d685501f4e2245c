//! Random-walk dungeon carving on hexagonal grids
//!
//! A standalone library for procedurally carving playable maps on a hex
//! grid: biased random walks dig corridors, isolated walks are stitched
//! back with straight hex-line cuts, and one cellular-automata pass
//! smooths the result.
//!
//! # Quick Start
//!
//! ```rust
//! use hex_dungeon_walk::*;
//!
//! // Generate a dungeon
//! let config = DungeonConfigBuilder::new()
//!     .seed(42)
//!     .dimensions(40, 16).unwrap()
//!     .walks(5).unwrap()
//!     .build().unwrap();
//!
//! let dungeon = HexDungeon::generate(config).unwrap();
//!
//! // Render it as text
//! let text = render_text(dungeon.grid(), &BasicGlyphMapper);
//! println!("{}", text);
//! ```
//!
//! # Features
//!
//! - `serde`: Enables serialization support for configurations and
//!   coordinates

// Modules
pub mod error;
pub mod config;
pub mod hex;
pub mod tile;
pub mod grid;
pub mod generation;
pub mod dungeon;
pub mod render;

// Re-export core types for convenience
pub use error::{DungeonError, Result};
pub use config::{DungeonConfig, DungeonConfigBuilder, MapType};
pub use hex::{cube_line, cube_round, lerp, ring, shortest_path_len};
pub use hex::{Axial, CoordForm, Cube, HexCoord, Offset};
pub use tile::Tile;
pub use grid::DungeonGrid;
pub use generation::{
    carve_dungeon, carve_walk, smooth, BlockedRegion, CarveReport, DirectionWeights, SmoothRule,
    VisitedSet, WalkOutcome,
};
pub use dungeon::HexDungeon;
pub use render::{render_text, BasicGlyphMapper, CustomGlyphMapper, GlyphMapper};
