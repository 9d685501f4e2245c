//! Dungeon generation configuration and builder
//!
//! This module provides configuration types for deterministic dungeon generation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{DungeonError, Result};

/// Map styles the carving pipeline can produce
///
/// The style decides where each walk starts and how strongly a walk keeps
/// its heading from one step to the next.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapType {
    /// Walks start anywhere on the grid and wander without a heading bias,
    /// producing scattered open chambers
    Open,
    /// Walks after the first start on an existing path cell and keep their
    /// heading, producing long branching corridors
    Alley,
}

impl MapType {
    /// Weight-recompute exponent used after every ordinary step
    ///
    /// Zero leaves the direction weights uniform; the positive alley value
    /// suppresses directions far from the last step, straightening paths.
    pub fn continuity_alpha(self) -> f64 {
        match self {
            MapType::Open => 0.0,
            MapType::Alley => 0.5,
        }
    }

    /// Get a human-readable name for this map type
    pub fn name(self) -> &'static str {
        match self {
            MapType::Open => "Open",
            MapType::Alley => "Alley",
        }
    }
}

impl Default for MapType {
    fn default() -> Self {
        MapType::Open
    }
}

/// Configuration for deterministic dungeon generation
///
/// The same configuration always produces the identical dungeon. Only the
/// configuration is worth persisting; a grid is regenerated from it.
///
/// # Example
///
/// ```rust
/// use hex_dungeon_walk::*;
///
/// let config = DungeonConfigBuilder::new()
///     .seed(42)
///     .dimensions(30, 12)
///     .unwrap()
///     .build()
///     .unwrap();
///
/// // Config is serializable (with "serde" feature)
/// # #[cfg(feature = "serde")]
/// # {
/// let json = serde_json::to_string(&config).unwrap();
/// let restored: DungeonConfig = serde_json::from_str(&json).unwrap();
/// assert_eq!(config.seed, restored.seed);
/// # }
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DungeonConfig {
    /// Random seed for deterministic generation
    ///
    /// The same seed (with the same other parameters) always produces the
    /// exact same grid, walk by walk.
    pub seed: u64,

    /// Grid width in columns
    pub width: u32,

    /// Grid height in rows
    pub height: u32,

    /// Number of independent carving walks
    pub walks: u32,

    /// Step budget for each walk
    ///
    /// A walk that hits the grid edge may stop short of this length.
    pub max_walk_length: u32,

    /// Map style (start-cell selection and heading bias)
    pub map_type: MapType,
}

impl DungeonConfig {
    /// Number of cells on the grid
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

impl Default for DungeonConfig {
    fn default() -> Self {
        DungeonConfigBuilder::new().build().unwrap()
    }
}

/// Builder for creating DungeonConfig with validation
///
/// Uses the builder pattern to create configurations with sensible defaults
/// and validated parameters.
///
/// # Example
///
/// ```rust
/// use hex_dungeon_walk::*;
///
/// // Use defaults
/// let config = DungeonConfigBuilder::new().build().unwrap();
///
/// // Customize
/// let config = DungeonConfigBuilder::new()
///     .seed(12345)
///     .dimensions(40, 16)
///     .unwrap()
///     .walks(8)
///     .unwrap()
///     .max_walk_length(30)
///     .unwrap()
///     .map_type(MapType::Alley)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct DungeonConfigBuilder {
    seed: Option<u64>,
    width: u32,
    height: u32,
    walks: u32,
    max_walk_length: u32,
    map_type: MapType,
}

impl DungeonConfigBuilder {
    /// Create a new builder with default values
    ///
    /// Defaults:
    /// - seed: Random (generated at build time)
    /// - dimensions: 50 x 20
    /// - walks: 5
    /// - max_walk_length: 25
    /// - map_type: Open
    pub fn new() -> Self {
        Self {
            seed: None,
            width: 50,
            height: 20,
            walks: 5,
            max_walk_length: 25,
            map_type: MapType::default(),
        }
    }

    /// Set the random seed for generation
    ///
    /// Using the same seed with the same other parameters will produce an
    /// identical dungeon every time.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the grid dimensions in columns and rows
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if either dimension is zero.
    pub fn dimensions(mut self, width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(DungeonError::InvalidConfig(format!(
                "grid dimensions must be positive (got {}x{})",
                width, height
            )));
        }
        self.width = width;
        self.height = height;
        Ok(self)
    }

    /// Set the number of carving walks
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if walks is zero.
    pub fn walks(mut self, walks: u32) -> Result<Self> {
        if walks == 0 {
            return Err(DungeonError::InvalidConfig(
                "at least one walk is required".to_string(),
            ));
        }
        self.walks = walks;
        Ok(self)
    }

    /// Set the step budget for each walk
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the budget is zero.
    pub fn max_walk_length(mut self, max_walk_length: u32) -> Result<Self> {
        if max_walk_length == 0 {
            return Err(DungeonError::InvalidConfig(
                "walk length must be positive".to_string(),
            ));
        }
        self.max_walk_length = max_walk_length;
        Ok(self)
    }

    /// Set the map style
    pub fn map_type(mut self, map_type: MapType) -> Self {
        self.map_type = map_type;
        self
    }

    /// Build the configuration
    ///
    /// If no seed was provided, generates a random seed.
    pub fn build(self) -> Result<DungeonConfig> {
        let seed = self.seed.unwrap_or_else(rand::random);

        Ok(DungeonConfig {
            seed,
            width: self.width,
            height: self.height,
            walks: self.walks,
            max_walk_length: self.max_walk_length,
            map_type: self.map_type,
        })
    }
}

impl Default for DungeonConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
