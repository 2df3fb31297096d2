use std::fmt;

use crate::coords::Vector2;

/// Invalid `TileGrid` construction parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TileGridError {
    /// A border pad component is below zero.
    NegativeBorderPad { border_pad: Vector2<i32> },
    /// The grid has zero or fewer tiles along some axis.
    NonPositiveShape { shape: Vector2<i32> },
    /// Padding leaves no drawable pixels along some axis.
    PaddingOccludesSurface {
        border_pad: Vector2<i32>,
        surface_size: Vector2<u32>,
    },
}

impl fmt::Display for TileGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TileGridError::NegativeBorderPad { border_pad } => {
                write!(f, "the border pad cannot be negative (got {border_pad})")
            }
            TileGridError::NonPositiveShape { shape } => {
                write!(f, "the dimensions of the tile grid in tiles must be positive (got {shape})")
            }
            TileGridError::PaddingOccludesSurface {
                border_pad,
                surface_size,
            } => write!(
                f,
                "the border padding is too big; {border_pad} on each side occludes the entire {surface_size} drawing space"
            ),
        }
    }
}

impl std::error::Error for TileGridError {}
