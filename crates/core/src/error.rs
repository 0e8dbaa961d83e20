use derive_more::Display;

/// Domain faults that can come out of the grid and geometry code. These are
/// always returned wrapped in an [anyhow::Error]; use
/// `err.downcast_ref::<GridError>()` if you need to match on the kind.
///
/// Note that an unreachable pathfinding goal is **not** an error. That's an
/// expected outcome, and is represented by an empty path.
#[derive(Clone, Debug, Display, PartialEq)]
pub enum GridError {
    /// A function was evaluated at an input where it has no value, e.g. the
    /// tangent of 90°, or solving for `y` along a vertical edge
    #[display(fmt = "{} is undefined at {}", function, input)]
    UndefinedValue { function: &'static str, input: f64 },

    /// A value fell outside the range of valid inputs, e.g. a tile position
    /// that isn't in the grid
    #[display(fmt = "{} is outside of {}", value, range)]
    OutOfRange { value: String, range: String },

    /// Grid config specified neither a tile radius nor a tile count
    #[display(
        fmt = "grid config must specify either tile_radius or tile_count"
    )]
    MissingSize,

    /// Grid config specified both a tile radius and a tile count
    #[display(
        fmt = "grid config must specify only one of tile_radius and tile_count"
    )]
    AmbiguousSize,
}

impl std::error::Error for GridError {}
