// Constants for the tape interpreter

/// Number of cells added each time the tape grows
pub const DEFAULT_CHUNK_SIZE: usize = 32;

/// Default number of cells shown in the tape window
pub const DEFAULT_WINDOW_SIZE: usize = 10;

/// Default minimum distance between the head and a window edge before the
/// window scrolls
pub const DEFAULT_MARGIN: usize = 2;
