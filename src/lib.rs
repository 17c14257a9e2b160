//! Dashline - a side-scrolling endless runner simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (world streaming, obstacles, progression)
//! - `tuning`: Data-driven game balance
//! - `records`: Best-run leaderboard
//!
//! Rendering, input capture, audio and UI are external collaborators: the
//! crate exposes score, elapsed time, phase and the runner's state, and
//! consumes a single per-tick input struct.

pub mod records;
pub mod sim;
pub mod tuning;

pub use records::Records;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz for smooth motion)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
}
