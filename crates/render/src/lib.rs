//! Renderer-agnostic interface, frame timing, and the fixed-count loop driver.
//!
//! The GPU backend lives in `spritemark-render-wgpu`; everything here runs
//! headless so the loop and its reporting can be exercised in tests.

pub mod harness;
pub mod renderer;
pub mod timing;

pub use harness::{LoopSummary, run_frames};
pub use renderer::{NullRenderer, Renderer, TextRenderer};
pub use timing::FrameReporter;
