use std::io::{self, Write};
use std::time::{Duration, Instant};

use spritemark_sim::SpriteField;

use crate::renderer::Renderer;
use crate::timing::FrameReporter;

/// Result of a completed benchmark loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopSummary {
    /// Frames actually executed.
    pub frames: u32,
    /// Total elapsed time across all frames.
    pub total: Duration,
}

impl LoopSummary {
    /// Mean frame time in milliseconds; zero for an empty run.
    pub fn mean_ms(&self) -> f64 {
        if self.frames == 0 {
            return 0.0;
        }
        self.total.as_secs_f64() * 1000.0 / f64::from(self.frames)
    }
}

/// Run the benchmark loop for exactly `frames` iterations.
///
/// Each frame: integrate the field, render it, and report the elapsed wall
/// time for the pair. The loop runs unconditionally to completion: there is
/// no early-exit trigger and no error state; entity count (including zero)
/// only affects how long each frame takes.
pub fn run_frames<R, W>(
    field: &mut SpriteField,
    renderer: &mut R,
    frames: u32,
    reporter: &mut FrameReporter<W>,
) -> io::Result<LoopSummary>
where
    R: Renderer,
    W: Write,
{
    let mut total = Duration::ZERO;
    for _ in 0..frames {
        let start = Instant::now();
        field.step();
        renderer.render(field);
        let elapsed = start.elapsed();
        total += elapsed;
        reporter.record(elapsed)?;
    }
    let summary = LoopSummary { frames, total };
    tracing::debug!(frames, mean_ms = summary.mean_ms(), "frame loop complete");
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::NullRenderer;
    use spritemark_common::BenchConfig;

    /// Counts render calls and the sprite count seen on each.
    #[derive(Default)]
    struct CountingRenderer {
        calls: u32,
        draws: usize,
    }

    impl Renderer for CountingRenderer {
        type Output = ();

        fn render(&mut self, field: &SpriteField) {
            self.calls += 1;
            self.draws += field.len();
        }
    }

    fn field_of(sprites: usize) -> SpriteField {
        SpriteField::spawn(&BenchConfig {
            sprites,
            ..BenchConfig::default()
        })
    }

    #[test]
    fn runs_exactly_the_configured_frame_count() {
        let mut field = field_of(10);
        let mut renderer = CountingRenderer::default();
        let mut reporter = FrameReporter::new(Vec::new());
        let summary = run_frames(&mut field, &mut renderer, 37, &mut reporter).unwrap();
        assert_eq!(summary.frames, 37);
        assert_eq!(renderer.calls, 37);
        assert_eq!(renderer.draws, 37 * 10);
    }

    #[test]
    fn zero_sprites_still_emits_every_timing_line() {
        let mut field = field_of(0);
        let mut renderer = CountingRenderer::default();
        let mut reporter = FrameReporter::new(Vec::new());
        run_frames(&mut field, &mut renderer, 20, &mut reporter).unwrap();
        assert_eq!(renderer.calls, 20);
        assert_eq!(renderer.draws, 0);
        let out = String::from_utf8(reporter.into_inner()).unwrap();
        assert_eq!(out.lines().count(), 20);
        for line in out.lines() {
            let ms: f64 = line.parse().unwrap();
            assert!(ms.is_finite() && ms >= 0.0);
        }
    }

    #[test]
    fn zero_frames_runs_nothing() {
        let mut field = field_of(5);
        let before = field.state_hash();
        let mut reporter = FrameReporter::new(Vec::new());
        let summary =
            run_frames(&mut field, &mut NullRenderer::new(), 0, &mut reporter).unwrap();
        assert_eq!(summary.frames, 0);
        assert_eq!(summary.mean_ms(), 0.0);
        assert_eq!(field.state_hash(), before);
        assert!(reporter.into_inner().is_empty());
    }

    #[test]
    fn loop_advances_the_simulation() {
        let mut field = field_of(10);
        let before = field.state_hash();
        let mut reporter = FrameReporter::new(Vec::new());
        run_frames(&mut field, &mut NullRenderer::new(), 5, &mut reporter).unwrap();
        assert_ne!(field.state_hash(), before);
    }
}
