use std::time::Instant;

/// How often the FPS figure is refreshed, in seconds
pub const FPS_UPDATE_INTERVAL: f32 = 1.0;

/// Frame metadata - carries frame number and timing info
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    pub number: u64,
    pub time: f32,
    pub delta: f32,
}

/// Produces a `FrameInfo` per redraw and keeps a running FPS figure
#[derive(Debug)]
pub struct FrameClock {
    number: u64,
    start: Instant,
    last: Instant,
    fps: FpsCounter,
}

impl FrameClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            number: 0,
            start: now,
            last: now,
            fps: FpsCounter::default(),
        }
    }

    pub fn tick(&mut self) -> FrameInfo {
        let now = Instant::now();
        let info = FrameInfo {
            number: self.number,
            time: now.duration_since(self.start).as_secs_f32(),
            delta: now.duration_since(self.last).as_secs_f32(),
        };
        self.number += 1;
        self.last = now;
        if let Some(fps) = self.fps.record(info.delta) {
            log::debug!("FPS: {:.1}", fps);
        }
        info
    }

    pub fn fps(&self) -> f32 {
        self.fps.fps()
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Frames-per-second averaged over `FPS_UPDATE_INTERVAL`
#[derive(Debug, Clone, Copy, Default)]
pub struct FpsCounter {
    frame_count: u32,
    elapsed: f32,
    fps: f32,
}

impl FpsCounter {
    /// Count one frame; returns the new figure when it was refreshed
    pub fn record(&mut self, delta: f32) -> Option<f32> {
        self.frame_count += 1;
        self.elapsed += delta;

        if self.elapsed >= FPS_UPDATE_INTERVAL {
            self.fps = self.frame_count as f32 / self.elapsed;
            self.frame_count = 0;
            self.elapsed = 0.0;
            Some(self.fps)
        } else {
            None
        }
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fps_refreshes_after_interval() {
        let mut counter = FpsCounter::default();
        for _ in 0..59 {
            assert_eq!(counter.record(1.0 / 60.0), None);
        }
        let fps = counter.record(1.0 / 60.0 + 0.001).unwrap();
        assert!((fps - 60.0).abs() < 0.5);
        assert_eq!(counter.fps(), fps);
    }

    #[test]
    fn clock_numbers_frames() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick().number, 0);
        let second = clock.tick();
        assert_eq!(second.number, 1);
        assert!(second.delta >= 0.0);
        assert!(second.time >= second.delta);
    }
}
