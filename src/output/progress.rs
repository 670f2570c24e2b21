//! Console progress reporting for long runs.
//!
//! Emits a "n% complete" marker at most once each as the elapsed simulated
//! time crosses every whole percent of the total duration.

use tracing::info;

pub struct ProgressMeter {
    t_end: f64,
    current_percent: u32, // next marker to cross, 0 -> "1% complete"
}

impl ProgressMeter {
    pub fn new(t_end: f64) -> Self {
        Self {
            t_end,
            current_percent: 0,
        }
    }

    /// Report every whole-percent marker `t` has crossed since the last
    /// call. Markers never repeat.
    pub fn update(&mut self, t: f64) {
        while self.current_percent < 99 && t > self.t_end * f64::from(self.current_percent) / 100.0
        {
            info!("{}% complete", self.current_percent + 1);
            self.current_percent += 1;
        }
    }

    pub fn finish(&self) {
        info!("100% complete");
    }
}
