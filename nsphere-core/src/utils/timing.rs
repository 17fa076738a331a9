use crate::utils::Float;
use std::time::Instant;

/// Implements a simple performance timer.
#[derive(Clone)]
pub struct Timer {
    start: Instant,
}

impl Timer {
    /// Starts a new timer.
    pub fn start() -> Self {
        Self { start: Instant::now() }
    }

    /// Returns elapsed seconds.
    pub fn elapsed_secs(&self) -> u64 {
        (Instant::now() - self.start).as_secs()
    }

    /// Returns elapsed seconds as floating point number.
    pub fn elapsed_secs_as_float(&self) -> Float {
        (Instant::now() - self.start).as_secs_f64()
    }

    /// Returns elapsed milliseconds.
    pub fn elapsed_millis(&self) -> u128 {
        (Instant::now() - self.start).as_millis()
    }

    /// Renders elapsed time as `[Xh ]Ym Zs`.
    pub fn elapsed_display(&self) -> String {
        let secs = self.elapsed_secs();
        let (hours, minutes, seconds) = (secs / 3600, (secs % 3600) / 60, secs % 60);

        format!(
            "time elapsed = {}{minutes:02}m {seconds:02}s",
            if hours > 0 { format!("{hours}h ") } else { String::new() }
        )
    }
}
