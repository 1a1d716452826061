pub const SCROLL_THROTTLE_MS: f64 = 16.0;
pub const RESIZE_DEBOUNCE_MS: u32 = 250;
pub const MEMORY_CHECK_INTERVAL_MS: u32 = 30_000;
pub const MEMORY_PRESSURE_RATIO: f64 = 0.9;

/// Leading-edge throttle over a caller-supplied millisecond clock.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Throttle {
    interval_ms: f64,
    last_fire: Option<f64>,
}

impl Throttle {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms: interval_ms.max(0.0),
            last_fire: None,
        }
    }

    pub fn ready(&mut self, now_ms: f64) -> bool {
        let due = match self.last_fire {
            None => true,
            Some(last) => now_ms - last >= self.interval_ms || now_ms < last,
        };
        if due {
            self.last_fire = Some(now_ms);
        }
        due
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MemoryPressure {
    Normal,
    High,
}

impl MemoryPressure {
    pub fn from_sample(used_bytes: f64, limit_bytes: f64) -> MemoryPressure {
        if limit_bytes > 0.0 && used_bytes > limit_bytes * MEMORY_PRESSURE_RATIO {
            MemoryPressure::High
        } else {
            MemoryPressure::Normal
        }
    }
}

/// Scroll progress in percent, clamped to 0..=100.
pub fn scroll_progress(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable * 100.0).clamp(0.0, 100.0)
}
