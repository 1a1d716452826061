//! State machines behind deferred loading.
//!
//! Nothing here touches the DOM; the wasm crate drives these from
//! IntersectionObserver callbacks and image/network events.

/// `rootMargin`/`threshold` pair handed to the visibility watcher.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObserverOptions {
    pub root_margin: &'static str,
    pub threshold: f64,
}

pub const IMAGE_OBSERVER: ObserverOptions = ObserverOptions {
    root_margin: "50px 0px",
    threshold: 0.01,
};

pub const SECTION_OBSERVER: ObserverOptions = ObserverOptions {
    root_margin: "200px 0px",
    threshold: 0.0,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum VisibilityTrigger {
    #[default]
    Armed,
    Fired,
}

impl VisibilityTrigger {
    /// Returns `true` only for the transition itself.
    pub fn fire(&mut self) -> bool {
        match self {
            VisibilityTrigger::Armed => {
                *self = VisibilityTrigger::Fired;
                true
            }
            VisibilityTrigger::Fired => false,
        }
    }

    pub fn is_fired(self) -> bool {
        self == VisibilityTrigger::Fired
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ImageLoadState {
    #[default]
    Placeholder,
    Loaded,
    Failed,
}

impl ImageLoadState {
    pub fn is_terminal(self) -> bool {
        !matches!(self, ImageLoadState::Placeholder)
    }

    pub fn on_load(self) -> ImageLoadState {
        match self {
            ImageLoadState::Placeholder => ImageLoadState::Loaded,
            terminal => terminal,
        }
    }

    pub fn on_error(self) -> ImageLoadState {
        match self {
            ImageLoadState::Placeholder => ImageLoadState::Failed,
            terminal => terminal,
        }
    }
}

/// Quality to request: full when the connection allows it, otherwise 20
/// points lower but never under 50.
pub fn effective_quality(requested: u8, high_quality: bool) -> u8 {
    if high_quality {
        requested
    } else {
        requested.saturating_sub(20).max(50)
    }
}

/// Connection hints as reported by `navigator.connection`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConnectionHint {
    pub effective_type: Option<String>,
    pub save_data: bool,
}

impl ConnectionHint {
    pub fn allows_high_quality(&self) -> bool {
        if self.save_data {
            return false;
        }
        !matches!(
            self.effective_type.as_deref(),
            Some("slow-2g") | Some("2g") | Some("3g")
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SectionLoadError {
    #[error("asset failed to load: {0}")]
    Asset(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SectionLoad {
    /// Placeholder shown, watcher armed.
    Deferred,
    Pending { attempt: u32 },
    Loaded,
    /// Rendered anyway in degraded mode.
    Failed { attempts: u32, error: SectionLoadError },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay_ms: u32,
    pub factor: u32,
}

pub const SECTION_RETRY: RetryPolicy = RetryPolicy {
    max_attempts: 3,
    base_delay_ms: 400,
    factor: 4,
};

impl RetryPolicy {
    /// Delay before `attempt` (1-based). The first attempt runs immediately.
    pub fn delay_before(&self, attempt: u32) -> u32 {
        if attempt <= 1 {
            return 0;
        }
        let exponent = attempt - 2;
        self.base_delay_ms
            .saturating_mul(self.factor.saturating_pow(exponent))
    }
}

impl SectionLoad {
    pub fn should_render(&self) -> bool {
        matches!(self, SectionLoad::Loaded | SectionLoad::Failed { .. })
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, SectionLoad::Failed { .. })
    }

    /// Visibility fired. Only a deferred slot starts loading.
    pub fn start(&self) -> Option<SectionLoad> {
        match self {
            SectionLoad::Deferred => Some(SectionLoad::Pending { attempt: 1 }),
            _ => None,
        }
    }

    /// Folds one attempt result into the next state.
    pub fn settle(
        &self,
        result: Result<(), SectionLoadError>,
        policy: &RetryPolicy,
    ) -> SectionLoad {
        let SectionLoad::Pending { attempt } = *self else {
            return self.clone();
        };
        match result {
            Ok(()) => SectionLoad::Loaded,
            Err(error) if attempt >= policy.max_attempts => SectionLoad::Failed {
                attempts: attempt,
                error,
            },
            Err(_) => SectionLoad::Pending {
                attempt: attempt + 1,
            },
        }
    }
}
