use crate::catalog::{CategoryFilter, ProjectEntry, PORTFOLIO_CATALOG};

pub const ZOOM_MIN: f32 = 0.5;
pub const ZOOM_MAX: f32 = 3.0;
pub const ZOOM_STEP: f32 = 0.5;
pub const ZOOM_DEFAULT: f32 = 1.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GalleryAction {
    SetFilter(CategoryFilter),
    Open(u32),
    Close,
    Next,
    Previous,
    GoTo(usize),
    ZoomIn,
    ZoomOut,
    ResetZoom,
}

impl GalleryAction {
    /// Keyboard bindings while the viewer is open.
    pub fn from_key(key: &str) -> Option<GalleryAction> {
        match key {
            "Escape" => Some(GalleryAction::Close),
            "ArrowLeft" => Some(GalleryAction::Previous),
            "ArrowRight" => Some(GalleryAction::Next),
            _ => None,
        }
    }
}

/// Side effect the view layer owes the page after an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GalleryEffect {
    None,
    LockScroll,
    UnlockScroll,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GalleryState {
    catalog: &'static [ProjectEntry],
    filter: CategoryFilter,
    selected: Option<u32>,
    image_index: usize,
    zoom: f32,
}

impl GalleryState {
    pub fn new() -> Self {
        Self::with_catalog(PORTFOLIO_CATALOG)
    }

    pub fn with_catalog(catalog: &'static [ProjectEntry]) -> Self {
        Self {
            catalog,
            filter: CategoryFilter::All,
            selected: None,
            image_index: 0,
            zoom: ZOOM_DEFAULT,
        }
    }

    pub fn filter(&self) -> CategoryFilter {
        self.filter
    }

    pub fn image_index(&self) -> usize {
        self.image_index
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn selected(&self) -> Option<&'static ProjectEntry> {
        let id = self.selected?;
        self.catalog.iter().find(|entry| entry.id == id)
    }

    pub fn visible(&self) -> Vec<&'static ProjectEntry> {
        self.catalog
            .iter()
            .filter(|entry| self.filter.matches(entry.category))
            .collect()
    }

    pub fn current_image(&self) -> Option<&'static str> {
        self.selected()
            .and_then(|project| project.images.get(self.image_index).copied())
    }

    pub fn apply(&mut self, action: GalleryAction) -> GalleryEffect {
        match action {
            GalleryAction::SetFilter(filter) => {
                self.filter = filter;
                GalleryEffect::None
            }
            GalleryAction::Open(id) => {
                let known = self.catalog.iter().any(|entry| entry.id == id);
                if !known {
                    return GalleryEffect::None;
                }
                let was_open = self.is_open();
                self.selected = Some(id);
                self.reset_view();
                if was_open {
                    GalleryEffect::None
                } else {
                    GalleryEffect::LockScroll
                }
            }
            GalleryAction::Close => {
                let was_open = self.is_open();
                self.selected = None;
                self.reset_view();
                if was_open {
                    GalleryEffect::UnlockScroll
                } else {
                    GalleryEffect::None
                }
            }
            GalleryAction::Next => {
                if let Some(count) = self.image_count() {
                    self.image_index = (self.image_index + 1) % count;
                    self.zoom = ZOOM_DEFAULT;
                }
                GalleryEffect::None
            }
            GalleryAction::Previous => {
                if let Some(count) = self.image_count() {
                    self.image_index = (self.image_index + count - 1) % count;
                    self.zoom = ZOOM_DEFAULT;
                }
                GalleryEffect::None
            }
            GalleryAction::GoTo(index) => {
                if let Some(count) = self.image_count() {
                    if index < count {
                        self.image_index = index;
                        self.zoom = ZOOM_DEFAULT;
                    }
                }
                GalleryEffect::None
            }
            GalleryAction::ZoomIn => {
                if self.is_open() {
                    self.zoom = (self.zoom + ZOOM_STEP).min(ZOOM_MAX);
                }
                GalleryEffect::None
            }
            GalleryAction::ZoomOut => {
                if self.is_open() {
                    self.zoom = (self.zoom - ZOOM_STEP).max(ZOOM_MIN);
                }
                GalleryEffect::None
            }
            GalleryAction::ResetZoom => {
                self.zoom = ZOOM_DEFAULT;
                GalleryEffect::None
            }
        }
    }

    fn image_count(&self) -> Option<usize> {
        self.selected()
            .map(|project| project.images.len())
            .filter(|count| *count > 0)
    }

    fn reset_view(&mut self) {
        self.image_index = 0;
        self.zoom = ZOOM_DEFAULT;
    }
}

impl Default for GalleryState {
    fn default() -> Self {
        Self::new()
    }
}

