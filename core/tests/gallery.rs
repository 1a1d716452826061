use samcreative_core::catalog::filter_in;
use samcreative_core::{
    filter_projects, Category, CategoryFilter, DisplayKind, GalleryAction, GalleryEffect,
    GalleryState, ProjectEntry, PORTFOLIO_CATALOG, ZOOM_MAX, ZOOM_MIN,
};

static FIXTURE: [ProjectEntry; 3] = [
    ProjectEntry {
        id: 10,
        title: "Solo",
        category: Category::Logo,
        display: DisplayKind::Single,
        year: "2024",
        description: "",
        images: &["https://images.pexels.com/photos/1/a.jpeg"],
    },
    ProjectEntry {
        id: 11,
        title: "Pair",
        category: Category::Web,
        display: DisplayKind::Slider,
        year: "2024",
        description: "",
        images: &[
            "https://images.pexels.com/photos/2/a.jpeg",
            "https://images.pexels.com/photos/2/b.jpeg",
        ],
    },
    ProjectEntry {
        id: 12,
        title: "Other web",
        category: Category::Web,
        display: DisplayKind::Single,
        year: "2023",
        description: "",
        images: &["https://images.pexels.com/photos/3/a.jpeg"],
    },
];

#[test]
fn ecommerce_filter_returns_two_in_declared_order() {
    let ids: Vec<u32> = filter_projects(CategoryFilter::Only(Category::Ecommerce))
        .iter()
        .map(|entry| entry.id)
        .collect();
    assert_eq!(ids, vec![2, 6]);
}

#[test]
fn all_filter_is_the_whole_catalog() {
    let all = filter_projects(CategoryFilter::All);
    assert_eq!(all.len(), PORTFOLIO_CATALOG.len());
    for (filtered, declared) in all.iter().zip(PORTFOLIO_CATALOG.iter()) {
        assert_eq!(*filtered, declared);
    }
}

#[test]
fn every_category_filter_matches_exactly() {
    for category in Category::ALL {
        let filtered = filter_in(&FIXTURE, CategoryFilter::Only(category));
        let expected: Vec<&ProjectEntry> =
            FIXTURE.iter().filter(|entry| entry.category == category).collect();
        assert_eq!(filtered, expected);
    }
}

#[test]
fn open_resets_view_and_locks_scroll() {
    let mut state = GalleryState::new();
    assert_eq!(state.apply(GalleryAction::Open(2)), GalleryEffect::LockScroll);
    state.apply(GalleryAction::Next);
    state.apply(GalleryAction::ZoomIn);
    assert_eq!(state.apply(GalleryAction::Open(3)), GalleryEffect::None);
    assert_eq!(state.image_index(), 0);
    assert_eq!(state.zoom(), 1.0);
    assert_eq!(state.selected().map(|entry| entry.id), Some(3));
}

#[test]
fn open_unknown_project_is_ignored() {
    let mut state = GalleryState::new();
    assert_eq!(state.apply(GalleryAction::Open(999)), GalleryEffect::None);
    assert!(!state.is_open());
}

#[test]
fn close_unlocks_only_when_open() {
    let mut state = GalleryState::new();
    assert_eq!(state.apply(GalleryAction::Close), GalleryEffect::None);
    state.apply(GalleryAction::Open(1));
    state.apply(GalleryAction::ZoomIn);
    assert_eq!(state.apply(GalleryAction::Close), GalleryEffect::UnlockScroll);
    assert!(!state.is_open());
    assert_eq!(state.zoom(), 1.0);
    assert_eq!(state.image_index(), 0);
}

#[test]
fn next_three_times_on_project_two_wraps_to_start() {
    let mut state = GalleryState::new();
    state.apply(GalleryAction::Open(2));
    for _ in 0..3 {
        state.apply(GalleryAction::Next);
    }
    assert_eq!(state.image_index(), 0);
}

#[test]
fn previous_from_first_goes_to_last() {
    let mut state = GalleryState::new();
    state.apply(GalleryAction::Open(3));
    state.apply(GalleryAction::Previous);
    assert_eq!(state.image_index(), 2);
    state.apply(GalleryAction::Next);
    assert_eq!(state.image_index(), 0);
}

#[test]
fn single_image_navigation_stays_in_bounds() {
    let mut state = GalleryState::with_catalog(&FIXTURE);
    state.apply(GalleryAction::Open(10));
    state.apply(GalleryAction::Next);
    assert_eq!(state.image_index(), 0);
    state.apply(GalleryAction::Previous);
    assert_eq!(state.image_index(), 0);
    assert!(state.current_image().is_some());
}

#[test]
fn navigation_resets_zoom() {
    let mut state = GalleryState::with_catalog(&FIXTURE);
    state.apply(GalleryAction::Open(11));
    state.apply(GalleryAction::ZoomIn);
    state.apply(GalleryAction::Next);
    assert_eq!(state.zoom(), 1.0);
    state.apply(GalleryAction::ZoomOut);
    state.apply(GalleryAction::GoTo(0));
    assert_eq!(state.zoom(), 1.0);
}

#[test]
fn go_to_out_of_range_is_ignored() {
    let mut state = GalleryState::with_catalog(&FIXTURE);
    state.apply(GalleryAction::Open(11));
    state.apply(GalleryAction::GoTo(1));
    state.apply(GalleryAction::GoTo(2));
    assert_eq!(state.image_index(), 1);
}

#[test]
fn zoom_stays_clamped() {
    let mut state = GalleryState::new();
    state.apply(GalleryAction::Open(1));
    for _ in 0..20 {
        state.apply(GalleryAction::ZoomIn);
        assert!(state.zoom() <= ZOOM_MAX);
    }
    assert_eq!(state.zoom(), 3.0);
    for _ in 0..20 {
        state.apply(GalleryAction::ZoomOut);
        assert!(state.zoom() >= ZOOM_MIN);
    }
    assert_eq!(state.zoom(), 0.5);
    state.apply(GalleryAction::ResetZoom);
    assert_eq!(state.zoom(), 1.0);
}

#[test]
fn zoom_without_open_project_is_ignored() {
    let mut state = GalleryState::new();
    state.apply(GalleryAction::ZoomIn);
    assert_eq!(state.zoom(), 1.0);
}

#[test]
fn keys_map_to_actions() {
    assert_eq!(GalleryAction::from_key("Escape"), Some(GalleryAction::Close));
    assert_eq!(GalleryAction::from_key("ArrowLeft"), Some(GalleryAction::Previous));
    assert_eq!(GalleryAction::from_key("ArrowRight"), Some(GalleryAction::Next));
    assert_eq!(GalleryAction::from_key("Enter"), None);
}

#[test]
fn filter_survives_open_and_close() {
    let mut state = GalleryState::new();
    state.apply(GalleryAction::SetFilter(CategoryFilter::Only(Category::Web)));
    state.apply(GalleryAction::Open(3));
    state.apply(GalleryAction::Close);
    assert_eq!(state.filter(), CategoryFilter::Only(Category::Web));
    let ids: Vec<u32> = state.visible().iter().map(|entry| entry.id).collect();
    assert_eq!(ids, vec![3]);
}
