pub mod blog;
pub mod catalog;
pub mod contact;
pub mod gallery;
pub mod image_url;
pub mod lazy;
pub mod route;
pub mod section;
pub mod site;
pub mod timing;

pub use blog::{BlogPost, BlogPostInfo};
pub use catalog::{
    category_counts, filter_projects, project_by_id, Category, CategoryFilter, DisplayKind,
    ProjectEntry, PORTFOLIO_CATALOG,
};
pub use contact::{ContactDraft, ContactError, ContactField, CONTACT_EMAIL};
pub use gallery::{GalleryAction, GalleryEffect, GalleryState, ZOOM_DEFAULT, ZOOM_MAX, ZOOM_MIN};
pub use image_url::{optimize_image_url, responsive_sizes, SizedImage, DEFAULT_QUALITY};
pub use lazy::{
    effective_quality, ConnectionHint, ImageLoadState, ObserverOptions, RetryPolicy, SectionLoad,
    SectionLoadError, VisibilityTrigger, IMAGE_OBSERVER, SECTION_OBSERVER, SECTION_RETRY,
};
pub use route::{HeadMeta, Page, PageMeta, ParsePageError};
pub use section::{HomeSection, PageLayout, PageView, ABOUT_IMAGE, HERO_IMAGE};
pub use site::{preload_kind, PreloadKind, SiteConfig};
