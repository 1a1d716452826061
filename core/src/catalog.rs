use std::fmt;

use crate::image_url::SizedImage;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Web,
    Saas,
    Ecommerce,
    Design,
    Logo,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Web,
        Category::Saas,
        Category::Ecommerce,
        Category::Design,
        Category::Logo,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Category::Web => "web",
            Category::Saas => "saas",
            Category::Ecommerce => "ecommerce",
            Category::Design => "design",
            Category::Logo => "logo",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Web => "Web Development",
            Category::Saas => "SaaS Applications",
            Category::Ecommerce => "E-commerce",
            Category::Design => "Design & Branding",
            Category::Logo => "Logo Mockups",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Filter buttons in display order.
    pub const BUTTONS: [CategoryFilter; 6] = [
        CategoryFilter::All,
        CategoryFilter::Only(Category::Web),
        CategoryFilter::Only(Category::Saas),
        CategoryFilter::Only(Category::Ecommerce),
        CategoryFilter::Only(Category::Design),
        CategoryFilter::Only(Category::Logo),
    ];

    pub fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(only) => only == category,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "All Projects",
            CategoryFilter::Only(category) => category.label(),
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(category) => category.slug(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayKind {
    Single,
    Slider,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectEntry {
    pub id: u32,
    pub title: &'static str,
    pub category: Category,
    pub display: DisplayKind,
    pub year: &'static str,
    pub description: &'static str,
    pub images: &'static [&'static str],
}

impl ProjectEntry {
    /// Grid thumbnail; the catalog build rejects entries without images.
    pub fn cover(&self) -> &'static str {
        self.images.first().copied().unwrap_or_default()
    }

    pub fn card_image(&self) -> SizedImage {
        SizedImage::new(self.cover(), 400, 300, 85)
    }

    /// Full-size variant shown in the viewer.
    pub fn viewer_image(src: &'static str) -> SizedImage {
        SizedImage::new(src, 1200, 800, 95)
    }

    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    pub fn is_slideshow(&self) -> bool {
        self.display == DisplayKind::Slider && self.images.len() > 1
    }
}

include!(concat!(env!("OUT_DIR"), "/portfolio_catalog.rs"));

pub fn project_by_id(id: u32) -> Option<&'static ProjectEntry> {
    PORTFOLIO_CATALOG.iter().find(|entry| entry.id == id)
}

pub fn filter_projects(filter: CategoryFilter) -> Vec<&'static ProjectEntry> {
    filter_in(PORTFOLIO_CATALOG, filter)
}

pub fn filter_in(catalog: &[ProjectEntry], filter: CategoryFilter) -> Vec<&ProjectEntry> {
    catalog
        .iter()
        .filter(|entry| filter.matches(entry.category))
        .collect()
}

pub fn category_count(filter: CategoryFilter) -> usize {
    PORTFOLIO_CATALOG
        .iter()
        .filter(|entry| filter.matches(entry.category))
        .count()
}

pub fn category_counts() -> Vec<(CategoryFilter, usize)> {
    CategoryFilter::BUTTONS
        .iter()
        .map(|filter| (*filter, category_count(*filter)))
        .collect()
}
