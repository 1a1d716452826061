use crate::blog::BlogPost;
use crate::catalog::PORTFOLIO_CATALOG;
use crate::image_url::{SizedImage, DEFAULT_QUALITY};
use crate::route::Page;

pub const HERO_IMAGE: SizedImage = SizedImage::new(
    "https://images.pexels.com/photos/3184360/pexels-photo-3184360.jpeg",
    1920,
    1080,
    75,
);
pub const ABOUT_IMAGE: SizedImage = SizedImage::new(
    "https://images.pexels.com/photos/3184338/pexels-photo-3184338.jpeg",
    800,
    600,
    DEFAULT_QUALITY,
);

/// Home page sections in document order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HomeSection {
    Hero,
    Services,
    AiServices,
    Seo,
    About,
    Stats,
    PortfolioPreview,
    Testimonials,
}

impl HomeSection {
    pub const ORDER: [HomeSection; 8] = [
        HomeSection::Hero,
        HomeSection::Services,
        HomeSection::AiServices,
        HomeSection::Seo,
        HomeSection::About,
        HomeSection::Stats,
        HomeSection::PortfolioPreview,
        HomeSection::Testimonials,
    ];

    pub fn key(self) -> &'static str {
        match self {
            HomeSection::Hero => "hero",
            HomeSection::Services => "services",
            HomeSection::AiServices => "ai-services",
            HomeSection::Seo => "seo",
            HomeSection::About => "about",
            HomeSection::Stats => "stats",
            HomeSection::PortfolioPreview => "portfolio-preview",
            HomeSection::Testimonials => "testimonials",
        }
    }

    /// Placeholder classes sized like the rendered section.
    pub fn placeholder_class(self) -> &'static str {
        match self {
            HomeSection::Hero => "placeholder h-screen bg-gray-100",
            HomeSection::Services => "placeholder h-96 bg-gray-50",
            HomeSection::AiServices | HomeSection::Stats => "placeholder h-96 bg-gray-900",
            HomeSection::Seo
            | HomeSection::About
            | HomeSection::PortfolioPreview
            | HomeSection::Testimonials => "placeholder h-96 bg-white",
        }
    }

    /// The hero is on screen at first paint and skips the watcher.
    pub fn is_eager(self) -> bool {
        self == HomeSection::Hero
    }

    /// Images fetched before the section is instantiated, in the exact
    /// variants the section renders.
    pub fn critical_assets(self) -> Vec<SizedImage> {
        match self {
            HomeSection::Hero => vec![HERO_IMAGE],
            HomeSection::About => vec![ABOUT_IMAGE],
            HomeSection::PortfolioPreview => {
                PORTFOLIO_CATALOG.iter().map(|entry| entry.card_image()).collect()
            }
            HomeSection::Services
            | HomeSection::AiServices
            | HomeSection::Seo
            | HomeSection::Stats
            | HomeSection::Testimonials => Vec::new(),
        }
    }
}

/// Single-component pages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageView {
    Portfolio,
    Blog,
    Contact,
    Privacy,
    Terms,
    Faq,
    Post(BlogPost),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageLayout {
    Home(&'static [HomeSection]),
    Single(PageView),
}

impl PageLayout {
    pub fn for_page(page: Page) -> PageLayout {
        match page {
            Page::Home => PageLayout::Home(&HomeSection::ORDER),
            Page::Portfolio => PageLayout::Single(PageView::Portfolio),
            Page::Blog => PageLayout::Single(PageView::Blog),
            Page::Contact => PageLayout::Single(PageView::Contact),
            Page::Privacy => PageLayout::Single(PageView::Privacy),
            Page::Terms => PageLayout::Single(PageView::Terms),
            Page::Faq => PageLayout::Single(PageView::Faq),
            Page::Post(post) => PageLayout::Single(PageView::Post(post)),
        }
    }
}
