//! Route table: URL paths, logical page identifiers and head metadata.
//!
//! The table is a closed set. Lookups that miss resolve to [`Page::Home`];
//! only parsing a logical identifier can fail.

use std::fmt;
use std::str::FromStr;

use crate::blog::BlogPost;

pub const HOME_TITLE: &str =
    "SAM CREATIVE Solutions - Premium Digital Agency | Web Development & AI Solutions";
pub const HOME_DESCRIPTION: &str = "Premium digital agency specializing in web development, AI solutions, and luxury design. Transform your business with our cutting-edge technology and creative excellence.";

const BLOG_PREFIX: &str = "/blog/";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Home,
    Portfolio,
    Contact,
    Blog,
    Privacy,
    Terms,
    Faq,
    Post(BlogPost),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageMeta {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown page id '{0}'")]
pub struct ParsePageError(pub String);

impl Page {
    const STATIC: [Page; 7] = [
        Page::Home,
        Page::Portfolio,
        Page::Contact,
        Page::Blog,
        Page::Privacy,
        Page::Terms,
        Page::Faq,
    ];

    /// Every routable page, static pages first, then blog posts.
    pub fn all() -> impl Iterator<Item = Page> {
        Self::STATIC
            .into_iter()
            .chain(BlogPost::ALL.into_iter().map(Page::Post))
    }

    /// Exact-match lookup; anything outside the table is home.
    pub fn from_path(path: &str) -> Page {
        match path {
            "/" => Page::Home,
            "/portfolio" => Page::Portfolio,
            "/contact" => Page::Contact,
            "/blog" => Page::Blog,
            "/privacy-policy" => Page::Privacy,
            "/terms-of-service" => Page::Terms,
            "/faq" => Page::Faq,
            other => other
                .strip_prefix(BLOG_PREFIX)
                .and_then(BlogPost::from_slug)
                .map(Page::Post)
                .unwrap_or(Page::Home),
        }
    }

    pub fn path(self) -> String {
        match self {
            Page::Home => "/".to_string(),
            Page::Portfolio => "/portfolio".to_string(),
            Page::Contact => "/contact".to_string(),
            Page::Blog => "/blog".to_string(),
            Page::Privacy => "/privacy-policy".to_string(),
            Page::Terms => "/terms-of-service".to_string(),
            Page::Faq => "/faq".to_string(),
            Page::Post(post) => format!("{BLOG_PREFIX}{}", post.slug()),
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Portfolio => "portfolio",
            Page::Contact => "contact",
            Page::Blog => "blog",
            Page::Privacy => "privacy",
            Page::Terms => "terms",
            Page::Faq => "faq",
            Page::Post(post) => post.slug(),
        }
    }

    pub fn meta(self) -> PageMeta {
        match self {
            Page::Home => PageMeta {
                title: HOME_TITLE,
                description: HOME_DESCRIPTION,
            },
            Page::Portfolio => PageMeta {
                title: "Portfolio - SAM CREATIVE Solutions | Premium Digital Projects",
                description: "Explore our portfolio of successful web development, AI solutions, and design projects. See how we transform businesses with cutting-edge technology.",
            },
            Page::Contact => PageMeta {
                title: "Contact Us - SAM CREATIVE Solutions | Get Free Consultation",
                description: "Contact SAM CREATIVE Solutions for premium web development, AI solutions, and digital services. Get your free consultation today.",
            },
            Page::Blog => PageMeta {
                title: "Blog - SAM CREATIVE Solutions | Web Development & AI Insights",
                description: "Stay updated with the latest trends in web development, AI technology, and digital innovation. Expert insights and industry knowledge.",
            },
            Page::Privacy => PageMeta {
                title: "Privacy Policy - SAM CREATIVE Solutions",
                description: "Learn how SAM CREATIVE Solutions protects your privacy and handles your personal information. Our commitment to data security and transparency.",
            },
            Page::Terms => PageMeta {
                title: "Terms of Service - SAM CREATIVE Solutions",
                description: "Read our terms of service and understand our policies for using SAM CREATIVE Solutions services and website.",
            },
            Page::Faq => PageMeta {
                title: "FAQ - SAM CREATIVE Solutions | Frequently Asked Questions",
                description: "Find answers to common questions about our web development, AI solutions, and digital services. Get the information you need.",
            },
            Page::Post(post) => {
                let info = post.info();
                PageMeta {
                    title: info.title,
                    description: info.description,
                }
            }
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Page {
    type Err = ParsePageError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Page::all()
            .find(|page| page.id() == trimmed)
            .ok_or_else(|| ParsePageError(trimmed.to_string()))
    }
}

/// Everything the router writes into `<head>` for one page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeadMeta {
    pub title: &'static str,
    pub description: &'static str,
    pub canonical_href: String,
}

impl HeadMeta {
    pub fn for_page(page: Page, origin: &str) -> Self {
        let meta = page.meta();
        let origin = origin.trim_end_matches('/');
        Self {
            title: meta.title,
            description: meta.description,
            canonical_href: format!("{origin}{}", page.path()),
        }
    }

    /// `og:url` mirrors the canonical link.
    pub fn og_url(&self) -> &str {
        &self.canonical_href
    }
}
