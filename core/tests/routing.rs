use samcreative_core::{BlogPost, HeadMeta, Page, ParsePageError};

const ORIGIN: &str = "https://samcreative-solutions.com";

#[test]
fn every_table_path_round_trips() {
    for page in Page::all() {
        let path = page.path();
        assert_eq!(Page::from_path(&path), page, "path {path}");
    }
}

#[test]
fn table_has_thirteen_routes() {
    assert_eq!(Page::all().count(), 13);
}

#[test]
fn static_paths_map_to_ids() {
    let cases = [
        ("/", "home"),
        ("/portfolio", "portfolio"),
        ("/contact", "contact"),
        ("/blog", "blog"),
        ("/privacy-policy", "privacy"),
        ("/terms-of-service", "terms"),
        ("/faq", "faq"),
        ("/blog/ecommerce-seo-guide", "ecommerce-seo-guide"),
    ];
    for (path, id) in cases {
        assert_eq!(Page::from_path(path).id(), id, "path {path}");
    }
}

#[test]
fn unknown_paths_fall_back_to_home() {
    for path in [
        "",
        "/nope",
        "/portfolio/",
        "/PORTFOLIO",
        "/blog/",
        "/blog/not-a-post",
        "/blog/mobile-first-design/extra",
        "portfolio",
    ] {
        assert_eq!(Page::from_path(path), Page::Home, "path {path:?}");
    }
}

#[test]
fn mobile_first_post_metadata() {
    let page = Page::from_path("/blog/mobile-first-design");
    assert_eq!(page, Page::Post(BlogPost::MobileFirstDesign));
    let head = HeadMeta::for_page(page, ORIGIN);
    assert_eq!(
        head.title,
        "Mobile-First Design: Why It's Critical for Modern Websites"
    );
    assert_eq!(
        head.canonical_href,
        "https://samcreative-solutions.com/blog/mobile-first-design"
    );
    assert_eq!(head.og_url(), head.canonical_href);
}

#[test]
fn portfolio_metadata_is_fixed() {
    let meta = Page::Portfolio.meta();
    assert_eq!(
        meta.title,
        "Portfolio - SAM CREATIVE Solutions | Premium Digital Projects"
    );
    assert!(meta.description.starts_with("Explore our portfolio"));
}

#[test]
fn home_canonical_uses_root_and_trims_origin_slash() {
    let head = HeadMeta::for_page(Page::Home, "https://example.test/");
    assert_eq!(head.canonical_href, "https://example.test/");
}

#[test]
fn ids_parse_back_to_pages() {
    for page in Page::all() {
        assert_eq!(page.id().parse::<Page>(), Ok(page));
    }
    assert_eq!(
        "services".parse::<Page>(),
        Err(ParsePageError("services".to_string()))
    );
}

#[test]
fn titles_are_unique() {
    let mut titles: Vec<_> = Page::all().map(|page| page.meta().title).collect();
    titles.sort();
    titles.dedup();
    assert_eq!(titles.len(), 13);
}

const ROUTE_TABLE: [(&str, &str, &str, &str); 13] = [
    (
        "/",
        "home",
        "SAM CREATIVE Solutions - Premium Digital Agency | Web Development & AI Solutions",
        "Premium digital agency specializing in web development, AI solutions, and luxury design. Transform your business with our cutting-edge technology and creative excellence.",
    ),
    (
        "/portfolio",
        "portfolio",
        "Portfolio - SAM CREATIVE Solutions | Premium Digital Projects",
        "Explore our portfolio of successful web development, AI solutions, and design projects. See how we transform businesses with cutting-edge technology.",
    ),
    (
        "/contact",
        "contact",
        "Contact Us - SAM CREATIVE Solutions | Get Free Consultation",
        "Contact SAM CREATIVE Solutions for premium web development, AI solutions, and digital services. Get your free consultation today.",
    ),
    (
        "/blog",
        "blog",
        "Blog - SAM CREATIVE Solutions | Web Development & AI Insights",
        "Stay updated with the latest trends in web development, AI technology, and digital innovation. Expert insights and industry knowledge.",
    ),
    (
        "/privacy-policy",
        "privacy",
        "Privacy Policy - SAM CREATIVE Solutions",
        "Learn how SAM CREATIVE Solutions protects your privacy and handles your personal information. Our commitment to data security and transparency.",
    ),
    (
        "/terms-of-service",
        "terms",
        "Terms of Service - SAM CREATIVE Solutions",
        "Read our terms of service and understand our policies for using SAM CREATIVE Solutions services and website.",
    ),
    (
        "/faq",
        "faq",
        "FAQ - SAM CREATIVE Solutions | Frequently Asked Questions",
        "Find answers to common questions about our web development, AI solutions, and digital services. Get the information you need.",
    ),
    (
        "/blog/future-ai-web-development-2025",
        "future-ai-web-development-2025",
        "The Future of AI in Web Development: Trends to Watch in 2025",
        "Discover how artificial intelligence is revolutionizing web development and what trends will shape the industry in 2025.",
    ),
    (
        "/blog/ecommerce-seo-guide",
        "ecommerce-seo-guide",
        "Complete Guide to E-commerce SEO: Boost Your Online Store Rankings",
        "Learn proven strategies to improve your e-commerce website search engine rankings and drive more organic traffic to your online store.",
    ),
    (
        "/blog/scalable-saas-applications",
        "scalable-saas-applications",
        "Building Scalable SaaS Applications: Best Practices and Architecture",
        "Essential guidelines for developing robust, scalable SaaS applications that can grow with your business.",
    ),
    (
        "/blog/ui-ux-design-trends-2025",
        "ui-ux-design-trends-2025",
        "UI/UX Design Trends That Will Dominate 2025",
        "Explore the latest design trends and how to implement them in your next project for maximum user engagement and conversion.",
    ),
    (
        "/blog/implementing-ai-chatbots",
        "implementing-ai-chatbots",
        "Implementing AI Chatbots: A Step-by-Step Business Guide",
        "Everything you need to know about implementing AI chatbots to improve customer service and reduce operational costs.",
    ),
    (
        "/blog/mobile-first-design",
        "mobile-first-design",
        "Mobile-First Design: Why It's Critical for Modern Websites",
        "Understanding the importance of mobile-first design and how to implement it effectively for better user experience and search rankings.",
    ),
];

#[test]
fn route_table_sets_exact_head_metadata() {
    for (path, id, title, description) in ROUTE_TABLE {
        let page = Page::from_path(path);
        assert_eq!(page.id(), id, "path {path}");
        assert_eq!(page.path(), path, "id {id}");
        let head = HeadMeta::for_page(page, ORIGIN);
        assert_eq!(head.title, title, "title for {path}");
        assert_eq!(head.description, description, "description for {path}");
        assert_eq!(head.canonical_href, format!("{ORIGIN}{path}"), "canonical for {path}");
    }
}

#[test]
fn blog_info_matches_head_metadata() {
    for post in BlogPost::ALL {
        let info = post.info();
        let meta = Page::Post(post).meta();
        assert_eq!(info.title, meta.title, "post {}", info.slug);
        assert_eq!(info.description, meta.description, "post {}", info.slug);
    }
}
