#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BlogPost {
    FutureAiWebDevelopment2025,
    EcommerceSeoGuide,
    ScalableSaasApplications,
    UiUxDesignTrends2025,
    ImplementingAiChatbots,
    MobileFirstDesign,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlogPostInfo {
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub published: &'static str,
    pub read_minutes: u8,
}

impl BlogPost {
    /// Newest first, the order the blog index lists them.
    pub const ALL: [BlogPost; 6] = [
        BlogPost::FutureAiWebDevelopment2025,
        BlogPost::EcommerceSeoGuide,
        BlogPost::ScalableSaasApplications,
        BlogPost::UiUxDesignTrends2025,
        BlogPost::ImplementingAiChatbots,
        BlogPost::MobileFirstDesign,
    ];

    pub fn info(self) -> BlogPostInfo {
        match self {
            BlogPost::FutureAiWebDevelopment2025 => BlogPostInfo {
                slug: "future-ai-web-development-2025",
                title: "The Future of AI in Web Development: Trends to Watch in 2025",
                description: "Discover how artificial intelligence is revolutionizing web development and what trends will shape the industry in 2025.",
                category: "AI & Technology",
                published: "2025-01-15",
                read_minutes: 8,
            },
            BlogPost::EcommerceSeoGuide => BlogPostInfo {
                slug: "ecommerce-seo-guide",
                title: "Complete Guide to E-commerce SEO: Boost Your Online Store Rankings",
                description: "Learn proven strategies to improve your e-commerce website search engine rankings and drive more organic traffic to your online store.",
                category: "SEO",
                published: "2025-01-10",
                read_minutes: 12,
            },
            BlogPost::ScalableSaasApplications => BlogPostInfo {
                slug: "scalable-saas-applications",
                title: "Building Scalable SaaS Applications: Best Practices and Architecture",
                description: "Essential guidelines for developing robust, scalable SaaS applications that can grow with your business.",
                category: "Development",
                published: "2025-01-05",
                read_minutes: 10,
            },
            BlogPost::UiUxDesignTrends2025 => BlogPostInfo {
                slug: "ui-ux-design-trends-2025",
                title: "UI/UX Design Trends That Will Dominate 2025",
                description: "Explore the latest design trends and how to implement them in your next project for maximum user engagement and conversion.",
                category: "Design",
                published: "2024-12-28",
                read_minutes: 7,
            },
            BlogPost::ImplementingAiChatbots => BlogPostInfo {
                slug: "implementing-ai-chatbots",
                title: "Implementing AI Chatbots: A Step-by-Step Business Guide",
                description: "Everything you need to know about implementing AI chatbots to improve customer service and reduce operational costs.",
                category: "AI & Technology",
                published: "2024-12-20",
                read_minutes: 9,
            },
            BlogPost::MobileFirstDesign => BlogPostInfo {
                slug: "mobile-first-design",
                title: "Mobile-First Design: Why It's Critical for Modern Websites",
                description: "Understanding the importance of mobile-first design and how to implement it effectively for better user experience and search rankings.",
                category: "Design",
                published: "2024-12-15",
                read_minutes: 6,
            },
        }
    }

    pub fn slug(self) -> &'static str {
        self.info().slug
    }

    pub fn from_slug(slug: &str) -> Option<BlogPost> {
        BlogPost::ALL.into_iter().find(|post| post.slug() == slug)
    }
}
