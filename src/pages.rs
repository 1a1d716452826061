//! Single-view pages: portfolio, blog index and posts, contact, legal, FAQ.

use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::portfolio_view::PortfolioGallery;
use crate::sections::NavLink;
use samcreative_core::{BlogPost, ContactDraft, ContactField, Page, CONTACT_EMAIL};

#[derive(Properties, PartialEq)]
struct PageHeaderProps {
    lead: AttrValue,
    accent: AttrValue,
    #[prop_or_default]
    intro: Option<AttrValue>,
}

#[function_component(PageHeader)]
fn page_header(props: &PageHeaderProps) -> Html {
    html! {
        <header class="page-header">
            <div class="container">
                <h1>{ props.lead.clone() }{ " " }<span class="accent">{ props.accent.clone() }</span></h1>
                if let Some(intro) = &props.intro {
                    <p>{ intro.clone() }</p>
                }
            </div>
        </header>
    }
}

#[function_component(PortfolioPage)]
pub(crate) fn portfolio_page() -> Html {
    html! {
        <div class="page page--portfolio">
            <PageHeader
                lead="Our"
                accent="Portfolio"
                intro="Websites, platforms and brands we have built for clients around the world."
            />
            <PortfolioGallery />
        </div>
    }
}

#[function_component(BlogPage)]
pub(crate) fn blog_page() -> Html {
    let cards = BlogPost::ALL.iter().map(|post| {
        let info = post.info();
        html! {
            <article key={info.slug} class="blog-card">
                <span class="badge badge--gold">{ info.category }</span>
                <h2>
                    <NavLink to={Page::Post(*post)}>{ info.title }</NavLink>
                </h2>
                <p>{ info.description }</p>
                <div class="blog-card__meta">
                    <time datetime={info.published}>{ info.published }</time>
                    <span>{ format!("{} min read", info.read_minutes) }</span>
                </div>
            </article>
        }
    });
    html! {
        <div class="page page--blog">
            <PageHeader
                lead="Insights &"
                accent="Ideas"
                intro="Notes on AI, e-commerce, SaaS and design from the SAM CREATIVE team."
            />
            <div class="container blog-grid">{ for cards }</div>
        </div>
    }
}

fn post_body(post: BlogPost) -> &'static [&'static str] {
    match post {
        BlogPost::FutureAiWebDevelopment2025 => &[
            "AI has moved from novelty to everyday tooling. Code assistants, design generators and automated testing now sit inside most professional workflows.",
            "In 2025 the gap widens between teams that treat AI as a collaborator and teams that ignore it. Personalisation, conversational interfaces and predictive UX are becoming baseline expectations.",
            "The practical path is incremental: automate the repetitive, measure the result, then expand.",
        ],
        BlogPost::EcommerceSeoGuide => &[
            "Product pages compete with marketplaces, so technical foundations matter: fast pages, structured data and clean faceted navigation.",
            "Unique descriptions, helpful category copy and genuine reviews give search engines a reason to rank you over a reseller.",
            "Track revenue from organic traffic, not just rankings, and iterate on the pages that convert.",
        ],
        BlogPost::ScalableSaasApplications => &[
            "Scalability starts with boring decisions: clear tenancy boundaries, idempotent background jobs and observable services.",
            "Design the data model for the customer you expect in two years, then ship the smallest product that serves the one you have today.",
        ],
        BlogPost::UiUxDesignTrends2025 => &[
            "Expect restrained motion, bold typography and interfaces that adapt to context rather than demanding attention.",
            "Accessibility is no longer a checklist item; it is a design constraint that improves every user's experience.",
        ],
        BlogPost::ImplementingAiChatbots => &[
            "A useful chatbot answers from your own content, hands off to humans gracefully and is honest about what it does not know.",
            "Start with the ten questions your support team answers most often and measure resolution rate before adding features.",
        ],
        BlogPost::MobileFirstDesign => &[
            "Most visits now start on a phone. Designing for the smallest screen first forces clarity about what truly matters.",
            "Search engines index the mobile version of your site, so a weak mobile experience costs visibility as well as conversions.",
        ],
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct BlogPostPageProps {
    pub post: BlogPost,
}

#[function_component(BlogPostPage)]
pub(crate) fn blog_post_page(props: &BlogPostPageProps) -> Html {
    let info = props.post.info();
    html! {
        <article class="page page--post">
            <header class="page-header">
                <div class="container">
                    <NavLink to={Page::Blog} class="page-header__back">{ "\u{2190} Back to Blog" }</NavLink>
                    <span class="badge badge--gold">{ info.category }</span>
                    <h1>{ info.title }</h1>
                    <p>{ info.description }</p>
                    <div class="blog-card__meta">
                        <time datetime={info.published}>{ info.published }</time>
                        <span>{ format!("{} min read", info.read_minutes) }</span>
                    </div>
                </div>
            </header>
            <div class="container post-body">
                { for post_body(props.post).iter().map(|paragraph| html! { <p>{ *paragraph }</p> }) }
                <NavLink to={Page::Contact} class="btn btn--gold">{ "Discuss Your Project" }</NavLink>
            </div>
        </article>
    }
}

#[derive(Clone, Debug, PartialEq)]
enum ContactStatus {
    Editing,
    Invalid(String),
    Sent,
}

#[function_component(ContactPage)]
pub(crate) fn contact_page() -> Html {
    let draft = use_state(ContactDraft::default);
    let status = use_state(|| ContactStatus::Editing);

    let update = |field: ContactField| {
        let draft = draft.clone();
        Callback::from(move |value: String| {
            let mut next = (*draft).clone();
            next.set(field, value);
            draft.set(next);
        })
    };
    let on_name = update(ContactField::Name).reform(|event: InputEvent| {
        event.target_unchecked_into::<HtmlInputElement>().value()
    });
    let on_email = update(ContactField::Email).reform(|event: InputEvent| {
        event.target_unchecked_into::<HtmlInputElement>().value()
    });
    let on_message = update(ContactField::Message).reform(|event: InputEvent| {
        event.target_unchecked_into::<HtmlTextAreaElement>().value()
    });

    let onsubmit = {
        let draft = draft.clone();
        let status = status.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            match draft.validate() {
                Ok(()) => {
                    gloo::console::log!("contact request captured", draft.email.clone());
                    status.set(ContactStatus::Sent);
                }
                Err(err) => status.set(ContactStatus::Invalid(err.to_string())),
            }
        })
    };

    let body = if *status == ContactStatus::Sent {
        html! {
            <div class="contact__sent" role="status">
                <h2>{ "Thank you!" }</h2>
                <p>{ "We will be in touch within one business day." }</p>
            </div>
        }
    } else {
        html! {
            <form class="contact__form" {onsubmit} novalidate={true}>
                <label>
                    { "Name" }
                    <input type="text" name="name" value={draft.name.clone()} oninput={on_name} />
                </label>
                <label>
                    { "Email" }
                    <input type="email" name="email" value={draft.email.clone()} oninput={on_email} />
                </label>
                <label>
                    { "Message" }
                    <textarea name="message" rows="6" value={draft.message.clone()} oninput={on_message} />
                </label>
                if let ContactStatus::Invalid(message) = &*status {
                    <p class="contact__error" role="alert">{ message.clone() }</p>
                }
                <button type="submit" class="btn btn--gold">{ "Send Message" }</button>
            </form>
        }
    };

    html! {
        <div class="page page--contact">
            <PageHeader
                lead="Let's"
                accent="Talk"
                intro="Tell us about your project and we will reply with next steps."
            />
            <div class="container contact__grid">
                { body }
                <aside class="contact__details">
                    <h3>{ "Email" }</h3>
                    <a href={format!("mailto:{}", CONTACT_EMAIL)}>{ CONTACT_EMAIL }</a>
                    <h3>{ "Hours" }</h3>
                    <p>{ "Monday to Friday, 9:00 to 18:00" }</p>
                </aside>
            </div>
        </div>
    }
}

struct LegalSection {
    heading: &'static str,
    body: &'static str,
}

const PRIVACY_POLICY: [LegalSection; 4] = [
    LegalSection {
        heading: "Information We Collect",
        body: "We collect the details you send through our contact form and anonymous usage statistics that help us improve the site.",
    },
    LegalSection {
        heading: "How We Use Information",
        body: "Your details are used only to respond to your enquiry and deliver services you request. We never sell personal data.",
    },
    LegalSection {
        heading: "Cookies",
        body: "The site uses essential storage for offline caching. No advertising cookies are set.",
    },
    LegalSection {
        heading: "Your Rights",
        body: "You may request access to, correction of or deletion of your personal data at any time by emailing us.",
    },
];

const TERMS_OF_SERVICE: [LegalSection; 4] = [
    LegalSection {
        heading: "Services",
        body: "Project scope, deliverables and timelines are defined in a written proposal accepted by both parties.",
    },
    LegalSection {
        heading: "Payment",
        body: "Invoices are due within 14 days. Work may pause while invoices remain outstanding.",
    },
    LegalSection {
        heading: "Intellectual Property",
        body: "Ownership of final deliverables transfers to the client on full payment. We may show completed work in our portfolio.",
    },
    LegalSection {
        heading: "Liability",
        body: "Our liability is limited to the fees paid for the affected project.",
    },
];

fn legal_page(class: &'static str, lead: &'static str, sections: &'static [LegalSection]) -> Html {
    html! {
        <div class={classes!("page", class)}>
            <PageHeader {lead} accent="" intro="Last updated January 2025." />
            <div class="container legal">
                { for sections.iter().map(|section| html! {
                    <section key={section.heading}>
                        <h2>{ section.heading }</h2>
                        <p>{ section.body }</p>
                    </section>
                }) }
            </div>
        </div>
    }
}

#[function_component(PrivacyPage)]
pub(crate) fn privacy_page() -> Html {
    legal_page("page--privacy", "Privacy Policy", &PRIVACY_POLICY)
}

#[function_component(TermsPage)]
pub(crate) fn terms_page() -> Html {
    legal_page("page--terms", "Terms of Service", &TERMS_OF_SERVICE)
}

const FAQ: [(&str, &str); 5] = [
    (
        "How long does a typical website take?",
        "Most marketing sites launch in four to six weeks. E-commerce and SaaS projects usually take eight to sixteen weeks.",
    ),
    (
        "Do you work with clients outside your country?",
        "Yes. We collaborate remotely with clients across Europe, North America and Asia.",
    ),
    (
        "Can you redesign an existing site?",
        "Absolutely. We audit what works today, keep your search rankings safe and rebuild around clear goals.",
    ),
    (
        "What does an AI integration cost?",
        "It depends on data and scope. We start with a fixed-price discovery sprint that ends in a costed plan.",
    ),
    (
        "Do you offer support after launch?",
        "Every project includes a support period, and ongoing maintenance plans are available.",
    ),
];

#[function_component(FaqPage)]
pub(crate) fn faq_page() -> Html {
    let open = use_state(|| None::<usize>);
    let items = FAQ.iter().enumerate().map(|(index, (question, answer))| {
        let expanded = *open == Some(index);
        let onclick = {
            let open = open.clone();
            Callback::from(move |_: MouseEvent| {
                open.set(if expanded { None } else { Some(index) });
            })
        };
        html! {
            <div key={index} class={classes!("faq__item", expanded.then_some("is-open"))}>
                <button class="faq__question" aria-expanded={expanded.to_string()} {onclick}>
                    { *question }
                </button>
                if expanded {
                    <p class="faq__answer">{ *answer }</p>
                }
            </div>
        }
    });
    html! {
        <div class="page page--faq faq">
            <PageHeader lead="Frequently Asked" accent="Questions" />
            <div class="container faq__list">{ for items }</div>
        </div>
    }
}
