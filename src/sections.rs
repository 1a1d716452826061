//! Site chrome (header, footer, scroll progress) and the home page sections.

use std::rc::Rc;

use gloo::timers::callback::Interval;
use yew::prelude::*;

use crate::lazy_image::LazyImage;
use crate::perf_hooks::{use_debounced_resize, use_throttled_scroll, use_visibility_change};
use crate::yew_app::use_nav;
use samcreative_core::timing::scroll_progress;
use samcreative_core::{Page, ABOUT_IMAGE, HERO_IMAGE};

const TESTIMONIAL_ROTATE_MS: u32 = 6_000;

const PRIMARY_NAV: [(Page, &str); 5] = [
    (Page::Home, "Home"),
    (Page::Portfolio, "Portfolio"),
    (Page::Blog, "Blog"),
    (Page::Faq, "FAQ"),
    (Page::Contact, "Contact"),
];

#[derive(Properties, PartialEq)]
pub(crate) struct NavLinkProps {
    pub to: Page,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub on_follow: Option<Callback<()>>,
    #[prop_or_default]
    pub children: Children,
}

/// Anchor with a real `href` that navigates in-app on plain clicks.
#[function_component(NavLink)]
pub(crate) fn nav_link(props: &NavLinkProps) -> Html {
    let nav = use_nav();
    let to = props.to;
    let onclick = {
        let navigate = nav.navigate.clone();
        let on_follow = props.on_follow.clone();
        Callback::from(move |event: MouseEvent| {
            if event.ctrl_key() || event.meta_key() || event.shift_key() || event.button() != 0 {
                return;
            }
            event.prevent_default();
            if let Some(on_follow) = &on_follow {
                on_follow.emit(());
            }
            navigate.emit(to);
        })
    };
    let class = classes!(props.class.clone(), (nav.current == to).then_some("is-active"));
    html! {
        <a href={to.path()} {class} {onclick}>
            { for props.children.iter() }
        </a>
    }
}

#[function_component(ScrollProgress)]
pub(crate) fn scroll_progress_bar() -> Html {
    let progress = use_state(|| 0.0_f64);
    let on_scroll = {
        let progress = progress.clone();
        use_callback((), move |_: (), _| {
            if let Some(percent) = read_scroll_progress() {
                progress.set(percent);
            }
        })
    };
    use_throttled_scroll(on_scroll);
    html! {
        <div class="scroll-progress" role="presentation">
            <div class="scroll-progress__bar" style={format!("width: {:.2}%;", *progress)}></div>
        </div>
    }
}

fn read_scroll_progress() -> Option<f64> {
    let window = web_sys::window()?;
    let scroll_y = window.scroll_y().ok()?;
    let viewport = window.inner_height().ok()?.as_f64()?;
    let document_height = window.document()?.document_element()?.scroll_height();
    Some(scroll_progress(scroll_y, f64::from(document_height), viewport))
}

#[function_component(Header)]
pub(crate) fn header() -> Html {
    let menu_open = use_state(|| false);
    let close_menu = {
        let menu_open = menu_open.clone();
        use_callback((), move |_: (), _| menu_open.set(false))
    };
    use_debounced_resize(close_menu.clone());

    let toggle = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };
    let links = PRIMARY_NAV.iter().map(|(page, label)| {
        html! {
            <NavLink key={page.id()} to={*page} class="site-header__link" on_follow={close_menu.clone()}>
                { *label }
            </NavLink>
        }
    });

    html! {
        <header class="site-header">
            <div class="container site-header__inner">
                <NavLink to={Page::Home} class="site-header__brand">
                    <img src="/logo.png" alt="SAM CREATIVE Solutions" width="40" height="40" />
                    <span>{ "SAM " }<span class="accent">{ "CREATIVE" }</span></span>
                </NavLink>
                <button
                    class="site-header__toggle"
                    aria-label="Toggle navigation"
                    aria-expanded={(*menu_open).to_string()}
                    onclick={toggle}
                >
                    <span></span><span></span><span></span>
                </button>
                <nav class={classes!("site-header__nav", menu_open.then_some("is-open"))}>
                    { for links }
                </nav>
            </div>
        </header>
    }
}

#[function_component(Footer)]
pub(crate) fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="container site-footer__grid">
                <div>
                    <h3>{ "SAM " }<span class="accent">{ "CREATIVE" }</span></h3>
                    <p>{ "Premium web development, AI solutions and luxury design for ambitious brands." }</p>
                </div>
                <nav class="site-footer__links">
                    <NavLink to={Page::Portfolio}>{ "Portfolio" }</NavLink>
                    <NavLink to={Page::Blog}>{ "Blog" }</NavLink>
                    <NavLink to={Page::Faq}>{ "FAQ" }</NavLink>
                    <NavLink to={Page::Contact}>{ "Contact" }</NavLink>
                </nav>
                <nav class="site-footer__legal">
                    <NavLink to={Page::Privacy}>{ "Privacy Policy" }</NavLink>
                    <NavLink to={Page::Terms}>{ "Terms of Service" }</NavLink>
                </nav>
            </div>
            <p class="site-footer__copyright">
                { "\u{00a9} 2025 SAM CREATIVE Solutions. All rights reserved." }
            </p>
        </footer>
    }
}

#[function_component(Hero)]
pub(crate) fn hero() -> Html {
    html! {
        <section id="home" class="hero">
            <LazyImage
                image={HERO_IMAGE}
                alt="Creative team collaborating"
                class="hero__backdrop"
            />
            <div class="container hero__content">
                <span class="badge badge--gold">{ "Premium Digital Agency" }</span>
                <h1>
                    { "Transform Your Vision Into " }
                    <span class="accent">{ "Digital Excellence" }</span>
                </h1>
                <p>
                    { "We craft luxury websites, intelligent AI solutions and brand experiences that set ambitious businesses apart." }
                </p>
                <div class="hero__actions">
                    <NavLink to={Page::Contact} class="btn btn--gold">{ "Start Your Project" }</NavLink>
                    <NavLink to={Page::Portfolio} class="btn btn--outline">{ "View Our Work" }</NavLink>
                </div>
            </div>
        </section>
    }
}

struct Feature {
    title: &'static str,
    body: &'static str,
}

const SERVICES: [Feature; 6] = [
    Feature {
        title: "Web Development",
        body: "Fast, responsive sites built on modern stacks and tuned for conversion.",
    },
    Feature {
        title: "E-commerce Solutions",
        body: "Storefronts with seamless checkout, inventory sync and analytics.",
    },
    Feature {
        title: "SaaS Platforms",
        body: "Multi-tenant products designed to scale from first user to enterprise.",
    },
    Feature {
        title: "UI/UX Design",
        body: "Research-led interfaces with a premium visual language.",
    },
    Feature {
        title: "Brand Identity",
        body: "Logos, typography and guidelines that make a brand unmistakable.",
    },
    Feature {
        title: "Maintenance & Support",
        body: "Monitoring, updates and performance care after launch.",
    },
];

const AI_SERVICES: [Feature; 4] = [
    Feature {
        title: "AI Chatbots",
        body: "Conversational assistants trained on your content and connected to your tools.",
    },
    Feature {
        title: "Process Automation",
        body: "Workflows that remove repetitive work from sales, support and operations.",
    },
    Feature {
        title: "Predictive Analytics",
        body: "Models that turn historical data into forecasts you can act on.",
    },
    Feature {
        title: "Content Generation",
        body: "On-brand copy and imagery pipelines with human review built in.",
    },
];

const SEO_PILLARS: [Feature; 3] = [
    Feature {
        title: "Technical SEO",
        body: "Core Web Vitals, structured data and crawlable architecture.",
    },
    Feature {
        title: "Content Strategy",
        body: "Keyword research and editorial plans aligned with search intent.",
    },
    Feature {
        title: "Local & E-commerce SEO",
        body: "Product and location pages that rank where your customers search.",
    },
];

fn feature_cards(features: &'static [Feature]) -> Html {
    features
        .iter()
        .map(|feature| {
            html! {
                <article key={feature.title} class="feature-card">
                    <h3>{ feature.title }</h3>
                    <p>{ feature.body }</p>
                </article>
            }
        })
        .collect()
}

#[function_component(Services)]
pub(crate) fn services() -> Html {
    html! {
        <section id="services" class="services">
            <div class="container">
                <div class="section-heading">
                    <h2>{ "Our " }<span class="accent">{ "Services" }</span></h2>
                    <p>{ "End-to-end digital craftsmanship for brands that expect more." }</p>
                </div>
                <div class="feature-grid">{ feature_cards(&SERVICES) }</div>
            </div>
        </section>
    }
}

#[function_component(AiServices)]
pub(crate) fn ai_services() -> Html {
    html! {
        <section id="ai-services" class="ai-services">
            <div class="container">
                <div class="section-heading">
                    <h2>{ "AI " }<span class="accent">{ "Solutions" }</span></h2>
                    <p>{ "Practical artificial intelligence that pays for itself." }</p>
                </div>
                <div class="feature-grid feature-grid--four">{ feature_cards(&AI_SERVICES) }</div>
            </div>
        </section>
    }
}

#[function_component(SeoSection)]
pub(crate) fn seo_section() -> Html {
    html! {
        <section id="seo" class="seo">
            <div class="container">
                <div class="section-heading">
                    <h2>{ "Search " }<span class="accent">{ "Visibility" }</span></h2>
                    <p>{ "Be found by the customers already looking for you." }</p>
                </div>
                <div class="feature-grid feature-grid--three">{ feature_cards(&SEO_PILLARS) }</div>
            </div>
        </section>
    }
}

#[function_component(About)]
pub(crate) fn about() -> Html {
    html! {
        <section id="about" class="about">
            <div class="container about__grid">
                <LazyImage
                    image={ABOUT_IMAGE}
                    alt="SAM CREATIVE team at work"
                    class="about__image"
                />
                <div class="about__copy">
                    <h2>{ "About " }<span class="accent">{ "SAM CREATIVE" }</span></h2>
                    <p>
                        { "We are a boutique studio of engineers and designers who believe premium brands deserve premium software." }
                    </p>
                    <p>
                        { "From the first sketch to long after launch, one team owns the craft, the code and the results." }
                    </p>
                    <NavLink to={Page::Contact} class="btn btn--gold">{ "Work With Us" }</NavLink>
                </div>
            </div>
        </section>
    }
}

const STATS: [(&str, &str); 4] = [
    ("150+", "Projects Delivered"),
    ("98%", "Client Satisfaction"),
    ("12", "Countries Served"),
    ("24/7", "Support Coverage"),
];

#[function_component(Stats)]
pub(crate) fn stats() -> Html {
    html! {
        <section id="stats" class="stats">
            <div class="container stats__grid">
                { for STATS.iter().map(|(value, label)| html! {
                    <div key={*label} class="stats__item">
                        <span class="stats__value">{ *value }</span>
                        <span class="stats__label">{ *label }</span>
                    </div>
                }) }
            </div>
        </section>
    }
}

struct Testimonial {
    quote: &'static str,
    author: &'static str,
    role: &'static str,
}

const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "They rebuilt our store in six weeks and online revenue doubled the following quarter.",
        author: "Elena Marsh",
        role: "Founder, Maison Verre",
    },
    Testimonial {
        quote: "The AI assistant they shipped now resolves most of our support tickets before a human sees them.",
        author: "David Okafor",
        role: "COO, Brightline Logistics",
    },
    Testimonial {
        quote: "Meticulous design, honest timelines and a team that actually answers the phone.",
        author: "Priya Raman",
        role: "Marketing Director, Aurum Health",
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
enum RotationAction {
    Advance,
    Select(usize),
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
struct Rotation {
    index: usize,
}

impl Reducible for Rotation {
    type Action = RotationAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let index = match action {
            RotationAction::Advance => (self.index + 1) % TESTIMONIALS.len(),
            RotationAction::Select(index) if index < TESTIMONIALS.len() => index,
            RotationAction::Select(_) => return self,
        };
        Rc::new(Rotation { index })
    }
}

/// Auto-rotating quotes; rotation pauses while the tab is hidden.
#[function_component(Testimonials)]
pub(crate) fn testimonials() -> Html {
    let rotation = use_reducer(Rotation::default);
    let playing = use_state(|| true);

    let on_visibility = {
        let playing = playing.clone();
        use_callback((), move |visible: bool, _| playing.set(visible))
    };
    use_visibility_change(on_visibility);

    {
        let dispatcher = rotation.dispatcher();
        use_effect_with(*playing, move |playing| {
            let interval = playing.then(|| {
                Interval::new(TESTIMONIAL_ROTATE_MS, move || {
                    dispatcher.dispatch(RotationAction::Advance)
                })
            });
            move || drop(interval)
        });
    }

    let current = &TESTIMONIALS[rotation.index];
    let dots = (0..TESTIMONIALS.len()).map(|i| {
        let dispatcher = rotation.dispatcher();
        html! {
            <button
                key={i}
                class={classes!("testimonials__dot", (i == rotation.index).then_some("is-active"))}
                aria-label={format!("Show testimonial {}", i + 1)}
                onclick={move |_: MouseEvent| dispatcher.dispatch(RotationAction::Select(i))}
            />
        }
    });

    html! {
        <section id="testimonials" class="testimonials">
            <div class="container">
                <div class="section-heading">
                    <h2>{ "Client " }<span class="accent">{ "Stories" }</span></h2>
                </div>
                <blockquote class="testimonials__quote">
                    <p>{ current.quote }</p>
                    <footer>
                        <strong>{ current.author }</strong>
                        <span>{ current.role }</span>
                    </footer>
                </blockquote>
                <div class="testimonials__dots">{ for dots }</div>
            </div>
        </section>
    }
}
