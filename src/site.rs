use dioxus::prelude::*;

use crate::content::{
    Credential, ABOUT, CERTIFICATIONS, CONTACT_METHODS, EDUCATION, NAME, NAV_ITEMS, ROLES,
    SKILL_CATEGORIES, STATS, TAGLINE,
};

const MAIN_CSS: Asset = asset!("/assets/main.css");
const FONT_AWESOME_URL: &str =
    "https://cdn.jsdelivr.net/npm/@fortawesome/fontawesome-free@6.5.2/css/all.min.css";

#[component]
pub fn App() -> Element {
    #[cfg(target_arch = "wasm32")]
    let mut installed = use_signal(|| None::<crate::web::Installed>);
    #[cfg(not(target_arch = "wasm32"))]
    let _installed = ();

    #[cfg(target_arch = "wasm32")]
    use_effect(move || {
        if installed.peek().is_some() {
            return;
        }
        match crate::web::install() {
            Ok(handle) => {
                tracing::debug!("fx: effects installed");
                installed.set(Some(handle));
            }
            Err(err) => tracing::warn!("fx: install failed: {err}"),
        }
    });

    rsx! {
        document::Title { "{NAME} | Data Scientist" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: FONT_AWESOME_URL }
        NavBar {}
        main {
            Hero {}
            Stats {}
            About {}
            Skills {}
            Experience {}
            Education {}
            Contact {}
        }
        footer { class: "footer",
            p { "© {NAME}" }
        }
    }
}

#[component]
fn NavBar() -> Element {
    rsx! {
        nav { id: "main-nav", class: "nav",
            div { class: "nav-container",
                a { class: "nav-logo", href: "#home", "TP" }
                button { id: "navToggle", class: "nav-toggle", aria_label: "Toggle menu",
                    span {}
                    span {}
                    span {}
                }
                ul { id: "navMenu", class: "nav-menu",
                    for item in NAV_ITEMS.iter() {
                        li { key: "{item.id}",
                            a { class: "nav-link", href: "#{item.id}", "{item.label}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Hero() -> Element {
    rsx! {
        section { id: "home", class: "hero",
            div { class: "hero-background",
                div { class: "gradient-orb orb-1" }
                div { class: "gradient-orb orb-2" }
                div { class: "gradient-orb orb-3" }
            }
            div { class: "hero-content",
                h1 { class: "hero-title", "{NAME}" }
                p { class: "hero-subtitle", "{TAGLINE}" }
                a { class: "hero-cta", href: "#contact", "Get in touch" }
            }
        }
    }
}

#[component]
fn Stats() -> Element {
    rsx! {
        section { class: "stats-section",
            div { class: "stats-grid",
                for stat in STATS.iter() {
                    div { key: "{stat.label}", class: "stat-item",
                        div { class: "stat-value",
                            span { class: "stat-number", "data-target": "{stat.target}", "0" }
                            span { class: "stat-suffix", "{stat.suffix}" }
                        }
                        p { class: "stat-label", "{stat.label}" }
                    }
                }
            }
        }
    }
}

#[component]
fn About() -> Element {
    rsx! {
        section { id: "about", class: "section about",
            h2 { class: "section-title", "About" }
            div { class: "about-grid",
                div { class: "about-text",
                    for paragraph in ABOUT.iter() {
                        p { "{paragraph}" }
                    }
                }
                div { class: "about-image",
                    i { class: "fas fa-chart-pie" }
                }
            }
        }
    }
}

#[component]
fn Skills() -> Element {
    rsx! {
        section { id: "skills", class: "section skills",
            h2 { class: "section-title", "Skills" }
            div { class: "skills-grid",
                for category in SKILL_CATEGORIES.iter() {
                    div { key: "{category.title}", class: "skill-category",
                        h3 {
                            i { class: "{category.icon}" }
                            " {category.title}"
                        }
                        for skill in category.skills.iter() {
                            div { key: "{skill.name}", class: "skill-bar",
                                div { class: "skill-info",
                                    span { "{skill.name}" }
                                    span { "{skill.level}%" }
                                }
                                div { class: "skill-track",
                                    div { class: "skill-progress", "data-progress": "{skill.level}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Experience() -> Element {
    rsx! {
        section { id: "experience", class: "section experience",
            h2 { class: "section-title", "Experience" }
            div { class: "timeline",
                for role in ROLES.iter() {
                    div { key: "{role.period}", class: "timeline-item",
                        span { class: "timeline-period", "{role.period}" }
                        h3 { "{role.title}" }
                        p { class: "timeline-org", "{role.organization}" }
                        p { "{role.summary}" }
                    }
                }
            }
        }
    }
}

#[component]
fn Education() -> Element {
    rsx! {
        section { id: "education", class: "section education",
            h2 { class: "section-title", "Education" }
            div { class: "cards-grid",
                for credential in EDUCATION.iter() {
                    CredentialCard { key: "{credential.title}", kind: "education-card", credential: credential }
                }
            }
            h3 { class: "subsection-title", "Certifications" }
            div { class: "cards-grid",
                for credential in CERTIFICATIONS.iter() {
                    CredentialCard { key: "{credential.title}", kind: "cert-card", credential: credential }
                }
            }
        }
    }
}

#[component]
fn CredentialCard(kind: &'static str, credential: &'static Credential) -> Element {
    rsx! {
        div { class: "{kind}",
            h4 { "{credential.title}" }
            p { "{credential.issuer}" }
            span { class: "card-year", "{credential.year}" }
        }
    }
}

#[component]
fn Contact() -> Element {
    rsx! {
        section { id: "contact", class: "section contact",
            h2 { class: "section-title", "Contact" }
            div { class: "contact-grid",
                for method in CONTACT_METHODS.iter() {
                    a { key: "{method.label}", class: "contact-method", href: "{method.href}",
                        i { class: "{method.icon}" }
                        div {
                            h4 { "{method.label}" }
                            p { "{method.value}" }
                        }
                    }
                }
            }
        }
    }
}
