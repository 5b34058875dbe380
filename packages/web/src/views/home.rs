//! Public landing page: hero, services, testimonials, FAQ.

use dioxus::prelude::*;

use crate::Route;

struct Faq {
    question: &'static str,
    answer: &'static str,
}

const FAQS: [Faq; 4] = [
    Faq {
        question: "What does white-hat link building mean?",
        answer: "Every placement comes from manual outreach to real sites with real \
                 traffic. No link farms, no PBNs, no paid link schemes.",
    },
    Faq {
        question: "How do you pick target sites?",
        answer: "We qualify sites by Domain Rating, organic traffic, and topical \
                 relevance to your niche before any outreach starts.",
    },
    Faq {
        question: "How soon will I see results?",
        answer: "Most clients see movement within 8-12 weeks. Link building compounds; \
                 early months build the base the later gains stand on.",
    },
    Faq {
        question: "Can I cancel anytime?",
        answer: "Yes. Plans are month-to-month and links already delivered stay live.",
    },
];

#[component]
pub fn Home() -> Element {
    let mut open_faq = use_signal(|| Option::<usize>::None);

    rsx! {
        // Hero
        section {
            class: "hero",
            h1 { class: "hero-title", "Backlinks that move rankings." }
            p {
                class: "hero-sub",
                "Linkrise builds high-authority backlinks through manual, white-hat \
                 outreach. Real sites, real editors, real results."
            }
            div {
                class: "hero-actions",
                Link { class: "btn btn-primary", to: Route::Register {}, "Get started" }
                Link { class: "btn btn-outline", to: Route::Pricing {}, "See pricing" }
            }
        }

        // Services
        section {
            class: "section",
            h2 { class: "section-title", "What we do" }
            div {
                class: "card-grid",
                div {
                    class: "card",
                    h3 { "Link building" }
                    p { "Editorial placements on DR 30-70+ sites, earned through personalized outreach." }
                }
                div {
                    class: "card",
                    h3 { "Guest posting" }
                    p { "Long-form articles written by our team and published on niche-relevant blogs." }
                }
                div {
                    class: "card",
                    h3 { "Reporting" }
                    p { "A live dashboard of every link delivered, with DR and traffic at placement time." }
                }
            }
        }

        // Testimonials
        section {
            class: "section section-alt",
            h2 { class: "section-title", "What clients say" }
            div {
                class: "card-grid",
                blockquote {
                    class: "testimonial",
                    p { "\"Organic traffic doubled in five months. The links are on sites we'd actually read.\"" }
                    footer { "Maya K. \u{2014} SaaS founder" }
                }
                blockquote {
                    class: "testimonial",
                    p { "\"First agency that didn't make us chase them for reports.\"" }
                    footer { "Daniel R. \u{2014} Head of Growth" }
                }
            }
        }

        // FAQ
        section {
            class: "section",
            h2 { class: "section-title", "Frequently asked questions" }
            div {
                class: "faq-list",
                for (index, faq) in FAQS.iter().enumerate() {
                    div {
                        key: "{index}",
                        class: "faq-item",
                        button {
                            class: "faq-question",
                            onclick: move |_| {
                                let next = if open_faq() == Some(index) { None } else { Some(index) };
                                open_faq.set(next);
                            },
                            "{faq.question}"
                        }
                        if open_faq() == Some(index) {
                            p { class: "faq-answer", "{faq.answer}" }
                        }
                    }
                }
            }
        }
    }
}
