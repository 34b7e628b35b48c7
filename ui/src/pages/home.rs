use dioxus::prelude::*;

use crate::components::icons::{DownloadIcon, GithubIcon, LinkedinIcon};
use crate::components::{Button, ButtonVariant, CopyFieldButton, IconLink, NavCard};
use crate::content::{nav_cards, PROFILE};

#[component]
pub fn Home() -> Element {
    rsx! {
        section {
            class: "content-center",

            header {
                class: "page-header",
                h1 { "{PROFILE.name}" }
                p { class: "tagline", "{PROFILE.tagline}" }
            }

            // Main Content
            div {
                class: "resume-download",
                Button {
                    variant: ButtonVariant::Primary,
                    icon: rsx! { DownloadIcon {} },
                    title: PROFILE.resume_label.to_string(),
                }
            }

            // Navigation
            nav {
                class: "nav-grid",
                for card in nav_cards() {
                    NavCard {
                        key: "{card.title}",
                        icon: (card.icon)(),
                        title: card.title.to_string(),
                        description: card.description.to_string(),
                        to: card.route.clone(),
                    }
                }
            }

            // Footer
            footer {
                class: "page-footer",
                CopyFieldButton { value: PROFILE.email.to_string() }

                div {
                    class: "social-links",
                    IconLink {
                        icon: rsx! { GithubIcon { class: "icon icon-lg" } },
                        href: PROFILE.github.url.to_string(),
                        new_tab: true,
                        aria_label: PROFILE.github.aria_label.to_string(),
                    }
                    IconLink {
                        icon: rsx! { LinkedinIcon { class: "icon icon-lg" } },
                        href: PROFILE.linkedin.url.to_string(),
                        new_tab: true,
                        aria_label: PROFILE.linkedin.aria_label.to_string(),
                    }
                }
            }
        }
    }
}
