use dioxus::prelude::*;

use crate::components::icons::DownloadIcon;
use crate::components::CopyFieldButton;
use crate::content::{nav_links, PROFILE};
use crate::pages::Route;

#[derive(Props, PartialEq, Clone)]
pub struct NavBarProps {
    /// Route whose navbar link is rendered as the current page.
    pub active: Route,
}

/// Fixed top navbar: resume download and copy-email on the left, page
/// links in the center.
#[component]
pub fn NavBar(props: NavBarProps) -> Element {
    rsx! {
        nav {
            class: "nav-bar",
            div {
                class: "nav-bar-inner",

                div {
                    class: "nav-bar-actions",
                    a {
                        class: "btn-primary",
                        href: "/resume.pdf",
                        download: "resume.pdf",
                        DownloadIcon {}
                        "{PROFILE.resume_label}"
                    }
                    div {
                        class: "nav-bar-email",
                        CopyFieldButton { value: PROFILE.email.to_string() }
                    }
                }

                div {
                    class: "nav-bar-links",
                    for link in nav_links() {
                        Link {
                            key: "{link.name}",
                            class: if link.route == props.active { "nav-bar-link current" } else { "nav-bar-link" },
                            to: link.route.clone(),
                            "{link.name}"
                        }
                    }
                }
            }
        }
    }
}
