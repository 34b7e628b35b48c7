use dioxus::prelude::*;

use crate::pages::Route;

#[derive(Props, PartialEq, Clone)]
pub struct NavCardProps {
    pub icon: Element,
    pub title: String,
    #[props(default)]
    pub description: Option<String>,
    pub to: Route,
    #[props(default)]
    pub class: String,
}

#[component]
pub fn NavCard(props: NavCardProps) -> Element {
    rsx! {
        Link {
            class: "nav-card {props.class}",
            to: props.to.clone(),

            div {
                class: "nav-card-icon",
                {props.icon}
            }

            div {
                class: "nav-card-content",
                p { class: "nav-card-title", "{props.title}" }
                {props.description.as_ref().map(|description| rsx! { p { "{description}" } })}
            }
        }
    }
}
