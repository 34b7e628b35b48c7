use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct IconLinkProps {
    pub icon: Element,
    pub href: String,
    #[props(default)]
    pub title: Option<String>,
    #[props(default)]
    pub aria_label: Option<String>,
    #[props(default)]
    pub icon_class: String,
    #[props(default)]
    pub class: String,
    /// When set, opens in a new tab with rel="noopener noreferrer".
    #[props(default)]
    pub new_tab: bool,
}

#[component]
pub fn IconLink(props: IconLinkProps) -> Element {
    rsx! {
        a {
            class: "icon-link {props.class}",
            href: "{props.href}",
            target: if props.new_tab { "_blank" },
            rel: if props.new_tab { "noopener noreferrer" },
            aria_label: props.aria_label.as_deref(),
            span { class: "{props.icon_class}", {props.icon} }
            {props.title.as_ref().map(|title| rsx! { span { "{title}" } })}
        }
    }
}
