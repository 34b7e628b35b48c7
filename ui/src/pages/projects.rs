use dioxus::prelude::*;

#[component]
pub fn Projects() -> Element {
    rsx! {
        section {
            class: "content-center",
            header {
                h1 { "Projects" }
            }

            div {}

            footer {}
        }
    }
}
