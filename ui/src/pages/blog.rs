use dioxus::prelude::*;

#[component]
pub fn Blog() -> Element {
    rsx! {
        section {
            class: "content-center",
            header {
                h1 { "Blog" }
            }

            div {}

            footer {}
        }
    }
}
