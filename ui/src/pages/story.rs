use dioxus::prelude::*;

#[component]
pub fn Story() -> Element {
    rsx! {
        section {
            class: "content-center",
            header {
                h1 { "Story" }
            }

            div {}

            footer {}
        }
    }
}
