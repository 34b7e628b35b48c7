use dioxus::prelude::*;

#[derive(PartialEq, Clone, Debug)]
pub enum ButtonVariant {
    Primary,
}

impl ButtonVariant {
    pub fn as_class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ButtonProps {
    pub icon: Element,
    #[props(default)]
    pub title: Option<String>,
    #[props(default = ButtonVariant::Primary)]
    pub variant: ButtonVariant,
    #[props(default)]
    pub class: String,
    #[props(default)]
    pub onclick: Option<EventHandler<MouseEvent>>,
}

#[component]
pub fn Button(props: ButtonProps) -> Element {
    let onclick = props.onclick;

    rsx! {
        button {
            class: "{props.variant.as_class()} {props.class}",
            r#type: "button",
            onclick: move |event| {
                if let Some(handler) = &onclick {
                    handler.call(event);
                }
            },
            span { {props.icon} }
            {props.title.as_ref().map(|title| rsx! { span { "{title}" } })}
        }
    }
}
