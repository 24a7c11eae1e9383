use dioxus::prelude::*;

/// Stylesheet variants shared with the rest of the travel-group screens.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Normal,
    Active,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Normal => "nomal-button",
            ButtonVariant::Active => "active-button",
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ButtonProps {
    #[props(optional)]
    pub class: Option<String>,
    #[props(optional)]
    pub variant: Option<ButtonVariant>,
    #[props(optional)]
    pub onclick: Option<EventHandler<MouseEvent>>,
    pub children: Element,
}

#[component]
pub fn Button(props: ButtonProps) -> Element {
    let variant_class = props.variant.unwrap_or_default().class();

    let class = match props.class {
        Some(extra) if !extra.is_empty() => format!("{} {}", variant_class, extra),
        _ => variant_class.to_string(),
    };

    rsx! {
        button {
            class,
            r#type: "button",
            onclick: move |evt| {
                if let Some(handler) = &props.onclick {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}
