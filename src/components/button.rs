use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    Primary,
    Secondary,
    Ghost,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Secondary => "btn-secondary",
            ButtonVariant::Ghost => "btn-ghost",
        }
    }
}

/// Large touch targets by default; the elder-facing CTAs use ExtraLarge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonSize {
    Medium,
    Large,
    ExtraLarge,
}

impl ButtonSize {
    fn class(self) -> &'static str {
        match self {
            ButtonSize::Medium => "btn-md",
            ButtonSize::Large => "btn-lg",
            ButtonSize::ExtraLarge => "btn-xl",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    #[prop_or(ButtonVariant::Primary)]
    pub variant: ButtonVariant,
    #[prop_or(ButtonSize::Medium)]
    pub size: ButtonSize,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    html! {
        <button
            class={classes!("btn", props.variant.class(), props.size.class(), props.class.clone())}
            onclick={props.onclick.clone()}
        >
            { for props.children.iter() }
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_classes_are_distinct() {
        let classes = [
            ButtonVariant::Primary.class(),
            ButtonVariant::Secondary.class(),
            ButtonVariant::Ghost.class(),
        ];
        assert_eq!(classes, ["btn-primary", "btn-secondary", "btn-ghost"]);
    }

    #[test]
    fn size_classes_are_distinct() {
        let classes = [
            ButtonSize::Medium.class(),
            ButtonSize::Large.class(),
            ButtonSize::ExtraLarge.class(),
        ];
        assert_eq!(classes, ["btn-md", "btn-lg", "btn-xl"]);
    }
}
