//! Input Field Components
//!
//! The early access email field. The label is visually hidden but kept for
//! screen readers, and the field carries `type="email" required` so the
//! webview blocks empty or malformed submits before our handler runs.

use dioxus::prelude::*;

use super::button::join_classes;

/// Properties for the EmailInput component
#[derive(Clone, PartialEq, Props)]
pub struct EmailInputProps {
    /// Current input value
    pub value: String,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    /// Element id; other components focus the field through it
    pub id: String,
    /// Screen-reader label
    pub label: String,
    #[props(default)]
    pub placeholder: Option<String>,
    #[props(default = true)]
    pub required: bool,
    #[props(default)]
    pub class: Option<String>,
}

/// Email field with a screen-reader-only label
///
/// # Example
///
/// ```rust,ignore
/// let mut email = use_signal(String::new);
///
/// rsx! {
///     EmailInput {
///         id: "email".to_string(),
///         label: "Email address".to_string(),
///         value: email(),
///         oninput: move |s| email.set(s),
///         placeholder: "Enter your email".to_string()
///     }
/// }
/// ```
#[component]
pub fn EmailInput(props: EmailInputProps) -> Element {
    let input_class = join_classes("input-field", props.class.as_deref());

    rsx! {
        div { class: "form-field",
            label { class: "sr-only", r#for: "{props.id}", "{props.label}" }
            input {
                id: "{props.id}",
                name: "{props.id}",
                class: "{input_class}",
                r#type: "email",
                autocomplete: "email",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                required: props.required,
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}
