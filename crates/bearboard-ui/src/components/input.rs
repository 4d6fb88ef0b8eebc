//! Input Field Components
//!
//! Text inputs, the query textarea and the API-key field with its
//! show/hide toggle. Focus events are surfaced so the login form can drive
//! the avatar.

use dioxus::prelude::*;

use super::button::join_classes;

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Current input value
    pub value: String,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    /// Handler called when the field gains focus
    #[props(default)]
    pub onfocus: Option<EventHandler<()>>,
    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,
    /// Input type (text, email, password, etc.)
    #[props(default = "text".to_string())]
    pub input_type: String,
    /// Form field name
    #[props(default)]
    pub name: Option<String>,
    /// Autocomplete hint
    #[props(default)]
    pub autocomplete: Option<String>,
    /// Whether the input grabs focus on mount
    #[props(default = false)]
    pub autofocus: bool,
    /// Whether the input is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Text input field
///
/// # Example
///
/// ```rust,ignore
/// let mut email = use_signal(String::new);
///
/// rsx! {
///     Input {
///         value: email(),
///         oninput: move |s| email.set(s),
///         onfocus: move |_| sequencer.set_focus(FocusState::Email),
///         placeholder: "Email".to_string(),
///         input_type: "email".to_string(),
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    let input_class = join_classes("input-field", props.class.as_deref());

    rsx! {
        input {
            class: "{input_class}",
            r#type: "{props.input_type}",
            name: props.name.as_deref().unwrap_or(""),
            autocomplete: props.autocomplete.as_deref().unwrap_or("off"),
            autofocus: props.autofocus,
            value: "{props.value}",
            placeholder: props.placeholder.as_deref().unwrap_or(""),
            disabled: props.disabled,
            oninput: move |e| props.oninput.call(e.value()),
            onfocus: move |_| {
                if let Some(handler) = &props.onfocus {
                    handler.call(());
                }
            },
        }
    }
}

/// Properties for the TextArea component
#[derive(Clone, PartialEq, Props)]
pub struct TextAreaProps {
    /// Current textarea value
    pub value: String,
    /// Handler called when textarea changes
    pub oninput: EventHandler<String>,
    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,
    /// Number of visible rows
    #[props(default = 4)]
    pub rows: u32,
    /// Whether the textarea is disabled
    #[props(default = false)]
    pub disabled: bool,
}

/// Multi-line query box
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    rsx! {
        div { class: "textarea-container",
            textarea {
                class: "input-field query-box",
                rows: "{props.rows}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                disabled: props.disabled,
                value: "{props.value}",
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

/// Input type for a secret field in the given reveal state.
pub fn secret_input_type(revealed: bool) -> &'static str {
    if revealed {
        "text"
    } else {
        "password"
    }
}

/// Properties for the SecretInput component
#[derive(Clone, PartialEq, Props)]
pub struct SecretInputProps {
    /// Current value
    pub value: String,
    /// Handler called when the value changes
    pub oninput: EventHandler<String>,
    /// Handler called when the field gains focus
    pub onfocus: EventHandler<()>,
    /// Whether the secret is shown in plain text
    pub revealed: bool,
    /// Handler called when the eye toggle is clicked
    pub ontoggle: EventHandler<()>,
    /// Placeholder text
    #[props(default = "Api-key".to_string())]
    pub placeholder: String,
}

/// Secret field with a show/hide toggle
#[component]
pub fn SecretInput(props: SecretInputProps) -> Element {
    let toggle_label = if props.revealed { "Hide key" } else { "Show key" };
    let toggle_icon = if props.revealed { "\u{1F441}" } else { "\u{25CC}" };

    rsx! {
        div { class: "password-wrapper",
            Input {
                value: props.value.clone(),
                oninput: props.oninput,
                onfocus: props.onfocus,
                placeholder: props.placeholder.clone(),
                input_type: secret_input_type(props.revealed).to_string(),
                name: "password".to_string(),
                autocomplete: "current-password".to_string(),
            }
            button {
                class: "toggle-password-btn",
                r#type: "button",
                title: "{toggle_label}",
                "aria-label": "{toggle_label}",
                onclick: move |_| props.ontoggle.call(()),
                span { class: "eye-icon", "{toggle_icon}" }
            }
        }
    }
}
