use std::collections::BTreeSet;

use crate::core::FormBuffer;
use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Reactive view of one field in a [`FormBuffer`] signal
#[derive(Clone, Copy)]
pub struct BoundField {
    pub value: Signal<String>,
    pub on_input: Callback<String>,
    pub error: Signal<Option<String>>,
}

/// Bind a declared field of `buffer` to an input
///
/// Every keystroke replaces that single value. The error shows `message`
/// while the field is listed in `missing`, and is cleared as soon as the
/// field is edited.
pub fn bind_field(
    buffer: RwSignal<FormBuffer>,
    missing: RwSignal<BTreeSet<&'static str>>,
    name: &'static str,
    message: &'static str,
) -> BoundField {
    let value = Signal::derive(move || {
        buffer.with(|b| b.field(name).unwrap_or_default().to_string())
    });
    let on_input = Callback::new(move |text: String| {
        let result = buffer.try_update(|b| b.set_field(name, text));
        if let Some(Err(err)) = result {
            tracing::error!(error = %err, "form input bound to unknown field");
        }
        missing.update(|m| {
            m.remove(name);
        });
    });
    let error = Signal::derive(move || {
        missing
            .with(|m| m.contains(name))
            .then(|| message.to_string())
    });

    BoundField {
        value,
        on_input,
        error,
    }
}

/// Generic form field component with label and input
#[component]
pub fn FormField(
    /// Field label text
    label: String,
    /// Input name attribute
    name: &'static str,
    /// Element id when `name` alone is not unique on the page
    #[prop(optional)]
    id: Option<&'static str>,
    /// Whether field is required (shows gold asterisk)
    #[prop(default = false)]
    required: bool,
    /// Input type (text, email, url, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text
    #[prop(default = String::new())]
    placeholder: String,
    /// Current value signal
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Optional error message to display
    #[prop(optional)]
    error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    let id = id.unwrap_or(name);
    view! {
        <div class="space-y-1.5">
            <label class="px-label" for=id>
                {label}
                {required.then(|| view! { <span class="text-px-accent ml-0.5">"*"</span> })}
            </label>
            <input
                id=id
                name=name
                type=input_type
                class="px-input"
                class:px-input-error=move || error.as_ref().and_then(|e| e.get()).is_some()
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            {move || {
                error.as_ref().and_then(|e| e.get()).map(|err| view! {
                    <div class="flex items-center gap-1 text-sm text-red-400">
                        <Icon name=icons::ALERT_CIRCLE class="w-4 h-4"/>
                        <span>{err}</span>
                    </div>
                })
            }}
        </div>
    }
}

/// Text area form field component
#[component]
pub fn TextAreaField(
    /// Field label text
    label: String,
    /// Textarea name attribute
    name: &'static str,
    /// Element id when `name` alone is not unique on the page
    #[prop(optional)]
    id: Option<&'static str>,
    /// Whether field is required (shows gold asterisk)
    #[prop(default = false)]
    required: bool,
    /// Placeholder text
    #[prop(default = String::new())]
    placeholder: String,
    /// Current value signal
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Number of rows
    #[prop(default = 4)]
    rows: u32,
    /// Optional error message to display
    #[prop(optional)]
    error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    let id = id.unwrap_or(name);
    view! {
        <div class="space-y-1.5">
            <label class="px-label" for=id>
                {label}
                {required.then(|| view! { <span class="text-px-accent ml-0.5">"*"</span> })}
            </label>
            <textarea
                id=id
                name=name
                class="px-input resize-none"
                class:px-input-error=move || error.as_ref().and_then(|e| e.get()).is_some()
                placeholder=placeholder
                rows=rows
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            {move || {
                error.as_ref().and_then(|e| e.get()).map(|err| view! {
                    <div class="flex items-center gap-1 text-sm text-red-400">
                        <Icon name=icons::ALERT_CIRCLE class="w-4 h-4"/>
                        <span>{err}</span>
                    </div>
                })
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CONTACT_FORM;

    #[test]
    fn test_bound_field_writes_value_and_clears_its_error() {
        let owner = Owner::new();
        owner.with(|| {
            let buffer = RwSignal::new(FormBuffer::new(CONTACT_FORM));
            let missing = RwSignal::new(BTreeSet::from(["name", "email"]));
            let field = bind_field(buffer, missing, "name", "Please enter your name");

            assert_eq!(
                field.error.get_untracked().as_deref(),
                Some("Please enter your name")
            );

            field.on_input.run("Ada".to_string());

            assert_eq!(field.value.get_untracked(), "Ada");
            assert_eq!(
                buffer.with_untracked(|b| b.field("name").map(str::to_owned)),
                Some("Ada".to_string())
            );
            assert!(field.error.get_untracked().is_none());
            assert!(missing.with_untracked(|m| m.contains("email")));
        });
    }

    #[test]
    fn test_bound_field_on_unknown_name_leaves_buffer_untouched() {
        let owner = Owner::new();
        owner.with(|| {
            let buffer = RwSignal::new(FormBuffer::new(CONTACT_FORM));
            let missing = RwSignal::new(BTreeSet::new());
            let field = bind_field(buffer, missing, "phone", "Please enter a phone");

            field.on_input.run("555".to_string());

            assert_eq!(field.value.get_untracked(), "");
            assert_eq!(buffer.get_untracked(), FormBuffer::new(CONTACT_FORM));
        });
    }
}
