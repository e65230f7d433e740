use leptos::*;

const INPUT_CLASS: &str = "appearance-none rounded-md relative block w-full px-3 py-2 border bg-form-control-bg placeholder-form-control-placeholder text-form-control-text focus:outline-none focus:ring-2 focus:ring-action-primary-focus focus:border-action-primary-border sm:text-sm";

fn input_class(has_error: bool) -> String {
    let border = if has_error {
        "border-status-error-border"
    } else {
        "border-form-control-border"
    };
    format!("{} {}", INPUT_CLASS, border)
}

/// Password input bound to `value`, reporting blur through `on_blur`.
#[component]
pub fn PasswordField(
    id: &'static str,
    label: &'static str,
    value: RwSignal<String>,
    #[prop(into)] error: Signal<Option<&'static str>>,
    #[prop(into)] on_blur: Callback<()>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let error_id = format!("{}-error", id);
    let described_by = error_id.clone();

    view! {
        <div class="space-y-1">
            <label for=id class="block text-sm font-medium text-fg">
                {label}
            </label>
            <input
                id=id
                name=id
                type="password"
                autocomplete="new-password"
                class=move || input_class(error.with(Option::is_some))
                aria-invalid=move || if error.with(Option::is_some) { "true" } else { "false" }
                aria-describedby=described_by
                prop:value=value
                on:input=move |ev| value.set(event_target_value(&ev))
                on:blur=move |_| on_blur.call(())
            />
            {children.map(|children| children())}
            <p id=error_id class="text-sm text-status-error-text">
                {move || error.get().unwrap_or_default()}
            </p>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn input_class_switches_border_on_error() {
        assert!(input_class(true).contains("border-status-error-border"));
        assert!(input_class(false).contains("border-form-control-border"));
    }

    #[test]
    fn password_field_renders_label_and_error() {
        let html = render_to_string(|| {
            let value = create_rw_signal(String::new());
            view! {
                <PasswordField
                    id="password"
                    label="New Password"
                    value=value
                    error=Signal::derive(|| Some("Password must be at least 8 characters"))
                    on_blur=|_| ()
                />
            }
        });
        assert!(html.contains("New Password"));
        assert!(html.contains("type=\"password\""));
        assert!(html.contains("Password must be at least 8 characters"));
        assert!(html.contains("aria-invalid=\"true\""));
    }

    #[test]
    fn password_field_without_error_is_valid() {
        let html = render_to_string(|| {
            let value = create_rw_signal(String::new());
            view! {
                <PasswordField
                    id="confirm-password"
                    label="Confirm Password"
                    value=value
                    error=Signal::derive(|| None::<&'static str>)
                    on_blur=|_| ()
                />
            }
        });
        assert!(html.contains("aria-invalid=\"false\""));
    }
}
