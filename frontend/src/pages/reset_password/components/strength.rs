use super::super::utils::PasswordStrength;
use leptos::*;

fn strength_class(strength: PasswordStrength) -> &'static str {
    match strength {
        PasswordStrength::Weak => "text-status-error-text",
        PasswordStrength::Medium => "text-status-warning-text",
        PasswordStrength::Strong => "text-status-success-text",
    }
}

#[component]
pub fn StrengthIndicator(#[prop(into)] strength: Signal<PasswordStrength>) -> impl IntoView {
    view! {
        <p
            class=move || format!("text-xs font-medium {}", strength_class(strength.get()))
            aria-live="polite"
        >
            {move || format!("Strength: {}", strength.get())}
        </p>
    }
}
