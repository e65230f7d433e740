use crate::components::layout::AuthCard;
use leptos::*;

/// Landing spot for the post-reset redirect. Sign-in itself is served elsewhere.
#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <AuthCard title="Login">
            <p class="text-center text-sm text-fg-muted">
                "Placeholder page for redirect after password reset."
            </p>
        </AuthCard>
    }
}
