use leptos::*;

pub const SUCCESS_MESSAGE: &str = "Password reset successful. Redirecting to login…";

#[component]
pub fn SuccessBanner() -> impl IntoView {
    view! {
        <div
            role="status"
            class="rounded-md bg-status-success-bg border border-status-success-border p-4 text-sm font-medium text-status-success-text"
        >
            {SUCCESS_MESSAGE}
        </div>
    }
}
