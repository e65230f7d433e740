use leptos::*;

/// Centered card used by the unauthenticated auth screens.
#[component]
pub fn AuthCard(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8 bg-surface-elevated rounded-2xl shadow-sm border border-border p-8">
                <h2 class="text-center text-3xl font-extrabold text-fg">{title}</h2>
                {children()}
            </div>
        </div>
    }
}
