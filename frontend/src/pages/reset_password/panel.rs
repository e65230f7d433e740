use super::{
    components::{messages::SuccessBanner, strength::StrengthIndicator},
    utils::Field,
    view_model::{use_reset_password_view_model, ResetPasswordViewModel},
};
use crate::components::{error::InlineErrorMessage, forms::PasswordField, layout::AuthCard};
use leptos::*;

fn submit_label(submitting: bool) -> &'static str {
    if submitting {
        "Resetting..."
    } else {
        "Reset Password"
    }
}

#[component]
pub fn ResetPasswordPanel() -> impl IntoView {
    let vm = use_reset_password_view_model();
    view! { <ResetPasswordForm vm=vm /> }
}

#[component]
pub fn ResetPasswordForm(vm: ResetPasswordViewModel) -> impl IntoView {
    let email = vm.email;
    let submit_error = vm.submit_error;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <AuthCard title="Reset Password">
            <form class="mt-8 space-y-6" novalidate on:submit=on_submit>
                <input type="hidden" name="email" prop:value=email />

                <PasswordField
                    id="password"
                    label="New Password"
                    value=vm.password
                    error=Signal::derive(move || vm.field_error(Field::Password))
                    on_blur=move |_| vm.mark_touched(Field::Password)
                >
                    <StrengthIndicator strength=vm.strength />
                </PasswordField>

                <PasswordField
                    id="confirm-password"
                    label="Confirm Password"
                    value=vm.confirm_password
                    error=Signal::derive(move || vm.field_error(Field::ConfirmPassword))
                    on_blur=move |_| vm.mark_touched(Field::ConfirmPassword)
                />

                // The email input is hidden, so its error surfaces here instead.
                <InlineErrorMessage message=Signal::derive(move || {
                    vm.field_error(Field::Email).map(str::to_string)
                }) />
                <InlineErrorMessage message=submit_error />

                <Show
                    when=move || vm.is_success()
                    fallback=move || {
                        view! {
                            <button
                                type="submit"
                                disabled=move || vm.is_submitting()
                                class="group relative w-full flex justify-center py-2 px-4 border border-transparent text-sm font-medium rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg_hover focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-action-primary-focus disabled:opacity-50"
                            >
                                {move || submit_label(vm.is_submitting())}
                            </button>
                        }
                    }
                >
                    <SuccessBanner />
                </Show>
            </form>
        </AuthCard>
    }
}
