use super::{
    repository::ResetPasswordRepository,
    utils::{
        validate_form, visible_errors, Field, FieldErrors, PasswordStrength, ResetFormValues,
        SubmitPhase, TouchedFields, DEFAULT_EMAIL,
    },
};
use crate::{
    api::{ApiClient, ApiError, LogResetResponse, ResetEventPayload},
    router::LOGIN_ROUTE,
    utils::timer::RedirectTimer,
};
use chrono::Utc;
use leptos::*;
use std::{rc::Rc, time::Duration};

pub const GENERIC_SUBMIT_ERROR: &str = "Something went wrong. Please try again.";
pub const REDIRECT_DELAY: Duration = Duration::from_millis(2000);
/// Stand-in for the identity provider's password update call.
pub const SIMULATED_RESET_DELAY: Duration = Duration::from_millis(600);

#[derive(Clone, Copy)]
pub struct ResetPasswordViewModel {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub confirm_password: RwSignal<String>,
    pub touched: RwSignal<TouchedFields>,
    pub field_errors: Memo<FieldErrors>,
    pub strength: Memo<PasswordStrength>,
    pub phase: RwSignal<SubmitPhase>,
    pub submit_error: RwSignal<Option<String>>,
    pub submit_action: Action<ResetEventPayload, Result<LogResetResponse, ApiError>>,
    redirect: StoredValue<Option<RedirectTimer>>,
}

pub fn use_reset_password_view_model() -> ResetPasswordViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = ResetPasswordRepository::new_with_client(Rc::new(api));

    let email = create_rw_signal(DEFAULT_EMAIL.to_string());
    let password = create_rw_signal(String::new());
    let confirm_password = create_rw_signal(String::new());
    let touched = create_rw_signal(TouchedFields::default());

    let field_errors = create_memo(move |_| {
        let values = ResetFormValues {
            email: email.get(),
            password: password.get(),
            confirm_password: confirm_password.get(),
        };
        visible_errors(&values, touched.get())
    });
    let strength = create_memo(move |_| password.with(|value| PasswordStrength::classify(value)));

    let submit_action = create_action(move |payload: &ResetEventPayload| {
        let repo = repository.clone();
        let payload = payload.clone();
        async move {
            gloo_timers::future::sleep(SIMULATED_RESET_DELAY).await;
            repo.log_password_reset(payload).await
        }
    });

    let vm = ResetPasswordViewModel {
        email,
        password,
        confirm_password,
        touched,
        field_errors,
        strength,
        phase: create_rw_signal(SubmitPhase::Idle),
        submit_error: create_rw_signal(None),
        submit_action,
        redirect: store_value(None),
    };

    create_effect(move |_| {
        if let Some(result) = submit_action.value().get() {
            vm.apply_result(&result);
        }
    });

    on_cleanup(move || vm.cancel_redirect());

    vm
}

impl ResetPasswordViewModel {
    pub fn values_untracked(&self) -> ResetFormValues {
        ResetFormValues {
            email: self.email.get_untracked(),
            password: self.password.get_untracked(),
            confirm_password: self.confirm_password.get_untracked(),
        }
    }

    pub fn mark_touched(&self, field: Field) {
        self.touched.update(|touched| touched.mark(field));
    }

    pub fn field_error(&self, field: Field) -> Option<&'static str> {
        self.field_errors.with(|errors| errors.message(field))
    }

    pub fn is_submitting(&self) -> bool {
        self.phase.get().is_submitting()
    }

    pub fn is_success(&self) -> bool {
        self.phase.get().is_success()
    }

    /// Validates the form and, when everything passes, moves to `Submitting`
    /// and returns the payload to send. Every field is marked touched so
    /// failures show inline.
    pub fn begin_submit(&self) -> Option<ResetEventPayload> {
        let phase = self.phase.get_untracked();
        if !phase.accepts_submit() {
            log::debug!("Ignoring submit while {:?}", phase);
            return None;
        }

        self.touched.update(|touched| touched.mark_all());
        let values = self.values_untracked();
        if validate_form(&values).is_err() {
            return None;
        }

        let next = phase.begin()?;
        self.phase.set(next);
        self.submit_error.set(None);
        Some(ResetEventPayload::new(values.email, Utc::now()))
    }

    pub fn submit(&self) {
        if let Some(payload) = self.begin_submit() {
            self.submit_action.dispatch(payload);
        }
    }

    pub fn apply_result(&self, result: &Result<LogResetResponse, ApiError>) {
        let next = self.phase.get_untracked().resolve(result.is_ok());
        self.phase.set(next);
        match (result, next) {
            (Ok(_), SubmitPhase::Success) => {
                self.submit_error.set(None);
                self.schedule_redirect();
            }
            (Err(err), SubmitPhase::Failed) => {
                log::warn!("Password reset submission failed: {} ({})", err, err.code);
                self.submit_error.set(Some(GENERIC_SUBMIT_ERROR.to_string()));
            }
            _ => {}
        }
    }

    pub fn redirect_pending(&self) -> bool {
        self.redirect
            .try_with_value(|timer| timer.as_ref().is_some_and(RedirectTimer::is_armed))
            .unwrap_or(false)
    }

    fn schedule_redirect(&self) {
        self.redirect.update_value(|slot| {
            if slot.is_none() {
                let timer = RedirectTimer::navigate_after(REDIRECT_DELAY, LOGIN_ROUTE);
                log::debug!("Redirect to {} in {:?}", LOGIN_ROUTE, timer.delay());
                *slot = Some(timer);
            }
        });
    }

    #[cfg(all(test, not(target_arch = "wasm32")))]
    fn redirect_delay(&self) -> Option<Duration> {
        self.redirect
            .try_with_value(|timer| timer.as_ref().map(RedirectTimer::delay))
            .flatten()
    }

    #[cfg(all(test, not(target_arch = "wasm32")))]
    fn redirect_armed_flag(&self) -> Option<Rc<std::cell::Cell<bool>>> {
        self.redirect
            .try_with_value(|timer| timer.as_ref().map(RedirectTimer::armed_flag))
            .flatten()
    }

    fn cancel_redirect(&self) {
        self.redirect.try_update_value(|slot| {
            if let Some(mut timer) = slot.take() {
                timer.cancel();
            }
        });
    }
}
