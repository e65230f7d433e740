use std::{cell::Cell, rc::Rc, time::Duration};

#[cfg(target_arch = "wasm32")]
type Pending = gloo_timers::callback::Timeout;
#[cfg(not(target_arch = "wasm32"))]
type Pending = Box<dyn FnOnce()>;

#[cfg(target_arch = "wasm32")]
fn start_pending(delay: Duration, fire: impl FnOnce() + 'static) -> Pending {
    let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
    gloo_timers::callback::Timeout::new(millis, fire)
}

// No browser timer off-wasm; the action is held until fired or dropped.
#[cfg(not(target_arch = "wasm32"))]
fn start_pending(_delay: Duration, fire: impl FnOnce() + 'static) -> Pending {
    Box::new(fire)
}

#[cfg(target_arch = "wasm32")]
fn stop_pending(pending: Pending) {
    let _ = pending.cancel();
}

#[cfg(not(target_arch = "wasm32"))]
fn stop_pending(pending: Pending) {
    drop(pending);
}

/// A one-shot deferred action owned by the view that scheduled it.
///
/// Cancelling (or dropping) the handle guarantees the action never runs.
pub struct RedirectTimer {
    armed: Rc<Cell<bool>>,
    delay: Duration,
    pending: Option<Pending>,
}

impl RedirectTimer {
    pub fn schedule(delay: Duration, action: impl FnOnce() + 'static) -> Self {
        let armed = Rc::new(Cell::new(true));
        let flag = Rc::clone(&armed);
        let fire = move || {
            if flag.replace(false) {
                action();
            }
        };
        Self {
            armed,
            delay,
            pending: Some(start_pending(delay, fire)),
        }
    }

    /// Schedules a full page navigation to `path`.
    pub fn navigate_after(delay: Duration, path: &'static str) -> Self {
        Self::schedule(delay, move || {
            log::debug!("Redirecting to {}", path);
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(path);
            }
        })
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn is_armed(&self) -> bool {
        self.armed.get()
    }

    pub fn cancel(&mut self) {
        self.armed.set(false);
        if let Some(pending) = self.pending.take() {
            stop_pending(pending);
        }
    }

    #[cfg(all(test, not(target_arch = "wasm32")))]
    pub(crate) fn armed_flag(&self) -> Rc<Cell<bool>> {
        Rc::clone(&self.armed)
    }

    /// Runs the pending action immediately, standing in for the browser timer.
    #[cfg(all(test, not(target_arch = "wasm32")))]
    pub fn fire_now(&mut self) {
        if let Some(action) = self.pending.take() {
            action();
        }
    }
}

impl Drop for RedirectTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;

    fn counting_timer() -> (RedirectTimer, Rc<Cell<u32>>) {
        let fired = Rc::new(Cell::new(0));
        let counter = Rc::clone(&fired);
        let timer = RedirectTimer::schedule(Duration::from_millis(2000), move || {
            counter.set(counter.get() + 1);
        });
        (timer, fired)
    }

    #[test]
    fn keeps_requested_delay() {
        let (timer, _fired) = counting_timer();
        assert_eq!(timer.delay(), Duration::from_millis(2000));
    }

    #[test]
    fn fires_once() {
        let (mut timer, fired) = counting_timer();
        assert!(timer.is_armed());
        timer.fire_now();
        timer.fire_now();
        assert_eq!(fired.get(), 1);
        assert!(!timer.is_armed());
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let (mut timer, fired) = counting_timer();
        timer.cancel();
        timer.fire_now();
        assert_eq!(fired.get(), 0);
        assert!(!timer.is_armed());
    }

    #[test]
    fn dropping_the_handle_cancels() {
        let (timer, fired) = counting_timer();
        let armed = Rc::clone(&timer.armed);
        drop(timer);
        assert!(!armed.get());
        assert_eq!(fired.get(), 0);
    }
}
