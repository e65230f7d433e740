use leptos::*;
use leptos_router::*;

use crate::pages::{login::LoginPage, reset_password::ResetPasswordPage};

pub const ROOT_ROUTE: &str = "/";
pub const RESET_PASSWORD_ROUTE: &str = "/auth/reset-password";
pub const LOGIN_ROUTE: &str = "/auth/login";

pub const ROUTE_PATHS: &[&str] = &[ROOT_ROUTE, RESET_PASSWORD_ROUTE, LOGIN_ROUTE];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(crate::api::ApiClient::new());
    view! {
        <Router>
            <main>
                <Routes>
                    <Route path=ROOT_ROUTE view=RootRedirect/>
                    <Route path=RESET_PASSWORD_ROUTE view=ResetPasswordPage/>
                    <Route path=LOGIN_ROUTE view=LoginPage/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn RootRedirect() -> impl IntoView {
    view! { <Redirect path=RESET_PASSWORD_ROUTE/> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn route_paths_cover_auth_pages() {
        assert!(ROUTE_PATHS.contains(&RESET_PASSWORD_ROUTE));
        assert!(ROUTE_PATHS.contains(&LOGIN_ROUTE));
    }

    #[test]
    fn auth_routes_share_prefix() {
        for path in [RESET_PASSWORD_ROUTE, LOGIN_ROUTE] {
            assert!(path.starts_with("/auth/"), "unexpected path {}", path);
        }
    }

    #[test]
    fn no_duplicate_routes() {
        let unique: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        assert_eq!(unique.len(), ROUTE_PATHS.len());
    }
}
