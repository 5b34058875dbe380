//! Authentication context, route guard, and hooks for the UI.
//!
//! The guard here is a UX convenience, not a security boundary: a capable
//! client can bypass it, and the backend must independently enforce every
//! access constraint. What the guard buys is a coherent experience — signed
//! out users land on the login page, unverified accounts on the
//! pending-approval page, under-privileged roles back on their dashboard.

use dioxus::prelude::*;

use crate::components::{use_toast, ToastOptions};
use crate::session::{make_client, make_session};
use store::{Role, UserInfo};

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<UserInfo>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
///
/// The provider only seeds state from the local session cache so chrome can
/// render the user immediately; [`AuthGuard`] owns the network refresh.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let mut auth_state = use_context_provider(|| Signal::new(AuthState::default()));

    use_effect(move || {
        let session = make_session();
        auth_state.set(AuthState {
            user: session.user(),
            loading: false,
        });
    });

    rsx! {
        {children}
    }
}

/// Outcome of an authorization check for one route render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessDecision {
    Granted,
    /// No session at all: redirect to login.
    MissingSession,
    /// Verification required but the account is unverified: redirect to
    /// pending-approval.
    NotVerified,
    /// The account's role is outside the allowed set: redirect to the
    /// dashboard.
    NotAuthorized,
}

/// Decide whether `user` may see a subtree.
///
/// Verification is checked before role, so an unverified admin still lands on
/// pending-approval. `is_suspended` and `is_active` are reported by the
/// backend but not consulted here; only `is_verified` and `role` gate access
/// (backend enforcement is the authority for the rest). An empty
/// `allowed_roles` slice is treated like `None`: any authenticated role
/// passes.
pub fn check_access(
    user: Option<&UserInfo>,
    allowed_roles: Option<&[Role]>,
    require_verified: bool,
) -> AccessDecision {
    let Some(user) = user else {
        return AccessDecision::MissingSession;
    };
    if require_verified && !user.is_verified {
        return AccessDecision::NotVerified;
    }
    if let Some(allowed) = allowed_roles {
        if !allowed.is_empty() && !allowed.contains(&user.role) {
            return AccessDecision::NotAuthorized;
        }
    }
    AccessDecision::Granted
}

/// Guard component that gates rendering of a subtree to sessions meeting role
/// and verification constraints.
///
/// The check runs once per mount; remount it (e.g. with a `key` derived from
/// the current path) to re-run on navigation. Until the check passes, nothing
/// renders. A single failed hydration fetch redirects to login even when a
/// cached session exists — there is no retry, and no abort if the user
/// navigates away mid-request.
#[component]
pub fn AuthGuard(
    /// Roles allowed through; omitted means any authenticated role.
    allowed_roles: Option<Vec<Role>>,
    /// Require a verified account (default true).
    #[props(default = true)]
    require_verified: bool,
    children: Element,
) -> Element {
    let mut auth_state = use_auth();
    let mut ready = use_signal(|| false);
    let toast = use_toast();
    let nav = use_navigator();

    let _check = use_resource(move || {
        let allowed = allowed_roles.clone();
        async move {
            let session = make_session();
            if session.token().is_none() || session.user().is_none() {
                nav.replace("/login");
                return;
            }

            // Hydrate: the freshly fetched record overwrites the cache and
            // becomes the effective user for this decision.
            let effective = match make_client().current_user().await {
                Ok(user) => {
                    session.set_user(&user);
                    auth_state.set(AuthState {
                        user: Some(user.clone()),
                        loading: false,
                    });
                    user
                }
                Err(err) => {
                    tracing::warn!("session hydration failed: {err}");
                    nav.replace("/login");
                    return;
                }
            };

            match check_access(Some(&effective), allowed.as_deref(), require_verified) {
                AccessDecision::Granted => ready.set(true),
                AccessDecision::MissingSession => {
                    nav.replace("/login");
                }
                AccessDecision::NotVerified => {
                    toast.error(
                        "Your account is awaiting approval.".to_string(),
                        ToastOptions::new(),
                    );
                    nav.replace("/pending-approval");
                }
                AccessDecision::NotAuthorized => {
                    toast.error(
                        "You are not authorized to view this page.".to_string(),
                        ToastOptions::new(),
                    );
                    nav.replace("/dashboard");
                }
            }
        }
    });

    if !ready() {
        return rsx! {};
    }

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
///
/// Logout is client-side only: the session store is cleared and the token
/// simply stops being sent.
#[component]
pub fn LogoutButton(
    #[props(default = "Log out".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut auth_state = use_auth();

    let onclick = move |_| {
        make_session().clear();
        auth_state.set(AuthState {
            user: None,
            loading: false,
        });
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/login");
            }
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: Role, verified: bool) -> UserInfo {
        UserInfo {
            id: "u-1".to_string(),
            name: Some("Jane Doe".to_string()),
            email: "jane@agency.com".to_string(),
            role,
            is_verified: verified,
            is_suspended: false,
            is_active: true,
        }
    }

    #[test]
    fn test_missing_session_redirects_to_login() {
        assert_eq!(
            check_access(None, None, true),
            AccessDecision::MissingSession
        );
        assert_eq!(
            check_access(None, Some(&[Role::Admin]), false),
            AccessDecision::MissingSession
        );
    }

    #[test]
    fn test_unverified_redirects_regardless_of_role() {
        for role in [Role::Admin, Role::Moderator, Role::User] {
            assert_eq!(
                check_access(Some(&user(role, false)), None, true),
                AccessDecision::NotVerified
            );
        }
        // Verification outranks role: an unverified admin is still pending.
        assert_eq!(
            check_access(Some(&user(Role::Admin, false)), Some(&[Role::Admin]), true),
            AccessDecision::NotVerified
        );
    }

    #[test]
    fn test_verification_not_required_when_disabled() {
        assert_eq!(
            check_access(Some(&user(Role::User, false)), None, false),
            AccessDecision::Granted
        );
    }

    #[test]
    fn test_role_outside_allowed_set_is_rejected_even_if_verified() {
        assert_eq!(
            check_access(
                Some(&user(Role::User, true)),
                Some(&[Role::Admin, Role::Moderator]),
                true
            ),
            AccessDecision::NotAuthorized
        );
    }

    #[test]
    fn test_allowed_role_passes() {
        assert_eq!(
            check_access(
                Some(&user(Role::Moderator, true)),
                Some(&[Role::Admin, Role::Moderator]),
                true
            ),
            AccessDecision::Granted
        );
        assert_eq!(
            check_access(Some(&user(Role::User, true)), None, true),
            AccessDecision::Granted
        );
    }

    #[test]
    fn test_empty_allowed_set_admits_any_role() {
        assert_eq!(
            check_access(Some(&user(Role::User, true)), Some(&[]), true),
            AccessDecision::Granted
        );
    }

    #[test]
    fn test_suspended_and_inactive_do_not_gate_access() {
        let mut flagged = user(Role::User, true);
        flagged.is_suspended = true;
        flagged.is_active = false;
        assert_eq!(
            check_access(Some(&flagged), None, true),
            AccessDecision::Granted
        );
    }

    #[test]
    fn test_decision_is_deterministic_for_same_session() {
        let u = user(Role::User, true);
        let first = check_access(Some(&u), None, true);
        let second = check_access(Some(&u), None, true);
        assert_eq!(first, AccessDecision::Granted);
        assert_eq!(first, second);
    }
}
