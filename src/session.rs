use dioxus::prelude::*;

use crate::models::User;

/// The authenticated user for this browser session. Populated by the sign-in
/// screen; the visibility rules consume only `{id, role}` from it.
#[derive(Clone, Copy)]
pub struct Session {
    pub user: Signal<Option<User>>,
}

pub fn use_current_user() -> Option<User> {
    use_context::<Session>().user.read().clone()
}
