use page_data::{DataContext, LoadRequest};
use payloads::{Resource, responses};
use yewdux::prelude::*;

#[derive(Clone, PartialEq, Default)]
pub enum AuthState {
    #[default]
    Unknown,
    LoggedOut,
    LoggedIn(responses::UserProfile),
}

#[derive(Default, Clone, PartialEq, Store)]
pub struct State {
    // === Authentication (managed by use_authentication) ===
    pub auth_state: AuthState,

    // === Remote data (managed by DataStoreHandle, read via use_page_data) ===
    pub data: DataContext<Resource>,
}

impl State {
    pub fn profile(&self) -> Option<&responses::UserProfile> {
        match &self.auth_state {
            AuthState::LoggedIn(profile) => Some(profile),
            AuthState::LoggedOut | AuthState::Unknown => None,
        }
    }

    /// Write a fetched resource into the cache. A fresh profile also
    /// replaces the session profile, so permission changes show up in the
    /// nav and the home redirect.
    pub fn finish_load(
        &mut self,
        request: LoadRequest,
        result: Result<Resource, String>,
    ) {
        if request.epoch == self.data.epoch() {
            if let (Ok(Resource::Profile(profile)), AuthState::LoggedIn(current)) =
                (&result, &mut self.auth_state)
            {
                *current = profile.clone();
            }
        }
        self.data.finish_load(request, result);
    }

    pub fn logout(&mut self) {
        self.auth_state = AuthState::LoggedOut;
        self.data.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::{AuthState, State};
    use page_data::{LoadMode, LoadState};
    use payloads::responses::UserProfile;
    use payloads::{Permissions, Resource, ResourceKey, UserId};

    fn profile(manage_suppliers: bool) -> UserProfile {
        UserProfile {
            user_id: UserId(Default::default()),
            username: "weaver".into(),
            email: "weaver@mill.example".into(),
            display_name: None,
            permissions: Permissions {
                manage_suppliers,
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_profile_reload_updates_session() {
        let mut state = State {
            auth_state: AuthState::LoggedIn(profile(false)),
            ..Default::default()
        };
        let mut issued =
            state.data.begin_load(&[ResourceKey::PROFILE], LoadMode::Force);
        state.finish_load(issued.remove(0), Ok(Resource::Profile(profile(true))));

        assert_eq!(state.profile(), Some(&profile(true)));
        assert!(state.data.is_loaded(&ResourceKey::PROFILE));
    }

    #[test]
    fn test_profile_from_before_logout_is_ignored() {
        let mut state = State {
            auth_state: AuthState::LoggedIn(profile(false)),
            ..Default::default()
        };
        let mut issued =
            state.data.begin_load(&[ResourceKey::PROFILE], LoadMode::Force);
        state.logout();
        state.auth_state = AuthState::LoggedIn(profile(false));

        state.finish_load(issued.remove(0), Ok(Resource::Profile(profile(true))));
        assert_eq!(state.profile(), Some(&profile(false)));
        assert_eq!(
            state.data.load_state(&ResourceKey::PROFILE),
            LoadState::NotLoaded
        );
    }
}
