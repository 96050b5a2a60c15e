use futures_signals::signal::{Mutable, MutableSignalCloned};
use keplr_connect_config::ChainId;
use serde::{Deserialize, Serialize};

/// Connection state shared with the rest of the application
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct UserInfo {
    pub address: String,
    pub chain_id: ChainId,
    pub connected: bool,
}

impl UserInfo {
    pub fn connected(address: impl Into<String>, chain_id: ChainId) -> Self {
        Self {
            address: address.into(),
            chain_id,
            connected: true,
        }
    }

    pub fn disconnected() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    SetUserInfo(UserInfo),
}

impl UserAction {
    pub fn into_state(self) -> UserInfo {
        match self {
            UserAction::SetUserInfo(user_info) => user_info,
        }
    }
}

/// The only way the component reads or writes shared state
pub trait UserStore: Send + Sync {
    fn get_state(&self) -> UserInfo;
    fn dispatch(&self, action: UserAction);
}

/// Signal-backed store, cloning shares the same state
#[derive(Clone, Default)]
pub struct UserInfoStore {
    inner: Mutable<UserInfo>,
}

impl UserInfoStore {
    pub fn new(initial: UserInfo) -> Self {
        Self {
            inner: Mutable::new(initial),
        }
    }

    pub fn signal(&self) -> MutableSignalCloned<UserInfo> {
        self.inner.signal_cloned()
    }
}

impl UserStore for UserInfoStore {
    fn get_state(&self) -> UserInfo {
        self.inner.get_cloned()
    }

    fn dispatch(&self, action: UserAction) {
        log::debug!("dispatch {action:?}");
        self.inner.set(action.into_state());
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn starts_disconnected() {
        let store = UserInfoStore::default();
        let state = store.get_state();

        assert!(!state.connected);
        assert!(state.address.is_empty());
        assert!(state.chain_id.is_empty());
    }

    #[test]
    fn clones_share_state() {
        let store = UserInfoStore::default();
        let other = store.clone();

        store.dispatch(UserAction::SetUserInfo(UserInfo::connected(
            "human1abc",
            ChainId::new("humans_1089-1"),
        )));

        assert_eq!(other.get_state().address, "human1abc");
        assert!(other.get_state().connected);
    }
}
