use std::sync::Arc;

use futures_signals::signal::{Mutable, Signal};
use keplr_connect_config::ChainConfig;
use keplr_connect_wallet::{KeplrChainInfo, KeplrError, WalletProvider};

use crate::{
    error::ConnectError,
    store::{UserAction, UserInfo, UserStore},
    view::WalletView,
};

/// Shown when the wallet fails without saying why
pub const CONNECT_FAILED_MESSAGE: &str = "Error connecting wallet";

/// The wallet connect component: registers the chain, connects and disconnects,
/// and keeps the transient `error` and `is_loading` state for rendering.
///
/// The wallet is optional, `None` behaves like a browser without the extension.
pub struct WalletConnect<S> {
    pub config: ChainConfig,
    pub store: S,
    wallet: Option<Arc<dyn WalletProvider>>,
    error: Mutable<String>,
    is_loading: Mutable<bool>,
}

impl<S: UserStore> WalletConnect<S> {
    pub fn new(config: ChainConfig, wallet: Option<Arc<dyn WalletProvider>>, store: S) -> Self {
        Self {
            config,
            store,
            wallet,
            error: Mutable::new(String::new()),
            is_loading: Mutable::new(false),
        }
    }

    pub fn error(&self) -> String {
        self.error.get_cloned()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading.get()
    }

    pub fn error_signal(&self) -> impl Signal<Item = String> {
        self.error.signal_cloned()
    }

    pub fn is_loading_signal(&self) -> impl Signal<Item = bool> {
        self.is_loading.signal()
    }

    pub fn view(&self) -> WalletView {
        WalletView::new(
            &self.store.get_state(),
            self.is_loading(),
            &self.error.lock_ref(),
        )
    }

    /// Asks the wallet to add our chain. Run once when the component mounts.
    /// Failures are only logged.
    pub async fn register_chain(&self) {
        let Some(wallet) = &self.wallet else {
            return;
        };

        let chain_info = match KeplrChainInfo::try_from(&self.config) {
            Ok(chain_info) => chain_info,
            Err(err) => {
                log::error!("failed to build chain info for {}: {err}", self.config.chain_id);
                return;
            }
        };

        match wallet.experimental_suggest_chain(&chain_info).await {
            Ok(()) => log::debug!("suggested chain {}", self.config.chain_id),
            Err(err) => log::error!("failed to suggest chain {}: {err}", self.config.chain_id),
        }
    }

    /// Connects to the first account of the configured chain and publishes it.
    ///
    /// On failure the message lands in [`Self::error`] and shared state is left alone.
    /// A call made while another connect is still pending returns
    /// [`ConnectError::InProgress`] without touching any state.
    pub async fn connect(&self) -> Result<UserInfo, ConnectError> {
        if self.is_loading.replace(true) {
            log::warn!("connect requested while another connect is pending");
            return Err(ConnectError::InProgress);
        }
        let _loading = LoadingGuard(&self.is_loading);

        self.error.set(String::new());

        match self.fetch_user_info().await {
            Ok(user_info) => {
                self.store
                    .dispatch(UserAction::SetUserInfo(user_info.clone()));
                Ok(user_info)
            }
            Err(err) => {
                log::error!("Error connecting wallet: {err}");
                let message = err.to_string();
                self.error.set(if message.is_empty() {
                    CONNECT_FAILED_MESSAGE.to_string()
                } else {
                    message
                });
                Err(err.into())
            }
        }
    }

    pub fn disconnect(&self) {
        self.store
            .dispatch(UserAction::SetUserInfo(UserInfo::disconnected()));
        self.error.set(String::new());
    }

    async fn fetch_user_info(&self) -> Result<UserInfo, KeplrError> {
        let wallet = self.wallet.as_ref().ok_or(KeplrError::NoExist)?;
        let chain_id = &self.config.chain_id;

        wallet.enable(chain_id).await?;

        let signer = wallet.get_offline_signer(chain_id)?;
        let accounts = signer.get_accounts().await?;

        let address = accounts
            .into_iter()
            .next()
            .map(|account| account.address)
            .filter(|address| !address.is_empty())
            .ok_or_else(|| KeplrError::NoAccounts(chain_id.clone()))?;

        Ok(UserInfo::connected(address, chain_id.clone()))
    }
}

// clears the loading flag however the connect future ends, including being dropped
struct LoadingGuard<'a>(&'a Mutable<bool>);

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}
