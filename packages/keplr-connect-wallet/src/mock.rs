//! An in-memory [`WalletProvider`] for tests and the native cli.
//! It records every chain it was asked to enable or register, and each call
//! can be made to fail with a chosen message.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use keplr_connect_config::ChainId;

use crate::{
    chain_info::KeplrChainInfo,
    error::{KeplrError, Result},
    provider::{AccountData, OfflineSigner, WalletProvider},
};

#[derive(Default)]
pub struct MockWallet {
    state: Mutex<MockWalletState>,
}

#[derive(Default, Debug, Clone)]
struct MockWalletState {
    accounts: Vec<AccountData>,
    enable_error: Option<String>,
    enable_error_once: bool,
    signer_error: Option<String>,
    suggest_error: Option<String>,
    hang_enable: bool,
    enabled: Vec<ChainId>,
    suggested: Vec<KeplrChainInfo>,
}

impl MockWallet {
    pub fn new(accounts: impl IntoIterator<Item = AccountData>) -> Self {
        Self {
            state: Mutex::new(MockWalletState {
                accounts: accounts.into_iter().collect(),
                ..Default::default()
            }),
        }
    }

    pub fn with_addresses(addresses: impl IntoIterator<Item = impl ToString>) -> Self {
        Self::new(addresses.into_iter().map(AccountData::new))
    }

    /// `enable` fails as if the user rejected the request
    pub fn reject_enable(self, message: impl Into<String>) -> Self {
        self.state().enable_error = Some(message.into());
        self
    }

    /// like [`Self::reject_enable`] but only the next call fails
    pub fn reject_enable_once(self, message: impl Into<String>) -> Self {
        {
            let mut state = self.state();
            state.enable_error = Some(message.into());
            state.enable_error_once = true;
        }
        self
    }

    pub fn reject_signer(self, message: impl Into<String>) -> Self {
        self.state().signer_error = Some(message.into());
        self
    }

    pub fn reject_suggest_chain(self, message: impl Into<String>) -> Self {
        self.state().suggest_error = Some(message.into());
        self
    }

    /// `enable` never resolves, like a wallet popup nobody answers
    pub fn hang_enable(self) -> Self {
        self.state().hang_enable = true;
        self
    }

    pub fn enabled_chains(&self) -> Vec<ChainId> {
        self.state().enabled.clone()
    }

    pub fn suggested_chains(&self) -> Vec<KeplrChainInfo> {
        self.state().suggested.clone()
    }

    fn state(&self) -> MutexGuard<'_, MockWalletState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl WalletProvider for MockWallet {
    async fn enable(&self, chain_id: &ChainId) -> Result<()> {
        let hang = {
            let mut state = self.state();
            state.enabled.push(chain_id.clone());
            if let Some(message) = state.enable_error.clone() {
                if state.enable_error_once {
                    state.enable_error = None;
                }
                return Err(KeplrError::FailedEnable(message));
            }
            state.hang_enable
        };

        if hang {
            std::future::pending::<()>().await;
        }

        log::debug!("mock wallet enabled {chain_id}");
        Ok(())
    }

    fn get_offline_signer(&self, _chain_id: &ChainId) -> Result<Box<dyn OfflineSigner>> {
        let state = self.state();
        match &state.signer_error {
            Some(message) => Err(KeplrError::NoSigner(message.clone())),
            None => Ok(Box::new(MockSigner {
                accounts: state.accounts.clone(),
            })),
        }
    }

    async fn experimental_suggest_chain(&self, chain_info: &KeplrChainInfo) -> Result<()> {
        let mut state = self.state();
        if let Some(message) = &state.suggest_error {
            return Err(KeplrError::FailedSuggestChain(message.clone()));
        }
        state.suggested.push(chain_info.clone());
        Ok(())
    }
}

struct MockSigner {
    accounts: Vec<AccountData>,
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl OfflineSigner for MockSigner {
    async fn get_accounts(&self) -> Result<Vec<AccountData>> {
        Ok(self.accounts.clone())
    }
}
