use async_trait::async_trait;
use keplr_connect_config::ChainId;
use serde::{Deserialize, Serialize};

use crate::{chain_info::KeplrChainInfo, error::Result};

/// One entry of `offlineSigner.getAccounts()`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AccountData {
    pub address: String,
    #[serde(default)]
    pub algo: String,
}

impl AccountData {
    pub fn new(address: impl ToString) -> Self {
        Self {
            address: address.to_string(),
            algo: "secp256k1".to_string(),
        }
    }
}

cfg_if::cfg_if! {
    if #[cfg(target_arch = "wasm32")] {
        // we assume that any wallet we use in wasm32 is purely single-threaded
        #[async_trait(?Send)]
        pub trait WalletProvider {
            async fn enable(&self, chain_id: &ChainId) -> Result<()>;
            fn get_offline_signer(&self, chain_id: &ChainId) -> Result<Box<dyn OfflineSigner>>;
            async fn experimental_suggest_chain(&self, chain_info: &KeplrChainInfo) -> Result<()>;
        }

        #[async_trait(?Send)]
        pub trait OfflineSigner {
            async fn get_accounts(&self) -> Result<Vec<AccountData>>;
        }
    } else {
        #[async_trait]
        pub trait WalletProvider: Send + Sync {
            async fn enable(&self, chain_id: &ChainId) -> Result<()>;
            fn get_offline_signer(&self, chain_id: &ChainId) -> Result<Box<dyn OfflineSigner>>;
            async fn experimental_suggest_chain(&self, chain_info: &KeplrChainInfo) -> Result<()>;
        }

        #[async_trait]
        pub trait OfflineSigner: Send + Sync {
            async fn get_accounts(&self) -> Result<Vec<AccountData>>;
        }
    }
}
