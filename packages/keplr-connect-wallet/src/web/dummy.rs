// just to make IDE's happy
use async_trait::async_trait;
use keplr_connect_config::ChainId;

use crate::{
    chain_info::KeplrChainInfo,
    error::{KeplrError, Result},
    provider::{OfflineSigner, WalletProvider},
};

#[derive(Clone, Debug)]
pub struct Keplr {}

impl Keplr {
    /// Keplr is only injected into browsers
    pub fn detect() -> Option<Self> {
        None
    }
}

#[async_trait]
impl WalletProvider for Keplr {
    async fn enable(&self, _: &ChainId) -> Result<()> {
        Err(KeplrError::NoExist)
    }

    fn get_offline_signer(&self, _: &ChainId) -> Result<Box<dyn OfflineSigner>> {
        Err(KeplrError::NoExist)
    }

    async fn experimental_suggest_chain(&self, _: &KeplrChainInfo) -> Result<()> {
        Err(KeplrError::NoExist)
    }
}
