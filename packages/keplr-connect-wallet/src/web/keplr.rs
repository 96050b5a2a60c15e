use async_trait::async_trait;
use keplr_connect_config::ChainId;
use serde::Serialize;
use wasm_bindgen::{prelude::*, JsCast};

use crate::{
    chain_info::KeplrChainInfo,
    error::{KeplrError, Result},
    provider::{AccountData, OfflineSigner, WalletProvider},
};

/// Handle on the `window.keplr` object injected by the extension
#[derive(Clone, Debug)]
pub struct Keplr {}

impl Keplr {
    pub fn detect() -> Option<Self> {
        if ffi_keplr_exists() {
            Some(Self {})
        } else {
            log::debug!("window.keplr not found");
            None
        }
    }
}

#[async_trait(?Send)]
impl WalletProvider for Keplr {
    async fn enable(&self, chain_id: &ChainId) -> Result<()> {
        ffi_keplr_enable(chain_id.as_str())
            .await
            .map_err(|e| KeplrError::FailedEnable(js_error_message(&e)))?;

        Ok(())
    }

    fn get_offline_signer(&self, chain_id: &ChainId) -> Result<Box<dyn OfflineSigner>> {
        Ok(Box::new(KeplrOfflineSigner {
            chain_id: chain_id.clone(),
        }))
    }

    async fn experimental_suggest_chain(&self, chain_info: &KeplrChainInfo) -> Result<()> {
        // json_compatible so the flattened fee currency becomes a plain object, not a Map
        let serialized = chain_info
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
            .map_err(|e| KeplrError::Technical(e.to_string()))?;

        ffi_keplr_suggest_chain(&serialized)
            .await
            .map_err(|e| KeplrError::FailedSuggestChain(js_error_message(&e)))?;

        Ok(())
    }
}

pub struct KeplrOfflineSigner {
    pub chain_id: ChainId,
}

#[async_trait(?Send)]
impl OfflineSigner for KeplrOfflineSigner {
    async fn get_accounts(&self) -> Result<Vec<AccountData>> {
        let accounts = ffi_keplr_get_accounts(self.chain_id.as_str())
            .await
            .map_err(|e| KeplrError::NoSigner(js_error_message(&e)))?;

        serde_wasm_bindgen::from_value(accounts).map_err(|e| KeplrError::Technical(e.to_string()))
    }
}

fn js_error_message(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }

    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

#[wasm_bindgen(module = "/src/web/bindings.js")]
extern "C" {
    fn ffi_keplr_exists() -> bool;

    #[wasm_bindgen(catch)]
    async fn ffi_keplr_enable(chain_id: &str) -> std::result::Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn ffi_keplr_get_accounts(chain_id: &str) -> std::result::Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn ffi_keplr_suggest_chain(chain_info: &JsValue) -> std::result::Result<JsValue, JsValue>;
}
