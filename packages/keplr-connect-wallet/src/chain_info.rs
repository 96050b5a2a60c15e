use keplr_connect_config::{ChainConfig, ChainId, GasPriceStep};
use serde::{Deserialize, Serialize};

use crate::error::{KeplrError, Result};

/// The descriptor handed to `keplr.experimentalSuggestChain`.
/// Field names follow Keplr's `ChainInfo` shape.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct KeplrChainInfo {
    pub chain_id: ChainId,
    pub chain_name: String,
    pub rpc: String,
    pub rest: String,
    pub bip44: Bip44,
    pub bech32_config: Bech32Config,
    pub currencies: Vec<Currency>,
    pub fee_currencies: Vec<FeeCurrency>,
    pub stake_currency: Currency,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Bip44 {
    pub coin_type: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Bech32Config {
    pub bech32_prefix_acc_addr: String,
    pub bech32_prefix_acc_pub: String,
    pub bech32_prefix_val_addr: String,
    pub bech32_prefix_val_pub: String,
    pub bech32_prefix_cons_addr: String,
    pub bech32_prefix_cons_pub: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Currency {
    pub coin_denom: String,
    pub coin_minimal_denom: String,
    pub coin_decimals: u8,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FeeCurrency {
    #[serde(flatten)]
    pub currency: Currency,
    pub gas_price_step: GasPriceStep,
}

impl TryFrom<&ChainConfig> for KeplrChainInfo {
    type Error = KeplrError;

    fn try_from(config: &ChainConfig) -> Result<Self> {
        let rest = config
            .rest_endpoint()
            .map_err(|e| KeplrError::Technical(e.to_string()))?;

        let prefixes = config.bech32_prefixes();

        let currency = Currency {
            coin_denom: config.coin_denom.clone(),
            coin_minimal_denom: config.micro_denom.clone(),
            coin_decimals: config.coin_decimals,
        };

        Ok(Self {
            chain_id: config.chain_id.clone(),
            chain_name: config.chain_name.clone(),
            rpc: config.rpc_endpoint.clone(),
            rest,
            bip44: Bip44 {
                coin_type: config.coin_type,
            },
            bech32_config: Bech32Config {
                bech32_prefix_acc_addr: prefixes.account_address,
                bech32_prefix_acc_pub: prefixes.account_public,
                bech32_prefix_val_addr: prefixes.validator_address,
                bech32_prefix_val_pub: prefixes.validator_public,
                bech32_prefix_cons_addr: prefixes.consensus_address,
                bech32_prefix_cons_pub: prefixes.consensus_public,
            },
            currencies: vec![currency.clone()],
            fee_currencies: vec![FeeCurrency {
                currency: currency.clone(),
                gas_price_step: config.gas_price_step,
            }],
            stake_currency: currency,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    fn config() -> ChainConfig {
        ChainConfig::load_str(
            r#"
            chain_id = "humans_1089-1"
            chain_name = "Humans"
            rpc_endpoint = "https://rpc.humans.example.com"
            rest_endpoint = "https://api.humans.example.com"
            address_prefix = "human"
            micro_denom = "aheart"
            coin_decimals = 18
            "#,
        )
        .unwrap()
    }

    #[test]
    fn serializes_to_keplr_shape() {
        let info = KeplrChainInfo::try_from(&config()).unwrap();
        let value = serde_json::to_value(&info).unwrap();

        let currency = json!({
            "coinDenom": "HEART",
            "coinMinimalDenom": "aheart",
            "coinDecimals": 18,
        });

        assert_eq!(
            value,
            json!({
                "chainId": "humans_1089-1",
                "chainName": "Humans",
                "rpc": "https://rpc.humans.example.com",
                "rest": "https://api.humans.example.com",
                "bip44": { "coinType": 118 },
                "bech32Config": {
                    "bech32PrefixAccAddr": "human",
                    "bech32PrefixAccPub": "humanpub",
                    "bech32PrefixValAddr": "humanvaloper",
                    "bech32PrefixValPub": "humanvaloperpub",
                    "bech32PrefixConsAddr": "humanvalcons",
                    "bech32PrefixConsPub": "humanvalconspub",
                },
                "currencies": [currency.clone()],
                "feeCurrencies": [{
                    "coinDenom": "HEART",
                    "coinMinimalDenom": "aheart",
                    "coinDecimals": 18,
                    "gasPriceStep": { "low": 0.025, "average": 0.03, "high": 0.04 },
                }],
                "stakeCurrency": currency,
            })
        );
    }

    #[test]
    fn rest_derived_from_rpc() {
        let mut config = config();
        config.rest_endpoint = None;

        let info = KeplrChainInfo::try_from(&config).unwrap();
        assert_eq!(info.rest, "https://rpc.humans.example.com:1317/");
    }
}
