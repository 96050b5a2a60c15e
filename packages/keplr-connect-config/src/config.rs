use serde::{Deserialize, Serialize};
use std::{
    fmt::{Debug, Display},
    path::Path,
    str::FromStr,
};

use crate::{
    error::{ConfigError, Result},
    util::{check_url, set_port_in_url},
};

/// Static description of the chain the wallet is asked to register and enable.
///
/// Loaded from TOML (native) or JSON (browser builds embed it with `include_str!`),
/// then optionally overlaid from environment variables via [`ChainConfig::apply_env`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ChainConfig {
    pub chain_id: ChainId,
    pub chain_name: String,
    pub rpc_endpoint: String,
    /// if not set, the rpc endpoint is used with the port changed to 1317
    #[serde(default)]
    pub rest_endpoint: Option<String>,
    /// bech32 human-readable part for account addresses, e.g. "human"
    pub address_prefix: String,
    pub micro_denom: String,
    #[serde(default = "default_coin_denom")]
    pub coin_denom: String,
    pub coin_decimals: u8,
    #[serde(default = "default_coin_type")]
    pub coin_type: u32,
    #[serde(default)]
    pub gas_price_step: GasPriceStep,
}

fn default_coin_denom() -> String {
    "HEART".to_string()
}

fn default_coin_type() -> u32 {
    118
}

/// not micro-units, e.g. 0.025 would be a typical value
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct GasPriceStep {
    pub low: f64,
    pub average: f64,
    pub high: f64,
}

impl Default for GasPriceStep {
    fn default() -> Self {
        Self {
            low: 0.025,
            average: 0.03,
            high: 0.04,
        }
    }
}

/// The six bech32 prefixes a Cosmos SDK chain uses, all derived from the account prefix
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Bech32Prefixes {
    pub account_address: String,
    pub account_public: String,
    pub validator_address: String,
    pub validator_public: String,
    pub consensus_address: String,
    pub consensus_public: String,
}

impl Bech32Prefixes {
    pub fn from_account_prefix(prefix: &str) -> Self {
        Self {
            account_address: prefix.to_string(),
            account_public: format!("{prefix}pub"),
            validator_address: format!("{prefix}valoper"),
            validator_public: format!("{prefix}valoperpub"),
            consensus_address: format!("{prefix}valcons"),
            consensus_public: format!("{prefix}valconspub"),
        }
    }
}

impl ChainConfig {
    pub fn load_sync(path: impl AsRef<Path>) -> Result<Self> {
        Self::load_str(&std::fs::read_to_string(path)?)
    }

    pub fn load_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.chain_id.is_empty() {
            return Err(ConfigError::MissingField("chain_id".to_string()));
        }
        if self.address_prefix.is_empty() {
            return Err(ConfigError::MissingField("address_prefix".to_string()));
        }
        if self.micro_denom.is_empty() {
            return Err(ConfigError::MissingField("micro_denom".to_string()));
        }
        check_url("rpc_endpoint", &self.rpc_endpoint)?;
        if let Some(rest_endpoint) = &self.rest_endpoint {
            check_url("rest_endpoint", rest_endpoint)?;
        }
        Ok(())
    }

    pub fn rest_endpoint(&self) -> Result<String> {
        match &self.rest_endpoint {
            Some(endpoint) => Ok(endpoint.clone()),
            None => set_port_in_url(&self.rpc_endpoint, 1317),
        }
    }

    pub fn bech32_prefixes(&self) -> Bech32Prefixes {
        Bech32Prefixes::from_account_prefix(&self.address_prefix)
    }

    /// Overwrites fields from environment variables named `{prefix}{FIELD}`,
    /// e.g. with prefix `KEPLR_CONNECT_` the chain id comes from `KEPLR_CONNECT_CHAIN_ID`.
    /// Unset variables are ignored, unparsable numeric values are an error.
    pub fn apply_env(&mut self, prefix: &str) -> Result<()> {
        let var = |name: &str| std::env::var(format!("{prefix}{name}")).ok();

        if let Some(chain_id) = var("CHAIN_ID") {
            self.chain_id = ChainId::new(chain_id);
        }

        if let Some(chain_name) = var("CHAIN_NAME") {
            self.chain_name = chain_name;
        }

        if let Some(rpc_endpoint) = var("RPC_ENDPOINT") {
            self.rpc_endpoint = rpc_endpoint;
        }

        if let Some(rest_endpoint) = var("REST_ENDPOINT") {
            self.rest_endpoint = Some(rest_endpoint);
        }

        if let Some(address_prefix) = var("ADDRESS_PREFIX") {
            self.address_prefix = address_prefix;
        }

        if let Some(micro_denom) = var("MICRO_DENOM") {
            self.micro_denom = micro_denom;
        }

        if let Some(coin_denom) = var("COIN_DENOM") {
            self.coin_denom = coin_denom;
        }

        if let Some(coin_decimals) = var("COIN_DECIMALS") {
            self.coin_decimals = coin_decimals
                .trim()
                .parse()
                .map_err(|_| ConfigError::invalid_env(format!("{prefix}COIN_DECIMALS"), coin_decimals))?;
        }

        if let Some(coin_type) = var("COIN_TYPE") {
            self.coin_type = coin_type
                .trim()
                .parse()
                .map_err(|_| ConfigError::invalid_env(format!("{prefix}COIN_TYPE"), coin_type))?;
        }

        self.validate()
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[serde(transparent)]
pub struct ChainId(String);
impl ChainId {
    pub fn new(id: impl ToString) -> Self {
        Self(id.to_string())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromStr for ChainId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl Display for ChainId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const HUMANS_TOML: &str = r#"
        chain_id = "humans_1089-1"
        chain_name = "Humans"
        rpc_endpoint = "https://rpc.humans.example.com:26657"
        address_prefix = "human"
        micro_denom = "aheart"
        coin_decimals = 18
    "#;

    #[test]
    fn toml_defaults() {
        let config = ChainConfig::load_str(HUMANS_TOML).unwrap();

        assert_eq!(config.chain_id.as_str(), "humans_1089-1");
        assert_eq!(config.coin_denom, "HEART");
        assert_eq!(config.coin_type, 118);
        assert_eq!(config.gas_price_step, GasPriceStep::default());
        assert_eq!(config.gas_price_step.low, 0.025);
        assert_eq!(config.gas_price_step.average, 0.03);
        assert_eq!(config.gas_price_step.high, 0.04);
    }

    #[test]
    fn rest_endpoint_falls_back_to_rpc_port_1317() {
        let mut config = ChainConfig::load_str(HUMANS_TOML).unwrap();
        assert_eq!(
            config.rest_endpoint().unwrap(),
            "https://rpc.humans.example.com:1317/"
        );

        config.rest_endpoint = Some("https://api.humans.example.com".to_string());
        assert_eq!(
            config.rest_endpoint().unwrap(),
            "https://api.humans.example.com"
        );
    }

    #[test]
    fn bech32_prefixes() {
        let prefixes = Bech32Prefixes::from_account_prefix("human");
        assert_eq!(prefixes.account_address, "human");
        assert_eq!(prefixes.account_public, "humanpub");
        assert_eq!(prefixes.validator_address, "humanvaloper");
        assert_eq!(prefixes.validator_public, "humanvaloperpub");
        assert_eq!(prefixes.consensus_address, "humanvalcons");
        assert_eq!(prefixes.consensus_public, "humanvalconspub");
    }

    #[test]
    fn json_matches_toml() {
        let json = r#"{
            "chain_id": "humans_1089-1",
            "chain_name": "Humans",
            "rpc_endpoint": "https://rpc.humans.example.com:26657",
            "address_prefix": "human",
            "micro_denom": "aheart",
            "coin_decimals": 18
        }"#;

        assert_eq!(
            ChainConfig::from_json_str(json).unwrap(),
            ChainConfig::load_str(HUMANS_TOML).unwrap()
        );
    }

    #[test]
    fn validate_rejects_missing_pieces() {
        let mut config = ChainConfig::load_str(HUMANS_TOML).unwrap();
        config.address_prefix = String::new();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MissingField(field)) if field == "address_prefix"
        ));

        let mut config = ChainConfig::load_str(HUMANS_TOML).unwrap();
        config.rpc_endpoint = "nowhere".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn env_overrides() {
        // unique prefix so parallel tests never see these vars
        let prefix = "KEPLR_CONNECT_TEST_ENV_OVERRIDES_";
        std::env::set_var(format!("{prefix}CHAIN_ID"), "humans_4139-1");
        std::env::set_var(format!("{prefix}COIN_DECIMALS"), "6");

        let mut config = ChainConfig::load_str(HUMANS_TOML).unwrap();
        config.apply_env(prefix).unwrap();

        assert_eq!(config.chain_id.as_str(), "humans_4139-1");
        assert_eq!(config.coin_decimals, 6);
        assert_eq!(config.chain_name, "Humans");
    }

    #[test]
    fn env_override_bad_number() {
        let prefix = "KEPLR_CONNECT_TEST_ENV_BAD_NUMBER_";
        std::env::set_var(format!("{prefix}COIN_TYPE"), "sixty");

        let mut config = ChainConfig::load_str(HUMANS_TOML).unwrap();
        assert!(matches!(
            config.apply_env(prefix),
            Err(ConfigError::InvalidEnvVar { .. })
        ));
    }
}
