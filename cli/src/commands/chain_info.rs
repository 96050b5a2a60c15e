use anyhow::Result;
use keplr_connect::prelude::*;

pub fn run(config: &ChainConfig) -> Result<()> {
    let chain_info = KeplrChainInfo::try_from(config)?;
    println!("{}", serde_json::to_string_pretty(&chain_info)?);
    Ok(())
}
