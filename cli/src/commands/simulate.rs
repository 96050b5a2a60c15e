use std::sync::Arc;

use anyhow::Result;
use keplr_connect::prelude::*;

pub struct SimulateOpts {
    pub accounts: Vec<String>,
    pub reject: Option<String>,
    pub no_wallet: bool,
    pub disconnect: bool,
}

pub async fn run(config: ChainConfig, opts: SimulateOpts) -> Result<()> {
    let wallet = (!opts.no_wallet).then(|| {
        let wallet = MockWallet::with_addresses(opts.accounts);
        let wallet = match opts.reject {
            Some(message) => wallet.reject_enable(message),
            None => wallet,
        };
        Arc::new(wallet) as Arc<dyn WalletProvider>
    });

    let component = WalletConnect::new(config, wallet, UserInfoStore::default());

    component.register_chain().await;
    tracing::info!("initial view:\n{}", component.view());

    match component.connect().await {
        Ok(user_info) => tracing::info!("connected {} on {}", user_info.address, user_info.chain_id),
        Err(err) => tracing::warn!("connect failed: {err}"),
    }
    tracing::info!("after connect:\n{}", component.view());

    if opts.disconnect {
        component.disconnect();
        tracing::info!("after disconnect:\n{}", component.view());
    }

    println!("{}", serde_json::to_string_pretty(&component.store.get_state())?);

    Ok(())
}
