use keplr_connect_config::{ChainConfig, ChainId};
use keplr_connect_wallet::{mock::MockWallet, KeplrChainInfo, KeplrError, WalletProvider};

fn chain_id() -> ChainId {
    ChainId::new("humans_1089-1")
}

#[tokio::test]
async fn accounts_come_back_in_order() {
    let wallet = MockWallet::with_addresses(["human1first", "human1second"]);

    wallet.enable(&chain_id()).await.unwrap();
    let accounts = wallet
        .get_offline_signer(&chain_id())
        .unwrap()
        .get_accounts()
        .await
        .unwrap();

    let addresses: Vec<_> = accounts.iter().map(|a| a.address.as_str()).collect();
    assert_eq!(addresses, ["human1first", "human1second"]);
    assert_eq!(wallet.enabled_chains(), vec![chain_id()]);
}

#[tokio::test]
async fn rejected_enable_keeps_message() {
    let wallet = MockWallet::default().reject_enable("Request rejected");

    let err = wallet.enable(&chain_id()).await.unwrap_err();
    assert_eq!(err, KeplrError::FailedEnable("Request rejected".to_string()));
    assert_eq!(err.to_string(), "Request rejected");
    // the attempt is still recorded
    assert_eq!(wallet.enabled_chains().len(), 1);
}

#[tokio::test]
async fn reject_enable_once_recovers() {
    let wallet = MockWallet::with_addresses(["human1first"]).reject_enable_once("Request rejected");

    assert_eq!(
        wallet.enable(&chain_id()).await,
        Err(KeplrError::FailedEnable("Request rejected".to_string()))
    );
    assert_eq!(wallet.enable(&chain_id()).await, Ok(()));
    assert_eq!(wallet.enabled_chains().len(), 2);
}

#[tokio::test]
async fn suggested_chains_are_recorded() {
    let config = ChainConfig::load_str(
        r#"
        chain_id = "humans_1089-1"
        chain_name = "Humans"
        rpc_endpoint = "https://rpc.humans.example.com"
        address_prefix = "human"
        micro_denom = "aheart"
        coin_decimals = 18
        "#,
    )
    .unwrap();
    let info = KeplrChainInfo::try_from(&config).unwrap();

    let wallet = MockWallet::default();
    wallet.experimental_suggest_chain(&info).await.unwrap();
    assert_eq!(wallet.suggested_chains(), vec![info.clone()]);

    let wallet = MockWallet::default().reject_suggest_chain("unsupported");
    assert!(wallet.experimental_suggest_chain(&info).await.is_err());
    assert!(wallet.suggested_chains().is_empty());
}

#[test]
fn missing_extension_message() {
    assert_eq!(
        KeplrError::NoExist.to_string(),
        "Please install Keplr extension"
    );
}
