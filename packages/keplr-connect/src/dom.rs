use std::sync::{Arc, LazyLock};

use dominator::{class, clone, events, html, Dom};
use futures_signals::signal::SignalExt;
use keplr_connect_config::{ChainConfig, ConfigError};
use keplr_connect_wallet::{Keplr, WalletProvider};
use wasm_bindgen_futures::spawn_local;

use crate::{
    connect::WalletConnect,
    store::UserInfoStore,
    view::{format_address, CONNECTING_LABEL, CONNECT_LABEL, DISCONNECT_LABEL},
};

/// Installs browser logging, looks for the extension and mounts the component on `<body>`.
/// The returned store is shared with the component.
pub fn start(config: ChainConfig) -> UserInfoStore {
    wasm_logger::init(wasm_logger::Config::default());
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));

    let wallet = Keplr::detect().map(|keplr| Arc::new(keplr) as Arc<dyn WalletProvider>);
    let store = UserInfoStore::default();

    let component = Arc::new(WalletConnect::new(config, wallet, store.clone()));
    dominator::append_dom(&dominator::body(), component.render());

    store
}

/// Same as [`start`] with a JSON config, e.g. `start_json(include_str!("../chain.json"))`
pub fn start_json(config: &str) -> Result<UserInfoStore, ConfigError> {
    Ok(start(ChainConfig::from_json_str(config)?))
}

static CONTAINER: LazyLock<String> = LazyLock::new(|| {
    class! {
        .style("display", "flex")
        .style("flex-direction", "column")
        .style("align-items", "flex-end")
        .style("gap", "0.5rem")
    }
});

static BUTTON: LazyLock<String> = LazyLock::new(|| {
    class! {
        .style("padding", "0.5rem 1rem")
        .style("border", "none")
        .style("border-radius", "8px")
        .style("font-weight", "600")
        .style("cursor", "pointer")
        .style("color", "#ffffff")
    }
});

static CONNECT_BUTTON: LazyLock<String> = LazyLock::new(|| {
    class! {
        .style("background-color", "#e1306c")
    }
});

static DISCONNECT_BUTTON: LazyLock<String> = LazyLock::new(|| {
    class! {
        .style("background-color", "#444444")
    }
});

static WALLET_INFO: LazyLock<String> = LazyLock::new(|| {
    class! {
        .style("display", "flex")
        .style("align-items", "center")
        .style("gap", "0.75rem")
    }
});

static ADDRESS: LazyLock<String> = LazyLock::new(|| {
    class! {
        .style("font-family", "monospace")
    }
});

static ERROR_MESSAGE: LazyLock<String> = LazyLock::new(|| {
    class! {
        .style("color", "#d32f2f")
        .style("margin", "0")
        .style("font-size", "0.875rem")
    }
});

impl WalletConnect<UserInfoStore> {
    pub fn render(self: Arc<Self>) -> Dom {
        let state = self;

        html!("div", {
            .class(&*CONTAINER)
            // mount-time chain registration, dropped with the element
            .future(clone!(state => async move {
                state.register_chain().await;
            }))
            .child_signal(state.store.signal().map(clone!(state => move |user_info| {
                Some(if user_info.connected {
                    state.render_wallet_info(&user_info.address)
                } else {
                    state.render_connect_button()
                })
            })))
            .child_signal(state.error_signal().map(|error| {
                (!error.is_empty()).then(|| {
                    html!("p", {
                        .class(&*ERROR_MESSAGE)
                        .text(&error)
                    })
                })
            }))
        })
    }

    fn render_connect_button(self: &Arc<Self>) -> Dom {
        let state = self;

        html!("button", {
            .class([&*BUTTON, &*CONNECT_BUTTON])
            .prop_signal("disabled", state.is_loading_signal())
            .text_signal(state.is_loading_signal().map(|is_loading| {
                if is_loading { CONNECTING_LABEL } else { CONNECT_LABEL }
            }))
            .event(clone!(state => move |_: events::Click| {
                spawn_local(clone!(state => async move {
                    // the error is already recorded for rendering
                    let _ = state.connect().await;
                }));
            }))
        })
    }

    fn render_wallet_info(self: &Arc<Self>, address: &str) -> Dom {
        let state = self;

        html!("div", {
            .class(&*WALLET_INFO)
            .children([
                html!("span", {
                    .class(&*ADDRESS)
                    .text(&format_address(address))
                }),
                html!("button", {
                    .class([&*BUTTON, &*DISCONNECT_BUTTON])
                    .text(DISCONNECT_LABEL)
                    .event(clone!(state => move |_: events::Click| {
                        state.disconnect();
                    }))
                }),
            ])
        })
    }
}
