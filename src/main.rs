//! Travel groups - main entry point
//!
//! Supports both web (WASM) and desktop platforms.

#![allow(non_snake_case)]

use dioxus::prelude::*;
use travelgroups::{logging, ClientConfig, Route, TravelogueApiHandle};

const MAIN_CSS: Asset = asset!("/assets/styling/travelgroups.css");

fn main() {
    logging::init();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_context_provider(ClientConfig::from_env);
    use_context_provider(|| TravelogueApiHandle::from_config(&config));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}
