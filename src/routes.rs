//! Application routing configuration.

use dioxus::prelude::*;

use crate::views::{NotFound, TravelGroup};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/travelgroups/:group_id")]
    TravelGroup { group_id: i64 },

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
