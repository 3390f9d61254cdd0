use dioxus::prelude::*;

use crate::data_definitions::explorer_url_state::ExplorerUrlState;
use crate::data_definitions::url_param::UrlParam;
use crate::pages::explorer_page::ExplorerPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[redirect("/", || Route::explorer_page(ExplorerUrlState::default()))]


    #[route("/explore/:state")]
    ExplorerPage { state: UrlParam<ExplorerUrlState> },

}

impl Route {
    pub fn explorer_page(state: ExplorerUrlState) -> Self {
        Self::ExplorerPage {
            state: UrlParam::from(state),
        }
    }
}
