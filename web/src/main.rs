use dioxus::prelude::*;

use ui::components::AppNavbar;
use ui::core::config::DashboardConfig;
use ui::data::FilterSelection;
use ui::views::Dashboard;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Dashboard {},
}

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    use_context_provider(DashboardConfig::default);
    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);
    // Filters outlive the language remount.
    let filters = use_signal(|| None::<FilterSelection>);
    use_context_provider(|| filters);

    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        // Keyed on the language so a switch remounts every translated view.
        div {
            key: "{lang_code()}",
            Router::<Route> {}
        }
    }
}

/// Web layout: shared navbar above the routed page.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar {}
        Outlet::<Route> {}
    }
}
