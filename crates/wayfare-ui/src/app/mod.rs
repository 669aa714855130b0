//! Demo shell that renders every link flavour under a router.

use crate::components::Link;
use crate::core::anchor::RouterLinkOptions;
use crate::core::target::{LocationDescriptor, NavigationTarget};
use gloo::console;
use routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

mod routes;

#[function_component(WayfareApp)]
fn wayfare_app() -> Html {
    html! {
        <BrowserRouter>
            <div class="flex flex-col gap-6 p-6">
                <LinkGallery />
                <main class="card bg-base-200 p-4">
                    <Switch<Route> render={switch} />
                </main>
            </div>
        </BrowserRouter>
    }
}

#[function_component(LinkGallery)]
fn link_gallery() -> Html {
    let search = LocationDescriptor::new("/search")
        .with_search("?q=ubuntu")
        .with_state(serde_json::json!({ "from": "gallery" }));
    let parent_click = Callback::from(|_: MouseEvent| console::log!("gallery row clicked"));
    let custom = Callback::from(|_: MouseEvent| console::log!("custom link handler"));
    let settings_options = RouterLinkOptions {
        replace: true,
        class: Some("btn btn-ghost btn-sm".into()),
        ..RouterLinkOptions::default()
    };

    html! {
        <nav class="flex flex-wrap items-center gap-4" onclick={parent_click}>
            <Link to={NavigationTarget::from("/dashboard")}>{"Dashboard"}</Link>
            <Link to={NavigationTarget::from(search)}>{"Search ubuntu"}</Link>
            <Link to={NavigationTarget::from("/settings")} link_props={settings_options}>
                {"Settings"}
            </Link>
            <Link to={NavigationTarget::from("https://yew.rs")} natural_link=true>
                {"Yew docs"}
            </Link>
            <Link to={NavigationTarget::from("https://github.com/yewstack/yew")} new_tab=true>
                {"Yew on GitHub"}
            </Link>
            <Link to={NavigationTarget::from("https://example.com")} onclick={custom}>
                {"Custom handler"}
            </Link>
            <Link to={NavigationTarget::from("/dashboard")} stop_propagation=true>
                {"Dashboard (no bubbling)"}
            </Link>
        </nav>
    }
}

#[allow(clippy::needless_pass_by_value)]
fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <h1 class="text-xl">{"Home"}</h1> },
        Route::Dashboard => html! { <h1 class="text-xl">{"Dashboard"}</h1> },
        Route::Search => html! { <SearchPage /> },
        Route::Settings => html! { <h1 class="text-xl">{"Settings"}</h1> },
        Route::NotFound => html! {
            <div>
                <h1 class="text-xl">{"Not found"}</h1>
                <Link to={NavigationTarget::from("/")}>{"Back home"}</Link>
            </div>
        },
    }
}

#[function_component(SearchPage)]
fn search_page() -> Html {
    let query = use_location()
        .map(|location| location.query_str().to_string())
        .unwrap_or_default();
    html! { <h1 class="text-xl">{format!("Search {query}")}</h1> }
}

/// Mounts the demo app on `#root`, or on `<body>` when absent.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<WayfareApp>::with_root(root).render();
    } else {
        yew::Renderer::<WayfareApp>::new().render();
    }
}
