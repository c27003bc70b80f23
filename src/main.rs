use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use wasm_bindgen::JsCast;

mod components {
    pub mod nav;
    pub mod sections;
}
mod motion {
    pub mod dock;
    pub mod ease;
    pub mod prefs;
    pub mod reveal;
}
mod pages {
    pub mod home;
    pub mod legal;
}

use components::nav::SiteHeader;
use pages::{home::Home, legal::MentionsLegales};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/mentions-legales")]
    MentionsLegales,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Accueil page");
            html! { <Home /> }
        }
        Route::MentionsLegales => {
            info!("Rendering Mentions légales page");
            html! { <MentionsLegales /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    // Background parallax stays disabled; pin the offset the stylesheet reads.
    {
        use_effect_with_deps(
            move |_| {
                if let Some(root) = web_sys::window()
                    .and_then(|window| window.document())
                    .and_then(|document| document.document_element())
                {
                    if let Some(root) = root.dyn_ref::<web_sys::HtmlElement>() {
                        let _ = root.style().set_property("--bg-shift", "0px");
                    }
                }
                || ()
            },
            (),
        );
    }

    html! {
        <BrowserRouter>
            <SiteHeader />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
