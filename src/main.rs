use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod accessibility;
mod content;
mod motion;

mod components {
    pub mod button;
    pub mod card;
    pub mod icon;
}

mod pages {
    pub mod landing;
    pub mod login;
}

use accessibility::AccessibilityProvider;
use pages::landing::Landing;
use pages::login::{CaregiverLogin, ElderLogin, SignIn};

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    SignIn,
    #[at("/elder-login")]
    ElderLogin,
    #[at("/caregiver-login")]
    CaregiverLogin,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        }
        Route::SignIn => {
            info!("Rendering SignIn page");
            html! { <SignIn /> }
        }
        Route::ElderLogin => {
            info!("Rendering ElderLogin page");
            html! { <ElderLogin /> }
        }
        Route::CaregiverLogin => {
            info!("Rendering CaregiverLogin page");
            html! { <CaregiverLogin /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <AccessibilityProvider>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </AccessibilityProvider>
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
