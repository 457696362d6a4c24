//! Navigation targets for the landing CTAs. Authentication itself is handled
//! elsewhere; these pages only give each route a stable destination.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::icon::{Icon, IconGlyph};
use crate::Route;

#[derive(Properties, PartialEq)]
struct PortalProps {
    title: AttrValue,
    blurb: AttrValue,
    icon: Icon,
}

#[function_component(Portal)]
fn portal(props: &PortalProps) -> Html {
    html! {
        <div class="portal-page">
            <div class="portal-card">
                <div class="portal-icon">
                    <IconGlyph icon={props.icon} size={48} />
                </div>
                <h1>{props.title.clone()}</h1>
                <p>{props.blurb.clone()}</p>
                <Link<Route> to={Route::Home} classes="portal-back">
                    {"Back to home"}
                </Link<Route>>
            </div>
            <style>
                {r#"
.portal-page {
    min-height: 100vh;
    display: flex;
    align-items: center;
    justify-content: center;
    background: linear-gradient(135deg, #eff6ff 0%, #f0fdf4 100%);
    padding: 2rem 1rem;
}

.portal-card {
    background: #ffffff;
    border: 1px solid #e5e7eb;
    border-radius: 1rem;
    box-shadow: 0 10px 25px rgba(0, 0, 0, 0.08);
    padding: 3rem;
    max-width: 480px;
    text-align: center;
}

.portal-icon {
    color: #2563eb;
    margin-bottom: 1.5rem;
}

.portal-card h1 {
    font-size: 2rem;
    margin: 0 0 1rem;
    color: #111827;
}

.portal-card p {
    color: #4b5563;
    font-size: 1.15rem;
    line-height: 1.6;
    margin: 0 0 2rem;
}

.portal-back {
    color: #2563eb;
    font-weight: 600;
    text-decoration: none;
}

.portal-back:hover {
    text-decoration: underline;
}
                "#}
            </style>
        </div>
    }
}

#[function_component(SignIn)]
pub fn sign_in() -> Html {
    html! {
        <Portal
            title="Sign In"
            blurb="Family account sign-in. This demo build does not include live authentication."
            icon={Icon::Shield}
        />
    }
}

#[function_component(ElderLogin)]
pub fn elder_login() -> Html {
    html! {
        <Portal
            title="Welcome Back"
            blurb="Your companion is ready to help you remember. A caregiver can help you sign in the first time."
            icon={Icon::Heart}
        />
    }
}

#[function_component(CaregiverLogin)]
pub fn caregiver_login() -> Html {
    html! {
        <Portal
            title="Caregiver Sign In"
            blurb="Manage family photos, reminders, and emergency contacts for your loved one."
            icon={Icon::Users}
        />
    }
}
