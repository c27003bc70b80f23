use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(SiteHeader)]
pub fn site_header() -> Html {
    html! {
        <header class="site-header">
            <div class="header-content">
                <Link<Route> to={Route::Home} classes="brand">
                    <img class="logo" src="/assets/logo-horizon.svg" alt="Horizon" />
                    <span class="brand-name">{"Horizon"}</span>
                </Link<Route>>
                <nav class="site-nav">
                    <a href="/#accueil" class="nav-link">{"Accueil"}</a>
                    <a href="/#evenements" class="nav-link">{"Événements"}</a>
                    <a href="/#equipe" class="nav-link">{"Équipe"}</a>
                    <a href="/#contact" class="nav-link">{"Contact"}</a>
                </nav>
            </div>
            <style>
                {r#"
                    .site-header {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 20;
                        background: rgba(12, 16, 28, 0.85);
                        backdrop-filter: blur(8px);
                        border-bottom: 1px solid rgba(255, 255, 255, 0.08);
                    }

                    .header-content {
                        max-width: 1100px;
                        margin: 0 auto;
                        padding: 0.6rem 1.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }

                    .brand {
                        display: flex;
                        align-items: center;
                        gap: 0.6rem;
                        text-decoration: none;
                        color: #ffffff;
                    }

                    .brand .logo {
                        height: 40px;
                        width: auto;
                    }

                    .brand-name {
                        font-size: 1.1rem;
                        font-weight: 600;
                        letter-spacing: 0.04em;
                    }

                    .site-nav {
                        display: flex;
                        gap: 1.2rem;
                    }

                    .nav-link {
                        color: rgba(255, 255, 255, 0.8);
                        text-decoration: none;
                        font-size: 0.95rem;
                    }

                    .nav-link:hover {
                        color: #ffffff;
                    }

                    @media (max-width: 600px) {
                        .site-nav {
                            gap: 0.7rem;
                        }
                        .brand-name {
                            display: none;
                        }
                    }
                "#}
            </style>
        </header>
    }
}
