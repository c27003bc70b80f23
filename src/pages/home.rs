use yew::prelude::*;

use crate::components::sections::{Accueil, Contact, Equipe, Evenements, Reseau};
use crate::motion::dock::HeroDockController;
use crate::motion::reveal::RevealController;

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    // Mount the scroll effects once the page markup is in the document.
    {
        use_effect_with_deps(
            move |_| {
                let controllers = web_sys::window()
                    .and_then(|window| window.document())
                    .map(|document| {
                        (
                            RevealController::install(&document),
                            HeroDockController::install(&document),
                        )
                    });
                move || drop(controllers)
            },
            (),
        );
    }

    html! {
        <div class="landing-page">
            <section class="hero" id="hero-logo">
                <img class="hero-img" src="/assets/logo-horizon.svg" alt="Logo Horizon" />
                <p class="hero-slogan">{"Ensemble, au-delà de l'horizon"}</p>
            </section>

            <Accueil />
            <Evenements />
            <Equipe />
            <Contact />
            <Reseau />

            <style>
                {r#"
                    .landing-page {
                        min-height: 100vh;
                        color: #ffffff;
                        background: linear-gradient(
                            180deg,
                            #0c101c 0%,
                            #131a2c 55%,
                            #0c101c 100%
                        );
                        background-position-y: var(--bg-shift, 0px);
                    }

                    .hero {
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        gap: 1.5rem;
                    }

                    .hero-img {
                        height: min(42vh, 340px);
                        width: auto;
                        transform: translate(var(--hero-tx, 0px), var(--hero-ty, 0px))
                            scale(var(--hero-scale, 1));
                        transform-origin: center center;
                        will-change: transform;
                    }

                    .hero-slogan {
                        font-size: 1.4rem;
                        letter-spacing: 0.06em;
                        color: rgba(255, 255, 255, 0.85);
                    }

                    .hero-hidden {
                        visibility: hidden;
                        pointer-events: none;
                    }

                    /* Revealable content starts offset and fades into place;
                       the per-element delay is set inline by the controller. */
                    .reveal {
                        opacity: 0;
                        transform: translateY(18px);
                        transition: opacity 0.6s ease, transform 0.6s ease;
                    }

                    .reveal.is-visible {
                        opacity: 1;
                        transform: none;
                    }

                    .page-section {
                        padding: 5rem 1.5rem;
                    }

                    .container {
                        max-width: 900px;
                        margin: 0 auto;
                    }

                    .container h2 {
                        font-size: 2rem;
                        margin-bottom: 1rem;
                    }

                    .container p {
                        line-height: 1.7;
                        color: rgba(255, 255, 255, 0.85);
                    }

                    .events,
                    .team {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                        gap: 1.2rem;
                        margin-top: 1.5rem;
                    }

                    .event,
                    .member {
                        background: rgba(255, 255, 255, 0.05);
                        border: 1px solid rgba(255, 255, 255, 0.08);
                        border-radius: 12px;
                        padding: 1.2rem;
                    }

                    .event-date {
                        color: #8fb4ff;
                        font-size: 0.9rem;
                    }

                    .member-role {
                        color: rgba(255, 255, 255, 0.6);
                        font-size: 0.9rem;
                    }

                    .contact-form {
                        margin-top: 1.5rem;
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                        max-width: 480px;
                    }

                    .form-field {
                        display: flex;
                        flex-direction: column;
                        gap: 0.3rem;
                    }

                    .form-field input,
                    .form-field textarea {
                        background: rgba(255, 255, 255, 0.07);
                        border: 1px solid rgba(255, 255, 255, 0.15);
                        border-radius: 8px;
                        padding: 0.6rem 0.8rem;
                        color: #ffffff;
                    }

                    .submit-button {
                        align-self: flex-start;
                        background: #3d6fe0;
                        color: #ffffff;
                        border: none;
                        border-radius: 8px;
                        padding: 0.7rem 1.6rem;
                        cursor: pointer;
                    }

                    .submit-button:hover {
                        background: #5584ea;
                    }

                    .partners {
                        max-width: 900px;
                        margin: 1.5rem auto 0;
                    }

                    .partners ul {
                        list-style: none;
                        padding: 0;
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem;
                    }

                    .partners a {
                        color: #8fb4ff;
                        text-decoration: none;
                        border: 1px solid rgba(143, 180, 255, 0.4);
                        border-radius: 999px;
                        padding: 0.4rem 1rem;
                        display: inline-block;
                    }

                    .partners a:hover {
                        border-color: #8fb4ff;
                    }
                "#}
            </style>
        </div>
    }
}
