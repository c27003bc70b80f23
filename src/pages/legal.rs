use yew::prelude::*;
use yew_router::prelude::*;

use crate::motion::reveal::RevealController;
use crate::Route;

#[function_component(MentionsLegales)]
pub fn mentions_legales() -> Html {
    // The reveal effect runs site-wide; on this page none of its sections
    // exist, so the controller simply declines to install.
    {
        use_effect_with_deps(
            move |_| {
                let controller = web_sys::window()
                    .and_then(|window| window.document())
                    .and_then(|document| RevealController::install(&document));
                move || drop(controller)
            },
            (),
        );
    }

    html! {
        <div class="legal-page">
            <div class="legal-content">
                <h1>{"Mentions légales"}</h1>

                <h2>{"Éditeur"}</h2>
                <p>
                    {"Le site horizon-asso.fr est édité par l'association Horizon, \
                      association loi 1901 déclarée en préfecture, dont le siège se \
                      situe 12 rue des Peupliers."}
                </p>

                <h2>{"Directrice de la publication"}</h2>
                <p>{"Claire Fontaine, présidente de l'association."}</p>

                <h2>{"Hébergement"}</h2>
                <p>
                    {"Le site est hébergé par un prestataire établi dans l'Union \
                      européenne. Les journaux techniques du serveur sont conservés \
                      au maximum douze mois."}
                </p>

                <h2>{"Données personnelles"}</h2>
                <p>
                    {"Le site ne dépose aucun cookie et ne collecte aucune donnée de \
                      navigation. Les messages envoyés via le formulaire de contact \
                      servent uniquement à vous répondre et ne sont jamais transmis \
                      à des tiers."}
                </p>

                <p class="legal-back">
                    <Link<Route> to={Route::Home}>{"← Retour à l'accueil"}</Link<Route>>
                </p>
            </div>
            <style>
                {r#"
                    .legal-page {
                        min-height: 100vh;
                        background: #0c101c;
                        color: #ffffff;
                        padding: 8rem 1.5rem 4rem;
                    }

                    .legal-content {
                        max-width: 720px;
                        margin: 0 auto;
                    }

                    .legal-content h1 {
                        margin-bottom: 2rem;
                    }

                    .legal-content h2 {
                        margin-top: 2rem;
                        font-size: 1.2rem;
                    }

                    .legal-content p {
                        line-height: 1.7;
                        color: rgba(255, 255, 255, 0.85);
                    }

                    .legal-back {
                        margin-top: 3rem;
                    }

                    .legal-back a {
                        color: #8fb4ff;
                    }
                "#}
            </style>
        </div>
    }
}
