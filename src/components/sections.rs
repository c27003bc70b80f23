//! Landing page sections. The reveal effect keys off the section ids and
//! the `.container`/`.events`/`.team` markup, so the structure here and the
//! extraction table in `motion::reveal` move together.

use yew::prelude::*;

const EVENTS: &[(&str, &str, &str)] = &[
    (
        "Café-rencontre du quartier",
        "Samedi 14 mars · 10h",
        "Un moment convivial ouvert à toutes et tous pour faire connaissance autour d'un café et imaginer les prochains projets du quartier.",
    ),
    (
        "Atelier réparation vélo",
        "Dimanche 22 mars · 14h",
        "Venez apprendre à entretenir votre vélo avec nos bénévoles. Outils et bonne humeur fournis, pièces à prix libre.",
    ),
    (
        "Fête de l'horizon",
        "Samedi 6 juin · 18h",
        "Notre grande soirée annuelle : concerts, cuisine partagée et retour en images sur une année d'actions collectives.",
    ),
];

const MEMBERS: &[(&str, &str)] = &[
    ("Claire Fontaine", "Présidente"),
    ("Karim Benali", "Trésorier"),
    ("Lucie Morel", "Secrétaire"),
    ("Antoine Weber", "Coordinateur bénévoles"),
];

const PARTNERS: &[(&str, &str)] = &[
    ("Maison des associations", "https://example.org/maison-des-associations"),
    ("Collectif Vélo Nord", "https://example.org/collectif-velo"),
    ("Les Jardins Partagés", "https://example.org/jardins-partages"),
    ("Radio Quartier Libre", "https://example.org/radio-quartier"),
];

#[function_component(Accueil)]
pub fn accueil() -> Html {
    html! {
        <section id="accueil" class="page-section">
            <div class="container">
                <h2>{"L'association"}</h2>
                <p>
                    {"Horizon rassemble les habitantes et habitants du quartier autour \
                      de projets simples : se rencontrer, s'entraider et faire vivre \
                      les espaces communs."}
                </p>
                <p>
                    {"Née en 2019 d'un groupe de voisins, l'association compte \
                      aujourd'hui une centaine d'adhérents et organise des événements \
                      toute l'année, ouverts à toutes et tous."}
                </p>
            </div>
        </section>
    }
}

#[function_component(Evenements)]
pub fn evenements() -> Html {
    html! {
        <section id="evenements" class="page-section">
            <div class="container">
                <h2>{"Événements"}</h2>
                <div class="events">
                    {
                        EVENTS.iter().map(|(title, date, description)| html! {
                            <article class="event">
                                <h3>{*title}</h3>
                                <p class="event-date">{*date}</p>
                                <p>{*description}</p>
                            </article>
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}

#[function_component(Equipe)]
pub fn equipe() -> Html {
    html! {
        <section id="equipe" class="page-section">
            <div class="container">
                <h2>{"L'équipe"}</h2>
                <div class="team">
                    {
                        MEMBERS.iter().map(|(name, role)| html! {
                            <div class="member">
                                <h3>{*name}</h3>
                                <p class="member-role">{*role}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <section id="contact" class="page-section">
            <div class="container">
                <h2>{"Contact"}</h2>
                <p>
                    {"Une question, une idée, envie de rejoindre l'aventure ? \
                      Écrivez-nous, nous répondons sous quelques jours."}
                </p>
                <form class="contact-form" action="mailto:bonjour@horizon-asso.fr" method="post" enctype="text/plain">
                    <div class="form-field">
                        <label for="contact-name">{"Nom"}</label>
                        <input id="contact-name" name="nom" type="text" autocomplete="name" />
                    </div>
                    <div class="form-field">
                        <label for="contact-email">{"Email"}</label>
                        <input id="contact-email" name="email" type="email" autocomplete="email" />
                    </div>
                    <div class="form-field">
                        <label for="contact-message">{"Message"}</label>
                        <textarea id="contact-message" name="message" rows="5"></textarea>
                    </div>
                    <button type="submit" class="submit-button">{"Envoyer"}</button>
                </form>
            </div>
        </section>
    }
}

#[function_component(Reseau)]
pub fn reseau() -> Html {
    html! {
        <section id="reseau" class="page-section">
            <div class="container">
                <h2>{"Notre réseau"}</h2>
                <p>
                    {"Horizon travaille main dans la main avec les structures du \
                      quartier. Découvrez celles qui nous accompagnent."}
                </p>
            </div>
            <nav class="partners" aria-label="Partenaires">
                <ul>
                    {
                        PARTNERS.iter().map(|(name, url)| html! {
                            <li>
                                <a href={*url} target="_blank" rel="noopener noreferrer">{*name}</a>
                            </li>
                        }).collect::<Html>()
                    }
                </ul>
            </nav>
        </section>
    }
}
