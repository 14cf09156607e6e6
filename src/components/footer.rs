use chrono::Datelike;
use leptos::prelude::*;
use web_sys::MouseEvent;

use crate::config::SiteConfig;
use crate::constants::BRAND_NAME;
use crate::navigation::follow_anchor;

const SERVICE_SHORTCUTS: [&str; 5] = [
    "Gestion de Trésorerie",
    "Optimisation des Flux",
    "Analyse Financière",
    "Conseil Stratégique",
    "Formation Équipes",
];

const LEGAL_LINKS: [(&str, &str); 3] = [
    ("Politique de confidentialité", "/privacy"),
    ("Conditions d'utilisation", "/terms"),
    ("Mentions légales", "/legal"),
];

const NAVIGATION: [(&str, &str); 3] = [("Accueil", "#top"), ("Services", "#services"), ("Contact", "#contact")];

fn anchor(label: &'static str, href: &'static str) -> impl IntoView {
    view! {
        <a
            href=href
            on:click=move |ev: MouseEvent| {
                ev.prevent_default();
                follow_anchor(href);
            }
        >
            {label}
        </a>
    }
}

fn copyright_line(year: i32, brand: &str) -> String {
    format!("© {} {}. Tous droits réservés.", year, brand)
}

#[component]
pub fn Footer() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let year = chrono::Utc::now().year();

    let social = [
        ("LinkedIn", config.social.linkedin.clone()),
        ("Facebook", config.social.facebook.clone()),
        ("Twitter", config.twitter_url()),
        ("Instagram", config.social.instagram.clone()),
    ];

    view! {
        <footer class="footer">
            <div class="container footer-grid">
                <div class="footer-brand">
                    <div class="logo-text">{BRAND_NAME}</div>
                    <p>
                        "Cabinet CM360 est votre partenaire de confiance pour une gestion de trésorerie optimale. "
                        "Notre expertise vous accompagne vers le succès financier."
                    </p>
                    <div class="social-links">
                        {social
                            .into_iter()
                            .map(|(name, href)| {
                                view! {
                                    <a href=href target="_blank" rel="noopener noreferrer" aria-label=name>
                                        {name}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="footer-column">
                    <h4>"Navigation"</h4>
                    <ul>
                        {NAVIGATION.iter().map(|&(label, href)| view! { <li>{anchor(label, href)}</li> }).collect_view()}
                    </ul>
                </div>

                <div class="footer-column">
                    <h4>"Services"</h4>
                    <ul>
                        {SERVICE_SHORTCUTS
                            .iter()
                            .map(|&label| view! { <li>{anchor(label, "#services")}</li> })
                            .collect_view()}
                    </ul>
                </div>

                <div class="footer-column">
                    <h4>"Contact"</h4>
                    <ul>
                        <li><a href=config.mailto()>{config.contact.email.clone()}</a></li>
                        <li><a href=config.tel()>{config.contact.phone.clone()}</a></li>
                        <li>{config.contact.address.clone()}</li>
                    </ul>
                </div>
            </div>

            <div class="container footer-bottom">
                <p class="copyright">{copyright_line(year, &config.brand_name)}</p>
                <ul class="legal-links">
                    {LEGAL_LINKS.iter().map(|&(label, href)| view! { <li><a href=href>{label}</a></li> }).collect_view()}
                </ul>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copyright_line() {
        assert_eq!(copyright_line(2025, BRAND_NAME), "© 2025 Cabinet CM360. Tous droits réservés.");
    }
}
