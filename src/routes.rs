//! URL table and per-page metadata.

use crate::seo::PageMetadata;

pub const HOME_PATH: &str = "/";
pub const SERVICES_PATH: &str = "/services";
pub const CONTACT_PATH: &str = "/contact";
pub const NOT_FOUND_PATH: &str = "/404";

/// Old addresses still linked from outside; they redirect home.
pub const LEGACY_PATHS: [&str; 2] = ["/accueil", "/home"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Services,
    Contact,
    NotFound,
}

impl Page {
    pub fn path(self) -> &'static str {
        match self {
            Page::Home => HOME_PATH,
            Page::Services => SERVICES_PATH,
            Page::Contact => CONTACT_PATH,
            Page::NotFound => NOT_FOUND_PATH,
        }
    }

    pub fn metadata(self) -> PageMetadata {
        let (title, description, keywords) = match self {
            Page::Home => (
                "Cabinet CM360 – Expert en gestion de trésorerie pour entreprises",
                "Cabinet de consultation spécialisé dans l'optimisation de la trésorerie, le cash management et les processus financiers. 7+ ans d'expérience, 150+ clients satisfaits. Contactez-nous au 438-521-3151.",
                "cabinet gestion trésorerie, cash management, TMS, diagnostic trésorerie, gestion liquidité, processus financiers, consultation financière Montréal, optimisation trésorerie entreprise",
            ),
            Page::Services => (
                "Nos Services – Gestion de trésorerie et Cash Management",
                "Découvrez nos services spécialisés : Cash Management & TMS, diagnostic de trésorerie, gestion de liquidité, amélioration des processus financiers. Solutions personnalisées pour optimiser votre trésorerie d'entreprise.",
                "services gestion trésorerie, cash management TMS, diagnostic trésorerie, gestion liquidité entreprise, processus financiers, appel d'offres financier, économie argent entreprise",
            ),
            Page::Contact => (
                "Contact – Cabinet CM360 | Consultation en gestion de trésorerie",
                "Contactez Cabinet CM360 pour vos besoins en gestion de trésorerie. Téléphone : 438-521-3151, Email : info@cabinetcm360.com. Consultation gratuite et accompagnement personnalisé à Montréal.",
                "contact cabinet trésorerie, consultation gestion trésorerie Montréal, expert cash management contact, rendez-vous consultation financière",
            ),
            Page::NotFound => {
                return PageMetadata {
                    title: "Page non trouvée – Cabinet CM360".to_string(),
                    description: "La page que vous recherchez n'existe pas. Retournez à l'accueil pour découvrir nos services de gestion de trésorerie et cash management.".to_string(),
                    url: NOT_FOUND_PATH.to_string(),
                    ..PageMetadata::default()
                }
            }
        };

        PageMetadata {
            title: title.to_string(),
            description: description.to_string(),
            keywords: keywords.to_string(),
            url: self.path().to_string(),
            ..PageMetadata::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Render(Page),
    /// Replace the current history entry with this path.
    Redirect(&'static str),
}

/// The route table the app renders from. A single trailing slash is ignored.
pub fn resolve(path: &str) -> Resolution {
    let path = match path.strip_suffix('/') {
        Some(rest) if !rest.is_empty() => rest,
        _ => path,
    };
    match path {
        HOME_PATH => Resolution::Render(Page::Home),
        SERVICES_PATH => Resolution::Render(Page::Services),
        CONTACT_PATH => Resolution::Render(Page::Contact),
        p if LEGACY_PATHS.contains(&p) => Resolution::Redirect(HOME_PATH),
        _ => Resolution::Render(Page::NotFound),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seo::audit;

    #[test]
    fn test_route_table() {
        assert_eq!(resolve("/"), Resolution::Render(Page::Home));
        assert_eq!(resolve("/services"), Resolution::Render(Page::Services));
        assert_eq!(resolve("/contact/"), Resolution::Render(Page::Contact));
        assert_eq!(resolve("/accueil"), Resolution::Redirect("/"));
        assert_eq!(resolve("/home"), Resolution::Redirect("/"));
    }

    #[test]
    fn test_legacy_paths_redirect_to_a_rendered_home() {
        for legacy in LEGACY_PATHS {
            let Resolution::Redirect(target) = resolve(legacy) else {
                panic!("{} devrait rediriger", legacy);
            };
            assert_eq!(resolve(target), Resolution::Render(Page::Home));
        }
        assert_eq!(resolve("/accueil/"), Resolution::Redirect(HOME_PATH));
    }

    #[test]
    fn test_unknown_paths_are_not_found() {
        for path in ["/nope", "/services/extra", "", "/Accueil", "/404"] {
            assert_eq!(resolve(path), Resolution::Render(Page::NotFound), "{:?}", path);
        }
    }

    #[test]
    fn test_every_page_path_resolves_to_itself() {
        for page in [Page::Home, Page::Services, Page::Contact] {
            assert_eq!(resolve(page.path()), Resolution::Render(page));
        }
    }

    #[test]
    fn test_page_metadata_urls() {
        for page in [Page::Home, Page::Services, Page::Contact, Page::NotFound] {
            assert_eq!(page.metadata().url, page.path());
        }
        assert!(Page::Contact.metadata().description.contains("438-521-3151"));
        assert_eq!(Page::NotFound.metadata().keywords, crate::constants::DEFAULT_KEYWORDS);
    }

    #[test]
    fn test_page_titles_carry_keywords() {
        for page in [Page::Home, Page::Services, Page::Contact] {
            let meta = page.metadata();
            assert!(audit(&meta.title, &meta.description).title.contains_keyword, "{:?}", page);
        }
    }
}
