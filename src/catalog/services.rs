/// One consulting offering. Constant for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceOffering {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub long_description: Option<&'static str>,
    pub image: &'static str,
    pub features: &'static [&'static str],
    pub details: &'static [&'static str],
    pub duration: Option<&'static str>,
    pub price: Option<&'static str>,
    pub advantages: &'static [&'static str],
}

pub static SERVICES: [ServiceOffering; 7] = [
    ServiceOffering {
        id: "cash-management-tms",
        title: "Cash Management & TMS",
        description: "Optimisation de la gestion de trésorerie à travers des outils modernes et des systèmes TMS performants pour maximiser l'efficacité financière.",
        long_description: Some("Notre expertise en Cash Management et Treasury Management Systems (TMS) vous permet d'automatiser vos processus de trésorerie, d'améliorer la visibilité sur vos flux financiers et d'optimiser vos décisions d'investissement. Nous vous accompagnons dans le choix, l'implémentation et l'optimisation de solutions TMS adaptées à vos besoins."),
        image: "/services/1.jpg",
        features: &[
            "Mise en place de systèmes TMS",
            "Automatisation des processus",
            "Reporting en temps réel",
            "Optimisation des flux financiers",
        ],
        details: &[
            "Audit complet de vos processus actuels",
            "Sélection et implémentation de solutions TMS",
            "Formation de vos équipes",
            "Support continu et maintenance",
        ],
        duration: Some("4-8 semaines"),
        price: Some("Sur devis"),
        advantages: &[
            "Réduction de 30% du temps de traitement",
            "Amélioration de la visibilité financière",
            "Automatisation des tâches répétitives",
            "Conformité réglementaire renforcée",
        ],
    },
    ServiceOffering {
        id: "diagnostic-tresorerie",
        title: "Diagnostic de trésorerie",
        description: "Analyse complète et approfondie de vos flux de trésorerie pour identifier les opportunités d'amélioration et d'optimisation financière.",
        long_description: Some("Notre diagnostic de trésorerie offre une vision claire et détaillée de votre situation financière. Nous analysons vos flux entrants et sortants, identifions les goulots d'étranglement et proposons des solutions concrètes pour améliorer votre gestion de trésorerie."),
        image: "/services/2.jpg",
        features: &[
            "Analyse des flux de trésorerie",
            "Identification des risques",
            "Recommandations personnalisées",
            "Plan d'action détaillé",
        ],
        details: &[
            "Analyse approfondie de vos flux financiers",
            "Identification des inefficacités",
            "Évaluation des risques de trésorerie",
            "Recommandations d'optimisation",
        ],
        duration: Some("2-3 semaines"),
        price: Some("À partir de 2 500€"),
        advantages: &[
            "Vision claire de votre situation financière",
            "Identification d'économies potentielles",
            "Plan d'action concret et mesurable",
            "Support pour la mise en œuvre",
        ],
    },
    ServiceOffering {
        id: "gestion-liquidite",
        title: "Gestion de liquidité",
        description: "Amélioration de la visibilité sur les liquidités et optimisation des placements financiers pour maximiser le rendement de vos excédents.",
        long_description: Some("Notre service de gestion de liquidité vous aide à optimiser vos excédents de trésorerie et à maintenir un niveau de liquidité optimal. Nous développons des stratégies de placement adaptées à votre profil de risque et à vos besoins opérationnels."),
        image: "/services/3.jpg",
        features: &[
            "Prévisions de trésorerie",
            "Optimisation des placements",
            "Gestion des excédents",
            "Stratégies de liquidité",
        ],
        details: &[
            "Analyse de vos besoins en liquidité",
            "Développement de stratégies de placement",
            "Mise en place d'outils de prévision",
            "Suivi et optimisation continue",
        ],
        duration: Some("3-6 semaines"),
        price: Some("Sur devis"),
        advantages: &[
            "Amélioration du rendement de 15-25%",
            "Réduction des coûts de financement",
            "Meilleure gestion des risques",
            "Flexibilité adaptée à vos besoins",
        ],
    },
    ServiceOffering {
        id: "relation-entente-client",
        title: "Relation et entente client",
        description: "Renforcement des accords bancaires et amélioration de la communication financière avec vos partenaires bancaires.",
        long_description: Some("Nous vous accompagnons dans l'optimisation de vos relations bancaires, la négociation de conditions financières avantageuses et la mise en place de partenariats stratégiques durables avec vos institutions financières."),
        image: "/services/4.jpg",
        features: &[
            "Négociation bancaire",
            "Optimisation des conditions",
            "Gestion multi-banques",
            "Partenariats stratégiques",
        ],
        details: &[
            "Audit de vos relations bancaires actuelles",
            "Négociation de conditions améliorées",
            "Mise en place de partenariats stratégiques",
            "Suivi et optimisation des relations",
        ],
        duration: Some("4-12 semaines"),
        price: Some("Sur devis"),
        advantages: &[
            "Réduction des coûts bancaires de 20-40%",
            "Conditions de financement améliorées",
            "Relations bancaires optimisées",
            "Support dédié et personnalisé",
        ],
    },
    ServiceOffering {
        id: "appel-offres",
        title: "Appel d'offres",
        description: "Accompagnement personnalisé et expertise dans vos démarches d'appel d'offre bancaire pour obtenir les meilleures conditions.",
        long_description: Some("Notre expertise dans les appels d'offres bancaires vous garantit un processus optimisé et des conditions financières compétitives. Nous vous accompagnons de la préparation du dossier jusqu'à la sélection finale."),
        image: "/services/5.jpg",
        features: &[
            "Préparation des dossiers",
            "Analyse comparative",
            "Négociation optimisée",
            "Sélection des partenaires",
        ],
        details: &[
            "Préparation complète du dossier d'appel d'offres",
            "Analyse comparative des propositions",
            "Négociation des conditions finales",
            "Accompagnement dans la transition",
        ],
        duration: Some("8-16 semaines"),
        price: Some("Sur devis"),
        advantages: &[
            "Économies moyennes de 25-35%",
            "Conditions bancaires optimisées",
            "Processus structuré et transparent",
            "Expertise dédiée et expérimentée",
        ],
    },
    ServiceOffering {
        id: "economie-argent",
        title: "Économie d'argent",
        description: "Réduction des coûts financiers par une gestion optimisée et des stratégies ciblées pour maximiser vos économies.",
        long_description: Some("Nos stratégies d'économie d'argent visent à réduire vos coûts financiers tout en maintenant la qualité de vos services bancaires. Nous identifions les opportunités d'économies et mettons en place des solutions concrètes."),
        image: "/services/6.jpg",
        features: &[
            "Audit des coûts financiers",
            "Optimisation des tarifs",
            "Stratégies d'économies",
            "Suivi des performances",
        ],
        details: &[
            "Audit complet de vos coûts financiers",
            "Identification des opportunités d'économies",
            "Mise en place de stratégies d'optimisation",
            "Suivi et reporting des économies réalisées",
        ],
        duration: Some("2-4 semaines"),
        price: Some("À partir de 1 500€"),
        advantages: &[
            "Économies moyennes de 15-30%",
            "Optimisation des coûts sans perte de qualité",
            "Stratégies personnalisées et adaptées",
            "Suivi continu des performances",
        ],
    },
    ServiceOffering {
        id: "amelioration-processus",
        title: "Amélioration des processus",
        description: "Modernisation et optimisation des processus financiers internes pour gagner en efficacité et en productivité.",
        long_description: Some("Nous analysons vos processus financiers actuels et proposons des améliorations concrètes pour automatiser, simplifier et optimiser vos opérations de trésorerie et de gestion financière."),
        image: "/services/7.jpg",
        features: &[
            "Analyse des processus",
            "Automatisation des tâches",
            "Optimisation des workflows",
            "Formation des équipes",
        ],
        details: &[
            "Analyse détaillée de vos processus actuels",
            "Identification des points d'amélioration",
            "Mise en place de solutions d'automatisation",
            "Formation et accompagnement des équipes",
        ],
        duration: Some("6-12 semaines"),
        price: Some("Sur devis"),
        advantages: &[
            "Gain de productivité de 40-60%",
            "Réduction des erreurs humaines",
            "Processus standardisés et optimisés",
            "Équipes formées et autonomes",
        ],
    },
];

/// All offerings, in declaration order.
pub fn all() -> &'static [ServiceOffering] {
    &SERVICES
}

/// Lookup by stable identifier. Unknown ids are not an error.
pub fn by_id(id: &str) -> Option<&'static ServiceOffering> {
    SERVICES.iter().find(|service| service.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_keeps_declaration_order() {
        let ids: Vec<&str> = all().iter().map(|s| s.id).collect();
        assert_eq!(
            ids,
            vec![
                "cash-management-tms",
                "diagnostic-tresorerie",
                "gestion-liquidite",
                "relation-entente-client",
                "appel-offres",
                "economie-argent",
                "amelioration-processus",
            ]
        );
    }

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<&str> = all().iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), SERVICES.len());
    }

    #[test]
    fn test_by_id() {
        let service = by_id("appel-offres").expect("known id");
        assert_eq!(service.title, "Appel d'offres");
        assert_eq!(service.duration, Some("8-16 semaines"));
        assert!(by_id("inconnu").is_none());
        assert!(by_id("").is_none());
    }
}
