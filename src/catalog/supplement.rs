//! Editorial content shown in the detail overlay, keyed by service id.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub position: &'static str,
    pub company: &'static str,
    pub text: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessStep {
    pub step: u8,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Supplement {
    pub testimonials: &'static [Testimonial],
    pub process_steps: &'static [ProcessStep],
    pub faqs: &'static [Faq],
    pub results: &'static [&'static str],
}

impl Supplement {
    pub const EMPTY: Supplement = Supplement {
        testimonials: &[],
        process_steps: &[],
        faqs: &[],
        results: &[],
    };

    pub fn is_empty(&self) -> bool {
        self.testimonials.is_empty()
            && self.process_steps.is_empty()
            && self.faqs.is_empty()
            && self.results.is_empty()
    }
}

const fn step(step: u8, title: &'static str, description: &'static str) -> ProcessStep {
    ProcessStep { step, title, description }
}

const fn faq(question: &'static str, answer: &'static str) -> Faq {
    Faq { question, answer }
}

const fn testimonial(
    name: &'static str,
    position: &'static str,
    company: &'static str,
    text: &'static str,
) -> Testimonial {
    Testimonial { name, position, company, text }
}

/// Content for a service id, or [`Supplement::EMPTY`] when there is none.
pub fn supplement_for(service_id: &str) -> &'static Supplement {
    match service_id {
        "cash-management-tms" => &CASH_MANAGEMENT,
        "diagnostic-tresorerie" => &DIAGNOSTIC,
        "gestion-liquidite" => &LIQUIDITE,
        "relation-entente-client" => &RELATION_CLIENT,
        "appel-offres" => &APPEL_OFFRES,
        "economie-argent" => &ECONOMIE,
        "amelioration-processus" => &PROCESSUS,
        _ => &Supplement::EMPTY,
    }
}

static CASH_MANAGEMENT: Supplement = Supplement {
    testimonials: &[
        testimonial("Marie Dubois", "Directrice Financière", "TechCorp",
            "L'implémentation du TMS a révolutionné notre gestion de trésorerie. Nous avons gagné 40% de temps et une visibilité parfaite sur nos flux."),
        testimonial("Pierre Martin", "Trésorier", "IndustriePlus",
            "Une équipe professionnelle qui a su adapter la solution à nos besoins spécifiques. Résultats exceptionnels !"),
    ],
    process_steps: &[
        step(1, "Audit initial", "Analyse complète de vos processus actuels et identification des besoins"),
        step(2, "Sélection", "Choix de la solution TMS la plus adaptée à votre organisation"),
        step(3, "Implémentation", "Mise en place et configuration personnalisée du système"),
        step(4, "Formation", "Formation complète de vos équipes et transfert de compétences"),
        step(5, "Optimisation", "Ajustements et optimisations continues pour maximiser les résultats"),
    ],
    faqs: &[
        faq("Combien de temps faut-il pour implémenter un TMS ?",
            "L'implémentation complète prend généralement 4 à 8 semaines selon la complexité de votre organisation et vos besoins spécifiques."),
        faq("Quels sont les prérequis techniques ?",
            "Nous évaluons votre infrastructure existante et proposons des solutions adaptées. Aucun prérequis technique majeur n'est nécessaire."),
        faq("Le TMS est-il compatible avec nos systèmes existants ?",
            "Oui, nos solutions s'intègrent parfaitement avec la plupart des systèmes ERP et bancaires du marché."),
    ],
    results: &[
        "Réduction de 30% du temps de traitement des opérations",
        "Amélioration de 50% de la visibilité sur les flux financiers",
        "Automatisation de 80% des tâches répétitives",
        "Conformité réglementaire renforcée à 100%",
    ],
};

static DIAGNOSTIC: Supplement = Supplement {
    testimonials: &[
        testimonial("Sophie Bernard", "CEO", "StartupInnov",
            "Le diagnostic nous a ouvert les yeux sur des opportunités d'économies que nous n'avions jamais soupçonnées."),
        testimonial("Jean Moreau", "Directeur Administratif", "GroupeTradition",
            "Un rapport détaillé et des recommandations concrètes qui nous ont permis d'économiser 25% sur nos coûts financiers."),
    ],
    process_steps: &[
        step(1, "Collecte de données", "Récupération et analyse de vos données financières"),
        step(2, "Analyse approfondie", "Étude détaillée de vos flux et processus"),
        step(3, "Identification des opportunités", "Détection des points d'amélioration"),
        step(4, "Recommandations", "Élaboration d'un plan d'action personnalisé"),
        step(5, "Présentation", "Remise du rapport détaillé avec accompagnement"),
    ],
    faqs: &[
        faq("Quelles données sont nécessaires pour le diagnostic ?",
            "Nous analysons vos relevés bancaires, flux de trésorerie, contrats bancaires et processus internes."),
        faq("Combien de temps dure l'analyse ?",
            "Le diagnostic complet prend 2 à 3 semaines selon la complexité de votre organisation."),
        faq("Quels sont les livrables ?",
            "Vous recevez un rapport détaillé avec analyse, recommandations et plan d'action concret."),
    ],
    results: &[
        "Identification d'économies potentielles de 15-30%",
        "Vision claire de votre situation financière",
        "Plan d'action concret et mesurable",
        "Support pour la mise en œuvre des recommandations",
    ],
};

static LIQUIDITE: Supplement = Supplement {
    testimonials: &[
        testimonial("Claire Leroy", "Trésorière", "MegaCorp",
            "Notre rendement sur les excédents a augmenté de 22% grâce à leur stratégie de placement optimisée."),
        testimonial("Marc Durand", "Directeur Financier", "PME-Expert",
            "Une gestion de liquidité intelligente qui nous permet de maintenir notre flexibilité tout en optimisant nos revenus."),
    ],
    process_steps: &[
        step(1, "Évaluation des besoins", "Analyse de vos besoins en liquidité et contraintes"),
        step(2, "Définition de la stratégie", "Élaboration d'une stratégie de placement adaptée"),
        step(3, "Mise en place", "Implémentation des outils et processus"),
        step(4, "Monitoring", "Suivi continu et ajustements"),
        step(5, "Optimisation", "Amélioration continue des performances"),
    ],
    faqs: &[
        faq("Quels types de placements recommandez-vous ?",
            "Nous proposons des placements adaptés à votre profil de risque : fonds monétaires, obligations, placements structurés."),
        faq("Quelle est la liquidité de ces placements ?",
            "Nous privilégions des placements avec une liquidité optimale pour répondre à vos besoins opérationnels."),
        faq("Comment gérez-vous les risques ?",
            "Nous diversifions les placements et mettons en place des garde-fous pour minimiser les risques."),
    ],
    results: &[
        "Amélioration du rendement de 15-25%",
        "Réduction des coûts de financement",
        "Meilleure gestion des risques",
        "Flexibilité adaptée à vos besoins",
    ],
};

static RELATION_CLIENT: Supplement = Supplement {
    testimonials: &[
        testimonial("Isabelle Rousseau", "Directrice Générale", "InnovTech",
            "Ils ont négocié des conditions bancaires exceptionnelles. Nous avons économisé 35% sur nos coûts bancaires."),
        testimonial("Thomas Laurent", "Président", "GroupeExpansion",
            "Un accompagnement de qualité qui nous a permis de renforcer nos relations avec nos banques partenaires."),
    ],
    process_steps: &[
        step(1, "Audit relationnel", "Analyse de vos relations bancaires actuelles"),
        step(2, "Stratégie de négociation", "Élaboration d'une stratégie personnalisée"),
        step(3, "Négociation", "Négociation des conditions avec vos banques"),
        step(4, "Accord", "Finalisation des accords et contrats"),
        step(5, "Suivi", "Accompagnement dans la durée"),
    ],
    faqs: &[
        faq("Pouvez-vous négocier avec nos banques existantes ?",
            "Oui, nous négocions avec vos banques actuelles ou vous aidons à identifier de nouveaux partenaires."),
        faq("Quels types d'économies peut-on espérer ?",
            "Nos clients réalisent en moyenne 20-40% d'économies sur leurs coûts bancaires."),
        faq("Le processus est-il confidentiel ?",
            "Absolument, nous respectons la plus stricte confidentialité dans toutes nos négociations."),
    ],
    results: &[
        "Réduction des coûts bancaires de 20-40%",
        "Conditions de financement améliorées",
        "Relations bancaires optimisées",
        "Support dédié et personnalisé",
    ],
};

static APPEL_OFFRES: Supplement = Supplement {
    testimonials: &[
        testimonial("Nicolas Petit", "Directeur Financier", "GroupeInternational",
            "L'appel d'offres nous a permis d'obtenir des conditions exceptionnelles. Un processus parfaitement maîtrisé."),
        testimonial("Anne-Marie Dubois", "Trésorière", "CorpLeader",
            "Une expertise remarquable qui nous a fait économiser 30% sur nos coûts bancaires globaux."),
    ],
    process_steps: &[
        step(1, "Préparation", "Élaboration du cahier des charges et critères"),
        step(2, "Lancement", "Diffusion de l'appel d'offres aux banques"),
        step(3, "Analyse", "Évaluation comparative des propositions"),
        step(4, "Négociation", "Négociation des conditions finales"),
        step(5, "Sélection", "Choix du partenaire et transition"),
    ],
    faqs: &[
        faq("Combien de banques contactons-nous ?",
            "Nous contactons généralement 8-12 banques pour garantir une concurrence optimale."),
        faq("Le processus est-il transparent ?",
            "Oui, nous vous tenons informés à chaque étape et vous impliquons dans les décisions importantes."),
        faq("Quelle est la durée moyenne ?",
            "Un appel d'offres complet prend 8 à 16 semaines selon la complexité."),
    ],
    results: &[
        "Économies moyennes de 25-35%",
        "Conditions bancaires optimisées",
        "Processus structuré et transparent",
        "Expertise dédiée et expérimentée",
    ],
};

static ECONOMIE: Supplement = Supplement {
    testimonials: &[
        testimonial("Laurent Simon", "Gérant", "PME-Famille",
            "En seulement 3 semaines, nous avons identifié et réalisé 28% d'économies sur nos coûts financiers."),
        testimonial("Céline Moreau", "Directrice Administrative", "StartupGrowth",
            "Un audit rapide et efficace qui nous a permis d'optimiser nos dépenses sans perdre en qualité de service."),
    ],
    process_steps: &[
        step(1, "Audit des coûts", "Analyse détaillée de tous vos coûts financiers"),
        step(2, "Identification", "Détection des opportunités d'économies"),
        step(3, "Stratégie", "Élaboration d'un plan d'optimisation"),
        step(4, "Mise en œuvre", "Application des mesures d'économies"),
        step(5, "Suivi", "Monitoring des économies réalisées"),
    ],
    faqs: &[
        faq("Quels types de coûts analysez-vous ?",
            "Nous analysons tous vos coûts bancaires : commissions, agios, frais de tenue de compte, etc."),
        faq("Les économies sont-elles durables ?",
            "Oui, nous mettons en place des processus pour maintenir les économies dans le temps."),
        faq("Y a-t-il des risques ?",
            "Non, nos recommandations préservent la qualité de vos services bancaires."),
    ],
    results: &[
        "Économies moyennes de 15-30%",
        "Optimisation des coûts sans perte de qualité",
        "Stratégies personnalisées et adaptées",
        "Suivi continu des performances",
    ],
};

static PROCESSUS: Supplement = Supplement {
    testimonials: &[
        testimonial("David Martin", "Directeur Opérationnel", "IndustrieModerne",
            "L'automatisation de nos processus nous a fait gagner 50% de productivité. Une transformation remarquable."),
        testimonial("Julie Rousseau", "Responsable Financier", "TechStartup",
            "Des processus optimisés qui nous permettent de nous concentrer sur notre cœur de métier."),
    ],
    process_steps: &[
        step(1, "Cartographie", "Analyse détaillée de vos processus actuels"),
        step(2, "Identification", "Détection des points d'amélioration"),
        step(3, "Conception", "Élaboration des nouveaux processus"),
        step(4, "Implémentation", "Mise en place et formation"),
        step(5, "Optimisation", "Ajustements et améliorations continues"),
    ],
    faqs: &[
        faq("Quels processus peuvent être améliorés ?",
            "Tous vos processus financiers : comptabilité, trésorerie, reporting, contrôle de gestion."),
        faq("L'automatisation est-elle complexe ?",
            "Nous privilégions des solutions simples et intuitives, avec formation complète de vos équipes."),
        faq("Quel est l'impact sur les équipes ?",
            "Nos améliorations libèrent du temps pour des tâches à plus forte valeur ajoutée."),
    ],
    results: &[
        "Gain de productivité de 40-60%",
        "Réduction des erreurs humaines",
        "Processus standardisés et optimisés",
        "Équipes formées et autonomes",
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::services::all;

    #[test]
    fn test_cash_management_has_faqs() {
        let service = all()
            .iter()
            .find(|s| s.title == "Cash Management & TMS")
            .expect("catalog entry");
        let supplement = supplement_for(service.id);
        assert!(!supplement.faqs.is_empty());
        assert_eq!(supplement.process_steps.len(), 5);
    }

    #[test]
    fn test_unknown_id_gets_empty_supplement() {
        let supplement = supplement_for("Cash Management & TMS");
        assert!(supplement.faqs.is_empty());
        assert!(supplement.is_empty());
        assert_eq!(*supplement, Supplement::EMPTY);
    }

    #[test]
    fn test_every_catalog_entry_has_content() {
        for service in all() {
            assert!(!supplement_for(service.id).is_empty(), "{} sans contenu", service.id);
        }
    }

    #[test]
    fn test_process_steps_are_numbered_in_order() {
        for service in all() {
            let steps: Vec<u8> = supplement_for(service.id).process_steps.iter().map(|s| s.step).collect();
            assert_eq!(steps, vec![1, 2, 3, 4, 5]);
        }
    }
}
