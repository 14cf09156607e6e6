use leptos::prelude::*;

struct Reason {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const REASONS: [Reason; 4] = [
    Reason {
        icon: "📅",
        title: "7+ ans d'expérience",
        description: "Nous accompagnons des entreprises depuis plus de 7 ans.",
    },
    Reason {
        icon: "🤝",
        title: "150+ clients satisfaits",
        description: "Une approche personnalisée qui fait ses preuves.",
    },
    Reason {
        icon: "📈",
        title: "Amélioration mesurable",
        description: "Des résultats concrets sur votre gestion de liquidité.",
    },
    Reason {
        icon: "⚡",
        title: "Réactivité & proximité",
        description: "Un accompagnement rapide et humain.",
    },
];

#[component]
pub fn WhyChooseUs() -> impl IntoView {
    view! {
        <div class="why-choose-us container">
            <h2 class="section-title">"Pourquoi nous choisir ?"</h2>
            <p class="section-lede">"Une expertise reconnue au service de votre trésorerie."</p>
            <div class="reasons-grid">
                {REASONS
                    .iter()
                    .map(|reason| {
                        view! {
                            <div class="reason card">
                                <div class="reason-icon">{reason.icon}</div>
                                <h3>{reason.title}</h3>
                                <p>{reason.description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
