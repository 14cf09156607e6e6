use leptos::prelude::*;
use tracing::debug;
use wasm_bindgen_futures::spawn_local;
use web_sys::SubmitEvent;

use crate::config::SiteConfig;
use crate::contact::{submitter_from_config, BannerKind, ContactForm, Field};
use crate::error::SubmitError;

fn label(field: Field) -> &'static str {
    match field {
        Field::FullName => "Nom complet *",
        Field::Email => "Adresse e-mail *",
        Field::Phone => "Téléphone *",
        Field::Message => "Message *",
    }
}

fn placeholder(field: Field) -> &'static str {
    match field {
        Field::FullName => "Entrez votre nom complet",
        Field::Email => "votre@email.com",
        Field::Phone => "+1 (555) 000-0000",
        Field::Message => "Décrivez votre demande ou question...",
    }
}

/// Records a finished submission. `false` once the form has been unmounted.
pub(crate) fn apply_result(form: RwSignal<ContactForm>, result: Result<String, SubmitError>) -> bool {
    form.try_update(|f| f.finish(result)).is_some()
}

#[component]
fn FormField(form: RwSignal<ContactForm>, field: Field) -> impl IntoView {
    let id = field.name();
    let value = move || form.with(|f| f.values.get(field).to_string());
    let error = move || form.with(|f| f.errors.get(field));
    let on_input = move |ev| form.update(|f| f.edit(field, event_target_value(&ev)));
    let class = move || if error().is_some() { "form-control has-error" } else { "form-control" };

    let control = match field {
        Field::Message => view! {
            <textarea id=id name=id rows="5" class=class placeholder=placeholder(field) prop:value=value on:input=on_input></textarea>
        }
        .into_any(),
        _ => {
            let kind = match field {
                Field::Email => "email",
                Field::Phone => "tel",
                _ => "text",
            };
            view! {
                <input type=kind id=id name=id class=class placeholder=placeholder(field) prop:value=value on:input=on_input />
            }
            .into_any()
        }
    };

    view! {
        <div class="form-group">
            <label for=id>{label(field)}</label>
            {control}
            {move || error().map(|message| view! { <p class="field-error">{message}</p> })}
        </div>
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();

    // État du formulaire
    let form = RwSignal::new(ContactForm::default());

    // Le soumetteur n'est pas Send: stockage local
    let submitter = StoredValue::new_local(submitter_from_config(&config));

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(payload) = form.try_update(|f| f.begin_submit()).flatten() else {
            return;
        };
        let submitter = submitter.get_value();

        spawn_local(async move {
            let result = submitter.submit(&payload).await;
            // Formulaire démonté entre-temps: rien à mettre à jour
            if !apply_result(form, result) {
                debug!("formulaire de contact démonté avant la fin de l'envoi");
            }
        });
    };

    let banner = move || {
        form.with(|f| f.banner.clone()).map(|banner| {
            let class = match banner.kind {
                BannerKind::Success => "submit-banner banner-success",
                BannerKind::Failure => "submit-banner banner-error",
            };
            view! { <div class=class role="status">{banner.text}</div> }
        })
    };

    view! {
        <div class="contact-section container">
            <h2 class="section-title">"Contactez-nous"</h2>
            <p class="section-lede">"Prenez contact avec notre équipe pour toute demande ou information complémentaire."</p>

            <div class="contact-grid">
                <div class="contact-info card">
                    <div class="detail-item">
                        <div class="detail-label">"E-mail"</div>
                        <a class="detail-value" href=config.mailto()>{config.contact.email.clone()}</a>
                    </div>
                    <div class="detail-item">
                        <div class="detail-label">"Téléphone"</div>
                        <a class="detail-value" href=config.tel()>{config.contact.phone.clone()}</a>
                    </div>
                    <div class="detail-item">
                        <div class="detail-label">"Adresse"</div>
                        <div class="detail-value">{config.contact.address.clone()}</div>
                    </div>
                </div>

                <form class="contact-form card" novalidate=true on:submit=handle_submit>
                    <h3>"Envoyez-nous un message"</h3>
                    {Field::ALL.into_iter().map(|field| view! { <FormField form=form field=field /> }).collect_view()}
                    <button
                        type="submit"
                        class="button button-primary"
                        disabled=move || form.with(|f| f.submitting)
                    >
                        {move || form.with(|f| f.submit_label())}
                    </button>
                    {banner}
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SUBMIT_SUCCESS_TEXT;

    #[test]
    fn test_result_lands_while_mounted() {
        let owner = Owner::new();
        let form = owner.with(|| RwSignal::new(ContactForm { submitting: true, ..ContactForm::default() }));

        assert!(apply_result(form, Ok(SUBMIT_SUCCESS_TEXT.to_string())));
        let state = form.get_untracked();
        assert!(!state.submitting);
        assert_eq!(state.banner.map(|b| b.kind), Some(BannerKind::Success));
    }

    #[test]
    fn test_result_after_unmount_is_dropped() {
        let owner = Owner::new();
        let form = owner.with(|| RwSignal::new(ContactForm { submitting: true, ..ContactForm::default() }));
        owner.cleanup();

        assert!(!apply_result(form, Err(SubmitError::Status(500))));
    }
}
