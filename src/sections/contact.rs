use gloo_timers::future::TimeoutFuture;
use log::{info, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::contact_form::{ContactForm, Field, FormAction, Phase};
use crate::content::{image_path, CONTACT_INFO};
use crate::navigation::Anchor;
use crate::reveal::binding::{RevealSpec, Target};
use crate::reveal::hook::use_reveal;
use crate::reveal::visual::Tween;

fn reveal_specs() -> Vec<RevealSpec> {
    vec![
        RevealSpec::element(".section-heading", Tween::fade_up(40.0, 800)),
        RevealSpec::element(".contact-form", Tween::fade_from_x(-50.0, 800)),
        RevealSpec::on_view(
            ".contact-info",
            Target::Matching(".info-item"),
            Tween::fade_from_x(30.0, 600).staggered(100),
        ),
    ]
}

fn on_edit(form: &UseReducerHandle<ContactForm>, field: Field) -> Callback<InputEvent> {
    let dispatcher = form.dispatcher();
    Callback::from(move |e: InputEvent| {
        let value = if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
            input.value()
        } else if let Some(area) = e.target_dyn_into::<HtmlTextAreaElement>() {
            area.value()
        } else {
            return;
        };
        dispatcher.dispatch(FormAction::Edit(field, value));
    })
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let root = use_reveal("contact", reveal_specs);
    let form = use_reducer(ContactForm::default);

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Err(err) = form.check_submit() {
                warn!("contact form not sent: {}", err);
                return;
            }
            match serde_json::to_string(&form.draft) {
                Ok(payload) => info!("simulating contact submission: {}", payload),
                Err(_) => info!("simulating contact submission"),
            }
            form.dispatch(FormAction::Submit);

            let dispatcher = form.dispatcher();
            spawn_local(async move {
                TimeoutFuture::new(config::SUBMIT_DELAY_MS).await;
                info!("contact submission complete");
                dispatcher.dispatch(FormAction::Complete);
            });
        })
    };

    let on_reset = {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| form.dispatch(FormAction::Reset))
    };

    let input_field = |field: Field, kind: &'static str| {
        html! {
            <div class="form-field">
                <label for={field.name()}>{field.label()}</label>
                <input
                    id={field.name()}
                    name={field.name()}
                    type={kind}
                    placeholder={field.placeholder()}
                    value={form.draft.get(field).to_string()}
                    oninput={on_edit(&form, field)}
                    required={field.is_required()}
                />
            </div>
        }
    };

    let form_body = match form.phase {
        Phase::Submitted => html! {
            <div class="form-confirmation">
                <div class="confirmation-icon">{"✈"}</div>
                <h3>{"¡Mensaje enviado!"}</h3>
                <p>{"Gracias por contactarnos. Te responderemos a la brevedad."}</p>
                <button class="button-outline" onclick={on_reset}>
                    {"Enviar otro mensaje"}
                </button>
            </div>
        },
        Phase::Editing | Phase::Submitting => html! {
            <form {onsubmit}>
                <div class="form-row">
                    { input_field(Field::Nombre, "text") }
                    { input_field(Field::Email, "email") }
                </div>
                { input_field(Field::Empresa, "text") }
                <div class="form-field">
                    <label for={Field::Mensaje.name()}>{Field::Mensaje.label()}</label>
                    <textarea
                        id={Field::Mensaje.name()}
                        name={Field::Mensaje.name()}
                        placeholder={Field::Mensaje.placeholder()}
                        rows="5"
                        value={form.draft.get(Field::Mensaje).to_string()}
                        oninput={on_edit(&form, Field::Mensaje)}
                        required={Field::Mensaje.is_required()}
                    />
                </div>
                <button type="submit" class="button-primary full" disabled={form.is_submitting()}>
                    {
                        if form.is_submitting() {
                            html! { <span class="sending"><span class="spinner"></span>{"Enviando..."}</span> }
                        } else {
                            html! { {"Enviar mensaje →"} }
                        }
                    }
                </button>
            </form>
        },
    };

    html! {
        <section id={Anchor::Contacto.id()} ref={root} class="page-section">
            <div class="container">
                <div class="section-heading">
                    <span class="eyebrow">{"Contacto"}</span>
                    <h2>{"Hablemos"}</h2>
                    <p class="section-intro">
                        {"Estamos disponibles para conversar sobre tus proyectos y explorar cómo podemos apoyar tus desafíos sociales y comunitarios."}
                    </p>
                    <div class="divider"></div>
                </div>

                <div class="contact-grid">
                    <div class="contact-form">
                        <div class="form-panel">
                            { form_body }
                        </div>
                    </div>

                    <div class="contact-info">
                        <div class="info-list">
                            { for CONTACT_INFO.iter().map(|item| html! {
                                <a href={item.href} class="info-item" key={item.label}>
                                    <div class="info-icon">{item.icon}</div>
                                    <div>
                                        <p class="muted">{item.label}</p>
                                        <p class="strong">{item.value}</p>
                                    </div>
                                </a>
                            })}
                        </div>

                        <div class="contact-image">
                            <img src={image_path("contact-office.jpg")} alt="Oficina GISOC" />
                            <div class="contact-image-caption">
                                <p class="strong">{"Estamos aquí para ayudarte"}</p>
                                <p>{"Contáctanos y conversemos sobre tu proyecto"}</p>
                            </div>
                        </div>

                        <div class="social">
                            <p class="muted">{"Síguenos en"}</p>
                            <a href="#" class="social-link" aria-label="LinkedIn">{"in"}</a>
                        </div>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .contact-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                }
                .form-panel {
                    background: #F8F9FA;
                    border-radius: 1rem;
                    padding: 2.5rem;
                }
                .form-row {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1.5rem;
                }
                .form-field {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                    margin-bottom: 1.5rem;
                }
                .form-field label {
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: #374151;
                }
                .form-field input, .form-field textarea {
                    background: #fff;
                    border: 1px solid #E5E7EB;
                    border-radius: 0.375rem;
                    padding: 0.625rem 0.75rem;
                    font: inherit;
                }
                .form-field textarea {
                    resize: none;
                }
                .form-field input:focus, .form-field textarea:focus {
                    outline: none;
                    border-color: #E53935;
                    box-shadow: 0 0 0 3px rgba(229, 57, 53, 0.2);
                }
                .button-primary.full {
                    width: 100%;
                    justify-content: center;
                    padding: 1.25rem;
                }
                .button-primary:disabled {
                    opacity: 0.7;
                    cursor: not-allowed;
                }
                .sending {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.75rem;
                }
                .spinner {
                    width: 1.25rem;
                    height: 1.25rem;
                    border: 3px solid rgba(255, 255, 255, 0.3);
                    border-top-color: #fff;
                    border-radius: 9999px;
                    animation: spin 1s linear infinite;
                }
                @keyframes spin {
                    to { transform: rotate(360deg); }
                }
                .form-confirmation {
                    text-align: center;
                    padding: 3rem 0;
                }
                .confirmation-icon {
                    width: 4rem;
                    height: 4rem;
                    margin: 0 auto 1.5rem;
                    border-radius: 9999px;
                    background: #DCFCE7;
                    color: #16A34A;
                    font-size: 1.75rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .form-confirmation h3 {
                    font-size: 1.5rem;
                    font-weight: 600;
                    margin-bottom: 0.5rem;
                }
                .form-confirmation p {
                    color: #4B5563;
                    margin-bottom: 1.5rem;
                }
                .info-list {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                    margin-bottom: 2rem;
                }
                .info-item {
                    display: flex;
                    align-items: flex-start;
                    gap: 1rem;
                    padding: 1rem;
                    background: #F8F9FA;
                    border-radius: 0.75rem;
                    text-decoration: none;
                    color: inherit;
                    transition: background 0.3s;
                }
                .info-item:hover {
                    background: #FEF2F2;
                }
                .info-icon {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 0.5rem;
                    background: #FEE2E2;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    flex-shrink: 0;
                }
                .contact-image {
                    position: relative;
                    border-radius: 1rem;
                    overflow: hidden;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                }
                .contact-image img {
                    width: 100%;
                    height: 16rem;
                    object-fit: cover;
                    display: block;
                }
                .contact-image-caption {
                    position: absolute;
                    bottom: 1.5rem;
                    left: 1.5rem;
                    right: 1.5rem;
                    color: #fff;
                }
                .social {
                    margin-top: 2rem;
                }
                .social-link {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    width: 2.5rem;
                    height: 2.5rem;
                    margin-top: 1rem;
                    border-radius: 9999px;
                    background: #F3F4F6;
                    color: #4B5563;
                    font-weight: 700;
                    text-decoration: none;
                    transition: all 0.3s;
                }
                .social-link:hover {
                    background: #E53935;
                    color: #fff;
                }
                @media (max-width: 1024px) {
                    .contact-grid, .form-row {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reveal::binding::Trigger;

    #[test]
    fn form_and_info_slide_in_from_opposite_sides() {
        let specs = reveal_specs();
        assert_eq!(specs.len(), 3);

        assert_eq!(specs[1].target, Target::Element(".contact-form"));
        assert_eq!(specs[1].tween.from.x, -50.0);
        assert_eq!(specs[1].tween.duration_ms, 800);

        let info = &specs[2];
        assert_eq!(info.trigger, Trigger::Viewport(".contact-info"));
        assert_eq!(info.target, Target::Matching(".info-item"));
        assert_eq!(info.tween.from.x, 30.0);
        assert_eq!(info.tween.duration_ms, 600);
        assert_eq!(info.tween.stagger_ms, 100);
    }
}
