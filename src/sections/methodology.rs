use yew::prelude::*;

use crate::content::{BENEFITS, STEPS};
use crate::navigation::Anchor;
use crate::reveal::binding::{RevealSpec, Target};
use crate::reveal::hook::use_reveal;
use crate::reveal::visual::Tween;

// The line and the step cards share the steps block as trigger, so they
// fire together, line first.
fn reveal_specs() -> Vec<RevealSpec> {
    vec![
        RevealSpec::element(".section-heading", Tween::fade_up(40.0, 800)),
        RevealSpec::on_view(
            ".steps",
            Target::Element(".steps-line"),
            Tween::grow_x(1200).from_origin("left center"),
        ),
        RevealSpec::on_view(
            ".steps",
            Target::Matching(".step-card"),
            Tween::fade_up(50.0, 700).staggered(200).delayed(300),
        ),
        RevealSpec::on_view(
            ".benefits",
            Target::Matching(".benefit-item"),
            Tween::fade_from_x(-30.0, 600).staggered(100),
        ),
    ]
}

#[function_component(Methodology)]
pub fn methodology() -> Html {
    let root = use_reveal("methodology", reveal_specs);

    html! {
        <section id={Anchor::Metodologia.id()} ref={root} class="page-section clipped">
            <div class="container">
                <div class="section-heading">
                    <span class="eyebrow">{"Metodología"}</span>
                    <h2>{"Nuestro Enfoque de Trabajo"}</h2>
                    <p class="section-intro wide">
                        {"Nuestra metodología combina investigación social aplicada, análisis de datos y experiencias en terreno. Trabajamos en etapas claras que permiten comprender el contexto, anticipar riesgos y diseñar soluciones efectivas."}
                    </p>
                    <div class="divider"></div>
                </div>

                <div class="steps">
                    <div class="steps-line"></div>
                    <div class="steps-grid">
                        { for STEPS.iter().map(|step| html! {
                            <div class="step-card" key={step.number}>
                                <div class="step-number">{step.number}</div>
                                <div class="step-icon">{step.icon}</div>
                                <h3>{step.title}</h3>
                                <p>{step.description}</p>
                            </div>
                        })}
                    </div>
                </div>

                <div class="benefits">
                    <h3 class="subheading">{"¿Por qué nuestra metodología funciona?"}</h3>
                    <div class="benefits-grid">
                        { for BENEFITS.iter().map(|benefit| html! {
                            <div class="benefit-item" key={*benefit}>
                                <div class="icon-round">{"✓"}</div>
                                <p>{*benefit}</p>
                            </div>
                        })}
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .page-section.clipped {
                    overflow: hidden;
                }
                .steps {
                    position: relative;
                    margin-bottom: 5rem;
                }
                .steps-line {
                    position: absolute;
                    top: 6rem;
                    left: 0;
                    right: 0;
                    height: 2px;
                    background: linear-gradient(to right, #FECACA, #E53935, #FECACA);
                }
                .steps-grid {
                    display: grid;
                    grid-template-columns: repeat(5, 1fr);
                    gap: 2rem;
                }
                .step-card {
                    position: relative;
                    background: #fff;
                    border: 1px solid #F3F4F6;
                    border-radius: 1rem;
                    padding: 1.5rem;
                    text-align: center;
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                    transition: box-shadow 0.5s;
                }
                .step-card:hover {
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                }
                .step-number {
                    position: absolute;
                    top: -1rem;
                    left: 50%;
                    margin-left: -1.25rem;
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 9999px;
                    background: #E53935;
                    color: #fff;
                    font-size: 0.875rem;
                    font-weight: 700;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .step-icon {
                    width: 4rem;
                    height: 4rem;
                    margin: 1rem auto;
                    border-radius: 0.75rem;
                    background: #FEE2E2;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.75rem;
                }
                .step-card h3 {
                    font-size: 1.125rem;
                    font-weight: 600;
                    margin-bottom: 0.5rem;
                }
                .step-card p {
                    font-size: 0.875rem;
                    color: #4B5563;
                    line-height: 1.6;
                }
                .benefits {
                    background: #F8F9FA;
                    border-radius: 1rem;
                    padding: 3rem;
                }
                .benefits-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 1.5rem;
                }
                .benefit-item {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    background: #fff;
                    border-radius: 0.75rem;
                    padding: 1rem;
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                    font-weight: 500;
                    color: #374151;
                }
                @media (max-width: 1024px) {
                    .steps-line {
                        display: none;
                    }
                    .steps-grid, .benefits-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }
                @media (max-width: 640px) {
                    .steps-grid, .benefits-grid {
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
    fn line_registers_before_cards_on_the_shared_trigger() {
        let specs = reveal_specs();
        let on_steps: Vec<&RevealSpec> = specs
            .iter()
            .filter(|s| s.trigger == Trigger::Viewport(".steps"))
            .collect();
        assert_eq!(on_steps.len(), 2);
        assert_eq!(on_steps[0].target, Target::Element(".steps-line"));
        assert_eq!(on_steps[1].target, Target::Matching(".step-card"));
        assert_eq!(on_steps[1].tween.delay_for(4), 1100);
    }
}
