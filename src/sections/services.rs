use yew::prelude::*;

use crate::content::{Service, SERVICES};
use crate::navigation::Anchor;
use crate::reveal::binding::{RevealSpec, Target};
use crate::reveal::hook::use_reveal;
use crate::reveal::visual::Tween;

fn reveal_specs() -> Vec<RevealSpec> {
    vec![
        RevealSpec::element(".section-heading", Tween::fade_up(40.0, 800)),
        RevealSpec::on_view(
            ".services-grid",
            Target::ChildrenOf(".services-grid"),
            Tween::fade_up(60.0, 700).staggered(150),
        ),
    ]
}

#[derive(Properties, PartialEq)]
struct ServiceCardProps {
    service: Service,
}

#[function_component(ServiceCard)]
fn service_card(props: &ServiceCardProps) -> Html {
    let service = &props.service;
    html! {
        <div class="service-card">
            <div class="service-icon">{service.icon}</div>
            <h3>{service.title}</h3>
            <p>{service.description}</p>
            <ul>
                { for service.items.iter().map(|item| html! {
                    <li key={*item}>
                        <span class="check small">{"✓"}</span>
                        {*item}
                    </li>
                })}
            </ul>
        </div>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    let root = use_reveal("services", reveal_specs);

    html! {
        <section id={Anchor::Servicios.id()} ref={root} class="page-section">
            <div class="container">
                <div class="section-heading">
                    <span class="eyebrow">{"Nuestros Servicios"}</span>
                    <h2>{"Soluciones Integrales"}</h2>
                    <p class="section-intro">
                        {"Ofrecemos servicios especializados para la gestión social y comunitaria de proyectos complejos en diversas industrias."}
                    </p>
                    <div class="divider"></div>
                </div>

                <div class="services-grid">
                    { for SERVICES.iter().map(|service| html! {
                        <ServiceCard key={service.title} service={*service} />
                    })}
                </div>
            </div>

            <style>
                {r#"
                .services-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 2rem;
                }
                .service-card {
                    background: #fff;
                    border: 1px solid #F3F4F6;
                    border-radius: 1rem;
                    padding: 2rem;
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                    transition: box-shadow 0.5s;
                }
                .service-card:hover {
                    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
                }
                .service-icon {
                    width: 4rem;
                    height: 4rem;
                    border-radius: 0.75rem;
                    background: #FEE2E2;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.75rem;
                    margin-bottom: 1.5rem;
                    transition: background 0.3s;
                }
                .service-card:hover .service-icon {
                    background: #E53935;
                }
                .service-card h3 {
                    font-size: 1.25rem;
                    font-weight: 600;
                    margin-bottom: 1rem;
                }
                .service-card p {
                    font-size: 0.875rem;
                    color: #4B5563;
                    line-height: 1.6;
                    margin-bottom: 1.5rem;
                }
                .service-card ul {
                    list-style: none;
                    padding: 0;
                }
                .service-card li {
                    display: flex;
                    align-items: flex-start;
                    font-size: 0.875rem;
                    color: #374151;
                    margin-bottom: 0.75rem;
                }
                @media (max-width: 768px) {
                    .services-grid {
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

    #[test]
    fn cards_rise_further_than_the_heading() {
        let specs = reveal_specs();
        assert_eq!(specs.len(), 2);
        assert_eq!(specs[0].tween.from.y, 40.0);

        let cards = &specs[1];
        assert_eq!(cards.target, Target::ChildrenOf(".services-grid"));
        assert_eq!(cards.tween.from.y, 60.0);
        assert_eq!(cards.tween.duration_ms, 700);
        assert_eq!(cards.tween.stagger_ms, 150);
        assert_eq!(cards.tween.delay_ms, 0);
    }
}
