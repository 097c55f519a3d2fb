use yew::prelude::*;

use crate::content::{image_path, VALUES};
use crate::navigation::Anchor;
use crate::reveal::binding::{RevealSpec, Target};
use crate::reveal::hook::use_reveal;
use crate::reveal::visual::Tween;

fn reveal_specs() -> Vec<RevealSpec> {
    vec![
        RevealSpec::element(".section-heading", Tween::fade_up(40.0, 800)),
        RevealSpec::element(".about-content", Tween::fade_up(40.0, 800).delayed(200)),
        RevealSpec::on_view(
            ".values-grid",
            Target::ChildrenOf(".values-grid"),
            Tween::fade_up(50.0, 700).staggered(150),
        ),
        RevealSpec::element(".about-image", Tween::fade_scale(0.95, 900)),
    ]
}

#[function_component(About)]
pub fn about() -> Html {
    let root = use_reveal("about", reveal_specs);

    html! {
        <section id={Anchor::Nosotros.id()} ref={root} class="page-section tinted">
            <div class="container">
                <div class="section-heading">
                    <span class="eyebrow">{"Sobre Nosotros"}</span>
                    <h2>{"Quiénes Somos"}</h2>
                    <div class="divider"></div>
                </div>

                <div class="about-grid">
                    <div class="about-content">
                        <p class="lead">
                            {"Somos un equipo multidisciplinario dedicado a integrar la dimensión social en el desarrollo de proyectos. Nuestro enfoque combina rigurosidad metodológica, análisis profundo y experiencia en terreno, permitiendo diseñar estrategias efectivas para gestionar riesgos, fortalecer vínculos y promover decisiones informadas."}
                        </p>
                        <div class="about-cards">
                            <div class="card">
                                <div class="icon-tile">{"🎯"}</div>
                                <h3>{"Misión"}</h3>
                                <p>{"Contribuir al desarrollo responsable de proyectos mediante soluciones sociales y socioambientales basadas en evidencia, diálogo y una gestión transparente."}</p>
                            </div>
                            <div class="card">
                                <div class="icon-tile">{"👁"}</div>
                                <h3>{"Visión"}</h3>
                                <p>{"Ser un referente nacional en investigación social aplicada y gestión comunitaria estratégica para industrias que buscan operar con excelencia social."}</p>
                            </div>
                        </div>
                    </div>

                    <div class="about-image">
                        <img src={image_path("about-team.jpg")} alt="Equipo GISOC" />
                    </div>
                </div>

                <h3 class="subheading">{"Nuestros Valores"}</h3>
                <div class="values-grid">
                    { for VALUES.iter().map(|value| html! {
                        <div class="value-card" key={value.text}>
                            <div class="icon-round">{value.icon}</div>
                            <p>{value.text}</p>
                        </div>
                    })}
                </div>
            </div>

            <style>
                {r#"
                .about-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                    align-items: start;
                    margin-bottom: 4rem;
                }
                .about-cards {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1.5rem;
                }
                .about-cards .card h3 {
                    font-size: 1.125rem;
                    font-weight: 600;
                    margin-bottom: 0.5rem;
                }
                .about-cards .card p {
                    font-size: 0.875rem;
                    color: #4B5563;
                    line-height: 1.6;
                }
                .about-image img {
                    width: 100%;
                    border-radius: 1rem;
                    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
                }
                .values-grid {
                    display: grid;
                    grid-template-columns: repeat(5, 1fr);
                    gap: 1rem;
                }
                .value-card {
                    background: #fff;
                    border-radius: 0.75rem;
                    padding: 1.5rem;
                    text-align: center;
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                    transition: box-shadow 0.3s;
                }
                .value-card:hover {
                    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                }
                .value-card p {
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: #374151;
                }
                @media (max-width: 1024px) {
                    .about-grid {
                        grid-template-columns: 1fr;
                    }
                    .values-grid {
                        grid-template-columns: repeat(2, 1fr);
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
    fn content_trails_heading_and_values_stagger() {
        let specs = reveal_specs();
        assert_eq!(specs.len(), 4);

        assert_eq!(specs[0].tween.from.y, 40.0);
        assert_eq!(specs[0].tween.duration_ms, 800);
        assert_eq!(specs[1].trigger, Trigger::Viewport(".about-content"));
        assert_eq!(specs[1].tween.delay_ms, 200);

        let values = &specs[2];
        assert_eq!(values.target, Target::ChildrenOf(".values-grid"));
        assert_eq!(values.tween.from.y, 50.0);
        assert_eq!(values.tween.duration_ms, 700);
        assert_eq!(values.tween.stagger_ms, 150);

        assert_eq!(specs[3].tween.from.scale, 0.95);
        assert_eq!(specs[3].tween.duration_ms, 900);
    }
}
