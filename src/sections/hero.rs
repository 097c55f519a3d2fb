use log::debug;
use yew::prelude::*;

use crate::content::{image_path, HERO_SERVICES};
use crate::navigation::{Anchor, AnchorLink};
use crate::reveal::binding::{RevealSpec, Target};
use crate::reveal::hook::use_reveal;
use crate::reveal::timeline::Timeline;
use crate::reveal::visual::Tween;

// Intro sequence, played once on mount rather than on scroll.
fn reveal_specs() -> Vec<RevealSpec> {
    let targets = [
        Target::Element(".hero-headline"),
        Target::Element(".hero-subheadline"),
        Target::Element(".hero-text"),
        Target::ChildrenOf(".hero-services"),
        Target::Element(".hero-cta"),
        Target::Element(".hero-visual"),
    ];
    let timeline = Timeline::new()
        .then(Tween::fade_up(40.0, 800), 1, 0)
        .then(Tween::fade_up(30.0, 700), 1, 500)
        .then(Tween::fade_up(30.0, 700), 1, 400)
        .then(Tween::fade_from_x(-20.0, 500).staggered(100), HERO_SERVICES.len(), 300)
        .then(Tween::fade_up(20.0, 600), 1, 200)
        .then(Tween::fade_scale(0.95, 900), 1, 800);
    debug!("hero intro runs for {} ms", timeline.end_ms());
    let steps = timeline.into_steps();

    targets
        .into_iter()
        .zip(steps)
        .map(|(target, tween)| RevealSpec::on_mount(target, tween))
        .collect()
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let root = use_reveal("hero", reveal_specs);

    html! {
        <section id={Anchor::Inicio.id()} ref={root} class="hero">
            <div class="hero-glow hero-glow-right"></div>
            <div class="hero-glow hero-glow-left"></div>

            <div class="container hero-grid">
                <div class="hero-copy">
                    <h1 class="hero-headline">
                        {"Gestión Comunitaria y "}
                        <span class="accent">{"Análisis Social"}</span>
                        {" para Proyectos Complejos"}
                    </h1>
                    <p class="hero-subheadline">
                        {"Acompañamos a empresas e instituciones en la relación con comunidades y partes interesadas, integrando evidencia social, estrategia y enfoque socioambiental."}
                    </p>
                    <p class="hero-text">
                        {"Somos una consultora especializada en investigación social, evaluación socioambiental y gestión comunitaria. Desde 2005 apoyamos a proyectos mineros, energéticos, de infraestructura y diversas industrias en la construcción de relaciones responsables, informadas y sostenibles."}
                    </p>
                    <ul class="hero-services">
                        { for HERO_SERVICES.iter().map(|service| html! {
                            <li key={*service}>
                                <span class="check">{"✓"}</span>
                                {*service}
                            </li>
                        })}
                    </ul>
                    <div class="hero-cta">
                        <AnchorLink anchor={Anchor::Contacto} class="button-primary">
                            {"Conversemos tu proyecto →"}
                        </AnchorLink>
                        <AnchorLink anchor={Anchor::Servicios} class="button-outline">
                            {"Conoce nuestros servicios ›"}
                        </AnchorLink>
                    </div>
                </div>

                <div class="hero-visual">
                    <div class="hero-image">
                        <img src={image_path("hero-team.jpg")} alt="Equipo GISOC colaborando" />
                    </div>
                    <div class="hero-stat">
                        <span class="hero-stat-value">{"19+"}</span>
                        <div>
                            <p class="muted">{"Años de"}</p>
                            <p class="strong">{"Experiencia"}</p>
                        </div>
                    </div>
                    <div class="hero-badge">
                        <p class="hero-badge-value">{"200+"}</p>
                        <p>{"Proyectos"}</p>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    padding-top: 5rem;
                    overflow: hidden;
                    background: #fff;
                }
                .hero-glow {
                    position: absolute;
                    border-radius: 9999px;
                    filter: blur(64px);
                    opacity: 0.6;
                }
                .hero-glow-right {
                    top: 10rem;
                    right: 0;
                    width: 24rem;
                    height: 24rem;
                    background: linear-gradient(to bottom right, #FEF2F2, transparent);
                }
                .hero-glow-left {
                    bottom: 5rem;
                    left: 0;
                    width: 18rem;
                    height: 18rem;
                    background: linear-gradient(to top right, #F3F4F6, transparent);
                }
                .hero-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                    align-items: center;
                    padding-top: 6rem;
                    padding-bottom: 6rem;
                }
                .hero-copy {
                    position: relative;
                    z-index: 10;
                }
                .hero-headline {
                    font-size: 3.75rem;
                    font-weight: 700;
                    line-height: 1.15;
                    color: #111827;
                    margin-bottom: 1.5rem;
                }
                .hero-subheadline {
                    font-size: 1.25rem;
                    font-weight: 500;
                    color: #4B5563;
                    margin-bottom: 1.5rem;
                }
                .hero-text {
                    color: #4B5563;
                    line-height: 1.7;
                    margin-bottom: 2rem;
                }
                .hero-services {
                    list-style: none;
                    padding: 0;
                    margin: 0 0 2.5rem 0;
                }
                .hero-services li {
                    display: flex;
                    align-items: center;
                    color: #374151;
                    margin-bottom: 0.75rem;
                }
                .hero-cta {
                    display: flex;
                    gap: 1rem;
                    flex-wrap: wrap;
                }
                .hero-visual {
                    position: relative;
                }
                .hero-image {
                    border-radius: 1rem;
                    overflow: hidden;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                }
                .hero-image img {
                    width: 100%;
                    height: auto;
                    display: block;
                    object-fit: cover;
                }
                .hero-stat {
                    position: absolute;
                    bottom: -1.5rem;
                    left: -1.5rem;
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    background: #fff;
                    border-radius: 0.75rem;
                    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
                    padding: 1.5rem;
                }
                .hero-stat-value {
                    width: 3.5rem;
                    height: 3.5rem;
                    border-radius: 9999px;
                    background: #FEE2E2;
                    color: #E53935;
                    font-size: 1.5rem;
                    font-weight: 700;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .hero-badge {
                    position: absolute;
                    top: -1rem;
                    right: -1rem;
                    background: #E53935;
                    color: #fff;
                    border-radius: 0.75rem;
                    padding: 1rem;
                    text-align: center;
                    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
                }
                .hero-badge-value {
                    font-size: 1.875rem;
                    font-weight: 700;
                }
                @media (max-width: 1024px) {
                    .hero-grid {
                        grid-template-columns: 1fr;
                        gap: 3rem;
                        padding-top: 4rem;
                    }
                    .hero-headline {
                        font-size: 2.25rem;
                    }
                    .hero-stat, .hero-badge {
                        display: none;
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
    fn intro_plays_on_mount_in_sequence() {
        let specs = reveal_specs();
        assert_eq!(specs.len(), 6);
        assert!(specs.iter().all(|s| s.trigger == Trigger::Mount));

        let starts: Vec<u32> = specs.iter().map(|s| s.tween.delay_ms).collect();
        assert_eq!(starts, vec![0, 300, 600, 1000, 1600, 1400]);
        assert_eq!(specs[3].target, Target::ChildrenOf(".hero-services"));
        assert_eq!(specs[3].tween.stagger_ms, 100);
    }
}
