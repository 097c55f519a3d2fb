use yew::prelude::*;

use crate::content::{image_path, ProjectFilter, PROJECTS};
use crate::navigation::Anchor;
use crate::reveal::binding::{RevealSpec, Target};
use crate::reveal::hook::use_reveal;
use crate::reveal::visual::Tween;

fn reveal_specs() -> Vec<RevealSpec> {
    vec![
        RevealSpec::element(".section-heading", Tween::fade_up(40.0, 800)),
        RevealSpec::on_view(
            ".projects-grid",
            Target::ChildrenOf(".projects-grid"),
            Tween::fade_scale(0.95, 700).staggered(150),
        ),
    ]
}

#[function_component(Projects)]
pub fn projects() -> Html {
    let root = use_reveal("projects", reveal_specs);
    let active_filter = use_state(ProjectFilter::default);

    let shown = active_filter.apply(&PROJECTS);

    html! {
        <section id={Anchor::Proyectos.id()} ref={root} class="page-section tinted">
            <div class="container">
                <div class="section-heading">
                    <span class="eyebrow">{"Proyectos y Experiencia"}</span>
                    <h2>{"Casos de Éxito"}</h2>
                    <p class="section-intro">
                        {"Proyectos que demuestran nuestro compromiso con la excelencia social y el desarrollo responsable."}
                    </p>
                    <div class="divider"></div>
                </div>

                <div class="project-filters">
                    { for ProjectFilter::ALL.iter().map(|filter| {
                        let filter = *filter;
                        let onclick = {
                            let active_filter = active_filter.clone();
                            Callback::from(move |_: MouseEvent| active_filter.set(filter))
                        };
                        html! {
                            <button
                                key={filter.label()}
                                class={classes!("filter-pill", (*active_filter == filter).then(|| "active"))}
                                {onclick}
                            >
                                {filter.label()}
                            </button>
                        }
                    })}
                </div>

                <div class="projects-grid">
                    { for shown.iter().map(|project| html! {
                        <div class="project-card" key={project.id.to_string()}>
                            <div class="project-image">
                                <img src={image_path(project.image)} alt={project.title} />
                                <div class="project-shade"></div>
                                <span class="project-industry">{project.industry.label()}</span>
                                <div class="project-caption">
                                    <div class="project-year">{format!("📅 {}", project.year)}</div>
                                    <h3>{project.title}</h3>
                                </div>
                            </div>
                            <div class="project-body">
                                <div class="project-role">
                                    <span class="accent">{"🏢"}</span>
                                    <div>
                                        <p class="label">{"Rol"}</p>
                                        <p>{project.role}</p>
                                    </div>
                                </div>
                                <p class="project-description">{project.description}</p>
                                <div class="project-result">
                                    <p class="label accent">{"Resultado"}</p>
                                    <p>{project.result}</p>
                                </div>
                                <button class="text-link">{"Ver detalles ↗"}</button>
                            </div>
                        </div>
                    })}
                </div>
            </div>

            <style>
                {r#"
                .project-filters {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 0.75rem;
                    margin-bottom: 3rem;
                }
                .filter-pill {
                    padding: 0.625rem 1.5rem;
                    border-radius: 9999px;
                    font-size: 0.875rem;
                    font-weight: 500;
                    background: #fff;
                    color: #374151;
                    border: 1px solid #E5E7EB;
                    cursor: pointer;
                    transition: all 0.3s;
                }
                .filter-pill:hover {
                    background: #F3F4F6;
                }
                .filter-pill.active {
                    background: #E53935;
                    color: #fff;
                    border-color: #E53935;
                    box-shadow: 0 10px 15px rgba(229, 57, 53, 0.25);
                }
                .projects-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }
                .project-card {
                    background: #fff;
                    border-radius: 1rem;
                    overflow: hidden;
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                    transition: box-shadow 0.5s;
                }
                .project-card:hover {
                    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
                }
                .project-image {
                    position: relative;
                    height: 14rem;
                    overflow: hidden;
                }
                .project-image img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.7s;
                }
                .project-card:hover .project-image img {
                    transform: scale(1.1);
                }
                .project-shade {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to top, rgba(0, 0, 0, 0.6), rgba(0, 0, 0, 0.2), transparent);
                }
                .project-industry {
                    position: absolute;
                    top: 1rem;
                    left: 1rem;
                    padding: 0.25rem 0.75rem;
                    background: rgba(255, 255, 255, 0.9);
                    border-radius: 9999px;
                    font-size: 0.75rem;
                    font-weight: 500;
                    color: #1F2937;
                }
                .project-caption {
                    position: absolute;
                    bottom: 1rem;
                    left: 1rem;
                    right: 1rem;
                    color: #fff;
                }
                .project-caption h3 {
                    font-size: 1.125rem;
                    font-weight: 600;
                    line-height: 1.3;
                }
                .project-year {
                    font-size: 0.875rem;
                    opacity: 0.8;
                    margin-bottom: 0.5rem;
                }
                .project-body {
                    padding: 1.5rem;
                }
                .project-role {
                    display: flex;
                    gap: 0.75rem;
                    margin-bottom: 1rem;
                    font-size: 0.875rem;
                    color: #374151;
                }
                .project-description {
                    font-size: 0.875rem;
                    color: #4B5563;
                    line-height: 1.6;
                    margin-bottom: 1rem;
                }
                .project-result {
                    background: #FEF2F2;
                    border-radius: 0.5rem;
                    padding: 1rem;
                    margin-bottom: 1rem;
                    font-size: 0.875rem;
                    color: #374151;
                }
                @media (max-width: 1024px) {
                    .projects-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }
                @media (max-width: 768px) {
                    .projects-grid {
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
    fn cards_scale_in_with_stagger() {
        let specs = reveal_specs();
        assert_eq!(specs.len(), 2);

        let cards = &specs[1];
        assert_eq!(cards.target, Target::ChildrenOf(".projects-grid"));
        assert_eq!(cards.tween.from.scale, 0.95);
        assert_eq!(cards.tween.from.y, 0.0);
        assert_eq!(cards.tween.duration_ms, 700);
        assert_eq!(cards.tween.stagger_ms, 150);
    }
}
