use yew::prelude::*;

use crate::content::{image_path, POSTS};
use crate::navigation::Anchor;
use crate::reveal::binding::{RevealSpec, Target};
use crate::reveal::hook::use_reveal;
use crate::reveal::visual::Tween;

fn reveal_specs() -> Vec<RevealSpec> {
    vec![
        RevealSpec::element(".section-heading", Tween::fade_up(40.0, 800)),
        RevealSpec::on_view(
            ".posts-grid",
            Target::ChildrenOf(".posts-grid"),
            Tween::fade_up(50.0, 700).staggered(100),
        ),
    ]
}

#[function_component(Blog)]
pub fn blog() -> Html {
    let root = use_reveal("blog", reveal_specs);

    html! {
        <section id={Anchor::Blog.id()} ref={root} class="page-section tinted">
            <div class="container">
                <div class="section-heading split">
                    <div>
                        <span class="eyebrow">{"Blog"}</span>
                        <h2>{"Insights y Artículos"}</h2>
                        <p class="section-intro narrow">
                            {"Reflexiones y conocimiento sobre gestión social y comunitaria."}
                        </p>
                    </div>
                    <a href="#" class="text-link">{"Ver todos los artículos →"}</a>
                </div>

                <div class="posts-grid">
                    { for POSTS.iter().map(|post| html! {
                        <article class="post-card" key={post.id.to_string()}>
                            <div class="post-image">
                                <img src={image_path(post.image)} alt={post.title} />
                            </div>
                            <div class="post-body">
                                <span class="post-category">{post.category}</span>
                                <h3>{post.title}</h3>
                                <p>{post.excerpt}</p>
                                <div class="post-footer">
                                    <span class="muted">{format!("🕒 {} de lectura", post.read_time)}</span>
                                    <button class="text-link">{"Leer más →"}</button>
                                </div>
                            </div>
                        </article>
                    })}
                </div>
            </div>

            <style>
                {r#"
                .section-heading.split {
                    display: flex;
                    align-items: flex-end;
                    justify-content: space-between;
                    text-align: left;
                    margin-bottom: 3rem;
                }
                .posts-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }
                .post-card {
                    background: #fff;
                    border-radius: 1rem;
                    overflow: hidden;
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                    transition: box-shadow 0.5s;
                }
                .post-card:hover {
                    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
                }
                .post-image {
                    height: 13rem;
                    overflow: hidden;
                }
                .post-image img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.7s;
                }
                .post-card:hover .post-image img {
                    transform: scale(1.1);
                }
                .post-body {
                    padding: 1.5rem;
                }
                .post-category {
                    display: inline-block;
                    padding: 0.25rem 0.75rem;
                    background: #FEE2E2;
                    color: #E53935;
                    font-size: 0.75rem;
                    font-weight: 500;
                    border-radius: 9999px;
                    margin-bottom: 1rem;
                }
                .post-body h3 {
                    font-size: 1.25rem;
                    font-weight: 600;
                    margin-bottom: 0.75rem;
                    transition: color 0.3s;
                }
                .post-card:hover h3 {
                    color: #E53935;
                }
                .post-body p {
                    font-size: 0.875rem;
                    color: #4B5563;
                    line-height: 1.6;
                    margin-bottom: 1rem;
                }
                .post-footer {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    font-size: 0.875rem;
                }
                @media (max-width: 1024px) {
                    .section-heading.split {
                        flex-direction: column;
                        align-items: flex-start;
                        gap: 1.5rem;
                    }
                    .posts-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }
                @media (max-width: 768px) {
                    .posts-grid {
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
    fn posts_fade_up_one_after_another() {
        let specs = reveal_specs();
        assert_eq!(specs.len(), 2);

        let posts = &specs[1];
        assert_eq!(posts.target, Target::ChildrenOf(".posts-grid"));
        assert_eq!(posts.tween.from.y, 50.0);
        assert_eq!(posts.tween.duration_ms, 700);
        assert_eq!(posts.tween.stagger_ms, 100);
    }
}
