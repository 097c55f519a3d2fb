use chrono::Datelike;
use yew::prelude::*;

use crate::content::{image_path, CONTACT_ADDRESS, CONTACT_EMAIL, CONTACT_PHONE, FOOTER_LINKS, FOOTER_SERVICES};
use crate::navigation::{Anchor, AnchorLink};

pub fn copyright(year: i32) -> String {
    format!("© {} GISOC. Todos los derechos reservados.", year)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="container footer-grid">
                <div class="footer-brand">
                    <img src={image_path("gisoc-logo.png")} alt="GISOC Logo" />
                    <p>
                        {"Consultora especializada en gestión comunitaria, estudios sociales y asesoría estratégica para proyectos complejos."}
                    </p>
                    <a href="#" class="footer-social" aria-label="LinkedIn">{"in"}</a>
                </div>

                <div>
                    <h3>{"Navegación"}</h3>
                    <ul>
                        { for FOOTER_LINKS.iter().map(|anchor| html! {
                            <li key={anchor.id()}>
                                <AnchorLink anchor={*anchor}>{anchor.label()}</AnchorLink>
                            </li>
                        })}
                    </ul>
                </div>

                <div>
                    <h3>{"Servicios"}</h3>
                    <ul>
                        { for FOOTER_SERVICES.iter().map(|service| html! {
                            <li key={*service}>
                                <AnchorLink anchor={Anchor::Servicios}>{*service}</AnchorLink>
                            </li>
                        })}
                    </ul>
                </div>

                <div>
                    <h3>{"Contacto"}</h3>
                    <ul class="footer-contact">
                        <li>
                            <span class="accent">{"✉️"}</span>
                            <a href={format!("mailto:{}", CONTACT_EMAIL)}>{CONTACT_EMAIL}</a>
                        </li>
                        <li>
                            <span class="accent">{"📞"}</span>
                            <a href="tel:+562XXXXXXXX">{CONTACT_PHONE}</a>
                        </li>
                        <li>
                            <span class="accent">{"📍"}</span>
                            <span>{CONTACT_ADDRESS}</span>
                        </li>
                    </ul>
                </div>
            </div>

            <div class="footer-bottom">
                <div class="container footer-bottom-row">
                    <p>{copyright(year)}</p>
                    <div class="legal-links">
                        <a href="#">{"Política de privacidad"}</a>
                        <a href="#">{"Términos de uso"}</a>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .site-footer {
                    background: #1A1A1A;
                    color: #fff;
                }
                .footer-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 3rem;
                    padding-top: 4rem;
                    padding-bottom: 4rem;
                }
                .footer-brand img {
                    height: 3.5rem;
                    width: auto;
                    margin-bottom: 1.5rem;
                    filter: brightness(0) invert(1);
                }
                .footer-brand p {
                    color: #9CA3AF;
                    font-size: 0.875rem;
                    line-height: 1.6;
                    margin-bottom: 1.5rem;
                }
                .footer-social {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.1);
                    color: #fff;
                    font-weight: 700;
                    text-decoration: none;
                    transition: background 0.3s;
                }
                .footer-social:hover {
                    background: #E53935;
                }
                .site-footer h3 {
                    font-size: 1.125rem;
                    font-weight: 600;
                    margin-bottom: 1.5rem;
                }
                .site-footer ul {
                    list-style: none;
                    padding: 0;
                }
                .site-footer li {
                    margin-bottom: 0.75rem;
                }
                .site-footer ul a {
                    color: #9CA3AF;
                    font-size: 0.875rem;
                    text-decoration: none;
                    transition: color 0.3s;
                }
                .site-footer ul a:hover {
                    color: #fff;
                }
                .footer-contact li {
                    display: flex;
                    gap: 0.75rem;
                    color: #9CA3AF;
                    font-size: 0.875rem;
                }
                .footer-bottom {
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                }
                .footer-bottom-row {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding-top: 1.5rem;
                    padding-bottom: 1.5rem;
                    color: #6B7280;
                    font-size: 0.875rem;
                }
                .legal-links {
                    display: flex;
                    gap: 1.5rem;
                }
                .legal-links a {
                    color: #6B7280;
                    text-decoration: none;
                }
                .legal-links a:hover {
                    color: #fff;
                }
                @media (max-width: 1024px) {
                    .footer-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }
                @media (max-width: 768px) {
                    .footer-grid {
                        grid-template-columns: 1fr;
                    }
                    .footer-bottom-row {
                        flex-direction: column;
                        gap: 1rem;
                    }
                }
                "#}
            </style>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_carries_the_year() {
        assert_eq!(copyright(2026), "© 2026 GISOC. Todos los derechos reservados.");
    }
}
