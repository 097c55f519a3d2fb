use crate::config;
use crate::navigation::Anchor;

pub fn image_path(name: &str) -> String {
    format!("{}/{}", config::IMAGE_ROOT, name)
}

pub const HERO_SERVICES: [&str; 4] = [
    "Estudios Sociales y Socioambientales",
    "Relacionamiento Comunitario",
    "Due Diligence Social (IFC / Banca Internacional)",
    "Procesos Participativos y Consulta Indígena",
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Value {
    pub icon: &'static str,
    pub text: &'static str,
}

pub const VALUES: [Value; 5] = [
    Value { icon: "📈", text: "Rigor metodológico" },
    Value { icon: "💡", text: "Transparencia" },
    Value { icon: "📍", text: "Enfoque territorial" },
    Value { icon: "💬", text: "Diálogo y participación" },
    Value { icon: "👥", text: "Innovación en análisis social" },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub items: &'static [&'static str],
}

pub const SERVICES: [Service; 4] = [
    Service {
        icon: "👥",
        title: "Gestión Comunitaria",
        description: "Desarrollamos estrategias de relacionamiento y gestión comunitaria que fortalecen la confianza entre proyectos, comunidades y actores relevantes.",
        items: &[
            "Estrategias de relacionamiento comunitario",
            "Planes con partes interesadas",
            "Procesos participativos",
            "Consulta indígena",
            "Programas de reasentamiento",
            "Gestión de conflictos",
        ],
    },
    Service {
        icon: "📋",
        title: "Estudios Sociales",
        description: "Aplicamos metodologías de investigación social para comprender el territorio, sus dinámicas y su tejido social.",
        items: &[
            "Estudios socioeconómicos",
            "Levantamiento en terreno",
            "Diagnósticos sociales",
            "Evaluación socioambiental",
            "Mapas de actores",
            "Monitoreo social",
        ],
    },
    Service {
        icon: "📄",
        title: "Asesoría Estratégica",
        description: "Apoyamos en el diseño y fortalecimiento de políticas, procedimientos y estándares sociales alineados a buenas prácticas.",
        items: &[
            "Due diligence social",
            "Normativas y procedimientos",
            "Evaluación de riesgos",
            "Implementación de estándares",
            "Capacitación interna",
        ],
    },
    Service {
        icon: "🏢",
        title: "Industrias",
        description: "Nuestra experiencia abarca industrias que requieren integrar la dimensión social de manera estratégica y rigurosa.",
        items: &[
            "Minería",
            "Energías Renovables",
            "Infraestructura",
            "Acuicultura",
            "Proyectos industriales",
            "Otros sectores",
        ],
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Industry {
    Mineria,
    Energia,
    Infraestructura,
}

impl Industry {
    pub fn label(self) -> &'static str {
        match self {
            Industry::Mineria => "Minería",
            Industry::Energia => "Energía",
            Industry::Infraestructura => "Infraestructura",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub industry: Industry,
    pub year: &'static str,
    pub role: &'static str,
    pub description: &'static str,
    pub result: &'static str,
    pub image: &'static str,
}

pub const PROJECTS: [Project; 3] = [
    Project {
        id: 1,
        title: "Evaluación Socioambiental - Proyecto Minero Andes",
        industry: Industry::Mineria,
        year: "2023",
        role: "Coordinación de estudio socioeconómico y análisis de partes interesadas",
        description: "Desarrollamos el levantamiento socioeconómico y cultural del área de influencia, identificando riesgos sociales y oportunidades para el fortalecimiento del relacionamiento comunitario.",
        result: "Información clave para la toma de decisiones y el cumplimiento de compromisos socioambientales.",
        image: "project-mining.jpg",
    },
    Project {
        id: 2,
        title: "Consulta Indígena - Parque Eólico Patagonia",
        industry: Industry::Energia,
        year: "2022",
        role: "Diseño y facilitación de proceso de consulta indígena",
        description: "Acompañamos el diálogo entre la empresa y comunidades indígenas del territorio, garantizando el respeto a derechos colectivos y la participación informada.",
        result: "Acuerdos de relación mutuamente beneficiosos y licenciamiento social del proyecto.",
        image: "project-energy.jpg",
    },
    Project {
        id: 3,
        title: "Due Diligence Social - Terminal Portuario Pacífico",
        industry: Industry::Infraestructura,
        year: "2023",
        role: "Evaluación de riesgos sociales para banca internacional",
        description: "Realizamos due diligence social alineado a estándares IFC, evaluando el desempeño social del proyecto y proponiendo planes de acción.",
        result: "Cierre de financiamiento con condicionalidades sociales claras y alcanzables.",
        image: "project-port.jpg",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ProjectFilter {
    #[default]
    Todos,
    Only(Industry),
}

impl ProjectFilter {
    pub const ALL: [ProjectFilter; 4] = [
        ProjectFilter::Todos,
        ProjectFilter::Only(Industry::Mineria),
        ProjectFilter::Only(Industry::Energia),
        ProjectFilter::Only(Industry::Infraestructura),
    ];

    pub fn label(self) -> &'static str {
        match self {
            ProjectFilter::Todos => "Todos",
            ProjectFilter::Only(industry) => industry.label(),
        }
    }

    pub fn matches(self, project: &Project) -> bool {
        match self {
            ProjectFilter::Todos => true,
            ProjectFilter::Only(industry) => project.industry == industry,
        }
    }

    /// Keeps list order.
    pub fn apply<'a>(self, projects: &'a [Project]) -> Vec<&'a Project> {
        projects.iter().filter(|p| self.matches(p)).collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Step {
    pub number: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const STEPS: [Step; 5] = [
    Step {
        number: "01",
        icon: "🔍",
        title: "Diagnóstico territorial",
        description: "Comprendemos el contexto social, cultural y económico del territorio.",
    },
    Step {
        number: "02",
        icon: "🗄️",
        title: "Levantamiento de información",
        description: "Recopilamos datos cualitativos y cuantitativos rigurosos.",
    },
    Step {
        number: "03",
        icon: "💡",
        title: "Diseño de estrategia",
        description: "Desarrollamos soluciones adaptadas a cada contexto y proyecto.",
    },
    Step {
        number: "04",
        icon: "🚀",
        title: "Implementación",
        description: "Ejecutamos y supervisamos la puesta en marcha de las estrategias.",
    },
    Step {
        number: "05",
        icon: "📊",
        title: "Evaluación continua",
        description: "Medimos resultados y ajustamos para optimizar el impacto.",
    },
];

pub const BENEFITS: [&str; 4] = [
    "Basada en evidencia",
    "Enfoque participativo",
    "Adaptable a distintas industrias",
    "Alineada a estándares internacionales",
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlogPost {
    pub id: u32,
    pub title: &'static str,
    pub category: &'static str,
    pub excerpt: &'static str,
    pub image: &'static str,
    pub read_time: &'static str,
}

pub const POSTS: [BlogPost; 3] = [
    BlogPost {
        id: 1,
        title: "Gestión comunitaria en proyectos de gran escala",
        category: "Gestión Comunitaria",
        excerpt: "Claves para construir relaciones sostenibles entre proyectos industriales y comunidades locales.",
        image: "blog-community.jpg",
        read_time: "5 min",
    },
    BlogPost {
        id: 2,
        title: "Buenas prácticas en evaluación socioambiental",
        category: "Estudios Sociales",
        excerpt: "Metodologías efectivas para comprender el impacto social de los proyectos de inversión.",
        image: "blog-analysis.jpg",
        read_time: "7 min",
    },
    BlogPost {
        id: 3,
        title: "Tendencias en consulta indígena",
        category: "Consulta Indígena",
        excerpt: "Evolución del marco normativo y prácticas emergentes en el diálogo con pueblos indígenas.",
        image: "blog-indigenous.jpg",
        read_time: "6 min",
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContactInfo {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: &'static str,
    pub href: &'static str,
}

pub const CONTACT_EMAIL: &str = "contacto@gisoc.cl";
pub const CONTACT_PHONE: &str = "+56 2 XXXX XXXX";
pub const CONTACT_ADDRESS: &str = "Santiago, Chile";

pub const CONTACT_INFO: [ContactInfo; 4] = [
    ContactInfo {
        icon: "✉️",
        label: "Email",
        value: CONTACT_EMAIL,
        href: "mailto:contacto@gisoc.cl",
    },
    ContactInfo {
        icon: "📞",
        label: "Teléfono",
        value: CONTACT_PHONE,
        href: "tel:+562XXXXXXXX",
    },
    ContactInfo {
        icon: "📍",
        label: "Dirección",
        value: CONTACT_ADDRESS,
        href: "#",
    },
    ContactInfo {
        icon: "🕘",
        label: "Horario",
        value: "Lunes a Viernes, 9:00 - 18:00",
        href: "#",
    },
];

pub const FOOTER_LINKS: [Anchor; 5] = [
    Anchor::Inicio,
    Anchor::Nosotros,
    Anchor::Servicios,
    Anchor::Proyectos,
    Anchor::Contacto,
];

pub const FOOTER_SERVICES: [&str; 4] = [
    "Gestión Comunitaria",
    "Estudios Sociales",
    "Asesoría Estratégica",
    "Due Diligence",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mining_filter_keeps_only_mining() {
        let filter = ProjectFilter::Only(Industry::Mineria);
        assert_eq!(filter.label(), "Minería");
        let shown = filter.apply(&PROJECTS);
        assert_eq!(shown.len(), 1);
        assert!(shown.iter().all(|p| p.industry == Industry::Mineria));
        assert_eq!(shown[0].id, 1);
    }

    #[test]
    fn todos_keeps_everything_in_order() {
        let shown = ProjectFilter::Todos.apply(&PROJECTS);
        let ids: Vec<u32> = shown.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn every_filter_is_an_exact_subset() {
        for filter in ProjectFilter::ALL {
            let expected: Vec<u32> = PROJECTS
                .iter()
                .filter(|p| filter == ProjectFilter::Todos || filter.label() == p.industry.label())
                .map(|p| p.id)
                .collect();
            let shown: Vec<u32> = filter.apply(&PROJECTS).iter().map(|p| p.id).collect();
            assert_eq!(shown, expected, "filter {}", filter.label());
        }
    }

    #[test]
    fn filter_labels_in_display_order() {
        let labels: Vec<&str> = ProjectFilter::ALL.iter().map(|f| f.label()).collect();
        assert_eq!(labels, vec!["Todos", "Minería", "Energía", "Infraestructura"]);
    }

    #[test]
    fn images_live_under_the_image_root() {
        assert_eq!(image_path("hero-team.jpg"), "/images/hero-team.jpg");
        for project in PROJECTS {
            assert!(image_path(project.image).starts_with("/images/"));
        }
    }

    #[test]
    fn footer_links_point_at_page_anchors() {
        for anchor in FOOTER_LINKS {
            assert!(Anchor::ALL.contains(&anchor));
        }
        assert!(!FOOTER_LINKS.contains(&Anchor::Blog));
    }
}
