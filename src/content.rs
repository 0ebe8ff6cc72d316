//! Static page content. Everything here is fixed for the session; the
//! components only ever index into these slices.

/// An addressable piece of content: a service card, a project, ...
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    pub id: &'static str,
    pub title: &'static str,
    pub body: &'static str,
    pub image: Option<&'static str>,
    pub icon: Option<&'static str>,
    pub category: Option<&'static str>,
}

/// Modal body for a service, looked up by the card's id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceTemplate {
    pub id: &'static str,
    pub intro: &'static str,
    pub points: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub label: &'static str,
    pub target: u32,
    pub suffix: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub quote: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { href: "#inicio", label: "Inicio" },
    NavLink { href: "#servicios", label: "Servicios" },
    NavLink { href: "#proyectos", label: "Proyectos" },
    NavLink { href: "#testimonios", label: "Testimonios" },
    NavLink { href: "#faq", label: "Preguntas" },
    NavLink { href: "#contacto", label: "Contacto" },
];

pub const HERO_IMAGES: &[&str] = &[
    "./assets/img/content/hero/hero1.webp",
    "./assets/img/content/hero/hero2.webp",
    "./assets/img/content/hero/hero3.webp",
    "./assets/img/content/hero/hero4.webp",
    "./assets/img/content/hero/hero5.webp",
    "./assets/img/content/hero/hero6.webp",
    "./assets/img/content/hero/hero7.webp",
];

pub const SERVICES: &[Item] = &[
    Item {
        id: "higiene",
        title: "Seguridad e Higiene Laboral",
        body: "Programas integrales para cumplir la normativa vigente y proteger a tu equipo.",
        image: None,
        icon: Some("./assets/img/icons/shield.svg"),
        category: None,
    },
    Item {
        id: "capacitaciones",
        title: "Capacitaciones",
        body: "Formación práctica en prevención de riesgos, uso de EPP y respuesta ante emergencias.",
        image: None,
        icon: Some("./assets/img/icons/training.svg"),
        category: None,
    },
    Item {
        id: "ambiente",
        title: "Gestión Ambiental",
        body: "Estudios de impacto, gestión de residuos y planes de mejora ambiental.",
        image: None,
        icon: Some("./assets/img/icons/leaf.svg"),
        category: None,
    },
    Item {
        id: "auditorias",
        title: "Auditorías",
        body: "Relevamientos e informes técnicos con planes de acción priorizados.",
        image: None,
        icon: Some("./assets/img/icons/clipboard.svg"),
        category: None,
    },
];

pub const SERVICE_TEMPLATES: &[ServiceTemplate] = &[
    ServiceTemplate {
        id: "higiene",
        intro: "Acompañamos a tu empresa en cada etapa del programa de seguridad e higiene.",
        points: &[
            "Relevamiento de riesgos por puesto de trabajo",
            "Mediciones de ruido, iluminación y carga térmica",
            "Confección de legajos técnicos y protocolos",
            "Investigación de accidentes e incidentes",
        ],
    },
    ServiceTemplate {
        id: "capacitaciones",
        intro: "Cursos presenciales y en planta, adaptados a la actividad de cada cliente.",
        points: &[
            "Uso y mantenimiento de elementos de protección personal",
            "Prevención y extinción de incendios",
            "Primeros auxilios y RCP",
            "Trabajo en altura y espacios confinados",
        ],
    },
    ServiceTemplate {
        id: "ambiente",
        intro: "Soluciones ambientales que combinan cumplimiento legal y eficiencia.",
        points: &[
            "Estudios de impacto ambiental",
            "Gestión de residuos peligrosos y especiales",
            "Monitoreo de efluentes y emisiones",
        ],
    },
    ServiceTemplate {
        id: "auditorias",
        intro: "Una mirada externa para detectar brechas antes de que se conviertan en problemas.",
        points: &[
            "Auditorías de cumplimiento normativo",
            "Evaluación de contratistas",
            "Planes de acción con responsables y plazos",
        ],
    },
];

pub const STATS: &[Stat] = &[
    Stat { label: "Años de experiencia", target: 15, suffix: "+" },
    Stat { label: "Empresas asesoradas", target: 120, suffix: "+" },
    Stat { label: "Personas capacitadas", target: 3500, suffix: "" },
    Stat { label: "Provincias", target: 8, suffix: "" },
];

pub const PROJECTS: &[Item] = &[
    Item {
        id: "planta-alimenticia",
        title: "Planta alimenticia",
        body: "Programa de seguridad completo para una planta de 300 operarios, con reducción del 40% en accidentes.",
        image: Some("./assets/img/content/projects/project1.webp"),
        icon: None,
        category: Some("Seguridad e Higiene"),
    },
    Item {
        id: "obra-civil",
        title: "Obra civil en altura",
        body: "Plan de trabajo seguro y capacitación del personal para una obra de doce pisos.",
        image: Some("./assets/img/content/projects/project2.webp"),
        icon: None,
        category: Some("Construcción"),
    },
    Item {
        id: "parque-industrial",
        title: "Parque industrial",
        body: "Gestión de residuos y monitoreo ambiental para las empresas del parque.",
        image: Some("./assets/img/content/projects/project3.webp"),
        icon: None,
        category: Some("Ambiente"),
    },
    Item {
        id: "centro-logistico",
        title: "Centro logístico",
        body: "Auditoría de contratistas y señalización integral de las naves de depósito.",
        image: Some("./assets/img/content/projects/project4.webp"),
        icon: None,
        category: Some("Auditoría"),
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Adrián S.",
        role: "Jefe de planta",
        quote: "Nos ordenaron toda la documentación y el equipo tomó conciencia real del riesgo.",
    },
    Testimonial {
        name: "Juan Carlos Pérez",
        role: "Gerente de obra",
        quote: "Las capacitaciones fueron claras y muy prácticas. Las recomendamos.",
    },
    Testimonial {
        name: "Lucía",
        role: "Responsable de RR.HH.",
        quote: "Respuesta rápida y seguimiento constante en cada auditoría.",
    },
];

pub const FAQ: &[FaqEntry] = &[
    FaqEntry {
        question: "¿Trabajan con empresas de cualquier tamaño?",
        answer: "Sí. Adaptamos el servicio tanto a pymes como a grandes industrias.",
    },
    FaqEntry {
        question: "¿Las capacitaciones se dictan en la empresa?",
        answer: "Pueden dictarse en planta o en nuestras instalaciones, según convenga.",
    },
    FaqEntry {
        question: "¿Cuánto tarda un relevamiento inicial?",
        answer: "Depende de la actividad, pero normalmente entregamos el informe en una o dos semanas.",
    },
    FaqEntry {
        question: "¿Emiten certificados?",
        answer: "Sí, cada capacitación incluye certificado de asistencia y evaluación.",
    },
];

pub const SOCIAL_LINKS: &[NavLink] = &[
    NavLink { href: "https://wa.me/5490000000000", label: "WhatsApp" },
    NavLink { href: "https://www.instagram.com/", label: "Instagram" },
    NavLink { href: "https://www.linkedin.com/", label: "LinkedIn" },
];

pub fn service_index(id: &str) -> Option<usize> {
    SERVICES.iter().position(|s| s.id == id)
}

pub fn service_template(id: &str) -> Option<&'static ServiceTemplate> {
    SERVICE_TEMPLATES.iter().find(|t| t.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_service_has_a_template() {
        for service in SERVICES {
            assert!(service_template(service.id).is_some(), "{}", service.id);
        }
        assert!(service_template("nope").is_none());
    }

    #[test]
    fn projects_carry_lightbox_fields() {
        for project in PROJECTS {
            assert!(project.image.is_some());
            assert!(project.category.is_some());
        }
    }
}
