use crate::animation::filter::Tagged;

pub const OWNER_NAME: &str = "Truong Nguyen";

pub struct NavLink {
    pub name: &'static str,
    pub section: &'static str,
}

pub static NAV_LINKS: [NavLink; 6] = [
    NavLink { name: "Home", section: "home" },
    NavLink { name: "About Me", section: "about" },
    NavLink { name: "Services", section: "services" },
    NavLink { name: "Projects", section: "projects" },
    NavLink { name: "Testimonials", section: "testimonials" },
    NavLink { name: "Contact", section: "contact" },
];

pub fn section_ids() -> Vec<&'static str> {
    NAV_LINKS.iter().map(|link| link.section).collect()
}

pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub glyph: &'static str,
    pub hover_class: &'static str,
}

pub static SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink { label: "Facebook", href: "#", glyph: "f", hover_class: "social--facebook" },
    SocialLink { label: "Github", href: "#", glyph: "gh", hover_class: "social--github" },
    SocialLink { label: "LinkedIn", href: "#", glyph: "in", hover_class: "social--linkedin" },
    SocialLink { label: "YouTube", href: "#", glyph: "▶", hover_class: "social--youtube" },
];

pub struct Skill {
    pub name: &'static str,
    pub level: u32,
}

pub static SKILLS: [Skill; 5] = [
    Skill { name: "JavaScript", level: 95 },
    Skill { name: "TypeScript", level: 90 },
    Skill { name: "React", level: 88 },
    Skill { name: "Node.js", level: 85 },
    Skill { name: "Next.js", level: 92 },
];

pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub static SERVICES: [Service; 8] = [
    Service {
        icon: "🖥️",
        title: "Frontend (React/Next.js)",
        description: "Build fast, accessible UIs with solid SEO and Core Web Vitals.",
    },
    Service {
        icon: "🗄️",
        title: "Backend API (Node/NestJS)",
        description: "Design secure REST/GraphQL APIs with authentication and rate limiting.",
    },
    Service {
        icon: "💬",
        title: "Microservices & Messaging",
        description: "Decouple services and scale with asynchronous communication.",
    },
    Service {
        icon: "🛢️",
        title: "Database & ORM",
        description: "Schema design and query optimization for high throughput.",
    },
    Service {
        icon: "⚙️",
        title: "DevOps & CI/CD",
        description: "Reliable deployments with automated pipelines and rollbacks.",
    },
    Service {
        icon: "☁️",
        title: "Cloud & Infrastructure",
        description: "Hardened environments with monitoring, logging, and SSL.",
    },
    Service {
        icon: "⚡",
        title: "Performance & SEO",
        description: "Speed audits and search visibility for business impact.",
    },
    Service {
        icon: "🛡️",
        title: "Testing & Quality",
        description: "Confidence before release with automated testing.",
    },
];

#[derive(Debug, PartialEq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub image: &'static str,
    pub tags: &'static [&'static str],
    pub github: &'static str,
    pub demo: &'static str,
}

impl Tagged for Project {
    fn tags(&self) -> &[&'static str] {
        self.tags
    }
}

pub static PROJECTS: [Project; 3] = [
    Project {
        id: 1,
        title: "Booking Dashboard",
        image: "/project-1.jpg",
        tags: &["React", "Next.js", "TypeScript", "Dashboard System", "Tailwind"],
        github: "#",
        demo: "#",
    },
    Project {
        id: 2,
        title: "E-commerce API",
        image: "/project-2.jpg",
        tags: &["Backend System", "Node.js", "NestJS", "PostgreSQL", "Docker"],
        github: "#",
        demo: "#",
    },
    Project {
        id: 3,
        title: "Realtime Chat App",
        image: "/project-3.jpg",
        tags: &["Next.js", "React", "TypeScript", "Redis", "WebSocket"],
        github: "#",
        demo: "#",
    },
];

pub struct Testimonial {
    pub id: u32,
    pub name: &'static str,
    pub role: &'static str,
    pub avatar: &'static str,
    pub quote: &'static str,
    pub rating: usize,
}

const LOREM_QUOTE: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod tempor incididunt ut labore et dolore magna aliqua.";

pub static TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        id: 1,
        name: "John Doe",
        role: "CEO of Acme Inc.",
        avatar: "/avatar-1.jpg",
        quote: LOREM_QUOTE,
        rating: 5,
    },
    Testimonial {
        id: 2,
        name: "Jane Smith",
        role: "Product Manager",
        avatar: "/avatar-2.jpg",
        quote: LOREM_QUOTE,
        rating: 5,
    },
    Testimonial {
        id: 3,
        name: "Bob Johnson",
        role: "Software Engineer",
        avatar: "/avatar-3.jpg",
        quote: LOREM_QUOTE,
        rating: 5,
    },
];

pub const LOREM_INTRO: &str = "Lorem ipsum dolor sit amet consectetur adipisicing elit. Lorem ipsum dolor sit amet consectetur. Tristique amet sed massa nibh lectus netus in.";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::filter::{filter_items, Category};

    #[test]
    fn every_category_tab_matches_some_project() {
        for category in Category::TABS {
            assert!(!filter_items(&PROJECTS, category).is_empty(), "{:?}", category);
        }
    }

    #[test]
    fn nav_sections_are_unique() {
        let mut ids = section_ids();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), NAV_LINKS.len());
    }
}
