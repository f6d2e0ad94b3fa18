//! Static site content as typed data.
//!
//! Everything rendered by the section components lives here so the view
//! layer only iterates and styles.

/// Sections reachable from the navbar, in display order. Anchor ids are the
/// lowercased titles.
pub const NAV_SECTIONS: [&str; 5] = ["About", "Skills", "Experience", "Projects", "Contact"];

pub fn section_anchor(section: &str) -> String {
    format!("#{}", section.to_lowercase())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    AiMl,
    Backend,
    Cloud,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::AiMl, Category::Backend, Category::Cloud];

    pub fn label(&self) -> &'static str {
        match self {
            Category::AiMl => "AI/ML",
            Category::Backend => "Backend",
            Category::Cloud => "Cloud",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Skill {
    pub name: &'static str,
    /// Proficiency as a percentage, drives the bar width.
    pub level: u8,
}

#[derive(Debug, Clone, Copy)]
pub struct SkillCategory {
    pub title: &'static str,
    pub icon: &'static str,
    pub skills: &'static [Skill],
}

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "AI/ML Stack",
        icon: "🧠",
        skills: &[
            Skill { name: "Python", level: 90 },
            Skill { name: "TensorFlow", level: 85 },
            Skill { name: "LangChain", level: 80 },
            Skill { name: "RAG Systems", level: 80 },
            Skill { name: "Neural Networks", level: 75 },
        ],
    },
    SkillCategory {
        title: "Backend Mastery",
        icon: "🗄️",
        skills: &[
            Skill { name: "Django", level: 90 },
            Skill { name: "FastAPI", level: 85 },
            Skill { name: "Node.js", level: 80 },
            Skill { name: "Docker", level: 85 },
            Skill { name: "Redis", level: 75 },
            Skill { name: "PostgreSQL", level: 85 },
        ],
    },
    SkillCategory {
        title: "Cloud Infrastructure",
        icon: "☁️",
        skills: &[
            Skill { name: "AWS", level: 80 },
            Skill { name: "Azure", level: 75 },
            Skill { name: "Kubernetes", level: 70 },
            Skill { name: "CI/CD Pipelines", level: 80 },
        ],
    },
    SkillCategory {
        title: "Integration Expertise",
        icon: "🔗",
        skills: &[
            Skill { name: "REST APIs", level: 90 },
            Skill { name: "GraphQL", level: 80 },
            Skill { name: "WebSockets", level: 75 },
            Skill { name: "Third-party Services", level: 85 },
        ],
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Experience {
    pub company: &'static str,
    pub role: &'static str,
    pub period: &'static str,
    pub location: &'static str,
    pub description: &'static str,
    pub achievements: &'static [&'static str],
    pub skills: &'static [&'static str],
}

pub const EXPERIENCES: &[Experience] = &[
    Experience {
        company: "Darwix AI",
        role: "Senior AI Engineer",
        period: "Jan 2023 - Present",
        location: "Gurugram, India",
        description: "Leading the development of real-time AI systems for predictive analytics and decision support.",
        achievements: &[
            "Architected and deployed an end-to-end document intelligence system that reduced manual processing by 85%",
            "Led a team of 5 engineers in developing an NLP-powered customer support automation platform",
            "Optimized ML inference pipelines, reducing latency by 60% and cloud costs by 40%",
        ],
        skills: &["TensorFlow", "LangChain", "RAG", "Python", "FastAPI", "AWS"],
    },
    Experience {
        company: "Xeloop Media",
        role: "Backend Developer",
        period: "Mar 2021 - Dec 2022",
        location: "Remote",
        description: "Designed and implemented the backend infrastructure for an SSP (Supply-Side Platform) in the digital advertising space.",
        achievements: &[
            "Built high-throughput API endpoints handling 50,000+ requests per minute",
            "Implemented real-time data processing pipelines for ad performance analytics",
            "Designed and maintained database schemas supporting complex queries across millions of records",
        ],
        skills: &["Node.js", "PostgreSQL", "Redis", "Docker", "RESTful APIs"],
    },
    Experience {
        company: "StudyAsan",
        role: "Full Stack Developer",
        period: "Jun 2020 - Feb 2021",
        location: "Remote",
        description: "Developed an educational platform that connects students with tutors and provides interactive learning tools.",
        achievements: &[
            "Created a video conferencing system with integrated whiteboard and document sharing",
            "Implemented an automated scheduling system that increased tutor utilization by 35%",
            "Developed responsive user interfaces that improved user engagement metrics by 45%",
        ],
        skills: &["React", "Django", "WebRTC", "PostgreSQL", "AWS"],
    },
    Experience {
        company: "Tex Pvt. Ltd",
        role: "Junior Developer",
        period: "Jan 2019 - May 2020",
        location: "Delhi, India",
        description: "Worked on developing and maintaining e-commerce systems and inventory management solutions.",
        achievements: &[
            "Contributed to building a product recommendation engine using collaborative filtering",
            "Implemented automated inventory management features that reduced stockouts by 25%",
            "Assisted in migrating legacy systems to a modern microservices architecture",
        ],
        skills: &["Python", "Django", "MySQL", "JavaScript", "RESTful APIs"],
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub company: Option<&'static str>,
    pub emoji: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    /// File name of the embedded code sample, see [`crate::snippets`].
    pub snippet: &'static str,
    pub category: Category,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "BioPrid",
        company: None,
        emoji: "🧪",
        description: "Implemented QSAR and DTI models using CHEMBL and KIBA datasets, improving drug screening accuracy by 15% and reducing development time by 20%.",
        technologies: &["Python", "Machine Learning", "TensorFlow"],
        snippet: "bioprid.py",
        category: Category::AiMl,
    },
    Project {
        title: "Image Reducer",
        company: Some("StudyAsan"),
        emoji: "🖼️",
        description: "Designed an asynchronous image processing API using FastAPI, Celery, Docker, and SQLAlchemy, handling 1,000+ daily tasks with 99% accuracy.",
        technologies: &["FastAPI", "Celery", "Docker", "SQLAlchemy", "MongoDB"],
        snippet: "image-reducer.py",
        category: Category::Backend,
    },
    Project {
        title: "TuneMentor",
        company: Some("Tex Pvt. Ltd."),
        emoji: "🎵",
        description: "Developed a web app extension using Django and deep learning to identify piano keys from audio with 85% accuracy. Deployed via cPanel on CentOS, resolving 60% of deployment issues.",
        technologies: &["Django", "Deep Learning", "MySQL", "cPanel", "CentOS"],
        snippet: "tunementor.py",
        category: Category::AiMl,
    },
];

/// Projects matching the selected category filter, `None` meaning "All".
pub fn filter_projects(filter: Option<Category>) -> Vec<&'static Project> {
    PROJECTS
        .iter()
        .filter(|p| filter.is_none_or(|c| p.category == c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_anchors_are_lowercase_ids() {
        assert_eq!(section_anchor("About"), "#about");
        assert_eq!(section_anchor("Contact"), "#contact");
        for section in NAV_SECTIONS {
            let anchor = section_anchor(section);
            assert!(anchor.starts_with('#'));
            assert_eq!(anchor, anchor.to_lowercase());
        }
    }

    #[test]
    fn test_filter_all_returns_everything() {
        assert_eq!(filter_projects(None).len(), PROJECTS.len());
    }

    #[test]
    fn test_filter_by_category() {
        let ai = filter_projects(Some(Category::AiMl));
        assert_eq!(ai.len(), 2);
        assert!(ai.iter().all(|p| p.category == Category::AiMl));

        let backend = filter_projects(Some(Category::Backend));
        assert_eq!(backend.len(), 1);
        assert_eq!(backend[0].title, "Image Reducer");

        // no cloud projects yet - the filter must still behave
        assert!(filter_projects(Some(Category::Cloud)).is_empty());
    }

    #[test]
    fn test_filters_are_independent() {
        let ai = filter_projects(Some(Category::AiMl));
        let backend = filter_projects(Some(Category::Backend));
        for p in &ai {
            assert!(!backend.iter().any(|b| b.title == p.title));
        }
    }

    #[test]
    fn test_every_project_is_renderable() {
        for p in PROJECTS {
            assert!(!p.title.is_empty());
            assert!(!p.description.is_empty());
            assert!(!p.technologies.is_empty());
            assert!(p.snippet.ends_with(".py"));
        }
    }

    #[test]
    fn test_skill_levels_are_percentages() {
        for cat in SKILL_CATEGORIES {
            assert!(!cat.skills.is_empty());
            for skill in cat.skills {
                assert!(skill.level <= 100, "{} out of range", skill.name);
            }
        }
    }

    #[test]
    fn test_experiences_have_achievements() {
        assert_eq!(EXPERIENCES.len(), 4);
        for exp in EXPERIENCES {
            assert!(!exp.achievements.is_empty());
            assert!(!exp.skills.is_empty());
        }
    }
}
