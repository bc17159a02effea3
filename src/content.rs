//! Hand-authored site content. Nothing here is fetched.

pub struct Profile {
    pub name: &'static str,
    pub initials: &'static str,
    pub headline: &'static str,
    pub tagline: &'static str,
    pub github: &'static str,
    pub linkedin_url: &'static str,
    pub email: &'static str,
    pub resume_path: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Muthu Ajay",
    initials: "MA",
    headline: "Data Scientist & ML Engineer",
    tagline: "Transforming Data into Intelligence with Deep Learning, Computer Vision, and LLMs",
    github: "muthuajay",
    linkedin_url: "https://www.linkedin.com/in/muthu-ajay-b2a817195/",
    email: "muthuajay97@gmail.com",
    resume_path: "/resume.pdf",
};

impl Profile {
    pub fn github_url(&self) -> String {
        format!("https://github.com/{}", self.github)
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

pub struct NavLink {
    pub label: &'static str,
    pub anchor: &'static str,
}

impl NavLink {
    pub fn href(&self) -> String {
        format!("#{}", self.anchor)
    }
}

/// Section ids rendered on the home page, in page order.
pub const SECTION_IDS: &[&str] = &[
    "home",
    "about",
    "projects",
    "skills",
    "experience",
    "github",
    "contact",
];

pub const HEADER_LINKS: &[NavLink] = &[
    NavLink { label: "About", anchor: "about" },
    NavLink { label: "Projects", anchor: "projects" },
    NavLink { label: "Skills", anchor: "skills" },
    NavLink { label: "Experience", anchor: "experience" },
    NavLink { label: "Contact", anchor: "contact" },
];

pub const FOOTER_LINKS: &[NavLink] = &[
    NavLink { label: "Home", anchor: "home" },
    NavLink { label: "About", anchor: "about" },
    NavLink { label: "Projects", anchor: "projects" },
    NavLink { label: "Skills", anchor: "skills" },
    NavLink { label: "Experience", anchor: "experience" },
    NavLink { label: "Contact", anchor: "contact" },
];

pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "I'm Muthu Ajay, a passionate Data Scientist and Machine Learning enthusiast currently working as a Consultant at Ernst & Young. With expertise in Deep Learning, Transformers, and Computer Vision, I specialize in building robust AI models and deploying scalable machine learning solutions.",
    "My journey in data science blends cutting-edge research with practical applications, enabling businesses to unlock the power of data. I have a proven track record of delivering high-impact solutions, such as designing CNNs and Vision Transformers to achieve state-of-the-art performance in challenging classification and segmentation tasks.",
    "My work includes implementing Large Language Models (LLMs) like GPT-2 and Segment Anything Model (SAM) to tackle complex problems, from PII detection to multimodal AI systems. I thrive on collaboration and innovation, consistently leading cross-functional teams to deliver optimized solutions that drive measurable business outcomes.",
    "When I'm not solving data problems, I enjoy exploring advancements in AI, mentoring aspiring data scientists, and contributing to the broader data science community. Let's shape the future with data!",
];

pub struct Highlight {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        icon: "💼",
        title: "Current Role",
        description: "Data Science Consultant at Ernst & Young",
    },
    Highlight {
        icon: "🧠",
        title: "Expertise",
        description: "Deep Learning, Transformers, Computer Vision",
    },
    Highlight {
        icon: "🏆",
        title: "Specialization",
        description: "CNNs, Vision Transformers, LLMs",
    },
    Highlight {
        icon: "👥",
        title: "Leadership",
        description: "Cross-functional Team Leadership",
    },
];

pub struct Project {
    pub title: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub image: &'static str,
    pub link: Option<&'static str>,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "GPT Implementation",
        icon: "🤖",
        description: "Built a GPT model from scratch implementing the transformer architecture, including self-attention mechanisms and positional encoding for advanced text generation capabilities.",
        tags: &["Transformers", "PyTorch", "NLP"],
        image: "https://images.unsplash.com/photo-1677442136019-21780ecad995?auto=format&fit=crop&q=80&w=2000",
        link: Some("https://github.com/MuthuAjay/gpt"),
    },
    Project {
        title: "Advanced CNN Architecture",
        icon: "🧠",
        description: "Developed a novel CNN architecture for medical image classification achieving 97% accuracy on brain tumor detection.",
        tags: &["PyTorch", "CNN", "Medical Imaging"],
        image: "https://images.unsplash.com/photo-1558244661-d248897f7bc4?auto=format&fit=crop&q=80&w=2000",
        link: None,
    },
    Project {
        title: "ML Pipeline Optimization",
        icon: "📊",
        description: "Created an end-to-end ML pipeline using XGBoost and advanced target encoding techniques for financial forecasting.",
        tags: &["XGBoost", "Feature Engineering", "MLOps"],
        image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?auto=format&fit=crop&q=80&w=2000",
        link: None,
    },
];

pub struct SkillGroup {
    pub category: &'static str,
    pub icon: &'static str,
    pub items: &'static [&'static str],
}

pub const SKILLS: &[SkillGroup] = &[
    SkillGroup {
        category: "Deep Learning",
        icon: "🧠",
        items: &[
            "CNN Architecture Design",
            "Transfer Learning",
            "PyTorch",
            "TensorFlow",
        ],
    },
    SkillGroup {
        category: "Natural Language Processing",
        icon: "💬",
        items: &[
            "Transformer Architecture",
            "GPT Implementation",
            "BERT Fine-tuning",
            "Token Embedding",
        ],
    },
    SkillGroup {
        category: "Traditional ML",
        icon: "🗄️",
        items: &[
            "XGBoost",
            "Random Forests",
            "Feature Engineering",
            "Target Encoding",
        ],
    },
    SkillGroup {
        category: "MLOps",
        icon: "🖥️",
        items: &[
            "Docker",
            "Kubernetes",
            "ML Pipeline Design",
            "Model Monitoring",
        ],
    },
];

pub struct Role {
    pub title: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub highlights: &'static [&'static str],
}

pub const EXPERIENCE: &[Role] = &[
    Role {
        title: "Senior Data Scientist",
        company: "Ernst & Young",
        period: "2023 - Present",
        description: "Leading AI initiatives and managing a team of data scientists. Implemented advanced RAG systems and vision transformers for enterprise solutions.",
        highlights: &[
            "Architected and deployed enterprise-scale RAG systems for automated document analysis",
            "Led AI strategy development for cross-functional teams and client engagements",
            "Mentored junior data scientists and implemented technical best practices",
        ],
    },
    Role {
        title: "Data Scientist",
        company: "Ernst & Young",
        period: "2021 - 2023",
        description: "Developed ML models for document classification and NLP tasks. Achieved 99% accuracy in production systems.",
        highlights: &[
            "Built and optimized CNN architectures for complex image recognition challenges",
            "Implemented end-to-end ML pipelines from data preparation to model deployment",
            "Achieved 99% accuracy in document classification production systems",
        ],
    },
    Role {
        title: "Associate Data Scientist",
        company: "Ernst & Young",
        period: "2020 - 2021",
        description: "Started as an associate working on data preprocessing and model development. Contributed to multiple successful ML projects.",
        highlights: &[
            "Performed comprehensive data preprocessing and feature engineering",
            "Contributed to model development and evaluation for client projects",
            "Collaborated with cross-functional teams to implement data-driven solutions",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_links_point_at_sections() {
        for link in HEADER_LINKS.iter().chain(FOOTER_LINKS) {
            assert!(
                SECTION_IDS.contains(&link.anchor),
                "no section for #{}",
                link.anchor
            );
            assert_eq!(link.href(), format!("#{}", link.anchor));
        }
    }

    #[test]
    fn test_projects_are_complete() {
        for p in PROJECTS {
            assert!(!p.tags.is_empty(), "{} has no tags", p.title);
            assert!(p.image.starts_with("https://"));
            if let Some(link) = p.link {
                assert!(link.starts_with("https://"));
            }
        }
    }

    #[test]
    fn test_experience_has_highlights() {
        assert!(!EXPERIENCE.is_empty());
        assert!(EXPERIENCE.iter().all(|r| !r.highlights.is_empty()));
        assert!(SKILLS.iter().all(|s| !s.items.is_empty()));
    }

    #[test]
    fn test_profile_links() {
        assert_eq!(PROFILE.github_url(), "https://github.com/muthuajay");
        assert_eq!(PROFILE.mailto(), "mailto:muthuajay97@gmail.com");
    }
}
