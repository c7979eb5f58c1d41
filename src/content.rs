pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
}

pub struct Stat {
    pub target: u32,
    pub suffix: &'static str,
    pub label: &'static str,
}

pub struct Skill {
    pub name: &'static str,
    pub level: u8,
}

pub struct SkillCategory {
    pub title: &'static str,
    pub icon: &'static str,
    pub skills: &'static [Skill],
}

pub struct Role {
    pub period: &'static str,
    pub title: &'static str,
    pub organization: &'static str,
    pub summary: &'static str,
}

#[derive(PartialEq)]
pub struct Credential {
    pub title: &'static str,
    pub issuer: &'static str,
    pub year: &'static str,
}

pub struct ContactMethod {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: &'static str,
    pub href: &'static str,
}

pub const NAME: &str = "Thomas Pasley";
pub const TAGLINE: &str = "Data Scientist turning messy data into decisions.";

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { id: "home", label: "Home" },
    NavItem { id: "about", label: "About" },
    NavItem { id: "skills", label: "Skills" },
    NavItem { id: "experience", label: "Experience" },
    NavItem { id: "education", label: "Education" },
    NavItem { id: "contact", label: "Contact" },
];

pub const STATS: &[Stat] = &[
    Stat { target: 6, suffix: "+", label: "Years in analytics" },
    Stat { target: 40, suffix: "+", label: "Models in production" },
    Stat { target: 12, suffix: "", label: "Certifications" },
    Stat { target: 250, suffix: "k", label: "Lines of SQL" },
];

pub const ABOUT: &[&str] = &[
    "I build forecasting, experimentation and recommendation systems, from the first notebook to the monitored production service.",
    "Most of my work sits where statistics meets engineering: clean pipelines, honest evaluation and results people can act on.",
];

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "Machine Learning",
        icon: "fas fa-brain",
        skills: &[
            Skill { name: "Python", level: 95 },
            Skill { name: "scikit-learn", level: 90 },
            Skill { name: "PyTorch", level: 80 },
        ],
    },
    SkillCategory {
        title: "Data Engineering",
        icon: "fas fa-database",
        skills: &[
            Skill { name: "SQL", level: 92 },
            Skill { name: "Spark", level: 78 },
            Skill { name: "Airflow", level: 75 },
        ],
    },
    SkillCategory {
        title: "Analytics",
        icon: "fas fa-chart-line",
        skills: &[
            Skill { name: "Statistics", level: 88 },
            Skill { name: "A/B testing", level: 85 },
            Skill { name: "Visualization", level: 82 },
        ],
    },
];

pub const ROLES: &[Role] = &[
    Role {
        period: "2022 - Present",
        title: "Senior Data Scientist",
        organization: "Retail analytics team",
        summary: "Demand forecasting and pricing experiments across thousands of products.",
    },
    Role {
        period: "2019 - 2022",
        title: "Data Scientist",
        organization: "Fintech startup",
        summary: "Credit risk models, feature stores and the monitoring around them.",
    },
    Role {
        period: "2017 - 2019",
        title: "Data Analyst",
        organization: "Marketing agency",
        summary: "Attribution reporting and the first automated dashboards.",
    },
];

pub const EDUCATION: &[Credential] = &[
    Credential {
        title: "M.S. Data Science",
        issuer: "State University",
        year: "2019",
    },
    Credential {
        title: "B.S. Mathematics",
        issuer: "State University",
        year: "2017",
    },
];

pub const CERTIFICATIONS: &[Credential] = &[
    Credential {
        title: "Machine Learning Specialization",
        issuer: "Online course",
        year: "2021",
    },
    Credential {
        title: "Cloud Data Engineer",
        issuer: "Cloud provider",
        year: "2022",
    },
    Credential {
        title: "Deep Learning Specialization",
        issuer: "Online course",
        year: "2023",
    },
];

pub const CONTACT_METHODS: &[ContactMethod] = &[
    ContactMethod {
        icon: "fas fa-envelope",
        label: "Email",
        value: "hello@thomaspasley.dev",
        href: "mailto:hello@thomaspasley.dev",
    },
    ContactMethod {
        icon: "fab fa-linkedin",
        label: "LinkedIn",
        value: "in/thomaspasley",
        href: "https://www.linkedin.com/in/thomaspasley",
    },
    ContactMethod {
        icon: "fab fa-github",
        label: "GitHub",
        value: "thomaspasley",
        href: "https://github.com/thomaspasley",
    },
];
