//! Static resume data rendered by the resume page.

pub struct EducationEntry {
    pub degree: &'static str,
    pub school: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    pub details: &'static [&'static str],
}

pub struct ExperienceEntry {
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    pub details: &'static [&'static str],
}

pub struct ProjectEntry {
    pub name: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
}

pub struct SkillCategory {
    pub title: &'static str,
    pub skills: &'static [&'static str],
}

pub struct ResumeData {
    pub last_updated: &'static str,
    pub education: &'static [EducationEntry],
    pub experience: &'static [ExperienceEntry],
    pub projects: &'static [ProjectEntry],
    pub skills: &'static [SkillCategory],
}

pub const RESUME: ResumeData = ResumeData {
    last_updated: "January 2026",
    education: &[
        EducationEntry {
            degree: "Master of Science in Computer Science",
            school: "Stanford University",
            location: "Stanford, CA",
            period: "2020 - 2022",
            details: &[
                "Specialization in Artificial Intelligence and Machine Learning",
                "GPA: 3.9/4.0",
                "Thesis: \"Efficient Transformer Architectures for Edge Devices\"",
            ],
        },
        EducationEntry {
            degree: "Bachelor of Science in Computer Science",
            school: "University of Texas at Austin",
            location: "Austin, TX",
            period: "2016 - 2020",
            details: &[
                "Minor in Mathematics",
                "GPA: 3.8/4.0",
                "Dean's List all semesters",
            ],
        },
    ],
    experience: &[
        ExperienceEntry {
            title: "Senior Software Engineer",
            company: "Tech Company Inc.",
            location: "San Francisco, CA",
            period: "Jan 2023 - Present",
            details: &[
                "Led development of microservices architecture serving 10M+ daily active users",
                "Reduced API response times by 40% through optimization and caching strategies",
                "Mentored team of 5 junior engineers and established code review best practices",
                "Implemented CI/CD pipelines reducing deployment time from hours to minutes",
            ],
        },
        ExperienceEntry {
            title: "Software Engineer",
            company: "Startup Labs",
            location: "Austin, TX",
            period: "Jun 2022 - Dec 2022",
            details: &[
                "Built real-time collaboration features using WebSocket and Redis",
                "Developed REST APIs using Node.js and TypeScript",
                "Collaborated with product team to deliver features on tight deadlines",
            ],
        },
        ExperienceEntry {
            title: "Software Engineering Intern",
            company: "Big Tech Corp",
            location: "Seattle, WA",
            period: "Summer 2021",
            details: &[
                "Developed internal tooling for automated testing infrastructure",
                "Contributed to open-source projects used by millions of developers",
                "Received return offer based on performance",
            ],
        },
    ],
    projects: &[
        ProjectEntry {
            name: "Open Source CLI Tool",
            description: "A command-line tool for developers with 5K+ GitHub stars",
            technologies: &["Rust", "TypeScript", "GitHub Actions"],
        },
        ProjectEntry {
            name: "Real-time Analytics Dashboard",
            description: "Full-stack dashboard processing 1M+ events per day",
            technologies: &["React", "Node.js", "PostgreSQL", "Redis"],
        },
        ProjectEntry {
            name: "Machine Learning Pipeline",
            description: "End-to-end ML pipeline for predictive analytics",
            technologies: &["Python", "PyTorch", "Docker", "Kubernetes"],
        },
    ],
    skills: &[
        SkillCategory {
            title: "Languages",
            skills: &["TypeScript", "Python", "Rust", "Go", "Java", "SQL"],
        },
        SkillCategory {
            title: "Frameworks",
            skills: &["React", "Next.js", "Node.js", "FastAPI", "Django"],
        },
        SkillCategory {
            title: "Tools & Platforms",
            skills: &["Docker", "Kubernetes", "AWS", "GCP", "PostgreSQL", "Redis"],
        },
        SkillCategory {
            title: "Practices",
            skills: &["CI/CD", "TDD", "Agile", "Code Review", "System Design"],
        },
    ],
};
