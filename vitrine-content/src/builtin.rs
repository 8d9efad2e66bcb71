// Built-in content table
//
// The default portfolio payload, used when no content file is supplied.
// Content lives here as data so copy changes never touch the engine.

use lazy_static::lazy_static;

use crate::records::{
    AwardEntry, EducationEntry, JobEntry, PortfolioContent, Profile, ProjectEntry, SkillCategory,
    SocialKind, SocialLink,
};

lazy_static! {
    static ref BUILTIN: PortfolioContent = build();
}

/// The built-in default content payload.
pub fn builtin_content() -> PortfolioContent {
    BUILTIN.clone()
}

fn build() -> PortfolioContent {
    PortfolioContent {
        profile: Profile {
            name: "Hasnain".to_string(),
            tagline: "Data Science & AI Engineer | Generative AI | Software Developer"
                .to_string(),
            summary: "MSc in Applied Computer Science student passionate about building \
                      intelligent systems and innovative solutions"
                .to_string(),
            brand: "HS.js".to_string(),
        },
        education: vec![
            EducationEntry {
                period: "2025 - Present".to_string(),
                degree: "MSc in Applied Computer Science".to_string(),
                school: "Georg August University, Göttingen".to_string(),
                note: None,
                highlight: true,
            },
            EducationEntry {
                period: "2021 - 2024".to_string(),
                degree: "BE in Information Technology".to_string(),
                school: "Vidyalankar Institute of Technology, Mumbai".to_string(),
                note: Some("CGPA: 8.98/10".to_string()),
                highlight: false,
            },
        ],
        jobs: vec![
            JobEntry {
                title: "Jr. Data Science & AI Engineer".to_string(),
                company: "ClientLink".to_string(),
                period: "04/2025 - Present".to_string(),
                highlight: true,
                points: vec![
                    "Automated social media post classification and SQL data workflows, \
                     improving analytics efficiency for Hilti, Knauf, and Bonprix."
                        .to_string(),
                    "Implementing machine learning models for predictive analytics".to_string(),
                    "Developed ML models to predict user session journeys, to gain actionable \
                     insights into customer behavior."
                        .to_string(),
                ],
            },
            JobEntry {
                title: "Software Developer".to_string(),
                company: "Catch IT".to_string(),
                period: "03/2025 - 06/2025".to_string(),
                highlight: false,
                points: vec![
                    "Developed an AI-powered image tagging solution that analyzes images and \
                     categorizes them."
                        .to_string(),
                    "Containerized the tagging solution using Docker and deployed it to Google \
                     Cloud Run for scalable and serverless execution."
                        .to_string(),
                    "Implemented Instagram Login in Flutter using the Graph API, enabling user \
                     auth and retrieval of profile details"
                        .to_string(),
                ],
            },
            JobEntry {
                title: "Generative AI Engineer".to_string(),
                company: "Startino".to_string(),
                period: "07/2024 - 09/2025".to_string(),
                highlight: false,
                points: vec![
                    "Adapt Project (Healthcare Chatbot): Developed gamified milestone features \
                     to track user activities (e.g., running, sleeping, eating), reset daily \
                     streaks, and calculate dynamic milestones."
                        .to_string(),
                    "Designed cognitive architecture for intelligent agents, enabling seamless \
                     interaction across multimodal inputs."
                        .to_string(),
                ],
            },
            JobEntry {
                title: "Software Developer Intern".to_string(),
                company: "Mercor".to_string(),
                period: "06/2023 - 10/2023".to_string(),
                highlight: false,
                points: vec![
                    "Developed a sneaker API, reducing data retrieval time by 40%, integrating \
                     StockX and GOAT for seamless sneaker listings."
                        .to_string(),
                    "Built a responsive Next.js interface with advanced filtering, seller \
                     dashboards, and sales analytics, boosting seller engagement by 25%."
                        .to_string(),
                    "Implemented a secure payment gateway, allowing sellers to create Stripe \
                     accounts and conveniently manage transactions"
                        .to_string(),
                ],
            },
        ],
        projects: vec![
            ProjectEntry {
                title: "MediaFusion".to_string(),
                subtitle: "Semantic Search & Multimodal AI Platform".to_string(),
                description: "Advanced platform combining semantic search with multimodal AI \
                              capabilities for enhanced content discovery and analysis."
                    .to_string(),
                technologies: vec![
                    "Python".to_string(),
                    "LangChain".to_string(),
                    "Vector DB".to_string(),
                    "Transformers".to_string(),
                ],
                link: "https://github.com/Hasnain01-hub/mediafusion".to_string(),
            },
            ProjectEntry {
                title: "GoalTube".to_string(),
                subtitle: "YouTube AI-powered Learning Platform".to_string(),
                description: "AI-enhanced learning platform that transforms YouTube content \
                              into structured educational experiences with personalized \
                              recommendations."
                    .to_string(),
                technologies: vec![
                    "Next.js".to_string(),
                    "OpenAI API".to_string(),
                    "Firebase".to_string(),
                    "YouTube API".to_string(),
                ],
                link: "https://github.com/Hasnain01-hub/goaltube".to_string(),
            },
            ProjectEntry {
                title: "ReachME".to_string(),
                subtitle: "Decentralized Social Platform".to_string(),
                description: "Blockchain-based social platform featuring Ethereum tipping \
                              system, promoting creator economy and decentralized interactions."
                    .to_string(),
                technologies: vec![
                    "React".to_string(),
                    "Ethereum".to_string(),
                    "Web3".to_string(),
                    "Solidity".to_string(),
                ],
                link: "https://github.com/ronaklala/ReachMe".to_string(),
            },
        ],
        awards: vec![
            AwardEntry {
                icon: "🏆".to_string(),
                title: "12x Hackathon Winner".to_string(),
                description: "Multiple first-place victories in prestigious coding competitions"
                    .to_string(),
            },
            AwardEntry {
                icon: "🎯".to_string(),
                title: "3x Hackathon Judge".to_string(),
                description: "Evaluated innovative projects and mentored aspiring developers"
                    .to_string(),
            },
            AwardEntry {
                icon: "📢".to_string(),
                title: "Guest Speaker".to_string(),
                description: "Share insights on various database and its applications"
                    .to_string(),
            },
        ],
        skill_categories: vec![
            SkillCategory {
                icon: "💻".to_string(),
                title: "Programming Languages".to_string(),
                skills: vec![
                    "Python".to_string(),
                    "JavaScript".to_string(),
                    "TypeScript".to_string(),
                    "Java".to_string(),
                    "C++".to_string(),
                ],
            },
            SkillCategory {
                icon: "🤖".to_string(),
                title: "AI & Machine Learning".to_string(),
                skills: vec![
                    "LangChain".to_string(),
                    "LangGraph".to_string(),
                    "pandas".to_string(),
                    "Hugging Face".to_string(),
                    "PyTorch".to_string(),
                    "TensorFlow".to_string(),
                    "OpenAI API".to_string(),
                ],
            },
            SkillCategory {
                icon: "🌐".to_string(),
                title: "Web Development".to_string(),
                skills: vec![
                    "React".to_string(),
                    "Next.js".to_string(),
                    "Node.js".to_string(),
                    "Express".to_string(),
                    "HTML5".to_string(),
                    "CSS3".to_string(),
                ],
            },
            SkillCategory {
                icon: "📱".to_string(),
                title: "Mobile Development".to_string(),
                skills: vec![
                    "Flutter".to_string(),
                    "React Native".to_string(),
                    "Android".to_string(),
                    "iOS".to_string(),
                ],
            },
            SkillCategory {
                icon: "🗄️".to_string(),
                title: "Databases".to_string(),
                skills: vec![
                    "PostgreSQL".to_string(),
                    "MongoDB".to_string(),
                    "Firebase".to_string(),
                    "Vector DB".to_string(),
                    "Redis".to_string(),
                ],
            },
            SkillCategory {
                icon: "☁️".to_string(),
                title: "Cloud & DevOps".to_string(),
                skills: vec![
                    "GCP".to_string(),
                    "Docker".to_string(),
                    "Kubernetes".to_string(),
                    "Git".to_string(),
                    "CI/CD".to_string(),
                ],
            },
        ],
        socials: vec![
            SocialLink {
                href: "https://github.com/Hasnain01-hub".to_string(),
                kind: SocialKind::CodeHosting,
            },
            SocialLink {
                href: "https://www.linkedin.com/in/hasnain-sayyed-537164177/".to_string(),
                kind: SocialKind::ProfessionalNetwork,
            },
            SocialLink {
                href: "mailto:hasnainsayyed833@gmail.com".to_string(),
                kind: SocialKind::Mail,
            },
        ],
    }
}
