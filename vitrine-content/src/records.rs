// Content record models
//
// One struct per content collection. The engine treats these as opaque render
// payloads; declared order is the stagger order.

use serde::{Deserialize, Serialize};

/// Identity and hero copy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub tagline: String,
    pub summary: String,
    /// Short brand mark shown in the nav bar (e.g. "HS.js")
    pub brand: String,
}

/// Education timeline entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub period: String,
    pub degree: String,
    pub school: String,
    #[serde(default)]
    pub note: Option<String>,
    /// Current/ongoing entry, rendered with the highlighted badge
    #[serde(default)]
    pub highlight: bool,
}

/// Work history entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobEntry {
    pub title: String,
    pub company: String,
    pub period: String,
    #[serde(default)]
    pub highlight: bool,
    pub points: Vec<String>,
}

/// Featured project card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub technologies: Vec<String>,
    /// External URL opened in a new browsing context; opaque to the engine
    pub link: String,
}

/// Award / achievement card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwardEntry {
    pub icon: String,
    pub title: String,
    pub description: String,
}

/// Skill category card with its tag list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub icon: String,
    pub title: String,
    pub skills: Vec<String>,
}

/// Which external profile a social link points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SocialKind {
    CodeHosting,
    ProfessionalNetwork,
    Mail,
}

/// Footer social link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub href: String,
    pub kind: SocialKind,
}

/// The full static content payload for one page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioContent {
    pub profile: Profile,
    pub education: Vec<EducationEntry>,
    pub jobs: Vec<JobEntry>,
    pub projects: Vec<ProjectEntry>,
    pub awards: Vec<AwardEntry>,
    pub skill_categories: Vec<SkillCategory>,
    pub socials: Vec<SocialLink>,
}
