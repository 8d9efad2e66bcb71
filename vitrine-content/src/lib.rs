// Vitrine Content Layer
//
// Static content records, section descriptors and navigation targets for the
// portfolio page. Everything here is data: the engine consumes these records
// in declared order and imposes no behavior on them.

mod builtin;
mod error;
mod loader;
mod records;
mod section;

pub use builtin::builtin_content;
pub use error::{ContentError, ContentResult};
pub use loader::{load_content, parse_content};
pub use records::{
    AwardEntry, EducationEntry, JobEntry, PortfolioContent, Profile, ProjectEntry, SkillCategory,
    SocialKind, SocialLink,
};
pub use section::{
    default_nav_targets, default_sections, EntryMotion, NavTarget, Pose, Section,
};
