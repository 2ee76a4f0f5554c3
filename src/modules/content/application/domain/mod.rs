mod entities;
mod record;
mod resource;
mod skill_level;
mod tag_list;

pub use entities::{
    ArticleEntry, CertificationEntry, EducationEntry, ExperienceEntry, ProjectEntry,
    ServiceEntry, SkillEntry, TestimonialEntry,
};
pub use record::Record;
pub use resource::{ContentResource, ContentValidationError};
pub use skill_level::{SkillLevel, SkillLevelError};
pub use tag_list::TagList;
