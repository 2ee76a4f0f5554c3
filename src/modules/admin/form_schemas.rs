use super::form::{AdminForm, FieldKind, FieldSpec};
use crate::content::application::domain::{
    ArticleEntry, CertificationEntry, EducationEntry, ExperienceEntry, ProjectEntry,
    ServiceEntry, SkillEntry, TestimonialEntry,
};

impl AdminForm for EducationEntry {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::text("institution", "Institution").required(),
        FieldSpec::text("degree", "Degree").required(),
        FieldSpec::text("year", "Year"),
        FieldSpec::new("description", "Description", FieldKind::LongText),
    ];
}

impl AdminForm for SkillEntry {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::text("name", "Name").required(),
        FieldSpec::new("level", "Level", FieldKind::Integer { min: 0, max: 100 }).required(),
    ];
}

impl AdminForm for ExperienceEntry {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::text("title", "Title").required(),
        FieldSpec::text("company", "Company").required(),
        FieldSpec::text("period", "Period"),
        FieldSpec::new("description", "Description", FieldKind::LongText),
    ];
}

impl AdminForm for CertificationEntry {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::text("name", "Name").required(),
        FieldSpec::text("issuer", "Issuer").required(),
        FieldSpec::new("date", "Date", FieldKind::Date),
        FieldSpec::text("credential_id", "Credential ID"),
        FieldSpec::new("expires", "Expires", FieldKind::Date).nullable(),
        FieldSpec::new("url", "URL", FieldKind::Url).nullable(),
    ];
}

impl AdminForm for ProjectEntry {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::text("title", "Title").required(),
        FieldSpec::new("description", "Description", FieldKind::LongText),
        FieldSpec::new("technologies", "Technologies", FieldKind::List),
        FieldSpec::new("link", "Link", FieldKind::Url),
        FieldSpec::new("image", "Image URL", FieldKind::Url),
        FieldSpec::text("category", "Category"),
        FieldSpec::text("year", "Year"),
    ];
}

impl AdminForm for TestimonialEntry {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::text("name", "Name").required(),
        FieldSpec::text("title", "Title"),
        FieldSpec::text("company", "Company"),
        FieldSpec::new("content", "Testimonial", FieldKind::LongText).required(),
        FieldSpec::new("avatar", "Avatar URL", FieldKind::Url),
    ];
}

impl AdminForm for ArticleEntry {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::text("title", "Title").required(),
        FieldSpec::new("description", "Description", FieldKind::LongText),
        FieldSpec::new("date", "Date", FieldKind::Date),
        FieldSpec::new("url", "URL", FieldKind::Url).nullable(),
        FieldSpec::new("tags", "Tags", FieldKind::List),
    ];
}

impl AdminForm for ServiceEntry {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::text("title", "Title").required(),
        FieldSpec::new("description", "Description", FieldKind::LongText),
        FieldSpec::text("icon", "Icon"),
        FieldSpec::new("features", "Features", FieldKind::List),
    ];
}
