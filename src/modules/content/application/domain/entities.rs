use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{resource::ContentResource, skill_level::SkillLevel, tag_list::TagList};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct EducationEntry {
    #[schema(example = "MIT")]
    pub institution: String,
    #[schema(example = "BSc Computer Science")]
    pub degree: String,
    pub year: String,
    pub description: String,
}

impl ContentResource for EducationEntry {
    const RESOURCE: &'static str = "education";
    const LIST_KEY: &'static str = "education";
    const LABEL: &'static str = "Education";

    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![("institution", self.institution.as_str()), ("degree", self.degree.as_str())]
    }
}

/// `level` has no default: a body without it is rejected.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
pub struct SkillEntry {
    #[serde(default)]
    #[schema(example = "Rust")]
    pub name: String,
    #[schema(value_type = u8, minimum = 0, maximum = 100, example = 85)]
    pub level: SkillLevel,
}

impl ContentResource for SkillEntry {
    const RESOURCE: &'static str = "skills";
    const LIST_KEY: &'static str = "skills";
    const LABEL: &'static str = "Skill";

    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![("name", self.name.as_str())]
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    #[schema(example = "2020 - Present")]
    pub period: String,
    pub description: String,
}

impl ContentResource for ExperienceEntry {
    const RESOURCE: &'static str = "experience";
    const LIST_KEY: &'static str = "experience";
    const LABEL: &'static str = "Experience";

    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![("title", self.title.as_str()), ("company", self.company.as_str())]
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct CertificationEntry {
    pub name: String,
    pub issuer: String,
    pub date: String,
    pub credential_id: String,
    pub expires: Option<String>,
    pub url: Option<String>,
}

impl ContentResource for CertificationEntry {
    const RESOURCE: &'static str = "certifications";
    const LIST_KEY: &'static str = "certifications";
    const LABEL: &'static str = "Certification";

    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![("name", self.name.as_str()), ("issuer", self.issuer.as_str())]
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct ProjectEntry {
    pub title: String,
    pub description: String,
    #[schema(value_type = Vec<String>, example = json!(["Rust", "actix-web"]))]
    pub technologies: TagList,
    pub link: String,
    pub image: String,
    #[schema(example = "Web")]
    pub category: String,
    pub year: String,
}

impl ContentResource for ProjectEntry {
    const RESOURCE: &'static str = "projects";
    const LIST_KEY: &'static str = "projects";
    const LABEL: &'static str = "Project";

    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![("title", self.title.as_str())]
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct TestimonialEntry {
    pub name: String,
    pub title: String,
    pub company: String,
    pub content: String,
    pub avatar: String,
}

impl ContentResource for TestimonialEntry {
    const RESOURCE: &'static str = "testimonials";
    const LIST_KEY: &'static str = "testimonials";
    const LABEL: &'static str = "Testimonial";
    const PUBLIC_CREATE: bool = true;

    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![("name", self.name.as_str()), ("content", self.content.as_str())]
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct ArticleEntry {
    pub title: String,
    pub description: String,
    pub date: String,
    pub url: Option<String>,
    #[schema(value_type = Vec<String>)]
    pub tags: TagList,
}

impl ContentResource for ArticleEntry {
    const RESOURCE: &'static str = "articles";
    const LIST_KEY: &'static str = "articles";
    const LABEL: &'static str = "Article";

    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![("title", self.title.as_str())]
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct ServiceEntry {
    pub title: String,
    pub description: String,
    #[schema(example = "code")]
    pub icon: String,
    #[schema(value_type = Vec<String>)]
    pub features: TagList,
}

impl ContentResource for ServiceEntry {
    const RESOURCE: &'static str = "services";
    const LIST_KEY: &'static str = "services";
    const LABEL: &'static str = "Service";

    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![("title", self.title.as_str())]
    }
}
