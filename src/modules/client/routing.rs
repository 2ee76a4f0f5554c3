use super::auth_session::AuthSession;

/// Pages of the admin panel, under `/admin/<segment>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminSection {
    Dashboard,
    About,
    Education,
    Skills,
    Experience,
    Certifications,
    Projects,
    Testimonials,
    Articles,
    Services,
    Resume,
    Messages,
    Subscribers,
}

impl AdminSection {
    pub const ALL: [AdminSection; 13] = [
        AdminSection::Dashboard,
        AdminSection::About,
        AdminSection::Education,
        AdminSection::Skills,
        AdminSection::Experience,
        AdminSection::Certifications,
        AdminSection::Projects,
        AdminSection::Testimonials,
        AdminSection::Articles,
        AdminSection::Services,
        AdminSection::Resume,
        AdminSection::Messages,
        AdminSection::Subscribers,
    ];

    /// Path segment after `/admin`; empty for the dashboard.
    pub fn segment(self) -> &'static str {
        match self {
            AdminSection::Dashboard => "",
            AdminSection::About => "about",
            AdminSection::Education => "education",
            AdminSection::Skills => "skills",
            AdminSection::Experience => "experience",
            AdminSection::Certifications => "certifications",
            AdminSection::Projects => "projects",
            AdminSection::Testimonials => "testimonials",
            AdminSection::Articles => "articles",
            AdminSection::Services => "services",
            AdminSection::Resume => "resume",
            AdminSection::Messages => "messages",
            AdminSection::Subscribers => "subscribers",
        }
    }

    fn from_segment(segment: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.segment() == segment)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppRoute {
    Home,
    Projects,
    Services,
    Contact,
    Login,
    Admin(AdminSection),
    NotFound(String),
}

impl AppRoute {
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');

        match trimmed {
            "" => AppRoute::Home,
            "/projects" => AppRoute::Projects,
            "/services" => AppRoute::Services,
            "/contact" => AppRoute::Contact,
            "/login" => AppRoute::Login,
            "/admin" => AppRoute::Admin(AdminSection::Dashboard),
            other => other
                .strip_prefix("/admin/")
                .and_then(AdminSection::from_segment)
                .map(AppRoute::Admin)
                .unwrap_or_else(|| AppRoute::NotFound(path.to_string())),
        }
    }

    pub fn path(&self) -> String {
        match self {
            AppRoute::Home => "/".to_string(),
            AppRoute::Projects => "/projects".to_string(),
            AppRoute::Services => "/services".to_string(),
            AppRoute::Contact => "/contact".to_string(),
            AppRoute::Login => "/login".to_string(),
            AppRoute::Admin(AdminSection::Dashboard) => "/admin".to_string(),
            AppRoute::Admin(section) => format!("/admin/{}", section.segment()),
            AppRoute::NotFound(path) => path.clone(),
        }
    }

    /// Everything under `/admin`, known section or not.
    pub fn is_protected(&self) -> bool {
        match self {
            AppRoute::Admin(_) => true,
            AppRoute::NotFound(path) => path.starts_with("/admin"),
            _ => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Render(AppRoute),
    Redirect(AppRoute),
}

/// Decides what a visit to `path` shows for the given session.
pub fn guard(path: &str, session: &AuthSession) -> Navigation {
    let route = AppRoute::parse(path);

    match (&route, session.is_authenticated()) {
        (r, false) if r.is_protected() => Navigation::Redirect(AppRoute::Login),
        (AppRoute::Login, true) => Navigation::Redirect(AppRoute::Admin(AdminSection::Dashboard)),
        _ => Navigation::Render(route),
    }
}
