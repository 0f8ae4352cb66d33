/// Top-level view selected by the location hash.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    Projects,
    Project(String),
}

impl Route {
    /// Parses `#/`, `#/projects` and `#/projects/<id>`. Anything else,
    /// including in-page anchors like `#work`, is the home view.
    pub fn from_hash(hash: &str) -> Self {
        let hash = hash.strip_prefix('#').unwrap_or(hash);
        let Some(path) = hash.strip_prefix('/') else {
            return Self::Home;
        };
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let mut segments = path.split('/').filter(|s| !s.is_empty());
        match (segments.next(), segments.next()) {
            (Some("projects"), None) => Self::Projects,
            (Some("projects"), Some(id)) => Self::Project(id.to_string()),
            _ => Self::Home,
        }
    }

    pub fn href(&self) -> String {
        match self {
            Self::Home => "#/".to_string(),
            Self::Projects => "#/projects".to_string(),
            Self::Project(id) => format!("#/projects/{id}"),
        }
    }

    /// True when following this route from `hash` would leave the view as
    /// it is, so no view change will scroll the page.
    pub fn is_current(&self, hash: &str) -> bool {
        Self::from_hash(hash) == *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home() {
        assert_eq!(Route::from_hash(""), Route::Home);
        assert_eq!(Route::from_hash("#"), Route::Home);
        assert_eq!(Route::from_hash("#/"), Route::Home);
        assert_eq!(Route::from_hash("#/bogus"), Route::Home);
        assert_eq!(Route::from_hash("#work"), Route::Home);
    }

    #[test]
    fn test_projects() {
        assert_eq!(Route::from_hash("#/projects"), Route::Projects);
        assert_eq!(Route::from_hash("#/projects/"), Route::Projects);
        assert_eq!(Route::from_hash("#/projects?sort=year"), Route::Projects);
    }

    #[test]
    fn test_project_detail() {
        assert_eq!(
            Route::from_hash("#/projects/p3"),
            Route::Project("p3".to_string())
        );
        assert_eq!(
            Route::from_hash("#/projects/p3?x=1"),
            Route::Project("p3".to_string())
        );
        assert_eq!(
            Route::from_hash("#/projects/p3#gallery"),
            Route::Project("p3".to_string())
        );
        assert_eq!(Route::from_hash("/projects/p9"), Route::Project("p9".to_string()));
    }

    #[test]
    fn test_home_link_from_home_stays_put() {
        for hash in ["", "#", "#/", "#contact", "#/nowhere"] {
            assert!(Route::Home.is_current(hash), "{hash}");
        }
        assert!(!Route::Home.is_current("#/projects"));
        assert!(!Route::Projects.is_current("#/projects/p1"));
    }

    #[test]
    fn test_href_round_trip() {
        for route in [
            Route::Home,
            Route::Projects,
            Route::Project("p7".to_string()),
        ] {
            assert_eq!(Route::from_hash(&route.href()), route);
        }
    }
}
