use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

const CATALOG_FILE: &str = "projects.json";

/// Projects shown in the home page scroller, in order.
pub const FEATURED_IDS: [&str; 4] = ["p1", "p2", "p7", "p3"];

pub const ALL_CATEGORIES: &str = "All";

pub static CATALOG: LazyLock<Catalog> = LazyLock::new(|| {
    Catalog::load().unwrap_or_else(|e| {
        log::error!("failed to load project catalog: {e}");
        Catalog::default()
    })
});

#[derive(Embed)]
#[folder = "content"]
pub struct Content;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("Project not found: {0}")]
    NotFound(String),
    #[error("Couldn't parse project catalog: {0}")]
    Parse(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectGroup {
    Spatial,
    Product,
    Identity,
}

impl ProjectGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spatial => "spatial",
            Self::Product => "product",
            Self::Identity => "identity",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Media {
    pub src: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub poster: Option<String>,
}

impl Media {
    pub fn is_video(&self) -> bool {
        self.src.to_lowercase().ends_with(".mp4")
    }
}

/// Gallery entries are either a bare path or a described item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GalleryEntry {
    Path(String),
    Item(Media),
}

impl GalleryEntry {
    pub fn to_media(&self) -> Media {
        match self {
            Self::Path(src) => Media {
                src: src.clone(),
                name: None,
                poster: None,
            },
            Self::Item(media) => media.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub category: String,
    pub group: ProjectGroup,
    pub thumbnail: String,
    pub images: Vec<GalleryEntry>,
    pub description: String,
    pub year: String,
    #[serde(default)]
    pub client: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

impl Project {
    pub fn gallery(&self) -> Vec<Media> {
        self.images.iter().map(GalleryEntry::to_media).collect()
    }

    /// Short tag like `PRJ_P7`.
    pub fn code_label(&self) -> String {
        format!("PRJ_{}", self.id.to_uppercase())
    }
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    projects: Vec<Project>,
}

impl Catalog {
    pub fn load() -> Result<Self, CatalogError> {
        let file = Content::get(CATALOG_FILE)
            .ok_or_else(|| CatalogError::NotFound(CATALOG_FILE.to_string()))?;
        let text = std::str::from_utf8(&file.data).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Self::from_json(text)
    }

    pub fn from_json(text: &str) -> Result<Self, CatalogError> {
        let projects = serde_json::from_str(text).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Ok(Self { projects })
    }

    pub fn all(&self) -> &[Project] {
        &self.projects
    }

    pub fn get(&self, id: &str) -> Result<&Project, CatalogError> {
        self.projects
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    /// The curated subset for the home page. Unknown ids are skipped.
    pub fn featured(&self) -> Vec<Project> {
        FEATURED_IDS
            .iter()
            .filter_map(|id| self.get(id).ok().cloned())
            .collect()
    }

    /// `All` followed by the distinct categories in sorted order.
    pub fn categories(&self) -> Vec<String> {
        let mut categories = self
            .projects
            .iter()
            .map(|p| p.category.clone())
            .collect::<Vec<_>>();
        categories.sort();
        categories.dedup();
        categories.insert(0, ALL_CATEGORIES.to_string());
        categories
    }

    pub fn filter(&self, category: &str) -> Vec<Project> {
        self.projects
            .iter()
            .filter(|p| category == ALL_CATEGORIES || p.category == category)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {"id": "a", "title": "A", "category": "Zines", "group": "identity",
         "thumbnail": "/a.png", "images": ["/a-0.png"], "description": "", "year": "2023"},
        {"id": "b", "title": "B", "category": "Apps", "group": "product",
         "thumbnail": "/b.png",
         "images": [{"src": "/b-0.MP4", "name": "demo", "poster": "/b-0.png"}],
         "description": "", "year": "2024", "client": "Acme", "role": "Designer"},
        {"id": "c", "title": "C", "category": "Apps", "group": "spatial",
         "thumbnail": "/c.png", "images": [], "description": "", "year": "2025"}
    ]"#;

    #[test]
    fn test_embedded_catalog_loads() {
        let catalog = Catalog::load().expect("embedded catalog should parse");
        assert_eq!(catalog.all().len(), 9);
        let featured = catalog
            .featured()
            .into_iter()
            .map(|p| p.id)
            .collect::<Vec<_>>();
        assert_eq!(featured, FEATURED_IDS);
    }

    #[test]
    fn test_lookup() {
        let catalog = Catalog::from_json(SAMPLE).unwrap();
        assert_eq!(catalog.get("b").unwrap().client.as_deref(), Some("Acme"));
        assert_eq!(
            catalog.get("zz"),
            Err(CatalogError::NotFound("zz".to_string()))
        );
    }

    #[test]
    fn test_featured_skips_unknown() {
        let catalog = Catalog::from_json(SAMPLE).unwrap();
        assert!(catalog.featured().is_empty());
    }

    #[test]
    fn test_categories_and_filter() {
        let catalog = Catalog::from_json(SAMPLE).unwrap();
        assert_eq!(catalog.categories(), vec!["All", "Apps", "Zines"]);
        assert_eq!(catalog.filter("All").len(), 3);
        let apps = catalog.filter("Apps");
        assert_eq!(apps.iter().map(|p| p.id.as_str()).collect::<Vec<_>>(), ["b", "c"]);
        assert!(catalog.filter("Nope").is_empty());
    }

    #[test]
    fn test_gallery_normalized() {
        let catalog = Catalog::from_json(SAMPLE).unwrap();
        let a = catalog.get("a").unwrap().gallery();
        assert_eq!(a[0].src, "/a-0.png");
        assert_eq!(a[0].name, None);
        let b = catalog.get("b").unwrap().gallery();
        assert!(b[0].is_video());
        assert_eq!(b[0].poster.as_deref(), Some("/b-0.png"));
        assert_eq!(catalog.get("b").unwrap().code_label(), "PRJ_B");
    }

    #[test]
    fn test_bad_json() {
        assert!(matches!(
            Catalog::from_json("{"),
            Err(CatalogError::Parse(_))
        ));
    }
}
