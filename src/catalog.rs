// SPDX-License-Identifier: MPL-2.0
//! Project catalog: the static list of portfolio projects and their images.
//!
//! The catalog is plain data. It is read once at startup and handed to the
//! gallery as immutable [`ImageSet`]s; the gallery never reads files itself.
//!
//! ```toml
//! [[project]]
//! title = "Harbour Lights"
//! images = ["harbour/01.jpg", "harbour/02.jpg", "https://cdn.example.org/harbour/03.jpg"]
//! ```

use crate::domain::gallery::{ImageRef, ImageSet};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One portfolio project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    #[serde(default)]
    pub images: Vec<String>,
}

impl Project {
    /// Returns the project's images as a gallery image set.
    #[must_use]
    pub fn image_set(&self) -> ImageSet {
        ImageSet::new(self.images.iter().map(String::as_str))
    }
}

/// Ordered list of projects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default, rename = "project")]
    pub projects: Vec<Project>,
}

impl Catalog {
    /// Builds a catalog holding a single ad-hoc project.
    #[must_use]
    pub fn single(title: impl Into<String>, images: Vec<String>) -> Self {
        Self {
            projects: vec![Project {
                title: title.into(),
                images,
            }],
        }
    }

    /// Parses a catalog from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|err| Error::Catalog(err.to_string()))
    }

    /// Loads a catalog file.
    ///
    /// Relative local image paths are resolved against the catalog's directory
    /// so the file can be moved together with its images.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let mut catalog = Self::from_toml_str(&content)?;
        if let Some(base) = path.parent() {
            catalog.resolve_relative_to(base);
        }
        log::debug!(
            "loaded {} projects from {}",
            catalog.projects.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Returns the project at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Project> {
        self.projects.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    fn resolve_relative_to(&mut self, base: &Path) {
        for image in self.projects.iter_mut().flat_map(|p| p.images.iter_mut()) {
            let local = Path::new(image.as_str());
            if ImageRef::new(image.as_str()).is_remote() || local.is_absolute() {
                continue;
            }
            *image = base.join(local).to_string_lossy().into_owned();
        }
    }
}
