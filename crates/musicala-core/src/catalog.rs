//! The spot catalog: the ordered list of tour stops.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::nav;

/// One stop on the tour, backed by one video file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spot {
    /// Unique identifier within the catalog.
    pub key: String,
    /// Glyph shown on the card and the status pill.
    pub icon: String,
    /// Display title.
    pub title: String,
    /// One-line description.
    pub desc: String,
    /// Media path, relative to the page.
    pub file: String,
}

impl Spot {
    /// Create a spot from borrowed fields.
    #[must_use]
    pub fn new(key: &str, icon: &str, title: &str, desc: &str, file: &str) -> Self {
        Self {
            key: key.to_owned(),
            icon: icon.to_owned(),
            title: title.to_owned(),
            desc: desc.to_owned(),
            file: file.to_owned(),
        }
    }
}

/// Errors produced when validating a catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// The catalog would have no spots to show.
    #[error("catalog has no spots")]
    Empty,

    /// Two spots share the same key.
    #[error("duplicate spot key: {0}")]
    DuplicateKey(String),
}

/// A non-empty, ordered list of spots with unique keys.
///
/// Immutable after construction. Every index handed to [`spot`](Self::spot)
/// resolves to a valid entry because the catalog can never be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    spots: Vec<Spot>,
}

impl Catalog {
    /// Build a catalog, checking that it is non-empty and keys are unique.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Empty`] for an empty list and
    /// [`CatalogError::DuplicateKey`] for the first repeated key.
    pub fn new(spots: Vec<Spot>) -> Result<Self, CatalogError> {
        if spots.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut seen = HashSet::new();
        for spot in &spots {
            if !seen.insert(spot.key.as_str()) {
                return Err(CatalogError::DuplicateKey(spot.key.clone()));
            }
        }
        Ok(Self { spots })
    }

    /// The five spots of the Musicala campus tour.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            spots: vec![
                Spot::new(
                    "general",
                    "🏫",
                    "Visita general",
                    "Recorrido rápido por la sede",
                    "./videos/general.mp4",
                ),
                Spot::new(
                    "stim",
                    "🌈",
                    "Estimulación artística",
                    "Espacios pensados para peques",
                    "./videos/estimulacion.mp4",
                ),
                Spot::new(
                    "artes",
                    "🎨",
                    "Artes plásticas",
                    "Materiales, técnica y creación",
                    "./videos/artesplasticas.mp4",
                ),
                Spot::new(
                    "danza",
                    "💃",
                    "Salones de danza",
                    "Espacios amplios y cómodos",
                    "./videos/danzas.mp4",
                ),
                Spot::new(
                    "musica",
                    "🎶",
                    "Salones de música",
                    "Instrumentos, sonido y clases",
                    "./videos/musica.mp4",
                ),
            ],
        }
    }

    /// Number of spots. Always at least one.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.spots.len()
    }

    /// Always `false`; present for API symmetry with slices.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.spots.is_empty()
    }

    /// The spot at `index`, wrapped into range.
    #[must_use]
    pub fn spot(&self, index: usize) -> &Spot {
        &self.spots[index % self.spots.len()]
    }

    /// Wrap an arbitrary (possibly negative) target into `[0, len)`.
    #[must_use]
    pub fn wrap(&self, target: i64) -> usize {
        nav::wrap(target, self.spots.len())
    }

    /// All spots in tour order.
    #[must_use]
    pub fn spots(&self) -> &[Spot] {
        &self.spots
    }

    /// Iterate spots in tour order.
    pub fn iter(&self) -> std::slice::Iter<'_, Spot> {
        self.spots.iter()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Spot;
    type IntoIter = std::slice::Iter<'a, Spot>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
