use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::model::Candidate;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("parse: {0}")]
    Parse(serde_json::Error),

    #[error("{} holds no candidates", .0.display())]
    Empty(PathBuf),
}

/// Curated candidates for automated insertion. Immutable once built.
#[derive(Debug, Clone)]
pub struct Pool(Vec<Candidate>);

impl Pool {
    /// The built-in curated set.
    pub fn curated() -> Self {
        Self(vec![
            candidate(
                "Cinematic",
                "Neon Samurai Night",
                "https://images.unsplash.com/photo-1542332213-9b5a5a3fad35?w=1200",
                "Cinematic cyberpunk samurai standing in a rainy Tokyo street, neon signs \
                 reflecting in puddles, Arri Alexa, 8k, vaporwave color palette, hyper-detailed",
            ),
            candidate(
                "Architecture",
                "Floating Glass Pavilion",
                "https://images.unsplash.com/photo-1519608487953-e999c86e7455?w=1200",
                "Futuristic glass pavilion floating above a calm lake, parametric design, Zaha \
                 Hadid style, soft morning mist, Unreal Engine 5 render, architectural digest \
                 quality",
            ),
            candidate(
                "Nature",
                "Bioluminescent Forest",
                "https://images.unsplash.com/photo-1510051646651-705307293581?w=1200",
                "Glowing bioluminescent forest at night, magical teal and violet energy, \
                 floating spores, ethereal atmosphere, macro photography, 8k, otherworldly \
                 beauty",
            ),
            candidate(
                "Interior",
                "Luxury Cloud Loft",
                "https://images.unsplash.com/photo-1586023492125-27b2c045efd7?w=1200",
                "Luxury penthouse loft in the clouds, floor-to-ceiling glass walls, minimalist \
                 furniture, golden hour warmth, 8k, architectural visualization masterpiece",
            ),
            candidate(
                "Portrait",
                "Vintage Cyborg",
                "https://images.unsplash.com/photo-1589254065878-42c9da997008?w=1200",
                "Vintage studio portrait of a weathered cyborg, brass fittings and cracked \
                 porcelain skin, Rembrandt lighting, analog film grain, 8k, hauntingly lifelike",
            ),
            candidate(
                "Sci-Fi",
                "Space Whale",
                "https://images.unsplash.com/photo-1446776811953-b23d57bd21aa?w=1200",
                "Colossal whale drifting through a violet nebula, stardust trailing from its \
                 fins, deep gold and indigo cosmos, epic scale, matte painting, 8k, awe-inspiring",
            ),
        ])
    }

    /// Load an override pool from a JSON array of candidates.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let buf = fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let candidates: Vec<Candidate> = serde_json::from_str(&buf).map_err(Error::Parse)?;

        if candidates.is_empty() {
            return Err(Error::Empty(path.to_path_buf()));
        }

        tracing::debug!(
            "loaded {} pool candidates from {}",
            candidates.len(),
            path.display()
        );

        Ok(Self(candidates))
    }

    /// Override pool if one is deployed, otherwise the built-in set.
    pub fn load_or_curated(path: &Path) -> Result<Self, Error> {
        if path.exists() {
            Self::from_path(path)
        } else {
            Ok(Self::curated())
        }
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Candidate>> for Pool {
    fn from(candidates: Vec<Candidate>) -> Self {
        Self(candidates)
    }
}

fn candidate(category: &str, title: &str, url: &str, prompt: &str) -> Candidate {
    Candidate {
        category: category.to_owned(),
        title: title.to_owned(),
        url: url.to_owned(),
        prompt: prompt.to_owned(),
    }
}
