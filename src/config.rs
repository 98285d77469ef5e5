use std::{
    env, io,
    path::{Path, PathBuf},
};

/// Where the deployment keeps its data files.
#[derive(Debug, Clone)]
pub struct Config {
    root: PathBuf,
}

impl Config {
    /// Root is one level above the executable's own directory, so the
    /// data paths do not depend on the invoking working directory.
    pub fn from_exe() -> crate::Result<Self> {
        let exe = env::current_exe()?;

        let root = exe
            .parent()
            .and_then(Path::parent)
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("{} has no parent directory", exe.display()),
                )
            })?
            .to_path_buf();

        tracing::debug!("deployment root = {}", root.display());

        Ok(Self { root })
    }

    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn gallery_path(&self) -> PathBuf {
        self.root.join("data").join("gallery.json")
    }

    pub fn pool_path(&self) -> PathBuf {
        self.root.join("data").join("prompt_pool.json")
    }
}
