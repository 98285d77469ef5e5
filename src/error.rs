use std::io;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Gallery: {0}")]
    Gallery(#[from] crate::gallery::Error),

    #[error("Pool: {0}")]
    Pool(#[from] crate::pool::Error),

    #[error("Update: {0}")]
    Update(#[from] crate::update::Error),

    #[error("Io: {0}")]
    Io(#[from] io::Error),
}
