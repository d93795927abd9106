use std::env;
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct UploadConfig {
    /// Directory where uploaded media is stored.
    pub dir: PathBuf,
}

impl UploadConfig {
    pub fn from_env() -> Self {
        Self {
            dir: PathBuf::from(
                env::var("UPLOADS_DIR").unwrap_or_else(|_| "public/uploads".to_string()),
            ),
        }
    }
}
