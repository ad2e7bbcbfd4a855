use serde::{Deserialize, Serialize};
use validator::Validate;

/// Photo reference. Binary content lives with the external media store;
/// rows only carry the path under the configured media root.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Photo {
    pub id: i64,
    pub hotel_id: Option<i64>,
    pub room_id: Option<i64>,
    pub path: String,
    pub caption: String,
    pub is_main: bool,
}

#[derive(Debug, Deserialize, Validate)]
pub struct AttachPhoto {
    #[validate(length(min = 1, max = 512))]
    pub path: String,
    #[serde(default)]
    pub caption: String,
    #[serde(default)]
    pub is_main: bool,
}

impl AttachPhoto {
    /// The path must stay inside the media root: relative, no parent
    /// traversal.
    pub fn path_is_safe(&self) -> bool {
        let p = std::path::Path::new(&self.path);
        p.is_relative()
            && !p
                .components()
                .any(|c| matches!(c, std::path::Component::ParentDir))
    }
}
