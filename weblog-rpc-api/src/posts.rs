use chrono::{DateTime, Utc};

/// A post as sent by a MetaWeblog client in `newPost` / `editPost`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostValue {
    pub title: String,
    pub description: String,
    pub link: String,
    /// Raw `mt_allow_comments` value, interpreted by the executor.
    pub comment_policy: String,
    pub excerpt: String,
    pub slug: String,
    pub author_id: String,
    /// In the order the client sent them, duplicates included.
    pub categories: Vec<String>,
    pub post_date: Option<DateTime<Utc>>,
    pub tags: Vec<String>,
}
