use chrono::{DateTime, Utc};

/// A page as sent in `wp.newPage` / `wp.editPage`.
///
/// `link` and `page_parent_id` keep the difference between a member that was
/// not sent at all (`None`) and one sent empty (`Some("")`): an empty parent
/// id detaches the page, a missing one leaves it where it is.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageValue {
    pub title: String,
    pub description: String,
    pub link: Option<String>,
    pub page_date: Option<DateTime<Utc>>,
    pub keywords: String,
    pub page_parent_id: Option<String>,
}
