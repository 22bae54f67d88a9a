use weblog_rpc_api::posts::PostValue;
use weblog_rpc_common::utils::split_tags;

use crate::document::Element;
use crate::fault::StructKind;
use crate::value::{FieldError, StructValue};

/// Reads the post struct of `metaWeblog.newPost` / `metaWeblog.editPost`.
pub fn decode(param: &Element) -> Result<PostValue, FieldError> {
    let value = StructValue::from_param(param);

    Ok(PostValue {
        title: value.get_required(StructKind::Post, "title")?,
        description: value.get_required(StructKind::Post, "description")?,
        link: value.get_optional("link", ""),
        comment_policy: value.get_optional("mt_allow_comments", ""),
        excerpt: value.get_optional("mt_excerpt", ""),
        slug: value.get_optional("wp_slug", ""),
        author_id: value.get_optional("wp_author_id", ""),
        categories: value.get_array("categories"),
        // clients disagree on the name of this member
        post_date: value
            .get_date("dateCreated")
            .or_else(|| value.get_date("pubDate")),
        tags: value
            .get("mt_keywords")
            .map(|keywords| split_tags(&keywords))
            .unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;

    fn post(members: &str) -> Result<PostValue, FieldError> {
        let xml = format!("<param><value><struct>{}</struct></value></param>", members);
        decode(Document::parse(&xml).unwrap().root())
    }

    fn member(name: &str, value: &str) -> String {
        format!("<member><name>{}</name><value>{}</value></member>", name, value)
    }

    #[test]
    fn test_full_post() {
        let members = [
            member("title", "<string>Hello</string>"),
            member("description", "<string>&lt;p&gt;World&lt;/p&gt;</string>"),
            member("link", "<string>https://example.org/hello</string>"),
            member("mt_allow_comments", "<int>1</int>"),
            member("mt_excerpt", "<string>Short</string>"),
            member("wp_slug", "<string>hello</string>"),
            member("wp_author_id", "<string>42</string>"),
            member(
                "categories",
                "<array><data><value><string>B</string></value><value><string>A</string></value></data></array>",
            ),
            member("dateCreated", "<dateTime.iso8601>20230115T10:00:00</dateTime.iso8601>"),
            member("mt_keywords", "<string>Go, go, GO </string>"),
        ]
        .concat();
        let post = post(&members).unwrap();

        assert_eq!(post.title, "Hello");
        assert_eq!(post.description, "<p>World</p>");
        assert_eq!(post.link, "https://example.org/hello");
        assert_eq!(post.comment_policy, "1");
        assert_eq!(post.excerpt, "Short");
        assert_eq!(post.slug, "hello");
        assert_eq!(post.author_id, "42");
        assert_eq!(post.categories, vec!["B", "A"]);
        assert_eq!(
            post.post_date.map(|date| date.to_rfc3339()).as_deref(),
            Some("2023-01-15T10:00:00+00:00")
        );
        assert_eq!(post.tags, vec!["Go"]);
    }

    #[test]
    fn test_defaults() {
        let post = post(&[member("title", "T"), member("description", "D")].concat()).unwrap();

        assert_eq!(
            post,
            PostValue {
                title: "T".to_owned(),
                description: "D".to_owned(),
                ..PostValue::default()
            }
        );
    }

    #[test]
    fn test_required_members() {
        let tests = vec![
            (member("description", "D"), "title"),
            (member("title", "T"), "description"),
            (String::new(), "title"),
        ];

        for (members, field) in tests {
            assert_eq!(
                post(&members),
                Err(FieldError::Missing {
                    kind: StructKind::Post,
                    field
                })
            );
        }
    }

    #[test]
    fn test_date_fallback() {
        let required = [member("title", "T"), member("description", "D")].concat();
        let tests = vec![
            (
                member("pubDate", "20220101T00:00:00"),
                Some("2022-01-01T00:00:00+00:00"),
            ),
            (
                [member("dateCreated", "bad"), member("pubDate", "20220101T00:00:00")].concat(),
                Some("2022-01-01T00:00:00+00:00"),
            ),
            (
                [
                    member("dateCreated", "20230115T10:00:00"),
                    member("pubDate", "20220101T00:00:00"),
                ]
                .concat(),
                Some("2023-01-15T10:00:00+00:00"),
            ),
            ([member("dateCreated", "bad"), member("pubDate", "worse")].concat(), None),
        ];

        for (dates, expected) in tests {
            let post = post(&format!("{}{}", required, dates)).unwrap();
            assert_eq!(
                post.post_date.map(|date| date.to_rfc3339()).as_deref(),
                expected,
                "{}",
                dates
            );
        }
    }

    #[test]
    fn test_categories_keep_duplicates() {
        let members = [
            member("title", "T"),
            member("description", "D"),
            member(
                "categories",
                "<array><data><value>News</value><value>news</value><value>News</value></data></array>",
            ),
        ]
        .concat();

        assert_eq!(post(&members).unwrap().categories, vec!["News", "news", "News"]);
    }
}
