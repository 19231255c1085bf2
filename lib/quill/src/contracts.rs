//! Blog API contracts.
//!
//! The static [`ops`] table declares one [`Operation`] per logical API
//! operation; the structs here mirror the wire shapes those operations
//! exchange. Everything in this module is declarative - request
//! construction lives in [`crate::BlogClient`].
//!
//! Two asymmetries are deliberate, matching the backend:
//! - [`CreatePostRequest`] arrays are plain `Vec`s (defaulting to empty,
//!   never null) while [`UpdatePostRequest`] fields are [`Patch`] values,
//!   so an update can distinguish "leave unchanged" from "clear".
//! - The category and tag listings have no declared shape; callers decode
//!   them as untyped JSON and validate defensively.

use chrono::{DateTime, Utc};
use quill_core::{ContentType, Method, Operation, Patch, PathTemplate};
use serde::{Deserialize, Serialize};

/// The operation table: one entry per logical API operation.
pub mod ops {
    use super::{ContentType, Method, Operation, PathTemplate};

    const ACCEPT_JSON: &[(&str, &str)] = &[("Accept", "application/json")];

    /// Liveness probe. 200 when healthy, 500 when not.
    pub const CHECK_HEALTH: Operation = Operation {
        name: "check_health",
        method: Method::Get,
        path: PathTemplate::new("/_healthz"),
        headers: ACCEPT_JSON,
        content_type: None,
    };

    /// Paginated published-post listing with optional search/filtering.
    pub const GET_BLOG_POSTS: Operation = Operation {
        name: "get_blog_posts",
        method: Method::Get,
        path: PathTemplate::new("/routes/blog/posts"),
        headers: ACCEPT_JSON,
        content_type: None,
    };

    /// Create a post.
    pub const CREATE_BLOG_POST: Operation = Operation {
        name: "create_blog_post",
        method: Method::Post,
        path: PathTemplate::new("/routes/blog/posts"),
        headers: ACCEPT_JSON,
        content_type: Some(ContentType::Json),
    };

    /// Fetch one post by slug. The backend increments the post's view
    /// counter as a side effect; a missing slug is a 404.
    pub const GET_BLOG_POST: Operation = Operation {
        name: "get_blog_post",
        method: Method::Get,
        path: PathTemplate::new("/routes/blog/posts/{slug}"),
        headers: ACCEPT_JSON,
        content_type: None,
    };

    /// Distinct categories across published posts. Untyped response.
    pub const GET_CATEGORIES: Operation = Operation {
        name: "get_categories",
        method: Method::Get,
        path: PathTemplate::new("/routes/blog/categories"),
        headers: ACCEPT_JSON,
        content_type: None,
    };

    /// Distinct tags across published posts. Untyped response.
    pub const GET_TAGS: Operation = Operation {
        name: "get_tags",
        method: Method::Get,
        path: PathTemplate::new("/routes/blog/tags"),
        headers: ACCEPT_JSON,
        content_type: None,
    };

    /// Partial update of a post. Every body field is optional; explicit
    /// nulls clear, omitted fields stay unchanged.
    pub const UPDATE_BLOG_POST: Operation = Operation {
        name: "update_blog_post",
        method: Method::Put,
        path: PathTemplate::new("/routes/blog/posts/{post_id}"),
        headers: ACCEPT_JSON,
        content_type: Some(ContentType::Json),
    };

    /// Delete a post. Untyped acknowledgement.
    pub const DELETE_BLOG_POST: Operation = Operation {
        name: "delete_blog_post",
        method: Method::Delete,
        path: PathTemplate::new("/routes/blog/posts/{post_id}"),
        headers: ACCEPT_JSON,
        content_type: None,
    };

    /// Paginated unpublished-post listing. Requires an authenticated caller.
    pub const GET_DRAFT_POSTS: Operation = Operation {
        name: "get_draft_posts",
        method: Method::Get,
        path: PathTemplate::new("/routes/blog/posts/drafts"),
        headers: ACCEPT_JSON,
        content_type: None,
    };
}

// ============================================================================
// Response shapes
// ============================================================================

/// Liveness probe response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Health status, e.g. `"healthy"`.
    pub status: String,
}

/// A full blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Post id.
    pub id: u64,
    /// Title.
    pub title: String,
    /// URL-friendly slug, unique per post.
    pub slug: String,
    /// Body content.
    pub content: String,
    /// Short summary shown in listings.
    pub excerpt: Option<String>,
    /// Featured image URL.
    pub featured_image: Option<String>,
    /// Publication timestamp.
    pub published_date: DateTime<Utc>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last-update timestamp.
    pub updated_at: DateTime<Utc>,
    /// Categories, empty when uncategorized.
    #[serde(default)]
    pub categories: Vec<String>,
    /// Tags, empty when untagged.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Whether the post is published.
    pub is_published: bool,
    /// Number of times the post was viewed.
    pub view_count: u64,
}

/// The subset of [`Post`] returned by listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostSummary {
    /// Post id.
    pub id: u64,
    /// Title.
    pub title: String,
    /// URL-friendly slug, unique per post.
    pub slug: String,
    /// Short summary shown in listings.
    pub excerpt: Option<String>,
    /// Featured image URL.
    pub featured_image: Option<String>,
    /// Publication timestamp.
    pub published_date: DateTime<Utc>,
    /// Categories, empty when uncategorized.
    #[serde(default)]
    pub categories: Vec<String>,
    /// Tags, empty when untagged.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Number of times the post was viewed.
    pub view_count: u64,
}

/// One page of a post listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginatedPosts {
    /// Posts on this page, newest first.
    pub posts: Vec<PostSummary>,
    /// Total matching posts across all pages.
    pub total: u64,
    /// Current page (1-based).
    pub page: u32,
    /// Page size.
    pub per_page: u32,
    /// Total page count.
    pub total_pages: u32,
}

// ============================================================================
// Request shapes
// ============================================================================

/// Query parameters for the published-post listing.
///
/// `None` fields are omitted from the query string; the server applies its
/// defaults (page 1, 10 per page, no filtering).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PostsQuery {
    /// Page to fetch (1-based).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    /// Free-text search over title, content, and excerpt.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Restrict to one category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Query parameters for the draft listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DraftsQuery {
    /// Page to fetch (1-based).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
}

/// Body of the create-post operation.
///
/// Array fields default to empty and are never null; the server fills in
/// the slug, timestamps, and `published_date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePostRequest {
    /// Title, 1..=255 characters.
    pub title: String,
    /// Body content.
    pub content: String,
    /// Short summary shown in listings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    /// Featured image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<String>,
    /// Categories.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,
    /// Tags.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Publish immediately instead of saving a draft.
    #[serde(default)]
    pub is_published: bool,
    /// Publish at this time instead of now.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_date: Option<DateTime<Utc>>,
    /// SEO description, at most 160 characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    /// SEO keywords.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub meta_keywords: Vec<String>,
}

impl CreatePostRequest {
    /// Create a draft request with only the required fields set.
    #[must_use]
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            excerpt: None,
            featured_image: None,
            categories: Vec::new(),
            tags: Vec::new(),
            is_published: false,
            scheduled_date: None,
            meta_description: None,
            meta_keywords: Vec::new(),
        }
    }
}

/// Body of the update-post operation.
///
/// Every field is a [`Patch`]: `Absent` leaves the stored value unchanged,
/// `Null` clears it, `Value` replaces it. Serialization preserves explicit
/// nulls, which is what the backend's partial-update builder keys on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UpdatePostRequest {
    /// New title.
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub title: Patch<String>,
    /// New body content.
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub content: Patch<String>,
    /// New excerpt.
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub excerpt: Patch<String>,
    /// New featured image URL.
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub featured_image: Patch<String>,
    /// Replacement category list.
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub categories: Patch<Vec<String>>,
    /// Replacement tag list.
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub tags: Patch<Vec<String>>,
    /// Publish or unpublish.
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub is_published: Patch<bool>,
    /// New scheduled publication time.
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub scheduled_date: Patch<DateTime<Utc>>,
    /// New SEO description.
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub meta_description: Patch<String>,
    /// Replacement SEO keyword list.
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub meta_keywords: Patch<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operation_table_path_params() {
        assert!(ops::CHECK_HEALTH.path_params().is_empty());
        assert!(ops::GET_BLOG_POSTS.path_params().is_empty());
        assert_eq!(ops::GET_BLOG_POST.path_params(), vec!["slug"]);
        assert_eq!(ops::UPDATE_BLOG_POST.path_params(), vec!["post_id"]);
        assert_eq!(ops::DELETE_BLOG_POST.path_params(), vec!["post_id"]);
        assert!(ops::GET_DRAFT_POSTS.path_params().is_empty());
    }

    #[test]
    fn operation_table_body_encodings() {
        assert_eq!(ops::CREATE_BLOG_POST.content_type, Some(ContentType::Json));
        assert_eq!(ops::UPDATE_BLOG_POST.content_type, Some(ContentType::Json));
        assert_eq!(ops::GET_BLOG_POSTS.content_type, None);
        assert_eq!(ops::DELETE_BLOG_POST.content_type, None);
    }

    #[test]
    fn post_decodes_with_defaulted_arrays() {
        let json = r#"{
            "id": 7,
            "title": "Hello",
            "slug": "hello",
            "content": "body",
            "excerpt": null,
            "featured_image": null,
            "published_date": "2024-01-15T10:00:00Z",
            "created_at": "2024-01-14T09:00:00Z",
            "updated_at": "2024-01-15T10:00:00Z",
            "is_published": true,
            "view_count": 3
        }"#;

        let post: Post = serde_json::from_str(json).expect("decode");
        assert_eq!(post.id, 7);
        assert!(post.categories.is_empty());
        assert!(post.tags.is_empty());
        assert!(post.excerpt.is_none());
    }

    #[test]
    fn paginated_posts_decode() {
        let json = r#"{
            "posts": [{
                "id": 1,
                "title": "First",
                "slug": "first",
                "excerpt": "intro",
                "featured_image": null,
                "published_date": "2024-01-15T10:00:00Z",
                "categories": ["news"],
                "tags": ["rust"],
                "view_count": 10
            }],
            "total": 1,
            "page": 1,
            "per_page": 10,
            "total_pages": 1
        }"#;

        let page: PaginatedPosts = serde_json::from_str(json).expect("decode");
        assert_eq!(page.total, 1);
        assert_eq!(page.posts.first().map(|p| p.slug.as_str()), Some("first"));
    }

    #[test]
    fn create_request_omits_empty_collections() {
        let request = CreatePostRequest::new("Hello", "body");
        let json = serde_json::to_string(&request).expect("serialize");
        assert_eq!(
            json,
            r#"{"title":"Hello","content":"body","is_published":false}"#
        );
    }

    #[test]
    fn create_request_keeps_populated_fields() {
        let request = CreatePostRequest {
            excerpt: Some("short".to_string()),
            categories: vec!["news".to_string()],
            is_published: true,
            ..CreatePostRequest::new("Hello", "body")
        };

        let json = serde_json::to_string(&request).expect("serialize");
        assert!(json.contains(r#""excerpt":"short""#));
        assert!(json.contains(r#""categories":["news"]"#));
        assert!(json.contains(r#""is_published":true"#));
    }

    #[test]
    fn update_request_distinguishes_null_from_absent() {
        let request = UpdatePostRequest {
            title: Patch::Null,
            content: Patch::Value("x".to_string()),
            ..UpdatePostRequest::default()
        };

        let json = serde_json::to_string(&request).expect("serialize");
        assert_eq!(json, r#"{"title":null,"content":"x"}"#);
    }

    #[test]
    fn update_request_default_is_empty_object() {
        let json = serde_json::to_string(&UpdatePostRequest::default()).expect("serialize");
        assert_eq!(json, "{}");
    }

    #[test]
    fn update_request_clears_arrays_with_null() {
        let request = UpdatePostRequest {
            tags: Patch::Null,
            categories: Patch::Value(vec!["rust".to_string()]),
            ..UpdatePostRequest::default()
        };

        let json = serde_json::to_string(&request).expect("serialize");
        assert_eq!(json, r#"{"categories":["rust"],"tags":null}"#);
    }
}
