//! Blog CLI Example
//!
//! Lists recent posts and categories from a blog backend.
//!
//! ```sh
//! BLOG_BASE_URL=https://blog.example.com cargo run -p blog-cli
//! ```

// Example-specific lint allowances
#![allow(missing_docs)]
#![allow(clippy::print_stdout)]

use quill::prelude::*;

#[tokio::main]
async fn main() -> quill::Result<()> {
    let base_url =
        std::env::var("BLOG_BASE_URL").unwrap_or_else(|_| "http://localhost:8000".to_string());

    let client = BlogClient::builder()
        .base_url(base_url)
        .configure_http(|http| http.with_logging())
        .build()?;

    if let Ok(token) = std::env::var("BLOG_TOKEN") {
        client.set_bearer_token(token);
    }

    // Independent calls, fetched concurrently.
    let query = PostsQuery {
        per_page: Some(5),
        ..PostsQuery::default()
    };
    let (posts, categories) = tokio::join!(
        client.get_blog_posts(&query, CallOptions::new()),
        client.get_categories(CallOptions::new()),
    );

    let page: PaginatedPosts = posts?.error_for_status()?.json()?;
    println!("Latest posts ({} total):", page.total);
    for post in &page.posts {
        println!("  [{}] {} ({} views)", post.slug, post.title, post.view_count);
    }

    // The categories listing has no declared shape; inspect it defensively.
    let categories: serde_json::Value = categories?.error_for_status()?.json()?;
    if let Some(names) = categories.get("categories").and_then(|c| c.as_array()) {
        let names: Vec<&str> = names.iter().filter_map(|c| c.as_str()).collect();
        println!("Categories: {}", names.join(", "));
    }

    Ok(())
}
