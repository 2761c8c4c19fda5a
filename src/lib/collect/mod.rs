use tracing::{info, warn};

use crate::post::Post;

/// Keep the posts that parsed, newest first. Posts with the same date stay in
/// input order.
pub fn collect_posts(results: Vec<Option<Post>>) -> Vec<Post> {
    let total = results.len();

    let mut posts: Vec<Post> = results
        .into_iter()
        .flatten()
        .filter(|post| {
            let complete = post.is_complete();
            if !complete {
                warn!(link = %post.link, "dropping post without a title");
            }
            complete
        })
        .collect();

    // `sort_by` is stable.
    posts.sort_by(|a, b| b.date.cmp(&a.date));

    info!(kept = posts.len(), skipped = total - posts.len(), "collected posts");
    posts
}
