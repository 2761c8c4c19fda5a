use std::path::{Path, PathBuf};

use crate::{
    feed::{FeedLinks, FeedOptions},
    types::SiteUrl,
};

pub const CONTENT_ROOT: &str = "pages";
pub const POSTS_DIR: &str = "posts";
pub const OUTPUT_DIR: &str = "dist";
pub const FEED_NAME: &str = "feed";
pub const MARKDOWN_EXT: &str = "md";
// Paths containing this are listing/landing pages, not posts.
pub const EXCLUDE_TOKEN: &str = "index";

// Site-wide metadata used for feeds and absolute links.
pub const SITE_DOMAIN: &str = "https://hujiacheng.netlify.app";
pub const SITE_TITLE: &str = "hujiacheng";
pub const SITE_DESCRIPTION: &str = "hujiacheng' Blog";
pub const SITE_COPYRIGHT: &str = "CC BY-NC-SA 4.0 2024 © hujiacheng";
pub const SITE_AUTHOR: &str = "hujiacheng";
pub const SITE_AUTHOR_EMAIL: &str = "hujiacheng2003@163.com";
pub const SITE_IMAGE: &str = "/avatar.png";
pub const SITE_FAVICON: &str = "/logo.png";
pub const FEED_GENERATOR: &str = concat!("blogfeed ", env!("CARGO_PKG_VERSION"));

/// The single site author, attached to the feed and to every post.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthorInfo {
    pub name: String,
    pub email: String,
    pub link: String,
}

impl AuthorInfo {
    /// `email (name)`, the form RSS expects in `<author>`.
    pub fn rss_author(&self) -> String {
        format!("{} ({})", self.email, self.name)
    }
}

/// Everything a build needs to know about the site, constructed once and
/// handed to each stage by reference.
#[derive(Clone, Debug)]
pub struct SiteConfig {
    pub root: PathBuf,
    pub content_dir: PathBuf,
    pub posts_dir: PathBuf,
    pub output_dir: PathBuf,
    pub feed_name: String,
    pub domain: SiteUrl,
    pub author: AuthorInfo,
    pub image: String,
    pub favicon: String,
    pub feed_options: FeedOptions,
}

impl SiteConfig {
    pub fn load_at(root: &Path) -> Self {
        let domain = SiteUrl::new(SITE_DOMAIN);
        let content_dir = root.join(CONTENT_ROOT);
        let posts_dir = content_dir.join(POSTS_DIR);
        let output_dir = root.join(OUTPUT_DIR);

        let author = AuthorInfo {
            name: SITE_AUTHOR.to_string(),
            email: SITE_AUTHOR_EMAIL.to_string(),
            link: domain.as_str().to_string(),
        };

        let feed_options = FeedOptions {
            title: SITE_TITLE.to_string(),
            description: SITE_DESCRIPTION.to_string(),
            id: domain.as_str().to_string(),
            link: domain.as_str().to_string(),
            copyright: SITE_COPYRIGHT.to_string(),
            generator: FEED_GENERATOR.to_string(),
            feed_links: FeedLinks {
                rss: domain.join(&format!("{FEED_NAME}.xml")),
                atom: domain.join(&format!("{FEED_NAME}.atom")),
                json: domain.join(&format!("{FEED_NAME}.json")),
            },
            author: None,
            image: None,
            favicon: None,
        };

        Self {
            root: root.to_path_buf(),
            content_dir,
            posts_dir,
            output_dir,
            feed_name: FEED_NAME.to_string(),
            image: domain.join(SITE_IMAGE),
            favicon: domain.join(SITE_FAVICON),
            domain,
            author,
            feed_options,
        }
    }

    /// Whether a discovered path is a listing page rather than a post. Only
    /// the part below the build root is inspected.
    pub fn is_excluded(&self, path: &Path) -> bool {
        path.strip_prefix(&self.root)
            .unwrap_or(path)
            .to_string_lossy()
            .contains(EXCLUDE_TOKEN)
    }
}
