use std::path::{Path, PathBuf};

use color_eyre::Section;
use pulldown_cmark::Options;
use rayon::prelude::*;
use tracing::info;

use crate::{
    collect::collect_posts,
    config::SiteConfig,
    discover::discover_posts,
    feed::{Feed, assemble},
    markdown::parser_options,
    output::write_feeds,
    post::{Post, parse_post},
};

/// Build once into the output directory using the current working directory.
pub fn build_once() -> color_eyre::Result<()> {
    let root =
        std::env::current_dir().with_note(|| "While getting the current working directory")?;
    build_at(&root)
}

pub fn build_at(root: &Path) -> color_eyre::Result<()> {
    let site = SiteConfig::load_at(root);
    info!(root = %root.display(), "building feeds");

    Pipeline::new(BuildCtx::new(site))
        .discover()?
        .parse()
        .collect()
        .assemble()
        .emit()
}

/// Run every stage up to serialization and hand back the feed model.
pub fn build_feed(site: SiteConfig) -> color_eyre::Result<Feed> {
    let assembled = Pipeline::new(BuildCtx::new(site))
        .discover()?
        .parse()
        .collect()
        .assemble();
    Ok(assembled.state.0)
}

struct BuildCtx {
    site: SiteConfig,
    parser_options: Options,
}

impl BuildCtx {
    fn new(site: SiteConfig) -> Self {
        Self {
            site,
            parser_options: parser_options(),
        }
    }
}

/// Each file is parsed independently; the result keeps input order.
fn parse_sources(ctx: &BuildCtx, paths: &[PathBuf]) -> Vec<Option<Post>> {
    paths
        .par_iter()
        .map(|path| parse_post(path, &ctx.site, ctx.parser_options))
        .collect()
}

fn emit_feed(ctx: &BuildCtx, feed: &Feed) -> color_eyre::Result<()> {
    let rendered = feed.render()?;
    write_feeds(&ctx.site.output_dir, &ctx.site.feed_name, &rendered)
        .with_note(|| "While writing the feeds.")?;
    info!(items = feed.items().len(), "feeds written");
    Ok(())
}

trait PipelineStage {}
/// Pipeline typestate driver
struct Pipeline<S: PipelineStage> {
    ctx: BuildCtx,
    state: S,
}

struct Discovered(Vec<PathBuf>);
impl PipelineStage for Discovered {}
struct Parsed(Vec<Option<Post>>);
impl PipelineStage for Parsed {}
struct Collected(Vec<Post>);
impl PipelineStage for Collected {}
struct Assembled(Feed);
impl PipelineStage for Assembled {}
impl PipelineStage for () {}

// initial state
impl Pipeline<()> {
    fn new(ctx: BuildCtx) -> Self {
        Self { ctx, state: () }
    }

    fn discover(self) -> color_eyre::Result<Pipeline<Discovered>> {
        let paths = discover_posts(&self.ctx.site).with_note(|| "While discovering posts.")?;
        Ok(Pipeline {
            ctx: self.ctx,
            state: Discovered(paths),
        })
    }
}

impl Pipeline<Discovered> {
    fn parse(self) -> Pipeline<Parsed> {
        let parsed = parse_sources(&self.ctx, &self.state.0);
        Pipeline {
            ctx: self.ctx,
            state: Parsed(parsed),
        }
    }
}

impl Pipeline<Parsed> {
    fn collect(self) -> Pipeline<Collected> {
        let posts = collect_posts(self.state.0);
        Pipeline {
            ctx: self.ctx,
            state: Collected(posts),
        }
    }
}

impl Pipeline<Collected> {
    fn assemble(self) -> Pipeline<Assembled> {
        let feed = assemble(&self.ctx.site, self.state.0);
        Pipeline {
            ctx: self.ctx,
            state: Assembled(feed),
        }
    }
}

impl Pipeline<Assembled> {
    fn emit(self) -> color_eyre::Result<()> {
        emit_feed(&self.ctx, &self.state.0)
    }
}
