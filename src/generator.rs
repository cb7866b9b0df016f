use std::{
    fs::OpenOptions,
    io::{BufWriter, Write},
    path::Path,
};

use anyhow::{bail, Context as _};
use log::{debug, info};

use crate::{context::Context, frontmatter, metadata::Article};

pub(crate) mod catalog;

use catalog::Catalog;

/// Depth-first walk of `dir`, in the order the filesystem lists entries.
/// `prefix` is the `/`-joined path of `dir` relative to the scan root.
pub(crate) fn scan(dir: &Path, prefix: &str) -> anyhow::Result<Vec<Article>> {
    let mut articles = vec![];

    let entries = std::fs::read_dir(dir).with_context(|| format!("while listing {dir:?}"))?;
    for entry in entries {
        let entry = entry.with_context(|| format!("while listing {dir:?}"))?;
        let name = entry.file_name().to_string_lossy().to_string();
        let relative_path = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{prefix}/{name}")
        };
        // follows symlinks
        let meta = std::fs::metadata(entry.path())
            .with_context(|| format!("while inspecting {:?}", entry.path()))?;

        if meta.is_dir() {
            articles.extend(scan(&entry.path(), &relative_path)?);
        } else if name.ends_with(".md") {
            let content = std::fs::read_to_string(entry.path())
                .with_context(|| format!("while reading {:?}", entry.path()))?;
            match frontmatter::parse(&content) {
                Some(metadata) => articles.push(Article::new(metadata, relative_path)),
                None => debug!("{relative_path}: no frontmatter, skipping"),
            }
        } else {
            debug!("{relative_path}: not markdown, ignoring");
        }
    }

    Ok(articles)
}

pub(crate) fn write_catalog(
    output_path: &Path,
    catalog: &Catalog,
    pretty: bool,
) -> anyhow::Result<()> {
    if output_path.is_dir() {
        bail!("output path {output_path:?} is a directory.");
    }
    let fd = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(output_path)
        .with_context(|| format!("while opening {output_path:?}"))?;
    let mut writer = BufWriter::new(fd);
    if pretty {
        serde_json::to_writer_pretty(&mut writer, catalog)?;
    } else {
        serde_json::to_writer(&mut writer, catalog)?;
    }
    writer
        .flush()
        .with_context(|| format!("while writing {output_path:?}"))?;

    Ok(())
}

pub(crate) fn generate(ctx: &Context) -> anyhow::Result<Catalog> {
    if !ctx.article_dir.is_dir() {
        bail!("article directory {:?} not found.", ctx.article_dir);
    }

    info!("Scanning articles directory {:?}...", ctx.article_dir);
    let articles = scan(&ctx.article_dir, "")?;
    let catalog = Catalog::group(&articles);

    write_catalog(&ctx.output_path, &catalog, ctx.pretty)?;

    info!("Generated metadata for {} articles", catalog.len());
    info!("Output saved to: {:?}", ctx.output_path);
    info!("Categories found:");
    for (category, count) in catalog.categories() {
        info!("  - {category}: {count} articles");
    }

    Ok(catalog)
}
