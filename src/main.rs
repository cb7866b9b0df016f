use anyhow::Context as _;
use clap::{command, Arg, ArgAction, ArgMatches, Command};
use context::Context;
use generator::generate;
use std::path::PathBuf;

mod context;
mod frontmatter;
mod generator;
mod metadata;

fn cli() -> Command {
    command!().args([
        Arg::new("article_dir")
            .help("Directory path of articles")
            .value_parser(clap::value_parser!(PathBuf))
            .default_value("articles"),
        Arg::new("output")
            .help("Path of the generated JSON. Defaults to articles-meta.json next to article_dir.")
            .value_parser(clap::value_parser!(PathBuf)),
        Arg::new("compact")
            .long("compact")
            .help("Write single-line JSON instead of pretty-printed")
            .action(ArgAction::SetTrue),
    ])
}

fn context_from(mut matches: ArgMatches) -> anyhow::Result<Context> {
    let article_dir: PathBuf = matches
        .remove_one("article_dir")
        .context("article_dir")?;
    let output: Option<PathBuf> = matches.remove_one("output");
    let pretty = !matches.get_flag("compact");

    Ok(Context::new(article_dir, output, pretty))
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let ctx = context_from(cli().get_matches())?;
    generate(&ctx)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let ctx = context_from(cli().get_matches_from(["metagen"])).unwrap();
        assert_eq!(ctx.article_dir, PathBuf::from("articles"));
        assert!(ctx.pretty);
    }

    #[test]
    fn test_cli_explicit_args() {
        let matches = cli().get_matches_from(["metagen", "docs", "out/meta.json", "--compact"]);
        let ctx = context_from(matches).unwrap();
        assert_eq!(ctx.article_dir, PathBuf::from("docs"));
        assert_eq!(ctx.output_path, PathBuf::from("out/meta.json"));
        assert!(!ctx.pretty);
    }
}
