use anyhow::{Context, Result};
use markdown_sitegen_config::Config;
use markdown_sitegen_engine::{Template, generate_pages_recursive, io};
use std::path::PathBuf;
use std::{env, process};

/// Parsed command line: `markdown-sitegen [BASEPATH] [--config PATH]`.
#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    basepath: Option<String>,
    config_path: Option<PathBuf>,
}

impl Args {
    fn parse(args: &[String]) -> Result<Self, String> {
        let mut parsed = Args::default();
        let mut iter = args.iter().skip(1);

        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--config" | "-c" => {
                    let path = iter.next().ok_or("--config needs a path")?;
                    parsed.config_path = Some(PathBuf::from(path));
                }
                flag if flag.starts_with('-') => return Err(format!("Unknown option: {flag}")),
                basepath if parsed.basepath.is_none() => {
                    parsed.basepath = Some(basepath.to_string());
                }
                extra => return Err(format!("Unexpected argument: {extra}")),
            }
        }

        Ok(parsed)
    }
}

fn usage(args: &[String]) -> String {
    let program = args.first().map_or("markdown-sitegen", String::as_str);
    format!("Usage: {program} [basepath] [--config <path>]")
}

fn load_config(args: &Args) -> Result<Config> {
    let config = match &args.config_path {
        Some(path) => Config::load_from_path(path)?
            .with_context(|| format!("Config file {} not found", path.display()))?,
        None => Config::load()?.unwrap_or_else(|| {
            log::info!("No {} found, using defaults", Config::FILE_NAME);
            Config::default()
        }),
    };

    Ok(match &args.basepath {
        Some(basepath) => config.with_basepath(basepath),
        None => config,
    })
}

fn build_site(config: &Config) -> Result<()> {
    log::info!("Building site with basepath {}", config.basepath);

    let copied = io::copy_static(&config.static_dir, &config.output_dir).with_context(|| {
        format!(
            "copying {} to {}",
            config.static_dir.display(),
            config.output_dir.display()
        )
    })?;
    log::info!("Copied {copied} static files");

    let template = Template::load(&config.template_path)
        .with_context(|| format!("loading template {}", config.template_path.display()))?;

    generate_pages_recursive(
        &config.content_dir,
        &template,
        &config.output_dir,
        &config.basepath,
    )
    .with_context(|| format!("generating pages from {}", config.content_dir.display()))?;

    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().collect();
    let parsed = match Args::parse(&args) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("{}", usage(&args));
            process::exit(1);
        }
    };

    let config = load_config(&parsed)?;
    build_site(&config)?;

    log::info!("Site written to {}", config.output_dir.display());
    Ok(())
}
