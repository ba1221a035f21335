use std::path::{Path, PathBuf};

use anyhow::Context;
use byggesak_view::{COMPONENT_NAMES, Props, RenderContext, TextResources, ViewConfig, render_component};
use clap::{Parser, Subcommand};
use log::info;

#[derive(Parser)]
#[command(name = "byggesak-view", version, about = "Render building-permit view models")]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Render one component and print its view as JSON
    Render {
        /// Tag name of the component, e.g. custom-group-avloep
        #[arg(long)]
        component: String,
        /// JSON file holding the component's props
        #[arg(long)]
        props: PathBuf,
        /// Text-resource document; without it every key is reported missing
        #[arg(long)]
        resources: Option<PathBuf>,
        /// View configuration
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// List the registered component tag names
    Components,
}

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match Cli::parse().cmd {
        Cmd::Render {
            component,
            props,
            resources,
            config,
        } => render(&component, &props, resources.as_deref(), config.as_deref()),
        Cmd::Components => {
            for name in COMPONENT_NAMES {
                println!("{name}");
            }
            Ok(())
        }
    }
}

fn render(
    component: &str,
    props_path: &Path,
    resources_path: Option<&Path>,
    config_path: Option<&Path>,
) -> anyhow::Result<()> {
    let props = Props::from_file(props_path)
        .with_context(|| format!("Failed to parse props from {}", props_path.display()))?;

    let config = match config_path {
        Some(path) => ViewConfig::from_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => ViewConfig::default(),
    };

    let resources = resources_path
        .map(|path| {
            TextResources::from_file(path)
                .with_context(|| format!("Failed to load text resources from {}", path.display()))
        })
        .transpose()?;

    let ctx = match &resources {
        Some(resources) => {
            info!("Loaded {} text resources", resources.len());
            RenderContext::new(resources)
        }
        None => {
            info!("No text resources given; every resource key will be reported missing");
            RenderContext::without_resources()
        }
    }
    .with_config(config);

    let view = render_component(component, &props, &ctx)?;
    println!("{}", serde_json::to_string_pretty(&view)?);
    Ok(())
}
