use std::path::PathBuf;

use clap::CommandFactory;
use clap_complete::generate;
use colored::Colorize;
use itertools::Itertools;
use termtree::Tree;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, Settings};
use crate::domain::{
    build_lineage_tree, classify_with_index, lineage_color, Agency, AgencyIndex, LineageNode,
    LineageTag,
};
use crate::store;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Tree) => tree(cli),
        Some(Commands::Classify { id }) => classify(cli, id),
        Some(Commands::Lineages) => lineages(cli),
        Some(Commands::Colors { tag }) => colors(tag.as_deref()),
        Some(Commands::Export) => export(cli),
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Show => config_show(),
        },
        Some(Commands::Completion { shell }) => completion(*shell),
        None => Ok(()),
    }
}

/// Dataset path: CLI flag wins over the configured location.
fn data_path(cli: &Cli) -> CliResult<PathBuf> {
    if let Some(path) = &cli.data {
        return Ok(path.clone());
    }
    Ok(Settings::load()?.data_path)
}

fn load_agencies(cli: &Cli) -> CliResult<Vec<Agency>> {
    let path = data_path(cli)?;
    debug!(path = %path.display(), "loading dataset");
    Ok(store::load_checked(&path)?)
}

#[instrument(skip(cli))]
fn tree(cli: &Cli) -> CliResult<()> {
    let agencies = load_agencies(cli)?;
    let forest = build_lineage_tree(&agencies);
    for root in &forest {
        println!("{}", render_tree(root));
    }
    Ok(())
}

fn render_tree(node: &LineageNode) -> Tree<String> {
    let color = lineage_color(node.lineage_type);
    let label = format!(
        "{} [{}]",
        node.agency.name,
        output::lineage_label(node.lineage_type.as_str(), color)
    );
    Tree::new(label).with_leaves(node.children().iter().map(render_tree))
}

#[instrument(skip(cli))]
fn classify(cli: &Cli, id: &str) -> CliResult<()> {
    let agencies = load_agencies(cli)?;
    let index = AgencyIndex::lenient(&agencies);
    let agency = index
        .get(id)
        .ok_or_else(|| CliError::UnknownAgency(id.to_string()))?;
    output::info(&classify_with_index(agency, &index));
    Ok(())
}

#[instrument(skip(cli))]
fn lineages(cli: &Cli) -> CliResult<()> {
    let agencies = load_agencies(cli)?;
    let index = AgencyIndex::lenient(&agencies);
    let by_tag = agencies
        .iter()
        .map(|agency| (classify_with_index(agency, &index), agency))
        .into_group_map();

    for tag in LineageTag::ALL {
        let Some(members) = by_tag.get(&tag) else {
            continue;
        };
        let color = lineage_color(tag);
        let label = output::lineage_label(tag.as_str(), color).bold();
        println!("{} ({})", label, members.len());
        for agency in members {
            output::detail(&agency.name);
        }
    }
    Ok(())
}

fn colors(tag: Option<&str>) -> CliResult<()> {
    let tags: Vec<LineageTag> = match tag {
        Some(raw) => vec![raw.parse()?],
        None => LineageTag::ALL.to_vec(),
    };
    for tag in tags {
        let color = lineage_color(tag);
        println!(
            "{} {:<13} fill {}  stroke {}",
            output::swatch(color.stroke_rgb()),
            tag,
            color.fill,
            color.stroke
        );
    }
    Ok(())
}

#[instrument(skip(cli))]
fn export(cli: &Cli) -> CliResult<()> {
    let agencies = load_agencies(cli)?;
    let forest = build_lineage_tree(&agencies);
    output::info(&serde_json::to_string_pretty(&forest)?);
    Ok(())
}

fn config_show() -> CliResult<()> {
    if let Some(path) = global_config_path() {
        let note = if path.exists() { "" } else { " (absent)" };
        output::detail(&format!("# global: {}{}", path.display(), note));
    }
    print!("{}", Settings::load()?.to_toml()?);
    Ok(())
}

fn completion(shell: clap_complete::Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut std::io::stdout());
    Ok(())
}
