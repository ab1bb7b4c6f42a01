//! PSO2 CLI - Command-line tool for PSO2 color variants and bone names.
//!
//! This is the main entry point for the `pso2` command-line application.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use pso2::names::mesh_part;
use pso2::prelude::*;

/// PSO2 model tool
#[derive(Parser)]
#[command(name = "pso2")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the color sets of a NIFL color variant file
    CclDump {
        /// Path to the color variant file
        #[arg(short, long, env = "PSO2_CCL_FILE")]
        input: PathBuf,

        /// Only show this color set
        #[arg(long)]
        id: Option<u32>,

        /// Show only the two colors used by this item type
        #[arg(short = 't', long)]
        object_type: Option<ObjectType>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Split bone names into name and identifier
    BoneDecode {
        /// Bone names, e.g. "(12)Arm#a#b"
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Build an "(id)name" bone name
    BoneEncode {
        /// Bone name without identifier
        #[arg(short, long)]
        name: String,

        /// Bone identifier
        #[arg(short, long)]
        id: u32,
    },

    /// Move bone identifiers between names and the side field
    BoneRename {
        /// Skeleton JSON file: [{ "name": ..., "bone_id": ... }, ...]
        #[arg(short, long)]
        input: PathBuf,

        /// Output file (defaults to printing the result)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Which way identifiers move
        #[arg(short, long, value_enum, default_value_t = Direction::IdsToProperties)]
        direction: Direction,

        /// Only show the planned renames
        #[arg(long)]
        dry_run: bool,
    },

    /// Print the mesh part ids embedded in object names
    MeshId {
        /// Object names, e.g. "mesh[0]_body#shader#4.001"
        #[arg(required = true)]
        names: Vec<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Direction {
    /// "(id)name" becomes "name" with a stored id
    IdsToProperties,
    /// "name" with a stored id becomes "(id)name"
    PropertiesToNames,
}

impl From<Direction> for RenameDirection {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::IdsToProperties => RenameDirection::IdsToProperties,
            Direction::PropertiesToNames => RenameDirection::PropertiesToNames,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::CclDump {
            input,
            id,
            object_type,
            json,
        } => {
            cmd_ccl_dump(&input, id, object_type, json)?;
        }
        Commands::BoneDecode { names } => {
            cmd_bone_decode(&names);
        }
        Commands::BoneEncode { name, id } => {
            println!("{}", join_bone_name(&name, id));
        }
        Commands::BoneRename {
            input,
            output,
            direction,
            dry_run,
        } => {
            cmd_bone_rename(&input, output.as_deref(), direction.into(), dry_run)?;
        }
        Commands::MeshId { names } => {
            cmd_mesh_id(&names);
        }
    }

    Ok(())
}

fn cmd_ccl_dump(
    input: &Path,
    id: Option<u32>,
    object_type: Option<ObjectType>,
    json: bool,
) -> Result<()> {
    let start = Instant::now();
    let data = fs::read(input).context("Failed to read color variant file")?;

    if !Ccl::is_ccl(&data) {
        anyhow::bail!("Input file is not a NIFL file");
    }

    let table = Ccl::parse(&data).context("Failed to parse color variant file")?;
    tracing::info!(count = table.len(), elapsed = ?start.elapsed(), "loaded color sets");

    let sets: Vec<&ColorSet> = match id {
        Some(id) => vec![table
            .get(id)
            .with_context(|| format!("No color set with id {}", id))?],
        None => table.ids_sorted().into_iter().filter_map(|id| table.get(id)).collect(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&sets)?);
        return Ok(());
    }

    for set in sets {
        match object_type {
            Some(object_type) => match set.colors_for(object_type) {
                Some([(slot1, color1), (slot2, color2)]) => {
                    println!("{:>6}  {}: {}  {}: {}", set.id, slot1, color1, slot2, color2);
                }
                None => {
                    println!("{:>6}  ({} has no variant colors)", set.id, object_type.label());
                }
            },
            None => {
                println!(
                    "{:>6}  outer {} {}  base {} {}  inner {} {}",
                    set.id,
                    Color::from_packed(set.outerwear1),
                    Color::from_packed(set.outerwear2),
                    Color::from_packed(set.basewear1),
                    Color::from_packed(set.basewear2),
                    Color::from_packed(set.innerwear1),
                    Color::from_packed(set.innerwear2),
                );
            }
        }
    }

    println!("\nTotal: {} color sets", table.len());

    Ok(())
}

fn cmd_bone_decode(names: &[String]) {
    for name in names {
        match split_bone_name(name) {
            Some((bare, id)) => println!("{}\t{}\t{}", name, bare, id),
            None => println!("{}\t{}\t-", name, name),
        }
    }
}

fn cmd_bone_rename(
    input: &Path,
    output: Option<&Path>,
    direction: RenameDirection,
    dry_run: bool,
) -> Result<()> {
    let text = fs::read_to_string(input).context("Failed to read skeleton file")?;
    let mut skeleton: Vec<Bone> =
        serde_json::from_str(&text).context("Failed to parse skeleton file")?;

    let renamer = BoneIdentityRenamer::new(direction);

    if dry_run {
        let plan = renamer.plan(&skeleton)?;
        for rename in plan.iter() {
            let before = &skeleton[rename.index];
            println!("{} -> {}", before.name, rename.name);
        }
        println!("\n{} bones would be renamed", plan.len());
        return Ok(());
    }

    let count = renamer.rename_batch(&mut skeleton)?;
    let json = serde_json::to_string_pretty(&skeleton)?;

    match output {
        Some(path) => {
            fs::write(path, json).context("Failed to write output file")?;
            println!("Renamed {} bones", count);
        }
        None => println!("{}", json),
    }

    Ok(())
}

fn cmd_mesh_id(names: &[String]) {
    for name in names {
        match mesh_part::get_mesh_id(name) {
            Some(id) => println!("{}\t{}\t{}", name, id.value(), id),
            None => println!("{}\t-", name),
        }
    }
}
