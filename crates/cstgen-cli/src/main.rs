//! cstgen CLI - compile declarative model recipes into CST VBA macros.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

mod recipe;

use recipe::Recipe;

#[derive(Parser)]
#[command(name = "cstgen")]
#[command(about = "Compile declarative model recipes into CST VBA macros", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a recipe into a VBA macro
    Compile {
        /// Input recipe (.toml or .json)
        recipe: PathBuf,
        /// Output macro file
        output: PathBuf,
    },
    /// Write a starter recipe to build on
    Template {
        /// Output recipe file (.toml or .json)
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Compile { recipe, output } => compile(&recipe, &output),
        Commands::Template { output } => template(&output),
    }
}

fn compile(recipe_path: &Path, output: &Path) -> Result<()> {
    let recipe = read_recipe(recipe_path)?;
    let mut writer = cstgen::VbaWriter::create(output)
        .with_context(|| format!("cannot create {}", output.display()))?;
    recipe.compile(&mut writer)?;
    writer.finish()?;
    println!(
        "Compiled {} to {}",
        recipe_path.display(),
        output.display()
    );
    Ok(())
}

fn read_recipe(path: &Path) -> Result<Recipe> {
    let text =
        fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))?;
    match extension(path).as_str() {
        "toml" => toml::from_str(&text).context("invalid TOML recipe"),
        "json" => serde_json::from_str(&text).context("invalid JSON recipe"),
        other => bail!("unknown recipe format: {other:?} (expected .toml or .json)"),
    }
}

fn template(output: &Path) -> Result<()> {
    let recipe = Recipe::starter();
    let text = match extension(output).as_str() {
        "toml" => toml::to_string_pretty(&recipe)?,
        "json" => serde_json::to_string_pretty(&recipe)?,
        other => bail!("unknown recipe format: {other:?} (expected .toml or .json)"),
    };
    fs::write(output, text).with_context(|| format!("cannot write {}", output.display()))?;
    println!("Wrote starter recipe to {}", output.display());
    Ok(())
}

fn extension(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase()
}
