//! CLI subcommands that work against the dashboard store without the GUI.

use std::path::PathBuf;

use anyhow::{Context, Result};

use devdeck::config::Config;
use devdeck::store::Store;

fn load_store(store_override: Option<PathBuf>) -> Result<Store> {
    let store = match store_override {
        Some(path) => Store::load_from(path)?,
        None => Store::load()?,
    };
    Ok(store)
}

/// `devdeck projects` - list registered projects.
pub async fn projects_command(store_override: Option<PathBuf>) -> Result<()> {
    let store = load_store(store_override)?;

    if store.dashboard.projects.is_empty() {
        println!("No projects registered. Run `devdeck add <path>` or use the GUI.");
        return Ok(());
    }

    for project in &store.dashboard.projects {
        let root = project
            .root
            .as_ref()
            .map(|r| r.display().to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<24} {:<48} {} note(s), {} link(s), {} command(s), {} agent(s)",
            project.name,
            root,
            project.notes.len(),
            project.links.len(),
            project.commands.len(),
            project.agents.len(),
        );
    }
    Ok(())
}

/// `devdeck add <path>` - register a project folder.
pub async fn add_command(
    store_override: Option<PathBuf>,
    path: PathBuf,
    name: Option<String>,
) -> Result<()> {
    let root = path
        .canonicalize()
        .with_context(|| format!("Folder not found: {}", path.display()))?;

    let mut store = load_store(store_override)?;
    let existed = store.dashboard.project_by_root(&root).is_some();
    let id = store.register_root(root.clone());
    if let Some(name) = name {
        store.rename_project(&id, &name);
    }
    store.save()?;

    if existed {
        println!("Already registered: {}", root.display());
    } else {
        println!("Registered {}", root.display());
    }
    Ok(())
}

/// `devdeck init` - write a default config file.
pub async fn init_command(force: bool) -> Result<()> {
    match Config::init(force)? {
        Some(path) => println!("Wrote {}", path.display()),
        None => println!(
            "Config already exists at {} (use --force to overwrite)",
            Config::config_path().display()
        ),
    }
    Ok(())
}
