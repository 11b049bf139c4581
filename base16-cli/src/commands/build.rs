//! `base16-builder [DIR]` — acquire schemes, then render every template.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use base16_build::pipeline;
use base16_core::config;
use base16_fetch::{Acquirer, Acquisition, Progress};
use base16_renderer::TemplateSet;

use crate::settings::Settings;

/// Arguments for `base16-builder`.
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Directory already holding scheme files. When omitted, schemes are
    /// fetched into a new temporary directory first.
    pub dir: Option<PathBuf>,
}

impl BuildArgs {
    pub fn run(self, settings: &Settings) -> Result<()> {
        let root = Path::new(".");

        // Templates first: a bad template must fail before any network work.
        let templates = config::load_templates_at(root).context("failed to load templates")?;
        let templates = TemplateSet::compile(&config::templates_dir_at(root), templates)
            .context("failed to compile templates")?;
        tracing::debug!("compiled {} templates", templates.len());

        let acquisition = match self.dir {
            Some(dir) => Acquisition::Directory(dir),
            None => Acquisition::Fetch(settings.strategy.clone()),
        };
        let workdir = Acquirer::git()
            .with_workers(settings.workers)
            .acquire(&acquisition, print_progress)
            .context("failed to acquire schemes")?;

        let summary = pipeline::run(&workdir, settings.strategy.layout(), &templates)
            .with_context(|| format!("build failed in {}", workdir.display()))?;

        println!(
            "Built {} schemes ({} files)",
            summary.schemes,
            summary.files.len()
        );
        Ok(())
    }
}

fn print_progress(progress: Progress<'_>) {
    match progress {
        Progress::WorkdirCreated(path) => println!("{}", path.display()),
        Progress::Fetched { done, total, name } => println!("({done}/{total}) {name}"),
    }
}
