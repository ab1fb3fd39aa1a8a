// rub-common: Rubrion common library
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Project command implementation for rub.
//!
//! ```text
//! project rub-common
//!   root         /work/rub-common
//!   module :api  /work/rub-common/rub-api
//!   repository   https://plugins.gradle.org/m2/
//!   dependency   api      :api                            implementation
//!   dependency   jetanno  org.jetbrains:annotations:26.0.2 compile-only
//! ```

use crate::cli::run::ProjectArgs;
use crate::config::Config;
use crate::error::Result;
use crate::project::ProjectLayout;

/// Main handler for project command.
///
/// # Errors
///
/// Returns an error if the project cannot be resolved, or with `--verify`
/// if a module directory is missing.
pub fn run_project_command(args: &ProjectArgs, config: &Config) -> Result<()> {
    let layout = ProjectLayout::resolve(&config.project, config.paths.prefix()?)?;
    if args.verify {
        layout.verify()?;
    }

    for line in format_layout(&layout, args.published) {
        println!("{line}");
    }
    Ok(())
}

/// Renders a resolved layout, optionally limited to published dependencies.
#[must_use]
pub fn format_layout(layout: &ProjectLayout, published_only: bool) -> Vec<String> {
    let mut lines = vec![
        format!("project {}", layout.name()),
        format!("  root         {}", layout.root().display()),
    ];

    for (id, dir) in layout.modules() {
        lines.push(format!("  module :{id:<6} {}", dir.display()));
    }
    for repository in layout.repositories() {
        lines.push(format!("  repository   {repository}"));
    }

    let dependencies: Vec<_> = if published_only {
        layout.published_dependencies().collect()
    } else {
        layout.dependencies().iter().collect()
    };
    for dependency in dependencies {
        lines.push(format!(
            "  dependency   {:<8} {} ({})",
            dependency.name, dependency.target, dependency.scope
        ));
    }

    lines
}
