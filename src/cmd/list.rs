// rub-common: Rubrion common library
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! List command implementation for rub.

use crate::cli::run::ListArgs;
use crate::config::Config;
use crate::error::Result;
use crate::task::registry::TaskRegistry;

/// Main handler for list command.
///
/// # Errors
///
/// Returns an error if task resolution fails.
pub fn run_list_command(args: &ListArgs, config: &Config) -> Result<()> {
    let lines = list_tasks(args, config)?;

    if lines.is_empty() {
        println!("No tasks found");
    } else {
        for line in &lines {
            println!("{line}");
        }
    }
    Ok(())
}

/// One line per selected task; with `--verbose` also its kind and paths.
///
/// # Errors
///
/// Returns an error if a pattern is not a valid glob.
pub fn list_tasks(args: &ListArgs, config: &Config) -> Result<Vec<String>> {
    let registry = TaskRegistry::from_config(config);
    let names = registry.resolve(&args.patterns)?;

    Ok(names
        .into_iter()
        .filter_map(|name| {
            let (name, spec) = config.task_spec(&name)?;
            Some(if args.verbose {
                let state = if spec.enabled { "" } else { " (disabled)" };
                format!("{name} [{}] {} -> {}{state}", spec.kind, spec.from, spec.into)
            } else {
                name.to_string()
            })
        })
        .collect())
}
