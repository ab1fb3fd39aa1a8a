// rub-common: Rubrion common library
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Task registry for resolving task names and patterns.
//!
//! ```text
//! input ["exportresources", "export*"]
//!   match_pattern: exact name (ASCII case ignored) --> [exportResources]
//!                  glob "export*"                  --> [exportDocs, exportResources]
//!   dedupe + preserve order
//! ```

use std::collections::BTreeSet;

use crate::error::Result;
use anyhow::Context;
use wax::{Glob, Program};

use crate::config::Config;

/// Registry for looking up tasks by name or pattern.
#[derive(Debug, Default)]
pub struct TaskRegistry {
    task_names: BTreeSet<String>,
}

impl TaskRegistry {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            task_names: BTreeSet::new(),
        }
    }

    /// Registers every task declared under `[tasks]`.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let mut registry = Self::new();
        registry.register_all(config.tasks.keys().cloned());
        registry
    }

    /// Registers a task name.
    pub fn register(&mut self, name: impl Into<String>) {
        self.task_names.insert(name.into());
    }

    /// Registers multiple task names.
    pub fn register_all(&mut self, names: impl IntoIterator<Item = impl Into<String>>) {
        for name in names {
            self.task_names.insert(name.into());
        }
    }

    /// Returns all registered task names.
    #[must_use]
    pub const fn all_tasks(&self) -> &BTreeSet<String> {
        &self.task_names
    }

    /// Matches a name or glob pattern against registered task names.
    ///
    /// A registered name equal to `pattern` (ignoring ASCII case) wins over
    /// glob matching.
    ///
    /// # Examples
    ///
    /// - `"*"` matches all tasks
    /// - `"export*"` matches "exportResources", "exportDocs", etc.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern is not a valid glob.
    pub fn match_pattern(&self, pattern: &str) -> Result<Vec<String>> {
        if let Some(name) = self
            .task_names
            .get(pattern)
            .or_else(|| self.task_names.iter().find(|n| n.eq_ignore_ascii_case(pattern)))
        {
            return Ok(vec![name.clone()]);
        }

        let glob =
            Glob::new(pattern).with_context(|| format!("Invalid glob pattern: {pattern}"))?;

        let matched: Vec<String> = self
            .task_names
            .iter()
            .filter(|name| glob.is_match(name.as_str()))
            .cloned()
            .collect();

        Ok(matched)
    }

    /// Resolves a list of task specifications to concrete task names.
    ///
    /// An empty list selects every registered task. Results are deduplicated
    /// and keep the order of `specs`.
    ///
    /// # Errors
    ///
    /// Returns an error if any of the specifications contain an invalid glob pattern.
    pub fn resolve<S: AsRef<str>>(&self, specs: &[S]) -> Result<Vec<String>> {
        if specs.is_empty() {
            return Ok(self.task_names.iter().cloned().collect());
        }

        let mut result = Vec::new();
        let mut seen = BTreeSet::new();

        for pattern in specs {
            let pattern = pattern.as_ref();
            let matches = self.match_pattern(pattern)?;

            if matches.is_empty() {
                tracing::warn!(pattern = %pattern, "Pattern matched no tasks");
            }

            for name in matches {
                if seen.insert(name.clone()) {
                    result.push(name);
                }
            }
        }

        Ok(result)
    }
}
