// rub-common: Rubrion common library
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Filesystem utilities.
//!
//! ```text
//! copy:  copy_dir_contents_async()   recursive directory copy
//!        copy_dir_filtered_async()   same, keeping only accepted
//!                                    paths (relative to src)
//! ```

pub mod copy;

#[cfg(test)]
mod tests;
