// rub-common: Rubrion common library
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config (layered) --> Logging --> Command Dispatch
//!   Options | Configs | Project | List | Run | Setting | Convert
//! ```

use std::process::ExitCode;
use std::sync::Arc;

use rub_common::api::api::ApiRegistry;
use rub_common::api::config::setting::SettingProvider;
use rub_common::api::event::EventBus;
use rub_common::cli::global::GlobalOptions;
use rub_common::cli::{self, Command};
use rub_common::cmd::config::{run_configs_command, run_options_command};
use rub_common::cmd::list::run_list_command;
use rub_common::cmd::project::run_project_command;
use rub_common::cmd::run::run_tasks_command;
use rub_common::cmd::setting::{run_convert_command, run_setting_command};
use rub_common::config::Config;
use rub_common::config::loader::{CONFIG_FILE, ConfigLoader, ENV_PREFIX};
use rub_common::logging::{LogConfig, init_logging};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    if matches!(cli.command, Some(Command::Version)) {
        handle_version_command();
        return ExitCode::SUCCESS;
    }

    let config = match load_config(&cli.global) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let _log_guard = match init_logging(&LogConfig::from_global(&config.global)) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let registry = ApiRegistry::new();
    registry.register(Arc::new(EventBus::new()));
    registry.register(SettingProvider::global());

    dispatch_command(&cli, &config, &registry).await
}

async fn dispatch_command(cli: &cli::Cli, config: &Config, registry: &ApiRegistry) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Options) => {
            run_options_command(config);
            Ok(())
        }
        Some(Command::Configs) => {
            let loader = build_config_loader(&cli.global);
            run_configs_command(&loader.format_loaded_files());
            Ok(())
        }
        Some(Command::Project(args)) => run_project_command(args, config),
        Some(Command::List(args)) => run_list_command(args, config),
        Some(Command::Run(args)) => {
            let events = registry
                .get::<EventBus>()
                .unwrap_or_else(|| Arc::new(EventBus::new()));
            run_tasks_command(args, config, events).await
        }
        Some(Command::Setting(args)) => {
            let provider = registry
                .get::<SettingProvider>()
                .unwrap_or_else(SettingProvider::global);
            run_setting_command(args, &provider)
        }
        Some(Command::Convert(args)) => run_convert_command(args),
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn build_config_loader(global: &GlobalOptions) -> ConfigLoader {
    let mut loader = ConfigLoader::new().add_toml_file_optional(CONFIG_FILE);
    for path in &global.configs {
        loader = loader.add_toml_file(path);
    }
    loader.with_env_prefix(ENV_PREFIX)
}

fn load_config(global: &GlobalOptions) -> rub_common::error::Result<Config> {
    let overrides = global.to_config_overrides();
    build_config_loader(global)
        .set_all(overrides.iter().map(String::as_str))?
        .build()
}
