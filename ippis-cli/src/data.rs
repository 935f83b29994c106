//! Building a table from command-line arguments.

use ippis_lib::TableConfig;
use ippis_lib::model::Record;
use ippis_lib::screens::Screen;
use ippis_lib::source::{JsonSource, MemoryStore, RowSource};
use ippis_lib::table::TableEngine;
use log::{debug, info};

use crate::cli::TableArgs;
use crate::error::CliError;
use crate::paths;

/// A screen's engine and the store backing it.
pub struct LoadedTable {
    pub screen: Screen,
    pub store: MemoryStore<Record>,
    pub engine: TableEngine<Record>,
}

pub fn parse_screen(name: &str) -> Result<Screen, CliError> {
    Screen::from_name(name).ok_or_else(|| CliError::UnknownScreen {
        name: name.to_string(),
        known: Screen::all()
            .iter()
            .map(|s| s.name())
            .collect::<Vec<_>>()
            .join(", "),
    })
}

/// Uses `--config` if given, else the default config file if it exists.
fn load_config(args: &TableArgs) -> Result<TableConfig, CliError> {
    if let Some(path) = &args.config {
        return Ok(TableConfig::load(path)?);
    }
    match paths::default_table_config() {
        Some(path) if path.exists() => Ok(TableConfig::load(&path)?),
        _ => {
            debug!("No table config found, using defaults");
            Ok(TableConfig::default())
        }
    }
}

pub fn load(args: &TableArgs) -> Result<LoadedTable, CliError> {
    let screen = parse_screen(&args.screen)?;
    let config = load_config(args)?;
    let source = JsonSource::load(&args.data)?;

    let store = MemoryStore::with_rows(source.into_records());
    let engine = TableEngine::builder(store.list())
        .columns(screen.columns())
        .filters(screen.filters())
        .config(config)
        .build()?;
    info!(
        "Opened {} screen with {} rows",
        screen.name(),
        engine.total_count()
    );

    Ok(LoadedTable {
        screen,
        store,
        engine,
    })
}

/// Splits `ID=VALUE`. The value may be empty, which clears the filter.
pub fn parse_filter(arg: &str) -> Result<(&str, &str), CliError> {
    match arg.split_once('=') {
        Some((id, value)) if !id.trim().is_empty() => Ok((id.trim(), value.trim())),
        _ => Err(CliError::InvalidFilter(arg.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_filter() {
        assert_eq!(parse_filter("category=Computers").unwrap(), ("category", "Computers"));
        assert_eq!(parse_filter("status = In Maintenance").unwrap(), ("status", "In Maintenance"));
        assert_eq!(parse_filter("status=").unwrap(), ("status", ""));
        assert!(matches!(parse_filter("status"), Err(CliError::InvalidFilter(_))));
        assert!(matches!(parse_filter("=x"), Err(CliError::InvalidFilter(_))));
    }

    fn bundled(file: &str, screen: &str) -> TableArgs {
        TableArgs {
            data: std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
                .join("data")
                .join(file),
            screen: screen.to_string(),
            config: Some(
                std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
                    .join("data")
                    .join("table.json"),
            ),
            max_width: 32,
        }
    }

    #[test]
    fn test_bundled_assets() {
        let table = load(&bundled("assets.json", "assets")).unwrap();
        assert_eq!(table.engine.total_count(), 10);
        assert_eq!(table.engine.items_per_page(), 10);

        table.engine.set_filter("category", "Computers");
        assert_eq!(table.engine.filtered_count(), 4);

        table.engine.toggle_sort("value");
        let view = table.engine.view();
        let first = &view.rows()[0];
        assert_eq!(first.record_id().to_string(), "AST-001");
    }

    #[test]
    fn test_bundled_files_load() {
        for (file, screen) in [("terminations.json", "terminations"), ("deposits.json", "deposits")] {
            let table = load(&bundled(file, screen)).unwrap();
            assert!(table.engine.total_count() > 0, "{} is empty", file);
            assert_eq!(table.store.len(), table.engine.total_count());
        }
    }

    #[test]
    fn test_parse_screen() {
        assert_eq!(parse_screen("Terminations").unwrap(), Screen::Terminations);
        let err = parse_screen("payroll").unwrap_err();
        assert!(err.to_string().contains("assets, terminations, deposits, registrations"));
    }
}
