use log::warn;

use crate::cli::ShowArgs;
use crate::data::{self, LoadedTable};
use crate::error::CliError;

pub fn run(args: &ShowArgs) -> Result<(), CliError> {
    let table = data::load(&args.table)?;
    apply(&table, args)?;
    println!("{}", super::render(&table, args.table.max_width));
    Ok(())
}

/// Applies the view options in the order a user would click them.
fn apply(table: &LoadedTable, args: &ShowArgs) -> Result<(), CliError> {
    let engine = &table.engine;

    if let Some(term) = &args.search {
        engine.set_search_term(term.as_str());
    }
    for filter in &args.filters {
        let (id, value) = data::parse_filter(filter)?;
        if !engine.filter_specs().iter().any(|f| f.id == id) {
            warn!("{} screen has no filter {:?}", table.screen, id);
        }
        engine.set_filter(id, value);
    }
    for key in &args.sorts {
        if !engine.columns().iter().any(|c| c.key == *key && c.sortable) {
            warn!("Column {:?} is not sortable", key);
        }
        engine.toggle_sort(key);
    }
    if let Some(size) = args.per_page
        && !engine.set_items_per_page(size)
    {
        warn!(
            "Page size {} not offered (choose from {:?})",
            size,
            engine.page_size_options()
        );
    }
    if let Some(page) = args.page {
        let shown = engine.set_page(page);
        if shown != page {
            warn!("Page {} out of range, showing page {}", page, shown);
        }
    }
    Ok(())
}
