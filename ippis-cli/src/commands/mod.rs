pub mod browse;
pub mod screens;
pub mod show;

use ippis_lib::render::TextTable;

use crate::data::LoadedTable;

/// Title line plus the rendered current page.
pub(crate) fn render(table: &LoadedTable, max_width: usize) -> String {
    let text = TextTable::from_engine(&table.engine)
        .max_width(max_width)
        .render();
    format!("{}\n\n{}", table.screen.title(), text)
}
