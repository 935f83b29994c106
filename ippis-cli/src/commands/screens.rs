use ippis_lib::model::Record;
use ippis_lib::screens::Screen;
use ippis_lib::table::FilterKind;

use crate::error::CliError;

pub fn run() -> Result<(), CliError> {
    print!("{}", describe_all());
    Ok(())
}

fn describe_all() -> String {
    let mut out = String::new();
    for screen in Screen::all() {
        out.push_str(&format!("{} ({})\n", screen.name(), screen.title()));

        let columns: Vec<String> = screen
            .columns::<Record>()
            .into_iter()
            .map(|c| {
                if c.sortable {
                    format!("{}*", c.key)
                } else {
                    c.key
                }
            })
            .collect();
        out.push_str(&format!("  columns: {}\n", columns.join(", ")));

        for filter in screen.filters() {
            let kind = match filter.kind {
                FilterKind::Select => "select",
                FilterKind::Date => "date",
                FilterKind::Text => "text",
            };
            let options: Vec<&str> = filter.options.iter().map(|o| o.value.as_str()).collect();
            if options.is_empty() {
                out.push_str(&format!("  filter {} ({})\n", filter.id, kind));
            } else {
                out.push_str(&format!(
                    "  filter {} ({}): {}\n",
                    filter.id,
                    kind,
                    options.join(" | ")
                ));
            }
        }
    }
    out.push_str("\n* sortable\n");
    out
}
