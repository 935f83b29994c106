//! Interactive table session over stdin.

use std::io::{self, BufRead, Write};
use std::sync::{Arc, Mutex, PoisonError};

use ippis_lib::model::{Record, RecordId, Row};
use ippis_lib::table::Callbacks;
use log::debug;

use crate::cli::BrowseArgs;
use crate::data::{self, LoadedTable};
use crate::error::CliError;

const HELP: &str = "\
Commands:
  search [TEXT]        search all fields (no text clears the search)
  filter ID [VALUE]    filter on a field (no value clears the filter)
  clear                clear search and filters
  sort KEY             click a column header
  page N | next | prev move between pages
  per-page N           rows per page
  add                  open the add form
  edit ID              open the edit form for a record
  view ID              show all fields of a record
  delete ID            delete a record
  show                 print the current page again
  help                 this list
  quit                 leave";

pub fn run(args: &BrowseArgs) -> Result<(), CliError> {
    let table = data::load(&args.table)?;
    let session = Session::new(table, args.table.max_width);
    let stdin = io::stdin();
    session.run(stdin.lock(), &mut io::stdout())?;
    Ok(())
}

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Search(String),
    Filter { id: String, value: String },
    Clear,
    Sort(String),
    Page(usize),
    Next,
    Prev,
    PerPage(usize),
    Add,
    Edit(String),
    View(String),
    Delete(String),
    Show,
    Help,
    Quit,
}

impl Command {
    /// Parses a line. Blank lines give `Ok(None)`.
    fn parse(line: &str) -> Result<Option<Command>, String> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_lowercase().as_str() {
            "search" => Command::Search(rest.to_string()),
            "filter" => {
                let (id, value) = match rest.split_once(char::is_whitespace) {
                    Some((id, value)) => (id, value.trim()),
                    None => (rest, ""),
                };
                if id.is_empty() {
                    return Err("usage: filter ID [VALUE]".to_string());
                }
                Command::Filter {
                    id: id.to_string(),
                    value: value.to_string(),
                }
            }
            "clear" => Command::Clear,
            "sort" => Command::Sort(required(rest, "sort KEY")?),
            "page" => Command::Page(number(rest, "page N")?),
            "next" => Command::Next,
            "prev" | "previous" => Command::Prev,
            "per-page" => Command::PerPage(number(rest, "per-page N")?),
            "add" => Command::Add,
            "edit" => Command::Edit(required(rest, "edit ID")?),
            "view" => Command::View(required(rest, "view ID")?),
            "delete" => Command::Delete(required(rest, "delete ID")?),
            "show" => Command::Show,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => {
                return Err(format!(
                    "Unknown command: {}. Type help for a list of commands.",
                    other
                ));
            }
        };
        Ok(Some(command))
    }
}

fn required(arg: &str, usage: &str) -> Result<String, String> {
    if arg.is_empty() {
        Err(format!("usage: {}", usage))
    } else {
        Ok(arg.to_string())
    }
}

fn number(arg: &str, usage: &str) -> Result<usize, String> {
    arg.parse().map_err(|_| format!("usage: {}", usage))
}

/// Messages written by the action handlers, printed after each command.
type Outbox = Arc<Mutex<Vec<String>>>;

fn post(outbox: &Outbox, message: String) {
    outbox.lock().unwrap_or_else(PoisonError::into_inner).push(message);
}

fn describe(record: &Record) -> String {
    let mut lines = vec![format!("id: {}", record.id())];
    for name in record.field_names() {
        if let Some(value) = record.get(name) {
            lines.push(format!("{}: {}", name, value));
        }
    }
    lines.join("\n")
}

struct Session {
    table: LoadedTable,
    max_width: usize,
    outbox: Outbox,
}

impl Session {
    fn new(table: LoadedTable, max_width: usize) -> Self {
        let outbox: Outbox = Arc::default();
        let add_label = table.screen.add_label();

        let actions = {
            let (add_out, edit_out, view_out, delete_out) =
                (outbox.clone(), outbox.clone(), outbox.clone(), outbox.clone());
            let (edit_store, view_store, delete_store) =
                (table.store.clone(), table.store.clone(), table.store.clone());
            let engine = table.engine.clone();

            Callbacks::new()
                .handle_add(move || post(&add_out, format!("Opening the {} form", add_label)))
                .handle_edit(move |id: &RecordId| {
                    let message = match edit_store.get(id) {
                        Some(_) => format!("Opening the edit form for {}", id),
                        None => format!("No record {}", id),
                    };
                    post(&edit_out, message);
                })
                .handle_view(move |id: &RecordId| {
                    let message = match view_store.get(id) {
                        Some(record) => describe(&record),
                        None => format!("No record {}", id),
                    };
                    post(&view_out, message);
                })
                .handle_delete(move |id: &RecordId| {
                    let message = match delete_store.remove(id) {
                        Some(_) => {
                            engine.reload(&delete_store);
                            format!("Deleted {}; search and filters were reset", id)
                        }
                        None => format!("No record {}", id),
                    };
                    post(&delete_out, message);
                })
        };
        table.engine.set_actions(actions);

        Self {
            table,
            max_width,
            outbox,
        }
    }

    fn render(&self) -> String {
        super::render(&self.table, self.max_width)
    }

    fn drain(&self) -> Vec<String> {
        std::mem::take(&mut *self.outbox.lock().unwrap_or_else(PoisonError::into_inner))
    }

    /// Applies a command. Returns what to print and whether to go on.
    fn execute(&self, command: Command) -> (Vec<String>, bool) {
        let engine = &self.table.engine;
        let mut out = Vec::new();
        let mut redraw = true;

        match command {
            Command::Search(term) => engine.set_search_term(term),
            Command::Filter { id, value } => {
                if engine.filter_specs().iter().any(|f| f.id == id) {
                    engine.set_filter(&id, &value);
                } else {
                    let known: Vec<String> =
                        engine.filter_specs().into_iter().map(|f| f.id).collect();
                    out.push(format!("No filter {} (filters: {})", id, known.join(", ")));
                    redraw = false;
                }
            }
            Command::Clear => engine.clear_all_filters(),
            Command::Sort(key) => {
                if engine.columns().iter().any(|c| c.key == key && c.sortable) {
                    engine.toggle_sort(&key);
                } else {
                    out.push(format!("Column {} is not sortable", key));
                    redraw = false;
                }
            }
            Command::Page(page) => {
                engine.set_page(page);
            }
            Command::Next => {
                engine.next_page();
            }
            Command::Prev => {
                engine.previous_page();
            }
            Command::PerPage(size) => {
                if !engine.set_items_per_page(size) {
                    let options: Vec<String> = engine
                        .page_size_options()
                        .iter()
                        .map(|s| s.to_string())
                        .collect();
                    out.push(format!(
                        "Page size {} not offered; choose from {}",
                        size,
                        options.join(", ")
                    ));
                    redraw = false;
                }
            }
            Command::Add => {
                engine.add();
                redraw = false;
            }
            Command::Edit(id) => {
                engine.edit(RecordId::parse(&id));
                redraw = false;
            }
            Command::View(id) => {
                engine.view_row(RecordId::parse(&id));
                redraw = false;
            }
            Command::Delete(id) => {
                engine.delete(RecordId::parse(&id));
            }
            Command::Show => {}
            Command::Help => {
                out.push(HELP.to_string());
                redraw = false;
            }
            Command::Quit => return (out, false),
        }

        out.extend(self.drain());
        if redraw {
            out.push(self.render());
        }
        (out, true)
    }

    fn run<R: BufRead, W: Write>(&self, input: R, output: &mut W) -> io::Result<()> {
        writeln!(output, "{}", self.render())?;
        writeln!(output, "Type help for a list of commands.")?;

        let mut lines = input.lines();
        loop {
            write!(output, "> ")?;
            output.flush()?;
            let Some(line) = lines.next() else {
                writeln!(output)?;
                break;
            };
            let line = line?;

            let command = match Command::parse(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(message) => {
                    writeln!(output, "{}", message)?;
                    continue;
                }
            };
            debug!("Browse command: {:?}", command);

            let (messages, go_on) = self.execute(command);
            for message in messages {
                writeln!(output, "{}", message)?;
            }
            if !go_on {
                break;
            }
        }
        Ok(())
    }
}
