//! Interactive listing session: line commands in, rendered grid out.
//!
//! The session plays the host page. It owns the dataset, wires the row
//! actions, and carries out what they request (showing details, deleting a
//! record and handing the grid the new dataset).

use std::cell::RefCell;
use std::io::{BufRead, Write};
use std::rc::Rc;
use std::sync::Arc;

use anyhow::Context;
use bizgrid_core::{GridRow, Record, RowAction};
use bizgrid_grid::{DataGrid, GridCommand, LayoutPolicy, RowActions};

use crate::config::ConsoleConfig;
use crate::dataset::Dataset;
use crate::render;

pub const HELP: &str = "\
commands:
  search <text>        filter rows (any column, case-insensitive)
  clear                clear the search
  sort <key>           sort by column; repeat to flip direction
  unsort               back to input order
  toggle <key>         show/hide a column
  page <n> | next | prev
  size <n>             rows per page
  width <n>            viewport width (narrow widths render cards)
  view|edit|delete <n> row action for row <n> on this page
  columns              list columns and their visibility
  show | help | quit";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Grid(GridCommand),
    Action { action: RowAction, position: usize },
    Width(u32),
    Columns,
    Show,
    Help,
    Quit,
}

/// Parse a command line. Blank lines yield `None`.
pub fn parse_line(line: &str) -> anyhow::Result<Option<Input>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let input = match word.to_ascii_lowercase().as_str() {
        "search" => Input::Grid(GridCommand::SetSearchQuery(rest.to_string())),
        "clear" => Input::Grid(GridCommand::SetSearchQuery(String::new())),
        "sort" => Input::Grid(GridCommand::SetSort(required(rest, "sort <key>")?)),
        "unsort" => Input::Grid(GridCommand::ClearSort),
        "toggle" => Input::Grid(GridCommand::ToggleColumnVisibility(required(
            rest,
            "toggle <key>",
        )?)),
        "page" => Input::Grid(GridCommand::GoToPage(number(rest, "page <n>")?)),
        "next" => Input::Grid(GridCommand::NextPage),
        "prev" | "previous" => Input::Grid(GridCommand::PreviousPage),
        "size" => Input::Grid(GridCommand::SetPageSize(number(rest, "size <n>")?)),
        "width" => Input::Width(number(rest, "width <n>")?),
        "view" | "edit" | "delete" => {
            let action = match word.to_ascii_lowercase().as_str() {
                "view" => RowAction::View,
                "edit" => RowAction::Edit,
                _ => RowAction::Delete,
            };
            let position: usize = number(rest, "<action> <row>")?;
            anyhow::ensure!(position >= 1, "rows are numbered from 1");
            Input::Action {
                action,
                position: position - 1,
            }
        }
        "columns" => Input::Columns,
        "show" => Input::Show,
        "help" | "?" => Input::Help,
        "quit" | "exit" => Input::Quit,
        other => anyhow::bail!("unknown command: {other} (try `help`)"),
    };
    Ok(Some(input))
}

fn required(rest: &str, usage: &str) -> anyhow::Result<String> {
    anyhow::ensure!(!rest.is_empty(), "usage: {usage}");
    Ok(rest.to_string())
}

fn number<T: core::str::FromStr>(rest: &str, usage: &str) -> anyhow::Result<T> {
    rest.parse()
        .map_err(|_| anyhow::anyhow!("usage: {usage} (expected a number, got {rest:?})"))
}

/// What a row action asked the host to do.
#[derive(Debug, Clone, PartialEq)]
enum HostRequest {
    View(Record),
    Edit(Record),
    Delete(Record),
}

/// Whether the session should keep reading input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    Continue(String),
    Quit,
}

pub struct Session {
    name: String,
    grid: DataGrid<Record>,
    width: u32,
    requests: Rc<RefCell<Vec<HostRequest>>>,
}

impl Session {
    pub fn new(dataset: Dataset, config: &ConsoleConfig) -> anyhow::Result<Self> {
        let requests = Rc::new(RefCell::new(Vec::new()));
        let actions = {
            let (view, edit, delete) = (
                Rc::clone(&requests),
                Rc::clone(&requests),
                Rc::clone(&requests),
            );
            RowActions::new()
                .on_view(move |row: &Record| view.borrow_mut().push(HostRequest::View(row.clone())))
                .on_edit(move |row: &Record| edit.borrow_mut().push(HostRequest::Edit(row.clone())))
                .on_delete(move |row: &Record| {
                    delete.borrow_mut().push(HostRequest::Delete(row.clone()))
                })
        };

        let grid = DataGrid::new(dataset.records, dataset.columns)
            .with_context(|| format!("dataset {} has invalid columns", dataset.name))?
            .with_page_size(config.page_size)
            .context("invalid page size")?
            .with_layout_policy(LayoutPolicy::with_breakpoint(config.breakpoint))
            .with_actions(actions);

        Ok(Self {
            name: dataset.name,
            grid,
            width: config.viewport_width,
            requests,
        })
    }

    pub fn grid(&self) -> &DataGrid<Record> {
        &self.grid
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    /// Current grid rendered for the current width.
    pub fn render(&self) -> String {
        render::render(&self.grid.view(self.width))
    }

    pub fn handle(&mut self, input: Input) -> anyhow::Result<Flow> {
        let output = match input {
            Input::Grid(command) => {
                self.grid.dispatch(command)?;
                self.render()
            }
            Input::Action { action, position } => {
                let index = self.grid.source_index(position)?;
                self.grid.activate(action, position)?;
                self.serve_requests(index)
            }
            Input::Width(width) => {
                self.width = width;
                self.render()
            }
            Input::Columns => self.describe_columns(),
            Input::Show => self.render(),
            Input::Help => HELP.to_string(),
            Input::Quit => return Ok(Flow::Quit),
        };
        Ok(Flow::Continue(output))
    }

    /// Read commands until `quit` or end of input.
    ///
    /// Rejected commands are reported and the session carries on.
    pub fn run<I: BufRead, W: Write>(&mut self, input: I, mut out: W) -> anyhow::Result<()> {
        writeln!(out, "{} ({} rows) - type `help` for commands", self.name, self.grid.rows().len())?;
        write!(out, "{}", self.render())?;

        for line in input.lines() {
            let line = line.context("failed to read input")?;
            let result = parse_line(&line).and_then(|parsed| match parsed {
                Some(input) => self.handle(input).map(Some),
                None => Ok(None),
            });

            match result {
                Ok(Some(Flow::Quit)) => break,
                Ok(Some(Flow::Continue(output))) => write!(out, "{output}")?,
                Ok(None) => {}
                Err(e) => {
                    tracing::warn!(command = %line.trim(), error = %e, "command rejected");
                    writeln!(out, "error: {e:#}")?;
                }
            }
            out.flush()?;
        }
        Ok(())
    }

    /// Carry out what the handlers asked for; `index` locates the activated
    /// row in the dataset.
    fn serve_requests(&mut self, index: usize) -> String {
        let requests: Vec<HostRequest> = self.requests.borrow_mut().drain(..).collect();
        let mut output = String::new();
        for request in requests {
            match request {
                HostRequest::View(record) => output.push_str(&describe_record(&record)),
                HostRequest::Edit(record) => {
                    output.push_str(&format!(
                        "edit requested for {}; records are read-only in the console\n",
                        self.label(&record)
                    ));
                }
                HostRequest::Delete(record) => {
                    let label = self.label(&record);
                    self.delete(index);
                    tracing::info!(record = %label, "record deleted");
                    output.push_str(&format!("deleted {label}\n"));
                    output.push_str(&self.render());
                }
            }
        }
        output
    }

    fn delete(&mut self, index: usize) {
        let remaining: Vec<Record> = self
            .grid
            .rows()
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, r)| r.clone())
            .collect();
        self.grid.replace_rows(Arc::<[Record]>::from(remaining));
    }

    fn label(&self, record: &Record) -> String {
        self.grid
            .columns()
            .iter()
            .next()
            .map(|column| column.value(record).to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "record".to_string())
    }

    fn describe_columns(&self) -> String {
        let mut output = String::new();
        for column in self.grid.columns().iter() {
            let sort = match self.grid.sort().direction_for(column.key()) {
                Some(direction) => format!(" {}", direction.indicator()),
                None => String::new(),
            };
            output.push_str(&format!(
                "[{}] {} ({}){}{}\n",
                if column.is_visible() { "x" } else { " " },
                column.key(),
                column.header(),
                if column.is_sortable() { ", sortable" } else { "" },
                sort,
            ));
        }
        output
    }
}

fn describe_record(record: &Record) -> String {
    let mut output = String::new();
    for key in record.keys() {
        output.push_str(&format!("{key}: {}\n", record.cell(key)));
    }
    output
}
