use clap::Args;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};
use serde::Serialize;

use shindow_core::StyledWindow;
use shindow_core::style::is_borderless;

use super::{CommandResult, Context, ProcessArgs};

#[derive(Args)]
pub struct ListArgs {
    /// Print the list as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct ProcessRow {
    pid: u32,
    name: String,
    window: Option<WindowRow>,
}

#[derive(Serialize)]
struct WindowRow {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    state: &'static str,
}

fn describe(window: &impl StyledWindow) -> Option<WindowRow> {
    let bounds = window.bounds().ok()?;
    let state = if window.is_zoomed() {
        "maximized"
    } else if is_borderless(window.style(), window.ex_style()) {
        "borderless"
    } else {
        "bordered"
    };
    Some(WindowRow {
        x: bounds.x,
        y: bounds.y,
        width: bounds.width,
        height: bounds.height,
        state,
    })
}

pub fn execute(ctx: &Context, args: &ListArgs) -> CommandResult {
    let app = ctx.app(&ProcessArgs { pid: None })?;

    let rows: Vec<ProcessRow> = app
        .processes()
        .iter()
        .map(|p| ProcessRow {
            pid: p.pid,
            name: p.name.clone(),
            window: app.window_for(p.pid).as_ref().and_then(describe),
        })
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("PID").set_alignment(CellAlignment::Right),
            Cell::new("Name"),
            Cell::new("Position"),
            Cell::new("Size"),
            Cell::new("State"),
        ]);

    for row in &rows {
        let (position, size, state) = match &row.window {
            Some(w) => (
                format!("{}, {}", w.x, w.y),
                format!("{}x{}", w.width, w.height),
                w.state,
            ),
            None => (String::new(), String::new(), "no window"),
        };
        table.add_row(vec![
            Cell::new(row.pid).set_alignment(CellAlignment::Right),
            Cell::new(&row.name),
            Cell::new(position),
            Cell::new(size),
            Cell::new(state),
        ]);
    }

    println!("{table}");
    println!("\n{} processes found", rows.len());
    Ok(())
}
