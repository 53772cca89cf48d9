//! Line-driven driver for the task list screen.
//!
//! # Responsibility
//! - Exercise the core screen from a terminal without a mobile host.
//! - Print rows, notices and confirmation prompts as plain text.
//!
//! Rows are addressed by their 1-based position in the printed list.

use log::info;
use std::io::{self, BufRead, Write};
use tasklist_core::{
    init_logging, AppConfig, ConfirmChoice, HomeScreen, RecordingPlatform, RowAction, TaskId,
};

type Screen = HomeScreen<RecordingPlatform>;

const HELP: &str = "commands: add <title> | toggle <n> | edit <n> | draft <n> <text> | \
submit <n> | cancel <n> | rm <n> | yes | no | ls | json | help | quit";

fn main() {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("config error: {err}");
            std::process::exit(2);
        }
    };
    if let Some(log_dir) = config.log_dir.as_deref() {
        if let Err(err) = init_logging(&config.log_level, log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }
    info!("event=cli_start module=cli status=ok version={}", tasklist_core::core_version());

    let mut screen = HomeScreen::new(RecordingPlatform::new(), config.copy());
    if let Err(err) = run(&mut screen, io::stdin().lock(), io::stdout().lock()) {
        eprintln!("i/o error: {err}");
        std::process::exit(1);
    }
}

fn run(screen: &mut Screen, input: impl BufRead, mut out: impl Write) -> io::Result<()> {
    writeln!(out, "{HELP}")?;
    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "quit" || line == "exit" {
            break;
        }
        match execute(screen, line) {
            Ok(Output::Rows) => {}
            Ok(Output::Text(text)) => writeln!(out, "{text}")?,
            Err(message) => writeln!(out, "error: {message}")?,
        }
        flush_platform(screen, &mut out)?;
        print_rows(screen, &mut out)?;
    }
    Ok(())
}

enum Output {
    Rows,
    Text(String),
}

fn execute(screen: &mut Screen, line: &str) -> Result<Output, String> {
    let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
    match command {
        "add" => {
            screen.add_task(rest);
            Ok(Output::Rows)
        }
        "toggle" => row_command(screen, rest, RowAction::Press),
        "edit" => row_command(screen, rest, RowAction::StartEdit),
        "draft" => {
            let (position, text) = rest.split_once(' ').unwrap_or((rest, ""));
            let task_id = task_at(screen, position)?;
            screen.dispatch(task_id, RowAction::ChangeDraft(text.to_string()));
            Ok(Output::Rows)
        }
        "submit" => row_command(screen, rest, RowAction::SubmitEdit),
        "cancel" => row_command(screen, rest, RowAction::CancelEdit),
        "rm" => row_command(screen, rest, RowAction::Delete),
        "yes" => {
            screen.resolve_removal(ConfirmChoice::Confirm);
            Ok(Output::Rows)
        }
        "no" => {
            screen.resolve_removal(ConfirmChoice::Cancel);
            Ok(Output::Rows)
        }
        "ls" => Ok(Output::Rows),
        "json" => serde_json::to_string_pretty(&screen.snapshot())
            .map(Output::Text)
            .map_err(|err| format!("json export failed: {err}")),
        "help" => Ok(Output::Text(HELP.to_string())),
        other => Err(format!("unknown command `{other}`")),
    }
}

fn row_command(
    screen: &mut Screen,
    position: &str,
    action: RowAction,
) -> Result<Output, String> {
    let task_id = task_at(screen, position)?;
    if !screen.dispatch(task_id, action) {
        return Ok(Output::Text("(no change)".to_string()));
    }
    Ok(Output::Rows)
}

fn task_at(screen: &Screen, position: &str) -> Result<TaskId, String> {
    let position: usize = position
        .trim()
        .parse()
        .map_err(|_| format!("expected a row number, got `{}`", position.trim()))?;
    position
        .checked_sub(1)
        .and_then(|index| screen.snapshot().at(index).map(|task| task.id))
        .ok_or_else(|| format!("no row {position}"))
}

fn flush_platform(screen: &mut Screen, out: &mut impl Write) -> io::Result<()> {
    let recorded = screen.platform_mut().drain();
    for notice in recorded.notices {
        writeln!(out, "! {}: {}", notice.title, notice.message)?;
    }
    for dialog in recorded.confirms {
        writeln!(
            out,
            "? {}: {} [yes = {} / no = {}]",
            dialog.title, dialog.message, dialog.confirm_label, dialog.cancel_label
        )?;
    }
    Ok(())
}

fn print_rows(screen: &mut Screen, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "tasks: {}", screen.tasks_counter())?;
    for row in screen.rows() {
        let marker = if row.done { "[x]" } else { "[ ]" };
        let editing = if row.editing { " (editing)" } else { "" };
        writeln!(out, "{:>3}. {marker} {}{editing}", row.index + 1, row.title)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{run, Screen};
    use tasklist_core::{HomeScreen, RecordingPlatform, ScreenCopy, SequentialIds, TaskStore};

    fn drive(script: &str) -> String {
        let mut screen: Screen = HomeScreen::with_store(
            TaskStore::with_id_source(SequentialIds::starting_at(1)),
            RecordingPlatform::new(),
            ScreenCopy::default(),
        );
        let mut out = Vec::new();
        run(&mut screen, script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn add_toggle_and_list() {
        let output = drive("add Buy milk\ntoggle 1\n");
        assert!(output.contains("tasks: 1"));
        assert!(output.contains("1. [x] Buy milk"));
    }

    #[test]
    fn duplicate_add_prints_notice() {
        let output = drive("add Buy milk\nadd buy milk\n");
        assert!(output.contains("! Task already registered"));
    }

    #[test]
    fn remove_asks_before_deleting() {
        let output = drive("add Buy milk\nrm 1\nno\nrm 1\nyes\n");
        assert!(output.contains("? Remove item"));
        assert!(output.trim_end().ends_with("tasks: 0"));
    }

    #[test]
    fn inline_edit_flow() {
        let output = drive("add Buy milk\nedit 1\ndraft 1 Buy almond milk\nsubmit 1\n");
        assert!(output.contains("Buy milk (editing)"));
        assert!(output.contains("Buy almond milk (editing)"));
        assert!(output.trim_end().ends_with("1. [ ] Buy almond milk"));
    }

    #[test]
    fn bad_row_number_is_reported() {
        let output = drive("toggle 3\n");
        assert!(output.contains("error: no row 3"));
    }

    #[test]
    fn quit_stops_processing() {
        let output = drive("quit\nadd Buy milk\n");
        assert!(!output.contains("Buy milk"));
    }
}
