use crate::errors::AppResult;
use crate::store::sqlite::{LogRow, SqliteBackend};
use ansi_term::Colour;

const MAX_OP_WIDTH: usize = 40;

fn color_for_operation(op: &str) -> Colour {
    match op {
        "import" | "sync" => Colour::Green,
        "add" | "punch" => Colour::Cyan,
        "del" | "clear" => Colour::Red,
        "policy" => Colour::Yellow,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

fn op_target(row: &LogRow) -> String {
    let full = if row.target.is_empty() {
        row.operation.clone()
    } else {
        format!("{} ({})", row.operation, row.target)
    };

    if full.chars().count() > MAX_OP_WIDTH {
        let mut s: String = full.chars().take(MAX_OP_WIDTH - 3).collect();
        s.push_str("...");
        s
    } else {
        full
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(backend: &SqliteBackend) -> AppResult<()> {
        let entries = backend.read_log()?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);
        let op_w = entries
            .iter()
            .map(|e| op_target(e).chars().count())
            .max()
            .unwrap_or(10);

        println!("📜 Internal log:\n");

        for e in &entries {
            let label = op_target(e);
            let padding = " ".repeat(op_w.saturating_sub(label.chars().count()));

            // only the operation word is coloured
            let colored = match label.split_once(' ') {
                Some((op, rest)) => format!("{} {}", color_for_operation(&e.operation).paint(op), rest),
                None => color_for_operation(&e.operation).paint(label.as_str()).to_string(),
            };

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                e.id,
                e.date,
                colored,
                padding,
                e.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
