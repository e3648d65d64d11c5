use crate::db::JobStore;
use crate::db::log::load_log;
use crate::errors::AppResult;
use ansi_term::Colour;
use unicode_width::UnicodeWidthStr;

const MAX_OP_WIDTH: usize = 60;

/// ANSI colour per operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "edit" => Colour::Yellow,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(store: &JobStore) -> AppResult<()> {
        let entries = load_log(store.conn())?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let op_target = |op: &str, target: &str| {
            if target.is_empty() {
                op.to_string()
            } else {
                format!("{op} ({target})")
            }
        };

        let op_w = entries
            .iter()
            .map(|e| op_target(&e.operation, &e.target).width())
            .max()
            .unwrap_or(10)
            .min(MAX_OP_WIDTH);
        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);

        println!("📜 Internal log:\n");

        for e in &entries {
            let mut visible = op_target(&e.operation, &e.target);
            if visible.width() > MAX_OP_WIDTH {
                visible = visible.chars().take(MAX_OP_WIDTH - 3).collect::<String>() + "...";
            }
            let padding = " ".repeat(op_w.saturating_sub(visible.width()));

            // only the operation word is coloured
            let colored = match visible.split_once(' ') {
                Some((op, rest)) => {
                    format!("{} {}", color_for_operation(&e.operation).paint(op), rest)
                }
                None => color_for_operation(&e.operation)
                    .paint(visible.as_str())
                    .to_string(),
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
