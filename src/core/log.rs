use crate::db::kv::SqliteKv;
use crate::errors::AppResult;
use ansi_term::Colour;
use regex::Regex;
use std::sync::OnceLock;

fn strip_ansi(s: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("static regex"));
    re.replace_all(s, "").into_owned()
}

/// ANSI colour for each audited operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "checkin" => Colour::Green,
        "del" => Colour::Red,
        "gate" => Colour::Yellow,
        "export" => Colour::Blue,
        "login_failed" => Colour::RGB(255, 153, 51),
        "migration_applied" | "init" => Colour::Purple,
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(kv: &SqliteKv) -> AppResult<()> {
        let mut stmt = kv.conn().prepare_cached(
            "SELECT id, date, operation, target, message FROM log ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            let id: i64 = row.get(0)?;
            let raw_date: String = row.get(1)?;
            let operation: String = row.get(2)?;
            let target: Option<String> = row.get(3)?;
            let message: String = row.get(4)?;

            let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or(raw_date);

            Ok((id, date, operation, target.unwrap_or_default(), message))
        })?;

        let mut entries = Vec::new();
        for r in rows {
            entries.push(r?);
        }

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let id_w = entries
            .iter()
            .map(|(id, ..)| id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries
            .iter()
            .map(|(_, date, ..)| date.len())
            .max()
            .unwrap_or(10);

        println!("📜 Internal log:\n");

        for (id, date, operation, target, message) in entries {
            let color = color_for_operation(&operation);

            let mut op_target = color.paint(operation.as_str()).to_string();
            if !target.is_empty() {
                op_target.push_str(&format!(" ({})", target));
            }

            // keep the column at 40 visible characters at most
            let visible = strip_ansi(&op_target);
            let op_target = if visible.chars().count() > 40 {
                let truncated: String = visible.chars().take(37).collect();
                // only the operation word keeps its colour
                match truncated.split_once(' ') {
                    Some((op_word, rest)) => format!("{} {}...", color.paint(op_word), rest),
                    None => format!("{}...", color.paint(truncated.as_str())),
                }
            } else {
                op_target
            };

            let visible_len = strip_ansi(&op_target).chars().count();
            let padding = " ".repeat(40usize.saturating_sub(visible_len));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                id,
                date,
                op_target,
                padding,
                message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
