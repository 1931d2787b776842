use crate::db::kv::SqliteKv;
use crate::db::store::RecordStore;
use crate::utils::colors::{CYAN, GREEN, GREY, RED, RESET, YELLOW};
use std::collections::BTreeSet;
use std::fs;

pub fn print_db_info(store: &RecordStore<SqliteKv>, db_path: &str) {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} KB", CYAN, RESET, file_kb);

    //
    // 2) TOTAL RECORDS
    //
    let records = store.list_records();
    println!(
        "{}• Total records:{} {}{}{}",
        CYAN,
        RESET,
        GREEN,
        records.len(),
        RESET
    );

    //
    // 3) DATE RANGE
    //
    let days: BTreeSet<&str> = records.iter().map(|r| r.date_key.as_str()).collect();

    let fmt_first = days
        .first()
        .map(|d| d.to_string())
        .unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = days
        .last()
        .map(|d| d.to_string())
        .unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    //
    // 4) AVERAGE CHECK-INS PER CLASS DAY
    //
    if !days.is_empty() {
        let avg = records.len() as f64 / days.len() as f64;
        println!("{}• Average check-ins/day:{} {:.2}", CYAN, RESET, avg);
    }

    //
    // 5) GATE
    //
    let cfg = store.get_config();
    let color = if cfg.enabled { GREEN } else { RED };
    println!(
        "{}• Check-in:{} {}{}{} (by {} at {})",
        CYAN,
        RESET,
        color,
        cfg.status_label(),
        RESET,
        cfg.updated_by,
        cfg.updated_at.format("%Y-%m-%d %H:%M")
    );

    println!();
}
