#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveTime};
use rpunchlog::models::day_record::DayRecord;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rpl() -> Command {
    cargo_bin_cmd!("rpunchlog")
}

/// Binary bound to a test DB, never touching the user's config file.
pub fn rpl_db(db_path: &str) -> Command {
    let mut cmd = rpl();
    cmd.args(["--db", db_path, "--test"]);
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rpunchlog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rpunchlog_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write `content` to a temp input file and return its path
pub fn temp_input(name: &str, ext: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rpunchlog_in.{}", name, ext));
    fs::write(&path, content).expect("write input file");
    path.to_string_lossy().to_string()
}

pub fn init_db(db_path: &str) {
    rpl_db(db_path).arg("init").assert().success();
}

pub fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date")
}

pub fn t(s: &str) -> NaiveTime {
    NaiveTime::parse_from_str(s, "%H:%M").expect("valid time")
}

/// Day record with all four fields given as `HH:MM` (or `None`).
pub fn day(
    date: &str,
    entry: Option<&str>,
    lunch_out: Option<&str>,
    lunch_in: Option<&str>,
    exit: Option<&str>,
) -> DayRecord {
    DayRecord {
        entry: entry.map(t),
        lunch_out: lunch_out.map(t),
        lunch_in: lunch_in.map(t),
        exit: exit.map(t),
        ..DayRecord::new(d(date))
    }
}

/// Turnstile export with the usual header line and one punch per line.
pub fn turnstile_csv(punches: &[&str]) -> String {
    let mut out = String::from("Nome;Cartao;Data/Hora;Equipamento\n");
    for p in punches {
        out.push_str(&format!("FULANO DE TAL;0042;{p};Catraca 01\n"));
    }
    out
}
