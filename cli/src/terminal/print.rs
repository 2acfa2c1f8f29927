use std::fmt::Display;

use crate::terminal::colors;
use colored::*;
use unicode_width::UnicodeWidthStr;

pub const TOTAL_WIDTH: usize = 64;
const KEY_WIDTH: usize = 18;
const BAR_WIDTH: usize = 20;

pub fn header(msg: &str, quiet: bool) {
    if quiet {
        return;
    }

    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = UnicodeWidthStr::width(formatted.as_str());

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    )
    .bright_black();

    println!("{}", line);
}

pub fn fat_separator() {
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH).bright_black();
    println!("{}", sep);
}

/// The prefix under drill, centered and highlighted.
pub fn question(prefix: &str) {
    let text: ColoredString = format!("⟦ {} ⟧", prefix).color(colors::ACCENT).bold();
    centerln(&format!("{}", text));
}

pub fn aligned_line<V: Display>(key: &str, value: V) {
    let dots: String = ".".repeat((KEY_WIDTH + 1).saturating_sub(key.len()));
    let colon: String = format!(
        "{}{}",
        dots.color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR)
    );
    print_status(format!("{}{} {}", key.color(colors::PRIMARY), colon, value));
}

pub fn print_status<T: AsRef<str>>(msg: T) {
    let prefix: ColoredString = ">".color(colors::SEPARATOR);
    println!("{} {}", prefix, msg.as_ref());
}

/// One row of the score summary: a proportional bar plus the raw count.
pub fn tally_bar(label: &str, count: u32, total: u32, color: Color) {
    let filled: usize = if total == 0 {
        0
    } else {
        (count as usize * BAR_WIDTH) / total as usize
    };
    let bar: String = format!(
        "{}{}",
        "█".repeat(filled).color(color),
        "░".repeat(BAR_WIDTH - filled).color(colors::SEPARATOR)
    );
    aligned_line(label, format!("{bar} {count}"));
}

pub fn centerln(msg: &str) {
    let width: usize = console::measure_text_width(msg);
    let space: String = " ".repeat(TOTAL_WIDTH.saturating_sub(width) / 2);
    println!("{}{}", space, msg);
}
