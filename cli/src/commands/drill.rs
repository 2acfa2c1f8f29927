//! # Interactive Drill Loop
//!
//! One question per round: show a random stored prefix, collect the three
//! answers, grade them, tally the outcome. A score summary is printed every
//! `report_every` graded questions; quitting mid-window discards the
//! partial tally.

use std::io::{self, BufRead, Write};
use std::net::Ipv4Addr;

use anyhow::Context;
use colored::Colorize;

use crate::terminal::{colors, print};
use drillr_common::config::Config;
use drillr_common::{fail, info, success, warn};
use drillr_core::score::{Outcome, ScoreAggregator, ScoreReport};
use drillr_core::session::{GradeResult, QuizError, QuizSession};
use drillr_core::store::PrefixStore;

pub fn drill(cfg: &Config) -> anyhow::Result<()> {
    let store = PrefixStore::open(&cfg.store_path)
        .with_context(|| format!("opening prefix store at {}", cfg.store_path.display()))?;
    let mut rng = rand::rng();
    let mut session = QuizSession::new();
    let mut scores = ScoreAggregator::new(cfg.report_every);

    print::header("subnet drill", cfg.quiet);
    info!(
        "{} prefixes loaded, answer with dotted quads, 'q' quits",
        store.len()
    );

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let prefix: String = session.next(&store, &mut rng)?.to_string();
        println!();
        print::question(&prefix);

        let Some(network) = prompt(&mut lines, "Network address")? else { break };
        let Some(broadcast) = prompt(&mut lines, "Broadcast address")? else { break };
        let Some(mask) = prompt(&mut lines, "Subnet mask")? else { break };

        // One submission per drawn question; the session itself would
        // happily regrade.
        let result: GradeResult = match session.grade(&network, &broadcast, &mask) {
            Ok(result) => result,
            Err(err @ QuizError::CorruptRecord(_)) => {
                warn!("{err}, drawing another question");
                continue;
            }
            Err(err) => return Err(err.into()),
        };

        print_verdicts(&result);

        let outcome = if result.all_correct() {
            success!("all three correct");
            Outcome::Correct
        } else {
            fail!("not quite, study the lines above");
            Outcome::Incorrect
        };

        if let Some(report) = scores.record(outcome) {
            print_report(&report, cfg);
        }
    }

    println!();
    info!("drill finished");
    Ok(())
}

/// Shows a field prompt and reads one answer line.
///
/// `None` means the drill is over: the user typed `q` or closed stdin.
fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    label: &str,
) -> anyhow::Result<Option<String>> {
    print!(
        "{}{} ",
        label.color(colors::PRIMARY),
        ":".color(colors::SEPARATOR)
    );
    io::stdout().flush()?;

    let Some(line) = lines.next().transpose()? else {
        return Ok(None);
    };
    let answer = line.trim().to_string();
    if answer.eq_ignore_ascii_case("q") {
        return Ok(None);
    }
    Ok(Some(answer))
}

fn print_verdicts(result: &GradeResult) {
    verdict_line("Network address", result.network_ok, result.expected.network_address);
    verdict_line(
        "Broadcast address",
        result.broadcast_ok,
        result.expected.broadcast_address,
    );
    verdict_line("Subnet mask", result.netmask_ok, result.expected.netmask);
}

fn verdict_line(field: &str, ok: bool, expected: Ipv4Addr) {
    if ok {
        print::aligned_line(field, "correct".green());
    } else {
        print::aligned_line(field, format!("incorrect (correct: {expected})").red());
    }
}

/// Text rendering of the score window: counts plus a proportional bar.
fn print_report(report: &ScoreReport, cfg: &Config) {
    println!();
    print::header(&format!("score, last {} questions", report.total()), cfg.quiet);
    print::tally_bar("correct", report.correct, report.total(), colored::Color::Green);
    print::tally_bar("incorrect", report.incorrect, report.total(), colored::Color::Red);
    if !cfg.quiet {
        print::fat_separator();
    }
}
