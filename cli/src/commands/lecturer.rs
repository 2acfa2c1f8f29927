//! # Lecturer Commands
//!
//! The store-curation surface: list, add, update, delete. Each invocation
//! prompts for the shared secret and unlocks a fresh gate; the gate lives
//! only as long as the command.

use anyhow::Context;
use console::Term;

use crate::terminal::print;
use drillr_common::config::Config;
use drillr_common::{info, success};
use drillr_core::access::AdminGate;
use drillr_core::store::PrefixStore;

fn unlock_gate() -> anyhow::Result<AdminGate> {
    let term = Term::stderr();
    term.write_str("Lecturer password: ")?;
    let credential = term.read_secure_line()?;

    let mut gate = AdminGate::new();
    if !gate.attempt_unlock(&credential) {
        anyhow::bail!("wrong password, lecturer mode stays locked");
    }
    success!("lecturer mode unlocked");
    Ok(gate)
}

fn open_store(cfg: &Config) -> anyhow::Result<PrefixStore> {
    PrefixStore::open(&cfg.store_path)
        .with_context(|| format!("opening prefix store at {}", cfg.store_path.display()))
}

pub fn list(cfg: &Config) -> anyhow::Result<()> {
    let store = open_store(cfg)?;
    let gate = unlock_gate()?;

    print::header("stored prefixes", cfg.quiet);
    for record in store.list_all(&gate)? {
        print::aligned_line(&format!("id {}", record.id), &record.prefix);
    }
    info!("{} records", store.len());
    Ok(())
}

pub fn add(cfg: &Config, prefix: &str) -> anyhow::Result<()> {
    let mut store = open_store(cfg)?;
    let gate = unlock_gate()?;

    let id = store.insert(&gate, prefix)?;
    success!("added {prefix} with id {id}");
    Ok(())
}

pub fn update(cfg: &Config, id: u64, prefix: &str) -> anyhow::Result<()> {
    let mut store = open_store(cfg)?;
    let gate = unlock_gate()?;

    store.update(&gate, id, prefix)?;
    success!("record {id} now reads {prefix}");
    Ok(())
}

pub fn delete(cfg: &Config, id: u64) -> anyhow::Result<()> {
    let mut store = open_store(cfg)?;
    let gate = unlock_gate()?;

    store.delete(&gate, id)?;
    success!("deleted record {id}");
    Ok(())
}
