use anyhow::Result;
use msisdn_ph_config::AppConfig;
use serde::Serialize;
use std::io::{self, Write};

pub mod completions;
pub mod numbers;

pub struct Context<'a> {
    pub config: &'a AppConfig,
    pub json: bool,
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
