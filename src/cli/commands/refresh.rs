use super::use_color;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::refresh::TimerDisplayRefresher;
use crate::errors::AppResult;
use crate::models::page::PageSnapshot;
use crate::ui::render::print_output;
use crate::utils::time::parse_timestamp;
use chrono::Local;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Refresh { file, now, json } = cmd {
        let page = PageSnapshot::load(file)?;

        let now = match now {
            Some(s) => parse_timestamp(s)?,
            None => Local::now().naive_local(),
        };

        let out = TimerDisplayRefresher::new().refresh(&page, now);
        print_output(&out, *json, use_color(cfg, *json))?;
    }

    Ok(())
}
