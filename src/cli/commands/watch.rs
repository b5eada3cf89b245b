use super::use_color;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::refresh::TimerDisplayRefresher;
use crate::core::ticker::RepeatingTask;
use crate::models::page::PageSnapshot;
use crate::errors::AppResult;
use crate::ui::{messages, render::print_output};
use chrono::Local;
use std::ops::ControlFlow;
use std::time::Duration;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Watch {
        file,
        interval,
        interval_ms,
        ticks,
        json,
    } = cmd
    {
        let period = match interval_ms {
            Some(ms) => Duration::from_millis(*ms),
            None => Duration::from_secs(interval.unwrap_or(cfg.refresh_interval_secs)),
        };
        let max_ticks = *ticks;
        let json = *json;
        let color = use_color(cfg, json);
        let file = file.clone();
        let refresher = TimerDisplayRefresher::new();

        if !json {
            messages::info(format!(
                "Refreshing {} every {}ms",
                file.display(),
                period.as_millis()
            ));
        }

        let task = RepeatingTask::spawn(period, move |n| {
            // a broken snapshot only costs this tick; the next one re-reads it
            match PageSnapshot::load(&file) {
                Ok(page) => {
                    let out = refresher.refresh(&page, Local::now().naive_local());
                    if let Err(e) = print_output(&out, json, color) {
                        messages::error(&e);
                    }
                }
                Err(e) => {
                    tracing::warn!(event = "watch.snapshot_unreadable", tick = n, error = %e);
                    messages::warning(format!("tick {}: {}", n, e));
                }
            }

            match max_ticks {
                Some(max) if n >= max => ControlFlow::Break(()),
                _ => ControlFlow::Continue(()),
            }
        });

        let ran = task.join();
        tracing::debug!(event = "watch.finished", ticks = ran);
    }

    Ok(())
}
