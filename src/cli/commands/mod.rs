pub mod button;
pub mod config;
pub mod refresh;
pub mod watch;

use std::io::IsTerminal;

use crate::config::Config;

pub(crate) fn use_color(cfg: &Config, json: bool) -> bool {
    cfg.color && !json && std::io::stdout().is_terminal()
}
