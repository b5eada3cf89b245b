//! The journal's submit button changes label with what the typed task entry
//! would do. The server answers with one of a handful of words.

use crate::errors::AppError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum ThingyButton {
    Post,
    Start,
    Restart,
    Comment,
    Taskinate,
}

impl ThingyButton {
    pub const ALL: [ThingyButton; 5] = [
        ThingyButton::Post,
        ThingyButton::Start,
        ThingyButton::Restart,
        ThingyButton::Comment,
        ThingyButton::Taskinate,
    ];

    /// Every class a button may carry; remove these before adding the new one.
    pub const ALL_CLASSES: [&'static str; 5] =
        ["v-post", "v-start", "v-restart", "v-comment", "v-taskinate"];

    pub fn label(&self) -> &'static str {
        match self {
            ThingyButton::Post => "Post",
            ThingyButton::Start => "Start",
            ThingyButton::Restart => "Restart",
            ThingyButton::Comment => "Comment",
            ThingyButton::Taskinate => "Taskinate",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            ThingyButton::Post => "v-post",
            ThingyButton::Start => "v-start",
            ThingyButton::Restart => "v-restart",
            ThingyButton::Comment => "v-comment",
            ThingyButton::Taskinate => "v-taskinate",
        }
    }
}

impl FromStr for ThingyButton {
    type Err = AppError;

    /// Exact, case-sensitive match on the whole response.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|b| b.label() == s)
            .ok_or_else(|| AppError::UnknownButton(s.to_string()))
    }
}

impl fmt::Display for ThingyButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
