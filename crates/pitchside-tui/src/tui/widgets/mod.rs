// TUI widget modules, one per screen panel.

pub mod club_stats;
pub mod help_bar;
pub mod nationality;
pub mod search;
pub mod squad;
pub mod standings;
pub mod status_bar;
pub mod team_grid;
