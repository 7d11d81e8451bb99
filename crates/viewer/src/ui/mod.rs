pub mod analysis;
pub mod controls;
pub mod rules_log;
pub mod status_bar;
