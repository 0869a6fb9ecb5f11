// src/gui/components/mod.rs
pub mod action_bar;
pub mod codes_panel;
pub mod data_table;
