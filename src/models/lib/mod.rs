#[macro_use]
pub mod megui_model;
