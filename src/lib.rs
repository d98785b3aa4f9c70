pub mod config;
pub mod consts;
pub mod gui;
pub mod math;
pub mod model;
