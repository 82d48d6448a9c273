#![allow(dead_code)]

pub mod architecture;
pub mod fixtures;
pub mod renderer;
