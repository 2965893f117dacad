#![doc = include_str!("../README.md")]

pub mod datetime;
pub mod geography;
