#![no_std]

pub mod menu;
