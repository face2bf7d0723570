//! Folio - Portfolio site content, assistant and contact API.

pub mod assistant;
pub mod commands;
pub mod config;
pub mod contact;
pub mod content;
pub mod display;
pub mod web;
