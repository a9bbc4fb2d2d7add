//! The card game parade.

pub mod action;
pub mod card;
pub mod config;
pub mod deck;
pub mod error;
pub mod event;
pub mod game;
pub mod input;
pub mod parade;
pub mod player;
pub mod river;
pub mod score;
pub mod session;
pub mod transcript;
mod turn;
