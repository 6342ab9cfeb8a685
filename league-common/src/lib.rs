pub mod config;

pub mod game_packet;

pub mod team;
