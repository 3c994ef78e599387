mod client;
mod config;
mod health;
mod helpers;
mod stream_reader;
