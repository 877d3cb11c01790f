// Travel Listings - Server Core
//
// This crate provides the backend for the travel listings app: an Axum HTTP
// layer over a MongoDB-backed listing store, with server-rendered Tera views.
//
// Binaries: "server" (the HTTP server) and "seed" (fixture loader).

pub mod config;
pub mod domains;
pub mod server;

pub use config::*;
