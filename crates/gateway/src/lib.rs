//! `pool-gateway`: HTTP front door that multiplexes every registered
//! provider behind JSON-RPC and REST routes.

pub mod api;
pub mod bootstrap;
pub mod cli;
pub mod dispatch;
pub mod state;
