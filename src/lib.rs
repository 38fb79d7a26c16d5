#[macro_use] extern crate log;
extern crate rand;
extern crate serde_json;
extern crate thiserror;

mod data;
mod disjoint_set;
mod error;
mod percolation;
mod stats;
mod client;

pub use data::{Compression, ElementId, Site, Direction};
pub use disjoint_set::DisjointSet;
pub use error::{UnionFindError, UnionFindRes, ClientError, ClientRes};
pub use percolation::Percolation;
pub use stats::{PercolationStats, seeded_rng};
pub use client::{ClientConfig, Mode, parse_pair, run, run_connectivity};
