//! lootbox: hierarchical container and looting engine
//!
//! Layers:
//! - `domain`: catalog, node tree, allocator, session — pure core,
//!   typed errors only, no I/O
//! - `application`: CSV loader turning record files into a catalog
//! - `cli`: argument parsing, command dispatch, the looting dialogue
//! - `config`: layered settings (defaults, global toml, env)

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;

pub use application::{load_catalog, load_records, ApplicationError, ApplicationResult};
pub use config::Settings;
pub use domain::{
    place, Catalog, Container, ContainerRecord, DomainError, DomainResult, Item, ItemRecord,
    MultiContainer, MultiContainerRecord, Node, NodeTreeConvert, RecordSet, Session,
};
