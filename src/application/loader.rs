//! CSV catalog loader.
//!
//! Each file starts with a header line, which is ignored. The remaining
//! data lines are registered in lexicographic order (the registry is
//! built from sorted lines), which fixes the resolution order for
//! multi-container compartment references: a multi-container may only
//! reference names that sort before it across the load sequence.

use std::fs;
use std::path::{Path, PathBuf};

use itertools::Itertools;
use tracing::{debug, instrument};

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::config::Settings;
use crate::domain::{
    Catalog, ContainerRecord, ItemRecord, MultiContainerRecord, RecordSet,
};

/// Read the configured data files and build the catalog.
#[instrument(level = "debug", skip(settings))]
pub fn load_catalog(settings: &Settings) -> ApplicationResult<Catalog> {
    let records = load_records(settings)?;
    Ok(Catalog::build(records)?)
}

/// Read the configured data files into typed record sets.
///
/// `items` and `containers` files are required; the multi-containers
/// file is optional so two-file data sets still load.
#[instrument(level = "debug", skip(settings))]
pub fn load_records(settings: &Settings) -> ApplicationResult<RecordSet> {
    let items_path = settings.items_path();
    let containers_path = settings.containers_path();
    let multi_path = settings.multi_containers_path();

    let items = parse_items(&items_path, &read(&items_path)?)?;
    let containers = parse_containers(&containers_path, &read(&containers_path)?)?;
    let multi_containers = if multi_path.exists() {
        parse_multi_containers(&multi_path, &read(&multi_path)?)?
    } else {
        debug!("no multi-containers file at {:?}", multi_path);
        Vec::new()
    };

    Ok(RecordSet {
        items,
        containers,
        multi_containers,
    })
}

fn read(path: &Path) -> ApplicationResult<String> {
    fs::read_to_string(path).map_err(|e| ApplicationError::io(path, e))
}

/// Data lines with their original 1-based line numbers, header skipped,
/// sorted lexicographically by content.
fn data_lines(content: &str) -> Vec<(usize, &str)> {
    content
        .lines()
        .enumerate()
        .skip(1)
        .map(|(i, line)| (i + 1, line))
        .filter(|(_, line)| !line.trim().is_empty())
        .sorted_by(|a, b| a.1.cmp(b.1))
        .collect()
}

pub fn parse_items(path: &Path, content: &str) -> ApplicationResult<Vec<ItemRecord>> {
    let mut records = Vec::new();
    for (line, text) in data_lines(content) {
        let fields = split_fields(text);
        if fields.len() != 2 {
            return Err(invalid(path, line, "expected \"name,weight\""));
        }
        records.push(ItemRecord {
            name: fields[0].to_string(),
            weight: parse_number(&fields[1], path, line, "weight")?,
        });
    }
    Ok(records)
}

pub fn parse_containers(path: &Path, content: &str) -> ApplicationResult<Vec<ContainerRecord>> {
    let mut records = Vec::new();
    for (line, text) in data_lines(content) {
        let fields = split_fields(text);
        if fields.len() != 3 {
            return Err(invalid(path, line, "expected \"name,weight,capacity\""));
        }
        records.push(ContainerRecord {
            name: fields[0].to_string(),
            weight: parse_number(&fields[1], path, line, "weight")?,
            capacity: parse_number(&fields[2], path, line, "capacity")?,
        });
    }
    Ok(records)
}

pub fn parse_multi_containers(
    path: &Path,
    content: &str,
) -> ApplicationResult<Vec<MultiContainerRecord>> {
    let mut records = Vec::new();
    for (line, text) in data_lines(content) {
        let fields = split_fields(text);
        if fields.len() < 2 {
            return Err(invalid(
                path,
                line,
                "expected \"name,compartment[,compartment...]\"",
            ));
        }
        records.push(MultiContainerRecord {
            name: fields[0].to_string(),
            compartments: fields[1..].to_vec(),
        });
    }
    Ok(records)
}

fn split_fields(line: &str) -> Vec<String> {
    line.split(',').map(|f| f.trim().to_string()).collect()
}

fn parse_number(field: &str, path: &Path, line: usize, what: &str) -> ApplicationResult<u32> {
    field
        .parse::<u32>()
        .map_err(|_| invalid(path, line, format!("{} is not a non-negative integer: \"{}\"", what, field)))
}

fn invalid(path: &Path, line: usize, message: impl Into<String>) -> ApplicationError {
    ApplicationError::InvalidRecord {
        path: PathBuf::from(path),
        line,
        message: message.into(),
    }
}
