//! Row format of the durable store: `node,neighbor,neighbor,...` per line, no
//! header, variable field count.

use super::AdjacencySnapshot;
use crate::node::NodeId;
use rustc_hash::FxHashMap;

pub fn decode(bytes: &[u8]) -> Result<AdjacencySnapshot, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);

    let mut snapshot = FxHashMap::default();
    for record in reader.records() {
        let record = record?;
        let mut fields = record.iter();

        let Some(key) = fields.next().filter(|key| !key.is_empty()) else {
            continue;
        };

        let neighbors = fields
            .filter(|field| !field.is_empty())
            .map(NodeId::from)
            .collect();
        snapshot.insert(NodeId::from(key), neighbors);
    }

    Ok(snapshot)
}

/// Rows are written in key order so the file diffs cleanly.
pub fn encode(snapshot: &AdjacencySnapshot) -> Result<Vec<u8>, std::io::Error> {
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(Vec::new());

    let mut keys: Vec<&NodeId> = snapshot.keys().collect();
    keys.sort();

    for key in keys {
        let neighbors = &snapshot[key];
        let mut row = Vec::with_capacity(neighbors.len() + 1);
        row.push(key.as_str());
        row.extend(neighbors.iter().map(NodeId::as_str));
        writer.write_record(&row)?;
    }

    writer.into_inner().map_err(|e| e.into_error())
}
