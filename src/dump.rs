//! JSON debug dumps for layout results.
//!
//! Handy for golden-file comparisons while tuning force constants: run
//! a seeded request, dump the result, diff against the checked-in
//! snapshot.

use std::path::Path;

use serde::Serialize;

use crate::layout::{LabelRequest, LabelResult, PackingRequest, PackingResult};

#[derive(Serialize)]
struct PackingDump<'a> {
    request: &'a PackingRequest,
    result: &'a PackingResult,
}

#[derive(Serialize)]
struct LabelDump<'a> {
    request: &'a LabelRequest,
    result: &'a LabelResult,
}

pub fn packing_to_json(request: &PackingRequest, result: &PackingResult) -> String {
    serde_json::to_string_pretty(&PackingDump { request, result })
        .unwrap_or_else(|_| String::from("{}"))
}

pub fn labels_to_json(request: &LabelRequest, result: &LabelResult) -> String {
    serde_json::to_string_pretty(&LabelDump { request, result })
        .unwrap_or_else(|_| String::from("{}"))
}

pub fn write_packing_dump(
    path: &Path,
    request: &PackingRequest,
    result: &PackingResult,
) -> anyhow::Result<()> {
    std::fs::write(path, packing_to_json(request, result))?;
    Ok(())
}

pub fn write_label_dump(
    path: &Path,
    request: &LabelRequest,
    result: &LabelResult,
) -> anyhow::Result<()> {
    std::fs::write(path, labels_to_json(request, result))?;
    Ok(())
}
