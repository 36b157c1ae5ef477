use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::info;

use deid_ingest::{ExportFolderSource, IngestOptions, Ingestor};
use deid_map::{MappingEngine, rule_for};
use deid_model::{IngestionReport, RecordKind};
use deid_store::{NdjsonStore, RecordStore};

use crate::cli::{GetArgs, IngestArgs, ListArgs};
use crate::summary::apply_table_style;

pub fn run_ingest(args: &IngestArgs, data_dir: &Path) -> Result<IngestionReport> {
    let store = open_store(data_dir)?;
    let ingestor = Ingestor::new(MappingEngine::new(), store);
    let source = ExportFolderSource::new(&args.export_folder);
    let options = IngestOptions {
        clear_existing: args.clear_existing,
        fail_fast: args.fail_fast,
    };
    info!(
        export_folder = %args.export_folder.display(),
        data_dir = %data_dir.display(),
        clear_existing = args.clear_existing,
        "starting ingestion"
    );
    ingestor.run(&source, options).context("ingestion failed")
}

pub fn run_list(args: &ListArgs, data_dir: &Path) -> Result<()> {
    let kind: RecordKind = args
        .kind
        .parse()
        .with_context(|| format!("unsupported record kind {:?}", args.kind))?;
    let store = open_store(data_dir)?;
    let records = store.list(kind, args.offset, args.limit)?;
    for record in &records {
        println!("{}", serde_json::to_string(record)?);
    }
    info!(
        kind = %kind,
        returned = records.len(),
        total = store.count(kind)?,
        "listed records"
    );
    Ok(())
}

pub fn run_get(args: &GetArgs, data_dir: &Path) -> Result<()> {
    let kind: RecordKind = args
        .kind
        .parse()
        .with_context(|| format!("unsupported record kind {:?}", args.kind))?;
    let store = open_store(data_dir)?;
    let record = store
        .get(kind, &args.resource_id)?
        .with_context(|| format!("no {kind} record with resource id {:?}", args.resource_id))?;
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}

pub fn run_kinds() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Kind", "Fields", "References"]);
    apply_table_style(&mut table);
    for kind in RecordKind::INGESTION_ORDER {
        let rule = rule_for(kind);
        let mut references = Vec::new();
        if rule.patient_ref.is_some() {
            references.push("patient");
        }
        if rule.encounter_ref.is_some() {
            references.push("encounter");
        }
        table.add_row(vec![
            kind.as_str().to_string(),
            rule.fields.len().to_string(),
            if references.is_empty() {
                "-".to_string()
            } else {
                references.join(", ")
            },
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_clear(data_dir: &Path) -> Result<()> {
    let store = open_store(data_dir)?;
    let removed = store.clear_all()?;
    println!("Removed {removed} sanitized records.");
    Ok(())
}

fn open_store(data_dir: &Path) -> Result<Arc<dyn RecordStore>> {
    let store = NdjsonStore::open(data_dir)
        .with_context(|| format!("cannot open store at {}", data_dir.display()))?;
    Ok(Arc::new(store))
}
