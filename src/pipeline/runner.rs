use crate::ingest::{ingest_custom, ingest_isic, ingest_sd198, DatasetOrigin};
use crate::materialize::{materialize, ImageRoots};
use crate::merge::merge;
use crate::split::{persist, stratified_split};

use super::config::PrepConfig;
use super::error::PrepError;
use super::report::PrepReport;

/// Runs the whole pipeline sequentially: ingest all three sources, merge
/// and index, materialize images, split, persist. Every stage finishes
/// before the next starts.
pub fn run(config: &PrepConfig) -> Result<PrepReport, PrepError> {
    let mut report = PrepReport::default();

    println!("Ingesting ISIC metadata from {}", config.isic_csv.display());
    let isic = ingest_isic(&config.isic_csv, report.counts_mut(DatasetOrigin::Isic))?;

    println!(
        "Ingesting SD-198 metadata from {}",
        config.sd198_label_file.display()
    );
    let sd198 = ingest_sd198(
        &config.sd198_class_file,
        &config.sd198_label_file,
        &config.sd198_image_list,
        report.counts_mut(DatasetOrigin::Sd198),
    )?;

    println!("Scanning custom folders in {}", config.custom_dir.display());
    let custom = ingest_custom(&config.custom_dir, report.counts_mut(DatasetOrigin::Custom))?;

    let merged = merge(vec![isic, sd198, custom], config.min_class_count, &mut report)?;
    println!(
        "Merged {} records across {} classes",
        merged.records.len(),
        merged.index.len()
    );

    let roots = ImageRoots {
        isic: config.isic_image_dir.clone(),
        sd198: config.sd198_image_dir.clone(),
        custom: config.custom_dir.clone(),
    };
    println!("Loading images at {0}x{0}", config.image_size);
    let samples = materialize(
        &merged.records,
        &merged.index,
        &roots,
        config.image_size,
        &mut report,
    )?;

    let split = stratified_split(samples, &merged.index, config.validation_ratio, config.seed)?;
    report.train_samples = split.train.len();
    report.val_samples = split.val.len();

    persist(&config.output_dir, &split, &merged.index)?;
    println!("Artifacts written to {}", config.output_dir.display());
    println!();

    report.print_summary();

    Ok(report)
}
