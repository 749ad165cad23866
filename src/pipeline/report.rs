use crate::ingest::record::DatasetOrigin;

/// Per-origin soft-failure tally. Every dropped record lands in exactly one
/// bucket so the final summary accounts for all input rows.
#[derive(Debug, Default, Clone, Copy)]
pub struct DropCounts {
    pub missing_diagnosis: usize,
    pub unmapped_label: usize,
    pub unreadable_row: usize,
    pub below_min_count: usize,
    pub missing_image: usize,
    pub undecodable_image: usize,
}

impl DropCounts {
    pub fn total(&self) -> usize {
        self.missing_diagnosis
            + self.unmapped_label
            + self.unreadable_row
            + self.below_min_count
            + self.missing_image
            + self.undecodable_image
    }
}

#[derive(Debug, Default, Clone)]
pub struct PrepReport {
    isic: DropCounts,
    sd198: DropCounts,
    custom: DropCounts,
    pub ingested: usize,
    pub dropped_classes: Vec<String>,
    pub materialized: usize,
    pub classes: usize,
    pub train_samples: usize,
    pub val_samples: usize,
}

impl PrepReport {
    pub fn counts(&self, origin: DatasetOrigin) -> &DropCounts {
        match origin {
            DatasetOrigin::Isic => &self.isic,
            DatasetOrigin::Sd198 => &self.sd198,
            DatasetOrigin::Custom => &self.custom,
        }
    }

    pub fn counts_mut(&mut self, origin: DatasetOrigin) -> &mut DropCounts {
        match origin {
            DatasetOrigin::Isic => &mut self.isic,
            DatasetOrigin::Sd198 => &mut self.sd198,
            DatasetOrigin::Custom => &mut self.custom,
        }
    }

    pub fn total_dropped(&self) -> usize {
        DatasetOrigin::ALL
            .iter()
            .map(|origin| self.counts(*origin).total())
            .sum()
    }

    pub fn print_summary(&self) {
        println!("Dataset Information:");
        println!("-------------------");
        println!("Ingested records: {}", self.ingested);
        println!("Materialized samples: {}", self.materialized);
        println!("Classes: {}", self.classes);
        println!("Train samples: {}", self.train_samples);
        println!("Validation samples: {}", self.val_samples);
        if !self.dropped_classes.is_empty() {
            println!("Classes below minimum count: {}", self.dropped_classes.join(", "));
        }
        println!();
        println!("Dropped Records:");
        println!("-------------------");
        for origin in DatasetOrigin::ALL {
            let counts = self.counts(origin);
            println!("{} (total {}):", origin.name(), counts.total());
            println!("  Missing diagnosis: {}", counts.missing_diagnosis);
            println!("  Unmapped label: {}", counts.unmapped_label);
            println!("  Unreadable row: {}", counts.unreadable_row);
            println!("  Below minimum class count: {}", counts.below_min_count);
            println!("  Missing image: {}", counts.missing_image);
            println!("  Undecodable image: {}", counts.undecodable_image);
        }
        println!();
        println!("Total dropped: {}", self.total_dropped());
    }
}
