//! Subunit dataset loading and one-time adjustment.

mod adjust;
mod source;

pub use adjust::{
    adjust, split_at_antimeridian, Adjustment, AdjustmentReport, Correction, CORRECTIONS,
};
pub use source::{read_subunits, BundledDataset, CsvFile, SubunitSource};
