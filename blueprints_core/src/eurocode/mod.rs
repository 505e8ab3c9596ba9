//! # Eurocode Tables
//!
//! Fixed lookup tables from Eurocode standards and their national annexes.
//!
//! - [`nen_9997_1`] - NEN 9997-1 (Dutch geotechnical design, EN 1997-1)

pub mod nen_9997_1;
