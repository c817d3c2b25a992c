//! Support code for the `bala` command-line tool: chart input parsing and
//! text reports.

pub mod input;
pub mod report;

pub use input::{ChartInput, PlanetInput};
