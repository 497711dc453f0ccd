//! Reshape promoter spreadsheets from one column per product code into a
//! long `PROMOTER / COD PRODUS / LITERA` table.
//!
//! The core is two pure steps, [`classify`] and [`reshape`], wrapped by
//! [`pipeline`] which adds loading, manual column selection and export.
//! The [`cli`] module is a thin adapter on top.

pub mod classify;
pub mod cli;
pub mod config;
pub mod error;
pub mod excel;
pub mod export;
pub mod pipeline;
pub mod preview;
pub mod reshape;
pub mod selection;
pub mod table;

pub use error::{PipelineError, PipelineResult};
