//! This crate contains the on-disk format for school-timetabling and shift-rostering instances.
//! Instances are TOML documents whose `kind` key selects the problem variant:
//!
//! ```toml
//! kind = "timetabling"
//! subjects = ["English", "Math"]
//! levels = ["1-"]
//! sections = ["A"]
//! working_days = ["Monday", "Tuesday"]
//!
//! [[teachers]]
//! name = "Ian"
//! max_workload = 2
//!
//! [[curriculum]]
//! level = "1-"
//! subject = "English"
//! slots = 1
//!
//! [[curriculum]]
//! level = "1-"
//! subject = "Math"
//! slots = 1
//!
//! [[specialties]]
//! subject = "English"
//! teachers = ["Ian"]
//!
//! [[specialties]]
//! subject = "Math"
//! teachers = ["Ian"]
//! ```
//!
//! To read an instance see [`Instance::read`] and [`Instance::from_toml_str`]; to write one see
//! [`Instance::write`]. The format only describes the data, it does not check that the data
//! forms a well-posed problem. That is done when the instance is turned into a domain model.

mod error;
mod instance;

pub use error::*;
pub use instance::*;
