#![deny(unsafe_code)]

pub mod config;
pub mod convert;
pub mod error;
pub mod mapping;
pub mod record;
pub mod region;

pub use crate::config::{ConvertConfig, DEFAULT_INPUT, DEFAULT_OUTPUT};
pub use crate::convert::{
    ConvertReport, convert, read_mapping, read_table, to_json_string, write_mapping, write_table,
};
pub use crate::error::{AdcodeError, Result};
pub use crate::mapping::DivisionMap;
pub use crate::record::{Record, SkippedLine, normalize_name, parse_line};
pub use crate::region::RegionTable;
