//! Region path lookup over a generated division table.
//!
//! Six-digit codes are hierarchical: `XX0000` names the province,
//! `XXYY00` the prefecture and `XXYYZZ` the county.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tracing::debug;

use crate::error::{AdcodeError, Result};
use crate::mapping::DivisionMap;

const CODE_LEN: usize = 6;

/// A division table loaded once and queried in memory.
#[derive(Debug, Clone, Default)]
pub struct RegionTable {
    names: DivisionMap,
}

impl RegionTable {
    /// Load a JSON object of `code → name` strings.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| AdcodeError::io(path, source))?;
        let names: DivisionMap = serde_json::from_reader(BufReader::new(file))
            .map_err(|source| AdcodeError::json(path, source))?;
        debug!(path = %path.display(), entries = names.len(), "loaded region table");
        Ok(Self { names })
    }

    pub fn from_map(names: DivisionMap) -> Self {
        Self { names }
    }

    pub fn name(&self, code: &str) -> Option<&str> {
        self.names.get(code)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Resolve `code` into `province-prefecture-county`.
    ///
    /// # Errors
    ///
    /// [`AdcodeError::InvalidCode`] unless `code` is six ASCII digits, and
    /// [`AdcodeError::RegionNotFound`] naming the first missing level.
    pub fn resolve(&self, code: &str) -> Result<String> {
        if code.len() != CODE_LEN || !code.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AdcodeError::InvalidCode(code.to_string()));
        }
        if !self.names.contains(code) {
            return Err(AdcodeError::RegionNotFound(code.to_string()));
        }

        let (province, prefecture) = (&code[0..2], &code[2..4]);
        let levels = [
            format!("{province}0000"),
            format!("{province}{prefecture}00"),
            code.to_string(),
        ];
        let names = levels
            .iter()
            .map(|level| {
                self.name(level)
                    .ok_or_else(|| AdcodeError::RegionNotFound(level.clone()))
            })
            .collect::<Result<Vec<&str>>>()?;
        Ok(names.join("-"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RegionTable {
        RegionTable::from_map(
            [
                ("420000", "湖北省"),
                ("420100", "武汉市"),
                ("420111", "洪山区"),
                ("110000", "北京市"),
                ("110100", "市辖区"),
                ("110102", "西城区"),
                ("370725", "昌乐县"),
            ]
            .into_iter()
            .collect(),
        )
    }

    #[test]
    fn resolves_three_levels() {
        let table = table();
        assert_eq!(table.resolve("420111").unwrap(), "湖北省-武汉市-洪山区");
        assert_eq!(table.resolve("110102").unwrap(), "北京市-市辖区-西城区");
    }

    #[test]
    fn province_code_repeats_its_own_name() {
        assert_eq!(table().resolve("110000").unwrap(), "北京市-北京市-北京市");
    }

    #[test]
    fn unknown_code_is_not_found() {
        let err = table().resolve("999999").unwrap_err();
        assert!(matches!(err, AdcodeError::RegionNotFound(code) if code == "999999"));
    }

    #[test]
    fn missing_parent_level_is_reported() {
        let err = table().resolve("370725").unwrap_err();
        assert!(matches!(err, AdcodeError::RegionNotFound(code) if code == "370000"));
    }

    #[test]
    fn malformed_codes_are_rejected() {
        let table = table();
        for code in ["12", "4201110", "42011a", "四二〇一"] {
            assert!(matches!(table.resolve(code), Err(AdcodeError::InvalidCode(_))));
        }
    }
}
