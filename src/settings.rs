use derive_builder::Builder;

#[cfg(feature = "serde")]
use crate::algebra::SettingsError;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Runtime options for the Level-2 kernels.
///
/// The free functions in [`level2`](crate::level2) always use the default
/// settings.  Use a [`Level2`](crate::level2::Level2) engine to apply
/// anything else.
///
/// ```
/// use refblas2::Level2SettingsBuilder;
///
/// let settings = Level2SettingsBuilder::default()
///     .check_singular(true)
///     .build()
///     .unwrap();
/// assert!(settings.beta_zero_overwrite);
/// ```
#[derive(Builder, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Level2Settings {
    ///report argument errors to the print target
    #[builder(default = "false")]
    pub verbose: bool,

    ///with β = 0, overwrite y with zeros instead of computing 0*y.
    ///Inf or NaN already present in y then does not reach the result.
    #[builder(default = "true")]
    pub beta_zero_overwrite: bool,

    ///report an exactly zero pivot in trsv as an error instead of
    ///propagating Inf/NaN
    #[builder(default = "false")]
    pub check_singular: bool,
}

impl Default for Level2Settings {
    fn default() -> Level2Settings {
        Level2SettingsBuilder::default().build().unwrap()
    }
}

#[cfg(feature = "serde")]
impl Level2Settings {
    /// Read settings from a JSON string.  Missing fields take their default values.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize settings to a JSON string
    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Read settings from a JSON file
    pub fn read_from_file(file: &mut std::fs::File) -> Result<Self, SettingsError> {
        use std::io::Read;
        let mut buffer = String::new();
        file.read_to_string(&mut buffer)?;
        Self::from_json(&buffer)
    }

    /// Write settings to a file as JSON
    pub fn write_to_file(&self, file: &mut std::fs::File) -> Result<(), SettingsError> {
        use std::io::Write;
        let json = self.to_json()?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }
}

#[test]
fn test_settings_defaults() {
    let settings = Level2Settings::default();
    assert!(!settings.verbose);
    assert!(settings.beta_zero_overwrite);
    assert!(!settings.check_singular);
}

#[cfg(feature = "serde")]
#[test]
fn test_settings_json_partial() {
    let settings = Level2Settings::from_json(r#"{"check_singular": true}"#).unwrap();
    assert!(settings.check_singular);
    assert!(settings.beta_zero_overwrite);

    assert!(Level2Settings::from_json("{not json").is_err());
}
