use crate::error::{DaybookError, Result};
use std::str::FromStr;
use strum_macros::EnumString;

/// The only spellings accepted for boolean-like flags such as `--is-encrypted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
enum Switch {
    #[strum(serialize = "True", serialize = "true")]
    On,
    #[strum(serialize = "False", serialize = "false")]
    Off,
}

/// Parses exactly `True`, `true`, `False` or `false`, reporting anything else
/// (padding included) as a validation error against `field`.
pub fn parse_switch(field: &'static str, input: &str) -> Result<bool> {
    match Switch::from_str(input) {
        Ok(Switch::On) => Ok(true),
        Ok(Switch::Off) => Ok(false),
        Err(_) => Err(DaybookError::Validation {
            field,
            expected: "True or False",
            input: input.to_string(),
        }),
    }
}

/// Like [`parse_switch`], but an absent flag stays absent.
pub fn parse_optional_switch(field: &'static str, input: Option<&str>) -> Result<Option<bool>> {
    input.map(|i| parse_switch(field, i)).transpose()
}
