pub mod pricing;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Currencies a listing fee can be paid in.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum Currency {
    Ada,
    Bone,
}
