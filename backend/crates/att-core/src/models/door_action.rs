use crate::{CoreError, CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// What the device should do with its door relay
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DoorAction {
    OpenDoor,
    KeepClosed,
}

impl DoorAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OpenDoor => "open_door",
            Self::KeepClosed => "keep_closed",
        }
    }
}

impl FromStr for DoorAction {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "open_door" => Ok(Self::OpenDoor),
            "keep_closed" => Ok(Self::KeepClosed),
            _ => Err(CoreError::InvalidDoorAction {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
