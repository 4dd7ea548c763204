// SPDX-License-Identifier: MIT

//! Device property reader port

use crate::error::HostError;
use crate::model::{DeviceRecord, DriverProperties};

/// Reads driver properties of an enumerated device on demand
pub trait DevicePropertyReader: Send + Sync {
    fn driver_properties(&self, device: &DeviceRecord) -> Result<DriverProperties, HostError>;
}
