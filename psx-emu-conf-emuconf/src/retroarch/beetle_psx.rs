//! Beetle PSX (software renderer).

use std::io::{self, Write};

use psx_emu_conf_core::App;

use super::{CoreDescriptor, RetroArchCore, write_option};

/// Option suffix of the analog mode toggle.
pub(crate) const ANALOG_TOGGLE: &str = "analog_toggle";

/// Value of the analog toggle for an app.
pub(crate) fn analog_toggle(app: &App) -> &'static str {
    if app.feature_support.analog_capable() {
        "enabled"
    } else {
        "disabled"
    }
}

pub struct BeetlePsx {
    descriptor: CoreDescriptor,
}

impl BeetlePsx {
    pub const DESCRIPTOR: CoreDescriptor = CoreDescriptor {
        short_name: "beetle_psx",
        internal_name: "Beetle PSX",
        display_name: "Beetle PSX",
        option_prefix: "beetle_psx_",
    };

    pub fn new() -> Self {
        Self {
            descriptor: Self::DESCRIPTOR,
        }
    }
}

impl Default for BeetlePsx {
    fn default() -> Self {
        Self::new()
    }
}

impl RetroArchCore for BeetlePsx {
    fn descriptor(&self) -> &CoreDescriptor {
        &self.descriptor
    }

    fn keys(&self) -> Vec<String> {
        vec![self.descriptor.option_key(ANALOG_TOGGLE)]
    }

    fn write_options(&self, sink: &mut dyn Write, app: &App) -> io::Result<()> {
        write_option(
            sink,
            &self.descriptor.option_key(ANALOG_TOGGLE),
            analog_toggle(app),
        )
    }
}
