//! Beetle PSX HW (hardware renderer). Reads the same options as
//! [`BeetlePsx`](super::BeetlePsx) under its own key prefix and directory.

use std::io::{self, Write};

use psx_emu_conf_core::App;

use super::beetle_psx::{ANALOG_TOGGLE, analog_toggle};
use super::{CoreDescriptor, RetroArchCore, write_option};

pub struct BeetlePsxHw {
    descriptor: CoreDescriptor,
}

impl BeetlePsxHw {
    pub const DESCRIPTOR: CoreDescriptor = CoreDescriptor {
        short_name: "beetle_psx_hw",
        internal_name: "Beetle PSX HW",
        display_name: "Beetle PSX HW",
        option_prefix: "beetle_psx_hw_",
    };

    pub fn new() -> Self {
        Self {
            descriptor: Self::DESCRIPTOR,
        }
    }
}

impl Default for BeetlePsxHw {
    fn default() -> Self {
        Self::new()
    }
}

impl RetroArchCore for BeetlePsxHw {
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
