//! PCSX ReARMed.
//!
//! The controller type is set per port. A game that rumbles needs a
//! DualShock; one that only reads the sticks gets the plain analog pad.

use std::io::{self, Write};

use psx_emu_conf_core::{App, RumbleSupport};

use super::{CoreDescriptor, RetroArchCore, write_option};

/// Controller ports configured, numbered from 1.
const PAD_COUNT: usize = 2;

/// Values of the `pad<N>type` option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PadType {
    Standard,
    Analog,
    DualShock,
}

impl PadType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Analog => "analog",
            Self::DualShock => "dualshock",
        }
    }

    /// The pad type an app wants.
    pub fn for_app(app: &App) -> Self {
        let features = &app.feature_support;
        if features.rumble_support == RumbleSupport::Yes {
            Self::DualShock
        } else if features.analog_capable() {
            Self::Analog
        } else {
            Self::Standard
        }
    }
}

pub struct PcsxRearmed {
    descriptor: CoreDescriptor,
}

impl PcsxRearmed {
    pub const DESCRIPTOR: CoreDescriptor = CoreDescriptor {
        short_name: "pcsx_rearmed",
        internal_name: "PCSX-ReARMed",
        display_name: "PCSX ReARMed",
        option_prefix: "pcsx_rearmed_",
    };

    pub fn new() -> Self {
        Self {
            descriptor: Self::DESCRIPTOR,
        }
    }

    fn pad_key(&self, port: usize) -> String {
        self.descriptor.option_key(&format!("pad{port}type"))
    }
}

impl Default for PcsxRearmed {
    fn default() -> Self {
        Self::new()
    }
}

impl RetroArchCore for PcsxRearmed {
    fn descriptor(&self) -> &CoreDescriptor {
        &self.descriptor
    }

    fn keys(&self) -> Vec<String> {
        (1..=PAD_COUNT).map(|port| self.pad_key(port)).collect()
    }

    fn write_options(&self, sink: &mut dyn Write, app: &App) -> io::Result<()> {
        let pad_type = PadType::for_app(app);
        for port in 1..=PAD_COUNT {
            write_option(sink, &self.pad_key(port), pad_type.as_str())?;
        }
        Ok(())
    }
}
