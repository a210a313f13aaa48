use typed_builder::TypedBuilder;

/// What the opcode engine does with the ten primary opcodes that have no
/// table entry (0xD3, 0xDB, 0xDD, 0xE3, 0xE4, 0xEB, 0xEC, 0xED, 0xF4, 0xFC).
///
/// 0xFD is not covered by this policy; it always re-enters the decoder.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum IllegalOpcodePolicy {
    /// Stop and report the opcode and its address.
    #[default]
    Fatal,
    /// Charge 4 ticks and carry on with the next byte.
    Ignore,
}

/// Machine-wide settings, fixed for the lifetime of a session.
#[derive(Clone, Debug, TypedBuilder)]
pub struct MachineConfig {
    #[builder(default)]
    pub illegal_opcodes: IllegalOpcodePolicy,
    /// Keep every byte shifted out of the serial port so test ROMs that
    /// report over the link cable can be inspected.
    #[builder(default = true)]
    pub serial_capture: bool,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}
