/// Byte-addressable view of the machine used by the CPU for opcode fetch and
/// operand access.
///
/// Each access completes synchronously with all of its side effects applied;
/// there are no partial writes. Peripheral time is never advanced from here,
/// that is the stepping coordinator's job once the instruction has finished.
pub trait MemoryPort {
    fn read8(&mut self, addr: u16) -> u8;
    fn write8(&mut self, addr: u16, value: u8);

    /// Little-endian 16-bit read.
    fn read16(&mut self, addr: u16) -> u16 {
        let lo = self.read8(addr);
        let hi = self.read8(addr.wrapping_add(1));
        u16::from_le_bytes([lo, hi])
    }

    /// Little-endian 16-bit write.
    fn write16(&mut self, addr: u16, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.write8(addr, lo);
        self.write8(addr.wrapping_add(1), hi);
    }
}
