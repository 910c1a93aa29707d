/// Base address of the I/O page. `LDH` and `LD (C)` address `IO_PAGE + offset`.
pub const IO_PAGE: u16 = 0xFF00;

/// Total addressable memory size (64 KiB).
const MEMORY_SIZE: usize = 0x10000;

/// Abstraction over the memory unit (cartridge, RAM and IO).
///
/// The CPU only needs byte access; the 16-bit and stack helpers have
/// little-endian default implementations so a memory unit normally provides
/// just `read_byte` and `write_byte`. Bank switching, IO side effects and the
/// like belong to the implementor.
pub trait Memory {
    fn read_byte(&mut self, addr: u16) -> u8;
    fn write_byte(&mut self, addr: u16, value: u8);

    /// Read a little-endian 16-bit value from `addr` and `addr + 1`.
    fn read_short(&mut self, addr: u16) -> u16 {
        let lo = self.read_byte(addr);
        let hi = self.read_byte(addr.wrapping_add(1));
        u16::from_le_bytes([lo, hi])
    }

    /// Write a 16-bit value little-endian: low byte at `addr`, high byte at
    /// `addr + 1`.
    fn write_short(&mut self, addr: u16, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.write_byte(addr, lo);
        self.write_byte(addr.wrapping_add(1), hi);
    }

    /// Push `value` onto the stack: SP -= 2, then memory[SP] = low,
    /// memory[SP+1] = high.
    fn write_short_to_stack(&mut self, sp: &mut u16, value: u16) {
        *sp = sp.wrapping_sub(2);
        self.write_short(*sp, value);
    }

    /// Pop a value pushed by `write_short_to_stack`: read at SP, then SP += 2.
    fn read_short_from_stack(&mut self, sp: &mut u16) -> u16 {
        let value = self.read_short(*sp);
        *sp = sp.wrapping_add(2);
        value
    }
}

/// Flat 64 KiB memory with no mapping rules.
///
/// Used by tests and the headless runner. A ROM image is copied to address
/// 0x0000, so a cartridge's entry point at 0x0100 lines up with the CPU's
/// power-up PC.
#[derive(Clone)]
pub struct FlatMemory {
    data: Box<[u8; MEMORY_SIZE]>,
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl FlatMemory {
    pub fn new() -> Self {
        Self {
            data: Box::new([0; MEMORY_SIZE]),
        }
    }

    /// Create a memory image with `bytes` placed at `origin`.
    pub fn with_program(origin: u16, bytes: &[u8]) -> Self {
        let mut memory = Self::new();
        memory.load(origin, bytes);
        memory
    }

    /// Copy a ROM image to address 0. Anything beyond 64 KiB is dropped;
    /// banked cartridges need a real memory unit.
    pub fn load_rom(&mut self, rom: &[u8]) {
        self.load(0x0000, rom);
        if rom.len() > MEMORY_SIZE {
            log::warn!(
                "ROM is {} bytes; only the first {} are mapped",
                rom.len(),
                MEMORY_SIZE
            );
        }
    }

    /// Copy `bytes` to `origin`, truncating at the end of the address space.
    pub fn load(&mut self, origin: u16, bytes: &[u8]) {
        let start = origin as usize;
        let len = bytes.len().min(MEMORY_SIZE - start);
        self.data[start..start + len].copy_from_slice(&bytes[..len]);
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data[..]
    }
}

impl Memory for FlatMemory {
    #[inline]
    fn read_byte(&mut self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    #[inline]
    fn write_byte(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }
}

impl std::fmt::Debug for FlatMemory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlatMemory")
            .field("size", &MEMORY_SIZE)
            .finish()
    }
}
