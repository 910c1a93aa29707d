use super::cb;
use super::exec::{alu, control, incdec, ld, stack, system};
use super::helpers::{
    A, ADC, ADD, AF, AND, B, BC, C, CP, CY, D, DE, E, H, HL, HL_IND, L, NC, NZ, OR, SBC, SP, SUB,
    XOR, Z,
};
use super::opcode::Opcode;

/// Descriptor for every unprefixed opcode, indexed by opcode value.
///
/// Cycle counts are T-cycles; conditional branches list the not-taken cost.
/// The eleven opcodes the hardware leaves undefined map to `UNKNOWN`.
#[rustfmt::skip]
pub static OPCODES: [Opcode; 256] = [
    Opcode::implied(0x00, "NOP", 4, system::nop), // 0x00
    Opcode::short(0x01, "LD BC,d16", 12, ld::ld_rr_d16::<BC>), // 0x01
    Opcode::implied(0x02, "LD (BC),A", 8, ld::ld_indirect_a::<{ld::IND_BC}>), // 0x02
    Opcode::implied(0x03, "INC BC", 8, incdec::inc_rr::<BC>), // 0x03
    Opcode::implied(0x04, "INC B", 4, incdec::inc_r::<B>), // 0x04
    Opcode::implied(0x05, "DEC B", 4, incdec::dec_r::<B>), // 0x05
    Opcode::byte(0x06, "LD B,d8", 8, ld::ld_r_d8::<B>), // 0x06
    Opcode::implied(0x07, "RLCA", 4, alu::rlca), // 0x07
    Opcode::short(0x08, "LD (a16),SP", 20, ld::ld_a16_sp), // 0x08
    Opcode::implied(0x09, "ADD HL,BC", 8, alu::add_hl_rr::<BC>), // 0x09
    Opcode::implied(0x0A, "LD A,(BC)", 8, ld::ld_a_indirect::<{ld::IND_BC}>), // 0x0A
    Opcode::implied(0x0B, "DEC BC", 8, incdec::dec_rr::<BC>), // 0x0B
    Opcode::implied(0x0C, "INC C", 4, incdec::inc_r::<C>), // 0x0C
    Opcode::implied(0x0D, "DEC C", 4, incdec::dec_r::<C>), // 0x0D
    Opcode::byte(0x0E, "LD C,d8", 8, ld::ld_r_d8::<C>), // 0x0E
    Opcode::implied(0x0F, "RRCA", 4, alu::rrca), // 0x0F
    Opcode::byte(0x10, "STOP", 4, system::stop), // 0x10
    Opcode::short(0x11, "LD DE,d16", 12, ld::ld_rr_d16::<DE>), // 0x11
    Opcode::implied(0x12, "LD (DE),A", 8, ld::ld_indirect_a::<{ld::IND_DE}>), // 0x12
    Opcode::implied(0x13, "INC DE", 8, incdec::inc_rr::<DE>), // 0x13
    Opcode::implied(0x14, "INC D", 4, incdec::inc_r::<D>), // 0x14
    Opcode::implied(0x15, "DEC D", 4, incdec::dec_r::<D>), // 0x15
    Opcode::byte(0x16, "LD D,d8", 8, ld::ld_r_d8::<D>), // 0x16
    Opcode::implied(0x17, "RLA", 4, alu::rla), // 0x17
    Opcode::byte(0x18, "JR r8", 12, control::jr), // 0x18
    Opcode::implied(0x19, "ADD HL,DE", 8, alu::add_hl_rr::<DE>), // 0x19
    Opcode::implied(0x1A, "LD A,(DE)", 8, ld::ld_a_indirect::<{ld::IND_DE}>), // 0x1A
    Opcode::implied(0x1B, "DEC DE", 8, incdec::dec_rr::<DE>), // 0x1B
    Opcode::implied(0x1C, "INC E", 4, incdec::inc_r::<E>), // 0x1C
    Opcode::implied(0x1D, "DEC E", 4, incdec::dec_r::<E>), // 0x1D
    Opcode::byte(0x1E, "LD E,d8", 8, ld::ld_r_d8::<E>), // 0x1E
    Opcode::implied(0x1F, "RRA", 4, alu::rra), // 0x1F
    Opcode::byte(0x20, "JR NZ,r8", 8, control::jr_cc::<NZ>), // 0x20
    Opcode::short(0x21, "LD HL,d16", 12, ld::ld_rr_d16::<HL>), // 0x21
    Opcode::implied(0x22, "LD (HL+),A", 8, ld::ld_indirect_a::<{ld::IND_HLI}>), // 0x22
    Opcode::implied(0x23, "INC HL", 8, incdec::inc_rr::<HL>), // 0x23
    Opcode::implied(0x24, "INC H", 4, incdec::inc_r::<H>), // 0x24
    Opcode::implied(0x25, "DEC H", 4, incdec::dec_r::<H>), // 0x25
    Opcode::byte(0x26, "LD H,d8", 8, ld::ld_r_d8::<H>), // 0x26
    Opcode::implied(0x27, "DAA", 4, alu::daa), // 0x27
    Opcode::byte(0x28, "JR Z,r8", 8, control::jr_cc::<Z>), // 0x28
    Opcode::implied(0x29, "ADD HL,HL", 8, alu::add_hl_rr::<HL>), // 0x29
    Opcode::implied(0x2A, "LD A,(HL+)", 8, ld::ld_a_indirect::<{ld::IND_HLI}>), // 0x2A
    Opcode::implied(0x2B, "DEC HL", 8, incdec::dec_rr::<HL>), // 0x2B
    Opcode::implied(0x2C, "INC L", 4, incdec::inc_r::<L>), // 0x2C
    Opcode::implied(0x2D, "DEC L", 4, incdec::dec_r::<L>), // 0x2D
    Opcode::byte(0x2E, "LD L,d8", 8, ld::ld_r_d8::<L>), // 0x2E
    Opcode::implied(0x2F, "CPL", 4, alu::cpl), // 0x2F
    Opcode::byte(0x30, "JR NC,r8", 8, control::jr_cc::<NC>), // 0x30
    Opcode::short(0x31, "LD SP,d16", 12, ld::ld_rr_d16::<SP>), // 0x31
    Opcode::implied(0x32, "LD (HL-),A", 8, ld::ld_indirect_a::<{ld::IND_HLD}>), // 0x32
    Opcode::implied(0x33, "INC SP", 8, incdec::inc_rr::<SP>), // 0x33
    Opcode::implied(0x34, "INC (HL)", 12, incdec::inc_r::<HL_IND>), // 0x34
    Opcode::implied(0x35, "DEC (HL)", 12, incdec::dec_r::<HL_IND>), // 0x35
    Opcode::byte(0x36, "LD (HL),d8", 12, ld::ld_r_d8::<HL_IND>), // 0x36
    Opcode::implied(0x37, "SCF", 4, alu::scf), // 0x37
    Opcode::byte(0x38, "JR C,r8", 8, control::jr_cc::<CY>), // 0x38
    Opcode::implied(0x39, "ADD HL,SP", 8, alu::add_hl_rr::<SP>), // 0x39
    Opcode::implied(0x3A, "LD A,(HL-)", 8, ld::ld_a_indirect::<{ld::IND_HLD}>), // 0x3A
    Opcode::implied(0x3B, "DEC SP", 8, incdec::dec_rr::<SP>), // 0x3B
    Opcode::implied(0x3C, "INC A", 4, incdec::inc_r::<A>), // 0x3C
    Opcode::implied(0x3D, "DEC A", 4, incdec::dec_r::<A>), // 0x3D
    Opcode::byte(0x3E, "LD A,d8", 8, ld::ld_r_d8::<A>), // 0x3E
    Opcode::implied(0x3F, "CCF", 4, alu::ccf), // 0x3F
    Opcode::implied(0x40, "LD B,B", 4, ld::ld_r_r::<B, B>), // 0x40
    Opcode::implied(0x41, "LD B,C", 4, ld::ld_r_r::<B, C>), // 0x41
    Opcode::implied(0x42, "LD B,D", 4, ld::ld_r_r::<B, D>), // 0x42
    Opcode::implied(0x43, "LD B,E", 4, ld::ld_r_r::<B, E>), // 0x43
    Opcode::implied(0x44, "LD B,H", 4, ld::ld_r_r::<B, H>), // 0x44
    Opcode::implied(0x45, "LD B,L", 4, ld::ld_r_r::<B, L>), // 0x45
    Opcode::implied(0x46, "LD B,(HL)", 8, ld::ld_r_r::<B, HL_IND>), // 0x46
    Opcode::implied(0x47, "LD B,A", 4, ld::ld_r_r::<B, A>), // 0x47
    Opcode::implied(0x48, "LD C,B", 4, ld::ld_r_r::<C, B>), // 0x48
    Opcode::implied(0x49, "LD C,C", 4, ld::ld_r_r::<C, C>), // 0x49
    Opcode::implied(0x4A, "LD C,D", 4, ld::ld_r_r::<C, D>), // 0x4A
    Opcode::implied(0x4B, "LD C,E", 4, ld::ld_r_r::<C, E>), // 0x4B
    Opcode::implied(0x4C, "LD C,H", 4, ld::ld_r_r::<C, H>), // 0x4C
    Opcode::implied(0x4D, "LD C,L", 4, ld::ld_r_r::<C, L>), // 0x4D
    Opcode::implied(0x4E, "LD C,(HL)", 8, ld::ld_r_r::<C, HL_IND>), // 0x4E
    Opcode::implied(0x4F, "LD C,A", 4, ld::ld_r_r::<C, A>), // 0x4F
    Opcode::implied(0x50, "LD D,B", 4, ld::ld_r_r::<D, B>), // 0x50
    Opcode::implied(0x51, "LD D,C", 4, ld::ld_r_r::<D, C>), // 0x51
    Opcode::implied(0x52, "LD D,D", 4, ld::ld_r_r::<D, D>), // 0x52
    Opcode::implied(0x53, "LD D,E", 4, ld::ld_r_r::<D, E>), // 0x53
    Opcode::implied(0x54, "LD D,H", 4, ld::ld_r_r::<D, H>), // 0x54
    Opcode::implied(0x55, "LD D,L", 4, ld::ld_r_r::<D, L>), // 0x55
    Opcode::implied(0x56, "LD D,(HL)", 8, ld::ld_r_r::<D, HL_IND>), // 0x56
    Opcode::implied(0x57, "LD D,A", 4, ld::ld_r_r::<D, A>), // 0x57
    Opcode::implied(0x58, "LD E,B", 4, ld::ld_r_r::<E, B>), // 0x58
    Opcode::implied(0x59, "LD E,C", 4, ld::ld_r_r::<E, C>), // 0x59
    Opcode::implied(0x5A, "LD E,D", 4, ld::ld_r_r::<E, D>), // 0x5A
    Opcode::implied(0x5B, "LD E,E", 4, ld::ld_r_r::<E, E>), // 0x5B
    Opcode::implied(0x5C, "LD E,H", 4, ld::ld_r_r::<E, H>), // 0x5C
    Opcode::implied(0x5D, "LD E,L", 4, ld::ld_r_r::<E, L>), // 0x5D
    Opcode::implied(0x5E, "LD E,(HL)", 8, ld::ld_r_r::<E, HL_IND>), // 0x5E
    Opcode::implied(0x5F, "LD E,A", 4, ld::ld_r_r::<E, A>), // 0x5F
    Opcode::implied(0x60, "LD H,B", 4, ld::ld_r_r::<H, B>), // 0x60
    Opcode::implied(0x61, "LD H,C", 4, ld::ld_r_r::<H, C>), // 0x61
    Opcode::implied(0x62, "LD H,D", 4, ld::ld_r_r::<H, D>), // 0x62
    Opcode::implied(0x63, "LD H,E", 4, ld::ld_r_r::<H, E>), // 0x63
    Opcode::implied(0x64, "LD H,H", 4, ld::ld_r_r::<H, H>), // 0x64
    Opcode::implied(0x65, "LD H,L", 4, ld::ld_r_r::<H, L>), // 0x65
    Opcode::implied(0x66, "LD H,(HL)", 8, ld::ld_r_r::<H, HL_IND>), // 0x66
    Opcode::implied(0x67, "LD H,A", 4, ld::ld_r_r::<H, A>), // 0x67
    Opcode::implied(0x68, "LD L,B", 4, ld::ld_r_r::<L, B>), // 0x68
    Opcode::implied(0x69, "LD L,C", 4, ld::ld_r_r::<L, C>), // 0x69
    Opcode::implied(0x6A, "LD L,D", 4, ld::ld_r_r::<L, D>), // 0x6A
    Opcode::implied(0x6B, "LD L,E", 4, ld::ld_r_r::<L, E>), // 0x6B
    Opcode::implied(0x6C, "LD L,H", 4, ld::ld_r_r::<L, H>), // 0x6C
    Opcode::implied(0x6D, "LD L,L", 4, ld::ld_r_r::<L, L>), // 0x6D
    Opcode::implied(0x6E, "LD L,(HL)", 8, ld::ld_r_r::<L, HL_IND>), // 0x6E
    Opcode::implied(0x6F, "LD L,A", 4, ld::ld_r_r::<L, A>), // 0x6F
    Opcode::implied(0x70, "LD (HL),B", 8, ld::ld_r_r::<HL_IND, B>), // 0x70
    Opcode::implied(0x71, "LD (HL),C", 8, ld::ld_r_r::<HL_IND, C>), // 0x71
    Opcode::implied(0x72, "LD (HL),D", 8, ld::ld_r_r::<HL_IND, D>), // 0x72
    Opcode::implied(0x73, "LD (HL),E", 8, ld::ld_r_r::<HL_IND, E>), // 0x73
    Opcode::implied(0x74, "LD (HL),H", 8, ld::ld_r_r::<HL_IND, H>), // 0x74
    Opcode::implied(0x75, "LD (HL),L", 8, ld::ld_r_r::<HL_IND, L>), // 0x75
    Opcode::implied(0x76, "HALT", 4, system::halt), // 0x76
    Opcode::implied(0x77, "LD (HL),A", 8, ld::ld_r_r::<HL_IND, A>), // 0x77
    Opcode::implied(0x78, "LD A,B", 4, ld::ld_r_r::<A, B>), // 0x78
    Opcode::implied(0x79, "LD A,C", 4, ld::ld_r_r::<A, C>), // 0x79
    Opcode::implied(0x7A, "LD A,D", 4, ld::ld_r_r::<A, D>), // 0x7A
    Opcode::implied(0x7B, "LD A,E", 4, ld::ld_r_r::<A, E>), // 0x7B
    Opcode::implied(0x7C, "LD A,H", 4, ld::ld_r_r::<A, H>), // 0x7C
    Opcode::implied(0x7D, "LD A,L", 4, ld::ld_r_r::<A, L>), // 0x7D
    Opcode::implied(0x7E, "LD A,(HL)", 8, ld::ld_r_r::<A, HL_IND>), // 0x7E
    Opcode::implied(0x7F, "LD A,A", 4, ld::ld_r_r::<A, A>), // 0x7F
    Opcode::implied(0x80, "ADD A,B", 4, alu::alu_r::<ADD, B>), // 0x80
    Opcode::implied(0x81, "ADD A,C", 4, alu::alu_r::<ADD, C>), // 0x81
    Opcode::implied(0x82, "ADD A,D", 4, alu::alu_r::<ADD, D>), // 0x82
    Opcode::implied(0x83, "ADD A,E", 4, alu::alu_r::<ADD, E>), // 0x83
    Opcode::implied(0x84, "ADD A,H", 4, alu::alu_r::<ADD, H>), // 0x84
    Opcode::implied(0x85, "ADD A,L", 4, alu::alu_r::<ADD, L>), // 0x85
    Opcode::implied(0x86, "ADD A,(HL)", 8, alu::alu_r::<ADD, HL_IND>), // 0x86
    Opcode::implied(0x87, "ADD A,A", 4, alu::alu_r::<ADD, A>), // 0x87
    Opcode::implied(0x88, "ADC A,B", 4, alu::alu_r::<ADC, B>), // 0x88
    Opcode::implied(0x89, "ADC A,C", 4, alu::alu_r::<ADC, C>), // 0x89
    Opcode::implied(0x8A, "ADC A,D", 4, alu::alu_r::<ADC, D>), // 0x8A
    Opcode::implied(0x8B, "ADC A,E", 4, alu::alu_r::<ADC, E>), // 0x8B
    Opcode::implied(0x8C, "ADC A,H", 4, alu::alu_r::<ADC, H>), // 0x8C
    Opcode::implied(0x8D, "ADC A,L", 4, alu::alu_r::<ADC, L>), // 0x8D
    Opcode::implied(0x8E, "ADC A,(HL)", 8, alu::alu_r::<ADC, HL_IND>), // 0x8E
    Opcode::implied(0x8F, "ADC A,A", 4, alu::alu_r::<ADC, A>), // 0x8F
    Opcode::implied(0x90, "SUB B", 4, alu::alu_r::<SUB, B>), // 0x90
    Opcode::implied(0x91, "SUB C", 4, alu::alu_r::<SUB, C>), // 0x91
    Opcode::implied(0x92, "SUB D", 4, alu::alu_r::<SUB, D>), // 0x92
    Opcode::implied(0x93, "SUB E", 4, alu::alu_r::<SUB, E>), // 0x93
    Opcode::implied(0x94, "SUB H", 4, alu::alu_r::<SUB, H>), // 0x94
    Opcode::implied(0x95, "SUB L", 4, alu::alu_r::<SUB, L>), // 0x95
    Opcode::implied(0x96, "SUB (HL)", 8, alu::alu_r::<SUB, HL_IND>), // 0x96
    Opcode::implied(0x97, "SUB A", 4, alu::alu_r::<SUB, A>), // 0x97
    Opcode::implied(0x98, "SBC A,B", 4, alu::alu_r::<SBC, B>), // 0x98
    Opcode::implied(0x99, "SBC A,C", 4, alu::alu_r::<SBC, C>), // 0x99
    Opcode::implied(0x9A, "SBC A,D", 4, alu::alu_r::<SBC, D>), // 0x9A
    Opcode::implied(0x9B, "SBC A,E", 4, alu::alu_r::<SBC, E>), // 0x9B
    Opcode::implied(0x9C, "SBC A,H", 4, alu::alu_r::<SBC, H>), // 0x9C
    Opcode::implied(0x9D, "SBC A,L", 4, alu::alu_r::<SBC, L>), // 0x9D
    Opcode::implied(0x9E, "SBC A,(HL)", 8, alu::alu_r::<SBC, HL_IND>), // 0x9E
    Opcode::implied(0x9F, "SBC A,A", 4, alu::alu_r::<SBC, A>), // 0x9F
    Opcode::implied(0xA0, "AND B", 4, alu::alu_r::<AND, B>), // 0xA0
    Opcode::implied(0xA1, "AND C", 4, alu::alu_r::<AND, C>), // 0xA1
    Opcode::implied(0xA2, "AND D", 4, alu::alu_r::<AND, D>), // 0xA2
    Opcode::implied(0xA3, "AND E", 4, alu::alu_r::<AND, E>), // 0xA3
    Opcode::implied(0xA4, "AND H", 4, alu::alu_r::<AND, H>), // 0xA4
    Opcode::implied(0xA5, "AND L", 4, alu::alu_r::<AND, L>), // 0xA5
    Opcode::implied(0xA6, "AND (HL)", 8, alu::alu_r::<AND, HL_IND>), // 0xA6
    Opcode::implied(0xA7, "AND A", 4, alu::alu_r::<AND, A>), // 0xA7
    Opcode::implied(0xA8, "XOR B", 4, alu::alu_r::<XOR, B>), // 0xA8
    Opcode::implied(0xA9, "XOR C", 4, alu::alu_r::<XOR, C>), // 0xA9
    Opcode::implied(0xAA, "XOR D", 4, alu::alu_r::<XOR, D>), // 0xAA
    Opcode::implied(0xAB, "XOR E", 4, alu::alu_r::<XOR, E>), // 0xAB
    Opcode::implied(0xAC, "XOR H", 4, alu::alu_r::<XOR, H>), // 0xAC
    Opcode::implied(0xAD, "XOR L", 4, alu::alu_r::<XOR, L>), // 0xAD
    Opcode::implied(0xAE, "XOR (HL)", 8, alu::alu_r::<XOR, HL_IND>), // 0xAE
    Opcode::implied(0xAF, "XOR A", 4, alu::alu_r::<XOR, A>), // 0xAF
    Opcode::implied(0xB0, "OR B", 4, alu::alu_r::<OR, B>), // 0xB0
    Opcode::implied(0xB1, "OR C", 4, alu::alu_r::<OR, C>), // 0xB1
    Opcode::implied(0xB2, "OR D", 4, alu::alu_r::<OR, D>), // 0xB2
    Opcode::implied(0xB3, "OR E", 4, alu::alu_r::<OR, E>), // 0xB3
    Opcode::implied(0xB4, "OR H", 4, alu::alu_r::<OR, H>), // 0xB4
    Opcode::implied(0xB5, "OR L", 4, alu::alu_r::<OR, L>), // 0xB5
    Opcode::implied(0xB6, "OR (HL)", 8, alu::alu_r::<OR, HL_IND>), // 0xB6
    Opcode::implied(0xB7, "OR A", 4, alu::alu_r::<OR, A>), // 0xB7
    Opcode::implied(0xB8, "CP B", 4, alu::alu_r::<CP, B>), // 0xB8
    Opcode::implied(0xB9, "CP C", 4, alu::alu_r::<CP, C>), // 0xB9
    Opcode::implied(0xBA, "CP D", 4, alu::alu_r::<CP, D>), // 0xBA
    Opcode::implied(0xBB, "CP E", 4, alu::alu_r::<CP, E>), // 0xBB
    Opcode::implied(0xBC, "CP H", 4, alu::alu_r::<CP, H>), // 0xBC
    Opcode::implied(0xBD, "CP L", 4, alu::alu_r::<CP, L>), // 0xBD
    Opcode::implied(0xBE, "CP (HL)", 8, alu::alu_r::<CP, HL_IND>), // 0xBE
    Opcode::implied(0xBF, "CP A", 4, alu::alu_r::<CP, A>), // 0xBF
    Opcode::implied(0xC0, "RET NZ", 8, control::ret_cc::<NZ>), // 0xC0
    Opcode::implied(0xC1, "POP BC", 12, stack::pop::<BC>), // 0xC1
    Opcode::short(0xC2, "JP NZ,a16", 12, control::jp_cc::<NZ>), // 0xC2
    Opcode::short(0xC3, "JP a16", 16, control::jp), // 0xC3
    Opcode::short(0xC4, "CALL NZ,a16", 12, control::call_cc::<NZ>), // 0xC4
    Opcode::implied(0xC5, "PUSH BC", 16, stack::push::<BC>), // 0xC5
    Opcode::byte(0xC6, "ADD A,d8", 8, alu::alu_d8::<ADD>), // 0xC6
    Opcode::implied(0xC7, "RST 00H", 16, control::rst::<0x0000>), // 0xC7
    Opcode::implied(0xC8, "RET Z", 8, control::ret_cc::<Z>), // 0xC8
    Opcode::implied(0xC9, "RET", 16, control::ret), // 0xC9
    Opcode::short(0xCA, "JP Z,a16", 12, control::jp_cc::<Z>), // 0xCA
    Opcode::byte(0xCB, "PREFIX CB", 4, cb::prefix_cb), // 0xCB
    Opcode::short(0xCC, "CALL Z,a16", 12, control::call_cc::<Z>), // 0xCC
    Opcode::short(0xCD, "CALL a16", 24, control::call), // 0xCD
    Opcode::byte(0xCE, "ADC A,d8", 8, alu::alu_d8::<ADC>), // 0xCE
    Opcode::implied(0xCF, "RST 08H", 16, control::rst::<0x0008>), // 0xCF
    Opcode::implied(0xD0, "RET NC", 8, control::ret_cc::<NC>), // 0xD0
    Opcode::implied(0xD1, "POP DE", 12, stack::pop::<DE>), // 0xD1
    Opcode::short(0xD2, "JP NC,a16", 12, control::jp_cc::<NC>), // 0xD2
    Opcode::unknown(0xD3), // 0xD3
    Opcode::short(0xD4, "CALL NC,a16", 12, control::call_cc::<NC>), // 0xD4
    Opcode::implied(0xD5, "PUSH DE", 16, stack::push::<DE>), // 0xD5
    Opcode::byte(0xD6, "SUB d8", 8, alu::alu_d8::<SUB>), // 0xD6
    Opcode::implied(0xD7, "RST 10H", 16, control::rst::<0x0010>), // 0xD7
    Opcode::implied(0xD8, "RET C", 8, control::ret_cc::<CY>), // 0xD8
    Opcode::implied(0xD9, "RETI", 16, control::reti), // 0xD9
    Opcode::short(0xDA, "JP C,a16", 12, control::jp_cc::<CY>), // 0xDA
    Opcode::unknown(0xDB), // 0xDB
    Opcode::short(0xDC, "CALL C,a16", 12, control::call_cc::<CY>), // 0xDC
    Opcode::unknown(0xDD), // 0xDD
    Opcode::byte(0xDE, "SBC A,d8", 8, alu::alu_d8::<SBC>), // 0xDE
    Opcode::implied(0xDF, "RST 18H", 16, control::rst::<0x0018>), // 0xDF
    Opcode::byte(0xE0, "LDH (a8),A", 12, ld::ldh_a8_a), // 0xE0
    Opcode::implied(0xE1, "POP HL", 12, stack::pop::<HL>), // 0xE1
    Opcode::implied(0xE2, "LD (C),A", 8, ld::ld_c_a), // 0xE2
    Opcode::unknown(0xE3), // 0xE3
    Opcode::unknown(0xE4), // 0xE4
    Opcode::implied(0xE5, "PUSH HL", 16, stack::push::<HL>), // 0xE5
    Opcode::byte(0xE6, "AND d8", 8, alu::alu_d8::<AND>), // 0xE6
    Opcode::implied(0xE7, "RST 20H", 16, control::rst::<0x0020>), // 0xE7
    Opcode::byte(0xE8, "ADD SP,r8", 16, alu::add_sp_r8), // 0xE8
    Opcode::implied(0xE9, "JP HL", 4, control::jp_hl), // 0xE9
    Opcode::short(0xEA, "LD (a16),A", 16, ld::ld_a16_a), // 0xEA
    Opcode::unknown(0xEB), // 0xEB
    Opcode::unknown(0xEC), // 0xEC
    Opcode::unknown(0xED), // 0xED
    Opcode::byte(0xEE, "XOR d8", 8, alu::alu_d8::<XOR>), // 0xEE
    Opcode::implied(0xEF, "RST 28H", 16, control::rst::<0x0028>), // 0xEF
    Opcode::byte(0xF0, "LDH A,(a8)", 12, ld::ldh_a_a8), // 0xF0
    Opcode::implied(0xF1, "POP AF", 12, stack::pop::<AF>), // 0xF1
    Opcode::implied(0xF2, "LD A,(C)", 8, ld::ld_a_c), // 0xF2
    Opcode::implied(0xF3, "DI", 4, system::di), // 0xF3
    Opcode::unknown(0xF4), // 0xF4
    Opcode::implied(0xF5, "PUSH AF", 16, stack::push::<AF>), // 0xF5
    Opcode::byte(0xF6, "OR d8", 8, alu::alu_d8::<OR>), // 0xF6
    Opcode::implied(0xF7, "RST 30H", 16, control::rst::<0x0030>), // 0xF7
    Opcode::byte(0xF8, "LD HL,SP+r8", 12, ld::ld_hl_sp_r8), // 0xF8
    Opcode::implied(0xF9, "LD SP,HL", 8, ld::ld_sp_hl), // 0xF9
    Opcode::short(0xFA, "LD A,(a16)", 16, ld::ld_a_a16), // 0xFA
    Opcode::implied(0xFB, "EI", 4, system::ei), // 0xFB
    Opcode::unknown(0xFC), // 0xFC
    Opcode::unknown(0xFD), // 0xFD
    Opcode::byte(0xFE, "CP d8", 8, alu::alu_d8::<CP>), // 0xFE
    Opcode::implied(0xFF, "RST 38H", 16, control::rst::<0x0038>), // 0xFF
];
