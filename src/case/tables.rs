// Generated by `mkcasetable` from UnicodeData.txt. Do not edit.
//
// Input: Unicode 14.0.0 simple case mappings, full Basic Multilingual Plane.
// min_xor_count = 15, max_gap = 2
use super::{CaseException, CaseRange};
pub const UPCASE_RANGE_COUNT: usize = 37;
pub const UPCASE_EXCEPTION_COUNT: usize = 701;
pub static UPCASE_RANGES: [CaseRange; UPCASE_RANGE_COUNT] = [
    CaseRange { xor: 0x0020, start: 0x0061, end: 0x007A },
    CaseRange { xor: 0x0020, start: 0x00E0, end: 0x00F6 },
    CaseRange { xor: 0x0020, start: 0x00F8, end: 0x00FE },
    CaseRange { xor: 0x0020, start: 0x03B1, end: 0x03BF },
    CaseRange { xor: 0x0060, start: 0x03C0, end: 0x03C1 },
    CaseRange { xor: 0x0060, start: 0x03C3, end: 0x03CB },
    CaseRange { xor: 0x0020, start: 0x0430, end: 0x043F },
    CaseRange { xor: 0x0060, start: 0x0440, end: 0x044F },
    CaseRange { xor: 0x0050, start: 0x0450, end: 0x045F },
    CaseRange { xor: 0x0050, start: 0x0561, end: 0x056F },
    CaseRange { xor: 0x0030, start: 0x0570, end: 0x057F },
    CaseRange { xor: 0x0C40, start: 0x10D0, end: 0x10FA },
    CaseRange { xor: 0x0C40, start: 0x10FD, end: 0x10FF },
    CaseRange { xor: 0x0008, start: 0x13F8, end: 0x13FD },
    CaseRange { xor: 0x0008, start: 0x1F00, end: 0x1F07 },
    CaseRange { xor: 0x0008, start: 0x1F10, end: 0x1F15 },
    CaseRange { xor: 0x0008, start: 0x1F20, end: 0x1F27 },
    CaseRange { xor: 0x0008, start: 0x1F30, end: 0x1F37 },
    CaseRange { xor: 0x0008, start: 0x1F40, end: 0x1F45 },
    CaseRange { xor: 0x0008, start: 0x1F60, end: 0x1F67 },
    CaseRange { xor: 0x0008, start: 0x1F80, end: 0x1F87 },
    CaseRange { xor: 0x0008, start: 0x1F90, end: 0x1F97 },
    CaseRange { xor: 0x0008, start: 0x1FA0, end: 0x1FA7 },
    CaseRange { xor: 0x0008, start: 0x1FB0, end: 0x1FB1 },
    CaseRange { xor: 0x0008, start: 0x1FD0, end: 0x1FD1 },
    CaseRange { xor: 0x0008, start: 0x1FE0, end: 0x1FE1 },
    CaseRange { xor: 0x0010, start: 0x2170, end: 0x217F },
    CaseRange { xor: 0x0030, start: 0x2C30, end: 0x2C3F },
    CaseRange { xor: 0x0050, start: 0x2C40, end: 0x2C4F },
    CaseRange { xor: 0x0070, start: 0x2C50, end: 0x2C5F },
    CaseRange { xor: 0x3DA0, start: 0x2D00, end: 0x2D1F },
    CaseRange { xor: 0xB8D0, start: 0xAB70, end: 0xAB7F },
    CaseRange { xor: 0xB830, start: 0xAB80, end: 0xAB8F },
    CaseRange { xor: 0xB850, start: 0xAB90, end: 0xAB9F },
    CaseRange { xor: 0xB870, start: 0xABA0, end: 0xABAF },
    CaseRange { xor: 0xB850, start: 0xABB0, end: 0xABBF },
    CaseRange { xor: 0x0060, start: 0xFF41, end: 0xFF5A },
];
pub static UPCASE_EXCEPTIONS: [CaseException; UPCASE_EXCEPTION_COUNT] = [
    CaseException { from: 0x00B5, to: 0x039C },
    CaseException { from: 0x00FF, to: 0x0178 },
    CaseException { from: 0x0101, to: 0x0100 },
    CaseException { from: 0x0103, to: 0x0102 },
    CaseException { from: 0x0105, to: 0x0104 },
    CaseException { from: 0x0107, to: 0x0106 },
    CaseException { from: 0x0109, to: 0x0108 },
    CaseException { from: 0x010B, to: 0x010A },
    CaseException { from: 0x010D, to: 0x010C },
    CaseException { from: 0x010F, to: 0x010E },
    CaseException { from: 0x0111, to: 0x0110 },
    CaseException { from: 0x0113, to: 0x0112 },
    CaseException { from: 0x0115, to: 0x0114 },
    CaseException { from: 0x0117, to: 0x0116 },
    CaseException { from: 0x0119, to: 0x0118 },
    CaseException { from: 0x011B, to: 0x011A },
    CaseException { from: 0x011D, to: 0x011C },
    CaseException { from: 0x011F, to: 0x011E },
    CaseException { from: 0x0121, to: 0x0120 },
    CaseException { from: 0x0123, to: 0x0122 },
    CaseException { from: 0x0125, to: 0x0124 },
    CaseException { from: 0x0127, to: 0x0126 },
    CaseException { from: 0x0129, to: 0x0128 },
    CaseException { from: 0x012B, to: 0x012A },
    CaseException { from: 0x012D, to: 0x012C },
    CaseException { from: 0x012F, to: 0x012E },
    CaseException { from: 0x0131, to: 0x0049 },
    CaseException { from: 0x0133, to: 0x0132 },
    CaseException { from: 0x0135, to: 0x0134 },
    CaseException { from: 0x0137, to: 0x0136 },
    CaseException { from: 0x013A, to: 0x0139 },
    CaseException { from: 0x013C, to: 0x013B },
    CaseException { from: 0x013E, to: 0x013D },
    CaseException { from: 0x0140, to: 0x013F },
    CaseException { from: 0x0142, to: 0x0141 },
    CaseException { from: 0x0144, to: 0x0143 },
    CaseException { from: 0x0146, to: 0x0145 },
    CaseException { from: 0x0148, to: 0x0147 },
    CaseException { from: 0x014B, to: 0x014A },
    CaseException { from: 0x014D, to: 0x014C },
    CaseException { from: 0x014F, to: 0x014E },
    CaseException { from: 0x0151, to: 0x0150 },
    CaseException { from: 0x0153, to: 0x0152 },
    CaseException { from: 0x0155, to: 0x0154 },
    CaseException { from: 0x0157, to: 0x0156 },
    CaseException { from: 0x0159, to: 0x0158 },
    CaseException { from: 0x015B, to: 0x015A },
    CaseException { from: 0x015D, to: 0x015C },
    CaseException { from: 0x015F, to: 0x015E },
    CaseException { from: 0x0161, to: 0x0160 },
    CaseException { from: 0x0163, to: 0x0162 },
    CaseException { from: 0x0165, to: 0x0164 },
    CaseException { from: 0x0167, to: 0x0166 },
    CaseException { from: 0x0169, to: 0x0168 },
    CaseException { from: 0x016B, to: 0x016A },
    CaseException { from: 0x016D, to: 0x016C },
    CaseException { from: 0x016F, to: 0x016E },
    CaseException { from: 0x0171, to: 0x0170 },
    CaseException { from: 0x0173, to: 0x0172 },
    CaseException { from: 0x0175, to: 0x0174 },
    CaseException { from: 0x0177, to: 0x0176 },
    CaseException { from: 0x017A, to: 0x0179 },
    CaseException { from: 0x017C, to: 0x017B },
    CaseException { from: 0x017E, to: 0x017D },
    CaseException { from: 0x017F, to: 0x0053 },
    CaseException { from: 0x0180, to: 0x0243 },
    CaseException { from: 0x0183, to: 0x0182 },
    CaseException { from: 0x0185, to: 0x0184 },
    CaseException { from: 0x0188, to: 0x0187 },
    CaseException { from: 0x018C, to: 0x018B },
    CaseException { from: 0x0192, to: 0x0191 },
    CaseException { from: 0x0195, to: 0x01F6 },
    CaseException { from: 0x0199, to: 0x0198 },
    CaseException { from: 0x019A, to: 0x023D },
    CaseException { from: 0x019E, to: 0x0220 },
    CaseException { from: 0x01A1, to: 0x01A0 },
    CaseException { from: 0x01A3, to: 0x01A2 },
    CaseException { from: 0x01A5, to: 0x01A4 },
    CaseException { from: 0x01A8, to: 0x01A7 },
    CaseException { from: 0x01AD, to: 0x01AC },
    CaseException { from: 0x01B0, to: 0x01AF },
    CaseException { from: 0x01B4, to: 0x01B3 },
    CaseException { from: 0x01B6, to: 0x01B5 },
    CaseException { from: 0x01B9, to: 0x01B8 },
    CaseException { from: 0x01BD, to: 0x01BC },
    CaseException { from: 0x01BF, to: 0x01F7 },
    CaseException { from: 0x01C5, to: 0x01C4 },
    CaseException { from: 0x01C6, to: 0x01C4 },
    CaseException { from: 0x01C8, to: 0x01C7 },
    CaseException { from: 0x01C9, to: 0x01C7 },
    CaseException { from: 0x01CB, to: 0x01CA },
    CaseException { from: 0x01CC, to: 0x01CA },
    CaseException { from: 0x01CE, to: 0x01CD },
    CaseException { from: 0x01D0, to: 0x01CF },
    CaseException { from: 0x01D2, to: 0x01D1 },
    CaseException { from: 0x01D4, to: 0x01D3 },
    CaseException { from: 0x01D6, to: 0x01D5 },
    CaseException { from: 0x01D8, to: 0x01D7 },
    CaseException { from: 0x01DA, to: 0x01D9 },
    CaseException { from: 0x01DC, to: 0x01DB },
    CaseException { from: 0x01DD, to: 0x018E },
    CaseException { from: 0x01DF, to: 0x01DE },
    CaseException { from: 0x01E1, to: 0x01E0 },
    CaseException { from: 0x01E3, to: 0x01E2 },
    CaseException { from: 0x01E5, to: 0x01E4 },
    CaseException { from: 0x01E7, to: 0x01E6 },
    CaseException { from: 0x01E9, to: 0x01E8 },
    CaseException { from: 0x01EB, to: 0x01EA },
    CaseException { from: 0x01ED, to: 0x01EC },
    CaseException { from: 0x01EF, to: 0x01EE },
    CaseException { from: 0x01F2, to: 0x01F1 },
    CaseException { from: 0x01F3, to: 0x01F1 },
    CaseException { from: 0x01F5, to: 0x01F4 },
    CaseException { from: 0x01F9, to: 0x01F8 },
    CaseException { from: 0x01FB, to: 0x01FA },
    CaseException { from: 0x01FD, to: 0x01FC },
    CaseException { from: 0x01FF, to: 0x01FE },
    CaseException { from: 0x0201, to: 0x0200 },
    CaseException { from: 0x0203, to: 0x0202 },
    CaseException { from: 0x0205, to: 0x0204 },
    CaseException { from: 0x0207, to: 0x0206 },
    CaseException { from: 0x0209, to: 0x0208 },
    CaseException { from: 0x020B, to: 0x020A },
    CaseException { from: 0x020D, to: 0x020C },
    CaseException { from: 0x020F, to: 0x020E },
    CaseException { from: 0x0211, to: 0x0210 },
    CaseException { from: 0x0213, to: 0x0212 },
    CaseException { from: 0x0215, to: 0x0214 },
    CaseException { from: 0x0217, to: 0x0216 },
    CaseException { from: 0x0219, to: 0x0218 },
    CaseException { from: 0x021B, to: 0x021A },
    CaseException { from: 0x021D, to: 0x021C },
    CaseException { from: 0x021F, to: 0x021E },
    CaseException { from: 0x0223, to: 0x0222 },
    CaseException { from: 0x0225, to: 0x0224 },
    CaseException { from: 0x0227, to: 0x0226 },
    CaseException { from: 0x0229, to: 0x0228 },
    CaseException { from: 0x022B, to: 0x022A },
    CaseException { from: 0x022D, to: 0x022C },
    CaseException { from: 0x022F, to: 0x022E },
    CaseException { from: 0x0231, to: 0x0230 },
    CaseException { from: 0x0233, to: 0x0232 },
    CaseException { from: 0x023C, to: 0x023B },
    CaseException { from: 0x023F, to: 0x2C7E },
    CaseException { from: 0x0240, to: 0x2C7F },
    CaseException { from: 0x0242, to: 0x0241 },
    CaseException { from: 0x0247, to: 0x0246 },
    CaseException { from: 0x0249, to: 0x0248 },
    CaseException { from: 0x024B, to: 0x024A },
    CaseException { from: 0x024D, to: 0x024C },
    CaseException { from: 0x024F, to: 0x024E },
    CaseException { from: 0x0250, to: 0x2C6F },
    CaseException { from: 0x0251, to: 0x2C6D },
    CaseException { from: 0x0252, to: 0x2C70 },
    CaseException { from: 0x0253, to: 0x0181 },
    CaseException { from: 0x0254, to: 0x0186 },
    CaseException { from: 0x0256, to: 0x0189 },
    CaseException { from: 0x0257, to: 0x018A },
    CaseException { from: 0x0259, to: 0x018F },
    CaseException { from: 0x025B, to: 0x0190 },
    CaseException { from: 0x025C, to: 0xA7AB },
    CaseException { from: 0x0260, to: 0x0193 },
    CaseException { from: 0x0261, to: 0xA7AC },
    CaseException { from: 0x0263, to: 0x0194 },
    CaseException { from: 0x0265, to: 0xA78D },
    CaseException { from: 0x0266, to: 0xA7AA },
    CaseException { from: 0x0268, to: 0x0197 },
    CaseException { from: 0x0269, to: 0x0196 },
    CaseException { from: 0x026A, to: 0xA7AE },
    CaseException { from: 0x026B, to: 0x2C62 },
    CaseException { from: 0x026C, to: 0xA7AD },
    CaseException { from: 0x026F, to: 0x019C },
    CaseException { from: 0x0271, to: 0x2C6E },
    CaseException { from: 0x0272, to: 0x019D },
    CaseException { from: 0x0275, to: 0x019F },
    CaseException { from: 0x027D, to: 0x2C64 },
    CaseException { from: 0x0280, to: 0x01A6 },
    CaseException { from: 0x0282, to: 0xA7C5 },
    CaseException { from: 0x0283, to: 0x01A9 },
    CaseException { from: 0x0287, to: 0xA7B1 },
    CaseException { from: 0x0288, to: 0x01AE },
    CaseException { from: 0x0289, to: 0x0244 },
    CaseException { from: 0x028A, to: 0x01B1 },
    CaseException { from: 0x028B, to: 0x01B2 },
    CaseException { from: 0x028C, to: 0x0245 },
    CaseException { from: 0x0292, to: 0x01B7 },
    CaseException { from: 0x029D, to: 0xA7B2 },
    CaseException { from: 0x029E, to: 0xA7B0 },
    CaseException { from: 0x0345, to: 0x0399 },
    CaseException { from: 0x0371, to: 0x0370 },
    CaseException { from: 0x0373, to: 0x0372 },
    CaseException { from: 0x0377, to: 0x0376 },
    CaseException { from: 0x037B, to: 0x03FD },
    CaseException { from: 0x037C, to: 0x03FE },
    CaseException { from: 0x037D, to: 0x03FF },
    CaseException { from: 0x03AC, to: 0x0386 },
    CaseException { from: 0x03AD, to: 0x0388 },
    CaseException { from: 0x03AE, to: 0x0389 },
    CaseException { from: 0x03AF, to: 0x038A },
    CaseException { from: 0x03C2, to: 0x03A3 },
    CaseException { from: 0x03CC, to: 0x038C },
    CaseException { from: 0x03CD, to: 0x038E },
    CaseException { from: 0x03CE, to: 0x038F },
    CaseException { from: 0x03D0, to: 0x0392 },
    CaseException { from: 0x03D1, to: 0x0398 },
    CaseException { from: 0x03D5, to: 0x03A6 },
    CaseException { from: 0x03D6, to: 0x03A0 },
    CaseException { from: 0x03D7, to: 0x03CF },
    CaseException { from: 0x03D9, to: 0x03D8 },
    CaseException { from: 0x03DB, to: 0x03DA },
    CaseException { from: 0x03DD, to: 0x03DC },
    CaseException { from: 0x03DF, to: 0x03DE },
    CaseException { from: 0x03E1, to: 0x03E0 },
    CaseException { from: 0x03E3, to: 0x03E2 },
    CaseException { from: 0x03E5, to: 0x03E4 },
    CaseException { from: 0x03E7, to: 0x03E6 },
    CaseException { from: 0x03E9, to: 0x03E8 },
    CaseException { from: 0x03EB, to: 0x03EA },
    CaseException { from: 0x03ED, to: 0x03EC },
    CaseException { from: 0x03EF, to: 0x03EE },
    CaseException { from: 0x03F0, to: 0x039A },
    CaseException { from: 0x03F1, to: 0x03A1 },
    CaseException { from: 0x03F2, to: 0x03F9 },
    CaseException { from: 0x03F3, to: 0x037F },
    CaseException { from: 0x03F5, to: 0x0395 },
    CaseException { from: 0x03F8, to: 0x03F7 },
    CaseException { from: 0x03FB, to: 0x03FA },
    CaseException { from: 0x0461, to: 0x0460 },
    CaseException { from: 0x0463, to: 0x0462 },
    CaseException { from: 0x0465, to: 0x0464 },
    CaseException { from: 0x0467, to: 0x0466 },
    CaseException { from: 0x0469, to: 0x0468 },
    CaseException { from: 0x046B, to: 0x046A },
    CaseException { from: 0x046D, to: 0x046C },
    CaseException { from: 0x046F, to: 0x046E },
    CaseException { from: 0x0471, to: 0x0470 },
    CaseException { from: 0x0473, to: 0x0472 },
    CaseException { from: 0x0475, to: 0x0474 },
    CaseException { from: 0x0477, to: 0x0476 },
    CaseException { from: 0x0479, to: 0x0478 },
    CaseException { from: 0x047B, to: 0x047A },
    CaseException { from: 0x047D, to: 0x047C },
    CaseException { from: 0x047F, to: 0x047E },
    CaseException { from: 0x0481, to: 0x0480 },
    CaseException { from: 0x048B, to: 0x048A },
    CaseException { from: 0x048D, to: 0x048C },
    CaseException { from: 0x048F, to: 0x048E },
    CaseException { from: 0x0491, to: 0x0490 },
    CaseException { from: 0x0493, to: 0x0492 },
    CaseException { from: 0x0495, to: 0x0494 },
    CaseException { from: 0x0497, to: 0x0496 },
    CaseException { from: 0x0499, to: 0x0498 },
    CaseException { from: 0x049B, to: 0x049A },
    CaseException { from: 0x049D, to: 0x049C },
    CaseException { from: 0x049F, to: 0x049E },
    CaseException { from: 0x04A1, to: 0x04A0 },
    CaseException { from: 0x04A3, to: 0x04A2 },
    CaseException { from: 0x04A5, to: 0x04A4 },
    CaseException { from: 0x04A7, to: 0x04A6 },
    CaseException { from: 0x04A9, to: 0x04A8 },
    CaseException { from: 0x04AB, to: 0x04AA },
    CaseException { from: 0x04AD, to: 0x04AC },
    CaseException { from: 0x04AF, to: 0x04AE },
    CaseException { from: 0x04B1, to: 0x04B0 },
    CaseException { from: 0x04B3, to: 0x04B2 },
    CaseException { from: 0x04B5, to: 0x04B4 },
    CaseException { from: 0x04B7, to: 0x04B6 },
    CaseException { from: 0x04B9, to: 0x04B8 },
    CaseException { from: 0x04BB, to: 0x04BA },
    CaseException { from: 0x04BD, to: 0x04BC },
    CaseException { from: 0x04BF, to: 0x04BE },
    CaseException { from: 0x04C2, to: 0x04C1 },
    CaseException { from: 0x04C4, to: 0x04C3 },
    CaseException { from: 0x04C6, to: 0x04C5 },
    CaseException { from: 0x04C8, to: 0x04C7 },
    CaseException { from: 0x04CA, to: 0x04C9 },
    CaseException { from: 0x04CC, to: 0x04CB },
    CaseException { from: 0x04CE, to: 0x04CD },
    CaseException { from: 0x04CF, to: 0x04C0 },
    CaseException { from: 0x04D1, to: 0x04D0 },
    CaseException { from: 0x04D3, to: 0x04D2 },
    CaseException { from: 0x04D5, to: 0x04D4 },
    CaseException { from: 0x04D7, to: 0x04D6 },
    CaseException { from: 0x04D9, to: 0x04D8 },
    CaseException { from: 0x04DB, to: 0x04DA },
    CaseException { from: 0x04DD, to: 0x04DC },
    CaseException { from: 0x04DF, to: 0x04DE },
    CaseException { from: 0x04E1, to: 0x04E0 },
    CaseException { from: 0x04E3, to: 0x04E2 },
    CaseException { from: 0x04E5, to: 0x04E4 },
    CaseException { from: 0x04E7, to: 0x04E6 },
    CaseException { from: 0x04E9, to: 0x04E8 },
    CaseException { from: 0x04EB, to: 0x04EA },
    CaseException { from: 0x04ED, to: 0x04EC },
    CaseException { from: 0x04EF, to: 0x04EE },
    CaseException { from: 0x04F1, to: 0x04F0 },
    CaseException { from: 0x04F3, to: 0x04F2 },
    CaseException { from: 0x04F5, to: 0x04F4 },
    CaseException { from: 0x04F7, to: 0x04F6 },
    CaseException { from: 0x04F9, to: 0x04F8 },
    CaseException { from: 0x04FB, to: 0x04FA },
    CaseException { from: 0x04FD, to: 0x04FC },
    CaseException { from: 0x04FF, to: 0x04FE },
    CaseException { from: 0x0501, to: 0x0500 },
    CaseException { from: 0x0503, to: 0x0502 },
    CaseException { from: 0x0505, to: 0x0504 },
    CaseException { from: 0x0507, to: 0x0506 },
    CaseException { from: 0x0509, to: 0x0508 },
    CaseException { from: 0x050B, to: 0x050A },
    CaseException { from: 0x050D, to: 0x050C },
    CaseException { from: 0x050F, to: 0x050E },
    CaseException { from: 0x0511, to: 0x0510 },
    CaseException { from: 0x0513, to: 0x0512 },
    CaseException { from: 0x0515, to: 0x0514 },
    CaseException { from: 0x0517, to: 0x0516 },
    CaseException { from: 0x0519, to: 0x0518 },
    CaseException { from: 0x051B, to: 0x051A },
    CaseException { from: 0x051D, to: 0x051C },
    CaseException { from: 0x051F, to: 0x051E },
    CaseException { from: 0x0521, to: 0x0520 },
    CaseException { from: 0x0523, to: 0x0522 },
    CaseException { from: 0x0525, to: 0x0524 },
    CaseException { from: 0x0527, to: 0x0526 },
    CaseException { from: 0x0529, to: 0x0528 },
    CaseException { from: 0x052B, to: 0x052A },
    CaseException { from: 0x052D, to: 0x052C },
    CaseException { from: 0x052F, to: 0x052E },
    CaseException { from: 0x0580, to: 0x0550 },
    CaseException { from: 0x0581, to: 0x0551 },
    CaseException { from: 0x0582, to: 0x0552 },
    CaseException { from: 0x0583, to: 0x0553 },
    CaseException { from: 0x0584, to: 0x0554 },
    CaseException { from: 0x0585, to: 0x0555 },
    CaseException { from: 0x0586, to: 0x0556 },
    CaseException { from: 0x1C80, to: 0x0412 },
    CaseException { from: 0x1C81, to: 0x0414 },
    CaseException { from: 0x1C82, to: 0x041E },
    CaseException { from: 0x1C83, to: 0x0421 },
    CaseException { from: 0x1C84, to: 0x0422 },
    CaseException { from: 0x1C85, to: 0x0422 },
    CaseException { from: 0x1C86, to: 0x042A },
    CaseException { from: 0x1C87, to: 0x0462 },
    CaseException { from: 0x1C88, to: 0xA64A },
    CaseException { from: 0x1D79, to: 0xA77D },
    CaseException { from: 0x1D7D, to: 0x2C63 },
    CaseException { from: 0x1D8E, to: 0xA7C6 },
    CaseException { from: 0x1E01, to: 0x1E00 },
    CaseException { from: 0x1E03, to: 0x1E02 },
    CaseException { from: 0x1E05, to: 0x1E04 },
    CaseException { from: 0x1E07, to: 0x1E06 },
    CaseException { from: 0x1E09, to: 0x1E08 },
    CaseException { from: 0x1E0B, to: 0x1E0A },
    CaseException { from: 0x1E0D, to: 0x1E0C },
    CaseException { from: 0x1E0F, to: 0x1E0E },
    CaseException { from: 0x1E11, to: 0x1E10 },
    CaseException { from: 0x1E13, to: 0x1E12 },
    CaseException { from: 0x1E15, to: 0x1E14 },
    CaseException { from: 0x1E17, to: 0x1E16 },
    CaseException { from: 0x1E19, to: 0x1E18 },
    CaseException { from: 0x1E1B, to: 0x1E1A },
    CaseException { from: 0x1E1D, to: 0x1E1C },
    CaseException { from: 0x1E1F, to: 0x1E1E },
    CaseException { from: 0x1E21, to: 0x1E20 },
    CaseException { from: 0x1E23, to: 0x1E22 },
    CaseException { from: 0x1E25, to: 0x1E24 },
    CaseException { from: 0x1E27, to: 0x1E26 },
    CaseException { from: 0x1E29, to: 0x1E28 },
    CaseException { from: 0x1E2B, to: 0x1E2A },
    CaseException { from: 0x1E2D, to: 0x1E2C },
    CaseException { from: 0x1E2F, to: 0x1E2E },
    CaseException { from: 0x1E31, to: 0x1E30 },
    CaseException { from: 0x1E33, to: 0x1E32 },
    CaseException { from: 0x1E35, to: 0x1E34 },
    CaseException { from: 0x1E37, to: 0x1E36 },
    CaseException { from: 0x1E39, to: 0x1E38 },
    CaseException { from: 0x1E3B, to: 0x1E3A },
    CaseException { from: 0x1E3D, to: 0x1E3C },
    CaseException { from: 0x1E3F, to: 0x1E3E },
    CaseException { from: 0x1E41, to: 0x1E40 },
    CaseException { from: 0x1E43, to: 0x1E42 },
    CaseException { from: 0x1E45, to: 0x1E44 },
    CaseException { from: 0x1E47, to: 0x1E46 },
    CaseException { from: 0x1E49, to: 0x1E48 },
    CaseException { from: 0x1E4B, to: 0x1E4A },
    CaseException { from: 0x1E4D, to: 0x1E4C },
    CaseException { from: 0x1E4F, to: 0x1E4E },
    CaseException { from: 0x1E51, to: 0x1E50 },
    CaseException { from: 0x1E53, to: 0x1E52 },
    CaseException { from: 0x1E55, to: 0x1E54 },
    CaseException { from: 0x1E57, to: 0x1E56 },
    CaseException { from: 0x1E59, to: 0x1E58 },
    CaseException { from: 0x1E5B, to: 0x1E5A },
    CaseException { from: 0x1E5D, to: 0x1E5C },
    CaseException { from: 0x1E5F, to: 0x1E5E },
    CaseException { from: 0x1E61, to: 0x1E60 },
    CaseException { from: 0x1E63, to: 0x1E62 },
    CaseException { from: 0x1E65, to: 0x1E64 },
    CaseException { from: 0x1E67, to: 0x1E66 },
    CaseException { from: 0x1E69, to: 0x1E68 },
    CaseException { from: 0x1E6B, to: 0x1E6A },
    CaseException { from: 0x1E6D, to: 0x1E6C },
    CaseException { from: 0x1E6F, to: 0x1E6E },
    CaseException { from: 0x1E71, to: 0x1E70 },
    CaseException { from: 0x1E73, to: 0x1E72 },
    CaseException { from: 0x1E75, to: 0x1E74 },
    CaseException { from: 0x1E77, to: 0x1E76 },
    CaseException { from: 0x1E79, to: 0x1E78 },
    CaseException { from: 0x1E7B, to: 0x1E7A },
    CaseException { from: 0x1E7D, to: 0x1E7C },
    CaseException { from: 0x1E7F, to: 0x1E7E },
    CaseException { from: 0x1E81, to: 0x1E80 },
    CaseException { from: 0x1E83, to: 0x1E82 },
    CaseException { from: 0x1E85, to: 0x1E84 },
    CaseException { from: 0x1E87, to: 0x1E86 },
    CaseException { from: 0x1E89, to: 0x1E88 },
    CaseException { from: 0x1E8B, to: 0x1E8A },
    CaseException { from: 0x1E8D, to: 0x1E8C },
    CaseException { from: 0x1E8F, to: 0x1E8E },
    CaseException { from: 0x1E91, to: 0x1E90 },
    CaseException { from: 0x1E93, to: 0x1E92 },
    CaseException { from: 0x1E95, to: 0x1E94 },
    CaseException { from: 0x1E9B, to: 0x1E60 },
    CaseException { from: 0x1EA1, to: 0x1EA0 },
    CaseException { from: 0x1EA3, to: 0x1EA2 },
    CaseException { from: 0x1EA5, to: 0x1EA4 },
    CaseException { from: 0x1EA7, to: 0x1EA6 },
    CaseException { from: 0x1EA9, to: 0x1EA8 },
    CaseException { from: 0x1EAB, to: 0x1EAA },
    CaseException { from: 0x1EAD, to: 0x1EAC },
    CaseException { from: 0x1EAF, to: 0x1EAE },
    CaseException { from: 0x1EB1, to: 0x1EB0 },
    CaseException { from: 0x1EB3, to: 0x1EB2 },
    CaseException { from: 0x1EB5, to: 0x1EB4 },
    CaseException { from: 0x1EB7, to: 0x1EB6 },
    CaseException { from: 0x1EB9, to: 0x1EB8 },
    CaseException { from: 0x1EBB, to: 0x1EBA },
    CaseException { from: 0x1EBD, to: 0x1EBC },
    CaseException { from: 0x1EBF, to: 0x1EBE },
    CaseException { from: 0x1EC1, to: 0x1EC0 },
    CaseException { from: 0x1EC3, to: 0x1EC2 },
    CaseException { from: 0x1EC5, to: 0x1EC4 },
    CaseException { from: 0x1EC7, to: 0x1EC6 },
    CaseException { from: 0x1EC9, to: 0x1EC8 },
    CaseException { from: 0x1ECB, to: 0x1ECA },
    CaseException { from: 0x1ECD, to: 0x1ECC },
    CaseException { from: 0x1ECF, to: 0x1ECE },
    CaseException { from: 0x1ED1, to: 0x1ED0 },
    CaseException { from: 0x1ED3, to: 0x1ED2 },
    CaseException { from: 0x1ED5, to: 0x1ED4 },
    CaseException { from: 0x1ED7, to: 0x1ED6 },
    CaseException { from: 0x1ED9, to: 0x1ED8 },
    CaseException { from: 0x1EDB, to: 0x1EDA },
    CaseException { from: 0x1EDD, to: 0x1EDC },
    CaseException { from: 0x1EDF, to: 0x1EDE },
    CaseException { from: 0x1EE1, to: 0x1EE0 },
    CaseException { from: 0x1EE3, to: 0x1EE2 },
    CaseException { from: 0x1EE5, to: 0x1EE4 },
    CaseException { from: 0x1EE7, to: 0x1EE6 },
    CaseException { from: 0x1EE9, to: 0x1EE8 },
    CaseException { from: 0x1EEB, to: 0x1EEA },
    CaseException { from: 0x1EED, to: 0x1EEC },
    CaseException { from: 0x1EEF, to: 0x1EEE },
    CaseException { from: 0x1EF1, to: 0x1EF0 },
    CaseException { from: 0x1EF3, to: 0x1EF2 },
    CaseException { from: 0x1EF5, to: 0x1EF4 },
    CaseException { from: 0x1EF7, to: 0x1EF6 },
    CaseException { from: 0x1EF9, to: 0x1EF8 },
    CaseException { from: 0x1EFB, to: 0x1EFA },
    CaseException { from: 0x1EFD, to: 0x1EFC },
    CaseException { from: 0x1EFF, to: 0x1EFE },
    CaseException { from: 0x1F51, to: 0x1F59 },
    CaseException { from: 0x1F53, to: 0x1F5B },
    CaseException { from: 0x1F55, to: 0x1F5D },
    CaseException { from: 0x1F57, to: 0x1F5F },
    CaseException { from: 0x1F70, to: 0x1FBA },
    CaseException { from: 0x1F71, to: 0x1FBB },
    CaseException { from: 0x1F72, to: 0x1FC8 },
    CaseException { from: 0x1F73, to: 0x1FC9 },
    CaseException { from: 0x1F74, to: 0x1FCA },
    CaseException { from: 0x1F75, to: 0x1FCB },
    CaseException { from: 0x1F76, to: 0x1FDA },
    CaseException { from: 0x1F77, to: 0x1FDB },
    CaseException { from: 0x1F78, to: 0x1FF8 },
    CaseException { from: 0x1F79, to: 0x1FF9 },
    CaseException { from: 0x1F7A, to: 0x1FEA },
    CaseException { from: 0x1F7B, to: 0x1FEB },
    CaseException { from: 0x1F7C, to: 0x1FFA },
    CaseException { from: 0x1F7D, to: 0x1FFB },
    CaseException { from: 0x1FB3, to: 0x1FBC },
    CaseException { from: 0x1FBE, to: 0x0399 },
    CaseException { from: 0x1FC3, to: 0x1FCC },
    CaseException { from: 0x1FE5, to: 0x1FEC },
    CaseException { from: 0x1FF3, to: 0x1FFC },
    CaseException { from: 0x214E, to: 0x2132 },
    CaseException { from: 0x2184, to: 0x2183 },
    CaseException { from: 0x24D0, to: 0x24B6 },
    CaseException { from: 0x24D1, to: 0x24B7 },
    CaseException { from: 0x24D2, to: 0x24B8 },
    CaseException { from: 0x24D3, to: 0x24B9 },
    CaseException { from: 0x24D4, to: 0x24BA },
    CaseException { from: 0x24D5, to: 0x24BB },
    CaseException { from: 0x24D6, to: 0x24BC },
    CaseException { from: 0x24D7, to: 0x24BD },
    CaseException { from: 0x24D8, to: 0x24BE },
    CaseException { from: 0x24D9, to: 0x24BF },
    CaseException { from: 0x24DA, to: 0x24C0 },
    CaseException { from: 0x24DB, to: 0x24C1 },
    CaseException { from: 0x24DC, to: 0x24C2 },
    CaseException { from: 0x24DD, to: 0x24C3 },
    CaseException { from: 0x24DE, to: 0x24C4 },
    CaseException { from: 0x24DF, to: 0x24C5 },
    CaseException { from: 0x24E0, to: 0x24C6 },
    CaseException { from: 0x24E1, to: 0x24C7 },
    CaseException { from: 0x24E2, to: 0x24C8 },
    CaseException { from: 0x24E3, to: 0x24C9 },
    CaseException { from: 0x24E4, to: 0x24CA },
    CaseException { from: 0x24E5, to: 0x24CB },
    CaseException { from: 0x24E6, to: 0x24CC },
    CaseException { from: 0x24E7, to: 0x24CD },
    CaseException { from: 0x24E8, to: 0x24CE },
    CaseException { from: 0x24E9, to: 0x24CF },
    CaseException { from: 0x2C61, to: 0x2C60 },
    CaseException { from: 0x2C65, to: 0x023A },
    CaseException { from: 0x2C66, to: 0x023E },
    CaseException { from: 0x2C68, to: 0x2C67 },
    CaseException { from: 0x2C6A, to: 0x2C69 },
    CaseException { from: 0x2C6C, to: 0x2C6B },
    CaseException { from: 0x2C73, to: 0x2C72 },
    CaseException { from: 0x2C76, to: 0x2C75 },
    CaseException { from: 0x2C81, to: 0x2C80 },
    CaseException { from: 0x2C83, to: 0x2C82 },
    CaseException { from: 0x2C85, to: 0x2C84 },
    CaseException { from: 0x2C87, to: 0x2C86 },
    CaseException { from: 0x2C89, to: 0x2C88 },
    CaseException { from: 0x2C8B, to: 0x2C8A },
    CaseException { from: 0x2C8D, to: 0x2C8C },
    CaseException { from: 0x2C8F, to: 0x2C8E },
    CaseException { from: 0x2C91, to: 0x2C90 },
    CaseException { from: 0x2C93, to: 0x2C92 },
    CaseException { from: 0x2C95, to: 0x2C94 },
    CaseException { from: 0x2C97, to: 0x2C96 },
    CaseException { from: 0x2C99, to: 0x2C98 },
    CaseException { from: 0x2C9B, to: 0x2C9A },
    CaseException { from: 0x2C9D, to: 0x2C9C },
    CaseException { from: 0x2C9F, to: 0x2C9E },
    CaseException { from: 0x2CA1, to: 0x2CA0 },
    CaseException { from: 0x2CA3, to: 0x2CA2 },
    CaseException { from: 0x2CA5, to: 0x2CA4 },
    CaseException { from: 0x2CA7, to: 0x2CA6 },
    CaseException { from: 0x2CA9, to: 0x2CA8 },
    CaseException { from: 0x2CAB, to: 0x2CAA },
    CaseException { from: 0x2CAD, to: 0x2CAC },
    CaseException { from: 0x2CAF, to: 0x2CAE },
    CaseException { from: 0x2CB1, to: 0x2CB0 },
    CaseException { from: 0x2CB3, to: 0x2CB2 },
    CaseException { from: 0x2CB5, to: 0x2CB4 },
    CaseException { from: 0x2CB7, to: 0x2CB6 },
    CaseException { from: 0x2CB9, to: 0x2CB8 },
    CaseException { from: 0x2CBB, to: 0x2CBA },
    CaseException { from: 0x2CBD, to: 0x2CBC },
    CaseException { from: 0x2CBF, to: 0x2CBE },
    CaseException { from: 0x2CC1, to: 0x2CC0 },
    CaseException { from: 0x2CC3, to: 0x2CC2 },
    CaseException { from: 0x2CC5, to: 0x2CC4 },
    CaseException { from: 0x2CC7, to: 0x2CC6 },
    CaseException { from: 0x2CC9, to: 0x2CC8 },
    CaseException { from: 0x2CCB, to: 0x2CCA },
    CaseException { from: 0x2CCD, to: 0x2CCC },
    CaseException { from: 0x2CCF, to: 0x2CCE },
    CaseException { from: 0x2CD1, to: 0x2CD0 },
    CaseException { from: 0x2CD3, to: 0x2CD2 },
    CaseException { from: 0x2CD5, to: 0x2CD4 },
    CaseException { from: 0x2CD7, to: 0x2CD6 },
    CaseException { from: 0x2CD9, to: 0x2CD8 },
    CaseException { from: 0x2CDB, to: 0x2CDA },
    CaseException { from: 0x2CDD, to: 0x2CDC },
    CaseException { from: 0x2CDF, to: 0x2CDE },
    CaseException { from: 0x2CE1, to: 0x2CE0 },
    CaseException { from: 0x2CE3, to: 0x2CE2 },
    CaseException { from: 0x2CEC, to: 0x2CEB },
    CaseException { from: 0x2CEE, to: 0x2CED },
    CaseException { from: 0x2CF3, to: 0x2CF2 },
    CaseException { from: 0x2D20, to: 0x10C0 },
    CaseException { from: 0x2D21, to: 0x10C1 },
    CaseException { from: 0x2D22, to: 0x10C2 },
    CaseException { from: 0x2D23, to: 0x10C3 },
    CaseException { from: 0x2D24, to: 0x10C4 },
    CaseException { from: 0x2D25, to: 0x10C5 },
    CaseException { from: 0x2D27, to: 0x10C7 },
    CaseException { from: 0x2D2D, to: 0x10CD },
    CaseException { from: 0xA641, to: 0xA640 },
    CaseException { from: 0xA643, to: 0xA642 },
    CaseException { from: 0xA645, to: 0xA644 },
    CaseException { from: 0xA647, to: 0xA646 },
    CaseException { from: 0xA649, to: 0xA648 },
    CaseException { from: 0xA64B, to: 0xA64A },
    CaseException { from: 0xA64D, to: 0xA64C },
    CaseException { from: 0xA64F, to: 0xA64E },
    CaseException { from: 0xA651, to: 0xA650 },
    CaseException { from: 0xA653, to: 0xA652 },
    CaseException { from: 0xA655, to: 0xA654 },
    CaseException { from: 0xA657, to: 0xA656 },
    CaseException { from: 0xA659, to: 0xA658 },
    CaseException { from: 0xA65B, to: 0xA65A },
    CaseException { from: 0xA65D, to: 0xA65C },
    CaseException { from: 0xA65F, to: 0xA65E },
    CaseException { from: 0xA661, to: 0xA660 },
    CaseException { from: 0xA663, to: 0xA662 },
    CaseException { from: 0xA665, to: 0xA664 },
    CaseException { from: 0xA667, to: 0xA666 },
    CaseException { from: 0xA669, to: 0xA668 },
    CaseException { from: 0xA66B, to: 0xA66A },
    CaseException { from: 0xA66D, to: 0xA66C },
    CaseException { from: 0xA681, to: 0xA680 },
    CaseException { from: 0xA683, to: 0xA682 },
    CaseException { from: 0xA685, to: 0xA684 },
    CaseException { from: 0xA687, to: 0xA686 },
    CaseException { from: 0xA689, to: 0xA688 },
    CaseException { from: 0xA68B, to: 0xA68A },
    CaseException { from: 0xA68D, to: 0xA68C },
    CaseException { from: 0xA68F, to: 0xA68E },
    CaseException { from: 0xA691, to: 0xA690 },
    CaseException { from: 0xA693, to: 0xA692 },
    CaseException { from: 0xA695, to: 0xA694 },
    CaseException { from: 0xA697, to: 0xA696 },
    CaseException { from: 0xA699, to: 0xA698 },
    CaseException { from: 0xA69B, to: 0xA69A },
    CaseException { from: 0xA723, to: 0xA722 },
    CaseException { from: 0xA725, to: 0xA724 },
    CaseException { from: 0xA727, to: 0xA726 },
    CaseException { from: 0xA729, to: 0xA728 },
    CaseException { from: 0xA72B, to: 0xA72A },
    CaseException { from: 0xA72D, to: 0xA72C },
    CaseException { from: 0xA72F, to: 0xA72E },
    CaseException { from: 0xA733, to: 0xA732 },
    CaseException { from: 0xA735, to: 0xA734 },
    CaseException { from: 0xA737, to: 0xA736 },
    CaseException { from: 0xA739, to: 0xA738 },
    CaseException { from: 0xA73B, to: 0xA73A },
    CaseException { from: 0xA73D, to: 0xA73C },
    CaseException { from: 0xA73F, to: 0xA73E },
    CaseException { from: 0xA741, to: 0xA740 },
    CaseException { from: 0xA743, to: 0xA742 },
    CaseException { from: 0xA745, to: 0xA744 },
    CaseException { from: 0xA747, to: 0xA746 },
    CaseException { from: 0xA749, to: 0xA748 },
    CaseException { from: 0xA74B, to: 0xA74A },
    CaseException { from: 0xA74D, to: 0xA74C },
    CaseException { from: 0xA74F, to: 0xA74E },
    CaseException { from: 0xA751, to: 0xA750 },
    CaseException { from: 0xA753, to: 0xA752 },
    CaseException { from: 0xA755, to: 0xA754 },
    CaseException { from: 0xA757, to: 0xA756 },
    CaseException { from: 0xA759, to: 0xA758 },
    CaseException { from: 0xA75B, to: 0xA75A },
    CaseException { from: 0xA75D, to: 0xA75C },
    CaseException { from: 0xA75F, to: 0xA75E },
    CaseException { from: 0xA761, to: 0xA760 },
    CaseException { from: 0xA763, to: 0xA762 },
    CaseException { from: 0xA765, to: 0xA764 },
    CaseException { from: 0xA767, to: 0xA766 },
    CaseException { from: 0xA769, to: 0xA768 },
    CaseException { from: 0xA76B, to: 0xA76A },
    CaseException { from: 0xA76D, to: 0xA76C },
    CaseException { from: 0xA76F, to: 0xA76E },
    CaseException { from: 0xA77A, to: 0xA779 },
    CaseException { from: 0xA77C, to: 0xA77B },
    CaseException { from: 0xA77F, to: 0xA77E },
    CaseException { from: 0xA781, to: 0xA780 },
    CaseException { from: 0xA783, to: 0xA782 },
    CaseException { from: 0xA785, to: 0xA784 },
    CaseException { from: 0xA787, to: 0xA786 },
    CaseException { from: 0xA78C, to: 0xA78B },
    CaseException { from: 0xA791, to: 0xA790 },
    CaseException { from: 0xA793, to: 0xA792 },
    CaseException { from: 0xA794, to: 0xA7C4 },
    CaseException { from: 0xA797, to: 0xA796 },
    CaseException { from: 0xA799, to: 0xA798 },
    CaseException { from: 0xA79B, to: 0xA79A },
    CaseException { from: 0xA79D, to: 0xA79C },
    CaseException { from: 0xA79F, to: 0xA79E },
    CaseException { from: 0xA7A1, to: 0xA7A0 },
    CaseException { from: 0xA7A3, to: 0xA7A2 },
    CaseException { from: 0xA7A5, to: 0xA7A4 },
    CaseException { from: 0xA7A7, to: 0xA7A6 },
    CaseException { from: 0xA7A9, to: 0xA7A8 },
    CaseException { from: 0xA7B5, to: 0xA7B4 },
    CaseException { from: 0xA7B7, to: 0xA7B6 },
    CaseException { from: 0xA7B9, to: 0xA7B8 },
    CaseException { from: 0xA7BB, to: 0xA7BA },
    CaseException { from: 0xA7BD, to: 0xA7BC },
    CaseException { from: 0xA7BF, to: 0xA7BE },
    CaseException { from: 0xA7C1, to: 0xA7C0 },
    CaseException { from: 0xA7C3, to: 0xA7C2 },
    CaseException { from: 0xA7C8, to: 0xA7C7 },
    CaseException { from: 0xA7CA, to: 0xA7C9 },
    CaseException { from: 0xA7D1, to: 0xA7D0 },
    CaseException { from: 0xA7D7, to: 0xA7D6 },
    CaseException { from: 0xA7D9, to: 0xA7D8 },
    CaseException { from: 0xA7F6, to: 0xA7F5 },
    CaseException { from: 0xAB53, to: 0xA7B3 },
];
pub const DOWNCASE_RANGE_COUNT: usize = 37;
pub const DOWNCASE_EXCEPTION_COUNT: usize = 684;
pub static DOWNCASE_RANGES: [CaseRange; DOWNCASE_RANGE_COUNT] = [
    CaseRange { xor: 0x0020, start: 0x0041, end: 0x005A },
    CaseRange { xor: 0x0020, start: 0x00C0, end: 0x00D6 },
    CaseRange { xor: 0x0020, start: 0x00D8, end: 0x00DE },
    CaseRange { xor: 0x0020, start: 0x0391, end: 0x039F },
    CaseRange { xor: 0x0060, start: 0x03A0, end: 0x03A1 },
    CaseRange { xor: 0x0060, start: 0x03A3, end: 0x03AB },
    CaseRange { xor: 0x0050, start: 0x0400, end: 0x040F },
    CaseRange { xor: 0x0020, start: 0x0410, end: 0x041F },
    CaseRange { xor: 0x0060, start: 0x0420, end: 0x042F },
    CaseRange { xor: 0x0050, start: 0x0531, end: 0x053F },
    CaseRange { xor: 0x0030, start: 0x0540, end: 0x054F },
    CaseRange { xor: 0x3DA0, start: 0x10A0, end: 0x10BF },
    CaseRange { xor: 0xB8D0, start: 0x13A0, end: 0x13AF },
    CaseRange { xor: 0xB830, start: 0x13B0, end: 0x13BF },
    CaseRange { xor: 0xB850, start: 0x13C0, end: 0x13CF },
    CaseRange { xor: 0xB870, start: 0x13D0, end: 0x13DF },
    CaseRange { xor: 0xB850, start: 0x13E0, end: 0x13EF },
    CaseRange { xor: 0x0008, start: 0x13F0, end: 0x13F5 },
    CaseRange { xor: 0x0C40, start: 0x1C90, end: 0x1CBA },
    CaseRange { xor: 0x0C40, start: 0x1CBD, end: 0x1CBF },
    CaseRange { xor: 0x0008, start: 0x1F08, end: 0x1F0F },
    CaseRange { xor: 0x0008, start: 0x1F18, end: 0x1F1D },
    CaseRange { xor: 0x0008, start: 0x1F28, end: 0x1F2F },
    CaseRange { xor: 0x0008, start: 0x1F38, end: 0x1F3F },
    CaseRange { xor: 0x0008, start: 0x1F48, end: 0x1F4D },
    CaseRange { xor: 0x0008, start: 0x1F68, end: 0x1F6F },
    CaseRange { xor: 0x0008, start: 0x1F88, end: 0x1F8F },
    CaseRange { xor: 0x0008, start: 0x1F98, end: 0x1F9F },
    CaseRange { xor: 0x0008, start: 0x1FA8, end: 0x1FAF },
    CaseRange { xor: 0x0008, start: 0x1FB8, end: 0x1FB9 },
    CaseRange { xor: 0x0008, start: 0x1FD8, end: 0x1FD9 },
    CaseRange { xor: 0x0008, start: 0x1FE8, end: 0x1FE9 },
    CaseRange { xor: 0x0010, start: 0x2160, end: 0x216F },
    CaseRange { xor: 0x0030, start: 0x2C00, end: 0x2C0F },
    CaseRange { xor: 0x0050, start: 0x2C10, end: 0x2C1F },
    CaseRange { xor: 0x0070, start: 0x2C20, end: 0x2C2F },
    CaseRange { xor: 0x0060, start: 0xFF21, end: 0xFF3A },
];
pub static DOWNCASE_EXCEPTIONS: [CaseException; DOWNCASE_EXCEPTION_COUNT] = [
    CaseException { from: 0x0100, to: 0x0101 },
    CaseException { from: 0x0102, to: 0x0103 },
    CaseException { from: 0x0104, to: 0x0105 },
    CaseException { from: 0x0106, to: 0x0107 },
    CaseException { from: 0x0108, to: 0x0109 },
    CaseException { from: 0x010A, to: 0x010B },
    CaseException { from: 0x010C, to: 0x010D },
    CaseException { from: 0x010E, to: 0x010F },
    CaseException { from: 0x0110, to: 0x0111 },
    CaseException { from: 0x0112, to: 0x0113 },
    CaseException { from: 0x0114, to: 0x0115 },
    CaseException { from: 0x0116, to: 0x0117 },
    CaseException { from: 0x0118, to: 0x0119 },
    CaseException { from: 0x011A, to: 0x011B },
    CaseException { from: 0x011C, to: 0x011D },
    CaseException { from: 0x011E, to: 0x011F },
    CaseException { from: 0x0120, to: 0x0121 },
    CaseException { from: 0x0122, to: 0x0123 },
    CaseException { from: 0x0124, to: 0x0125 },
    CaseException { from: 0x0126, to: 0x0127 },
    CaseException { from: 0x0128, to: 0x0129 },
    CaseException { from: 0x012A, to: 0x012B },
    CaseException { from: 0x012C, to: 0x012D },
    CaseException { from: 0x012E, to: 0x012F },
    CaseException { from: 0x0130, to: 0x0069 },
    CaseException { from: 0x0132, to: 0x0133 },
    CaseException { from: 0x0134, to: 0x0135 },
    CaseException { from: 0x0136, to: 0x0137 },
    CaseException { from: 0x0139, to: 0x013A },
    CaseException { from: 0x013B, to: 0x013C },
    CaseException { from: 0x013D, to: 0x013E },
    CaseException { from: 0x013F, to: 0x0140 },
    CaseException { from: 0x0141, to: 0x0142 },
    CaseException { from: 0x0143, to: 0x0144 },
    CaseException { from: 0x0145, to: 0x0146 },
    CaseException { from: 0x0147, to: 0x0148 },
    CaseException { from: 0x014A, to: 0x014B },
    CaseException { from: 0x014C, to: 0x014D },
    CaseException { from: 0x014E, to: 0x014F },
    CaseException { from: 0x0150, to: 0x0151 },
    CaseException { from: 0x0152, to: 0x0153 },
    CaseException { from: 0x0154, to: 0x0155 },
    CaseException { from: 0x0156, to: 0x0157 },
    CaseException { from: 0x0158, to: 0x0159 },
    CaseException { from: 0x015A, to: 0x015B },
    CaseException { from: 0x015C, to: 0x015D },
    CaseException { from: 0x015E, to: 0x015F },
    CaseException { from: 0x0160, to: 0x0161 },
    CaseException { from: 0x0162, to: 0x0163 },
    CaseException { from: 0x0164, to: 0x0165 },
    CaseException { from: 0x0166, to: 0x0167 },
    CaseException { from: 0x0168, to: 0x0169 },
    CaseException { from: 0x016A, to: 0x016B },
    CaseException { from: 0x016C, to: 0x016D },
    CaseException { from: 0x016E, to: 0x016F },
    CaseException { from: 0x0170, to: 0x0171 },
    CaseException { from: 0x0172, to: 0x0173 },
    CaseException { from: 0x0174, to: 0x0175 },
    CaseException { from: 0x0176, to: 0x0177 },
    CaseException { from: 0x0178, to: 0x00FF },
    CaseException { from: 0x0179, to: 0x017A },
    CaseException { from: 0x017B, to: 0x017C },
    CaseException { from: 0x017D, to: 0x017E },
    CaseException { from: 0x0181, to: 0x0253 },
    CaseException { from: 0x0182, to: 0x0183 },
    CaseException { from: 0x0184, to: 0x0185 },
    CaseException { from: 0x0186, to: 0x0254 },
    CaseException { from: 0x0187, to: 0x0188 },
    CaseException { from: 0x0189, to: 0x0256 },
    CaseException { from: 0x018A, to: 0x0257 },
    CaseException { from: 0x018B, to: 0x018C },
    CaseException { from: 0x018E, to: 0x01DD },
    CaseException { from: 0x018F, to: 0x0259 },
    CaseException { from: 0x0190, to: 0x025B },
    CaseException { from: 0x0191, to: 0x0192 },
    CaseException { from: 0x0193, to: 0x0260 },
    CaseException { from: 0x0194, to: 0x0263 },
    CaseException { from: 0x0196, to: 0x0269 },
    CaseException { from: 0x0197, to: 0x0268 },
    CaseException { from: 0x0198, to: 0x0199 },
    CaseException { from: 0x019C, to: 0x026F },
    CaseException { from: 0x019D, to: 0x0272 },
    CaseException { from: 0x019F, to: 0x0275 },
    CaseException { from: 0x01A0, to: 0x01A1 },
    CaseException { from: 0x01A2, to: 0x01A3 },
    CaseException { from: 0x01A4, to: 0x01A5 },
    CaseException { from: 0x01A6, to: 0x0280 },
    CaseException { from: 0x01A7, to: 0x01A8 },
    CaseException { from: 0x01A9, to: 0x0283 },
    CaseException { from: 0x01AC, to: 0x01AD },
    CaseException { from: 0x01AE, to: 0x0288 },
    CaseException { from: 0x01AF, to: 0x01B0 },
    CaseException { from: 0x01B1, to: 0x028A },
    CaseException { from: 0x01B2, to: 0x028B },
    CaseException { from: 0x01B3, to: 0x01B4 },
    CaseException { from: 0x01B5, to: 0x01B6 },
    CaseException { from: 0x01B7, to: 0x0292 },
    CaseException { from: 0x01B8, to: 0x01B9 },
    CaseException { from: 0x01BC, to: 0x01BD },
    CaseException { from: 0x01C4, to: 0x01C6 },
    CaseException { from: 0x01C5, to: 0x01C6 },
    CaseException { from: 0x01C7, to: 0x01C9 },
    CaseException { from: 0x01C8, to: 0x01C9 },
    CaseException { from: 0x01CA, to: 0x01CC },
    CaseException { from: 0x01CB, to: 0x01CC },
    CaseException { from: 0x01CD, to: 0x01CE },
    CaseException { from: 0x01CF, to: 0x01D0 },
    CaseException { from: 0x01D1, to: 0x01D2 },
    CaseException { from: 0x01D3, to: 0x01D4 },
    CaseException { from: 0x01D5, to: 0x01D6 },
    CaseException { from: 0x01D7, to: 0x01D8 },
    CaseException { from: 0x01D9, to: 0x01DA },
    CaseException { from: 0x01DB, to: 0x01DC },
    CaseException { from: 0x01DE, to: 0x01DF },
    CaseException { from: 0x01E0, to: 0x01E1 },
    CaseException { from: 0x01E2, to: 0x01E3 },
    CaseException { from: 0x01E4, to: 0x01E5 },
    CaseException { from: 0x01E6, to: 0x01E7 },
    CaseException { from: 0x01E8, to: 0x01E9 },
    CaseException { from: 0x01EA, to: 0x01EB },
    CaseException { from: 0x01EC, to: 0x01ED },
    CaseException { from: 0x01EE, to: 0x01EF },
    CaseException { from: 0x01F1, to: 0x01F3 },
    CaseException { from: 0x01F2, to: 0x01F3 },
    CaseException { from: 0x01F4, to: 0x01F5 },
    CaseException { from: 0x01F6, to: 0x0195 },
    CaseException { from: 0x01F7, to: 0x01BF },
    CaseException { from: 0x01F8, to: 0x01F9 },
    CaseException { from: 0x01FA, to: 0x01FB },
    CaseException { from: 0x01FC, to: 0x01FD },
    CaseException { from: 0x01FE, to: 0x01FF },
    CaseException { from: 0x0200, to: 0x0201 },
    CaseException { from: 0x0202, to: 0x0203 },
    CaseException { from: 0x0204, to: 0x0205 },
    CaseException { from: 0x0206, to: 0x0207 },
    CaseException { from: 0x0208, to: 0x0209 },
    CaseException { from: 0x020A, to: 0x020B },
    CaseException { from: 0x020C, to: 0x020D },
    CaseException { from: 0x020E, to: 0x020F },
    CaseException { from: 0x0210, to: 0x0211 },
    CaseException { from: 0x0212, to: 0x0213 },
    CaseException { from: 0x0214, to: 0x0215 },
    CaseException { from: 0x0216, to: 0x0217 },
    CaseException { from: 0x0218, to: 0x0219 },
    CaseException { from: 0x021A, to: 0x021B },
    CaseException { from: 0x021C, to: 0x021D },
    CaseException { from: 0x021E, to: 0x021F },
    CaseException { from: 0x0220, to: 0x019E },
    CaseException { from: 0x0222, to: 0x0223 },
    CaseException { from: 0x0224, to: 0x0225 },
    CaseException { from: 0x0226, to: 0x0227 },
    CaseException { from: 0x0228, to: 0x0229 },
    CaseException { from: 0x022A, to: 0x022B },
    CaseException { from: 0x022C, to: 0x022D },
    CaseException { from: 0x022E, to: 0x022F },
    CaseException { from: 0x0230, to: 0x0231 },
    CaseException { from: 0x0232, to: 0x0233 },
    CaseException { from: 0x023A, to: 0x2C65 },
    CaseException { from: 0x023B, to: 0x023C },
    CaseException { from: 0x023D, to: 0x019A },
    CaseException { from: 0x023E, to: 0x2C66 },
    CaseException { from: 0x0241, to: 0x0242 },
    CaseException { from: 0x0243, to: 0x0180 },
    CaseException { from: 0x0244, to: 0x0289 },
    CaseException { from: 0x0245, to: 0x028C },
    CaseException { from: 0x0246, to: 0x0247 },
    CaseException { from: 0x0248, to: 0x0249 },
    CaseException { from: 0x024A, to: 0x024B },
    CaseException { from: 0x024C, to: 0x024D },
    CaseException { from: 0x024E, to: 0x024F },
    CaseException { from: 0x0370, to: 0x0371 },
    CaseException { from: 0x0372, to: 0x0373 },
    CaseException { from: 0x0376, to: 0x0377 },
    CaseException { from: 0x037F, to: 0x03F3 },
    CaseException { from: 0x0386, to: 0x03AC },
    CaseException { from: 0x0388, to: 0x03AD },
    CaseException { from: 0x0389, to: 0x03AE },
    CaseException { from: 0x038A, to: 0x03AF },
    CaseException { from: 0x038C, to: 0x03CC },
    CaseException { from: 0x038E, to: 0x03CD },
    CaseException { from: 0x038F, to: 0x03CE },
    CaseException { from: 0x03CF, to: 0x03D7 },
    CaseException { from: 0x03D8, to: 0x03D9 },
    CaseException { from: 0x03DA, to: 0x03DB },
    CaseException { from: 0x03DC, to: 0x03DD },
    CaseException { from: 0x03DE, to: 0x03DF },
    CaseException { from: 0x03E0, to: 0x03E1 },
    CaseException { from: 0x03E2, to: 0x03E3 },
    CaseException { from: 0x03E4, to: 0x03E5 },
    CaseException { from: 0x03E6, to: 0x03E7 },
    CaseException { from: 0x03E8, to: 0x03E9 },
    CaseException { from: 0x03EA, to: 0x03EB },
    CaseException { from: 0x03EC, to: 0x03ED },
    CaseException { from: 0x03EE, to: 0x03EF },
    CaseException { from: 0x03F4, to: 0x03B8 },
    CaseException { from: 0x03F7, to: 0x03F8 },
    CaseException { from: 0x03F9, to: 0x03F2 },
    CaseException { from: 0x03FA, to: 0x03FB },
    CaseException { from: 0x03FD, to: 0x037B },
    CaseException { from: 0x03FE, to: 0x037C },
    CaseException { from: 0x03FF, to: 0x037D },
    CaseException { from: 0x0460, to: 0x0461 },
    CaseException { from: 0x0462, to: 0x0463 },
    CaseException { from: 0x0464, to: 0x0465 },
    CaseException { from: 0x0466, to: 0x0467 },
    CaseException { from: 0x0468, to: 0x0469 },
    CaseException { from: 0x046A, to: 0x046B },
    CaseException { from: 0x046C, to: 0x046D },
    CaseException { from: 0x046E, to: 0x046F },
    CaseException { from: 0x0470, to: 0x0471 },
    CaseException { from: 0x0472, to: 0x0473 },
    CaseException { from: 0x0474, to: 0x0475 },
    CaseException { from: 0x0476, to: 0x0477 },
    CaseException { from: 0x0478, to: 0x0479 },
    CaseException { from: 0x047A, to: 0x047B },
    CaseException { from: 0x047C, to: 0x047D },
    CaseException { from: 0x047E, to: 0x047F },
    CaseException { from: 0x0480, to: 0x0481 },
    CaseException { from: 0x048A, to: 0x048B },
    CaseException { from: 0x048C, to: 0x048D },
    CaseException { from: 0x048E, to: 0x048F },
    CaseException { from: 0x0490, to: 0x0491 },
    CaseException { from: 0x0492, to: 0x0493 },
    CaseException { from: 0x0494, to: 0x0495 },
    CaseException { from: 0x0496, to: 0x0497 },
    CaseException { from: 0x0498, to: 0x0499 },
    CaseException { from: 0x049A, to: 0x049B },
    CaseException { from: 0x049C, to: 0x049D },
    CaseException { from: 0x049E, to: 0x049F },
    CaseException { from: 0x04A0, to: 0x04A1 },
    CaseException { from: 0x04A2, to: 0x04A3 },
    CaseException { from: 0x04A4, to: 0x04A5 },
    CaseException { from: 0x04A6, to: 0x04A7 },
    CaseException { from: 0x04A8, to: 0x04A9 },
    CaseException { from: 0x04AA, to: 0x04AB },
    CaseException { from: 0x04AC, to: 0x04AD },
    CaseException { from: 0x04AE, to: 0x04AF },
    CaseException { from: 0x04B0, to: 0x04B1 },
    CaseException { from: 0x04B2, to: 0x04B3 },
    CaseException { from: 0x04B4, to: 0x04B5 },
    CaseException { from: 0x04B6, to: 0x04B7 },
    CaseException { from: 0x04B8, to: 0x04B9 },
    CaseException { from: 0x04BA, to: 0x04BB },
    CaseException { from: 0x04BC, to: 0x04BD },
    CaseException { from: 0x04BE, to: 0x04BF },
    CaseException { from: 0x04C0, to: 0x04CF },
    CaseException { from: 0x04C1, to: 0x04C2 },
    CaseException { from: 0x04C3, to: 0x04C4 },
    CaseException { from: 0x04C5, to: 0x04C6 },
    CaseException { from: 0x04C7, to: 0x04C8 },
    CaseException { from: 0x04C9, to: 0x04CA },
    CaseException { from: 0x04CB, to: 0x04CC },
    CaseException { from: 0x04CD, to: 0x04CE },
    CaseException { from: 0x04D0, to: 0x04D1 },
    CaseException { from: 0x04D2, to: 0x04D3 },
    CaseException { from: 0x04D4, to: 0x04D5 },
    CaseException { from: 0x04D6, to: 0x04D7 },
    CaseException { from: 0x04D8, to: 0x04D9 },
    CaseException { from: 0x04DA, to: 0x04DB },
    CaseException { from: 0x04DC, to: 0x04DD },
    CaseException { from: 0x04DE, to: 0x04DF },
    CaseException { from: 0x04E0, to: 0x04E1 },
    CaseException { from: 0x04E2, to: 0x04E3 },
    CaseException { from: 0x04E4, to: 0x04E5 },
    CaseException { from: 0x04E6, to: 0x04E7 },
    CaseException { from: 0x04E8, to: 0x04E9 },
    CaseException { from: 0x04EA, to: 0x04EB },
    CaseException { from: 0x04EC, to: 0x04ED },
    CaseException { from: 0x04EE, to: 0x04EF },
    CaseException { from: 0x04F0, to: 0x04F1 },
    CaseException { from: 0x04F2, to: 0x04F3 },
    CaseException { from: 0x04F4, to: 0x04F5 },
    CaseException { from: 0x04F6, to: 0x04F7 },
    CaseException { from: 0x04F8, to: 0x04F9 },
    CaseException { from: 0x04FA, to: 0x04FB },
    CaseException { from: 0x04FC, to: 0x04FD },
    CaseException { from: 0x04FE, to: 0x04FF },
    CaseException { from: 0x0500, to: 0x0501 },
    CaseException { from: 0x0502, to: 0x0503 },
    CaseException { from: 0x0504, to: 0x0505 },
    CaseException { from: 0x0506, to: 0x0507 },
    CaseException { from: 0x0508, to: 0x0509 },
    CaseException { from: 0x050A, to: 0x050B },
    CaseException { from: 0x050C, to: 0x050D },
    CaseException { from: 0x050E, to: 0x050F },
    CaseException { from: 0x0510, to: 0x0511 },
    CaseException { from: 0x0512, to: 0x0513 },
    CaseException { from: 0x0514, to: 0x0515 },
    CaseException { from: 0x0516, to: 0x0517 },
    CaseException { from: 0x0518, to: 0x0519 },
    CaseException { from: 0x051A, to: 0x051B },
    CaseException { from: 0x051C, to: 0x051D },
    CaseException { from: 0x051E, to: 0x051F },
    CaseException { from: 0x0520, to: 0x0521 },
    CaseException { from: 0x0522, to: 0x0523 },
    CaseException { from: 0x0524, to: 0x0525 },
    CaseException { from: 0x0526, to: 0x0527 },
    CaseException { from: 0x0528, to: 0x0529 },
    CaseException { from: 0x052A, to: 0x052B },
    CaseException { from: 0x052C, to: 0x052D },
    CaseException { from: 0x052E, to: 0x052F },
    CaseException { from: 0x0550, to: 0x0580 },
    CaseException { from: 0x0551, to: 0x0581 },
    CaseException { from: 0x0552, to: 0x0582 },
    CaseException { from: 0x0553, to: 0x0583 },
    CaseException { from: 0x0554, to: 0x0584 },
    CaseException { from: 0x0555, to: 0x0585 },
    CaseException { from: 0x0556, to: 0x0586 },
    CaseException { from: 0x10C0, to: 0x2D20 },
    CaseException { from: 0x10C1, to: 0x2D21 },
    CaseException { from: 0x10C2, to: 0x2D22 },
    CaseException { from: 0x10C3, to: 0x2D23 },
    CaseException { from: 0x10C4, to: 0x2D24 },
    CaseException { from: 0x10C5, to: 0x2D25 },
    CaseException { from: 0x10C7, to: 0x2D27 },
    CaseException { from: 0x10CD, to: 0x2D2D },
    CaseException { from: 0x1E00, to: 0x1E01 },
    CaseException { from: 0x1E02, to: 0x1E03 },
    CaseException { from: 0x1E04, to: 0x1E05 },
    CaseException { from: 0x1E06, to: 0x1E07 },
    CaseException { from: 0x1E08, to: 0x1E09 },
    CaseException { from: 0x1E0A, to: 0x1E0B },
    CaseException { from: 0x1E0C, to: 0x1E0D },
    CaseException { from: 0x1E0E, to: 0x1E0F },
    CaseException { from: 0x1E10, to: 0x1E11 },
    CaseException { from: 0x1E12, to: 0x1E13 },
    CaseException { from: 0x1E14, to: 0x1E15 },
    CaseException { from: 0x1E16, to: 0x1E17 },
    CaseException { from: 0x1E18, to: 0x1E19 },
    CaseException { from: 0x1E1A, to: 0x1E1B },
    CaseException { from: 0x1E1C, to: 0x1E1D },
    CaseException { from: 0x1E1E, to: 0x1E1F },
    CaseException { from: 0x1E20, to: 0x1E21 },
    CaseException { from: 0x1E22, to: 0x1E23 },
    CaseException { from: 0x1E24, to: 0x1E25 },
    CaseException { from: 0x1E26, to: 0x1E27 },
    CaseException { from: 0x1E28, to: 0x1E29 },
    CaseException { from: 0x1E2A, to: 0x1E2B },
    CaseException { from: 0x1E2C, to: 0x1E2D },
    CaseException { from: 0x1E2E, to: 0x1E2F },
    CaseException { from: 0x1E30, to: 0x1E31 },
    CaseException { from: 0x1E32, to: 0x1E33 },
    CaseException { from: 0x1E34, to: 0x1E35 },
    CaseException { from: 0x1E36, to: 0x1E37 },
    CaseException { from: 0x1E38, to: 0x1E39 },
    CaseException { from: 0x1E3A, to: 0x1E3B },
    CaseException { from: 0x1E3C, to: 0x1E3D },
    CaseException { from: 0x1E3E, to: 0x1E3F },
    CaseException { from: 0x1E40, to: 0x1E41 },
    CaseException { from: 0x1E42, to: 0x1E43 },
    CaseException { from: 0x1E44, to: 0x1E45 },
    CaseException { from: 0x1E46, to: 0x1E47 },
    CaseException { from: 0x1E48, to: 0x1E49 },
    CaseException { from: 0x1E4A, to: 0x1E4B },
    CaseException { from: 0x1E4C, to: 0x1E4D },
    CaseException { from: 0x1E4E, to: 0x1E4F },
    CaseException { from: 0x1E50, to: 0x1E51 },
    CaseException { from: 0x1E52, to: 0x1E53 },
    CaseException { from: 0x1E54, to: 0x1E55 },
    CaseException { from: 0x1E56, to: 0x1E57 },
    CaseException { from: 0x1E58, to: 0x1E59 },
    CaseException { from: 0x1E5A, to: 0x1E5B },
    CaseException { from: 0x1E5C, to: 0x1E5D },
    CaseException { from: 0x1E5E, to: 0x1E5F },
    CaseException { from: 0x1E60, to: 0x1E61 },
    CaseException { from: 0x1E62, to: 0x1E63 },
    CaseException { from: 0x1E64, to: 0x1E65 },
    CaseException { from: 0x1E66, to: 0x1E67 },
    CaseException { from: 0x1E68, to: 0x1E69 },
    CaseException { from: 0x1E6A, to: 0x1E6B },
    CaseException { from: 0x1E6C, to: 0x1E6D },
    CaseException { from: 0x1E6E, to: 0x1E6F },
    CaseException { from: 0x1E70, to: 0x1E71 },
    CaseException { from: 0x1E72, to: 0x1E73 },
    CaseException { from: 0x1E74, to: 0x1E75 },
    CaseException { from: 0x1E76, to: 0x1E77 },
    CaseException { from: 0x1E78, to: 0x1E79 },
    CaseException { from: 0x1E7A, to: 0x1E7B },
    CaseException { from: 0x1E7C, to: 0x1E7D },
    CaseException { from: 0x1E7E, to: 0x1E7F },
    CaseException { from: 0x1E80, to: 0x1E81 },
    CaseException { from: 0x1E82, to: 0x1E83 },
    CaseException { from: 0x1E84, to: 0x1E85 },
    CaseException { from: 0x1E86, to: 0x1E87 },
    CaseException { from: 0x1E88, to: 0x1E89 },
    CaseException { from: 0x1E8A, to: 0x1E8B },
    CaseException { from: 0x1E8C, to: 0x1E8D },
    CaseException { from: 0x1E8E, to: 0x1E8F },
    CaseException { from: 0x1E90, to: 0x1E91 },
    CaseException { from: 0x1E92, to: 0x1E93 },
    CaseException { from: 0x1E94, to: 0x1E95 },
    CaseException { from: 0x1E9E, to: 0x00DF },
    CaseException { from: 0x1EA0, to: 0x1EA1 },
    CaseException { from: 0x1EA2, to: 0x1EA3 },
    CaseException { from: 0x1EA4, to: 0x1EA5 },
    CaseException { from: 0x1EA6, to: 0x1EA7 },
    CaseException { from: 0x1EA8, to: 0x1EA9 },
    CaseException { from: 0x1EAA, to: 0x1EAB },
    CaseException { from: 0x1EAC, to: 0x1EAD },
    CaseException { from: 0x1EAE, to: 0x1EAF },
    CaseException { from: 0x1EB0, to: 0x1EB1 },
    CaseException { from: 0x1EB2, to: 0x1EB3 },
    CaseException { from: 0x1EB4, to: 0x1EB5 },
    CaseException { from: 0x1EB6, to: 0x1EB7 },
    CaseException { from: 0x1EB8, to: 0x1EB9 },
    CaseException { from: 0x1EBA, to: 0x1EBB },
    CaseException { from: 0x1EBC, to: 0x1EBD },
    CaseException { from: 0x1EBE, to: 0x1EBF },
    CaseException { from: 0x1EC0, to: 0x1EC1 },
    CaseException { from: 0x1EC2, to: 0x1EC3 },
    CaseException { from: 0x1EC4, to: 0x1EC5 },
    CaseException { from: 0x1EC6, to: 0x1EC7 },
    CaseException { from: 0x1EC8, to: 0x1EC9 },
    CaseException { from: 0x1ECA, to: 0x1ECB },
    CaseException { from: 0x1ECC, to: 0x1ECD },
    CaseException { from: 0x1ECE, to: 0x1ECF },
    CaseException { from: 0x1ED0, to: 0x1ED1 },
    CaseException { from: 0x1ED2, to: 0x1ED3 },
    CaseException { from: 0x1ED4, to: 0x1ED5 },
    CaseException { from: 0x1ED6, to: 0x1ED7 },
    CaseException { from: 0x1ED8, to: 0x1ED9 },
    CaseException { from: 0x1EDA, to: 0x1EDB },
    CaseException { from: 0x1EDC, to: 0x1EDD },
    CaseException { from: 0x1EDE, to: 0x1EDF },
    CaseException { from: 0x1EE0, to: 0x1EE1 },
    CaseException { from: 0x1EE2, to: 0x1EE3 },
    CaseException { from: 0x1EE4, to: 0x1EE5 },
    CaseException { from: 0x1EE6, to: 0x1EE7 },
    CaseException { from: 0x1EE8, to: 0x1EE9 },
    CaseException { from: 0x1EEA, to: 0x1EEB },
    CaseException { from: 0x1EEC, to: 0x1EED },
    CaseException { from: 0x1EEE, to: 0x1EEF },
    CaseException { from: 0x1EF0, to: 0x1EF1 },
    CaseException { from: 0x1EF2, to: 0x1EF3 },
    CaseException { from: 0x1EF4, to: 0x1EF5 },
    CaseException { from: 0x1EF6, to: 0x1EF7 },
    CaseException { from: 0x1EF8, to: 0x1EF9 },
    CaseException { from: 0x1EFA, to: 0x1EFB },
    CaseException { from: 0x1EFC, to: 0x1EFD },
    CaseException { from: 0x1EFE, to: 0x1EFF },
    CaseException { from: 0x1F59, to: 0x1F51 },
    CaseException { from: 0x1F5B, to: 0x1F53 },
    CaseException { from: 0x1F5D, to: 0x1F55 },
    CaseException { from: 0x1F5F, to: 0x1F57 },
    CaseException { from: 0x1FBA, to: 0x1F70 },
    CaseException { from: 0x1FBB, to: 0x1F71 },
    CaseException { from: 0x1FBC, to: 0x1FB3 },
    CaseException { from: 0x1FC8, to: 0x1F72 },
    CaseException { from: 0x1FC9, to: 0x1F73 },
    CaseException { from: 0x1FCA, to: 0x1F74 },
    CaseException { from: 0x1FCB, to: 0x1F75 },
    CaseException { from: 0x1FCC, to: 0x1FC3 },
    CaseException { from: 0x1FDA, to: 0x1F76 },
    CaseException { from: 0x1FDB, to: 0x1F77 },
    CaseException { from: 0x1FEA, to: 0x1F7A },
    CaseException { from: 0x1FEB, to: 0x1F7B },
    CaseException { from: 0x1FEC, to: 0x1FE5 },
    CaseException { from: 0x1FF8, to: 0x1F78 },
    CaseException { from: 0x1FF9, to: 0x1F79 },
    CaseException { from: 0x1FFA, to: 0x1F7C },
    CaseException { from: 0x1FFB, to: 0x1F7D },
    CaseException { from: 0x1FFC, to: 0x1FF3 },
    CaseException { from: 0x2126, to: 0x03C9 },
    CaseException { from: 0x212A, to: 0x006B },
    CaseException { from: 0x212B, to: 0x00E5 },
    CaseException { from: 0x2132, to: 0x214E },
    CaseException { from: 0x2183, to: 0x2184 },
    CaseException { from: 0x24B6, to: 0x24D0 },
    CaseException { from: 0x24B7, to: 0x24D1 },
    CaseException { from: 0x24B8, to: 0x24D2 },
    CaseException { from: 0x24B9, to: 0x24D3 },
    CaseException { from: 0x24BA, to: 0x24D4 },
    CaseException { from: 0x24BB, to: 0x24D5 },
    CaseException { from: 0x24BC, to: 0x24D6 },
    CaseException { from: 0x24BD, to: 0x24D7 },
    CaseException { from: 0x24BE, to: 0x24D8 },
    CaseException { from: 0x24BF, to: 0x24D9 },
    CaseException { from: 0x24C0, to: 0x24DA },
    CaseException { from: 0x24C1, to: 0x24DB },
    CaseException { from: 0x24C2, to: 0x24DC },
    CaseException { from: 0x24C3, to: 0x24DD },
    CaseException { from: 0x24C4, to: 0x24DE },
    CaseException { from: 0x24C5, to: 0x24DF },
    CaseException { from: 0x24C6, to: 0x24E0 },
    CaseException { from: 0x24C7, to: 0x24E1 },
    CaseException { from: 0x24C8, to: 0x24E2 },
    CaseException { from: 0x24C9, to: 0x24E3 },
    CaseException { from: 0x24CA, to: 0x24E4 },
    CaseException { from: 0x24CB, to: 0x24E5 },
    CaseException { from: 0x24CC, to: 0x24E6 },
    CaseException { from: 0x24CD, to: 0x24E7 },
    CaseException { from: 0x24CE, to: 0x24E8 },
    CaseException { from: 0x24CF, to: 0x24E9 },
    CaseException { from: 0x2C60, to: 0x2C61 },
    CaseException { from: 0x2C62, to: 0x026B },
    CaseException { from: 0x2C63, to: 0x1D7D },
    CaseException { from: 0x2C64, to: 0x027D },
    CaseException { from: 0x2C67, to: 0x2C68 },
    CaseException { from: 0x2C69, to: 0x2C6A },
    CaseException { from: 0x2C6B, to: 0x2C6C },
    CaseException { from: 0x2C6D, to: 0x0251 },
    CaseException { from: 0x2C6E, to: 0x0271 },
    CaseException { from: 0x2C6F, to: 0x0250 },
    CaseException { from: 0x2C70, to: 0x0252 },
    CaseException { from: 0x2C72, to: 0x2C73 },
    CaseException { from: 0x2C75, to: 0x2C76 },
    CaseException { from: 0x2C7E, to: 0x023F },
    CaseException { from: 0x2C7F, to: 0x0240 },
    CaseException { from: 0x2C80, to: 0x2C81 },
    CaseException { from: 0x2C82, to: 0x2C83 },
    CaseException { from: 0x2C84, to: 0x2C85 },
    CaseException { from: 0x2C86, to: 0x2C87 },
    CaseException { from: 0x2C88, to: 0x2C89 },
    CaseException { from: 0x2C8A, to: 0x2C8B },
    CaseException { from: 0x2C8C, to: 0x2C8D },
    CaseException { from: 0x2C8E, to: 0x2C8F },
    CaseException { from: 0x2C90, to: 0x2C91 },
    CaseException { from: 0x2C92, to: 0x2C93 },
    CaseException { from: 0x2C94, to: 0x2C95 },
    CaseException { from: 0x2C96, to: 0x2C97 },
    CaseException { from: 0x2C98, to: 0x2C99 },
    CaseException { from: 0x2C9A, to: 0x2C9B },
    CaseException { from: 0x2C9C, to: 0x2C9D },
    CaseException { from: 0x2C9E, to: 0x2C9F },
    CaseException { from: 0x2CA0, to: 0x2CA1 },
    CaseException { from: 0x2CA2, to: 0x2CA3 },
    CaseException { from: 0x2CA4, to: 0x2CA5 },
    CaseException { from: 0x2CA6, to: 0x2CA7 },
    CaseException { from: 0x2CA8, to: 0x2CA9 },
    CaseException { from: 0x2CAA, to: 0x2CAB },
    CaseException { from: 0x2CAC, to: 0x2CAD },
    CaseException { from: 0x2CAE, to: 0x2CAF },
    CaseException { from: 0x2CB0, to: 0x2CB1 },
    CaseException { from: 0x2CB2, to: 0x2CB3 },
    CaseException { from: 0x2CB4, to: 0x2CB5 },
    CaseException { from: 0x2CB6, to: 0x2CB7 },
    CaseException { from: 0x2CB8, to: 0x2CB9 },
    CaseException { from: 0x2CBA, to: 0x2CBB },
    CaseException { from: 0x2CBC, to: 0x2CBD },
    CaseException { from: 0x2CBE, to: 0x2CBF },
    CaseException { from: 0x2CC0, to: 0x2CC1 },
    CaseException { from: 0x2CC2, to: 0x2CC3 },
    CaseException { from: 0x2CC4, to: 0x2CC5 },
    CaseException { from: 0x2CC6, to: 0x2CC7 },
    CaseException { from: 0x2CC8, to: 0x2CC9 },
    CaseException { from: 0x2CCA, to: 0x2CCB },
    CaseException { from: 0x2CCC, to: 0x2CCD },
    CaseException { from: 0x2CCE, to: 0x2CCF },
    CaseException { from: 0x2CD0, to: 0x2CD1 },
    CaseException { from: 0x2CD2, to: 0x2CD3 },
    CaseException { from: 0x2CD4, to: 0x2CD5 },
    CaseException { from: 0x2CD6, to: 0x2CD7 },
    CaseException { from: 0x2CD8, to: 0x2CD9 },
    CaseException { from: 0x2CDA, to: 0x2CDB },
    CaseException { from: 0x2CDC, to: 0x2CDD },
    CaseException { from: 0x2CDE, to: 0x2CDF },
    CaseException { from: 0x2CE0, to: 0x2CE1 },
    CaseException { from: 0x2CE2, to: 0x2CE3 },
    CaseException { from: 0x2CEB, to: 0x2CEC },
    CaseException { from: 0x2CED, to: 0x2CEE },
    CaseException { from: 0x2CF2, to: 0x2CF3 },
    CaseException { from: 0xA640, to: 0xA641 },
    CaseException { from: 0xA642, to: 0xA643 },
    CaseException { from: 0xA644, to: 0xA645 },
    CaseException { from: 0xA646, to: 0xA647 },
    CaseException { from: 0xA648, to: 0xA649 },
    CaseException { from: 0xA64A, to: 0xA64B },
    CaseException { from: 0xA64C, to: 0xA64D },
    CaseException { from: 0xA64E, to: 0xA64F },
    CaseException { from: 0xA650, to: 0xA651 },
    CaseException { from: 0xA652, to: 0xA653 },
    CaseException { from: 0xA654, to: 0xA655 },
    CaseException { from: 0xA656, to: 0xA657 },
    CaseException { from: 0xA658, to: 0xA659 },
    CaseException { from: 0xA65A, to: 0xA65B },
    CaseException { from: 0xA65C, to: 0xA65D },
    CaseException { from: 0xA65E, to: 0xA65F },
    CaseException { from: 0xA660, to: 0xA661 },
    CaseException { from: 0xA662, to: 0xA663 },
    CaseException { from: 0xA664, to: 0xA665 },
    CaseException { from: 0xA666, to: 0xA667 },
    CaseException { from: 0xA668, to: 0xA669 },
    CaseException { from: 0xA66A, to: 0xA66B },
    CaseException { from: 0xA66C, to: 0xA66D },
    CaseException { from: 0xA680, to: 0xA681 },
    CaseException { from: 0xA682, to: 0xA683 },
    CaseException { from: 0xA684, to: 0xA685 },
    CaseException { from: 0xA686, to: 0xA687 },
    CaseException { from: 0xA688, to: 0xA689 },
    CaseException { from: 0xA68A, to: 0xA68B },
    CaseException { from: 0xA68C, to: 0xA68D },
    CaseException { from: 0xA68E, to: 0xA68F },
    CaseException { from: 0xA690, to: 0xA691 },
    CaseException { from: 0xA692, to: 0xA693 },
    CaseException { from: 0xA694, to: 0xA695 },
    CaseException { from: 0xA696, to: 0xA697 },
    CaseException { from: 0xA698, to: 0xA699 },
    CaseException { from: 0xA69A, to: 0xA69B },
    CaseException { from: 0xA722, to: 0xA723 },
    CaseException { from: 0xA724, to: 0xA725 },
    CaseException { from: 0xA726, to: 0xA727 },
    CaseException { from: 0xA728, to: 0xA729 },
    CaseException { from: 0xA72A, to: 0xA72B },
    CaseException { from: 0xA72C, to: 0xA72D },
    CaseException { from: 0xA72E, to: 0xA72F },
    CaseException { from: 0xA732, to: 0xA733 },
    CaseException { from: 0xA734, to: 0xA735 },
    CaseException { from: 0xA736, to: 0xA737 },
    CaseException { from: 0xA738, to: 0xA739 },
    CaseException { from: 0xA73A, to: 0xA73B },
    CaseException { from: 0xA73C, to: 0xA73D },
    CaseException { from: 0xA73E, to: 0xA73F },
    CaseException { from: 0xA740, to: 0xA741 },
    CaseException { from: 0xA742, to: 0xA743 },
    CaseException { from: 0xA744, to: 0xA745 },
    CaseException { from: 0xA746, to: 0xA747 },
    CaseException { from: 0xA748, to: 0xA749 },
    CaseException { from: 0xA74A, to: 0xA74B },
    CaseException { from: 0xA74C, to: 0xA74D },
    CaseException { from: 0xA74E, to: 0xA74F },
    CaseException { from: 0xA750, to: 0xA751 },
    CaseException { from: 0xA752, to: 0xA753 },
    CaseException { from: 0xA754, to: 0xA755 },
    CaseException { from: 0xA756, to: 0xA757 },
    CaseException { from: 0xA758, to: 0xA759 },
    CaseException { from: 0xA75A, to: 0xA75B },
    CaseException { from: 0xA75C, to: 0xA75D },
    CaseException { from: 0xA75E, to: 0xA75F },
    CaseException { from: 0xA760, to: 0xA761 },
    CaseException { from: 0xA762, to: 0xA763 },
    CaseException { from: 0xA764, to: 0xA765 },
    CaseException { from: 0xA766, to: 0xA767 },
    CaseException { from: 0xA768, to: 0xA769 },
    CaseException { from: 0xA76A, to: 0xA76B },
    CaseException { from: 0xA76C, to: 0xA76D },
    CaseException { from: 0xA76E, to: 0xA76F },
    CaseException { from: 0xA779, to: 0xA77A },
    CaseException { from: 0xA77B, to: 0xA77C },
    CaseException { from: 0xA77D, to: 0x1D79 },
    CaseException { from: 0xA77E, to: 0xA77F },
    CaseException { from: 0xA780, to: 0xA781 },
    CaseException { from: 0xA782, to: 0xA783 },
    CaseException { from: 0xA784, to: 0xA785 },
    CaseException { from: 0xA786, to: 0xA787 },
    CaseException { from: 0xA78B, to: 0xA78C },
    CaseException { from: 0xA78D, to: 0x0265 },
    CaseException { from: 0xA790, to: 0xA791 },
    CaseException { from: 0xA792, to: 0xA793 },
    CaseException { from: 0xA796, to: 0xA797 },
    CaseException { from: 0xA798, to: 0xA799 },
    CaseException { from: 0xA79A, to: 0xA79B },
    CaseException { from: 0xA79C, to: 0xA79D },
    CaseException { from: 0xA79E, to: 0xA79F },
    CaseException { from: 0xA7A0, to: 0xA7A1 },
    CaseException { from: 0xA7A2, to: 0xA7A3 },
    CaseException { from: 0xA7A4, to: 0xA7A5 },
    CaseException { from: 0xA7A6, to: 0xA7A7 },
    CaseException { from: 0xA7A8, to: 0xA7A9 },
    CaseException { from: 0xA7AA, to: 0x0266 },
    CaseException { from: 0xA7AB, to: 0x025C },
    CaseException { from: 0xA7AC, to: 0x0261 },
    CaseException { from: 0xA7AD, to: 0x026C },
    CaseException { from: 0xA7AE, to: 0x026A },
    CaseException { from: 0xA7B0, to: 0x029E },
    CaseException { from: 0xA7B1, to: 0x0287 },
    CaseException { from: 0xA7B2, to: 0x029D },
    CaseException { from: 0xA7B3, to: 0xAB53 },
    CaseException { from: 0xA7B4, to: 0xA7B5 },
    CaseException { from: 0xA7B6, to: 0xA7B7 },
    CaseException { from: 0xA7B8, to: 0xA7B9 },
    CaseException { from: 0xA7BA, to: 0xA7BB },
    CaseException { from: 0xA7BC, to: 0xA7BD },
    CaseException { from: 0xA7BE, to: 0xA7BF },
    CaseException { from: 0xA7C0, to: 0xA7C1 },
    CaseException { from: 0xA7C2, to: 0xA7C3 },
    CaseException { from: 0xA7C4, to: 0xA794 },
    CaseException { from: 0xA7C5, to: 0x0282 },
    CaseException { from: 0xA7C6, to: 0x1D8E },
    CaseException { from: 0xA7C7, to: 0xA7C8 },
    CaseException { from: 0xA7C9, to: 0xA7CA },
    CaseException { from: 0xA7D0, to: 0xA7D1 },
    CaseException { from: 0xA7D6, to: 0xA7D7 },
    CaseException { from: 0xA7D8, to: 0xA7D9 },
    CaseException { from: 0xA7F5, to: 0xA7F6 },
];
