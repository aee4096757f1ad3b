// Generated from the badge artwork by the asset converter. Do not edit.

use crate::frame::{Frame, Run};

const R0: &[Run] = &[Run::new(0, 80)];
const R1: &[Run] = &[Run::new(0, 30), Run::new(1, 1), Run::new(0, 49)];
const R2: &[Run] = &[
    Run::new(0, 29), Run::new(1, 3), Run::new(0, 39), Run::new(1, 1), Run::new(0, 8),
];
const R3: &[Run] = &[
    Run::new(0, 30), Run::new(1, 1), Run::new(0, 39), Run::new(1, 3), Run::new(0, 7),
];
const R4: &[Run] = &[
    Run::new(0, 5), Run::new(1, 1), Run::new(0, 65), Run::new(1, 1), Run::new(0, 8),
];
const R5: &[Run] = &[Run::new(0, 4), Run::new(1, 3), Run::new(0, 73)];
const R6: &[Run] = &[Run::new(0, 5), Run::new(1, 1), Run::new(0, 74)];
const R7: &[Run] = &[Run::new(0, 52), Run::new(1, 1), Run::new(0, 27)];
const R8: &[Run] = &[Run::new(0, 51), Run::new(1, 3), Run::new(0, 26)];
const R9: &[Run] = &[Run::new(0, 20), Run::new(1, 1), Run::new(0, 59)];
const R10: &[Run] = &[Run::new(0, 19), Run::new(1, 3), Run::new(0, 58)];
const R11: &[Run] = &[Run::new(0, 30), Run::new(2, 23), Run::new(0, 27)];
const R12: &[Run] = &[
    Run::new(0, 30), Run::new(2, 1), Run::new(4, 21), Run::new(2, 1), Run::new(0, 27),
];
const R13: &[Run] = &[
    Run::new(7, 8), Run::new(0, 8), Run::new(7, 8), Run::new(0, 6), Run::new(2, 1), Run::new(4, 2),
    Run::new(5, 17), Run::new(4, 2), Run::new(2, 1), Run::new(0, 27),
];
const R14: &[Run] = &[
    Run::new(7, 30), Run::new(2, 1), Run::new(4, 2), Run::new(5, 8), Run::new(6, 1), Run::new(5, 8),
    Run::new(4, 2), Run::new(2, 1), Run::new(0, 27),
];
const R15: &[Run] = &[
    Run::new(7, 30), Run::new(2, 1), Run::new(4, 2), Run::new(5, 2), Run::new(6, 1), Run::new(5, 9),
    Run::new(2, 4), Run::new(5, 1), Run::new(4, 2), Run::new(2, 1), Run::new(0, 4), Run::new(2, 4),
    Run::new(0, 19),
];
const R16: &[Run] = &[
    Run::new(8, 8), Run::new(7, 8), Run::new(8, 8), Run::new(7, 6), Run::new(2, 1), Run::new(4, 2),
    Run::new(5, 12), Run::new(2, 1), Run::new(3, 2), Run::new(2, 1), Run::new(5, 1), Run::new(4, 2),
    Run::new(2, 1), Run::new(0, 4), Run::new(2, 1), Run::new(3, 2), Run::new(2, 1), Run::new(0, 19),
];
const R17: &[Run] = &[
    Run::new(8, 30), Run::new(2, 1), Run::new(4, 2), Run::new(5, 12), Run::new(2, 1),
    Run::new(3, 2), Run::new(2, 1), Run::new(5, 1), Run::new(4, 2), Run::new(2, 1), Run::new(0, 4),
    Run::new(2, 1), Run::new(3, 2), Run::new(2, 1), Run::new(0, 19),
];
const R18: &[Run] = &[
    Run::new(8, 30), Run::new(2, 1), Run::new(4, 2), Run::new(5, 11), Run::new(2, 2),
    Run::new(3, 2), Run::new(2, 10), Run::new(3, 2), Run::new(2, 2), Run::new(0, 18),
];
const R19: &[Run] = &[
    Run::new(9, 8), Run::new(8, 8), Run::new(9, 8), Run::new(8, 6), Run::new(2, 1), Run::new(4, 2),
    Run::new(5, 11), Run::new(2, 1), Run::new(3, 16), Run::new(2, 1), Run::new(0, 18),
];
const R20: &[Run] = &[
    Run::new(9, 30), Run::new(2, 1), Run::new(4, 2), Run::new(5, 5), Run::new(6, 1), Run::new(5, 5),
    Run::new(2, 1), Run::new(3, 16), Run::new(2, 1), Run::new(0, 15), Run::new(1, 1),
    Run::new(0, 2),
];
const R21: &[Run] = &[
    Run::new(9, 30), Run::new(2, 1), Run::new(4, 2), Run::new(5, 11), Run::new(2, 1),
    Run::new(3, 16), Run::new(2, 1), Run::new(0, 14), Run::new(1, 3), Run::new(0, 1),
];
const R22: &[Run] = &[
    Run::new(10, 8), Run::new(9, 8), Run::new(10, 8), Run::new(9, 6), Run::new(2, 1),
    Run::new(4, 2), Run::new(5, 11), Run::new(2, 1), Run::new(3, 3), Run::new(1, 1), Run::new(2, 1),
    Run::new(3, 5), Run::new(1, 1), Run::new(2, 1), Run::new(3, 4), Run::new(2, 1), Run::new(0, 15),
    Run::new(1, 1), Run::new(0, 2),
];
const R23: &[Run] = &[
    Run::new(10, 26), Run::new(2, 1), Run::new(3, 3), Run::new(2, 1), Run::new(4, 2),
    Run::new(5, 11), Run::new(2, 1), Run::new(3, 3), Run::new(2, 2), Run::new(3, 5), Run::new(2, 2),
    Run::new(3, 4), Run::new(2, 1), Run::new(0, 18),
];
const R24: &[Run] = &[
    Run::new(10, 26), Run::new(2, 5), Run::new(4, 2), Run::new(5, 11), Run::new(2, 1),
    Run::new(3, 16), Run::new(2, 1), Run::new(0, 18),
];
const R25: &[Run] = &[
    Run::new(11, 8), Run::new(10, 8), Run::new(11, 8), Run::new(10, 6), Run::new(2, 1),
    Run::new(4, 2), Run::new(5, 3), Run::new(6, 1), Run::new(5, 7), Run::new(2, 1), Run::new(3, 1),
    Run::new(13, 2), Run::new(3, 10), Run::new(13, 2), Run::new(3, 1), Run::new(2, 1),
    Run::new(0, 18),
];
const R26: &[Run] = &[
    Run::new(11, 30), Run::new(2, 1), Run::new(4, 2), Run::new(5, 11), Run::new(2, 1),
    Run::new(3, 1), Run::new(13, 2), Run::new(3, 3), Run::new(2, 4), Run::new(3, 3),
    Run::new(13, 2), Run::new(3, 1), Run::new(2, 1), Run::new(0, 18),
];
const R27: &[Run] = &[
    Run::new(11, 30), Run::new(2, 1), Run::new(4, 2), Run::new(5, 11), Run::new(2, 1),
    Run::new(3, 16), Run::new(2, 1), Run::new(0, 18),
];
const R28: &[Run] = &[
    Run::new(12, 8), Run::new(11, 8), Run::new(12, 8), Run::new(11, 6), Run::new(2, 1),
    Run::new(4, 13), Run::new(2, 1), Run::new(3, 16), Run::new(2, 1), Run::new(0, 18),
];
const R29: &[Run] = &[
    Run::new(12, 30), Run::new(2, 1), Run::new(4, 13), Run::new(2, 18), Run::new(0, 18),
];
const R30: &[Run] = &[Run::new(12, 30), Run::new(2, 23), Run::new(0, 27)];
const R31: &[Run] = &[
    Run::new(0, 8), Run::new(12, 8), Run::new(0, 8), Run::new(12, 7), Run::new(2, 1),
    Run::new(3, 1), Run::new(2, 1), Run::new(0, 2), Run::new(2, 1), Run::new(3, 1), Run::new(2, 1),
    Run::new(0, 5), Run::new(2, 1), Run::new(3, 1), Run::new(2, 1), Run::new(0, 2), Run::new(2, 1),
    Run::new(3, 1), Run::new(2, 1), Run::new(0, 28),
];
const R32: &[Run] = &[
    Run::new(0, 31), Run::new(2, 3), Run::new(0, 2), Run::new(2, 3), Run::new(0, 5), Run::new(2, 3),
    Run::new(0, 2), Run::new(2, 3), Run::new(0, 28),
];
const R33: &[Run] = &[Run::new(0, 63), Run::new(1, 1), Run::new(0, 16)];
const R34: &[Run] = &[Run::new(0, 62), Run::new(1, 3), Run::new(0, 15)];
const R35: &[Run] = &[Run::new(0, 14), Run::new(1, 1), Run::new(0, 65)];
const R36: &[Run] = &[Run::new(0, 13), Run::new(1, 3), Run::new(0, 64)];
const R37: &[Run] = &[Run::new(0, 40), Run::new(1, 1), Run::new(0, 39)];
const R38: &[Run] = &[Run::new(0, 39), Run::new(1, 3), Run::new(0, 38)];
const R39: &[Run] = &[Run::new(0, 26), Run::new(1, 1), Run::new(0, 53)];
const R40: &[Run] = &[Run::new(0, 67), Run::new(1, 1), Run::new(0, 12)];
const R41: &[Run] = &[
    Run::new(0, 24), Run::new(1, 1), Run::new(0, 1), Run::new(1, 1), Run::new(0, 1), Run::new(1, 1),
    Run::new(0, 51),
];
const R42: &[Run] = &[
    Run::new(0, 1), Run::new(1, 1), Run::new(0, 63), Run::new(1, 1), Run::new(0, 1), Run::new(1, 1),
    Run::new(0, 1), Run::new(1, 1), Run::new(0, 10),
];
const R43: &[Run] = &[
    Run::new(0, 1), Run::new(1, 1), Run::new(0, 1), Run::new(1, 1), Run::new(0, 63), Run::new(1, 1),
    Run::new(0, 12),
];
const R44: &[Run] = &[
    Run::new(0, 1), Run::new(1, 1), Run::new(0, 46), Run::new(1, 1), Run::new(0, 31),
];
const R45: &[Run] = &[
    Run::new(0, 46), Run::new(1, 1), Run::new(0, 1), Run::new(1, 1), Run::new(0, 1), Run::new(1, 1),
    Run::new(0, 29),
];
const R46: &[Run] = &[Run::new(0, 48), Run::new(1, 1), Run::new(0, 31)];
const R47: &[Run] = &[Run::new(0, 16), Run::new(1, 1), Run::new(0, 63)];
const R48: &[Run] = &[
    Run::new(0, 14), Run::new(1, 1), Run::new(0, 1), Run::new(1, 1), Run::new(0, 1), Run::new(1, 1),
    Run::new(0, 61),
];
const R49: &[Run] = &[
    Run::new(0, 16), Run::new(1, 1), Run::new(0, 13), Run::new(2, 23), Run::new(0, 27),
];
const R50: &[Run] = &[
    Run::new(9, 8), Run::new(8, 8), Run::new(9, 8), Run::new(8, 6), Run::new(2, 1), Run::new(4, 2),
    Run::new(5, 11), Run::new(2, 1), Run::new(3, 16), Run::new(2, 1), Run::new(0, 11),
    Run::new(1, 1), Run::new(0, 6),
];
const R51: &[Run] = &[
    Run::new(9, 30), Run::new(2, 1), Run::new(4, 2), Run::new(5, 5), Run::new(6, 1), Run::new(5, 5),
    Run::new(2, 1), Run::new(3, 16), Run::new(2, 1), Run::new(0, 18),
];
const R52: &[Run] = &[
    Run::new(9, 30), Run::new(2, 1), Run::new(4, 2), Run::new(5, 11), Run::new(2, 1),
    Run::new(3, 16), Run::new(2, 1), Run::new(0, 9), Run::new(1, 1), Run::new(0, 1), Run::new(1, 1),
    Run::new(0, 1), Run::new(1, 1), Run::new(0, 4),
];
const R53: &[Run] = &[
    Run::new(10, 8), Run::new(9, 8), Run::new(10, 8), Run::new(9, 6), Run::new(2, 1),
    Run::new(4, 2), Run::new(5, 11), Run::new(2, 1), Run::new(3, 3), Run::new(1, 1), Run::new(2, 1),
    Run::new(3, 5), Run::new(1, 1), Run::new(2, 1), Run::new(3, 4), Run::new(2, 1), Run::new(0, 18),
];
const R54: &[Run] = &[
    Run::new(10, 26), Run::new(2, 5), Run::new(4, 2), Run::new(5, 11), Run::new(2, 1),
    Run::new(3, 3), Run::new(2, 2), Run::new(3, 5), Run::new(2, 2), Run::new(3, 4), Run::new(2, 1),
    Run::new(0, 11), Run::new(1, 1), Run::new(0, 6),
];
const R55: &[Run] = &[
    Run::new(10, 26), Run::new(2, 1), Run::new(3, 3), Run::new(2, 1), Run::new(4, 2),
    Run::new(5, 11), Run::new(2, 1), Run::new(3, 16), Run::new(2, 1), Run::new(0, 18),
];
const R56: &[Run] = &[
    Run::new(0, 8), Run::new(12, 8), Run::new(0, 8), Run::new(12, 8), Run::new(2, 1),
    Run::new(3, 1), Run::new(2, 1), Run::new(0, 2), Run::new(2, 1), Run::new(3, 1), Run::new(2, 1),
    Run::new(0, 5), Run::new(2, 1), Run::new(3, 1), Run::new(2, 1), Run::new(0, 2), Run::new(2, 1),
    Run::new(3, 1), Run::new(2, 1), Run::new(0, 27),
];
const R57: &[Run] = &[
    Run::new(0, 32), Run::new(2, 3), Run::new(0, 2), Run::new(2, 3), Run::new(0, 5), Run::new(2, 3),
    Run::new(0, 2), Run::new(2, 3), Run::new(0, 27),
];
const R58: &[Run] = &[Run::new(0, 59), Run::new(1, 1), Run::new(0, 20)];
const R59: &[Run] = &[
    Run::new(0, 57), Run::new(1, 1), Run::new(0, 1), Run::new(1, 1), Run::new(0, 1), Run::new(1, 1),
    Run::new(0, 18),
];
const R60: &[Run] = &[Run::new(0, 10), Run::new(1, 1), Run::new(0, 69)];
const R61: &[Run] = &[
    Run::new(0, 8), Run::new(1, 1), Run::new(0, 1), Run::new(1, 1), Run::new(0, 1), Run::new(1, 1),
    Run::new(0, 67),
];
const R62: &[Run] = &[Run::new(0, 36), Run::new(1, 1), Run::new(0, 43)];
const R63: &[Run] = &[
    Run::new(0, 34), Run::new(1, 1), Run::new(0, 1), Run::new(1, 1), Run::new(0, 1), Run::new(1, 1),
    Run::new(0, 41),
];
const R64: &[Run] = &[Run::new(0, 22), Run::new(1, 1), Run::new(0, 57)];
const R65: &[Run] = &[
    Run::new(0, 21), Run::new(1, 3), Run::new(0, 39), Run::new(1, 1), Run::new(0, 16),
];
const R66: &[Run] = &[
    Run::new(0, 22), Run::new(1, 1), Run::new(0, 39), Run::new(1, 3), Run::new(0, 15),
];
const R67: &[Run] = &[
    Run::new(0, 63), Run::new(1, 1), Run::new(0, 13), Run::new(1, 1), Run::new(0, 2),
];
const R68: &[Run] = &[Run::new(0, 76), Run::new(1, 3), Run::new(0, 1)];
const R69: &[Run] = &[Run::new(0, 77), Run::new(1, 1), Run::new(0, 2)];
const R70: &[Run] = &[Run::new(0, 44), Run::new(1, 1), Run::new(0, 35)];
const R71: &[Run] = &[Run::new(0, 43), Run::new(1, 3), Run::new(0, 34)];
const R72: &[Run] = &[Run::new(0, 12), Run::new(1, 1), Run::new(0, 67)];
const R73: &[Run] = &[Run::new(0, 11), Run::new(1, 3), Run::new(0, 66)];
const R74: &[Run] = &[
    Run::new(0, 8), Run::new(7, 8), Run::new(0, 8), Run::new(7, 6), Run::new(2, 1), Run::new(4, 2),
    Run::new(5, 17), Run::new(4, 2), Run::new(2, 1), Run::new(0, 27),
];
const R75: &[Run] = &[
    Run::new(7, 8), Run::new(8, 8), Run::new(7, 8), Run::new(8, 6), Run::new(2, 1), Run::new(4, 2),
    Run::new(5, 12), Run::new(2, 1), Run::new(3, 2), Run::new(2, 1), Run::new(5, 1), Run::new(4, 2),
    Run::new(2, 1), Run::new(0, 4), Run::new(2, 1), Run::new(3, 2), Run::new(2, 1), Run::new(0, 19),
];
const R76: &[Run] = &[
    Run::new(8, 8), Run::new(9, 8), Run::new(8, 8), Run::new(9, 6), Run::new(2, 1), Run::new(4, 2),
    Run::new(5, 11), Run::new(2, 1), Run::new(3, 16), Run::new(2, 1), Run::new(0, 18),
];
const R77: &[Run] = &[
    Run::new(9, 30), Run::new(2, 1), Run::new(4, 2), Run::new(5, 5), Run::new(6, 1), Run::new(5, 5),
    Run::new(2, 1), Run::new(3, 16), Run::new(2, 1), Run::new(0, 7), Run::new(1, 1),
    Run::new(0, 10),
];
const R78: &[Run] = &[
    Run::new(9, 30), Run::new(2, 1), Run::new(4, 2), Run::new(5, 11), Run::new(2, 1),
    Run::new(3, 16), Run::new(2, 1), Run::new(0, 6), Run::new(1, 3), Run::new(0, 9),
];
const R79: &[Run] = &[
    Run::new(9, 8), Run::new(10, 8), Run::new(9, 8), Run::new(10, 6), Run::new(2, 1),
    Run::new(4, 2), Run::new(5, 11), Run::new(2, 1), Run::new(3, 3), Run::new(1, 1), Run::new(2, 1),
    Run::new(3, 5), Run::new(1, 1), Run::new(2, 1), Run::new(3, 4), Run::new(2, 1), Run::new(0, 7),
    Run::new(1, 1), Run::new(0, 10),
];
const R80: &[Run] = &[
    Run::new(10, 8), Run::new(11, 8), Run::new(10, 8), Run::new(11, 6), Run::new(2, 1),
    Run::new(4, 2), Run::new(5, 3), Run::new(6, 1), Run::new(5, 7), Run::new(2, 1), Run::new(3, 1),
    Run::new(13, 2), Run::new(3, 10), Run::new(13, 2), Run::new(3, 1), Run::new(2, 1),
    Run::new(0, 18),
];
const R81: &[Run] = &[
    Run::new(11, 8), Run::new(12, 8), Run::new(11, 8), Run::new(12, 6), Run::new(2, 1),
    Run::new(4, 13), Run::new(2, 1), Run::new(3, 16), Run::new(2, 1), Run::new(0, 18),
];
const R82: &[Run] = &[
    Run::new(12, 8), Run::new(0, 8), Run::new(12, 8), Run::new(0, 7), Run::new(2, 1),
    Run::new(3, 1), Run::new(2, 1), Run::new(0, 2), Run::new(2, 1), Run::new(3, 1), Run::new(2, 1),
    Run::new(0, 5), Run::new(2, 1), Run::new(3, 1), Run::new(2, 1), Run::new(0, 2), Run::new(2, 1),
    Run::new(3, 1), Run::new(2, 1), Run::new(0, 28),
];
const R83: &[Run] = &[Run::new(0, 55), Run::new(1, 1), Run::new(0, 24)];
const R84: &[Run] = &[Run::new(0, 54), Run::new(1, 3), Run::new(0, 23)];
const R85: &[Run] = &[Run::new(0, 6), Run::new(1, 1), Run::new(0, 73)];
const R86: &[Run] = &[Run::new(0, 5), Run::new(1, 3), Run::new(0, 72)];
const R87: &[Run] = &[Run::new(0, 32), Run::new(1, 1), Run::new(0, 47)];
const R88: &[Run] = &[Run::new(0, 31), Run::new(1, 3), Run::new(0, 46)];
const R89: &[Run] = &[Run::new(0, 18), Run::new(1, 1), Run::new(0, 61)];
const R90: &[Run] = &[
    Run::new(0, 16), Run::new(1, 1), Run::new(0, 1), Run::new(1, 1), Run::new(0, 1), Run::new(1, 1),
    Run::new(0, 59),
];
const R91: &[Run] = &[
    Run::new(0, 57), Run::new(1, 1), Run::new(0, 1), Run::new(1, 1), Run::new(0, 1), Run::new(1, 1),
    Run::new(0, 11), Run::new(1, 1), Run::new(0, 6),
];
const R92: &[Run] = &[
    Run::new(0, 59), Run::new(1, 1), Run::new(0, 11), Run::new(1, 1), Run::new(0, 1),
    Run::new(1, 1), Run::new(0, 1), Run::new(1, 1), Run::new(0, 4),
];
const R93: &[Run] = &[
    Run::new(0, 40), Run::new(1, 1), Run::new(0, 32), Run::new(1, 1), Run::new(0, 6),
];
const R94: &[Run] = &[
    Run::new(0, 38), Run::new(1, 1), Run::new(0, 1), Run::new(1, 1), Run::new(0, 1), Run::new(1, 1),
    Run::new(0, 37),
];
const R95: &[Run] = &[Run::new(0, 8), Run::new(1, 1), Run::new(0, 71)];
const R96: &[Run] = &[
    Run::new(0, 6), Run::new(1, 1), Run::new(0, 1), Run::new(1, 1), Run::new(0, 1), Run::new(1, 1),
    Run::new(0, 69),
];
const R97: &[Run] = &[
    Run::new(0, 8), Run::new(7, 8), Run::new(0, 8), Run::new(7, 6), Run::new(2, 1), Run::new(4, 21),
    Run::new(2, 1), Run::new(0, 27),
];
const R98: &[Run] = &[
    Run::new(7, 30), Run::new(2, 1), Run::new(4, 2), Run::new(5, 17), Run::new(4, 2),
    Run::new(2, 1), Run::new(0, 27),
];
const R99: &[Run] = &[
    Run::new(7, 8), Run::new(8, 8), Run::new(7, 8), Run::new(8, 6), Run::new(2, 1), Run::new(4, 2),
    Run::new(5, 2), Run::new(6, 1), Run::new(5, 9), Run::new(2, 4), Run::new(5, 1), Run::new(4, 2),
    Run::new(2, 1), Run::new(0, 4), Run::new(2, 4), Run::new(0, 19),
];
const R100: &[Run] = &[
    Run::new(8, 8), Run::new(9, 8), Run::new(8, 8), Run::new(9, 6), Run::new(2, 1), Run::new(4, 2),
    Run::new(5, 11), Run::new(2, 2), Run::new(3, 2), Run::new(2, 10), Run::new(3, 2),
    Run::new(2, 2), Run::new(0, 3), Run::new(1, 1), Run::new(0, 14),
];
const R101: &[Run] = &[
    Run::new(9, 30), Run::new(2, 1), Run::new(4, 2), Run::new(5, 11), Run::new(2, 1),
    Run::new(3, 16), Run::new(2, 1), Run::new(0, 18),
];
const R102: &[Run] = &[
    Run::new(9, 30), Run::new(2, 1), Run::new(4, 2), Run::new(5, 5), Run::new(6, 1), Run::new(5, 5),
    Run::new(2, 1), Run::new(3, 16), Run::new(2, 1), Run::new(0, 1), Run::new(1, 1), Run::new(0, 1),
    Run::new(1, 1), Run::new(0, 1), Run::new(1, 1), Run::new(0, 12),
];
const R103: &[Run] = &[
    Run::new(9, 8), Run::new(10, 8), Run::new(9, 8), Run::new(10, 6), Run::new(2, 1),
    Run::new(4, 2), Run::new(5, 11), Run::new(2, 1), Run::new(3, 16), Run::new(2, 1),
    Run::new(0, 18),
];
const R104: &[Run] = &[
    Run::new(10, 30), Run::new(2, 1), Run::new(4, 2), Run::new(5, 11), Run::new(2, 1),
    Run::new(3, 3), Run::new(1, 1), Run::new(2, 1), Run::new(3, 5), Run::new(1, 1), Run::new(2, 1),
    Run::new(3, 4), Run::new(2, 1), Run::new(0, 3), Run::new(1, 1), Run::new(0, 14),
];
const R105: &[Run] = &[
    Run::new(10, 26), Run::new(2, 5), Run::new(4, 2), Run::new(5, 11), Run::new(2, 1),
    Run::new(3, 3), Run::new(2, 2), Run::new(3, 5), Run::new(2, 2), Run::new(3, 4), Run::new(2, 1),
    Run::new(0, 18),
];
const R106: &[Run] = &[
    Run::new(10, 8), Run::new(11, 8), Run::new(10, 8), Run::new(11, 2), Run::new(2, 1),
    Run::new(3, 3), Run::new(2, 1), Run::new(4, 2), Run::new(5, 11), Run::new(2, 1),
    Run::new(3, 16), Run::new(2, 1), Run::new(0, 18),
];
const R107: &[Run] = &[
    Run::new(11, 30), Run::new(2, 1), Run::new(4, 2), Run::new(5, 3), Run::new(6, 1),
    Run::new(5, 7), Run::new(2, 1), Run::new(3, 1), Run::new(13, 2), Run::new(3, 10),
    Run::new(13, 2), Run::new(3, 1), Run::new(2, 1), Run::new(0, 18),
];
const R108: &[Run] = &[
    Run::new(11, 8), Run::new(12, 8), Run::new(11, 8), Run::new(12, 6), Run::new(2, 1),
    Run::new(4, 2), Run::new(5, 11), Run::new(2, 1), Run::new(3, 16), Run::new(2, 1),
    Run::new(0, 18),
];
const R109: &[Run] = &[
    Run::new(12, 30), Run::new(2, 1), Run::new(4, 13), Run::new(2, 1), Run::new(3, 16),
    Run::new(2, 1), Run::new(0, 18),
];
const R110: &[Run] = &[
    Run::new(12, 8), Run::new(0, 8), Run::new(12, 8), Run::new(0, 6), Run::new(2, 23),
    Run::new(0, 27),
];
const R111: &[Run] = &[
    Run::new(0, 32), Run::new(2, 1), Run::new(3, 1), Run::new(2, 1), Run::new(0, 2), Run::new(2, 1),
    Run::new(3, 1), Run::new(2, 1), Run::new(0, 5), Run::new(2, 1), Run::new(3, 1), Run::new(2, 1),
    Run::new(0, 2), Run::new(2, 1), Run::new(3, 1), Run::new(2, 1), Run::new(0, 27),
];
const R112: &[Run] = &[Run::new(0, 51), Run::new(1, 1), Run::new(0, 28)];
const R113: &[Run] = &[
    Run::new(0, 49), Run::new(1, 1), Run::new(0, 1), Run::new(1, 1), Run::new(0, 1), Run::new(1, 1),
    Run::new(0, 26),
];
const R114: &[Run] = &[Run::new(0, 2), Run::new(1, 1), Run::new(0, 77)];
const R115: &[Run] = &[
    Run::new(1, 1), Run::new(0, 1), Run::new(1, 1), Run::new(0, 1), Run::new(1, 1), Run::new(0, 75),
];
const R116: &[Run] = &[Run::new(0, 28), Run::new(1, 1), Run::new(0, 51)];
const R117: &[Run] = &[
    Run::new(0, 26), Run::new(1, 1), Run::new(0, 1), Run::new(1, 1), Run::new(0, 1), Run::new(1, 1),
    Run::new(0, 49),
];
const R118: &[Run] = &[
    Run::new(0, 13), Run::new(1, 3), Run::new(0, 39), Run::new(1, 1), Run::new(0, 24),
];
const R119: &[Run] = &[
    Run::new(0, 14), Run::new(1, 1), Run::new(0, 39), Run::new(1, 3), Run::new(0, 23),
];
const R120: &[Run] = &[
    Run::new(0, 55), Run::new(1, 1), Run::new(0, 13), Run::new(1, 1), Run::new(0, 10),
];
const R121: &[Run] = &[Run::new(0, 68), Run::new(1, 3), Run::new(0, 9)];
const R122: &[Run] = &[Run::new(0, 69), Run::new(1, 1), Run::new(0, 10)];
const R123: &[Run] = &[Run::new(0, 35), Run::new(1, 3), Run::new(0, 42)];
const R124: &[Run] = &[Run::new(0, 4), Run::new(1, 1), Run::new(0, 75)];
const R125: &[Run] = &[Run::new(0, 3), Run::new(1, 3), Run::new(0, 74)];
const R126: &[Run] = &[
    Run::new(7, 8), Run::new(0, 8), Run::new(7, 8), Run::new(0, 6), Run::new(2, 1), Run::new(4, 21),
    Run::new(2, 1), Run::new(0, 27),
];
const R127: &[Run] = &[
    Run::new(8, 8), Run::new(7, 8), Run::new(8, 8), Run::new(7, 6), Run::new(2, 1), Run::new(4, 2),
    Run::new(5, 2), Run::new(6, 1), Run::new(5, 9), Run::new(2, 4), Run::new(5, 1), Run::new(4, 2),
    Run::new(2, 1), Run::new(0, 4), Run::new(2, 4), Run::new(0, 19),
];
const R128: &[Run] = &[
    Run::new(9, 8), Run::new(8, 8), Run::new(9, 8), Run::new(8, 6), Run::new(2, 1), Run::new(4, 2),
    Run::new(5, 11), Run::new(2, 2), Run::new(3, 2), Run::new(2, 10), Run::new(3, 2),
    Run::new(2, 2), Run::new(0, 18),
];
const R129: &[Run] = &[
    Run::new(9, 30), Run::new(2, 1), Run::new(4, 2), Run::new(5, 5), Run::new(6, 1), Run::new(5, 5),
    Run::new(2, 1), Run::new(3, 16), Run::new(2, 1), Run::new(1, 1), Run::new(0, 17),
];
const R130: &[Run] = &[
    Run::new(10, 8), Run::new(9, 8), Run::new(10, 8), Run::new(9, 6), Run::new(2, 1),
    Run::new(4, 2), Run::new(5, 11), Run::new(2, 1), Run::new(3, 16), Run::new(2, 1),
    Run::new(0, 18),
];
const R131: &[Run] = &[
    Run::new(10, 30), Run::new(2, 1), Run::new(4, 2), Run::new(5, 11), Run::new(2, 1),
    Run::new(3, 3), Run::new(1, 1), Run::new(2, 1), Run::new(3, 5), Run::new(1, 1), Run::new(2, 1),
    Run::new(3, 4), Run::new(2, 1), Run::new(0, 18),
];
const R132: &[Run] = &[
    Run::new(11, 8), Run::new(10, 8), Run::new(11, 8), Run::new(10, 2), Run::new(2, 5),
    Run::new(4, 2), Run::new(5, 11), Run::new(2, 1), Run::new(3, 16), Run::new(2, 1),
    Run::new(0, 18),
];
const R133: &[Run] = &[
    Run::new(12, 8), Run::new(11, 8), Run::new(12, 8), Run::new(11, 6), Run::new(2, 1),
    Run::new(4, 2), Run::new(5, 11), Run::new(2, 1), Run::new(3, 16), Run::new(2, 1),
    Run::new(0, 18),
];
const R134: &[Run] = &[
    Run::new(0, 8), Run::new(12, 8), Run::new(0, 8), Run::new(12, 6), Run::new(2, 23),
    Run::new(0, 27),
];
const R135: &[Run] = &[
    Run::new(0, 31), Run::new(2, 1), Run::new(3, 1), Run::new(2, 1), Run::new(0, 2), Run::new(2, 1),
    Run::new(3, 1), Run::new(2, 1), Run::new(0, 5), Run::new(2, 1), Run::new(3, 1), Run::new(2, 1),
    Run::new(0, 2), Run::new(2, 1), Run::new(3, 1), Run::new(2, 1), Run::new(0, 28),
];
const R136: &[Run] = &[Run::new(0, 47), Run::new(1, 1), Run::new(0, 32)];
const R137: &[Run] = &[Run::new(0, 46), Run::new(1, 3), Run::new(0, 31)];
const R138: &[Run] = &[Run::new(0, 78), Run::new(1, 1), Run::new(0, 1)];
const R139: &[Run] = &[Run::new(0, 77), Run::new(1, 3)];
const R140: &[Run] = &[Run::new(0, 24), Run::new(1, 1), Run::new(0, 55)];
const R141: &[Run] = &[Run::new(0, 23), Run::new(1, 3), Run::new(0, 54)];
const R142: &[Run] = &[
    Run::new(0, 49), Run::new(1, 1), Run::new(0, 1), Run::new(1, 1), Run::new(0, 1), Run::new(1, 1),
    Run::new(0, 11), Run::new(1, 1), Run::new(0, 14),
];
const R143: &[Run] = &[
    Run::new(0, 51), Run::new(1, 1), Run::new(0, 11), Run::new(1, 1), Run::new(0, 1),
    Run::new(1, 1), Run::new(0, 1), Run::new(1, 1), Run::new(0, 12),
];
const R144: &[Run] = &[
    Run::new(0, 32), Run::new(1, 1), Run::new(0, 32), Run::new(1, 1), Run::new(0, 14),
];
const R145: &[Run] = &[
    Run::new(0, 30), Run::new(1, 1), Run::new(0, 1), Run::new(1, 1), Run::new(0, 1), Run::new(1, 1),
    Run::new(0, 45),
];
const R146: &[Run] = &[Run::new(1, 1), Run::new(0, 79)];
const R147: &[Run] = &[Run::new(1, 1), Run::new(0, 1), Run::new(1, 1), Run::new(0, 77)];
const R148: &[Run] = &[
    Run::new(11, 8), Run::new(10, 8), Run::new(11, 8), Run::new(10, 2), Run::new(2, 1),
    Run::new(3, 3), Run::new(2, 1), Run::new(4, 2), Run::new(5, 11), Run::new(2, 1),
    Run::new(3, 16), Run::new(2, 1), Run::new(0, 18),
];
const R149: &[Run] = &[Run::new(0, 43), Run::new(1, 1), Run::new(0, 36)];
const R150: &[Run] = &[
    Run::new(0, 41), Run::new(1, 1), Run::new(0, 1), Run::new(1, 1), Run::new(0, 1), Run::new(1, 1),
    Run::new(0, 34),
];
const R151: &[Run] = &[Run::new(0, 74), Run::new(1, 1), Run::new(0, 5)];
const R152: &[Run] = &[
    Run::new(0, 72), Run::new(1, 1), Run::new(0, 1), Run::new(1, 1), Run::new(0, 1), Run::new(1, 1),
    Run::new(0, 3),
];
const R153: &[Run] = &[
    Run::new(0, 18), Run::new(1, 1), Run::new(0, 1), Run::new(1, 1), Run::new(0, 1), Run::new(1, 1),
    Run::new(0, 57),
];
const R154: &[Run] = &[
    Run::new(0, 5), Run::new(1, 3), Run::new(0, 39), Run::new(1, 1), Run::new(0, 32),
];
const R155: &[Run] = &[
    Run::new(0, 6), Run::new(1, 1), Run::new(0, 39), Run::new(1, 3), Run::new(0, 31),
];
const R156: &[Run] = &[
    Run::new(0, 47), Run::new(1, 1), Run::new(0, 13), Run::new(1, 1), Run::new(0, 18),
];
const R157: &[Run] = &[Run::new(0, 60), Run::new(1, 3), Run::new(0, 17)];
const R158: &[Run] = &[Run::new(0, 61), Run::new(1, 1), Run::new(0, 18)];
const R159: &[Run] = &[Run::new(0, 27), Run::new(1, 3), Run::new(0, 50)];
const R160: &[Run] = &[Run::new(0, 76), Run::new(1, 1), Run::new(0, 3)];
const R161: &[Run] = &[Run::new(0, 75), Run::new(1, 3), Run::new(0, 2)];
const R162: &[Run] = &[
    Run::new(9, 8), Run::new(10, 8), Run::new(9, 8), Run::new(10, 6), Run::new(2, 1),
    Run::new(4, 2), Run::new(5, 11), Run::new(2, 1), Run::new(3, 3), Run::new(1, 1), Run::new(2, 1),
    Run::new(3, 5), Run::new(1, 1), Run::new(2, 1), Run::new(3, 4), Run::new(2, 1), Run::new(0, 18),
];
const R163: &[Run] = &[Run::new(0, 39), Run::new(1, 1), Run::new(0, 40)];
const R164: &[Run] = &[Run::new(0, 38), Run::new(1, 3), Run::new(0, 39)];
const R165: &[Run] = &[Run::new(0, 70), Run::new(1, 1), Run::new(0, 9)];
const R166: &[Run] = &[Run::new(0, 69), Run::new(1, 3), Run::new(0, 8)];
const R167: &[Run] = &[Run::new(0, 15), Run::new(1, 3), Run::new(0, 62)];
const R168: &[Run] = &[
    Run::new(0, 41), Run::new(1, 1), Run::new(0, 1), Run::new(1, 1), Run::new(0, 1), Run::new(1, 1),
    Run::new(0, 11), Run::new(1, 1), Run::new(0, 22),
];
const R169: &[Run] = &[
    Run::new(0, 43), Run::new(1, 1), Run::new(0, 11), Run::new(1, 1), Run::new(0, 1),
    Run::new(1, 1), Run::new(0, 1), Run::new(1, 1), Run::new(0, 20),
];
const R170: &[Run] = &[
    Run::new(0, 24), Run::new(1, 1), Run::new(0, 32), Run::new(1, 1), Run::new(0, 22),
];
const R171: &[Run] = &[
    Run::new(0, 22), Run::new(1, 1), Run::new(0, 1), Run::new(1, 1), Run::new(0, 1), Run::new(1, 1),
    Run::new(0, 53),
];
const R172: &[Run] = &[Run::new(0, 72), Run::new(1, 1), Run::new(0, 7)];
const R173: &[Run] = &[
    Run::new(0, 70), Run::new(1, 1), Run::new(0, 1), Run::new(1, 1), Run::new(0, 1), Run::new(1, 1),
    Run::new(0, 5),
];
const R174: &[Run] = &[
    Run::new(0, 30), Run::new(2, 23), Run::new(0, 19), Run::new(1, 1), Run::new(0, 7),
];
const R175: &[Run] = &[
    Run::new(12, 8), Run::new(0, 8), Run::new(12, 8), Run::new(0, 8), Run::new(2, 1),
    Run::new(3, 1), Run::new(2, 1), Run::new(0, 2), Run::new(2, 1), Run::new(3, 1), Run::new(2, 1),
    Run::new(0, 5), Run::new(2, 1), Run::new(3, 1), Run::new(2, 1), Run::new(0, 2), Run::new(2, 1),
    Run::new(3, 1), Run::new(2, 1), Run::new(0, 27),
];
const R176: &[Run] = &[Run::new(0, 35), Run::new(1, 1), Run::new(0, 44)];
const R177: &[Run] = &[
    Run::new(0, 33), Run::new(1, 1), Run::new(0, 1), Run::new(1, 1), Run::new(0, 1), Run::new(1, 1),
    Run::new(0, 42),
];
const R178: &[Run] = &[Run::new(0, 66), Run::new(1, 1), Run::new(0, 13)];
const R179: &[Run] = &[
    Run::new(0, 64), Run::new(1, 1), Run::new(0, 1), Run::new(1, 1), Run::new(0, 1), Run::new(1, 1),
    Run::new(0, 11),
];
const R180: &[Run] = &[
    Run::new(0, 10), Run::new(1, 1), Run::new(0, 1), Run::new(1, 1), Run::new(0, 1), Run::new(1, 1),
    Run::new(0, 65),
];
const R181: &[Run] = &[Run::new(0, 39), Run::new(1, 1), Run::new(0, 37), Run::new(1, 3)];
const R182: &[Run] = &[
    Run::new(0, 38), Run::new(1, 3), Run::new(0, 37), Run::new(1, 1), Run::new(0, 1),
];
const R183: &[Run] = &[
    Run::new(0, 39), Run::new(1, 1), Run::new(0, 13), Run::new(1, 1), Run::new(0, 26),
];
const R184: &[Run] = &[Run::new(0, 52), Run::new(1, 3), Run::new(0, 25)];
const R185: &[Run] = &[Run::new(0, 53), Run::new(1, 1), Run::new(0, 26)];
const R186: &[Run] = &[Run::new(0, 68), Run::new(1, 1), Run::new(0, 11)];
const R187: &[Run] = &[Run::new(0, 67), Run::new(1, 3), Run::new(0, 10)];
const R188: &[Run] = &[Run::new(0, 31), Run::new(1, 1), Run::new(0, 48)];
const R189: &[Run] = &[Run::new(0, 30), Run::new(1, 3), Run::new(0, 47)];
const R190: &[Run] = &[Run::new(0, 62), Run::new(1, 1), Run::new(0, 17)];
const R191: &[Run] = &[Run::new(0, 61), Run::new(1, 3), Run::new(0, 16)];
const R192: &[Run] = &[Run::new(0, 7), Run::new(1, 3), Run::new(0, 70)];
const R193: &[Run] = &[
    Run::new(0, 33), Run::new(1, 1), Run::new(0, 1), Run::new(1, 1), Run::new(0, 1), Run::new(1, 1),
    Run::new(0, 11), Run::new(1, 1), Run::new(0, 30),
];
const R194: &[Run] = &[
    Run::new(0, 35), Run::new(1, 1), Run::new(0, 11), Run::new(1, 1), Run::new(0, 1),
    Run::new(1, 1), Run::new(0, 1), Run::new(1, 1), Run::new(0, 28),
];
const R195: &[Run] = &[
    Run::new(0, 16), Run::new(1, 1), Run::new(0, 32), Run::new(1, 1), Run::new(0, 30),
];
const R196: &[Run] = &[Run::new(0, 64), Run::new(1, 1), Run::new(0, 15)];
const R197: &[Run] = &[
    Run::new(0, 62), Run::new(1, 1), Run::new(0, 1), Run::new(1, 1), Run::new(0, 1), Run::new(1, 1),
    Run::new(0, 13),
];
const R198: &[Run] = &[Run::new(0, 27), Run::new(1, 1), Run::new(0, 52)];
const R199: &[Run] = &[
    Run::new(0, 25), Run::new(1, 1), Run::new(0, 1), Run::new(1, 1), Run::new(0, 1), Run::new(1, 1),
    Run::new(0, 50),
];
const R200: &[Run] = &[Run::new(0, 58), Run::new(1, 1), Run::new(0, 21)];
const R201: &[Run] = &[
    Run::new(0, 56), Run::new(1, 1), Run::new(0, 1), Run::new(1, 1), Run::new(0, 1), Run::new(1, 1),
    Run::new(0, 19),
];
const R202: &[Run] = &[
    Run::new(0, 2), Run::new(1, 1), Run::new(0, 1), Run::new(1, 1), Run::new(0, 1), Run::new(1, 1),
    Run::new(0, 73),
];
const R203: &[Run] = &[
    Run::new(0, 31), Run::new(1, 1), Run::new(0, 37), Run::new(1, 3), Run::new(0, 8),
];
const R204: &[Run] = &[
    Run::new(0, 30), Run::new(1, 3), Run::new(0, 37), Run::new(1, 1), Run::new(0, 9),
];
const R205: &[Run] = &[
    Run::new(0, 31), Run::new(1, 1), Run::new(0, 13), Run::new(1, 1), Run::new(0, 34),
];
const R206: &[Run] = &[Run::new(0, 44), Run::new(1, 3), Run::new(0, 33)];
const R207: &[Run] = &[Run::new(0, 45), Run::new(1, 1), Run::new(0, 34)];
const R208: &[Run] = &[Run::new(0, 60), Run::new(1, 1), Run::new(0, 19)];
const R209: &[Run] = &[Run::new(0, 59), Run::new(1, 3), Run::new(0, 18)];
const R210: &[Run] = &[
    Run::new(8, 8), Run::new(9, 8), Run::new(8, 8), Run::new(9, 6), Run::new(2, 1), Run::new(4, 2),
    Run::new(5, 11), Run::new(2, 2), Run::new(3, 2), Run::new(2, 10), Run::new(3, 2),
    Run::new(2, 2), Run::new(0, 18),
];
const R211: &[Run] = &[
    Run::new(10, 8), Run::new(11, 8), Run::new(10, 8), Run::new(11, 2), Run::new(2, 5),
    Run::new(4, 2), Run::new(5, 11), Run::new(2, 1), Run::new(3, 16), Run::new(2, 1),
    Run::new(0, 18),
];
const R212: &[Run] = &[Run::new(0, 23), Run::new(1, 1), Run::new(0, 56)];
const R213: &[Run] = &[Run::new(0, 22), Run::new(1, 3), Run::new(0, 55)];
const R214: &[Run] = &[Run::new(0, 54), Run::new(1, 1), Run::new(0, 25)];
const R215: &[Run] = &[Run::new(0, 53), Run::new(1, 3), Run::new(0, 24)];
const R216: &[Run] = &[Run::new(1, 2), Run::new(0, 78)];
const R217: &[Run] = &[
    Run::new(0, 25), Run::new(1, 1), Run::new(0, 1), Run::new(1, 1), Run::new(0, 1), Run::new(1, 1),
    Run::new(0, 11), Run::new(1, 1), Run::new(0, 38),
];
const R218: &[Run] = &[
    Run::new(0, 27), Run::new(1, 1), Run::new(0, 11), Run::new(1, 1), Run::new(0, 1),
    Run::new(1, 1), Run::new(0, 1), Run::new(1, 1), Run::new(0, 36),
];
const R219: &[Run] = &[
    Run::new(0, 8), Run::new(1, 1), Run::new(0, 32), Run::new(1, 1), Run::new(0, 38),
];
const R220: &[Run] = &[Run::new(0, 56), Run::new(1, 1), Run::new(0, 23)];
const R221: &[Run] = &[
    Run::new(0, 54), Run::new(1, 1), Run::new(0, 1), Run::new(1, 1), Run::new(0, 1), Run::new(1, 1),
    Run::new(0, 21),
];
const R222: &[Run] = &[Run::new(0, 19), Run::new(1, 1), Run::new(0, 60)];
const R223: &[Run] = &[
    Run::new(0, 17), Run::new(1, 1), Run::new(0, 1), Run::new(1, 1), Run::new(0, 1), Run::new(1, 1),
    Run::new(0, 58),
];
const R224: &[Run] = &[Run::new(0, 50), Run::new(1, 1), Run::new(0, 29)];
const R225: &[Run] = &[
    Run::new(0, 48), Run::new(1, 1), Run::new(0, 1), Run::new(1, 1), Run::new(0, 1), Run::new(1, 1),
    Run::new(0, 27),
];
const R226: &[Run] = &[
    Run::new(0, 74), Run::new(1, 1), Run::new(0, 1), Run::new(1, 1), Run::new(0, 1), Run::new(1, 1),
    Run::new(0, 1),
];

pub(crate) static FRAMES: [Frame; 12] = [
    Frame::new(&[
        R0, R0, R1, R2, R3, R4, R5, R6, R0, R7, R8, R7, R0, R0, R0, R9, R10, R9, R11, R12, R12, R13,
        R14, R15, R16, R17, R18, R19, R20, R21, R22, R23, R24, R25, R26, R27, R28, R29, R30, R31,
        R32, R0, R0, R33, R34, R33, R35, R36, R35, R0, R0, R0, R0, R37, R38, R37, R0, R0, R0, R0,
    ]),
    Frame::new(&[
        R0, R39, R40, R41, R42, R39, R43, R0, R44, R0, R45, R0, R46, R0, R47, R0, R48, R0, R49, R12,
        R12, R13, R14, R15, R16, R17, R18, R50, R51, R52, R53, R54, R55, R25, R26, R27, R28, R29,
        R30, R56, R57, R0, R58, R0, R59, R60, R58, R61, R0, R60, R0, R0, R62, R0, R63, R0, R62, R0,
        R0, R0,
    ]),
    Frame::new(&[
        R0, R0, R64, R65, R66, R67, R68, R69, R0, R70, R71, R70, R0, R0, R0, R72, R73, R72, R11,
        R12, R12, R74, R14, R15, R75, R17, R18, R76, R77, R78, R79, R23, R24, R80, R26, R27, R81,
        R29, R30, R82, R32, R0, R0, R83, R84, R83, R85, R86, R85, R0, R0, R0, R0, R87, R88, R87, R0,
        R0, R0, R0,
    ]),
    Frame::new(&[
        R0, R89, R58, R90, R91, R89, R92, R0, R93, R0, R94, R0, R37, R0, R95, R0, R96, R0, R95, R11,
        R12, R97, R98, R14, R99, R17, R17, R100, R101, R102, R103, R104, R105, R106, R107, R26,
        R108, R109, R29, R110, R111, R57, R112, R0, R113, R114, R112, R115, R0, R114, R0, R0, R116,
        R0, R117, R0, R116, R0, R0, R0,
    ]),
    Frame::new(&[
        R0, R0, R35, R118, R119, R120, R121, R122, R0, R62, R123, R62, R0, R0, R0, R124, R125, R124,
        R0, R11, R12, R126, R98, R14, R127, R17, R17, R128, R101, R129, R130, R131, R23, R132, R107,
        R26, R133, R109, R29, R134, R135, R32, R0, R136, R137, R136, R138, R139, R138, R0, R0, R0,
        R0, R140, R141, R140, R0, R0, R0, R0,
    ]),
    Frame::new(&[
        R0, R60, R112, R61, R142, R60, R143, R0, R144, R0, R145, R0, R87, R0, R146, R0, R147, R0,
        R146, R11, R12, R126, R98, R14, R127, R17, R17, R128, R101, R51, R130, R131, R105, R148,
        R107, R26, R133, R109, R29, R134, R111, R57, R149, R0, R150, R151, R149, R152, R0, R151, R0,
        R0, R9, R0, R153, R0, R9, R0, R0, R0,
    ]),
    Frame::new(&[
        R0, R0, R85, R154, R155, R156, R157, R158, R0, R116, R159, R116, R0, R0, R0, R160, R161,
        R160, R11, R12, R12, R74, R14, R15, R75, R17, R18, R76, R51, R101, R162, R23, R24, R80, R26,
        R27, R81, R29, R30, R82, R32, R0, R0, R163, R164, R163, R165, R166, R165, R0, R0, R0, R0,
        R47, R167, R47, R0, R0, R0, R0,
    ]),
    Frame::new(&[
        R0, R114, R149, R115, R168, R114, R169, R0, R170, R0, R171, R0, R140, R0, R172, R0, R173,
        R0, R174, R12, R12, R74, R14, R15, R75, R17, R18, R76, R51, R101, R162, R105, R55, R80, R26,
        R27, R81, R29, R30, R175, R57, R0, R176, R0, R177, R178, R176, R179, R0, R178, R0, R0, R72,
        R0, R180, R0, R72, R0, R0, R0,
    ]),
    Frame::new(&[
        R0, R0, R138, R181, R182, R183, R184, R185, R0, R9, R10, R9, R0, R0, R0, R186, R187, R186,
        R11, R12, R12, R13, R14, R15, R16, R17, R18, R19, R51, R101, R53, R23, R24, R25, R26, R27,
        R28, R29, R30, R31, R32, R0, R0, R188, R189, R188, R190, R191, R190, R0, R0, R0, R0, R95,
        R192, R95, R0, R0, R0, R0,
    ]),
    Frame::new(&[
        R0, R151, R176, R152, R193, R151, R194, R0, R195, R0, R48, R0, R47, R0, R196, R0, R197, R0,
        R196, R11, R12, R126, R98, R14, R127, R17, R17, R128, R101, R51, R130, R131, R105, R148,
        R107, R26, R133, R109, R29, R134, R111, R57, R198, R0, R199, R200, R198, R201, R0, R200, R0,
        R0, R124, R0, R202, R0, R124, R0, R0, R0,
    ]),
    Frame::new(&[
        R0, R0, R165, R203, R204, R205, R206, R207, R0, R72, R73, R72, R0, R0, R0, R208, R209, R208,
        R0, R11, R12, R97, R98, R14, R99, R17, R17, R210, R101, R51, R103, R131, R23, R211, R107,
        R26, R108, R109, R29, R110, R135, R32, R0, R212, R213, R212, R214, R215, R214, R0, R0, R0,
        R0, R146, R216, R146, R0, R0, R0, R0,
    ]),
    Frame::new(&[
        R0, R178, R198, R179, R217, R178, R218, R0, R219, R0, R96, R0, R95, R0, R220, R0, R221, R0,
        R220, R11, R12, R97, R98, R14, R99, R17, R17, R210, R101, R51, R103, R131, R105, R106, R107,
        R26, R108, R109, R29, R110, R111, R57, R222, R0, R223, R224, R222, R225, R0, R224, R0, R0,
        R160, R0, R226, R0, R160, R0, R0, R0,
    ]),
];
