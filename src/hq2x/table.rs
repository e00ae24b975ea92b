// The 256-entry rule table of the published hq2x algorithm. Each pattern
// byte selects four output sub-pixels built from the centre, its edge
// neighbours and its diagonals with the i1..i10 blending primitives.
//
// Neighbour indices are row-major: 0 1 2 / 3 4 5 / 6 7 8 with the centre at
// 4. Corner rules conditional on a diagonal similarity test choose between
// a blended and a passthrough output. The match is exhaustive over the
// pattern byte, so a missing rule cannot compile.

use super::{Px, Ycbcr, diff, i1, i2, i6, i7, i9, i10};

#[allow(clippy::too_many_lines)]
pub(super) fn expand(pattern: u8, w: &[Px; 9], d: &[Ycbcr; 9]) -> [Px; 4] {
    let c = w[4];
    let lt = diff(d[3], d[1]);
    let tr = diff(d[1], d[5]);
    let rb = diff(d[5], d[7]);
    let bl = diff(d[7], d[3]);

    // Output order: top-left, top-right, bottom-left, bottom-right.
    match pattern {
        0 | 1 | 4 | 32 | 128 | 5 | 132 | 160 | 33 | 129 | 36 | 133 | 164 | 161 | 37 | 165 => [
            i2(c, w[3], w[1]),
            i2(c, w[1], w[5]),
            i2(c, w[7], w[3]),
            i2(c, w[5], w[7]),
        ],
        2 | 34 | 130 | 162 => [
            i2(c, w[0], w[3]),
            i2(c, w[2], w[5]),
            i2(c, w[7], w[3]),
            i2(c, w[5], w[7]),
        ],
        16 | 17 | 48 | 49 => [
            i2(c, w[3], w[1]),
            i2(c, w[2], w[1]),
            i2(c, w[7], w[3]),
            i2(c, w[8], w[7]),
        ],
        64 | 65 | 68 | 69 => [
            i2(c, w[3], w[1]),
            i2(c, w[1], w[5]),
            i2(c, w[6], w[3]),
            i2(c, w[8], w[5]),
        ],
        8 | 12 | 136 | 140 => [
            i2(c, w[0], w[1]),
            i2(c, w[1], w[5]),
            i2(c, w[6], w[7]),
            i2(c, w[5], w[7]),
        ],
        3 | 35 | 131 | 163 => [
            i1(c, w[3]),
            i2(c, w[2], w[5]),
            i2(c, w[7], w[3]),
            i2(c, w[5], w[7]),
        ],
        6 | 38 | 134 | 166 => [
            i2(c, w[0], w[3]),
            i1(c, w[5]),
            i2(c, w[7], w[3]),
            i2(c, w[5], w[7]),
        ],
        20 | 21 | 52 | 53 => [
            i2(c, w[3], w[1]),
            i1(c, w[1]),
            i2(c, w[7], w[3]),
            i2(c, w[8], w[7]),
        ],
        144 | 145 | 176 | 177 => [
            i2(c, w[3], w[1]),
            i2(c, w[2], w[1]),
            i2(c, w[7], w[3]),
            i1(c, w[7]),
        ],
        192 | 193 | 196 | 197 => [
            i2(c, w[3], w[1]),
            i2(c, w[1], w[5]),
            i2(c, w[6], w[3]),
            i1(c, w[5]),
        ],
        96 | 97 | 100 | 101 => [
            i2(c, w[3], w[1]),
            i2(c, w[1], w[5]),
            i1(c, w[3]),
            i2(c, w[8], w[5]),
        ],
        40 | 44 | 168 | 172 => [
            i2(c, w[0], w[1]),
            i2(c, w[1], w[5]),
            i1(c, w[7]),
            i2(c, w[5], w[7]),
        ],
        9 | 13 | 137 | 141 => [
            i1(c, w[1]),
            i2(c, w[1], w[5]),
            i2(c, w[6], w[7]),
            i2(c, w[5], w[7]),
        ],
        18 | 50 => [
            i2(c, w[0], w[3]),
            if tr { i1(c, w[2]) } else { i2(c, w[1], w[5]) },
            i2(c, w[7], w[3]),
            i2(c, w[8], w[7]),
        ],
        80 | 81 => [
            i2(c, w[3], w[1]),
            i2(c, w[2], w[1]),
            i2(c, w[6], w[3]),
            if rb { i1(c, w[8]) } else { i2(c, w[5], w[7]) },
        ],
        72 | 76 => [
            i2(c, w[0], w[1]),
            i2(c, w[1], w[5]),
            if bl { i1(c, w[6]) } else { i2(c, w[7], w[3]) },
            i2(c, w[8], w[5]),
        ],
        10 | 138 => [
            if lt { i1(c, w[0]) } else { i2(c, w[3], w[1]) },
            i2(c, w[2], w[5]),
            i2(c, w[6], w[7]),
            i2(c, w[5], w[7]),
        ],
        66 => [
            i2(c, w[0], w[3]),
            i2(c, w[2], w[5]),
            i2(c, w[6], w[3]),
            i2(c, w[8], w[5]),
        ],
        24 => [
            i2(c, w[0], w[1]),
            i2(c, w[2], w[1]),
            i2(c, w[6], w[7]),
            i2(c, w[8], w[7]),
        ],
        7 | 39 | 135 => [
            i1(c, w[3]),
            i1(c, w[5]),
            i2(c, w[7], w[3]),
            i2(c, w[5], w[7]),
        ],
        148 | 149 | 180 => [
            i2(c, w[3], w[1]),
            i1(c, w[1]),
            i2(c, w[7], w[3]),
            i1(c, w[7]),
        ],
        224 | 228 | 225 => [
            i2(c, w[3], w[1]),
            i2(c, w[1], w[5]),
            i1(c, w[3]),
            i1(c, w[5]),
        ],
        41 | 169 | 45 => [
            i1(c, w[1]),
            i2(c, w[1], w[5]),
            i1(c, w[7]),
            i2(c, w[5], w[7]),
        ],
        22 | 54 => [
            i2(c, w[0], w[3]),
            if tr { c } else { i2(c, w[1], w[5]) },
            i2(c, w[7], w[3]),
            i2(c, w[8], w[7]),
        ],
        208 | 209 => [
            i2(c, w[3], w[1]),
            i2(c, w[2], w[1]),
            i2(c, w[6], w[3]),
            if rb { c } else { i2(c, w[5], w[7]) },
        ],
        104 | 108 => [
            i2(c, w[0], w[1]),
            i2(c, w[1], w[5]),
            if bl { c } else { i2(c, w[7], w[3]) },
            i2(c, w[8], w[5]),
        ],
        11 | 139 => [
            if lt { c } else { i2(c, w[3], w[1]) },
            i2(c, w[2], w[5]),
            i2(c, w[6], w[7]),
            i2(c, w[5], w[7]),
        ],
        19 | 51 => [
            if tr { i1(c, w[3]) } else { i6(c, w[1], w[3]) },
            if tr { i1(c, w[2]) } else { i9(c, w[1], w[5]) },
            i2(c, w[7], w[3]),
            i2(c, w[8], w[7]),
        ],
        146 | 178 => [
            i2(c, w[0], w[3]),
            if tr { i1(c, w[2]) } else { i9(c, w[1], w[5]) },
            i2(c, w[7], w[3]),
            if tr { i1(c, w[7]) } else { i6(c, w[5], w[7]) },
        ],
        84 | 85 => [
            i2(c, w[3], w[1]),
            if rb { i1(c, w[1]) } else { i6(c, w[5], w[1]) },
            i2(c, w[6], w[3]),
            if rb { i1(c, w[8]) } else { i9(c, w[5], w[7]) },
        ],
        112 | 113 => [
            i2(c, w[3], w[1]),
            i2(c, w[2], w[1]),
            if rb { i1(c, w[3]) } else { i6(c, w[7], w[3]) },
            if rb { i1(c, w[8]) } else { i9(c, w[5], w[7]) },
        ],
        200 | 204 => [
            i2(c, w[0], w[1]),
            i2(c, w[1], w[5]),
            if bl { i1(c, w[6]) } else { i9(c, w[7], w[3]) },
            if bl { i1(c, w[5]) } else { i6(c, w[7], w[5]) },
        ],
        73 | 77 => [
            if bl { i1(c, w[1]) } else { i6(c, w[3], w[1]) },
            i2(c, w[1], w[5]),
            if bl { i1(c, w[6]) } else { i9(c, w[7], w[3]) },
            i2(c, w[8], w[5]),
        ],
        42 | 170 => [
            if lt { i1(c, w[0]) } else { i9(c, w[3], w[1]) },
            i2(c, w[2], w[5]),
            if lt { i1(c, w[7]) } else { i6(c, w[3], w[7]) },
            i2(c, w[5], w[7]),
        ],
        14 | 142 => [
            if lt { i1(c, w[0]) } else { i9(c, w[3], w[1]) },
            if lt { i1(c, w[5]) } else { i6(c, w[1], w[5]) },
            i2(c, w[6], w[7]),
            i2(c, w[5], w[7]),
        ],
        67 => [
            i1(c, w[3]),
            i2(c, w[2], w[5]),
            i2(c, w[6], w[3]),
            i2(c, w[8], w[5]),
        ],
        70 => [
            i2(c, w[0], w[3]),
            i1(c, w[5]),
            i2(c, w[6], w[3]),
            i2(c, w[8], w[5]),
        ],
        28 => [
            i2(c, w[0], w[1]),
            i1(c, w[1]),
            i2(c, w[6], w[7]),
            i2(c, w[8], w[7]),
        ],
        152 => [
            i2(c, w[0], w[1]),
            i2(c, w[2], w[1]),
            i2(c, w[6], w[7]),
            i1(c, w[7]),
        ],
        194 => [
            i2(c, w[0], w[3]),
            i2(c, w[2], w[5]),
            i2(c, w[6], w[3]),
            i1(c, w[5]),
        ],
        98 => [
            i2(c, w[0], w[3]),
            i2(c, w[2], w[5]),
            i1(c, w[3]),
            i2(c, w[8], w[5]),
        ],
        56 => [
            i2(c, w[0], w[1]),
            i2(c, w[2], w[1]),
            i1(c, w[7]),
            i2(c, w[8], w[7]),
        ],
        25 => [
            i1(c, w[1]),
            i2(c, w[2], w[1]),
            i2(c, w[6], w[7]),
            i2(c, w[8], w[7]),
        ],
        26 | 31 => [
            if lt { c } else { i2(c, w[3], w[1]) },
            if tr { c } else { i2(c, w[1], w[5]) },
            i2(c, w[6], w[7]),
            i2(c, w[8], w[7]),
        ],
        82 | 214 => [
            i2(c, w[0], w[3]),
            if tr { c } else { i2(c, w[1], w[5]) },
            i2(c, w[6], w[3]),
            if rb { c } else { i2(c, w[5], w[7]) },
        ],
        88 | 248 => [
            i2(c, w[0], w[1]),
            i2(c, w[2], w[1]),
            if bl { c } else { i2(c, w[7], w[3]) },
            if rb { c } else { i2(c, w[5], w[7]) },
        ],
        74 | 107 => [
            if lt { c } else { i2(c, w[3], w[1]) },
            i2(c, w[2], w[5]),
            if bl { c } else { i2(c, w[7], w[3]) },
            i2(c, w[8], w[5]),
        ],
        27 => [
            if lt { c } else { i2(c, w[3], w[1]) },
            i1(c, w[2]),
            i2(c, w[6], w[7]),
            i2(c, w[8], w[7]),
        ],
        86 => [
            i2(c, w[0], w[3]),
            if tr { c } else { i2(c, w[1], w[5]) },
            i2(c, w[6], w[3]),
            i1(c, w[8]),
        ],
        216 => [
            i2(c, w[0], w[1]),
            i2(c, w[2], w[1]),
            i1(c, w[6]),
            if rb { c } else { i2(c, w[5], w[7]) },
        ],
        106 => [
            i1(c, w[0]),
            i2(c, w[2], w[5]),
            if bl { c } else { i2(c, w[7], w[3]) },
            i2(c, w[8], w[5]),
        ],
        30 => [
            i1(c, w[0]),
            if tr { c } else { i2(c, w[1], w[5]) },
            i2(c, w[6], w[7]),
            i2(c, w[8], w[7]),
        ],
        210 => [
            i2(c, w[0], w[3]),
            i1(c, w[2]),
            i2(c, w[6], w[3]),
            if rb { c } else { i2(c, w[5], w[7]) },
        ],
        120 => [
            i2(c, w[0], w[1]),
            i2(c, w[2], w[1]),
            if bl { c } else { i2(c, w[7], w[3]) },
            i1(c, w[8]),
        ],
        75 => [
            if lt { c } else { i2(c, w[3], w[1]) },
            i2(c, w[2], w[5]),
            i1(c, w[6]),
            i2(c, w[8], w[5]),
        ],
        29 => [
            i1(c, w[1]),
            i1(c, w[1]),
            i2(c, w[6], w[7]),
            i2(c, w[8], w[7]),
        ],
        198 => [
            i2(c, w[0], w[3]),
            i1(c, w[5]),
            i2(c, w[6], w[3]),
            i1(c, w[5]),
        ],
        184 => [
            i2(c, w[0], w[1]),
            i2(c, w[2], w[1]),
            i1(c, w[7]),
            i1(c, w[7]),
        ],
        99 => [
            i1(c, w[3]),
            i2(c, w[2], w[5]),
            i1(c, w[3]),
            i2(c, w[8], w[5]),
        ],
        57 => [
            i1(c, w[1]),
            i2(c, w[2], w[1]),
            i1(c, w[7]),
            i2(c, w[8], w[7]),
        ],
        71 => [
            i1(c, w[3]),
            i1(c, w[5]),
            i2(c, w[6], w[3]),
            i2(c, w[8], w[5]),
        ],
        156 => [
            i2(c, w[0], w[1]),
            i1(c, w[1]),
            i2(c, w[6], w[7]),
            i1(c, w[7]),
        ],
        226 => [
            i2(c, w[0], w[3]),
            i2(c, w[2], w[5]),
            i1(c, w[3]),
            i1(c, w[5]),
        ],
        60 => [
            i2(c, w[0], w[1]),
            i1(c, w[1]),
            i1(c, w[7]),
            i2(c, w[8], w[7]),
        ],
        195 => [
            i1(c, w[3]),
            i2(c, w[2], w[5]),
            i2(c, w[6], w[3]),
            i1(c, w[5]),
        ],
        102 => [
            i2(c, w[0], w[3]),
            i1(c, w[5]),
            i1(c, w[3]),
            i2(c, w[8], w[5]),
        ],
        153 => [
            i1(c, w[1]),
            i2(c, w[2], w[1]),
            i2(c, w[6], w[7]),
            i1(c, w[7]),
        ],
        58 => [
            if lt { i1(c, w[0]) } else { i7(c, w[3], w[1]) },
            if tr { i1(c, w[2]) } else { i7(c, w[1], w[5]) },
            i1(c, w[7]),
            i2(c, w[8], w[7]),
        ],
        83 => [
            i1(c, w[3]),
            if tr { i1(c, w[2]) } else { i7(c, w[1], w[5]) },
            i2(c, w[6], w[3]),
            if rb { i1(c, w[8]) } else { i7(c, w[5], w[7]) },
        ],
        92 => [
            i2(c, w[0], w[1]),
            i1(c, w[1]),
            if bl { i1(c, w[6]) } else { i7(c, w[7], w[3]) },
            if rb { i1(c, w[8]) } else { i7(c, w[5], w[7]) },
        ],
        202 => [
            if lt { i1(c, w[0]) } else { i7(c, w[3], w[1]) },
            i2(c, w[2], w[5]),
            if bl { i1(c, w[6]) } else { i7(c, w[7], w[3]) },
            i1(c, w[5]),
        ],
        78 => [
            if lt { i1(c, w[0]) } else { i7(c, w[3], w[1]) },
            i1(c, w[5]),
            if bl { i1(c, w[6]) } else { i7(c, w[7], w[3]) },
            i2(c, w[8], w[5]),
        ],
        154 => [
            if lt { i1(c, w[0]) } else { i7(c, w[3], w[1]) },
            if tr { i1(c, w[2]) } else { i7(c, w[1], w[5]) },
            i2(c, w[6], w[7]),
            i1(c, w[7]),
        ],
        114 => [
            i2(c, w[0], w[3]),
            if tr { i1(c, w[2]) } else { i7(c, w[1], w[5]) },
            i1(c, w[3]),
            if rb { i1(c, w[8]) } else { i7(c, w[5], w[7]) },
        ],
        89 => [
            i1(c, w[1]),
            i2(c, w[2], w[1]),
            if bl { i1(c, w[6]) } else { i7(c, w[7], w[3]) },
            if rb { i1(c, w[8]) } else { i7(c, w[5], w[7]) },
        ],
        90 => [
            if lt { i1(c, w[0]) } else { i7(c, w[3], w[1]) },
            if tr { i1(c, w[2]) } else { i7(c, w[1], w[5]) },
            if bl { i1(c, w[6]) } else { i7(c, w[7], w[3]) },
            if rb { i1(c, w[8]) } else { i7(c, w[5], w[7]) },
        ],
        55 | 23 => [
            if tr { i1(c, w[3]) } else { i6(c, w[1], w[3]) },
            if tr { c } else { i9(c, w[1], w[5]) },
            i2(c, w[7], w[3]),
            i2(c, w[8], w[7]),
        ],
        182 | 150 => [
            i2(c, w[0], w[3]),
            if tr { c } else { i9(c, w[1], w[5]) },
            i2(c, w[7], w[3]),
            if tr { i1(c, w[7]) } else { i6(c, w[5], w[7]) },
        ],
        213 | 212 => [
            i2(c, w[3], w[1]),
            if rb { i1(c, w[1]) } else { i6(c, w[5], w[1]) },
            i2(c, w[6], w[3]),
            if rb { c } else { i9(c, w[5], w[7]) },
        ],
        241 | 240 => [
            i2(c, w[3], w[1]),
            i2(c, w[2], w[1]),
            if rb { i1(c, w[3]) } else { i6(c, w[7], w[3]) },
            if rb { c } else { i9(c, w[5], w[7]) },
        ],
        236 | 232 => [
            i2(c, w[0], w[1]),
            i2(c, w[1], w[5]),
            if bl { c } else { i9(c, w[7], w[3]) },
            if bl { i1(c, w[5]) } else { i6(c, w[7], w[5]) },
        ],
        109 | 105 => [
            if bl { i1(c, w[1]) } else { i6(c, w[3], w[1]) },
            i2(c, w[1], w[5]),
            if bl { c } else { i9(c, w[7], w[3]) },
            i2(c, w[8], w[5]),
        ],
        171 | 43 => [
            if lt { c } else { i9(c, w[3], w[1]) },
            i2(c, w[2], w[5]),
            if lt { i1(c, w[7]) } else { i6(c, w[3], w[7]) },
            i2(c, w[5], w[7]),
        ],
        143 | 15 => [
            if lt { c } else { i9(c, w[3], w[1]) },
            if lt { i1(c, w[5]) } else { i6(c, w[1], w[5]) },
            i2(c, w[6], w[7]),
            i2(c, w[5], w[7]),
        ],
        124 => [
            i2(c, w[0], w[1]),
            i1(c, w[1]),
            if bl { c } else { i2(c, w[7], w[3]) },
            i1(c, w[8]),
        ],
        203 => [
            if lt { c } else { i2(c, w[3], w[1]) },
            i2(c, w[2], w[5]),
            i1(c, w[6]),
            i1(c, w[5]),
        ],
        62 => [
            i1(c, w[0]),
            if tr { c } else { i2(c, w[1], w[5]) },
            i1(c, w[7]),
            i2(c, w[8], w[7]),
        ],
        211 => [
            i1(c, w[3]),
            i1(c, w[2]),
            i2(c, w[6], w[3]),
            if rb { c } else { i2(c, w[5], w[7]) },
        ],
        118 => [
            i2(c, w[0], w[3]),
            if tr { c } else { i2(c, w[1], w[5]) },
            i1(c, w[3]),
            i1(c, w[8]),
        ],
        217 => [
            i1(c, w[1]),
            i2(c, w[2], w[1]),
            i1(c, w[6]),
            if rb { c } else { i2(c, w[5], w[7]) },
        ],
        110 => [
            i1(c, w[0]),
            i1(c, w[5]),
            if bl { c } else { i2(c, w[7], w[3]) },
            i2(c, w[8], w[5]),
        ],
        155 => [
            if lt { c } else { i2(c, w[3], w[1]) },
            i1(c, w[2]),
            i2(c, w[6], w[7]),
            i1(c, w[7]),
        ],
        188 => [
            i2(c, w[0], w[1]),
            i1(c, w[1]),
            i1(c, w[7]),
            i1(c, w[7]),
        ],
        185 => [
            i1(c, w[1]),
            i2(c, w[2], w[1]),
            i1(c, w[7]),
            i1(c, w[7]),
        ],
        61 => [
            i1(c, w[1]),
            i1(c, w[1]),
            i1(c, w[7]),
            i2(c, w[8], w[7]),
        ],
        157 => [
            i1(c, w[1]),
            i1(c, w[1]),
            i2(c, w[6], w[7]),
            i1(c, w[7]),
        ],
        103 => [
            i1(c, w[3]),
            i1(c, w[5]),
            i1(c, w[3]),
            i2(c, w[8], w[5]),
        ],
        227 => [
            i1(c, w[3]),
            i2(c, w[2], w[5]),
            i1(c, w[3]),
            i1(c, w[5]),
        ],
        230 => [
            i2(c, w[0], w[3]),
            i1(c, w[5]),
            i1(c, w[3]),
            i1(c, w[5]),
        ],
        199 => [
            i1(c, w[3]),
            i1(c, w[5]),
            i2(c, w[6], w[3]),
            i1(c, w[5]),
        ],
        220 => [
            i2(c, w[0], w[1]),
            i1(c, w[1]),
            if bl { i1(c, w[6]) } else { i7(c, w[7], w[3]) },
            if rb { c } else { i2(c, w[5], w[7]) },
        ],
        158 => [
            if lt { i1(c, w[0]) } else { i7(c, w[3], w[1]) },
            if tr { c } else { i2(c, w[1], w[5]) },
            i2(c, w[6], w[7]),
            i1(c, w[7]),
        ],
        234 => [
            if lt { i1(c, w[0]) } else { i7(c, w[3], w[1]) },
            i2(c, w[2], w[5]),
            if bl { c } else { i2(c, w[7], w[3]) },
            i1(c, w[5]),
        ],
        242 => [
            i2(c, w[0], w[3]),
            if tr { i1(c, w[2]) } else { i7(c, w[1], w[5]) },
            i1(c, w[3]),
            if rb { c } else { i2(c, w[5], w[7]) },
        ],
        59 => [
            if lt { c } else { i2(c, w[3], w[1]) },
            if tr { i1(c, w[2]) } else { i7(c, w[1], w[5]) },
            i1(c, w[7]),
            i2(c, w[8], w[7]),
        ],
        121 => [
            i1(c, w[1]),
            i2(c, w[2], w[1]),
            if bl { c } else { i2(c, w[7], w[3]) },
            if rb { i1(c, w[8]) } else { i7(c, w[5], w[7]) },
        ],
        87 => [
            i1(c, w[3]),
            if tr { c } else { i2(c, w[1], w[5]) },
            i2(c, w[6], w[3]),
            if rb { i1(c, w[8]) } else { i7(c, w[5], w[7]) },
        ],
        79 => [
            if lt { c } else { i2(c, w[3], w[1]) },
            i1(c, w[5]),
            if bl { i1(c, w[6]) } else { i7(c, w[7], w[3]) },
            i2(c, w[8], w[5]),
        ],
        122 => [
            if lt { i1(c, w[0]) } else { i7(c, w[3], w[1]) },
            if tr { i1(c, w[2]) } else { i7(c, w[1], w[5]) },
            if bl { c } else { i2(c, w[7], w[3]) },
            if rb { i1(c, w[8]) } else { i7(c, w[5], w[7]) },
        ],
        94 => [
            if lt { i1(c, w[0]) } else { i7(c, w[3], w[1]) },
            if tr { c } else { i2(c, w[1], w[5]) },
            if bl { i1(c, w[6]) } else { i7(c, w[7], w[3]) },
            if rb { i1(c, w[8]) } else { i7(c, w[5], w[7]) },
        ],
        218 => [
            if lt { i1(c, w[0]) } else { i7(c, w[3], w[1]) },
            if tr { i1(c, w[2]) } else { i7(c, w[1], w[5]) },
            if bl { i1(c, w[6]) } else { i7(c, w[7], w[3]) },
            if rb { c } else { i2(c, w[5], w[7]) },
        ],
        91 => [
            if lt { c } else { i2(c, w[3], w[1]) },
            if tr { i1(c, w[2]) } else { i7(c, w[1], w[5]) },
            if bl { i1(c, w[6]) } else { i7(c, w[7], w[3]) },
            if rb { i1(c, w[8]) } else { i7(c, w[5], w[7]) },
        ],
        229 => [
            i2(c, w[3], w[1]),
            i2(c, w[1], w[5]),
            i1(c, w[3]),
            i1(c, w[5]),
        ],
        167 => [
            i1(c, w[3]),
            i1(c, w[5]),
            i2(c, w[7], w[3]),
            i2(c, w[5], w[7]),
        ],
        173 => [
            i1(c, w[1]),
            i2(c, w[1], w[5]),
            i1(c, w[7]),
            i2(c, w[5], w[7]),
        ],
        181 => [
            i2(c, w[3], w[1]),
            i1(c, w[1]),
            i2(c, w[7], w[3]),
            i1(c, w[7]),
        ],
        186 => [
            if lt { i1(c, w[0]) } else { i7(c, w[3], w[1]) },
            if tr { i1(c, w[2]) } else { i7(c, w[1], w[5]) },
            i1(c, w[7]),
            i1(c, w[7]),
        ],
        115 => [
            i1(c, w[3]),
            if tr { i1(c, w[2]) } else { i7(c, w[1], w[5]) },
            i1(c, w[3]),
            if rb { i1(c, w[8]) } else { i7(c, w[5], w[7]) },
        ],
        93 => [
            i1(c, w[1]),
            i1(c, w[1]),
            if bl { i1(c, w[6]) } else { i7(c, w[7], w[3]) },
            if rb { i1(c, w[8]) } else { i7(c, w[5], w[7]) },
        ],
        206 => [
            if lt { i1(c, w[0]) } else { i7(c, w[3], w[1]) },
            i1(c, w[5]),
            if bl { i1(c, w[6]) } else { i7(c, w[7], w[3]) },
            i1(c, w[5]),
        ],
        205 | 201 => [
            i1(c, w[1]),
            i2(c, w[1], w[5]),
            if bl { i1(c, w[6]) } else { i7(c, w[7], w[3]) },
            i1(c, w[5]),
        ],
        174 | 46 => [
            if lt { i1(c, w[0]) } else { i7(c, w[3], w[1]) },
            i1(c, w[5]),
            i1(c, w[7]),
            i2(c, w[5], w[7]),
        ],
        179 | 147 => [
            i1(c, w[3]),
            if tr { i1(c, w[2]) } else { i7(c, w[1], w[5]) },
            i2(c, w[7], w[3]),
            i1(c, w[7]),
        ],
        117 | 116 => [
            i2(c, w[3], w[1]),
            i1(c, w[1]),
            i1(c, w[3]),
            if rb { i1(c, w[8]) } else { i7(c, w[5], w[7]) },
        ],
        189 => [
            i1(c, w[1]),
            i1(c, w[1]),
            i1(c, w[7]),
            i1(c, w[7]),
        ],
        231 => [
            i1(c, w[3]),
            i1(c, w[5]),
            i1(c, w[3]),
            i1(c, w[5]),
        ],
        126 => [
            i1(c, w[0]),
            if tr { c } else { i2(c, w[1], w[5]) },
            if bl { c } else { i2(c, w[7], w[3]) },
            i1(c, w[8]),
        ],
        219 => [
            if lt { c } else { i2(c, w[3], w[1]) },
            i1(c, w[2]),
            i1(c, w[6]),
            if rb { c } else { i2(c, w[5], w[7]) },
        ],
        125 => [
            if bl { i1(c, w[1]) } else { i6(c, w[3], w[1]) },
            i1(c, w[1]),
            if bl { c } else { i9(c, w[7], w[3]) },
            i1(c, w[8]),
        ],
        221 => [
            i1(c, w[1]),
            if rb { i1(c, w[1]) } else { i6(c, w[5], w[1]) },
            i1(c, w[6]),
            if rb { c } else { i9(c, w[5], w[7]) },
        ],
        207 => [
            if lt { c } else { i9(c, w[3], w[1]) },
            if lt { i1(c, w[5]) } else { i6(c, w[1], w[5]) },
            i1(c, w[6]),
            i1(c, w[5]),
        ],
        238 => [
            i1(c, w[0]),
            i1(c, w[5]),
            if bl { c } else { i9(c, w[7], w[3]) },
            if bl { i1(c, w[5]) } else { i6(c, w[7], w[5]) },
        ],
        190 => [
            i1(c, w[0]),
            if tr { c } else { i9(c, w[1], w[5]) },
            i1(c, w[7]),
            if tr { i1(c, w[7]) } else { i6(c, w[5], w[7]) },
        ],
        187 => [
            if lt { c } else { i9(c, w[3], w[1]) },
            i1(c, w[2]),
            if lt { i1(c, w[7]) } else { i6(c, w[3], w[7]) },
            i1(c, w[7]),
        ],
        243 => [
            i1(c, w[3]),
            i1(c, w[2]),
            if rb { i1(c, w[3]) } else { i6(c, w[7], w[3]) },
            if rb { c } else { i9(c, w[5], w[7]) },
        ],
        119 => [
            if tr { i1(c, w[3]) } else { i6(c, w[1], w[3]) },
            if tr { c } else { i9(c, w[1], w[5]) },
            i1(c, w[3]),
            i1(c, w[8]),
        ],
        237 | 233 => [
            i1(c, w[1]),
            i2(c, w[1], w[5]),
            if bl { c } else { i10(c, w[7], w[3]) },
            i1(c, w[5]),
        ],
        175 | 47 => [
            if lt { c } else { i10(c, w[3], w[1]) },
            i1(c, w[5]),
            i1(c, w[7]),
            i2(c, w[5], w[7]),
        ],
        183 | 151 => [
            i1(c, w[3]),
            if tr { c } else { i10(c, w[1], w[5]) },
            i2(c, w[7], w[3]),
            i1(c, w[7]),
        ],
        245 | 244 => [
            i2(c, w[3], w[1]),
            i1(c, w[1]),
            i1(c, w[3]),
            if rb { c } else { i10(c, w[5], w[7]) },
        ],
        250 => [
            i1(c, w[0]),
            i1(c, w[2]),
            if bl { c } else { i2(c, w[7], w[3]) },
            if rb { c } else { i2(c, w[5], w[7]) },
        ],
        123 => [
            if lt { c } else { i2(c, w[3], w[1]) },
            i1(c, w[2]),
            if bl { c } else { i2(c, w[7], w[3]) },
            i1(c, w[8]),
        ],
        95 => [
            if lt { c } else { i2(c, w[3], w[1]) },
            if tr { c } else { i2(c, w[1], w[5]) },
            i1(c, w[6]),
            i1(c, w[8]),
        ],
        222 => [
            i1(c, w[0]),
            if tr { c } else { i2(c, w[1], w[5]) },
            i1(c, w[6]),
            if rb { c } else { i2(c, w[5], w[7]) },
        ],
        252 => [
            i2(c, w[0], w[1]),
            i1(c, w[1]),
            if bl { c } else { i2(c, w[7], w[3]) },
            if rb { c } else { i10(c, w[5], w[7]) },
        ],
        249 => [
            i1(c, w[1]),
            i2(c, w[2], w[1]),
            if bl { c } else { i10(c, w[7], w[3]) },
            if rb { c } else { i2(c, w[5], w[7]) },
        ],
        235 => [
            if lt { c } else { i2(c, w[3], w[1]) },
            i2(c, w[2], w[5]),
            if bl { c } else { i10(c, w[7], w[3]) },
            i1(c, w[5]),
        ],
        111 => [
            if lt { c } else { i10(c, w[3], w[1]) },
            i1(c, w[5]),
            if bl { c } else { i2(c, w[7], w[3]) },
            i2(c, w[8], w[5]),
        ],
        63 => [
            if lt { c } else { i10(c, w[3], w[1]) },
            if tr { c } else { i2(c, w[1], w[5]) },
            i1(c, w[7]),
            i2(c, w[8], w[7]),
        ],
        159 => [
            if lt { c } else { i2(c, w[3], w[1]) },
            if tr { c } else { i10(c, w[1], w[5]) },
            i2(c, w[6], w[7]),
            i1(c, w[7]),
        ],
        215 => [
            i1(c, w[3]),
            if tr { c } else { i10(c, w[1], w[5]) },
            i2(c, w[6], w[3]),
            if rb { c } else { i2(c, w[5], w[7]) },
        ],
        246 => [
            i2(c, w[0], w[3]),
            if tr { c } else { i2(c, w[1], w[5]) },
            i1(c, w[3]),
            if rb { c } else { i10(c, w[5], w[7]) },
        ],
        254 => [
            i1(c, w[0]),
            if tr { c } else { i2(c, w[1], w[5]) },
            if bl { c } else { i2(c, w[7], w[3]) },
            if rb { c } else { i10(c, w[5], w[7]) },
        ],
        253 => [
            i1(c, w[1]),
            i1(c, w[1]),
            if bl { c } else { i10(c, w[7], w[3]) },
            if rb { c } else { i10(c, w[5], w[7]) },
        ],
        251 => [
            if lt { c } else { i2(c, w[3], w[1]) },
            i1(c, w[2]),
            if bl { c } else { i10(c, w[7], w[3]) },
            if rb { c } else { i2(c, w[5], w[7]) },
        ],
        239 => [
            if lt { c } else { i10(c, w[3], w[1]) },
            i1(c, w[5]),
            if bl { c } else { i10(c, w[7], w[3]) },
            i1(c, w[5]),
        ],
        127 => [
            if lt { c } else { i10(c, w[3], w[1]) },
            if tr { c } else { i2(c, w[1], w[5]) },
            if bl { c } else { i2(c, w[7], w[3]) },
            i1(c, w[8]),
        ],
        191 => [
            if lt { c } else { i10(c, w[3], w[1]) },
            if tr { c } else { i10(c, w[1], w[5]) },
            i1(c, w[7]),
            i1(c, w[7]),
        ],
        223 => [
            if lt { c } else { i2(c, w[3], w[1]) },
            if tr { c } else { i10(c, w[1], w[5]) },
            i1(c, w[6]),
            if rb { c } else { i2(c, w[5], w[7]) },
        ],
        247 => [
            i1(c, w[3]),
            if tr { c } else { i10(c, w[1], w[5]) },
            i1(c, w[3]),
            if rb { c } else { i10(c, w[5], w[7]) },
        ],
        255 => [
            if lt { c } else { i10(c, w[3], w[1]) },
            if tr { c } else { i10(c, w[1], w[5]) },
            if bl { c } else { i10(c, w[7], w[3]) },
            if rb { c } else { i10(c, w[5], w[7]) },
        ],
    }
}
