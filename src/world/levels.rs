//! Built-in map literals (16×16, row-major).

/// The reference level: a walled room with a few interior obstacles.
pub const REFERENCE: &str = concat!(
    "0000222222220000",
    "1              0",
    "1      11111   0",
    "1     0        0",
    "0     0  1110000",
    "0     3        0",
    "0   10000      0",
    "0   0   11100  0",
    "0   0   0      0",
    "0   0   1  00000",
    "0       1      0",
    "2       1      0",
    "0       0      0",
    "0 0000000      0",
    "0              0",
    "0002222222200000",
);

/// Same outer wall, nothing inside.
pub const EMPTY: &str = concat!(
    "0000222222220000",
    "1              0",
    "1              0",
    "1              0",
    "0              0",
    "0              0",
    "0              0",
    "0              0",
    "0              0",
    "0              0",
    "0              0",
    "2              0",
    "0              0",
    "0              0",
    "0              0",
    "0002222222200000",
);
