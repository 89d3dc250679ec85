//! Modular arithmetic on the 12-position palace ring.
//!
//! Positions are earthly-branch indices: 0 = Zi … 11 = Hai. "Forward" is
//! the clockwise direction of the chart (Zi → Chou → Yin …).

/// Number of positions on the ring.
pub const RING_SIZE: u8 = 12;

/// Branch index of Yin, where month counting starts.
pub const YIN: u8 = 2;

/// Branch index of Chen.
pub const CHEN: u8 = 4;

/// Branch index of Xu.
pub const XU: u8 = 10;

/// Branch index of Hai.
pub const HAI: u8 = 11;

/// Move `steps` positions from `pos`; negative steps go counter-clockwise.
pub fn step(pos: u8, steps: i32) -> u8 {
    (pos as i32 + steps).rem_euclid(RING_SIZE as i32) as u8
}

/// Clockwise distance from `from` to `to`, 0..=11.
pub fn distance_forward(from: u8, to: u8) -> u8 {
    step(to, -(from as i32))
}

/// Reflection across the Yin–Shen axis (branches 2 and 8 stay put).
pub fn mirror(pos: u8) -> u8 {
    step(2 * YIN, -(pos as i32))
}
