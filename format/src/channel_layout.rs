//! Channel masks from `libavutil/channel_layout.h`.
//!
//! Layouts are built from the channel bits the same way the header builds
//! them, so a drift in one bit shows up in every layout that uses it.

/// Front left.
pub const AV_CH_FRONT_LEFT: u64 = 1 << 0;
/// Front right.
pub const AV_CH_FRONT_RIGHT: u64 = 1 << 1;
/// Front center.
pub const AV_CH_FRONT_CENTER: u64 = 1 << 2;
/// Low frequency effects.
pub const AV_CH_LOW_FREQUENCY: u64 = 1 << 3;
/// Back left.
pub const AV_CH_BACK_LEFT: u64 = 1 << 4;
/// Back right.
pub const AV_CH_BACK_RIGHT: u64 = 1 << 5;
/// Front left of center.
pub const AV_CH_FRONT_LEFT_OF_CENTER: u64 = 1 << 6;
/// Front right of center.
pub const AV_CH_FRONT_RIGHT_OF_CENTER: u64 = 1 << 7;
/// Back center.
pub const AV_CH_BACK_CENTER: u64 = 1 << 8;
/// Side left.
pub const AV_CH_SIDE_LEFT: u64 = 1 << 9;
/// Side right.
pub const AV_CH_SIDE_RIGHT: u64 = 1 << 10;
/// Top center.
pub const AV_CH_TOP_CENTER: u64 = 1 << 11;
/// Top front left.
pub const AV_CH_TOP_FRONT_LEFT: u64 = 1 << 12;
/// Top front center.
pub const AV_CH_TOP_FRONT_CENTER: u64 = 1 << 13;
/// Top front right.
pub const AV_CH_TOP_FRONT_RIGHT: u64 = 1 << 14;
/// Top back left.
pub const AV_CH_TOP_BACK_LEFT: u64 = 1 << 15;
/// Top back center.
pub const AV_CH_TOP_BACK_CENTER: u64 = 1 << 16;
/// Top back right.
pub const AV_CH_TOP_BACK_RIGHT: u64 = 1 << 17;
/// Stereo downmix, left.
pub const AV_CH_STEREO_LEFT: u64 = 1 << 29;
/// Stereo downmix, right.
pub const AV_CH_STEREO_RIGHT: u64 = 1 << 30;
/// Wide left.
pub const AV_CH_WIDE_LEFT: u64 = 1 << 31;
/// Wide right.
pub const AV_CH_WIDE_RIGHT: u64 = 1 << 32;
/// Surround direct left.
pub const AV_CH_SURROUND_DIRECT_LEFT: u64 = 1 << 33;
/// Surround direct right.
pub const AV_CH_SURROUND_DIRECT_RIGHT: u64 = 1 << 34;
/// Second low frequency channel.
pub const AV_CH_LOW_FREQUENCY_2: u64 = 1 << 35;
/// Top side left.
pub const AV_CH_TOP_SIDE_LEFT: u64 = 1 << 36;
/// Top side right.
pub const AV_CH_TOP_SIDE_RIGHT: u64 = 1 << 37;
/// Bottom front center.
pub const AV_CH_BOTTOM_FRONT_CENTER: u64 = 1 << 38;
/// Bottom front left.
pub const AV_CH_BOTTOM_FRONT_LEFT: u64 = 1 << 39;
/// Bottom front right.
pub const AV_CH_BOTTOM_FRONT_RIGHT: u64 = 1 << 40;

/// Channel mask on its own is meaningless; the channel order is native.
pub const AV_CH_LAYOUT_NATIVE: u64 = 0x8000_0000_0000_0000;

/// Mono.
pub const AV_CH_LAYOUT_MONO: u64 = AV_CH_FRONT_CENTER;
/// Stereo.
pub const AV_CH_LAYOUT_STEREO: u64 = AV_CH_FRONT_LEFT | AV_CH_FRONT_RIGHT;
/// 2.1.
pub const AV_CH_LAYOUT_2POINT1: u64 = AV_CH_LAYOUT_STEREO | AV_CH_LOW_FREQUENCY;
/// 2 front + 1 back.
pub const AV_CH_LAYOUT_2_1: u64 = AV_CH_LAYOUT_STEREO | AV_CH_BACK_CENTER;
/// 3.0.
pub const AV_CH_LAYOUT_SURROUND: u64 = AV_CH_LAYOUT_STEREO | AV_CH_FRONT_CENTER;
/// 3.1.
pub const AV_CH_LAYOUT_3POINT1: u64 = AV_CH_LAYOUT_SURROUND | AV_CH_LOW_FREQUENCY;
/// 4.0.
pub const AV_CH_LAYOUT_4POINT0: u64 = AV_CH_LAYOUT_SURROUND | AV_CH_BACK_CENTER;
/// 4.1.
pub const AV_CH_LAYOUT_4POINT1: u64 = AV_CH_LAYOUT_4POINT0 | AV_CH_LOW_FREQUENCY;
/// 2 front + 2 side.
pub const AV_CH_LAYOUT_2_2: u64 = AV_CH_LAYOUT_STEREO | AV_CH_SIDE_LEFT | AV_CH_SIDE_RIGHT;
/// Quad.
pub const AV_CH_LAYOUT_QUAD: u64 = AV_CH_LAYOUT_STEREO | AV_CH_BACK_LEFT | AV_CH_BACK_RIGHT;
/// 5.0 (side).
pub const AV_CH_LAYOUT_5POINT0: u64 = AV_CH_LAYOUT_SURROUND | AV_CH_SIDE_LEFT | AV_CH_SIDE_RIGHT;
/// 5.1 (side).
pub const AV_CH_LAYOUT_5POINT1: u64 = AV_CH_LAYOUT_5POINT0 | AV_CH_LOW_FREQUENCY;
/// 5.0 (back).
pub const AV_CH_LAYOUT_5POINT0_BACK: u64 =
    AV_CH_LAYOUT_SURROUND | AV_CH_BACK_LEFT | AV_CH_BACK_RIGHT;
/// 5.1 (back).
pub const AV_CH_LAYOUT_5POINT1_BACK: u64 = AV_CH_LAYOUT_5POINT0_BACK | AV_CH_LOW_FREQUENCY;
/// 6.0.
pub const AV_CH_LAYOUT_6POINT0: u64 = AV_CH_LAYOUT_5POINT0 | AV_CH_BACK_CENTER;
/// 6.0 (front).
pub const AV_CH_LAYOUT_6POINT0_FRONT: u64 =
    AV_CH_LAYOUT_2_2 | AV_CH_FRONT_LEFT_OF_CENTER | AV_CH_FRONT_RIGHT_OF_CENTER;
/// Hexagonal.
pub const AV_CH_LAYOUT_HEXAGONAL: u64 = AV_CH_LAYOUT_5POINT0_BACK | AV_CH_BACK_CENTER;
/// 6.1.
pub const AV_CH_LAYOUT_6POINT1: u64 = AV_CH_LAYOUT_5POINT1 | AV_CH_BACK_CENTER;
/// 6.1 (back).
pub const AV_CH_LAYOUT_6POINT1_BACK: u64 = AV_CH_LAYOUT_5POINT1_BACK | AV_CH_BACK_CENTER;
/// 6.1 (front).
pub const AV_CH_LAYOUT_6POINT1_FRONT: u64 = AV_CH_LAYOUT_6POINT0_FRONT | AV_CH_LOW_FREQUENCY;
/// 7.0.
pub const AV_CH_LAYOUT_7POINT0: u64 = AV_CH_LAYOUT_5POINT0 | AV_CH_BACK_LEFT | AV_CH_BACK_RIGHT;
/// 7.0 (front).
pub const AV_CH_LAYOUT_7POINT0_FRONT: u64 =
    AV_CH_LAYOUT_5POINT0 | AV_CH_FRONT_LEFT_OF_CENTER | AV_CH_FRONT_RIGHT_OF_CENTER;
/// 7.1.
pub const AV_CH_LAYOUT_7POINT1: u64 = AV_CH_LAYOUT_5POINT1 | AV_CH_BACK_LEFT | AV_CH_BACK_RIGHT;
/// 7.1 (wide).
pub const AV_CH_LAYOUT_7POINT1_WIDE: u64 =
    AV_CH_LAYOUT_5POINT1 | AV_CH_FRONT_LEFT_OF_CENTER | AV_CH_FRONT_RIGHT_OF_CENTER;
/// 7.1 (wide, back).
pub const AV_CH_LAYOUT_7POINT1_WIDE_BACK: u64 =
    AV_CH_LAYOUT_5POINT1_BACK | AV_CH_FRONT_LEFT_OF_CENTER | AV_CH_FRONT_RIGHT_OF_CENTER;
/// Octagonal.
pub const AV_CH_LAYOUT_OCTAGONAL: u64 =
    AV_CH_LAYOUT_5POINT0 | AV_CH_BACK_LEFT | AV_CH_BACK_CENTER | AV_CH_BACK_RIGHT;
/// Hexadecagonal.
pub const AV_CH_LAYOUT_HEXADECAGONAL: u64 = AV_CH_LAYOUT_OCTAGONAL
    | AV_CH_WIDE_LEFT
    | AV_CH_WIDE_RIGHT
    | AV_CH_TOP_BACK_LEFT
    | AV_CH_TOP_BACK_RIGHT
    | AV_CH_TOP_BACK_CENTER
    | AV_CH_TOP_FRONT_CENTER
    | AV_CH_TOP_FRONT_LEFT
    | AV_CH_TOP_FRONT_RIGHT;
/// Stereo downmix.
pub const AV_CH_LAYOUT_STEREO_DOWNMIX: u64 = AV_CH_STEREO_LEFT | AV_CH_STEREO_RIGHT;

/// Number of channels in a mask. The [`AV_CH_LAYOUT_NATIVE`] marker is not a channel.
#[must_use]
pub const fn channel_count(mask: u64) -> u32 {
    (mask & !AV_CH_LAYOUT_NATIVE).count_ones()
}

/// Every named layout, for tables and consistency checks.
pub const NAMED_LAYOUTS: &[(&str, u64)] = &[
    ("AV_CH_LAYOUT_MONO", AV_CH_LAYOUT_MONO),
    ("AV_CH_LAYOUT_STEREO", AV_CH_LAYOUT_STEREO),
    ("AV_CH_LAYOUT_2POINT1", AV_CH_LAYOUT_2POINT1),
    ("AV_CH_LAYOUT_2_1", AV_CH_LAYOUT_2_1),
    ("AV_CH_LAYOUT_SURROUND", AV_CH_LAYOUT_SURROUND),
    ("AV_CH_LAYOUT_3POINT1", AV_CH_LAYOUT_3POINT1),
    ("AV_CH_LAYOUT_4POINT0", AV_CH_LAYOUT_4POINT0),
    ("AV_CH_LAYOUT_4POINT1", AV_CH_LAYOUT_4POINT1),
    ("AV_CH_LAYOUT_2_2", AV_CH_LAYOUT_2_2),
    ("AV_CH_LAYOUT_QUAD", AV_CH_LAYOUT_QUAD),
    ("AV_CH_LAYOUT_5POINT0", AV_CH_LAYOUT_5POINT0),
    ("AV_CH_LAYOUT_5POINT1", AV_CH_LAYOUT_5POINT1),
    ("AV_CH_LAYOUT_5POINT0_BACK", AV_CH_LAYOUT_5POINT0_BACK),
    ("AV_CH_LAYOUT_5POINT1_BACK", AV_CH_LAYOUT_5POINT1_BACK),
    ("AV_CH_LAYOUT_6POINT0", AV_CH_LAYOUT_6POINT0),
    ("AV_CH_LAYOUT_6POINT0_FRONT", AV_CH_LAYOUT_6POINT0_FRONT),
    ("AV_CH_LAYOUT_HEXAGONAL", AV_CH_LAYOUT_HEXAGONAL),
    ("AV_CH_LAYOUT_6POINT1", AV_CH_LAYOUT_6POINT1),
    ("AV_CH_LAYOUT_6POINT1_BACK", AV_CH_LAYOUT_6POINT1_BACK),
    ("AV_CH_LAYOUT_6POINT1_FRONT", AV_CH_LAYOUT_6POINT1_FRONT),
    ("AV_CH_LAYOUT_7POINT0", AV_CH_LAYOUT_7POINT0),
    ("AV_CH_LAYOUT_7POINT0_FRONT", AV_CH_LAYOUT_7POINT0_FRONT),
    ("AV_CH_LAYOUT_7POINT1", AV_CH_LAYOUT_7POINT1),
    ("AV_CH_LAYOUT_7POINT1_WIDE", AV_CH_LAYOUT_7POINT1_WIDE),
    ("AV_CH_LAYOUT_7POINT1_WIDE_BACK", AV_CH_LAYOUT_7POINT1_WIDE_BACK),
    ("AV_CH_LAYOUT_OCTAGONAL", AV_CH_LAYOUT_OCTAGONAL),
    ("AV_CH_LAYOUT_HEXADECAGONAL", AV_CH_LAYOUT_HEXADECAGONAL),
    ("AV_CH_LAYOUT_STEREO_DOWNMIX", AV_CH_LAYOUT_STEREO_DOWNMIX),
];
