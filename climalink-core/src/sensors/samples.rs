//! Synthetic sample tables
//!
//! The node has no physical environmental sensors; readings are replayed from
//! these tables in order, wrapping around at the end.

/// Entries per synthetic table
pub const SAMPLE_TABLE_LEN: usize = 40;

/// Temperature readings, 0..=150 with 50 as the zero point on the wire
pub const TEMPERATURE_SAMPLES: [u16; SAMPLE_TABLE_LEN] = [
    85, 21, 48, 104, 81, 82, 8, 35, 74, 59, 73, 40, 50, 64, 32, 23, 57, 10, 86, 7, 72, 95, 27, 105,
    29, 61, 62, 38, 96, 25, 88, 33, 15, 18, 46, 51, 26, 45, 3, 5,
];

/// Relative humidity readings, percent
pub const HUMIDITY_SAMPLES: [u16; SAMPLE_TABLE_LEN] = [
    64, 78, 50, 87, 62, 91, 23, 98, 41, 33, 40, 52, 27, 77, 68, 70, 67, 36, 18, 4, 30, 72, 76, 66,
    61, 32, 71, 49, 24, 86, 34, 26, 1, 81, 97, 83, 82, 75, 94, 58,
];

/// CO2 readings, ppm
pub const CO2_SAMPLES: [u16; SAMPLE_TABLE_LEN] = [
    7524, 6942, 17760, 11267, 14115, 13289, 13410, 2896, 18347, 4499, 19297, 5312, 2175, 18053,
    6888, 671, 14137, 19925, 18978, 13048, 19773, 13704, 7337, 14087, 5248, 19812, 4111, 13252,
    6610, 5159, 4132, 9233, 12526, 17417, 18090, 6902, 19685, 7580, 12508, 428,
];
