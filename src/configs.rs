//! Ready-made [Config] presets, named after their block span in bits.
//!
//! [Default] (256 bits) is the span recommended by the design for cache
//! friendliness; [Small] and [Large] trade that off in either direction.

use crate::config::Config;

macro_rules! define_config {
    ($name:ident, $word:ty, $words:expr, $doc:literal) => {
        #[doc = $doc]
        #[derive(Clone, Default, Debug)]
        pub struct $name;
        impl Config for $name {
            type Word = $word;
            type Words = [$word; $words];
        }
    };
}

define_config!(Small, u64, 1, "64-bit blocks (one `u64` word each).");
define_config!(Default, u64, 4, "256-bit blocks (four `u64` words each). Recommended default.");
define_config!(Large, u64, 8, "512-bit blocks (eight `u64` words each).");

define_config!(Small32, u32, 2, "64-bit blocks built from `u32` words.");
define_config!(Default32, u32, 8, "256-bit blocks built from `u32` words.");
define_config!(Large32, u32, 16, "512-bit blocks built from `u32` words.");
