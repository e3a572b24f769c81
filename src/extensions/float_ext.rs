/// Rounds floating point values to a fixed number of decimal places.
pub trait RoundDecimals {
    fn round_decimals(self, decimals: i32) -> Self;
}

macro_rules! impl_round_decimals {
    ($($t:ty)*) => ($(
        impl RoundDecimals for $t {
            fn round_decimals(self, decimals: i32) -> $t {
                let factor = (10 as $t).powi(decimals);
                (self * factor).round() / factor
            }
        }
    )*)
}

impl_round_decimals! { f64 }
