/// Derive `FromStr` for a `ValueEnum`, honoring every alias it declares
macro_rules! impl_fromstr_via_value_enum {
    ($enum_type:ty, $error_reason:expr) => {
        impl FromStr for $enum_type {
            type Err = $crate::primitives::ConfigError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <Self as ValueEnum>::from_str(s, true).map_err(|_| {
                    $crate::primitives::ConfigError::ParseError {
                        value: s.to_string(),
                        reason: $error_reason.to_string(),
                    }
                })
            }
        }
    };
}

pub(crate) use impl_fromstr_via_value_enum;
