//! Helper macro for declaring port error enums with snake-case constructors.

/// Declare a `thiserror` enum whose variants all carry named fields, plus one
/// constructor per variant accepting `impl Into<_>` for each field.
macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident { $($field:ident : $ty:ty),* $(,)? } => $message:literal
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, ::thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant { $($field: $ty),* },
            )*
        }

        impl $name {
            $(
                ::paste::paste! {
                    #[doc = "Construct [`" $name "::" $variant "`]."]
                    pub fn [<$variant:snake>]($($field: impl Into<$ty>),*) -> Self {
                        Self::$variant { $($field: $field.into()),* }
                    }
                }
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    define_port_error! {
        pub enum SamplePortError {
            Missing { key: String } => "missing {key}",
            Conflict { key: String, attempts: u32 } => "conflict on {key} after {attempts} attempts",
        }
    }

    #[test]
    fn constructors_are_snake_case_and_accept_str() {
        let err = SamplePortError::missing("alpha");
        assert_eq!(err.to_string(), "missing alpha");
        assert_eq!(
            err,
            SamplePortError::Missing {
                key: "alpha".to_owned()
            }
        );
    }

    #[test]
    fn multi_field_variants_format_every_field() {
        let err = SamplePortError::conflict("beta", 3_u32);
        assert_eq!(err.to_string(), "conflict on beta after 3 attempts");
    }
}
