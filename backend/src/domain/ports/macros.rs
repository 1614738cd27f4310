//! Helper macro for declaring repository error enums.
//!
//! Each variant carries named fields and a `thiserror` message. A snake_case
//! constructor is generated per variant whose parameters accept anything that
//! converts into the field type, so call sites can pass `&str` for `String`.

macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident { $($field:ident : $ty:ty),* $(,)? } => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
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
                    #[doc = concat!(
                        "Construct [`", stringify!($name), "::", stringify!($variant), "`]."
                    )]
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
            Missing { key: String } => "missing key {key}",
            Exhausted { limit: u64 } => "exhausted after {limit}",
            Rejected { reason: String, attempts: u32 } => "rejected: {reason} ({attempts})",
        }
    }

    #[test]
    fn string_fields_accept_str() {
        assert_eq!(SamplePortError::missing("a").to_string(), "missing key a");
    }

    #[test]
    fn numeric_fields_accept_smaller_integers() {
        assert_eq!(
            SamplePortError::exhausted(7_u32).to_string(),
            "exhausted after 7"
        );
    }

    #[test]
    fn mixed_fields_keep_declaration_order() {
        assert_eq!(
            SamplePortError::rejected("busy", 3_u32),
            SamplePortError::Rejected {
                reason: "busy".to_owned(),
                attempts: 3
            }
        );
    }
}
