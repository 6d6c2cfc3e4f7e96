//! Helper macro for generating domain port error enums.

/// Generate a `thiserror` enum with snake_case convenience constructors.
///
/// Variants are either unit variants or carry a single `message: String`
/// field; the constructor for the latter accepts anything `Into<String>`.
macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { message: $msg_ty:ty } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { message: $msg_ty } )?,
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant $( { message: $msg_ty } )?);
            )*
        }
    };

    (@ctor $variant:ident) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $variant:ident { message: $msg_ty:ty }) => {
        ::paste::paste! {
            pub fn [<$variant:snake>](message: impl Into<String>) -> Self {
                Self::$variant { message: message.into() }
            }
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    define_port_error! {
        pub enum ExamplePortError {
            Missing => "record missing",
            Query { message: String } => "query failed: {message}",
        }
    }

    #[test]
    fn unit_constructor_builds_the_variant() {
        assert_eq!(ExamplePortError::missing(), ExamplePortError::Missing);
    }

    #[test]
    fn message_constructor_accepts_str() {
        let err = ExamplePortError::query("boom");
        assert_eq!(err.to_string(), "query failed: boom");
    }
}
