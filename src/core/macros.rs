//! Macros for declaring state enums.

/// Generate a `State` implementation for a fieldless enum.
///
/// Variants listed under `error:` report `is_error() == true`.
///
/// # Example
///
/// ```
/// use tablefront::state_enum;
/// use tablefront::core::State;
///
/// state_enum! {
///     pub enum BannerState {
///         Hidden,
///         Success,
///         Failure,
///     }
///     error: [Failure]
/// }
///
/// assert_eq!(BannerState::Hidden.name(), "Hidden");
/// assert!(BannerState::Failure.is_error());
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(error: [$($error:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn is_error(&self) -> bool {
                match self {
                    $($(Self::$error => true,)*)?
                    _ => false,
                }
            }
        }
    };
}
