/// Configuration macros for single-declaration config definitions
///
/// `config_struct!` defines a configuration structure together with its defaults.

/// Define a configuration struct with embedded defaults
///
/// Each field is declared as `name: Type = default`. The macro generates:
/// - The struct with public fields
/// - The Default implementation
/// - Serde support with `#[serde(default)]`, so a partial TOML table keeps
///   the defaults for every key it leaves out
///
/// # Example
/// ```
/// tokenscan::config_struct! {
///     pub struct EndpointConfig {
///         enabled: bool = true,
///         base_url: String = "https://api.example.com".to_string(),
///     }
/// }
///
/// assert!(EndpointConfig::default().enabled);
/// ```
#[macro_export]
macro_rules! config_struct {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_name:ident: $field_type:ty = $default_value:expr
            ),*
            $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(default)]
        $vis struct $name {
            $(
                $(#[$field_meta])*
                pub $field_name: $field_type,
            )*
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    $(
                        $field_name: $default_value,
                    )*
                }
            }
        }
    };
}
