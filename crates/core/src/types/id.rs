//! Newtype wrappers for Shopify global IDs.
//!
//! Shopify identifies every object with a global ID of the form
//! `gid://shopify/<Resource>/<number>`. Use the `define_gid!` macro to create
//! type-safe wrappers that prevent accidentally mixing IDs from different
//! resources.

/// Prefix shared by all Shopify global IDs.
pub const GID_PREFIX: &str = "gid://shopify/";

/// Macro to define a type-safe Shopify global ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - Accessors: `new()`, `as_str()`, `numeric_id()`
/// - `Display` and `From<String>` implementations
///
/// # Example
///
/// ```rust
/// # use flagpole_core::define_gid;
/// define_gid!(CustomerId);
/// define_gid!(OrderId);
///
/// let customer_id = CustomerId::new("gid://shopify/Customer/42");
/// assert_eq!(customer_id.numeric_id(), Some(42));
///
/// // These are different types, so this won't compile:
/// // let _: CustomerId = OrderId::new("gid://shopify/Order/1");
/// ```
#[macro_export]
macro_rules! define_gid {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap a raw global ID string.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the raw global ID string.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Numeric tail of the global ID, ignoring any `?query` suffix.
            ///
            /// Returns `None` if the ID is not a `gid://shopify/...` string or
            /// the tail is not numeric.
            #[must_use]
            pub fn numeric_id(&self) -> Option<u64> {
                $crate::types::id::parse_numeric_tail(&self.0)
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

/// Extract the numeric tail of a Shopify global ID.
#[must_use]
pub fn parse_numeric_tail(gid: &str) -> Option<u64> {
    let rest = gid.strip_prefix(GID_PREFIX)?;
    let tail = rest.rsplit('/').next()?;
    let tail = tail.split('?').next().unwrap_or(tail);
    tail.parse().ok()
}

// Resources returned by the Customer Account API
define_gid!(CustomerId);
define_gid!(OrderId);
define_gid!(AddressId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_id() {
        let id = OrderId::new("gid://shopify/Order/5551234");
        assert_eq!(id.numeric_id(), Some(5_551_234));
    }

    #[test]
    fn test_numeric_id_with_query_suffix() {
        let id = AddressId::new("gid://shopify/CustomerAddress/77?model_name=CustomerAddress");
        assert_eq!(id.numeric_id(), Some(77));
    }

    #[test]
    fn test_numeric_id_rejects_foreign_strings() {
        assert_eq!(CustomerId::new("42").numeric_id(), None);
        assert_eq!(CustomerId::new("gid://shopify/Customer/abc").numeric_id(), None);
    }

    #[test]
    fn test_serde_transparent() {
        let id: CustomerId = serde_json::from_str("\"gid://shopify/Customer/9\"")
            .expect("deserialize");
        assert_eq!(id.as_str(), "gid://shopify/Customer/9");
        assert_eq!(id.to_string(), "gid://shopify/Customer/9");
    }
}
