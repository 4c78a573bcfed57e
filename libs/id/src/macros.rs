//! Macros for defining typed identifiers.

/// Macro to define a typed identifier with a fixed prefix.
///
/// This generates a newtype wrapper around [`UuidBase62`](crate::UuidBase62) with:
/// - A `PREFIX` constant, checked against `[a-zA-Z0-9_]+` at compile time
/// - `new()` to generate a fresh random ID
/// - `from_uuid()` and `parse()` constructors that enforce the prefix
/// - `field()` returning the bound [`UuidBase62Field`](crate::UuidBase62Field)
/// - `Display`, `FromStr`, `Serialize` and `Deserialize` implementations
/// - `Ord`, `Hash`, and other standard traits
///
/// # Example
///
/// ```
/// use uuidbase62_id::define_uuidbase62;
///
/// define_uuidbase62!(CustomerId, "cust");
///
/// let id = CustomerId::new();
/// let parsed: CustomerId = id.to_string().parse().unwrap();
/// assert_eq!(id, parsed);
/// assert!("inv_7yNMTpVy8ddRxYKGJqtk7e".parse::<CustomerId>().is_err());
/// ```
#[macro_export]
macro_rules! define_uuidbase62 {
    ($name:ident, $prefix:literal) => {
        /// A typed identifier for this resource type.
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name($crate::UuidBase62);

        const _: () = assert!(
            $crate::is_valid_prefix($prefix),
            concat!("invalid identifier prefix: ", $prefix)
        );

        impl $name {
            /// The prefix for this ID type.
            pub const PREFIX: &'static str = $prefix;

            /// Creates a new ID from a fresh random UUID.
            #[must_use]
            pub fn new() -> Self {
                Self($crate::generate(Some(Self::PREFIX)))
            }

            /// Creates an ID from a raw UUID.
            #[must_use]
            pub fn from_uuid(uuid: $crate::Uuid) -> Self {
                Self($crate::UuidBase62::from_uuid(uuid, Some(Self::PREFIX)))
            }

            /// The validator bound to this ID type's prefix.
            #[must_use]
            pub const fn field() -> $crate::UuidBase62Field {
                $crate::UuidBase62Field::from_static(Self::PREFIX)
            }

            /// Parses an ID from UUID text or `{prefix}_{base62}`.
            pub fn parse(s: &str) -> Result<Self, $crate::IdError> {
                Self::field().validate(s).map(Self)
            }

            /// Returns the underlying UUID.
            #[must_use]
            pub const fn uuid(&self) -> $crate::Uuid {
                self.0.uuid()
            }

            /// Returns the canonical string.
            #[must_use]
            pub fn as_str(&self) -> &str {
                self.0.as_str()
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(&self.0, f)
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::IdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl TryFrom<$crate::UuidBase62> for $name {
            type Error = $crate::IdError;

            fn try_from(id: $crate::UuidBase62) -> Result<Self, Self::Error> {
                Self::field().validate(id).map(Self)
            }
        }

        impl From<$name> for $crate::UuidBase62 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                Self::parse(&s).map_err(serde::de::Error::custom)
            }
        }

        impl AsRef<$crate::UuidBase62> for $name {
            fn as_ref(&self) -> &$crate::UuidBase62 {
                &self.0
            }
        }
    };
}
