//! 封閉的字串列舉
//!
//! 每個列舉都是固定的變體集合，每個變體恰有一個線路值。
//! 解析為精確且區分大小寫的比對：未知或空白的值一律回傳 `InvalidArgument`，不會退回預設值。

use crate::utils::error::{ModelError, Result};

pub trait ClosedStringEnum: Copy + Eq + Sized + 'static {
    /// 錯誤訊息中使用的型別名稱
    const NAME: &'static str;

    /// 依宣告順序排列的所有變體
    const VARIANTS: &'static [Self];

    /// 此變體的標準線路值
    fn as_wire_value(&self) -> &'static str;

    /// 精確查詢線路值，未知時回傳 `None`
    fn lookup(value: &str) -> Option<Self>;

    fn from_value(value: &str) -> Result<Self> {
        if value.is_empty() {
            return Err(ModelError::invalid_argument("Value cannot be null or empty!"));
        }

        Self::lookup(value).ok_or_else(|| {
            ModelError::invalid_argument(format!(
                "Cannot create {} from {} value!",
                Self::NAME,
                value
            ))
        })
    }

    /// 將缺值 (`None`) 視同空字串
    fn from_optional_value(value: Option<&str>) -> Result<Self> {
        Self::from_value(value.unwrap_or_default())
    }

    fn wire_values() -> Vec<&'static str> {
        Self::VARIANTS.iter().map(|v| v.as_wire_value()).collect()
    }
}

/// 宣告封閉列舉及其線路值對照表
///
/// 產生的型別可 `Copy`、可雜湊，`Display` 與序列化皆使用線路值字串。
macro_rules! closed_string_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $wire:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize,
        )]
        #[serde(try_from = "String", into = "&'static str")]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
        }

        impl $crate::domain::closed_enum::ClosedStringEnum for $name {
            const NAME: &'static str = stringify!($name);
            const VARIANTS: &'static [Self] = &[$($name::$variant,)+];

            fn as_wire_value(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }

            fn lookup(value: &str) -> Option<Self> {
                match value {
                    $($wire => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl $name {
            pub fn from_value(value: &str) -> $crate::utils::error::Result<Self> {
                <Self as $crate::domain::closed_enum::ClosedStringEnum>::from_value(value)
            }

            pub fn as_wire_value(&self) -> &'static str {
                <Self as $crate::domain::closed_enum::ClosedStringEnum>::as_wire_value(self)
            }

            pub fn values() -> &'static [Self] {
                <Self as $crate::domain::closed_enum::ClosedStringEnum>::VARIANTS
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_wire_value())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::utils::error::ModelError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                Self::from_value(s)
            }
        }

        impl ::std::convert::TryFrom<&str> for $name {
            type Error = $crate::utils::error::ModelError;

            fn try_from(value: &str) -> ::std::result::Result<Self, Self::Error> {
                Self::from_value(value)
            }
        }

        impl ::std::convert::TryFrom<String> for $name {
            type Error = $crate::utils::error::ModelError;

            fn try_from(value: String) -> ::std::result::Result<Self, Self::Error> {
                Self::from_value(&value)
            }
        }

        impl From<$name> for &'static str {
            fn from(value: $name) -> Self {
                value.as_wire_value()
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_wire_value()
            }
        }
    };
}

pub(crate) use closed_string_enum;
