//! Status enums for visitor-submitted records.
//!
//! Both lifecycles are linear in intent (`new` onward) but transitions are
//! not validated: an admin may set any status from any other.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error parsing a status enum from a string.
#[derive(Debug, Error)]
#[error("invalid {kind} status: {value}")]
pub struct ParseStatusError {
    pub kind: &'static str,
    pub value: String,
}

/// Status of a contact form message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MessageStatus {
    #[default]
    New,
    Read,
    Replied,
    Closed,
}

impl MessageStatus {
    /// Stable string form, matching the database representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Read => "read",
            Self::Replied => "replied",
            Self::Closed => "closed",
        }
    }
}

impl std::fmt::Display for MessageStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MessageStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(Self::New),
            "read" => Ok(Self::Read),
            "replied" => Ok(Self::Replied),
            "closed" => Ok(Self::Closed),
            _ => Err(ParseStatusError {
                kind: "message",
                value: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for MessageStatus {
    type Error = ParseStatusError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Status of a quote request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum QuoteStatus {
    #[default]
    New,
    Contacted,
    Quoted,
    Closed,
}

impl QuoteStatus {
    /// Stable string form, matching the database representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Contacted => "contacted",
            Self::Quoted => "quoted",
            Self::Closed => "closed",
        }
    }
}

impl std::fmt::Display for QuoteStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for QuoteStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(Self::New),
            "contacted" => Ok(Self::Contacted),
            "quoted" => Ok(Self::Quoted),
            "closed" => Ok(Self::Closed),
            _ => Err(ParseStatusError {
                kind: "quote",
                value: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for QuoteStatus {
    type Error = ParseStatusError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

// Stored as TEXT in postgres; decode/encode via the string form.
#[cfg(feature = "postgres")]
mod pg {
    use super::{MessageStatus, QuoteStatus};

    macro_rules! text_enum_pg {
        ($name:ident) => {
            impl ::sqlx::Type<::sqlx::Postgres> for $name {
                fn type_info() -> ::sqlx::postgres::PgTypeInfo {
                    <String as ::sqlx::Type<::sqlx::Postgres>>::type_info()
                }

                fn compatible(ty: &::sqlx::postgres::PgTypeInfo) -> bool {
                    <String as ::sqlx::Type<::sqlx::Postgres>>::compatible(ty)
                }
            }

            impl<'r> ::sqlx::Decode<'r, ::sqlx::Postgres> for $name {
                fn decode(
                    value: ::sqlx::postgres::PgValueRef<'r>,
                ) -> Result<Self, ::sqlx::error::BoxDynError> {
                    let s = <&str as ::sqlx::Decode<::sqlx::Postgres>>::decode(value)?;
                    Ok(s.parse::<Self>()?)
                }
            }

            impl ::sqlx::Encode<'_, ::sqlx::Postgres> for $name {
                fn encode_by_ref(
                    &self,
                    buf: &mut ::sqlx::postgres::PgArgumentBuffer,
                ) -> Result<::sqlx::encode::IsNull, ::sqlx::error::BoxDynError> {
                    <&str as ::sqlx::Encode<::sqlx::Postgres>>::encode_by_ref(&self.as_str(), buf)
                }
            }
        };
    }

    text_enum_pg!(MessageStatus);
    text_enum_pg!(QuoteStatus);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_status_roundtrip() {
        for status in [
            MessageStatus::New,
            MessageStatus::Read,
            MessageStatus::Replied,
            MessageStatus::Closed,
        ] {
            let parsed: MessageStatus = status.to_string().parse().expect("parse");
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn test_quote_status_roundtrip() {
        for status in [
            QuoteStatus::New,
            QuoteStatus::Contacted,
            QuoteStatus::Quoted,
            QuoteStatus::Closed,
        ] {
            let parsed: QuoteStatus = status.to_string().parse().expect("parse");
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn test_invalid_status_rejected() {
        assert!("archived".parse::<MessageStatus>().is_err());
        assert!("pending".parse::<QuoteStatus>().is_err());
    }

    #[test]
    fn test_status_defaults_to_new() {
        assert_eq!(MessageStatus::default(), MessageStatus::New);
        assert_eq!(QuoteStatus::default(), QuoteStatus::New);
    }
}
