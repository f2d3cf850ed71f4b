use crate::like::LikeError;
use std::fmt::{self, Display};

/// 标识符最大长度（与 varchar(191) 索引列一致）
pub const MAX_ID_LEN: usize = 191;

// Helper macro to define string identifier newtypes and common trait impls
macro_rules! define_id {
    ($name:ident, $field:literal) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(String);

        impl $name {
            pub fn parse(raw: impl Into<String>) -> Result<Self, LikeError> {
                let raw = raw.into();
                if raw.trim().is_empty() {
                    return Err(LikeError::Validation(format!(
                        "{} must not be empty",
                        $field
                    )));
                }
                if raw.chars().count() > MAX_ID_LEN {
                    return Err(LikeError::Validation(format!(
                        "{} must be at most {} characters",
                        $field, MAX_ID_LEN
                    )));
                }
                Ok(Self(raw))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

define_id!(UserId, "userId");
define_id!(PostId, "postId");
