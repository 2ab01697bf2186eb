use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;
use rusqlite::ToSql;
use rusqlite::types::{FromSql, FromSqlResult, ToSqlOutput, Value, ValueRef};
use serde::{Deserialize, Serialize};

/// A type-safe wrapper around the row id the metadata store assigns to a file record.
///
/// It is only ever used as a lookup key. Holding a `FileId` implies nothing about
/// the lifetime of the record it names.
//
// // 元数据存储为文件记录分配的行 ID 的类型安全包装器。
// //
// // 它只用作查找键，持有 `FileId` 并不意味着所指记录仍然存在。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileId(i64);

impl FileId {
    /// Wraps a raw row id.
    // // 包装一个原始的行 ID。
    pub fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Returns the raw integer id.
    // // 返回原始的整数 ID。
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

/// 允许 `FileId::from(42)`
impl From<i64> for FileId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

/// 允许 `println!("{}", id)`
impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 允许 `"42".parse::<FileId>()`，CLI 的 `--parent` 参数依赖它
impl FromStr for FileId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<i64>().map(Self)
    }
}

/// 存储到数据库时，编码为 INTEGER
impl ToSql for FileId {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::Owned(Value::Integer(self.0)))
    }
}

/// 从数据库 INTEGER 读取
impl FromSql for FileId {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value.as_i64().map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let id: FileId = " 42 ".parse().expect("Parsing should succeed");
        assert_eq!(id, FileId::new(42));
        assert_eq!(id.to_string(), "42");
        assert!("forty-two".parse::<FileId>().is_err());
    }

    #[test]
    fn test_serializes_as_plain_number() {
        let json = serde_json::to_string(&FileId::new(7)).unwrap();
        assert_eq!(json, "7");
        let back: FileId = serde_json::from_str(&json).unwrap();
        assert_eq!(back.as_i64(), 7);
    }

    #[test]
    fn test_rusqlite_roundtrip() {
        let id = FileId::new(123);

        let sql_value = match id.to_sql().expect("ToSql failed") {
            ToSqlOutput::Owned(v) => v,
            _ => panic!("Expected Owned variant from ToSqlOutput"),
        };
        assert_eq!(sql_value, Value::Integer(123));

        let recovered = FileId::column_result(ValueRef::Integer(123)).expect("FromSql failed");
        assert_eq!(recovered, id);
        assert!(FileId::column_result(ValueRef::Text(b"123")).is_err());
    }
}
