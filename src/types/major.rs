//! Defines `MinorType`, `DataMode` and the `MajorType` pair.
use serde::{Deserialize, Serialize};
use std::fmt;

/// The base semantic kind of a value, independent of nullability or cardinality.
///
/// Boolean values are `Bit`. The set mirrors the kinds known to the wider
/// engine, even though the validation rules only single out a few of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MinorType {
    /// Type not yet bound; resolved late, at execution time.
    Late,
    Map,
    TinyInt,
    SmallInt,
    Int,
    BigInt,
    Decimal9,
    Decimal18,
    Decimal28Sparse,
    Decimal38Sparse,
    Money,
    Date,
    Time,
    TimeTz,
    TimestampTz,
    Timestamp,
    Interval,
    Float4,
    Float8,
    /// Single-bit boolean.
    Bit,
    FixedChar,
    Fixed16Char,
    FixedBinary,
    VarChar,
    Var16Char,
    VarBinary,
    UInt1,
    UInt2,
    UInt4,
    UInt8,
    Null,
    List,
}

impl MinorType {
    /// The upper-case name used in diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            MinorType::Late => "LATE",
            MinorType::Map => "MAP",
            MinorType::TinyInt => "TINYINT",
            MinorType::SmallInt => "SMALLINT",
            MinorType::Int => "INT",
            MinorType::BigInt => "BIGINT",
            MinorType::Decimal9 => "DECIMAL9",
            MinorType::Decimal18 => "DECIMAL18",
            MinorType::Decimal28Sparse => "DECIMAL28SPARSE",
            MinorType::Decimal38Sparse => "DECIMAL38SPARSE",
            MinorType::Money => "MONEY",
            MinorType::Date => "DATE",
            MinorType::Time => "TIME",
            MinorType::TimeTz => "TIMETZ",
            MinorType::TimestampTz => "TIMESTAMPTZ",
            MinorType::Timestamp => "TIMESTAMP",
            MinorType::Interval => "INTERVAL",
            MinorType::Float4 => "FLOAT4",
            MinorType::Float8 => "FLOAT8",
            MinorType::Bit => "BIT",
            MinorType::FixedChar => "FIXEDCHAR",
            MinorType::Fixed16Char => "FIXED16CHAR",
            MinorType::FixedBinary => "FIXEDBINARY",
            MinorType::VarChar => "VARCHAR",
            MinorType::Var16Char => "VAR16CHAR",
            MinorType::VarBinary => "VARBINARY",
            MinorType::UInt1 => "UINT1",
            MinorType::UInt2 => "UINT2",
            MinorType::UInt4 => "UINT4",
            MinorType::UInt8 => "UINT8",
            MinorType::Null => "NULL",
            MinorType::List => "LIST",
        }
    }

    /// True for the integer, unsigned, decimal, floating point and money kinds.
    pub const fn is_numeric(self) -> bool {
        matches!(
            self,
            MinorType::TinyInt
                | MinorType::SmallInt
                | MinorType::Int
                | MinorType::BigInt
                | MinorType::UInt1
                | MinorType::UInt2
                | MinorType::UInt4
                | MinorType::UInt8
                | MinorType::Decimal9
                | MinorType::Decimal18
                | MinorType::Decimal28Sparse
                | MinorType::Decimal38Sparse
                | MinorType::Float4
                | MinorType::Float8
                | MinorType::Money
        )
    }
}

impl fmt::Display for MinorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Cardinality/nullability qualifier of a type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DataMode {
    /// Exactly one value.
    Required,
    /// Zero or one value.
    Optional,
    /// A list of values.
    Repeated,
}

impl fmt::Display for DataMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DataMode::Required => "REQUIRED",
            DataMode::Optional => "OPTIONAL",
            DataMode::Repeated => "REPEATED",
        })
    }
}

/// The full type of an expression: base kind plus mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MajorType {
    pub minor_type: MinorType,
    pub mode: DataMode,
}

impl MajorType {
    /// Type of a schema path whose kind is only known at execution time.
    pub const LATE_BIND: MajorType = MajorType::optional(MinorType::Late);

    pub const fn new(minor_type: MinorType, mode: DataMode) -> Self {
        Self { minor_type, mode }
    }

    pub const fn required(minor_type: MinorType) -> Self {
        Self::new(minor_type, DataMode::Required)
    }

    pub const fn optional(minor_type: MinorType) -> Self {
        Self::new(minor_type, DataMode::Optional)
    }

    pub const fn repeated(minor_type: MinorType) -> Self {
        Self::new(minor_type, DataMode::Repeated)
    }

    pub const fn is_repeated(&self) -> bool {
        matches!(self.mode, DataMode::Repeated)
    }
}

/// Renders the text form downstream consumers already match on:
/// `minor_type: INT\nmode: REQUIRED\n`.
impl fmt::Display for MajorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "minor_type: {}", self.minor_type)?;
        writeln!(f, "mode: {}", self.mode)
    }
}
