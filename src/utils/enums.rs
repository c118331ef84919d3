use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};

/// Role attached to the profile row at sign-up. Employers post jobs,
/// employees apply to them, customers do neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Employer,
    Employee,
    Customer,
}

impl AccountType {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "employer" => Some(Self::Employer),
            "employee" => Some(Self::Employee),
            "customer" => Some(Self::Customer),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Employer => "employer",
            Self::Employee => "employee",
            Self::Customer => "customer",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LocationType {
    OnSite,
    Hybrid,
    Remote,
}

impl LocationType {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "on-site" => Some(Self::OnSite),
            "hybrid" => Some(Self::Hybrid),
            "remote" => Some(Self::Remote),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::OnSite => "on-site",
            Self::Hybrid => "hybrid",
            Self::Remote => "remote",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmploymentType {
    FullTime,
    PartTime,
    Contract,
    Internship,
    Temporary,
}

impl EmploymentType {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "full-time" => Some(Self::FullTime),
            "part-time" => Some(Self::PartTime),
            "contract" => Some(Self::Contract),
            "internship" => Some(Self::Internship),
            "temporary" => Some(Self::Temporary),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::FullTime => "full-time",
            Self::PartTime => "part-time",
            Self::Contract => "contract",
            Self::Internship => "internship",
            Self::Temporary => "temporary",
        }
    }
}

// SQLite stores the enumerations as their wire strings; reading back an
// unknown value is a conversion failure, not a silent default.

impl ToSql for AccountType {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for AccountType {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let text = value.as_str()?;
        Self::parse(text)
            .ok_or_else(|| FromSqlError::Other(format!("unknown account type: {text}").into()))
    }
}

impl ToSql for LocationType {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for LocationType {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let text = value.as_str()?;
        Self::parse(text)
            .ok_or_else(|| FromSqlError::Other(format!("unknown location type: {text}").into()))
    }
}

impl ToSql for EmploymentType {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for EmploymentType {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let text = value.as_str()?;
        Self::parse(text)
            .ok_or_else(|| FromSqlError::Other(format!("unknown employment type: {text}").into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_every_variant() {
        for variant in [
            AccountType::Employer,
            AccountType::Employee,
            AccountType::Customer,
        ] {
            assert_eq!(AccountType::parse(variant.as_str()), Some(variant));
        }
        for variant in [
            LocationType::OnSite,
            LocationType::Hybrid,
            LocationType::Remote,
        ] {
            assert_eq!(LocationType::parse(variant.as_str()), Some(variant));
        }
        for variant in [
            EmploymentType::FullTime,
            EmploymentType::PartTime,
            EmploymentType::Contract,
            EmploymentType::Internship,
            EmploymentType::Temporary,
        ] {
            assert_eq!(EmploymentType::parse(variant.as_str()), Some(variant));
        }
    }

    #[test]
    fn unknown_values_do_not_parse() {
        assert_eq!(AccountType::parse("administrator"), None);
        assert_eq!(LocationType::parse("onsite"), None);
        assert_eq!(EmploymentType::parse("freelance"), None);
    }

    #[test]
    fn serde_uses_the_wire_spelling() {
        let json = serde_json::to_string(&LocationType::OnSite).expect("serializes");
        assert_eq!(json, "\"on-site\"");
        let parsed: EmploymentType =
            serde_json::from_str("\"part-time\"").expect("deserializes");
        assert_eq!(parsed, EmploymentType::PartTime);
    }
}
