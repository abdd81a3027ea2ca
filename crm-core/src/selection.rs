use serde::{Deserialize, Serialize};

/// Employee row as handed over by the company admin view. Only `id` is
/// interpreted; every other column is carried through untouched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_id: Option<String>,
    #[serde(flatten)]
    pub fields: serde_json::Map<String, serde_json::Value>,
}

impl EmployeeRecord {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            company_id: None,
            fields: serde_json::Map::new(),
        }
    }

    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(serde_json::Value::as_str)
    }
}

/// Transient reference data a detail view needs.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub company_id: Option<String>,
    pub employee: Option<EmployeeRecord>,
}

impl Selection {
    pub fn company(company_id: impl Into<String>) -> Self {
        Self {
            company_id: Some(company_id.into()),
            employee: None,
        }
    }

    /// Selects an employee; the company falls back to the record's own
    /// `company_id` when it has one.
    pub fn employee(employee: EmployeeRecord) -> Self {
        Self {
            company_id: employee.company_id.clone(),
            employee: Some(employee),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.company_id.is_none() && self.employee.is_none()
    }
}
