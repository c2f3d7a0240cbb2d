use crate::domain::common::{AggregateRoot, ApiResource, AuditFields};
use serde::{Deserialize, Serialize};

crate::aggregate_id!(EmployeeId);

/// Sales employee responsible for a quotation. Read-only here; employees
/// are managed in the HR system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    #[serde(default)]
    pub employee_code: String,
    pub full_name: String,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(flatten)]
    pub audit: AuditFields,
}

impl AggregateRoot for Employee {
    type Id = EmployeeId;

    fn id(&self) -> Option<Self::Id> {
        Some(self.id)
    }

    fn display_name(&self) -> String {
        match &self.position {
            Some(position) if !position.is_empty() => {
                format!("{} ({})", self.full_name, position)
            }
            _ => self.full_name.clone(),
        }
    }

    fn audit(&self) -> &AuditFields {
        &self.audit
    }

    fn aggregate_index() -> &'static str {
        "a005"
    }

    fn collection_name() -> &'static str {
        "employee"
    }

    fn element_name() -> &'static str {
        "Employee"
    }

    fn list_name() -> &'static str {
        "Employees"
    }
}

impl ApiResource for Employee {
    type Payload = ();

    const BASE_PATH: &'static str = "/employees";
}
