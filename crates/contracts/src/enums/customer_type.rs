use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerType {
    #[default]
    Company,
    Individual,
}

impl CustomerType {
    pub fn code(&self) -> &'static str {
        match self {
            CustomerType::Company => "company",
            CustomerType::Individual => "individual",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CustomerType::Company => "Company",
            CustomerType::Individual => "Individual",
        }
    }

    pub fn all() -> [CustomerType; 2] {
        [CustomerType::Company, CustomerType::Individual]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "company" => Some(CustomerType::Company),
            "individual" => Some(CustomerType::Individual),
            _ => None,
        }
    }
}
