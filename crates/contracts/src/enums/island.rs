use serde::{Deserialize, Serialize};

/// Island group a quotation ships to. Decides which accessory catalog is
/// offered for the line items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Island {
    Jawa,
    Sumatera,
    Kalimantan,
    Sulawesi,
    BaliNusaTenggara,
    Maluku,
    Papua,
}

impl Island {
    /// Wire code, as used in query strings and JSON.
    pub fn code(&self) -> &'static str {
        match self {
            Island::Jawa => "jawa",
            Island::Sumatera => "sumatera",
            Island::Kalimantan => "kalimantan",
            Island::Sulawesi => "sulawesi",
            Island::BaliNusaTenggara => "bali_nusa_tenggara",
            Island::Maluku => "maluku",
            Island::Papua => "papua",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Island::Jawa => "Jawa",
            Island::Sumatera => "Sumatera",
            Island::Kalimantan => "Kalimantan",
            Island::Sulawesi => "Sulawesi",
            Island::BaliNusaTenggara => "Bali & Nusa Tenggara",
            Island::Maluku => "Maluku",
            Island::Papua => "Papua",
        }
    }

    pub fn all() -> [Island; 7] {
        [
            Island::Jawa,
            Island::Sumatera,
            Island::Kalimantan,
            Island::Sulawesi,
            Island::BaliNusaTenggara,
            Island::Maluku,
            Island::Papua,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|island| island.code() == code)
    }
}

impl std::fmt::Display for Island {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_matches_serde() {
        for island in Island::all() {
            let json = serde_json::to_string(&island).unwrap();
            assert_eq!(json, format!("\"{}\"", island.code()));
            assert_eq!(Island::from_code(island.code()), Some(island));
        }
        assert_eq!(Island::from_code("java"), None);
    }
}
