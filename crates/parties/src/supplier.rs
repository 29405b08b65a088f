use serde::{Deserialize, Serialize};

/// Who supplies a product.
///
/// None of the fields is validated and each may be absent. Every key is
/// still required in the persisted form (`null` is accepted, a missing key
/// is not).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Supplier {
    #[serde(rename = "codigo", deserialize_with = "Option::deserialize")]
    pub code: Option<String>,
    #[serde(rename = "nombre", deserialize_with = "Option::deserialize")]
    pub name: Option<String>,
    #[serde(rename = "contacto", deserialize_with = "Option::deserialize")]
    pub contact: Option<String>,
}

impl Supplier {
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        contact: impl Into<String>,
    ) -> Self {
        Self {
            code: Some(code.into()),
            name: Some(name.into()),
            contact: Some(contact.into()),
        }
    }

    /// A supplier with every field absent.
    pub fn unknown() -> Self {
        Self::default()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn contact(&self) -> Option<&str> {
        self.contact.as_deref()
    }

    /// Exact, case-sensitive match on the supplier name.
    pub fn is_named(&self, name: &str) -> bool {
        self.name.as_deref() == Some(name)
    }

    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl core::fmt::Display for Supplier {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Code: {} Name: {} Contact: {}",
            or_na(&self.code),
            or_na(&self.name),
            or_na(&self.contact)
        )
    }
}

/// Renders an absent field.
fn or_na(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or("n/a")
}
