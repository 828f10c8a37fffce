// Equipment directory domain model

/// Sentinel id meaning "no equipment filter" — the directory always lists it first.
pub const ALL_EQUIPMENT_ID: &str = "";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquipmentOption {
    pub id: String,
    pub name: String,
}

impl EquipmentOption {
    pub fn new(id: String, name: String) -> Self {
        Self { id, name }
    }

    /// The sentinel entry that stands for every equipment at once.
    pub fn all_equipment() -> Self {
        Self {
            id: ALL_EQUIPMENT_ID.to_string(),
            name: "All equipment".to_string(),
        }
    }

    pub fn is_all(&self) -> bool {
        self.id == ALL_EQUIPMENT_ID
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_equipment_sentinel() {
        let sentinel = EquipmentOption::all_equipment();
        assert!(sentinel.is_all());
        assert_eq!(sentinel.name, "All equipment");

        let machine = EquipmentOption::new("MCH001".to_string(), "CNC Mill 1".to_string());
        assert!(!machine.is_all());
    }
}
