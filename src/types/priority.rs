use serde::{Deserialize, Serialize};

/// Priority level attached to assignments and study tasks.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Low priority.
    Low,

    /// Medium priority.
    Medium,

    /// High priority.
    High,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercase_wire_form() {
        assert_eq!(serde_json::to_string(&Priority::High).unwrap(), "\"high\"");
        let p: Priority = serde_json::from_str("\"medium\"").unwrap();
        assert_eq!(p, Priority::Medium);
    }
}
