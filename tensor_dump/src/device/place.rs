use std::fmt;

/// Where a buffer lives.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Place {
    Cpu,
    Device {
        device_type: String,
        device_id: usize,
    },
}

impl Place {
    pub fn device(
        device_type: impl Into<String>,
        device_id: usize,
    ) -> Self {
        Place::Device {
            device_type: device_type.into(),
            device_id,
        }
    }

    pub fn is_host(&self) -> bool {
        matches!(self, Place::Cpu)
    }
}

impl fmt::Display for Place {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Place::Cpu => write!(f, "Place(cpu)"),
            Place::Device {
                device_type,
                device_id,
            } => write!(f, "Place({device_type}:{device_id})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_display() {
        assert_eq!(Place::Cpu.to_string(), "Place(cpu)");
        assert_eq!(Place::device("gcu", 1).to_string(), "Place(gcu:1)");
        assert!(Place::Cpu.is_host());
        assert!(!Place::device("gpu", 0).is_host());
    }
}
