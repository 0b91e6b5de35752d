use crate::error::SimError;
use cellsim_data::CellKind;
use std::str::FromStr;

/// A seeding request written as `kind:x:y`, e.g. `pathogen:50:50`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnRequest {
    pub kind: CellKind,
    pub x: f64,
    pub y: f64,
}

impl FromStr for SpawnRequest {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(':');
        let (Some(kind), Some(x), Some(y), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(SimError::InvalidSpawn(s.to_string()));
        };
        let kind =
            CellKind::from_name(kind.trim()).ok_or_else(|| SimError::UnknownKind(kind.to_string()))?;
        let coord = |v: &str| {
            v.trim()
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .ok_or_else(|| SimError::InvalidSpawn(s.to_string()))
        };
        Ok(Self {
            kind,
            x: coord(x)?,
            y: coord(y)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_request() {
        let req: SpawnRequest = "pathogen:50:90.5".parse().unwrap();
        assert_eq!(req.kind, CellKind::Pathogen);
        assert_eq!((req.x, req.y), (50.0, 90.5));

        let req: SpawnRequest = "b:1:2".parse().unwrap();
        assert_eq!(req.kind, CellKind::Brain);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(matches!(
            "normal:1".parse::<SpawnRequest>(),
            Err(SimError::InvalidSpawn(_))
        ));
        assert!(matches!(
            "normal:1:2:3".parse::<SpawnRequest>(),
            Err(SimError::InvalidSpawn(_))
        ));
        assert!(matches!(
            "normal:x:2".parse::<SpawnRequest>(),
            Err(SimError::InvalidSpawn(_))
        ));
        assert!(matches!(
            "bone:1:2".parse::<SpawnRequest>(),
            Err(SimError::UnknownKind(_))
        ));
    }
}
