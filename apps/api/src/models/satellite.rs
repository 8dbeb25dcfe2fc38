use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::locator::{Point, Reading};

/// Single-precision coordinate exposed on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl From<Point> for Position {
    fn from(p: Point) -> Self {
        Self {
            x: p.x as f32,
            y: p.y as f32,
        }
    }
}

impl From<Position> for Point {
    fn from(p: Position) -> Self {
        Point::new(f64::from(p.x), f64::from(p.y))
    }
}

/// Latest distance and message received from a satellite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SatelliteReading {
    pub distance: f32,
    pub message: Vec<String>,
    pub received_at: DateTime<Utc>,
}

/// A fixed reference station and the last reading it reported, if any.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Satellite {
    pub name: String,
    pub position: Position,
    pub reading: Option<SatelliteReading>,
}

impl Satellite {
    pub fn new(name: impl Into<String>, x: f32, y: f32) -> Self {
        Self {
            name: name.into(),
            position: Position { x, y },
            reading: None,
        }
    }

    /// Replaces the stored reading; the position never changes.
    pub fn with_reading(mut self, distance: f32, message: Vec<String>) -> Self {
        self.reading = Some(SatelliteReading {
            distance,
            message,
            received_at: Utc::now(),
        });
        self
    }

    /// The stored reading as a circle for the solver.
    pub fn locator_reading(&self) -> Option<Reading> {
        self.reading
            .as_ref()
            .map(|r| Reading::new(self.position.into(), f64::from(r.distance)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_narrows_to_f32() {
        let p = Position::from(Point::new(426.400078125, -252.80015625));
        assert_eq!(p.x, 426.400078125_f64 as f32);
        assert_eq!(p.y, -252.80015625_f64 as f32);
    }

    #[test]
    fn test_locator_reading_requires_a_reading() {
        let sat = Satellite::new("kenobi", -500.0, -200.0);
        assert!(sat.locator_reading().is_none());

        let sat = sat.with_reading(927.75, vec!["este".to_string()]);
        let reading = sat.locator_reading().unwrap();
        assert_eq!(reading.center(), Point::new(-500.0, -200.0));
        assert_eq!(reading.distance(), 927.75);
    }
}
