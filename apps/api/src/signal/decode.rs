//! Combines the locator and the message merger into one response.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::locator::{solve, Reading};
use crate::message::merge;
use crate::models::satellite::{Position, Satellite};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopSecretResponse {
    pub position: Position,
    pub message: String,
}

/// Locates the source and recovers the message from the satellites that carry a
/// reading, in the order given. Exactly three readings are required.
///
/// Solver and merge failures are surfaced as errors; there is no fallback
/// coordinate.
pub fn decode(satellites: &[Satellite], tolerance: f64) -> Result<TopSecretResponse, AppError> {
    let reporting: Vec<(Reading, &[String])> = satellites
        .iter()
        .filter_map(|s| {
            let message = s.reading.as_ref()?.message.as_slice();
            Some((s.locator_reading()?, message))
        })
        .collect();

    let [(ra, ma), (rb, mb), (rc, mc)] = match reporting.as_slice() {
        [a, b, c] => [*a, *b, *c],
        s if s.len() < 3 => return Err(AppError::NotEnoughData),
        s => {
            return Err(AppError::Validation(format!(
                "exactly three satellite readings are required, got {}",
                s.len()
            )))
        }
    };

    let point = solve(&ra, &rb, &rc, tolerance)?;
    let message = merge(ma, mb, mc)?;

    Ok(TopSecretResponse {
        position: point.into(),
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locator::LocateError;
    use crate::registry::default_satellites;

    fn words(ws: &[&str]) -> Vec<String> {
        ws.iter().map(|w| w.to_string()).collect()
    }

    fn reference_satellites() -> Vec<Satellite> {
        let mut sats = default_satellites().into_iter();
        vec![
            sats.next()
                .unwrap()
                .with_reading(927.75, words(&["este", "", "", "mensaje", ""])),
            sats.next()
                .unwrap()
                .with_reading(360.0, words(&["", "es", "", "", "secreto"])),
            sats.next()
                .unwrap()
                .with_reading(360.0, words(&["este", "", "un", "", ""])),
        ]
    }

    #[test]
    fn test_decodes_reference_readings() {
        let resp = decode(&reference_satellites(), 10.0).unwrap();
        assert!((resp.position.x - 426.4).abs() < 0.1);
        assert!((resp.position.y - -252.8).abs() < 0.1);
        assert_eq!(resp.message, "este es un mensaje secreto");
    }

    #[test]
    fn test_skips_satellites_without_reading() {
        let mut sats = reference_satellites();
        sats.insert(1, Satellite::new("idle", 0.0, 0.0));
        assert!(decode(&sats, 10.0).is_ok());
    }

    #[test]
    fn test_two_readings_are_not_enough() {
        let mut sats = reference_satellites();
        sats[2].reading = None;
        assert!(matches!(decode(&sats, 10.0), Err(AppError::NotEnoughData)));
    }

    #[test]
    fn test_four_readings_are_rejected() {
        let mut sats = reference_satellites();
        sats.push(Satellite::new("extra", 1.0, 1.0).with_reading(1.0, words(&["x"])));
        assert!(matches!(decode(&sats, 10.0), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_tight_tolerance_surfaces_residual_failure() {
        let err = decode(&reference_satellites(), 0.01).unwrap_err();
        assert!(matches!(
            err,
            AppError::Locate(LocateError::ResidualTooLarge { .. })
        ));
    }

    #[test]
    fn test_blank_messages_are_undecodable() {
        let sats: Vec<Satellite> = reference_satellites()
            .into_iter()
            .map(|s| {
                let distance = s.reading.as_ref().unwrap().distance;
                s.with_reading(distance, words(&["", ""]))
            })
            .collect();
        assert!(matches!(decode(&sats, 10.0), Err(AppError::Message(_))));
    }
}
