use crate::constants::{ANGLE_MAX_DEGREES, N_RECORD_FIELDS, RECORD_FIELD_SEPARATOR};
use crate::error::{Field, LdsError};
use std::str::FromStr;

/// One `angle,distance,intensity,error_code` entry of a scan block, in the raw
/// units of the log (degrees, millimeters).
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Record {
    pub(crate) angle: f64,
    pub(crate) distance: f64,
    pub(crate) intensity: i32,
    pub(crate) error_code: i32,
}

fn parse_field<T: FromStr>(field: &str, token: &str) -> Result<T, LdsError> {
    field
        .parse()
        .map_err(|_| LdsError::MalformedRecord(token.to_string()))
}

pub(crate) fn parse_record(token: &str) -> Result<Record, LdsError> {
    let fields: Vec<&str> = token.split(RECORD_FIELD_SEPARATOR).collect();
    if fields.len() != N_RECORD_FIELDS {
        return Err(LdsError::MalformedRecord(token.to_string()));
    }

    let record = Record {
        angle: parse_field(fields[0], token)?,
        distance: parse_field(fields[1], token)?,
        intensity: parse_field(fields[2], token)?,
        error_code: parse_field(fields[3], token)?,
    };
    validate_record(&record)?;
    Ok(record)
}

pub(crate) fn validate_record(record: &Record) -> Result<(), LdsError> {
    if record.distance.is_nan() || record.distance < 0. {
        return Err(LdsError::InvalidValue {
            field: Field::Distance,
            value: record.distance,
        });
    }
    if !(0. ..=ANGLE_MAX_DEGREES).contains(&record.angle) {
        return Err(LdsError::InvalidValue {
            field: Field::Angle,
            value: record.angle,
        });
    }
    if record.intensity < 0 {
        return Err(LdsError::InvalidValue {
            field: Field::Intensity,
            value: record.intensity.into(),
        });
    }
    if record.error_code < 0 {
        return Err(LdsError::InvalidValue {
            field: Field::ErrorCode,
            value: record.error_code.into(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_record() {
        assert_eq!(
            parse_record("12,1500,230,0").unwrap(),
            Record {
                angle: 12.,
                distance: 1500.,
                intensity: 230,
                error_code: 0,
            }
        );
        assert_eq!(
            parse_record("359,0.5,0,8035").unwrap(),
            Record {
                angle: 359.,
                distance: 0.5,
                intensity: 0,
                error_code: 8035,
            }
        );
    }

    #[test]
    fn test_wrong_field_count() {
        assert!(matches!(
            parse_record("0,100,5"),
            Err(LdsError::MalformedRecord(token)) if token == "0,100,5"
        ));
        assert!(matches!(
            parse_record("0,100,5,0,1"),
            Err(LdsError::MalformedRecord(_))
        ));
        assert!(matches!(
            parse_record("AngleInDegrees"),
            Err(LdsError::MalformedRecord(_))
        ));
    }

    #[test]
    fn test_unparsable_field() {
        assert!(matches!(
            parse_record("zero,100,5,0"),
            Err(LdsError::MalformedRecord(_))
        ));
        // intensity and error code are integers
        assert!(matches!(
            parse_record("0,100,5.5,0"),
            Err(LdsError::MalformedRecord(_))
        ));
        assert!(matches!(
            parse_record("0,100,5,"),
            Err(LdsError::MalformedRecord(_))
        ));
    }

    #[test]
    fn test_validate_record() {
        assert!(matches!(
            parse_record("0,-1,5,0"),
            Err(LdsError::InvalidValue {
                field: Field::Distance,
                ..
            })
        ));
        assert!(matches!(
            parse_record("0,NaN,5,0"),
            Err(LdsError::InvalidValue {
                field: Field::Distance,
                ..
            })
        ));
        assert!(matches!(
            parse_record("-0.5,100,5,0"),
            Err(LdsError::InvalidValue {
                field: Field::Angle,
                ..
            })
        ));
        assert!(matches!(
            parse_record("359.5,100,5,0"),
            Err(LdsError::InvalidValue {
                field: Field::Angle,
                ..
            })
        ));
        assert!(matches!(
            parse_record("10,100,-5,0"),
            Err(LdsError::InvalidValue {
                field: Field::Intensity,
                value,
            }) if value == -5.
        ));
        assert!(matches!(
            parse_record("10,100,5,-1"),
            Err(LdsError::InvalidValue {
                field: Field::ErrorCode,
                ..
            })
        ));
    }

    #[test]
    fn test_error_messages() {
        let err = parse_record("0,-1,5,0").unwrap_err();
        assert_eq!(err.to_string(), "-1 is an invalid distance.");

        let err = parse_record("0,100,5,-2").unwrap_err();
        assert_eq!(err.to_string(), "-2 is an invalid error code.");

        let err = parse_record("0,100,5").unwrap_err();
        assert_eq!(err.to_string(), "0,100,5 could not be parsed.");
    }
}
