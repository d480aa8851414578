//! Parameter sets from JSON.

use crate::input::error::InputError;
use crate::types::parameters::Parameters;
use std::path::Path;

/// Parses a flat JSON object of parameters, e.g. `{"FPAR": 0.5, "Start_Date": "1979-01-01"}`.
pub fn parse_parameters(json: &str) -> Result<Parameters, InputError> {
    Ok(serde_json::from_str(json)?)
}

/// Reads a JSON parameter file, see [`parse_parameters`].
pub fn read_parameters(path: &Path) -> Result<Parameters, InputError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| InputError::ParameterRead(path.to_path_buf(), e))?;
    parse_parameters(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::parameters::keys;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_parameter_file() -> Result<(), Box<dyn std::error::Error>> {
        let mut file = NamedTempFile::new()?;
        write!(file, r#"{{"Elevation": 1100, "Latitude": 9.93, "Start_Date": "1979-01-01"}}"#)?;
        file.flush()?;

        let parameters = read_parameters(file.path())?;
        assert_eq!(parameters.number(keys::ELEVATION), Some(1100.0));
        assert!(parameters.date(keys::START_DATE).is_some());
        Ok(())
    }

    #[test]
    fn test_rejects_non_object() {
        assert!(matches!(
            parse_parameters("[1, 2, 3]"),
            Err(InputError::ParameterParse(_))
        ));
    }
}
