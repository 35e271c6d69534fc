//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod ffl_error_tests {
    use super::*;

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let ffl_error = FflError::from(json_error);

        match ffl_error {
            FflError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let ffl_error = FflError::from(io_error);

        match ffl_error {
            FflError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_invalid_header_error_conversion() {
        let header_error = reqwest::header::HeaderValue::from_str("invalid\nheader").unwrap_err();
        let ffl_error = FflError::from(header_error);

        match ffl_error {
            FflError::InvalidHeader(_) => (),
            _ => panic!("Expected InvalidHeader error variant"),
        }
    }

    #[test]
    fn test_parse_int_error_conversion() {
        let parse_error = "not_a_number".parse::<u16>().unwrap_err();
        let ffl_error = FflError::from(parse_error);

        match ffl_error {
            FflError::InvalidNumber(_) => (),
            _ => panic!("Expected InvalidNumber error variant"),
        }
    }

    #[test]
    fn test_csv_error_conversion() {
        let data = "a,b\n1,2,3\n";
        let mut rdr = csv::Reader::from_reader(data.as_bytes());
        let csv_error = rdr.records().next().unwrap().unwrap_err();

        match FflError::from(csv_error) {
            FflError::Csv(_) => (),
            _ => panic!("Expected Csv error variant"),
        }
    }

    #[test]
    fn test_missing_env_error() {
        let error = FflError::MissingEnv {
            env_var: "OPENAI_API_KEY".to_string(),
        };
        assert_eq!(error.to_string(), "OPENAI_API_KEY is missing");
    }

    #[test]
    fn test_missing_csv_column_lists_found_columns() {
        let error = FflError::MissingCsvColumn {
            column: "espn_id".to_string(),
            found: vec!["id".to_string(), "name".to_string()],
        };

        let error_string = error.to_string();
        assert!(error_string.contains("espn_id"));
        assert!(error_string.contains("\"name\""));
    }

    #[test]
    fn test_invalid_week_error() {
        let error = FflError::InvalidWeek { week: 19 };
        assert!(error.to_string().contains("19"));
    }

    #[test]
    fn test_invalid_league_id_error() {
        let error = FflError::InvalidLeagueId {
            value: "+123".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid league id: \"+123\" (expected digits only)"
        );
    }

    #[test]
    fn test_no_table_error() {
        assert_eq!(FflError::NoTable.to_string(), "No table found in page");
    }

    #[test]
    fn test_insufficient_quota_detection() {
        let quota = FflError::OpenAi {
            code: "insufficient_quota".to_string(),
            message: "You exceeded your current quota".to_string(),
        };
        let other = FflError::OpenAi {
            code: "invalid_api_key".to_string(),
            message: "Incorrect API key".to_string(),
        };

        assert!(quota.is_insufficient_quota());
        assert!(!other.is_insufficient_quota());
        assert!(!FflError::EmptyCsv.is_insufficient_quota());
    }

    #[test]
    fn test_error_source_chain() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let ffl_error = FflError::from(io_error);

        let error_trait: &dyn std::error::Error = &ffl_error;
        assert!(error_trait.source().is_some());
    }

    #[test]
    fn test_error_debug_formatting() {
        let debug_string = format!("{:?}", FflError::EmptyCsv);
        assert_eq!(debug_string, "EmptyCsv");
    }
}
