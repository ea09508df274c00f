//! The process-wide holder can only be loaded once per test binary, so the
//! whole lifecycle lives in a single test.

use coffeeshop_config::{ConfigurationError, NotInitializedError};
use figment::Jail;

#[test]
fn test_process_wide_lifecycle() {
    Jail::expect_with(|_jail| {
        assert_eq!(coffeeshop_config::get().unwrap_err(), NotInitializedError);

        let err = coffeeshop_config::load("staging-typo").unwrap_err();
        assert!(matches!(
            err,
            ConfigurationError::UnknownTarget { ref target, .. } if target == "staging-typo"
        ));
        assert_eq!(coffeeshop_config::get().unwrap_err(), NotInitializedError);

        let loaded = coffeeshop_config::load("development").unwrap();
        assert_eq!(loaded.api_server_url, "http://127.0.0.1:5000");
        assert_eq!(loaded.auth.client_id, "CDWsr2U0UV7IjKzLdjKihi9OPqIy4XR5");
        assert!(!loaded.is_production);

        let read = coffeeshop_config::get().unwrap();
        assert_eq!(read, loaded);

        let err = coffeeshop_config::load("production").unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::AlreadyLoaded {
                target: "development".to_string()
            }
        );
        assert_eq!(coffeeshop_config::get().unwrap(), loaded);

        Ok(())
    });
}
