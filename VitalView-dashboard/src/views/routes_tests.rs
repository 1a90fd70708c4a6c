#[cfg(test)]
mod routes_tests {
    use serde_json::Value;

    use vital_view_domain::auth::{AuthError, CredentialGate, LoginRequest};
    use vital_view_domain::entities::{HistoryFilter, VitalSignStatus, VitalSignType};
    use vital_view_domain::services::VitalSignsServiceError;
    use vital_view_domain::testing::{fixture_repository, FIXTURE_ALERTS};

    use crate::config::DashboardConfig;
    use crate::error::DashboardError;
    use crate::views::handlers::PatientsQuery;
    use crate::views::{create_application, DashboardApp, View};

    fn logged_in_app() -> DashboardApp {
        let mut app = DashboardApp::with_repository(fixture_repository(), CredentialGate::default());
        app.login(&LoginRequest::new("doctor@example.com", "password")).unwrap();
        app
    }

    #[test]
    fn test_views_require_login() {
        let app = DashboardApp::with_repository(fixture_repository(), CredentialGate::default());

        for view in [View::Dashboard, View::Alerts, View::History(HistoryFilter::default())] {
            let err = app.render(&view).unwrap_err();
            assert_eq!(err.code(), "login_required");
        }
    }

    #[test]
    fn test_failed_login_keeps_views_locked() {
        let mut app = DashboardApp::with_repository(fixture_repository(), CredentialGate::default());

        let err = app
            .login(&LoginRequest::new("doctor@example.com", "wrong"))
            .unwrap_err();
        assert!(matches!(err, DashboardError::Auth(AuthError::InvalidCredentials)));
        assert!(!app.is_authenticated());
        assert!(app.render(&View::Alerts).is_err());
    }

    #[test]
    fn test_logout_locks_views_again() {
        let mut app = logged_in_app();
        assert!(app.render(&View::Alerts).is_ok());

        app.logout();
        assert_eq!(app.render(&View::Alerts).unwrap_err().code(), "login_required");
    }

    #[test]
    fn test_render_alerts() {
        let body = logged_in_app().render(&View::Alerts).unwrap();
        assert_eq!(body["warning"], FIXTURE_ALERTS.warning);
        assert_eq!(body["critical"], FIXTURE_ALERTS.critical);
        assert_eq!(body["total"], 4);
        assert_eq!(body["message"], "4 active alerts");
    }

    #[test]
    fn test_rendered_alerts_match_service_counts() {
        let app = logged_in_app();
        let counts = app.service().get_alert_counts();
        assert_eq!(counts, FIXTURE_ALERTS);

        let body = app.render(&View::Alerts).unwrap();
        assert_eq!(body["total"], counts.total());
    }

    #[test]
    fn test_render_dashboard() {
        let body = logged_in_app().render(&View::Dashboard).unwrap();
        assert_eq!(body["total_patients"], 5);
        assert_eq!(body["total_alerts"], 4);
        assert_eq!(body["attention"][0]["patient_id"], "3");
        assert_eq!(body["attention"][0]["status"], "critical");
    }

    #[test]
    fn test_render_patient_list_with_search() {
        let app = logged_in_app();
        let body = app
            .render(&View::Patients(PatientsQuery {
                search: Some("P-10004".to_string()),
            }))
            .unwrap();

        assert_eq!(body["total"], 1);
        assert_eq!(body["filter"]["search"], "P-10004");
        assert_eq!(body["data"][0]["name"], "Sophie iot");
        assert_eq!(body["data"][0]["initials"], "SI");
    }

    #[test]
    fn test_render_unknown_patient() {
        let err = logged_in_app()
            .render(&View::Patient { id: "42".to_string() })
            .unwrap_err();
        assert!(matches!(
            err,
            DashboardError::Service(VitalSignsServiceError::PatientNotFound(ref id)) if id == "42"
        ));
        assert_eq!(err.to_response().error, "patient_not_found");
    }

    #[test]
    fn test_render_history_filter() {
        let filter = HistoryFilter {
            patient_id: None,
            kind: Some(VitalSignType::Temperature),
            status: Some(VitalSignStatus::Normal),
        };
        let body = logged_in_app().render(&View::History(filter)).unwrap();

        let rows = body["data"].as_array().unwrap();
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|row| row["type"] == "temperature" && row["status"] == "normal"));
        assert_eq!(body["filter"]["type"], "temperature");
    }

    #[test]
    fn test_create_application_from_config() {
        let config = DashboardConfig {
            seed: Some(7),
            history_days: 3,
            ..DashboardConfig::default()
        };
        let mut app = create_application(&config).unwrap();
        app.login(&LoginRequest::new("doctor@example.com", "password")).unwrap();

        let body: Value = app.render(&View::History(HistoryFilter::default())).unwrap();
        // 5 patients, 5 categories, 3 days
        assert_eq!(body["total"], 75);
    }

    #[test]
    fn test_create_application_rejects_zero_days() {
        let config = DashboardConfig {
            history_days: 0,
            ..DashboardConfig::default()
        };
        let err = create_application(&config).unwrap_err();
        assert_eq!(err.code(), "invalid_configuration");
    }
}
